use thiserror::Error;

use crate::model::{IntentionTextError, ParseIdError, ParseSectionError, UserError};

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    User(#[from] UserError),
    #[error(transparent)]
    IntentionText(#[from] IntentionTextError),
    #[error(transparent)]
    Section(#[from] ParseSectionError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}
