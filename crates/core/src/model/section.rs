use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of ordered sub-sections (mysteries) in every mystery section.
pub const MYSTERY_SUB_SECTIONS: u8 = 5;

/// Top-level sections of the rosary, in prayer order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Initium,
    Gaudiosa,
    Dolorosa,
    Gloriosa,
    Ultima,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown section: {raw}")]
pub struct ParseSectionError {
    raw: String,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Initium,
        Section::Gaudiosa,
        Section::Dolorosa,
        Section::Gloriosa,
        Section::Ultima,
    ];

    pub const MYSTERIES: [Section; 3] = [Section::Gaudiosa, Section::Dolorosa, Section::Gloriosa];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Section::Initium => "initium",
            Section::Gaudiosa => "gaudiosa",
            Section::Dolorosa => "dolorosa",
            Section::Gloriosa => "gloriosa",
            Section::Ultima => "ultima",
        }
    }

    #[must_use]
    pub const fn is_mystery(self) -> bool {
        matches!(self, Section::Gaudiosa | Section::Dolorosa | Section::Gloriosa)
    }

    /// Number of sequentially navigated sub-sections, `None` for sections
    /// whose parts are all shown at once.
    #[must_use]
    pub const fn sub_section_count(self) -> Option<u8> {
        if self.is_mystery() {
            Some(MYSTERY_SUB_SECTIONS)
        } else {
            None
        }
    }

    /// Position in prayer order (0-based).
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Section::Initium => 0,
            Section::Gaudiosa => 1,
            Section::Dolorosa => 2,
            Section::Gloriosa => 3,
            Section::Ultima => 4,
        }
    }

    #[must_use]
    pub fn next(self) -> Option<Section> {
        Self::ALL.get(self.position() + 1).copied()
    }

    #[must_use]
    pub fn previous(self) -> Option<Section> {
        self.position()
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Mystery traditionally prayed on the given day.
    #[must_use]
    pub const fn for_weekday(weekday: Weekday) -> Section {
        match weekday {
            Weekday::Mon | Weekday::Sat => Section::Gaudiosa,
            Weekday::Tue | Weekday::Thu | Weekday::Fri => Section::Dolorosa,
            Weekday::Wed | Weekday::Sun => Section::Gloriosa,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = ParseSectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| ParseSectionError { raw: s.to_string() })
    }
}
