mod beads;
mod intentions;
mod login;
mod prayer;
mod rosary;
mod sidebar;
mod state;
mod toast;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use rosary::RosaryView;
pub use state::{ViewError, ViewState, view_state_from_resource};
