mod auth_vm;
mod prayer_vm;
mod progress_vm;
mod sidebar_vm;
mod time_fmt;

pub use auth_vm::{AuthForm, AuthMode, submit_auth};
pub use prayer_vm::{PrayerPageVm, map_prayer_page};
pub use progress_vm::{BeadVm, MysteryProgressVm, NavVm, map_beads, map_mystery_progress, map_nav};
pub use sidebar_vm::{SidebarEntryVm, map_sidebar_entries};
pub use time_fmt::format_date;
