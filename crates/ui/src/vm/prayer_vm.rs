use rosary_core::content::{DECADE_PRAYERS, OFFERTORY_TITLE, Part, content_for};
use rosary_core::model::Section;
use services::ProgressSnapshot;

use crate::vm::progress_vm::{MysteryProgressVm, NavVm, map_mystery_progress, map_nav};

/// Everything the prayer pane renders for the current section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrayerPageVm {
    pub section: Section,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub latin: &'static str,
    pub mystery: Option<MysteryProgressVm>,
    pub parts: Vec<Part>,
    /// Index into `parts` after which the user's intentions are listed.
    pub intentions_after: Option<usize>,
    pub nav: NavVm,
}

#[must_use]
pub fn map_prayer_page(snapshot: &ProgressSnapshot) -> PrayerPageVm {
    let content = content_for(snapshot.current);
    let parts: Vec<Part> = match snapshot.current_section() {
        // One mystery at a time, followed by its decade.
        Some(progress) => content
            .part(progress.sub_index)
            .into_iter()
            .copied()
            .chain(DECADE_PRAYERS)
            .collect(),
        None => content.parts.to_vec(),
    };
    let intentions_after = parts.iter().position(|p| p.title == OFFERTORY_TITLE);

    PrayerPageVm {
        section: snapshot.current,
        title: content.title,
        subtitle: content.subtitle,
        latin: content.latin,
        mystery: map_mystery_progress(snapshot),
        parts,
        intentions_after,
        nav: map_nav(snapshot),
    }
}
