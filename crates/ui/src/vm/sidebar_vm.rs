use rosary_core::content::content_for;
use rosary_core::model::Section;
use services::ProgressSnapshot;

use crate::vm::progress_vm::{BeadVm, map_beads};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarEntryVm {
    pub section: Section,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub is_current: bool,
    pub is_today: bool,
    /// Only mystery sections carry beads.
    pub beads: Option<Vec<BeadVm>>,
}

#[must_use]
pub fn map_sidebar_entries(snapshot: &ProgressSnapshot, today: Section) -> Vec<SidebarEntryVm> {
    Section::ALL
        .into_iter()
        .map(|section| {
            let content = content_for(section);
            SidebarEntryVm {
                section,
                title: content.title,
                subtitle: content.subtitle,
                is_current: section == snapshot.current,
                is_today: section == today,
                beads: snapshot
                    .section(section)
                    .map(|p| map_beads(p.position, p.total)),
            }
        })
        .collect()
}
