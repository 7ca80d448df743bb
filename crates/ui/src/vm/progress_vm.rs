use rosary_core::model::Section;
use services::ProgressSnapshot;

/// Labels and enabled state of the previous/next controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavVm {
    pub previous_label: &'static str,
    pub next_label: &'static str,
    pub previous_disabled: bool,
    pub next_disabled: bool,
}

/// Within a mystery section the buttons step between mysteries; at its ends
/// (and everywhere else) they move between sections.
#[must_use]
pub fn map_nav(snapshot: &ProgressSnapshot) -> NavVm {
    let section = snapshot.current;
    let count = snapshot.progress.count(section);
    let mystery = section.is_mystery();
    let last_index = section
        .sub_section_count()
        .map_or(0, |total| total.saturating_sub(1));

    NavVm {
        previous_label: if mystery && count > 0 {
            "Previous"
        } else {
            "Previous Section"
        },
        next_label: if mystery && count < last_index {
            "Next"
        } else {
            "Next Section"
        },
        previous_disabled: section == Section::Initium,
        next_disabled: section == Section::Ultima,
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BeadVm {
    pub index: usize,
    pub filled: bool,
}

/// `total` beads with the first `filled` lit.
#[must_use]
pub fn map_beads(filled: u8, total: u8) -> Vec<BeadVm> {
    (0..usize::from(total))
        .map(|index| BeadVm {
            index,
            filled: index < usize::from(filled),
        })
        .collect()
}

/// "X of N" header for the current mystery section.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MysteryProgressVm {
    pub label: String,
    pub beads: Vec<BeadVm>,
}

#[must_use]
pub fn map_mystery_progress(snapshot: &ProgressSnapshot) -> Option<MysteryProgressVm> {
    let current = snapshot.current_section()?;
    Some(MysteryProgressVm {
        label: format!("{} of {}", current.position, current.total),
        beads: map_beads(current.position, current.total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rosary_core::progress::SectionProgressTracker;

    fn snapshot_at(section: Section, count: usize) -> ProgressSnapshot {
        let mut tracker = SectionProgressTracker::default();
        tracker.select(section);
        for _ in 0..count {
            tracker.advance(section);
        }
        ProgressSnapshot::from_tracker(&tracker)
    }

    #[test]
    fn initium_disables_previous_only() {
        let nav = map_nav(&snapshot_at(Section::Initium, 0));
        assert_eq!(nav.previous_label, "Previous Section");
        assert_eq!(nav.next_label, "Next Section");
        assert!(nav.previous_disabled);
        assert!(!nav.next_disabled);
    }

    #[test]
    fn mystery_labels_follow_the_count() {
        let start = map_nav(&snapshot_at(Section::Gaudiosa, 0));
        assert_eq!((start.previous_label, start.next_label), ("Previous Section", "Next"));

        let middle = map_nav(&snapshot_at(Section::Gaudiosa, 2));
        assert_eq!((middle.previous_label, middle.next_label), ("Previous", "Next"));

        let fourth = map_nav(&snapshot_at(Section::Gaudiosa, 4));
        assert_eq!(fourth.next_label, "Next Section");

        let done = map_nav(&snapshot_at(Section::Gaudiosa, 5));
        assert_eq!((done.previous_label, done.next_label), ("Previous", "Next Section"));
        assert!(!done.previous_disabled && !done.next_disabled);
    }

    #[test]
    fn ultima_disables_next_only() {
        let nav = map_nav(&snapshot_at(Section::Ultima, 0));
        assert!(!nav.previous_disabled);
        assert!(nav.next_disabled);
    }

    #[test]
    fn header_counts_from_one_and_caps_at_total() {
        let fresh = map_mystery_progress(&snapshot_at(Section::Dolorosa, 0)).unwrap();
        assert_eq!(fresh.label, "1 of 5");
        assert_eq!(fresh.beads.iter().filter(|b| b.filled).count(), 1);

        let full = map_mystery_progress(&snapshot_at(Section::Dolorosa, 5)).unwrap();
        assert_eq!(full.label, "5 of 5");
        assert!(full.beads.iter().all(|b| b.filled));

        assert!(map_mystery_progress(&snapshot_at(Section::Ultima, 0)).is_none());
    }
}
