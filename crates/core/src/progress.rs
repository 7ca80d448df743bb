//! Per-section progress through the mysteries and the navigation state machine
//! built on top of it.
//!
//! Counts live in `[0, max]` where `max` is the section's sub-section count.
//! A count of `max` means every mystery of the section has been prayed; the
//! displayed mystery is clamped to the last one in that case.

use serde::{Deserialize, Serialize};

use crate::model::Section;

/// Completed sub-section count per mystery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawProgress", into = "RawProgress")]
pub struct ProgressMap {
    counts: [u8; 3],
}

/// Wire shape of the progress blob. Missing or null entries load as zero and
/// unknown keys are ignored.
#[derive(Serialize, Deserialize)]
struct RawProgress {
    #[serde(default)]
    gaudiosa: Option<i64>,
    #[serde(default)]
    dolorosa: Option<i64>,
    #[serde(default)]
    gloriosa: Option<i64>,
}

impl From<RawProgress> for ProgressMap {
    fn from(raw: RawProgress) -> Self {
        let mut map = ProgressMap::new();
        map.set(Section::Gaudiosa, raw.gaudiosa.unwrap_or(0));
        map.set(Section::Dolorosa, raw.dolorosa.unwrap_or(0));
        map.set(Section::Gloriosa, raw.gloriosa.unwrap_or(0));
        map
    }
}

impl From<ProgressMap> for RawProgress {
    fn from(map: ProgressMap) -> Self {
        Self {
            gaudiosa: Some(i64::from(map.count(Section::Gaudiosa))),
            dolorosa: Some(i64::from(map.count(Section::Dolorosa))),
            gloriosa: Some(i64::from(map.count(Section::Gloriosa))),
        }
    }
}

const fn slot(section: Section) -> Option<usize> {
    match section {
        Section::Gaudiosa => Some(0),
        Section::Dolorosa => Some(1),
        Section::Gloriosa => Some(2),
        Section::Initium | Section::Ultima => None,
    }
}

impl ProgressMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Upper bound of the counter for `section` (zero for non-mystery sections).
    #[must_use]
    pub fn max_count(section: Section) -> u8 {
        section.sub_section_count().unwrap_or(0)
    }

    #[must_use]
    pub fn count(&self, section: Section) -> u8 {
        slot(section).map_or(0, |idx| self.counts[idx])
    }

    /// Index of the sub-section to display: `min(count, last index)`.
    #[must_use]
    pub fn current_sub_index(&self, section: Section) -> usize {
        let last = Self::max_count(section).saturating_sub(1);
        usize::from(self.count(section).min(last))
    }

    /// 1-based position for "X of N" text.
    #[must_use]
    pub fn display_position(&self, section: Section) -> u8 {
        self.count(section)
            .saturating_add(1)
            .min(Self::max_count(section))
    }

    #[must_use]
    pub fn is_complete(&self, section: Section) -> bool {
        let max = Self::max_count(section);
        max > 0 && self.count(section) == max
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, u8)> + '_ {
        Section::MYSTERIES
            .into_iter()
            .map(move |section| (section, self.count(section)))
    }

    /// Store a clamped count. Non-mystery sections are ignored.
    fn set(&mut self, section: Section, raw: i64) -> u8 {
        let Some(idx) = slot(section) else {
            return 0;
        };
        let max = Self::max_count(section);
        let clamped = u8::try_from(raw.clamp(0, i64::from(max))).unwrap_or(max);
        self.counts[idx] = clamped;
        clamped
    }
}

/// Which end of the section list navigation ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Start,
    End,
}

/// Outcome of a tracker transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A counter moved; carries the new count.
    Counted { section: Section, count: u8 },
    /// The current top-level section changed.
    Crossed { from: Section, to: Section },
    /// Navigation tried to move past the first or last section.
    Boundary(Edge),
    Unchanged,
}

impl Step {
    /// True when the progress map was modified and should be persisted.
    #[must_use]
    pub fn changes_progress(self) -> bool {
        matches!(self, Step::Counted { .. })
    }
}

/// Current top-level section plus per-section counters, mutated only through
/// the named transitions below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionProgressTracker {
    current: Section,
    progress: ProgressMap,
}

impl Default for SectionProgressTracker {
    fn default() -> Self {
        Self::new(ProgressMap::default())
    }
}

impl SectionProgressTracker {
    #[must_use]
    pub fn new(progress: ProgressMap) -> Self {
        Self {
            current: Section::Initium,
            progress,
        }
    }

    #[must_use]
    pub fn current(&self) -> Section {
        self.current
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressMap {
        &self.progress
    }

    #[must_use]
    pub fn count(&self, section: Section) -> u8 {
        self.progress.count(section)
    }

    #[must_use]
    pub fn current_sub_index(&self, section: Section) -> usize {
        self.progress.current_sub_index(section)
    }

    /// Count one more mystery of `section`, or move on to the section after
    /// it once the counter is full (or the section has no counter).
    pub fn advance(&mut self, section: Section) -> Step {
        let count = self.progress.count(section);
        if count < ProgressMap::max_count(section) {
            let count = self.progress.set(section, i64::from(count) + 1);
            return Step::Counted { section, count };
        }
        self.cross_after(section)
    }

    /// Step back one mystery of `section`, or move to the section before it
    /// once the counter is at zero.
    pub fn retreat(&mut self, section: Section) -> Step {
        let count = self.progress.count(section);
        if section.is_mystery() && count > 0 {
            let count = self.progress.set(section, i64::from(count) - 1);
            return Step::Counted { section, count };
        }
        self.cross_before(section)
    }

    /// Point the counter of `section` at sub-section `index`. Indices past the
    /// last sub-section are clamped to it.
    pub fn jump_to(&mut self, section: Section, index: usize) -> Step {
        let max = ProgressMap::max_count(section);
        if max == 0 {
            return Step::Unchanged;
        }
        let last = usize::from(max - 1);
        let target = i64::try_from(index.min(last)).unwrap_or(0);
        if i64::from(self.progress.count(section)) == target {
            return Step::Unchanged;
        }
        let count = self.progress.set(section, target);
        Step::Counted { section, count }
    }

    /// `advance` applied to the current section.
    pub fn next(&mut self) -> Step {
        self.advance(self.current)
    }

    /// `retreat` applied to the current section.
    pub fn previous(&mut self) -> Step {
        self.retreat(self.current)
    }

    /// Switch the current section without touching any counter.
    pub fn select(&mut self, section: Section) -> Step {
        if section == self.current {
            return Step::Unchanged;
        }
        let from = std::mem::replace(&mut self.current, section);
        Step::Crossed { from, to: section }
    }

    fn cross_after(&mut self, from: Section) -> Step {
        match from.next() {
            Some(to) => {
                self.current = to;
                Step::Crossed { from, to }
            }
            None => Step::Boundary(Edge::End),
        }
    }

    fn cross_before(&mut self, from: Section) -> Step {
        match from.previous() {
            Some(to) => {
                self.current = to;
                Step::Crossed { from, to }
            }
            None => Step::Boundary(Edge::Start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker_with(section: Section, count: u8) -> SectionProgressTracker {
        let mut tracker = SectionProgressTracker::default();
        for _ in 0..count {
            tracker.advance(section);
        }
        tracker
    }

    #[test]
    fn sub_index_never_exceeds_last_mystery() {
        for section in Section::ALL {
            for count in 0..=5 {
                let tracker = tracker_with(section, count);
                assert!(tracker.current_sub_index(section) <= 4);
            }
        }
    }

    #[test]
    fn five_advances_complete_a_section() {
        let mut tracker = SectionProgressTracker::default();
        tracker.select(Section::Gaudiosa);
        for expected in 1..=5 {
            assert_eq!(
                tracker.advance(Section::Gaudiosa),
                Step::Counted {
                    section: Section::Gaudiosa,
                    count: expected
                }
            );
        }
        assert_eq!(tracker.count(Section::Gaudiosa), 5);
        assert_eq!(tracker.current_sub_index(Section::Gaudiosa), 4);
        assert_eq!(tracker.progress().display_position(Section::Gaudiosa), 5);
        assert!(tracker.progress().is_complete(Section::Gaudiosa));
    }

    #[test]
    fn advance_at_five_crosses_without_counting() {
        let mut tracker = tracker_with(Section::Dolorosa, 5);
        let before = *tracker.progress();
        let step = tracker.advance(Section::Dolorosa);
        assert_eq!(
            step,
            Step::Crossed {
                from: Section::Dolorosa,
                to: Section::Gloriosa
            }
        );
        assert_eq!(*tracker.progress(), before);
        assert_eq!(tracker.current(), Section::Gloriosa);
    }

    #[test]
    fn advance_is_monotonic_until_full() {
        let mut tracker = SectionProgressTracker::default();
        let mut last = 0;
        for _ in 0..12 {
            tracker.advance(Section::Gloriosa);
            let now = tracker.count(Section::Gloriosa);
            assert!(now >= last);
            assert!(now <= 5);
            last = now;
        }
        assert_eq!(last, 5);
    }

    #[test]
    fn retreat_is_monotonic_until_zero() {
        let mut tracker = tracker_with(Section::Gaudiosa, 3);
        let mut last = 3;
        for _ in 0..6 {
            tracker.retreat(Section::Gaudiosa);
            let now = tracker.count(Section::Gaudiosa);
            assert!(now <= last);
            last = now;
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn retreat_at_zero_crosses_back() {
        let mut tracker = SectionProgressTracker::default();
        tracker.select(Section::Gaudiosa);
        assert_eq!(
            tracker.retreat(Section::Gaudiosa),
            Step::Crossed {
                from: Section::Gaudiosa,
                to: Section::Initium
            }
        );
        assert_eq!(tracker.count(Section::Gaudiosa), 0);
    }

    #[test]
    fn non_mystery_sections_cross_immediately() {
        let mut tracker = SectionProgressTracker::default();
        assert_eq!(
            tracker.next(),
            Step::Crossed {
                from: Section::Initium,
                to: Section::Gaudiosa
            }
        );
        assert_eq!(tracker.previous(), Step::Crossed {
            from: Section::Gaudiosa,
            to: Section::Initium
        });
        assert_eq!(tracker.previous(), Step::Boundary(Edge::Start));
        assert_eq!(tracker.current(), Section::Initium);
    }

    #[test]
    fn end_of_rosary_is_a_boundary() {
        let mut tracker = SectionProgressTracker::default();
        tracker.select(Section::Ultima);
        assert_eq!(tracker.next(), Step::Boundary(Edge::End));
        assert_eq!(tracker.current(), Section::Ultima);
    }

    #[test]
    fn full_walk_through_the_rosary() {
        let mut tracker = SectionProgressTracker::default();
        let mut steps = 0;
        while tracker.next() != Step::Boundary(Edge::End) {
            steps += 1;
            assert!(steps < 100, "walk did not terminate");
        }
        // initium -> gaudiosa, 5 counts + cross for each of three mysteries
        assert_eq!(steps, 1 + 3 * 6);
        for section in Section::MYSTERIES {
            assert!(tracker.progress().is_complete(section));
        }
    }

    #[test]
    fn jump_sets_and_clamps() {
        let mut tracker = SectionProgressTracker::default();
        assert_eq!(
            tracker.jump_to(Section::Dolorosa, 2),
            Step::Counted {
                section: Section::Dolorosa,
                count: 2
            }
        );
        assert_eq!(tracker.jump_to(Section::Dolorosa, 2), Step::Unchanged);
        assert_eq!(
            tracker.jump_to(Section::Dolorosa, 99),
            Step::Counted {
                section: Section::Dolorosa,
                count: 4
            }
        );
        assert_eq!(tracker.jump_to(Section::Ultima, 1), Step::Unchanged);
        assert_eq!(tracker.current(), Section::Initium);
    }

    #[test]
    fn select_keeps_counters() {
        let mut tracker = tracker_with(Section::Gaudiosa, 2);
        let before = *tracker.progress();
        assert_eq!(tracker.select(Section::Initium), Step::Unchanged);
        assert!(matches!(tracker.select(Section::Gloriosa), Step::Crossed { .. }));
        assert_eq!(*tracker.progress(), before);
    }

    #[test]
    fn display_position_is_one_based_and_capped() {
        let tracker = tracker_with(Section::Gaudiosa, 0);
        assert_eq!(tracker.progress().display_position(Section::Gaudiosa), 1);
        let tracker = tracker_with(Section::Gaudiosa, 4);
        assert_eq!(tracker.progress().display_position(Section::Gaudiosa), 5);
        assert_eq!(tracker.progress().display_position(Section::Initium), 0);
    }

    #[test]
    fn progress_map_round_trips_through_json() {
        let tracker = tracker_with(Section::Gloriosa, 3);
        let json = serde_json::to_string(tracker.progress()).unwrap();
        let back: ProgressMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, *tracker.progress());
    }

    #[test]
    fn progress_blob_uses_section_keys() {
        let tracker = tracker_with(Section::Dolorosa, 2);
        let json = serde_json::to_value(tracker.progress()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"gaudiosa": 0, "dolorosa": 2, "gloriosa": 0})
        );
    }

    #[test]
    fn loading_clamps_and_defaults() {
        let map: ProgressMap =
            serde_json::from_str(r#"{"gaudiosa": -3, "gloriosa": 17, "initium": 2}"#).unwrap();
        assert_eq!(map.count(Section::Gaudiosa), 0);
        assert_eq!(map.count(Section::Dolorosa), 0);
        assert_eq!(map.count(Section::Gloriosa), 5);
        assert_eq!(map.count(Section::Initium), 0);

        let map: ProgressMap = serde_json::from_str(r#"{"dolorosa": null}"#).unwrap();
        assert_eq!(map, ProgressMap::new());
    }

    #[test]
    fn only_counted_steps_change_progress() {
        assert!(
            Step::Counted {
                section: Section::Gaudiosa,
                count: 1
            }
            .changes_progress()
        );
        assert!(!Step::Unchanged.changes_progress());
        assert!(!Step::Boundary(Edge::End).changes_progress());
    }
}
