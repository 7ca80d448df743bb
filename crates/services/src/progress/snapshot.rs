use rosary_core::model::Section;
use rosary_core::progress::{ProgressMap, SectionProgressTracker};

/// Counter state of one mystery section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionProgress {
    pub section: Section,
    pub count: u8,
    /// 0-based mystery currently shown.
    pub sub_index: usize,
    /// 1-based position for "X of N" text.
    pub position: u8,
    pub total: u8,
    pub is_complete: bool,
}

/// Presentation-agnostic copy of the tracker state.
///
/// Holds no formatted strings; the UI decides labels and wording.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    pub current: Section,
    pub progress: ProgressMap,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn from_tracker(tracker: &SectionProgressTracker) -> Self {
        Self {
            current: tracker.current(),
            progress: *tracker.progress(),
        }
    }

    /// `None` for sections without a counter.
    #[must_use]
    pub fn section(&self, section: Section) -> Option<SectionProgress> {
        let total = section.sub_section_count()?;
        Some(SectionProgress {
            section,
            count: self.progress.count(section),
            sub_index: self.progress.current_sub_index(section),
            position: self.progress.display_position(section),
            total,
            is_complete: self.progress.is_complete(section),
        })
    }

    #[must_use]
    pub fn current_section(&self) -> Option<SectionProgress> {
        self.section(self.current)
    }

    #[must_use]
    pub fn mysteries(&self) -> Vec<SectionProgress> {
        Section::MYSTERIES
            .into_iter()
            .filter_map(|section| self.section(section))
            .collect()
    }
}
