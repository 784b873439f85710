//! Active-section tracking.
//!
//! The raw scroll offset is shifted down by [`SCROLL_LOOKAHEAD`] so a section
//! becomes current slightly before its top edge reaches the top of the
//! viewport (the sticky header covers that strip anyway). Sections are then
//! tested in [`SectionId::TRACKED`] order and the first one whose
//! `[top, top + height)` range holds the adjusted offset wins.

use crate::layout::SectionLayout;
use crate::section::SectionId;

/// Added to the raw scroll offset before the range checks
pub const SCROLL_LOOKAHEAD: f64 = 100.0;

/// Section under the adjusted reading position, if any.
///
/// Sections missing from `layout` are skipped. Overlapping ranges resolve to
/// the earliest section in priority order.
pub fn locate<L: SectionLayout + ?Sized>(scroll_y: f64, layout: &L) -> Option<SectionId> {
    let adjusted = scroll_y + SCROLL_LOOKAHEAD;
    SectionId::TRACKED.into_iter().find(|&section| {
        layout
            .bounds(section)
            .is_some_and(|bounds| bounds.contains(adjusted))
    })
}

/// The section currently highlighted in navigation.
///
/// Starts at [`SectionId::Home`] and only moves when a scroll offset lands
/// inside some tracked section; offsets outside every section keep the
/// previous value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveSection {
    current: SectionId,
}

impl ActiveSection {
    /// Tracker starting at `initial`
    pub const fn new(initial: SectionId) -> Self {
        Self { current: initial }
    }

    /// Currently active section
    pub const fn get(&self) -> SectionId {
        self.current
    }

    /// Whether `section` is the active one
    pub fn is(&self, section: SectionId) -> bool {
        self.current == section
    }

    /// Recompute from a scroll offset. Returns `true` when the active section changed.
    pub fn observe<L: SectionLayout + ?Sized>(&mut self, scroll_y: f64, layout: &L) -> bool {
        match locate(scroll_y, layout) {
            Some(section) if section != self.current => {
                tracing::debug!(from = %self.current, to = %section, scroll_y, "active section changed");
                self.current = section;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{SectionBounds, StaticLayout};

    fn page() -> StaticLayout {
        StaticLayout::new()
            .with(SectionId::Home, SectionBounds::new(80.0, 700.0))
            .with(SectionId::Companies, SectionBounds::new(1600.0, 1400.0))
            .with(SectionId::Products, SectionBounds::new(3000.0, 1200.0))
            .with(SectionId::Gallery, SectionBounds::new(4200.0, 900.0))
            .with(SectionId::Contact, SectionBounds::new(5100.0, 1000.0))
    }

    #[test]
    fn every_offset_inside_a_single_section_selects_it() {
        let layout = page();
        for section in SectionId::TRACKED {
            let bounds = layout.bounds(section).unwrap();
            let start = bounds.top - SCROLL_LOOKAHEAD;
            let end = bounds.top + bounds.height - SCROLL_LOOKAHEAD;
            let mut y = start;
            while y < end {
                assert_eq!(locate(y, &layout), Some(section), "offset {y}");
                y += 37.0;
            }
            assert_eq!(locate(end - 0.5, &layout), Some(section));
        }
    }

    #[test]
    fn lookahead_switches_before_the_top_edge() {
        let layout = page();
        assert_eq!(locate(1499.0, &layout), None);
        assert_eq!(locate(1500.0, &layout), Some(SectionId::Companies));
    }

    #[test]
    fn gap_between_sections_matches_nothing() {
        // about block sits between home and companies and is untracked
        assert_eq!(locate(1000.0, &page()), None);
    }

    #[test]
    fn no_match_keeps_previous_value() {
        let layout = page();
        let mut active = ActiveSection::new(SectionId::Products);

        assert!(!active.observe(-500.0, &layout));
        assert_eq!(active.get(), SectionId::Products);

        assert!(!active.observe(1_000_000.0, &layout));
        assert_eq!(active.get(), SectionId::Products);
    }

    #[test]
    fn above_first_section_stays_home() {
        let mut active = ActiveSection::default();
        assert!(!active.observe(-100.0, &page()));
        assert!(active.is(SectionId::Home));
    }

    #[test]
    fn observe_reports_changes_only() {
        let layout = page();
        let mut active = ActiveSection::default();

        assert!(active.observe(3000.0, &layout));
        assert_eq!(active.get(), SectionId::Products);
        assert!(!active.observe(3100.0, &layout));
        assert_eq!(active.get(), SectionId::Products);
    }

    #[test]
    fn overlapping_ranges_resolve_to_earliest_section() {
        let layout = StaticLayout::new()
            .with(SectionId::Companies, SectionBounds::new(0.0, 1000.0))
            .with(SectionId::Products, SectionBounds::new(500.0, 1000.0));

        assert_eq!(locate(600.0, &layout), Some(SectionId::Companies));
        assert_eq!(locate(1000.0, &layout), Some(SectionId::Products));
    }

    #[test]
    fn sections_without_layout_are_skipped() {
        let layout = StaticLayout::new().with(SectionId::Contact, SectionBounds::new(0.0, 500.0));
        assert_eq!(locate(0.0, &layout), Some(SectionId::Contact));
        assert_eq!(locate(0.0, &StaticLayout::new()), None);
    }
}
