//! Vertical placement of tracked sections.

use crate::section::SectionId;

/// Vertical extent of a section in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    /// Distance from the top of the document
    pub top: f64,
    /// Rendered height
    pub height: f64,
}

impl SectionBounds {
    /// Bounds starting at `top` and spanning `height`
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Half-open range check: `top <= offset < top + height`
    pub fn contains(&self, offset: f64) -> bool {
        offset >= self.top && offset < self.top + self.height
    }
}

/// Source of section bounds.
///
/// The browser implementation reads element offsets on every call, so the
/// answer follows layout changes (images loading, viewport resizes).
pub trait SectionLayout {
    /// Bounds of `section`, or `None` if it is not laid out
    fn bounds(&self, section: SectionId) -> Option<SectionBounds>;
}

impl<L: SectionLayout + ?Sized> SectionLayout for &L {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        (**self).bounds(section)
    }
}

/// Fixed table of section bounds.
#[derive(Clone, Debug, Default)]
pub struct StaticLayout {
    entries: Vec<(SectionId, SectionBounds)>,
}

impl StaticLayout {
    /// Empty layout; every lookup misses
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the bounds of `section`, replacing an earlier entry
    pub fn with(mut self, section: SectionId, bounds: SectionBounds) -> Self {
        self.insert(section, bounds);
        self
    }

    /// Set the bounds of `section`, replacing an earlier entry
    pub fn insert(&mut self, section: SectionId, bounds: SectionBounds) {
        match self.entries.iter_mut().find(|(id, _)| *id == section) {
            Some(entry) => entry.1 = bounds,
            None => self.entries.push((section, bounds)),
        }
    }

    /// Stack sections top to bottom with the given heights, starting at 0.
    pub fn stacked(heights: &[(SectionId, f64)]) -> Self {
        let mut layout = Self::new();
        let mut top = 0.0;
        for &(section, height) in heights {
            layout.insert(section, SectionBounds::new(top, height));
            top += height;
        }
        layout
    }
}

impl SectionLayout for StaticLayout {
    fn bounds(&self, section: SectionId) -> Option<SectionBounds> {
        self.entries
            .iter()
            .find(|(id, _)| *id == section)
            .map(|(_, bounds)| *bounds)
    }
}
