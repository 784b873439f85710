//! Tracked page sections.
//!
//! Only these five regions drive navigation highlighting. The about block
//! carries an anchor for in-page links but is never tracked.

use std::fmt;

/// Anchor id of the about block (linked from the hero, not tracked)
pub const ABOUT_ANCHOR: &str = "about";

/// One of the page regions whose viewport occupancy drives the nav highlight.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionId {
    /// Hero banner
    #[default]
    Home,
    /// Business verticals
    Companies,
    /// Product catalog
    Products,
    /// Operations gallery
    Gallery,
    /// Contact details and form
    Contact,
}

impl SectionId {
    /// Priority order used by the tracker. Also the navigation order.
    pub const TRACKED: [SectionId; 5] = [
        SectionId::Home,
        SectionId::Companies,
        SectionId::Products,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Element id of the section in the rendered page
    pub const fn id(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Companies => "companies",
            SectionId::Products => "products",
            SectionId::Gallery => "gallery",
            SectionId::Contact => "contact",
        }
    }

    /// In-page link target, e.g. `#products`
    pub const fn href(self) -> &'static str {
        match self {
            SectionId::Home => "#home",
            SectionId::Companies => "#companies",
            SectionId::Products => "#products",
            SectionId::Gallery => "#gallery",
            SectionId::Contact => "#contact",
        }
    }

    /// Navigation label
    pub const fn label(self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::Companies => "Companies",
            SectionId::Products => "Products",
            SectionId::Gallery => "Gallery",
            SectionId::Contact => "Contact",
        }
    }

    /// Look a section up by element id. Untracked anchors (`about`) yield `None`.
    pub fn from_id(id: &str) -> Option<SectionId> {
        Self::TRACKED.into_iter().find(|s| s.id() == id)
    }

    /// Section targeted by an in-page link such as `#companies`.
    pub fn from_href(href: &str) -> Option<SectionId> {
        href.strip_prefix('#').and_then(Self::from_id)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn home_is_the_initial_section() {
        assert_eq!(SectionId::default(), SectionId::Home);
        assert_eq!(SectionId::TRACKED[0], SectionId::Home);
    }

    #[test]
    fn href_matches_element_id() {
        for section in SectionId::TRACKED {
            assert_eq!(section.href(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn about_is_not_tracked() {
        assert_eq!(SectionId::from_id(ABOUT_ANCHOR), None);
        assert_eq!(SectionId::from_id("gallery"), Some(SectionId::Gallery));
    }

    #[test]
    fn in_page_links_resolve_to_tracked_sections() {
        assert_eq!(SectionId::from_href("#companies"), Some(SectionId::Companies));
        assert_eq!(SectionId::from_href("#about"), None);
        assert_eq!(SectionId::from_href("companies"), None);
        assert_eq!(SectionId::from_href("tel:+918224013800"), None);
    }
}
