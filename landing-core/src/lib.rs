//! # landing-core
//!
//! Behavior behind the Jayshree Group landing page, kept free of any DOM
//! dependency so it runs (and is tested) natively.
//!
//! ## What lives here
//!
//! - [`section`] - the closed set of tracked page sections
//! - [`layout`] - where each section sits on the page
//! - [`tracker`] - which section is "active" for a scroll offset
//! - [`menu`] - the mobile navigation drawer state
//! - [`viewport`] - scroll listener lifecycle (acquire on mount, release on drop)
//! - [`page`] - per-view state composed from the pieces above
//! - [`content`] - typed site content loaded from the embedded JSON document
//!
//! ## Quick Start
//!
//! ```rust
//! use landing_core::layout::{SectionBounds, StaticLayout};
//! use landing_core::section::SectionId;
//! use landing_core::tracker::ActiveSection;
//!
//! let layout = StaticLayout::new()
//!     .with(SectionId::Home, SectionBounds::new(0.0, 800.0))
//!     .with(SectionId::Companies, SectionBounds::new(800.0, 1200.0));
//!
//! let mut active = ActiveSection::default();
//! active.observe(700.0, &layout);
//! assert_eq!(active.get(), SectionId::Companies);
//! ```
//!
//! The browser crate supplies a window-backed [`viewport::ScrollSource`] and a
//! DOM-backed [`layout::SectionLayout`]; everything else is shared.

#![warn(missing_docs)]

pub mod content;
pub mod layout;
pub mod menu;
pub mod page;
pub mod section;
pub mod tracker;
pub mod viewport;

/// Crate version, used in startup logs (single source of truth)
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use content::{ContentError, SiteContent};
pub use layout::{SectionBounds, SectionLayout, StaticLayout};
pub use menu::MenuState;
pub use page::PageState;
pub use section::SectionId;
pub use tracker::{ActiveSection, SCROLL_LOOKAHEAD, locate};
pub use viewport::{ListenerHandle, ScrollCallback, ScrollSource, Subscription};
