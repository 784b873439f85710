//! Typed site content.
//!
//! Copy, image references and list items come from `content/site.json`,
//! which is embedded at compile time. The page renders these records
//! one-to-one onto cards and tiles; nothing here changes at runtime.

use serde::Deserialize;
use thiserror::Error;

use crate::section::{ABOUT_ANCHOR, SectionId};

const SITE_JSON: &str = include_str!("../content/site.json");

/// Number of options the contact form's subject select offers
pub const CONTACT_SUBJECT_COUNT: usize = 4;

/// Errors raised while loading site content
#[derive(Debug, Error)]
pub enum ContentError {
    /// The document is not valid JSON or does not match the schema
    #[error("failed to parse site content: {0}")]
    Parse(#[from] serde_json::Error),
    /// The document parsed but breaks a content rule
    #[error("invalid site content at `{field}`: {reason}")]
    Invalid {
        /// Dotted path of the offending field
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}

impl ContentError {
    fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ContentError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}

/// Icon identifiers referenced from content records.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
#[allow(missing_docs)]
pub enum IconId {
    ArrowRight,
    Beaker,
    Building,
    ChevronDown,
    ChevronRight,
    Download,
    Egg,
    Facebook,
    Factory,
    Globe,
    House,
    Leaf,
    Lightbulb,
    Linkedin,
    Lock,
    Mail,
    MapPin,
    Menu,
    Navigation,
    Phone,
    Pill,
    Send,
    ShieldCheck,
    TrendingUp,
    Truck,
    Twitter,
    Users,
    Wrench,
    X,
}

/// Labeled hyperlink
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Link {
    pub label: String,
    pub href: String,
}

/// Image reference with alt text
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Image {
    pub src: String,
    pub alt: String,
}

/// Complete content of the landing page.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct SiteContent {
    /// Group name shown in header and footer
    pub brand: Brand,
    /// Hero banner
    pub hero: Hero,
    /// Headline numbers under the hero
    pub stats: Vec<Stat>,
    /// About narrative and value tiles
    pub about: About,
    /// Business verticals (`#companies`)
    pub verticals: Verticals,
    /// Product catalog (`#products`)
    pub products: Products,
    /// Operations gallery (`#gallery`)
    pub gallery: Gallery,
    /// Contact details and form (`#contact`)
    pub contact: Contact,
    /// Embedded headquarters map
    pub map: MapEmbed,
    /// Page footer
    pub footer: Footer,
}

/// Two-tone brand wordmark, e.g. "Jayshree" + accented "Group"
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Brand {
    pub name: String,
    pub accent: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Hero {
    pub badge: String,
    pub headline: String,
    pub highlight: String,
    pub description: String,
    pub image: Image,
    pub primary_cta: Link,
    pub secondary_cta: Link,
    pub certification: Certification,
}

/// Floating card over the hero image
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Certification {
    pub kicker: String,
    pub title: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Stat {
    pub label: String,
    pub value: String,
    pub trend: String,
    pub icon: IconId,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct About {
    pub title: String,
    pub paragraphs: Vec<String>,
    pub values: Vec<ValueTile>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct ValueTile {
    pub title: String,
    pub icon: IconId,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Verticals {
    pub title: String,
    pub description: String,
    pub view_all_label: String,
    pub featured: Vec<FeaturedVertical>,
    pub units: Vec<BusinessUnit>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct FeaturedVertical {
    pub title: String,
    pub description: String,
    pub image: Image,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct BusinessUnit {
    pub icon: IconId,
    pub title: String,
    pub description: String,
}

/// Image tile whose alt text is its title (products, gallery)
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Showcase {
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Products {
    pub title: String,
    pub items: Vec<Showcase>,
    pub quality: Badge,
    pub catalog: CatalogBadge,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Badge {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct CatalogBadge {
    pub title: String,
    pub button_label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Gallery {
    pub title: String,
    pub description: String,
    pub items: Vec<Showcase>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Contact {
    pub title: String,
    pub description: String,
    pub email: String,
    pub phone: Phone,
    pub address: String,
    pub form: ContactForm,
}

/// Phone number as displayed and as dialed
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Phone {
    pub display: String,
    pub uri: String,
}

/// Presentational contact form; submissions are discarded.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct ContactForm {
    pub title: String,
    pub name_placeholder: String,
    pub email_placeholder: String,
    pub subjects: Vec<String>,
    pub message_placeholder: String,
    pub submit_label: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct MapEmbed {
    pub title: String,
    pub embed_url: String,
    pub directions_url: String,
    pub label: String,
    pub locality: String,
    pub address: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Footer {
    pub blurb: String,
    pub socials: Vec<SocialLink>,
    pub columns: Vec<LinkColumn>,
    pub portal: Portal,
    pub copyright: String,
    pub legal: Vec<Link>,
    pub glyphs: Vec<IconId>,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct SocialLink {
    pub icon: IconId,
    pub href: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct LinkColumn {
    pub title: String,
    pub links: Vec<Link>,
}

/// "Internal Portal" block in the footer
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[allow(missing_docs)]
pub struct Portal {
    pub title: String,
    pub note: String,
    pub button_label: String,
}

impl SiteContent {
    /// Content compiled into the binary, parsed and validated.
    pub fn embedded() -> Result<Self, ContentError> {
        let content = Self::from_json(SITE_JSON)?;
        content.validate()?;
        Ok(content)
    }

    /// Parse a content document without validating it.
    pub fn from_json(json: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the rules the page relies on.
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.brand.name.trim().is_empty() {
            return Err(ContentError::invalid("brand.name", "must not be empty"));
        }
        if !self.contact.phone.uri.starts_with("tel:") {
            return Err(ContentError::invalid(
                "contact.phone.uri",
                format!("expected a tel: URI, got {:?}", self.contact.phone.uri),
            ));
        }
        let subjects = self.contact.form.subjects.len();
        if subjects != CONTACT_SUBJECT_COUNT {
            return Err(ContentError::invalid(
                "contact.form.subjects",
                format!("expected {CONTACT_SUBJECT_COUNT} options, got {subjects}"),
            ));
        }

        check_anchor("hero.primary_cta.href", &self.hero.primary_cta.href)?;
        check_anchor("hero.secondary_cta.href", &self.hero.secondary_cta.href)?;

        check_non_empty("verticals.featured", self.verticals.featured.len())?;
        check_non_empty("verticals.units", self.verticals.units.len())?;
        check_non_empty("products.items", self.products.items.len())?;
        check_non_empty("gallery.items", self.gallery.items.len())?;

        check_https("map.embed_url", &self.map.embed_url)?;
        check_https("map.directions_url", &self.map.directions_url)?;
        Ok(())
    }
}

fn check_non_empty(field: &'static str, len: usize) -> Result<(), ContentError> {
    if len == 0 {
        return Err(ContentError::invalid(field, "must list at least one entry"));
    }
    Ok(())
}

fn check_https(field: &'static str, url: &str) -> Result<(), ContentError> {
    if !url.starts_with("https://") {
        return Err(ContentError::invalid(field, format!("expected an https URL, got {url:?}")));
    }
    Ok(())
}

// In-page links must land on an element the page actually renders.
fn check_anchor(field: &'static str, href: &str) -> Result<(), ContentError> {
    let known = href
        .strip_prefix('#')
        .is_some_and(|id| id == ABOUT_ANCHOR || SectionId::from_id(id).is_some());
    if !known {
        return Err(ContentError::invalid(field, format!("unknown in-page anchor {href:?}")));
    }
    Ok(())
}
