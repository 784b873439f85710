// Landing page sections, top to bottom

mod about;
mod contact;
mod footer;
mod gallery;
mod header;
mod hero;
mod map;
mod products;
mod stats;
mod verticals;

pub use about::AboutSection;
pub use contact::ContactSection;
pub use footer::Footer;
pub use gallery::GallerySection;
pub use header::Header;
pub use hero::HeroSection;
pub use map::MapSection;
pub use products::ProductsSection;
pub use stats::Stats;
pub use verticals::VerticalsSection;
