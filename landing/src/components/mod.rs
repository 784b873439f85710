// Stateless presentation helpers shared by the page sections

mod card;
mod icons;
mod nav_link;

pub use card::Card;
pub use icons::Icon;
pub use nav_link::NavLink;
