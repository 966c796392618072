//! Pages
//!
//! One component per hash route.

mod home;
mod menu;
mod about;
mod contact;

pub use home::HomePage;
pub use menu::MenuPage;
pub use about::AboutPage;
pub use contact::ContactPage;
