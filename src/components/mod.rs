//! UI Components
//!
//! Reusable Leptos components.

mod motion;
mod interactive_card;
mod morphing_button;
mod custom_cursor;
mod login_modal;
mod coffee_scene;
mod star_rating;
mod category_bar;
mod menu_search;
mod menu_card;
mod cart_button;
mod page_header;
mod site_nav;
mod site_footer;

pub use motion::{
    FadeInUp, FloatingElement, MagneticButton, ParallaxText, RevealText, ScaleIn, SlideInLeft,
    SlideInRight, StaggerContainer, StaggerItem,
};
pub use interactive_card::InteractiveCard;
pub use morphing_button::{ButtonSize, ButtonVariant, MorphingButton};
pub use custom_cursor::CustomCursor;
pub use login_modal::LoginModal;
pub use coffee_scene::CoffeeScene;
pub use star_rating::StarRating;
pub use category_bar::CategoryBar;
pub use menu_search::MenuSearch;
pub use menu_card::MenuCard;
pub use cart_button::CartButton;
pub use page_header::PageHeader;
pub use site_nav::SiteNav;
pub use site_footer::SiteFooter;
