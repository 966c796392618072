//! Page Routing
//!
//! Hash routes (`#/menu`). In-page anchors like `#story` keep the home page.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Menu,
    About,
    Contact,
}

impl Page {
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#');
        let Some(route) = path.strip_prefix('/') else {
            return Page::Home;
        };
        let route = route.split(['?', '#']).next().unwrap_or("").trim_end_matches('/');
        match route {
            "menu" => Page::Menu,
            "about" => Page::About,
            "contact" => Page::Contact,
            _ => Page::Home,
        }
    }

    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "#/",
            Page::Menu => "#/menu",
            Page::About => "#/about",
            Page::Contact => "#/contact",
        }
    }

    pub fn title(&self, brand: &str) -> String {
        match self {
            Page::Home => brand.to_string(),
            Page::Menu => format!("Menu · {}", brand),
            Page::About => format!("About · {}", brand),
            Page::Contact => format!("Contact · {}", brand),
        }
    }
}

fn current_hash() -> String {
    window().location().hash().unwrap_or_default()
}

/// Current page, following `hashchange`. Only notifies when the page differs.
pub fn use_current_page() -> Memo<Page> {
    let (hash, set_hash) = signal(current_hash());
    let handle = window_event_listener(leptos::ev::hashchange, move |_| {
        set_hash.set(current_hash());
    });
    on_cleanup(move || handle.remove());
    Memo::new(move |_| Page::from_hash(&hash.get()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hash() {
        assert_eq!(Page::from_hash(""), Page::Home);
        assert_eq!(Page::from_hash("#/"), Page::Home);
        assert_eq!(Page::from_hash("#/menu"), Page::Menu);
        assert_eq!(Page::from_hash("#/menu/"), Page::Menu);
        assert_eq!(Page::from_hash("#/about"), Page::About);
        assert_eq!(Page::from_hash("#/contact?ref=footer"), Page::Contact);
        assert_eq!(Page::from_hash("#/unknown"), Page::Home);
    }

    #[test]
    fn test_section_anchor_stays_home() {
        assert_eq!(Page::from_hash("#menu"), Page::Home);
        assert_eq!(Page::from_hash("#contact"), Page::Home);
    }

    #[test]
    fn test_href_round_trip() {
        for page in [Page::Home, Page::Menu, Page::About, Page::Contact] {
            assert_eq!(Page::from_hash(page.href()), page);
        }
    }
}
