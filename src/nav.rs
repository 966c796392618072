//! Home Page Navigation
//!
//! Section anchors and scroll-based active section tracking.

/// Home page sections, in page order: (anchor id, nav label)
pub const SECTIONS: &[(&str, &str)] = &[
    ("home", "HOME"),
    ("menu", "MENU"),
    ("experience", "EXPERIENCE"),
    ("story", "STORY"),
    ("contact", "CONTACT"),
];

/// Sections count as active a little before they reach the top
pub const SCROLL_LOOKAHEAD_PX: f64 = 100.0;

/// Vertical extent of a rendered section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBounds {
    fn contains(&self, y: f64) -> bool {
        y >= self.offset_top && y < self.offset_top + self.height
    }
}

/// Section containing `scroll_y + 100`. The last match in page order wins;
/// when nothing matches the previous section stays active.
pub fn active_section(scroll_y: f64, sections: &[SectionBounds], previous: &str) -> String {
    let probe = scroll_y + SCROLL_LOOKAHEAD_PX;
    sections
        .iter()
        .filter(|section| section.contains(probe))
        .last()
        .map(|section| section.id.clone())
        .unwrap_or_else(|| previous.to_string())
}

/// Measure the home page sections that are currently mounted
pub fn measure_sections() -> Vec<SectionBounds> {
    let Some(doc) = web_sys::window().and_then(|win| win.document()) else {
        return Vec::new();
    };
    SECTIONS
        .iter()
        .filter_map(|(id, _)| {
            let el = doc.get_element_by_id(id)?;
            let el: web_sys::HtmlElement = wasm_bindgen::JsCast::dyn_into(el).ok()?;
            Some(SectionBounds {
                id: id.to_string(),
                offset_top: f64::from(el.offset_top()),
                height: f64::from(el.offset_height()),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(id: &str, offset_top: f64, height: f64) -> SectionBounds {
        SectionBounds {
            id: id.to_string(),
            offset_top,
            height,
        }
    }

    fn layout() -> Vec<SectionBounds> {
        vec![
            bounds("home", 0.0, 800.0),
            bounds("menu", 800.0, 1200.0),
            bounds("experience", 2000.0, 900.0),
        ]
    }

    #[test]
    fn test_top_of_page_is_home() {
        assert_eq!(active_section(0.0, &layout(), "home"), "home");
    }

    #[test]
    fn test_lookahead_switches_early() {
        assert_eq!(active_section(700.0, &layout(), "home"), "menu");
        assert_eq!(active_section(699.0, &layout(), "home"), "home");
    }

    #[test]
    fn test_gap_keeps_previous() {
        let sections = vec![bounds("home", 0.0, 500.0), bounds("menu", 1000.0, 500.0)];
        assert_eq!(active_section(600.0, &sections, "home"), "home");
        assert_eq!(active_section(5000.0, &sections, "menu"), "menu");
    }

    #[test]
    fn test_overlap_prefers_later_section() {
        let sections = vec![bounds("story", 0.0, 1000.0), bounds("contact", 500.0, 1000.0)];
        assert_eq!(active_section(500.0, &sections, "story"), "contact");
    }
}
