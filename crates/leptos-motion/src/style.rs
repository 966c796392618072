//! Style Math
//!
//! Pure functions turning pointer/scroll/timing inputs into CSS values.

/// Easing shared by every reveal transition
pub const REVEAL_EASING: &str = "cubic-bezier(0.21, 0.47, 0.32, 0.98)";

/// Map a client position to [-1, 1] per axis; degenerate viewports map to 0
pub fn normalize_pointer(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    let axis = |pos: f64, size: f64| {
        if size <= 0.0 {
            0.0
        } else {
            ((pos / size) * 2.0 - 1.0).clamp(-1.0, 1.0)
        }
    };
    (axis(client_x, width), axis(client_y, height))
}

/// Hero background: amber highlight drifting up to 10% with the pointer
pub fn hero_gradient(nx: f64, ny: f64) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, rgba(245, 158, 11, 0.15) 0%, transparent 50%), \
         linear-gradient(135deg, #000000 0%, #1a0f0a 25%, #2d1b0e 50%, #1a0f0a 75%, #000000 100%)",
        50.0 + nx * 10.0,
        50.0 + ny * 10.0
    )
}

/// Card glow centered on the pointer position inside the card
pub fn glow_background(x: f64, y: f64, color: &str) -> String {
    format!("radial-gradient(300px circle at {}px {}px, {}, transparent 40%)", x, y, color)
}

/// Border glow for a hovered card (`color` is a #rrggbb hex)
pub fn glow_shadow(color: &str, hovered: bool) -> String {
    if hovered {
        format!("0 0 20px {}40, inset 0 0 20px {}20", color, color)
    } else {
        "0 0 0px transparent".to_string()
    }
}

/// Custom cursor inputs
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub pressed: bool,
    pub hovering: bool,
}

impl CursorState {
    /// Pressing wins over hovering
    pub fn scale(&self) -> f64 {
        if self.pressed {
            0.8
        } else if self.hovering {
            1.5
        } else {
            1.0
        }
    }
}

/// `left`/`top` so that a square of `2 * half` px is centered on the pointer
pub fn centered_at(x: f64, y: f64, half: f64) -> (String, String) {
    (format!("{}px", x - half), format!("{}px", y - half))
}

/// Entrance animation flavours
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    FadeUp,
    /// Short rise used by stagger items
    Rise,
    SlideLeft,
    SlideRight,
    Scale,
}

impl Reveal {
    pub fn hidden_transform(&self) -> &'static str {
        match self {
            Reveal::FadeUp => "translateY(60px)",
            Reveal::Rise => "translateY(20px)",
            Reveal::SlideLeft => "translateX(-100px)",
            Reveal::SlideRight => "translateX(100px)",
            Reveal::Scale => "scale(0.8)",
        }
    }

    pub fn duration_secs(&self) -> f64 {
        match self {
            Reveal::Scale | Reveal::Rise => 0.6,
            _ => 0.8,
        }
    }
}

/// Inline style for a reveal wrapper, hidden until `visible`
pub fn reveal_style(reveal: Reveal, visible: bool, delay_secs: f64) -> String {
    let (opacity, transform) = if visible {
        (1, "none")
    } else {
        (0, reveal.hidden_transform())
    };
    format!(
        "opacity: {}; transform: {}; transition: opacity {}s {} {}s, transform {}s {} {}s;",
        opacity,
        transform,
        reveal.duration_secs(),
        REVEAL_EASING,
        delay_secs,
        reveal.duration_secs(),
        REVEAL_EASING,
        delay_secs
    )
}

/// Delay of the `index`-th child in a stagger group
pub fn stagger_delay(index: usize, step_secs: f64) -> f64 {
    index as f64 * step_secs
}

/// Floating bob: amplitude in px and loop duration in seconds
pub fn floating_style(intensity: f64, speed_secs: f64) -> String {
    format!(
        "--float-intensity: {}px; animation: float-bob {}s ease-in-out infinite;",
        intensity, speed_secs
    )
}

/// Scroll progress of an element through the viewport.
///
/// 0 when its top touches the viewport bottom, 1 when its bottom leaves
/// the viewport top.
pub fn scroll_progress(rect_top: f64, rect_height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + rect_height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - rect_top) / travel).clamp(0.0, 1.0)
}

/// Vertical parallax shift in px
pub fn parallax_offset(progress: f64, speed: f64) -> f64 {
    progress.clamp(0.0, 1.0) * speed * 100.0
}

/// Words of `text` paired with their entrance delay
pub fn word_delays(text: &str, step_secs: f64) -> Vec<(String, f64)> {
    text.split(' ')
        .enumerate()
        .map(|(i, word)| (word.to_string(), stagger_delay(i, step_secs)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_pointer() {
        assert_eq!(normalize_pointer(0.0, 0.0, 800.0, 600.0), (-1.0, -1.0));
        assert_eq!(normalize_pointer(400.0, 300.0, 800.0, 600.0), (0.0, 0.0));
        assert_eq!(normalize_pointer(800.0, 600.0, 800.0, 600.0), (1.0, 1.0));
        assert_eq!(normalize_pointer(10.0, 10.0, 0.0, 0.0), (0.0, 0.0));
    }

    #[test]
    fn test_hero_gradient_center_follows_pointer() {
        let css = hero_gradient(1.0, -0.5);
        assert!(css.starts_with("radial-gradient(circle at 60% 45%"));
    }

    #[test]
    fn test_glow() {
        assert_eq!(
            glow_background(12.0, 30.5, "#f59e0b"),
            "radial-gradient(300px circle at 12px 30.5px, #f59e0b, transparent 40%)"
        );
        assert_eq!(glow_shadow("#f59e0b", false), "0 0 0px transparent");
        assert!(glow_shadow("#f59e0b", true).contains("#f59e0b40"));
    }

    #[test]
    fn test_cursor_scale() {
        assert_eq!(CursorState::default().scale(), 1.0);
        assert_eq!(CursorState { pressed: false, hovering: true }.scale(), 1.5);
        assert_eq!(CursorState { pressed: true, hovering: true }.scale(), 0.8);
        assert_eq!(centered_at(100.0, 50.0, 12.0), ("88px".to_string(), "38px".to_string()));
    }

    #[test]
    fn test_reveal_style() {
        let hidden = reveal_style(Reveal::SlideLeft, false, 0.2);
        assert!(hidden.starts_with("opacity: 0; transform: translateX(-100px);"));
        assert!(hidden.contains("0.8s"));
        assert!(hidden.contains(" 0.2s"));

        let shown = reveal_style(Reveal::Scale, true, 0.0);
        assert!(shown.starts_with("opacity: 1; transform: none;"));
        assert!(shown.contains("0.6s"));
    }

    #[test]
    fn test_scroll_progress_and_parallax() {
        // Entering from the bottom
        assert_eq!(scroll_progress(800.0, 200.0, 800.0), 0.0);
        // Fully scrolled past
        assert_eq!(scroll_progress(-200.0, 200.0, 800.0), 1.0);
        assert_eq!(scroll_progress(300.0, 200.0, 800.0), 0.5);
        assert!((parallax_offset(0.5, 0.3) - 15.0).abs() < 1e-9);
        assert_eq!(parallax_offset(2.0, 1.0), 100.0);
    }

    #[test]
    fn test_word_delays() {
        let words = word_delays("Everyday with Coffee", 0.1);
        assert_eq!(words.len(), 3);
        assert_eq!(words[0], ("Everyday".to_string(), 0.0));
        assert_eq!(words[2].0, "Coffee");
        assert!((words[2].1 - 0.2).abs() < 1e-9);
    }
}
