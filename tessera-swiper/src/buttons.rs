//! Previous/next navigation buttons.

use derive_setters::Setters;

use crate::color::Color;

/// What a navigation button does when pressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Go to the previous slide.
    Backward,
    /// Go to the next slide.
    Forward,
}

impl NavAction {
    /// Slide delta applied by this action.
    pub fn delta(self) -> isize {
        match self {
            Self::Backward => -1,
            Self::Forward => 1,
        }
    }
}

/// Visual parameters of the default button bar.
#[derive(Clone, Debug, PartialEq, Setters)]
#[setters(into)]
pub struct ButtonStyle {
    /// Glyph of the previous button.
    pub prev_glyph: String,
    /// Glyph of the next button.
    pub next_glyph: String,
    /// Glyph color.
    pub color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            prev_glyph: "‹".to_string(),
            next_glyph: "›".to_string(),
            color: Color::ACCENT,
        }
    }
}

/// Inputs handed to a button renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonProps {
    /// Logical current slide.
    pub index: usize,
    /// Number of slides.
    pub total: usize,
    /// Whether the swiper loops.
    pub loop_enabled: bool,
}

impl ButtonProps {
    /// Whether a previous button belongs on screen.
    pub fn shows_prev(&self) -> bool {
        self.total >= 2 && (self.loop_enabled || self.index != 0)
    }

    /// Whether a next button belongs on screen.
    pub fn shows_next(&self) -> bool {
        self.total >= 2 && (self.loop_enabled || self.index + 1 != self.total)
    }
}

/// A rendered button.
#[derive(Clone, Debug, PartialEq)]
pub struct NavButton {
    /// Action dispatched on press.
    pub action: NavAction,
    /// Glyph to draw.
    pub glyph: String,
    /// Glyph color.
    pub color: Color,
}

/// Rendered button bar. Hidden buttons are `None`.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ButtonBar {
    /// Previous button.
    pub prev: Option<NavButton>,
    /// Next button.
    pub next: Option<NavButton>,
}

impl ButtonBar {
    /// Returns `true` when neither button is shown.
    pub fn is_empty(&self) -> bool {
        self.prev.is_none() && self.next.is_none()
    }
}

/// Default button renderer.
pub fn buttons(props: &ButtonProps, style: &ButtonStyle) -> ButtonBar {
    let button = |action, glyph: &str| NavButton {
        action,
        glyph: glyph.to_string(),
        color: style.color,
    };
    ButtonBar {
        prev: props
            .shows_prev()
            .then(|| button(NavAction::Backward, &style.prev_glyph)),
        next: props
            .shows_next()
            .then(|| button(NavAction::Forward, &style.next_glyph)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(index: usize, total: usize, loop_enabled: bool) -> ButtonProps {
        ButtonProps {
            index,
            total,
            loop_enabled,
        }
    }

    #[test]
    fn edges_hide_buttons_without_loop() {
        let style = ButtonStyle::default();
        let first = buttons(&props(0, 3, false), &style);
        assert!(first.prev.is_none());
        assert_eq!(
            first.next.as_ref().map(|b| b.action),
            Some(NavAction::Forward)
        );

        let last = buttons(&props(2, 3, false), &style);
        assert!(last.next.is_none());
        assert_eq!(
            last.prev.as_ref().map(|b| b.action),
            Some(NavAction::Backward)
        );

        let middle = buttons(&props(1, 3, false), &style);
        assert!(middle.prev.is_some() && middle.next.is_some());
    }

    #[test]
    fn looping_always_shows_both() {
        let style = ButtonStyle::default();
        for index in 0..3 {
            let bar = buttons(&props(index, 3, true), &style);
            assert!(bar.prev.is_some() && bar.next.is_some());
        }
    }

    #[test]
    fn single_slide_suppresses_both_even_when_looping() {
        let style = ButtonStyle::default();
        assert!(buttons(&props(0, 1, true), &style).is_empty());
        assert!(buttons(&props(0, 1, false), &style).is_empty());
        assert!(buttons(&props(0, 0, true), &style).is_empty());
    }

    #[test]
    fn glyphs_come_from_style() {
        let style = ButtonStyle::default().prev_glyph("<").next_glyph(">");
        let bar = buttons(&props(1, 3, false), &style);
        assert_eq!(bar.prev.map(|b| b.glyph), Some("<".to_string()));
        assert_eq!(bar.next.map(|b| b.glyph), Some(">".to_string()));
    }
}
