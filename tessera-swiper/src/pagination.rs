//! Pagination dots.
//!
//! ## Usage
//!
//! Show which slide is current. The swiper calls [`pagination`] with its
//! visual index, so the highlight follows the finger during a drag.

use derive_setters::Setters;
use smallvec::SmallVec;

use crate::{axis::SwiperAxis, color::Color};

const DEFAULT_DOT_SIZE: f32 = 8.0;
const DEFAULT_DOT_MARGIN: f32 = 3.0;

/// Visual parameters of a single dot.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct DotStyle {
    /// Fill color.
    pub color: Color,
    /// Diameter.
    pub size: f32,
    /// Margin on every side.
    pub margin: f32,
}

impl DotStyle {
    /// Corner radius that renders the dot as a circle.
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}

impl Default for DotStyle {
    fn default() -> Self {
        Self {
            color: Color::DOT,
            size: DEFAULT_DOT_SIZE,
            margin: DEFAULT_DOT_MARGIN,
        }
    }
}

/// Dot visuals for the default pagination renderer.
#[derive(Clone, Copy, Debug, PartialEq, Setters)]
pub struct PaginationStyle {
    /// Style of every inactive dot.
    pub dot: DotStyle,
    /// Style of the dot for the current slide.
    pub active_dot: DotStyle,
}

impl Default for PaginationStyle {
    fn default() -> Self {
        Self {
            dot: DotStyle::default(),
            active_dot: DotStyle::default().color(Color::ACCENT),
        }
    }
}

/// Inputs handed to a custom pagination renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaginationProps {
    /// Logical current slide.
    pub index: usize,
    /// Slide nearest to the live scroll position.
    pub visual_index: usize,
    /// Number of slides.
    pub total: usize,
    /// Axis of the swiper; dots run along it.
    pub axis: SwiperAxis,
}

/// One rendered dot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dot {
    /// Slide this dot stands for.
    pub index: usize,
    /// Whether this is the highlighted dot.
    pub active: bool,
    /// Resolved style.
    pub style: DotStyle,
}

/// Rendered pagination indicator.
#[derive(Clone, Debug, PartialEq)]
pub struct PaginationView {
    /// Row for horizontal swipers, column for vertical ones.
    pub axis: SwiperAxis,
    /// Dots in slide order.
    pub dots: SmallVec<[Dot; 8]>,
}

impl PaginationView {
    /// Index of the highlighted dot, if any.
    pub fn active_index(&self) -> Option<usize> {
        self.dots.iter().find(|dot| dot.active).map(|dot| dot.index)
    }
}

/// Renders `total` dots with the one at `index` highlighted.
///
/// Returns `None` when there are fewer than two slides.
pub fn pagination(
    total: usize,
    index: usize,
    axis: SwiperAxis,
    style: &PaginationStyle,
) -> Option<PaginationView> {
    if total < 2 {
        return None;
    }
    let dots = (0..total)
        .map(|i| {
            let active = i == index;
            Dot {
                index: i,
                active,
                style: if active { style.active_dot } else { style.dot },
            }
        })
        .collect();
    Some(PaginationView { axis, dots })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fewer_than_two_renders_nothing() {
        let style = PaginationStyle::default();
        assert!(pagination(0, 0, SwiperAxis::Horizontal, &style).is_none());
        assert!(pagination(1, 0, SwiperAxis::Horizontal, &style).is_none());
    }

    #[test]
    fn highlights_the_supplied_index() {
        let style = PaginationStyle::default();
        let view = pagination(4, 2, SwiperAxis::Vertical, &style).expect("four dots");
        assert_eq!(view.dots.len(), 4);
        assert_eq!(view.axis, SwiperAxis::Vertical);
        assert_eq!(view.active_index(), Some(2));
        assert_eq!(view.dots[2].style.color, Color::ACCENT);
        assert_eq!(view.dots[0].style.color, Color::DOT);
    }

    #[test]
    fn custom_dot_visuals_are_applied() {
        let style = PaginationStyle::default()
            .dot(DotStyle::default().size(6.0))
            .active_dot(DotStyle::default().color(Color::new(1.0, 1.0, 1.0, 1.0)).size(10.0));
        let view = pagination(2, 0, SwiperAxis::Horizontal, &style).expect("two dots");
        assert_eq!(view.dots[0].style.size, 10.0);
        assert_eq!(view.dots[0].style.radius(), 5.0);
        assert_eq!(view.dots[1].style.size, 6.0);
    }

    #[test]
    fn out_of_range_index_highlights_nothing() {
        let style = PaginationStyle::default();
        let view = pagination(3, 7, SwiperAxis::Horizontal, &style).expect("three dots");
        assert_eq!(view.active_index(), None);
    }
}
