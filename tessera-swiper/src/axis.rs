//! Scroll axis and the small geometry types shared by the swiper.

/// Direction in which slides are laid out and paged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SwiperAxis {
    /// Slides are laid out left to right.
    #[default]
    Horizontal,
    /// Slides are laid out top to bottom.
    Vertical,
}

impl SwiperAxis {
    /// Returns `true` for [`SwiperAxis::Horizontal`].
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Length of one page along this axis.
    pub fn main(self, size: SwiperSize) -> f32 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// Projects a two-dimensional scroll position onto this axis.
    pub fn main_offset(self, position: ScrollPosition) -> f32 {
        match self {
            Self::Horizontal => position.x,
            Self::Vertical => position.y,
        }
    }

    /// Builds a scroll position that only moves along this axis.
    pub fn position(self, main: f32) -> ScrollPosition {
        match self {
            Self::Horizontal => ScrollPosition::new(main, 0.0),
            Self::Vertical => ScrollPosition::new(0.0, main),
        }
    }
}

/// Viewport size of the swiper in layout units.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct SwiperSize {
    /// Viewport width.
    pub width: f32,
    /// Viewport height.
    pub height: f32,
}

impl SwiperSize {
    /// Creates a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub(crate) fn is_valid(self) -> bool {
        is_valid_length(self.width) && is_valid_length(self.height)
    }
}

/// Content offset reported by, or requested from, the scroll host.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollPosition {
    /// Horizontal content offset.
    pub x: f32,
    /// Vertical content offset.
    pub y: f32,
}

impl ScrollPosition {
    /// The origin.
    pub const ZERO: ScrollPosition = ScrollPosition::new(0.0, 0.0);

    /// Creates a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

pub(crate) fn is_valid_length(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_projects_size_and_position() {
        let size = SwiperSize::new(320.0, 480.0);
        assert_eq!(SwiperAxis::Horizontal.main(size), 320.0);
        assert_eq!(SwiperAxis::Vertical.main(size), 480.0);

        let pos = ScrollPosition::new(10.0, 20.0);
        assert_eq!(SwiperAxis::Horizontal.main_offset(pos), 10.0);
        assert_eq!(SwiperAxis::Vertical.main_offset(pos), 20.0);
    }

    #[test]
    fn position_only_moves_along_axis() {
        assert_eq!(
            SwiperAxis::Horizontal.position(64.0),
            ScrollPosition::new(64.0, 0.0)
        );
        assert_eq!(
            SwiperAxis::Vertical.position(64.0),
            ScrollPosition::new(0.0, 64.0)
        );
    }

    #[test]
    fn size_validity() {
        assert!(SwiperSize::new(1.0, 1.0).is_valid());
        assert!(!SwiperSize::new(0.0, 1.0).is_valid());
        assert!(!SwiperSize::new(f32::NAN, 1.0).is_valid());
        assert!(!SwiperSize::new(1.0, f32::INFINITY).is_valid());
    }
}
