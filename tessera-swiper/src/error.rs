//! Configuration defects reported by [`SwiperArgs::validate`](crate::SwiperArgs::validate).
//!
//! None of these are fatal. The controller logs them and falls back to a
//! sensible presentation.

/// A defect found in a swiper configuration.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SwiperError {
    /// A viewport dimension was zero, negative, or not finite.
    #[error("swiper {dimension} must be a positive finite length, got {value}")]
    InvalidDimension {
        /// Which dimension was rejected.
        dimension: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// Autoplay was enabled with a zero timeout.
    #[error("autoplay timeout must be greater than zero")]
    ZeroAutoplayTimeout,
    /// The requested start index does not name a slide.
    #[error("start index {index} is out of range for {total} slide(s)")]
    IndexOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of slides available.
        total: usize,
    },
}
