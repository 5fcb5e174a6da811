//! Colors used by the pagination dots and navigation buttons.

/// A color in the sRGB color space with an alpha component.
///
/// Values are stored as `f32`s in the range `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// The accent blue used for the active dot and the button glyphs.
    pub const ACCENT: Color = Color::new(0.0, 122.0 / 255.0, 1.0, 1.0);
    /// The translucent black used for inactive dots.
    pub const DOT: Color = Color::new(0.0, 0.0, 0.0, 0.2);

    /// Creates a new `Color` from four `f32` values (red, green, blue, alpha).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}
