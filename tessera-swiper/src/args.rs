//! Swiper configuration.

use std::{sync::Arc, time::Duration};

use derive_setters::Setters;

use crate::{
    axis::{SwiperAxis, SwiperSize, is_valid_length},
    buttons::{ButtonBar, ButtonProps, ButtonStyle},
    controller::SwiperSnapshot,
    error::SwiperError,
    host::ScrollEvent,
    pagination::{PaginationProps, PaginationStyle, PaginationView},
};

const DEFAULT_AUTOPLAY_TIMEOUT: Duration = Duration::from_millis(2500);
const DEFAULT_LOOP_JUMP_DELAY: Duration = Duration::from_millis(50);

/// Viewport used when the caller supplies no size.
pub const DEFAULT_WINDOW_SIZE: SwiperSize = SwiperSize::new(360.0, 640.0);

/// Passthrough callback for host scroll notifications.
pub type ScrollCallback = Arc<dyn Fn(&ScrollEvent, &SwiperSnapshot) + Send + Sync>;
/// Replacement for the default pagination renderer.
pub type PaginationRenderer = Arc<dyn Fn(&PaginationProps) -> Option<PaginationView> + Send + Sync>;
/// Replacement for the default button renderer.
pub type ButtonsRenderer = Arc<dyn Fn(&ButtonProps) -> ButtonBar + Send + Sync>;

/// Direction autoplay advances in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AutoplayDirection {
    /// Towards higher indices.
    #[default]
    Forward,
    /// Towards lower indices.
    Backward,
}

impl AutoplayDirection {
    pub(crate) fn delta(self) -> isize {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }
}

/// Autoplay settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Setters)]
pub struct AutoplayArgs {
    /// Whether slides advance on their own.
    pub enabled: bool,
    /// Time a slide stays on screen before the next advance.
    pub timeout: Duration,
    /// Direction of each advance.
    pub direction: AutoplayDirection,
}

impl Default for AutoplayArgs {
    fn default() -> Self {
        Self {
            enabled: false,
            timeout: DEFAULT_AUTOPLAY_TIMEOUT,
            direction: AutoplayDirection::Forward,
        }
    }
}

/// Configuration arguments for a swiper.
#[derive(Clone, Setters)]
pub struct SwiperArgs {
    /// Paging axis.
    pub axis: SwiperAxis,
    /// Whether advancing past either end wraps around.
    pub loop_enabled: bool,
    /// Start index.
    pub index: usize,
    /// Viewport width. Falls back to the window width.
    #[setters(strip_option)]
    pub width: Option<f32>,
    /// Viewport height. Falls back to the window height.
    #[setters(strip_option)]
    pub height: Option<f32>,
    /// Size of the window the swiper lives in.
    pub window_size: SwiperSize,
    /// Autoplay settings.
    pub autoplay: AutoplayArgs,
    /// Whether pagination dots are shown.
    pub shows_pagination: bool,
    /// Dot visuals for the default pagination renderer.
    pub pagination: PaginationStyle,
    /// Custom pagination renderer.
    #[setters(skip)]
    pub render_pagination: Option<PaginationRenderer>,
    /// Whether previous/next buttons are shown.
    pub shows_buttons: bool,
    /// Visuals for the default button renderer.
    pub buttons: ButtonStyle,
    /// Custom button renderer.
    #[setters(skip)]
    pub render_buttons: Option<ButtonsRenderer>,
    /// Only populate pages near the current one.
    pub load_minimal: bool,
    /// How many pages on each side of the current one stay populated.
    pub load_minimal_size: usize,
    /// Delay before the silent reposition after a loop-boundary transition.
    pub loop_jump_delay: Duration,
    /// Called when the user starts dragging.
    #[setters(skip)]
    pub on_scroll_begin_drag: Option<ScrollCallback>,
    /// Called after a scroll settles on a new slide.
    #[setters(skip)]
    pub on_momentum_scroll_end: Option<ScrollCallback>,
    /// Called when the user lifts the finger.
    #[setters(skip)]
    pub on_scroll_end_drag: Option<ScrollCallback>,
}

impl Default for SwiperArgs {
    fn default() -> Self {
        Self {
            axis: SwiperAxis::Horizontal,
            loop_enabled: true,
            index: 0,
            width: None,
            height: None,
            window_size: DEFAULT_WINDOW_SIZE,
            autoplay: AutoplayArgs::default(),
            shows_pagination: true,
            pagination: PaginationStyle::default(),
            render_pagination: None,
            shows_buttons: false,
            buttons: ButtonStyle::default(),
            render_buttons: None,
            load_minimal: false,
            load_minimal_size: 1,
            loop_jump_delay: DEFAULT_LOOP_JUMP_DELAY,
            on_scroll_begin_drag: None,
            on_momentum_scroll_end: None,
            on_scroll_end_drag: None,
        }
    }
}

impl SwiperArgs {
    /// Replaces the default pagination renderer.
    pub fn render_pagination(
        mut self,
        renderer: impl Fn(&PaginationProps) -> Option<PaginationView> + Send + Sync + 'static,
    ) -> Self {
        self.render_pagination = Some(Arc::new(renderer));
        self
    }

    /// Replaces the default button renderer.
    pub fn render_buttons(
        mut self,
        renderer: impl Fn(&ButtonProps) -> ButtonBar + Send + Sync + 'static,
    ) -> Self {
        self.render_buttons = Some(Arc::new(renderer));
        self
    }

    /// Sets the drag-start callback.
    pub fn on_scroll_begin_drag(
        mut self,
        callback: impl Fn(&ScrollEvent, &SwiperSnapshot) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_begin_drag = Some(Arc::new(callback));
        self
    }

    /// Sets the settle callback.
    pub fn on_momentum_scroll_end(
        mut self,
        callback: impl Fn(&ScrollEvent, &SwiperSnapshot) + Send + Sync + 'static,
    ) -> Self {
        self.on_momentum_scroll_end = Some(Arc::new(callback));
        self
    }

    /// Sets the drag-end callback.
    pub fn on_scroll_end_drag(
        mut self,
        callback: impl Fn(&ScrollEvent, &SwiperSnapshot) + Send + Sync + 'static,
    ) -> Self {
        self.on_scroll_end_drag = Some(Arc::new(callback));
        self
    }

    /// Checks the configuration against `slide_count` slides and reports the
    /// first defect found.
    pub fn validate(&self, slide_count: usize) -> Result<(), SwiperError> {
        let dimensions = [
            ("width", self.width),
            ("height", self.height),
            ("window width", Some(self.window_size.width)),
            ("window height", Some(self.window_size.height)),
        ];
        for (dimension, value) in dimensions {
            if let Some(value) = value
                && !is_valid_length(value)
            {
                return Err(SwiperError::InvalidDimension { dimension, value });
            }
        }
        if self.autoplay.enabled && self.autoplay.timeout.is_zero() {
            return Err(SwiperError::ZeroAutoplayTimeout);
        }
        let total = slide_count.max(1);
        if self.index >= total {
            return Err(SwiperError::IndexOutOfRange {
                index: self.index,
                total,
            });
        }
        Ok(())
    }

    /// Viewport size after falling back on invalid or missing values.
    pub fn resolved_size(&self) -> SwiperSize {
        let window = if self.window_size.is_valid() {
            self.window_size
        } else {
            DEFAULT_WINDOW_SIZE
        };
        SwiperSize {
            width: self
                .width
                .filter(|w| is_valid_length(*w))
                .unwrap_or(window.width),
            height: self
                .height
                .filter(|h| is_valid_length(*h))
                .unwrap_or(window.height),
        }
    }

    /// Lazy-load radius, when lazy loading is on.
    pub fn lazy_radius(&self) -> Option<usize> {
        self.load_minimal.then_some(self.load_minimal_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let args = SwiperArgs::default();
        assert!(args.axis.is_horizontal());
        assert!(args.loop_enabled);
        assert!(!args.autoplay.enabled);
        assert_eq!(args.autoplay.timeout, Duration::from_millis(2500));
        assert_eq!(args.autoplay.direction, AutoplayDirection::Forward);
        assert!(args.shows_pagination);
        assert!(!args.shows_buttons);
        assert_eq!(args.lazy_radius(), None);
        assert_eq!(args.loop_jump_delay, Duration::from_millis(50));
        assert_eq!(args.validate(3), Ok(()));
    }

    #[test]
    fn setters_chain() {
        let args = SwiperArgs::default()
            .axis(SwiperAxis::Vertical)
            .width(200.0)
            .load_minimal(true)
            .load_minimal_size(2)
            .autoplay(AutoplayArgs::default().enabled(true));
        assert_eq!(args.width, Some(200.0));
        assert_eq!(args.lazy_radius(), Some(2));
        assert!(args.autoplay.enabled);
        assert_eq!(args.resolved_size(), SwiperSize::new(200.0, 640.0));
    }

    #[test]
    fn validate_reports_defects() {
        let args = SwiperArgs::default().height(-5.0);
        assert_eq!(
            args.validate(2),
            Err(SwiperError::InvalidDimension {
                dimension: "height",
                value: -5.0,
            })
        );

        let args = SwiperArgs::default()
            .autoplay(AutoplayArgs::default().enabled(true).timeout(Duration::ZERO));
        assert_eq!(args.validate(2), Err(SwiperError::ZeroAutoplayTimeout));

        let args = SwiperArgs::default().index(3);
        assert_eq!(
            args.validate(3),
            Err(SwiperError::IndexOutOfRange { index: 3, total: 3 })
        );
        assert_eq!(
            args.validate(0).err(),
            Some(SwiperError::IndexOutOfRange { index: 3, total: 1 })
        );
    }

    #[test]
    fn invalid_sizes_fall_back() {
        let args = SwiperArgs::default()
            .width(f32::NAN)
            .window_size(SwiperSize::new(0.0, 10.0));
        assert_eq!(args.resolved_size(), DEFAULT_WINDOW_SIZE);
    }
}
