//! Carousel ("swiper") widget logic for paged scroll containers.
//!
//! A swiper pages through a fixed set of slides horizontally or vertically. It
//! can loop, autoplay, show pagination dots and previous/next buttons, and keep
//! only the slides near the current one populated.
//!
//! The crate is headless. The toolkit's paging container is driven through
//! [`ScrollHost`], its notifications are fed back as [`ScrollEvent`]s, and each
//! frame is described by a [`SwiperFrame`].
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use tessera_swiper::{
//!     AutoplayArgs, HostPaging, ScrollHost, ScrollPosition, SwiperArgs, SwiperController,
//! };
//!
//! struct Pager;
//!
//! impl ScrollHost for Pager {
//!     fn paging(&self) -> HostPaging {
//!         HostPaging::Page
//!     }
//!     fn scroll_to(&mut self, _position: ScrollPosition, _animated: bool) {}
//!     fn set_page(&mut self, _page: usize, _animated: bool) {}
//! }
//!
//! let start = Instant::now();
//! let mut controller = SwiperController::new(
//!     SwiperArgs::default().autoplay(
//!         AutoplayArgs::default()
//!             .enabled(true)
//!             .timeout(Duration::from_secs(2)),
//!     ),
//!     3,
//! );
//! controller.mount(start);
//! controller.tick(start + Duration::from_secs(2), &mut Pager);
//! assert_eq!(controller.index(), 1);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

mod timer;

pub mod args;
pub mod axis;
pub mod buttons;
pub mod color;
pub mod controller;
pub mod error;
pub mod handle;
pub mod host;
pub mod pages;
pub mod pagination;
pub mod swiper;

#[cfg(test)]
pub(crate) mod testing;

pub use args::{
    AutoplayArgs, AutoplayDirection, ButtonsRenderer, DEFAULT_WINDOW_SIZE, PaginationRenderer,
    ScrollCallback, SwiperArgs,
};
pub use axis::{ScrollPosition, SwiperAxis, SwiperSize};
pub use buttons::{ButtonBar, ButtonProps, ButtonStyle, NavAction, NavButton};
pub use color::Color;
pub use controller::{SwiperController, SwiperSnapshot};
pub use error::SwiperError;
pub use handle::SwiperHandle;
pub use host::{DetachedHost, HostPaging, ScrollEvent, ScrollHost};
pub use pages::{PageContent, PageKey, PageSlot};
pub use pagination::{Dot, DotStyle, PaginationProps, PaginationStyle, PaginationView};
pub use swiper::{SwiperFrame, swiper};
