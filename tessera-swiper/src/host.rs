//! The scroll primitive a swiper drives.
//!
//! ## Usage
//!
//! Implement [`ScrollHost`] for the toolkit's paging container and forward its
//! drag/scroll/settle notifications to the
//! [`SwiperController`](crate::SwiperController) as [`ScrollEvent`]s.

use crate::axis::{ScrollPosition, SwiperAxis};

/// How the host addresses its content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostPaging {
    /// A free scroll view with paging enabled. Positions are content offsets
    /// and animated scrolls report their own settle event.
    Offset,
    /// A page-based pager. Positions are page numbers and settle events are
    /// synthesized by the swiper after every programmatic page change.
    Page,
}

/// Programmatic control over the host scroll container.
pub trait ScrollHost {
    /// Addressing mode of this host.
    fn paging(&self) -> HostPaging;

    /// Scrolls the content to `position`.
    fn scroll_to(&mut self, position: ScrollPosition, animated: bool);

    /// Shows the rendered page with index `page`.
    fn set_page(&mut self, page: usize, animated: bool);
}

/// Host that is not attached to anything yet. All requests are dropped.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedHost;

impl ScrollHost for DetachedHost {
    fn paging(&self) -> HostPaging {
        HostPaging::Offset
    }

    fn scroll_to(&mut self, _position: ScrollPosition, _animated: bool) {}

    fn set_page(&mut self, _page: usize, _animated: bool) {}
}

/// A scroll notification from the host.
///
/// Offset hosts fill `content_offset`; pager hosts fill `position`.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct ScrollEvent {
    /// Content offset of the scroll container.
    pub content_offset: Option<ScrollPosition>,
    /// Rendered page index selected by a pager host.
    pub position: Option<usize>,
}

impl ScrollEvent {
    /// Event carrying a content offset.
    pub fn offset(content_offset: ScrollPosition) -> Self {
        Self {
            content_offset: Some(content_offset),
            position: None,
        }
    }

    /// Event carrying a rendered page index.
    pub fn page(position: usize) -> Self {
        Self {
            content_offset: None,
            position: Some(position),
        }
    }

    /// Main-axis offset described by this event. Page positions are scaled by
    /// `step`.
    pub(crate) fn main_offset(&self, axis: SwiperAxis, step: f32) -> Option<f32> {
        if let Some(offset) = self.content_offset {
            return Some(axis.main_offset(offset));
        }
        self.position.map(|page| page as f32 * step)
    }
}
