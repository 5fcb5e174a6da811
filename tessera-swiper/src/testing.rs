//! Test double for [`ScrollHost`].

use crate::{
    axis::ScrollPosition,
    host::{HostPaging, ScrollHost},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum HostCall {
    ScrollTo(ScrollPosition, bool),
    SetPage(usize, bool),
}

/// Records every request the swiper makes.
#[derive(Debug)]
pub(crate) struct RecordingHost {
    paging: HostPaging,
    pub(crate) calls: Vec<HostCall>,
}

impl RecordingHost {
    pub(crate) fn pager() -> Self {
        Self {
            paging: HostPaging::Page,
            calls: Vec::new(),
        }
    }

    pub(crate) fn scroll_view() -> Self {
        Self {
            paging: HostPaging::Offset,
            calls: Vec::new(),
        }
    }
}

impl ScrollHost for RecordingHost {
    fn paging(&self) -> HostPaging {
        self.paging
    }

    fn scroll_to(&mut self, position: ScrollPosition, animated: bool) {
        self.calls.push(HostCall::ScrollTo(position, animated));
    }

    fn set_page(&mut self, page: usize, animated: bool) {
        self.calls.push(HostCall::SetPage(page, animated));
    }
}

/// Routes `tracing` output through the test harness.
pub(crate) fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
