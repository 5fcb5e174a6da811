//! Runs a looping, autoplaying swiper against a simulated pager and logs what
//! the host is asked to do.
//!
//! Set `RUST_LOG=tessera_swiper=debug` to see the controller's transitions.

use std::time::{Duration, Instant};

use tessera_swiper::{
    AutoplayArgs, HostPaging, NavAction, PageContent, ScrollEvent, ScrollHost, ScrollPosition,
    SwiperArgs, SwiperFrame, SwiperHandle,
};
use tracing::info;

const SLIDES: [&str; 4] = ["sunrise", "harbor", "market", "dusk"];
const FRAME: Duration = Duration::from_millis(16);

/// Pager that snaps instantly and remembers the page it shows.
struct SimulatedPager {
    page: usize,
}

impl ScrollHost for SimulatedPager {
    fn paging(&self) -> HostPaging {
        HostPaging::Page
    }

    fn scroll_to(&mut self, position: ScrollPosition, animated: bool) {
        info!(?position, animated, "host scroll_to");
    }

    fn set_page(&mut self, page: usize, animated: bool) {
        info!(page, animated, "host set_page");
        self.page = page;
    }
}

fn main() {
    init_tracing();

    let args = SwiperArgs::default()
        .width(390.0)
        .height(220.0)
        .shows_buttons(true)
        .load_minimal(true)
        .autoplay(
            AutoplayArgs::default()
                .enabled(true)
                .timeout(Duration::from_millis(500)),
        )
        .on_momentum_scroll_end(|_, snapshot| {
            info!(
                index = snapshot.index,
                loop_jump = snapshot.loop_jump,
                "settled"
            );
        });

    let handle = SwiperHandle::new(args, SLIDES.len());
    let mut host = SimulatedPager { page: 1 };
    let start = Instant::now();
    handle.with_mut(|c| c.mount(start));

    // Let autoplay run a full lap plus one.
    let mut now = start;
    for _ in 0..200 {
        now += FRAME;
        handle.with_mut(|c| c.tick(now, &mut host));
    }
    log_frame(&handle.frame());

    // A drag pauses autoplay; the settle re-arms it.
    handle.with_mut(|c| c.on_scroll_begin_drag(&ScrollEvent::default()));
    for _ in 0..60 {
        now += FRAME;
        handle.with_mut(|c| c.tick(now, &mut host));
    }
    let dragged_to = host.page.saturating_sub(1);
    handle.with_mut(|c| c.on_momentum_scroll_end(&ScrollEvent::page(dragged_to), now));
    host.page = dragged_to;
    log_frame(&handle.frame());

    if let Some(prev) = handle.frame().buttons.and_then(|bar| bar.prev) {
        handle.with_mut(|c| c.press(prev.action, now, &mut host));
    }
    handle.with_mut(|c| c.press(NavAction::Forward, now, &mut host));
    log_frame(&handle.frame());

    handle.with_mut(|c| c.unmount());
}

fn log_frame(frame: &SwiperFrame) {
    let pages: Vec<&str> = frame
        .pages
        .iter()
        .map(|slot| match slot.content {
            PageContent::Slide(i) => SLIDES[i],
            PageContent::Loading => "…",
            PageContent::Empty => "",
        })
        .collect();
    let active = frame
        .pagination
        .as_ref()
        .and_then(|p| p.active_index())
        .map(|i| SLIDES[i]);
    info!(?pages, ?active, offset = ?frame.content_offset, "frame");
}

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,swiper_demo=info,tessera_swiper=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
