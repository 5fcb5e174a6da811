//! Index/offset state machine behind a swiper.
//!
//! The controller keeps the logical index in step with the host's scroll
//! position. When looping, the host renders `[last, ..slides, first]`, so the
//! committed offset is `(index + 1) * step`. Settling on one of the clones wraps
//! the index and schedules a silent jump back onto the matching real page.
//!
//! Time is passed in explicitly. Call [`SwiperController::tick`] once per frame
//! to fire the autoplay and loop-jump deadlines.

use std::time::Instant;

use tracing::{debug, warn};

use crate::{
    args::{ScrollCallback, SwiperArgs},
    axis::{ScrollPosition, SwiperAxis, SwiperSize},
    buttons::NavAction,
    host::{HostPaging, ScrollEvent, ScrollHost},
    timer::Deadline,
};

/// Offsets closer than this are treated as the same scroll position.
const OFFSET_EPSILON: f32 = 0.5;

/// Full swiper state, handed to every passthrough callback.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwiperSnapshot {
    /// Number of pages presented (at least one).
    pub total: usize,
    /// Logical current slide.
    pub index: usize,
    /// Slide nearest to the live scroll position.
    pub visual_index: usize,
    /// Committed main-axis offset.
    pub offset: f32,
    /// Whether a scroll is in progress.
    pub is_scrolling: bool,
    /// Whether autoplay stopped at a non-looping edge.
    pub autoplay_end: bool,
    /// Whether a silent loop jump is pending.
    pub loop_jump: bool,
    /// Viewport size.
    pub size: SwiperSize,
}

/// A passthrough callback waiting to run outside the handle's lock.
#[derive(Clone)]
pub(crate) struct PendingCallback {
    callback: ScrollCallback,
    event: ScrollEvent,
    snapshot: SwiperSnapshot,
}

impl PendingCallback {
    pub(crate) fn run(self) {
        (self.callback)(&self.event, &self.snapshot);
    }
}

/// Controller for swiper components.
#[derive(Clone)]
pub struct SwiperController {
    args: SwiperArgs,
    slide_count: usize,
    total: usize,
    index: usize,
    visual_index: usize,
    size: SwiperSize,
    offset: f32,
    content_offset: f32,
    is_scrolling: bool,
    autoplay_end: bool,
    loop_jump: bool,
    autoplay_timer: Deadline,
    loop_jump_timer: Deadline,
    mounted: bool,
    deferred: Option<Vec<PendingCallback>>,
}

impl SwiperController {
    /// Creates a controller for `slide_count` slides.
    pub fn new(args: SwiperArgs, slide_count: usize) -> Self {
        let size = args.resolved_size();
        let mut controller = Self {
            args,
            slide_count: 0,
            total: 0,
            index: 0,
            visual_index: 0,
            size,
            offset: 0.0,
            content_offset: 0.0,
            is_scrolling: false,
            autoplay_end: false,
            loop_jump: false,
            autoplay_timer: Deadline::default(),
            loop_jump_timer: Deadline::default(),
            mounted: false,
            deferred: None,
        };
        let args = controller.args.clone();
        controller.reset(args, slide_count, true);
        controller
    }

    /// Applies new configuration or a new slide count.
    ///
    /// The current index survives unless the slide count changed. The offset
    /// handed to the host only moves when the slide count or the viewport size
    /// changed, so re-renders during a swipe do not yank the content.
    pub fn update(&mut self, args: SwiperArgs, slide_count: usize) {
        let size_changed = args.resolved_size() != self.size;
        if !args.autoplay.enabled {
            self.autoplay_timer.clear();
        }
        self.reset(args, slide_count, size_changed);
    }

    fn reset(&mut self, args: SwiperArgs, slide_count: usize, size_changed: bool) {
        if let Err(err) = args.validate(slide_count) {
            warn!(%err, "degrading swiper configuration");
        }

        let total = slide_count.max(1);
        let total_changed = self.total != total;
        let bounded_index = if total > 1 {
            args.index.min(total - 1)
        } else {
            0
        };

        self.size = args.resolved_size();
        self.args = args;
        self.slide_count = slide_count;
        self.total = total;
        self.is_scrolling = false;
        self.autoplay_end = false;
        // A pending silent jump still points at a valid page unless the page
        // list changed shape.
        if total_changed || !self.looping() {
            self.loop_jump = false;
            self.loop_jump_timer.clear();
        }
        if total_changed {
            self.index = bounded_index;
            self.visual_index = bounded_index;
        }

        self.offset = if total > 1 {
            self.offset_for_page(self.index + self.loop_pad())
        } else {
            0.0
        };
        if total_changed || size_changed {
            self.content_offset = self.offset;
        }
    }

    /// Starts autoplay. Call once the host is attached.
    pub fn mount(&mut self, now: Instant) {
        self.mounted = true;
        self.arm_autoplay(now);
    }

    /// Cancels both timers. Later ticks do nothing until the next mount.
    pub fn unmount(&mut self) {
        self.mounted = false;
        self.autoplay_timer.clear();
        self.loop_jump_timer.clear();
    }

    /// Fires due deadlines.
    pub fn tick(&mut self, now: Instant, host: &mut impl ScrollHost) {
        if !self.mounted {
            return;
        }
        if self.loop_jump_timer.take_expired(now) {
            self.perform_loop_jump(host);
        }
        if self.autoplay_timer.take_expired(now) {
            self.fire_autoplay(now, host);
        }
    }

    /// The user started dragging.
    pub fn on_scroll_begin_drag(&mut self, event: &ScrollEvent) {
        self.is_scrolling = true;
        self.notify(self.args.on_scroll_begin_drag.clone(), event);
    }

    /// The host reported an intermediate scroll position.
    ///
    /// Only the visual index moves; the logical index waits for the settle.
    pub fn on_scroll(&mut self, event: &ScrollEvent) {
        let step = self.step();
        let Some(pos) = event.main_offset(self.args.axis, step) else {
            return;
        };
        if step <= f32::EPSILON || self.total == 0 {
            return;
        }

        let total = self.total as i64;
        let mut visual = ((pos + step / 2.0) / step).floor() as i64;
        if self.looping() {
            visual -= 1;
            if visual < 0 {
                visual = total - 1;
            } else if visual >= total {
                visual = 0;
            }
        }
        self.visual_index = visual.clamp(0, total - 1) as usize;
    }

    /// The user lifted the finger.
    ///
    /// A drag that bounced off a non-looping edge never settles on a new page,
    /// so the scrolling flag is released here.
    pub fn on_scroll_end_drag(&mut self, event: &ScrollEvent) {
        if let Some(offset) = event.content_offset.map(|p| self.args.axis.main_offset(p))
            && (offset - self.offset).abs() < OFFSET_EPSILON
            && (self.index == 0 || self.index + 1 == self.total)
        {
            self.is_scrolling = false;
        }
        self.notify(self.args.on_scroll_end_drag.clone(), event);
    }

    /// The host finished scrolling.
    ///
    /// Returns `true` if the reported position moved the swiper. A report for
    /// the already committed offset changes nothing and fires no callback.
    pub fn on_momentum_scroll_end(&mut self, event: &ScrollEvent, now: Instant) -> bool {
        self.is_scrolling = false;
        let Some(offset) = event.main_offset(self.args.axis, self.step()) else {
            return false;
        };
        if !self.update_index(offset) {
            return false;
        }

        self.arm_autoplay(now);
        if self.loop_jump {
            self.loop_jump_timer.schedule(now, self.args.loop_jump_delay);
        }
        self.notify(self.args.on_momentum_scroll_end.clone(), event);
        true
    }

    fn update_index(&mut self, offset: f32) -> bool {
        let diff = offset - self.offset;
        let step = self.step();
        if diff.abs() < OFFSET_EPSILON || step <= f32::EPSILON {
            return false;
        }

        let total = self.total as i64;
        let mut new_index = self.index as i64 + (diff / step).round() as i64;
        let mut new_offset = offset;
        let mut loop_jump = false;

        if self.looping() {
            if new_index <= -1 {
                new_index = total - 1;
                new_offset = step * total as f32;
                loop_jump = true;
            } else if new_index >= total {
                new_index = 0;
                new_offset = step;
                loop_jump = true;
            }
        } else {
            new_index = new_index.clamp(0, total - 1);
        }

        let previous = self.index;
        self.offset = new_offset;
        self.index = new_index as usize;
        self.visual_index = self.index;
        self.loop_jump = loop_jump;
        if loop_jump {
            self.content_offset = new_offset;
        }
        debug!(from = previous, to = self.index, loop_jump, "swiper index updated");
        true
    }

    /// Scrolls `delta` slides from the current one.
    ///
    /// Ignored while a scroll is in progress, with fewer than two slides, or
    /// when a non-looping swiper is already at the requested edge. Returns
    /// whether a scroll was issued.
    pub fn scroll_by(
        &mut self,
        delta: isize,
        animated: bool,
        now: Instant,
        host: &mut impl ScrollHost,
    ) -> bool {
        if self.is_scrolling || self.total < 2 {
            return false;
        }

        let current = self.index + self.loop_pad();
        let last_page = self.page_count() - 1;
        let target = current.saturating_add_signed(delta).min(last_page);
        if target == current {
            return false;
        }

        let paging = host.paging();
        match paging {
            HostPaging::Page => host.set_page(target, animated),
            HostPaging::Offset => host.scroll_to(self.position_for_page(target), animated),
        }

        self.is_scrolling = true;
        self.autoplay_end = false;

        if !animated || paging == HostPaging::Page {
            self.on_momentum_scroll_end(&ScrollEvent::page(target), now);
        }
        true
    }

    /// Scrolls to the next slide.
    pub fn scroll_forward(&mut self, now: Instant, host: &mut impl ScrollHost) -> bool {
        self.scroll_by(1, true, now, host)
    }

    /// Scrolls to the previous slide.
    pub fn scroll_backward(&mut self, now: Instant, host: &mut impl ScrollHost) -> bool {
        self.scroll_by(-1, true, now, host)
    }

    /// Dispatches a navigation button press.
    pub fn press(&mut self, action: NavAction, now: Instant, host: &mut impl ScrollHost) -> bool {
        self.scroll_by(action.delta(), true, now, host)
    }

    fn arm_autoplay(&mut self, now: Instant) {
        if self.is_scrolling || self.total < 2 || !self.autoplay_enabled() || self.autoplay_end {
            return;
        }
        self.autoplay_timer.schedule(now, self.args.autoplay.timeout);
    }

    fn fire_autoplay(&mut self, now: Instant, host: &mut impl ScrollHost) {
        if !self.autoplay_enabled() || self.total < 2 {
            return;
        }
        let delta = self.args.autoplay.direction.delta();
        let at_edge = if delta > 0 {
            self.index + 1 == self.total
        } else {
            self.index == 0
        };
        if !self.looping() && at_edge {
            self.autoplay_end = true;
            debug!(index = self.index, "autoplay reached the last slide");
            return;
        }
        debug!(index = self.index, delta, "autoplay advancing");
        self.scroll_by(delta, true, now, host);
    }

    fn perform_loop_jump(&mut self, host: &mut impl ScrollHost) {
        if !self.loop_jump {
            return;
        }
        let page = self.index + self.loop_pad();
        match host.paging() {
            HostPaging::Page => host.set_page(page, false),
            HostPaging::Offset => host.scroll_to(self.position_for_page(page), false),
        }
        self.loop_jump = false;
        debug!(page, "silent loop jump");
    }

    fn notify(&mut self, callback: Option<ScrollCallback>, event: &ScrollEvent) {
        let Some(callback) = callback else {
            return;
        };
        let pending = PendingCallback {
            callback,
            event: *event,
            snapshot: self.snapshot(),
        };
        match &mut self.deferred {
            Some(queue) => queue.push(pending),
            None => pending.run(),
        }
    }

    /// Queues callbacks instead of running them until [`Self::take_deferred`].
    pub(crate) fn defer_callbacks(&mut self) {
        self.deferred.get_or_insert_with(Vec::new);
    }

    /// Stops queueing and returns the callbacks queued so far.
    pub(crate) fn take_deferred(&mut self) -> Vec<PendingCallback> {
        self.deferred.take().unwrap_or_default()
    }

    /// Returns the full state.
    pub fn snapshot(&self) -> SwiperSnapshot {
        SwiperSnapshot {
            total: self.total,
            index: self.index,
            visual_index: self.visual_index,
            offset: self.offset,
            is_scrolling: self.is_scrolling,
            autoplay_end: self.autoplay_end,
            loop_jump: self.loop_jump,
            size: self.size,
        }
    }

    /// Configuration in effect.
    pub fn args(&self) -> &SwiperArgs {
        &self.args
    }

    /// Number of slides the caller supplied, possibly zero.
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Number of pages presented (at least one).
    pub fn total(&self) -> usize {
        self.total
    }

    /// Logical current slide.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Slide nearest to the live scroll position.
    pub fn visual_index(&self) -> usize {
        self.visual_index
    }

    /// Whether a scroll is in progress.
    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    /// Whether autoplay stopped at a non-looping edge.
    pub fn autoplay_ended(&self) -> bool {
        self.autoplay_end
    }

    /// Whether an autoplay advance is scheduled.
    pub fn autoplay_pending(&self) -> bool {
        self.autoplay_timer.is_pending()
    }

    /// Whether a silent loop jump is scheduled.
    pub fn loop_jump_pending(&self) -> bool {
        self.loop_jump_timer.is_pending()
    }

    /// Viewport size.
    pub fn size(&self) -> SwiperSize {
        self.size
    }

    /// Paging axis.
    pub fn axis(&self) -> SwiperAxis {
        self.args.axis
    }

    /// Whether the swiper actually wraps. Never true for a single page.
    pub fn looping(&self) -> bool {
        self.args.loop_enabled && self.total > 1
    }

    /// Committed main-axis offset.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Content offset the host should display.
    pub fn content_offset(&self) -> ScrollPosition {
        self.args.axis.position(self.content_offset)
    }

    /// Number of rendered pages, including loop clones.
    pub fn page_count(&self) -> usize {
        if self.total < 2 {
            1
        } else {
            self.total + 2 * self.loop_pad()
        }
    }

    fn autoplay_enabled(&self) -> bool {
        self.args.autoplay.enabled && !self.args.autoplay.timeout.is_zero()
    }

    fn loop_pad(&self) -> usize {
        usize::from(self.looping())
    }

    fn step(&self) -> f32 {
        self.args.axis.main(self.size)
    }

    fn offset_for_page(&self, page: usize) -> f32 {
        page as f32 * self.step()
    }

    fn position_for_page(&self, page: usize) -> ScrollPosition {
        self.args.axis.position(self.offset_for_page(page))
    }
}
