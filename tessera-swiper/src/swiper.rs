//! Swiper frame: everything a host needs to draw one frame of the widget.
//!
//! ## Usage
//!
//! Show onboarding steps, banners, or media carousels that loop and autoplay.

use crate::{
    axis::{ScrollPosition, SwiperAxis, SwiperSize},
    buttons::{ButtonBar, ButtonProps, buttons},
    controller::SwiperController,
    pages::{PageSlot, build_pages},
    pagination::{PaginationProps, PaginationView, pagination},
};

/// One frame of swiper output.
#[derive(Clone, Debug, PartialEq)]
pub struct SwiperFrame {
    /// Paging axis.
    pub axis: SwiperAxis,
    /// Viewport size; every page has this size.
    pub size: SwiperSize,
    /// Content offset the host scroll container should show.
    pub content_offset: ScrollPosition,
    /// Rendered pages in order, including loop clones.
    pub pages: Vec<PageSlot>,
    /// Pagination overlay, if shown.
    pub pagination: Option<PaginationView>,
    /// Navigation buttons overlay, if shown.
    pub buttons: Option<ButtonBar>,
}

/// # swiper
///
/// Renders the current frame of a swiper.
///
/// Pagination and buttons are omitted when disabled in the configuration and
/// whenever there are fewer than two slides, custom renderers included.
///
/// ## Examples
///
/// ```
/// use tessera_swiper::{SwiperArgs, SwiperController, swiper};
///
/// let controller = SwiperController::new(SwiperArgs::default().shows_buttons(true), 3);
/// let frame = swiper(&controller);
///
/// assert_eq!(frame.pages.len(), 5);
/// assert_eq!(frame.pagination.map(|p| p.dots.len()), Some(3));
/// assert!(frame.buttons.is_some());
/// ```
pub fn swiper(controller: &SwiperController) -> SwiperFrame {
    let args = controller.args();
    let total = controller.total();
    let index = controller.index();

    let pages = build_pages(
        controller.slide_count(),
        index,
        controller.looping(),
        args.lazy_radius(),
    );

    let pagination = (args.shows_pagination && total >= 2)
        .then(|| {
            let props = PaginationProps {
                index,
                visual_index: controller.visual_index(),
                total,
                axis: args.axis,
            };
            match &args.render_pagination {
                Some(render) => render(&props),
                None => pagination(total, props.visual_index, args.axis, &args.pagination),
            }
        })
        .flatten();

    let buttons = (args.shows_buttons && total >= 2).then(|| {
        let props = ButtonProps {
            index,
            total,
            loop_enabled: args.loop_enabled,
        };
        match &args.render_buttons {
            Some(render) => render(&props),
            None => buttons(&props, &args.buttons),
        }
    });

    SwiperFrame {
        axis: args.axis,
        size: controller.size(),
        content_offset: controller.content_offset(),
        pages,
        pagination,
        buttons,
    }
}
