//! Rendered page list: loop padding and the lazy-load window.

/// What a rendered page shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageContent {
    /// The caller's slide with this index.
    Slide(usize),
    /// Placeholder for a slide outside the lazy-load window.
    ///
    /// The crate only marks the slot; the host draws its own loading visual
    /// here.
    Loading,
    /// The swiper has no slides at all.
    Empty,
}

/// Stable identity of a rendered page.
///
/// Loading placeholders are keyed apart from real pages so hosts recreate the
/// page when its slide comes into the window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    /// A page showing content.
    Page(usize),
    /// A loading placeholder.
    Loading(usize),
}

/// One page handed to the host scroll container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlot {
    /// Key for the host's child reconciliation.
    pub key: PageKey,
    /// Content of the page.
    pub content: PageContent,
}

/// Builds the rendered page list.
///
/// - `slide_count` is the caller's slide count, possibly zero.
/// - `index` is the logical current slide.
/// - `looping` wraps the originals with clones of the opposite ends.
/// - `lazy_radius`, when set, keeps only pages within that distance of the
///   current page populated.
pub fn build_pages(
    slide_count: usize,
    index: usize,
    looping: bool,
    lazy_radius: Option<usize>,
) -> Vec<PageSlot> {
    if slide_count == 0 {
        return vec![PageSlot {
            key: PageKey::Page(0),
            content: PageContent::Empty,
        }];
    }
    if slide_count == 1 {
        return vec![PageSlot {
            key: PageKey::Page(0),
            content: PageContent::Slide(0),
        }];
    }

    let pad = usize::from(looping);
    let mut slides = Vec::with_capacity(slide_count + 2 * pad);
    if looping {
        slides.push(slide_count - 1);
    }
    slides.extend(0..slide_count);
    if looping {
        slides.push(0);
    }

    let current = index + pad;
    slides
        .into_iter()
        .enumerate()
        .map(|(page, slide)| {
            let in_window = lazy_radius
                .map(|radius| page.abs_diff(current) <= radius)
                .unwrap_or(true);
            if in_window {
                PageSlot {
                    key: PageKey::Page(page),
                    content: PageContent::Slide(slide),
                }
            } else {
                PageSlot {
                    key: PageKey::Loading(page),
                    content: PageContent::Loading,
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contents(pages: &[PageSlot]) -> Vec<PageContent> {
        pages.iter().map(|p| p.content).collect()
    }

    #[test]
    fn looping_wraps_with_clones() {
        let pages = build_pages(3, 0, true, None);
        assert_eq!(
            contents(&pages),
            vec![
                PageContent::Slide(2),
                PageContent::Slide(0),
                PageContent::Slide(1),
                PageContent::Slide(2),
                PageContent::Slide(0),
            ]
        );
        let keys: Vec<_> = pages.iter().map(|p| p.key).collect();
        assert_eq!(keys[4], PageKey::Page(4));
    }

    #[test]
    fn non_looping_is_the_originals() {
        let pages = build_pages(3, 1, false, None);
        assert_eq!(
            contents(&pages),
            vec![
                PageContent::Slide(0),
                PageContent::Slide(1),
                PageContent::Slide(2),
            ]
        );
    }

    #[test]
    fn single_and_empty() {
        assert_eq!(
            contents(&build_pages(1, 0, true, Some(0))),
            vec![PageContent::Slide(0)]
        );
        assert_eq!(
            contents(&build_pages(0, 0, true, None)),
            vec![PageContent::Empty]
        );
    }

    #[test]
    fn lazy_window_accounts_for_loop_padding() {
        // Rendered pages: [4, 0, 1, 2, 3, 4, 0], current index 2 sits at page 3.
        let pages = build_pages(5, 2, true, Some(1));
        assert_eq!(
            contents(&pages),
            vec![
                PageContent::Loading,
                PageContent::Loading,
                PageContent::Slide(1),
                PageContent::Slide(2),
                PageContent::Slide(3),
                PageContent::Loading,
                PageContent::Loading,
            ]
        );
        assert_eq!(pages[0].key, PageKey::Loading(0));
        assert_eq!(pages[2].key, PageKey::Page(2));
    }

    #[test]
    fn lazy_window_at_start_without_loop() {
        let pages = build_pages(4, 0, false, Some(1));
        assert_eq!(
            contents(&pages),
            vec![
                PageContent::Slide(0),
                PageContent::Slide(1),
                PageContent::Loading,
                PageContent::Loading,
            ]
        );
    }
}
