use crate::constants::*;
use crate::dom;
use motion_core::{nearest_to_center, WindowSize};
use web_sys as web;

/// Sticky nav of the video reel: names the item closest to the viewport
/// centre and shows its position as `(i / n)`.
pub struct ReelNav {
    items: Vec<web::Element>,
    titles: Vec<String>,
    title_el: Option<web::Element>,
    count_el: Option<web::Element>,
    active: Option<usize>,
}

impl ReelNav {
    pub fn new(reel: &web::Element, nav: &web::Element) -> Option<Self> {
        let items = dom::query_all(reel, FOCUS_ITEM_SELECTOR);
        if items.is_empty() {
            return None;
        }
        let titles = items
            .iter()
            .map(|el| el.get_attribute(ITEM_TITLE_ATTR).unwrap_or_default())
            .collect();
        Some(Self {
            items,
            titles,
            title_el: dom::query(nav, REEL_TITLE_SELECTOR),
            count_el: dom::query(nav, REEL_COUNT_SELECTOR),
            active: None,
        })
    }

    pub fn update(&mut self, window: WindowSize) {
        if !window.is_available() {
            return;
        }
        let rects: Vec<_> = self.items.iter().map(dom::rect_of).collect();
        let Some(index) = nearest_to_center(&rects, window.height) else {
            return;
        };
        if self.active == Some(index) {
            return;
        }
        self.active = Some(index);
        if let Some(el) = &self.title_el {
            el.set_text_content(self.titles.get(index).map(String::as_str));
        }
        if let Some(el) = &self.count_el {
            let label = format!("({} / {})", index + 1, self.items.len());
            el.set_text_content(Some(&label));
        }
    }
}
