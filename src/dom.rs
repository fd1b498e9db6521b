use crate::constants::NBSP;
use motion_core::{MotionError, Viewport, ViewportRect, WindowSize};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Fresh bounding box of `el`, `None` when the element is detached or the
/// browser reports garbage.
pub fn rect_of(el: &web::Element) -> Option<ViewportRect> {
    if !el.is_connected() {
        return None;
    }
    let r = el.get_bounding_client_rect();
    let rect = ViewportRect::new(
        r.top() as f32,
        r.right() as f32,
        r.bottom() as f32,
        r.left() as f32,
    );
    rect.is_finite().then_some(rect)
}

pub fn window_size() -> WindowSize {
    let Some(w) = web::window() else {
        return WindowSize::UNAVAILABLE;
    };
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    WindowSize::new(read(w.inner_width()), read(w.inner_height()))
}

/// Live DOM answering geometry reads for the controllers.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomViewport;

impl Viewport<web::Element> for DomViewport {
    fn rect_of(&self, source: &web::Element) -> Option<ViewportRect> {
        rect_of(source)
    }

    fn window_size(&self) -> WindowSize {
        window_size()
    }
}

pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn as_html(el: &web::Element) -> Option<web::HtmlElement> {
    el.clone().dyn_into::<web::HtmlElement>().ok()
}

pub fn set_style(el: &web::HtmlElement, name: &str, value: &str) -> Result<(), MotionError> {
    el.style()
        .set_property(name, value)
        .map_err(|e| MotionError::ConsumerWrite(format!("{name}: {e:?}")))
}

/// Replace the text of `el` with one span per character so each can fade on
/// its own. Spaces become non-breaking so the spans keep their width.
pub fn split_chars(
    document: &web::Document,
    el: &web::HtmlElement,
) -> anyhow::Result<Vec<web::HtmlElement>> {
    let text = el.text_content().unwrap_or_default();
    el.set_text_content(None);
    let mut spans = Vec::with_capacity(text.chars().count());
    for ch in text.chars() {
        let span = document
            .create_element("span")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        let mut buf = [0; 4];
        let ch = if ch == ' ' { NBSP } else { ch };
        let shown: &str = ch.encode_utf8(&mut buf);
        span.set_text_content(Some(shown));
        _ = span.style().set_property("opacity", "0");
        el.append_child(&span).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        spans.push(span);
    }
    Ok(spans)
}
