use crate::constants::*;
use crate::dom::{self, DomViewport};
use crate::style::{StyleSink, StyleTarget};
use motion_core::{Mapping, MotionConfig, MotionError, ProgressController};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct FocusState {
    controller: ProgressController<web::Element, StyleTarget>,
    sink: StyleSink,
    items: Vec<web::Element>,
    visible: Vec<bool>,
    raf_handle: Option<i32>,
}

impl FocusState {
    fn any_visible(&self) -> bool {
        self.visible.iter().any(|v| *v)
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
type WeakFrame = Weak<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Per-frame scale/opacity for the center-focused video items. The render
/// loop only runs while at least one item is in (or near) the viewport.
pub struct FocusLoop {
    state: Rc<RefCell<FocusState>>,
    observer: web::IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
    on_frame: FrameCallback,
}

impl FocusLoop {
    pub fn attach(root: &web::Element, config: MotionConfig) -> anyhow::Result<Option<Self>> {
        let items = dom::query_all(root, FOCUS_ITEM_SELECTOR);
        if items.is_empty() {
            return Ok(None);
        }
        let mut controller = ProgressController::new(config);
        for el in &items {
            let target = dom::as_html(el).map(StyleTarget::Focus);
            _ = controller.register(
                FOCUS_ITEM_SELECTOR,
                Some(el.clone()),
                target,
                Mapping::CenterFocus,
            );
        }
        let mut sink = StyleSink;
        controller.rest(&mut sink);

        let state = Rc::new(RefCell::new(FocusState {
            controller,
            sink,
            visible: vec![false; items.len()],
            items: items.clone(),
            raf_handle: None,
        }));
        let on_frame: FrameCallback = Rc::new(RefCell::new(None));

        let weak_state = Rc::downgrade(&state);
        let weak_frame = Rc::downgrade(&on_frame);
        *on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            frame(&weak_state, &weak_frame);
        }) as Box<dyn FnMut()>));

        let weak_state = Rc::downgrade(&state);
        let weak_frame = Rc::downgrade(&on_frame);
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                intersect(&weak_state, &weak_frame, entries);
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let opts = web::IntersectionObserverInit::new();
        opts.set_threshold(&wasm_bindgen::JsValue::from_f64(FOCUS_VISIBLE_THRESHOLD));
        opts.set_root_margin(FOCUS_ROOT_MARGIN);
        let observer = web::IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        for el in &items {
            observer.observe(el);
        }
        log::info!("[focus] observing {} items", items.len());
        Ok(Some(Self {
            state,
            observer,
            _on_intersect: on_intersect,
            on_frame,
        }))
    }

    pub fn error(&self) -> Option<MotionError> {
        self.state.borrow().controller.error().cloned()
    }

    pub fn dispose(&self) {
        self.observer.disconnect();
        let mut s = self.state.borrow_mut();
        if !s.controller.is_alive() {
            return;
        }
        if let (Some(handle), Some(w)) = (s.raf_handle.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        let FocusState {
            controller, sink, ..
        } = &mut *s;
        controller.rest(sink);
        controller.dispose();
        s.items.clear();
        log::info!("[focus] disposed");
    }
}

impl Drop for FocusLoop {
    fn drop(&mut self) {
        self.dispose();
        self.on_frame.borrow_mut().take();
    }
}

fn intersect(state: &Weak<RefCell<FocusState>>, on_frame: &WeakFrame, entries: js_sys::Array) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut s = state.borrow_mut();
    if !s.controller.is_alive() {
        return;
    }
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
            continue;
        };
        let target = entry.target();
        if let Some(i) = s.items.iter().position(|el| *el == target) {
            s.visible[i] = entry.is_intersecting();
        }
    }
    if s.any_visible() {
        if s.raf_handle.is_none() {
            schedule(&mut s, on_frame);
        }
    } else {
        if let (Some(handle), Some(w)) = (s.raf_handle.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        let FocusState {
            controller, sink, ..
        } = &mut *s;
        controller.rest(sink);
    }
}

fn frame(state: &Weak<RefCell<FocusState>>, on_frame: &WeakFrame) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut s = state.borrow_mut();
    s.raf_handle = None;
    if !s.controller.is_alive() || !s.any_visible() {
        return;
    }
    let FocusState {
        controller, sink, ..
    } = &mut *s;
    controller.tick_frame(instant::now(), &DomViewport, sink);
    schedule(&mut s, on_frame);
}

fn schedule(s: &mut FocusState, on_frame: &WeakFrame) {
    let (Some(on_frame), Some(w)) = (on_frame.upgrade(), web::window()) else {
        return;
    };
    let cb = on_frame.borrow();
    if let Some(cb) = cb.as_ref() {
        s.raf_handle = w.request_animation_frame(cb.as_ref().unchecked_ref()).ok();
    }
}
