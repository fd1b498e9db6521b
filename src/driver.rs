use crate::dom::{self, DomViewport};
use crate::reel::ReelNav;
use crate::style::{StyleSink, StyleTarget};
use motion_core::{Admission, MotionError, ProgressController};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type ScrollController = ProgressController<web::Element, StyleTarget>;

const EVENTS: [&str; 2] = ["scroll", "resize"];

struct DriverState {
    controller: ScrollController,
    sink: StyleSink,
    reel_nav: Option<ReelNav>,
    raf_handle: Option<i32>,
}

impl DriverState {
    fn run(&mut self) {
        let report = self.controller.tick(&DomViewport, &mut self.sink);
        if report.failed > 0 {
            log::debug!(
                "[scroll] tick wrote {} held {} failed {}",
                report.written,
                report.held,
                report.failed
            );
        }
        if let Some(nav) = self.reel_nav.as_mut() {
            nav.update(dom::window_size());
        }
    }
}

/// Binds a progress controller to window scroll/resize. Every event asks the
/// controller's throttle; a too-early event defers to one animation frame.
pub struct ScrollDriver {
    state: Rc<RefCell<DriverState>>,
    on_event: Closure<dyn FnMut()>,
    on_frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl ScrollDriver {
    pub fn attach(controller: ScrollController, reel_nav: Option<ReelNav>) -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let state = Rc::new(RefCell::new(DriverState {
            controller,
            sink: StyleSink,
            reel_nav,
            raf_handle: None,
        }));
        let on_frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let weak_state = Rc::downgrade(&state);
        let weak_frame = Rc::downgrade(&on_frame);
        let on_event = Closure::wrap(Box::new(move || {
            handle_event(&weak_state, &weak_frame);
        }) as Box<dyn FnMut()>);

        let weak_state = Rc::downgrade(&state);
        let weak_frame = Rc::downgrade(&on_frame);
        *on_frame.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            let Some(state) = weak_state.upgrade() else {
                return;
            };
            {
                let mut s = state.borrow_mut();
                s.raf_handle = None;
                if !s.controller.is_alive() {
                    return;
                }
                s.controller.frame_fired();
            }
            handle_event(&weak_state, &weak_frame);
        }) as Box<dyn FnMut()>));

        let opts = web::AddEventListenerOptions::new();
        opts.set_passive(true);
        for ev in EVENTS {
            window
                .add_event_listener_with_callback_and_add_event_listener_options(
                    ev,
                    on_event.as_ref().unchecked_ref(),
                    &opts,
                )
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        }

        // initial paint before the first scroll
        state.borrow_mut().run();
        Ok(Self {
            state,
            on_event,
            on_frame,
        })
    }

    pub fn error(&self) -> Option<MotionError> {
        self.state.borrow().controller.error().cloned()
    }

    pub fn dispose(&self) {
        if let Some(w) = web::window() {
            for ev in EVENTS {
                _ = w.remove_event_listener_with_callback(
                    ev,
                    self.on_event.as_ref().unchecked_ref(),
                );
            }
        }
        let mut s = self.state.borrow_mut();
        if !s.controller.is_alive() {
            return;
        }
        let had_frame = s.controller.dispose();
        if let (Some(handle), Some(w)) = (s.raf_handle.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        log::info!("[scroll] disposed (pending frame cancelled: {})", had_frame);
    }
}

impl Drop for ScrollDriver {
    fn drop(&mut self) {
        self.dispose();
        self.on_frame.borrow_mut().take();
    }
}

fn handle_event(
    state: &Weak<RefCell<DriverState>>,
    on_frame: &Weak<RefCell<Option<Closure<dyn FnMut()>>>>,
) {
    let Some(state) = state.upgrade() else {
        return;
    };
    let mut s = state.borrow_mut();
    match s.controller.request(instant::now()) {
        Admission::Run => s.run(),
        Admission::Defer => {
            let Some(on_frame) = on_frame.upgrade() else {
                return;
            };
            let Some(w) = web::window() else {
                return;
            };
            let frame = on_frame.borrow();
            if let Some(cb) = frame.as_ref() {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(handle) => s.raf_handle = Some(handle),
                    Err(e) => {
                        log::debug!("[scroll] requestAnimationFrame failed: {:?}", e);
                        s.controller.frame_fired();
                    }
                }
            }
        }
        Admission::Coalesce => {}
    }
}
