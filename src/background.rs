use crate::constants::*;
use motion_core::{default_threshold_ladder, BackgroundController, BackgroundState, HysteresisBand};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Switches the client section between dark and light as it scrolls through
/// the viewport, and tells the page through an optional JS callback.
pub struct BackgroundObserver {
    controller: Rc<RefCell<BackgroundController>>,
    observer: web::IntersectionObserver,
    _on_intersect: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl BackgroundObserver {
    pub fn attach(
        section: web::Element,
        band: HysteresisBand,
        on_dark_change: Option<js_sys::Function>,
    ) -> anyhow::Result<Self> {
        let mut controller = BackgroundController::new(band);
        let theme_el = section.clone();
        controller.set_listener(move |dark| {
            let theme = if dark { THEME_DARK } else { THEME_LIGHT };
            _ = theme_el.set_attribute(THEME_ATTR, theme);
            if let Some(f) = &on_dark_change {
                if let Err(e) = f.call1(&JsValue::NULL, &JsValue::from_bool(dark)) {
                    log::warn!("[background] change callback threw: {:?}", e);
                }
            }
        });
        _ = section.set_attribute(THEME_ATTR, THEME_DARK);
        let controller = Rc::new(RefCell::new(controller));

        let weak = Rc::downgrade(&controller);
        let on_intersect = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: web::IntersectionObserver| {
                let Some(controller) = weak.upgrade() else {
                    return;
                };
                let mut c = controller.borrow_mut();
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    c.observe(entry.intersection_ratio() as f32, entry.is_intersecting());
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let thresholds: js_sys::Array = default_threshold_ladder()
            .into_iter()
            .map(JsValue::from_f64)
            .collect();
        let opts = web::IntersectionObserverInit::new();
        opts.set_threshold(&thresholds);
        let observer = web::IntersectionObserver::new_with_options(
            on_intersect.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        observer.observe(&section);
        log::info!(
            "[background] observing client section, light band {:.2}..{:.2}",
            band.light_from,
            band.light_until
        );
        Ok(Self {
            controller,
            observer,
            _on_intersect: on_intersect,
        })
    }

    pub fn state(&self) -> BackgroundState {
        self.controller.borrow().state()
    }

    pub fn dispose(&self) {
        self.observer.disconnect();
        self.controller.borrow_mut().clear_listener();
    }
}

impl Drop for BackgroundObserver {
    fn drop(&mut self) {
        self.dispose();
    }
}
