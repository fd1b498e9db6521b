#![cfg(target_arch = "wasm32")]
use motion_core::{CameraPath, Mapping, MotionError, ProgressController};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod background;
mod constants;
mod dom;
mod driver;
mod focus;
mod options;
mod reel;
mod style;

use background::BackgroundObserver;
use constants::*;
use driver::{ScrollController, ScrollDriver};
use focus::FocusLoop;
use options::{read_options, PageOptions};
use reel::ReelNav;
use style::StyleTarget;

thread_local! {
    static MOUNTED: RefCell<Option<LandingMotion>> = const { RefCell::new(None) };
}

/// Handle to everything mounted on one page root. Dropping it (or calling
/// `dispose`) detaches every listener, observer and pending frame.
#[wasm_bindgen]
pub struct LandingMotion {
    scroll: Option<ScrollDriver>,
    focus: Option<FocusLoop>,
    background: Option<BackgroundObserver>,
    mount_error: Option<MotionError>,
}

#[wasm_bindgen]
impl LandingMotion {
    /// Mount on `root`. `on_dark_change(isDark)` is called whenever the
    /// client section switches between dark and light.
    pub fn mount(
        root: web::Element,
        on_dark_change: Option<js_sys::Function>,
    ) -> Result<LandingMotion, JsValue> {
        mount(&root, on_dark_change).map_err(|e| JsValue::from_str(&format!("{e:#}")))
    }

    /// Most recent recoverable error, if any.
    pub fn error(&self) -> Option<String> {
        self.scroll
            .as_ref()
            .and_then(ScrollDriver::error)
            .or_else(|| self.focus.as_ref().and_then(FocusLoop::error))
            .or_else(|| self.mount_error.clone())
            .map(|e| e.to_string())
    }

    #[wasm_bindgen(js_name = isDark)]
    pub fn is_dark(&self) -> bool {
        self.background
            .as_ref()
            .map_or(true, |b| b.state().is_dark())
    }

    pub fn dispose(&mut self) {
        if let Some(scroll) = self.scroll.take() {
            scroll.dispose();
        }
        if let Some(focus) = self.focus.take() {
            focus.dispose();
        }
        if let Some(background) = self.background.take() {
            background.dispose();
        }
    }
}

fn mount(
    root: &web::Element,
    on_dark_change: Option<js_sys::Function>,
) -> anyhow::Result<LandingMotion> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let PageOptions {
        config,
        band,
        reveal_spread_percent,
    } = read_options(|name| root.get_attribute(name));

    let mut controller: ScrollController = ProgressController::new(config);

    register_progress(&mut controller, root, &MARQUEE_PROGRESS, Mapping::StickyExit);
    register_progress(
        &mut controller,
        root,
        &REEL_PROGRESS,
        Mapping::PinnedScrub(Default::default()),
    );

    let space = dom::query(root, SPACE_SECTION_SELECTOR);
    let scene = dom::query(root, SPACE_SCENE_SELECTOR);
    _ = controller.register(
        SPACE_SECTION_SELECTOR,
        space,
        scene.as_ref().and_then(dom::as_html).map(StyleTarget::Camera),
        Mapping::Camera(CameraPath::default()),
    );

    for heading in dom::query_all(root, REVEAL_SELECTOR) {
        let spans = match dom::as_html(&heading) {
            Some(el) => dom::split_chars(&document, &el)?,
            None => continue,
        };
        _ = controller.register(
            REVEAL_SELECTOR,
            Some(heading),
            Some(StyleTarget::Chars(spans)),
            Mapping::Reveal {
                spread_percent: reveal_spread_percent,
            },
        );
    }
    let mount_error = controller.error().cloned();

    let reel = dom::query(root, REEL_SELECTOR);
    let reel_nav = match (&reel, dom::query(root, REEL_NAV_SELECTOR)) {
        (Some(reel), Some(nav)) => ReelNav::new(reel, &nav),
        _ => None,
    };
    let scroll = ScrollDriver::attach(controller, reel_nav)?;
    let focus = FocusLoop::attach(root, config)?;
    let background = match dom::query(root, CLIENT_SECTION_SELECTOR) {
        Some(section) => Some(BackgroundObserver::attach(section, band, on_dark_change)?),
        None => None,
    };

    log::info!(
        "[mount] scroll tracking ready, focus loop {}, background {}",
        if focus.is_some() { "on" } else { "off" },
        if background.is_some() { "on" } else { "off" },
    );
    Ok(LandingMotion {
        scroll: Some(scroll),
        focus,
        background,
        mount_error,
    })
}

/// Track `hook.source` and write its progress onto `hook.target`.
fn register_progress(
    controller: &mut ScrollController,
    root: &web::Element,
    hook: &ProgressHook,
    mapping: Mapping,
) {
    let source = dom::query(root, hook.source);
    let target = dom::query(root, hook.target)
        .as_ref()
        .and_then(dom::as_html)
        .map(|element| StyleTarget::Property {
            element,
            name: hook.property,
        });
    _ = controller.register(hook.target, source, target, mapping);
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyworks-web starting");

    spawn_local(async move {
        if let Err(e) = init() {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let Some(root) = document
        .query_selector(ROOT_SELECTOR)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
    else {
        log::info!("no {} on this page, nothing to mount", ROOT_SELECTOR);
        return Ok(());
    };
    let motion = mount(&root, None)?;
    MOUNTED.with(|m| {
        if let Some(mut previous) = m.borrow_mut().replace(motion) {
            previous.dispose();
        }
    });
    Ok(())
}

/// Tear down the instance mounted by `start`.
#[wasm_bindgen]
pub fn unmount() {
    MOUNTED.with(|m| {
        if let Some(mut motion) = m.borrow_mut().take() {
            motion.dispose();
        }
    });
}
