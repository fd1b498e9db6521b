//! Writes controller outputs into inline styles and custom properties.

use crate::constants::*;
use crate::dom::set_style;
use motion_core::{char_opacity, MotionError, Output, Sink};
use web_sys as web;

/// Where one tracked target's output lands.
pub enum StyleTarget {
    /// A single custom property holding a progress value.
    Property {
        element: web::HtmlElement,
        name: &'static str,
    },
    /// `transform: scale()` and `opacity` on the element itself.
    Focus(web::HtmlElement),
    /// Camera custom properties read by the particle renderer.
    Camera(web::HtmlElement),
    /// Per-character opacity of a split heading.
    Chars(Vec<web::HtmlElement>),
}

#[derive(Default)]
pub struct StyleSink;

impl Sink<StyleTarget> for StyleSink {
    fn write(&mut self, target: &StyleTarget, output: &Output) -> Result<(), MotionError> {
        match (target, output) {
            (StyleTarget::Property { element, name }, Output::Progress(p)) => {
                set_style(element, name, &format!("{p:.4}"))
            }
            (StyleTarget::Focus(element), Output::Visual(v)) => {
                set_style(element, "transform", &format!("scale({:.4})", v.scale))?;
                set_style(element, "opacity", &format!("{:.4}", v.opacity))
            }
            (StyleTarget::Camera(element), Output::Camera(pose)) => {
                set_style(element, PROP_CAMERA_X, &format!("{:.4}", pose.position.x))?;
                set_style(element, PROP_CAMERA_Y, &format!("{:.4}", pose.position.y))?;
                set_style(element, PROP_CAMERA_Z, &format!("{:.4}", pose.position.z))?;
                set_style(
                    element,
                    PROP_PARTICLE_ROTATION,
                    &format!("{:.4}", pose.particle_rotation),
                )
            }
            (
                StyleTarget::Chars(spans),
                Output::Reveal {
                    lead_percent,
                    spread_percent,
                },
            ) => {
                let count = spans.len();
                for (i, span) in spans.iter().enumerate() {
                    let opacity = char_opacity(*lead_percent, i, count, *spread_percent);
                    set_style(span, "opacity", &format!("{opacity:.3}"))?;
                }
                Ok(())
            }
            _ => Err(MotionError::ConsumerWrite(
                "output does not fit its target".to_string(),
            )),
        }
    }
}
