use leptos::{ev, html, prelude::*};
use leptos_use::{use_event_listener, use_raf_fn, use_window};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::particles::{ParticleField, PARTICLE_COUNT};

fn window_size() -> (f64, f64) {
    let window = window();
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
    };
    (dim(window.inner_width()), dim(window.inner_height()))
}

fn draw(canvas: &HtmlCanvasElement, field: &ParticleField) {
    let Some(ctx) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };
    let (width, height) = field.size();
    ctx.clear_rect(0.0, 0.0, width, height);
    for p in field.particles() {
        if let Ok(gradient) = ctx.create_radial_gradient(p.x, p.y, 0.0, p.x, p.y, p.size * 3.0) {
            let _ = gradient.add_color_stop(0.0, &format!("rgba(81, 127, 164, {})", p.opacity));
            let _ = gradient.add_color_stop(
                0.5,
                &format!("rgba(106, 143, 181, {})", p.opacity * 0.6),
            );
            let _ = gradient.add_color_stop(1.0, "rgba(36, 57, 73, 0)");
            ctx.set_fill_style_canvas_gradient(&gradient);
        }
        ctx.begin_path();
        let _ = ctx.arc(p.x, p.y, p.size, 0.0, std::f64::consts::TAU);
        ctx.fill();
    }
}

fn fit_canvas(canvas: &HtmlCanvasElement, width: f64, height: f64) {
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
}

/// Full-screen canvas of slowly drifting particles. The frame loop and resize
/// listener stop with the component.
#[component]
pub fn ParticlesBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    let field = StoredValue::new(None::<ParticleField>);

    Effect::new(move |_| {
        let Some(canvas) = canvas_ref.get() else {
            return;
        };
        let (width, height) = window_size();
        fit_canvas(&canvas, width, height);
        field.set_value(Some(ParticleField::new(
            PARTICLE_COUNT,
            width,
            height,
            js_sys::Math::random,
        )));
    });

    let _ = use_event_listener(use_window(), ev::resize, move |_| {
        let (width, height) = window_size();
        if let Some(canvas) = canvas_ref.get_untracked() {
            fit_canvas(&canvas, width, height);
        }
        field.update_value(|f| {
            if let Some(f) = f {
                f.resize(width, height);
            }
        });
    });

    use_raf_fn(move |_| {
        let Some(canvas) = canvas_ref.get_untracked() else {
            return;
        };
        field.update_value(|f| {
            if let Some(f) = f {
                f.step();
                draw(&canvas, f);
            }
        });
    });

    view! {
        <canvas
            node_ref=canvas_ref
            class="fixed inset-0 pointer-events-none z-0"
            style="opacity: 0.8"
        ></canvas>
    }
}
