use leptos::{html, prelude::*};

#[cfg(feature = "hydrate")]
mod canvas {
    use std::f64::consts::TAU;

    use leptos::prelude::*;
    use leptos_use::{use_raf_fn, use_window_size, UseWindowSizeReturn};
    use thiserror::Error;
    use wasm_bindgen::JsCast;
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    use crate::app::ThemeContext;
    use crate::effects::particles::{ParticleField, PARTICLE_COUNT};

    const DOT_RADIUS: f64 = 1.5;
    const DOT_ALPHA: f64 = 0.8;
    const TRAIL_ALPHA: f64 = 0.35;
    /// Opacity of a link between two particles at zero distance.
    const LINE_ALPHA: f64 = 0.4;

    #[derive(Error, Debug)]
    pub enum CanvasError {
        #[error("2d context unavailable")]
        ContextUnavailable,
    }

    fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
        canvas
            .get_context("2d")
            .ok()
            .flatten()
            .ok_or(CanvasError::ContextUnavailable)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::ContextUnavailable)
    }

    fn draw(ctx: &CanvasRenderingContext2d, field: &ParticleField, rgb: &str) {
        let (w, h) = field.size();
        ctx.clear_rect(0.0, 0.0, w, h);
        ctx.set_line_width(1.0);

        ctx.set_stroke_style_str(&format!("rgba({rgb}, {TRAIL_ALPHA})"));
        ctx.begin_path();
        for p in field.particles() {
            let ((x0, y0), (x1, y1)) = p.trail();
            ctx.move_to(x0, y0);
            ctx.line_to(x1, y1);
        }
        ctx.stroke();

        ctx.set_fill_style_str(&format!("rgba({rgb}, {DOT_ALPHA})"));
        for p in field.particles() {
            ctx.begin_path();
            if ctx.arc(p.x, p.y, DOT_RADIUS, 0.0, TAU).is_ok() {
                ctx.fill();
            }
        }

        let particles = field.particles();
        for link in field.links() {
            let (a, b) = (&particles[link.a], &particles[link.b]);
            ctx.set_stroke_style_str(&format!("rgba({rgb}, {:.3})", link.opacity * LINE_ALPHA));
            ctx.begin_path();
            ctx.move_to(a.x, a.y);
            ctx.line_to(b.x, b.y);
            ctx.stroke();
        }
    }

    /// Sizes the canvas to the window and runs the particle loop on it.
    pub fn animate(canvas_ref: NodeRef<leptos::html::Canvas>) {
        let theme = expect_context::<ThemeContext>().theme;
        let field = StoredValue::new_local(None::<ParticleField>);
        let ctx = StoredValue::new_local(None::<CanvasRenderingContext2d>);
        let UseWindowSizeReturn { width, height } = use_window_size();

        let raf = use_raf_fn(move |_| {
            ctx.with_value(|ctx| {
                let Some(ctx) = ctx else {
                    return;
                };
                let rgb = theme.get_untracked().particle_rgb();
                field.update_value(|field| {
                    if let Some(field) = field {
                        field.step();
                        draw(ctx, field, rgb);
                    }
                });
            });
        });
        let pause = raf.pause;

        Effect::new(move || {
            let (w, h) = (width.get(), height.get());
            let Some(canvas) = canvas_ref.get() else {
                return;
            };
            if !(w.is_finite() && h.is_finite()) {
                return;
            }
            canvas.set_width(w as u32);
            canvas.set_height(h as u32);

            if ctx.with_value(Option::is_none) {
                match context_2d(&canvas) {
                    Ok(c) => ctx.set_value(Some(c)),
                    Err(e) => {
                        log::debug!("particle background disabled: {e}");
                        pause();
                        return;
                    }
                }
            }

            field.update_value(|slot| match slot {
                Some(field) => field.resize(w, h),
                None => *slot = Some(ParticleField::new(PARTICLE_COUNT, w, h, js_sys::Math::random)),
            });
        });
    }
}

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    #[cfg(feature = "hydrate")]
    {
        canvas::animate(canvas_ref);
    }

    view! {
        <canvas
            node_ref=canvas_ref
            aria-hidden="true"
            class="fixed inset-0 w-full h-full pointer-events-none z-0"
        ></canvas>
    }
}
