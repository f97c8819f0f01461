use std::cell::{Cell, RefCell};
use std::f64::consts::PI;
use std::rc::Rc;
use gloo_render::{request_animation_frame, AnimationFrame};
use prize_wheel_shared::constants::POINTER_ANGLE;
use prize_wheel_shared::{Slice, SpinPlan, Wedge};
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use super::wheel_utils::ease_out_cubic;

const CANVAS_SIZE: f64 = 400.0;
const RIM: f64 = 20.0;
// Label and hub sizes are fractions of the wheel radius
const LABEL_RADIUS: f64 = 0.6;
const HUB_OUTER: f64 = 0.22;
const HUB_INNER: f64 = 0.17;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub slices: Vec<Slice>,
    /// Resting rotation in degrees, drawn while no spin is running
    pub rotation: f64,
    /// The accepted spin, present until the wheel settles
    pub spin: Option<SpinPlan>,
    pub duration_ms: u32,
    /// Fired once each time the wheel finishes moving to a new rotation
    pub on_animation_complete: Callback<()>,
}

struct SpinAnimation {
    canvas_ref: NodeRef,
    slices: Vec<Slice>,
    from: f64,
    to: f64,
    duration: f64,
    started_at: Cell<Option<f64>>,
    displayed: Rc<RefCell<f64>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
    on_complete: Callback<()>,
}

fn step(animation: Rc<SpinAnimation>, timestamp: f64) {
    let started_at = match animation.started_at.get() {
        Some(started_at) => started_at,
        None => {
            animation.started_at.set(Some(timestamp));
            timestamp
        }
    };
    let progress = ((timestamp - started_at) / animation.duration).clamp(0.0, 1.0);
    let finished = progress >= 1.0;
    let angle = if finished {
        animation.to
    } else {
        animation.from + (animation.to - animation.from) * ease_out_cubic(progress)
    };

    *animation.displayed.borrow_mut() = angle;
    draw_wheel(&animation.canvas_ref, &animation.slices, angle, !finished);

    if finished {
        animation.frame.borrow_mut().take();
        animation.on_complete.emit(());
    } else {
        let next = animation.clone();
        let handle = request_animation_frame(move |timestamp| step(next, timestamp));
        *animation.frame.borrow_mut() = Some(handle);
    }
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let displayed = use_mut_ref(|| props.rotation);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    // Paint the resting wheel on mount and whenever the slices change
    {
        let canvas_ref = canvas_ref.clone();
        let displayed = displayed.clone();
        let frame = frame.clone();
        use_effect_with(props.slices.clone(), move |slices| {
            if frame.borrow().is_none() {
                draw_wheel(&canvas_ref, slices, *displayed.borrow(), false);
            }
            || ()
        });
    }

    // Animate each accepted spin from where it started to where it ends
    {
        let canvas_ref = canvas_ref.clone();
        let slices = props.slices.clone();
        let duration = props.duration_ms as f64;
        let on_complete = props.on_animation_complete.clone();
        use_effect_with(props.spin.clone(), move |spin: &Option<SpinPlan>| {
            if let Some(plan) = spin {
                log::debug!(
                    "Animating {:.1} degrees ({:+.2} jitter) toward slice {}",
                    plan.delta,
                    plan.jitter,
                    plan.target_index
                );
                let animation = Rc::new(SpinAnimation {
                    canvas_ref,
                    slices,
                    from: plan.rotation - plan.delta - plan.jitter,
                    to: plan.rotation,
                    duration: duration.max(1.0),
                    started_at: Cell::new(None),
                    displayed,
                    frame: frame.clone(),
                    on_complete,
                });
                let handle = request_animation_frame(move |timestamp| step(animation, timestamp));
                *frame.borrow_mut() = Some(handle);
            }

            move || {
                frame.borrow_mut().take();
            }
        });
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width={CANVAS_SIZE.to_string()}
                height={CANVAS_SIZE.to_string()}
                class="w-80 h-80 md:w-96 md:h-96 rounded-full transition-all duration-300"
                style={if props.spin.is_some() {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

fn is_dark_mode() -> bool {
    window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false)
}

// Canvas angles start at 3 o'clock; wedge angles start at the pointer.
fn canvas_angle(degrees_from_top: f64) -> f64 {
    (degrees_from_top - POINTER_ANGLE - 90.0).to_radians()
}

/// Start and end of a wedge on the canvas, in radians, once the wheel has
/// turned clockwise by `rotation` degrees.
fn wedge_arc(wedge: &Wedge, rotation: f64) -> (f64, f64) {
    let turned = wedge.rotated(rotation);
    (canvas_angle(turned.start_angle), canvas_angle(turned.end_angle))
}

fn draw_wheel(canvas_ref: &NodeRef, slices: &[Slice], rotation: f64, is_spinning: bool) {
    let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
        return;
    };
    let Some(context) = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
    else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - RIM;
    let dark = is_dark_mode();

    context.clear_rect(0.0, 0.0, width, height);

    // Rim
    context.begin_path();
    context.set_fill_style_str(if dark { "#1f2937" } else { "#ffffff" });
    let _ = context.arc(center_x, center_y, radius + RIM / 2.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);

    for (index, slice) in slices.iter().enumerate() {
        let (start, end) = wedge_arc(&Wedge::new(index, slices.len()), rotation);
        context.begin_path();
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.set_fill_style_str(&slice.color);
        context.fill();
        context.set_stroke_style_str("#ffffff");
        context.set_line_width(1.5);
        context.stroke();
    }

    context.set_fill_style_str("#1f2937");
    context.set_font("bold 13px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_text_align("center");
    context.set_text_baseline("middle");
    for (index, slice) in slices.iter().enumerate() {
        let wedge = Wedge::new(index, slices.len()).rotated(rotation);
        let (x, y) = wedge.label_anchor(radius * LABEL_RADIUS);
        context.save();
        let _ = context.translate(x, y);
        // Read outward along the radius
        let _ = context.rotate(canvas_angle(wedge.mid_angle()));
        let _ = context.fill_text(&slice.label, 0.0, 0.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    context.set_fill_style_str("#ffffff");
    context.set_stroke_style_str("#e5e7eb");
    context.set_line_width(3.0);
    let _ = context.arc(0.0, 0.0, radius * HUB_OUTER, 0.0, 2.0 * PI);
    context.fill();
    context.stroke();

    context.begin_path();
    context.set_fill_style_str("#f3f4f6");
    context.set_stroke_style_str("#d1d5db");
    context.set_line_width(2.0);
    let _ = context.arc(0.0, 0.0, radius * HUB_INNER, 0.0, 2.0 * PI);
    context.fill();
    context.stroke();

    context.restore();

    draw_pointer(&context, center_x, center_y - radius, is_spinning);
}

// Fixed pointer at the top of the wheel, tip resting on the rim
fn draw_pointer(context: &CanvasRenderingContext2d, tip_x: f64, tip_y: f64, is_spinning: bool) {
    let half_width = 12.0;
    let height = 18.0;

    context.set_shadow_color(if is_spinning {
        "rgba(220, 38, 38, 0.8)"
    } else {
        "rgba(0, 0, 0, 0.3)"
    });
    context.set_shadow_blur(if is_spinning { 10.0 } else { 4.0 });

    context.begin_path();
    context.move_to(tip_x, tip_y + 6.0);
    context.line_to(tip_x - half_width, tip_y - height);
    context.line_to(tip_x + half_width, tip_y - height);
    context.close_path();
    context.set_fill_style_str("#dc2626");
    context.fill();
    context.set_stroke_style_str("#991b1b");
    context.set_line_width(1.5);
    context.stroke();

    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);
}
