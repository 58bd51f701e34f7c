use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

const PITCH_WIDTH: f64 = 20.0;
const PITCH_DEPTH: f64 = 10.0;
const LINE_WIDTH: f64 = 0.1;
const SPIN_PER_FRAME: f64 = 0.0015;
// Camera above and behind the pitch, aimed at the origin.
const CAMERA_Y: f64 = 10.0;
const CAMERA_Z: f64 = 20.0;
const FOV_DEGREES: f64 = 60.0;

/// Decorative pitch: a perspective-projected green plane spinning slowly
/// under a static centerline, redrawn every animation frame until the
/// component unmounts. Purely ornamental; talks to nothing else.
#[function_component(PitchScene)]
pub fn pitch_scene() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let canvas: HtmlCanvasElement = canvas_ref
                .cast::<HtmlCanvasElement>()
                .expect("canvas_ref not attached to a canvas element");

            let apply_canvas_size = {
                let canvas = canvas.clone();
                move || {
                    if let Some(container) = canvas.parent_element() {
                        canvas.set_width(container.client_width().max(0) as u32);
                        canvas.set_height(container.client_height().max(0) as u32);
                    }
                }
            };
            apply_canvas_size();

            let angle = Rc::new(RefCell::new(0.0_f64));

            // Animation frame loop; the closure reschedules itself.
            let raf_id = Rc::new(RefCell::new(None));
            let closure_cell: Rc<RefCell<Option<Closure<dyn FnMut()>>>> =
                Rc::new(RefCell::new(None));
            {
                let raf_id_loop = raf_id.clone();
                let closure_cell_loop = closure_cell.clone();
                let window_loop = window.clone();
                let canvas_loop = canvas.clone();
                let angle_loop = angle.clone();
                *closure_cell.borrow_mut() = Some(Closure::wrap(Box::new(move || {
                    *angle_loop.borrow_mut() += SPIN_PER_FRAME;
                    draw_scene(&canvas_loop, *angle_loop.borrow());
                    if let Ok(id) = window_loop.request_animation_frame(
                        closure_cell_loop
                            .borrow()
                            .as_ref()
                            .unwrap()
                            .as_ref()
                            .unchecked_ref(),
                    ) {
                        *raf_id_loop.borrow_mut() = Some(id);
                    }
                }) as Box<dyn FnMut()>));
                if let Ok(id) = window.request_animation_frame(
                    closure_cell
                        .borrow()
                        .as_ref()
                        .unwrap()
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    *raf_id.borrow_mut() = Some(id);
                }
            }

            let resize_cb = {
                let apply_canvas_size = apply_canvas_size.clone();
                Closure::wrap(Box::new(move |_: web_sys::Event| {
                    apply_canvas_size();
                }) as Box<dyn FnMut(_)>)
            };
            window
                .add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref())
                .unwrap();

            move || {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());
                if let Some(id) = *raf_id.borrow() {
                    let _ = window.cancel_animation_frame(id);
                }
                drop(closure_cell);
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} style="display:block; width:100%; height:100%;"></canvas>
    }
}

fn draw_scene(canvas: &HtmlCanvasElement, angle: f64) {
    let ctx = match canvas.get_context("2d").ok().flatten() {
        Some(obj) => match obj.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        None => return,
    };
    let w = canvas.width() as f64;
    let h = canvas.height() as f64;
    if w <= 0.0 || h <= 0.0 {
        return;
    }
    ctx.clear_rect(0.0, 0.0, w, h);

    // Pitch plane on y = 0, spun about the vertical axis.
    let (sin, cos) = angle.sin_cos();
    let spin = |x: f64, z: f64| (x * cos - z * sin, 0.0, x * sin + z * cos);
    let hw = PITCH_WIDTH / 2.0;
    let hd = PITCH_DEPTH / 2.0;
    let pitch = [
        spin(-hw, -hd),
        spin(hw, -hd),
        spin(hw, hd),
        spin(-hw, hd),
    ];
    fill_quad(&ctx, w, h, &pitch, "#228b22");

    // Centerline stays fixed while the pitch turns beneath it.
    let lw = LINE_WIDTH / 2.0;
    let line = [
        (-lw, 0.0, -hd),
        (lw, 0.0, -hd),
        (lw, 0.0, hd),
        (-lw, 0.0, hd),
    ];
    fill_quad(&ctx, w, h, &line, "#ffffff");
}

fn fill_quad(
    ctx: &CanvasRenderingContext2d,
    w: f64,
    h: f64,
    corners: &[(f64, f64, f64); 4],
    fill: &str,
) {
    let projected: Vec<(f64, f64)> = corners.iter().filter_map(|p| project(*p, w, h)).collect();
    if projected.len() < 4 {
        return;
    }
    ctx.set_fill_style_str(fill);
    ctx.begin_path();
    ctx.move_to(projected[0].0, projected[0].1);
    for point in &projected[1..] {
        ctx.line_to(point.0, point.1);
    }
    ctx.close_path();
    ctx.fill();
}

// Pinhole projection for a camera at (0, CAMERA_Y, CAMERA_Z) tilted to
// look at the origin. Returns None for points behind the camera.
fn project(point: (f64, f64, f64), w: f64, h: f64) -> Option<(f64, f64)> {
    let (x, y, z) = (point.0, point.1 - CAMERA_Y, point.2 - CAMERA_Z);
    let tilt = (CAMERA_Y / CAMERA_Z).atan();
    let (sin, cos) = tilt.sin_cos();
    let yc = y * cos - z * sin;
    let zc = y * sin + z * cos;
    if zc >= 0.0 {
        return None;
    }
    let focal = (h / 2.0) / (FOV_DEGREES.to_radians() / 2.0).tan();
    Some((w / 2.0 + focal * x / -zc, h / 2.0 - focal * yc / -zc))
}
