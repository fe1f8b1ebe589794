use std::cell::Cell;
use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlCanvasElement, WheelEvent};
use yew::prelude::*;

use crate::effects::use_effect_scope;
use crate::visuals::model::{CipherModel, OrbitCamera};
use crate::visuals::{context_2d, fit_canvas};

/// Pointer travel past which a press counts as a drag, not a click.
const CLICK_SLOP: f64 = 4.0;

#[derive(Default)]
struct Drag {
    last: (f64, f64),
    travelled: f64,
}

#[derive(Default)]
struct ViewerState {
    model: CipherModel,
    camera: OrbitCamera,
    drag: Option<Drag>,
    size: (f64, f64),
}

impl ViewerState {
    fn hits(&self, x: f64, y: f64) -> bool {
        let (width, height) = self.size;
        self.model.hit_test(&self.camera, width, height, x, y)
    }
}

/// Interactive triangle demon: drag to orbit, wheel to zoom, click to
/// make him wobble.
#[function_component(CipherViewer)]
pub fn cipher_viewer() -> Html {
    let canvas_ref = use_node_ref();
    let state = use_mut_ref(ViewerState::default);

    {
        let canvas_ref = canvas_ref.clone();
        let state = state.clone();
        use_effect_scope((), move |scope, _| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                warn!("2d context unavailable, cipher viewer disabled");
                return;
            };
            state.borrow_mut().size = fit_canvas(&canvas);

            if let Some(window) = web_sys::window() {
                let state = state.clone();
                let canvas = canvas.clone();
                scope.listen(&window, "resize", move |_| {
                    state.borrow_mut().size = fit_canvas(&canvas);
                });
            }

            {
                let state = state.clone();
                scope.listen(&canvas, "wheel", move |e| {
                    if let Some(wheel) = e.dyn_ref::<WheelEvent>() {
                        wheel.prevent_default();
                        state.borrow_mut().camera.zoom(wheel.delta_y());
                    }
                });
            }

            let last_frame = Rc::new(Cell::new(None::<f64>));
            scope.animation_loop(move |timestamp| {
                let dt = last_frame
                    .replace(Some(timestamp))
                    .map_or(0.0, |previous| (timestamp - previous) / 1000.0);
                let mut state = state.borrow_mut();
                state.model.advance(dt as f32);
                let (width, height) = state.size;
                state.model.draw(&ctx, &state.camera, width, height);
            });
        });
    }

    let onmousedown = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            state.borrow_mut().drag = Some(Drag {
                last: (e.offset_x() as f64, e.offset_y() as f64),
                travelled: 0.0,
            });
        })
    };

    let onmousemove = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let (x, y) = (e.offset_x() as f64, e.offset_y() as f64);
            let mut state = state.borrow_mut();
            let hovered = state.hits(x, y);
            state.model.hovered = hovered;
            let ViewerState { drag, camera, .. } = &mut *state;
            if let Some(drag) = drag {
                let (dx, dy) = (x - drag.last.0, y - drag.last.1);
                drag.travelled += dx.abs() + dy.abs();
                drag.last = (x, y);
                camera.drag(dx, dy);
            }
        })
    };

    let onmouseup = {
        let state = state.clone();
        Callback::from(move |e: MouseEvent| {
            let mut state = state.borrow_mut();
            let Some(drag) = state.drag.take() else {
                return;
            };
            if drag.travelled < CLICK_SLOP && state.hits(e.offset_x() as f64, e.offset_y() as f64) {
                state.model.toggle();
                info!("cipher model clicked, wobbling: {}", state.model.clicked);
            }
        })
    };

    let onmouseleave = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut state = state.borrow_mut();
            state.drag = None;
            state.model.hovered = false;
        })
    };

    html! {
        <canvas
            ref={canvas_ref}
            class="cipher-viewer"
            style="width: 100%; height: 100%; display: block; cursor: grab;"
            {onmousedown}
            {onmousemove}
            {onmouseup}
            {onmouseleave}
        />
    }
}
