use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::effects::use_effect_scope;
use crate::visuals::starfield::{Starfield, FIELD_RADIUS, STAR_COUNT};
use crate::visuals::{context_2d, fit_canvas};

#[function_component(SpaceBackground)]
pub fn space_background() -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_scope((), move |scope, _| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                warn!("2d context unavailable, starfield disabled");
                return;
            };
            let size = Rc::new(Cell::new(fit_canvas(&canvas)));
            if let Some(window) = web_sys::window() {
                let size = size.clone();
                let canvas = canvas.clone();
                scope.listen(&window, "resize", move |_| size.set(fit_canvas(&canvas)));
            }

            let mut rng = StdRng::from_entropy();
            let mut field = Starfield::generate(&mut rng, STAR_COUNT, FIELD_RADIUS);
            debug!("starfield generated with {} stars", field.stars().len());
            scope.animation_loop(move |timestamp| {
                field.advance(&mut rng, timestamp / 1000.0);
                let (width, height) = size.get();
                field.draw(&ctx, width, height);
            });
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="space-background"
            style="position: fixed; inset: 0; width: 100vw; height: 100vh; z-index: -1; pointer-events: none;"
        />
    }
}
