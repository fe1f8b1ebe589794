use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::effects::use_effect_scope;
use crate::visuals::noise::NoiseFrame;
use crate::visuals::{context_2d, fit_canvas};

#[derive(Properties, PartialEq)]
pub struct StaticNoiseProps {
    #[prop_or(0.3)]
    pub opacity: f64,
}

/// Full-bleed TV static behind the hero.
#[function_component(StaticNoise)]
pub fn static_noise(props: &StaticNoiseProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_scope((), move |scope, _| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let Some(ctx) = context_2d(&canvas) else {
                warn!("2d context unavailable, static noise disabled");
                return;
            };
            let size = Rc::new(Cell::new(fit_canvas(&canvas)));

            if let Some(window) = web_sys::window() {
                let size = size.clone();
                let canvas = canvas.clone();
                scope.listen(&window, "resize", move |_| size.set(fit_canvas(&canvas)));
            }

            let mut rng = StdRng::from_entropy();
            scope.animation_loop(move |_| {
                let (width, height) = size.get();
                NoiseFrame::generate(&mut rng, width, height).draw(&ctx, width, height);
            });
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            class="static-noise"
            style={format!("position: absolute; inset: 0; width: 100%; height: 100%; pointer-events: none; opacity: {};", props.opacity)}
        />
    }
}
