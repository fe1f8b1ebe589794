use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::effects::{use_effect_scope, ScopeHandle};
use crate::glitch::{DecodeReveal, Distortion, GlitchConfig, GlitchEngine};

const DECODE_TICK_MS: u32 = 30;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlitchMode {
    /// Continuous ticking with periodic bursts.
    Ambient,
    /// Plain until hovered, then scrambles and resolves left to right.
    Decode,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum TickAction {
    Animate,
    Restore,
    Idle,
}

/// Hover and click holds that pin the plain text on screen.
#[derive(Default)]
struct Hold {
    hover: bool,
    click: bool,
    restored: bool,
}

impl Hold {
    fn active(&self) -> bool {
        self.hover || self.click
    }

    /// Restores once when a hold starts, then idles until it ends.
    fn next_tick(&mut self) -> TickAction {
        if !self.active() {
            self.restored = false;
            return TickAction::Animate;
        }
        if self.restored {
            TickAction::Idle
        } else {
            self.restored = true;
            TickAction::Restore
        }
    }
}

#[cfg(test)]
thread_local! {
    static UPDATES: RefCell<std::collections::HashMap<String, usize>> = RefCell::default();
}

#[cfg(test)]
fn count_update(text: &str) {
    UPDATES.with(|updates| *updates.borrow_mut().entry(text.to_string()).or_default() += 1);
}

#[cfg(not(test))]
fn count_update(_text: &str) {}

#[derive(Properties, PartialEq)]
pub struct GlitchTextProps {
    pub text: AttrValue,
    #[prop_or(AttrValue::Static("span"))]
    pub tag: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("inherit"))]
    pub color: AttrValue,
    #[prop_or_else(GlitchConfig::title)]
    pub config: GlitchConfig,
    #[prop_or(GlitchMode::Ambient)]
    pub mode: GlitchMode,
    /// Show the plain text while the pointer is over it.
    #[prop_or(true)]
    pub hover_reveal: bool,
}

#[function_component(GlitchText)]
pub fn glitch_text(props: &GlitchTextProps) -> Html {
    let shown = use_state(|| props.text.to_string());
    let distortion = use_state(Distortion::default);
    let bursting = use_state(|| false);
    let hovered = use_state(|| false);
    let hold = use_mut_ref(Hold::default);
    let scope_slot = use_mut_ref(|| None::<ScopeHandle>);

    {
        let shown = shown.setter();
        let distortion = distortion.setter();
        let bursting = bursting.setter();
        let hold = hold.clone();
        let scope_slot = scope_slot.clone();
        use_effect_scope(
            (props.text.clone(), props.config.clone(), props.mode),
            move |scope, (text, config, mode)| {
                *scope_slot.borrow_mut() = Some(scope.handle());
                shown.set(text.to_string());
                if *mode != GlitchMode::Ambient {
                    return;
                }
                debug!("glitch text running for {:?}", text);

                let rng = Rc::new(RefCell::new(StdRng::from_entropy()));
                let engine = Rc::new(RefCell::new(GlitchEngine::new(
                    text,
                    config,
                    &mut *rng.borrow_mut(),
                )));

                scope.interval(config.tick_ms, {
                    let rng = rng.clone();
                    let engine = engine.clone();
                    let hold = hold.clone();
                    let text = text.clone();
                    move || {
                        let mut engine = engine.borrow_mut();
                        let action = hold.borrow_mut().next_tick();
                        match action {
                            TickAction::Idle => return,
                            TickAction::Restore => {
                                shown.set(engine.restore());
                                distortion.set(Distortion::default());
                            }
                            TickAction::Animate => {
                                let mut rng = rng.borrow_mut();
                                shown.set(engine.tick(&mut *rng));
                                distortion.set(engine.distortion(&mut *rng));
                            }
                        }
                        count_update(&text);
                    }
                });

                if config.has_bursts() {
                    let every = config.next_burst_every(&mut *rng.borrow_mut());
                    let handle = scope.handle();
                    let config = config.clone();
                    let text = text.clone();
                    scope.interval(every, move || {
                        if hold.borrow().active() {
                            return;
                        }
                        engine.borrow_mut().begin_burst();
                        bursting.set(true);
                        count_update(&text);
                        let length = config.next_burst_len(&mut *rng.borrow_mut());
                        let engine = engine.clone();
                        let bursting = bursting.clone();
                        let text = text.clone();
                        handle.timeout("burst-end", length, move || {
                            engine.borrow_mut().end_burst();
                            bursting.set(false);
                            count_update(&text);
                        });
                    });
                }
            },
        );
    }

    {
        let shown = shown.setter();
        use_effect_scope(
            (props.text.clone(), *hovered, props.mode),
            move |scope, (text, hovered, mode)| {
                if *mode != GlitchMode::Decode {
                    return;
                }
                if !*hovered {
                    shown.set(text.to_string());
                    return;
                }
                let mut rng = StdRng::from_entropy();
                let mut reveal = DecodeReveal::new(text);
                let text = text.clone();
                scope.interval(DECODE_TICK_MS, move || {
                    if !reveal.is_done() {
                        shown.set(reveal.tick(&mut rng));
                        count_update(&text);
                    }
                });
            },
        );
    }

    let onmouseenter = {
        let hovered = hovered.clone();
        let hold = hold.clone();
        let hover_reveal = props.hover_reveal;
        Callback::from(move |_: MouseEvent| {
            hovered.set(true);
            if hover_reveal {
                hold.borrow_mut().hover = true;
            }
        })
    };

    let onmouseleave = {
        let hovered = hovered.clone();
        let hold = hold.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            hold.borrow_mut().hover = false;
        })
    };

    let onclick = {
        let hold = hold.clone();
        let scope_slot = scope_slot.clone();
        let reveal_ms = props.config.reveal_ms;
        let text = props.text.clone();
        Callback::from(move |_: MouseEvent| {
            let clicked = {
                let mut current = hold.borrow_mut();
                current.click = !current.click;
                current.click
            };
            let handle = scope_slot.borrow().clone();
            if let Some(handle) = handle {
                if clicked {
                    let hold = hold.clone();
                    let text = text.clone();
                    handle.timeout("click-reveal", reveal_ms, move || {
                        hold.borrow_mut().click = false;
                        count_update(&text);
                    });
                } else {
                    handle.cancel("click-reveal");
                }
            }
        })
    };

    let text = (*shown).clone();
    let offsets = *distortion;

    html! {
        <@{props.tag.to_string()}
            class={classes!("glitch-text", (*bursting).then_some("is-bursting"), props.class.clone())}
            style={format!("color: {}; {}", props.color, offsets.shake_style())}
            data-text={text.clone()}
            {onmouseenter}
            {onmouseleave}
            {onclick}
        >
            <style>{GLITCH_CSS}</style>
            <span class="glitch-layer glitch-red" aria-hidden="true" style={Distortion::layer_style(offsets.red)}>{text.clone()}</span>
            <span class="glitch-layer glitch-green" aria-hidden="true" style={Distortion::layer_style(offsets.green)}>{text.clone()}</span>
            <span class="glitch-layer glitch-blue" aria-hidden="true" style={Distortion::layer_style(offsets.blue)}>{text.clone()}</span>
            <span class="glitch-main">{text}</span>
        </@>
    }
}

const GLITCH_CSS: &str = r#"
    .glitch-text {
        position: relative;
        display: inline-block;
        cursor: pointer;
        white-space: pre;
        transition: transform 0.05s linear;
    }
    .glitch-text .glitch-main {
        position: relative;
        z-index: 2;
    }
    .glitch-layer {
        position: absolute;
        top: 0;
        left: 0;
        width: 100%;
        opacity: 0.7;
        pointer-events: none;
        mix-blend-mode: screen;
    }
    .glitch-red { color: #ff0040; z-index: 1; }
    .glitch-green { color: #00ff9f; z-index: 1; }
    .glitch-blue { color: #00b3ff; z-index: 1; }
    .glitch-text.is-bursting {
        text-shadow: 2px 0 5px #ff00ff, -2px 0 10px #00ffff;
    }
    .glitch-text.is-bursting .glitch-layer {
        opacity: 0.95;
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hold_restores_once_then_idles() {
        let mut hold = Hold::default();
        assert_eq!(hold.next_tick(), TickAction::Animate);

        hold.hover = true;
        assert_eq!(hold.next_tick(), TickAction::Restore);
        for _ in 0..20 {
            assert_eq!(hold.next_tick(), TickAction::Idle);
        }

        // switching from hover to click keeps the text pinned without another restore
        hold.click = true;
        hold.hover = false;
        assert_eq!(hold.next_tick(), TickAction::Idle);

        hold.click = false;
        assert_eq!(hold.next_tick(), TickAction::Animate);
        hold.click = true;
        assert_eq!(hold.next_tick(), TickAction::Restore);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::HtmlElement;

    wasm_bindgen_test_configure!(run_in_browser);

    const TEXT: &str = "UNMOUNTED GLITCH";

    fn updates() -> usize {
        UPDATES.with(|updates| updates.borrow().get(TEXT).copied().unwrap_or(0))
    }

    #[function_component(FastGlitch)]
    fn fast_glitch() -> Html {
        let config = GlitchConfig {
            tick_ms: 10,
            reveal_ms: 30,
            ..GlitchConfig::title()
        };
        html! { <GlitchText text={TEXT} {config} /> }
    }

    #[wasm_bindgen_test]
    async fn no_updates_after_unmount() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let app = yew::Renderer::<FastGlitch>::with_root(root.clone()).render();
        TimeoutFuture::new(80).await;
        assert!(updates() > 0, "ticks before unmount");

        let element: HtmlElement = root
            .query_selector(".glitch-text")
            .unwrap()
            .unwrap()
            .dyn_into()
            .unwrap();
        element.click();

        app.destroy();
        let settled = updates();
        TimeoutFuture::new(100).await;
        assert_eq!(updates(), settled);
        root.remove();
    }
}
