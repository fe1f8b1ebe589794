use yew::prelude::*;

use crate::cipher::{self, CIPHER_MAP};
use crate::components::anchor::AnchorLink;
use crate::components::glitch_text::{GlitchMode, GlitchText};
use crate::components::modal::Modal;
use crate::components::static_noise::StaticNoise;
use crate::config::{DISCORD_URL, EVENT_DATES, EVENT_NAME};
use crate::glitch::GlitchConfig;

const WATCHING: &str = "I AM WATCHING";

/// Drifting outlines behind the title as (shape class, left %, top %, delay s).
const SHAPES: [(&str, u8, u8, f32); 5] = [
    ("shape-triangle", 12, 20, 0.0),
    ("shape-circle", 80, 15, 1.5),
    ("shape-triangle", 70, 70, 3.0),
    ("shape-square", 20, 75, 2.2),
    ("shape-circle", 45, 85, 4.1),
];

#[function_component(Hero)]
pub fn hero() -> Html {
    let watching_hovered = use_state(|| false);
    let guide_open = use_state(|| false);

    let onmouseenter = {
        let watching_hovered = watching_hovered.clone();
        Callback::from(move |_: MouseEvent| watching_hovered.set(true))
    };
    let onmouseleave = {
        let watching_hovered = watching_hovered.clone();
        Callback::from(move |_: MouseEvent| watching_hovered.set(false))
    };
    let open_guide = {
        let guide_open = guide_open.clone();
        Callback::from(move |_: MouseEvent| guide_open.set(true))
    };
    let close_guide = {
        let guide_open = guide_open.clone();
        Callback::from(move |_: ()| guide_open.set(false))
    };

    let watching = if *watching_hovered {
        cipher::encode(WATCHING)
    } else {
        WATCHING.to_string()
    };

    html! {
        <section id="hero" class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        overflow: hidden;
                        text-align: center;
                        background: radial-gradient(ellipse at center, #1a1f3a 0%, #05070d 70%);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 2;
                        padding: 0 24px;
                    }
                    .hero-badge {
                        display: inline-block;
                        padding: 6px 16px;
                        margin-bottom: 24px;
                        border-radius: 999px;
                        border: 1px solid rgba(249, 183, 43, 0.5);
                        color: #F9B72B;
                        letter-spacing: 3px;
                        font-size: 0.9rem;
                    }
                    .hero-title {
                        font-family: 'Creepster', cursive;
                        font-size: clamp(3rem, 12vw, 8rem);
                        margin: 0;
                    }
                    .hero-tagline {
                        color: rgba(255, 255, 255, 0.75);
                        font-size: 1.2rem;
                        margin: 16px 0 32px;
                    }
                    .hero-ctas {
                        display: flex;
                        flex-wrap: wrap;
                        gap: 16px;
                        justify-content: center;
                    }
                    .hero-watching {
                        margin-top: 48px;
                        font-family: monospace;
                        letter-spacing: 4px;
                        color: rgba(249, 183, 43, 0.7);
                        cursor: pointer;
                        min-height: 1.5em;
                    }
                    .floating-shape {
                        position: absolute;
                        z-index: 1;
                        width: 60px;
                        height: 60px;
                        opacity: 0.25;
                        border: 2px solid #F9B72B;
                        animation: float 8s ease-in-out infinite;
                        pointer-events: none;
                    }
                    .shape-circle { border-radius: 50%; }
                    .shape-triangle {
                        border: none;
                        width: 0;
                        height: 0;
                        border-left: 30px solid transparent;
                        border-right: 30px solid transparent;
                        border-bottom: 52px solid rgba(249, 183, 43, 0.6);
                    }
                    @keyframes float {
                        0%, 100% { transform: translateY(0) rotate(0deg); }
                        50% { transform: translateY(-24px) rotate(12deg); }
                    }
                    .cipher-guide {
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(64px, 1fr));
                        gap: 8px;
                    }
                    .cipher-guide div {
                        padding: 6px;
                        text-align: center;
                        border-radius: 6px;
                        background: rgba(249, 183, 43, 0.08);
                        font-family: monospace;
                    }
                "#}
            </style>
            <StaticNoise />
            { for SHAPES.iter().map(|(shape, left, top, delay)| html! {
                <div
                    class={classes!("floating-shape", *shape)}
                    style={format!("left: {left}%; top: {top}%; animation-delay: {delay}s;")}
                />
            }) }
            <div class="hero-content">
                <div class="hero-badge" title={EVENT_DATES}>{cipher::encode(EVENT_DATES)}</div>
                <GlitchText tag="h1" class="hero-title" text={EVENT_NAME} color="#F9B72B" config={GlitchConfig::title()} />
                <p class="hero-tagline">
                    <GlitchText text="Where code meets the unexplained" mode={GlitchMode::Decode} />
                </p>
                <div class="hero-ctas">
                    <AnchorLink href="#register" class="btn btn-primary">{"Join the Mystery"}</AnchorLink>
                    <a href={DISCORD_URL} class="btn btn-outline">{"Join Discord"}</a>
                </div>
                <div
                    class="hero-watching"
                    title="Open the cipher guide"
                    {onmouseenter}
                    {onmouseleave}
                    onclick={open_guide}
                >
                    {watching}
                </div>
            </div>
            {
                if *guide_open {
                    html! {
                        <Modal title="Cipher Guide" subtitle="Each letter hides behind a symbol." on_close={close_guide}>
                            <div class="cipher-guide">
                                { for CIPHER_MAP.iter().map(|(letter, glyph)| html! {
                                    <div>{format!("{letter} → {glyph}")}</div>
                                }) }
                            </div>
                        </Modal>
                    }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
