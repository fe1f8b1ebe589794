use yew::prelude::*;

use crate::components::glitch_text::GlitchText;
use crate::components::section_heading::SectionHeading;
use crate::content::{FEATURES, JOURNAL_ENTRY, JOURNAL_PARAGRAPHS, JOURNAL_TITLE};
use crate::effects::{reveal_class, use_reveal};
use crate::glitch::GlitchConfig;

#[function_component(About)]
pub fn about() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="about" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .feature-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 24px;
                        margin-bottom: 48px;
                    }
                    .journal {
                        position: relative;
                        padding: 32px;
                        border-radius: 12px;
                        background: linear-gradient(135deg, rgba(92, 64, 51, 0.35), rgba(30, 20, 15, 0.6));
                        border: 1px solid rgba(249, 183, 43, 0.25);
                    }
                    .journal-entry {
                        font-family: monospace;
                        color: #F9B72B;
                        letter-spacing: 2px;
                        font-size: 0.8rem;
                    }
                    .journal h3 {
                        font-family: 'Creepster', cursive;
                        font-size: 2rem;
                        margin: 8px 0 16px;
                    }
                    .journal p {
                        line-height: 1.7;
                        color: rgba(255, 255, 255, 0.8);
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="About HexaFalls"
                    subtitle="Step into a world where code meets the unexplained."
                />
                <div class="feature-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="card">
                            <div class="icon-badge">{feature.icon.symbol()}</div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    }) }
                </div>
                <div class="journal">
                    <GlitchText class="journal-entry" text={JOURNAL_ENTRY} config={GlitchConfig::subtle()} />
                    <h3>{JOURNAL_TITLE}</h3>
                    { for JOURNAL_PARAGRAPHS.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
                </div>
            </div>
        </section>
    }
}
