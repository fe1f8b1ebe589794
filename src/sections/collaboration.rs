use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{COLLABORATION_POINTS, VENUE_ZONES};
use crate::effects::{reveal_class, use_reveal};

#[function_component(Collaboration)]
pub fn collaboration() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="collaboration" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .collab-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                        gap: 32px;
                    }
                    .collab-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .collab-list li {
                        display: flex;
                        align-items: center;
                        gap: 12px;
                        margin-bottom: 16px;
                    }
                    .venue-map {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 12px;
                    }
                    .venue-zone {
                        padding: 20px;
                        border-radius: 10px;
                        border: 1px dashed rgba(249, 183, 43, 0.4);
                        background: rgba(249, 183, 43, 0.05);
                        text-align: center;
                    }
                    .venue-zone strong {
                        display: block;
                        color: #F9B72B;
                    }
                    .venue-zone span {
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Collaborate & Connect"
                    subtitle="No mystery is solved alone."
                />
                <div class="collab-grid">
                    <div class="card">
                        <h3>{"Team Up"}</h3>
                        <ul class="collab-list">
                            { for COLLABORATION_POINTS.iter().map(|(icon, text)| html! {
                                <li>
                                    <span class="icon-badge">{icon.symbol()}</span>
                                    <span>{*text}</span>
                                </li>
                            }) }
                        </ul>
                    </div>
                    <div class="card">
                        <h3>{"Venue Map"}</h3>
                        <div class="venue-map">
                            { for VENUE_ZONES.iter().map(|(name, purpose)| html! {
                                <div class="venue-zone">
                                    <strong>{*name}</strong>
                                    <span>{*purpose}</span>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
