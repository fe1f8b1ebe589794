use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::config::CONTACT_EMAIL;
use crate::content::SPONSORS;
use crate::effects::{reveal_class, use_reveal};

#[function_component(Sponsors)]
pub fn sponsors() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="sponsors" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .sponsor-tier {
                        margin-bottom: 40px;
                        text-align: center;
                    }
                    .sponsor-tier h3 {
                        color: var(--tier-accent);
                        letter-spacing: 2px;
                        text-transform: uppercase;
                    }
                    .sponsor-row {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 16px;
                    }
                    .sponsor-logo {
                        min-width: 160px;
                        padding: 20px 24px;
                        border-radius: 12px;
                        border: 1px solid var(--tier-accent);
                        background: rgba(255, 255, 255, 0.03);
                        font-weight: bold;
                    }
                    .tier-gold .sponsor-logo { font-size: 1.3rem; padding: 28px 32px; }
                    .tier-bronze .sponsor-logo { font-size: 0.9rem; min-width: 120px; }
                    .sponsor-cta {
                        text-align: center;
                        margin-top: 24px;
                        color: rgba(255, 255, 255, 0.7);
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Our Sponsors"
                    subtitle="The mysterious backers who make it all possible."
                />
                { for SPONSORS.iter().map(|group| html! {
                    <div
                        class={classes!("sponsor-tier", group.tier.class())}
                        style={format!("--tier-accent: {};", group.tier.accent())}
                    >
                        <h3>{group.heading}</h3>
                        <div class="sponsor-row">
                            { for group.names.iter().map(|name| html! {
                                <div class="sponsor-logo">{*name}</div>
                            }) }
                        </div>
                    </div>
                }) }
                <p class="sponsor-cta">
                    {"Interested in sponsoring? Reach us at "}
                    <a href={format!("mailto:{CONTACT_EMAIL}")}>{CONTACT_EMAIL}</a>
                </p>
            </div>
        </section>
    }
}
