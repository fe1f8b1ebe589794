use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{Person, JUDGES, SPEAKERS};
use crate::effects::{reveal_class, use_reveal};

fn person_card(person: &Person) -> Html {
    html! {
        <div class="card person-card">
            <img class="person-photo" src={person.image} alt={person.name} loading="lazy" />
            <h4>{person.name}</h4>
            <div class="person-role">{person.role}</div>
            <div class="person-company">{person.company}</div>
            <p>{person.description}</p>
        </div>
    }
}

#[function_component(SpeakersJudges)]
pub fn speakers_judges() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="speakers-judges" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .people-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                        gap: 24px;
                        margin-bottom: 48px;
                    }
                    .person-card {
                        text-align: center;
                    }
                    .person-photo {
                        width: 112px;
                        height: 112px;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 3px solid #F9B72B;
                        filter: sepia(0.3);
                    }
                    .person-role {
                        color: #F9B72B;
                        font-weight: bold;
                    }
                    .person-company {
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Speakers & Judges"
                    subtitle="Guides through the unknown."
                />
                <h3 class="subsection-title">{"Speakers"}</h3>
                <div class="people-grid">
                    { for SPEAKERS.iter().map(person_card) }
                </div>
                <h3 class="subsection-title">{"Judges"}</h3>
                <div class="people-grid">
                    { for JUDGES.iter().map(person_card) }
                </div>
            </div>
        </section>
    }
}
