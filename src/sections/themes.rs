use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{Theme, THEMES};
use crate::effects::{reveal_class, use_reveal};
use crate::Route;

fn theme_card(theme: &Theme) -> Html {
    html! {
        <div class="card theme-card">
            <div class="theme-image" style={format!("background-image: url('{}');", theme.image)} />
            <div class="theme-body">
                <div class="icon-badge">{theme.icon.symbol()}</div>
                <h3>{theme.title}</h3>
                <p>{theme.description}</p>
                {
                    if theme.links_to_explorer {
                        html! {
                            <Link<Route> to={Route::BillCipher} classes="btn btn-outline">
                                {"Explore the 3D Model"}
                            </Link<Route>>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[function_component(Themes)]
pub fn themes() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="themes" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .theme-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 24px;
                    }
                    .theme-card {
                        padding: 0;
                        overflow: hidden;
                    }
                    .theme-image {
                        height: 160px;
                        background-size: cover;
                        background-position: center;
                        filter: saturate(0.6) brightness(0.7);
                        transition: filter 0.3s ease;
                    }
                    .theme-card:hover .theme-image {
                        filter: saturate(1) brightness(0.9);
                    }
                    .theme-body {
                        padding: 24px;
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Mysterious Themes"
                    subtitle="Choose your path into the unknown."
                />
                <div class="theme-grid">
                    { for THEMES.iter().map(theme_card) }
                </div>
            </div>
        </section>
    }
}
