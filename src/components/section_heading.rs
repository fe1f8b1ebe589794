use yew::prelude::*;

use crate::components::glitch_text::GlitchText;
use crate::glitch::GlitchConfig;

#[derive(Properties, PartialEq)]
pub struct SectionHeadingProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
}

#[function_component(SectionHeading)]
pub fn section_heading(props: &SectionHeadingProps) -> Html {
    html! {
        <div class="section-heading">
            <GlitchText
                tag="h2"
                text={props.title.clone()}
                color="#F9B72B"
                config={GlitchConfig::heading()}
            />
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle.clone()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
