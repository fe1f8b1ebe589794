use yew::prelude::*;

use crate::config::EVENT_NAME;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(32)]
    pub size: u32,
    #[prop_or(true)]
    pub show_name: bool,
}

/// Eye-in-a-triangle mark with the event name beside it.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let size = props.size.to_string();
    html! {
        <span class="logo" style="display: inline-flex; align-items: center; gap: 8px;">
            <svg width={size.clone()} height={size} viewBox="0 0 100 100" aria-hidden="true">
                <polygon points="50,6 94,90 6,90" fill="#F9B72B" stroke="#000" stroke-width="3" />
                <ellipse cx="50" cy="60" rx="16" ry="11" fill="#fff" stroke="#000" stroke-width="2" />
                <ellipse cx="50" cy="60" rx="3" ry="9" fill="#000" />
                <rect x="38" y="0" width="24" height="6" fill="#000" />
            </svg>
            {
                if props.show_name {
                    html! { <span class="logo-name" style="font-family: 'Creepster', cursive; color: #F9B72B; font-size: 1.5rem;">{EVENT_NAME}</span> }
                } else {
                    html! {}
                }
            }
        </span>
    }
}
