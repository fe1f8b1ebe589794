use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

use crate::config::NAV_SCROLL_OFFSET;

/// Smooth-scrolls so the section sits just below the fixed navbar.
/// Returns false when no element carries `id`.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Some(element) = window
        .document()
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        warn!("no section with id {id}");
        return false;
    };
    let options = ScrollToOptions::new();
    options.set_top(element.offset_top() as f64 - NAV_SCROLL_OFFSET);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    true
}

/// `#section` links become smooth scrolls; anything else navigates normally.
pub fn section_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[derive(Properties, PartialEq)]
pub struct AnchorLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after the scroll starts, e.g. to close a menu.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(AnchorLink)]
pub fn anchor_link(props: &AnchorLinkProps) -> Html {
    let onclick = {
        let href = props.href.clone();
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(id) = section_target(&href) {
                e.prevent_default();
                scroll_to_section(id);
            }
            if let Some(on_navigate) = &on_navigate {
                on_navigate.emit(());
            }
        })
    };

    html! {
        <a href={props.href.clone()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_links_target_sections() {
        assert_eq!(section_target("#register"), Some("register"));
        assert_eq!(section_target("#speakers-judges"), Some("speakers-judges"));
    }

    #[test]
    fn other_links_are_left_alone() {
        assert_eq!(section_target("#"), None);
        assert_eq!(section_target("/bill-cipher"), None);
        assert_eq!(section_target("mailto:info@gravityhack.com"), None);
    }
}
