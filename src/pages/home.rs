use log::debug;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::config::DOCUMENT_TITLE;
use crate::sections::{
    about::About, collaboration::Collaboration, faq::Faq, feedback::Feedback, hero::Hero,
    prizes::Prizes, registration::Registration, schedule::Schedule, speakers::SpeakersJudges,
    sponsors::Sponsors, themes::Themes,
};

pub fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        document.set_title(title);
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    use_effect_with_deps(
        |_| {
            set_document_title(DOCUMENT_TITLE);
            debug!("Home mounted");
            || ()
        },
        (),
    );

    html! {
        <main class="home">
            <Hero />
            <About />
            <Themes />
            <Prizes />
            <Schedule />
            <Registration />
            <Sponsors />
            <Collaboration />
            <SpeakersJudges />
            <Feedback />
            <Faq />
            <Footer />
        </main>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::content::SECTION_IDS;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use yew_router::prelude::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[function_component(RoutedHome)]
    fn routed_home() -> Html {
        html! { <BrowserRouter><Home /></BrowserRouter> }
    }

    #[wasm_bindgen_test]
    async fn sections_render_in_page_order() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let app = yew::Renderer::<RoutedHome>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        let sections = root.query_selector_all("section[id]").unwrap();
        let ids: Vec<String> = (0..sections.length())
            .filter_map(|i| sections.item(i))
            .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
            .map(|el| el.id())
            .collect();
        assert_eq!(ids, SECTION_IDS);
        assert_eq!(document.title(), DOCUMENT_TITLE);
        app.destroy();
        root.remove();
    }
}
