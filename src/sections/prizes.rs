use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{PrizeTier, SpecialAward, PRIZE_TIERS, SPECIAL_AWARDS};
use crate::effects::{reveal_class, use_reveal};

fn prize_card(prize: &PrizeTier) -> Html {
    html! {
        <div
            class={classes!("card", "prize-card", prize.tier.class())}
            style={format!("--tier-accent: {};", prize.tier.accent())}
        >
            <div class="icon-badge">{prize.icon.symbol()}</div>
            <h3>{prize.title}</h3>
            <div class="prize-cash">{prize.cash}</div>
            <div class="prize-label">{"Cash"}</div>
            <div class="prize-goodies">{prize.goodies}</div>
            <div class="prize-label">{"Goodies"}</div>
        </div>
    }
}

fn award_card(award: &SpecialAward) -> Html {
    html! {
        <div class="card award-card">
            <div class="icon-badge">{award.icon.symbol()}</div>
            <h4>{award.title}</h4>
            <div class="award-amount">{award.amount}</div>
            <p>{award.description}</p>
        </div>
    }
}

#[function_component(Prizes)]
pub fn prizes() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="prizes" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .prize-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
                        gap: 24px;
                        margin-bottom: 48px;
                    }
                    .prize-card {
                        text-align: center;
                        border-color: var(--tier-accent);
                    }
                    .prize-card h3 {
                        color: var(--tier-accent);
                    }
                    .tier-gold {
                        transform: scale(1.05);
                        box-shadow: 0 0 32px rgba(249, 183, 43, 0.25);
                    }
                    .prize-cash, .prize-goodies {
                        font-size: 2.2rem;
                        font-weight: bold;
                        color: #fff;
                    }
                    .prize-goodies {
                        font-size: 1.5rem;
                        margin-top: 12px;
                    }
                    .prize-label {
                        font-size: 0.8rem;
                        letter-spacing: 2px;
                        text-transform: uppercase;
                        color: rgba(255, 255, 255, 0.5);
                    }
                    .award-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                        gap: 16px;
                    }
                    .award-amount {
                        color: #F9B72B;
                        font-weight: bold;
                        font-size: 1.3rem;
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Prizes & Rewards"
                    subtitle="Solve the mystery, claim the treasure."
                />
                <div class="prize-grid">
                    { for PRIZE_TIERS.iter().map(prize_card) }
                </div>
                <h3 class="subsection-title">{"Special Awards"}</h3>
                <div class="award-grid">
                    { for SPECIAL_AWARDS.iter().map(award_card) }
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;
    use web_sys::Element;

    wasm_bindgen_test_configure!(run_in_browser);

    fn pinned_root(top: &str) -> String {
        format!("position: fixed; top: {top}; left: 0; width: 100%;")
    }

    fn section(root: &Element) -> Element {
        root.query_selector("#prizes").unwrap().unwrap()
    }

    #[wasm_bindgen_test]
    async fn renders_the_three_tier_cards() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let app = yew::Renderer::<Prizes>::with_root(root.clone()).render();
        TimeoutFuture::new(50).await;

        let cards = root.query_selector_all(".prize-card").unwrap();
        assert_eq!(cards.length(), 3);
        let expected = [
            ("1st Prize", "30k", "25k"),
            ("2nd Prize", "20k", "15k"),
            ("3rd Prize", "15k", "10k"),
        ];
        for (i, (title, cash, goodies)) in expected.iter().enumerate() {
            let card = cards.item(i as u32).unwrap();
            let text = card.text_content().unwrap();
            assert!(text.contains(title), "{text}");
            assert!(text.contains(cash), "{text}");
            assert!(text.contains(goodies), "{text}");
        }
        app.destroy();
        root.remove();
    }

    #[wasm_bindgen_test]
    async fn fades_in_once_when_scrolled_into_view() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_attribute("style", &pinned_root("-100000px")).unwrap();
        document.body().unwrap().append_child(&root).unwrap();

        let app = yew::Renderer::<Prizes>::with_root(root.clone()).render();
        TimeoutFuture::new(100).await;
        assert_eq!(section(&root).class_name(), "section reveal");

        root.set_attribute("style", &pinned_root("0")).unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(section(&root).class_name(), "section reveal is-visible");

        // out of view and back again leaves the class alone
        root.set_attribute("style", &pinned_root("-100000px")).unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(section(&root).class_name(), "section reveal is-visible");
        root.set_attribute("style", &pinned_root("0")).unwrap();
        TimeoutFuture::new(200).await;
        assert_eq!(section(&root).class_name(), "section reveal is-visible");

        app.destroy();
        root.remove();
    }
}
