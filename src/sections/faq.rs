use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::FAQS;
use crate::effects::{reveal_class, use_reveal};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    answer: AttrValue,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" aria-expanded={(*is_open).to_string()} onclick={toggle}>
                <span class="question-text">{props.question.clone()}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div class="faq-answer">
                <p>{props.answer.clone()}</p>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());

    html! {
        <section id="faq" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .faq-list {
                        max-width: 800px;
                        margin: 0 auto;
                    }
                    .faq-item {
                        margin-bottom: 12px;
                        border-radius: 10px;
                        border: 1px solid rgba(249, 183, 43, 0.2);
                        background: rgba(15, 20, 35, 0.7);
                        overflow: hidden;
                    }
                    .faq-question {
                        width: 100%;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        gap: 16px;
                        padding: 18px 20px;
                        border: none;
                        background: transparent;
                        color: #fff;
                        font-size: 1.05rem;
                        text-align: left;
                        cursor: pointer;
                    }
                    .toggle-icon {
                        color: #F9B72B;
                        font-size: 1.4rem;
                    }
                    .faq-answer {
                        max-height: 0;
                        overflow: hidden;
                        padding: 0 20px;
                        color: rgba(255, 255, 255, 0.75);
                        transition: max-height 0.3s ease, padding 0.3s ease;
                    }
                    .faq-item.open .faq-answer {
                        max-height: 400px;
                        padding: 0 20px 18px;
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Frequently Asked Questions"
                    subtitle="Answers to the town's most common mysteries."
                />
                <div class="faq-list">
                    { for FAQS.iter().map(|(question, answer)| html! {
                        <FaqItem question={*question} answer={*answer} />
                    }) }
                </div>
            </div>
        </section>
    }
}
