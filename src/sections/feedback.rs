use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::TESTIMONIALS;
use crate::effects::{reveal_class, use_reveal};

/// Moves `index` by `delta` around a ring of `len` slides.
pub fn step(index: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    (index as isize + delta).rem_euclid(len as isize) as usize
}

#[function_component(Feedback)]
pub fn feedback() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let active = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    let move_by = |delta: isize| {
        let active = active.clone();
        Callback::from(move |_: MouseEvent| active.set(step(*active, len, delta)))
    };
    let previous = move_by(-1);
    let next = move_by(1);

    let testimonial = &TESTIMONIALS[*active % len];

    html! {
        <section id="feedback" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .carousel {
                        max-width: 760px;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .testimonial {
                        min-height: 260px;
                    }
                    .testimonial blockquote {
                        font-size: 1.2rem;
                        font-style: italic;
                        line-height: 1.7;
                        margin: 0 0 24px;
                        color: rgba(255, 255, 255, 0.9);
                    }
                    .testimonial img {
                        width: 72px;
                        height: 72px;
                        border-radius: 50%;
                        object-fit: cover;
                        border: 2px solid #F9B72B;
                    }
                    .testimonial-role {
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .carousel-controls {
                        display: flex;
                        justify-content: center;
                        align-items: center;
                        gap: 16px;
                        margin-top: 24px;
                    }
                    .carousel-arrow {
                        width: 40px;
                        height: 40px;
                        border-radius: 50%;
                        border: 1px solid rgba(249, 183, 43, 0.5);
                        background: transparent;
                        color: #F9B72B;
                        cursor: pointer;
                        font-size: 1.2rem;
                    }
                    .carousel-dot {
                        width: 10px;
                        height: 10px;
                        padding: 0;
                        border-radius: 50%;
                        border: none;
                        background: rgba(255, 255, 255, 0.3);
                        cursor: pointer;
                    }
                    .carousel-dot.active {
                        background: #F9B72B;
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Participant Feedback"
                    subtitle="Tales from past investigators."
                />
                <div class="carousel">
                    <div class="card testimonial">
                        <blockquote>{testimonial.quote}</blockquote>
                        <img src={testimonial.image} alt={testimonial.name} loading="lazy" />
                        <h4>{testimonial.name}</h4>
                        <div class="testimonial-role">
                            {format!("{}, {}", testimonial.role, testimonial.company)}
                        </div>
                    </div>
                    <div class="carousel-controls">
                        <button class="carousel-arrow" aria-label="Previous testimonial" onclick={previous}>{"‹"}</button>
                        { for (0..len).map(|i| {
                            let onclick = {
                                let active = active.clone();
                                Callback::from(move |_: MouseEvent| active.set(i))
                            };
                            html! {
                                <button
                                    class={classes!("carousel-dot", (*active == i).then_some("active"))}
                                    aria-label={format!("Show testimonial {}", i + 1)}
                                    {onclick}
                                />
                            }
                        }) }
                        <button class="carousel-arrow" aria-label="Next testimonial" onclick={next}>{"›"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn next_wraps_to_first() {
        assert_eq!(step(3, 4, 1), 0);
        assert_eq!(step(1, 4, 1), 2);
    }

    #[test]
    fn previous_wraps_to_last() {
        assert_eq!(step(0, 4, -1), 3);
        assert_eq!(step(2, 4, -1), 1);
    }

    #[test]
    fn empty_ring_stays_at_zero() {
        assert_eq!(step(0, 0, 1), 0);
    }
}
