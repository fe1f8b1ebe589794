use yew::prelude::*;

use crate::components::section_heading::SectionHeading;
use crate::content::{schedule_for, SCHEDULE};
use crate::effects::{reveal_class, use_reveal};

#[function_component(Schedule)]
pub fn schedule() -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone());
    let active_day = use_state(|| 1usize);

    let tabs = (1..=SCHEDULE.len()).map(|day| {
        let onclick = {
            let active_day = active_day.clone();
            Callback::from(move |_: MouseEvent| active_day.set(day))
        };
        html! {
            <button
                class={classes!("day-tab", (*active_day == day).then_some("active"))}
                {onclick}
            >
                {format!("Day {day}")}
            </button>
        }
    });

    html! {
        <section id="schedule" ref={node} class={classes!("section", reveal_class(visible))}>
            <style>
                {r#"
                    .day-tabs {
                        display: flex;
                        justify-content: center;
                        gap: 12px;
                        margin-bottom: 32px;
                    }
                    .day-tab {
                        padding: 10px 24px;
                        border-radius: 999px;
                        border: 1px solid rgba(249, 183, 43, 0.4);
                        background: transparent;
                        color: rgba(255, 255, 255, 0.8);
                        cursor: pointer;
                        font-size: 1rem;
                    }
                    .day-tab.active {
                        background: #F9B72B;
                        color: #05070d;
                        font-weight: bold;
                    }
                    .timeline {
                        max-width: 800px;
                        margin: 0 auto;
                        border-left: 2px solid rgba(249, 183, 43, 0.3);
                    }
                    .timeline-event {
                        position: relative;
                        padding: 0 0 28px 28px;
                    }
                    .timeline-event::before {
                        content: '';
                        position: absolute;
                        left: -7px;
                        top: 4px;
                        width: 12px;
                        height: 12px;
                        border-radius: 50%;
                        background: #F9B72B;
                    }
                    .event-time {
                        font-family: monospace;
                        color: #F9B72B;
                        font-size: 0.9rem;
                    }
                    .event-location {
                        font-size: 0.85rem;
                        color: rgba(255, 255, 255, 0.5);
                    }
                "#}
            </style>
            <div class="section-inner">
                <SectionHeading
                    title="Event Schedule"
                    subtitle="Three days of mystery, code and discovery."
                />
                <div class="day-tabs">{ for tabs }</div>
                <div class="timeline">
                    { for schedule_for(*active_day).iter().map(|event| html! {
                        <div class="timeline-event">
                            <div class="event-time">{event.time}</div>
                            <h4>{event.title}</h4>
                            <p>{event.description}</p>
                            <div class="event-location">{format!("📍 {}", event.location)}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
