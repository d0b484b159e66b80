use yew::prelude::*;

use crate::components::revealed::Revealed;
use crate::content::section::Section;
use crate::content::stagger::TIMELINE_EVENTS;
use crate::content::timeline::{Side, TimelineEvent, TIMELINE};
use crate::hooks::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct TimelineItemProps {
    event: TimelineEvent,
    shown: bool,
    delay_ms: u32,
}

#[function_component(TimelineItem)]
fn timeline_item(props: &TimelineItemProps) -> Html {
    let event = &props.event;
    let row_class = classes!("timeline-row", (event.side == Side::Right).then_some("right"));

    html! {
        <div class={row_class}>
            <div class="timeline-spacer"></div>
            <div class="timeline-marker">{ event.short_year() }</div>
            <Revealed shown={props.shown} delay_ms={props.delay_ms} class="timeline-card">
                <h3>{ event.year }</h3>
                <h4>{ event.title }</h4>
                <p>{ event.description }</p>
            </Revealed>
        </div>
    }
}

#[function_component(Timeline)]
pub fn timeline() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone());

    html! {
        <section id={Section::Timeline.anchor()} ref={section_ref} class="section timeline">
            <style>
                {r#"
                    .timeline {
                        background: white;
                    }
                    .timeline-track {
                        position: relative;
                        overflow: hidden;
                        padding: 2.5rem;
                    }
                    .timeline-track::before {
                        content: "";
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        left: 50%;
                        border-left: 2px solid rgba(29, 78, 216, 0.2);
                    }
                    .timeline-row {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 2rem;
                    }
                    .timeline-row.right {
                        flex-direction: row-reverse;
                    }
                    .timeline-spacer {
                        width: 41.666%;
                    }
                    .timeline-marker {
                        z-index: 1;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 2rem;
                        height: 2rem;
                        border-radius: 9999px;
                        background: #f97316;
                        color: white;
                        font-weight: 600;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.2);
                    }
                    .timeline-card {
                        width: 41.666%;
                        padding: 1rem 1.5rem;
                        border-radius: 0.5rem;
                        background: white;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .timeline-card h3 {
                        margin: 0 0 0.25rem;
                        color: #1e40af;
                    }
                    .timeline-card h4 {
                        margin: 0;
                        color: #1d4ed8;
                    }
                    .timeline-card p {
                        margin: 0.5rem 0 0;
                        font-size: 0.875rem;
                    }
                "#}
            </style>
            <div class="container">
                <Revealed shown={shown}>
                    <h2 class="section-title"><span>{"Career Timeline"}</span></h2>
                    <p class="section-lead">
                        {"Follow the journey of Rohit Sharma from his international debut to becoming one of cricket's most accomplished players and captains."}
                    </p>
                </Revealed>

                <div class="timeline-track">
                    { for TIMELINE.iter().enumerate().map(|(i, event)| html! {
                        <TimelineItem key={i} event={*event} shown={shown} delay_ms={TIMELINE_EVENTS.delay(i)} />
                    }) }
                </div>
            </div>
        </section>
    }
}
