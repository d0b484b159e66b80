use yew::prelude::*;
use yew_hooks::prelude::use_mount;

use crate::components::revealed::{Motion, Revealed};
use crate::content::profile::{HERO_BACKGROUND, HERO_PORTRAIT, QUICK_STATS};
use crate::content::section::Section;

/// Full-height banner. Sits above the fold, so it reveals on mount instead of
/// waiting for an intersection.
#[function_component(Hero)]
pub fn hero() -> Html {
    let shown = use_state_eq(|| false);

    {
        let shown = shown.clone();
        use_mount(move || shown.set(true));
    }

    html! {
        <section id={Section::Home.anchor()} class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        height: 100vh;
                        overflow: hidden;
                        background: linear-gradient(to right, #1e3a8a, #1e40af);
                    }
                    .hero-background {
                        position: absolute;
                        inset: 0;
                    }
                    .hero-background img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .hero-background::after {
                        content: "";
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(to right, rgba(30, 58, 138, 0.7), rgba(29, 78, 216, 0.6));
                    }
                    .hero-content {
                        position: relative;
                        height: 100%;
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 2rem;
                        align-items: center;
                    }
                    .hero-title {
                        font-size: 3.75rem;
                        font-weight: 700;
                        line-height: 1.1;
                        color: white;
                        margin: 0;
                    }
                    .hero-title span {
                        display: block;
                    }
                    .hero-title .nickname {
                        color: #fb923c;
                        margin-top: 0.5rem;
                    }
                    .hero-subtitle {
                        margin-top: 1.5rem;
                        font-size: 1.25rem;
                        color: #f3f4f6;
                        max-width: 32rem;
                    }
                    .hero-actions {
                        margin-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                    }
                    .hero-portrait {
                        position: relative;
                    }
                    .hero-portrait img {
                        width: 100%;
                        max-width: 28rem;
                        margin: 0 auto;
                        border-radius: 0.5rem;
                        object-fit: cover;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.3);
                    }
                    .quick-stats {
                        position: absolute;
                        bottom: 1rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        gap: 1.5rem;
                        padding: 0.5rem 1rem;
                        border-radius: 9999px;
                        background: rgba(30, 58, 138, 0.8);
                        backdrop-filter: blur(4px);
                        text-align: center;
                    }
                    .quick-stats .label {
                        font-size: 0.875rem;
                        color: #d1d5db;
                        margin: 0;
                    }
                    .quick-stats .value {
                        font-size: 1.25rem;
                        font-weight: 700;
                        color: white;
                        margin: 0;
                    }
                    .scroll-hint {
                        position: absolute;
                        bottom: 1.25rem;
                        left: 50%;
                        transform: translateX(-50%);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        color: white;
                        font-size: 0.875rem;
                        animation: bounce 1s infinite;
                    }
                    @keyframes bounce {
                        0%, 100% { transform: translate(-50%, -25%); }
                        50% { transform: translate(-50%, 0); }
                    }
                    @media (max-width: 768px) {
                        .hero-content {
                            grid-template-columns: 1fr;
                        }
                        .hero-portrait {
                            display: none;
                        }
                        .hero-title {
                            font-size: 2.25rem;
                        }
                    }
                "#}
            </style>
            <div class="hero-background">
                <img src={HERO_BACKGROUND} alt="Cricket Stadium" />
            </div>

            <div class="container hero-content">
                <Revealed shown={*shown}>
                    <h1 class="hero-title">
                        <span>{"Rohit Sharma"}</span>
                        <span class="nickname">{"The Hitman"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Indian cricket captain, record-breaking opening batsman, and one of the most prolific run-scorers in limited-overs cricket history."}
                    </p>
                    <div class="hero-actions">
                        <a href={Section::Biography.href()} class="button button-orange">{"Explore Journey"}</a>
                        <a href={Section::Statistics.href()} class="button button-outline">{"View Statistics"}</a>
                    </div>
                </Revealed>

                <Revealed shown={*shown} motion={Motion::FromRight} delay_ms={300} class="hero-portrait">
                    <img src={HERO_PORTRAIT} alt="Cricket Player" />
                    <div class="quick-stats">
                        { for QUICK_STATS.iter().map(|stat| html! {
                            <div key={stat.label}>
                                <p class="label">{ stat.label }</p>
                                <p class="value">{ stat.value }</p>
                            </div>
                        }) }
                    </div>
                </Revealed>
            </div>

            <a href={Section::Biography.href()} class="scroll-hint" aria-label="Scroll to biography section">
                <span>{"Scroll"}</span>
                <span>{"⌄"}</span>
            </a>
        </section>
    }
}
