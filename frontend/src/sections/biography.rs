use yew::prelude::*;

use crate::components::revealed::{Motion, Revealed};
use crate::content::profile::{BIOGRAPHY_PORTRAIT, FACTS};
use crate::content::section::Section;
use crate::hooks::reveal::use_reveal;

#[function_component(Biography)]
pub fn biography() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone());

    html! {
        <section id={Section::Biography.anchor()} ref={section_ref} class="section biography">
            <style>
                {r#"
                    .biography {
                        background: white;
                    }
                    .biography .section-title {
                        margin-bottom: 4rem;
                    }
                    .biography-grid {
                        display: grid;
                        grid-template-columns: 2fr 3fr;
                        gap: 2.5rem;
                        align-items: start;
                    }
                    .biography-aside {
                        position: sticky;
                        top: 6rem;
                    }
                    .biography-photo {
                        aspect-ratio: 4 / 5;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    }
                    .biography-photo img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .fact-sheet {
                        margin-top: 2rem;
                        padding: 1.5rem;
                        border-radius: 0.5rem;
                        background: #eff6ff;
                    }
                    .fact-sheet h3 {
                        margin-top: 0;
                        color: #1e3a8a;
                    }
                    .fact-sheet ul {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .fact-sheet li {
                        display: flex;
                        margin-bottom: 0.75rem;
                    }
                    .fact-sheet .fact-label {
                        flex: 0 0 8rem;
                        font-weight: 500;
                        color: #1e40af;
                    }
                    .biography-prose h3 {
                        font-size: 1.5rem;
                        color: #1e40af;
                    }
                    .biography-prose h4 {
                        font-size: 1.25rem;
                        color: #1d4ed8;
                        margin: 2rem 0 1rem;
                    }
                    @media (max-width: 1024px) {
                        .biography-grid {
                            grid-template-columns: 1fr;
                        }
                        .biography-aside {
                            position: static;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Revealed shown={shown}>
                    <h2 class="section-title"><span>{"Biography"}</span></h2>
                </Revealed>

                <div class="biography-grid">
                    <Revealed shown={shown} motion={Motion::FromLeft} delay_ms={300}>
                        <div class="biography-aside">
                            <div class="biography-photo">
                                <img src={BIOGRAPHY_PORTRAIT} alt="Rohit Sharma" loading="lazy" />
                            </div>
                            <div class="fact-sheet">
                                <h3>{"About:"}</h3>
                                <ul>
                                    { for FACTS.iter().map(|fact| html! {
                                        <li key={fact.label}>
                                            <span class="fact-label">{ format!("{}:", fact.label) }</span>
                                            <span>{ fact.value }</span>
                                        </li>
                                    }) }
                                </ul>
                            </div>
                        </div>
                    </Revealed>

                    <Revealed shown={shown} motion={Motion::FromRight} delay_ms={500} class="biography-prose">
                        <h3>{"The Rise of \"Hitman\""}</h3>
                        <p>
                            {"Rohit Gurunath Sharma, born on April 30, 1987, in Nagpur, Maharashtra, has emerged as one of cricket's most formidable batsmen and a successful leader. His journey from Mumbai's local cricket circuits to becoming the captain of the Indian cricket team is a testament to his extraordinary talent, perseverance, and cricketing intelligence."}
                        </p>

                        <h4>{"Early Life & Beginnings"}</h4>
                        <p>
                            {"Raised in a middle-class family, Rohit's cricketing journey began at a young age. Financial constraints initially limited his opportunities, but his undeniable talent caught the attention of his coach, who suggested he focus on batting. This pivotal advice would later help shape one of cricket's most elegant stroke-makers."}
                        </p>
                        <p>
                            {"At just 20 years old, Rohit made his international debut for India in 2007 during the ICC World Twenty20, where India emerged victorious. Despite this promising start, his early years in international cricket were marked by inconsistency, leading to periods in and out of the national team."}
                        </p>

                        <h4>{"The Transformation"}</h4>
                        <p>
                            {"The turning point in Rohit's career came in 2013 when then-captain MS Dhoni promoted him to open the batting in ODIs. This strategic move transformed Rohit's career trajectory and changed the landscape of limited-overs cricket. Freed from the constraints of middle-order batting, Rohit's natural timing, elegant stroke play, and ability to accelerate made him one of the most feared openers in world cricket."}
                        </p>
                        <p>
                            {"Soon after, Rohit became the only batter in history to score multiple double centuries in ODIs, including the highest individual score of 264 against Sri Lanka – a record that stands to this day. His ability to convert starts into massive scores earned him the nickname \"Hitman\" from fans and commentators alike."}
                        </p>

                        <h4>{"Leadership & Legacy"}</h4>
                        <p>
                            {"Beyond his batting prowess, Rohit has established himself as a tactical captain. Under his leadership, Mumbai Indians became the most successful franchise in IPL history with five titles. His calm demeanor, strategic acumen, and ability to nurture young talent made him the natural successor to Virat Kohli as India's white-ball captain in 2021, and later Test captain."}
                        </p>
                        <p>
                            {"Off the field, Rohit is known for his advocacy for wildlife conservation, particularly for rhinos. His foundation works on various social causes, including education for underprivileged children and environmental conservation."}
                        </p>
                        <p>
                            {"As Rohit continues to lead India across formats, his legacy as one of cricket's greatest batsmen and captains continues to grow. His journey from a talented but inconsistent young player to a record-breaking opener and successful captain serves as an inspiration to aspiring cricketers worldwide."}
                        </p>
                    </Revealed>
                </div>
            </div>
        </section>
    }
}
