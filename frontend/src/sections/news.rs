use yew::prelude::*;

use crate::components::revealed::Revealed;
use crate::content::news::{NewsItem, NEWS};
use crate::content::section::Section;
use crate::content::stagger::NEWS_CARDS;
use crate::hooks::reveal::use_reveal;

#[derive(Properties, PartialEq)]
struct NewsCardProps {
    item: NewsItem,
    shown: bool,
    delay_ms: u32,
}

#[function_component(NewsCard)]
fn news_card(props: &NewsCardProps) -> Html {
    let item = &props.item;

    html! {
        <Revealed shown={props.shown} delay_ms={props.delay_ms} class="card news-card">
            <div class="news-thumb">
                <img src={item.image} alt={item.title} loading="lazy" />
            </div>
            <div class="news-body">
                <span class="news-date">{ item.date }</span>
                <h3>{ item.title }</h3>
                <p>{ item.excerpt }</p>
                <a href="#" class="read-more">{"Read More →"}</a>
            </div>
        </Revealed>
    }
}

#[function_component(News)]
pub fn news() -> Html {
    let section_ref = use_node_ref();
    let shown = use_reveal(section_ref.clone());

    html! {
        <section id={Section::News.anchor()} ref={section_ref} class="section news">
            <style>
                {r#"
                    .news {
                        background: #eff6ff;
                    }
                    .news-grid {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 2rem;
                    }
                    .news-card {
                        overflow: hidden;
                    }
                    .news-thumb {
                        aspect-ratio: 16 / 9;
                        overflow: hidden;
                    }
                    .news-thumb img {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                    }
                    .news-body {
                        padding: 1.5rem;
                    }
                    .news-date {
                        font-size: 0.875rem;
                        font-weight: 500;
                        color: #ea580c;
                    }
                    .news-body h3 {
                        margin: 0.5rem 0;
                        color: #1e3a8a;
                    }
                    .read-more {
                        color: #2563eb;
                        font-weight: 500;
                        transition: color 300ms;
                    }
                    .read-more:hover {
                        color: #1e40af;
                    }
                    @media (max-width: 1024px) {
                        .news-grid {
                            grid-template-columns: 1fr 1fr;
                        }
                    }
                    @media (max-width: 640px) {
                        .news-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <Revealed shown={shown}>
                    <h2 class="section-title"><span>{"Latest News & Updates"}</span></h2>
                    <p class="section-lead">
                        {"Stay updated with the latest news, match reports, and updates about Rohit Sharma's cricket career and activities."}
                    </p>
                </Revealed>

                <div class="news-grid">
                    { for NEWS.iter().enumerate().map(|(i, item)| html! {
                        <NewsCard key={i} item={*item} shown={shown} delay_ms={NEWS_CARDS.delay(i)} />
                    }) }
                </div>

                <Revealed shown={shown} delay_ms={800} class="more-link">
                    <a href="#" class="button button-orange">{"View All News →"}</a>
                </Revealed>
            </div>
        </section>
    }
}
