use chrono::Datelike;
use yew::prelude::*;

pub mod config;
mod styles;
pub mod hooks {
    pub mod reveal;
    pub mod scroll;
    pub mod subscription;
}
pub mod content {
    pub mod gallery;
    pub mod news;
    pub mod profile;
    pub mod section;
    pub mod stagger;
    pub mod statistics;
    pub mod timeline;
}
pub mod components {
    pub mod career_chart;
    pub mod footer;
    pub mod navbar;
    pub mod revealed;
}
pub mod sections {
    pub mod biography;
    pub mod gallery;
    pub mod hero;
    pub mod news;
    pub mod statistics;
    pub mod timeline;
}

use components::{footer::Footer, navbar::Navbar};
use hooks::scroll::use_scrolled_past;
use sections::{
    biography::Biography,
    gallery::Gallery,
    hero::Hero,
    news::News,
    statistics::Statistics,
    timeline::Timeline,
};
use styles::SiteStyles;

fn current_year() -> i32 {
    chrono::Local::now().year()
}

#[function_component]
pub fn App() -> Html {
    // Page-level inputs are read here and handed down as props.
    let scrolled = use_scrolled_past(config::NAV_SCROLL_THRESHOLD);
    let year = use_state(current_year);

    html! {
        <>
            <SiteStyles />
            <Navbar scrolled={scrolled} />
            <main>
                <Hero />
                <Biography />
                <Statistics />
                <Timeline />
                <Gallery />
                <News />
            </main>
            <Footer year={*year} />
        </>
    }
}
