#![cfg(target_arch = "wasm32")]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use rs45_site::config::{NAV_SCROLL_THRESHOLD, REVEAL_THRESHOLD};
use rs45_site::hooks::reveal::{observe_intersection, Reveal, RevealController};
use rs45_site::hooks::scroll::{listen_scroll, use_scrolled_past};
use rs45_site::sections::statistics::Statistics;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, Window};
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

fn window() -> Window {
    web_sys::window().unwrap()
}

fn document() -> Document {
    window().document().unwrap()
}

// Each test mounts into its own subtree, optionally pushed down by a spacer.
fn fresh_root(spacer_px: u32) -> Element {
    let document = document();
    let root = document.create_element("div").unwrap();
    if spacer_px > 0 {
        let spacer = document.create_element("div").unwrap();
        spacer
            .set_attribute("style", &format!("height: {}px", spacer_px))
            .unwrap();
        root.append_child(&spacer).unwrap();
    }
    let mount = document.create_element("div").unwrap();
    root.append_child(&mount).unwrap();
    document.body().unwrap().append_child(&root).unwrap();
    mount
}

fn remove_root(mount: &Element) {
    if let Some(root) = mount.parent_element() {
        root.remove();
    }
    window().scroll_to_with_x_and_y(0.0, 0.0);
}

fn count(root: &Element, selector: &str) -> u32 {
    root.query_selector_all(selector).unwrap().length()
}

async fn settle() {
    TimeoutFuture::new(250).await;
}

#[wasm_bindgen_test]
async fn statistics_in_view_shows_chart_and_every_card() {
    let mount = fresh_root(0);
    let app = yew::Renderer::<Statistics>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".chart-panel.is-shown"), 1);
    assert_eq!(count(&mount, ".stat-card"), 4);
    assert_eq!(count(&mount, ".stat-card.is-shown"), 4);

    app.destroy();
    remove_root(&mount);
}

#[wasm_bindgen_test]
async fn statistics_reveal_once_scrolled_into_view_and_stay_shown() {
    let mount = fresh_root(20_000);
    let app = yew::Renderer::<Statistics>::with_root(mount.clone()).render();
    settle().await;

    assert_eq!(count(&mount, ".stat-card"), 4);
    assert_eq!(count(&mount, ".is-shown"), 0);

    mount.scroll_into_view();
    settle().await;
    assert_eq!(count(&mount, ".chart-panel.is-shown"), 1);
    assert_eq!(count(&mount, ".stat-card.is-shown"), 4);

    // Leaving the viewport again does not hide anything.
    window().scroll_to_with_x_and_y(0.0, 0.0);
    settle().await;
    assert_eq!(count(&mount, ".stat-card.is-shown"), 4);

    app.destroy();
    remove_root(&mount);
}

#[wasm_bindgen_test]
async fn latch_disconnects_from_inside_its_own_callback() {
    let mount = fresh_root(0);
    mount.set_attribute("style", "height: 200px").unwrap();

    let controller = Rc::new(RefCell::new(RevealController::new(REVEAL_THRESHOLD)));
    let reports = Rc::new(Cell::new(0));
    let (subscription, callback) = {
        let latch = controller.clone();
        let reports = reports.clone();
        observe_intersection(&mount, REVEAL_THRESHOLD, move |observation| {
            reports.set(reports.get() + 1);
            latch.borrow_mut().observe(observation);
        })
        .unwrap()
    };
    controller.borrow_mut().attach(subscription);
    settle().await;

    assert_eq!(controller.borrow().state(), Reveal::Shown);
    assert!(!controller.borrow().is_observing());
    assert_eq!(reports.get(), 1);

    // Moving the element out of view would report again on a live observer.
    remove_root(&mount);
    settle().await;
    assert_eq!(reports.get(), 1);

    drop(callback);
}

#[wasm_bindgen_test]
async fn observer_released_before_first_report_stays_silent() {
    let mount = fresh_root(0);
    mount.set_attribute("style", "height: 200px").unwrap();

    let reports = Rc::new(Cell::new(0));
    let counter = reports.clone();
    let (subscription, callback) =
        observe_intersection(&mount, REVEAL_THRESHOLD, move |_| counter.set(counter.get() + 1)).unwrap();
    subscription.unsubscribe();
    settle().await;

    assert_eq!(reports.get(), 0);

    drop(callback);
    remove_root(&mount);
}

#[wasm_bindgen_test]
fn scroll_listener_is_removed_with_its_subscription() {
    let window = window();
    let offsets = Rc::new(RefCell::new(Vec::new()));
    let seen = offsets.clone();
    let subscription = listen_scroll(&window, move |offset| seen.borrow_mut().push(offset)).unwrap();

    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_eq!(offsets.borrow().len(), 2);

    drop(subscription);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    assert_eq!(offsets.borrow().len(), 2);
}

#[function_component(ScrollFlag)]
fn scroll_flag() -> Html {
    let scrolled = use_scrolled_past(NAV_SCROLL_THRESHOLD);
    html! {
        <p id="scroll-flag">{ if scrolled { "past" } else { "clear" } }</p>
    }
}

async fn scroll_to(y: f64) {
    let window = window();
    window.scroll_to_with_x_and_y(0.0, y);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    TimeoutFuture::new(50).await;
}

fn flag(root: &Element) -> String {
    root.query_selector("#scroll-flag")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn navbar_flag_follows_repeated_crossings() {
    let mount = fresh_root(0);
    let tall = document().create_element("div").unwrap();
    tall.set_attribute("style", "height: 5000px").unwrap();
    mount.parent_element().unwrap().append_child(&tall).unwrap();

    let app = yew::Renderer::<ScrollFlag>::with_root(mount.clone()).render();
    TimeoutFuture::new(50).await;
    assert_eq!(flag(&mount), "clear");

    for _ in 0..3 {
        scroll_to(200.0).await;
        assert_eq!(flag(&mount), "past");
        scroll_to(50.0).await;
        assert_eq!(flag(&mount), "clear");
    }

    app.destroy();
    remove_root(&mount);
}
