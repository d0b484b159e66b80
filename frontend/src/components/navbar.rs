use yew::prelude::*;

use crate::content::section::Section;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    /// Page is scrolled past the navbar threshold; switches to the opaque look.
    pub scrolled: bool,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Anchor navigation still happens, we only fold the menu away.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let links = |class: &'static str, onclick: Option<Callback<MouseEvent>>| -> Html {
        html! {
            <>
                { for Section::ALL.iter().map(|section| html! {
                    <a
                        key={section.anchor()}
                        href={section.href()}
                        class={class}
                        onclick={onclick.clone()}
                    >
                        { section.label() }
                    </a>
                }) }
                <a href="#profile" class={classes!(class, "nav-cta")} onclick={onclick.clone()}>
                    {"Full Profile"}
                </a>
            </>
        }
    };

    html! {
        <nav class={classes!("top-nav", props.scrolled.then_some("scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 50;
                        background: transparent;
                        transition: all 300ms;
                    }
                    .top-nav.scrolled {
                        background: #1e3a8a;
                        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 4rem;
                    }
                    .nav-logo {
                        color: white;
                        font-weight: 700;
                        font-size: 1.25rem;
                    }
                    .nav-logo .brand-initials {
                        color: #f97316;
                        margin-right: 0.25rem;
                    }
                    .nav-links {
                        display: flex;
                        align-items: baseline;
                        gap: 1rem;
                    }
                    .nav-link {
                        color: #f3f4f6;
                        padding: 0.5rem 0.75rem;
                        font-size: 0.875rem;
                        font-weight: 500;
                        transition: color 300ms;
                    }
                    .nav-link:hover {
                        color: #fb923c;
                    }
                    .nav-cta {
                        background: #f97316;
                        color: white;
                        border-radius: 0.375rem;
                        padding: 0.5rem 1rem;
                    }
                    .nav-cta:hover {
                        background: #ea580c;
                        color: white;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        cursor: pointer;
                        padding: 0.25rem;
                    }
                    .burger-menu span {
                        display: block;
                        width: 1.5rem;
                        height: 2px;
                        margin: 5px 0;
                        background: #f3f4f6;
                    }
                    .mobile-menu {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .nav-links {
                            display: none;
                        }
                        .burger-menu {
                            display: block;
                        }
                        .mobile-menu.open {
                            display: flex;
                            flex-direction: column;
                            background: #1e3a8a;
                            padding: 0.25rem 0.5rem 0.75rem;
                        }
                        .mobile-menu .nav-link {
                            display: block;
                            font-size: 1rem;
                        }
                    }
                "#}
            </style>
            <div class="container nav-content">
                <a href={Section::Home.href()} class="nav-logo">
                    <span class="brand-initials">{"RS"}</span>
                    <span>{"45"}</span>
                </a>

                <div class="nav-links">
                    { links("nav-link", None) }
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
            <div class={classes!("mobile-menu", (*menu_open).then_some("open"))}>
                { links("nav-link", Some(close_menu)) }
            </div>
        </nav>
    }
}
