use log::debug;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::content::section::Section;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Twitter", "𝕏"),
    ("Facebook", "f"),
    ("Instagram", "◎"),
    ("YouTube", "▶"),
];

const MORE_INFORMATION: &[&str] = &[
    "IPL Career",
    "Captaincy",
    "Records",
    "Interviews",
    "Charity Work",
    "Brand Endorsements",
];

const LEGAL_LINKS: &[&str] = &["Privacy Policy", "Terms of Service", "Contact"];

pub fn copyright_line(year: i32) -> String {
    format!("© {} Rohit Sharma. All rights reserved.", year)
}

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Calendar year for the copyright line, read once by the root view.
    pub year: i32,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    // No subscription backend exists; keep the browser from navigating away.
    let on_subscribe = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("newsletter form submitted, nothing to send it to");
    });

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #1e3a8a;
                        color: white;
                    }
                    .footer-grid {
                        display: grid;
                        grid-template-columns: repeat(4, 1fr);
                        gap: 2.5rem;
                        padding: 3rem 0;
                    }
                    .footer-brand {
                        font-weight: 700;
                        font-size: 1.25rem;
                    }
                    .footer-brand .brand-initials {
                        color: #f97316;
                        margin-right: 0.25rem;
                    }
                    .footer-muted {
                        color: #d1d5db;
                    }
                    .footer-links {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }
                    .footer-links li {
                        margin-bottom: 0.5rem;
                    }
                    .footer-links a, .social-links a {
                        color: #d1d5db;
                        transition: color 300ms;
                    }
                    .footer-links a:hover, .social-links a:hover {
                        color: #fb923c;
                    }
                    .social-links {
                        display: flex;
                        gap: 1rem;
                        margin-top: 1.5rem;
                    }
                    .newsletter input {
                        width: 100%;
                        padding: 0.5rem 1rem;
                        margin-bottom: 0.75rem;
                        background: #1e40af;
                        border: 1px solid #1d4ed8;
                        border-radius: 0.375rem;
                        color: white;
                    }
                    .newsletter button {
                        width: 100%;
                        padding: 0.5rem;
                        border: none;
                        border-radius: 0.375rem;
                        background: #f97316;
                        color: white;
                        cursor: pointer;
                    }
                    .newsletter button:hover {
                        background: #ea580c;
                    }
                    .footer-bottom {
                        border-top: 1px solid #1e40af;
                        padding: 2rem 0 3rem;
                        text-align: center;
                        color: #9ca3af;
                    }
                    .legal-links {
                        display: flex;
                        justify-content: center;
                        gap: 1.5rem;
                        margin-top: 0.5rem;
                    }
                    @media (max-width: 768px) {
                        .footer-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
            <div class="container">
                <div class="footer-grid">
                    <div>
                        <a href={Section::Home.href()} class="footer-brand">
                            <span class="brand-initials">{"RS"}</span>
                            <span>{"45"}</span>
                        </a>
                        <p class="footer-muted">
                            {"Official website of Indian cricket captain and legendary batsman Rohit Sharma."}
                        </p>
                        <div class="social-links">
                            { for SOCIAL_LINKS.iter().map(|(name, glyph)| html! {
                                <a href="#" key={*name} title={*name} aria-label={*name}>{ *glyph }</a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3>{"Quick Links"}</h3>
                        <ul class="footer-links">
                            { for Section::ALL.iter().map(|section| html! {
                                <li key={section.anchor()}>
                                    <a href={section.href()}>{ section.label() }</a>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3>{"More Information"}</h3>
                        <ul class="footer-links">
                            { for MORE_INFORMATION.iter().map(|label| html! {
                                <li key={*label}><a href="#">{ *label }</a></li>
                            }) }
                        </ul>
                    </div>

                    <div class="newsletter">
                        <h3>{"Subscribe"}</h3>
                        <p class="footer-muted">
                            {"Stay updated with the latest news and updates about Rohit Sharma."}
                        </p>
                        <form onsubmit={on_subscribe}>
                            <input type="email" placeholder="Your email address" />
                            <button type="submit">{"Subscribe"}</button>
                        </form>
                    </div>
                </div>

                <div class="footer-bottom">
                    <p>{ copyright_line(props.year) }</p>
                    <div class="legal-links">
                        { for LEGAL_LINKS.iter().map(|label| html! {
                            <a href="#" key={*label}>{ *label }</a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_uses_injected_year() {
        assert_eq!(copyright_line(2026), "© 2026 Rohit Sharma. All rights reserved.");
    }
}
