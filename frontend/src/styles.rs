use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide rules: reset, layout shell, shared section chrome and the
/// reveal transition classes every section uses.
#[function_component(SiteStyles)]
pub fn site_styles() -> Html {
    html! {
        <Global css={css!(r#"
            *, *::before, *::after {
                box-sizing: border-box;
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                background: #f9fafb;
                color: #374151;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                line-height: 1.6;
            }

            img {
                display: block;
                max-width: 100%;
            }

            a {
                color: inherit;
                text-decoration: none;
            }

            .container {
                max-width: 80rem;
                margin: 0 auto;
                padding: 0 1.5rem;
            }

            .section {
                padding: 5rem 0;
            }

            .section-title {
                text-align: center;
                color: #1e3a8a;
                font-size: 2.25rem;
                font-weight: 700;
                margin: 0 0 1.5rem;
            }

            .section-title span {
                border-bottom: 4px solid #f97316;
                padding-bottom: 0.5rem;
            }

            .section-lead {
                text-align: center;
                max-width: 48rem;
                margin: 0 auto 4rem;
            }

            .card {
                background: white;
                border-radius: 0.75rem;
                box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -2px rgba(0, 0, 0, 0.05);
            }

            .button {
                display: inline-flex;
                align-items: center;
                gap: 0.5rem;
                padding: 0.75rem 1.5rem;
                border-radius: 0.375rem;
                font-weight: 500;
                color: white;
                transition: background-color 300ms;
            }

            .button-orange {
                background: #f97316;
            }

            .button-orange:hover {
                background: #ea580c;
            }

            .button-blue {
                background: #1d4ed8;
            }

            .button-blue:hover {
                background: #1e40af;
            }

            .button-outline {
                border: 1px solid white;
            }

            .button-outline:hover {
                background: rgba(255, 255, 255, 0.1);
            }

            .reveal {
                opacity: 0;
                transition-property: opacity, transform;
                transition-timing-function: cubic-bezier(0.4, 0, 0.2, 1);
            }

            .reveal-up {
                transform: translateY(2.5rem);
            }

            .reveal-left {
                transform: translateX(-2.5rem);
            }

            .reveal-right {
                transform: translateX(2.5rem);
            }

            .reveal.is-shown {
                opacity: 1;
                transform: none;
            }

            .more-link {
                margin-top: 3rem;
                text-align: center;
            }

            @media (max-width: 768px) {
                .section-title {
                    font-size: 1.875rem;
                }
            }
        "#)} />
    }
}
