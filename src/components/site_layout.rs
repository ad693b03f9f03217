use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

const LAYOUT_CSS: &str = r#"
    .site {
        min-height: 100vh;
        background: #f7f4ee;
        color: #1f2a24;
        font-family: Georgia, 'Times New Roman', serif;
    }
    .site-banner {
        position: sticky;
        top: 0;
        z-index: 70;
        background: #047857;
        color: #fff;
        text-align: center;
        font-weight: 900;
        letter-spacing: 0.15em;
        text-transform: uppercase;
        padding: 0.75rem 1rem;
        font-size: 0.95rem;
    }
    .site-header {
        background: #fff;
        border-bottom: 1px solid #e5e1d8;
        padding: 1.5rem 1rem;
        display: flex;
        justify-content: center;
    }
    .site-logo {
        text-decoration: none;
        text-align: center;
        line-height: 1.1;
        color: #14321f;
        font-weight: 700;
        letter-spacing: 0.2em;
        text-transform: uppercase;
        font-size: 1.1rem;
    }
    .site-logo:hover {
        opacity: 0.8;
    }
    .site-footer {
        border-top: 1px solid #e5e1d8;
        padding: 5rem 1rem 6rem;
        text-align: center;
    }
    .site-footer nav ul {
        list-style: none;
        padding: 0;
        margin: 3rem 0 2.5rem;
        display: flex;
        flex-wrap: wrap;
        justify-content: center;
        gap: 1rem 2rem;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        font-weight: 700;
        font-size: 0.9rem;
    }
    .site-footer a {
        color: inherit;
        text-decoration: none;
    }
    .site-footer a:hover {
        color: #047857;
    }
    .site-footer .fine-print {
        font-size: 0.8rem;
        color: #6b7280;
        text-transform: uppercase;
        letter-spacing: 0.1em;
        max-width: 40rem;
        margin: 0 auto;
    }
"#;

#[function_component]
fn Logo() -> Html {
    html! {
        <>
            <div>{"THE HONEST"}</div>
            <div>{"HERBALIST"}</div>
        </>
    }
}

#[function_component]
pub fn SiteHeader() -> Html {
    html! {
        <header>
            <div class="site-banner">
                {"TODAY ONLY: GET 61% OFF + 3 FREE BONUSES WITH YOUR PURCHASE!"}
            </div>
            <div class="site-header">
                <Link<Route> to={Route::Home} classes="site-logo">
                    <Logo />
                </Link<Route>>
            </div>
        </header>
    }
}

#[function_component]
pub fn SiteFooter() -> Html {
    let links = [
        (Route::Home, "Home"),
        (Route::RefundPolicy, "Refund Policy"),
        (Route::PrivacyPolicy, "Privacy Policy"),
        (Route::TermsOfService, "Terms of Service"),
        (Route::ShippingPolicy, "Shipping Policy"),
        (Route::Contact, "Contact"),
    ];
    html! {
        <footer class="site-footer">
            <div class="site-logo"><Logo /></div>
            <nav>
                <ul>
                    { for links.into_iter().map(|(route, label)| html! {
                        <li><Link<Route> to={route}>{label}</Link<Route>></li>
                    }) }
                </ul>
            </nav>
            <div class="fine-print">
                {"© 2026 THE HONEST HERBALIST. ALL RIGHTS RESERVED."}
                <br/>
                {"BUILT FOR SELF-RELIANT FAMILIES WHO CHOOSE NATURAL HEALTH FIRST."}
            </div>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct SiteLayoutProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component]
pub fn SiteLayout(props: &SiteLayoutProps) -> Html {
    html! {
        <div class="site">
            <style>{LAYOUT_CSS}</style>
            <SiteHeader />
            { for props.children.iter() }
            <SiteFooter />
        </div>
    }
}
