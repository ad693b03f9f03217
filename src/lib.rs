use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod pages;
pub mod utils;

use components::meta_pixel_route_tracker::MetaPixelRouteTracker;
use components::site_layout::SiteLayout;
use pages::{
    contact::Contact, landing::Landing, not_found::NotFound, privacy_policy::PrivacyPolicy,
    refund_policy::RefundPolicy, shipping_policy::ShippingPolicy,
    terms_of_service::TermsOfService, thank_you::ThankYou,
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/thank-you")]
    ThankYou,
    #[at("/refund-policy")]
    RefundPolicy,
    #[at("/privacy-policy")]
    PrivacyPolicy,
    #[at("/shipping-policy")]
    ShippingPolicy,
    #[at("/terms-of-service")]
    TermsOfService,
    #[at("/contact")]
    Contact,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    let page = match routes {
        Route::Home => html! { <Landing /> },
        Route::ThankYou => html! { <ThankYou /> },
        Route::RefundPolicy => html! { <RefundPolicy /> },
        Route::PrivacyPolicy => html! { <PrivacyPolicy /> },
        Route::ShippingPolicy => html! { <ShippingPolicy /> },
        Route::TermsOfService => html! { <TermsOfService /> },
        Route::Contact => html! { <Contact /> },
        Route::NotFound => html! { <NotFound /> },
    };
    html! { <SiteLayout>{page}</SiteLayout> }
}

#[function_component]
pub fn App() -> Html {
    html! {
        <BrowserRouter>
            <MetaPixelRouteTracker />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}
