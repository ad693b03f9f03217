use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component]
pub fn NotFound() -> Html {
    html! {
        <div style="min-height: 60vh; display: flex; align-items: center; justify-content: center; background: #fff;">
            <div style="text-align: center;">
                <h1 style="font-size: 2.25rem; margin-bottom: 1rem;">{"404"}</h1>
                <p style="font-size: 1.25rem; color: #4b5563; margin-bottom: 1rem;">{"Oops! Page not found"}</p>
                <Link<Route> to={Route::Home}>{"Return to Home"}</Link<Route>>
            </div>
        </div>
    }
}
