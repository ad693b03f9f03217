use yew::prelude::*;
use yew_router::prelude::*;

use crate::utils::meta_pixel;

/// Fires PageView on the initial route and again whenever the path or query
/// changes. Must be mounted inside the router.
#[function_component]
pub fn MetaPixelRouteTracker() -> Html {
    let location = use_location();
    let route = location.map(|location| {
        (
            location.path().to_string(),
            location.query_str().to_string(),
        )
    });

    use_effect_with_deps(
        move |_| {
            meta_pixel::track_page_view();
            || ()
        },
        route,
    );

    html! {}
}
