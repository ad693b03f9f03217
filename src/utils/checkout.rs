use gloo_timers::callback::Timeout;

use crate::config::Offer;
use crate::utils::browser;
use crate::utils::meta_pixel::{
    InitiateCheckoutParams, PixelTransport, TrackingClient, TrackingError,
};

/// Leaves the site for the hosted checkout page.
pub trait CheckoutNavigator {
    fn navigate_after(&self, url: &str, delay_ms: u32);
}

/// Full-page redirect after a fixed delay. Nothing confirms the pixel call
/// went out before the page unloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct DelayedRedirect;

impl CheckoutNavigator for DelayedRedirect {
    fn navigate_after(&self, url: &str, delay_ms: u32) {
        let url = url.to_string();
        Timeout::new(delay_ms, move || {
            if let Some(window) = browser::window() {
                if let Err(e) = window.location().set_href(&url) {
                    log::error!("Failed to open checkout: {:?}", e);
                }
            }
        })
        .forget();
    }
}

pub fn initiate_checkout_params(offer: &Offer) -> InitiateCheckoutParams {
    InitiateCheckoutParams {
        value: Some(offer.value),
        currency: Some(offer.currency.to_string()),
        num_items: Some(offer.num_items),
        content_name: None,
    }
}

/// Reports InitiateCheckout, then schedules the redirect regardless of how
/// tracking went. The tracking result is returned for logging only.
pub fn start_checkout<T, N>(
    pixel: &TrackingClient<T>,
    navigator: &N,
    checkout_url: &str,
    offer: &Offer,
    delay_ms: u32,
) -> Result<(), TrackingError>
where
    T: PixelTransport,
    N: CheckoutNavigator + ?Sized,
{
    let tracked = pixel.try_track_initiate_checkout(&initiate_checkout_params(offer));
    navigator.navigate_after(checkout_url, delay_ms);
    tracked
}
