/// Meta Pixel account used when `META_PIXEL_ID` is not set at build time.
pub const DEFAULT_PIXEL_ID: &str = "1413128283786699";

/// Hosted Stripe payment link used when `CHECKOUT_URL` is not set at build time.
pub const DEFAULT_CHECKOUT_URL: &str = "https://buy.stripe.com/dRm6ozdtHc5h9v9aYnbAs00";

/// How long the checkout link waits before leaving the page, giving the
/// InitiateCheckout call a chance to be dispatched.
pub const CHECKOUT_REDIRECT_DELAY_MS: u32 = 150;

pub fn get_pixel_id() -> &'static str {
    non_empty(option_env!("META_PIXEL_ID")).unwrap_or(DEFAULT_PIXEL_ID)
}

pub fn get_checkout_url() -> &'static str {
    non_empty(option_env!("CHECKOUT_URL")).unwrap_or(DEFAULT_CHECKOUT_URL)
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// The single product sold on the site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    pub product_name: &'static str,
    /// Price charged at checkout, also reported as the conversion value.
    pub value: f64,
    /// ISO 4217 code.
    pub currency: &'static str,
    pub num_items: u32,
    /// Crossed-out price shown next to the sale price.
    pub list_price: f64,
}

pub const OFFER: Offer = Offer {
    product_name: "The Honest Herbalist Handbook",
    value: 49.0,
    currency: "USD",
    num_items: 1,
    list_price: 127.0,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some("   ")), None);
        assert_eq!(non_empty(Some(" 42 ")), Some("42"));
    }

    #[test]
    fn offer_is_priced_in_a_three_letter_currency() {
        assert_eq!(OFFER.currency.len(), 3);
        assert!(OFFER.value < OFFER.list_price);
    }
}
