//! Purchase tracking for the post-checkout landing page.
//!
//! Stripe redirects to `/thank-you?session_id={CHECKOUT_SESSION_ID}`. The
//! session id doubles as the Purchase `eventID` and as the dedup key, so a
//! refresh or back navigation does not count the sale twice.

use crate::config::Offer;
use crate::utils::dedup::DedupStore;
use crate::utils::meta_pixel::{PixelTransport, PurchaseParams, TrackingClient, TrackingError};

/// Query parameters that may carry the checkout session id, in priority order.
pub const IDENTIFIER_PARAMS: [&str; 3] = ["session_id", "checkout_session_id", "sessionId"];

const STORAGE_KEY_PREFIX: &str = "fbq_purchase_tracked_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurchaseOutcome {
    NoIdentifier,
    AlreadyTracked(String),
    TrackedNow(String),
}

/// First non-blank value among [`IDENTIFIER_PARAMS`], trimmed.
pub fn extract_order_identifier(query: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    IDENTIFIER_PARAMS.iter().find_map(|name| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(key, _)| key == *name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    })
}

pub fn purchase_storage_key(identifier: &str) -> String {
    format!("{}{}", STORAGE_KEY_PREFIX, identifier)
}

/// Fires Purchase for `identifier` unless this session already did.
///
/// The marker is written only once the event reached the transport, so a
/// failed attempt can be repeated on the next visit.
pub fn record_purchase<T, D>(
    pixel: &TrackingClient<T>,
    store: &D,
    identifier: Option<&str>,
    offer: &Offer,
) -> Result<PurchaseOutcome, TrackingError>
where
    T: PixelTransport,
    D: DedupStore + ?Sized,
{
    let identifier = match identifier.map(str::trim).filter(|id| !id.is_empty()) {
        Some(id) => id,
        None => return Ok(PurchaseOutcome::NoIdentifier),
    };

    let key = purchase_storage_key(identifier);
    if store.was_fired(&key) {
        log::debug!("Purchase {} already tracked in this session", identifier);
        return Ok(PurchaseOutcome::AlreadyTracked(identifier.to_string()));
    }

    pixel.try_track_purchase(&PurchaseParams {
        value: offer.value,
        currency: offer.currency.to_string(),
        event_id: Some(identifier.to_string()),
    })?;
    store.mark_fired_with(&key, identifier);
    log::info!("Purchase {} tracked", identifier);

    Ok(PurchaseOutcome::TrackedNow(identifier.to_string()))
}
