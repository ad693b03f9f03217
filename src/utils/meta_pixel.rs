//! Meta Pixel helpers for the single-page site.
//!
//! The base `fbq` loader lives in `index.html`; this module owns `init` and
//! every `track` call, so the snippet there must not fire its own PageView.
//!
//! [`TrackingClient`] is generic over a [`PixelTransport`] so the lifecycle
//! and call composition can be exercised without a browser. The page-wide
//! instance backed by [`FbqTransport`] is reached through [`with_pixel`] and
//! the free `track_*` functions, which never return errors.

use std::cell::Cell;

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

use crate::config;
use crate::utils::browser;

#[derive(Error, Debug)]
pub enum TrackingError {
    #[error("no browser window available")]
    NoWindow,
    #[error("pixel SDK is not loaded")]
    SdkUnavailable,
    #[error("pixel call failed: {0}")]
    Transport(String),
    #[error("failed to encode event payload: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Event names the ad platform recognizes out of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardEvent {
    PageView,
    InitiateCheckout,
    Purchase,
}

impl StandardEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardEvent::PageView => "PageView",
            StandardEvent::InitiateCheckout => "InitiateCheckout",
            StandardEvent::Purchase => "Purchase",
        }
    }
}

pub type EventParams = Map<String, Value>;

/// Transport options, sent as the fourth `fbq` argument rather than as data.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventOptions {
    #[serde(rename = "eventID", skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
}

impl EventOptions {
    pub fn with_event_id(event_id: impl Into<String>) -> Self {
        Self {
            event_id: Some(event_id.into()),
        }
    }
}

/// One call handed to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedEvent {
    pub name: String,
    pub params: Option<EventParams>,
    pub options: Option<EventOptions>,
}

impl TrackedEvent {
    /// Options win: name+params+options (params defaulting to `{}`), then
    /// name+params, then the bare name.
    pub fn compose(
        name: impl Into<String>,
        params: Option<EventParams>,
        options: Option<EventOptions>,
    ) -> Self {
        let name = name.into();
        match (params, options) {
            (params, Some(options)) => Self {
                name,
                params: Some(params.unwrap_or_default()),
                options: Some(options),
            },
            (Some(params), None) => Self {
                name,
                params: Some(params),
                options: None,
            },
            (None, None) => Self {
                name,
                params: None,
                options: None,
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InitiateCheckoutParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PurchaseParams {
    pub value: f64,
    pub currency: String,
    /// Dedup token, forwarded as a transport option and never as data.
    #[serde(skip)]
    pub event_id: Option<String>,
}

fn to_params(value: &impl Serialize) -> Result<EventParams, TrackingError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        _ => Ok(Map::new()),
    }
}

/// The two calls the pixel SDK exposes.
#[cfg_attr(test, mockall::automock)]
pub trait PixelTransport {
    /// Whether a DOM context exists. Without one every operation is a no-op.
    fn has_window(&self) -> bool;
    fn init(&self, account_id: &str) -> Result<(), TrackingError>;
    fn track(&self, event: &TrackedEvent) -> Result<(), TrackingError>;
}

/// Calls the global `window.fbq` function installed by the base snippet.
#[derive(Debug, Default, Clone, Copy)]
pub struct FbqTransport;

impl FbqTransport {
    fn fbq() -> Result<js_sys::Function, TrackingError> {
        let window = browser::window().ok_or(TrackingError::NoWindow)?;
        let handle =
            js_sys::Reflect::get(&window, &JsValue::from_str("fbq")).map_err(js_error)?;
        handle
            .dyn_into::<js_sys::Function>()
            .map_err(|_| TrackingError::SdkUnavailable)
    }

    fn to_js(value: &impl Serialize) -> Result<JsValue, TrackingError> {
        let json = serde_json::to_string(value)?;
        js_sys::JSON::parse(&json).map_err(js_error)
    }
}

fn js_error(err: JsValue) -> TrackingError {
    TrackingError::Transport(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl PixelTransport for FbqTransport {
    fn has_window(&self) -> bool {
        browser::has_window()
    }

    fn init(&self, account_id: &str) -> Result<(), TrackingError> {
        let fbq = Self::fbq()?;
        fbq.call2(
            &JsValue::NULL,
            &JsValue::from_str("init"),
            &JsValue::from_str(account_id),
        )
        .map(|_| ())
        .map_err(js_error)
    }

    fn track(&self, event: &TrackedEvent) -> Result<(), TrackingError> {
        let fbq = Self::fbq()?;
        let args = js_sys::Array::new();
        args.push(&JsValue::from_str("track"));
        args.push(&JsValue::from_str(&event.name));
        if let Some(params) = &event.params {
            args.push(&Self::to_js(params)?);
        }
        if let Some(options) = &event.options {
            args.push(&Self::to_js(options)?);
        }
        fbq.apply(&JsValue::NULL, &args).map(|_| ()).map_err(js_error)
    }
}

/// Lazily initialized pixel with a typed event API.
///
/// The `try_*` methods report what happened; the plain methods are the
/// best-effort surface used by views and only log failures.
pub struct TrackingClient<T> {
    transport: T,
    account_id: String,
    initialized: Cell<bool>,
}

impl<T: PixelTransport> TrackingClient<T> {
    pub fn new(transport: T, account_id: impl Into<String>) -> Self {
        Self {
            transport,
            account_id: account_id.into(),
            initialized: Cell::new(false),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized.get()
    }

    /// Forgets a previous init so the next call initializes again.
    pub fn reset(&self) {
        self.initialized.set(false);
    }

    pub fn try_ensure_initialized(&self) -> Result<(), TrackingError> {
        if !self.transport.has_window() {
            return Err(TrackingError::NoWindow);
        }
        if self.initialized.get() {
            return Ok(());
        }
        self.transport.init(&self.account_id)?;
        self.initialized.set(true);
        log::debug!("Meta Pixel initialized for account {}", self.account_id);
        Ok(())
    }

    pub fn ensure_initialized(&self) {
        report("init", self.try_ensure_initialized());
    }

    pub fn try_track(
        &self,
        name: &str,
        params: Option<EventParams>,
        options: Option<EventOptions>,
    ) -> Result<(), TrackingError> {
        self.try_ensure_initialized()?;
        let event = TrackedEvent::compose(name, params, options);
        self.transport.track(&event)
    }

    pub fn track(&self, name: &str, params: Option<EventParams>, options: Option<EventOptions>) {
        report(name, self.try_track(name, params, options));
    }

    pub fn try_track_page_view(&self) -> Result<(), TrackingError> {
        self.try_track(StandardEvent::PageView.as_str(), None, None)
    }

    pub fn track_page_view(&self) {
        report(
            StandardEvent::PageView.as_str(),
            self.try_track_page_view(),
        );
    }

    pub fn try_track_initiate_checkout(
        &self,
        params: &InitiateCheckoutParams,
    ) -> Result<(), TrackingError> {
        let params = to_params(params)?;
        self.try_track(StandardEvent::InitiateCheckout.as_str(), Some(params), None)
    }

    pub fn track_initiate_checkout(&self, params: &InitiateCheckoutParams) {
        report(
            StandardEvent::InitiateCheckout.as_str(),
            self.try_track_initiate_checkout(params),
        );
    }

    pub fn try_track_purchase(&self, params: &PurchaseParams) -> Result<(), TrackingError> {
        let data = to_params(params)?;
        let options = params
            .event_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .map(EventOptions::with_event_id);
        self.try_track(StandardEvent::Purchase.as_str(), Some(data), options)
    }

    pub fn track_purchase(&self, params: &PurchaseParams) {
        report(
            StandardEvent::Purchase.as_str(),
            self.try_track_purchase(params),
        );
    }
}

fn report(what: &str, result: Result<(), TrackingError>) {
    match result {
        Ok(()) => {}
        Err(TrackingError::NoWindow) => log::debug!("Skipping {}: no window", what),
        Err(e) => log::warn!("Meta Pixel {} dropped: {}", what, e),
    }
}

thread_local! {
    static PIXEL: TrackingClient<FbqTransport> =
        TrackingClient::new(FbqTransport, config::get_pixel_id());
}

/// Runs `f` against the page-wide pixel client.
pub fn with_pixel<R>(f: impl FnOnce(&TrackingClient<FbqTransport>) -> R) -> R {
    PIXEL.with(f)
}

pub fn init_meta_pixel() {
    with_pixel(|pixel| pixel.ensure_initialized());
}

pub fn track(name: &str, params: Option<EventParams>, options: Option<EventOptions>) {
    with_pixel(|pixel| pixel.track(name, params, options));
}

/// Fired on every client-side route change; the SPA never reloads, so the
/// loader's own PageView would only ever cover the first page.
pub fn track_page_view() {
    with_pixel(|pixel| pixel.track_page_view());
}

pub fn track_initiate_checkout(params: &InitiateCheckoutParams) {
    with_pixel(|pixel| pixel.track_initiate_checkout(params));
}

pub fn track_purchase(params: &PurchaseParams) {
    with_pixel(|pixel| pixel.track_purchase(params));
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::Sequence;
    use serde_json::json;

    fn params(value: Value) -> EventParams {
        match value {
            Value::Object(map) => map,
            _ => panic!("expected a JSON object"),
        }
    }

    fn browser_mock() -> MockPixelTransport {
        let mut transport = MockPixelTransport::new();
        transport.expect_has_window().return_const(true);
        transport
    }

    #[test]
    fn compose_prefers_options_and_defaults_params() {
        let event = TrackedEvent::compose("Lead", None, Some(EventOptions::with_event_id("e1")));
        assert_eq!(event.params, Some(Map::new()));
        assert_eq!(event.options, Some(EventOptions::with_event_id("e1")));

        let event = TrackedEvent::compose("Lead", Some(params(json!({"a": 1}))), None);
        assert_eq!(event.params, Some(params(json!({"a": 1}))));
        assert_eq!(event.options, None);

        let event = TrackedEvent::compose("Lead", None, None);
        assert_eq!(event.params, None);
        assert_eq!(event.options, None);
    }

    #[test]
    fn init_runs_once_across_many_events() {
        let mut transport = browser_mock();
        transport
            .expect_init()
            .withf(|account_id| account_id == DEFAULT_ID)
            .times(1)
            .returning(|_| Ok(()));
        transport
            .expect_track()
            .withf(|event| event.name == "PageView" && event.params.is_none() && event.options.is_none())
            .times(3)
            .returning(|_| Ok(()));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        client.ensure_initialized();
        client.track_page_view();
        client.track_page_view();
        client.track_page_view();
        assert!(client.is_initialized());
    }

    const DEFAULT_ID: &str = "1413128283786699";

    #[test]
    fn no_window_is_a_silent_no_op() {
        let mut transport = MockPixelTransport::new();
        transport.expect_has_window().return_const(false);
        transport.expect_init().never();
        transport.expect_track().never();

        let client = TrackingClient::new(transport, DEFAULT_ID);
        client.track_page_view();
        client.track_purchase(&PurchaseParams {
            value: 49.0,
            currency: "USD".into(),
            event_id: Some("ABC123".into()),
        });
        assert!(matches!(
            client.try_track_page_view(),
            Err(TrackingError::NoWindow)
        ));
        assert!(!client.is_initialized());
    }

    #[test]
    fn failed_init_is_retried_on_next_call() {
        let mut seq = Sequence::new();
        let mut transport = browser_mock();
        transport
            .expect_init()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(TrackingError::SdkUnavailable));
        transport
            .expect_init()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        transport.expect_track().times(1).returning(|_| Ok(()));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        assert!(matches!(
            client.try_track_page_view(),
            Err(TrackingError::SdkUnavailable)
        ));
        assert!(!client.is_initialized());
        assert!(client.try_track_page_view().is_ok());
        assert!(client.is_initialized());
    }

    #[test]
    fn reset_allows_a_fresh_init() {
        let mut transport = browser_mock();
        transport.expect_init().times(2).returning(|_| Ok(()));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        client.ensure_initialized();
        client.ensure_initialized();
        client.reset();
        assert!(!client.is_initialized());
        client.ensure_initialized();
    }

    #[test]
    fn initiate_checkout_sends_only_supplied_params() {
        let mut transport = browser_mock();
        transport.expect_init().returning(|_| Ok(()));
        transport
            .expect_track()
            .withf(|event| {
                event.name == "InitiateCheckout"
                    && event.params
                        == Some(params(json!({"value": 49.0, "currency": "USD", "num_items": 1})))
                    && event.options.is_none()
            })
            .times(1)
            .returning(|_| Ok(()));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        client.track_initiate_checkout(&InitiateCheckoutParams {
            value: Some(49.0),
            currency: Some("USD".into()),
            num_items: Some(1),
            content_name: None,
        });
    }

    #[test]
    fn purchase_forwards_event_id_as_option_only() {
        let mut transport = browser_mock();
        transport.expect_init().returning(|_| Ok(()));
        transport
            .expect_track()
            .withf(|event| {
                event.name == "Purchase"
                    && event.params == Some(params(json!({"value": 49.0, "currency": "USD"})))
                    && event.options == Some(EventOptions::with_event_id("ABC123"))
            })
            .times(1)
            .returning(|_| Ok(()));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        client
            .try_track_purchase(&PurchaseParams {
                value: 49.0,
                currency: "USD".into(),
                event_id: Some("ABC123".into()),
            })
            .unwrap();
    }

    #[test]
    fn purchase_without_event_id_has_no_options() {
        let mut transport = browser_mock();
        transport.expect_init().returning(|_| Ok(()));
        transport
            .expect_track()
            .withf(|event| event.name == "Purchase" && event.options.is_none())
            .times(1)
            .returning(|_| Ok(()));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        client.track_purchase(&PurchaseParams {
            value: 49.0,
            currency: "USD".into(),
            event_id: None,
        });
    }

    #[test]
    fn transport_errors_surface_from_try_methods() {
        let mut transport = browser_mock();
        transport.expect_init().returning(|_| Ok(()));
        transport
            .expect_track()
            .returning(|_| Err(TrackingError::Transport("fbq threw".into())));

        let client = TrackingClient::new(transport, DEFAULT_ID);
        let err = client.try_track("Lead", None, None).unwrap_err();
        assert_eq!(err.to_string(), "pixel call failed: fbq threw");
        // The best-effort surface swallows the same failure.
        client.track("Lead", None, None);
    }

    #[test]
    fn event_options_serialize_as_event_id() {
        let encoded = serde_json::to_value(EventOptions::with_event_id("XYZ789")).unwrap();
        assert_eq!(encoded, json!({"eventID": "XYZ789"}));
    }
}
