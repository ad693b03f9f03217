mod pixel_support;

use honest_herbalist_site::config::DEFAULT_PIXEL_ID;
use honest_herbalist_site::utils::meta_pixel::TrackingClient;
use pixel_support::RecordingTransport;

#[test]
fn every_route_change_fires_one_page_view_and_init_happens_once() {
    let pixel = TrackingClient::new(RecordingTransport::default(), DEFAULT_PIXEL_ID);
    let routes = ["/", "/refund-policy", "/contact", "/", "/thank-you?session_id=A"];

    for _ in routes {
        pixel.track_page_view();
    }

    let transport = pixel.transport();
    assert_eq!(*transport.init_calls.borrow(), vec![DEFAULT_PIXEL_ID.to_string()]);
    let page_views = transport.named("PageView");
    assert_eq!(page_views.len(), routes.len());
    assert!(page_views
        .iter()
        .all(|event| event.params.is_none() && event.options.is_none()));
}

#[test]
fn explicit_init_before_first_page_view_is_not_repeated() {
    let pixel = TrackingClient::new(RecordingTransport::default(), DEFAULT_PIXEL_ID);
    pixel.ensure_initialized();
    pixel.ensure_initialized();
    pixel.track_page_view();

    assert_eq!(pixel.transport().init_calls.borrow().len(), 1);
    assert_eq!(pixel.transport().named("PageView").len(), 1);
}

#[test]
fn without_a_window_nothing_is_sent() {
    let pixel = TrackingClient::new(RecordingTransport::without_window(), DEFAULT_PIXEL_ID);
    pixel.ensure_initialized();
    pixel.track_page_view();
    pixel.track("Lead", None, None);

    assert!(!pixel.is_initialized());
    assert!(pixel.transport().init_calls.borrow().is_empty());
    assert!(pixel.transport().events.borrow().is_empty());
}
