use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::OFFER;
use crate::utils::dedup;
use crate::utils::meta_pixel;
use crate::utils::purchase::{self, PurchaseOutcome};
use crate::Route;

#[function_component]
pub fn ThankYou() -> Html {
    let location = use_location();
    let session_id = location
        .as_ref()
        .and_then(|location| purchase::extract_order_identifier(location.query_str()));

    // Keyed on the identifier so re-renders never re-run it.
    use_effect_with_deps(
        move |session_id: &Option<String>| {
            let store = dedup::session_store();
            let outcome = meta_pixel::with_pixel(|pixel| {
                purchase::record_purchase(pixel, &store, session_id.as_deref(), &OFFER)
            });
            match outcome {
                Ok(PurchaseOutcome::NoIdentifier) => {
                    log::debug!("Thank-you page opened without a checkout session id");
                }
                Ok(_) => {}
                Err(e) => log::warn!("Purchase not tracked: {}", e),
            }
            || ()
        },
        session_id,
    );

    let css = r#"
        .thank-you {
            max-width: 48rem;
            margin: 0 auto;
            min-height: 60vh;
            display: flex;
            flex-direction: column;
            align-items: center;
            justify-content: center;
            padding: 4rem 1.5rem;
        }
        .thank-you-card {
            width: 100%;
            background: rgba(255, 255, 255, 0.8);
            border: 1px solid rgba(0, 0, 0, 0.1);
            border-radius: 1rem;
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
            padding: 2rem;
            display: flex;
            gap: 1rem;
        }
        .thank-you-card .check {
            flex-shrink: 0;
            width: 2.5rem;
            height: 2.5rem;
            border-radius: 9999px;
            background: rgba(5, 150, 105, 0.1);
            color: #047857;
            display: flex;
            align-items: center;
            justify-content: center;
            font-weight: 900;
        }
        .thank-you-card h1 {
            font-size: 1.6rem;
            margin: 0;
        }
        .thank-you-card p {
            color: #475569;
        }
        .thank-you-actions {
            margin-top: 1.5rem;
            display: flex;
            flex-wrap: wrap;
            gap: 0.75rem;
        }
        .thank-you-actions a {
            padding: 0.5rem 1rem;
            border-radius: 0.375rem;
            font-size: 0.9rem;
            font-weight: 500;
            text-decoration: none;
        }
        .thank-you-actions .primary {
            background: #0f172a;
            color: #fff;
        }
        .thank-you-actions .secondary {
            border: 1px solid rgba(0, 0, 0, 0.1);
            background: #fff;
            color: #0f172a;
        }
    "#;

    html! {
        <main class="thank-you">
            <style>{css}</style>
            <div class="thank-you-card">
                <div class="check" aria-hidden="true">{"✓"}</div>
                <div>
                    <h1>{"Thank you for your purchase"}</h1>
                    <p>
                        {"Your payment went through successfully. You'll receive a confirmation email shortly."}
                    </p>
                    <div class="thank-you-actions">
                        <Link<Route> to={Route::Home} classes="primary">{"Back to home"}</Link<Route>>
                        <Link<Route> to={Route::Contact} classes="secondary">{"Contact support"}</Link<Route>>
                    </div>
                </div>
            </div>
        </main>
    }
}
