use yew::prelude::*;

use crate::components::policy_page_layout::PolicyPageLayout;
use crate::pages::support_email_link;

#[function_component]
pub fn ShippingPolicy() -> Html {
    let description = html! {
        <>{"This Shipping Policy explains how we process, ship, and deliver orders placed with The Honest Herbalist."}</>
    };
    html! {
        <PolicyPageLayout title="Shipping Policy" last_updated="Jan 2026" description={description}>
            <h2>{"Processing time"}</h2>
            <p>
                {"Orders are typically processed within "}<strong>{"1-2 business days"}</strong>
                {" (excluding weekends and holidays). During high-volume periods processing may take longer."}
            </p>

            <h2>{"Shipping rates"}</h2>
            <p>{"Shipping costs are calculated at checkout unless otherwise stated."}</p>

            <h2>{"Delivery estimates"}</h2>
            <p>{"Delivery times are estimates and begin after your order ships:"}</p>
            <ul>
                <li><strong>{"United States: "}</strong>{"3-8 business days"}</li>
                <li><strong>{"Canada: "}</strong>{"7-14 business days"}</li>
                <li><strong>{"International (if offered): "}</strong>{"10-21 business days"}</li>
            </ul>

            <h2>{"Tracking"}</h2>
            <p>
                {"When available, we'll email tracking information to the address provided at checkout. Tracking may take "}
                <strong>{"24-48 hours"}</strong>{" to update after the label is created."}
            </p>

            <h2>{"Address accuracy"}</h2>
            <p>{"Please verify your shipping address before placing your order. If an order is returned to us due to an incorrect or incomplete address, we can reship it after you confirm the correct address. Additional shipping fees may apply."}</p>

            <h2>{"Delays, lost, or missing packages"}</h2>
            <p>
                {"If your tracking hasn't updated or your package appears missing, contact us at "}{support_email_link()}
                {" and include your order number. We'll help investigate with the carrier."}
            </p>

            <h2>{"International orders"}</h2>
            <p>{"International shipments may be subject to customs duties, taxes, and import fees determined by the destination country. These fees are the customer's responsibility unless explicitly stated otherwise."}</p>
        </PolicyPageLayout>
    }
}
