use yew::prelude::*;

use crate::components::policy_page_layout::PolicyPageLayout;
use crate::pages::support_email_link;

#[function_component]
pub fn Contact() -> Html {
    let description = html! {
        <>
            {"Need help with an order, a product question, or your account? Email us and we'll do our best to respond within "}
            <strong>{"24-48 hours"}</strong>
            {" (business days)."}
        </>
    };
    html! {
        <PolicyPageLayout title="Contact Information" last_updated="Jan 2026" description={description}>
            <ul>
                <li>
                    <strong>{"Email: "}</strong>
                    {support_email_link()}
                </li>
                <li>
                    <strong>{"Mailing address: "}</strong>
                    {"8 The Green STE A, Dover DE, 19901"}
                </li>
            </ul>
            <p>
                {"For faster support, include your "}
                <strong>{"order number"}</strong>
                {" and the email used at checkout."}
            </p>
        </PolicyPageLayout>
    }
}
