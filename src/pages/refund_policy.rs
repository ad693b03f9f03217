use yew::prelude::*;

use crate::components::policy_page_layout::PolicyPageLayout;
use crate::pages::support_email_link;

#[function_component]
pub fn RefundPolicy() -> Html {
    let description = html! {
        <>
            {"At "}<strong>{"The Honest Herbalist"}</strong>
            {", we want you to feel confident trying our products. If something isn't right, we'll work with you to make it right."}
        </>
    };
    html! {
        <PolicyPageLayout title="Refund Policy" last_updated="Jan 2026" description={description}>
            <h2>{"60-Day Satisfaction Guarantee"}</h2>
            <p>
                {"If you're not satisfied with your purchase for any reason, you may request a refund within "}
                <strong>{"60 days"}</strong>{" of your purchase date."}
            </p>

            <h3>{"How to request a refund"}</h3>
            <p>{"Email us at "}{support_email_link()}{" with:"}</p>
            <ul>
                <li>{"Your "}<strong>{"order number"}</strong></li>
                <li>{"The "}<strong>{"item(s)"}</strong>{" you purchased"}</li>
                <li>{"A short note on what didn't work for you (optional, but helpful)"}</li>
            </ul>

            <h2>{"Refund method + timing"}</h2>
            <ul>
                <li>{"Approved refunds are issued to the "}<strong>{"original payment method"}</strong>{"."}</li>
                <li>
                    {"We process refunds within "}<strong>{"3-5 business days"}</strong>
                    {" after approval. Your bank or card issuer may take additional time to post the credit."}
                </li>
            </ul>

            <h2>{"Shipping fees"}</h2>
            <p><strong>{"Shipping charges are non-refundable."}</strong></p>

            <h2>{"Returns (if a return is required)"}</h2>
            <p>{"In some situations (for example, if we shipped the wrong item), we may ask you to return the product. We'll provide return instructions if needed."}</p>

            <h2>{"Damaged, defective, or incorrect items"}</h2>
            <p>
                {"If your order arrives damaged, defective, or incorrect, email "}{support_email_link()}
                {" within "}<strong>{"7 days of delivery"}</strong>
                {" with your order number, a description of the issue and photos if applicable. We'll offer a replacement, store credit, or refund depending on the situation."}
            </p>

            <h2>{"Non-refundable items (where permitted by law)"}</h2>
            <p>{"Unless required by law, digital downloads are not eligible for refunds once accessed, except where defective."}</p>

            <h2>{"Chargebacks"}</h2>
            <p>{"If you have an issue with your order, please contact us first. We can usually resolve it faster than a chargeback."}</p>
        </PolicyPageLayout>
    }
}
