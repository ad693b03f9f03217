use yew::prelude::*;
use yew_router::components::Link;

use crate::components::policy_page_layout::PolicyPageLayout;
use crate::pages::support_email_link;
use crate::Route;

#[function_component]
pub fn TermsOfService() -> Html {
    let description = html! {
        <>{"These Terms of Service (\"Terms\") govern your use of The Honest Herbalist website and any purchases made through it. By accessing or using our website, you agree to these Terms."}</>
    };
    html! {
        <PolicyPageLayout title="Terms of Service" last_updated="Jan 2026" description={description}>
            <h2>{"1) Eligibility"}</h2>
            <p>{"You may use the website only if you can form a legally binding contract in your jurisdiction. By placing an order, you represent that you are at least the age of majority where you live, or you have permission from a parent or guardian."}</p>

            <h2>{"2) Educational information (not medical advice)"}</h2>
            <p>
                <strong>{"Important: "}</strong>
                {"Our content and products are not medical advice and are not intended to diagnose, treat, cure, or prevent any disease. Always consult a qualified healthcare professional regarding medical questions, pregnancy or nursing, allergies, or medication interactions."}
            </p>

            <h2>{"3) Orders, pricing, and payments"}</h2>
            <ul>
                <li>{"Prices are shown in USD unless stated otherwise."}</li>
                <li>{"Taxes and shipping are calculated at checkout where applicable."}</li>
                <li>{"We reserve the right to correct pricing errors and cancel orders affected by an error."}</li>
                <li>{"We may refuse or cancel an order if we suspect fraud or unauthorized activity."}</li>
            </ul>

            <h2>{"4) Shipping and refunds"}</h2>
            <p>
                {"Shipping timelines and refund rules are described in our "}
                <Link<Route> to={Route::ShippingPolicy}>{"Shipping Policy"}</Link<Route>>
                {" and "}
                <Link<Route> to={Route::RefundPolicy}>{"Refund Policy"}</Link<Route>>
                {", which are incorporated into these Terms."}
            </p>

            <h2>{"5) Intellectual property"}</h2>
            <p>{"All website content is owned by or licensed to The Honest Herbalist and is protected by intellectual property laws. You may not copy, reproduce, sell, or exploit our content without written permission."}</p>

            <h2>{"6) Prohibited uses"}</h2>
            <ul>
                <li>{"Use the website for unlawful purposes"}</li>
                <li>{"Attempt to interfere with site security or functionality"}</li>
                <li>{"Scrape, harvest, or misuse customer data"}</li>
                <li>{"Misrepresent your identity or submit false information"}</li>
            </ul>

            <h2>{"7) Third-party services and links"}</h2>
            <p>{"Our website may link to third-party sites or use third-party services (payments, shipping, analytics). We are not responsible for third-party content or practices."}</p>

            <h2>{"8) Disclaimer of warranties"}</h2>
            <p>{"The website and products are provided \"as is\" and \"as available,\" to the fullest extent allowed by law."}</p>

            <h2>{"9) Limitation of liability"}</h2>
            <p>{"To the fullest extent allowed by law, The Honest Herbalist will not be liable for indirect, incidental, special, consequential, or punitive damages. If liability cannot be excluded, our total liability is limited to the amount you paid for the product(s) giving rise to the claim."}</p>

            <h2>{"10) Indemnification"}</h2>
            <p>{"You agree to indemnify and hold harmless The Honest Herbalist from claims arising out of your violation of these Terms or misuse of the website."}</p>

            <h2>{"11) Governing law"}</h2>
            <p>{"These Terms are governed by the laws of the State of Delaware, USA, without regard to conflict-of-law rules."}</p>

            <h2>{"12) Changes to these Terms"}</h2>
            <p>{"We may update these Terms from time to time. Continued use of the website after changes means you accept the updated Terms."}</p>

            <h2>{"13) Contact"}</h2>
            <p>{"Questions about these Terms? Contact us at "}{support_email_link()}{"."}</p>
        </PolicyPageLayout>
    }
}
