use yew::prelude::*;

use crate::components::policy_page_layout::PolicyPageLayout;
use crate::pages::support_email_link;

#[function_component]
pub fn PrivacyPolicy() -> Html {
    let description = html! {
        <>{"This Privacy Policy explains how The Honest Herbalist (\"we,\" \"us,\" or \"our\") collects, uses, and shares information when you visit our website, contact us, or make a purchase."}</>
    };
    html! {
        <PolicyPageLayout title="Privacy Policy" last_updated="Jan 2026" description={description}>
            <h2>{"Who we are"}</h2>
            <ul>
                <li><strong>{"Business name: "}</strong>{"The Honest Herbalist"}</li>
                <li><strong>{"Email: "}</strong>{support_email_link()}</li>
                <li><strong>{"Mailing address: "}</strong>{"8 The Green STE A, Dover DE, 19901"}</li>
            </ul>

            <h2>{"Information we collect"}</h2>
            <h3>{"Information you provide"}</h3>
            <ul>
                <li><strong>{"Contact details: "}</strong>{"name, email, phone number, shipping/billing address"}</li>
                <li><strong>{"Order details: "}</strong>{"items purchased, order history, and customer support messages"}</li>
                <li><strong>{"Payment information: "}</strong>{"payments are processed by our payment provider. We do not store full payment card numbers."}</li>
            </ul>
            <h3>{"Information collected automatically"}</h3>
            <ul>
                <li><strong>{"Device and usage data: "}</strong>{"IP address, browser type, pages viewed, approximate location, and referring URLs"}</li>
                <li><strong>{"Cookies and similar technologies: "}</strong>{"used for site functionality, analytics, and advertising measurement"}</li>
            </ul>

            <h2>{"How we use your information"}</h2>
            <ul>
                <li>{"Process and fulfill orders"}</li>
                <li>{"Provide customer support"}</li>
                <li>{"Send transactional messages (order confirmations, shipping updates)"}</li>
                <li>{"Improve website performance and customer experience"}</li>
                <li>{"Prevent fraud and protect our business"}</li>
            </ul>

            <h2>{"How we share information"}</h2>
            <p>{"We share information only as needed to operate our business, such as with payment processors, shipping carriers, and website hosting, analytics, and security providers. We may also share information if required to comply with law."}</p>

            <h2>{"Cookies and your choices"}</h2>
            <p>{"You can control cookies through your browser settings. Blocking cookies may affect site functionality."}</p>

            <h2>{"Your privacy rights"}</h2>
            <p>
                {"Depending on your location, you may have rights to request access to, correction of, or deletion of your personal information. To make a request, email "}
                {support_email_link()}{"."}
            </p>

            <h2>{"Data retention"}</h2>
            <p>{"We retain personal information only as long as necessary to fulfill orders, provide support, maintain required business records, resolve disputes, and enforce agreements."}</p>

            <h2>{"Security"}</h2>
            <p>{"We use reasonable administrative, technical, and physical safeguards designed to protect your information. No method of transmission or storage is 100% secure."}</p>

            <h2>{"Children's privacy"}</h2>
            <p>{"Our website is not intended for children under 13, and we do not knowingly collect personal information from children."}</p>

            <h2>{"Changes to this policy"}</h2>
            <p>{"We may update this Privacy Policy from time to time. Updates will be posted on this page with a revised \"Last updated\" date."}</p>
        </PolicyPageLayout>
    }
}
