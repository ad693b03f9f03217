pub mod contact;
pub mod landing;
pub mod not_found;
pub mod privacy_policy;
pub mod refund_policy;
pub mod shipping_policy;
pub mod terms_of_service;
pub mod thank_you;

/// Support inbox shown on every policy page.
pub const SUPPORT_EMAIL: &str = "support@thehonestherbalist.com";

fn support_email_link() -> yew::Html {
    yew::html! {
        <a href={format!("mailto:{}", SUPPORT_EMAIL)}>{SUPPORT_EMAIL}</a>
    }
}
