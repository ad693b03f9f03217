use yew::prelude::*;

const POLICY_CSS: &str = r#"
    .policy-hero {
        background: #fcfdfc;
        border-bottom: 1px solid #f1f5f9;
        padding: 4rem 1rem;
        text-align: center;
    }
    .policy-hero .brand {
        font-size: 0.8rem;
        font-weight: 900;
        letter-spacing: 0.25em;
        color: #047857;
    }
    .policy-hero h1 {
        margin-top: 1.25rem;
        font-size: 2.75rem;
        font-weight: 900;
        line-height: 1.12;
    }
    .policy-hero .updated {
        margin-top: 1.5rem;
        font-size: 0.8rem;
        font-weight: 900;
        letter-spacing: 0.22em;
        text-transform: uppercase;
        color: #6b7280;
    }
    .policy-hero .description {
        margin: 2rem auto 0;
        max-width: 48rem;
        font-size: 1.3rem;
    }
    .policy-body {
        max-width: 48rem;
        margin: 0 auto;
        padding: 4rem 1rem;
        font-size: 1.25rem;
        line-height: 1.7;
    }
    .policy-body h2 {
        margin-top: 3rem;
        font-size: 1.9rem;
        font-weight: 900;
    }
    .policy-body h3 {
        margin-top: 2rem;
        font-size: 1.5rem;
    }
    .policy-body a {
        color: #047857;
    }
    @media (max-width: 768px) {
        .policy-hero h1 {
            font-size: 2.1rem;
        }
    }
"#;

#[derive(Properties, PartialEq)]
pub struct PolicyPageLayoutProps {
    pub title: AttrValue,
    pub last_updated: AttrValue,
    #[prop_or_default]
    pub description: Option<Html>,
    #[prop_or_default]
    pub children: Children,
}

/// Shared layout for legal and support pages.
#[function_component]
pub fn PolicyPageLayout(props: &PolicyPageLayoutProps) -> Html {
    html! {
        <main>
            <style>{POLICY_CSS}</style>
            <section class="policy-hero">
                <div class="brand">{"THE HONEST HERBALIST"}</div>
                <h1>{props.title.clone()}</h1>
                <div class="updated">{format!("Last updated: {}", props.last_updated)}</div>
                if let Some(description) = props.description.clone() {
                    <div class="description">{description}</div>
                }
            </section>
            <section>
                <article class="policy-body">
                    { for props.children.iter() }
                </article>
            </section>
        </main>
    }
}
