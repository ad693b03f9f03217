use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::config::{self, OFFER};
use crate::utils::browser;
use crate::utils::checkout::{self, DelayedRedirect};
use crate::utils::meta_pixel;

/// Scroll depth after which the sticky offer bar appears.
const STICKY_BAR_THRESHOLD: f64 = 500.0;

struct Testimonial {
    headline: &'static str,
    body: &'static str,
    name: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        headline: "\"Finally, a book that tells me HOW MUCH.\"",
        body: "\"I've bought three herbal books over the years. Pretty pictures, nice stories, zero practical use. This one has measurements. Steep times. Warnings. It's the only one that stays in my kitchen instead of on a shelf.\"",
        name: "Rachel M., 54, Texas",
    },
    Testimonial {
        headline: "\"I gave my elderly mom the wrong herb. Never again.\"",
        body: "\"I didn't know St. John's Wort could clash with her heart medication. Nobody told me. This handbook flags that on every single page. I wish I'd had it sooner.\"",
        name: "Denise K., 61, Ohio",
    },
    Testimonial {
        headline: "\"This is what I grab at 2 AM.\"",
        body: "\"When my son's coughing and I'm half-asleep, I'm not Googling. I flip to 'respiratory' and get a clear answer in 30 seconds. That's worth way more than $49.\"",
        name: "Amanda T., 47, Montana",
    },
    Testimonial {
        headline: "\"The precision is what sold me.\"",
        body: "\"I always worried about safety flags for my grandkids. This handbook makes it so clear. No more guessing if something is safe for a 6-year-old or an 80-year-old.\"",
        name: "Susan L., 66, Oregon",
    },
];

const FAQS: [(&str, &str, &str); 8] = [
    (
        "different",
        "What makes \"The Honest Herbalist Handbook\" different from other herbal books?",
        "Most herbal books are organized by plant and read like encyclopedias. This one is organized by symptom. You look up what's wrong and get a remedy with measurements, safety flags, and when-to-stop signals, all on one page.",
    ),
    (
        "equipment",
        "Do I need special equipment?",
        "No. If you have a stove, a pot, and measuring spoons, you're set.",
    ),
    (
        "herbs",
        "Will I be able to find the herbs easily?",
        "Yes. Most remedies use kitchen staples: ginger, chamomile, honey, garlic, peppermint, thyme. The Starter Apothecary bonus helps you source anything you don't already have.",
    ),
    (
        "safety",
        "Is this safe for kids? Pregnant women? Elderly family members?",
        "That's why the Safety Flags exist. Every entry shows who should skip the remedy, who needs adjusted amounts, and when to check with a doctor first.",
    ),
    (
        "medications",
        "What if I'm on medications?",
        "The handbook includes medication clash alerts, plus a bonus quick-reference for common herb-drug interactions. Always verify with your pharmacist before adding something new.",
    ),
    (
        "format",
        "Is this a physical book or digital?",
        "Both. Your three digital bonuses arrive instantly and your printed book ships separately. The bonuses are designed to print, including a big-font version.",
    ),
    (
        "beginners",
        "Is this for beginners?",
        "Yes. If you can follow a recipe, you can use this handbook. Every remedy has step-by-step instructions with exact measurements.",
    ),
    (
        "refund",
        "What if it's not for me?",
        "You get your money back. Full refund within 60 days, no questions.",
    ),
];

fn scroll_to_offer() {
    let Some(element) = browser::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("offer"))
    else {
        return;
    };
    let mut options = ScrollIntoViewOptions::new();
    options.behavior(ScrollBehavior::Smooth);
    options.block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    id: AttrValue,
    question: AttrValue,
    answer: AttrValue,
}

#[function_component]
fn FaqItem(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    // Open and scroll to the item when the page is deep-linked to it.
    {
        let is_open = is_open.clone();
        let id = props.id.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(window) = browser::window() {
                    if let Ok(hash) = window.location().hash() {
                        if hash == format!("#{}", id) {
                            is_open.set(true);
                            Timeout::new(100, move || {
                                if let Some(element) = window
                                    .document()
                                    .and_then(|doc| doc.get_element_by_id(&id))
                                {
                                    element.scroll_into_view_with_bool(true);
                                }
                            })
                            .forget();
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    html! {
        <div class="faq-item" id={props.id.clone()}>
            <button class="faq-question" onclick={toggle}>
                <span>{props.question.clone()}</span>
                <span class="faq-icon">{ if *is_open { "−" } else { "+" } }</span>
            </button>
            if *is_open {
                <div class="faq-answer">{props.answer.clone()}</div>
            }
        </div>
    }
}

#[function_component]
pub fn Landing() -> Html {
    let show_sticky_bar = use_state(|| false);

    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = browser::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    {
        let show_sticky_bar = show_sticky_bar.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = browser::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let show_sticky_bar = show_sticky_bar.clone();
                        move || {
                            if let Some(win) = browser::window() {
                                if let Ok(scroll_y) = win.scroll_y() {
                                    show_sticky_bar.set(scroll_y > STICKY_BAR_THRESHOLD);
                                }
                            }
                        }
                    });
                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not watch scroll position: {:?}", e);
                    }
                    Box::new(move || {
                        if let Some(win) = browser::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || destructor()
            },
            (),
        );
    }

    let on_offer_cta = Callback::from(|_: MouseEvent| scroll_to_offer());

    let on_checkout = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        let tracked = meta_pixel::with_pixel(|pixel| {
            checkout::start_checkout(
                pixel,
                &DelayedRedirect,
                config::get_checkout_url(),
                &OFFER,
                config::CHECKOUT_REDIRECT_DELAY_MS,
            )
        });
        if let Err(e) = tracked {
            log::warn!("InitiateCheckout not tracked: {}", e);
        }
    });

    let landing_css = r#"
        .hero {
            max-width: 64rem;
            margin: 0 auto;
            padding: 4rem 1.5rem;
        }
        .hero .trust {
            font-weight: 900;
            letter-spacing: 0.2em;
            text-transform: uppercase;
        }
        .hero .stars {
            color: #d97706;
            font-size: 1.25rem;
        }
        .hero h1 {
            font-size: 2.75rem;
            font-weight: 900;
            line-height: 1.15;
            margin: 1.5rem 0 2rem;
        }
        .hero p {
            font-size: 1.35rem;
            margin-bottom: 3rem;
        }
        .cta {
            display: inline-block;
            background: #047857;
            color: #fff;
            border: none;
            border-radius: 0.75rem;
            padding: 1rem 2rem;
            font-size: 1.2rem;
            font-weight: 900;
            letter-spacing: 0.1em;
            text-transform: uppercase;
            text-decoration: none;
            cursor: pointer;
        }
        .cta:hover {
            background: #065f46;
        }
        .testimonials {
            background: #fff;
            padding: 4rem 1.5rem;
        }
        .testimonials h2, .offer h2, .faq h2 {
            text-align: center;
            font-size: 2.25rem;
            margin-bottom: 2.5rem;
        }
        .testimonial-grid {
            max-width: 64rem;
            margin: 0 auto;
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
            gap: 1.5rem;
        }
        .testimonial {
            border: 1px solid #e5e1d8;
            border-radius: 1rem;
            padding: 1.5rem;
        }
        .testimonial .who {
            margin-top: 1rem;
            font-weight: 700;
            text-transform: uppercase;
            font-size: 0.9rem;
        }
        .offer {
            padding: 4rem 1.5rem;
        }
        .offer-card {
            max-width: 32rem;
            margin: 0 auto;
            background: #fff;
            border-radius: 1rem;
            box-shadow: 0 10px 30px rgba(0, 0, 0, 0.08);
            padding: 2rem;
            text-align: center;
        }
        .offer-card .price {
            font-size: 3rem;
            font-weight: 900;
        }
        .offer-card .list-price {
            text-decoration: line-through;
            color: #9ca3af;
            margin-left: 0.75rem;
        }
        .offer-card .secure {
            margin-top: 1rem;
            font-size: 0.9rem;
            letter-spacing: 0.2em;
            text-transform: uppercase;
            color: #6b7280;
        }
        .faq {
            background: #fff;
            padding: 4rem 1.5rem 6rem;
        }
        .faq-list {
            max-width: 48rem;
            margin: 0 auto;
        }
        .faq-item {
            border-bottom: 1px solid #e5e1d8;
        }
        .faq-question {
            width: 100%;
            display: flex;
            justify-content: space-between;
            background: none;
            border: none;
            padding: 1rem 0;
            font-size: 1.1rem;
            font-weight: 800;
            color: #047857;
            text-align: left;
            cursor: pointer;
        }
        .faq-answer {
            padding-bottom: 1rem;
            font-size: 1.1rem;
            line-height: 1.6;
        }
        .sticky-bar {
            position: fixed;
            left: 0;
            right: 0;
            bottom: 0;
            z-index: 50;
            background: #fff;
            border-top: 1px solid #e5e1d8;
            padding: 0.75rem 1rem;
            display: flex;
            align-items: center;
            justify-content: center;
            gap: 1.5rem;
        }
        @media (max-width: 768px) {
            .hero h1 {
                font-size: 2.1rem;
            }
        }
    "#;

    html! {
        <>
            <style>{landing_css}</style>
            <main>
                <section class="hero">
                    <div class="trust">
                        <span class="stars">{"★★★★★"}</span>
                        <div>{"TRUSTED BY 12,000+ SELF-RELIANT FAMILIES"}</div>
                    </div>
                    <h1>{"\"I Gave My Mother the Wrong Dose. She Ended Up in the ER.\""}</h1>
                    <p>
                        {"One dosing mistake can turn a kitchen remedy into a nightmare. "}
                        <b>{"This handbook finally tells you how much, how often, and when to stop."}</b>
                    </p>
                    <button class="cta" onclick={on_offer_cta.clone()}>
                        {"YES! I WANT THE REAL DOSAGES →"}
                    </button>
                </section>

                <section class="testimonials">
                    <h2>{"What Readers Are Saying"}</h2>
                    <div class="testimonial-grid">
                        { for TESTIMONIALS.iter().map(|t| html! {
                            <figure class="testimonial">
                                <blockquote>
                                    <b>{t.headline}</b>
                                    <p>{t.body}</p>
                                </blockquote>
                                <figcaption class="who">{t.name}</figcaption>
                            </figure>
                        }) }
                    </div>
                </section>

                <section class="offer" id="offer">
                    <h2>{"Get Your Copy Today"}</h2>
                    <div class="offer-card">
                        <div>{OFFER.product_name}</div>
                        <div>
                            <span class="price">{format!("${:.0}", OFFER.value)}</span>
                            <span class="list-price">{format!("${:.2}", OFFER.list_price)}</span>
                        </div>
                        <p>{"Printed handbook + 3 digital bonuses, delivered instantly."}</p>
                        <a class="cta" href={config::get_checkout_url()} onclick={on_checkout.clone()}>
                            {"ORDER NOW"}
                        </a>
                        <div class="secure">{"Secure checkout"}</div>
                    </div>
                </section>

                <section class="faq">
                    <h2>{"Frequently Asked Questions"}</h2>
                    <div class="faq-list">
                        { for FAQS.iter().map(|(id, question, answer)| html! {
                            <FaqItem
                                id={*id}
                                question={*question}
                                answer={*answer}
                            />
                        }) }
                    </div>
                </section>
            </main>
            if *show_sticky_bar {
                <div class="sticky-bar">
                    <b>{format!("{} for ${:.0}", OFFER.product_name, OFFER.value)}</b>
                    <button class="cta" onclick={on_offer_cta}>{"CLAIM MY COPY"}</button>
                </div>
            }
        </>
    }
}
