use yew::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::chat_widget::ChatWidget;
use crate::components::contact_form::ContactForm;
use crate::components::fade_in::FadeIn;
use crate::config;

struct Card {
    icon: &'static str,
    title: &'static str,
    body: &'static str,
}

const SERVICES: &[Card] = &[
    Card {
        icon: "🧭",
        title: "Revenue Automation Blueprint",
        body: "A fixed-cost deep dive into your operations. We map income-generating work against payroll-consuming tasks and hand you a plan you keep.",
    },
    Card {
        icon: "⚙️",
        title: "Workflow Builds",
        body: "We build the automations the Blueprint ranks highest, wired into the tools your team already uses.",
    },
    Card {
        icon: "🛠️",
        title: "Build + Support",
        body: "Ongoing builds, monitoring and tuning so your automations keep paying off as the business changes.",
    },
    Card {
        icon: "🏢",
        title: "On-Premise LLMs",
        body: "Fine-tuned models deployed on your own infrastructure. Your data never leaves your network.",
    },
];

const PROCESS: &[Card] = &[
    Card {
        icon: "01",
        title: "Discover",
        body: "A free discovery call to understand where time and money leak out of your operations.",
    },
    Card {
        icon: "02",
        title: "Blueprint",
        body: "We score every candidate workflow by ROI and effort, then agree on what to build first.",
    },
    Card {
        icon: "03",
        title: "Build",
        body: "Short build cycles with working automations in front of your team early.",
    },
    Card {
        icon: "04",
        title: "Scale",
        body: "Measure, tune and extend. Most clients see measurable results within 90 days.",
    },
];

const INDUSTRIES: &[Card] = &[
    Card {
        icon: "⚖️",
        title: "Legal",
        body: "Intake, document review and matter summaries without sending client files to third parties.",
    },
    Card {
        icon: "🩺",
        title: "Healthcare",
        body: "Scheduling, referrals and records workflows built around patient privacy.",
    },
    Card {
        icon: "💼",
        title: "Finance",
        body: "Reconciliation, reporting and compliance checks that run while your team sleeps.",
    },
    Card {
        icon: "🏗️",
        title: "Professional Services",
        body: "Proposals, onboarding and billing handled end to end.",
    },
];

fn render_cards(cards: &[Card], class: &'static str) -> Html {
    cards
        .iter()
        .map(|card| {
            html! {
                <FadeIn class={classes!(class)}>
                    <div class="card-icon">{ card.icon }</div>
                    <h3>{ card.title }</h3>
                    <p>{ card.body }</p>
                </FadeIn>
            }
        })
        .collect()
}

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="landing-page">
            <section class="hero" id="home">
                <h1>{ "AI automation that pays for itself." }</h1>
                <p class="hero-subtitle">
                    { "CTX Foundry designs and builds the workflows, strategy and private AI systems that turn busywork into revenue." }
                </p>
                <div class="hero-actions">
                    <AnchorLink href="#contact" class={classes!("btn-primary")}>{ "Book a discovery call" }</AnchorLink>
                    <AnchorLink href="#services" class={classes!("btn-secondary")}>{ "See our services" }</AnchorLink>
                </div>
            </section>

            <section class="section" id="services">
                <h2>{ "Four pillars" }</h2>
                <div class="card-grid">{ render_cards(SERVICES, "service-card") }</div>
            </section>

            <section class="section" id="process">
                <h2>{ "How we work" }</h2>
                <div class="card-grid">{ render_cards(PROCESS, "process-step") }</div>
            </section>

            <section class="section" id="industries">
                <h2>{ "Who we help" }</h2>
                <div class="card-grid">{ render_cards(INDUSTRIES, "industry-card") }</div>
            </section>

            <section class="section about" id="about">
                <FadeIn class={classes!("about-content")}>
                    <h2>{ "About CTX Foundry" }</h2>
                    <p>
                        { "We are engineers and operators who got tired of AI projects that never left the slide deck. Every engagement starts with a Blueprint so we can scope accurately. No surprises." }
                    </p>
                </FadeIn>
                <FadeIn class={classes!("about-visual")}>
                    <div class="about-stat"><strong>{ "90 days" }</strong><span>{ "to measurable results" }</span></div>
                    <div class="about-stat"><strong>{ "100%" }</strong><span>{ "of your data stays yours" }</span></div>
                </FadeIn>
            </section>

            <section class="section contact" id="contact">
                <FadeIn class={classes!("contact-content")}>
                    <h2>{ "Let's talk" }</h2>
                    <p>{ "Tell us what slows your team down. We'll get back to you within 24 hours." }</p>
                    <p>
                        { "Prefer email? " }
                        <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{ config::CONTACT_EMAIL }</a>
                    </p>
                </FadeIn>
                <FadeIn>
                    <ContactForm />
                </FadeIn>
            </section>

            <footer class="footer">
                <p>{ "© CTX Foundry" }</p>
            </footer>

            <ChatWidget />

            <style>
                {r#"
                .landing-page {
                    padding-top: 74px;
                    min-height: 100vh;
                    color: #ffffff;
                    background: #0d0d0d;
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                .hero {
                    text-align: center;
                    padding: 120px 20px 100px;
                }
                .hero h1 {
                    font-size: 3rem;
                    margin-bottom: 20px;
                }
                .hero-subtitle {
                    max-width: 640px;
                    margin: 0 auto 36px;
                    color: #bbb;
                    font-size: 1.15rem;
                }
                .hero-actions {
                    display: flex;
                    justify-content: center;
                    gap: 16px;
                    flex-wrap: wrap;
                }
                .btn-primary,
                .btn-secondary {
                    padding: 14px 26px;
                    border-radius: 10px;
                    text-decoration: none;
                    font-weight: 600;
                }
                .btn-primary {
                    background: #ff6b2c;
                    color: #fff;
                }
                .btn-secondary {
                    border: 1px solid #ff6b2c;
                    color: #ff6b2c;
                }
                .section {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 80px 20px;
                }
                .section h2 {
                    font-size: 2rem;
                    margin-bottom: 32px;
                }
                .card-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(230px, 1fr));
                    gap: 20px;
                }
                .service-card,
                .process-step,
                .industry-card {
                    background: #151515;
                    border: 1px solid #242424;
                    border-radius: 14px;
                    padding: 24px;
                }
                .card-icon {
                    font-size: 1.6rem;
                    color: #ff6b2c;
                    margin-bottom: 12px;
                }
                .service-card p,
                .process-step p,
                .industry-card p {
                    color: #aaa;
                    line-height: 1.55;
                }
                .about,
                .contact {
                    display: grid;
                    grid-template-columns: 1fr 1fr;
                    gap: 40px;
                }
                .about-stat {
                    display: flex;
                    flex-direction: column;
                    margin-bottom: 20px;
                }
                .about-stat strong {
                    font-size: 2.2rem;
                    color: #ff6b2c;
                }
                .contact a {
                    color: #ff6b2c;
                }
                .footer {
                    text-align: center;
                    padding: 40px 20px;
                    color: #666;
                }
                .fade-in {
                    opacity: 0;
                    transform: translateY(24px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }
                .fade-in.visible {
                    opacity: 1;
                    transform: none;
                }
                @media (max-width: 768px) {
                    .hero h1 {
                        font-size: 2.2rem;
                    }
                    .about,
                    .contact {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </div>
    }
}
