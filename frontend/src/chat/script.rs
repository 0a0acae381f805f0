//! The scripted conversation tree: what the bot says for each branch and how
//! typed questions are routed onto those branches.

/// One branch of the conversation tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Automation,
    Strategy,
    Pricing,
    OnPrem,
    Browsing,
}

/// What happens once a topic's script has been played.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Continuation {
    OfferNextStep,
    EndBranch,
}

/// A topic's bot lines, in the order they are rendered.
#[derive(Debug)]
pub struct Script {
    pub lines: &'static [&'static str],
    pub then: Continuation,
}

/// The follow-up bound to a button in an option set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Topic(Topic),
    BookCall,
    AskQuestion,
    EndChat,
}

pub const GREETING: &[&str] = &[
    "Hey there! 👋 Welcome to CTX Foundry.",
    "We can help point you in the right direction. What brings you here today?",
];

pub const TOPIC_MENU: &[(&str, Choice)] = &[
    ("🔍 I want to automate workflows with AI", Choice::Topic(Topic::Automation)),
    ("📊 I need an AI strategy for my business", Choice::Topic(Topic::Strategy)),
    ("🏢 I want a private/on-premise AI system", Choice::Topic(Topic::OnPrem)),
    ("👀 Just browsing", Choice::Topic(Topic::Browsing)),
];

pub const NEXT_STEP_PROMPT: &str = "Want to take the next step?";

pub const NEXT_STEP_MENU: &[(&str, Choice)] = &[
    ("📅 Book a free discovery call", Choice::BookCall),
    ("💬 I have another question", Choice::AskQuestion),
    ("👍 That's all for now", Choice::EndChat),
];

pub const BOOK_CALL: &[&str] = &[
    "Awesome! Just scroll down to our contact form and fill it out — we'll get back to you within 24 hours.",
    "Or email us directly at hello@ctxfoundry.com",
];

pub const ASK_QUESTION: &[&str] = &["Sure! Type your question below and I'll do my best to help."];

pub const FAREWELL: &[&str] = &["Sounds good! We're here whenever you're ready. Have a great day! 🔥"];

pub const PRICING_ACK: &[&str] = &[
    "We tailor pricing to each engagement based on scope and outcomes.",
    "Happy to discuss specifics on a brief discovery call.",
];

pub const GREETING_ACK: &[&str] =
    &["Hey! 👋 How can I help you today? Feel free to ask about our services or process."];

pub const DEFLECTION: &[&str] = &[
    "Great question! That's one we'd love to cover on a discovery call so we can give you a thorough answer.",
];

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Automation,
        Topic::Strategy,
        Topic::Pricing,
        Topic::OnPrem,
        Topic::Browsing,
    ];

    pub fn script(self) -> Script {
        match self {
            Topic::Automation => Script {
                lines: &[
                    "Great — workflow automation is our bread and butter. We typically start with a Revenue Automation Blueprint to identify which workflows will generate the most ROI.",
                    "Most clients see measurable results within 90 days of their first build.",
                ],
                then: Continuation::OfferNextStep,
            },
            Topic::Strategy => Script {
                lines: &[
                    "Smart move. Our Revenue Automation Blueprint is a fixed-cost, deep-dive exploration of your operations.",
                    "We map income-generating work and payroll-consuming tasks, then deliver a tangible plan you can execute — yours to keep regardless of next steps.",
                ],
                then: Continuation::OfferNextStep,
            },
            Topic::Pricing => Script {
                lines: &[
                    "We believe in transparency. Here's the general framework:",
                    "• Revenue Automation Blueprint: $2,500–$5,000 (fixed cost)\n• Single Workflow Build: $5,000–$15,000\n• Full Build + Support: $2,500–$8,000/mo\n• On-Premise LLM: $25K–$75K+ (project)",
                    "Every engagement starts with the Blueprint so we can scope accurately. No surprises.",
                ],
                then: Continuation::OfferNextStep,
            },
            Topic::OnPrem => Script {
                lines: &[
                    "On-premise AI is our premium offering — ideal for firms handling sensitive data in legal, healthcare, or finance.",
                    "We deploy fine-tuned LLMs on your infrastructure. Your data never leaves your network. Full sovereignty.",
                ],
                then: Continuation::OfferNextStep,
            },
            Topic::Browsing => Script {
                lines: &[
                    "No problem! Feel free to look around. If you want to chat later, I'll be right here. 🔥",
                    "Quick tip: check out our Services section to see how we've structured our four-pillar approach.",
                ],
                then: Continuation::EndBranch,
            },
        }
    }
}

/// Where a typed question gets routed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Topic(Topic),
    Greeting,
    Unknown,
}

/// Keyword rules, checked top to bottom. The first rule with any keyword
/// contained in the lower-cased text wins, so the order is part of the contract.
const RULES: &[(&[&str], Intent)] = &[
    (&["price", "pricing", "cost", "how much"], Intent::Topic(Topic::Pricing)),
    (&["automat", "workflow"], Intent::Topic(Topic::Automation)),
    (&["on-prem", "private", "llm", "on prem"], Intent::Topic(Topic::OnPrem)),
    (&["audit", "strategy", "consult"], Intent::Topic(Topic::Strategy)),
    (&["hello", "hi", "hey"], Intent::Greeting),
];

pub fn classify_free_text(text: &str) -> Intent {
    let lower = text.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(_, intent)| *intent)
        .unwrap_or(Intent::Unknown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_lines() {
        for topic in Topic::ALL {
            assert!(!topic.script().lines.is_empty(), "{:?} has no lines", topic);
        }
    }

    #[test]
    fn only_browsing_ends_the_branch() {
        for topic in Topic::ALL {
            let expected = if topic == Topic::Browsing {
                Continuation::EndBranch
            } else {
                Continuation::OfferNextStep
            };
            assert_eq!(topic.script().then, expected);
        }
    }

    #[test]
    fn classifies_documented_examples() {
        assert_eq!(classify_free_text("how much does this cost"), Intent::Topic(Topic::Pricing));
        assert_eq!(
            classify_free_text("can you automate my workflow"),
            Intent::Topic(Topic::Automation)
        );
        assert_eq!(classify_free_text("hello"), Intent::Greeting);
        assert_eq!(classify_free_text("asdfghjkl"), Intent::Unknown);
        assert_eq!(classify_free_text("pricing"), Intent::Topic(Topic::Pricing));
    }

    #[test]
    fn pricing_beats_automation() {
        for _ in 0..3 {
            assert_eq!(
                classify_free_text("how much does automation cost"),
                Intent::Topic(Topic::Pricing)
            );
        }
    }

    #[test]
    fn matching_ignores_case() {
        assert_eq!(classify_free_text("Do you run LLMs ON-PREM?"), Intent::Topic(Topic::OnPrem));
        assert_eq!(classify_free_text("We need an AUDIT"), Intent::Topic(Topic::Strategy));
        assert_eq!(classify_free_text("Hey"), Intent::Greeting);
    }

    #[test]
    fn topic_rules_outrank_greeting() {
        assert_eq!(
            classify_free_text("hi, can you consult on our roadmap"),
            Intent::Topic(Topic::Strategy)
        );
        assert_eq!(classify_free_text("hey, is it private?"), Intent::Topic(Topic::OnPrem));
    }

    #[test]
    fn menus_match_the_tree() {
        assert_eq!(TOPIC_MENU.len(), 4);
        assert!(TOPIC_MENU.iter().all(|(_, c)| *c != Choice::Topic(Topic::Pricing)));
        assert_eq!(
            NEXT_STEP_MENU.iter().map(|(_, c)| *c).collect::<Vec<_>>(),
            vec![Choice::BookCall, Choice::AskQuestion, Choice::EndChat]
        );
        assert!(BOOK_CALL[1].contains(crate::config::CONTACT_EMAIL));
    }
}
