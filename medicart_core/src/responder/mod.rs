//! Rule-based "doctor" replies for the chat screen.
//!
//! Utterances are lowercased and checked against an ordered rule table by
//! substring; the first rule with a matching keyword wins. When no rule
//! matches, greetings and thanks get a canned reply and everything else gets
//! the generic request for more detail.

mod rules;

pub use rules::{DEFAULT_RULES, FALLBACK_REPLY, GREETING_REPLY, THANKS_REPLY};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which reply an utterance was routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Headache,
    Fever,
    Allergy,
    Heartburn,
    SoreThroat,
    Diarrhea,
    Cold,
    Greeting,
    Thanks,
    Unknown,
}

impl Topic {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Headache => "headache",
            Self::Fever => "fever",
            Self::Allergy => "allergy",
            Self::Heartburn => "heartburn",
            Self::SoreThroat => "sore_throat",
            Self::Diarrhea => "diarrhea",
            Self::Cold => "cold",
            Self::Greeting => "greeting",
            Self::Thanks => "thanks",
            Self::Unknown => "unknown",
        }
    }
}

/// One entry of the rule table.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub topic: Topic,
    /// Lowercase keywords; any one appearing in the utterance selects the rule.
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl Rule {
    /// `normalized` must already be lowercase.
    #[must_use]
    pub fn matches(&self, normalized: &str) -> bool {
        contains_any(normalized, self.keywords)
    }
}

const GREETING_KEYWORDS: &[&str] = &["hello", "hi", "hey"];
const THANKS_KEYWORDS: &[&str] = &["thank"];

/// Stateless responder over an ordered rule table.
#[derive(Debug, Clone, Copy)]
pub struct Responder {
    rules: &'static [Rule],
}

impl Responder {
    /// Responder over a custom rule table, checked in slice order.
    #[must_use]
    pub const fn new(rules: &'static [Rule]) -> Self {
        Self { rules }
    }

    #[must_use]
    pub const fn with_defaults() -> Self {
        Self::new(DEFAULT_RULES)
    }

    #[must_use]
    pub const fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// The message a new chat opens with.
    #[must_use]
    pub const fn greeting() -> &'static str {
        GREETING_REPLY
    }

    /// Route an utterance to a topic without producing the reply.
    #[must_use]
    pub fn classify(&self, utterance: &str) -> Topic {
        self.route(utterance).0
    }

    /// Topic and reply in a single pass over the rule table.
    #[must_use]
    pub fn route(&self, utterance: &str) -> (Topic, &'static str) {
        let normalized = utterance.to_lowercase();

        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(&normalized)) {
            return (rule.topic, rule.reply);
        }

        if contains_any(&normalized, GREETING_KEYWORDS) {
            (Topic::Greeting, GREETING_REPLY)
        } else if contains_any(&normalized, THANKS_KEYWORDS) {
            (Topic::Thanks, THANKS_REPLY)
        } else {
            (Topic::Unknown, FALLBACK_REPLY)
        }
    }

    /// Reply for `utterance`. Every input, including the empty string, maps
    /// to exactly one reply.
    #[must_use]
    pub fn respond(&self, utterance: &str) -> &'static str {
        let (topic, reply) = self.route(utterance);
        debug!("Responder matched topic: {}", topic.as_str());
        reply
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn contains_any(normalized: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| normalized.contains(keyword))
}

/// Reply from the default rule table.
#[must_use]
pub fn respond(utterance: &str) -> &'static str {
    Responder::with_defaults().respond(utterance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_matching_rule_wins() {
        let responder = Responder::with_defaults();
        assert_eq!(
            responder.classify("I have a headache and fever"),
            Topic::Headache
        );
        assert_eq!(
            responder.respond("I have a headache and fever"),
            DEFAULT_RULES[0].reply
        );
    }

    #[test]
    fn test_each_rule_keyword() {
        let responder = Responder::with_defaults();
        let cases = [
            ("my head pain is awful", Topic::Headache),
            ("running a FEVER since monday", Topic::Fever),
            ("I think I'm allergic to pollen", Topic::Allergy),
            ("bad acid reflux after dinner", Topic::Heartburn),
            ("woke up with a sore throat", Topic::SoreThroat),
            ("diarrhea all night", Topic::Diarrhea),
            ("dry cough", Topic::Cold),
            ("caught a cold", Topic::Cold),
        ];
        for (utterance, topic) in cases {
            assert_eq!(responder.classify(utterance), topic, "utterance: {utterance}");
        }
    }

    #[test]
    fn test_greeting_and_thanks() {
        assert_eq!(respond("hello"), GREETING_REPLY);
        assert_eq!(respond("Hey there"), GREETING_REPLY);
        assert_eq!(respond("thank you!"), THANKS_REPLY);
    }

    #[test]
    fn test_symptom_rules_beat_greeting() {
        assert_eq!(
            Responder::with_defaults().classify("hello, I have a fever"),
            Topic::Fever
        );
    }

    #[test]
    fn test_fallback() {
        assert_eq!(respond("my foot hurts"), FALLBACK_REPLY);
        assert_eq!(respond(""), FALLBACK_REPLY);
    }

    #[test]
    fn test_respond_is_idempotent() {
        let responder = Responder::with_defaults();
        for utterance in ["sore throat", "what?", "", "THANKS"] {
            assert_eq!(responder.respond(utterance), responder.respond(utterance));
        }
    }

    #[test]
    fn test_route_agrees_with_classify_and_respond() {
        let responder = Responder::with_defaults();
        for utterance in ["I have a headache and fever", "hey", "thank you", "", "my foot hurts"] {
            let (topic, reply) = responder.route(utterance);
            assert_eq!(topic, responder.classify(utterance));
            assert_eq!(reply, responder.respond(utterance));
        }
        assert_eq!(responder.route("hello").0, Topic::Greeting);
    }

    #[test]
    fn test_custom_rule_table() {
        static RULES: &[Rule] = &[Rule {
            topic: Topic::Cold,
            keywords: &["sniffle"],
            reply: "Rest up.",
        }];
        let responder = Responder::new(RULES);

        assert_eq!(responder.respond("a little sniffle"), "Rest up.");
        // Keywords from the default table are not consulted.
        assert_eq!(responder.respond("headache"), FALLBACK_REPLY);
    }
}
