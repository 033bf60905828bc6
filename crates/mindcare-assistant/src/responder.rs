//! Canned bot replies for free-form chat input.
//!
//! Input is lower-cased and checked against an ordered keyword table. The
//! first rule with a matching keyword wins, so earlier rules shadow later
//! ones. Text that matches nothing gets one of a fixed pool of supportive
//! replies, picked through a [`ReplyChooser`].

use mindcare_core::models::category::CategoryId;
use mindcare_core::models::message::Message;
use mindcare_instruments::catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One entry of the keyword classification table.
#[derive(Debug)]
pub struct KeywordRule {
    pub category: CategoryId,
    pub keywords: &'static [&'static str],
    pub reply: &'static str,
}

impl KeywordRule {
    /// `lowered` must already be lower-case.
    pub fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Classification rules, in priority order.
pub const KEYWORD_RULES: &[KeywordRule] = &[
    KeywordRule {
        category: CategoryId::Anxiety,
        keywords: &["anxious", "anxiety", "worried"],
        reply: "I understand you're experiencing anxiety. That takes courage to share. Would you like me to help you create a personalized therapy plan to address your anxiety? I can guide you through a brief assessment to better understand your specific needs.",
    },
    KeywordRule {
        category: CategoryId::Depression,
        keywords: &["sad", "depressed", "down"],
        reply: "I hear that you're going through a difficult time. Your feelings are valid, and seeking help is a positive step. Would you like to explore therapy options that might help improve your mood and overall well-being?",
    },
    KeywordRule {
        category: CategoryId::Stress,
        keywords: &["stressed", "overwhelmed", "pressure"],
        reply: "Stress can be really challenging to manage. I'd like to help you develop effective coping strategies. Would you be interested in creating a personalized stress management plan?",
    },
];

/// Generic replies used when no keyword rule matches.
pub const FALLBACK_REPLIES: [&str; 4] = [
    "Thank you for sharing that with me. I'm here to listen and support you. Is there a particular area of your mental health you'd like to focus on today?",
    "I appreciate you opening up. Everyone's mental health journey is unique. Would you like to explore some therapy options that might be helpful for you?",
    "It sounds like you're taking positive steps by reaching out. What would be most helpful for you right now - talking through your feelings or exploring some coping strategies?",
    "I'm glad you're here. Taking care of your mental health is important. Would you like me to help you identify some specific areas we could work on together?",
];

/// Default number of quick-start categories offered on a suggestion.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 4;

/// The first rule whose keywords appear in `text`, case-insensitively.
pub fn classify(text: &str) -> Option<&'static KeywordRule> {
    let lowered = text.to_lowercase();
    KEYWORD_RULES.iter().find(|rule| rule.matches(&lowered))
}

/// Picks an index into the fallback pool.
pub trait ReplyChooser: Send {
    /// Return an index in `0..len`. `len` is never zero.
    fn choose(&mut self, len: usize) -> usize;
}

/// Uniform random choice.
#[derive(Debug)]
pub struct RandomChooser<R = StdRng> {
    rng: R,
}

impl RandomChooser<StdRng> {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence of choices for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomChooser<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng + Send> ReplyChooser for RandomChooser<R> {
    fn choose(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Always picks the same slot (modulo the pool size).
#[derive(Debug, Clone, Copy)]
pub struct FixedChooser(pub usize);

impl ReplyChooser for FixedChooser {
    fn choose(&mut self, len: usize) -> usize {
        self.0 % len
    }
}

/// Maps chat input to a bot reply message.
pub struct Responder {
    chooser: Box<dyn ReplyChooser>,
    suggestion_limit: usize,
}

impl Responder {
    pub fn new(chooser: impl ReplyChooser + 'static, suggestion_limit: usize) -> Self {
        Self {
            chooser: Box::new(chooser),
            suggestion_limit,
        }
    }

    pub fn set_chooser(&mut self, chooser: impl ReplyChooser + 'static) {
        self.chooser = Box::new(chooser);
    }

    /// Build the reply for `text`. The caller appends it to the transcript.
    pub fn respond(&mut self, text: &str) -> Message {
        if let Some(rule) = classify(text) {
            tracing::debug!(category = %rule.category, "keyword rule matched");
            return Message::suggestion(
                rule.reply,
                catalog::suggestion_categories(self.suggestion_limit),
                rule.category,
            );
        }

        let index = self.chooser.choose(FALLBACK_REPLIES.len());
        Message::bot(FALLBACK_REPLIES[index % FALLBACK_REPLIES.len()])
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(RandomChooser::from_entropy(), DEFAULT_SUGGESTION_LIMIT)
    }
}
