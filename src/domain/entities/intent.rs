//! Keyword-triggered intent rules used for free text

/// Category picked by the intent classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Thanks,
    Farewell,
    Time,
    Weather,
    Help,
    Entertainment,
    EmotionalSupport,
    Compliment,
    Identity,
    Fallback,
}

/// Which side of the emotional-support branch matched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Low,
    Bright,
}

/// How a matched rule turns into reply text.
///
/// Templates may contain `{name}`, filled with the sender's display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseStrategy {
    Fixed(&'static str),
    OneOf(&'static [&'static str]),
    CurrentTime,
}

/// Secondary split evaluated only after the outer rule has matched
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodBranch {
    pub low_keywords: &'static [&'static str],
    pub low: ResponseStrategy,
    pub bright: ResponseStrategy,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
    pub response: ResponseStrategy,
    pub mood: Option<MoodBranch>,
}

impl IntentRule {
    pub fn new(intent: Intent, keywords: &'static [&'static str], response: ResponseStrategy) -> Self {
        Self {
            intent,
            keywords,
            response,
            mood: None,
        }
    }

    pub fn with_mood(mut self, branch: MoodBranch) -> Self {
        self.mood = Some(branch);
        self
    }

    /// `normalized` must already be lowercase
    pub fn matches(&self, normalized: &str) -> bool {
        contains_any(normalized, self.keywords)
    }
}

pub(crate) fn contains_any(haystack: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| haystack.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substring_match() {
        let rule = IntentRule::new(Intent::Greeting, &["hi", "你好"], ResponseStrategy::Fixed("x"));
        assert!(rule.matches("hi there"));
        assert!(rule.matches("this"));
        assert!(rule.matches("大家你好呀"));
        assert!(!rule.matches("hey"));
    }
}
