//! Intent classifier - ordered keyword rules for free text
//!
//! Rules are scanned in a fixed order and the first match wins. Several
//! keywords overlap across or inside categories, and order alone decides
//! them:
//! - `hi` (greeting) is a substring of `this`, `think`, `which`...
//! - `goodbye` (farewell) contains `good` (compliment)
//! - `time` (time) is inside `sometimes`
//! - `help` (help) also hits `helpful`
//!
//! Keep the order below as-is when touching the table.

use crate::application::templates as t;
use crate::domain::entities::intent::contains_any;
use crate::domain::entities::{Intent, IntentRule, Mood, MoodBranch, ResponseStrategy};

/// Outcome of a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification<'a> {
    pub intent: Intent,
    /// Set only for `Intent::EmotionalSupport`
    pub mood: Option<Mood>,
    pub response: &'a ResponseStrategy,
}

pub struct IntentClassifier {
    rules: Vec<IntentRule>,
    fallback: ResponseStrategy,
}

impl IntentClassifier {
    pub fn new() -> Self {
        let rules = vec![
            IntentRule::new(
                Intent::Greeting,
                &["你好", "hello", "hi", "嗨", "早上好", "下午好", "晚上好"],
                ResponseStrategy::OneOf(t::GREETINGS),
            ),
            IntentRule::new(
                Intent::Thanks,
                &["谢谢", "thanks", "thank you", "感谢"],
                ResponseStrategy::OneOf(t::THANKS_REPLIES),
            ),
            IntentRule::new(
                Intent::Farewell,
                &["再见", "bye", "goodbye", "拜拜", "晚安"],
                ResponseStrategy::OneOf(t::FAREWELLS),
            ),
            IntentRule::new(
                Intent::Time,
                &["时间", "time", "几点", "现在"],
                ResponseStrategy::CurrentTime,
            ),
            IntentRule::new(
                Intent::Weather,
                &["天气", "weather", "下雨", "晴天"],
                ResponseStrategy::Fixed(t::WEATHER_HINT),
            ),
            IntentRule::new(
                Intent::Help,
                &["功能", "能做什么", "帮助", "help", "命令"],
                ResponseStrategy::Fixed(t::HELP_HINT),
            ),
            IntentRule::new(
                Intent::Entertainment,
                &["笑话", "joke", "无聊", "好玩"],
                ResponseStrategy::Fixed(t::JOKE_HINT),
            ),
            IntentRule::new(
                Intent::EmotionalSupport,
                &["累了", "难过", "开心", "高兴", "伤心"],
                ResponseStrategy::Fixed(t::ENCOURAGE),
            )
            .with_mood(MoodBranch {
                low_keywords: &["累了", "难过", "伤心"],
                low: ResponseStrategy::Fixed(t::COMFORT),
                bright: ResponseStrategy::Fixed(t::ENCOURAGE),
            }),
            IntentRule::new(
                Intent::Compliment,
                &["聪明", "棒", "厉害", "不错", "good", "great", "awesome"],
                ResponseStrategy::OneOf(t::COMPLIMENT_REPLIES),
            ),
            IntentRule::new(
                Intent::Identity,
                &["你是谁", "什么机器人", "介绍"],
                ResponseStrategy::Fixed(t::IDENTITY),
            ),
        ];

        Self {
            rules,
            fallback: ResponseStrategy::OneOf(t::FALLBACK_REPLIES),
        }
    }

    pub fn rules(&self) -> &[IntentRule] {
        &self.rules
    }

    pub fn classify(&self, text: &str) -> Classification<'_> {
        let normalized = text.to_lowercase();

        let Some(rule) = self.rules.iter().find(|r| r.matches(&normalized)) else {
            return Classification {
                intent: Intent::Fallback,
                mood: None,
                response: &self.fallback,
            };
        };

        match &rule.mood {
            Some(branch) => {
                let (mood, response) = if contains_any(&normalized, branch.low_keywords) {
                    (Mood::Low, &branch.low)
                } else {
                    (Mood::Bright, &branch.bright)
                };
                Classification {
                    intent: rule.intent,
                    mood: Some(mood),
                    response,
                }
            }
            None => Classification {
                intent: rule.intent,
                mood: None,
                response: &rule.response,
            },
        }
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}
