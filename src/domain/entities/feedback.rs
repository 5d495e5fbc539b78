use super::User;

/// A piece of free-text feedback left through `/feedback`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackRecord {
    pub timestamp: i64,
    pub user_id: i64,
    pub user_name: String,
    pub body: String,
}

impl FeedbackRecord {
    pub fn new(timestamp: i64, user: &User, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            user_id: user.id,
            user_name: user.first_name.clone().unwrap_or_default(),
            body: body.into(),
        }
    }

    pub fn key(&self) -> String {
        format!("feedback:{}:{}", self.timestamp, self.user_id)
    }

    /// Stored representation
    pub fn render(&self) -> String {
        format!("User: {} ({})\nFeedback: {}", self.user_name, self.user_id, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_key_and_body() {
        let user = User::new(99).with_first_name("Bob");
        let record = FeedbackRecord::new(1_700_000_000, &user, "great bot");

        assert_eq!(record.key(), "feedback:1700000000:99");
        assert_eq!(record.render(), "User: Bob (99)\nFeedback: great bot");
    }
}
