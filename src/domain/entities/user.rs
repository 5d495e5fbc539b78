use std::fmt;

/// Represents a chat participant as seen by the bot
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
}

impl User {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            username: None,
            first_name: None,
        }
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_first_name(mut self, first: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self
    }

    /// First name if present and non-blank, otherwise `fallback`.
    pub fn display_name<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.first_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => fallback,
        }
    }

    /// Store key holding the free-text message counter
    pub fn messages_key(&self) -> String {
        format!("user:{}:messages", self.id)
    }

    /// Store key holding the first-seen date
    pub fn join_date_key(&self) -> String {
        format!("user:{}:join_date", self.id)
    }
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.first_name, &self.username) {
            (Some(first), _) => write!(f, "{} ({})", first, self.id),
            (None, Some(username)) => write!(f, "@{} ({})", username, self.id),
            (None, None) => write!(f, "{}", self.id),
        }
    }
}

/// Per-user statistics read back from the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserStats {
    pub message_count: i64,
    pub join_date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_fallback() {
        let anon = User::new(7);
        assert_eq!(anon.display_name("朋友"), "朋友");

        let blank = User::new(7).with_first_name("  ");
        assert_eq!(blank.display_name("用户"), "用户");

        let named = User::new(7).with_first_name("Alice");
        assert_eq!(named.display_name("朋友"), "Alice");
    }

    #[test]
    fn test_store_keys() {
        let user = User::new(42);
        assert_eq!(user.messages_key(), "user:42:messages");
        assert_eq!(user.join_date_key(), "user:42:join_date");
    }
}
