//! Chat conversation state. At most one exchange is in flight at a time.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

#[derive(Debug, Default)]
pub struct ChatSession {
    turns: Vec<ChatTurn>,
    pending: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Record a user turn and mark the exchange pending. Returns the turns
    /// that preceded it, to be sent to the gateway as history. Returns `None`
    /// without touching state when the message is blank or a reply is still
    /// outstanding.
    pub fn submit(&mut self, text: &str) -> Option<Vec<ChatTurn>> {
        let text = text.trim();
        if text.is_empty() || self.pending {
            return None;
        }
        let history = self.turns.clone();
        self.turns.push(ChatTurn {
            role: ChatRole::User,
            text: text.to_string(),
        });
        self.pending = true;
        Some(history)
    }

    /// Append the assistant turn and clear the pending flag. The reply is
    /// always a displayable string; gateway failures arrive here already
    /// converted to fallback text.
    pub fn resolve(&mut self, reply: String) {
        self.turns.push(ChatTurn {
            role: ChatRole::Assistant,
            text: reply,
        });
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_submit_is_a_no_op() {
        let mut chat = ChatSession::new();
        assert_eq!(chat.submit(""), None);
        assert_eq!(chat.submit("   \n\t"), None);
        assert!(chat.turns().is_empty());
        assert!(!chat.is_pending());
    }

    #[test]
    fn submit_trims_and_records_the_user_turn() {
        let mut chat = ChatSession::new();
        let history = chat.submit("  নামাজ কী?  ").unwrap();
        assert!(history.is_empty());
        assert_eq!(chat.turns().len(), 1);
        assert_eq!(chat.turns()[0].role, ChatRole::User);
        assert_eq!(chat.turns()[0].text, "নামাজ কী?");
        assert!(chat.is_pending());
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut chat = ChatSession::new();
        assert!(chat.submit("hi").is_some());
        assert_eq!(chat.submit("hi"), None);

        let user_turns = chat
            .turns()
            .iter()
            .filter(|t| t.role == ChatRole::User)
            .count();
        assert_eq!(user_turns, 1);

        chat.resolve("ওয়ালাইকুম আসসালাম".to_string());
        assert!(!chat.is_pending());
        assert_eq!(chat.turns().len(), 2);
        assert_eq!(chat.turns()[1].role, ChatRole::Assistant);
    }

    #[test]
    fn history_excludes_the_turn_being_submitted() {
        let mut chat = ChatSession::new();
        chat.submit("one").unwrap();
        chat.resolve("reply one".to_string());

        let history = chat.submit("two").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].text, "one");
        assert_eq!(history[1].text, "reply one");
    }

    #[test]
    fn turns_alternate_across_exchanges() {
        let mut chat = ChatSession::new();
        for (msg, reply) in [("a", "1"), ("b", "2")] {
            chat.submit(msg).unwrap();
            chat.resolve(reply.to_string());
        }
        let roles: Vec<ChatRole> = chat.turns().iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![
                ChatRole::User,
                ChatRole::Assistant,
                ChatRole::User,
                ChatRole::Assistant
            ]
        );
    }
}
