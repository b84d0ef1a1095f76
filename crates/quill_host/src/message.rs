//! Nested diagnostic message chains.

use serde::{Deserialize, Serialize};

/// A diagnostic message, possibly elaborated by nested follow-up messages.
///
/// Engines report chained explanations such as
/// "Type 'A' is not assignable to type 'B'" followed by the property that
/// failed. [`flatten`](MessageChain::flatten) renders the chain as one
/// string, each level on its own line indented by two spaces per depth.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageChain {
    /// The text at this level.
    pub text: String,
    /// Follow-up messages, one level deeper.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub next: Vec<MessageChain>,
}

impl MessageChain {
    /// A single message with no follow-ups.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            next: Vec::new(),
        }
    }

    /// Appends a follow-up message.
    pub fn with_next(mut self, next: MessageChain) -> Self {
        self.next.push(next);
        self
    }

    /// Joins the chain into one string using `new_line` between levels.
    pub fn flatten(&self, new_line: &str) -> String {
        let mut out = String::new();
        self.flatten_into(&mut out, new_line, 0);
        out
    }

    fn flatten_into(&self, out: &mut String, new_line: &str, depth: usize) {
        if depth > 0 {
            out.push_str(new_line);
            out.push_str(&"  ".repeat(depth));
        }
        out.push_str(&self.text);
        for next in &self.next {
            next.flatten_into(out, new_line, depth + 1);
        }
    }
}

impl From<&str> for MessageChain {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for MessageChain {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
