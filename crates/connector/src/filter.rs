//! The sender/content blacklist chain.

use std::{fmt, sync::Arc};

use async_trait::async_trait;

use courier_common::{ContactId, Message};

/// Async predicate over a message; `true` means "block".
#[async_trait]
pub trait MessagePredicate: Send + Sync {
    async fn matches(&self, message: &Message) -> bool;
}

/// Plain closures act as predicates too.
#[async_trait]
impl<F> MessagePredicate for F
where
    F: Fn(&Message) -> bool + Send + Sync,
{
    async fn matches(&self, message: &Message) -> bool {
        self(message)
    }
}

/// A single blacklist entry: a sender-id literal or an arbitrary predicate.
#[derive(Clone)]
pub enum FilterRule {
    /// Block every message from this sender.
    Sender(ContactId),
    /// Block messages the predicate matches.
    Predicate(Arc<dyn MessagePredicate>),
}

impl FilterRule {
    pub fn predicate(predicate: impl MessagePredicate + 'static) -> Self {
        Self::Predicate(Arc::new(predicate))
    }
}

impl fmt::Debug for FilterRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sender(id) => f.debug_tuple("Sender").field(id).finish(),
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Ordered blacklist evaluated once per inbound message.
///
/// Pure OR across rules: evaluation short-circuits on the first match but
/// the outcome does not depend on order. Fixed per connector at
/// configuration time — never shared mutable state.
#[derive(Debug, Clone, Default)]
pub struct FilterChain {
    rules: Vec<FilterRule>,
}

impl FilterChain {
    pub fn new(rules: Vec<FilterRule>) -> Self {
        Self { rules }
    }

    /// Chain that blocks exactly the given sender ids.
    pub fn senders<I>(ids: I) -> Self
    where
        I: IntoIterator<Item = ContactId>,
    {
        Self::new(ids.into_iter().map(FilterRule::Sender).collect())
    }

    pub fn push(&mut self, rule: FilterRule) {
        self.rules.push(rule);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// `true` when any rule matches and the message must be dropped.
    pub async fn blocks(&self, message: &Message) -> bool {
        for rule in &self.rules {
            let matched = match rule {
                FilterRule::Sender(id) => *id == message.talker,
                FilterRule::Predicate(predicate) => predicate.matches(message).await,
            };
            if matched {
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        courier_common::{MessageKind, RoomId},
    };

    fn message_from(talker: &str) -> Message {
        Message::text(ContactId::new(talker), Some(RoomId::new("r1")), "hi")
    }

    #[tokio::test]
    async fn empty_chain_admits_everything() {
        let chain = FilterChain::default();
        assert!(!chain.blocks(&message_from("anyone")).await);
    }

    #[tokio::test]
    async fn sender_rule_blocks_only_that_sender() {
        let chain = FilterChain::senders([ContactId::new("mike")]);
        assert!(chain.blocks(&message_from("mike")).await);
        assert!(!chain.blocks(&message_from("alice")).await);
    }

    #[tokio::test]
    async fn predicate_rule_blocks_on_match() {
        let chain = FilterChain::new(vec![FilterRule::predicate(|m: &Message| {
            m.kind != MessageKind::Text
        })]);

        let media = Message::media(
            MessageKind::Video,
            ContactId::new("alice"),
            Some(RoomId::new("r1")),
        );
        assert!(chain.blocks(&media).await);
        assert!(!chain.blocks(&message_from("alice")).await);
    }

    #[tokio::test]
    async fn any_match_wins_regardless_of_order() {
        let rules = vec![
            FilterRule::predicate(|_: &Message| false),
            FilterRule::Sender(ContactId::new("mike")),
        ];
        let chain = FilterChain::new(rules);
        assert!(chain.blocks(&message_from("mike")).await);
    }
}
