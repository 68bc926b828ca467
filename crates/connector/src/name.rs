//! Attribution naming: sender display names and room short names.

use {once_cell::sync::Lazy, regex::Regex, tracing::debug};

use {courier_common::Message, courier_transport::TransportRead};

/// Fallback when neither a room alias nor a global name resolves.
pub const NONAME: &str = "Noname";

/// Fallback callers substitute when no room short name resolves.
pub const NOWHERE: &str = "Nowhere";

/// Source text of [`DEFAULT_TOPIC_PATTERN`]: captures the trailing
/// whitespace-delimited token group (last one or two words) of a topic.
pub const DEFAULT_TOPIC_PATTERN_SOURCE: &str = r"\s*([^\s]*\s*[^\s]+)$";

/// `"Wechaty Developers' Home 8"` → `"Home 8"`.
#[allow(clippy::unwrap_used)] // fixed literal, cannot fail
static DEFAULT_TOPIC_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_TOPIC_PATTERN_SOURCE).unwrap());

/// Resolves the attribution names for a message: who sent it, and a short
/// label for where it came from.
///
/// Never fails — missing data and failed lookups degrade to fallbacks.
#[derive(Debug, Clone)]
pub struct NameResolver {
    matcher: Regex,
}

impl Default for NameResolver {
    fn default() -> Self {
        Self {
            matcher: DEFAULT_TOPIC_PATTERN.clone(),
        }
    }
}

impl NameResolver {
    /// Resolver with a custom topic pattern; capture group 1 becomes the
    /// room short name.
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            matcher: Regex::new(pattern)?,
        })
    }

    /// The sender's room-scoped alias if the origin room defines one, else
    /// the contact's global display name, else [`NONAME`].
    pub async fn sender_display_name(
        &self,
        transport: &dyn TransportRead,
        message: &Message,
    ) -> String {
        if let Some(room) = &message.room {
            match transport.room_alias(room, &message.talker).await {
                Ok(Some(alias)) if !alias.is_empty() => return alias,
                Ok(_) => {},
                Err(e) => debug!(room = %room, error = %e, "room alias lookup failed"),
            }
        }
        match transport.contact_name(&message.talker).await {
            Ok(Some(name)) if !name.is_empty() => name,
            Ok(_) => NONAME.to_string(),
            Err(e) => {
                debug!(contact = %message.talker, error = %e, "contact name lookup failed");
                NONAME.to_string()
            },
        }
    }

    /// Short label for the origin room, derived from its topic.
    ///
    /// Absent when the message has no origin room, the room has no topic,
    /// or the topic does not match the pattern. Callers substitute
    /// [`NOWHERE`].
    pub async fn room_short_name(
        &self,
        transport: &dyn TransportRead,
        message: &Message,
    ) -> Option<String> {
        let room = message.room.as_ref()?;
        let topic = match transport.room_topic(room).await {
            Ok(Some(topic)) => topic,
            Ok(None) => return None,
            Err(e) => {
                debug!(room = %room, error = %e, "room topic lookup failed");
                return None;
            },
        };
        self.matcher
            .captures(&topic)
            .and_then(|captures| captures.get(1))
            .map(|group| group.as_str().to_string())
    }
}
