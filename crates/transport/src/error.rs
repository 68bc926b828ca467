use std::error::Error as StdError;

/// Crate-wide result type for transport operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Typed transport errors shared across the boundary traits.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A target room is not known to the transport.
    #[error("unknown room: {room_id}")]
    UnknownRoom { room_id: String },

    /// The connection is not ready to carry the operation.
    #[error("transport unavailable: {message}")]
    Unavailable { message: String },

    /// Wrapped source error from the underlying chat session library.
    #[error("transport operation failed: {context}: {source}")]
    External {
        context: String,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl Error {
    #[must_use]
    pub fn unknown_room(room_id: impl std::fmt::Display) -> Self {
        Self::UnknownRoom {
            room_id: room_id.to_string(),
        }
    }

    #[must_use]
    pub fn unavailable(message: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            message: message.to_string(),
        }
    }

    #[must_use]
    pub fn external(
        context: impl Into<String>,
        source: impl StdError + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            context: context.into(),
            source: Box::new(source),
        }
    }
}
