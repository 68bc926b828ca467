//! Fan inbound events out to every registered connector.

use std::sync::Arc;

use {
    tokio::{sync::mpsc, task::JoinHandle},
    tracing::debug,
};

use {courier_common::Message, courier_transport::Transport};

use crate::registry::ConnectorRegistry;

/// Hand one inbound message to every connector, each on its own task.
///
/// Connectors share no mutable state, so their relative completion order is
/// unspecified. The returned handles let callers await quiescence; the run
/// loop simply drops them.
pub fn dispatch(
    registry: &ConnectorRegistry,
    transport: &Arc<dyn Transport>,
    message: &Message,
) -> Vec<JoinHandle<()>> {
    registry
        .iter()
        .map(|connector| {
            let connector = Arc::clone(connector);
            let transport = Arc::clone(transport);
            let message = message.clone();
            tokio::spawn(async move {
                connector.handle(transport.as_ref(), &message).await;
            })
        })
        .collect()
}

/// Consume inbound messages until the transport closes the channel.
pub async fn run(
    registry: Arc<ConnectorRegistry>,
    transport: Arc<dyn Transport>,
    mut inbound: mpsc::Receiver<Message>,
) {
    while let Some(message) = inbound.recv().await {
        debug!(
            talker = %message.talker,
            kind = %message.kind,
            room = message.room.as_ref().map(courier_common::RoomId::as_str),
            "inbound message"
        );
        dispatch(&registry, &transport, &message);
    }
    debug!("inbound channel closed, relay loop exiting");
}
