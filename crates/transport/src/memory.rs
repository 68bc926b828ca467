//! In-memory transport for tests.

use std::{
    collections::{HashMap, HashSet},
    sync::Mutex,
};

use async_trait::async_trait;

use courier_common::{ContactId, Message, OutboundItem, RoomId};

use crate::{
    Result,
    error::Error,
    traits::{TransportRead, TransportSend},
};

/// In-memory transport double backed by `HashMap`s. No real delivery —
/// sends are recorded for inspection by tests.
pub struct InMemoryTransport {
    topics: Mutex<HashMap<RoomId, String>>,
    aliases: Mutex<HashMap<(RoomId, ContactId), String>>,
    names: Mutex<HashMap<ContactId, String>>,
    failing: Mutex<HashSet<RoomId>>,
    sent: Mutex<Vec<(RoomId, OutboundItem)>>,
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self {
            topics: Mutex::new(HashMap::new()),
            aliases: Mutex::new(HashMap::new()),
            names: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn set_topic(&self, room: RoomId, topic: impl Into<String>) {
        let mut topics = self.topics.lock().unwrap_or_else(|e| e.into_inner());
        topics.insert(room, topic.into());
    }

    pub fn set_alias(&self, room: RoomId, contact: ContactId, alias: impl Into<String>) {
        let mut aliases = self.aliases.lock().unwrap_or_else(|e| e.into_inner());
        aliases.insert((room, contact), alias.into());
    }

    pub fn set_name(&self, contact: ContactId, name: impl Into<String>) {
        let mut names = self.names.lock().unwrap_or_else(|e| e.into_inner());
        names.insert(contact, name.into());
    }

    /// Make every subsequent send into `room` fail.
    pub fn fail_sends_to(&self, room: RoomId) {
        let mut failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        failing.insert(room);
    }

    /// Everything sent so far, in send order.
    pub fn sent(&self) -> Vec<(RoomId, OutboundItem)> {
        let sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        sent.clone()
    }

    /// Items sent to a single room, in send order.
    pub fn sent_to(&self, room: &RoomId) -> Vec<OutboundItem> {
        let sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        sent.iter()
            .filter(|(r, _)| r == room)
            .map(|(_, item)| item.clone())
            .collect()
    }

    fn record(&self, room: &RoomId, item: OutboundItem) -> Result<()> {
        let failing = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if failing.contains(room) {
            return Err(Error::unavailable(format!("send to {room} refused")));
        }
        drop(failing);
        let mut sent = self.sent.lock().unwrap_or_else(|e| e.into_inner());
        sent.push((room.clone(), item));
        Ok(())
    }
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransportRead for InMemoryTransport {
    async fn room_topic(&self, room: &RoomId) -> Result<Option<String>> {
        let topics = self.topics.lock().unwrap_or_else(|e| e.into_inner());
        Ok(topics.get(room).cloned())
    }

    async fn room_alias(&self, room: &RoomId, contact: &ContactId) -> Result<Option<String>> {
        let aliases = self.aliases.lock().unwrap_or_else(|e| e.into_inner());
        Ok(aliases.get(&(room.clone(), contact.clone())).cloned())
    }

    async fn contact_name(&self, contact: &ContactId) -> Result<Option<String>> {
        let names = self.names.lock().unwrap_or_else(|e| e.into_inner());
        Ok(names.get(contact).cloned())
    }
}

#[async_trait]
impl TransportSend for InMemoryTransport {
    async fn send_text(&self, room: &RoomId, text: &str) -> Result<()> {
        self.record(room, OutboundItem::Text(text.to_string()))
    }

    async fn forward(&self, room: &RoomId, message: &Message) -> Result<()> {
        self.record(room, OutboundItem::Forward(message.clone()))
    }
}
