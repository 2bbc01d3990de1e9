use std::sync::Mutex;
use std::sync::mpsc::{self, Receiver, Sender};

/// Which collection a change touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Rooms,
    Users,
    Bookings,
    Orders,
    Tasks,
    Issues,
}

/// A mutation notification: the collection and the id of the record that
/// changed. Compound operations publish one change per touched collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub collection: Collection,
    pub id: String,
}

impl Change {
    pub fn new(collection: Collection, id: impl Into<String>) -> Self {
        Self {
            collection,
            id: id.into(),
        }
    }
}

/// Fan-out hub for store mutations, replacing fixed-interval polling on the
/// consumer side. Subscribers that drop their receiver are pruned on the
/// next publish.
pub struct ChangeHub {
    subscribers: Mutex<Vec<Sender<Change>>>,
}

impl Default for ChangeHub {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeHub {
    pub fn new() -> Self {
        Self {
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Subscribe to all subsequent changes.
    pub fn subscribe(&self) -> Receiver<Change> {
        let (tx, rx) = mpsc::channel();
        let mut subs = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subs.push(tx);
        rx
    }

    /// Send a change to every live subscriber. No-op if nobody is listening.
    pub fn publish(&self, change: Change) {
        let mut subs = self.subscribers.lock().unwrap_or_else(|e| e.into_inner());
        subs.retain(|tx| tx.send(change.clone()).is_ok());
    }
}
