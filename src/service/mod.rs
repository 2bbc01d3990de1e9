mod analytics;
mod auth;
mod error;
mod mutations;
mod queries;
mod seed;

pub use analytics::{
    BookingCounts, IssueCounts, OccupancyStats, OrderCounts, Report, Snapshot, TaskCounts, report,
};
pub use error::ServiceError;
pub use seed::{CollectionOutcome, DEFAULT_USERS, DirFixtures, FixtureSource, SeedReport};

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

use ulid::Ulid;

use crate::notify::{Change, ChangeHub, Collection};
use crate::store::Store;

/// The data service: owns the persisted store and the change hub.
///
/// Every operation is a single synchronous read-modify-write critical
/// section over the store, so the paired writes of a compound operation
/// (booking + room, task + room) cannot interleave with another writer in
/// this process. A failure between the two writes still leaves the slots
/// inconsistent; see `Store` for that limitation.
pub struct HotelService {
    store: Mutex<Store>,
    changes: ChangeHub,
}

/// ULIDs are time-ordered and collision-safe under rapid succession,
/// unlike raw timestamp ids.
pub(crate) fn next_id() -> String {
    Ulid::new().to_string()
}

impl HotelService {
    /// Open (or create) a service over the data directory at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, ServiceError> {
        let store = Store::open(dir).map_err(ServiceError::store)?;
        Ok(Self {
            store: Mutex::new(store),
            changes: ChangeHub::new(),
        })
    }

    /// Subscribe to mutation notifications.
    pub fn subscribe(&self) -> std::sync::mpsc::Receiver<Change> {
        self.changes.subscribe()
    }

    /// A poisoned lock means a panic mid-operation; slot writes are atomic,
    /// so the store itself is still usable and the guard is recovered.
    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn publish(&self, collection: Collection, id: &str) {
        self.changes.publish(Change::new(collection, id));
    }
}
