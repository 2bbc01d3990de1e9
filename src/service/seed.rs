use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::model::*;
use crate::notify::Collection;
use crate::store::{Slot, Store};

use super::auth::{SESSION_ROLE, SESSION_USER};
use super::{HotelService, ServiceError, next_id};

/// Per-collection fixture endpoints. Each load is independent: one failing
/// collection must not abort the others.
pub trait FixtureSource {
    fn rooms(&self) -> io::Result<Vec<Room>>;
    fn users(&self) -> io::Result<Vec<User>>;
    fn menu(&self) -> io::Result<Vec<MenuItem>>;
    fn bookings(&self) -> io::Result<Vec<Booking>>;
    fn orders(&self) -> io::Result<Vec<Order>>;
    fn tasks(&self) -> io::Result<Vec<Task>>;
    fn issues(&self) -> io::Result<Vec<Issue>>;
}

/// Reads fixture collections from `<dir>/<slot>.json`.
pub struct DirFixtures {
    dir: PathBuf,
}

impl DirFixtures {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read<T: DeserializeOwned>(&self, slot: Slot) -> io::Result<Vec<T>> {
        let file = File::open(self.dir.join(slot.file_name()))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl FixtureSource for DirFixtures {
    fn rooms(&self) -> io::Result<Vec<Room>> {
        self.read(Slot::Rooms)
    }
    fn users(&self) -> io::Result<Vec<User>> {
        self.read(Slot::Users)
    }
    fn menu(&self) -> io::Result<Vec<MenuItem>> {
        self.read(Slot::Menu)
    }
    fn bookings(&self) -> io::Result<Vec<Booking>> {
        self.read(Slot::Bookings)
    }
    fn orders(&self) -> io::Result<Vec<Order>> {
        self.read(Slot::Orders)
    }
    fn tasks(&self) -> io::Result<Vec<Task>> {
        self.read(Slot::Tasks)
    }
    fn issues(&self) -> io::Result<Vec<Issue>> {
        self.read(Slot::Issues)
    }
}

/// How one collection fared during seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionOutcome {
    /// Fixture loaded; holds the record count.
    Loaded(usize),
    /// Fixture load failed; the collection was seeded empty. Holds the
    /// reason so callers can surface the degradation instead of hiding it.
    Defaulted(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub outcomes: Vec<(Slot, CollectionOutcome)>,
    /// True when the store was already initialized and seeding was skipped.
    pub skipped: bool,
}

impl SeedReport {
    fn skipped() -> Self {
        Self {
            outcomes: Vec::new(),
            skipped: true,
        }
    }

    /// At least one collection fell back to empty.
    pub fn is_partial(&self) -> bool {
        !self.skipped
            && self
                .outcomes
                .iter()
                .any(|(_, o)| matches!(o, CollectionOutcome::Defaulted(_)))
    }
}

/// One default account per role, (re-)ensured additively on every bootstrap
/// pass. Demo credentials, stored plain like the rest of the fixture data.
pub const DEFAULT_USERS: &[(&str, Role, &str, &str)] = &[
    ("Grace Holloway", Role::Manager, "manager@innkeep.demo", "manager123"),
    ("Riya Patel", Role::Receptionist, "receptionist@innkeep.demo", "reception123"),
    ("Walt Okafor", Role::Waiter, "waiter@innkeep.demo", "waiter123"),
    ("Carlos Mendes", Role::Cook, "cook@innkeep.demo", "cook123"),
    ("Hana Suzuki", Role::Housekeeper, "housekeeper@innkeep.demo", "keeper123"),
    ("Casey Bloom", Role::Customer, "customer@innkeep.demo", "customer123"),
];

impl HotelService {
    /// One-time population from fixtures. Skipped entirely once the
    /// initialized flag is set. Collections load independently; a failed
    /// load seeds that collection empty and shows up in the report as
    /// `Defaulted` instead of aborting the rest. The flag is written only
    /// after every collection has been attempted.
    pub fn initialize(&self, fixtures: &dyn FixtureSource) -> Result<SeedReport, ServiceError> {
        let store = self.store();
        if store.is_initialized() {
            return Ok(SeedReport::skipped());
        }

        let mut outcomes = Vec::new();
        seed_slot(&store, Slot::Rooms, fixtures.rooms(), &mut outcomes)?;
        seed_slot(&store, Slot::Users, fixtures.users(), &mut outcomes)?;
        seed_slot(&store, Slot::Menu, fixtures.menu(), &mut outcomes)?;
        seed_slot(&store, Slot::Bookings, fixtures.bookings(), &mut outcomes)?;
        seed_slot(&store, Slot::Orders, fixtures.orders(), &mut outcomes)?;
        seed_slot(&store, Slot::Tasks, fixtures.tasks(), &mut outcomes)?;
        seed_slot(&store, Slot::Issues, fixtures.issues(), &mut outcomes)?;
        store.mark_initialized().map_err(ServiceError::store)?;
        drop(store);

        let report = SeedReport {
            outcomes,
            skipped: false,
        };
        if report.is_partial() {
            warn!("store seeded with empty fallbacks for some collections");
        } else {
            info!("store seeded from fixtures");
        }
        Ok(report)
    }

    /// Ensure one default account per role exists, matched by
    /// case-insensitive email. Create-if-absent only; existing accounts are
    /// never overwritten. Safe to call on every startup. Returns how many
    /// accounts were appended.
    pub fn ensure_default_users(&self) -> Result<usize, ServiceError> {
        let store = self.store();
        let mut users: Vec<User> = store.load(Slot::Users);
        let mut added_ids = Vec::new();
        for (name, role, email, password) in DEFAULT_USERS {
            if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
                continue;
            }
            let user = User {
                id: next_id(),
                name: (*name).to_string(),
                role: *role,
                email: (*email).to_string(),
                password: (*password).to_string(),
            };
            added_ids.push(user.id.clone());
            users.push(user);
        }
        if !added_ids.is_empty() {
            store.save(Slot::Users, &users).map_err(ServiceError::store)?;
        }
        drop(store);

        if !added_ids.is_empty() {
            info!(added = added_ids.len(), "default accounts ensured");
            for id in &added_ids {
                self.publish(Collection::Users, id);
            }
        }
        Ok(added_ids.len())
    }

    /// Wipe all persisted state: every collection, the initialized flag,
    /// and both session markers. The next `initialize` call re-seeds from
    /// fixtures.
    pub fn reset(&self) -> Result<(), ServiceError> {
        let store = self.store();
        store.reset().map_err(ServiceError::store)?;
        store.clear_text(SESSION_USER).map_err(ServiceError::store)?;
        store.clear_text(SESSION_ROLE).map_err(ServiceError::store)?;
        drop(store);

        info!("store reset to pre-seed state");
        Ok(())
    }
}

fn seed_slot<T: Serialize>(
    store: &Store,
    slot: Slot,
    loaded: io::Result<Vec<T>>,
    outcomes: &mut Vec<(Slot, CollectionOutcome)>,
) -> Result<(), ServiceError> {
    let (items, outcome) = match loaded {
        Ok(items) => {
            let n = items.len();
            (items, CollectionOutcome::Loaded(n))
        }
        Err(e) => {
            warn!(slot = %slot, error = %e, "fixture load failed, seeding empty");
            (Vec::new(), CollectionOutcome::Defaulted(e.to_string()))
        }
    };
    store.save(slot, &items).map_err(ServiceError::store)?;
    outcomes.push((slot, outcome));
    Ok(())
}
