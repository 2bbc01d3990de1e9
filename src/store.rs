use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// One persisted slot per entity collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Rooms,
    Users,
    Menu,
    Bookings,
    Orders,
    Tasks,
    Issues,
}

pub const ALL_SLOTS: [Slot; 7] = [
    Slot::Rooms,
    Slot::Users,
    Slot::Menu,
    Slot::Bookings,
    Slot::Orders,
    Slot::Tasks,
    Slot::Issues,
];

impl Slot {
    pub fn file_name(self) -> &'static str {
        match self {
            Slot::Rooms => "rooms.json",
            Slot::Users => "users.json",
            Slot::Menu => "menu.json",
            Slot::Bookings => "bookings.json",
            Slot::Orders => "orders.json",
            Slot::Tasks => "tasks.json",
            Slot::Issues => "issues.json",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Slot::Rooms => "rooms",
            Slot::Users => "users",
            Slot::Menu => "menu",
            Slot::Bookings => "bookings",
            Slot::Orders => "orders",
            Slot::Tasks => "tasks",
            Slot::Issues => "issues",
        }
    }
}

impl std::fmt::Display for Slot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

const INIT_FLAG: &str = "initialized";

/// Slot-per-collection persisted store under a data directory.
///
/// Each collection is one JSON array file, overwritten whole on save.
/// There are no cross-slot transactions: a compound operation that touches
/// two collections is two independent writes, and a failure between them
/// leaves the slots inconsistent with no rollback. Multiple processes over
/// the same directory are last-write-wins with no versioning.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open (or create) the data directory at `dir`.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Load a collection in stored order. A missing slot is an empty
    /// collection; a malformed slot is logged and treated as empty rather
    /// than failing the caller.
    pub fn load<T: DeserializeOwned>(&self, slot: Slot) -> Vec<T> {
        let path = self.path_for(slot.file_name());
        let file = match File::open(&path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(slot = %slot, error = %e, "failed to open slot, treating as empty");
                return Vec::new();
            }
        };
        match serde_json::from_reader(BufReader::new(file)) {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(slot = %slot, error = %e, "corrupt slot, treating as empty");
                Vec::new()
            }
        }
    }

    /// Replace a collection whole. Atomic at the file level: the payload is
    /// written to a temp file, synced, and renamed over the slot, so readers
    /// never observe a partial write.
    pub fn save<T: Serialize>(&self, slot: Slot, items: &[T]) -> io::Result<()> {
        let payload = serde_json::to_vec_pretty(items)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.write_atomic(slot.file_name(), &payload)
    }

    fn write_atomic(&self, name: &str, payload: &[u8]) -> io::Result<()> {
        let path = self.path_for(name);
        let tmp = path.with_extension("tmp");
        {
            let mut file = File::create(&tmp)?;
            file.write_all(payload)?;
            file.sync_all()?;
        }
        fs::rename(&tmp, &path)
    }

    // ── Initialized flag ─────────────────────────────────────

    pub fn is_initialized(&self) -> bool {
        self.path_for(INIT_FLAG).exists()
    }

    pub fn mark_initialized(&self) -> io::Result<()> {
        self.write_atomic(INIT_FLAG, b"true")
    }

    // ── Plain-text slots (session markers) ───────────────────

    pub fn read_text(&self, name: &str) -> Option<String> {
        fs::read_to_string(self.path_for(name)).ok()
    }

    pub fn write_text(&self, name: &str, value: &str) -> io::Result<()> {
        self.write_atomic(name, value.as_bytes())
    }

    /// Remove a text slot. Removing an absent slot is fine.
    pub fn clear_text(&self, name: &str) -> io::Result<()> {
        self.remove(name)
    }

    /// Remove every collection slot and the initialized flag, returning the
    /// directory to its pre-seed state. The next bootstrap pass re-seeds
    /// from fixtures.
    pub fn reset(&self) -> io::Result<()> {
        for slot in ALL_SLOTS {
            self.remove(slot.file_name())?;
        }
        self.remove(INIT_FLAG)
    }

    fn remove(&self, name: &str) -> io::Result<()> {
        match fs::remove_file(self.path_for(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}
