use serde::{Deserialize, Serialize};

/// Unix milliseconds, the only time type.
pub type Ms = i64;

pub(crate) fn now_ms() -> Ms {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as Ms
}

// ── Rooms ────────────────────────────────────────────────────────

/// Room status is the single mutable field on a room, driven by
/// booking and housekeeping operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomStatus {
    /// Bookable.
    Vacant,
    /// Has an active booking.
    Occupied,
    /// Mid-cleaning, not bookable.
    #[serde(rename = "Not Ready")]
    NotReady,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: String,
    /// Room category ("Single", "Double", "Suite", ...). Serialized as `type`.
    #[serde(rename = "type")]
    pub kind: String,
    pub status: RoomStatus,
    pub price: f64,
    pub floor: i32,
}

// ── Bookings ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Confirmed,
    Active,
    Completed,
    Cancelled,
}

/// A guest's reserved stay in a room for a date range.
/// Room relations are by id/number string match, not referential integrity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub room_id: String,
    pub room_number: String,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<Role>,
    pub check_in: String,
    pub check_out: String,
    pub status: BookingStatus,
}

/// Caller-supplied fields for `create_booking`. Id and status are assigned
/// by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub room_id: String,
    pub room_number: String,
    pub guest_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_role: Option<Role>,
    pub check_in: String,
    pub check_out: String,
}

// ── Users ────────────────────────────────────────────────────────

/// Staff and guest roles. `Unknown` absorbs unrecognized role strings in
/// persisted data so a stale store never fails to deserialize; serde goes
/// through `as_str`/`parse` to get that fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Manager,
    Receptionist,
    Waiter,
    Cook,
    Housekeeper,
    Customer,
    Unknown,
}

impl Serialize for Role {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Role::parse(&s))
    }
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "Manager",
            Role::Receptionist => "Receptionist",
            Role::Waiter => "Waiter",
            Role::Cook => "Cook",
            Role::Housekeeper => "Housekeeper",
            Role::Customer => "Customer",
            Role::Unknown => "Unknown",
        }
    }

    /// Parse a role string; anything unrecognized maps to `Unknown`.
    pub fn parse(s: &str) -> Role {
        match s {
            "Manager" => Role::Manager,
            "Receptionist" => Role::Receptionist,
            "Waiter" => Role::Waiter,
            "Cook" => Role::Cook,
            "Housekeeper" => Role::Housekeeper,
            "Customer" => Role::Customer,
            _ => Role::Unknown,
        }
    }

    /// Static role-to-route table for post-login redirect.
    pub fn dashboard_path(&self) -> &'static str {
        match self {
            Role::Manager => "/manager-dashboard",
            Role::Receptionist => "/receptionist-dashboard",
            Role::Waiter => "/waiter-dashboard",
            Role::Cook => "/cook-dashboard",
            Role::Housekeeper => "/housekeeper-dashboard",
            Role::Customer => "/customer-dashboard",
            Role::Unknown => "/",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub role: Role,
    pub email: String,
    pub password: String,
}

// ── Menu ─────────────────────────────────────────────────────────

/// Static catalog entry. Read-only from the domain-operations side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u32,
    pub item: String,
    pub price: f64,
    pub category: String,
}

// ── Orders ───────────────────────────────────────────────────────

/// Linear forward machine Pending -> Preparing -> Ready -> Served, with
/// Cancelled reachable from Pending by convention. Not enforced here;
/// `update_order_status` is a plain overwrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: u32,
    pub item: String,
    pub price: f64,
    pub qty: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub items: Vec<OrderLine>,
    /// Caller-supplied; never recomputed from `items`.
    pub total: f64,
    pub status: OrderStatus,
    pub table_or_room: String,
    pub ordered_by: String,
    pub timestamp: Ms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub items: Vec<OrderLine>,
    pub total: f64,
    pub table_or_room: String,
    pub ordered_by: String,
}

// ── Housekeeping tasks ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Cleaning,
    #[serde(rename = "Deep Clean")]
    DeepClean,
    Inspection,
}

impl TaskKind {
    /// Cleaning kinds take the room out of service while pending.
    pub fn blocks_room(&self) -> bool {
        matches!(self, TaskKind::Cleaning | TaskKind::DeepClean)
    }
}

/// A housekeeping assignment against a room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub room_id: String,
    pub room_number: String,
    pub assignee: String,
    pub status: TaskStatus,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTask {
    pub room_id: String,
    pub room_number: String,
    pub assignee: String,
    #[serde(rename = "type")]
    pub kind: TaskKind,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

// ── Maintenance issues ───────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssuePriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IssueStatus {
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
}

/// A reported maintenance problem. No room-status coupling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub room_id: String,
    pub room_number: String,
    pub description: String,
    pub priority: IssuePriority,
    pub status: IssueStatus,
    pub reported_by: String,
    pub timestamp: Ms,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssue {
    pub room_id: String,
    pub room_number: String,
    pub description: String,
    pub priority: IssuePriority,
    pub reported_by: String,
}
