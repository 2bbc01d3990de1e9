use serde::Serialize;

use crate::model::*;

/// Point-in-time copy of the store collections the aggregator reads.
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub rooms: Vec<Room>,
    pub bookings: Vec<Booking>,
    pub orders: Vec<Order>,
    pub tasks: Vec<Task>,
    pub issues: Vec<Issue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OccupancyStats {
    pub occupied: usize,
    pub total: usize,
    /// Rounded integer percentage, 0 when there are no rooms.
    pub rate: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct BookingCounts {
    pub confirmed: usize,
    pub active: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct OrderCounts {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub served: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskCounts {
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct IssueCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Report {
    pub occupancy: OccupancyStats,
    pub bookings: BookingCounts,
    pub orders: OrderCounts,
    pub tasks: TaskCounts,
    pub issues: IssueCounts,
}

/// Derive counts and rates from a snapshot. Pure: no store access, no side
/// effects, and empty collections are fine.
pub fn report(snapshot: &Snapshot) -> Report {
    let occupied = snapshot
        .rooms
        .iter()
        .filter(|r| r.status == RoomStatus::Occupied)
        .count();
    let total = snapshot.rooms.len();
    // Divisor floored at 1 so an empty hotel reports 0%, not a panic.
    let rate = ((occupied * 100) as f64 / total.max(1) as f64).round() as u8;

    let mut bookings = BookingCounts::default();
    for b in &snapshot.bookings {
        match b.status {
            BookingStatus::Confirmed => bookings.confirmed += 1,
            BookingStatus::Active => bookings.active += 1,
            BookingStatus::Completed => bookings.completed += 1,
            BookingStatus::Cancelled => bookings.cancelled += 1,
        }
    }

    let mut orders = OrderCounts::default();
    for o in &snapshot.orders {
        match o.status {
            OrderStatus::Pending => orders.pending += 1,
            OrderStatus::Preparing => orders.preparing += 1,
            OrderStatus::Ready => orders.ready += 1,
            OrderStatus::Served => orders.served += 1,
            OrderStatus::Cancelled => orders.cancelled += 1,
        }
    }

    let mut tasks = TaskCounts::default();
    for t in &snapshot.tasks {
        match t.status {
            TaskStatus::Pending => tasks.pending += 1,
            TaskStatus::InProgress => tasks.in_progress += 1,
            TaskStatus::Completed => tasks.completed += 1,
        }
    }

    let mut issues = IssueCounts::default();
    for i in &snapshot.issues {
        match i.status {
            IssueStatus::Open => issues.open += 1,
            IssueStatus::InProgress => issues.in_progress += 1,
            IssueStatus::Resolved => issues.resolved += 1,
        }
    }

    Report {
        occupancy: OccupancyStats {
            occupied,
            total,
            rate,
        },
        bookings,
        orders,
        tasks,
        issues,
    }
}
