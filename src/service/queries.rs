use crate::model::*;
use crate::store::Slot;

use super::HotelService;
use super::analytics::{Report, Snapshot, report};

impl HotelService {
    pub fn rooms(&self) -> Vec<Room> {
        self.store().load(Slot::Rooms)
    }

    pub fn users(&self) -> Vec<User> {
        self.store().load(Slot::Users)
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.store().load(Slot::Menu)
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.store().load(Slot::Bookings)
    }

    pub fn orders(&self) -> Vec<Order> {
        self.store().load(Slot::Orders)
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.store().load(Slot::Tasks)
    }

    pub fn issues(&self) -> Vec<Issue> {
        self.store().load(Slot::Issues)
    }

    /// Bookings visible to a role: customers see only their own stays
    /// (guest-name match), staff roles see everything.
    pub fn bookings_for(&self, role: Role, name: &str) -> Vec<Booking> {
        let bookings = self.bookings();
        match role {
            Role::Customer => bookings
                .into_iter()
                .filter(|b| b.guest_name.eq_ignore_ascii_case(name))
                .collect(),
            _ => bookings,
        }
    }

    /// Orders visible to a role: customers see only what they ordered.
    pub fn orders_for(&self, role: Role, name: &str) -> Vec<Order> {
        let orders = self.orders();
        match role {
            Role::Customer => orders
                .into_iter()
                .filter(|o| o.ordered_by.eq_ignore_ascii_case(name))
                .collect(),
            _ => orders,
        }
    }

    /// Point-in-time copy of the collections the analytics aggregator
    /// reads. Taken under one lock so the snapshot is internally coherent.
    pub fn snapshot(&self) -> Snapshot {
        let store = self.store();
        Snapshot {
            rooms: store.load(Slot::Rooms),
            bookings: store.load(Slot::Bookings),
            orders: store.load(Slot::Orders),
            tasks: store.load(Slot::Tasks),
            issues: store.load(Slot::Issues),
        }
    }

    pub fn analytics(&self) -> Report {
        report(&self.snapshot())
    }
}
