//! innkeep: the data-service core of a hotel management demo.
//!
//! A slot-persisted entity store (rooms, users, menu, bookings, orders,
//! housekeeping tasks, maintenance issues), domain operations with
//! room-status coupling, a pure analytics aggregator, fixture seeding, and
//! credential lookup with session markers. No server, no async runtime:
//! everything is synchronous and in-process, with a change hub replacing
//! UI polling.

pub mod model;
pub mod notify;
pub mod service;
pub mod store;

pub use service::{HotelService, ServiceError};
