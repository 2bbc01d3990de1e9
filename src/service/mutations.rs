use tracing::info;

use crate::model::*;
use crate::notify::Collection;
use crate::store::Slot;

use super::{HotelService, ServiceError, next_id};

impl HotelService {
    /// Book a room: the booking is prepended (newest first) with status
    /// Confirmed and the referenced room flips to Occupied. Date-overlap
    /// validation is the caller's responsibility; booking a room that is
    /// already occupied is not blocked here.
    pub fn create_booking(&self, input: NewBooking) -> Result<Booking, ServiceError> {
        let store = self.store();
        let mut rooms: Vec<Room> = store.load(Slot::Rooms);
        let room = rooms
            .iter_mut()
            .find(|r| r.id == input.room_id)
            .ok_or_else(|| ServiceError::not_found("room", &input.room_id))?;
        room.status = RoomStatus::Occupied;

        let booking = Booking {
            id: next_id(),
            room_id: input.room_id,
            room_number: input.room_number,
            guest_name: input.guest_name,
            user_role: input.user_role,
            check_in: input.check_in,
            check_out: input.check_out,
            status: BookingStatus::Confirmed,
        };
        let mut bookings: Vec<Booking> = store.load(Slot::Bookings);
        bookings.insert(0, booking.clone());

        store.save(Slot::Bookings, &bookings).map_err(ServiceError::store)?;
        store.save(Slot::Rooms, &rooms).map_err(ServiceError::store)?;
        drop(store);

        info!(booking = %booking.id, room = %booking.room_id, guest = %booking.guest_name, "booking created");
        self.publish(Collection::Bookings, &booking.id);
        self.publish(Collection::Rooms, &booking.room_id);
        Ok(booking)
    }

    /// Cancel a booking and release its room to Vacant. The room reference
    /// is a plain string match; a dangling reference is tolerated and the
    /// booking is still cancelled.
    pub fn cancel_booking(&self, id: &str) -> Result<Booking, ServiceError> {
        let store = self.store();
        let mut bookings: Vec<Booking> = store.load(Slot::Bookings);
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| ServiceError::not_found("booking", id))?;
        booking.status = BookingStatus::Cancelled;
        let booking = booking.clone();

        let mut rooms: Vec<Room> = store.load(Slot::Rooms);
        let mut room_released = false;
        if let Some(room) = rooms.iter_mut().find(|r| r.id == booking.room_id) {
            room.status = RoomStatus::Vacant;
            room_released = true;
        }

        store.save(Slot::Bookings, &bookings).map_err(ServiceError::store)?;
        if room_released {
            store.save(Slot::Rooms, &rooms).map_err(ServiceError::store)?;
        }
        drop(store);

        info!(booking = %booking.id, room = %booking.room_id, "booking cancelled");
        self.publish(Collection::Bookings, &booking.id);
        if room_released {
            self.publish(Collection::Rooms, &booking.room_id);
        }
        Ok(booking)
    }

    /// Create an order with status Pending and the current timestamp,
    /// prepended newest first. `total` is trusted as supplied and never
    /// recomputed from the lines.
    pub fn create_order(&self, input: NewOrder) -> Result<Order, ServiceError> {
        let order = Order {
            id: next_id(),
            items: input.items,
            total: input.total,
            status: OrderStatus::Pending,
            table_or_room: input.table_or_room,
            ordered_by: input.ordered_by,
            timestamp: now_ms(),
        };

        let store = self.store();
        let mut orders: Vec<Order> = store.load(Slot::Orders);
        orders.insert(0, order.clone());
        store.save(Slot::Orders, &orders).map_err(ServiceError::store)?;
        drop(store);

        info!(order = %order.id, table_or_room = %order.table_or_room, "order created");
        self.publish(Collection::Orders, &order.id);
        Ok(order)
    }

    /// Overwrite an order's status. No transition validity check: the
    /// forward Pending/Preparing/Ready/Served chain is a convention of the
    /// callers, not a rule of this layer.
    pub fn update_order_status(&self, id: &str, status: OrderStatus) -> Result<Order, ServiceError> {
        let store = self.store();
        let mut orders: Vec<Order> = store.load(Slot::Orders);
        let order = orders
            .iter_mut()
            .find(|o| o.id == id)
            .ok_or_else(|| ServiceError::not_found("order", id))?;
        order.status = status;
        let order = order.clone();
        store.save(Slot::Orders, &orders).map_err(ServiceError::store)?;
        drop(store);

        info!(order = %order.id, status = ?status, "order status updated");
        self.publish(Collection::Orders, &order.id);
        Ok(order)
    }

    /// Create a housekeeping task with status Pending. Cleaning kinds take
    /// the referenced room out of service (Not Ready) and require the room
    /// to exist; inspections never touch the room.
    pub fn create_task(&self, input: NewTask) -> Result<Task, ServiceError> {
        let store = self.store();
        let mut rooms: Vec<Room> = store.load(Slot::Rooms);
        let mut room_blocked = false;
        if input.kind.blocks_room() {
            let room = rooms
                .iter_mut()
                .find(|r| r.id == input.room_id)
                .ok_or_else(|| ServiceError::not_found("room", &input.room_id))?;
            room.status = RoomStatus::NotReady;
            room_blocked = true;
        }

        let task = Task {
            id: next_id(),
            room_id: input.room_id,
            room_number: input.room_number,
            assignee: input.assignee,
            status: TaskStatus::Pending,
            kind: input.kind,
            date: input.date,
            notes: input.notes,
        };
        let mut tasks: Vec<Task> = store.load(Slot::Tasks);
        tasks.insert(0, task.clone());

        store.save(Slot::Tasks, &tasks).map_err(ServiceError::store)?;
        if room_blocked {
            store.save(Slot::Rooms, &rooms).map_err(ServiceError::store)?;
        }
        drop(store);

        info!(task = %task.id, room = %task.room_id, kind = ?task.kind, "housekeeping task created");
        self.publish(Collection::Tasks, &task.id);
        if room_blocked {
            self.publish(Collection::Rooms, &task.room_id);
        }
        Ok(task)
    }

    /// Overwrite a task's status. Completing a task returns its room to
    /// Vacant (dangling room references tolerated, as in `cancel_booking`).
    pub fn update_task_status(&self, id: &str, status: TaskStatus) -> Result<Task, ServiceError> {
        let store = self.store();
        let mut tasks: Vec<Task> = store.load(Slot::Tasks);
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| ServiceError::not_found("task", id))?;
        task.status = status;
        let task = task.clone();

        let mut room_released = false;
        let mut rooms: Vec<Room> = Vec::new();
        if status == TaskStatus::Completed {
            rooms = store.load(Slot::Rooms);
            if let Some(room) = rooms.iter_mut().find(|r| r.id == task.room_id) {
                room.status = RoomStatus::Vacant;
                room_released = true;
            }
        }

        store.save(Slot::Tasks, &tasks).map_err(ServiceError::store)?;
        if room_released {
            store.save(Slot::Rooms, &rooms).map_err(ServiceError::store)?;
        }
        drop(store);

        info!(task = %task.id, status = ?status, "task status updated");
        self.publish(Collection::Tasks, &task.id);
        if room_released {
            self.publish(Collection::Rooms, &task.room_id);
        }
        Ok(task)
    }

    /// Report a maintenance issue: status Open, current timestamp, prepended
    /// newest first. Issues never couple to room status.
    pub fn create_issue(&self, input: NewIssue) -> Result<Issue, ServiceError> {
        let issue = Issue {
            id: next_id(),
            room_id: input.room_id,
            room_number: input.room_number,
            description: input.description,
            priority: input.priority,
            status: IssueStatus::Open,
            reported_by: input.reported_by,
            timestamp: now_ms(),
        };

        let store = self.store();
        let mut issues: Vec<Issue> = store.load(Slot::Issues);
        issues.insert(0, issue.clone());
        store.save(Slot::Issues, &issues).map_err(ServiceError::store)?;
        drop(store);

        info!(issue = %issue.id, room = %issue.room_id, priority = ?issue.priority, "issue reported");
        self.publish(Collection::Issues, &issue.id);
        Ok(issue)
    }

    /// Overwrite an issue's status.
    pub fn update_issue_status(&self, id: &str, status: IssueStatus) -> Result<Issue, ServiceError> {
        let store = self.store();
        let mut issues: Vec<Issue> = store.load(Slot::Issues);
        let issue = issues
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ServiceError::not_found("issue", id))?;
        issue.status = status;
        let issue = issue.clone();
        store.save(Slot::Issues, &issues).map_err(ServiceError::store)?;
        drop(store);

        info!(issue = %issue.id, status = ?status, "issue status updated");
        self.publish(Collection::Issues, &issue.id);
        Ok(issue)
    }

    /// Directly set a room's status. Used internally by the coupled
    /// operations above and callable standalone.
    pub fn update_room_status(&self, room_id: &str, status: RoomStatus) -> Result<Room, ServiceError> {
        let store = self.store();
        let mut rooms: Vec<Room> = store.load(Slot::Rooms);
        let room = rooms
            .iter_mut()
            .find(|r| r.id == room_id)
            .ok_or_else(|| ServiceError::not_found("room", room_id))?;
        room.status = status;
        let room = room.clone();
        store.save(Slot::Rooms, &rooms).map_err(ServiceError::store)?;
        drop(store);

        info!(room = %room.id, status = ?status, "room status updated");
        self.publish(Collection::Rooms, &room.id);
        Ok(room)
    }
}
