use tracing::info;

use crate::model::{Role, User};
use crate::notify::Collection;
use crate::store::Slot;

use super::{HotelService, ServiceError, next_id};

/// Session slot names. Two independent markers written separately; if the
/// second write fails the pair can drift, a hazard carried over from the
/// original design rather than papered over.
pub(crate) const SESSION_USER: &str = "session_user";
pub(crate) const SESSION_ROLE: &str = "session_role";

impl HotelService {
    /// Credential check: case-insensitive email, exact password. A match
    /// writes both session markers; no match is `Ok(None)`.
    pub fn login(&self, email: &str, password: &str) -> Result<Option<User>, ServiceError> {
        let store = self.store();
        let users: Vec<User> = store.load(Slot::Users);
        let Some(user) = users
            .into_iter()
            .find(|u| u.email.eq_ignore_ascii_case(email) && u.password == password)
        else {
            return Ok(None);
        };

        let payload = serde_json::to_string(&user).map_err(|e| ServiceError::Store(e.to_string()))?;
        store.write_text(SESSION_USER, &payload).map_err(ServiceError::store)?;
        store.write_text(SESSION_ROLE, user.role.as_str()).map_err(ServiceError::store)?;
        drop(store);

        info!(email = %user.email, role = %user.role, "login");
        Ok(Some(user))
    }

    /// Create a Customer account. Fails with `EmailExists` when the email
    /// is already taken (case-insensitive).
    pub fn register(&self, name: &str, email: &str, password: &str) -> Result<User, ServiceError> {
        let store = self.store();
        let mut users: Vec<User> = store.load(Slot::Users);
        if users.iter().any(|u| u.email.eq_ignore_ascii_case(email)) {
            return Err(ServiceError::EmailExists(email.to_string()));
        }

        let user = User {
            id: next_id(),
            name: name.to_string(),
            role: Role::Customer,
            email: email.to_string(),
            password: password.to_string(),
        };
        users.push(user.clone());
        store.save(Slot::Users, &users).map_err(ServiceError::store)?;
        drop(store);

        info!(email = %user.email, "account registered");
        self.publish(Collection::Users, &user.id);
        Ok(user)
    }

    /// Clear both session markers.
    pub fn logout(&self) -> Result<(), ServiceError> {
        let store = self.store();
        store.clear_text(SESSION_USER).map_err(ServiceError::store)?;
        store.clear_text(SESSION_ROLE).map_err(ServiceError::store)?;
        Ok(())
    }

    pub fn current_user(&self) -> Option<User> {
        let text = self.store().read_text(SESSION_USER)?;
        serde_json::from_str(&text).ok()
    }

    pub fn current_role(&self) -> Option<Role> {
        let text = self.store().read_text(SESSION_ROLE)?;
        Some(Role::parse(&text))
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user().is_some()
    }
}
