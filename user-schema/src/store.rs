//! An in-memory implementation of the `service` methods.
use crate::service::{AddUserRequest, AddUserResponse, GetUserRequest, GetUserResponse};
use crate::user::User;
use std::collections::HashMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid user id: {0}")]
    InvalidUserId(i32),
}

/// Users by id. Adding a user with an existing id replaces it.
#[derive(Debug, Clone, Default)]
pub struct UserStore {
    users: HashMap<i32, User>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `request.user`. The id `0` is reserved for unset ids and rejected.
    pub fn add_user(&mut self, request: AddUserRequest) -> Result<AddUserResponse, StoreError> {
        let user = request.user;
        if user.user_id == 0 {
            return Err(StoreError::InvalidUserId(user.user_id));
        }

        tracing::debug!(user_id = user.user_id, name = %user.name, "Adding user");
        self.users.insert(user.user_id, user);

        Ok(AddUserResponse {})
    }

    pub fn get_user(&self, request: &GetUserRequest) -> GetUserResponse {
        GetUserResponse {
            user: self.users.get(&request.user_id).cloned(),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::TARZAN;

    #[test]
    fn added_users_can_be_fetched_by_id() {
        let mut store = UserStore::new();

        let response = store.add_user(AddUserRequest {
            user: TARZAN.clone(),
        });

        assert_eq!(response, Ok(AddUserResponse {}));
        assert_eq!(
            store.get_user(&GetUserRequest { user_id: 123 }).user.as_ref(),
            Some(&*TARZAN)
        );
    }

    #[test]
    fn unknown_ids_have_no_user() {
        let store = UserStore::new();

        assert_eq!(
            store.get_user(&GetUserRequest { user_id: 7 }),
            GetUserResponse { user: None }
        );
    }

    #[test]
    fn user_id_zero_is_rejected() {
        let mut store = UserStore::new();
        let user = User {
            user_id: 0,
            ..TARZAN.clone()
        };

        let error = store.add_user(AddUserRequest { user }).unwrap_err();

        assert_eq!(error, StoreError::InvalidUserId(0));
        assert_eq!(error.to_string(), "Invalid user id: 0");
        assert!(store.is_empty());
    }

    #[test]
    fn adding_an_existing_id_replaces_the_user() {
        let mut store = UserStore::new();
        let renamed = User {
            name: "Lord Greystoke".to_string(),
            ..TARZAN.clone()
        };

        store
            .add_user(AddUserRequest {
                user: TARZAN.clone(),
            })
            .unwrap();
        store.add_user(AddUserRequest { user: renamed }).unwrap();

        assert_eq!(store.len(), 1);
        let stored = store.get_user(&GetUserRequest { user_id: 123 }).user;
        assert_eq!(stored.map(|u| u.name), Some("Lord Greystoke".to_string()));
    }
}
