//! Mock user repository shared by the user handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::foundation::{StorageError, Timestamp, UserId};
use crate::domain::user::{User, UserError};
use crate::ports::UserRepository;

pub(crate) struct StoredUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password: String,
}

pub(crate) struct MockUserRepository {
    pub users: Mutex<Vec<StoredUser>>,
    pub should_fail: bool,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(Vec::new()),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::new()
        }
    }

    pub fn with_user(self, name: &str, email: &str, password: &str) -> Self {
        {
            let mut users = self.users.lock().unwrap();
            let id = UserId::from_i64(users.len() as i64 + 1);
            users.push(StoredUser {
                id,
                name: name.to_string(),
                email: email.to_string(),
                password: password.to_string(),
            });
        }
        self
    }

    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn insert(&self, name: &str, email: &str, password: &str) -> Result<UserId, UserError> {
        if self.should_fail {
            return Err(StorageError::query("connection refused").into());
        }
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == email) {
            return Err(UserError::DuplicateEmail);
        }
        let id = UserId::from_i64(users.len() as i64 + 1);
        users.push(StoredUser {
            id,
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        });
        Ok(id)
    }

    async fn authenticate(&self, email: &str, password: &str) -> Result<(UserId, String), UserError> {
        if self.should_fail {
            return Err(StorageError::query("connection refused").into());
        }
        self.users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email && u.password == password)
            .map(|u| (u.id, u.name.clone()))
            .ok_or(UserError::InvalidCredentials)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, StorageError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .map(|u| User {
                id: u.id,
                name: u.name.clone(),
                email: u.email.clone(),
                created: Timestamp::now(),
            }))
    }

    async fn close(&self) {}
}
