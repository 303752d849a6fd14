//! User records as delivered by the remote endpoint.
//!
//! Only the fields the dashboard displays or searches are deserialized; any
//! other keys in the payload are ignored.

use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Company {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub username: String,
    pub email: String,
    pub company: Company,
}

impl User {
    /// First character of the display name, used as the avatar.
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }

    /// Even ids are shown as active.
    pub fn is_active(&self) -> bool {
        self.id % 2 == 0
    }
}
