use std::collections::BTreeMap;

use crate::error::Result;
use crate::types::{User, UserList};

use super::bot::{decode, Bot};
use super::lookup::find_by_name;
use super::methods;

impl Bot {
    /// List workspace members
    ///
    /// Served from the login snapshot when present, otherwise fetched with one
    /// `users.list` call.
    pub async fn get_users(&self) -> Result<UserList> {
        let cached = self.snapshot.read().await.users.clone();
        if let Some(members) = cached {
            return Ok(UserList { members });
        }

        let body = self.api_call(methods::USERS_LIST, BTreeMap::new()).await?;
        decode(body)
    }

    /// Find a user by username
    ///
    /// Returns `None` when nobody has that name. If several do, the last one
    /// listed is returned.
    pub async fn get_user(&self, name: &str) -> Result<Option<User>> {
        let list = self.get_users().await?;
        Ok(find_by_name(&list.members, name).cloned())
    }
}
