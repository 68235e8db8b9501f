use sea_orm::Set;
use serde::{Deserialize, Serialize};

use crate::{db::entities::user_login, error::AppError};

pub const ENTITY_NAME: &str = "userLogin";

/// Wire representation of a login. Fields are optional so the same type serves
/// create, full update, and merge-patch bodies.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct UserLoginDto {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Both required columns, checked present.
#[derive(Clone)]
pub struct UserLoginFields {
    pub username: String,
    pub password: String,
}

impl UserLoginDto {
    /// Create and full update require both columns.
    pub fn validated(&self) -> Result<UserLoginFields, AppError> {
        let username = self.username.clone().ok_or_else(|| required("username"))?;
        let password = self.password.clone().ok_or_else(|| required("password"))?;
        Ok(UserLoginFields { username, password })
    }

    pub fn merge_into(self, active: &mut user_login::ActiveModel) {
        if let Some(username) = self.username {
            active.username = Set(username);
        }
        if let Some(password) = self.password {
            active.password = Set(password);
        }
    }
}

impl UserLoginFields {
    pub fn into_active_model(self) -> user_login::ActiveModel {
        user_login::ActiveModel {
            username: Set(self.username),
            password: Set(self.password),
            ..Default::default()
        }
    }

    pub fn overwrite(self, active: &mut user_login::ActiveModel) {
        active.username = Set(self.username);
        active.password = Set(self.password);
    }
}

fn required(field: &str) -> AppError {
    AppError::validation(format!("{field} must not be null"), ENTITY_NAME, "validation")
}

impl From<user_login::Model> for UserLoginDto {
    fn from(model: user_login::Model) -> Self {
        Self {
            id: Some(model.id),
            username: Some(model.username),
            password: Some(model.password),
        }
    }
}

impl std::fmt::Debug for UserLoginDto {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginDto")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

impl std::fmt::Debug for UserLoginFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserLoginFields")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Identity equality: equal only when both carry the same id.
///
/// A value without an id is unequal even to itself, so this is not `Eq`.
impl PartialEq for UserLoginDto {
    fn eq(&self, other: &Self) -> bool {
        self.id.is_some() && self.id == other.id
    }
}
