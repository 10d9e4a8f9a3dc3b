use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public view of a user, the stored credential is never serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub is_active: bool,
}

impl From<entity::user::Model> for UserDto {
    fn from(model: entity::user::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            firstname: model.firstname,
            lastname: model.lastname,
            email: model.email,
            is_active: model.is_active,
        }
    }
}
