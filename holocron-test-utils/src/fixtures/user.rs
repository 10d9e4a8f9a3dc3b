use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert an active user whose email is derived from `username`.
    pub async fn insert_mock_user(&self, username: &str) -> Result<UserModel, TestError> {
        let user = entity::user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            firstname: ActiveValue::Set("Test".to_string()),
            lastname: ActiveValue::Set("User".to_string()),
            email: ActiveValue::Set(format!("{}@holocron.test", username)),
            password: ActiveValue::Set("not-a-real-hash".to_string()),
            is_active: ActiveValue::Set(true),
            subscription_date: ActiveValue::Set(chrono::Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(user.insert(&self.setup.db).await?)
    }
}
