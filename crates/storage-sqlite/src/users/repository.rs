use wealthtrack_core::constants::{DEFAULT_KYC_STATUS, DEFAULT_RISK_PROFILE};
use wealthtrack_core::users::{NewUser, User, UserRepositoryTrait};
use wealthtrack_core::Result;

use super::model::{NewUserDB, UserDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use crate::schema::users::dsl::*;
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use std::sync::Arc;
use uuid::Uuid;

pub struct UserRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        UserRepository { pool, writer }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn get_user(&self, user_id: &str) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(User::from(user_db))
    }

    fn find_user_by_email(&self, user_email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        let user_db = users
            .filter(email.eq(user_email))
            .first::<UserDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(user_db.map(User::from))
    }

    async fn insert_new_user(&self, new_user: NewUser) -> Result<User> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let new_user_db = NewUserDB::from_domain(
                    Uuid::new_v4().to_string(),
                    new_user,
                    DEFAULT_RISK_PROFILE,
                    DEFAULT_KYC_STATUS,
                );
                let result_db = diesel::insert_into(users::table)
                    .values(&new_user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }

    async fn update_user(&self, user: User) -> Result<User> {
        let user_db = UserDB::from(&user);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<User> {
                let result_db = diesel::update(users.find(user_db.id.clone()))
                    .set(&user_db)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(User::from(result_db))
            })
            .await
    }
}
