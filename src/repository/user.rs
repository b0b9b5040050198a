use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::user::{NewUser, UpdateUser, User};
use crate::repository::errors::RepositoryResult;
use crate::repository::{UserReader, UserWriter};
use crate::schema::users;

/// Diesel implementation of [`UserReader`] and [`UserWriter`].
pub struct DieselUserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> DieselUserRepository<'a> {
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }
}

impl UserReader for DieselUserRepository<'_> {
    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;

        let mut conn = self.pool.get()?;
        let user = users::table.find(id).first::<DbUser>(&mut conn).optional()?;

        Ok(user.map(Into::into))
    }

    fn get_by_username(&self, username: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;

        let mut conn = self.pool.get()?;
        let user = users::table
            .filter(users::username.eq(username))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }

    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;

        let mut conn = self.pool.get()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(Into::into))
    }
}

impl UserWriter for DieselUserRepository<'_> {
    fn create(&self, new_user: &NewUser) -> RepositoryResult<User> {
        use crate::models::user::{NewUser as DbNewUser, User as DbUser};

        let mut conn = self.pool.get()?;
        let insertable: DbNewUser = new_user.into();
        let created = diesel::insert_into(users::table)
            .values(&insertable)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, user_id: i32, updates: &UpdateUser) -> RepositoryResult<User> {
        use crate::models::user::{UpdateUser as DbUpdateUser, User as DbUser};

        let mut conn = self.pool.get()?;
        let db_updates: DbUpdateUser = updates.into();

        let updated = diesel::update(users::table.find(user_id))
            .set(&db_updates)
            .get_result::<DbUser>(&mut conn)?;

        Ok(updated.into())
    }

    fn activate(&self, sig: &str) -> RepositoryResult<Option<User>> {
        use crate::models::user::User as DbUser;

        let mut conn = self.pool.get()?;
        let activated = diesel::update(users::table.filter(users::sig.eq(sig)))
            .set((
                users::is_active.eq(true),
                users::updated_at.eq(chrono::Utc::now().naive_utc()),
            ))
            .get_result::<DbUser>(&mut conn)
            .optional()?;

        Ok(activated.map(Into::into))
    }
}
