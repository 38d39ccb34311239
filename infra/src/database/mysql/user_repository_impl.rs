//! MySQL implementation of UserRepository

use async_trait::async_trait;

use jb_core::domain::entities::User;
use jb_core::domain::Record;
use jb_core::errors::DomainError;
use jb_core::repositories::{RecordRepository, UserRepository};

use crate::database::error::map_sqlx_error;

use super::table::{MySqlRecordRepository, RowReader, Table};

impl MySqlRecordRepository<User> {
    async fn fetch_one_where(
        &self,
        condition: &str,
        binds: &[&str],
    ) -> Result<Option<User>, DomainError> {
        let mut query = Self::select();
        query.push(format!(" WHERE {}", condition));
        let sql = query.into_sql();

        let mut statement = sqlx::query(&sql);
        for value in binds {
            statement = statement.bind(*value);
        }

        let row = statement
            .fetch_optional(self.pool())
            .await
            .map_err(|e| map_sqlx_error(User::RESOURCE, e))?;

        row.map(|row| User::from_row(&RowReader::new(&row)))
            .transpose()
            .map_err(|e| map_sqlx_error(User::RESOURCE, e))
    }
}

#[async_trait]
impl UserRepository for MySqlRecordRepository<User> {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        tracing::debug!(email = email, "Looking up user by email");
        self.fetch_one_where("`email` = ? ORDER BY `user_id` LIMIT 1", &[email])
            .await
    }

    async fn find_by_credentials(
        &self,
        email: &str,
        phone: &str,
    ) -> Result<Option<User>, DomainError> {
        self.fetch_one_where(
            "`email` = ? AND `phone` = ? ORDER BY `user_id` LIMIT 1",
            &[email, phone],
        )
        .await
    }

    async fn list_users(&self, limit: Option<u32>) -> Result<Vec<User>, DomainError> {
        let Some(limit) = limit else {
            return self.list(&Default::default()).await;
        };

        let mut query = Self::select();
        query.push(" ORDER BY `user_id` LIMIT ");
        query.push_bind(limit);

        let rows = query
            .build()
            .fetch_all(self.pool())
            .await
            .map_err(|e| map_sqlx_error(User::RESOURCE, e))?;

        Self::decode(rows)
    }
}
