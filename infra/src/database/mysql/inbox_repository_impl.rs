//! MySQL implementation of InboxRepository

use async_trait::async_trait;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use jb_core::domain::entities::Message;
use jb_core::domain::Record;
use jb_core::errors::DomainError;
use jb_core::repositories::InboxRepository;

use crate::database::error::map_sqlx_error;

use super::table::{select_list, RowReader, Table};

/// Messages a host received about their own listings
#[derive(Clone)]
pub struct MySqlInboxRepository {
    pool: MySqlPool,
}

impl MySqlInboxRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn query(host_id: i64, sender_id: Option<i64>) -> QueryBuilder<'static, MySql> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {} FROM `messages` m JOIN `items` i ON i.`item_id` = m.`item_id` \
             AND i.`owner_id` = m.`receiver_id` WHERE m.`receiver_id` = ",
            select_list::<Message>(Some("m")),
        ));
        query.push_bind(host_id);
        if let Some(sender_id) = sender_id {
            query.push(" AND m.`sender_id` = ");
            query.push_bind(sender_id);
        }
        query.push(" ORDER BY m.`message_id`");
        query
    }
}

#[async_trait]
impl InboxRepository for MySqlInboxRepository {
    async fn inbox(
        &self,
        host_id: i64,
        sender_id: Option<i64>,
    ) -> Result<Vec<Message>, DomainError> {
        let rows = Self::query(host_id, sender_id)
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(Message::RESOURCE, e))?;

        rows.iter()
            .map(|row| Message::from_row(&RowReader::new(row)))
            .collect::<Result<_, _>>()
            .map_err(|e| map_sqlx_error(Message::RESOURCE, e))
    }
}
