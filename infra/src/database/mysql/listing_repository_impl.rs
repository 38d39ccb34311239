//! MySQL implementation of ListingRepository

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder};

use jb_core::domain::entities::{Item, Location, NewLocation};
use jb_core::domain::value_objects::{Listing, ListingSearch};
use jb_core::domain::{Record, RecordFilter};
use jb_core::errors::DomainError;
use jb_core::repositories::{ListingRepository, RecordRepository};

use crate::database::error::map_sqlx_error;

use super::table::{aliased_select_list, insert_query, MySqlRecordRepository, RowReader, Table};

/// Listings over the `items` table, left-joined with `location`
#[derive(Clone)]
pub struct MySqlListingRepository {
    pool: MySqlPool,
    items: MySqlRecordRepository<Item>,
}

impl MySqlListingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            items: MySqlRecordRepository::new(pool.clone()),
            pool,
        }
    }

    fn select() -> QueryBuilder<'static, MySql> {
        QueryBuilder::new(format!(
            "SELECT {}, {} FROM `items` i LEFT JOIN `location` l ON l.`item_id` = i.`item_id`",
            aliased_select_list::<Item>("i", "i_"),
            aliased_select_list::<Location>("l", "l_"),
        ))
    }

    fn listing_from_row(row: &MySqlRow) -> Result<Listing, sqlx::Error> {
        let item = Item::from_row(&RowReader::prefixed(row, "i_"))?;
        let location = RowReader::prefixed(row, "l_");
        let location = match location.get::<Option<i64>>("location_id")? {
            Some(_) => Some(Location::from_row(&location)?),
            None => None,
        };
        Ok(Listing { item, location })
    }

    async fn fetch_listings(
        &self,
        mut query: QueryBuilder<'_, MySql>,
    ) -> Result<Vec<Listing>, DomainError> {
        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(Item::RESOURCE, e))?;

        rows.iter()
            .map(Self::listing_from_row)
            .collect::<Result<_, _>>()
            .map_err(|e| map_sqlx_error(Item::RESOURCE, e))
    }
}

/// `%needle%` with LIKE wildcards in the needle escaped
fn contains_pattern(needle: &str) -> String {
    let escaped = needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl RecordRepository<Item> for MySqlListingRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, DomainError> {
        self.items.find_by_id(id).await
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<Item>, DomainError> {
        self.items.list(filter).await
    }

    async fn create(&self, record: Item) -> Result<Item, DomainError> {
        self.items.create(record).await
    }

    async fn update(&self, record: Item) -> Result<Item, DomainError> {
        self.items.update(record).await
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        self.items.delete(id).await
    }
}

#[async_trait]
impl ListingRepository for MySqlListingRepository {
    async fn search(&self, search: &ListingSearch) -> Result<Vec<Listing>, DomainError> {
        let mut query = Self::select();
        query.push(" WHERE 1 = 1");
        if let Some(name) = &search.name {
            query.push(" AND i.`name` LIKE ");
            query.push_bind(contains_pattern(name));
        }
        if let Some(state) = &search.state {
            query.push(" AND l.`state` LIKE ");
            query.push_bind(contains_pattern(state));
        }
        if let Some(city) = &search.city {
            query.push(" AND l.`city` LIKE ");
            query.push_bind(contains_pattern(city));
        }
        if let Some(min_price) = search.min_price {
            query.push(" AND i.`price` >= ");
            query.push_bind(min_price);
        }
        if let Some(max_price) = search.max_price {
            query.push(" AND i.`price` <= ");
            query.push_bind(max_price);
        }
        query.push(" ORDER BY i.`item_id`");

        self.fetch_listings(query).await
    }

    async fn find_listing(&self, item_id: i64) -> Result<Option<Listing>, DomainError> {
        let mut query = Self::select();
        query.push(" WHERE i.`item_id` = ");
        query.push_bind(item_id);

        Ok(self.fetch_listings(query).await?.into_iter().next())
    }

    async fn create_listing(
        &self,
        mut item: Item,
        location: Option<NewLocation>,
    ) -> Result<Listing, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(Item::RESOURCE, e))?;

        let result = insert_query(&item)
            .build()
            .execute(&mut *tx)
            .await
            .map_err(|e| map_sqlx_error(Item::RESOURCE, e))?;
        item.set_id(result.last_insert_id() as i64);

        let location = match location {
            Some(new_location) => {
                let mut location = Location::from_new(NewLocation {
                    item_id: item.item_id,
                    ..new_location
                });
                let result = insert_query(&location)
                    .build()
                    .execute(&mut *tx)
                    .await
                    .map_err(|e| map_sqlx_error(Location::RESOURCE, e))?;
                location.set_id(result.last_insert_id() as i64);
                Some(location)
            }
            None => None,
        };

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(Item::RESOURCE, e))?;

        tracing::info!(item_id = item.item_id, "Listing created");
        Ok(Listing { item, location })
    }
}
