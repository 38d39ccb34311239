//! Table mapping for records and the generic sqlx repository built on it.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, MySqlPool, QueryBuilder, Row};

use jb_core::domain::{Record, RecordFilter};
use jb_core::errors::DomainError;
use jb_core::repositories::RecordRepository;

use crate::database::error::map_sqlx_error;

/// A column value to bind in an insert or update
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    BigInt(i64),
    Int(i32),
    Text(String),
    NullableText(Option<String>),
    Decimal(Decimal),
    Date(NaiveDate),
    Time(NaiveTime),
    Bool(bool),
}

/// How a record maps onto its MySQL table
pub trait Table: Record {
    const TABLE: &'static str;
    const ID_COLUMN: &'static str;
    /// Data columns (without the id), in the order `values` returns them
    const COLUMNS: &'static [&'static str];

    fn values(&self) -> Vec<SqlValue>;

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error>;
}

/// Reads columns from a row, optionally under a prefix added by
/// [`aliased_select_list`] so joined tables with shared column names can
/// be decoded from one row.
pub struct RowReader<'r> {
    row: &'r MySqlRow,
    prefix: &'static str,
}

impl<'r> RowReader<'r> {
    pub fn new(row: &'r MySqlRow) -> Self {
        Self { row, prefix: "" }
    }

    pub fn prefixed(row: &'r MySqlRow, prefix: &'static str) -> Self {
        Self { row, prefix }
    }

    pub fn get<T>(&self, column: &str) -> Result<T, sqlx::Error>
    where
        T: sqlx::Decode<'r, MySql> + sqlx::Type<MySql>,
    {
        if self.prefix.is_empty() {
            self.row.try_get(column)
        } else {
            self.row.try_get(format!("{}{}", self.prefix, column).as_str())
        }
    }
}

fn all_columns<E: Table>() -> impl Iterator<Item = &'static str> {
    std::iter::once(E::ID_COLUMN).chain(E::COLUMNS.iter().copied())
}

/// Comma separated, backtick quoted column list, id first
pub(crate) fn select_list<E: Table>(alias: Option<&str>) -> String {
    all_columns::<E>()
        .map(|column| match alias {
            Some(alias) => format!("{}.`{}`", alias, column),
            None => format!("`{}`", column),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Like [`select_list`], but every column is renamed to `prefix + column`
pub(crate) fn aliased_select_list<E: Table>(alias: &str, prefix: &str) -> String {
    all_columns::<E>()
        .map(|column| format!("{}.`{}` AS `{}{}`", alias, column, prefix, column))
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn push_value(builder: &mut QueryBuilder<'_, MySql>, value: SqlValue) {
    match value {
        SqlValue::BigInt(v) => builder.push_bind(v),
        SqlValue::Int(v) => builder.push_bind(v),
        SqlValue::Text(v) => builder.push_bind(v),
        SqlValue::NullableText(v) => builder.push_bind(v),
        SqlValue::Decimal(v) => builder.push_bind(v),
        SqlValue::Date(v) => builder.push_bind(v),
        SqlValue::Time(v) => builder.push_bind(v),
        SqlValue::Bool(v) => builder.push_bind(v),
    };
}

/// `INSERT INTO table (columns) VALUES (...)` for a record
pub(crate) fn insert_query<E: Table>(record: &E) -> QueryBuilder<'static, MySql> {
    let columns = E::COLUMNS
        .iter()
        .map(|c| format!("`{}`", c))
        .collect::<Vec<_>>()
        .join(", ");
    let mut builder =
        QueryBuilder::new(format!("INSERT INTO `{}` ({}) VALUES (", E::TABLE, columns));
    for (index, value) in record.values().into_iter().enumerate() {
        if index > 0 {
            builder.push(", ");
        }
        push_value(&mut builder, value);
    }
    builder.push(")");
    builder
}

/// Generic sqlx repository for any [`Table`]
pub struct MySqlRecordRepository<E> {
    pool: MySqlPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for MySqlRecordRepository<E> {
    fn clone(&self) -> Self {
        Self {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Table> MySqlRecordRepository<E> {
    pub fn new(pool: MySqlPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    pub(crate) fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub(crate) fn select() -> QueryBuilder<'static, MySql> {
        QueryBuilder::new(format!("SELECT {} FROM `{}`", select_list::<E>(None), E::TABLE))
    }

    pub(crate) fn decode(rows: Vec<MySqlRow>) -> Result<Vec<E>, DomainError> {
        rows.iter()
            .map(|row| {
                E::from_row(&RowReader::new(row)).map_err(|e| map_sqlx_error(E::RESOURCE, e))
            })
            .collect()
    }
}

#[async_trait]
impl<E: Table> RecordRepository<E> for MySqlRecordRepository<E> {
    async fn find_by_id(&self, id: i64) -> Result<Option<E>, DomainError> {
        let mut query = Self::select();
        query.push(format!(" WHERE `{}` = ", E::ID_COLUMN));
        query.push_bind(id);

        let row = query
            .build()
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(E::RESOURCE, e))?;

        row.map(|row| E::from_row(&RowReader::new(&row)))
            .transpose()
            .map_err(|e| map_sqlx_error(E::RESOURCE, e))
    }

    async fn list(&self, filter: &RecordFilter) -> Result<Vec<E>, DomainError> {
        let mut query = Self::select();
        for (index, (column, value)) in filter.conditions().iter().enumerate() {
            query.push(if index == 0 { " WHERE " } else { " AND " });
            query.push(format!("`{}` = ", column));
            query.push_bind(*value);
        }
        query.push(format!(" ORDER BY `{}`", E::ID_COLUMN));

        let rows = query
            .build()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(E::RESOURCE, e))?;

        Self::decode(rows)
    }

    async fn create(&self, mut record: E) -> Result<E, DomainError> {
        let result = insert_query(&record)
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(E::RESOURCE, e))?;

        record.set_id(result.last_insert_id() as i64);
        Ok(record)
    }

    async fn update(&self, record: E) -> Result<E, DomainError> {
        let mut query = QueryBuilder::<MySql>::new(format!("UPDATE `{}` SET ", E::TABLE));
        for (index, (column, value)) in E::COLUMNS.iter().zip(record.values()).enumerate() {
            if index > 0 {
                query.push(", ");
            }
            query.push(format!("`{}` = ", column));
            push_value(&mut query, value);
        }
        query.push(format!(" WHERE `{}` = ", E::ID_COLUMN));
        query.push_bind(record.id());

        let result = query
            .build()
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(E::RESOURCE, e))?;

        if result.rows_affected() == 0 && self.find_by_id(record.id()).await?.is_none() {
            return Err(DomainError::not_found(E::RESOURCE));
        }
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query(&format!(
            "DELETE FROM `{}` WHERE `{}` = ?",
            E::TABLE,
            E::ID_COLUMN
        ))
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error(E::RESOURCE, e))?;

        Ok(result.rows_affected() > 0)
    }
}
