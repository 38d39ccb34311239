//! MySQL implementation of TravelRepository

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::MySqlPool;

use jb_core::domain::entities::{
    Application, ApplicationStatus, Invoice, InvoiceStatus, Reservation,
};
use jb_core::domain::value_objects::Travel;
use jb_core::domain::Record;
use jb_core::errors::DomainError;
use jb_core::repositories::TravelRepository;

use crate::database::error::map_sqlx_error;

use super::table::{aliased_select_list, RowReader, Table};

/// Reservations joined with their application and invoice
#[derive(Clone)]
pub struct MySqlTravelRepository {
    pool: MySqlPool,
}

impl MySqlTravelRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn sql() -> String {
        format!(
            "SELECT {}, {}, {} FROM `reservations` r \
             JOIN `applications` a ON a.`res_id` = r.`res_id` \
             JOIN `invoice` v ON v.`app_id` = a.`app_id` \
             WHERE r.`renter_id` = ? AND a.`status` = ? AND v.`status` = ? \
             ORDER BY r.`res_id`, v.`invoice_id`",
            aliased_select_list::<Reservation>("r", "r_"),
            aliased_select_list::<Application>("a", "a_"),
            aliased_select_list::<Invoice>("v", "v_"),
        )
    }

    fn travel_from_row(row: &MySqlRow) -> Result<Travel, sqlx::Error> {
        Ok(Travel {
            reservation: Reservation::from_row(&RowReader::prefixed(row, "r_"))?,
            application: Application::from_row(&RowReader::prefixed(row, "a_"))?,
            invoice: Invoice::from_row(&RowReader::prefixed(row, "v_"))?,
        })
    }
}

#[async_trait]
impl TravelRepository for MySqlTravelRepository {
    async fn travels(&self, renter_id: i64) -> Result<Vec<Travel>, DomainError> {
        let sql = Self::sql();
        let rows = sqlx::query(&sql)
            .bind(renter_id)
            .bind(ApplicationStatus::Approved.as_str())
            .bind(InvoiceStatus::Paid.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(Reservation::RESOURCE, e))?;

        rows.iter()
            .map(Self::travel_from_row)
            .collect::<Result<_, _>>()
            .map_err(|e| map_sqlx_error(Reservation::RESOURCE, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_travel_query_prefixes_joined_columns() {
        let sql = MySqlTravelRepository::sql();
        assert!(sql.contains("r.`res_id` AS `r_res_id`"));
        assert!(sql.contains("a.`res_id` AS `a_res_id`"));
        assert!(sql.contains("v.`status` AS `v_status`"));
    }
}
