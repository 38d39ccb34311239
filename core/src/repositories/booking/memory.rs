//! In-memory implementation of TravelRepository

use async_trait::async_trait;

use crate::domain::entities::{Application, Invoice, Reservation};
use crate::domain::value_objects::Travel;
use crate::errors::DomainError;
use crate::repositories::record::InMemoryRepository;

use super::trait_::TravelRepository;

#[derive(Clone, Default)]
pub struct InMemoryTravelRepository {
    reservations: InMemoryRepository<Reservation>,
    applications: InMemoryRepository<Application>,
    invoices: InMemoryRepository<Invoice>,
}

impl InMemoryTravelRepository {
    pub fn new(
        reservations: InMemoryRepository<Reservation>,
        applications: InMemoryRepository<Application>,
        invoices: InMemoryRepository<Invoice>,
    ) -> Self {
        Self {
            reservations,
            applications,
            invoices,
        }
    }
}

#[async_trait]
impl TravelRepository for InMemoryTravelRepository {
    async fn travels(&self, renter_id: i64) -> Result<Vec<Travel>, DomainError> {
        let applications = self.applications.snapshot().await;
        let invoices = self.invoices.snapshot().await;

        let mut travels = Vec::new();
        for reservation in self.reservations.snapshot().await {
            if reservation.renter_id != renter_id {
                continue;
            }
            for application in applications.iter().filter(|a| a.res_id == reservation.res_id) {
                for invoice in invoices.iter().filter(|i| i.app_id == application.app_id) {
                    if Travel::qualifies(application, invoice) {
                        travels.push(Travel {
                            reservation: reservation.clone(),
                            application: application.clone(),
                            invoice: invoice.clone(),
                        });
                    }
                }
            }
        }
        Ok(travels)
    }
}
