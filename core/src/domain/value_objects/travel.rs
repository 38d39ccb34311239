//! Travel history read model.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Application, ApplicationStatus, Invoice, InvoiceStatus, Reservation,
};

/// A completed booking: the reservation, its approved application and the
/// paid invoice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Travel {
    pub reservation: Reservation,
    pub application: Application,
    pub invoice: Invoice,
}

impl Travel {
    /// A stay counts as a travel once the host approved it and it was paid
    pub fn qualifies(application: &Application, invoice: &Invoice) -> bool {
        application.status == ApplicationStatus::Approved && invoice.status == InvoiceStatus::Paid
    }
}
