use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::domain::entities::{
    Application, ApplicationStatus, Invoice, InvoiceStatus, NewApplication, NewInvoice,
    NewReservation, Reservation,
};
use crate::domain::Record;
use crate::repositories::booking::{InMemoryTravelRepository, TravelRepository};
use crate::repositories::record::{InMemoryRepository, RecordRepository};

struct Fixture {
    reservations: InMemoryRepository<Reservation>,
    applications: InMemoryRepository<Application>,
    invoices: InMemoryRepository<Invoice>,
    travels: InMemoryTravelRepository,
}

fn fixture() -> Fixture {
    let reservations = InMemoryRepository::new();
    let applications = InMemoryRepository::new();
    let invoices = InMemoryRepository::new();
    let travels = InMemoryTravelRepository::new(
        reservations.clone(),
        applications.clone(),
        invoices.clone(),
    );
    Fixture {
        reservations,
        applications,
        invoices,
        travels,
    }
}

async fn book(
    f: &Fixture,
    renter_id: i64,
    application: ApplicationStatus,
    invoice: InvoiceStatus,
) -> Reservation {
    let reservation = f
        .reservations
        .create(Reservation::from_new(NewReservation {
            renter_id,
            item_id: 1,
            entry_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            exit_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
            passengers_number: 2,
            final_price: Decimal::from(200),
        }))
        .await
        .unwrap();
    let app = f
        .applications
        .create(Application::from_new(NewApplication {
            res_id: reservation.res_id,
            status: application,
        }))
        .await
        .unwrap();
    f.invoices
        .create(Invoice::from_new(NewInvoice {
            app_id: app.app_id,
            user_id: renter_id,
            date: NaiveDate::from_ymd_opt(2024, 4, 20).unwrap(),
            discount: Decimal::ZERO,
            status: invoice,
        }))
        .await
        .unwrap();
    reservation
}

#[tokio::test]
async fn test_only_approved_and_paid_bookings_are_travels() {
    let f = fixture();
    let done = book(&f, 1, ApplicationStatus::Approved, InvoiceStatus::Paid).await;
    book(&f, 1, ApplicationStatus::Approved, InvoiceStatus::Unpaid).await;
    book(&f, 1, ApplicationStatus::Rejected, InvoiceStatus::Paid).await;
    book(&f, 1, ApplicationStatus::Pending, InvoiceStatus::Refunded).await;

    let travels = f.travels.travels(1).await.unwrap();

    assert_eq!(travels.len(), 1);
    assert_eq!(travels[0].reservation, done);
    assert_eq!(travels[0].invoice.status, InvoiceStatus::Paid);
}

#[tokio::test]
async fn test_travels_are_scoped_to_renter() {
    let f = fixture();
    book(&f, 2, ApplicationStatus::Approved, InvoiceStatus::Paid).await;

    assert!(f.travels.travels(1).await.unwrap().is_empty());
    assert_eq!(f.travels.travels(2).await.unwrap().len(), 1);
}
