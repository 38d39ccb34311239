//! Booking pipeline: reservation, host application, invoice and payment.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::check_amount;
use crate::domain::record::Record;
use crate::errors::ValidationError;

/// A guest's stay at a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    pub res_id: i64,
    pub renter_id: i64,
    pub item_id: i64,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub passengers_number: i32,
    pub final_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReservation {
    pub renter_id: i64,
    pub item_id: i64,
    pub entry_date: NaiveDate,
    pub exit_date: NaiveDate,
    pub passengers_number: i32,
    pub final_price: Decimal,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationPatch {
    pub entry_date: Option<NaiveDate>,
    pub exit_date: Option<NaiveDate>,
    pub passengers_number: Option<i32>,
    pub final_price: Option<Decimal>,
}

impl Reservation {
    /// Number of nights between entry and exit
    pub fn nights(&self) -> i64 {
        (self.exit_date - self.entry_date).num_days()
    }

    /// Checks the stay window: entry strictly before exit
    pub fn check_dates(entry_date: NaiveDate, exit_date: NaiveDate) -> Result<(), ValidationError> {
        if entry_date >= exit_date {
            return Err(ValidationError::InvalidRange {
                start: "entry_date".to_string(),
                end: "exit_date".to_string(),
            });
        }
        Ok(())
    }
}

impl Record for Reservation {
    const RESOURCE: &'static str = "Reservation";
    const FILTERS: &'static [&'static str] = &["renter_id", "item_id"];

    type New = NewReservation;
    type Patch = ReservationPatch;

    fn from_new(new: NewReservation) -> Self {
        Self {
            res_id: 0,
            renter_id: new.renter_id,
            item_id: new.item_id,
            entry_date: new.entry_date,
            exit_date: new.exit_date,
            passengers_number: new.passengers_number,
            final_price: new.final_price,
        }
    }

    fn id(&self) -> i64 {
        self.res_id
    }

    fn set_id(&mut self, id: i64) {
        self.res_id = id;
    }

    fn apply(&mut self, patch: ReservationPatch) {
        if let Some(entry_date) = patch.entry_date {
            self.entry_date = entry_date;
        }
        if let Some(exit_date) = patch.exit_date {
            self.exit_date = exit_date;
        }
        if let Some(passengers_number) = patch.passengers_number {
            self.passengers_number = passengers_number;
        }
        if let Some(final_price) = patch.final_price {
            self.final_price = final_price;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        Self::check_dates(self.entry_date, self.exit_date)?;
        if self.passengers_number < 1 {
            return Err(ValidationError::OutOfRange {
                field: "passengers_number".to_string(),
                min: "1".to_string(),
                max: i32::MAX.to_string(),
            });
        }
        check_amount("final_price", self.final_price)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "renter_id" => Some(self.renter_id),
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

/// Host decision on a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplicationStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "approved" => Ok(ApplicationStatus::Approved),
            "rejected" => Ok(ApplicationStatus::Rejected),
            _ => Err(ValidationError::invalid("status")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub app_id: i64,
    pub res_id: i64,
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub res_id: i64,
    #[serde(default)]
    pub status: ApplicationStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationPatch {
    pub status: Option<ApplicationStatus>,
}

impl Record for Application {
    const RESOURCE: &'static str = "Application";
    const FILTERS: &'static [&'static str] = &["res_id"];

    type New = NewApplication;
    type Patch = ApplicationPatch;

    fn from_new(new: NewApplication) -> Self {
        Self {
            app_id: 0,
            res_id: new.res_id,
            status: new.status,
        }
    }

    fn id(&self) -> i64 {
        self.app_id
    }

    fn set_id(&mut self, id: i64) {
        self.app_id = id;
    }

    fn apply(&mut self, patch: ApplicationPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "res_id" => Some(self.res_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Unpaid,
    Paid,
    Refunded,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Refunded => "refunded",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(InvoiceStatus::Unpaid),
            "paid" => Ok(InvoiceStatus::Paid),
            "refunded" => Ok(InvoiceStatus::Refunded),
            _ => Err(ValidationError::invalid("status")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: i64,
    pub app_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    pub discount: Decimal,
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoice {
    pub app_id: i64,
    pub user_id: i64,
    pub date: NaiveDate,
    #[serde(default)]
    pub discount: Decimal,
    #[serde(default)]
    pub status: InvoiceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoicePatch {
    pub date: Option<NaiveDate>,
    pub discount: Option<Decimal>,
    pub status: Option<InvoiceStatus>,
}

impl Record for Invoice {
    const RESOURCE: &'static str = "Invoice";
    const FILTERS: &'static [&'static str] = &["app_id", "user_id"];

    type New = NewInvoice;
    type Patch = InvoicePatch;

    fn from_new(new: NewInvoice) -> Self {
        Self {
            invoice_id: 0,
            app_id: new.app_id,
            user_id: new.user_id,
            date: new.date,
            discount: new.discount,
            status: new.status,
        }
    }

    fn id(&self) -> i64 {
        self.invoice_id
    }

    fn set_id(&mut self, id: i64) {
        self.invoice_id = id;
    }

    fn apply(&mut self, patch: InvoicePatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(discount) = patch.discount {
            self.discount = discount;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        check_amount("discount", self.discount)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "app_id" => Some(self.app_id),
            "user_id" => Some(self.user_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub payment_id: i64,
    pub invoice_id: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPayment {
    pub invoice_id: i64,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentPatch {
    pub date: Option<NaiveDate>,
}

impl Record for Payment {
    const RESOURCE: &'static str = "Payment";
    const FILTERS: &'static [&'static str] = &["invoice_id"];

    type New = NewPayment;
    type Patch = PaymentPatch;

    fn from_new(new: NewPayment) -> Self {
        Self {
            payment_id: 0,
            invoice_id: new.invoice_id,
            date: new.date,
        }
    }

    fn id(&self) -> i64 {
        self.payment_id
    }

    fn set_id(&mut self, id: i64) {
        self.payment_id = id;
    }

    fn apply(&mut self, patch: PaymentPatch) {
        if let Some(date) = patch.date {
            self.date = date;
        }
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "invoice_id" => Some(self.invoice_id),
            _ => None,
        }
    }
}

/// Line of a payment; carries only its parent reference for now
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub invoice_line_id: i64,
    pub payment_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInvoiceLine {
    pub payment_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLinePatch {
    pub payment_id: Option<i64>,
}

impl Record for InvoiceLine {
    const RESOURCE: &'static str = "Invoice line";
    const FILTERS: &'static [&'static str] = &["payment_id"];

    type New = NewInvoiceLine;
    type Patch = InvoiceLinePatch;

    fn from_new(new: NewInvoiceLine) -> Self {
        Self {
            invoice_line_id: 0,
            payment_id: new.payment_id,
        }
    }

    fn id(&self) -> i64 {
        self.invoice_line_id
    }

    fn set_id(&mut self, id: i64) {
        self.invoice_line_id = id;
    }

    fn apply(&mut self, patch: InvoiceLinePatch) {
        if let Some(payment_id) = patch.payment_id {
            self.payment_id = payment_id;
        }
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "payment_id" => Some(self.payment_id),
            _ => None,
        }
    }
}
