//! Column mappings for every marketplace table

use jb_core::domain::entities::{
    Application, CommentSection, Feature, Invoice, InvoiceLine, Item, ItemDescription, Like,
    Location, Message, OpenClose, Payment, Property, Rate, Rating, Reservation, Rule, Type,
    TypeList, User,
};

use super::table::{RowReader, SqlValue, Table};

/// Decodes a status column stored as its lowercase name
fn status<T>(row: &RowReader<'_>, column: &str) -> Result<T, sqlx::Error>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    row.get::<String>(column)?
        .parse()
        .map_err(|e: T::Err| sqlx::Error::Decode(Box::new(e)))
}

impl Table for User {
    const TABLE: &'static str = "users";
    const ID_COLUMN: &'static str = "user_id";
    const COLUMNS: &'static [&'static str] = &[
        "phone",
        "first_name",
        "last_name",
        "national_code",
        "gender",
        "date_of_birth",
        "email",
        "home_phone",
        "description",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::NullableText(self.phone.clone()),
            SqlValue::Text(self.first_name.clone()),
            SqlValue::Text(self.last_name.clone()),
            SqlValue::Text(self.national_code.clone()),
            SqlValue::Text(self.gender.clone()),
            SqlValue::Date(self.date_of_birth),
            SqlValue::Text(self.email.clone()),
            SqlValue::NullableText(self.home_phone.clone()),
            SqlValue::NullableText(self.description.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            user_id: row.get("user_id")?,
            phone: row.get("phone")?,
            first_name: row.get("first_name")?,
            last_name: row.get("last_name")?,
            national_code: row.get("national_code")?,
            gender: row.get("gender")?,
            date_of_birth: row.get("date_of_birth")?,
            email: row.get("email")?,
            home_phone: row.get("home_phone")?,
            description: row.get("description")?,
        })
    }
}

impl Table for Item {
    const TABLE: &'static str = "items";
    const ID_COLUMN: &'static str = "item_id";
    const COLUMNS: &'static [&'static str] = &["owner_id", "name", "price", "about"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.owner_id),
            SqlValue::Text(self.name.clone()),
            SqlValue::Decimal(self.price),
            SqlValue::NullableText(self.about.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            item_id: row.get("item_id")?,
            owner_id: row.get("owner_id")?,
            name: row.get("name")?,
            price: row.get("price")?,
            about: row.get("about")?,
        })
    }
}

impl Table for Location {
    const TABLE: &'static str = "location";
    const ID_COLUMN: &'static str = "location_id";
    const COLUMNS: &'static [&'static str] = &["state", "city", "exact_loc", "item_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.state.clone()),
            SqlValue::Text(self.city.clone()),
            SqlValue::Text(self.exact_loc.clone()),
            SqlValue::BigInt(self.item_id),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            location_id: row.get("location_id")?,
            state: row.get("state")?,
            city: row.get("city")?,
            exact_loc: row.get("exact_loc")?,
            item_id: row.get("item_id")?,
        })
    }
}

impl Table for TypeList {
    const TABLE: &'static str = "type_list";
    const ID_COLUMN: &'static str = "type_list_id";
    const COLUMNS: &'static [&'static str] = &["name"];

    fn values(&self) -> Vec<SqlValue> {
        vec![SqlValue::NullableText(self.name.clone())]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            type_list_id: row.get("type_list_id")?,
            name: row.get("name")?,
        })
    }
}

impl Table for Type {
    const TABLE: &'static str = "type";
    const ID_COLUMN: &'static str = "type_id";
    const COLUMNS: &'static [&'static str] = &["item_id", "type_list_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::BigInt(self.type_list_id),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            type_id: row.get("type_id")?,
            item_id: row.get("item_id")?,
            type_list_id: row.get("type_list_id")?,
        })
    }
}

impl Table for Feature {
    const TABLE: &'static str = "features";
    const ID_COLUMN: &'static str = "feature_id";
    const COLUMNS: &'static [&'static str] = &["item_id", "name", "more_detail"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::Text(self.name.clone()),
            SqlValue::NullableText(self.more_detail.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            feature_id: row.get("feature_id")?,
            item_id: row.get("item_id")?,
            name: row.get("name")?,
            more_detail: row.get("more_detail")?,
        })
    }
}

impl Table for OpenClose {
    const TABLE: &'static str = "open_close";
    const ID_COLUMN: &'static str = "open_close_id";
    const COLUMNS: &'static [&'static str] = &["open_time", "close_time", "item_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Time(self.open_time),
            SqlValue::Time(self.close_time),
            SqlValue::BigInt(self.item_id),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            open_close_id: row.get("open_close_id")?,
            open_time: row.get("open_time")?,
            close_time: row.get("close_time")?,
            item_id: row.get("item_id")?,
        })
    }
}

impl Table for Rule {
    const TABLE: &'static str = "rules";
    const ID_COLUMN: &'static str = "rule_id";
    const COLUMNS: &'static [&'static str] = &["item_id", "name", "value"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::Text(self.name.clone()),
            SqlValue::Bool(self.value),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            rule_id: row.get("rule_id")?,
            item_id: row.get("item_id")?,
            name: row.get("name")?,
            value: row.get("value")?,
        })
    }
}

impl Table for Property {
    const TABLE: &'static str = "properties";
    const ID_COLUMN: &'static str = "property_id";
    const COLUMNS: &'static [&'static str] = &["item_id", "status"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::Text(self.status.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            property_id: row.get("property_id")?,
            item_id: row.get("item_id")?,
            status: row.get("status")?,
        })
    }
}

impl Table for ItemDescription {
    const TABLE: &'static str = "item_description";
    const ID_COLUMN: &'static str = "item_desc_id";
    const COLUMNS: &'static [&'static str] = &[
        "item_id",
        "capacity",
        "room",
        "single_bed",
        "double_bed",
        "shower",
        "foreign_wc",
        "persian_wc",
        "caption",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::Int(self.capacity),
            SqlValue::Int(self.room),
            SqlValue::Int(self.single_bed),
            SqlValue::Int(self.double_bed),
            SqlValue::Int(self.shower),
            SqlValue::Int(self.foreign_wc),
            SqlValue::Int(self.persian_wc),
            SqlValue::Text(self.caption.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            item_desc_id: row.get("item_desc_id")?,
            item_id: row.get("item_id")?,
            capacity: row.get("capacity")?,
            room: row.get("room")?,
            single_bed: row.get("single_bed")?,
            double_bed: row.get("double_bed")?,
            shower: row.get("shower")?,
            foreign_wc: row.get("foreign_wc")?,
            persian_wc: row.get("persian_wc")?,
            caption: row.get("caption")?,
        })
    }
}

impl Table for Rating {
    const TABLE: &'static str = "ratings";
    const ID_COLUMN: &'static str = "rating_id";
    const COLUMNS: &'static [&'static str] = &["item_id", "total_rate", "user_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::Int(self.total_rate),
            SqlValue::BigInt(self.user_id),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            rating_id: row.get("rating_id")?,
            item_id: row.get("item_id")?,
            total_rate: row.get("total_rate")?,
            user_id: row.get("user_id")?,
        })
    }
}

impl Table for Rate {
    const TABLE: &'static str = "rates";
    const ID_COLUMN: &'static str = "rate_id";
    const COLUMNS: &'static [&'static str] = &["rate_title", "rate", "item_id", "user_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::Text(self.rate_title.clone()),
            SqlValue::Int(self.rate),
            SqlValue::BigInt(self.item_id),
            SqlValue::BigInt(self.user_id),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            rate_id: row.get("rate_id")?,
            rate_title: row.get("rate_title")?,
            rate: row.get("rate")?,
            item_id: row.get("item_id")?,
            user_id: row.get("user_id")?,
        })
    }
}

impl Table for Like {
    const TABLE: &'static str = "likes";
    const ID_COLUMN: &'static str = "like_id";
    const COLUMNS: &'static [&'static str] = &["user_id", "item_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![SqlValue::BigInt(self.user_id), SqlValue::BigInt(self.item_id)]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            like_id: row.get("like_id")?,
            user_id: row.get("user_id")?,
            item_id: row.get("item_id")?,
        })
    }
}

impl Table for CommentSection {
    const TABLE: &'static str = "comment_section";
    const ID_COLUMN: &'static str = "comment_id";
    const COLUMNS: &'static [&'static str] = &["item_id", "user_id", "comment"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.item_id),
            SqlValue::BigInt(self.user_id),
            SqlValue::Text(self.comment.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            comment_id: row.get("comment_id")?,
            item_id: row.get("item_id")?,
            user_id: row.get("user_id")?,
            comment: row.get("comment")?,
        })
    }
}

impl Table for Message {
    const TABLE: &'static str = "messages";
    const ID_COLUMN: &'static str = "message_id";
    const COLUMNS: &'static [&'static str] = &["sender_id", "receiver_id", "item_id", "text"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.sender_id),
            SqlValue::BigInt(self.receiver_id),
            SqlValue::BigInt(self.item_id),
            SqlValue::Text(self.text.clone()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            message_id: row.get("message_id")?,
            sender_id: row.get("sender_id")?,
            receiver_id: row.get("receiver_id")?,
            item_id: row.get("item_id")?,
            text: row.get("text")?,
        })
    }
}

impl Table for Reservation {
    const TABLE: &'static str = "reservations";
    const ID_COLUMN: &'static str = "res_id";
    const COLUMNS: &'static [&'static str] = &[
        "renter_id",
        "item_id",
        "entry_date",
        "exit_date",
        "passengers_number",
        "final_price",
    ];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.renter_id),
            SqlValue::BigInt(self.item_id),
            SqlValue::Date(self.entry_date),
            SqlValue::Date(self.exit_date),
            SqlValue::Int(self.passengers_number),
            SqlValue::Decimal(self.final_price),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            res_id: row.get("res_id")?,
            renter_id: row.get("renter_id")?,
            item_id: row.get("item_id")?,
            entry_date: row.get("entry_date")?,
            exit_date: row.get("exit_date")?,
            passengers_number: row.get("passengers_number")?,
            final_price: row.get("final_price")?,
        })
    }
}

impl Table for Application {
    const TABLE: &'static str = "applications";
    const ID_COLUMN: &'static str = "app_id";
    const COLUMNS: &'static [&'static str] = &["res_id", "status"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.res_id),
            SqlValue::Text(self.status.as_str().to_string()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            app_id: row.get("app_id")?,
            res_id: row.get("res_id")?,
            status: status(row, "status")?,
        })
    }
}

impl Table for Invoice {
    const TABLE: &'static str = "invoice";
    const ID_COLUMN: &'static str = "invoice_id";
    const COLUMNS: &'static [&'static str] = &["app_id", "user_id", "date", "discount", "status"];

    fn values(&self) -> Vec<SqlValue> {
        vec![
            SqlValue::BigInt(self.app_id),
            SqlValue::BigInt(self.user_id),
            SqlValue::Date(self.date),
            SqlValue::Decimal(self.discount),
            SqlValue::Text(self.status.as_str().to_string()),
        ]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            invoice_id: row.get("invoice_id")?,
            app_id: row.get("app_id")?,
            user_id: row.get("user_id")?,
            date: row.get("date")?,
            discount: row.get("discount")?,
            status: status(row, "status")?,
        })
    }
}

impl Table for Payment {
    const TABLE: &'static str = "payment";
    const ID_COLUMN: &'static str = "payment_id";
    const COLUMNS: &'static [&'static str] = &["invoice_id", "date"];

    fn values(&self) -> Vec<SqlValue> {
        vec![SqlValue::BigInt(self.invoice_id), SqlValue::Date(self.date)]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            payment_id: row.get("payment_id")?,
            invoice_id: row.get("invoice_id")?,
            date: row.get("date")?,
        })
    }
}

impl Table for InvoiceLine {
    const TABLE: &'static str = "invoice_line";
    const ID_COLUMN: &'static str = "invoice_line_id";
    const COLUMNS: &'static [&'static str] = &["payment_id"];

    fn values(&self) -> Vec<SqlValue> {
        vec![SqlValue::BigInt(self.payment_id)]
    }

    fn from_row(row: &RowReader<'_>) -> Result<Self, sqlx::Error> {
        Ok(Self {
            invoice_line_id: row.get("invoice_line_id")?,
            payment_id: row.get("payment_id")?,
        })
    }
}
