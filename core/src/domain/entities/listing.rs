//! Listing ("item") entities and the attachments hanging off a listing.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::money::check_amount;
use crate::domain::record::Record;
use crate::errors::ValidationError;

/// Characters of `about` covered by the listing uniqueness index
const ABOUT_KEY_LENGTH: usize = 255;

fn check_count(field: &str, value: i32) -> Result<(), ValidationError> {
    if value < 0 {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: "0".to_string(),
            max: i32::MAX.to_string(),
        });
    }
    Ok(())
}

/// A rentable house listed by its owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: i64,
    pub owner_id: i64,
    pub name: String,
    pub price: Decimal,
    pub about: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub owner_id: i64,
    pub name: String,
    pub price: Decimal,
    pub about: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub about: Option<String>,
}

impl Item {
    pub fn is_owned_by(&self, user_id: i64) -> bool {
        self.owner_id == user_id
    }
}

impl Record for Item {
    const RESOURCE: &'static str = "House";
    const FILTERS: &'static [&'static str] = &["owner_id"];

    type New = NewItem;
    type Patch = ItemPatch;

    fn from_new(new: NewItem) -> Self {
        Self {
            item_id: 0,
            owner_id: new.owner_id,
            name: new.name,
            price: new.price,
            about: new.about,
        }
    }

    fn id(&self) -> i64 {
        self.item_id
    }

    fn set_id(&mut self, id: i64) {
        self.item_id = id;
    }

    fn apply(&mut self, patch: ItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(about) = patch.about {
            self.about = Some(about);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("name", &self.name, 1, 50)?;
        check_amount("price", self.price)
    }

    /// Two listings may not share both name and description. Compared the
    /// way the `uq_items_name_about` index does: case-insensitively, on the
    /// first 255 characters of the description, a missing one counting as
    /// empty.
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        let about: String = self
            .about
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(ABOUT_KEY_LENGTH)
            .collect();
        vec![(
            "name_about",
            format!("{}\u{1f}{}", self.name.to_lowercase(), about.to_lowercase()),
        )]
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "owner_id" => Some(self.owner_id),
            _ => None,
        }
    }
}

/// Where a listing is; at most one per listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub location_id: i64,
    pub state: String,
    pub city: String,
    pub exact_loc: String,
    pub item_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLocation {
    pub state: String,
    pub city: String,
    pub exact_loc: String,
    pub item_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationPatch {
    pub state: Option<String>,
    pub city: Option<String>,
    pub exact_loc: Option<String>,
}

impl Record for Location {
    const RESOURCE: &'static str = "Location";
    const FILTERS: &'static [&'static str] = &["item_id"];

    type New = NewLocation;
    type Patch = LocationPatch;

    fn from_new(new: NewLocation) -> Self {
        Self {
            location_id: 0,
            state: new.state,
            city: new.city,
            exact_loc: new.exact_loc,
            item_id: new.item_id,
        }
    }

    fn id(&self) -> i64 {
        self.location_id
    }

    fn set_id(&mut self, id: i64) {
        self.location_id = id;
    }

    fn apply(&mut self, patch: LocationPatch) {
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(exact_loc) = patch.exact_loc {
            self.exact_loc = exact_loc;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("state", &self.state, 1, 50)?;
        ValidationError::check_length("city", &self.city, 1, 50)?;
        ValidationError::check_length("exact_loc", &self.exact_loc, 1, 255)
    }

    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        vec![("item", self.item_id.to_string())]
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

/// Controlled vocabulary of listing types (villa, apartment, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeList {
    pub type_list_id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTypeList {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeListPatch {
    pub name: Option<String>,
}

impl Record for TypeList {
    const RESOURCE: &'static str = "Type list";

    type New = NewTypeList;
    type Patch = TypeListPatch;

    fn from_new(new: NewTypeList) -> Self {
        Self {
            type_list_id: 0,
            name: new.name,
        }
    }

    fn id(&self) -> i64 {
        self.type_list_id
    }

    fn set_id(&mut self, id: i64) {
        self.type_list_id = id;
    }

    fn apply(&mut self, patch: TypeListPatch) {
        if let Some(name) = patch.name {
            self.name = Some(name);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        match &self.name {
            Some(name) => ValidationError::check_length("name", name, 0, 255),
            None => Ok(()),
        }
    }
}

/// Links a listing to an entry of the type vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub type_id: i64,
    pub item_id: i64,
    pub type_list_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewType {
    pub item_id: i64,
    pub type_list_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypePatch {
    pub item_id: Option<i64>,
    pub type_list_id: Option<i64>,
}

impl Record for Type {
    const RESOURCE: &'static str = "Type";
    const FILTERS: &'static [&'static str] = &["item_id", "type_list_id"];

    type New = NewType;
    type Patch = TypePatch;

    fn from_new(new: NewType) -> Self {
        Self {
            type_id: 0,
            item_id: new.item_id,
            type_list_id: new.type_list_id,
        }
    }

    fn id(&self) -> i64 {
        self.type_id
    }

    fn set_id(&mut self, id: i64) {
        self.type_id = id;
    }

    fn apply(&mut self, patch: TypePatch) {
        if let Some(item_id) = patch.item_id {
            self.item_id = item_id;
        }
        if let Some(type_list_id) = patch.type_list_id {
            self.type_list_id = type_list_id;
        }
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            "type_list_id" => Some(self.type_list_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub feature_id: i64,
    pub item_id: i64,
    pub name: String,
    pub more_detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewFeature {
    pub item_id: i64,
    pub name: String,
    pub more_detail: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturePatch {
    pub name: Option<String>,
    pub more_detail: Option<String>,
}

impl Record for Feature {
    const RESOURCE: &'static str = "Feature";
    const FILTERS: &'static [&'static str] = &["item_id"];

    type New = NewFeature;
    type Patch = FeaturePatch;

    fn from_new(new: NewFeature) -> Self {
        Self {
            feature_id: 0,
            item_id: new.item_id,
            name: new.name,
            more_detail: new.more_detail,
        }
    }

    fn id(&self) -> i64 {
        self.feature_id
    }

    fn set_id(&mut self, id: i64) {
        self.feature_id = id;
    }

    fn apply(&mut self, patch: FeaturePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(more_detail) = patch.more_detail {
            self.more_detail = Some(more_detail);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("name", &self.name, 1, 255)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

/// Check-in / check-out hours of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenClose {
    pub open_close_id: i64,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub item_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOpenClose {
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub item_id: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenClosePatch {
    pub open_time: Option<NaiveTime>,
    pub close_time: Option<NaiveTime>,
}

impl Record for OpenClose {
    const RESOURCE: &'static str = "Open/close hours";
    const FILTERS: &'static [&'static str] = &["item_id"];

    type New = NewOpenClose;
    type Patch = OpenClosePatch;

    fn from_new(new: NewOpenClose) -> Self {
        Self {
            open_close_id: 0,
            open_time: new.open_time,
            close_time: new.close_time,
            item_id: new.item_id,
        }
    }

    fn id(&self) -> i64 {
        self.open_close_id
    }

    fn set_id(&mut self, id: i64) {
        self.open_close_id = id;
    }

    fn apply(&mut self, patch: OpenClosePatch) {
        if let Some(open_time) = patch.open_time {
            self.open_time = open_time;
        }
        if let Some(close_time) = patch.close_time {
            self.close_time = close_time;
        }
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

/// House rule such as "pets allowed"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub rule_id: i64,
    pub item_id: i64,
    pub name: String,
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRule {
    pub item_id: i64,
    pub name: String,
    pub value: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulePatch {
    pub name: Option<String>,
    pub value: Option<bool>,
}

impl Record for Rule {
    const RESOURCE: &'static str = "Rule";
    const FILTERS: &'static [&'static str] = &["item_id"];

    type New = NewRule;
    type Patch = RulePatch;

    fn from_new(new: NewRule) -> Self {
        Self {
            rule_id: 0,
            item_id: new.item_id,
            name: new.name,
            value: new.value,
        }
    }

    fn id(&self) -> i64 {
        self.rule_id
    }

    fn set_id(&mut self, id: i64) {
        self.rule_id = id;
    }

    fn apply(&mut self, patch: RulePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(value) = patch.value {
            self.value = value;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("name", &self.name, 1, 255)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub property_id: i64,
    pub item_id: i64,
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProperty {
    pub item_id: i64,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyPatch {
    pub status: Option<String>,
}

impl Record for Property {
    const RESOURCE: &'static str = "Property";
    const FILTERS: &'static [&'static str] = &["item_id"];

    type New = NewProperty;
    type Patch = PropertyPatch;

    fn from_new(new: NewProperty) -> Self {
        Self {
            property_id: 0,
            item_id: new.item_id,
            status: new.status,
        }
    }

    fn id(&self) -> i64 {
        self.property_id
    }

    fn set_id(&mut self, id: i64) {
        self.property_id = id;
    }

    fn apply(&mut self, patch: PropertyPatch) {
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("status", &self.status, 1, 255)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

/// Room and bed counts of a listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescription {
    pub item_desc_id: i64,
    pub item_id: i64,
    pub capacity: i32,
    pub room: i32,
    pub single_bed: i32,
    pub double_bed: i32,
    pub shower: i32,
    pub foreign_wc: i32,
    pub persian_wc: i32,
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItemDescription {
    pub item_id: i64,
    pub capacity: i32,
    pub room: i32,
    pub single_bed: i32,
    pub double_bed: i32,
    pub shower: i32,
    pub foreign_wc: i32,
    pub persian_wc: i32,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDescriptionPatch {
    pub capacity: Option<i32>,
    pub room: Option<i32>,
    pub single_bed: Option<i32>,
    pub double_bed: Option<i32>,
    pub shower: Option<i32>,
    pub foreign_wc: Option<i32>,
    pub persian_wc: Option<i32>,
    pub caption: Option<String>,
}

impl Record for ItemDescription {
    const RESOURCE: &'static str = "Item description";
    const FILTERS: &'static [&'static str] = &["item_id"];

    type New = NewItemDescription;
    type Patch = ItemDescriptionPatch;

    fn from_new(new: NewItemDescription) -> Self {
        Self {
            item_desc_id: 0,
            item_id: new.item_id,
            capacity: new.capacity,
            room: new.room,
            single_bed: new.single_bed,
            double_bed: new.double_bed,
            shower: new.shower,
            foreign_wc: new.foreign_wc,
            persian_wc: new.persian_wc,
            caption: new.caption,
        }
    }

    fn id(&self) -> i64 {
        self.item_desc_id
    }

    fn set_id(&mut self, id: i64) {
        self.item_desc_id = id;
    }

    fn apply(&mut self, patch: ItemDescriptionPatch) {
        if let Some(v) = patch.capacity {
            self.capacity = v;
        }
        if let Some(v) = patch.room {
            self.room = v;
        }
        if let Some(v) = patch.single_bed {
            self.single_bed = v;
        }
        if let Some(v) = patch.double_bed {
            self.double_bed = v;
        }
        if let Some(v) = patch.shower {
            self.shower = v;
        }
        if let Some(v) = patch.foreign_wc {
            self.foreign_wc = v;
        }
        if let Some(v) = patch.persian_wc {
            self.persian_wc = v;
        }
        if let Some(caption) = patch.caption {
            self.caption = caption;
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for (field, value) in [
            ("capacity", self.capacity),
            ("room", self.room),
            ("single_bed", self.single_bed),
            ("double_bed", self.double_bed),
            ("shower", self.shower),
            ("foreign_wc", self.foreign_wc),
            ("persian_wc", self.persian_wc),
        ] {
            check_count(field, value)?;
        }
        ValidationError::check_length("caption", &self.caption, 0, 255)
    }

    fn filter_value(&self, field: &str) -> Option<i64> {
        match field {
            "item_id" => Some(self.item_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(about: Option<&str>) -> Item {
        Item::from_new(NewItem {
            owner_id: 1,
            name: "Villa".to_string(),
            price: Decimal::from_str("120.50").unwrap(),
            about: about.map(str::to_string),
        })
    }

    #[test]
    fn test_item_unique_key_combines_name_and_about() {
        assert_eq!(item(Some("sea")).unique_keys(), item(Some("sea")).unique_keys());
        assert_ne!(item(Some("sea")).unique_keys(), item(Some("lake")).unique_keys());
        assert_eq!(item(None).unique_keys(), item(Some("")).unique_keys());
    }

    #[test]
    fn test_item_unique_key_ignores_case_and_long_tail() {
        assert_eq!(item(Some("Sea View")).unique_keys(), item(Some("sea view")).unique_keys());

        let prefix = "a".repeat(ABOUT_KEY_LENGTH);
        assert_eq!(
            item(Some(&format!("{}one", prefix))).unique_keys(),
            item(Some(&format!("{}two", prefix))).unique_keys()
        );
    }

    #[test]
    fn test_item_rejects_negative_price() {
        let mut listing = item(None);
        listing.price = Decimal::from_str("-1").unwrap();
        assert!(matches!(
            listing.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_item_patch_keeps_omitted_fields() {
        let mut listing = item(Some("sea"));
        listing.apply(ItemPatch {
            price: Some(Decimal::from(200)),
            ..Default::default()
        });
        assert_eq!(listing.price, Decimal::from(200));
        assert_eq!(listing.name, "Villa");
        assert_eq!(listing.about.as_deref(), Some("sea"));
    }

    #[test]
    fn test_location_is_unique_per_item() {
        let location = Location::from_new(NewLocation {
            state: "Gilan".to_string(),
            city: "Rasht".to_string(),
            exact_loc: "Main st".to_string(),
            item_id: 9,
        });
        assert_eq!(location.unique_keys(), vec![("item", "9".to_string())]);
        assert_eq!(location.filter_value("item_id"), Some(9));
    }

    #[test]
    fn test_description_rejects_negative_counts() {
        let description = ItemDescription::from_new(NewItemDescription {
            item_id: 1,
            capacity: 4,
            room: -1,
            single_bed: 1,
            double_bed: 1,
            shower: 1,
            foreign_wc: 1,
            persian_wc: 0,
            caption: "Cozy".to_string(),
        });
        assert!(description.validate().is_err());
    }
}
