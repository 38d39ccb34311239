//! Listing read model and search criteria.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Item, Location};
use crate::errors::ValidationError;

/// A listing together with its location, if one was recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(flatten)]
    pub item: Item,
    pub location: Option<Location>,
}

/// Search criteria; every provided field narrows the result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingSearch {
    /// Substring of the listing name
    pub name: Option<String>,
    /// Substring of the location's state
    pub state: Option<String>,
    /// Substring of the location's city
    pub city: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl ListingSearch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let (Some(min), Some(max)) = (self.min_price, self.max_price) {
            if min > max {
                return Err(ValidationError::InvalidRange {
                    start: "min_price".to_string(),
                    end: "max_price".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Evaluates the criteria against a listing held in memory
    pub fn matches(&self, item: &Item, location: Option<&Location>) -> bool {
        fn contains(haystack: &str, needle: &Option<String>) -> bool {
            match needle {
                Some(needle) => haystack.to_lowercase().contains(&needle.to_lowercase()),
                None => true,
            }
        }

        if !contains(&item.name, &self.name) {
            return false;
        }
        if self.min_price.is_some_and(|min| item.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price > max) {
            return false;
        }
        if self.state.is_none() && self.city.is_none() {
            return true;
        }
        match location {
            Some(location) => {
                contains(&location.state, &self.state) && contains(&location.city, &self.city)
            }
            None => false,
        }
    }
}
