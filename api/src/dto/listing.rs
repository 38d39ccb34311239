use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::domain::entities::ItemPatch;
use jb_core::domain::value_objects::ListingSearch;
use jb_core::services::{ListingLocation, NewListing};

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LocationRequest {
    #[validate(length(min = 1, max = 50))]
    pub state: String,
    #[validate(length(min = 1, max = 50))]
    pub city: String,
    #[validate(length(min = 1, max = 255))]
    pub exact_loc: String,
}

/// Body of `POST /create-house`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateHouseRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    pub price: Decimal,
    pub about: Option<String>,
    #[validate(nested)]
    pub location: Option<LocationRequest>,
}

impl From<CreateHouseRequest> for NewListing {
    fn from(request: CreateHouseRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            about: request.about,
            location: request.location.map(|l| ListingLocation {
                state: l.state,
                city: l.city,
                exact_loc: l.exact_loc,
            }),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateHouseRequest {
    #[validate(length(min = 1, max = 50))]
    pub name: Option<String>,
    pub price: Option<Decimal>,
    pub about: Option<String>,
}

impl From<UpdateHouseRequest> for ItemPatch {
    fn from(request: UpdateHouseRequest) -> Self {
        Self {
            name: request.name,
            price: request.price,
            about: request.about,
        }
    }
}

/// Query of `GET /houses`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HouseSearchQuery {
    pub name: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
}

impl From<HouseSearchQuery> for ListingSearch {
    fn from(query: HouseSearchQuery) -> Self {
        Self {
            name: query.name,
            state: query.state,
            city: query.city,
            min_price: query.min_price,
            max_price: query.max_price,
        }
    }
}
