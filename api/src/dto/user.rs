use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::errors::ValidationError;
use jb_shared::phone;

use jb_core::domain::entities::{NewUser, UserPatch};

/// Mobile numbers use the national `09xxxxxxxxx` form, home numbers carry
/// an area code
fn check_phones(mobile: Option<&str>, home: Option<&str>) -> Result<(), ValidationError> {
    if mobile.is_some_and(|p| !phone::is_valid_mobile(p)) {
        return Err(ValidationError::invalid("phone"));
    }
    if home.is_some_and(|p| !phone::is_valid_landline(p)) {
        return Err(ValidationError::invalid("home_phone"));
    }
    Ok(())
}

/// Body of `POST /register/user`
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUserRequest {
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub first_name: String,
    #[validate(length(min = 1, max = 20))]
    pub last_name: String,
    #[validate(length(equal = 10))]
    pub national_code: String,
    #[validate(length(equal = 1))]
    pub gender: String,
    pub date_of_birth: NaiveDate,
    #[validate(email, length(max = 50))]
    pub email: String,
    pub home_phone: Option<String>,
    pub description: Option<String>,
}

impl RegisterUserRequest {
    pub fn check_phones(&self) -> Result<(), ValidationError> {
        check_phones(self.phone.as_deref(), self.home_phone.as_deref())
    }
}

impl From<RegisterUserRequest> for NewUser {
    fn from(request: RegisterUserRequest) -> Self {
        Self {
            phone: request.phone,
            first_name: request.first_name,
            last_name: request.last_name,
            national_code: request.national_code,
            gender: request.gender,
            date_of_birth: request.date_of_birth,
            email: request.email,
            home_phone: request.home_phone,
            description: request.description,
        }
    }
}

/// Body of `PUT /user-update/{id}`; absent fields keep their value
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateUserRequest {
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub last_name: Option<String>,
    #[validate(length(equal = 10))]
    pub national_code: Option<String>,
    #[validate(length(equal = 1))]
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[validate(email, length(max = 50))]
    pub email: Option<String>,
    pub home_phone: Option<String>,
    pub description: Option<String>,
}

impl UpdateUserRequest {
    pub fn check_phones(&self) -> Result<(), ValidationError> {
        check_phones(self.phone.as_deref(), self.home_phone.as_deref())
    }
}

impl From<UpdateUserRequest> for UserPatch {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            phone: request.phone,
            first_name: request.first_name,
            last_name: request.last_name,
            national_code: request.national_code,
            gender: request.gender,
            date_of_birth: request.date_of_birth,
            email: request.email,
            home_phone: request.home_phone,
            description: request.description,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct UsersQuery {
    pub limit: Option<u32>,
}
