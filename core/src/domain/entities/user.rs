//! User entity representing a registered account on the marketplace.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::record::Record;
use crate::errors::ValidationError;
use jb_shared::validation;

/// Registered user.
///
/// The email is the token subject; the phone doubles as the login secret
/// and is unique across users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub user_id: i64,
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub home_phone: Option<String>,
    pub description: Option<String>,
}

/// Registration payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub phone: Option<String>,
    pub first_name: String,
    pub last_name: String,
    pub national_code: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub email: String,
    pub home_phone: Option<String>,
    pub description: Option<String>,
}

/// Partial update; `None` leaves the stored value unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPatch {
    pub phone: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub national_code: Option<String>,
    pub gender: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub email: Option<String>,
    pub home_phone: Option<String>,
    pub description: Option<String>,
}

impl User {
    /// Whether this user is the holder of the given credentials
    pub fn same_identity(&self, other: &User) -> bool {
        self.email == other.email && self.phone == other.phone
    }
}

impl Record for User {
    const RESOURCE: &'static str = "User";

    type New = NewUser;
    type Patch = UserPatch;

    fn from_new(new: NewUser) -> Self {
        Self {
            user_id: 0,
            phone: new.phone,
            first_name: new.first_name,
            last_name: new.last_name,
            national_code: new.national_code,
            gender: new.gender,
            date_of_birth: new.date_of_birth,
            email: new.email,
            home_phone: new.home_phone,
            description: new.description,
        }
    }

    fn id(&self) -> i64 {
        self.user_id
    }

    fn set_id(&mut self, id: i64) {
        self.user_id = id;
    }

    fn apply(&mut self, patch: UserPatch) {
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(first_name) = patch.first_name {
            self.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            self.last_name = last_name;
        }
        if let Some(national_code) = patch.national_code {
            self.national_code = national_code;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            self.date_of_birth = date_of_birth;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(home_phone) = patch.home_phone {
            self.home_phone = Some(home_phone);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        ValidationError::check_length("first_name", &self.first_name, 1, 20)?;
        ValidationError::check_length("last_name", &self.last_name, 1, 20)?;
        if !validation::is_valid_national_code(&self.national_code) {
            return Err(ValidationError::invalid("national_code"));
        }
        if !validation::is_valid_gender(&self.gender) {
            return Err(ValidationError::invalid("gender"));
        }
        if !validation::is_valid_email(&self.email) {
            return Err(ValidationError::invalid("email"));
        }
        if let Some(phone) = &self.phone {
            ValidationError::check_length("phone", phone, 1, 11)?;
        }
        if let Some(home_phone) = &self.home_phone {
            ValidationError::check_length("home_phone", home_phone, 1, 11)?;
        }
        Ok(())
    }

    /// Phone and email are unique independently; email is the token subject
    fn unique_keys(&self) -> Vec<(&'static str, String)> {
        let mut keys = vec![("email", self.email.to_lowercase())];
        if let Some(phone) = &self.phone {
            keys.push(("phone", phone.clone()));
        }
        keys
    }
}
