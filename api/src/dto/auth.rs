use serde::{Deserialize, Serialize};
use validator::Validate;

use jb_core::domain::entities::User;
use jb_core::domain::value_objects::LoginOutcome;

/// Form body of `POST /login-token`: the email and the phone number
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 50))]
    pub username: String,
    #[validate(length(min = 1, max = 11))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub user_detail: User,
    pub access_token: String,
    pub token_type: String,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            message: "Login Successful".to_string(),
            user_detail: outcome.user,
            access_token: outcome.token.access_token,
            token_type: outcome.token.token_type,
        }
    }
}
