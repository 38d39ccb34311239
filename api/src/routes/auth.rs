use actix_web::{web, HttpResponse};

use jb_shared::phone::mask_phone_number;

use crate::app::AppState;
use crate::dto::auth::{LoginForm, LoginResponse};
use crate::dto::validated;
use crate::handlers::ApiError;
use crate::middleware::CurrentUser;

/// `POST /login-token`: form login with the email as username and the
/// phone number as password
pub async fn login(
    state: web::Data<AppState>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, ApiError> {
    let form = validated(form.into_inner())?;
    log::info!(
        "Login attempt for {} with phone {}",
        form.username,
        mask_phone_number(&form.password)
    );

    let outcome = state
        .auth_service
        .login(&form.username, &form.password)
        .await?;
    Ok(HttpResponse::Ok().json(LoginResponse::from(outcome)))
}

/// `GET /loged-user`: the user the bearer token belongs to
pub async fn current_user(user: CurrentUser) -> HttpResponse {
    HttpResponse::Ok().json(user.0)
}
