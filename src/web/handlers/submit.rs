//! Form submission handler.

use axum::{
    extract::{Form, State},
    response::Response,
};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::redirect::{moved_permanently, shorten_page_location};
use crate::web::forms::SubmitForm;

/// Stores the submitted URL and sends the browser to its result page.
///
/// # Endpoint
///
/// `POST /submit` with form field `url`
///
/// # Flow
///
/// 1. Insert the URL (a URL that is already stored keeps its id)
/// 2. Answer `301` with `Location: /shorten?url=<url>`
///
/// Other methods on `/submit` are answered with 405 by the router.
///
/// # Errors
///
/// Returns 400 Bad Request if `url` is missing or empty.
/// Returns 500 Internal Server Error on database errors.
pub async fn submit_handler(
    State(state): State<AppState>,
    Form(form): Form<SubmitForm>,
) -> Result<Response, AppError> {
    form.validate()?;

    state.url_service.register(&form.url).await?;

    moved_permanently(&shorten_page_location(&form.url))
}
