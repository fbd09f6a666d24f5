use crate::api::RequestContext;
use crate::api::templates;
use crate::common::error::{ServiceResult, unexpected};
use crate::models::messages::AddMessageForm;
use crate::usecases::messages;
use axum::Form;
use axum::extract::rejection::FormRejection;
use axum::response::{Html, Redirect};
use tracing::debug;

/// Lists every message, newest first. An unreachable database renders an empty board.
pub async fn index(ctx: RequestContext) -> ServiceResult<Html<String>> {
    let messages = messages::fetch_all(&ctx).await;
    match templates::render_index(&ctx.templates, &messages) {
        Ok(page) => Ok(Html(page)),
        Err(e) => unexpected(e),
    }
}

/// Always redirects back to the board, whatever happened to the submission.
pub async fn add(
    ctx: RequestContext,
    form: Result<Form<AddMessageForm>, FormRejection>,
) -> Redirect {
    match form {
        Ok(Form(form)) => messages::add(&ctx, &form.content).await,
        Err(e) => debug!("Ignoring unreadable submission: {e}"),
    }
    Redirect::to("/")
}
