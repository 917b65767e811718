//! HTTP handlers for signup, login and logout.

use axum::extract::State;
use axum::response::{IntoResponse, Redirect, Response};
use maud::Markup;

use crate::application::handlers::{LoginOutcome, SignupOutcome};
use crate::domain::forms::Form;
use crate::ports::AUTHENTICATED_USER_ID_KEY;

use crate::adapters::http::error::WebError;
use crate::adapters::http::extract::{PageContext, PostedForm};
use crate::adapters::http::middleware::RequireAuth;
use crate::adapters::http::state::AppState;
use crate::adapters::http::views;

/// GET /user/signup
pub async fn signup_form(ctx: PageContext) -> Result<Markup, WebError> {
    Ok(views::signup_page(&ctx.template_data().await?, &Form::empty()))
}

/// POST /user/signup
pub async fn signup(
    State(state): State<AppState>,
    ctx: PageContext,
    form: PostedForm,
) -> Result<Response, WebError> {
    match state.signup_user_handler().handle(form.into_form()).await? {
        SignupOutcome::Registered(_) => {
            ctx.flash("Your signup was successful. Please log in.").await?;
            Ok(Redirect::to("/user/login").into_response())
        }
        SignupOutcome::Invalid(form) => {
            let page = views::signup_page(&ctx.template_data().await?, &form);
            Ok(page.into_response())
        }
    }
}

/// GET /user/login
pub async fn login_form(ctx: PageContext) -> Result<Markup, WebError> {
    Ok(views::login_page(&ctx.template_data().await?, &Form::empty()))
}

/// POST /user/login
///
/// The session id is renewed before the user id is stored.
pub async fn login(
    State(state): State<AppState>,
    ctx: PageContext,
    form: PostedForm,
) -> Result<Response, WebError> {
    match state.login_user_handler().handle(form.into_form()).await? {
        LoginOutcome::Authenticated { user_id, name } => {
            let session = ctx.session();
            session.renew().await?;
            session
                .put(AUTHENTICATED_USER_ID_KEY, user_id.to_string())
                .await?;
            ctx.flash(format!("Hello {}", name)).await?;
            Ok(Redirect::to("/").into_response())
        }
        LoginOutcome::Invalid(form) => {
            let page = views::login_page(&ctx.template_data().await?, &form);
            Ok(page.into_response())
        }
    }
}

/// POST /user/logout
pub async fn logout(
    RequireAuth(user): RequireAuth,
    ctx: PageContext,
) -> Result<Response, WebError> {
    let session = ctx.session();
    session.renew().await?;
    session.remove(AUTHENTICATED_USER_ID_KEY).await?;
    ctx.flash("You have been logged out.").await?;

    tracing::info!(user_id = %user.id, "user logged out");
    Ok(Redirect::to("/").into_response())
}
