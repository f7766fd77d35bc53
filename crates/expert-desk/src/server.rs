//! HTTP surface: `GET /` renders the page, `POST /` submits the form.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{State, rejection::FormRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
};
use expert_core::{generic::GenericMessage, provider::ChatCompletionProvider};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::{
    page::{PageController, PageView, PostedForm},
    view::render_page,
};

/// Router for a fully configured page.
pub fn router<B>(controller: PageController<B>) -> Router
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    Router::new()
        .route("/", get(show_page::<B>).post(submit_page::<B>))
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(controller))
}

/// Router used when no API key could be resolved: every request gets the
/// blocking configuration error and no form.
pub fn unconfigured_router() -> Router {
    Router::new()
        .fallback(show_unconfigured)
        .layer(TraceLayer::new_for_http())
}

async fn show_page<B>(State(controller): State<Arc<PageController<B>>>) -> Response
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    respond(&controller.render())
}

async fn submit_page<B>(
    State(controller): State<Arc<PageController<B>>>,
    form: Result<Form<PostedForm>, FormRejection>,
) -> Response
where
    B: ChatCompletionProvider + 'static,
    GenericMessage: Into<B::Message>,
{
    let posted = match form {
        Ok(Form(posted)) => posted,
        Err(rejection) => {
            warn!(error = %rejection, "rejected malformed form submission");
            return bad_request(&controller.render());
        }
    };

    match posted.into_submission() {
        Ok(submission) => respond(&controller.submit(submission).await),
        Err(view) => {
            warn!("rejected unknown persona");
            bad_request(&view)
        }
    }
}

async fn show_unconfigured() -> Response {
    respond(&PageView::unconfigured())
}

fn bad_request(view: &PageView) -> Response {
    (StatusCode::BAD_REQUEST, Html(render_page(view))).into_response()
}

fn respond(view: &PageView) -> Response {
    let status = match view.error() {
        Some(err) if err.is_blocking() => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::OK,
    };
    (status, Html(render_page(view))).into_response()
}
