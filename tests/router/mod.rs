//! End-to-end tests driving the full router, including middleware and body extraction.

mod favorites;
mod path_id;
mod scenario;

use axum::{
    http::{Method, StatusCode},
    Router,
};
use holocron::server::router;
use holocron_test_utils::prelude::*;
use serde_json::json;
use tower::ServiceExt;

use crate::util::{body_json, empty_request, json_request, TestContextExt};

fn app(test: &TestContext) -> Router {
    router::routes().with_state(test.into_app_state())
}
