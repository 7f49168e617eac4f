use super::handlers::create_ski_field::{__path_create_ski_field, create_ski_field};
use super::handlers::delete_ski_field::{__path_delete_ski_field, delete_ski_field};
use super::handlers::query_ski_fields::{__path_query_ski_fields, query_ski_fields};
use super::handlers::update_ski_field::{__path_update_ski_field, update_ski_field};
use crate::application::http::server::app_state::AppState;

use axum::{
    Router,
    routing::{post, put},
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(create_ski_field, update_ski_field, delete_ski_field, query_ski_fields))]
pub struct SkiFieldApiDoc;

pub fn ski_field_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/skifields", state.args.server.root_path),
            post(create_ski_field),
        )
        .route(
            &format!("{}/api/skifields/query", state.args.server.root_path),
            post(query_ski_fields),
        )
        .route(
            &format!("{}/api/skifields/{{id}}", state.args.server.root_path),
            put(update_ski_field).delete(delete_ski_field),
        )
}
