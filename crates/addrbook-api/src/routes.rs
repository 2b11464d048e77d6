//! Route definitions
//!
//! Defines all HTTP API endpoints.

use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers::{address_book, health, user};
use crate::server::AppState;

/// Versioned API prefix
pub const API_PREFIX: &str = "/api/v1";

/// Create the API router
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health))
        .merge(address_book_routes())
        .merge(user_routes())
}

/// Legacy single-tenant API
fn address_book_routes() -> Router<AppState> {
    let base = format!("{}/addressbooks", API_PREFIX);

    Router::new()
        .route(&base, get(address_book::list_address_books))
        .route(
            &format!("{}/contacts/unique", base),
            get(address_book::unique_contacts),
        )
        .route(
            &format!("{}/{{name}}", base),
            post(address_book::create_address_book).delete(address_book::remove_address_book),
        )
        .route(
            &format!("{}/{{name}}/contacts", base),
            get(address_book::get_contacts)
                .post(address_book::add_contact)
                .put(address_book::update_contact)
                .delete(address_book::remove_contact),
        )
}

/// Multi-tenant API scoped by user id
fn user_routes() -> Router<AppState> {
    let user = format!("{}/users/{{user_id}}", API_PREFIX);
    let base = format!("{}/addressbooks", user);

    Router::new()
        .route(&user, get(user::get_user))
        .route(&base, get(user::list_address_books))
        .route(
            &format!("{}/contacts/unique", base),
            get(user::unique_contacts),
        )
        .route(
            &format!("{}/{{name}}", base),
            post(user::create_address_book).delete(user::remove_address_book),
        )
        .route(
            &format!("{}/{{name}}/contacts", base),
            get(user::get_contacts)
                .post(user::add_contact)
                .put(user::update_contact)
                .delete(user::remove_contact),
        )
}
