//! Multi-tenant address book handlers
//!
//! Every route is scoped by `{user_id}`. Users are only provisioned by
//! address book creation; all other routes answer 404 for unknown users.

use std::collections::{BTreeMap, BTreeSet};

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use tracing::debug;

use addrbook_core::{AddressBook, Contact, User};

use crate::error::{ApiError, Result};
use crate::extract::{ValidatedJson, require_user_id};
use crate::request::{ContactRequest, UpdateContactRequest};
use crate::response::ApiResponse;
use crate::server::AppState;

fn user_not_found(user_id: &str) -> ApiError {
    ApiError::NotFound(format!("user not found: {}", user_id))
}

fn book_or_contact_not_found(book_name: &str) -> ApiError {
    ApiError::NotFound(format!("Address book or contact not found: {}", book_name))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<User>>> {
    require_user_id(&user_id)?;
    let user = state
        .users
        .user(&user_id)
        .await
        .ok_or_else(|| user_not_found(&user_id))?;

    Ok(Json(ApiResponse::ok("All Addressbooks retrieved", user)))
}

/// Query string for address book creation
#[derive(Debug, Default, Deserialize)]
pub struct CreateAddressBookQuery {
    /// Display name stored when this call provisions the user
    pub username: Option<String>,
}

/// POST /users/{user_id}/addressbooks/{name}[?username=...]
pub async fn create_address_book(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
    Query(query): Query<CreateAddressBookQuery>,
) -> Result<Json<ApiResponse<()>>> {
    require_user_id(&user_id)?;
    let created = state
        .users
        .create_address_book_with_username(&user_id, &name, query.username)
        .await;
    if !created {
        return Err(ApiError::NotFound(format!(
            "Addressbook {} already exists for user: {}",
            name, user_id
        )));
    }

    Ok(Json(ApiResponse::done(format!(
        "Addressbook {} created for user: {}",
        name, user_id
    ))))
}

/// POST /users/{user_id}/addressbooks/{name}/contacts
pub async fn add_contact(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
    ValidatedJson(contact): ValidatedJson<ContactRequest>,
) -> Result<Json<ApiResponse<()>>> {
    require_user_id(&user_id)?;
    if !state
        .users
        .add_contact_to_address_book(&user_id, &name, contact)
        .await
    {
        return Err(book_or_contact_not_found(&name));
    }

    Ok(Json(ApiResponse::done(format!(
        "Contact added successfully under addressbook {}",
        name
    ))))
}

/// DELETE /users/{user_id}/addressbooks/{name}/contacts
pub async fn remove_contact(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
    ValidatedJson(contact): ValidatedJson<ContactRequest>,
) -> Result<Json<ApiResponse<()>>> {
    require_user_id(&user_id)?;
    if !state
        .users
        .remove_contact_for_user(&user_id, &name, &contact)
        .await
    {
        return Err(book_or_contact_not_found(&name));
    }

    Ok(Json(ApiResponse::done(format!(
        "Contact removed successfully from addressbook : {}",
        name
    ))))
}

/// PUT /users/{user_id}/addressbooks/{name}/contacts
pub async fn update_contact(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
    ValidatedJson(update): ValidatedJson<UpdateContactRequest>,
) -> Result<Json<ApiResponse<()>>> {
    require_user_id(&user_id)?;
    let updated = state
        .users
        .update_contact_for_user(&user_id, &name, &update.old_contact, update.new_contact)
        .await;
    if !updated {
        return Err(book_or_contact_not_found(&name));
    }

    Ok(Json(ApiResponse::done(format!(
        "Contact updated successfully in addressbook: {}",
        name
    ))))
}

/// GET /users/{user_id}/addressbooks/{name}/contacts
///
/// An empty result (unknown user, unknown book or empty book) is a 404.
pub async fn get_contacts(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<BTreeSet<Contact>>>> {
    require_user_id(&user_id)?;
    debug!("Fetching contacts of {}/{}", user_id, name);

    let contacts = state.users.contacts(&user_id, &name).await;
    if contacts.is_empty() {
        return Err(book_or_contact_not_found(&name));
    }

    Ok(Json(ApiResponse::ok(
        format!("All contacts retrieved under addressbook: {}", name),
        contacts,
    )))
}

/// GET /users/{user_id}/addressbooks
pub async fn list_address_books(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<BTreeMap<String, AddressBook>>>> {
    require_user_id(&user_id)?;
    let books = state
        .users
        .all_books(&user_id)
        .await
        .ok_or_else(|| user_not_found(&user_id))?;

    Ok(Json(ApiResponse::ok("All Addressbooks retrieved", books)))
}

/// DELETE /users/{user_id}/addressbooks/{name}
pub async fn remove_address_book(
    State(state): State<AppState>,
    Path((user_id, name)): Path<(String, String)>,
) -> Result<Json<ApiResponse<()>>> {
    require_user_id(&user_id)?;
    if !state
        .users
        .remove_address_book_for_user(&user_id, &name)
        .await
    {
        return Err(ApiError::NotFound(format!(
            "Addressbook {} not found for user: {}",
            name, user_id
        )));
    }

    Ok(Json(ApiResponse::done(format!(
        "Addressbook {} removed successfully",
        name
    ))))
}

/// GET /users/{user_id}/addressbooks/contacts/unique
pub async fn unique_contacts(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<ApiResponse<BTreeSet<Contact>>>> {
    require_user_id(&user_id)?;
    let contacts = state
        .users
        .unique_contacts(&user_id)
        .await
        .ok_or_else(|| user_not_found(&user_id))?;

    Ok(Json(ApiResponse::ok(
        "Unique contacts retrieved from all addressbooks.",
        contacts,
    )))
}
