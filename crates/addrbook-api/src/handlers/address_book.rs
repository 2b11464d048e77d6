//! Single-tenant address book handlers

use std::collections::BTreeSet;

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::{debug, info};

use addrbook_core::{AddressBook, Contact};

use crate::error::{ApiError, Result};
use crate::extract::ValidatedJson;
use crate::request::{ContactRequest, UpdateContactRequest};
use crate::response::ApiResponse;
use crate::server::AppState;

fn book_not_found(name: &str) -> ApiError {
    ApiError::NotFound(format!("addressbook '{}' not found", name))
}

/// POST /addressbooks/{name}
pub async fn create_address_book(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<AddressBook>>> {
    let book = state.books.create_address_book(&name).await.ok_or_else(|| {
        ApiError::NotFound(format!(
            "Addressbook {} already exists or addressbookName is empty.",
            name
        ))
    })?;

    Ok(Json(ApiResponse::ok(format!("{} Addressbook created", name), book)))
}

/// POST /addressbooks/{name}/contacts
pub async fn add_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(contact): ValidatedJson<ContactRequest>,
) -> Result<Json<ApiResponse<()>>> {
    state.books.add_contact(&name, contact).await;

    Ok(Json(ApiResponse::done(format!(
        "Contact added successfully under addressbook {}",
        name
    ))))
}

/// DELETE /addressbooks/{name}/contacts
pub async fn remove_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(contact): ValidatedJson<ContactRequest>,
) -> Result<Json<ApiResponse<()>>> {
    if !state.books.remove_contact(&name, &contact).await {
        return Err(ApiError::NotFound(format!(
            "Address book or contact not found: {}",
            name
        )));
    }

    info!("Removed contact from address book {}", name);
    Ok(Json(ApiResponse::done(format!(
        "Contact removed successfully from addressbook : {}",
        name
    ))))
}

/// PUT /addressbooks/{name}/contacts
pub async fn update_contact(
    State(state): State<AppState>,
    Path(name): Path<String>,
    ValidatedJson(update): ValidatedJson<UpdateContactRequest>,
) -> Result<Json<ApiResponse<()>>> {
    let updated = state
        .books
        .update_contact(&name, &update.old_contact, update.new_contact)
        .await;
    if !updated {
        return Err(ApiError::NotFound(format!(
            "Old contact not found in the addressbook: {}",
            name
        )));
    }

    Ok(Json(ApiResponse::done(format!(
        "Contact updated successfully in addressbook: {}",
        name
    ))))
}

/// GET /addressbooks/{name}/contacts
pub async fn get_contacts(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<BTreeSet<Contact>>>> {
    debug!("Fetching contacts of address book {}", name);
    let book = state
        .books
        .address_book(&name)
        .await
        .ok_or_else(|| book_not_found(&name))?;

    Ok(Json(ApiResponse::ok("Contacts fetched", book.contacts().clone())))
}

/// GET /addressbooks
pub async fn list_address_books(
    State(state): State<AppState>,
) -> Json<ApiResponse<Vec<AddressBook>>> {
    Json(ApiResponse::ok(
        "All Addressbooks retrieved",
        state.books.all_books().await,
    ))
}

/// DELETE /addressbooks/{name}
pub async fn remove_address_book(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    if !state.books.remove_address_book(&name).await {
        return Err(book_not_found(&name));
    }

    Ok(Json(ApiResponse::done(format!(
        "Addressbook {} removed successfully",
        name
    ))))
}

/// GET /addressbooks/contacts/unique
pub async fn unique_contacts(
    State(state): State<AppState>,
) -> Json<ApiResponse<BTreeSet<Contact>>> {
    Json(ApiResponse::ok(
        "Unique contacts retrieved from all addressbooks.",
        state.books.unique_contacts().await,
    ))
}
