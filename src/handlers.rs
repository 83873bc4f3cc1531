// region:    --- Imports
use crate::error::AppError;
use crate::listing::model::{Listing, ListingUpdate, NewListing};
use crate::query::queries::ListingQuery;
use crate::router::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use tracing::info;

// endregion: --- Imports

pub const WELCOME_MESSAGE: &str = "Welcome to the real estate API!";
pub const LISTING_NOT_FOUND: &str = "Listing not found for the given ID.";
pub const USER_LISTINGS_NOT_FOUND: &str = "Listings not found for the given user ID.";
pub const LISTING_UPDATED: &str = "Listing updated successfully";
pub const LISTING_DELETED: &str = "Listing deleted successfully";

type JsonResult<T> = Result<Json<T>, AppError>;

// region:    --- Command Handlers

/// 매물 등록
pub async fn handle_create_listing(
    State(state): State<AppState>,
    body: Result<Json<NewListing>, JsonRejection>,
) -> JsonResult<Listing> {
    let Json(new_listing) = body?;
    info!(
        "{:<12} --> 매물 등록 요청 doc_id: {}",
        "Handler", new_listing.firestore_doc_id
    );
    let listing = state.store.create(new_listing).await?;
    Ok(Json(listing))
}

/// 매물 수정 (대상이 없어도 성공 응답)
pub async fn handle_update_listing(
    State(state): State<AppState>,
    Path(firestore_doc_id): Path<String>,
    body: Result<Json<ListingUpdate>, JsonRejection>,
) -> JsonResult<Value> {
    let Json(update) = body?;
    let rows = state.store.update(&firestore_doc_id, update).await?;
    info!(
        "{:<12} --> 매물 수정 doc_id: {} (rows: {})",
        "Handler", firestore_doc_id, rows
    );
    Ok(Json(json!({ "message": LISTING_UPDATED })))
}

/// 매물 삭제 (대상이 없어도 성공 응답)
pub async fn handle_delete_listing(
    State(state): State<AppState>,
    Path(firestore_doc_id): Path<String>,
) -> JsonResult<Value> {
    let rows = state.store.delete(&firestore_doc_id).await?;
    info!(
        "{:<12} --> 매물 삭제 doc_id: {} (rows: {})",
        "Handler", firestore_doc_id, rows
    );
    Ok(Json(json!({ "message": LISTING_DELETED })))
}

// endregion: --- Command Handlers

// region:    --- Query Handlers

async fn list_with(state: &AppState, query: ListingQuery) -> JsonResult<Vec<Listing>> {
    info!("{:<12} --> 매물 목록 조회: {:?}", "Handler", query);
    let listings = state.store.list(query).await?;
    Ok(Json(listings))
}

/// `/listings/:id` 조회
///
/// 고정 목록 이름이면 해당 목록을, 그 외에는 사용자 id 로 보고 사용자별 매물을 조회한다.
pub async fn handle_listings_segment(
    State(state): State<AppState>,
    Path(segment): Path<String>,
) -> JsonResult<Vec<Listing>> {
    match fixed_list(&segment) {
        Some(query) => list_with(&state, query).await,
        None => user_listings(&state, &segment).await,
    }
}

fn fixed_list(segment: &str) -> Option<ListingQuery> {
    match segment {
        "latest" => Some(ListingQuery::LATEST),
        "sale" => Some(ListingQuery::SALE),
        "rent" => Some(ListingQuery::RENT),
        "offer" => Some(ListingQuery::OFFER),
        "discounted_price" => Some(ListingQuery::DISCOUNTED),
        _ => None,
    }
}

/// 매매 매물 전체
pub async fn handle_all_sale_listings(
    State(state): State<AppState>,
) -> JsonResult<Vec<Listing>> {
    list_with(&state, ListingQuery::SALE_ALL).await
}

/// 임대 매물 전체
pub async fn handle_all_rent_listings(
    State(state): State<AppState>,
) -> JsonResult<Vec<Listing>> {
    list_with(&state, ListingQuery::RENT_ALL).await
}

/// 사용자별 매물 조회 (없으면 404)
async fn user_listings(state: &AppState, user_id: &str) -> JsonResult<Vec<Listing>> {
    info!("{:<12} --> 사용자별 매물 조회 user_id: {}", "Handler", user_id);
    let listings = state.store.by_user(user_id).await?;
    if listings.is_empty() {
        return Err(AppError::NotFound(USER_LISTINGS_NOT_FOUND));
    }
    Ok(Json(listings))
}

/// 매물 조회
pub async fn handle_get_listing(
    State(state): State<AppState>,
    Path(firestore_doc_id): Path<String>,
) -> JsonResult<Listing> {
    info!("{:<12} --> 매물 조회 doc_id: {}", "Handler", firestore_doc_id);
    state
        .store
        .by_external_id(&firestore_doc_id)
        .await?
        .map(Json)
        .ok_or(AppError::NotFound(LISTING_NOT_FOUND))
}

/// 루트 경로
pub async fn handle_root() -> Json<Value> {
    Json(json!({ "message": WELCOME_MESSAGE }))
}

// endregion: --- Query Handlers
