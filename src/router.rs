// region:    --- Imports
use crate::handlers;
use crate::listing_store::ListingStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

// endregion: --- Imports

/// 핸들러 공유 상태
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }
}

/// 라우터 생성
///
/// `/listings/:id` 는 GET(고정 목록 또는 사용자 id), PUT/DELETE(firestore_doc_id) 가
/// 같은 경로를 공유한다. 고정 목록 이름을 정적 경로로 두면 같은 이름의 doc id 로
/// 수정/삭제할 수 없게 된다.
pub fn create_router(state: AppState) -> Router {
    // 모든 응답에 허용적인 cors 설정
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(handlers::handle_root))
        .route("/listings", post(handlers::handle_create_listing))
        .route("/listings/sale/all", get(handlers::handle_all_sale_listings))
        .route("/listings/rent/all", get(handlers::handle_all_rent_listings))
        .route(
            "/listings/:id",
            get(handlers::handle_listings_segment)
                .put(handlers::handle_update_listing)
                .delete(handlers::handle_delete_listing),
        )
        .route("/listing/:firestore_doc_id", get(handlers::handle_get_listing))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
