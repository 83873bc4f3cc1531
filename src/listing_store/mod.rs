// region:    --- Imports
use crate::error::StoreError;
use crate::listing::model::{Listing, ListingUpdate, NewListing};
use crate::query::queries::{self, ListingQuery};
use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- Listing Store Trait

/// 매물 저장소 트레이트
///
/// 모든 메서드는 하나의 구문만 실행한다.
#[async_trait]
pub trait ListingStore: Send + Sync {
    /// 매물 등록 후 생성된 행 반환
    async fn create(&self, listing: NewListing) -> Result<Listing, StoreError>;

    /// 고정된 형태의 목록 조회
    async fn list(&self, query: ListingQuery) -> Result<Vec<Listing>, StoreError>;

    /// 사용자별 매물 조회
    async fn by_user(&self, user_id: &str) -> Result<Vec<Listing>, StoreError>;

    /// 외부 id 로 매물 조회
    async fn by_external_id(&self, firestore_doc_id: &str)
        -> Result<Option<Listing>, StoreError>;

    /// 매물 수정, 변경된 행 수 반환
    async fn update(
        &self,
        firestore_doc_id: &str,
        update: ListingUpdate,
    ) -> Result<u64, StoreError>;

    /// 매물 삭제, 삭제된 행 수 반환
    async fn delete(&self, firestore_doc_id: &str) -> Result<u64, StoreError>;
}

// endregion: --- Listing Store Trait

// region:    --- Postgres Listing Store

/// Postgres 매물 저장소
///
/// 호출마다 풀에서 커넥션 하나를 꺼내 쓰고, `PoolConnection` 이 drop 되면서
/// 성공/실패와 관계없이 풀로 반환된다.
pub struct PgListingStore {
    pool: Arc<PgPool>,
}

impl PgListingStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingStore for PgListingStore {
    async fn create(&self, listing: NewListing) -> Result<Listing, StoreError> {
        info!(
            "{:<12} --> 매물 등록 doc_id: {}",
            "Store", listing.firestore_doc_id
        );
        let mut conn = self.pool.acquire().await?;
        let f = listing.fields;
        let created = sqlx::query_as::<_, Listing>(queries::INSERT_LISTING)
            .bind(listing.firestore_doc_id)
            .bind(f.user_id)
            .bind(f.username)
            .bind(f.email)
            .bind(f.phone_number)
            .bind(f.title)
            .bind(f.description)
            .bind(f.listing_type.as_str())
            .bind(f.bedrooms)
            .bind(f.bathrooms)
            .bind(f.parking)
            .bind(f.furnished)
            .bind(f.address)
            .bind(f.latitude)
            .bind(f.longitude)
            .bind(f.offer)
            .bind(f.price)
            .bind(f.discounted_price)
            .bind(f.image_url)
            .fetch_one(&mut *conn)
            .await?;
        Ok(created)
    }

    async fn list(&self, query: ListingQuery) -> Result<Vec<Listing>, StoreError> {
        info!("{:<12} --> 매물 목록 조회: {:?}", "Store", query);
        let mut conn = self.pool.acquire().await?;
        let sql = query.sql();
        let listings = sqlx::query_as::<_, Listing>(&sql)
            .bind(query.limit)
            .fetch_all(&mut *conn)
            .await?;
        Ok(listings)
    }

    async fn by_user(&self, user_id: &str) -> Result<Vec<Listing>, StoreError> {
        info!("{:<12} --> 사용자별 매물 조회 user_id: {}", "Store", user_id);
        let mut conn = self.pool.acquire().await?;
        let listings = sqlx::query_as::<_, Listing>(queries::GET_LISTINGS_BY_USER)
            .bind(user_id)
            .fetch_all(&mut *conn)
            .await?;
        Ok(listings)
    }

    async fn by_external_id(
        &self,
        firestore_doc_id: &str,
    ) -> Result<Option<Listing>, StoreError> {
        info!("{:<12} --> 매물 조회 doc_id: {}", "Store", firestore_doc_id);
        let mut conn = self.pool.acquire().await?;
        let listing = sqlx::query_as::<_, Listing>(queries::GET_LISTING_BY_DOC_ID)
            .bind(firestore_doc_id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(listing)
    }

    async fn update(
        &self,
        firestore_doc_id: &str,
        update: ListingUpdate,
    ) -> Result<u64, StoreError> {
        info!("{:<12} --> 매물 수정 doc_id: {}", "Store", firestore_doc_id);
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(queries::UPDATE_LISTING)
            .bind(update.user_id)
            .bind(update.username)
            .bind(update.email)
            .bind(update.phone_number)
            .bind(update.title)
            .bind(update.description)
            .bind(update.listing_type.as_str())
            .bind(update.bedrooms)
            .bind(update.bathrooms)
            .bind(update.parking)
            .bind(update.furnished)
            .bind(update.address)
            .bind(update.latitude)
            .bind(update.longitude)
            .bind(update.offer)
            .bind(update.price)
            .bind(update.discounted_price)
            .bind(update.image_url)
            .bind(firestore_doc_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, firestore_doc_id: &str) -> Result<u64, StoreError> {
        info!("{:<12} --> 매물 삭제 doc_id: {}", "Store", firestore_doc_id);
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query(queries::DELETE_LISTING)
            .bind(firestore_doc_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}

// endregion: --- Postgres Listing Store
