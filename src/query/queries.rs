/// 매물 등록
pub const INSERT_LISTING: &str = r#"
    INSERT INTO listings (firestore_doc_id, user_id, username, email, phone_number, title, description, type, bedrooms, bathrooms, parking, furnished, address, latitude, longitude, offer, price, discounted_price, image_url, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, CURRENT_TIMESTAMP)
    RETURNING id, firestore_doc_id, user_id, username, email, phone_number, title, description, type, bedrooms, bathrooms, parking, furnished, address, latitude, longitude, offer, price, discounted_price, image_url, created_at
"#;

/// 사용자별 매물 조회
pub const GET_LISTINGS_BY_USER: &str = "SELECT id, firestore_doc_id, user_id, username, email, phone_number, title, description, type, bedrooms, bathrooms, parking, furnished, address, latitude, longitude, offer, price, discounted_price, image_url, created_at FROM listings WHERE user_id = $1";

/// 외부 id 로 매물 조회
pub const GET_LISTING_BY_DOC_ID: &str = "SELECT id, firestore_doc_id, user_id, username, email, phone_number, title, description, type, bedrooms, bathrooms, parking, furnished, address, latitude, longitude, offer, price, discounted_price, image_url, created_at FROM listings WHERE firestore_doc_id = $1";

/// 매물 수정 (firestore_doc_id, created_at 은 변경하지 않음)
pub const UPDATE_LISTING: &str = r#"
    UPDATE listings
    SET user_id = $1, username = $2, email = $3, phone_number = $4, title = $5, description = $6, type = $7, bedrooms = $8, bathrooms = $9, parking = $10, furnished = $11, address = $12, latitude = $13, longitude = $14, offer = $15, price = $16, discounted_price = $17, image_url = $18
    WHERE firestore_doc_id = $19
"#;

/// 매물 삭제
pub const DELETE_LISTING: &str = "DELETE FROM listings WHERE firestore_doc_id = $1";

/// 서버 버전 조회
pub const GET_SERVER_VERSION: &str = "SELECT version()";

// region:    --- List Query

/// 목록 조회 필터
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingFilter {
    All,
    Sale,
    Rent,
    Offer,
    Discounted,
}

impl ListingFilter {
    fn predicate(&self) -> &'static str {
        match self {
            ListingFilter::All => "",
            ListingFilter::Sale => "WHERE type = 'sale'",
            ListingFilter::Rent => "WHERE type = 'rent'",
            ListingFilter::Offer => "WHERE offer = true",
            ListingFilter::Discounted => "WHERE discounted_price > 0",
        }
    }
}

/// created_at 정렬 방향
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    OldestFirst,
    NewestFirst,
}

impl SortOrder {
    fn keyword(&self) -> &'static str {
        match self {
            SortOrder::OldestFirst => "ASC",
            SortOrder::NewestFirst => "DESC",
        }
    }
}

/// 목록 조회 형태 (필터, 정렬, 개수 제한)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingQuery {
    pub filter: ListingFilter,
    pub order: SortOrder,
    pub limit: Option<i64>,
}

impl ListingQuery {
    /// 최신 매물 5건
    pub const LATEST: Self = Self::new(ListingFilter::All, SortOrder::NewestFirst, Some(5));
    /// 가장 오래된 매매 매물 4건
    pub const SALE: Self = Self::new(ListingFilter::Sale, SortOrder::OldestFirst, Some(4));
    pub const SALE_ALL: Self = Self::new(ListingFilter::Sale, SortOrder::OldestFirst, None);
    /// 가장 오래된 임대 매물 4건
    pub const RENT: Self = Self::new(ListingFilter::Rent, SortOrder::OldestFirst, Some(4));
    pub const RENT_ALL: Self = Self::new(ListingFilter::Rent, SortOrder::OldestFirst, None);
    /// 할인 중인 매물 4건
    pub const OFFER: Self = Self::new(ListingFilter::Offer, SortOrder::OldestFirst, Some(4));
    /// 할인가가 있는 매물 전체, 최신순
    pub const DISCOUNTED: Self =
        Self::new(ListingFilter::Discounted, SortOrder::NewestFirst, None);

    pub const fn new(filter: ListingFilter, order: SortOrder, limit: Option<i64>) -> Self {
        Self {
            filter,
            order,
            limit,
        }
    }

    /// 목록 조회 SQL. 개수 제한은 $1 로 바인딩하며 NULL 이면 제한 없음
    pub fn sql(&self) -> String {
        format!(
            "SELECT id, firestore_doc_id, user_id, username, email, phone_number, title, description, type, bedrooms, bathrooms, parking, furnished, address, latitude, longitude, offer, price, discounted_price, image_url, created_at FROM listings {} ORDER BY created_at {} LIMIT $1",
            self.filter.predicate(),
            self.order.keyword()
        )
    }
}

// endregion: --- List Query
