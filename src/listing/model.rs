use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 매물 유형
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Sale,
    Rent,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Sale => "sale",
            ListingType::Rent => "rent",
        }
    }
}

// 매물 모델
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Listing {
    pub id: i64,
    pub firestore_doc_id: String,
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub listing_type: String,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub parking: i32,
    pub furnished: bool,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub offer: bool,
    pub price: f64,
    pub discounted_price: Option<f64>,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

// 매물 등록 요청
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewListing {
    pub firestore_doc_id: String,
    #[serde(flatten)]
    pub fields: ListingUpdate,
}

// 매물 수정 요청 (id, created_at, firestore_doc_id 제외 전체 필드)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingUpdate {
    pub user_id: String,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub listing_type: ListingType,
    pub bedrooms: i32,
    pub bathrooms: i32,
    pub parking: i32,
    pub furnished: bool,
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
    pub offer: bool,
    pub price: f64,
    #[serde(default)]
    pub discounted_price: Option<f64>,
    pub image_url: String,
}
