use chrono::{TimeZone, Utc};
use mockall::mock;
use wine_shop_engine::{
    api::catalog_objects::WineFilter,
    db_types::{Basket, BasketItem, ReferenceEntity, ReferenceKind, Wine},
    traits::{BasketApiError, BasketManagement, CatalogApiError, CatalogManagement},
};
use wss_common::Price;

mock! {
    pub WineShopBackend {}

    impl CatalogManagement for WineShopBackend {
        async fn fetch_wines(&self, filter: &WineFilter) -> Result<Vec<Wine>, CatalogApiError>;
        async fn fetch_wine_by_id(&self, wine_id: i64) -> Result<Option<Wine>, CatalogApiError>;
        async fn fetch_reference(&self, kind: ReferenceKind, id: i64) -> Result<Option<ReferenceEntity>, CatalogApiError>;
        async fn fetch_references(&self, kind: ReferenceKind) -> Result<Vec<ReferenceEntity>, CatalogApiError>;
    }

    impl BasketManagement for WineShopBackend {
        async fn fetch_basket_by_session(&self, session_id: &str) -> Result<Option<Basket>, BasketApiError>;
        async fn create_basket(&self, session_id: &str) -> Result<Basket, BasketApiError>;
        async fn delete_basket(&self, session_id: &str) -> Result<bool, BasketApiError>;
        async fn reassign_basket_session(&self, old_session_id: &str, new_session_id: &str) -> Result<bool, BasketApiError>;
        async fn upsert_basket_item(&self, session_id: &str, wine_id: i64, qty: i64) -> Result<BasketItem, BasketApiError>;
        async fn update_basket_item_quantity(&self, session_id: &str, wine_id: i64, qty: i64) -> Result<BasketItem, BasketApiError>;
        async fn delete_basket_item(&self, session_id: &str, wine_id: i64) -> Result<(), BasketApiError>;
        async fn fetch_basket_items(&self, session_id: &str) -> Result<Vec<BasketItem>, BasketApiError>;
        async fn fetch_basket_total(&self, session_id: &str) -> Result<Price, BasketApiError>;
    }
}

pub fn sample_wine(id: i64, name: &str, price: Price, stock_quantity: i64) -> Wine {
    Wine {
        id,
        name: name.to_string(),
        price,
        image_path: format!("/img/{id}.jpg"),
        description: None,
        pairing: None,
        alcohol_percent: None,
        volume_ml: 750,
        serving_temperature: None,
        stock_quantity,
        color_id: 1,
        flavour_id: 1,
        type_id: None,
        grape_id: None,
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}

pub fn sample_basket(id: i64, session_id: &str) -> Basket {
    Basket {
        id,
        session_id: session_id.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}

pub fn sample_item(basket_id: i64, wine_id: i64, quantity: i64, price: Price) -> BasketItem {
    BasketItem {
        id: wine_id * 10,
        basket_id,
        wine_id,
        quantity,
        price,
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}
