use actix_web::{http::StatusCode, test, test::TestRequest, web, web::ServiceConfig, App};
use serde_json::{json, Value};
use wine_shop_engine::{traits::BasketApiError, BasketApi, CatalogApi};
use wss_common::Price;

use super::{
    helpers::{delete_request, get_request, post_json, post_request, TEST_SESSION},
    mocks::{sample_basket, sample_item, sample_wine, MockWineShopBackend},
};
use crate::{
    config::ServerConfig,
    routes::{AddToBasketRoute, RemoveFromBasketRoute, ShowBasketRoute, UpdateBasketRoute},
    session::SESSION_COOKIE,
};

#[actix_web::test]
async fn basket_view_lists_items_with_wine_names_and_total() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        get_request(Some(TEST_SESSION), "/basket", configure_view).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let page: Value = serde_json::from_str(&body).expect("Body should be json");
    let items = page["items"].as_array().expect("items should be a list");
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["wine_name"], json!("Merlot"));
    assert_eq!(items[0]["quantity"], json!(2));
    assert_eq!(items[0]["line_price"], json!(8000));
    // 80.00 + 19.99, in cents
    assert_eq!(page["total"], json!(9999));
    assert_eq!(page["currency"], json!("EUR"));
}

#[actix_web::test]
async fn first_visit_mints_a_session_cookie_and_an_empty_basket() {
    let _ = env_logger::try_init().ok();
    let app =
        App::new().app_data(web::Data::new(ServerConfig::default())).configure(configure_first_visit);
    let service = test::init_service(app).await;
    let res = test::call_service(&service, TestRequest::get().uri("/basket").to_request()).await;
    assert_eq!(res.status(), StatusCode::OK);
    let cookie = res
        .response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .expect("Expected a session cookie on the response");
    assert_eq!(cookie.value().len(), 32);
}

#[actix_web::test]
async fn adding_a_wine_reports_the_new_quantity() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        post_request(Some(TEST_SESSION), "/basket/add?wineId=1", configure_add).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(response["success"], json!(true));
    assert_eq!(response["message"], json!("Added wine 1 to the basket. Quantity is now 3."));
}

#[actix_web::test]
async fn adding_beyond_stock_is_a_conflict() {
    let _ = env_logger::try_init().ok();
    let (status, message) = post_request(Some(TEST_SESSION), "/basket/add?wineId=5", configure_add_insufficient)
        .await
        .expect_err("Expected an error");
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(message, "Not enough stock. Not enough stock for Prosecco. Requested 3, but only 2 left");
}

#[actix_web::test]
async fn removing_a_missing_item_is_a_404() {
    let _ = env_logger::try_init().ok();
    let (status, message) = post_request(Some(TEST_SESSION), "/basket/remove?wineId=1", configure_remove_missing)
        .await
        .expect_err("Expected an error");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, "The data was not found. Merlot is not in the basket");
}

#[actix_web::test]
async fn bulk_update_pairs_ids_and_quantities_by_position() {
    let _ = env_logger::try_init().ok();
    let body = json!({ "wineIds": [1, 2], "quantities": [3, 0] });
    let (status, _) =
        post_json(Some(TEST_SESSION), "/basket/update", body, configure_bulk).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn bulk_update_without_lists_is_a_noop() {
    let _ = env_logger::try_init().ok();
    // The mock has no expectations, so any engine call would fail the test
    let (status, body) =
        post_json(Some(TEST_SESSION), "/basket/update", json!({}), configure_bulk_noop).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(response["message"], json!("Nothing to update."));
}

#[actix_web::test]
async fn clearing_the_basket_reports_whether_one_existed() {
    let _ = env_logger::try_init().ok();
    let (status, body) =
        delete_request(Some(TEST_SESSION), "/basket", configure_clear).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let response: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(response["message"], json!("Basket deleted."));
}

fn configure_view(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend.expect_fetch_basket_items().returning(|_| {
        Ok(vec![sample_item(1, 1, 2, Price::from_units(80)), sample_item(1, 3, 1, Price::from_cents(1999))])
    });
    backend.expect_fetch_basket_total().returning(|_| Ok(Price::from_cents(9999)));
    let mut catalog = MockWineShopBackend::new();
    catalog.expect_fetch_wine_by_id().returning(|id| {
        let name = if id == 1 { "Merlot" } else { "Chardonnay" };
        Ok(Some(sample_wine(id, name, Price::from_units(40), 10)))
    });
    cfg.service(ShowBasketRoute::<MockWineShopBackend>::new())
        .app_data(web::Data::new(BasketApi::new(backend)))
        .app_data(web::Data::new(CatalogApi::new(catalog)));
}

fn configure_first_visit(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend.expect_fetch_basket_by_session().returning(|_| Ok(None));
    backend.expect_create_basket().returning(|sid| Ok(sample_basket(1, sid)));
    backend.expect_fetch_basket_items().returning(|_| Ok(vec![]));
    backend.expect_fetch_basket_total().returning(|_| Ok(Price::default()));
    let catalog = MockWineShopBackend::new();
    cfg.service(ShowBasketRoute::<MockWineShopBackend>::new())
        .app_data(web::Data::new(BasketApi::new(backend)))
        .app_data(web::Data::new(CatalogApi::new(catalog)));
}

fn configure_add(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend
        .expect_upsert_basket_item()
        .withf(|sid: &str, wine_id: &i64, qty: &i64| sid == TEST_SESSION && *wine_id == 1 && *qty == 1)
        .returning(|_, wine_id, _| Ok(sample_item(1, wine_id, 3, Price::from_units(120))));
    cfg.service(AddToBasketRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(BasketApi::new(backend)));
}

fn configure_add_insufficient(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend.expect_upsert_basket_item().returning(|_, _, _| {
        Err(BasketApiError::InsufficientStock { wine: "Prosecco".to_string(), requested: 3, available: 2 })
    });
    cfg.service(AddToBasketRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(BasketApi::new(backend)));
}

fn configure_remove_missing(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend
        .expect_delete_basket_item()
        .returning(|_, _| Err(BasketApiError::ItemNotFound("Merlot".to_string())));
    cfg.service(RemoveFromBasketRoute::<MockWineShopBackend>::new())
        .app_data(web::Data::new(BasketApi::new(backend)));
}

fn configure_bulk(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend
        .expect_update_basket_item_quantity()
        .withf(|sid: &str, wine_id: &i64, qty: &i64| sid == TEST_SESSION && *wine_id == 1 && *qty == 3)
        .returning(|_, wine_id, qty| Ok(sample_item(1, wine_id, qty, Price::from_units(120))));
    // Quantity 0 for wine 2 must go down the removal path
    backend
        .expect_delete_basket_item()
        .withf(|sid: &str, wine_id: &i64| sid == TEST_SESSION && *wine_id == 2)
        .returning(|_, _| Ok(()));
    cfg.service(UpdateBasketRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(BasketApi::new(backend)));
}

fn configure_bulk_noop(cfg: &mut ServiceConfig) {
    let backend = MockWineShopBackend::new();
    cfg.service(UpdateBasketRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(BasketApi::new(backend)));
}

fn configure_clear(cfg: &mut ServiceConfig) {
    let mut backend = MockWineShopBackend::new();
    backend.expect_delete_basket().returning(|_| Ok(true));
    cfg.service(crate::routes::ClearBasketRoute::<MockWineShopBackend>::new())
        .app_data(web::Data::new(BasketApi::new(backend)));
}
