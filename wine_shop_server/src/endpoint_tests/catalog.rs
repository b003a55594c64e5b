use actix_web::{http::StatusCode, web, web::ServiceConfig};
use serde_json::{json, Value};
use wine_shop_engine::{
    api::catalog_objects::WineFilter,
    db_types::{ReferenceEntity, ReferenceKind},
    CatalogApi,
};
use wss_common::Price;

use super::{
    helpers::get_request,
    mocks::{sample_wine, MockWineShopBackend},
};
use crate::routes::{home, BrowseWinesRoute, FilterOptionsRoute, WineDetailsRoute};

#[actix_web::test]
async fn home_page_is_an_empty_catalog_view() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(None, "/", configure_home).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let page: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(page["searched"], json!(false));
    assert_eq!(page["wines"], json!([]));
}

#[actix_web::test]
async fn browse_wines_returns_the_filtered_catalog() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(None, "/wines?color=Red", configure_browse).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let page: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(page["searched"], json!(true));
    let wines = page["wines"].as_array().expect("wines should be a list");
    assert_eq!(wines.len(), 2);
    assert_eq!(wines[0]["name"], json!("Merlot"));
}

#[actix_web::test]
async fn query_params_build_the_wine_filter() {
    let _ = env_logger::try_init().ok();
    let (status, _) = get_request(None, "/wines?color=Red&type=Still&price=20-30&flavour=", configure_param_check)
        .await
        .expect("Request failed");
    assert_eq!(status, StatusCode::OK);
}

#[actix_web::test]
async fn wine_details_resolve_reference_names() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(None, "/wines/7", configure_details).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let details: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(details["wine"]["name"], json!("Merlot"));
    assert_eq!(details["color"]["name"], json!("Red"));
    assert_eq!(details["flavour"]["name"], json!("Dry"));
    assert_eq!(details["wine_type"], json!(null));
}

#[actix_web::test]
async fn missing_wine_details_are_a_404() {
    let _ = env_logger::try_init().ok();
    let (status, message) = get_request(None, "/wines/42", configure_missing).await.expect_err("Expected an error");
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(message, "The data was not found. No wine with id 42 exists");
}

#[actix_web::test]
async fn filter_options_list_the_reference_tables() {
    let _ = env_logger::try_init().ok();
    let (status, body) = get_request(None, "/wines/filters", configure_options).await.expect("Request failed");
    assert_eq!(status, StatusCode::OK);
    let options: Value = serde_json::from_str(&body).expect("Body should be json");
    assert_eq!(options["colors"][0]["name"], json!("Red"));
    assert_eq!(options["price_ranges"], json!(["<20", "20-30", "30-40", "40-50", ">50"]));
}

fn configure_home(cfg: &mut ServiceConfig) {
    cfg.service(home);
}

fn configure_browse(cfg: &mut ServiceConfig) {
    let mut catalog = MockWineShopBackend::new();
    catalog.expect_fetch_wines().returning(|_| {
        Ok(vec![
            sample_wine(1, "Merlot", Price::from_units(40), 10),
            sample_wine(6, "Vintage Port", Price::from_units(55), 3),
        ])
    });
    cfg.service(BrowseWinesRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(CatalogApi::new(catalog)));
}

// Verifies that query parameters survive the trip into a WineFilter: blank flavour dropped,
// "type" renamed, price token mapped onto an inclusive window.
fn configure_param_check(cfg: &mut ServiceConfig) {
    let mut catalog = MockWineShopBackend::new();
    catalog
        .expect_fetch_wines()
        .withf(|filter: &WineFilter| {
            filter.color.as_deref() == Some("Red")
                && filter.flavour.is_none()
                && filter.wine_type.as_deref() == Some("Still")
                && filter.price.map(|w| w.min == Some(Price::from_units(20)) && w.max == Some(Price::from_units(30)))
                    == Some(true)
        })
        .returning(|_| Ok(vec![]));
    cfg.service(BrowseWinesRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(CatalogApi::new(catalog)));
}

fn configure_details(cfg: &mut ServiceConfig) {
    let mut catalog = MockWineShopBackend::new();
    catalog
        .expect_fetch_wine_by_id()
        .returning(|id| Ok(Some(sample_wine(id, "Merlot", Price::from_units(40), 10))));
    catalog.expect_fetch_reference().returning(|kind, id| {
        let name = match kind {
            ReferenceKind::Color => "Red",
            ReferenceKind::Flavour => "Dry",
            _ => "Other",
        };
        Ok(Some(ReferenceEntity { id, name: name.to_string() }))
    });
    cfg.service(WineDetailsRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(CatalogApi::new(catalog)));
}

fn configure_missing(cfg: &mut ServiceConfig) {
    let mut catalog = MockWineShopBackend::new();
    catalog.expect_fetch_wine_by_id().returning(|_| Ok(None));
    cfg.service(WineDetailsRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(CatalogApi::new(catalog)));
}

fn configure_options(cfg: &mut ServiceConfig) {
    let mut catalog = MockWineShopBackend::new();
    catalog.expect_fetch_references().returning(|kind| {
        let names: &[&str] = match kind {
            ReferenceKind::Color => &["Red", "White"],
            ReferenceKind::Flavour => &["Dry", "Sweet"],
            ReferenceKind::WineType => &["Still"],
            ReferenceKind::Grape => &["Merlot"],
        };
        Ok(names
            .iter()
            .enumerate()
            .map(|(i, name)| ReferenceEntity { id: i as i64 + 1, name: name.to_string() })
            .collect())
    });
    cfg.service(FilterOptionsRoute::<MockWineShopBackend>::new()).app_data(web::Data::new(CatalogApi::new(catalog)));
}
