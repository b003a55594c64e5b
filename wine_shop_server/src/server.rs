use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use wine_shop_engine::{BasketApi, CatalogApi, SqliteDatabase};

use crate::{
    config::ServerConfig,
    errors::ServerError,
    routes::{
        health,
        home,
        AddToBasketRoute,
        BrowseWinesRoute,
        ClearBasketRoute,
        FilterOptionsRoute,
        RemoveFromBasketRoute,
        ShowBasketRoute,
        UpdateBasketRoute,
        WineDetailsRoute,
    },
};

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let db = SqliteDatabase::new_with_url(&config.database_url, 25)
        .await
        .map_err(|e| ServerError::InitializeError(e.to_string()))?;
    db.run_migrations().await.map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let srv = create_server_instance(config, db)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(config: ServerConfig, db: SqliteDatabase) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let catalog_api = CatalogApi::new(db.clone());
        let basket_api = BasketApi::new(db.clone());
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("wss::access_log"))
            .app_data(web::Data::new(catalog_api))
            .app_data(web::Data::new(basket_api))
            .app_data(web::Data::new(config.clone()))
            .service(health)
            .service(home)
            // Register /wines/filters ahead of /wines/{id} so the literal segment wins
            .service(FilterOptionsRoute::<SqliteDatabase>::new())
            .service(BrowseWinesRoute::<SqliteDatabase>::new())
            .service(WineDetailsRoute::<SqliteDatabase>::new())
            .service(ShowBasketRoute::<SqliteDatabase>::new())
            .service(AddToBasketRoute::<SqliteDatabase>::new())
            .service(RemoveFromBasketRoute::<SqliteDatabase>::new())
            .service(UpdateBasketRoute::<SqliteDatabase>::new())
            .service(ClearBasketRoute::<SqliteDatabase>::new())
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}
