//! Request handler definitions
//!
//! Define each route and it handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Since each worker thread processes its requests sequentially, any long, non-cpu-bound
//! operation (I/O, database calls, etc.) must be expressed as a future or asynchronous function,
//! so that the worker can handle other requests while it waits.
use actix_web::{get, web, HttpResponse, HttpResponseBuilder, Responder};
use log::*;
use wine_shop_engine::{
    api::catalog_objects::{WineFilter, PRICE_RANGE_TOKENS},
    db_types::ReferenceKind,
    traits::{BasketManagement, CatalogManagement},
    BasketApi, CatalogApi,
};
use wss_common::SHOP_CURRENCY_CODE;

use crate::{
    config::ServerConfig,
    data_objects::{
        BasketLine,
        BasketPage,
        BulkUpdateParams,
        CatalogPage,
        FilterOptions,
        FilterParams,
        JsonResponse,
        WineIdParam,
    },
    errors::ServerError,
    session::ShopperSession,
};

/// Each `POST /basket/add` call adds a single unit of the wine.
const DEFAULT_QUANTITY: i64 = 1;

// Web-actix cannot handle generics in handlers, so it's implemented manually using the `route!` macro
#[macro_export]
macro_rules! route {
    ($name:ident => $method:ident $path:literal impl $($bounds:tt)+) => {
        paste::paste! { pub struct [<$name:camel Route>]<A>(core::marker::PhantomData<fn() -> A>); }
        paste::paste! {
            impl<A> [<$name:camel Route>]<A> {
                #[allow(clippy::new_without_default)]
                pub fn new() -> Self {
                    Self(core::marker::PhantomData)
                }
            }
        }
        paste::paste! {
            impl<A> actix_web::dev::HttpServiceFactory for [<$name:camel Route>]<A>
            where A: $($bounds)+ + 'static
            {
                fn register(self, config: &mut actix_web::dev::AppService) {
                    let res = actix_web::Resource::new($path)
                        .name(stringify!($name))
                        .guard(actix_web::guard::$method())
                        .to($name::<A>);
                    actix_web::dev::HttpServiceFactory::register(res, config);
                }
            }
        }
    };
}

// ----------------------------------------------   Health  ----------------------------------------------------
#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

// ----------------------------------------------   Catalog  ---------------------------------------------------
/// The home page: an empty catalog view until the shopper searches.
#[get("/")]
pub async fn home() -> impl Responder {
    trace!("💻️ Opening home page");
    HttpResponse::Ok().json(CatalogPage::empty())
}

route!(browse_wines => Get "/wines" impl CatalogManagement);
/// Route handler for catalog searches.
///
/// All four criteria are optional; blank criteria are ignored, and an unknown price token simply
/// applies no price filter. The full result set is returned — the catalog is small enough that
/// pagination has never been worth it.
pub async fn browse_wines<A: CatalogManagement>(
    query: web::Query<FilterParams>,
    api: web::Data<CatalogApi<A>>,
) -> Result<HttpResponse, ServerError> {
    let params = query.into_inner();
    debug!(
        "💻️ Filtering wines - Color: {:?}, Flavour: {:?}, Type: {:?}, Price: {:?}",
        params.color, params.flavour, params.wine_type, params.price
    );
    let filter = WineFilter::from_criteria(
        params.color.as_deref(),
        params.flavour.as_deref(),
        params.wine_type.as_deref(),
        params.price.as_deref(),
    );
    let wines = api.filter_wines(&filter).await?;
    Ok(HttpResponse::Ok().json(CatalogPage { wines, searched: true }))
}

route!(filter_options => Get "/wines/filters" impl CatalogManagement);
/// The choices the filter form can offer, straight from the reference tables.
pub async fn filter_options<A: CatalogManagement>(api: web::Data<CatalogApi<A>>) -> Result<HttpResponse, ServerError> {
    trace!("💻️ Fetching filter options");
    let colors = api.references(ReferenceKind::Color).await?;
    let flavours = api.references(ReferenceKind::Flavour).await?;
    let types = api.references(ReferenceKind::WineType).await?;
    let grapes = api.references(ReferenceKind::Grape).await?;
    let price_ranges = PRICE_RANGE_TOKENS.iter().map(|t| t.to_string()).collect();
    Ok(HttpResponse::Ok().json(FilterOptions { colors, flavours, types, grapes, price_ranges }))
}

route!(wine_details => Get "/wines/{id}" impl CatalogManagement);
pub async fn wine_details<A: CatalogManagement>(
    path: web::Path<i64>,
    api: web::Data<CatalogApi<A>>,
) -> Result<HttpResponse, ServerError> {
    let id = path.into_inner();
    debug!("💻️ Fetching details for wine with ID: {id}");
    let details = api.wine_details(id).await?;
    Ok(HttpResponse::Ok().json(details))
}

// ----------------------------------------------   Basket  ----------------------------------------------------
route!(show_basket => Get "/basket" impl BasketManagement + CatalogManagement);
/// The current session's line items and total. Wine names are resolved with explicit catalog
/// lookups; a first-time visitor gets a fresh basket and a session cookie.
pub async fn show_basket<A>(
    session: ShopperSession,
    baskets: web::Data<BasketApi<A>>,
    catalog: web::Data<CatalogApi<A>>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServerError>
where
    A: BasketManagement + CatalogManagement,
{
    debug!("💻️ Displaying basket for session: {}", session.id);
    if session.is_new {
        baskets.get_or_create_basket(&session.id).await?;
    }
    let contents = baskets.contents(&session.id).await?;
    let mut items = Vec::with_capacity(contents.items.len());
    for item in &contents.items {
        let wine = catalog.wine_or_fail(item.wine_id).await?;
        items.push(BasketLine::new(item, &wine));
    }
    let page = BasketPage { items, total: contents.total, currency: SHOP_CURRENCY_CODE.to_string() };
    Ok(with_session_cookie(&session, &config).json(page))
}

route!(add_to_basket => Post "/basket/add" impl BasketManagement);
/// Adds one unit of the wine to the session's basket.
pub async fn add_to_basket<A: BasketManagement>(
    session: ShopperSession,
    query: web::Query<WineIdParam>,
    baskets: web::Data<BasketApi<A>>,
    config: web::Data<ServerConfig>,
) -> Result<HttpResponse, ServerError> {
    let wine_id = query.wine_id;
    info!("💻️ Adding wine {wine_id} to basket {}", session.id);
    if session.is_new {
        baskets.get_or_create_basket(&session.id).await?;
    }
    let item = baskets.add_item(&session.id, wine_id, DEFAULT_QUANTITY).await?;
    let message = format!("Added wine {wine_id} to the basket. Quantity is now {}.", item.quantity);
    Ok(with_session_cookie(&session, &config).json(JsonResponse::success(message)))
}

route!(remove_from_basket => Post "/basket/remove" impl BasketManagement);
pub async fn remove_from_basket<A: BasketManagement>(
    session: ShopperSession,
    query: web::Query<WineIdParam>,
    baskets: web::Data<BasketApi<A>>,
) -> Result<HttpResponse, ServerError> {
    let wine_id = query.wine_id;
    info!("💻️ Removing wine {wine_id} from basket {}", session.id);
    baskets.remove_item(&session.id, wine_id).await?;
    Ok(HttpResponse::Ok().json(JsonResponse::success(format!("Removed wine {wine_id} from the basket."))))
}

route!(update_basket => Post "/basket/update" impl BasketManagement);
/// Bulk-sets line item quantities, paired by position. A request with missing lists is a no-op,
/// and a quantity of zero removes that line item.
pub async fn update_basket<A: BasketManagement>(
    session: ShopperSession,
    body: web::Json<BulkUpdateParams>,
    baskets: web::Data<BasketApi<A>>,
) -> Result<HttpResponse, ServerError> {
    let params = body.into_inner();
    if params.wine_ids.is_empty() || params.quantities.is_empty() {
        warn!("💻️ Basket update request received with no products.");
        return Ok(HttpResponse::Ok().json(JsonResponse::success("Nothing to update.")));
    }
    for (wine_id, quantity) in params.wine_ids.iter().zip(params.quantities.iter()) {
        debug!("💻️ Updating wine {wine_id} quantity to {quantity} in basket {}", session.id);
        baskets.set_item_quantity(&session.id, *wine_id, *quantity).await?;
    }
    Ok(HttpResponse::Ok().json(JsonResponse::success("Basket updated.")))
}

route!(clear_basket => Delete "/basket" impl BasketManagement);
/// Deletes the session's basket entirely. Deleting a basket that never existed is fine.
pub async fn clear_basket<A: BasketManagement>(
    session: ShopperSession,
    baskets: web::Data<BasketApi<A>>,
) -> Result<HttpResponse, ServerError> {
    info!("💻️ Deleting basket for session {}", session.id);
    let deleted = baskets.delete_basket(&session.id).await?;
    let message = if deleted { "Basket deleted." } else { "No basket to delete." };
    Ok(HttpResponse::Ok().json(JsonResponse::success(message)))
}

fn with_session_cookie(session: &ShopperSession, config: &ServerConfig) -> HttpResponseBuilder {
    let mut builder = HttpResponse::Ok();
    if session.is_new {
        builder.cookie(session.cookie(config));
    }
    builder
}
