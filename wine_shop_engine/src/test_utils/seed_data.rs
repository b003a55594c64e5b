//! Catalog fixtures for integration tests. The prices are chosen to sit on and around the
//! price-range boundaries, and Prosecco deliberately has a tiny stock so that the
//! insufficient-stock paths can be exercised.

use wss_common::Price;

use crate::{
    db::sqlite::wines::{insert_reference, insert_wine},
    db_types::{NewWine, ReferenceKind},
    SqliteDatabase,
};

/// Wine ids of the seeded fixture rows.
#[derive(Debug, Clone, Copy)]
pub struct SeededCatalog {
    pub merlot: i64,
    pub cabernet: i64,
    pub chardonnay: i64,
    pub house_white: i64,
    pub prosecco: i64,
    pub vintage_port: i64,
}

impl SeededCatalog {
    pub const WINE_COUNT: usize = 6;
}

pub async fn seed_catalog(db: &SqliteDatabase) -> SeededCatalog {
    let mut conn = db.pool().acquire().await.expect("Error acquiring a connection for seeding");

    let red = insert_reference(ReferenceKind::Color, "Red", &mut conn).await.expect("Error seeding colors");
    let white = insert_reference(ReferenceKind::Color, "White", &mut conn).await.expect("Error seeding colors");
    insert_reference(ReferenceKind::Color, "Rosé", &mut conn).await.expect("Error seeding colors");

    let dry = insert_reference(ReferenceKind::Flavour, "Dry", &mut conn).await.expect("Error seeding flavours");
    let medium = insert_reference(ReferenceKind::Flavour, "Medium", &mut conn).await.expect("Error seeding flavours");
    let sweet = insert_reference(ReferenceKind::Flavour, "Sweet", &mut conn).await.expect("Error seeding flavours");

    let still = insert_reference(ReferenceKind::WineType, "Still", &mut conn).await.expect("Error seeding types");
    let sparkling =
        insert_reference(ReferenceKind::WineType, "Sparkling", &mut conn).await.expect("Error seeding types");
    let fortified =
        insert_reference(ReferenceKind::WineType, "Fortified", &mut conn).await.expect("Error seeding types");

    let merlot_grape = insert_reference(ReferenceKind::Grape, "Merlot", &mut conn).await.expect("Error seeding grapes");
    let chardonnay_grape =
        insert_reference(ReferenceKind::Grape, "Chardonnay", &mut conn).await.expect("Error seeding grapes");
    let glera = insert_reference(ReferenceKind::Grape, "Glera", &mut conn).await.expect("Error seeding grapes");

    let merlot = NewWine::new("Merlot", Price::from_units(40), "/img/merlot.jpg", 750, 10, red, dry)
        .with_description("A soft, round red with plum and black cherry notes.")
        .with_pairing("Roast chicken, pasta with tomato sauce")
        .with_alcohol_percent(13.5)
        .with_serving_temperature("16-18°C")
        .with_wine_type(still)
        .with_grape(merlot_grape);
    let merlot = insert_wine(merlot, &mut conn).await.expect("Error seeding wines");

    let cabernet =
        NewWine::new("Cabernet Sauvignon", Price::from_cents(2550), "/img/cabernet.jpg", 750, 5, red, medium)
            .with_alcohol_percent(14.0)
            .with_wine_type(still);
    let cabernet = insert_wine(cabernet, &mut conn).await.expect("Error seeding wines");

    let chardonnay =
        NewWine::new("Chardonnay", Price::from_cents(1999), "/img/chardonnay.jpg", 750, 8, white, dry)
            .with_serving_temperature("10-12°C")
            .with_wine_type(still)
            .with_grape(chardonnay_grape);
    let chardonnay = insert_wine(chardonnay, &mut conn).await.expect("Error seeding wines");

    let house_white = NewWine::new("House White", Price::from_units(20), "/img/house-white.jpg", 750, 20, white, dry)
        .with_wine_type(still);
    let house_white = insert_wine(house_white, &mut conn).await.expect("Error seeding wines");

    let prosecco = NewWine::new("Prosecco", Price::from_units(30), "/img/prosecco.jpg", 750, 2, white, sweet)
        .with_alcohol_percent(11.0)
        .with_serving_temperature("6-8°C")
        .with_wine_type(sparkling)
        .with_grape(glera);
    let prosecco = insert_wine(prosecco, &mut conn).await.expect("Error seeding wines");

    let vintage_port = NewWine::new("Vintage Port", Price::from_units(55), "/img/port.jpg", 750, 3, red, sweet)
        .with_pairing("Blue cheese, dark chocolate")
        .with_alcohol_percent(20.0)
        .with_wine_type(fortified);
    let vintage_port = insert_wine(vintage_port, &mut conn).await.expect("Error seeding wines");

    SeededCatalog { merlot, cabernet, chardonnay, house_white, prosecco, vintage_port }
}
