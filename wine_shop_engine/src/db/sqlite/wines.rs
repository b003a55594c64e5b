use log::trace;
use sqlx::{QueryBuilder, SqliteConnection};

use crate::{
    api::catalog_objects::WineFilter,
    db::sqlite::SqliteDatabaseError,
    db_types::{NewWine, ReferenceEntity, ReferenceKind, Wine},
};

const WINE_COLUMNS: &str = "w.id, w.name, w.price, w.image_path, w.description, w.pairing, w.alcohol_percent, \
                            w.volume_ml, w.serving_temperature, w.stock_quantity, w.color_id, w.flavour_id, \
                            w.type_id, w.grape_id, w.created_at, w.updated_at";

/// Fetches wines according to the criteria in the `WineFilter`. The filter's criteria are ANDed
/// together; an empty filter returns the entire catalog.
///
/// Resulting wines are ordered by `id` in ascending order.
pub async fn fetch_wines(filter: &WineFilter, conn: &mut SqliteConnection) -> Result<Vec<Wine>, SqliteDatabaseError> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {WINE_COLUMNS} FROM wines w \
         INNER JOIN colors c ON w.color_id = c.id \
         INNER JOIN flavours f ON w.flavour_id = f.id \
         LEFT JOIN wine_types t ON w.type_id = t.id "
    ));
    if !filter.is_empty() {
        builder.push("WHERE ");
    }
    let mut where_clause = builder.separated(" AND ");
    if let Some(color) = &filter.color {
        where_clause.push("c.name = ");
        where_clause.push_bind_unseparated(color.clone());
    }
    if let Some(flavour) = &filter.flavour {
        where_clause.push("f.name = ");
        where_clause.push_bind_unseparated(flavour.clone());
    }
    if let Some(wine_type) = &filter.wine_type {
        where_clause.push("t.name = ");
        where_clause.push_bind_unseparated(wine_type.clone());
    }
    if let Some(window) = filter.price {
        if let Some(min) = window.min {
            where_clause.push("w.price >= ");
            where_clause.push_bind_unseparated(min);
        }
        if let Some(max) = window.max {
            where_clause.push("w.price <= ");
            where_clause.push_bind_unseparated(max);
        }
    }
    builder.push(" ORDER BY w.id ASC");

    trace!("🍇️ Executing query: {}", builder.sql());
    let wines = builder.build_query_as::<Wine>().fetch_all(conn).await?;
    trace!("🍇️ Result of fetch_wines: {} rows", wines.len());
    Ok(wines)
}

/// Fetches the wine with the given id, or `None` if it does not exist.
pub async fn fetch_wine_by_id(wine_id: i64, conn: &mut SqliteConnection) -> Result<Option<Wine>, SqliteDatabaseError> {
    let sql = format!("SELECT {WINE_COLUMNS} FROM wines w WHERE w.id = $1");
    let wine = sqlx::query_as::<_, Wine>(&sql).bind(wine_id).fetch_optional(conn).await?;
    Ok(wine)
}

/// Inserts a new wine into the catalog and returns its id. This is not atomic. You can embed this
/// call inside a transaction if you need to ensure atomicity, and pass `&mut *tx` as the
/// connection argument.
pub async fn insert_wine(wine: NewWine, conn: &mut SqliteConnection) -> Result<i64, SqliteDatabaseError> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
            INSERT INTO wines (
                name,
                price,
                image_path,
                description,
                pairing,
                alcohol_percent,
                volume_ml,
                serving_temperature,
                stock_quantity,
                color_id,
                flavour_id,
                type_id,
                grape_id
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id;
        "#,
    )
    .bind(wine.name)
    .bind(wine.price)
    .bind(wine.image_path)
    .bind(wine.description)
    .bind(wine.pairing)
    .bind(wine.alcohol_percent)
    .bind(wine.volume_ml)
    .bind(wine.serving_temperature)
    .bind(wine.stock_quantity)
    .bind(wine.color_id)
    .bind(wine.flavour_id)
    .bind(wine.type_id)
    .bind(wine.grape_id)
    .fetch_one(conn)
    .await?;
    Ok(id)
}

/// Fetches a single reference entity (color, flavour, wine type or grape) by id.
pub async fn fetch_reference(
    kind: ReferenceKind,
    id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<ReferenceEntity>, SqliteDatabaseError> {
    let sql = format!("SELECT id, name FROM {} WHERE id = $1", kind.table());
    let entity = sqlx::query_as::<_, ReferenceEntity>(&sql).bind(id).fetch_optional(conn).await?;
    Ok(entity)
}

/// Fetches all reference entities of the given kind, ordered by display name.
pub async fn fetch_references(
    kind: ReferenceKind,
    conn: &mut SqliteConnection,
) -> Result<Vec<ReferenceEntity>, SqliteDatabaseError> {
    let sql = format!("SELECT id, name FROM {} ORDER BY name ASC", kind.table());
    let entities = sqlx::query_as::<_, ReferenceEntity>(&sql).fetch_all(conn).await?;
    Ok(entities)
}

/// Inserts a reference entity and returns its id.
pub async fn insert_reference(
    kind: ReferenceKind,
    name: &str,
    conn: &mut SqliteConnection,
) -> Result<i64, SqliteDatabaseError> {
    let sql = format!("INSERT INTO {} (name) VALUES ($1) RETURNING id", kind.table());
    let id = sqlx::query_scalar::<_, i64>(&sql).bind(name).fetch_one(conn).await?;
    Ok(id)
}
