use log::trace;
use sqlx::SqliteConnection;
use wss_common::Price;

use crate::{
    db::sqlite::SqliteDatabaseError,
    db_types::{Basket, BasketItem},
};

const BASKET_COLUMNS: &str = "id, session_id, created_at, updated_at";
const ITEM_COLUMNS: &str = "id, basket_id, wine_id, quantity, price, created_at, updated_at";

pub async fn fetch_basket_by_session(
    session_id: &str,
    conn: &mut SqliteConnection,
) -> Result<Option<Basket>, SqliteDatabaseError> {
    let sql = format!("SELECT {BASKET_COLUMNS} FROM baskets WHERE session_id = $1");
    let basket = sqlx::query_as::<_, Basket>(&sql).bind(session_id).fetch_optional(conn).await?;
    Ok(basket)
}

/// Inserts a new, empty basket for the session. The session id must not already have a basket;
/// the UNIQUE constraint on `session_id` rejects duplicates.
pub async fn insert_basket(session_id: &str, conn: &mut SqliteConnection) -> Result<Basket, SqliteDatabaseError> {
    let sql = format!("INSERT INTO baskets (session_id) VALUES ($1) RETURNING {BASKET_COLUMNS}");
    let basket = sqlx::query_as::<_, Basket>(&sql).bind(session_id).fetch_one(conn).await?;
    Ok(basket)
}

/// Deletes the basket with the given id along with its line items. This is not atomic on its own;
/// callers wrap it in a transaction.
pub async fn delete_basket(basket_id: i64, conn: &mut SqliteConnection) -> Result<(), SqliteDatabaseError> {
    let items = sqlx::query("DELETE FROM basket_items WHERE basket_id = $1")
        .bind(basket_id)
        .execute(&mut *conn)
        .await?;
    trace!("🗃️ Deleted {} line items for basket #{basket_id}", items.rows_affected());
    sqlx::query("DELETE FROM baskets WHERE id = $1").bind(basket_id).execute(conn).await?;
    Ok(())
}

/// Moves the basket for `old_session_id` to `new_session_id`. Returns the number of baskets
/// moved (0 or 1).
pub async fn update_session_id(
    old_session_id: &str,
    new_session_id: &str,
    conn: &mut SqliteConnection,
) -> Result<u64, SqliteDatabaseError> {
    let res = sqlx::query("UPDATE baskets SET session_id = $1, updated_at = CURRENT_TIMESTAMP WHERE session_id = $2")
        .bind(new_session_id)
        .bind(old_session_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

pub async fn fetch_basket_item(
    basket_id: i64,
    wine_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Option<BasketItem>, SqliteDatabaseError> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM basket_items WHERE basket_id = $1 AND wine_id = $2");
    let item = sqlx::query_as::<_, BasketItem>(&sql).bind(basket_id).bind(wine_id).fetch_optional(conn).await?;
    Ok(item)
}

/// All line items for the basket, ordered by wine id ascending.
pub async fn fetch_items_for_basket(
    basket_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Vec<BasketItem>, SqliteDatabaseError> {
    let sql = format!("SELECT {ITEM_COLUMNS} FROM basket_items WHERE basket_id = $1 ORDER BY wine_id ASC");
    let items = sqlx::query_as::<_, BasketItem>(&sql).bind(basket_id).fetch_all(conn).await?;
    Ok(items)
}

pub async fn insert_basket_item(
    basket_id: i64,
    wine_id: i64,
    quantity: i64,
    price: Price,
    conn: &mut SqliteConnection,
) -> Result<BasketItem, SqliteDatabaseError> {
    let sql = format!(
        "INSERT INTO basket_items (basket_id, wine_id, quantity, price) VALUES ($1, $2, $3, $4) \
         RETURNING {ITEM_COLUMNS}"
    );
    let item = sqlx::query_as::<_, BasketItem>(&sql)
        .bind(basket_id)
        .bind(wine_id)
        .bind(quantity)
        .bind(price)
        .fetch_one(conn)
        .await?;
    Ok(item)
}

pub async fn update_basket_item(
    item_id: i64,
    quantity: i64,
    price: Price,
    conn: &mut SqliteConnection,
) -> Result<BasketItem, SqliteDatabaseError> {
    let sql = format!(
        "UPDATE basket_items SET quantity = $1, price = $2, updated_at = CURRENT_TIMESTAMP WHERE id = $3 \
         RETURNING {ITEM_COLUMNS}"
    );
    let item = sqlx::query_as::<_, BasketItem>(&sql)
        .bind(quantity)
        .bind(price)
        .bind(item_id)
        .fetch_one(conn)
        .await?;
    Ok(item)
}

/// Deletes the line item for the given (basket, wine) pair. Returns the number of rows deleted
/// (0 or 1).
pub async fn delete_basket_item(
    basket_id: i64,
    wine_id: i64,
    conn: &mut SqliteConnection,
) -> Result<u64, SqliteDatabaseError> {
    let res = sqlx::query("DELETE FROM basket_items WHERE basket_id = $1 AND wine_id = $2")
        .bind(basket_id)
        .bind(wine_id)
        .execute(conn)
        .await?;
    Ok(res.rows_affected())
}

/// The sum of the stored line prices for the basket. Zero when the basket is empty.
pub async fn basket_total(basket_id: i64, conn: &mut SqliteConnection) -> Result<Price, SqliteDatabaseError> {
    let cents = sqlx::query_scalar::<_, i64>("SELECT COALESCE(SUM(price), 0) FROM basket_items WHERE basket_id = $1")
        .bind(basket_id)
        .fetch_one(conn)
        .await?;
    Ok(Price::from_cents(cents))
}
