use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use super::PriceHistory;

/// A tracked product, keyed by its page URL. The current price is updated
/// on every successful extraction; lowest/highest only ever widen.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: Uuid,
    pub url: String,
    pub name: String,
    pub retailer: String,
    pub currency: String,
    pub current_price: Decimal,
    pub lowest_price: Option<Decimal>,
    pub highest_price: Option<Decimal>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_checked_at: DateTime<Utc>,
}

// =============================================================================
// Product Queries
// =============================================================================

impl Product {
    /// Insert a new tracked product and record its first price observation.
    pub async fn create(
        url: &str,
        name: &str,
        price: Decimal,
        currency: &str,
        retailer: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        let product = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO products (url, name, retailer, currency, current_price, lowest_price, highest_price)
            VALUES ($1, $2, $3, $4, $5, $5, $5)
            RETURNING *
            "#,
        )
        .bind(url)
        .bind(name)
        .bind(retailer)
        .bind(currency)
        .bind(price)
        .fetch_one(pool)
        .await?;

        PriceHistory::record(product.id, price, currency, pool).await?;

        Ok(product)
    }

    pub async fn find_by_id(id: Uuid, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    pub async fn find_by_url(url: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM products WHERE url = $1")
            .bind(url)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Most recently updated first.
    pub async fn list(limit: i64, offset: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM products ORDER BY updated_at DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Apply a fresh price observation: update the current price and
    /// currency, widen the lowest/highest bounds, and append to history.
    pub async fn record_price(&self, price: Decimal, currency: &str, pool: &PgPool) -> Result<Self> {
        let updated = sqlx::query_as::<_, Self>(
            r#"
            UPDATE products
            SET current_price = $2,
                currency = $3,
                lowest_price = LEAST(COALESCE(lowest_price, $2), $2),
                highest_price = GREATEST(COALESCE(highest_price, $2), $2),
                last_checked_at = now(),
                updated_at = now()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(price)
        .bind(currency)
        .fetch_one(pool)
        .await?;

        PriceHistory::record(updated.id, price, currency, pool).await?;

        Ok(updated)
    }

    /// Delete the product; history rows go with it via ON DELETE CASCADE.
    pub async fn delete(id: Uuid, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
