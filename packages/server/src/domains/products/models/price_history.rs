use anyhow::Result;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

/// One price observation for a product. Append-only.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PriceHistory {
    pub id: Uuid,
    pub product_id: Uuid,
    pub price: Decimal,
    pub currency: String,
    pub recorded_at: DateTime<Utc>,
}

impl PriceHistory {
    pub async fn record(
        product_id: Uuid,
        price: Decimal,
        currency: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO price_history (product_id, price, currency)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(product_id)
        .bind(price)
        .bind(currency)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// Most recent observations first.
    pub async fn for_product(product_id: Uuid, limit: i64, pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(
            "SELECT * FROM price_history WHERE product_id = $1 ORDER BY recorded_at DESC LIMIT $2",
        )
        .bind(product_id)
        .bind(limit)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }
}
