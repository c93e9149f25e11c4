//! # Price Repository
//!
//! Database operations for the `base_price` table: one row per ticket type.
//!
//! ## Storage
//! ```text
//! ┌──────────────┬──────┐
//! │ type (PK)    │ cost │
//! ├──────────────┼──────┤
//! │ 1jour        │  35  │
//! │ night        │  19  │
//! └──────────────┴──────┘
//! ```
//!
//! `cost` is an SQLite INTEGER (i64); it is narrowed to [`Price`] on read.
//! A row that doesn't fit is reported as [`DbError::CorruptRow`] instead of
//! being silently clamped.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use lift_core::{CoreResult, Price, PriceCatalog, TicketType};

/// Repository for base price operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = PriceRepository::new(pool);
///
/// repo.upsert(&TicketType::Night, Price::from_units(19)).await?;
/// let night = repo.get(&TicketType::Night).await?; // Some(19)
/// ```
#[derive(Debug, Clone)]
pub struct PriceRepository {
    pool: SqlitePool,
}

impl PriceRepository {
    /// Creates a new PriceRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PriceRepository { pool }
    }

    /// Gets the base price for a ticket type.
    ///
    /// ## Returns
    /// * `Ok(Some(price))` - A price is stored for this tag
    /// * `Ok(None)` - No row for this tag
    pub async fn get(&self, ticket_type: &TicketType) -> DbResult<Option<Price>> {
        debug!(ticket_type = %ticket_type, "Fetching base price");

        let cost: Option<i64> = sqlx::query_scalar("SELECT cost FROM base_price WHERE type = ?1")
            .bind(ticket_type.as_str())
            .fetch_optional(&self.pool)
            .await?;

        cost.map(|raw| price_from_row(ticket_type.as_str(), raw))
            .transpose()
    }

    /// Stores the base price for a ticket type, replacing any previous row.
    ///
    /// ## Upsert Semantics
    /// ```text
    /// no row for "night"  → INSERT (night, 25)
    /// row (night, 19)     → UPDATE cost = 25
    /// ```
    pub async fn upsert(&self, ticket_type: &TicketType, price: Price) -> DbResult<()> {
        debug!(ticket_type = %ticket_type, cost = %price, "Upserting base price");

        sqlx::query(
            r#"
            INSERT INTO base_price (type, cost)
            VALUES (?1, ?2)
            ON CONFLICT(type) DO UPDATE SET cost = excluded.cost
            "#,
        )
        .bind(ticket_type.as_str())
        .bind(i64::from(price.units()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Lists every stored base price, ordered by ticket type.
    pub async fn list(&self) -> DbResult<Vec<(TicketType, Price)>> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT type, cost FROM base_price ORDER BY type")
                .fetch_all(&self.pool)
                .await?;

        rows.into_iter()
            .map(|(tag, raw)| {
                let price = price_from_row(&tag, raw)?;
                Ok((TicketType::from(tag), price))
            })
            .collect()
    }

    /// Counts stored base prices (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM base_price")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

/// Narrows a stored cost to a [`Price`].
fn price_from_row(tag: &str, raw: i64) -> DbResult<Price> {
    u32::try_from(raw).map(Price::from_units).map_err(|_| {
        DbError::corrupt(
            "base_price",
            format!("cost {} for '{}' is out of range", raw, tag),
        )
    })
}

#[async_trait]
impl PriceCatalog for PriceRepository {
    async fn base_price(&self, ticket_type: &TicketType) -> CoreResult<Option<Price>> {
        Ok(self.get(ticket_type).await?)
    }

    async fn set_base_price(&self, ticket_type: &TicketType, price: Price) -> CoreResult<()> {
        Ok(self.upsert(ticket_type, price).await?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use lift_core::CoreError;

    async fn repo() -> PriceRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().prices()
    }

    #[tokio::test]
    async fn test_missing_price_is_none() {
        let repo = repo().await;
        assert_eq!(repo.get(&TicketType::Day).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_upsert_inserts_then_overwrites() {
        let repo = repo().await;
        let night = TicketType::Night;

        repo.upsert(&night, Price::from_units(19)).await.unwrap();
        assert_eq!(repo.get(&night).await.unwrap(), Some(Price::from_units(19)));

        repo.upsert(&night, Price::from_units(25)).await.unwrap();
        assert_eq!(repo.get(&night).await.unwrap(), Some(Price::from_units(25)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_list_keeps_unknown_tags() {
        let repo = repo().await;
        repo.upsert(&TicketType::from("1jour"), Price::from_units(35))
            .await
            .unwrap();
        repo.upsert(&TicketType::Night, Price::from_units(19))
            .await
            .unwrap();

        let prices = repo.list().await.unwrap();
        assert_eq!(
            prices,
            vec![
                (TicketType::Other("1jour".to_string()), Price::from_units(35)),
                (TicketType::Night, Price::from_units(19)),
            ]
        );
    }

    #[tokio::test]
    async fn test_zero_and_max_prices_fit() {
        let repo = repo().await;
        repo.upsert(&TicketType::Day, Price::zero()).await.unwrap();
        repo.upsert(&TicketType::Night, Price::from_units(u32::MAX))
            .await
            .unwrap();

        assert_eq!(repo.get(&TicketType::Day).await.unwrap(), Some(Price::zero()));
        assert_eq!(
            repo.get(&TicketType::Night).await.unwrap(),
            Some(Price::from_units(u32::MAX))
        );
    }

    #[tokio::test]
    async fn test_out_of_range_row_is_corrupt() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO base_price (type, cost) VALUES ('day', 99999999999)")
            .execute(db.pool())
            .await
            .unwrap();

        let err = db.prices().get(&TicketType::Day).await.unwrap_err();
        assert!(matches!(err, DbError::CorruptRow { .. }));
    }

    #[tokio::test]
    async fn test_negative_cost_rejected_by_schema() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let err = sqlx::query("INSERT INTO base_price (type, cost) VALUES ('day', -1)")
            .execute(db.pool())
            .await
            .unwrap_err();

        assert!(matches!(DbError::from(err), DbError::CheckViolation { .. }));
    }

    #[tokio::test]
    async fn test_catalog_trait() {
        let repo = repo().await;
        let catalog: &dyn PriceCatalog = &repo;

        catalog
            .set_base_price(&TicketType::Night, Price::from_units(19))
            .await
            .unwrap();
        assert_eq!(
            catalog.base_price(&TicketType::Night).await.unwrap(),
            Some(Price::from_units(19))
        );
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_storage_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.prices();
        db.close().await;

        let err = repo.base_price(&TicketType::Day).await.unwrap_err();
        assert!(matches!(err, CoreError::Storage(_)));
    }
}
