//! # Holiday Repository
//!
//! Database operations for the `holidays` table.
//!
//! Dates are stored as `YYYY-MM-DD` text and matched on the exact
//! year/month/day; `2019-02-18` is not a holiday in 2020.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use lift_core::{CalendarDate, CoreResult, HolidayCalendar, HolidaySet};

/// Repository for the holiday calendar.
#[derive(Debug, Clone)]
pub struct HolidayRepository {
    pool: SqlitePool,
}

impl HolidayRepository {
    /// Creates a new HolidayRepository.
    pub fn new(pool: SqlitePool) -> Self {
        HolidayRepository { pool }
    }

    /// Lists every holiday in ascending date order.
    pub async fn list(&self) -> DbResult<Vec<CalendarDate>> {
        let dates: Vec<CalendarDate> =
            sqlx::query_scalar("SELECT holiday FROM holidays ORDER BY holiday")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = dates.len(), "Loaded holidays");
        Ok(dates)
    }

    /// Adds a holiday.
    ///
    /// ## Returns
    /// * `Ok(true)` - The date was added
    /// * `Ok(false)` - The date was already a holiday (description unchanged)
    pub async fn insert(&self, date: CalendarDate, description: Option<&str>) -> DbResult<bool> {
        debug!(date = %date, "Inserting holiday");

        let result = sqlx::query(
            "INSERT INTO holidays (holiday, description) VALUES (?1, ?2) ON CONFLICT(holiday) DO NOTHING",
        )
        .bind(date)
        .bind(description)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Removes a holiday. Returns false if the date was not a holiday.
    pub async fn remove(&self, date: CalendarDate) -> DbResult<bool> {
        debug!(date = %date, "Removing holiday");

        let result = sqlx::query("DELETE FROM holidays WHERE holiday = ?1")
            .bind(date)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Counts holidays (for diagnostics and seeding).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM holidays")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

#[async_trait]
impl HolidayCalendar for HolidayRepository {
    async fn holidays(&self) -> CoreResult<HolidaySet> {
        Ok(self.list().await?.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    async fn repo() -> HolidayRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().holidays()
    }

    #[tokio::test]
    async fn test_insert_list_remove() {
        let repo = repo().await;
        assert!(repo.list().await.unwrap().is_empty());

        assert!(repo.insert(date(2019, 3, 4), None).await.unwrap());
        assert!(repo
            .insert(date(2019, 2, 18), Some("winter break"))
            .await
            .unwrap());

        assert_eq!(
            repo.list().await.unwrap(),
            vec![date(2019, 2, 18), date(2019, 3, 4)]
        );

        assert!(repo.remove(date(2019, 3, 4)).await.unwrap());
        assert!(!repo.remove(date(2019, 3, 4)).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_insert_is_ignored() {
        let repo = repo().await;
        assert!(repo.insert(date(2019, 2, 25), None).await.unwrap());
        assert!(!repo.insert(date(2019, 2, 25), None).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_calendar_trait_matches_exact_date() {
        let repo = repo().await;
        repo.insert(date(2019, 2, 18), None).await.unwrap();

        let holidays = repo.holidays().await.unwrap();
        assert!(holidays.contains(&date(2019, 2, 18)));
        assert!(!holidays.contains(&date(2020, 2, 18)));
    }
}
