//! Report history repository implementation.
//!
//! The ordering and upsert-by-date invariants live here: the upload date
//! is the primary key, writes go through `ON CONFLICT ... DO UPDATE`,
//! and reads order by the date column, so the sorted-ascending and
//! one-report-per-date guarantees hold regardless of write order.

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::reports;
use crate::schema::reports::dsl::*;

use super::model::ReportDB;
use paycycle_core::reports::{Report, ReportRepositoryTrait};
use paycycle_core::statements::StatementTotals;
use paycycle_core::Result;

pub struct ReportRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ReportRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ReportRepository { pool, writer }
    }
}

#[async_trait]
impl ReportRepositoryTrait for ReportRepository {
    fn get_reports(&self) -> Result<Vec<Report>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = reports
            .order(upload_date.asc())
            .load::<ReportDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Report::from).collect())
    }

    fn latest_report(&self) -> Result<Option<Report>> {
        let mut conn = get_connection(&self.pool)?;
        let row = reports
            .order(upload_date.desc())
            .first::<ReportDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(row.map(Report::from))
    }

    async fn upsert_report(
        &self,
        report_date: NaiveDate,
        totals: &StatementTotals,
    ) -> Result<Report> {
        let row = ReportDB::from_totals(report_date, totals);
        let stored = self
            .writer
            .exec(move |conn| -> Result<ReportDB> {
                diesel::insert_into(reports::table)
                    .values(&row)
                    .on_conflict(upload_date)
                    .do_update()
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(row)
            })
            .await?;
        Ok(Report::from(stored))
    }
}
