//! Reports service
//!
//! Pass-through reads over the seeded report and insight collections.

use sqlx::types::Json;
use sqlx::PgPool;

use shared::{Insight, Report, Severity};

use crate::error::{AppError, AppResult};

/// Reports service
#[derive(Clone)]
pub struct ReportService {
    db: PgPool,
}

#[derive(sqlx::FromRow)]
struct ReportRow {
    title: String,
    date: String,
    report_type: String,
    pages: i32,
    size: String,
    status: String,
    highlights: Json<Vec<String>>,
}

#[derive(sqlx::FromRow)]
struct InsightRow {
    title: String,
    zone: String,
    severity: String,
    insight: String,
    confidence: i32,
}

impl ReportService {
    /// Create a new ReportService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Generated report summaries
    pub async fn reports(&self) -> AppResult<Vec<Report>> {
        let rows = sqlx::query_as::<_, ReportRow>(
            r#"
            SELECT title, date, report_type, pages, size, status, highlights
            FROM reports
            ORDER BY position
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Report {
                title: row.title,
                date: row.date,
                report_type: row.report_type,
                pages: row.pages,
                size: row.size,
                status: row.status,
                highlights: row.highlights.0,
            })
            .collect())
    }

    /// Machine-generated insights
    pub async fn insights(&self) -> AppResult<Vec<Insight>> {
        let rows = sqlx::query_as::<_, InsightRow>(
            r#"
            SELECT title, zone, severity, insight, confidence
            FROM insights
            ORDER BY position
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter()
            .map(|row| {
                let severity = match row.severity.as_str() {
                    "moderate" => Severity::Moderate,
                    "high" => Severity::High,
                    other => {
                        return Err(AppError::Internal(format!("bad severity: {}", other)))
                    }
                };
                Ok(Insight {
                    title: row.title,
                    zone: row.zone,
                    severity,
                    insight: row.insight,
                    confidence: row.confidence,
                })
            })
            .collect()
    }
}
