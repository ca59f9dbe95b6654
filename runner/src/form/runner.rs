use crate::browser::{Page, PageElement, Role};
use crate::config::Config;
use crate::errors::RunError;
use crate::form::fields::{field_specs, FieldSpec};
use crate::form::login::login;
use crate::form::report::{FieldReport, ResolvedBy, RowReport, RunReport};
use crate::form::row::Row;
use crate::resolver::{resolve_by_label, resolve_fallback, Outcome, ResolverSettings, RowContext};
use std::time::Duration;

pub const SUBMIT_BUTTON: &str = "Submit";

/// Drives the whole run: navigate, log in once, then fill and submit every row.
pub struct FormRunner<'a, P: Page> {
    page: &'a P,
    base_url: String,
    settings: ResolverSettings,
    login_settle: Duration,
    submit_settle: Duration,
}

impl<'a, P: Page> FormRunner<'a, P> {
    pub fn new(page: &'a P, config: &Config) -> Self {
        Self {
            page,
            base_url: config.base_url.clone(),
            settings: ResolverSettings::from_config(config),
            login_settle: Duration::from_millis(config.login_settle_ms),
            submit_settle: Duration::from_millis(config.submit_settle_ms),
        }
    }

    pub async fn run(&self, rows: &[Row]) -> Result<RunReport, RunError> {
        self.page
            .goto(&self.base_url)
            .await
            .map_err(|e| RunError::Navigation(format!("{}: {}", self.base_url, e)))?;
        tracing::info!("🌐 Opened {}", self.base_url);

        let mut report = RunReport::default();
        let total = rows.len();

        for (i, row) in rows.iter().enumerate() {
            let row_number = i + 1;
            if row_number == 1 {
                login(self.page, &row.username, &row.password, self.login_settle).await?;
            }

            tracing::info!("=== Processing row {}/{}: {} ===", row_number, total, row.company_name);

            let row_report = self.fill_row(row_number, &field_specs(row)).await;
            self.submit().await?;

            tracing::info!(
                "📨 Row {} submitted ({}/{} fields placed)",
                row_number,
                row_report.filled_count(),
                row_report.fields.len()
            );
            report.rows.push(row_report);
        }

        Ok(report)
    }

    /// Places every field of one row. Never fails: an unplaced field is logged and skipped.
    pub async fn fill_row(&self, row_number: usize, fields: &[FieldSpec]) -> RowReport {
        let mut ctx = RowContext::new(row_number);
        let mut reports = Vec::with_capacity(fields.len());

        for field in fields {
            reports.push(self.fill_field(field, &mut ctx).await);
        }

        RowReport {
            row_number,
            fields: reports,
        }
    }

    async fn fill_field(&self, field: &FieldSpec, ctx: &mut RowContext) -> FieldReport {
        let mut report = FieldReport {
            field: field.name,
            keywords: field.keywords.clone(),
            resolved_by: ResolvedBy::Unresolved,
            index: None,
            method: None,
        };

        let by_label =
            resolve_by_label(self.page, &self.settings, &field.keywords, &field.value, ctx).await;
        if let Outcome::Filled { index, method } = by_label.outcome {
            report.resolved_by = ResolvedBy::Label;
            report.index = Some(index);
            report.method = Some(method);
            return report;
        }

        tracing::debug!("{} not placed by label ({:?}), trying fallback", field.name, by_label.outcome);
        let fallback = resolve_fallback(self.page, &self.settings, &field.value, ctx).await;
        if let Outcome::Filled { index, method } = fallback.outcome {
            report.resolved_by = ResolvedBy::Fallback;
            report.index = Some(index);
            report.method = Some(method);
            return report;
        }

        tracing::warn!(
            "⚠️ Row {}: could not place value for keywords {:?}",
            ctx.row_number(),
            field.keywords
        );
        report
    }

    async fn submit(&self) -> Result<(), RunError> {
        self.page
            .find_by_role(Role::Button, SUBMIT_BUTTON, false)
            .await
            .map_err(RunError::SubmitFailed)?
            .click()
            .await
            .map_err(RunError::SubmitFailed)?;

        if !self.submit_settle.is_zero() {
            self.page.wait(self.submit_settle).await;
        }
        Ok(())
    }
}
