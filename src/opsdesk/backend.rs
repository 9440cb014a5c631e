//! # Backend Boundary
//!
//! Typed request/response interface for everything a server would compute:
//! report generation, summary exports over a date range, and bulk imports.
//! The front end used to stand these in with fixed-delay timers; here the
//! contract is a trait so swapping [`SimulatedBackend`] for a real network
//! client changes no call sites.
//!
//! Also home to the per-page fetch state machine and the in-flight guard.
//! The guard is applied uniformly: no backend operation may start while
//! another is in flight, which closes the duplicate-submission gap the old
//! pages handled inconsistently.

use crate::error::{OpsError, Result};
use crate::export::TableData;
use crate::records::activities::{Activity, ActivityKind};
use crate::records::leads::Lead;
use crate::records::sales::{Sale, SaleStage};
use crate::records::tasks::{Task, TaskStatus};
use crate::records::{activities, leads, sales, tasks};
use chrono::NaiveDate;
use std::time::Duration;

/// Date range for report generation, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl ReportRequest {
    /// Validates a possibly-missing range. Missing or inverted ranges are
    /// validation errors and must short-circuit before any backend call.
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        let (from, to) = match (from, to) {
            (Some(f), Some(t)) => (f, t),
            _ => {
                return Err(OpsError::Validation(
                    "Please select a date range before generating the report".to_string(),
                ))
            }
        };
        if from > to {
            return Err(OpsError::Validation(format!(
                "Invalid date range: {} is after {}",
                from, to
            )));
        }
        Ok(Self { from, to })
    }

    fn contains(&self, date: NaiveDate) -> bool {
        self.from <= date && date <= self.to
    }
}

/// KPI summary for a date range. Field order here is the authoritative
/// column order for every export of this report.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiReport {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub new_leads_assigned: usize,
    pub meetings_completed: usize,
    pub demos_completed: usize,
    pub activities_logged: usize,
    pub tasks_completed: usize,
    pub deals_won: usize,
    pub conversion_rate: f64,
}

impl KpiReport {
    /// Metric rows in the authoritative order.
    pub fn rows(&self) -> Vec<(String, String)> {
        vec![
            (
                "New Leads Assigned".to_string(),
                self.new_leads_assigned.to_string(),
            ),
            (
                "Meetings Completed".to_string(),
                self.meetings_completed.to_string(),
            ),
            (
                "Demos Completed".to_string(),
                self.demos_completed.to_string(),
            ),
            (
                "Activities Logged".to_string(),
                self.activities_logged.to_string(),
            ),
            (
                "Tasks Completed".to_string(),
                self.tasks_completed.to_string(),
            ),
            ("Deals Won".to_string(), self.deals_won.to_string()),
            (
                "Conversion Rate".to_string(),
                format!("{:.1}%", self.conversion_rate),
            ),
        ]
    }

    pub fn to_table(&self) -> TableData {
        TableData::new(
            format!("KPI Summary {} to {}", self.from, self.to),
            vec!["metric".to_string(), "value".to_string()],
            self.rows()
                .into_iter()
                .map(|(label, value)| vec![label, value])
                .collect(),
        )
    }
}

/// One parsed spreadsheet row handed to the import process.
#[derive(Debug, Clone)]
pub struct ImportRequest {
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportStatus {
    Completed,
    CompletedWithErrors,
    Failed,
}

impl ImportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImportStatus::Completed => "Completed",
            ImportStatus::CompletedWithErrors => "Completed with errors",
            ImportStatus::Failed => "Failed",
        }
    }
}

/// Structured result of a bulk import: overall status, success count, and
/// the ordered per-row error strings. Consumers must surface the count and
/// every error, untruncated.
#[derive(Debug, Clone)]
pub struct ImportReport {
    pub status: ImportStatus,
    pub successful_imports: usize,
    pub errors: Vec<String>,
}

/// Import result: the report plus the records that passed validation.
#[derive(Debug, Clone)]
pub struct BulkImportResult {
    pub imported: Vec<Lead>,
    pub report: ImportReport,
}

/// Server-computed operations, one method per operation.
pub trait Backend {
    fn generate_report(&self, request: ReportRequest) -> Result<KpiReport>;

    /// Summary export over a date range, independent of on-screen filters.
    fn summary_export(&self, request: ReportRequest) -> Result<TableData>;

    fn bulk_import(&self, request: ImportRequest) -> Result<BulkImportResult>;
}

/// Computes results from the seeded datasets. Stands in for the real server
/// until one exists; the optional latency mimics network delay.
pub struct SimulatedBackend {
    leads: Vec<Lead>,
    activities: Vec<Activity>,
    tasks: Vec<Task>,
    sales: Vec<Sale>,
    latency: Option<Duration>,
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedBackend {
    pub fn new() -> Self {
        Self {
            leads: leads::seed(),
            activities: activities::seed(),
            tasks: tasks::seed(),
            sales: sales::seed(),
            latency: None,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }

    #[cfg(any(test, feature = "test_utils"))]
    pub fn with_data(
        leads: Vec<Lead>,
        activities: Vec<Activity>,
        tasks: Vec<Task>,
        sales: Vec<Sale>,
    ) -> Self {
        Self {
            leads,
            activities,
            tasks,
            sales,
            latency: None,
        }
    }

    fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            std::thread::sleep(latency);
        }
    }
}

impl Backend for SimulatedBackend {
    fn generate_report(&self, request: ReportRequest) -> Result<KpiReport> {
        self.simulate_latency();

        let new_leads_assigned = self
            .leads
            .iter()
            .filter(|l| request.contains(l.created_at.date_naive()))
            .count();
        let in_range_activities: Vec<_> = self
            .activities
            .iter()
            .filter(|a| request.contains(a.logged_at.date_naive()))
            .collect();
        let meetings_completed = in_range_activities
            .iter()
            .filter(|a| a.kind == ActivityKind::Meeting && a.completed)
            .count();
        let demos_completed = in_range_activities
            .iter()
            .filter(|a| a.kind == ActivityKind::Demo && a.completed)
            .count();
        let activities_logged = in_range_activities.len();
        let tasks_completed = self
            .tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Done && request.contains(t.due_on))
            .count();
        let deals_won = self
            .sales
            .iter()
            .filter(|s| {
                s.stage == SaleStage::ClosedWon
                    && s.closed_on.map(|d| request.contains(d)).unwrap_or(false)
            })
            .count();
        let conversion_rate = if new_leads_assigned == 0 {
            0.0
        } else {
            deals_won as f64 / new_leads_assigned as f64 * 100.0
        };

        Ok(KpiReport {
            from: request.from,
            to: request.to,
            new_leads_assigned,
            meetings_completed,
            demos_completed,
            activities_logged,
            tasks_completed,
            deals_won,
            conversion_rate,
        })
    }

    fn summary_export(&self, request: ReportRequest) -> Result<TableData> {
        Ok(self.generate_report(request)?.to_table())
    }

    fn bulk_import(&self, request: ImportRequest) -> Result<BulkImportResult> {
        self.simulate_latency();
        crate::commands::import::validate_rows(&request.rows, &self.leads)
    }
}

/// Fetch lifecycle for pages whose data is server-sourced. Pure
/// client-filtered pages never leave `Idle`; filtering there is synchronous.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl FetchState {
    /// `idle | success | error → loading`. Starting while already loading is
    /// the re-entrancy bug the guard exists to prevent.
    pub fn begin(&mut self) -> Result<()> {
        if *self == FetchState::Loading {
            return Err(OpsError::Validation(
                "An operation is already in progress".to_string(),
            ));
        }
        *self = FetchState::Loading;
        Ok(())
    }

    pub fn succeed(&mut self) {
        *self = FetchState::Success;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = FetchState::Error(message.into());
    }

    pub fn is_loading(&self) -> bool {
        *self == FetchState::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, Utc};

    fn range(days_back: i64) -> ReportRequest {
        let today = Utc::now().date_naive();
        ReportRequest {
            from: today - ChronoDuration::days(days_back),
            to: today,
        }
    }

    #[test]
    fn test_report_request_requires_full_range() {
        let today = Utc::now().date_naive();
        assert!(ReportRequest::new(None, None).is_err());
        assert!(ReportRequest::new(Some(today), None).is_err());
        assert!(ReportRequest::new(None, Some(today)).is_err());
        assert!(ReportRequest::new(Some(today), Some(today)).is_ok());
    }

    #[test]
    fn test_report_request_rejects_inverted_range() {
        let today = Utc::now().date_naive();
        let yesterday = today - ChronoDuration::days(1);
        assert!(ReportRequest::new(Some(today), Some(yesterday)).is_err());
    }

    #[test]
    fn test_kpi_rows_authoritative_order() {
        let backend = SimulatedBackend::new();
        let report = backend.generate_report(range(60)).unwrap();
        let labels: Vec<_> = report.rows().into_iter().map(|(l, _)| l).collect();
        assert_eq!(
            labels,
            vec![
                "New Leads Assigned",
                "Meetings Completed",
                "Demos Completed",
                "Activities Logged",
                "Tasks Completed",
                "Deals Won",
                "Conversion Rate",
            ]
        );
    }

    #[test]
    fn test_report_counts_from_seed() {
        let backend = SimulatedBackend::new();
        let report = backend.generate_report(range(60)).unwrap();
        // All five seed activities fall inside the last 60 days.
        assert_eq!(report.activities_logged, 5);
        assert_eq!(report.meetings_completed, 1);
        assert_eq!(report.demos_completed, 1);
    }

    #[test]
    fn test_empty_range_is_zeroes_not_error() {
        let backend = SimulatedBackend::new();
        let from = NaiveDate::from_ymd_opt(1999, 1, 1).unwrap();
        let to = NaiveDate::from_ymd_opt(1999, 1, 31).unwrap();
        let report = backend.generate_report(ReportRequest { from, to }).unwrap();
        assert_eq!(report.new_leads_assigned, 0);
        assert_eq!(report.deals_won, 0);
        assert_eq!(report.conversion_rate, 0.0);
    }

    #[test]
    fn test_fetch_state_machine() {
        let mut state = FetchState::default();
        assert_eq!(state, FetchState::Idle);

        state.begin().unwrap();
        assert!(state.is_loading());
        // Re-entrant begin is refused while loading.
        assert!(state.begin().is_err());

        state.succeed();
        assert_eq!(state, FetchState::Success);
        // success → loading again on a refetch trigger
        state.begin().unwrap();
        state.fail("boom");
        assert_eq!(state, FetchState::Error("boom".to_string()));
        // error → loading is allowed too
        state.begin().unwrap();
    }
}
