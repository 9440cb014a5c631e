//! # Application Facade
//!
//! [`OpsApi`] is the single entry point the interface layer talks to. It
//! owns the seeded datasets, the backend client, and the fetch state, and
//! applies the cross-cutting rules in one place: backend operations run
//! behind the in-flight guard, and role-gated mutations take the caller's
//! [`Identity`] explicitly.

use crate::backend::{Backend, FetchState, SimulatedBackend};
use crate::commands::{self, backup::BackupEntry, create::NewLead, CmdResult};
use crate::error::{OpsError, Result};
use crate::export::{ExportFormat, TableData};
use crate::model::Record;
use crate::query::FilterSet;
use crate::records::activities::Activity;
use crate::records::assets::Asset;
use crate::records::clients::Client;
use crate::records::expenses::ExpenseSubcategory;
use crate::records::leads::Lead;
use crate::records::proposals::Proposal;
use crate::records::sales::Sale;
use crate::records::subscriptions::Subscription;
use crate::records::tasks::Task;
use crate::records::tickets::{Ticket, TicketStatus};
use crate::records::{
    activities, assets, clients, expenses, leads, proposals, sales, subscriptions, tasks, tickets,
};
use crate::session::Identity;
use crate::store::memory::InMemoryStore;
use chrono::NaiveDate;
use std::path::Path;

/// The listing modules of the app, one per dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Module {
    Leads,
    Clients,
    Assets,
    Tickets,
    Activities,
    Proposals,
    Subscriptions,
    Sales,
    Tasks,
    Expenses,
}

impl Module {
    pub const ALL: [Module; 10] = [
        Module::Leads,
        Module::Clients,
        Module::Assets,
        Module::Tickets,
        Module::Activities,
        Module::Proposals,
        Module::Subscriptions,
        Module::Sales,
        Module::Tasks,
        Module::Expenses,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Module::Leads => "leads",
            Module::Clients => "clients",
            Module::Assets => "assets",
            Module::Tickets => "tickets",
            Module::Activities => "activities",
            Module::Proposals => "proposals",
            Module::Subscriptions => "subscriptions",
            Module::Sales => "sales",
            Module::Tasks => "tasks",
            Module::Expenses => "expenses",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Module::Leads => "Leads",
            Module::Clients => "Clients",
            Module::Assets => "Assets",
            Module::Tickets => "Tickets",
            Module::Activities => "Activities",
            Module::Proposals => "Proposals",
            Module::Subscriptions => "Subscriptions",
            Module::Sales => "Sales",
            Module::Tasks => "Tasks",
            Module::Expenses => "Expense Subcategories",
        }
    }
}

impl std::str::FromStr for Module {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Module::ALL
            .into_iter()
            .find(|m| m.slug() == s)
            .ok_or_else(|| format!("Unknown module: {}", s))
    }
}

impl std::fmt::Display for Module {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

/// Every dataset of the app, each behind its own store.
#[derive(Debug, Clone)]
pub struct Workspace {
    pub leads: InMemoryStore<Lead>,
    pub clients: InMemoryStore<Client>,
    pub assets: InMemoryStore<Asset>,
    pub tickets: InMemoryStore<Ticket>,
    pub activities: InMemoryStore<Activity>,
    pub proposals: InMemoryStore<Proposal>,
    pub subscriptions: InMemoryStore<Subscription>,
    pub sales: InMemoryStore<Sale>,
    pub tasks: InMemoryStore<Task>,
    pub expenses: InMemoryStore<ExpenseSubcategory>,
}

impl Workspace {
    /// Workspace with every module's mock dataset loaded.
    pub fn seeded() -> Self {
        Self {
            leads: InMemoryStore::seeded(leads::seed()),
            clients: InMemoryStore::seeded(clients::seed()),
            assets: InMemoryStore::seeded(assets::seed()),
            tickets: InMemoryStore::seeded(tickets::seed()),
            activities: InMemoryStore::seeded(activities::seed()),
            proposals: InMemoryStore::seeded(proposals::seed()),
            subscriptions: InMemoryStore::seeded(subscriptions::seed()),
            sales: InMemoryStore::seeded(sales::seed()),
            tasks: InMemoryStore::seeded(tasks::seed()),
            expenses: InMemoryStore::seeded(expenses::seed()),
        }
    }

    /// Projects one module's visible records into a [`TableData`].
    pub fn visible_table(
        &self,
        module: Module,
        filters: &FilterSet,
        query: &str,
    ) -> Result<TableData> {
        match module {
            Module::Leads => table_of(&self.leads, module, filters, query),
            Module::Clients => table_of(&self.clients, module, filters, query),
            Module::Assets => table_of(&self.assets, module, filters, query),
            Module::Tickets => table_of(&self.tickets, module, filters, query),
            Module::Activities => table_of(&self.activities, module, filters, query),
            Module::Proposals => table_of(&self.proposals, module, filters, query),
            Module::Subscriptions => table_of(&self.subscriptions, module, filters, query),
            Module::Sales => table_of(&self.sales, module, filters, query),
            Module::Tasks => table_of(&self.tasks, module, filters, query),
            Module::Expenses => table_of(&self.expenses, module, filters, query),
        }
    }

    /// Serializes every dataset for the backup archive, in module order.
    pub fn backup_entries(&self) -> Result<Vec<BackupEntry>> {
        Ok(vec![
            entry_of(&self.leads, Module::Leads)?,
            entry_of(&self.clients, Module::Clients)?,
            entry_of(&self.assets, Module::Assets)?,
            entry_of(&self.tickets, Module::Tickets)?,
            entry_of(&self.activities, Module::Activities)?,
            entry_of(&self.proposals, Module::Proposals)?,
            entry_of(&self.subscriptions, Module::Subscriptions)?,
            entry_of(&self.sales, Module::Sales)?,
            entry_of(&self.tasks, Module::Tasks)?,
            entry_of(&self.expenses, Module::Expenses)?,
        ])
    }
}

fn table_of<R: Record + Clone>(
    store: &InMemoryStore<R>,
    module: Module,
    filters: &FilterSet,
    query: &str,
) -> Result<TableData> {
    let result = commands::list::execute(store, filters, query)?;
    let refs: Vec<&R> = result.listed.iter().collect();
    Ok(TableData::from_records(module.title(), &refs))
}

fn entry_of<R: Record + Clone + serde::Serialize>(
    store: &InMemoryStore<R>,
    module: Module,
) -> Result<BackupEntry> {
    let records = crate::store::DataStore::list(store)?;
    let json = serde_json::to_string_pretty(&records).map_err(OpsError::Serialization)?;
    Ok((module.slug().to_string(), json))
}

pub struct OpsApi<B: Backend> {
    pub data: Workspace,
    backend: B,
    fetch: FetchState,
}

impl OpsApi<SimulatedBackend> {
    /// App state as shipped: seeded datasets over the simulated backend.
    pub fn seeded() -> Self {
        Self::new(SimulatedBackend::new())
    }
}

impl<B: Backend> OpsApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            data: Workspace::seeded(),
            backend,
            fetch: FetchState::default(),
        }
    }

    pub fn fetch_state(&self) -> &FetchState {
        &self.fetch
    }

    /// Exports one module's visible list. Runs entirely client-side, so no
    /// guard applies.
    pub fn export(
        &self,
        module: Module,
        filters: &FilterSet,
        query: &str,
        format: ExportFormat,
        out_dir: &Path,
    ) -> Result<CmdResult<()>> {
        let table = self.data.visible_table(module, filters, query)?;
        commands::export::execute(&table, format, out_dir, module.slug())
    }

    pub fn generate_report(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        format: Option<ExportFormat>,
        out_dir: &Path,
    ) -> Result<CmdResult<()>> {
        self.fetch.begin()?;
        let outcome = commands::report::execute(&self.backend, from, to, format, out_dir);
        settle(&mut self.fetch, outcome)
    }

    pub fn summary_export(
        &mut self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        format: ExportFormat,
        out_dir: &Path,
    ) -> Result<CmdResult<()>> {
        self.fetch.begin()?;
        let outcome = commands::report::summary(&self.backend, from, to, format, out_dir);
        settle(&mut self.fetch, outcome)
    }

    pub fn import_leads(&mut self, path: &Path) -> Result<CmdResult<Lead>> {
        self.fetch.begin()?;
        let outcome = commands::import::execute(&self.backend, &mut self.data.leads, path);
        settle(&mut self.fetch, outcome)
    }

    pub fn create_lead(&mut self, identity: &Identity, input: NewLead) -> Result<CmdResult<Lead>> {
        commands::create::execute(&mut self.data.leads, identity, input)
    }

    pub fn assign_ticket(
        &mut self,
        identity: &Identity,
        ticket_id: &str,
        assignee: &str,
    ) -> Result<CmdResult<Ticket>> {
        commands::assign::execute(&mut self.data.tickets, identity, ticket_id, assignee)
    }

    pub fn set_ticket_status(
        &mut self,
        ticket_id: &str,
        next: TicketStatus,
    ) -> Result<CmdResult<Ticket>> {
        commands::update::ticket_status(&mut self.data.tickets, ticket_id, next)
    }

    pub fn delete(&mut self, module: Module, id: &str) -> Result<CmdResult<()>> {
        let result = match module {
            Module::Leads => strip(commands::delete::execute(&mut self.data.leads, id)?),
            Module::Clients => strip(commands::delete::execute(&mut self.data.clients, id)?),
            Module::Assets => strip(commands::delete::execute(&mut self.data.assets, id)?),
            Module::Tickets => strip(commands::delete::execute(&mut self.data.tickets, id)?),
            Module::Activities => strip(commands::delete::execute(&mut self.data.activities, id)?),
            Module::Proposals => strip(commands::delete::execute(&mut self.data.proposals, id)?),
            Module::Subscriptions => {
                strip(commands::delete::execute(&mut self.data.subscriptions, id)?)
            }
            Module::Sales => strip(commands::delete::execute(&mut self.data.sales, id)?),
            Module::Tasks => strip(commands::delete::execute(&mut self.data.tasks, id)?),
            Module::Expenses => strip(commands::delete::execute(&mut self.data.expenses, id)?),
        };
        Ok(result)
    }

    pub fn backup(&self, out_dir: &Path) -> Result<CmdResult<()>> {
        let entries = self.data.backup_entries()?;
        commands::backup::execute(&entries, out_dir)
    }
}

/// Resolves a guarded backend operation: success and failure both release
/// the guard, recording the outcome in the fetch state.
fn settle<T>(fetch: &mut FetchState, outcome: Result<T>) -> Result<T> {
    match outcome {
        Ok(value) => {
            fetch.succeed();
            Ok(value)
        }
        Err(e) => {
            fetch.fail(e.to_string());
            Err(e)
        }
    }
}

/// Drops the record payload, keeping messages and artifact.
fn strip<R>(result: CmdResult<R>) -> CmdResult<()> {
    CmdResult {
        affected: Vec::new(),
        listed: Vec::new(),
        report: result.report,
        import: result.import,
        artifact: result.artifact,
        messages: result.messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::str::FromStr;
    use tempfile::TempDir;

    #[test]
    fn test_module_parse() {
        assert_eq!(Module::from_str("leads"), Ok(Module::Leads));
        assert_eq!(Module::from_str("expenses"), Ok(Module::Expenses));
        assert!(Module::from_str("invoices").is_err());
    }

    #[test]
    fn test_export_visible_list() {
        let dir = TempDir::new().unwrap();
        let api = OpsApi::seeded();
        let filters = FilterSet::new().with("status", "Qualified");
        let result = api
            .export(Module::Leads, &filters, "", ExportFormat::Csv, dir.path())
            .unwrap();

        let content = std::fs::read_to_string(result.artifact.unwrap()).unwrap();
        assert!(content.contains("Tech Solutions Inc"));
        assert!(!content.contains("ABC Corporation"));
    }

    #[test]
    fn test_report_failure_resets_guard() {
        let dir = TempDir::new().unwrap();
        let mut api = OpsApi::seeded();

        assert!(api.generate_report(None, None, None, dir.path()).is_err());
        assert!(matches!(api.fetch_state(), FetchState::Error(_)));

        // A failed run must not leave the guard stuck.
        let today = Utc::now().date_naive();
        let result = api
            .generate_report(Some(today - Duration::days(30)), Some(today), None, dir.path())
            .unwrap();
        assert!(result.report.is_some());
        assert_eq!(*api.fetch_state(), FetchState::Success);
    }

    #[test]
    fn test_backup_covers_all_modules() {
        let api = OpsApi::seeded();
        let entries = api.data.backup_entries().unwrap();
        assert_eq!(entries.len(), Module::ALL.len());
        assert!(entries.iter().any(|(name, _)| name == "tickets"));
    }

    #[test]
    fn test_delete_any_module() {
        let mut api = OpsApi::seeded();
        api.delete(Module::Assets, "AST-502").unwrap();
        assert!(api.delete(Module::Assets, "AST-502").is_err());
    }
}
