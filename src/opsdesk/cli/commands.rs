use super::print::{print_import, print_list, print_messages, print_report};
use crate::args::{Cli, Commands};
use chrono::NaiveDate;
use clap::Parser;
use directories::ProjectDirs;
use opsdesk::api::{Module, OpsApi};
use opsdesk::backend::SimulatedBackend;
use opsdesk::commands::create::NewLead;
use opsdesk::commands::list;
use opsdesk::config::OpsConfig;
use opsdesk::error::{OpsError, Result};
use opsdesk::export::ExportFormat;
use opsdesk::model::Record;
use opsdesk::query::{FilterSet, ViewMode};
use opsdesk::records::tickets::TicketStatus;
use opsdesk::session::Identity;
use opsdesk::store::memory::InMemoryStore;
use std::path::PathBuf;
use std::str::FromStr;

struct AppContext {
    api: OpsApi<SimulatedBackend>,
    identity: Identity,
    default_view: ViewMode,
    export_dir: PathBuf,
    config_dir: PathBuf,
    config: OpsConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List {
            module,
            filter,
            search,
            view,
        }) => handle_list(&ctx, &module, filter, search, view),
        Some(Commands::Export {
            module,
            format,
            filter,
            search,
            out,
        }) => handle_export(&ctx, &module, &format, filter, search, out),
        Some(Commands::Report {
            from,
            to,
            format,
            out,
        }) => handle_report(&mut ctx, from, to, format, out),
        Some(Commands::Summary {
            from,
            to,
            format,
            out,
        }) => handle_summary(&mut ctx, from, to, &format, out),
        Some(Commands::Import { file }) => handle_import(&mut ctx, &file),
        Some(Commands::NewLead {
            company,
            contact,
            email,
            phone,
            source,
            status,
            owner,
        }) => handle_new_lead(&mut ctx, company, contact, email, phone, source, status, owner),
        Some(Commands::Assign { ticket, assignee }) => handle_assign(&mut ctx, &ticket, &assignee),
        Some(Commands::Status { ticket, status }) => handle_status(&mut ctx, &ticket, &status),
        Some(Commands::Delete { module, id }) => handle_delete(&mut ctx, &module, &id),
        Some(Commands::Backup { out }) => handle_backup(&ctx, out),
        Some(Commands::Config { key, value }) => handle_config(&mut ctx, key, value),
        None => handle_list(&ctx, "leads", Vec::new(), None, None),
    }
}

fn init_context() -> Result<AppContext> {
    let proj_dirs =
        ProjectDirs::from("com", "opsdesk", "opsdesk").expect("Could not determine config dir");
    let config_dir = proj_dirs.config_dir().to_path_buf();
    let config = OpsConfig::load(&config_dir)?;

    // Identity comes from config, with environment overrides for scripting.
    let name = std::env::var("OPSDESK_USER").unwrap_or_else(|_| config.user_name.clone());
    let role = match std::env::var("OPSDESK_ROLE") {
        Ok(raw) => raw.parse().map_err(OpsError::Validation)?,
        Err(_) => config.user_role,
    };
    let identity = Identity::new("local", name, role);

    let default_view = config
        .default_view
        .parse()
        .map_err(OpsError::Validation)?;
    let export_dir = PathBuf::from(&config.export_dir);

    Ok(AppContext {
        api: OpsApi::seeded(),
        identity,
        default_view,
        export_dir,
        config_dir,
        config,
    })
}

fn parse_module(raw: &str) -> Result<Module> {
    Module::from_str(raw).map_err(OpsError::Validation)
}

fn parse_filters(raw: Vec<String>) -> Result<FilterSet> {
    let mut filters = FilterSet::new();
    for pair in raw {
        let (field, value) = pair.split_once('=').ok_or_else(|| {
            OpsError::Validation(format!("Filters take the form FIELD=VALUE, got: {}", pair))
        })?;
        filters.set(field, value);
    }
    Ok(filters)
}

fn parse_format(raw: &str) -> Result<ExportFormat> {
    raw.parse().map_err(OpsError::Validation)
}

fn parse_date(raw: Option<String>) -> Result<Option<NaiveDate>> {
    raw.map(|s| {
        NaiveDate::parse_from_str(&s, "%Y-%m-%d")
            .map_err(|_| OpsError::Validation(format!("Invalid date (want YYYY-MM-DD): {}", s)))
    })
    .transpose()
}

fn resolve_view(ctx: &AppContext, view: Option<String>) -> Result<ViewMode> {
    match view {
        Some(raw) => raw.parse().map_err(OpsError::Validation),
        None => Ok(ctx.default_view),
    }
}

fn out_dir(ctx: &AppContext, out: Option<PathBuf>) -> PathBuf {
    out.unwrap_or_else(|| ctx.export_dir.clone())
}

fn handle_list(
    ctx: &AppContext,
    module: &str,
    filter: Vec<String>,
    search: Option<String>,
    view: Option<String>,
) -> Result<()> {
    let module = parse_module(module)?;
    let filters = parse_filters(filter)?;
    let query = search.unwrap_or_default();
    let mode = resolve_view(ctx, view)?;

    let data = &ctx.api.data;
    match module {
        Module::Leads => show_list(&data.leads, &filters, &query, mode),
        Module::Clients => show_list(&data.clients, &filters, &query, mode),
        Module::Assets => show_list(&data.assets, &filters, &query, mode),
        Module::Tickets => show_list(&data.tickets, &filters, &query, mode),
        Module::Activities => show_list(&data.activities, &filters, &query, mode),
        Module::Proposals => show_list(&data.proposals, &filters, &query, mode),
        Module::Subscriptions => show_list(&data.subscriptions, &filters, &query, mode),
        Module::Sales => show_list(&data.sales, &filters, &query, mode),
        Module::Tasks => show_list(&data.tasks, &filters, &query, mode),
        Module::Expenses => show_list(&data.expenses, &filters, &query, mode),
    }
}

fn show_list<R: Record + Clone>(
    store: &InMemoryStore<R>,
    filters: &FilterSet,
    query: &str,
    mode: ViewMode,
) -> Result<()> {
    let result = list::execute(store, filters, query)?;
    print_list(&result.listed, mode);
    print_messages(&result.messages);
    Ok(())
}

fn handle_export(
    ctx: &AppContext,
    module: &str,
    format: &str,
    filter: Vec<String>,
    search: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let module = parse_module(module)?;
    let format = parse_format(format)?;
    let filters = parse_filters(filter)?;
    let query = search.unwrap_or_default();

    let result = ctx
        .api
        .export(module, &filters, &query, format, &out_dir(ctx, out))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_report(
    ctx: &mut AppContext,
    from: Option<String>,
    to: Option<String>,
    format: Option<String>,
    out: Option<PathBuf>,
) -> Result<()> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    let format = format.as_deref().map(parse_format).transpose()?;
    let dir = out_dir(ctx, out);

    let result = ctx.api.generate_report(from, to, format, &dir)?;
    if let Some(report) = &result.report {
        print_report(report);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_summary(
    ctx: &mut AppContext,
    from: Option<String>,
    to: Option<String>,
    format: &str,
    out: Option<PathBuf>,
) -> Result<()> {
    let from = parse_date(from)?;
    let to = parse_date(to)?;
    let format = parse_format(format)?;
    let dir = out_dir(ctx, out);

    let result = ctx.api.summary_export(from, to, format, &dir)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_import(ctx: &mut AppContext, file: &std::path::Path) -> Result<()> {
    let result = ctx.api.import_leads(file)?;
    if let Some(report) = &result.import {
        print_import(report);
    }
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_new_lead(
    ctx: &mut AppContext,
    company: String,
    contact: String,
    email: String,
    phone: String,
    source: String,
    status: Option<String>,
    owner: Option<String>,
) -> Result<()> {
    let status = status
        .as_deref()
        .map(|s| s.parse().map_err(OpsError::Validation))
        .transpose()?;
    let input = NewLead {
        company,
        contact,
        email,
        phone,
        status,
        source,
        owner,
    };
    let identity = ctx.identity.clone();
    let result = ctx.api.create_lead(&identity, input)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_assign(ctx: &mut AppContext, ticket: &str, assignee: &str) -> Result<()> {
    let identity = ctx.identity.clone();
    let result = ctx.api.assign_ticket(&identity, ticket, assignee)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_status(ctx: &mut AppContext, ticket: &str, status: &str) -> Result<()> {
    let next = TicketStatus::from_str(status).map_err(OpsError::Validation)?;
    let result = ctx.api.set_ticket_status(ticket, next)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, module: &str, id: &str) -> Result<()> {
    let module = parse_module(module)?;
    let result = ctx.api.delete(module, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_backup(ctx: &AppContext, out: Option<PathBuf>) -> Result<()> {
    let result = ctx.api.backup(&out_dir(ctx, out))?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    match (key, value) {
        (None, _) => {
            for (key, value) in ctx.config.list_all() {
                println!("{} = {}", key, value);
            }
        }
        (Some(key), None) => {
            let value = ctx
                .config
                .list_all()
                .into_iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v)
                .ok_or_else(|| OpsError::Validation(format!("Unknown config key: {}", key)))?;
            println!("{}", value);
        }
        (Some(key), Some(value)) => {
            ctx.config.set_key(&key, &value)?;
            ctx.config.save(&ctx.config_dir)?;
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}
