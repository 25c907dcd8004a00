use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use roster_api::{DirectoryApi, DirectoryError, Session, SessionConfig};
use roster_core::{Department, Employee, EmployeeFormData, Facet, FilterCriteria, Role, SortField};
use tracing::{info, warn};

mod render;

use render::{Output, Printer};

#[derive(Parser, Debug)]
#[command(name = "rosterctl", version, about = "Roster employee directory CLI")]
struct Cli {
    /// Output format
    #[arg(short = 'o', long = "output", value_enum, global = true, env = "ROSTER_OUTPUT", default_value_t = Output::Human)]
    output: Output,

    /// Rows per page (overrides ROSTER_PAGE_SIZE)
    #[arg(long = "per-page", global = true)]
    per_page: Option<usize>,

    /// Start from an empty directory instead of the seed roster
    #[arg(long = "no-seed", global = true)]
    no_seed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(flatten)]
    Action(Action),
    /// Read commands from stdin against one long-lived session
    Shell,
}

/// Commands available both one-shot and inside `shell`.
#[derive(Subcommand, Debug)]
enum Action {
    /// List the current page
    Ls(ListArgs),
    /// Show one employee
    Show { id: String },
    /// Add an employee
    Add(AddArgs),
    /// Edit an employee; omitted fields keep their current value
    Update(UpdateArgs),
    /// Delete an employee
    Rm { id: String },
}

/// Shell-only view controls on top of `Action`.
#[derive(Subcommand, Debug)]
enum ShellCmd {
    #[command(flatten)]
    Action(Action),
    /// Replace the filter criteria (unset options mean "All" / no search)
    Filter(FilterArgs),
    /// Sort by a field; the active field flips direction
    Sort { field: SortField },
    /// Go to a page
    Page { page: usize },
    /// Change rows per page (returns to page 1)
    PerPage { n: usize },
    /// Clear all filters
    Reset,
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    cmd: ShellCmd,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    #[arg(long, short = 'd')]
    department: Option<Facet<Department>>,
    #[arg(long, short = 'r')]
    role: Option<Facet<Role>>,
    /// Case-insensitive substring over names and email
    #[arg(long, short = 's')]
    search: Option<String>,
    /// Sort field; repeat to toggle direction
    #[arg(long = "sort")]
    sort: Vec<SortField>,
    #[arg(long, short = 'p')]
    page: Option<usize>,
    /// Print per-stage filter counts
    #[arg(long)]
    explain: bool,
}

#[derive(Args, Debug, Default)]
struct FilterArgs {
    #[arg(long, short = 'd', default_value = "All")]
    department: Facet<Department>,
    #[arg(long, short = 'r', default_value = "All")]
    role: Facet<Role>,
    #[arg(long, short = 's', default_value = "")]
    search: String,
}

#[derive(Args, Debug)]
struct AddArgs {
    #[arg(long = "first")]
    first_name: String,
    #[arg(long = "last")]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, default_value = "IT")]
    department: String,
    #[arg(long, default_value = "Developer")]
    role: String,
}

#[derive(Args, Debug)]
struct UpdateArgs {
    id: String,
    #[arg(long = "first")]
    first_name: Option<String>,
    #[arg(long = "last")]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    role: Option<String>,
}

impl From<AddArgs> for EmployeeFormData {
    fn from(a: AddArgs) -> Self {
        Self { first_name: a.first_name, last_name: a.last_name, email: a.email, department: a.department, role: a.role }
    }
}

impl UpdateArgs {
    /// Current record with the given overrides applied.
    fn merge(self, current: &Employee) -> EmployeeFormData {
        let mut f = EmployeeFormData::from(current);
        if let Some(v) = self.first_name { f.first_name = v; }
        if let Some(v) = self.last_name { f.last_name = v; }
        if let Some(v) = self.email { f.email = v; }
        if let Some(v) = self.department { f.department = v; }
        if let Some(v) = self.role { f.role = v; }
        f
    }
}

impl From<FilterArgs> for FilterCriteria {
    fn from(a: FilterArgs) -> Self {
        Self { department: a.department, role: a.role, search_term: a.search }
    }
}

/// How a command ended; maps onto the process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Ok,
    NotFound,
    Invalid,
}

impl Status {
    fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::NotFound => 1,
            Status::Invalid => 2,
        }
    }
}

fn init_tracing() {
    let env = std::env::var("ROSTER_LOG").unwrap_or_else(|_| "info".to_string());
    let filter = tracing_subscriber::EnvFilter::from_str(&env).unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn init_metrics() {
    if let Ok(addr) = std::env::var("ROSTER_METRICS_ADDR") {
        if let Ok(sock) = addr.parse::<std::net::SocketAddr>() {
            let builder = metrics_exporter_prometheus::PrometheusBuilder::new();
            match builder.with_http_listener(sock).install() {
                Ok(_) => tracing::info!(addr = %addr, "Prometheus metrics exporter listening"),
                Err(e) => tracing::warn!(error = %e, "failed to install metrics exporter"),
            }
        } else {
            tracing::warn!(addr = %addr, "invalid ROSTER_METRICS_ADDR; expected host:port");
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    init_metrics();
    let cli = Cli::parse();

    let mut cfg = SessionConfig::from_env();
    if let Some(n) = cli.per_page { cfg.items_per_page = n.max(1); }
    if cli.no_seed { cfg.seed = false; }
    let mut session = Session::new(&cfg);
    let printer = Printer { output: cli.output };

    let status = match cli.command {
        Commands::Action(action) => run_action(&mut session, action, printer, &mut std::io::stdout().lock())?,
        Commands::Shell => {
            run_shell(&mut session, printer)?;
            Status::Ok
        }
    };
    if status != Status::Ok {
        std::process::exit(status.code());
    }
    Ok(())
}

/// Runs one action. A successful add, update or rm prints the affected
/// record followed by the refreshed listing.
fn run_action(session: &mut Session, action: Action, printer: Printer, out: &mut impl Write) -> Result<Status> {
    let status = match action {
        Action::Ls(args) => {
            info!(?args, "ls invoked");
            apply_list_args(session, &args);
            printer.view(out, session.view(), session.empty_state(), args.explain)?;
            return Ok(Status::Ok);
        }
        Action::Show { id } => {
            return match session.get(&id) {
                Some(e) => {
                    printer.record(out, e)?;
                    Ok(Status::Ok)
                }
                None => Ok(missing(&id)),
            };
        }
        Action::Add(args) => {
            let form = EmployeeFormData::from(args);
            let res = session.create_employee(&form);
            settle(res, |out, e| printer.employee(out, "added", e), printer, out)?
        }
        Action::Update(args) => {
            let Some(current) = session.get(&args.id).cloned() else {
                return Ok(missing(&args.id));
            };
            let id = args.id.clone();
            let form = args.merge(&current);
            let res = session.update_employee(&id, &form);
            settle(res, |out, e| printer.employee(out, "updated", e), printer, out)?
        }
        Action::Rm { id } => {
            let res = session.delete_employee(&id);
            settle(res, |out, e| printer.removed(out, e), printer, out)?
        }
    };
    if status == Status::Ok {
        printer.view(out, session.view(), session.empty_state(), false)?;
    }
    Ok(status)
}

fn apply_list_args(session: &mut Session, args: &ListArgs) {
    if args.department.is_some() || args.role.is_some() || args.search.is_some() {
        let mut f = session.params().filter.clone();
        if let Some(d) = args.department { f.department = d; }
        if let Some(r) = args.role { f.role = r; }
        if let Some(s) = &args.search { f.search_term = s.clone(); }
        session.set_filter(f);
    }
    for field in &args.sort {
        session.set_sort(*field);
    }
    if let Some(p) = args.page {
        session.set_page(p);
    }
}

fn settle<W: Write>(
    res: Result<Employee, DirectoryError>,
    ok: impl FnOnce(&mut W, &Employee) -> Result<()>,
    printer: Printer,
    out: &mut W,
) -> Result<Status> {
    match res {
        Ok(e) => {
            ok(out, &e)?;
            Ok(Status::Ok)
        }
        Err(DirectoryError::Validation(errs)) => {
            printer.invalid(out, &errs)?;
            Ok(Status::Invalid)
        }
        Err(DirectoryError::NotFound(id)) => Ok(missing(&id)),
    }
}

fn missing(id: &str) -> Status {
    warn!(id = %id, "no such employee");
    eprintln!("no employee with id {id}");
    Status::NotFound
}

fn run_shell(session: &mut Session, printer: Printer) -> Result<()> {
    info!("shell started");
    let stdout = std::io::stdout();
    let out = &mut stdout.lock();
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() || words[0].starts_with('#') {
            continue;
        }
        let parsed = match ShellLine::try_parse_from(words) {
            Ok(p) => p,
            Err(e) => {
                e.print()?;
                continue;
            }
        };
        match parsed.cmd {
            ShellCmd::Quit => break,
            ShellCmd::Action(action) => {
                run_action(session, action, printer, out)?;
            }
            ShellCmd::Filter(args) => {
                session.set_filter(args.into());
                printer.view(out, session.view(), session.empty_state(), false)?;
            }
            ShellCmd::Sort { field } => {
                session.set_sort(field);
                printer.view(out, session.view(), session.empty_state(), false)?;
            }
            ShellCmd::Page { page } => {
                session.set_page(page);
                printer.view(out, session.view(), session.empty_state(), false)?;
            }
            ShellCmd::PerPage { n } => {
                session.set_items_per_page(n);
                printer.view(out, session.view(), session.empty_state(), false)?;
            }
            ShellCmd::Reset => {
                session.reset_filters();
                printer.view(out, session.view(), session.empty_state(), false)?;
            }
        }
    }
    info!("shell ended");
    Ok(())
}
