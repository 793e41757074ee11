//! Command definitions and handlers.

use std::fs;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Args;
use clap::Parser;
use clap::Subcommand;
use tablekit_lib::TableView;
use tablekit_lib::error::QueryError;
use tablekit_lib::error::ValidationErrors;
use tablekit_lib::model::Row;

/// Evaluate and check data table views.
#[derive(Parser, Debug)]
#[command(name = "tablekit")]
#[command(about = "Filter, sort and paginate JSON rows through a table view", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Evaluate a view over a row set and print the visible page as JSON
    Query(QueryArgs),

    /// Check a view definition and list every problem
    Validate {
        /// Path to the table view definition
        #[arg(long)]
        view: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct QueryArgs {
    /// Path to the table view definition
    #[arg(long)]
    pub view: PathBuf,

    /// Path to a JSON array of row objects
    #[arg(long)]
    pub rows: PathBuf,

    /// Page to show (1-based); clamped to the last page
    #[arg(long)]
    pub page: Option<usize>,

    /// Rows per page, overriding the view
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Global search query
    #[arg(long)]
    pub search: Option<String>,

    /// Pretty-print the output
    #[arg(long)]
    pub pretty: bool,
}

/// Runs a parsed command line.
pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Query(args) => query(&args),
        Command::Validate { view } => {
            let view = load_view(&view)?;
            match view.validate() {
                Ok(()) => {
                    println!("ok");
                    Ok(ExitCode::SUCCESS)
                }
                Err(errors) => {
                    report(&errors);
                    Ok(ExitCode::FAILURE)
                }
            }
        }
    }
}

fn query(args: &QueryArgs) -> anyhow::Result<ExitCode> {
    let mut view = load_view(&args.view)?;
    if let Err(errors) = view.validate() {
        report(&errors);
        return Ok(ExitCode::FAILURE);
    }
    let rows = load_rows(&args.rows)?;

    let page = match apply_overrides(&mut view, args).and_then(|()| view.evaluate(&rows)) {
        Ok(page) => page,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    log::info!(
        "page {} of {} ({} matched)",
        page.current_page(),
        page.total_pages(),
        page.total_matched()
    );

    let mut stdout = std::io::stdout().lock();
    if args.pretty {
        serde_json::to_writer_pretty(&mut stdout, &page)?;
    } else {
        serde_json::to_writer(&mut stdout, &page)?;
    }
    writeln!(stdout)?;
    Ok(ExitCode::SUCCESS)
}

/// Applies command line overrides in the order a user would: page size,
/// search, then page.
fn apply_overrides(view: &mut TableView, args: &QueryArgs) -> Result<(), QueryError> {
    if let Some(page_size) = args.page_size {
        view.set_page_size(page_size)?;
    }
    if let Some(search) = &args.search {
        view.set_global_search(Some(search.clone()));
    }
    if let Some(page) = args.page {
        view.set_page(page);
    }
    Ok(())
}

fn load_view(path: &Path) -> anyhow::Result<TableView> {
    TableView::load(path).with_context(|| format!("loading view {}", path.display()))
}

fn load_rows(path: &Path) -> anyhow::Result<Vec<Row>> {
    let json = fs::read_to_string(path).with_context(|| format!("reading rows {}", path.display()))?;
    let rows: Vec<Row> =
        serde_json::from_str(&json).with_context(|| format!("parsing rows {}", path.display()))?;
    log::debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn report(errors: &ValidationErrors) {
    for error in errors.errors() {
        eprintln!("{}", error);
    }
    eprintln!("{}", errors);
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tablekit_lib::model::Column;

    fn args(page: Option<usize>, page_size: Option<usize>, search: Option<&str>) -> QueryArgs {
        QueryArgs {
            view: PathBuf::from("view.json"),
            rows: PathBuf::from("rows.json"),
            page,
            page_size,
            search: search.map(str::to_string),
            pretty: false,
        }
    }

    fn rows() -> Vec<Row> {
        (1..=30i64)
            .map(|id| Row::new().set("id", id).set("name", format!("row {}", id)))
            .collect()
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_query() {
        let cli = Cli::parse_from([
            "tablekit", "-vv", "query", "--view", "v.json", "--rows", "r.json", "--page", "3", "--page-size", "25",
        ]);
        assert_eq!(cli.verbose, 2);
        let Command::Query(args) = cli.command else {
            panic!("expected query command");
        };
        assert_eq!(args.page, Some(3));
        assert_eq!(args.page_size, Some(25));
        assert!(args.search.is_none());
    }

    #[test]
    fn test_overrides() {
        let mut view = TableView::new(vec![Column::number("id"), Column::string("name")]);
        apply_overrides(&mut view, &args(Some(2), Some(25), None)).unwrap();
        let page = view.evaluate(&rows()).unwrap();
        assert_eq!(page.current_page(), 2);
        assert_eq!(page.len(), 5);

        apply_overrides(&mut view, &args(None, None, Some("row 7"))).unwrap();
        let page = view.evaluate(&rows()).unwrap();
        assert_eq!(page.total_matched(), 1);
        assert_eq!(page.current_page(), 1);
    }

    #[test]
    fn test_zero_page_size_rejected() {
        let mut view = TableView::new(vec![Column::number("id")]);
        assert_eq!(
            apply_overrides(&mut view, &args(None, Some(0), None)),
            Err(QueryError::InvalidPageSize)
        );
    }

    #[test]
    fn test_page_size_follows_view_options() {
        let mut view = TableView::new(vec![Column::number("id")]);
        assert_eq!(
            apply_overrides(&mut view, &args(None, Some(7), None)),
            Err(QueryError::PageSizeNotOffered { size: 7 })
        );
        assert_eq!(view.pagination().page_size, 10);
        assert!(view.validate().is_ok());
    }
}
