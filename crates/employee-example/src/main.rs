//! `employees`: browse the employee list and division roster in the terminal.
//!
//! Each flag replays one user event against the table, in this order:
//! options file, header clicks, page size, filter text, page.

mod data;
mod tables;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use gridview::{DataTable, ItemsPerPage, TableOptions};
use gridview_render::{BorderStyle, RenderOptions, TextRenderer};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser, Debug)]
#[command(name = "employees", version, about = "Browse employee records")]
struct Cli {
    #[command(subcommand)]
    screen: Option<Screen>,

    /// Read rows from a JSON file instead of the built-in sample
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Initial table options as a JSON file
    #[arg(long, global = true)]
    options: Option<PathBuf>,

    /// Click a column header; repeat to toggle the direction
    #[arg(short, long = "sort", global = true, value_name = "COLUMN")]
    sort: Vec<String>,

    /// Filter text
    #[arg(short, long, global = true)]
    filter: Option<String>,

    /// Page to show
    #[arg(short, long, global = true)]
    page: Option<usize>,

    /// Rows per page: 8, 10, 20, 30, 40, 50, 100 or 500
    #[arg(short = 'n', long, global = true, value_parser = parse_page_size)]
    page_size: Option<ItemsPerPage>,

    /// Table border
    #[arg(long, global = true, value_enum, default_value_t = Border::Light)]
    border: Border,

    /// Hide the page size and search line
    #[arg(long, global = true)]
    no_toolbar: bool,

    /// Log state changes to stderr (-vv for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    /// Employee master list
    List,
    /// Division roster with postings
    Divisions,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Border {
    None,
    Ascii,
    Light,
    Rounded,
}

impl From<Border> for BorderStyle {
    fn from(border: Border) -> Self {
        match border {
            Border::None => BorderStyle::None,
            Border::Ascii => BorderStyle::Ascii,
            Border::Light => BorderStyle::Light,
            Border::Rounded => BorderStyle::Rounded,
        }
    }
}

fn parse_page_size(s: &str) -> std::result::Result<ItemsPerPage, String> {
    let n: usize = s.parse().map_err(|_| format!("not a number: {}", s))?;
    ItemsPerPage::try_from(n).map_err(|e| e.to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // A logger may already be installed; keep it
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn load_options(cli: &Cli) -> Result<TableOptions> {
    match &cli.options {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            TableOptions::from_json(&text)
                .with_context(|| format!("loading options from {}", path.display()))
        }
        None => Ok(TableOptions::default()),
    }
}

/// Replays the command line events against `table`.
fn apply_events<R, I>(table: DataTable<R, I>, cli: &Cli, options: &TableOptions) -> DataTable<R, I> {
    let mut table = table.with_options(options);
    for column in &cli.sort {
        table.on_header_click(column);
    }
    if let Some(size) = cli.page_size {
        table.on_items_per_page_change(size);
    }
    if let Some(text) = &cli.filter {
        table.on_filter_text_change(text);
    }
    if let Some(page) = cli.page {
        table.on_page_change(page);
    }
    table
}

fn render_options(cli: &Cli) -> RenderOptions {
    RenderOptions::default()
        .border(cli.border.into())
        .show_toolbar(!cli.no_toolbar)
}

fn run(cli: &Cli) -> Result<String> {
    let options = load_options(cli)?;
    let renderer = TextRenderer::new(render_options(cli));

    let text = match cli.screen.unwrap_or(Screen::List) {
        Screen::List => {
            let rows = match &cli.data {
                Some(path) => data::load_employees(path)?,
                None => data::sample_employees(),
            };
            let mut table = apply_events(tables::employee_table(rows), cli, &options);
            renderer.render(&table.view())
        }
        Screen::Divisions => {
            let rows = match &cli.data {
                Some(path) => data::load_divisions(path)?,
                None => data::sample_divisions(),
            };
            let mut table = apply_events(tables::division_table(rows), cli, &options);
            renderer.render(&table.view())
        }
    };
    Ok(text)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("{:?}", cli);
    println!("{}", run(&cli)?);
    Ok(())
}
