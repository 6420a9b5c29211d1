mod pipeline;
mod record;
mod render;
mod site;
mod source;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;

use pipeline::Dataset;

#[derive(Parser)]
#[command(
    name = "roster_html",
    about = "Build a searchable offline phone book page from a contact roster"
)]
struct Cli {
    #[command(flatten)]
    opts: Options,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct Options {
    /// Roster spreadsheet (xlsx, xlsm, xlsb, xls, ods or csv)
    #[arg(short, long, global = true, env = "ROSTER_INPUT", default_value = source::DEFAULT_INPUT)]
    input: PathBuf,

    /// Sheet name (default: first sheet)
    #[arg(short, long, global = true, env = "ROSTER_SHEET")]
    sheet: Option<String>,

    /// Directory receiving index.html and .nojekyll
    #[arg(short, long, global = true, env = "ROSTER_OUT_DIR", default_value = ".")]
    out_dir: PathBuf,

    /// Page heading and document title
    #[arg(long, global = true, env = "ROSTER_TITLE", default_value = render::page::DEFAULT_TITLE)]
    title: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Write index.html and .nojekyll (default)
    Build,
    /// Show per-category record counts
    Stats,
    /// Print the normalized records as JSON
    Dump,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let opts = &cli.opts;

    match cli.command.unwrap_or(Commands::Build) {
        Commands::Build => {
            let marker = site::write_marker(&opts.out_dir)?;
            info!("Wrote {}", marker.display());
            let dataset = load(&opts.input, opts.sheet.as_deref())?;
            let html = render::render_document(&dataset.records, &opts.title);
            site::write_document(&opts.out_dir, &html)?;
            println!(
                "{} と {} を生成しました",
                site::DOCUMENT_FILE,
                site::MARKER_FILE
            );
        }
        Commands::Stats => {
            let dataset = load(&opts.input, opts.sheet.as_deref())?;
            print_stats(&dataset);
        }
        Commands::Dump => {
            let dataset = load(&opts.input, opts.sheet.as_deref())?;
            let json = serde_json::to_string_pretty(&dataset.records)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn load(input: &Path, sheet: Option<&str>) -> Result<Dataset> {
    let table = source::read_table(input, sheet)
        .with_context(|| format!("Failed to read roster from {}", input.display()))?;
    Ok(pipeline::build_dataset(&table))
}

fn print_stats(dataset: &Dataset) {
    let groups = render::group_records(&dataset.records);
    let width = groups
        .iter()
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(8);

    println!("{:<width$} | {:>5}", "Category", "Count", width = width);
    println!("{}", "-".repeat(width + 8));
    for g in &groups {
        println!("{:<width$} | {:>5}", g.label, g.records.len(), width = width);
    }
    println!();
    println!("Rows read:    {}", dataset.rows_read);
    println!("Rows dropped: {}", dataset.rows_dropped);
    println!("Records:      {}", dataset.records.len());
}
