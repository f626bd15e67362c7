//! Command-line interface for bverfgex.

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use bverfgex_verweis::find_citation_matches;

use crate::config::{validate_file_path, OutputFormat};
use crate::error::Result;
use crate::llcon::load_llcon_xml;
use crate::output::{render_decision, render_matches, render_records, render_summary};
use crate::scan::{collect_xml_files, scan_decision, summarize};

/// bverfgex - Extract BVerfGE citations and load LLCon decisions.
#[derive(Parser)]
#[command(name = "bverfgex")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find BVerfGE citations in a text.
    Extract {
        /// Text to search (default: read from --input or stdin)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long, conflicts_with = "text")]
        input: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Parse an LLCon decision file into paragraph rows.
    Load {
        /// LLCon XML file
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,
    },

    /// Find citations in every paragraph of LLCon decisions.
    Scan {
        /// Decision files or directories containing them
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: OutputFormat,

        /// Print citation counts per cited decision instead of every citation
        #[arg(short, long)]
        summary: bool,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            text,
            input,
            format,
        } => extract_command(text, input.as_deref(), format),
        Commands::Load { path, format } => load_command(&path, format),
        Commands::Scan {
            paths,
            format,
            summary,
        } => scan_command(&paths, format, summary),
    }
}

/// Execute the extract command.
fn extract_command(text: Option<String>, input: Option<&Path>, format: OutputFormat) -> Result<()> {
    let text = match (text, input) {
        (Some(text), _) => text,
        (None, Some(path)) => {
            validate_file_path(path)?;
            std::fs::read_to_string(path)?
        }
        (None, None) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let matches = find_citation_matches(&text);
    print_output(&render_matches(&matches, format)?);
    Ok(())
}

/// Execute the load command.
fn load_command(path: &Path, format: OutputFormat) -> Result<()> {
    let decision = load_llcon_xml(path)?;
    print_output(&render_decision(&decision, format)?);
    Ok(())
}

/// Execute the scan command.
fn scan_command(paths: &[PathBuf], format: OutputFormat, summary: bool) -> Result<()> {
    let files = collect_xml_files(paths)?;

    let pb = ProgressBar::new(files.len() as u64);
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30}] {pos}/{len} {msg}")
            .expect("valid template"),
    );

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for file in &files {
        pb.set_message(file.display().to_string());
        match load_llcon_xml(file) {
            Ok(decision) => records.extend(scan_decision(&decision)),
            Err(e) => {
                tracing::warn!(path = %file.display(), error = %e, "Skipping decision");
                skipped += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    if skipped > 0 {
        eprintln!(
            "{} {} of {} files could not be read",
            style("Skipped:").yellow().bold(),
            skipped,
            files.len()
        );
    }

    let rendered = if summary {
        render_summary(&summarize(&records), format)?
    } else {
        render_records(&records, format)?
    };
    print_output(&rendered);
    Ok(())
}

fn print_output(rendered: &str) {
    if !rendered.is_empty() {
        println!("{}", rendered.trim_end());
    }
}
