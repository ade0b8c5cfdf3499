//! Mediashelf CLI - manage a remote media catalog
//!
//! # Catalog Commands
//!
//! ```bash
//! mediashelf list --search dune --status Completed
//! mediashelf stats
//! mediashelf add --title Dune --type Book --genre Sci-Fi --year 1965 --status Planned
//! mediashelf edit 12 --status Completed --rating 9
//! mediashelf delete 12
//! ```
//!
//! # Offline Commands
//!
//! ```bash
//! mediashelf check drafts.json      # Validate candidate records
//! mediashelf summarize export.json  # Statistics over a saved record list
//! ```

use clap::{Args, Parser, Subcommand};
use mediashelf::{
    summarize, validate, RawForm, RecordFilter, RecordId, StatsSummary, Status, StatusFilter,
};
use mediashelf_client::logs::{self, log_error, log_info, log_info_indent, log_success, log_warning};
use mediashelf_client::{
    files, render, Catalog, CatalogError, CliError, CliResult, Config, RecordsApi,
};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "mediashelf")]
#[command(about = "Track movies, shows and books in a remote catalog", long_about = None)]
struct Cli {
    /// Records API base URL (overrides MEDIASHELF_API_BASE)
    #[arg(long, global = true)]
    api_base: Option<String>,

    /// Show debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List records
    List {
        /// Case-insensitive title search
        #[arg(short, long, default_value = "")]
        search: String,

        /// Status to show, or ALL
        #[arg(long, default_value = "ALL")]
        status: String,
    },

    /// Show catalog statistics
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a record
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Edit a record; fields not given keep their current value
    Edit {
        /// Record ID
        id: String,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete a record
    Delete {
        /// Record ID
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Validate a JSON array of candidate records without contacting the API
    Check {
        /// Input JSON file
        input: PathBuf,
    },

    /// Statistics over a JSON file of records without contacting the API
    Summarize {
        /// Input JSON file (array or {"items": [...]})
        input: PathBuf,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

/// Record fields as typed on the command line.
#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,

    /// Media type (Movie, Show, Book, ...)
    #[arg(long = "type")]
    kind: Option<String>,

    #[arg(long)]
    genre: Option<String>,

    #[arg(long)]
    year: Option<String>,

    /// 1-10; pass an empty value to clear
    #[arg(long)]
    rating: Option<String>,

    /// Planned, Watching, Completed or Dropped
    #[arg(long)]
    status: Option<String>,

    #[arg(long)]
    notes: Option<String>,
}

impl FieldArgs {
    /// Overwrite the fields that were given.
    fn apply_to(self, form: &mut RawForm) {
        let fields = [
            (self.title, &mut form.title),
            (self.kind, &mut form.kind),
            (self.genre, &mut form.genre),
            (self.year, &mut form.year),
            (self.rating, &mut form.rating),
            (self.status, &mut form.status),
            (self.notes, &mut form.notes),
        ];
        for (value, slot) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        log_error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let mut config = Config::from_env()?;
    if let Some(base) = cli.api_base.as_deref() {
        config = config.with_api_base(base)?;
    }
    if cli.verbose {
        config = config.verbose();
    }
    logs::init(config.log_level);

    let command = match cli.command {
        Commands::Check { input } => return cmd_check(&input).await,
        Commands::Summarize { input, json } => return cmd_summarize(&input, json).await,
        online => online,
    };

    let mut catalog = Catalog::new(RecordsApi::from_config(&config)?);
    catalog.refresh().await.map_err(|source| CliError::Load {
        api_base: config.api_base.to_string(),
        source,
    })?;

    match command {
        Commands::List { search, status } => cmd_list(&catalog, &search, &status),
        Commands::Stats { json } => print_stats(&catalog.stats(), json),
        Commands::Add { fields } => cmd_add(&mut catalog, fields).await,
        Commands::Edit { id, fields } => cmd_edit(&mut catalog, RecordId::new(id), fields).await,
        Commands::Delete { id, yes } => cmd_delete(&mut catalog, RecordId::new(id), yes).await,
        Commands::Check { .. } | Commands::Summarize { .. } => Ok(()),
    }
}

fn cmd_list(catalog: &Catalog<RecordsApi>, search: &str, status: &str) -> CliResult<()> {
    let status = status.parse::<StatusFilter>().unwrap_or_default();
    if let StatusFilter::Only(name) = &status {
        if name.parse::<Status>().is_err() {
            log_warning(format!("'{}' is not a known status", name));
        }
    }
    let filter = RecordFilter::new(search, status);
    let shown = catalog.filtered(&filter);

    println!("{}", render::record_table(&shown));
    log_info(format!("{} of {} record(s)", shown.len(), catalog.records().len()));
    Ok(())
}

async fn cmd_add(catalog: &mut Catalog<RecordsApi>, fields: FieldArgs) -> CliResult<()> {
    let mut form = RawForm::default();
    fields.apply_to(&mut form);
    catalog.submit(&form, None).await?;
    Ok(())
}

async fn cmd_edit(
    catalog: &mut Catalog<RecordsApi>,
    id: RecordId,
    fields: FieldArgs,
) -> CliResult<()> {
    let mut form = match catalog.find(&id) {
        Some(record) => RawForm::from_record(record),
        None => return Err(CatalogError::NotFound(id).into()),
    };
    fields.apply_to(&mut form);
    catalog.submit(&form, Some(id)).await?;
    Ok(())
}

async fn cmd_delete(catalog: &mut Catalog<RecordsApi>, id: RecordId, yes: bool) -> CliResult<()> {
    if !yes && !confirm(&render::delete_prompt(catalog.find(&id)))? {
        return Err(CliError::Aborted);
    }
    catalog.remove(&id).await?;
    Ok(())
}

/// Ask a yes/no question on stderr; only "y" or "yes" confirms.
fn confirm(question: &str) -> CliResult<bool> {
    eprint!("{} [y/N] ", question);
    io::stderr().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

async fn cmd_check(input: &Path) -> CliResult<()> {
    log_info(format!("Validating: {}", input.display()));

    let drafts = files::load_drafts(input).await?;
    let mut invalid = 0;

    for (i, draft) in drafts.iter().enumerate() {
        let errors = validate(draft);
        if errors.is_empty() {
            continue;
        }
        invalid += 1;
        log_error(format!("Record {} ({}) invalid:", i, draft.title.trim()));
        log_info_indent(render::violations(&errors), 1);
    }

    log_info(format!(
        "Results: {} valid, {} invalid",
        drafts.len() - invalid,
        invalid
    ));

    if invalid > 0 {
        return Err(CliError::InvalidRecords(invalid));
    }
    log_success("All records valid");
    Ok(())
}

async fn cmd_summarize(input: &Path, json: bool) -> CliResult<()> {
    let records = files::load_records(input).await?;
    print_stats(&summarize(&records), json)
}

fn print_stats(summary: &StatsSummary, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(summary)?);
    } else {
        println!("{}", render::stats_block(summary));
    }
    Ok(())
}
