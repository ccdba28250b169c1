//! daily-summary: aggregate same-titled markdown sections across a vault.
#![allow(clippy::multiple_crate_versions)]

use anyhow::Context;
use clap::{Parser, Subcommand};
use daily_summary::block::BlockProcessor;
use daily_summary::vault::{suggest_paths, template_choices};
use daily_summary::{config, Aggregator, DocumentStore, FsVault, SettingsEdit, SettingsFile};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "daily-summary")]
#[command(about = "Aggregate same-titled markdown sections across a vault", long_about = None)]
struct Args {
    /// Vault directory containing the notes
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    vault: PathBuf,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT", global = true)]
    ext: Vec<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Expand the summary blocks of a note and print it
    Render {
        /// Note to render, as a vault path or a file path inside the vault
        note: String,
    },
    /// Print the aggregated sections with a given title
    Query {
        /// Section title to collect
        title: String,
        /// Note to leave out of the search
        #[arg(long, default_value = "")]
        exclude: String,
    },
    /// Show or edit the aggregation settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },
    /// List notes whose path starts with a prefix (case-insensitive)
    Suggest {
        /// Path prefix to complete
        #[arg(default_value = "")]
        prefix: String,
    },
    /// List notes that can be chosen as the template
    Templates,
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the current settings
    Show,
    /// Change one or more settings and save them
    Set {
        /// Template note path (empty to clear)
        #[arg(long)]
        template: Option<String>,
        /// Remove the template so sections are printed raw
        #[arg(long, conflicts_with = "template")]
        clear_template: bool,
        /// Folder prefix to search
        #[arg(long)]
        search_folder: Option<String>,
        /// Tag to search
        #[arg(long)]
        search_tag: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daily_summary=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let mut cfg = config::Config::load();

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions = args.ext;
    }

    let vault = FsVault::new(&args.vault, cfg.file_extensions.clone());
    let settings_file = SettingsFile::new(cfg.settings_path(&args.vault));
    let mut settings = settings_file
        .load(&vault)
        .with_context(|| format!("loading {}", settings_file.path().display()))?;

    match args.command {
        Command::Render { note } => {
            let host = vault.locate(&note)?;
            let text = vault.read(&host)?;
            let aggregator = Aggregator::from_settings(&vault, &settings);
            let processor = BlockProcessor::markdown(cfg.block_language.as_str());
            print!("{}", processor.expand(&aggregator, &host, &text)?);
        }
        Command::Query { title, exclude } => {
            let aggregator = Aggregator::from_settings(&vault, &settings);
            println!("{}", aggregator.render(title.trim(), &exclude)?);
        }
        Command::Settings { action } => {
            if let Some(SettingsAction::Set {
                template,
                clear_template,
                search_folder,
                search_tag,
            }) = action
            {
                let edit = SettingsEdit {
                    template,
                    clear_template,
                    search_folder,
                    search_tag,
                };
                edit.apply(&mut settings, &vault);
                settings_file.save(&settings)?;
            }
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        Command::Suggest { prefix } => {
            for path in suggest_paths(&vault, &prefix)? {
                println!("{path}");
            }
        }
        Command::Templates => {
            for (path, label) in template_choices(&vault)? {
                let marker = if settings.template.as_deref() == Some(path.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!("{marker} {label}\t{path}");
            }
        }
    }

    Ok(())
}
