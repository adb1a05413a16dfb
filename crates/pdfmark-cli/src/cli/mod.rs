//! CLI for the pdfmark bookmark manager.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pdfmark_core::config;
use pdfmark_core::store::BookmarkDb;

use commands::{run_add, run_check, run_docs, run_edit, run_list, run_remove, run_theme};

/// Top-level CLI for the pdfmark bookmark manager.
#[derive(Debug, Parser)]
#[command(name = "pdfmark")]
#[command(about = "pdfmark: named, colored page bookmarks for PDF documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Add a bookmark for a PDF document URL.
    Add {
        /// URL of the PDF document. The fragment is stripped for storage.
        url: String,
        /// Display label; defaults to "Page {page}".
        #[arg(long)]
        name: Option<String>,
        /// Page number; defaults to the URL's #page=N fragment, else 1.
        /// Unparsable input falls back to the same default.
        #[arg(long)]
        page: Option<String>,
        /// Palette color, by name (red, orange, green, blue, purple, pink) or
        /// hex value.
        #[arg(long)]
        color: Option<String>,
    },

    /// List a document's bookmarks, sorted by page.
    List {
        /// URL of the PDF document.
        url: String,
    },

    /// Edit a bookmark's name, page, or color.
    Edit {
        /// URL of the PDF document.
        url: String,
        /// Bookmark identifier (shown by `list`).
        id: String,
        /// New label; blank resets to "Page {page}".
        #[arg(long)]
        name: Option<String>,
        /// New page number; unparsable input keeps the current page.
        #[arg(long)]
        page: Option<String>,
        /// New palette color, by name or hex value.
        #[arg(long)]
        color: Option<String>,
    },

    /// Remove a bookmark by its identifier.
    Remove {
        /// URL of the PDF document.
        url: String,
        /// Bookmark identifier.
        id: String,
    },

    /// List every known document and its bookmark count.
    Docs,

    /// Classify a URL: PDF or not, canonical key, display name.
    Check {
        /// URL to classify.
        url: String,
    },

    /// Show or set the theme preference.
    Theme {
        /// "dark" or "light"; omit to print the current theme.
        value: Option<String>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Add {
                url,
                name,
                page,
                color,
            } => {
                let mut db = BookmarkDb::open_default().await?;
                run_add(
                    &mut db,
                    &cfg,
                    &url,
                    name.as_deref(),
                    page.as_deref(),
                    color.as_deref(),
                )
                .await?;
            }
            CliCommand::List { url } => {
                let db = BookmarkDb::open_default().await?;
                run_list(&db, &url)?;
            }
            CliCommand::Edit {
                url,
                id,
                name,
                page,
                color,
            } => {
                let mut db = BookmarkDb::open_default().await?;
                run_edit(
                    &mut db,
                    &url,
                    &id,
                    name,
                    page.as_deref(),
                    color.as_deref(),
                )
                .await?;
            }
            CliCommand::Remove { url, id } => {
                let mut db = BookmarkDb::open_default().await?;
                run_remove(&mut db, &url, &id).await?;
            }
            CliCommand::Docs => {
                let db = BookmarkDb::open_default().await?;
                run_docs(&db)?;
            }
            CliCommand::Check { url } => run_check(&url)?,
            CliCommand::Theme { value } => run_theme(cfg, value.as_deref())?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
