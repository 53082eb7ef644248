//! CLI for the folio portfolio client.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use folio_core::config::{self, FolioConfig};
use folio_core::i18n::Language;
use folio_core::ApiBase;

use commands::{
    run_contact, run_contact_info, run_fetch, run_home, run_icon, run_news, run_resolve, run_roles,
};

/// Top-level CLI for the folio portfolio client.
#[derive(Debug, Parser)]
#[command(name = "folio")]
#[command(about = "folio: portfolio content client", long_about = None)]
pub struct Cli {
    /// Backend root URL; overrides config.toml and FOLIO_API_URL for this run.
    #[arg(long, global = true, value_name = "URL")]
    pub api_base: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve asset references (bare filenames, /uploads/ paths, URLs) to URLs.
    Resolve {
        /// References to resolve. An empty string resolves to the placeholder.
        #[arg(required = true)]
        refs: Vec<String>,
        /// Treat references as logos (same rules, kept for parity with the site).
        #[arg(long)]
        logo: bool,
    },

    /// GET a backend path and print the JSON.
    Fetch {
        /// Path relative to the API base, e.g. /api/home.
        path: String,
        /// On failure, print why instead of just "unavailable".
        #[arg(long)]
        verbose: bool,
    },

    /// Show the home page data (roles, slides, services, projects, news).
    Home,

    /// List news articles, or show one by slug.
    News {
        #[arg(long)]
        slug: Option<String>,
    },

    /// Show contact details from the backend, or the localized fallback.
    ContactInfo {
        /// Language for labels and fallback values (en or id).
        #[arg(long)]
        lang: Option<Language>,
    },

    /// Send a contact message through the form relay and the backend.
    Contact {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        subject: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long)]
        message: String,
    },

    /// Animate the home page roles with the typewriter effect on stderr.
    Roles {
        /// Number of full role cycles before exiting.
        #[arg(long, default_value = "1", value_name = "N")]
        cycles: usize,
    },

    /// Map an icon name to the icon tag the site draws.
    Icon {
        name: String,
    },
}

impl Cli {
    /// Config from disk and environment, with `--api-base` applied last.
    fn effective_config(&self) -> Result<FolioConfig> {
        let mut cfg = config::load_or_init()?;
        if let Some(base) = &self.api_base {
            cfg.api_base = ApiBase::new(base.as_str());
        }
        Ok(cfg)
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = cli.effective_config()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { refs, logo } => run_resolve(&cfg, &refs, logo),
            CliCommand::Fetch { path, verbose } => run_fetch(&cfg, &path, verbose).await?,
            CliCommand::Home => run_home(&cfg).await?,
            CliCommand::News { slug } => run_news(&cfg, slug.as_deref()).await?,
            CliCommand::ContactInfo { lang } => {
                run_contact_info(&cfg, lang.unwrap_or(cfg.default_language)).await?
            }
            CliCommand::Contact {
                name,
                email,
                subject,
                phone,
                message,
            } => {
                let sub = folio_core::contact::ContactSubmission {
                    name,
                    email,
                    subject,
                    phone,
                    message,
                };
                run_contact(&cfg, sub).await?;
            }
            CliCommand::Roles { cycles } => run_roles(&cfg, cycles).await?,
            CliCommand::Icon { name } => run_icon(&name),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
