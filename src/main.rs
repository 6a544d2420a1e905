//! Git Commit Facts Tool
//!
//! Command-line front end for extracting commit facts and contributor
//! reports from a Git repository.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gitfacts::{
    generate_contributors_report, head_commit_facts, FactsConfig, GitRepo, ReportConfig,
};

#[derive(Parser)]
#[command(name = "gitfacts", version, about = "Extract facts from Git commit history")]
struct Cli {
    /// Path inside the repository to inspect
    #[arg(long, default_value = ".", global = true)]
    repo: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the aggregated contributors report
    Contributors {
        /// Sort order: count, date or name (anything else falls back to count)
        #[arg(long)]
        sort: Option<String>,
        /// Header text; literal \n sequences become line breaks
        #[arg(long, default_value = "Contributors\\n============")]
        header: String,
        /// Footer text; literal \n sequences become line breaks
        #[arg(long, default_value = "")]
        footer: String,
        /// Prefix for each contributor line
        #[arg(long, default_value = " * ")]
        prefix: String,
        /// Show each contributor's email instead of the commit count
        #[arg(long)]
        show_email: bool,
        /// Hide the commit counts
        #[arg(long)]
        no_counts: bool,
        /// Escape < and > in names and emails
        #[arg(long)]
        escape_html: bool,
        /// Backslash-escape [ and ] in names and emails
        #[arg(long)]
        escape_markdown: bool,
    },
    /// Print facts about the head commit
    Commit {
        /// strftime pattern for author and committer dates
        #[arg(long, default_value = gitfacts::facts::DEFAULT_DATE_FORMAT)]
        date_format: String,
        /// Marker appended to the commit ids when the working tree is dirty
        #[arg(long, default_value = "-dirty")]
        dirty_flag: String,
        /// Do not count untracked files as dirt
        #[arg(long)]
        ignore_untracked: bool,
        /// Emit the facts as JSON instead of key=value lines
        #[arg(long)]
        json: bool,
    },
    /// Print the current branch name
    Branch,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let repo = GitRepo::discover(&cli.repo)
        .with_context(|| format!("no git repository found at {:?}", cli.repo))?;

    match cli.command {
        Command::Contributors {
            sort,
            header,
            footer,
            prefix,
            show_email,
            no_counts,
            escape_html,
            escape_markdown,
        } => {
            let config = ReportConfig {
                header,
                footer,
                contributor_prefix: prefix,
                show_counts: !no_counts,
                show_email,
                escape_html,
                escape_markdown,
                sort,
            };
            generate_contributors_report(&repo, &config, &mut io::stdout())?;
        }
        Command::Commit {
            date_format,
            dirty_flag,
            ignore_untracked,
            json,
        } => {
            let config = FactsConfig {
                date_format,
                dirty_flag: Some(dirty_flag),
                dirty_ignore_untracked: ignore_untracked,
            };
            let facts = head_commit_facts(&repo, &config)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&facts)?);
            } else {
                for (field, value) in facts.fields() {
                    println!("{}={}", field, value);
                }
            }
        }
        Command::Branch => {
            println!("{}", repo.branch()?);
        }
    }

    Ok(())
}
