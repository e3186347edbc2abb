//! Roster CLI
//!
//! Terminal front end over the same pages the browser client mounts:
//! - List, view, add, edit and delete student records
//! - Open any client route directly
//! - Generate a default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster::config::{generate_default_config, Config};
use roster::render::render_page;
use roster::{
    CreateForm, EditForm, Field, HttpTransport, ListView, OutputFormat, Page, RecordId, Route,
};

#[derive(Parser)]
#[command(name = "roster")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage student records held by a remote API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Backend base URL (overrides config)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(flatten)]
    Page(PageCommand),

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Commands that open a page against the backend
#[derive(Subcommand)]
pub enum PageCommand {
    /// List all students
    List,

    /// Show one student
    View {
        /// Student id
        id: RecordId,
    },

    /// Add a student, then show the list
    Add {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        branch: String,
        #[arg(long, default_value = "")]
        mail: String,
    },

    /// Edit a student, then show the list
    Edit {
        /// Student id
        id: RecordId,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        branch: Option<String>,
        #[arg(long)]
        mail: Option<String>,
    },

    /// Delete a student, then show the list
    Delete {
        /// Student id
        id: RecordId,
    },

    /// Open a client route (e.g. /viewstudent/3)
    Open {
        path: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let command = match cli.command {
        Commands::Config { output } => return write_default_config(output.as_deref()),
        Commands::Page(command) => command,
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default()?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    roster::telemetry::init(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Using records backend");

    let transport = HttpTransport::new(config.api.transport())
        .context("failed to build HTTP client")?;

    let page = match command {
        PageCommand::List => Page::open(&Route::List, &transport).await,

        PageCommand::View { id } => Page::open(&Route::View(id), &transport).await,

        PageCommand::Add { name, branch, mail } => {
            let mut form = CreateForm::new();
            form.edit(Field::Name, name);
            form.edit(Field::Branch, branch);
            form.edit(Field::Mail, mail);

            let next = form.submit(&transport).await;
            Page::open(&next, &transport).await
        }

        PageCommand::Edit {
            id,
            name,
            branch,
            mail,
        } => {
            let changes = [(Field::Name, name), (Field::Branch, branch), (Field::Mail, mail)]
                .into_iter()
                .filter_map(|(field, value)| value.map(|value| (field, value)));

            let mut form = EditForm::new(id);
            let Some(next) = form.patch(&transport, changes).await else {
                eprintln!("Cannot load student {} from {}", form.id(), config.api.base_url);
                eprintln!();
                eprintln!("Nothing was changed. Check the id, or that the records backend is running.");
                std::process::exit(1);
            };
            Page::open(&next, &transport).await
        }

        PageCommand::Delete { id } => {
            let mut view = ListView::new();
            view.load(&transport).await;
            view.delete(&transport, &id).await;
            Page::List(view)
        }

        PageCommand::Open { path } => {
            let Some(route) = Route::parse(&path) else {
                eprintln!("No page at {}", path);
                eprintln!();
                eprintln!("Known routes: /, /addstudent, /editstudent/:id, /viewstudent/:id");
                std::process::exit(1);
            };
            Page::open(&route, &transport).await
        }
    };

    // A list that never loaded means the backend was never reached
    if let Page::List(view) = &page {
        if !view.is_loaded() {
            eprintln!("Cannot load students from {}", config.api.base_url);
            eprintln!();
            eprintln!("Make sure the records backend is running, or pass --api-url.");
            std::process::exit(1);
        }
    }

    println!("{}", render_page(&page, cli.format).trim_end());
    Ok(())
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_is_its_own_command() {
        let cli = Cli::try_parse_from(["roster", "config", "-o", "roster.toml"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Config { output: Some(ref path) } if path == std::path::Path::new("roster.toml")
        ));
    }

    #[test]
    fn test_page_commands_are_flattened() {
        let cli = Cli::try_parse_from(["roster", "edit", "007", "--name", "Anna"]).unwrap();
        match cli.command {
            Commands::Page(PageCommand::Edit { id, name, branch, mail }) => {
                assert_eq!(id, RecordId::Text("007".to_string()));
                assert_eq!(name.as_deref(), Some("Anna"));
                assert!(branch.is_none() && mail.is_none());
            }
            _ => panic!("expected edit command"),
        }

        let cli = Cli::try_parse_from(["roster", "--format", "json", "list"]).unwrap();
        assert!(matches!(cli.command, Commands::Page(PageCommand::List)));
        assert_eq!(cli.format, OutputFormat::Json);
    }
}
