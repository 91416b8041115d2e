pub mod client;
pub mod commands;
pub mod config;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::cli::client::ApiClient;
use crate::cli::config::Session;

#[derive(Parser)]
#[command(name = "showcase")]
#[command(about = "Showcase CLI - Admin console for the Showcase content API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, env = "SHOWCASE_API_URL", help = "API base URL")]
    pub server: Option<String>,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Admin login and session management")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Manage portfolio projects")]
    Projects {
        #[command(subcommand)]
        cmd: commands::projects::ProjectCommands,
    },

    #[command(about = "Manage client testimonials")]
    Clients {
        #[command(subcommand)]
        cmd: commands::clients::ClientCommands,
    },

    #[command(about = "Read contact form submissions")]
    Contacts {
        #[command(subcommand)]
        cmd: commands::contacts::ContactCommands,
    },

    #[command(about = "Newsletter subscribers")]
    Newsletter {
        #[command(subcommand)]
        cmd: commands::newsletter::NewsletterCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Everything a command needs: where to talk to and how to print
pub struct Context {
    pub server: String,
    pub session: Session,
    pub output: OutputFormat,
}

impl Context {
    /// Client carrying the saved session token, if any
    pub fn client(&self) -> anyhow::Result<ApiClient> {
        ApiClient::new(self.server.clone(), self.session.token.clone())
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output = OutputFormat::from_cli(&cli);
    let session = config::load_session()?;
    let server = config::resolve_server(cli.server.as_deref(), &session);

    let ctx = Context {
        server,
        session,
        output,
    };

    match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &ctx).await,
        Commands::Projects { cmd } => commands::projects::handle(cmd, &ctx).await,
        Commands::Clients { cmd } => commands::clients::handle(cmd, &ctx).await,
        Commands::Contacts { cmd } => commands::contacts::handle(cmd, &ctx).await,
        Commands::Newsletter { cmd } => commands::newsletter::handle(cmd, &ctx).await,
    }
}
