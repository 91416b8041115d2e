use clap::Subcommand;
use serde_json::{json, Value};

use crate::cli::client::ApiClient;
use crate::cli::config::{self, Session};
use crate::cli::utils::output_success;
use crate::cli::{Context, OutputFormat};

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login as the site admin")]
    Login {
        #[arg(help = "Admin email")]
        email: String,
        #[arg(long, env = "ADMIN_PASSWORD", hide_env_values = true, help = "Admin password")]
        password: Option<String>,
    },

    #[command(about = "Forget the saved session")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,
}

pub async fn handle(cmd: AuthCommands, ctx: &Context) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { email, password } => login(ctx, email, password).await,
        AuthCommands::Logout => {
            let existed = config::clear_session()?;
            let message = if existed { "Logged out" } else { "No saved session" };
            output_success(&ctx.output, message, None)
        }
        AuthCommands::Status => status(ctx).await,
    }
}

async fn login(ctx: &Context, email: String, password: Option<String>) -> anyhow::Result<()> {
    let password = password.ok_or_else(|| anyhow::anyhow!("Password required: pass --password or set ADMIN_PASSWORD"))?;

    let client = ApiClient::new(ctx.server.clone(), None)?;
    let envelope = client
        .post("/auth/login", &json!({ "email": email, "password": password }))
        .await?;

    let token = envelope
        .pointer("/data/token")
        .and_then(Value::as_str)
        .ok_or_else(|| anyhow::anyhow!("Login response did not include a token"))?;
    let email = envelope
        .pointer("/data/email")
        .and_then(Value::as_str)
        .unwrap_or(&email)
        .to_string();

    let server = client.base_url().to_string();
    config::save_session(&Session::new(server.clone(), token.to_string(), email.clone()))?;

    output_success(
        &ctx.output,
        &format!("Logged in to {} as {}", server, email),
        Some(json!({ "server": server, "email": email })),
    )
}

async fn status(ctx: &Context) -> anyhow::Result<()> {
    if !ctx.session.is_authenticated() {
        return output_success(&ctx.output, "Not logged in", Some(json!({ "authenticated": false })));
    }

    let envelope = ctx.client()?.get("/auth/whoami").await?;
    let data = envelope.get("data").cloned().unwrap_or(Value::Null);

    match ctx.output {
        OutputFormat::Json => output_success(&ctx.output, "Authenticated", Some(data)),
        OutputFormat::Text => {
            let email = data.get("email").and_then(Value::as_str).unwrap_or("-");
            let expires = data.get("expiresAt").and_then(Value::as_str).unwrap_or("-");
            println!("Server: {}", ctx.server);
            println!("Logged in as: {}", email);
            println!("Token expires: {}", expires);
            Ok(())
        }
    }
}
