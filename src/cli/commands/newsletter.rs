use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_envelope, output_records};
use crate::cli::Context;

#[derive(Subcommand)]
pub enum NewsletterCommands {
    #[command(about = "List subscribers, newest first")]
    List,

    #[command(about = "Subscribe an email address")]
    Subscribe {
        #[arg(help = "Email address")]
        email: String,
    },
}

pub async fn handle(cmd: NewsletterCommands, ctx: &Context) -> anyhow::Result<()> {
    let client = ctx.client()?;

    match cmd {
        NewsletterCommands::List => {
            let envelope = client.get("/newsletter").await?;
            output_records(&ctx.output, &envelope, "subscribers", &["email", "createdAt"])
        }
        NewsletterCommands::Subscribe { email } => {
            let envelope = client.post("/newsletter", &json!({ "email": email })).await?;
            output_envelope(&ctx.output, &envelope, "Subscribed")
        }
    }
}
