use clap::Subcommand;

use crate::cli::utils::output_records;
use crate::cli::Context;

#[derive(Subcommand)]
pub enum ContactCommands {
    #[command(about = "List contact form submissions, newest first")]
    List,
}

pub async fn handle(cmd: ContactCommands, ctx: &Context) -> anyhow::Result<()> {
    match cmd {
        ContactCommands::List => {
            let envelope = ctx.client()?.get("/contact").await?;
            output_records(
                &ctx.output,
                &envelope,
                "contacts",
                &["fullName", "email", "phone", "city", "createdAt"],
            )
        }
    }
}
