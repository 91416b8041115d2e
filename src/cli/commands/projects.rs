use clap::Subcommand;

use super::fields_from;
use crate::cli::utils::{output_envelope, output_records};
use crate::cli::Context;

#[derive(Subcommand)]
pub enum ProjectCommands {
    #[command(about = "List projects, newest first")]
    List,

    #[command(about = "Create a project")]
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, help = "Image URL")]
        image: String,
    },

    #[command(about = "Update fields of a project")]
    Update {
        #[arg(help = "Project ID")]
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "Image URL")]
        image: Option<String>,
    },

    #[command(about = "Delete a project")]
    Delete {
        #[arg(help = "Project ID")]
        id: String,
    },
}

pub async fn handle(cmd: ProjectCommands, ctx: &Context) -> anyhow::Result<()> {
    let client = ctx.client()?;

    match cmd {
        ProjectCommands::List => {
            let envelope = client.get("/projects").await?;
            output_records(&ctx.output, &envelope, "projects", &["title", "createdAt"])
        }
        ProjectCommands::Create {
            title,
            description,
            image,
        } => {
            let body = fields_from(&[
                ("title", Some(title)),
                ("description", Some(description)),
                ("image", Some(image)),
            ]);
            let envelope = client.post("/projects", &body).await?;
            output_envelope(&ctx.output, &envelope, "Project created")
        }
        ProjectCommands::Update {
            id,
            title,
            description,
            image,
        } => {
            let body = fields_from(&[("title", title), ("description", description), ("image", image)]);
            let envelope = client.put(&format!("/projects/{}", id), &body).await?;
            output_envelope(&ctx.output, &envelope, "Project updated")
        }
        ProjectCommands::Delete { id } => {
            let envelope = client.delete(&format!("/projects/{}", id)).await?;
            output_envelope(&ctx.output, &envelope, "Project deleted")
        }
    }
}
