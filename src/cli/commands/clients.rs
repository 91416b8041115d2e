use clap::Subcommand;

use super::fields_from;
use crate::cli::utils::{output_envelope, output_records};
use crate::cli::Context;

#[derive(Subcommand)]
pub enum ClientCommands {
    #[command(about = "List client testimonials, newest first")]
    List,

    #[command(about = "Add a client testimonial")]
    Create {
        #[arg(long)]
        name: String,
        #[arg(long, help = "Role or title, e.g. \"CEO, Acme\"")]
        designation: String,
        #[arg(long)]
        description: String,
        #[arg(long, help = "Image URL")]
        image: String,
    },

    #[command(about = "Update fields of a client")]
    Update {
        #[arg(help = "Client ID")]
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        designation: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, help = "Image URL")]
        image: Option<String>,
    },

    #[command(about = "Delete a client")]
    Delete {
        #[arg(help = "Client ID")]
        id: String,
    },
}

pub async fn handle(cmd: ClientCommands, ctx: &Context) -> anyhow::Result<()> {
    let client = ctx.client()?;

    match cmd {
        ClientCommands::List => {
            let envelope = client.get("/clients").await?;
            output_records(&ctx.output, &envelope, "clients", &["name", "designation", "createdAt"])
        }
        ClientCommands::Create {
            name,
            designation,
            description,
            image,
        } => {
            let body = fields_from(&[
                ("name", Some(name)),
                ("designation", Some(designation)),
                ("description", Some(description)),
                ("image", Some(image)),
            ]);
            let envelope = client.post("/clients", &body).await?;
            output_envelope(&ctx.output, &envelope, "Client created")
        }
        ClientCommands::Update {
            id,
            name,
            designation,
            description,
            image,
        } => {
            let body = fields_from(&[
                ("name", name),
                ("designation", designation),
                ("description", description),
                ("image", image),
            ]);
            let envelope = client.put(&format!("/clients/{}", id), &body).await?;
            output_envelope(&ctx.output, &envelope, "Client updated")
        }
        ClientCommands::Delete { id } => {
            let envelope = client.delete(&format!("/clients/{}", id)).await?;
            output_envelope(&ctx.output, &envelope, "Client deleted")
        }
    }
}
