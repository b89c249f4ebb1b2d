//! Command line interface.

use clap::{Parser, Subcommand};

use crate::{
    api::{RoomApiClient, UpdateResult},
    error::ClientError,
};

/// Client for the Roomkeeper room API
#[derive(Debug, Parser)]
#[command(name = "roomkeeper-client", version, about)]
pub struct Cli {
    /// Base URL of the room server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    pub server_url: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Create the room, replacing any existing one
    Create {
        /// free, reserved or inuse
        #[arg(short, long)]
        availability: String,
    },
    /// Show the current room
    Get,
    /// Delete the room with the given id
    Delete { id: String },
    /// Change the availability of the room with the given id
    Update {
        id: String,
        #[arg(short, long)]
        availability: String,
    },
}

/// Execute one command and return the text to print.
pub async fn run_client(cli: Cli) -> Result<String, ClientError> {
    let client = RoomApiClient::new(&cli.server_url)?;

    let output = match cli.command {
        Command::Create { availability } => client.create_room(&availability).await?,
        Command::Get => serde_json::to_string_pretty(&client.get_room().await?)?,
        Command::Delete { id } => {
            client.delete_room(&id).await?;
            format!("Room {id} deleted")
        }
        Command::Update { id, availability } => {
            match client.update_room(&id, &availability).await? {
                UpdateResult::Updated(message) => message,
                UpdateResult::Unchanged => format!("Room {id} already {availability}"),
            }
        }
    };

    Ok(output)
}
