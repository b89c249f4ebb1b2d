//! Command line client for the room API.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin roomkeeper-client -- create --availability free
//! ```

use clap::Parser;
use roomkeeper_client::{Cli, run_client};
use roomkeeper_shared::setup_logger;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    setup_logger(env!("CARGO_BIN_NAME"), &cli.log_level);

    match run_client(cli).await {
        Ok(output) => println!("{output}"),
        Err(e) => {
            tracing::error!("Client error: {}", e);
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
