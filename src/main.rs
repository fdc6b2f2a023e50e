//! `ig-client` binary
//!
//! Runs a single API query with a stored session and prints the result as
//! JSON.
//!
//! # Usage
//!
//! ```bash
//! ig-client --session session.json search-users rust
//! ig-client --session session.json --raw user-info 25025320
//! ig-client device
//! ```

use clap::Parser;
use instagram_client::cli::{Cli, run};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
