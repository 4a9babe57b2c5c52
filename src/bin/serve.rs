//! Prediction Server Binary
//!
//! Loads the model artifact, opens prediction history and serves the
//! HTTP API until interrupted.

use clap::Parser;
use pricer::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log()?;
    kys();
    api::Server::run(config::Config::parse()).await
}
