//! Server configuration from command line flags and environment.
use crate::history::History;
use crate::history::Memory;
use clap::Parser;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Parser)]
#[command(name = "serve", about = "Serve house price predictions over HTTP")]
pub struct Config {
    /// Directory holding the model artifact bundle.
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    artifacts: PathBuf,
    /// Address to listen on.
    #[arg(long, env = "BIND_ADDR", default_value = "127.0.0.1:8000")]
    bind: String,
    /// PostgreSQL URL for prediction history; history is kept in memory when unset.
    #[arg(long, env = "DB_URL")]
    database: Option<String>,
    /// Number of HTTP worker threads; defaults to one per core.
    #[arg(long, env = "WORKERS")]
    workers: Option<usize>,
}

impl Config {
    pub fn artifacts(&self) -> &Path {
        &self.artifacts
    }
    pub fn bind(&self) -> &str {
        &self.bind
    }
    pub fn workers(&self) -> Option<usize> {
        self.workers
    }

    /// Open the configured history backend.
    pub async fn history(&self) -> anyhow::Result<Arc<dyn History>> {
        let store: Arc<dyn History> = match self.database.as_deref() {
            Some(url) => crate::history::db(url).await?,
            None => {
                log::warn!("DB_URL not set, prediction history will not survive restart");
                Arc::new(Memory::default())
            }
        };
        Ok(store)
    }
}
