//! House price prediction service.
//!
//! Loads a pre-trained regression model once, validates caller-supplied
//! house features, serves predictions over HTTP and records every
//! successful prediction in an append-only history log.
//!
//! ## Modules
//!
//! - [`features`] — the 14-field feature vector and its validation
//! - [`artifact`] — the on-disk model bundle (model, scaler, column order, metadata)
//! - [`service`] — the [`service::Predictor`] shared by every request
//! - [`history`] — prediction history backends (PostgreSQL, memory)
//! - [`api`] — actix-web handlers, envelopes and server
//! - [`config`] — command line and environment configuration
pub mod artifact;
pub mod features;
pub mod service;

#[cfg(feature = "database")]
pub mod history;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;

/// Predicted sale price in dollars.
pub type Price = f64;
/// Raw or scaled numeric model input.
pub type Scalar = f64;

/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random valid instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time))?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file])?;
    Ok(())
}

/// Register a ctrl-c handler that exits immediately without draining
/// in-flight requests.
#[cfg(feature = "server")]
pub fn kys() -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                println!();
                log::warn!("interrupt received, exiting immediately");
                std::process::exit(0);
            }
            Err(e) => log::error!("cannot listen for ctrl-c: {}", e),
        }
    })
}
