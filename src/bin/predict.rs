//! One-shot Prediction Binary
//!
//! Scores a single feature vector against the model artifact and prints
//! the result as JSON. No server, no history.

use clap::Parser;
use pricer::features::FeatureVector;
use pricer::features::FieldErrors;
use pricer::service::Predictor;
use pricer::*;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "predict", about = "Score one house against the model artifact")]
struct Args {
    /// Directory holding the model artifact bundle.
    #[arg(long, env = "ARTIFACTS_DIR", default_value = "artifacts")]
    artifacts: PathBuf,
    /// JSON file with the 14 features; stdin when absent.
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,
    /// Score a random valid house instead of reading input.
    #[arg(long)]
    random: bool,
}

fn main() -> anyhow::Result<()> {
    log()?;
    let args = Args::parse();
    let predictor = Predictor::load(&args.artifacts)?;
    let features = match (args.random, args.input) {
        (true, _) => FeatureVector::random(),
        (false, Some(path)) => parse(&std::fs::read(path)?)?,
        (false, None) => {
            let mut bytes = Vec::new();
            std::io::stdin().read_to_end(&mut bytes)?;
            parse(&bytes)?
        }
    };
    let prediction = predictor.predict(&features)?;
    println!("{}", serde_json::to_string_pretty(&prediction)?);
    Ok(())
}

fn parse(bytes: &[u8]) -> anyhow::Result<FeatureVector> {
    let value = serde_json::from_slice::<serde_json::Value>(bytes).map_err(FieldErrors::from)?;
    Ok(FeatureVector::try_from(&value)?)
}
