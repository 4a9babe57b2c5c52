use super::*;
use crate::Scalar;
use crate::features::Field;
use anyhow::Context;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;

/// File holding the tagged [`Regressor`].
#[rustfmt::skip]
pub const MODEL:    &str = "house_price_model.json";
/// File holding the tagged [`Scaler`].
#[rustfmt::skip]
pub const SCALER:   &str = "scaler.json";
/// File holding the ordered feature-name list.
#[rustfmt::skip]
pub const FEATURES: &str = "feature_names.json";
/// File holding the [`Metadata`] map.
#[rustfmt::skip]
pub const METADATA: &str = "model_metadata.json";

/// A complete, mutually consistent model bundle.
///
/// Construction validates every component against the others, so a value
/// of this type can always score a row laid out in [`Artifact::columns`].
#[derive(Debug, Clone)]
pub struct Artifact {
    regressor: Regressor,
    scaler: Scaler,
    columns: Vec<Field>,
    metadata: Metadata,
}

impl Artifact {
    pub fn new(
        regressor: Regressor,
        scaler: Scaler,
        names: Vec<String>,
        metadata: Metadata,
    ) -> anyhow::Result<Self> {
        let columns = names
            .iter()
            .map(|name| Field::try_from(name.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(anyhow::Error::msg)?;
        if columns.is_empty() {
            anyhow::bail!("feature list is empty");
        }
        if columns.iter().collect::<HashSet<_>>().len() != columns.len() {
            anyhow::bail!("feature list contains duplicates");
        }
        let width = columns.len();
        scaler.validate().map_err(anyhow::Error::msg)?;
        if let Some(w) = scaler.width() {
            if w != width {
                anyhow::bail!("scaler fitted on {} features, feature list has {}", w, width);
            }
        }
        regressor.validate(width).map_err(anyhow::Error::msg)?;
        metadata.validate().map_err(anyhow::Error::msg)?;
        Ok(Self {
            regressor,
            scaler,
            columns,
            metadata,
        })
    }

    /// Read and validate the four bundle files under `dir`.
    pub fn load(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        log::info!("loading model artifact from {}", dir.display());
        let regressor = read::<Regressor>(dir, MODEL)?;
        let scaler = read::<Scaler>(dir, SCALER)?;
        let names = read::<Vec<String>>(dir, FEATURES)?;
        let metadata = read::<Metadata>(dir, METADATA)?;
        Self::new(regressor, scaler, names, metadata)
            .with_context(|| format!("inconsistent model artifact in {}", dir.display()))
    }

    /// Write the bundle files under `dir`, creating it if needed.
    pub fn save(&self, dir: impl AsRef<Path>) -> anyhow::Result<()> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        write(dir, MODEL, &self.regressor)?;
        write(dir, SCALER, &self.scaler)?;
        write(dir, FEATURES, &self.names())?;
        write(dir, METADATA, &self.metadata)?;
        Ok(())
    }

    /// Score a raw row laid out in [`Artifact::columns`] order.
    pub fn score(&self, row: &[Scalar]) -> Result<Scalar, ShapeError> {
        let ref scaled = self.scaler.transform(row)?;
        self.regressor.predict(self.columns.len(), scaled)
    }

    pub fn columns(&self) -> &[Field] {
        &self.columns
    }
    pub fn names(&self) -> Vec<String> {
        self.columns.iter().map(|f| f.name().to_string()).collect()
    }
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }
    pub fn regressor(&self) -> &Regressor {
        &self.regressor
    }
    pub fn scaler(&self) -> &Scaler {
        &self.scaler
    }
}

fn read<T: DeserializeOwned>(dir: &Path, name: &str) -> anyhow::Result<T> {
    let path = dir.join(name);
    let file = std::fs::File::open(&path)
        .with_context(|| format!("missing artifact file {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("corrupt artifact file {}", path.display()))
}

fn write<T: Serialize>(dir: &Path, name: &str, value: &T) -> anyhow::Result<()> {
    let path = dir.join(name);
    let file = std::fs::File::create(&path)
        .with_context(|| format!("create artifact file {}", path.display()))?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("write artifact file {}", path.display()))?;
    writer.flush()?;
    Ok(())
}
