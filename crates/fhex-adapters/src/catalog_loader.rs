//! Batch catalogue loader.
//!
//! Reads a TOML catalogue describing many examples and turns it into
//! [`ScaffoldRequest`]s for the scaffold service.
//!
//! # `catalog.toml` format
//!
//! ```toml
//! [[example]]
//! name        = "fhe-counter"
//! category    = "basic"
//! description = "A counter whose value stays encrypted"
//! contract    = "sources/FheCounter.sol"   # optional, relative to this file
//! test        = "sources/FheCounter.ts"    # optional, relative to this file
//! difficulty  = "beginner"                 # optional
//! ```
//!
//! Omitted `contract`/`test` fall back to the built-in starter for the
//! category.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, instrument, warn};

use fhex_core::{
    application::{ApplicationError, ScaffoldRequest},
    domain::Difficulty,
    error::HubResult,
};

// ── Manifest types ────────────────────────────────────────────────────────────

/// Deserialised representation of a catalogue file.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct CatalogManifest {
    #[serde(default, rename = "example")]
    pub examples: Vec<CatalogEntry>,
}

/// One `[[example]]` table.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CatalogEntry {
    pub name: String,
    pub category: String,
    pub description: String,
    pub contract: Option<PathBuf>,
    pub test: Option<PathBuf>,
    pub difficulty: Option<String>,
}

// ── Loader ────────────────────────────────────────────────────────────────────

pub struct CatalogLoader {
    path: PathBuf,
}

impl CatalogLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse the catalogue and read every referenced source file.
    ///
    /// Name and category are left for the scaffold service to validate so
    /// that batch and single `create` report identical errors.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub fn load(&self) -> HubResult<Vec<ScaffoldRequest>> {
        let raw = fs::read_to_string(&self.path).map_err(|e| self.error(e))?;
        let manifest = Self::parse(&raw).map_err(|e| self.error(e))?;

        if manifest.examples.is_empty() {
            warn!("Catalogue contains no [[example]] entries");
        }

        let base = self.path.parent().unwrap_or(Path::new("."));
        let mut requests = Vec::with_capacity(manifest.examples.len());
        for entry in manifest.examples {
            debug!(name = %entry.name, "Loaded catalogue entry");
            requests.push(self.to_request(entry, base)?);
        }
        Ok(requests)
    }

    pub fn parse(raw: &str) -> Result<CatalogManifest, toml::de::Error> {
        toml::from_str(raw)
    }

    fn to_request(&self, entry: CatalogEntry, base: &Path) -> HubResult<ScaffoldRequest> {
        let mut request = ScaffoldRequest::new(entry.name, entry.category, entry.description);

        if let Some(difficulty) = entry.difficulty {
            request = request.with_difficulty(difficulty.parse::<Difficulty>()?);
        }
        if let Some(contract) = entry.contract {
            request = request.with_contract(self.read_source(base, &contract)?);
        }
        if let Some(test) = entry.test {
            request = request.with_test(self.read_source(base, &test)?);
        }
        Ok(request)
    }

    fn read_source(&self, base: &Path, relative: &Path) -> HubResult<String> {
        let path = base.join(relative);
        fs::read_to_string(&path).map_err(|e| {
            ApplicationError::CatalogError {
                path: self.path.clone(),
                reason: format!("cannot read {}: {e}", path.display()),
            }
            .into()
        })
    }

    fn error(&self, e: impl std::fmt::Display) -> ApplicationError {
        ApplicationError::CatalogError {
            path: self.path.clone(),
            reason: e.to_string(),
        }
    }
}
