//! Lineage builder for reading bloodlines from TOML lineage files.
//!
//! A lineage file lists vampires as `[[vampire]]` tables:
//!
//! ```toml
//! [[vampire]]
//! name = "Ansel"
//! converted = 1500
//!
//! [[vampire]]
//! name = "Sarah"
//! converted = 1600
//! creator = "Ansel"
//! ```
//!
//! A creator must be declared before its offspring, which keeps every
//! lineage file acyclic.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use crate::domain::arena::{Bloodline, VampireId};
use crate::domain::entities::Vampire;
use crate::domain::error::{DomainError, TreeResult};

#[derive(Debug, Deserialize)]
struct LineageRecord {
    name: String,
    converted: i32,
    creator: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LineageDocument {
    #[serde(default, rename = "vampire")]
    vampires: Vec<LineageRecord>,
}

/// Constructs a [`Bloodline`] from lineage descriptions.
#[derive(Default)]
pub struct LineageBuilder {
    /// Name -> handles declared so far with that name
    declared: HashMap<String, Vec<VampireId>>,
}

impl LineageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a bloodline from a lineage file on disk.
    #[instrument(level = "debug", skip(self))]
    pub fn build_from_file(&mut self, path: &Path) -> TreeResult<Bloodline> {
        if !path.is_file() {
            return Err(DomainError::FileNotFound(path.to_path_buf()));
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| DomainError::InvalidLineageFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        self.build(&content, path)
    }

    /// Build a bloodline from lineage TOML held in memory.
    pub fn build_from_str(&mut self, content: &str) -> TreeResult<Bloodline> {
        self.build(content, Path::new("<memory>"))
    }

    fn build(&mut self, content: &str, origin: &Path) -> TreeResult<Bloodline> {
        // Reset state for a fresh build
        self.declared.clear();

        let document: LineageDocument =
            toml::from_str(content).map_err(|e| DomainError::InvalidLineageFile {
                path: PathBuf::from(origin),
                message: e.to_string(),
            })?;
        debug!("read {} lineage records", document.vampires.len());

        let mut bloodline = Bloodline::new();
        for record in document.vampires {
            let creator = match &record.creator {
                Some(creator_name) => Some(self.resolve_creator(creator_name, &record.name)?),
                None => None,
            };

            let idx = bloodline.insert(Vampire::new(record.name.clone(), record.converted));
            if let Some(creator_idx) = creator {
                bloodline.add_offspring(creator_idx, idx)?;
            }
            self.declared.entry(record.name).or_default().push(idx);
        }

        Ok(bloodline)
    }

    fn resolve_creator(&self, creator_name: &str, vampire: &str) -> TreeResult<VampireId> {
        match self.declared.get(creator_name).map(Vec::as_slice) {
            Some([idx]) => Ok(*idx),
            Some([_, _, ..]) => Err(DomainError::AmbiguousCreator(creator_name.to_string())),
            _ => Err(DomainError::UnknownCreator {
                name: creator_name.to_string(),
                vampire: vampire.to_string(),
            }),
        }
    }
}
