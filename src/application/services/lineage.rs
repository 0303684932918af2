//! Lineage service
//!
//! Loads a bloodline and answers ancestry queries addressed by vampire name.

use std::path::Path;

use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{Bloodline, LineageBuilder, Vampire, VampireId};

/// Direct and transitive offspring counts of one vampire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DescendantSummary {
    pub offspring: usize,
    pub descendants: usize,
}

/// Open year bounds for filtering vampires by conversion year.
#[derive(Debug, Clone, Copy, Default)]
pub struct YearFilter {
    /// Keep vampires converted strictly after this year
    pub after: Option<i32>,
    /// Keep vampires converted strictly before this year
    pub before: Option<i32>,
}

impl YearFilter {
    pub fn matches(&self, vampire: &Vampire) -> bool {
        let year = vampire.converted_year();
        self.after.is_none_or(|after| year > after)
            && self.before.is_none_or(|before| year < before)
    }
}

/// Service for querying a bloodline by vampire name.
pub struct LineageService {
    bloodline: Bloodline,
}

impl LineageService {
    pub fn new(bloodline: Bloodline) -> Self {
        Self { bloodline }
    }

    /// Load a bloodline from a lineage file.
    pub fn load(path: &Path) -> ApplicationResult<Self> {
        debug!("load: path={}", path.display());
        let bloodline = LineageBuilder::new().build_from_file(path)?;
        debug!("load: {} vampires", bloodline.len());
        Ok(Self::new(bloodline))
    }

    pub fn bloodline(&self) -> &Bloodline {
        &self.bloodline
    }

    /// Resolve a name to the first matching vampire, searching each root's
    /// tree in pre-order, roots in insertion order.
    pub fn resolve(&self, name: &str) -> ApplicationResult<VampireId> {
        self.find_in_roots(name)?
            .ok_or_else(|| ApplicationError::VampireNotFound(name.to_string()))
    }

    fn find_in_roots(&self, name: &str) -> ApplicationResult<Option<VampireId>> {
        for root in self.bloodline.roots() {
            if let Some(idx) = self.bloodline.find_by_name(root, name)? {
                return Ok(Some(idx));
            }
        }
        Ok(None)
    }

    pub fn vampire(&self, idx: VampireId) -> ApplicationResult<&Vampire> {
        Ok(self.bloodline.vampire(idx)?)
    }

    pub fn depth(&self, name: &str) -> ApplicationResult<usize> {
        let idx = self.resolve(name)?;
        Ok(self.bloodline.depth_from_root(idx)?)
    }

    pub fn is_more_senior(&self, name: &str, other: &str) -> ApplicationResult<bool> {
        let idx = self.resolve(name)?;
        let other_idx = self.resolve(other)?;
        Ok(self.bloodline.is_more_senior_than(idx, other_idx)?)
    }

    pub fn common_ancestor(&self, name: &str, other: &str) -> ApplicationResult<Option<VampireId>> {
        let idx = self.resolve(name)?;
        let other_idx = self.resolve(other)?;
        Ok(self.bloodline.closest_common_ancestor(idx, other_idx)?)
    }

    /// Find `name` below `from` (inclusive), or across all roots if `from` is `None`.
    pub fn find(&self, name: &str, from: Option<&str>) -> ApplicationResult<Option<VampireId>> {
        match from {
            Some(from) => {
                let from_idx = self.resolve(from)?;
                Ok(self.bloodline.find_by_name(from_idx, name)?)
            }
            None => self.find_in_roots(name),
        }
    }

    pub fn descendants(&self, name: &str) -> ApplicationResult<DescendantSummary> {
        let idx = self.resolve(name)?;
        Ok(DescendantSummary {
            offspring: self.bloodline.offspring_count(idx)?,
            descendants: self.bloodline.count_descendants(idx)?,
        })
    }

    /// Collect vampires matching `filter` below `from` (inclusive), or across
    /// all roots if `from` is `None`, in pre-order.
    pub fn collect(&self, from: Option<&str>, filter: YearFilter) -> ApplicationResult<Vec<VampireId>> {
        let starts = match from {
            Some(from) => vec![self.resolve(from)?],
            None => self.bloodline.roots(),
        };
        let mut collected = Vec::new();
        for start in starts {
            collected.extend(self.bloodline.collect_where(start, |v| filter.matches(v))?);
        }
        Ok(collected)
    }
}
