//! Domain entities carried by the bloodline arena.

use std::fmt;

/// A vampire: the payload of a node in the bloodline.
///
/// Names are not unique; two vampires may share a name and are then told
/// apart only by their position in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vampire {
    name: String,
    converted_year: i32,
}

impl Vampire {
    pub fn new(name: impl Into<String>, converted_year: i32) -> Self {
        Self {
            name: name.into(),
            converted_year,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Year in which this vampire was converted.
    pub fn converted_year(&self) -> i32 {
        self.converted_year
    }
}

impl fmt::Display for Vampire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.converted_year)
    }
}
