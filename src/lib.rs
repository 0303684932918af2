//! Genealogical trees of vampires.
//!
//! A [`Bloodline`](domain::Bloodline) is an arena holding one or more trees
//! of [`Vampire`](domain::Vampire)s. Each vampire has at most one creator and
//! any number of offspring; creator links are non-owning arena handles.
//!
//! ```
//! use bloodline::domain::{Bloodline, Vampire};
//!
//! let mut coven = Bloodline::new();
//! let ansel = coven.insert(Vampire::new("Ansel", 1500));
//! let sarah = coven.insert(Vampire::new("Sarah", 1600));
//! coven.add_offspring(ansel, sarah)?;
//!
//! assert_eq!(coven.depth_from_root(sarah)?, 1);
//! assert!(coven.is_more_senior_than(ansel, sarah)?);
//! assert_eq!(coven.closest_common_ancestor(ansel, sarah)?, Some(ansel));
//! # Ok::<(), bloodline::domain::DomainError>(())
//! ```

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
