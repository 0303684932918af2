//! Domain layer: the bloodline arena and its entities
//!
//! This layer is independent of configuration and CLI concerns.

pub mod arena;
pub mod builder;
pub mod entities;
pub mod error;

pub use arena::{Ancestors, Bloodline, PreOrderIterator, TreeNode, VampireId};
pub use builder::LineageBuilder;
pub use entities::Vampire;
pub use error::{DomainError, TreeResult};
