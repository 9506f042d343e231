#![forbid(unsafe_code)]
//! Playbook document model SSOT: the typed task tree and play gating inputs.

mod node;
mod play;

pub use node::{TaskNode, LINE_KEY, STRUCTURAL_KEYS};
pub use play::{
    parse_playbook, plays_from_document, DocumentKind, ExecutionStrategy, PlayNode,
    ValidationError, FREE_STRATEGY, PLAYBOOK_KIND, STRATEGY_KEY,
};

pub const CRATE_NAME: &str = "playlint-model";
