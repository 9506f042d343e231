#![forbid(unsafe_code)]
//! Lineage-sensitive playbook rule evaluation.

mod lineage;
mod rule;
mod subtree;

pub use lineage::become_user_without_become;
pub use rule::{check_document, match_play, RuleMatch, RuleMeta, RuleSeverity, RUN_ONCE};
pub use subtree::{declares, exists_in_subtree, EscalationKey};

pub const CRATE_NAME: &str = "playlint-rules";
