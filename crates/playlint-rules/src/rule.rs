// SPDX-License-Identifier: Apache-2.0

use crate::lineage::become_user_without_become;
use playlint_model::{plays_from_document, DocumentKind, PlayNode, TaskNode};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum RuleSeverity {
    Info,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMeta {
    pub id: &'static str,
    pub short_description: &'static str,
    pub description: &'static str,
    pub severity: RuleSeverity,
    pub tags: &'static [&'static str],
    pub version_added: &'static str,
}

pub const RUN_ONCE: RuleMeta = RuleMeta {
    id: "107",
    short_description: "Unpredictable run_once",
    description: "Use of run_once does not work with the free execution strategy. \
                  Avoid it, or use noqa comments to ignore it.",
    severity: RuleSeverity::Medium,
    tags: &["unpredictability", "experimental"],
    version_added: "v4.4.0",
};

/// One reported violation: the rule's short description paired with the
/// offending play subtree and the line of the play's first task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleMatch {
    pub rule_id: &'static str,
    pub message: &'static str,
    pub line: Option<u64>,
    pub play: TaskNode,
}

#[must_use]
pub fn match_play(play: &PlayNode) -> Option<RuleMatch> {
    if !play.strategy().admits_reordering() {
        return None;
    }
    if !become_user_without_become(false, play.root()) {
        return None;
    }
    Some(RuleMatch {
        rule_id: RUN_ONCE.id,
        message: RUN_ONCE.short_description,
        line: play.root().first_task_line(),
        play: play.root().clone(),
    })
}

/// At most one match per play; play order is preserved. Documents that are
/// not playbooks pass through untouched.
#[must_use]
pub fn check_document(kind: &DocumentKind, doc: &Value) -> Vec<RuleMatch> {
    if !kind.is_playbook() {
        return Vec::new();
    }
    plays_from_document(doc)
        .iter()
        .filter_map(match_play)
        .collect()
}
