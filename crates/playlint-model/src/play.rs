// SPDX-License-Identifier: Apache-2.0

use crate::node::TaskNode;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fmt::{Display, Formatter};

pub const STRATEGY_KEY: &str = "strategy";
pub const FREE_STRATEGY: &str = "free";
pub const PLAYBOOK_KIND: &str = "playbook";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError(pub String);

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for ValidationError {}

/// Play-level execution strategy. Only `free` (or an absent field, whose
/// runtime default may change) leaves task ordering unpredictable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum ExecutionStrategy {
    Free,
    Unspecified,
    Serialized(String),
}

impl ExecutionStrategy {
    #[must_use]
    pub fn from_play(value: &Value) -> Self {
        match value.get(STRATEGY_KEY).and_then(Value::as_str) {
            None => Self::Unspecified,
            Some(FREE_STRATEGY) => Self::Free,
            Some(other) => Self::Serialized(other.to_string()),
        }
    }

    #[must_use]
    pub fn admits_reordering(&self) -> bool {
        matches!(self, Self::Free | Self::Unspecified)
    }
}

/// Host-supplied discriminator for the top-level document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum DocumentKind {
    Playbook,
    Other(String),
}

impl DocumentKind {
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw == PLAYBOOK_KIND {
            Self::Playbook
        } else {
            Self::Other(raw.to_string())
        }
    }

    #[must_use]
    pub fn is_playbook(&self) -> bool {
        matches!(self, Self::Playbook)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayNode {
    strategy: ExecutionStrategy,
    root: TaskNode,
}

impl PlayNode {
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        Self {
            strategy: ExecutionStrategy::from_play(value),
            root: TaskNode::from_value(value),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> &ExecutionStrategy {
        &self.strategy
    }

    #[must_use]
    pub fn root(&self) -> &TaskNode {
        &self.root
    }
}

/// Lenient document walk: anything that is not a sequence of plays yields no
/// plays rather than an error.
#[must_use]
pub fn plays_from_document(doc: &Value) -> Vec<PlayNode> {
    doc.as_sequence()
        .map(|plays| plays.iter().map(PlayNode::from_value).collect())
        .unwrap_or_default()
}

/// Strict entry for callers that require a playbook-typed document.
pub fn parse_playbook(kind: &DocumentKind, doc: &Value) -> Result<Vec<PlayNode>, ValidationError> {
    if !kind.is_playbook() {
        return Err(ValidationError(format!(
            "document is not a playbook: {kind:?}"
        )));
    }
    let plays = doc
        .as_sequence()
        .ok_or_else(|| ValidationError("playbook document must be a sequence of plays".to_string()))?;
    Ok(plays.iter().map(PlayNode::from_value).collect())
}
