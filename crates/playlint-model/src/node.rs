use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Keys whose values nest further task nodes, in the order children are
/// collected.
pub const STRUCTURAL_KEYS: [&str; 5] = ["block", "tasks", "handlers", "rescue", "always"];

/// Line annotation injected by the host parser on each mapping.
pub const LINE_KEY: &str = "__line__";

const BECOME_KEY: &str = "become";
const BECOME_USER_KEY: &str = "become_user";
const NAME_KEY: &str = "name";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskNode {
    #[serde(rename = "become")]
    has_become: bool,
    #[serde(rename = "become_user")]
    has_become_user: bool,
    name: Option<String>,
    line: Option<u64>,
    children: Vec<TaskNode>,
}

impl TaskNode {
    /// Total adapter: any non-mapping input collapses to an empty node, and
    /// structural keys holding non-sequence values contribute no children.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        if value.as_mapping().is_none() {
            return Self::default();
        }

        let mut children = Vec::new();
        for key in STRUCTURAL_KEYS {
            let Some(entries) = value.get(key).and_then(Value::as_sequence) else {
                continue;
            };
            children.extend(entries.iter().map(Self::from_value));
        }

        Self {
            has_become: value.get(BECOME_KEY).is_some(),
            has_become_user: value.get(BECOME_USER_KEY).is_some(),
            name: value.get(NAME_KEY).and_then(Value::as_str).map(str::to_string),
            line: value.get(LINE_KEY).and_then(Value::as_u64),
            children,
        }
    }

    #[must_use]
    pub fn declares_become(&self) -> bool {
        self.has_become
    }

    #[must_use]
    pub fn declares_become_user(&self) -> bool {
        self.has_become_user
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[must_use]
    pub fn line(&self) -> Option<u64> {
        self.line
    }

    #[must_use]
    pub fn children(&self) -> &[TaskNode] {
        &self.children
    }

    /// Reported line for a play-level match: the first task under this node.
    #[must_use]
    pub fn first_task_line(&self) -> Option<u64> {
        self.children.first().and_then(|child| child.line())
    }
}
