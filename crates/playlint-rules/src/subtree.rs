use playlint_model::TaskNode;

/// The two escalation declarations the lineage check cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscalationKey {
    Become,
    BecomeUser,
}

#[must_use]
pub fn declares(node: &TaskNode, key: EscalationKey) -> bool {
    match key {
        EscalationKey::Become => node.declares_become(),
        EscalationKey::BecomeUser => node.declares_become_user(),
    }
}

/// Existential over the node and all of its descendants, short-circuiting on
/// the first hit.
#[must_use]
pub fn exists_in_subtree(node: &TaskNode, key: EscalationKey) -> bool {
    declares(node, key)
        || node
            .children()
            .iter()
            .any(|child| exists_in_subtree(child, key))
}
