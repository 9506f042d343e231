use crate::subtree::{exists_in_subtree, EscalationKey};
use playlint_model::TaskNode;

/// Does any lineage under `node` declare `become_user` without a paired
/// `become`? `inherited` carries an unpaired override seen on an ancestor.
///
/// The four arms are ordered; the first that applies decides the node.
#[must_use]
pub fn become_user_without_become(inherited: bool, node: &TaskNode) -> bool {
    if node.declares_become() {
        // An explicit escalation at this level covers every override below
        // it, inherited state included.
        return false;
    }
    if node.declares_become_user() && exists_in_subtree(node, EscalationKey::Become) {
        // Provisionally paired with an escalation deeper in this subtree.
        // A flag under one child does not protect a sibling, so every child
        // restarts with a clean slate.
        return node
            .children()
            .iter()
            .any(|child| become_user_without_become(false, child));
    }
    if exists_in_subtree(node, EscalationKey::BecomeUser) {
        // Carry the override down until a `become` clears it or the tree
        // bottoms out. A childless subtree here is already a violation.
        let carried = inherited || node.declares_become_user();
        return node.children().is_empty()
            || node
                .children()
                .iter()
                .any(|child| become_user_without_become(carried, child));
    }
    inherited
}
