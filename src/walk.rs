use std::collections::BTreeSet;

use crate::ast::{Expression, Transaction};

/// Height of the tree; a literal has depth 1.
pub fn depth(tree: &Transaction) -> usize {
    match tree {
        Transaction::Literal(_) => 1,
        Transaction::Expression(e) => 1 + e.operands().into_iter().map(depth).max().unwrap_or(0),
    }
}

/// Number of nodes, counting shared sub-trees once per occurrence.
pub fn node_count(tree: &Transaction) -> usize {
    match tree {
        Transaction::Literal(_) => 1,
        Transaction::Expression(e) => 1 + e.operands().into_iter().map(node_count).sum::<usize>(),
    }
}

/// Check if a tree can abort
///
/// Recursively walks the tree looking for `rollback`. A rollback inside an
/// untaken branch still counts.
pub fn may_rollback(tree: &Transaction) -> bool {
    match tree {
        Transaction::Literal(_) => false,
        Transaction::Expression(Expression::Rollback { .. }) => true,
        Transaction::Expression(e) => e.operands().into_iter().any(may_rollback),
    }
}

/// Literal keys touched by `read`, `write` and `prefetch`.
///
/// Keys computed at run time (such as resolved record paths) are skipped,
/// though the literal keys inside them are still collected.
///
/// # Examples
/// ```
/// use caustic_syntax::combinators::{read, write, add};
/// use caustic_syntax::walk::static_keys;
///
/// let tree = write("b", add(read("a"), 1));
/// let keys: Vec<String> = static_keys(&tree).into_iter().collect();
/// assert_eq!(keys, vec!["a".to_string(), "b".to_string()]);
/// ```
pub fn static_keys(tree: &Transaction) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    collect_keys(tree, &mut keys);
    keys
}

fn collect_keys(tree: &Transaction, keys: &mut BTreeSet<String>) {
    let Transaction::Expression(e) = tree else {
        return;
    };

    match e {
        Expression::Read { key } | Expression::Write { key, .. } | Expression::Prefetch { key } => {
            if let Some(k) = key.as_text() {
                keys.insert(k.to_string());
            }
        }
        _ => {}
    }

    for operand in e.operands() {
        collect_keys(operand, keys);
    }
}
