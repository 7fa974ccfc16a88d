//! Decode a wire transaction and summarize it

use std::collections::BTreeSet;

use super::CliError;
use crate::{Transaction, from_json, walk};

/// Options for the inspect command
#[derive(Debug, Clone, Default)]
pub struct InspectOptions {
    /// Wire JSON of the transaction
    pub input: Option<String>,
    /// Render the tree indented
    pub pretty: bool,
}

/// What `inspect` learned about a transaction
#[derive(Debug)]
pub struct InspectReport {
    pub tree: Transaction,
    pub depth: usize,
    pub nodes: usize,
    pub may_rollback: bool,
    pub keys: BTreeSet<String>,
    pretty: bool,
}

impl std::fmt::Display for InspectReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.pretty {
            writeln!(f, "{:#}", self.tree)?;
        } else {
            writeln!(f, "{}", self.tree)?;
        }
        writeln!(f, "depth: {}", self.depth)?;
        writeln!(f, "nodes: {}", self.nodes)?;
        writeln!(f, "may rollback: {}", self.may_rollback)?;
        let keys: Vec<&str> = self.keys.iter().map(String::as_str).collect();
        write!(f, "keys: {}", keys.join(", "))
    }
}

/// Execute an inspect operation
pub fn execute_inspect(options: &InspectOptions) -> Result<InspectReport, CliError> {
    let json = options.input.as_ref().ok_or(CliError::NoInput)?;
    let tree = from_json(json)?;

    Ok(InspectReport {
        depth: walk::depth(&tree),
        nodes: walk::node_count(&tree),
        may_rollback: walk::may_rollback(&tree),
        keys: walk::static_keys(&tree),
        pretty: options.pretty,
        tree,
    })
}
