//! Resolve a record path into its key expression

use super::CliError;
use crate::{Record, Transaction, to_json, to_json_pretty};

/// Options for the path command
#[derive(Debug, Clone, Default)]
pub struct PathOptions {
    /// Root record key
    pub root: String,
    /// Attribute names below the root; the last one is read as a field
    pub segments: Vec<String>,
    /// Print wire JSON instead of call notation
    pub json: bool,
    /// Indent the output
    pub pretty: bool,
}

/// Builds the `read` of the addressed field and renders it.
pub fn execute_path(options: &PathOptions) -> Result<String, CliError> {
    let tree = resolve(&options.root, &options.segments)?;

    let rendered = match (options.json, options.pretty) {
        (true, true) => to_json_pretty(&tree)?,
        (true, false) => to_json(&tree)?,
        (false, true) => format!("{:#}", tree),
        (false, false) => tree.to_string(),
    };
    Ok(rendered)
}

fn resolve(root: &str, segments: &[String]) -> Result<Transaction, CliError> {
    let mut record = Record::new(root)?;
    let Some((last, parents)) = segments.split_last() else {
        return Ok(record.get());
    };

    for segment in parents {
        record = record.field(segment)?;
    }
    Ok(record.attribute(last)?.get())
}
