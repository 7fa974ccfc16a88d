//! Output for transaction trees.
//!
//! Two renderings are provided:
//!
//! - **Wire JSON** via [`to_json()`] / [`to_json_pretty()`], the exact message
//!   the remote store accepts, and [`from_json()`] to read one back
//! - **Call notation** via [`NotationPrinter`] and the `Display` impl on
//!   [`Transaction`], for logs and diagnostics
//!
//! # Examples
//!
//! ```
//! use caustic_syntax::combinators::{read, less};
//! use caustic_syntax::output::to_json;
//!
//! let tree = less(read("n"), 10);
//! assert_eq!(tree.to_string(), r#"less(read("n"), 10)"#);
//! assert!(to_json(&tree).unwrap().starts_with(r#"{"expression":{"less":"#));
//! ```

use std::fmt;

use serde::Deserialize;

use crate::{
    ast::{Literal, Transaction},
    error::{Result, SyntaxError},
};

pub struct NotationPrinter {
    pretty: bool,
}

impl NotationPrinter {
    pub fn new(pretty: bool) -> Self {
        NotationPrinter { pretty }
    }

    pub fn print(&self, tree: &Transaction) -> String {
        self.print_node(tree, 0)
    }

    fn print_node(&self, tree: &Transaction, indent: usize) -> String {
        match tree {
            Transaction::Literal(literal) => self.print_literal(literal),
            Transaction::Expression(e) => {
                let operands = e.operands();
                if !self.pretty || operands.iter().all(|o| o.is_literal()) {
                    let items: Vec<String> =
                        operands.iter().map(|o| self.print_node(o, indent)).collect();
                    return format!("{}({})", e.name(), items.join(", "));
                }

                let items: Vec<String> = operands
                    .iter()
                    .map(|o| {
                        format!(
                            "{}{}",
                            self.indent(indent + 1),
                            self.print_node(o, indent + 1)
                        )
                    })
                    .collect();
                format!(
                    "{}(\n{}\n{})",
                    e.name(),
                    items.join(",\n"),
                    self.indent(indent)
                )
            }
        }
    }

    fn print_literal(&self, literal: &Literal) -> String {
        match literal {
            Literal::Flag(b) => b.to_string(),
            Literal::Real(n) => n.to_string(),
            Literal::Text(s) => format!("{:?}", s),
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

/// Compact call notation; `{:#}` selects the indented form.
impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&NotationPrinter::new(f.alternate()).print(self))
    }
}

/// Encodes a tree as compact wire JSON.
///
/// Fails with [`SyntaxError::NonFiniteReal`] if any real is NaN or infinite.
pub fn to_json(tree: &Transaction) -> Result<String> {
    check_finite(tree)?;
    Ok(serde_json::to_string(tree)?)
}

/// Encodes a tree as indented wire JSON.
pub fn to_json_pretty(tree: &Transaction) -> Result<String> {
    check_finite(tree)?;
    Ok(serde_json::to_string_pretty(tree)?)
}

/// Decodes a tree from wire JSON.
///
/// Every node nests about three JSON objects deep, so serde_json's default
/// recursion limit is lifted; the stack grows on demand instead.
pub fn from_json(json: &str) -> Result<Transaction> {
    let mut deserializer = serde_json::Deserializer::from_str(json);
    deserializer.disable_recursion_limit();
    let tree = Transaction::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    Ok(tree)
}

fn check_finite(tree: &Transaction) -> Result<()> {
    match tree {
        Transaction::Literal(Literal::Real(n)) if !n.is_finite() => {
            Err(SyntaxError::NonFiniteReal { value: *n })
        }
        Transaction::Literal(_) => Ok(()),
        Transaction::Expression(e) => e.operands().into_iter().try_for_each(check_finite),
    }
}
