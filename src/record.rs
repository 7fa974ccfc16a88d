//! Record and field path resolution.
//!
//! A [`Record`] names an entity in the store by key. Every record `K` owns a
//! sibling key `K@kind` holding one of the [`Kind`] tags. Whether `K` is a
//! nested structure or a reference to another key prefix is only known when
//! the transaction runs, so a child key is built as a conditional:
//!
//! ```text
//! branch(equal(read(K@kind), "reference"),
//!        concat(read(K), "@", name),
//!        concat(K, "@", name))
//! ```
//!
//! Each level of a chain wraps the previous key in one more such branch.
//! Operands are shared rather than copied, so a chain of depth N costs O(N)
//! nodes even though the printed form repeats the parent key.

use std::sync::Arc;

use tracing::trace;

use crate::{
    ast::Transaction,
    combinators::{branch, concat, equal, read, text, write},
    error::{Result, SyntaxError},
    operations::Operations,
};

/// Separator between key segments.
pub const FIELD_DELIMITER: char = '@';

/// Segment naming a record's kind key.
pub const KIND_SEGMENT: &str = "kind";

/// Tag stored under a record's kind key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The record nests children under its own key
    Structure,
    /// The record holds a scalar value
    Attribute,
    /// The record's value is the key prefix of another record
    Reference,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Structure => "structure",
            Kind::Attribute => "attribute",
            Kind::Reference => "reference",
        }
    }
}

impl From<Kind> for Transaction {
    fn from(kind: Kind) -> Self {
        text(kind.as_str())
    }
}

fn validate(segment: &str) -> Result<()> {
    if segment.is_empty() {
        return Err(SyntaxError::EmptySegment);
    }
    if segment.contains(FIELD_DELIMITER) {
        return Err(SyntaxError::Delimiter {
            segment: segment.to_string(),
            delimiter: FIELD_DELIMITER,
        });
    }
    Ok(())
}

/// Appends `segment` to `key`.
///
/// Text keys are joined in place; any other key is joined with `concat` so the
/// store performs the join.
fn join(key: &Transaction, segment: &str) -> Transaction {
    match key.as_text() {
        Some(prefix) => text(format!("{}{}{}", prefix, FIELD_DELIMITER, segment)),
        None => concat(key, [text(FIELD_DELIMITER.to_string()), text(segment)]),
    }
}

/// An addressable entity in the store.
///
/// Records are immutable; [`Record::field`] returns a new record and leaves the
/// receiver untouched. A record is not itself part of the tree, it only
/// produces transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    key: Transaction,
    name: Option<String>,
    parent: Option<Arc<Record>>,
}

impl Record {
    /// A root record stored at `key`.
    pub fn new(key: impl Into<String>) -> Result<Self> {
        let key = key.into();
        validate(&key)?;
        Ok(Record {
            key: text(&key),
            name: Some(key),
            parent: None,
        })
    }

    /// The key expression of this record.
    pub fn key(&self) -> &Transaction {
        &self.key
    }

    /// Own segment name.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn parent(&self) -> Option<&Record> {
        self.parent.as_deref()
    }

    /// Number of attribute accesses between this record and its root.
    pub fn depth(&self) -> usize {
        self.parent.as_ref().map_or(0, |p| p.depth() + 1)
    }

    /// Segment names from the root down to this record.
    pub fn path(&self) -> Vec<&str> {
        let mut segments = match &self.parent {
            Some(parent) => parent.path(),
            None => Vec::new(),
        };
        segments.extend(self.name());
        segments
    }

    /// The sibling record holding this record's [`Kind`] tag.
    pub fn kind(&self) -> Record {
        Record {
            key: join(&self.key, KIND_SEGMENT),
            name: Some(KIND_SEGMENT.to_string()),
            parent: Some(Arc::new(self.clone())),
        }
    }

    /// The value stored at this record's key.
    pub fn get(&self) -> Transaction {
        read(&self.key)
    }

    /// The child record `name`, following a reference if this record is one.
    pub fn field(&self, name: &str) -> Result<Record> {
        validate(name)?;
        trace!(segment = name, depth = self.depth() + 1, "resolving record attribute");

        let is_reference = equal(self.kind().get(), Kind::Reference);
        let indirect = join(&self.get(), name);
        let direct = join(&self.key, name);

        Ok(Record {
            key: branch(is_reference, indirect, direct),
            name: Some(name.to_string()),
            parent: Some(Arc::new(self.clone())),
        })
    }

    /// The scalar child `name`.
    pub fn attribute(&self, name: &str) -> Result<Field> {
        self.field(name).map(Field::from)
    }
}

impl Operations for Record {
    fn operand(&self) -> Transaction {
        self.get()
    }
}

impl From<&Record> for Transaction {
    fn from(record: &Record) -> Self {
        record.get()
    }
}

/// A terminal record holding a scalar value.
///
/// Reads go through [`Operations`]; writes through [`Field::set`].
///
/// # Examples
///
/// ```
/// use caustic_syntax::record::Record;
/// use caustic_syntax::operations::Operations;
///
/// let counter = Record::new("counter").unwrap().attribute("value").unwrap();
/// let guard = counter.greater_than(10);
/// let bump = counter.set(counter.plus(1));
/// # let _ = (guard, bump);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    record: Record,
}

impl Field {
    pub fn key(&self) -> &Transaction {
        self.record.key()
    }

    pub fn name(&self) -> Option<&str> {
        self.record.name()
    }

    pub fn record(&self) -> &Record {
        &self.record
    }

    /// `read(key)`
    pub fn get(&self) -> Transaction {
        self.record.get()
    }

    /// `write(key, value)`.
    ///
    /// Nothing is written until the returned transaction is folded into the
    /// tree that gets submitted.
    pub fn set(&self, value: impl Into<Transaction>) -> Transaction {
        write(self.key(), value)
    }
}

impl From<Record> for Field {
    fn from(record: Record) -> Self {
        Field { record }
    }
}

impl Operations for Field {
    fn operand(&self) -> Transaction {
        self.get()
    }
}

impl From<&Field> for Transaction {
    fn from(field: &Field) -> Self {
        field.get()
    }
}
