pub mod ast;
pub mod cli;
pub mod combinators;
pub mod derived;
pub mod error;
pub mod operations;
pub mod output;
pub mod record;
pub mod value;
pub mod walk;

pub use ast::{Expression, Literal, ToReal, Transaction};
pub use error::{Result, SyntaxError};
pub use operations::Operations;
pub use output::{from_json, to_json, to_json_pretty};
pub use record::{FIELD_DELIMITER, Field, Kind, Record};
pub use value::{Value, fmt};
