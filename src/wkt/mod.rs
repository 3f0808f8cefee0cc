//! Reading and writing OGC well-known text for coordinate systems.
//!
//! Parsing runs in three stages: the tokenizer splits the text, the parser recurses into each
//! bracketed clause collecting its arguments, and a per-keyword builder consumes those
//! arguments by type to construct the entity. Writing goes through [`ToWkt`].

mod binder;
mod parser;
mod tokenizer;
mod writer;

pub(crate) use parser::Parser;
pub(crate) use writer::{brackets, write_content};
pub use writer::{format_number, ToWkt, WktCache, WktPart};
