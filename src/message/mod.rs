//! The IRC message value, its parser, serializer and builder.

mod builder;
mod nom_parser;
mod parse;
mod serialize;
pub mod tags;
mod types;

pub use self::builder::MessageBuilder;
pub use self::types::{Message, Tags};
