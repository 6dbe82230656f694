//! Builds a validated, cross-referenced GraphQL type graph from SDL documents
//! and prints it back as canonical SDL.
//!
//! ```
//! use typegraph_core::SchemaBuilder;
//!
//! let sdl = "type Query {\n  me: User\n}\n\ntype User {\n  friends: [User!]!\n}\n";
//! let schema = SchemaBuilder::new()
//!     .load_str(None, sdl)?
//!     .build()?;
//! assert_eq!(typegraph_core::print_schema(&schema), sdl);
//! # Ok::<(), typegraph_core::SchemaBuildError>(())
//! ```

pub use typegraph_parser::ast;
mod directive_annotation;
mod directive_annotation_builder;
pub mod file_reader;
pub mod loc;
mod named_ref;
mod printer;
pub mod schema;
pub mod types;
mod value;

pub use directive_annotation::DirectiveAnnotation;
pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use printer::print_schema;
pub use schema::Schema;
pub use schema::SchemaBuilder;
pub use schema::SchemaBuildError;
pub use schema::SchemaBuildErrorKind;
pub use value::Value;

#[cfg(test)]
mod tests;
