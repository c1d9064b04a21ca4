//! Compiles GraphQL executable documents, evaluated against a schema, into a
//! target-agnostic graph of client model descriptors: interfaces mirroring
//! fragments, concrete classes per runtime type, and response-parsing plans.
//!
//! * [`schema`] loads the SDL the documents are compiled against.
//! * [`operation`] loads executable documents and resolves their fragments.
//! * [`modelgen`] is the compiler itself.

pub mod ast;
pub mod loc;
pub mod modelgen;
pub mod operation;
pub mod schema;
pub mod types;
