//! Synthkit - payload-carrying syntax trees for Swift code generation
//!
//! # Overview
//!
//! Synthkit models Swift code as three tiers of trees (expressions,
//! statements and declarations) that carry a caller-chosen payload on every
//! variable reference. Hosts such as macro expanders or code generators use
//! the payload for their own bookkeeping (types, source locations, binding
//! ids) and render the trees to Swift when they are done.
//!
//! - `map` rewrites payloads and obeys the functor laws;
//! - equality and hashing are structural;
//! - rendering is pure, total and ignores payloads.
//!
//! # Quick Start
//!
//! ```
//! use synthkit::{AccessLevel, Decl, Expr, FunctionSignature, Render, Stmt};
//!
//! let sum: Decl<()> = FunctionSignature::new("total")
//!     .with_access(AccessLevel::Public)
//!     .with_return_type("Int")
//!     .with_body(vec![Stmt::return_value(Expr::binary(
//!         Expr::variable("a", ()),
//!         "+",
//!         Expr::variable("b", ()),
//!     ))])
//!     .into();
//!
//! assert_eq!(
//!     sum.to_swift(),
//!     "public func total() -> Int {\n    return a + b\n}"
//! );
//! ```
//!
//! # Crates
//!
//! 1. **`synthkit-core`**: the trees, `map`, the renderer, validation and
//!    visitors.
//! 2. **`synthkit-syntax`**: the Swift syntax nodes and their printer.

// Re-export public API from synthkit_core
pub use synthkit_core::{
    AccessLevel, Argument, ComputedPropertySignature, Decl, Expr, ExtensionSignature,
    FunctionSignature, InitializerSignature, Literal, ParameterSignature, PropertySignature,
    Render, Renderer, SetterSignature, Stmt, StructSignature,
};

// Re-export traversal and validation
pub use synthkit_core::{ValidationError, Visitor, validate_decl, validate_decls};
pub use synthkit_core::{walk_decl, walk_expr, walk_stmt};

// Re-export the target syntax
pub use synthkit_syntax::{self as syntax, FormatOptions, Syntax};
