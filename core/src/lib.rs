//! Payload-carrying syntax trees for Swift code generation.
//!
//! Trees come in three tiers, each generic over a payload `A` that callers
//! attach to variable references:
//!
//! - [`Expr`]: literals, references, calls, operators, loops;
//! - [`Stmt`]: bindings, control flow, expression statements;
//! - [`Decl`]: functions, properties, initializers, structs and extensions.
//!
//! Every tier supports a lawful `map` over its payload, structural equality
//! and hashing, and rendering to [`synthkit_syntax`] nodes through
//! [`Render`]. Rendering never looks at payloads.
//!
//! # Example
//!
//! ```
//! use synthkit_core::{Decl, PropertySignature, Render, StructSignature};
//!
//! let point: Decl<()> = StructSignature::new("Point")
//!     .conforming_to("Equatable")
//!     .with_member(PropertySignature::constant("x", "Double"))
//!     .with_member(PropertySignature::constant("y", "Double"))
//!     .into();
//!
//! assert_eq!(
//!     point.to_swift(),
//!     "struct Point: Equatable {\n    let x: Double\n    let y: Double\n}"
//! );
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod builder;
pub mod decl;
pub mod expr;
pub mod literal;
pub mod render;
pub mod stmt;
pub mod validate;
pub mod visit;

pub use decl::{
    AccessLevel, ComputedPropertySignature, Decl, ExtensionSignature, FunctionSignature,
    InitializerSignature, ParameterSignature, PropertySignature, SetterSignature, StructSignature,
};
pub use expr::{Argument, Expr};
pub use literal::Literal;
pub use render::{Render, Renderer};
pub use stmt::Stmt;
pub use validate::{ValidationError, validate_decl, validate_decls};
pub use visit::{Visitor, walk_decl, walk_expr, walk_stmt};

pub use synthkit_syntax;

// Trees are shareable across threads whenever their payload is.
static_assertions::assert_impl_all!(Expr<()>: Send, Sync, Clone, Eq, core::hash::Hash);
static_assertions::assert_impl_all!(Stmt<()>: Send, Sync, Clone, Eq, core::hash::Hash);
static_assertions::assert_impl_all!(Decl<()>: Send, Sync, Clone, Eq, core::hash::Hash);
static_assertions::assert_not_impl_any!(Expr<alloc::rc::Rc<()>>: Send, Sync);
