//! Concrete Swift syntax nodes for code generation.
//!
//! This crate is the target representation produced by `synthkit-core`'s
//! renderer. Nodes mirror the shapes of Swift's grammar closely enough that
//! serializing them is a straight walk: every node knows how to print itself
//! through a [`Printer`], and the output only depends on the node and the
//! [`FormatOptions`].
//!
//! # Example
//!
//! ```
//! use synthkit_syntax::{ExprSyntax, Syntax};
//!
//! let sum = ExprSyntax::infix(ExprSyntax::integer(1), "+", ExprSyntax::integer(2));
//! assert_eq!(sum.formatted(), "1 + 2");
//! ```

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod decl;
pub mod expr;
pub mod flags;
pub mod printer;
pub mod stmt;

pub use decl::{
    AccessorBlockSyntax, AccessorDeclSyntax, AccessorSpecifier, BindingSpecifier, DeclSyntax,
    ExtensionDeclSyntax, FunctionDeclSyntax, FunctionParameterSyntax, InheritanceClauseSyntax,
    InheritedTypeSyntax, InitializerDeclSyntax, MemberBlockSyntax, StructDeclSyntax,
    VariableDeclSyntax,
};
pub use expr::{
    ArrayElementSyntax, ClosureExprSyntax, ClosureParameterSyntax, ExprSyntax,
    FunctionCallExprSyntax, LabeledExprSyntax,
};
pub use flags::{EffectSpecifiers, Modifiers};
pub use printer::{FormatOptions, Printer, Syntax};
pub use stmt::{
    CodeBlockItemListSyntax, CodeBlockItemSyntax, CodeBlockSyntax, IfExprSyntax, StmtSyntax,
};

/// Implements `Display` for syntax nodes by printing them with default options.
macro_rules! impl_display_via_printer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl core::fmt::Display for $ty {
                fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                    f.write_str(&$crate::printer::Syntax::formatted(self))
                }
            }
        )*
    };
}

impl_display_via_printer!(
    ExprSyntax,
    FunctionCallExprSyntax,
    ClosureExprSyntax,
    StmtSyntax,
    IfExprSyntax,
    CodeBlockSyntax,
    CodeBlockItemSyntax,
    CodeBlockItemListSyntax,
    DeclSyntax,
    VariableDeclSyntax,
    FunctionDeclSyntax,
    InitializerDeclSyntax,
    ExtensionDeclSyntax,
    StructDeclSyntax,
);
