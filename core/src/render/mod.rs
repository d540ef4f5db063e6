//! Translation of trees into Swift syntax.
//!
//! The renderer is a stateless structural fold: every variant of every tier
//! has exactly one rule, the same tree always yields the same syntax, and
//! nothing is mutated along the way.
//!
//! Rendering is generic over an unconstrained payload type, so it cannot
//! look at payloads at all. Two trees that differ only in their payloads
//! render to identical syntax; this is where the payload is discarded.
//!
//! Two constructs have no direct Swift counterpart in expression position
//! and are narrowed on purpose:
//!
//! - `Expr::Loop` becomes `collection.forEach { variable in body }`;
//! - `Expr::InlineDeclaration` becomes its initializer alone.
//!
//! # Example
//!
//! ```
//! use synthkit_core::{Expr, Render};
//!
//! let loop_expr: Expr<()> = Expr::for_each(
//!     "item",
//!     Expr::variable("items", ()),
//!     Expr::variable("item", ()),
//! );
//! assert_eq!(loop_expr.to_swift(), "items.forEach { item in item }");
//! ```

mod decl;
mod expr;
mod stmt;

use crate::decl::Decl;
use crate::expr::Expr;
use crate::literal::Literal;
use crate::stmt::Stmt;
use crate::{String, Vec};
use synthkit_syntax::{
    CodeBlockItemListSyntax, CodeBlockItemSyntax, DeclSyntax, ExprSyntax, FormatOptions, Syntax,
};

/// Stateless translator from trees to syntax nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer;

/// Extension trait to render trees directly.
pub trait Render {
    type Output;

    fn render(&self) -> Self::Output;

    /// Renders and serializes with default format options.
    fn to_swift(&self) -> String
    where
        Self::Output: Syntax,
    {
        self.render().formatted()
    }

    /// Renders and serializes with the given format options.
    fn to_swift_with(&self, options: &FormatOptions) -> String
    where
        Self::Output: Syntax,
    {
        self.render().formatted_with(options)
    }
}

impl Render for Literal {
    type Output = ExprSyntax;

    fn render(&self) -> ExprSyntax {
        Renderer.literal(self)
    }
}

impl<A> Render for Expr<A> {
    type Output = ExprSyntax;

    fn render(&self) -> ExprSyntax {
        Renderer.expr(self)
    }
}

impl<A> Render for Stmt<A> {
    type Output = CodeBlockItemSyntax;

    fn render(&self) -> CodeBlockItemSyntax {
        Renderer.stmt(self)
    }
}

impl<A> Render for [Stmt<A>] {
    type Output = CodeBlockItemListSyntax;

    fn render(&self) -> CodeBlockItemListSyntax {
        Renderer.stmts(self)
    }
}

impl<A> Render for Decl<A> {
    type Output = DeclSyntax;

    fn render(&self) -> DeclSyntax {
        Renderer.decl(self)
    }
}

/// A sequence of declarations renders as top-level items, one per line.
impl<A> Render for [Decl<A>] {
    type Output = CodeBlockItemListSyntax;

    fn render(&self) -> CodeBlockItemListSyntax {
        CodeBlockItemListSyntax {
            items: self
                .iter()
                .map(|decl| CodeBlockItemSyntax::Decl(Renderer.decl(decl)))
                .collect(),
        }
    }
}

/// Builds list elements with `trailing_comma` set on all but the last.
pub(crate) fn comma_separated<I, U>(items: I, mut make: impl FnMut(I::Item, bool) -> U) -> Vec<U>
where
    I: IntoIterator,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    let last = items.len().saturating_sub(1);
    items
        .enumerate()
        .map(|(i, item)| make(item, i < last))
        .collect()
}

#[cfg(test)]
mod render_test;
