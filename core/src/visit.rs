//! Read-only traversal over all three tiers.
//!
//! Implement [`Visitor`] and override the hooks you care about; the default
//! hooks call the matching `walk_*` function, which recurses into every child
//! in source order. An override that still wants the children visited calls
//! the `walk_*` function itself.
//!
//! # Example
//!
//! ```
//! use synthkit_core::{Expr, Visitor, walk_expr};
//!
//! struct CallCounter(usize);
//!
//! impl<'t, A> Visitor<'t, A> for CallCounter {
//!     fn visit_expr(&mut self, expr: &'t Expr<A>) {
//!         if matches!(expr, Expr::FunctionCall { .. } | Expr::MethodCall { .. }) {
//!             self.0 += 1;
//!         }
//!         walk_expr(self, expr);
//!     }
//! }
//!
//! let expr: Expr<()> = Expr::call("f", vec![Expr::call("g", vec![]).into()]);
//! let mut counter = CallCounter(0);
//! counter.visit_expr(&expr);
//! assert_eq!(counter.0, 2);
//! ```

use crate::Vec;
use crate::decl::Decl;
use crate::expr::Expr;
use crate::stmt::Stmt;

pub trait Visitor<'t, A> {
    fn visit_expr(&mut self, expr: &'t Expr<A>) {
        walk_expr(self, expr)
    }

    fn visit_stmt(&mut self, stmt: &'t Stmt<A>) {
        walk_stmt(self, stmt)
    }

    fn visit_decl(&mut self, decl: &'t Decl<A>) {
        walk_decl(self, decl)
    }
}

pub fn walk_expr<'t, A, V>(visitor: &mut V, expr: &'t Expr<A>)
where
    V: Visitor<'t, A> + ?Sized,
{
    match expr {
        Expr::Literal(_) | Expr::Variable { .. } => {}
        Expr::Conditional {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_expr(condition);
            visitor.visit_expr(then_branch);
            visitor.visit_expr(else_branch);
        }
        Expr::Loop {
            collection, body, ..
        } => {
            visitor.visit_expr(collection);
            visitor.visit_expr(body);
        }
        Expr::FunctionCall { arguments, .. } => {
            for argument in arguments {
                visitor.visit_expr(&argument.value);
            }
        }
        Expr::MethodCall {
            base, arguments, ..
        } => {
            visitor.visit_expr(base);
            for argument in arguments {
                visitor.visit_expr(&argument.value);
            }
        }
        Expr::BinaryOperation { left, right, .. } => {
            visitor.visit_expr(left);
            visitor.visit_expr(right);
        }
        Expr::PropertyAccess { base, .. } => visitor.visit_expr(base),
        Expr::InlineDeclaration { initializer, .. } => visitor.visit_expr(initializer),
        Expr::ArrayLiteral(elements) => {
            for element in elements {
                visitor.visit_expr(element);
            }
        }
    }
}

fn walk_block<'t, A, V>(visitor: &mut V, body: &'t [Stmt<A>])
where
    V: Visitor<'t, A> + ?Sized,
{
    for stmt in body {
        visitor.visit_stmt(stmt);
    }
}

pub fn walk_stmt<'t, A, V>(visitor: &mut V, stmt: &'t Stmt<A>)
where
    V: Visitor<'t, A> + ?Sized,
{
    match stmt {
        Stmt::Let { initializer, .. } | Stmt::Var { initializer, .. } => {
            visitor.visit_expr(initializer)
        }
        Stmt::Guard {
            condition,
            else_body,
        } => {
            visitor.visit_expr(condition);
            walk_block(visitor, else_body);
        }
        Stmt::If {
            condition,
            then_body,
            else_body,
        } => {
            visitor.visit_expr(condition);
            walk_block(visitor, then_body);
            if let Some(else_body) = else_body {
                walk_block(visitor, else_body);
            }
        }
        Stmt::Return(value) => {
            if let Some(value) = value {
                visitor.visit_expr(value);
            }
        }
        Stmt::Throw(expr) | Stmt::Expression(expr) => visitor.visit_expr(expr),
        Stmt::Defer(body) => walk_block(visitor, body),
    }
}

pub fn walk_decl<'t, A, V>(visitor: &mut V, decl: &'t Decl<A>)
where
    V: Visitor<'t, A> + ?Sized,
{
    match decl {
        Decl::Function(signature) => walk_block(visitor, &signature.body),
        Decl::Property(signature) => {
            if let Some(initializer) = &signature.initializer {
                visitor.visit_expr(initializer);
            }
        }
        Decl::ComputedProperty(signature) => {
            walk_block(visitor, &signature.getter);
            if let Some(setter) = &signature.setter {
                walk_block(visitor, &setter.body);
            }
        }
        Decl::Extension(signature) => {
            for member in &signature.members {
                visitor.visit_decl(member);
            }
        }
        Decl::Struct(signature) => {
            for member in &signature.members {
                visitor.visit_decl(member);
            }
        }
        Decl::Initializer(signature) => walk_block(visitor, &signature.body),
    }
}

/// Collects references to every `Variable` payload in pre-order.
pub(crate) struct PayloadCollector<'t, A> {
    pub(crate) payloads: Vec<&'t A>,
}

impl<A> Default for PayloadCollector<'_, A> {
    fn default() -> Self {
        Self {
            payloads: Vec::new(),
        }
    }
}

impl<'t, A> Visitor<'t, A> for PayloadCollector<'t, A> {
    fn visit_expr(&mut self, expr: &'t Expr<A>) {
        if let Expr::Variable { payload, .. } = expr {
            self.payloads.push(payload);
        }
        walk_expr(self, expr);
    }
}
