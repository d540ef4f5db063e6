//! The statement tier.

use crate::expr::Expr;
use crate::visit::PayloadCollector;
use crate::{String, Vec};

/// A statement tree carrying payload `A` inside its expressions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Stmt<A> {
    /// `let name: ty = initializer`
    Let {
        name: String,
        ty: Option<String>,
        initializer: Expr<A>,
    },

    /// `var name: ty = initializer`
    Var {
        name: String,
        ty: Option<String>,
        initializer: Expr<A>,
    },

    Guard {
        condition: Expr<A>,
        else_body: Vec<Stmt<A>>,
    },

    /// `else_body: None` (no else clause) differs from `Some(vec![])`
    /// (an empty else clause).
    If {
        condition: Expr<A>,
        then_body: Vec<Stmt<A>>,
        else_body: Option<Vec<Stmt<A>>>,
    },

    Return(Option<Expr<A>>),

    Throw(Expr<A>),

    Defer(Vec<Stmt<A>>),

    Expression(Expr<A>),
}

pub(crate) fn map_block<A, B, F: FnMut(A) -> B>(body: Vec<Stmt<A>>, f: &mut F) -> Vec<Stmt<B>> {
    body.into_iter().map(|stmt| stmt.map_with(f)).collect()
}

pub(crate) fn map_block_ref<A, B, F: FnMut(&A) -> B>(body: &[Stmt<A>], f: &mut F) -> Vec<Stmt<B>> {
    body.iter().map(|stmt| stmt.map_ref_with(f)).collect()
}

impl<A> Stmt<A> {
    /// Transforms every payload with `f`, keeping everything else as is.
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Stmt<B> {
        self.map_with(&mut f)
    }

    /// Like [`Stmt::map`], but borrows the tree and hands `f` references.
    pub fn map_ref<B>(&self, mut f: impl FnMut(&A) -> B) -> Stmt<B> {
        self.map_ref_with(&mut f)
    }

    /// Payloads of all variable references, in pre-order.
    pub fn payloads(&self) -> Vec<&A> {
        let mut collector = PayloadCollector::default();
        crate::visit::Visitor::visit_stmt(&mut collector, self);
        collector.payloads
    }

    pub(crate) fn map_with<B, F: FnMut(A) -> B>(self, f: &mut F) -> Stmt<B> {
        match self {
            Stmt::Let {
                name,
                ty,
                initializer,
            } => Stmt::Let {
                name,
                ty,
                initializer: initializer.map_with(f),
            },
            Stmt::Var {
                name,
                ty,
                initializer,
            } => Stmt::Var {
                name,
                ty,
                initializer: initializer.map_with(f),
            },
            Stmt::Guard {
                condition,
                else_body,
            } => {
                let condition = condition.map_with(f);
                Stmt::Guard {
                    condition,
                    else_body: map_block(else_body, f),
                }
            }
            Stmt::If {
                condition,
                then_body,
                else_body,
            } => {
                let condition = condition.map_with(f);
                let then_body = map_block(then_body, f);
                let else_body = else_body.map(|body| map_block(body, f));
                Stmt::If {
                    condition,
                    then_body,
                    else_body,
                }
            }
            Stmt::Return(value) => Stmt::Return(value.map(|e| e.map_with(f))),
            Stmt::Throw(error) => Stmt::Throw(error.map_with(f)),
            Stmt::Defer(body) => Stmt::Defer(map_block(body, f)),
            Stmt::Expression(expr) => Stmt::Expression(expr.map_with(f)),
        }
    }

    pub(crate) fn map_ref_with<B, F: FnMut(&A) -> B>(&self, f: &mut F) -> Stmt<B> {
        match self {
            Stmt::Let {
                name,
                ty,
                initializer,
            } => Stmt::Let {
                name: name.clone(),
                ty: ty.clone(),
                initializer: initializer.map_ref_with(f),
            },
            Stmt::Var {
                name,
                ty,
                initializer,
            } => Stmt::Var {
                name: name.clone(),
                ty: ty.clone(),
                initializer: initializer.map_ref_with(f),
            },
            Stmt::Guard {
                condition,
                else_body,
            } => {
                let condition = condition.map_ref_with(f);
                Stmt::Guard {
                    condition,
                    else_body: map_block_ref(else_body, f),
                }
            }
            Stmt::If {
                condition,
                then_body,
                else_body,
            } => {
                let condition = condition.map_ref_with(f);
                let then_body = map_block_ref(then_body, f);
                let else_body = else_body.as_deref().map(|body| map_block_ref(body, f));
                Stmt::If {
                    condition,
                    then_body,
                    else_body,
                }
            }
            Stmt::Return(value) => Stmt::Return(value.as_ref().map(|e| e.map_ref_with(f))),
            Stmt::Throw(error) => Stmt::Throw(error.map_ref_with(f)),
            Stmt::Defer(body) => Stmt::Defer(map_block_ref(body, f)),
            Stmt::Expression(expr) => Stmt::Expression(expr.map_ref_with(f)),
        }
    }
}

impl<A> From<Expr<A>> for Stmt<A> {
    fn from(expr: Expr<A>) -> Self {
        Stmt::Expression(expr)
    }
}
