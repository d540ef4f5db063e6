//! The expression tier.

use crate::literal::Literal;
use crate::visit::PayloadCollector;
use crate::{Box, String, Vec};

/// An expression tree carrying payload `A` on its variable references.
///
/// Equality and hashing are structural: same variant, equal fields in
/// declaration order, equal children. Argument lists compare positionally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr<A> {
    Literal(Literal),

    /// Reference to a name. The only node that carries a payload.
    Variable { name: String, payload: A },

    /// `condition ? then_branch : else_branch`
    Conditional {
        condition: Box<Expr<A>>,
        then_branch: Box<Expr<A>>,
        else_branch: Box<Expr<A>>,
    },

    /// Iteration over `collection`, binding each element to `variable`.
    ///
    /// Swift has no for-in expression, so this renders as
    /// `collection.forEach { variable in body }`.
    Loop {
        variable: String,
        collection: Box<Expr<A>>,
        body: Box<Expr<A>>,
    },

    FunctionCall {
        name: String,
        arguments: Vec<Argument<A>>,
    },

    MethodCall {
        base: Box<Expr<A>>,
        method: String,
        arguments: Vec<Argument<A>>,
    },

    /// Infix operation; `operator` is emitted verbatim.
    BinaryOperation {
        left: Box<Expr<A>>,
        operator: String,
        right: Box<Expr<A>>,
    },

    PropertyAccess {
        base: Box<Expr<A>>,
        property: String,
    },

    /// A named, optionally typed value in expression position.
    ///
    /// Only the initializer survives rendering; use `Stmt::Let`/`Stmt::Var`
    /// for a real declaration.
    InlineDeclaration {
        name: String,
        ty: Option<String>,
        initializer: Box<Expr<A>>,
    },

    ArrayLiteral(Vec<Expr<A>>),
}

/// A call argument with an optional label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument<A> {
    pub label: Option<String>,
    pub value: Expr<A>,
}

impl<A> Argument<A> {
    pub fn new(value: Expr<A>) -> Self {
        Self { label: None, value }
    }

    pub fn labeled(label: impl Into<String>, value: Expr<A>) -> Self {
        Self {
            label: Some(label.into()),
            value,
        }
    }

    pub(crate) fn map_with<B, F: FnMut(A) -> B>(self, f: &mut F) -> Argument<B> {
        Argument {
            label: self.label,
            value: self.value.map_with(f),
        }
    }

    pub(crate) fn map_ref_with<B, F: FnMut(&A) -> B>(&self, f: &mut F) -> Argument<B> {
        Argument {
            label: self.label.clone(),
            value: self.value.map_ref_with(f),
        }
    }
}

fn map_boxed<A, B, F: FnMut(A) -> B>(expr: Box<Expr<A>>, f: &mut F) -> Box<Expr<B>> {
    Box::new((*expr).map_with(f))
}

fn map_boxed_ref<A, B, F: FnMut(&A) -> B>(expr: &Expr<A>, f: &mut F) -> Box<Expr<B>> {
    Box::new(expr.map_ref_with(f))
}

impl<A> Expr<A> {
    /// Transforms every payload with `f`, keeping everything else as is.
    ///
    /// Payloads are visited in pre-order, left to right. `map(|x| x)` yields
    /// a tree equal to the original, and `map(f).map(g)` equals
    /// `map(|x| g(f(x)))`.
    ///
    /// # Example
    ///
    /// ```
    /// use synthkit_core::Expr;
    ///
    /// let x: Expr<i32> = Expr::variable("x", 5);
    /// assert_eq!(x.map(|n| n * 2), Expr::variable("x", 10));
    /// ```
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Expr<B> {
        self.map_with(&mut f)
    }

    /// Like [`Expr::map`], but borrows the tree and hands `f` references.
    pub fn map_ref<B>(&self, mut f: impl FnMut(&A) -> B) -> Expr<B> {
        self.map_ref_with(&mut f)
    }

    /// Payloads of all variable references, in pre-order.
    pub fn payloads(&self) -> Vec<&A> {
        let mut collector = PayloadCollector::default();
        crate::visit::Visitor::visit_expr(&mut collector, self);
        collector.payloads
    }

    pub(crate) fn map_with<B, F: FnMut(A) -> B>(self, f: &mut F) -> Expr<B> {
        match self {
            Expr::Literal(literal) => Expr::Literal(literal),
            Expr::Variable { name, payload } => Expr::Variable {
                name,
                payload: f(payload),
            },
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = map_boxed(condition, f);
                let then_branch = map_boxed(then_branch, f);
                let else_branch = map_boxed(else_branch, f);
                Expr::Conditional {
                    condition,
                    then_branch,
                    else_branch,
                }
            }
            Expr::Loop {
                variable,
                collection,
                body,
            } => {
                let collection = map_boxed(collection, f);
                let body = map_boxed(body, f);
                Expr::Loop {
                    variable,
                    collection,
                    body,
                }
            }
            Expr::FunctionCall { name, arguments } => Expr::FunctionCall {
                name,
                arguments: arguments.into_iter().map(|a| a.map_with(f)).collect(),
            },
            Expr::MethodCall {
                base,
                method,
                arguments,
            } => {
                let base = map_boxed(base, f);
                Expr::MethodCall {
                    base,
                    method,
                    arguments: arguments.into_iter().map(|a| a.map_with(f)).collect(),
                }
            }
            Expr::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left = map_boxed(left, f);
                let right = map_boxed(right, f);
                Expr::BinaryOperation {
                    left,
                    operator,
                    right,
                }
            }
            Expr::PropertyAccess { base, property } => Expr::PropertyAccess {
                base: map_boxed(base, f),
                property,
            },
            Expr::InlineDeclaration {
                name,
                ty,
                initializer,
            } => Expr::InlineDeclaration {
                name,
                ty,
                initializer: map_boxed(initializer, f),
            },
            Expr::ArrayLiteral(elements) => {
                Expr::ArrayLiteral(elements.into_iter().map(|e| e.map_with(f)).collect())
            }
        }
    }

    pub(crate) fn map_ref_with<B, F: FnMut(&A) -> B>(&self, f: &mut F) -> Expr<B> {
        match self {
            Expr::Literal(literal) => Expr::Literal(literal.clone()),
            Expr::Variable { name, payload } => Expr::Variable {
                name: name.clone(),
                payload: f(payload),
            },
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => {
                let condition = map_boxed_ref(condition, f);
                let then_branch = map_boxed_ref(then_branch, f);
                let else_branch = map_boxed_ref(else_branch, f);
                Expr::Conditional {
                    condition,
                    then_branch,
                    else_branch,
                }
            }
            Expr::Loop {
                variable,
                collection,
                body,
            } => {
                let collection = map_boxed_ref(collection, f);
                let body = map_boxed_ref(body, f);
                Expr::Loop {
                    variable: variable.clone(),
                    collection,
                    body,
                }
            }
            Expr::FunctionCall { name, arguments } => Expr::FunctionCall {
                name: name.clone(),
                arguments: arguments.iter().map(|a| a.map_ref_with(f)).collect(),
            },
            Expr::MethodCall {
                base,
                method,
                arguments,
            } => {
                let base = map_boxed_ref(base, f);
                Expr::MethodCall {
                    base,
                    method: method.clone(),
                    arguments: arguments.iter().map(|a| a.map_ref_with(f)).collect(),
                }
            }
            Expr::BinaryOperation {
                left,
                operator,
                right,
            } => {
                let left = map_boxed_ref(left, f);
                let right = map_boxed_ref(right, f);
                Expr::BinaryOperation {
                    left,
                    operator: operator.clone(),
                    right,
                }
            }
            Expr::PropertyAccess { base, property } => Expr::PropertyAccess {
                base: map_boxed_ref(base, f),
                property: property.clone(),
            },
            Expr::InlineDeclaration {
                name,
                ty,
                initializer,
            } => Expr::InlineDeclaration {
                name: name.clone(),
                ty: ty.clone(),
                initializer: map_boxed_ref(initializer, f),
            },
            Expr::ArrayLiteral(elements) => {
                Expr::ArrayLiteral(elements.iter().map(|e| e.map_ref_with(f)).collect())
            }
        }
    }
}

impl<A> From<Literal> for Expr<A> {
    fn from(literal: Literal) -> Self {
        Expr::Literal(literal)
    }
}
