use super::{Renderer, comma_separated};
use crate::expr::{Argument, Expr};
use crate::literal::Literal;
use crate::{Box, ToString, vec};
use synthkit_syntax::{
    ArrayElementSyntax, ClosureExprSyntax, ClosureParameterSyntax, CodeBlockItemSyntax,
    ExprSyntax, FunctionCallExprSyntax, LabeledExprSyntax,
};

impl Renderer {
    pub fn literal(&self, literal: &Literal) -> ExprSyntax {
        match literal {
            Literal::Integer(value) => ExprSyntax::integer(*value),
            Literal::Double(value) => ExprSyntax::float(*value),
            Literal::String(value) => ExprSyntax::string(value.as_str()),
            Literal::Boolean(value) => ExprSyntax::boolean(*value),
            Literal::Nil => ExprSyntax::nil(),
        }
    }

    pub fn expr<A>(&self, expr: &Expr<A>) -> ExprSyntax {
        match expr {
            Expr::Literal(literal) => self.literal(literal),
            Expr::Variable { name, .. } => ExprSyntax::reference(name.as_str()),
            Expr::Conditional {
                condition,
                then_branch,
                else_branch,
            } => ExprSyntax::ternary(
                self.operand(condition),
                self.operand(then_branch),
                self.operand(else_branch),
            ),
            Expr::Loop {
                variable,
                collection,
                body,
            } => {
                tracing::trace!(variable = %variable, "rendering loop as forEach call");
                ExprSyntax::FunctionCall(FunctionCallExprSyntax {
                    called_expression: Box::new(ExprSyntax::member(
                        self.base(collection),
                        "forEach",
                    )),
                    arguments: vec![],
                    trailing_closure: Some(ClosureExprSyntax {
                        parameters: vec![ClosureParameterSyntax {
                            name: variable.to_string(),
                            trailing_comma: false,
                        }],
                        statements: vec![CodeBlockItemSyntax::Expr(self.expr(body))],
                    }),
                })
            }
            Expr::FunctionCall { name, arguments } => ExprSyntax::call(
                ExprSyntax::reference(name.as_str()),
                self.arguments(arguments),
            ),
            Expr::MethodCall {
                base,
                method,
                arguments,
            } => ExprSyntax::call(
                ExprSyntax::member(self.base(base), method.as_str()),
                self.arguments(arguments),
            ),
            Expr::BinaryOperation {
                left,
                operator,
                right,
            } => ExprSyntax::infix(self.operand(left), operator.as_str(), self.operand(right)),
            Expr::PropertyAccess { base, property } => {
                ExprSyntax::member(self.base(base), property.as_str())
            }
            Expr::InlineDeclaration {
                name, initializer, ..
            } => {
                tracing::trace!(name = %name, "inline declaration rendered as its initializer");
                self.expr(initializer)
            }
            Expr::ArrayLiteral(elements) => {
                ExprSyntax::Array(comma_separated(elements, |element, trailing_comma| {
                    ArrayElementSyntax {
                        expression: self.expr(element),
                        trailing_comma,
                    }
                }))
            }
        }
    }

    fn arguments<A>(&self, arguments: &[Argument<A>]) -> crate::Vec<LabeledExprSyntax> {
        comma_separated(arguments, |argument, trailing_comma| LabeledExprSyntax {
            label: argument.label.clone(),
            expression: self.expr(&argument.value),
            trailing_comma,
        })
    }

    /// Renders an operand of an infix or ternary expression, grouping
    /// nested compound expressions so their structure survives as text.
    fn operand<A>(&self, expr: &Expr<A>) -> ExprSyntax {
        let rendered = self.expr(expr);
        if rendered.is_compound() {
            ExprSyntax::parenthesized(rendered)
        } else {
            rendered
        }
    }

    /// Renders the base of a member access or method call.
    fn base<A>(&self, expr: &Expr<A>) -> ExprSyntax {
        let rendered = self.expr(expr);
        if rendered.needs_grouping_as_base() {
            ExprSyntax::parenthesized(rendered)
        } else {
            rendered
        }
    }
}
