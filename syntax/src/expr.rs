//! Expression nodes.

use crate::printer::{Printer, Syntax};
use crate::stmt::CodeBlockItemSyntax;
use crate::{Box, String, ToString, Vec, format};

/// A Swift expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprSyntax {
    /// Integer literal; holds the token text (e.g. `42`, `-7`).
    IntegerLiteral(String),

    /// Floating-point literal; holds the token text (e.g. `3.0`, `1e300`).
    FloatLiteral(String),

    /// String literal; holds the unescaped content. Escaping happens when printed.
    StringLiteral(String),

    BooleanLiteral(bool),

    NilLiteral,

    /// Reference to a declaration by name.
    DeclReference(String),

    /// `condition ? then : else`
    Ternary {
        condition: Box<ExprSyntax>,
        then_expression: Box<ExprSyntax>,
        else_expression: Box<ExprSyntax>,
    },

    /// `left operator right`; the operator token is printed verbatim.
    Infix {
        left: Box<ExprSyntax>,
        operator: String,
        right: Box<ExprSyntax>,
    },

    /// `operator expression`, used for negated non-finite doubles.
    Prefix {
        operator: String,
        expression: Box<ExprSyntax>,
    },

    /// `base.declaration`
    MemberAccess {
        base: Box<ExprSyntax>,
        declaration: String,
    },

    FunctionCall(FunctionCallExprSyntax),

    Closure(ClosureExprSyntax),

    /// `[a, b, c]`
    Array(Vec<ArrayElementSyntax>),

    /// `(expression)`
    Parenthesized(Box<ExprSyntax>),
}

/// One argument of a call: `label: expression` or just `expression`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LabeledExprSyntax {
    pub label: Option<String>,
    pub expression: ExprSyntax,
    pub trailing_comma: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArrayElementSyntax {
    pub expression: ExprSyntax,
    pub trailing_comma: bool,
}

/// `callee(arguments) { trailing closure }`
///
/// The parentheses are dropped when there are no arguments but a trailing
/// closure is present (`items.forEach { ... }`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionCallExprSyntax {
    pub called_expression: Box<ExprSyntax>,
    pub arguments: Vec<LabeledExprSyntax>,
    pub trailing_closure: Option<ClosureExprSyntax>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClosureParameterSyntax {
    pub name: String,
    pub trailing_comma: bool,
}

/// A closure printed on a single line: `{ a, b in statement; statement }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClosureExprSyntax {
    pub parameters: Vec<ClosureParameterSyntax>,
    pub statements: Vec<CodeBlockItemSyntax>,
}

impl ExprSyntax {
    pub fn integer(value: i64) -> Self {
        ExprSyntax::IntegerLiteral(value.to_string())
    }

    /// Builds a literal for `value`.
    ///
    /// Finite values always keep a decimal point or exponent so Swift infers
    /// `Double`. Non-finite values have no literal form and become
    /// `Double.nan`, `Double.infinity` or `-Double.infinity`.
    pub fn float(value: f64) -> Self {
        if value.is_nan() {
            ExprSyntax::member(ExprSyntax::reference("Double"), "nan")
        } else if value.is_infinite() {
            let infinity = ExprSyntax::member(ExprSyntax::reference("Double"), "infinity");
            if value.is_sign_negative() {
                ExprSyntax::Prefix {
                    operator: "-".to_string(),
                    expression: Box::new(infinity),
                }
            } else {
                infinity
            }
        } else {
            ExprSyntax::FloatLiteral(format!("{value:?}"))
        }
    }

    pub fn string(value: impl Into<String>) -> Self {
        ExprSyntax::StringLiteral(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        ExprSyntax::BooleanLiteral(value)
    }

    pub fn nil() -> Self {
        ExprSyntax::NilLiteral
    }

    pub fn reference(name: impl Into<String>) -> Self {
        ExprSyntax::DeclReference(name.into())
    }

    pub fn ternary(condition: ExprSyntax, then_expression: ExprSyntax, else_expression: ExprSyntax) -> Self {
        ExprSyntax::Ternary {
            condition: Box::new(condition),
            then_expression: Box::new(then_expression),
            else_expression: Box::new(else_expression),
        }
    }

    pub fn infix(left: ExprSyntax, operator: impl Into<String>, right: ExprSyntax) -> Self {
        ExprSyntax::Infix {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    pub fn member(base: ExprSyntax, declaration: impl Into<String>) -> Self {
        ExprSyntax::MemberAccess {
            base: Box::new(base),
            declaration: declaration.into(),
        }
    }

    pub fn call(called_expression: ExprSyntax, arguments: Vec<LabeledExprSyntax>) -> Self {
        ExprSyntax::FunctionCall(FunctionCallExprSyntax {
            called_expression: Box::new(called_expression),
            arguments,
            trailing_closure: None,
        })
    }

    pub fn parenthesized(expression: ExprSyntax) -> Self {
        ExprSyntax::Parenthesized(Box::new(expression))
    }

    /// True for expressions whose text would bind differently when used as
    /// an operand of another operator without parentheses.
    pub fn is_compound(&self) -> bool {
        matches!(self, ExprSyntax::Infix { .. } | ExprSyntax::Ternary { .. })
    }

    /// True for expressions that need parentheses before a `.member` suffix.
    ///
    /// Besides compound expressions this covers prefix operators and negative
    /// numeric literals: `-1.magnitude` parses as `-(1.magnitude)`.
    pub fn needs_grouping_as_base(&self) -> bool {
        match self {
            ExprSyntax::IntegerLiteral(text) | ExprSyntax::FloatLiteral(text) => {
                text.starts_with('-')
            }
            ExprSyntax::Prefix { .. } | ExprSyntax::Closure(_) => true,
            other => other.is_compound(),
        }
    }

    /// True for expressions that need parentheses as an `if` or `guard`
    /// condition: an unparenthesized closure there is taken as the
    /// statement body, so `if xs.forEach { x in x } {` does not parse.
    ///
    /// Closures inside call arguments or array literals are already
    /// delimited and don't count.
    pub fn needs_grouping_as_condition(&self) -> bool {
        match self {
            ExprSyntax::Closure(_) => true,
            ExprSyntax::FunctionCall(call) => {
                call.trailing_closure.is_some()
                    || call.called_expression.needs_grouping_as_condition()
            }
            ExprSyntax::MemberAccess { base, .. } => base.needs_grouping_as_condition(),
            ExprSyntax::Prefix { expression, .. } => expression.needs_grouping_as_condition(),
            ExprSyntax::Infix { left, right, .. } => {
                left.needs_grouping_as_condition() || right.needs_grouping_as_condition()
            }
            ExprSyntax::Ternary {
                condition,
                then_expression,
                else_expression,
            } => {
                condition.needs_grouping_as_condition()
                    || then_expression.needs_grouping_as_condition()
                    || else_expression.needs_grouping_as_condition()
            }
            _ => false,
        }
    }
}

/// Writes `value` as the body of a Swift string literal.
fn write_escaped(printer: &mut Printer<'_>, value: &str) {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\0' => escaped.push_str("\\0"),
            c if c.is_control() => escaped.push_str(&format!("\\u{{{:x}}}", u32::from(c))),
            other => escaped.push(other),
        }
    }
    printer.write(&escaped);
}

impl Syntax for ExprSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        match self {
            ExprSyntax::IntegerLiteral(text) | ExprSyntax::FloatLiteral(text) => {
                printer.write(text)
            }
            ExprSyntax::StringLiteral(value) => {
                printer.write("\"");
                write_escaped(printer, value);
                printer.write("\"");
            }
            ExprSyntax::BooleanLiteral(true) => printer.write("true"),
            ExprSyntax::BooleanLiteral(false) => printer.write("false"),
            ExprSyntax::NilLiteral => printer.write("nil"),
            ExprSyntax::DeclReference(name) => printer.write(name),
            ExprSyntax::Ternary {
                condition,
                then_expression,
                else_expression,
            } => {
                condition.print(printer);
                printer.write(" ? ");
                then_expression.print(printer);
                printer.write(" : ");
                else_expression.print(printer);
            }
            ExprSyntax::Infix {
                left,
                operator,
                right,
            } => {
                left.print(printer);
                printer.write(" ");
                printer.write(operator);
                printer.write(" ");
                right.print(printer);
            }
            ExprSyntax::Prefix {
                operator,
                expression,
            } => {
                printer.write(operator);
                expression.print(printer);
            }
            ExprSyntax::MemberAccess { base, declaration } => {
                base.print(printer);
                printer.write(".");
                printer.write(declaration);
            }
            ExprSyntax::FunctionCall(call) => call.print(printer),
            ExprSyntax::Closure(closure) => closure.print(printer),
            ExprSyntax::Array(elements) => {
                printer.write("[");
                for element in elements {
                    element.expression.print(printer);
                    if element.trailing_comma {
                        printer.write(", ");
                    }
                }
                printer.write("]");
            }
            ExprSyntax::Parenthesized(inner) => {
                printer.write("(");
                inner.print(printer);
                printer.write(")");
            }
        }
    }
}

impl Syntax for LabeledExprSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        if let Some(label) = &self.label {
            printer.write(label);
            printer.write(": ");
        }
        self.expression.print(printer);
        if self.trailing_comma {
            printer.write(", ");
        }
    }
}

impl Syntax for FunctionCallExprSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        self.called_expression.print(printer);
        if !self.arguments.is_empty() || self.trailing_closure.is_none() {
            printer.write("(");
            for argument in &self.arguments {
                argument.print(printer);
            }
            printer.write(")");
        }
        if let Some(closure) = &self.trailing_closure {
            printer.write(" ");
            closure.print(printer);
        }
    }
}

impl Syntax for ClosureExprSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.write("{ ");
        if !self.parameters.is_empty() {
            for parameter in &self.parameters {
                printer.write(&parameter.name);
                if parameter.trailing_comma {
                    printer.write(", ");
                }
            }
            printer.write(" in ");
        }
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                printer.write("; ");
            }
            statement.print(printer);
        }
        if !self.statements.is_empty() {
            printer.write(" ");
        }
        printer.write("}");
    }
}
