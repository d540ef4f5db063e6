//! Statement nodes and code blocks.

use crate::Vec;
use crate::decl::DeclSyntax;
use crate::expr::ExprSyntax;
use crate::printer::{Printer, Syntax};

/// A Swift statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StmtSyntax {
    /// `guard condition else { ... }`
    Guard {
        condition: ExprSyntax,
        body: CodeBlockSyntax,
    },
    If(IfExprSyntax),
    /// `return` or `return expression`
    Return(Option<ExprSyntax>),
    Throw(ExprSyntax),
    /// `defer { ... }`
    Defer(CodeBlockSyntax),
}

/// `if condition { ... } else { ... }`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IfExprSyntax {
    pub condition: ExprSyntax,
    pub body: CodeBlockSyntax,
    pub else_body: Option<CodeBlockSyntax>,
}

/// Anything that may appear on its own line inside a code block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CodeBlockItemSyntax {
    Decl(DeclSyntax),
    Stmt(StmtSyntax),
    Expr(ExprSyntax),
}

/// A braced sequence of items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeBlockSyntax {
    pub statements: Vec<CodeBlockItemSyntax>,
}

/// A bare sequence of items, one per line, without braces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct CodeBlockItemListSyntax {
    pub items: Vec<CodeBlockItemSyntax>,
}

impl CodeBlockSyntax {
    pub fn new(statements: Vec<CodeBlockItemSyntax>) -> Self {
        Self { statements }
    }
}

impl From<CodeBlockItemListSyntax> for CodeBlockSyntax {
    fn from(list: CodeBlockItemListSyntax) -> Self {
        Self {
            statements: list.items,
        }
    }
}

impl Syntax for StmtSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        match self {
            StmtSyntax::Guard { condition, body } => {
                printer.write("guard ");
                condition.print(printer);
                printer.write(" else ");
                body.print(printer);
            }
            StmtSyntax::If(if_expr) => if_expr.print(printer),
            StmtSyntax::Return(None) => printer.write("return"),
            StmtSyntax::Return(Some(expression)) => {
                printer.write("return ");
                expression.print(printer);
            }
            StmtSyntax::Throw(expression) => {
                printer.write("throw ");
                expression.print(printer);
            }
            StmtSyntax::Defer(body) => {
                printer.write("defer ");
                body.print(printer);
            }
        }
    }
}

impl Syntax for IfExprSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.write("if ");
        self.condition.print(printer);
        printer.write(" ");
        self.body.print(printer);
        if let Some(else_body) = &self.else_body {
            printer.write(" else ");
            else_body.print(printer);
        }
    }
}

impl Syntax for CodeBlockItemSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        match self {
            CodeBlockItemSyntax::Decl(decl) => decl.print(printer),
            CodeBlockItemSyntax::Stmt(stmt) => stmt.print(printer),
            CodeBlockItemSyntax::Expr(expr) => expr.print(printer),
        }
    }
}

impl Syntax for CodeBlockSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.block(&self.statements);
    }
}

impl Syntax for CodeBlockItemListSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                printer.newline();
            }
            item.print(printer);
        }
    }
}
