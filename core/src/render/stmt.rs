use super::Renderer;
use crate::expr::Expr;
use crate::stmt::Stmt;
use crate::{String, ToString};
use synthkit_syntax::{
    BindingSpecifier, CodeBlockItemListSyntax, CodeBlockItemSyntax, CodeBlockSyntax, DeclSyntax,
    ExprSyntax, IfExprSyntax, Modifiers, StmtSyntax, VariableDeclSyntax,
};

impl Renderer {
    pub fn stmt<A>(&self, stmt: &Stmt<A>) -> CodeBlockItemSyntax {
        match stmt {
            Stmt::Let {
                name,
                ty,
                initializer,
            } => self.binding(BindingSpecifier::Let, name, ty, initializer),
            Stmt::Var {
                name,
                ty,
                initializer,
            } => self.binding(BindingSpecifier::Var, name, ty, initializer),
            Stmt::Guard {
                condition,
                else_body,
            } => CodeBlockItemSyntax::Stmt(StmtSyntax::Guard {
                condition: self.condition(condition),
                body: self.code_block(else_body),
            }),
            Stmt::If {
                condition,
                then_body,
                else_body,
            } => CodeBlockItemSyntax::Stmt(StmtSyntax::If(IfExprSyntax {
                condition: self.condition(condition),
                body: self.code_block(then_body),
                else_body: else_body.as_deref().map(|body| self.code_block(body)),
            })),
            Stmt::Return(value) => CodeBlockItemSyntax::Stmt(StmtSyntax::Return(
                value.as_ref().map(|value| self.expr(value)),
            )),
            Stmt::Throw(error) => CodeBlockItemSyntax::Stmt(StmtSyntax::Throw(self.expr(error))),
            Stmt::Defer(body) => CodeBlockItemSyntax::Stmt(StmtSyntax::Defer(self.code_block(body))),
            Stmt::Expression(expr) => CodeBlockItemSyntax::Expr(self.expr(expr)),
        }
    }

    /// Renders a statement sequence as a bare item list, in order.
    pub fn stmts<A>(&self, stmts: &[Stmt<A>]) -> CodeBlockItemListSyntax {
        CodeBlockItemListSyntax {
            items: stmts.iter().map(|stmt| self.stmt(stmt)).collect(),
        }
    }

    pub(crate) fn code_block<A>(&self, stmts: &[Stmt<A>]) -> CodeBlockSyntax {
        self.stmts(stmts).into()
    }

    fn condition<A>(&self, condition: &Expr<A>) -> ExprSyntax {
        let rendered = self.expr(condition);
        if rendered.needs_grouping_as_condition() {
            ExprSyntax::parenthesized(rendered)
        } else {
            rendered
        }
    }

    fn binding<A>(
        &self,
        specifier: BindingSpecifier,
        name: &str,
        ty: &Option<String>,
        initializer: &Expr<A>,
    ) -> CodeBlockItemSyntax {
        CodeBlockItemSyntax::Decl(DeclSyntax::Variable(VariableDeclSyntax {
            modifiers: Modifiers::empty(),
            binding_specifier: specifier,
            name: name.to_string(),
            type_annotation: ty.clone(),
            initializer: Some(self.expr(initializer)),
            accessor_block: None,
        }))
    }
}
