//! Declaration nodes.

use crate::expr::ExprSyntax;
use crate::flags::{EffectSpecifiers, Modifiers};
use crate::printer::{Printer, Syntax};
use crate::stmt::CodeBlockSyntax;
use crate::{String, Vec};

/// A Swift declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclSyntax {
    Variable(VariableDeclSyntax),
    Function(FunctionDeclSyntax),
    Initializer(InitializerDeclSyntax),
    Extension(ExtensionDeclSyntax),
    Struct(StructDeclSyntax),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingSpecifier {
    Let,
    Var,
}

impl BindingSpecifier {
    pub fn keyword(self) -> &'static str {
        match self {
            BindingSpecifier::Let => "let",
            BindingSpecifier::Var => "var",
        }
    }
}

/// `modifiers let|var name: Type = initializer` or, with accessors,
/// `modifiers var name: Type { get { ... } set(value) { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariableDeclSyntax {
    pub modifiers: Modifiers,
    pub binding_specifier: BindingSpecifier,
    pub name: String,
    pub type_annotation: Option<String>,
    pub initializer: Option<ExprSyntax>,
    pub accessor_block: Option<AccessorBlockSyntax>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorBlockSyntax {
    pub accessors: Vec<AccessorDeclSyntax>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AccessorSpecifier {
    Get,
    Set,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AccessorDeclSyntax {
    pub specifier: AccessorSpecifier,
    /// Name bound to the incoming value, only meaningful for `set`.
    pub parameter: Option<String>,
    pub body: CodeBlockSyntax,
}

/// `label name: inout Type = default`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionParameterSyntax {
    pub external_label: Option<String>,
    pub name: String,
    pub ty: String,
    pub is_inout: bool,
    pub default_value: Option<String>,
    pub trailing_comma: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionDeclSyntax {
    pub modifiers: Modifiers,
    pub name: String,
    pub parameters: Vec<FunctionParameterSyntax>,
    pub effects: EffectSpecifiers,
    pub return_type: Option<String>,
    pub body: CodeBlockSyntax,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InitializerDeclSyntax {
    pub modifiers: Modifiers,
    pub parameters: Vec<FunctionParameterSyntax>,
    pub effects: EffectSpecifiers,
    pub body: CodeBlockSyntax,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InheritedTypeSyntax {
    pub name: String,
    pub trailing_comma: bool,
}

/// `: A, B`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InheritanceClauseSyntax {
    pub inherited_types: Vec<InheritedTypeSyntax>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct MemberBlockSyntax {
    pub members: Vec<DeclSyntax>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionDeclSyntax {
    pub extended_type: String,
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    pub member_block: MemberBlockSyntax,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructDeclSyntax {
    pub modifiers: Modifiers,
    pub name: String,
    pub inheritance_clause: Option<InheritanceClauseSyntax>,
    pub member_block: MemberBlockSyntax,
}

fn print_parameters(printer: &mut Printer<'_>, parameters: &[FunctionParameterSyntax]) {
    printer.write("(");
    for parameter in parameters {
        parameter.print(printer);
    }
    printer.write(")");
}

impl Syntax for DeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        match self {
            DeclSyntax::Variable(decl) => decl.print(printer),
            DeclSyntax::Function(decl) => decl.print(printer),
            DeclSyntax::Initializer(decl) => decl.print(printer),
            DeclSyntax::Extension(decl) => decl.print(printer),
            DeclSyntax::Struct(decl) => decl.print(printer),
        }
    }
}

impl Syntax for VariableDeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        self.modifiers.print(printer);
        printer.write(self.binding_specifier.keyword());
        printer.write(" ");
        printer.write(&self.name);
        if let Some(ty) = &self.type_annotation {
            printer.write(": ");
            printer.write(ty);
        }
        if let Some(initializer) = &self.initializer {
            printer.write(" = ");
            initializer.print(printer);
        }
        if let Some(accessors) = &self.accessor_block {
            printer.write(" ");
            accessors.print(printer);
        }
    }
}

impl Syntax for AccessorBlockSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.block(&self.accessors);
    }
}

impl Syntax for AccessorDeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.write(match self.specifier {
            AccessorSpecifier::Get => "get",
            AccessorSpecifier::Set => "set",
        });
        if let Some(parameter) = &self.parameter {
            printer.write("(");
            printer.write(parameter);
            printer.write(")");
        }
        printer.write(" ");
        self.body.print(printer);
    }
}

impl Syntax for FunctionParameterSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        if let Some(label) = &self.external_label {
            printer.write(label);
            printer.write(" ");
        }
        printer.write(&self.name);
        printer.write(": ");
        if self.is_inout {
            printer.write("inout ");
        }
        printer.write(&self.ty);
        if let Some(default_value) = &self.default_value {
            printer.write(" = ");
            printer.write(default_value);
        }
        if self.trailing_comma {
            printer.write(", ");
        }
    }
}

impl Syntax for FunctionDeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        self.modifiers.print(printer);
        printer.write("func ");
        printer.write(&self.name);
        print_parameters(printer, &self.parameters);
        self.effects.print(printer);
        if let Some(return_type) = &self.return_type {
            printer.write(" -> ");
            printer.write(return_type);
        }
        printer.write(" ");
        self.body.print(printer);
    }
}

impl Syntax for InitializerDeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        self.modifiers.print(printer);
        printer.write("init");
        print_parameters(printer, &self.parameters);
        self.effects.print(printer);
        printer.write(" ");
        self.body.print(printer);
    }
}

impl Syntax for InheritanceClauseSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.write(": ");
        for inherited in &self.inherited_types {
            printer.write(&inherited.name);
            if inherited.trailing_comma {
                printer.write(", ");
            }
        }
    }
}

impl Syntax for MemberBlockSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.block(&self.members);
    }
}

impl Syntax for ExtensionDeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        printer.write("extension ");
        printer.write(&self.extended_type);
        if let Some(clause) = &self.inheritance_clause {
            clause.print(printer);
        }
        printer.write(" ");
        self.member_block.print(printer);
    }
}

impl Syntax for StructDeclSyntax {
    fn print(&self, printer: &mut Printer<'_>) {
        self.modifiers.print(printer);
        printer.write("struct ");
        printer.write(&self.name);
        if let Some(clause) = &self.inheritance_clause {
            clause.print(printer);
        }
        printer.write(" ");
        self.member_block.print(printer);
    }
}
