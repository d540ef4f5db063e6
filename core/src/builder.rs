//! Convenience constructors layered on top of the tree types.
//!
//! Nothing here adds behavior: every function builds the same value a caller
//! could write out with the public enum variants and struct fields.

use crate::decl::{
    AccessLevel, ComputedPropertySignature, Decl, ExtensionSignature, FunctionSignature,
    InitializerSignature, ParameterSignature, PropertySignature, SetterSignature, StructSignature,
};
use crate::expr::{Argument, Expr};
use crate::literal::Literal;
use crate::stmt::Stmt;
use crate::{Box, String, Vec};

impl<A> Expr<A> {
    pub fn int(value: i64) -> Self {
        Expr::Literal(Literal::Integer(value))
    }

    pub fn double(value: f64) -> Self {
        Expr::Literal(Literal::Double(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Literal(Literal::String(value.into()))
    }

    pub fn boolean(value: bool) -> Self {
        Expr::Literal(Literal::Boolean(value))
    }

    pub fn nil() -> Self {
        Expr::Literal(Literal::Nil)
    }

    pub fn variable(name: impl Into<String>, payload: A) -> Self {
        Expr::Variable {
            name: name.into(),
            payload,
        }
    }

    pub fn conditional(condition: Expr<A>, then_branch: Expr<A>, else_branch: Expr<A>) -> Self {
        Expr::Conditional {
            condition: Box::new(condition),
            then_branch: Box::new(then_branch),
            else_branch: Box::new(else_branch),
        }
    }

    pub fn for_each(variable: impl Into<String>, collection: Expr<A>, body: Expr<A>) -> Self {
        Expr::Loop {
            variable: variable.into(),
            collection: Box::new(collection),
            body: Box::new(body),
        }
    }

    pub fn call(name: impl Into<String>, arguments: Vec<Argument<A>>) -> Self {
        Expr::FunctionCall {
            name: name.into(),
            arguments,
        }
    }

    /// `self.method(arguments)`
    pub fn method(self, method: impl Into<String>, arguments: Vec<Argument<A>>) -> Self {
        Expr::MethodCall {
            base: Box::new(self),
            method: method.into(),
            arguments,
        }
    }

    pub fn binary(left: Expr<A>, operator: impl Into<String>, right: Expr<A>) -> Self {
        Expr::BinaryOperation {
            left: Box::new(left),
            operator: operator.into(),
            right: Box::new(right),
        }
    }

    /// `self.property`
    pub fn property(self, property: impl Into<String>) -> Self {
        Expr::PropertyAccess {
            base: Box::new(self),
            property: property.into(),
        }
    }

    pub fn inline_declaration(
        name: impl Into<String>,
        ty: Option<String>,
        initializer: Expr<A>,
    ) -> Self {
        Expr::InlineDeclaration {
            name: name.into(),
            ty,
            initializer: Box::new(initializer),
        }
    }

    pub fn array(elements: Vec<Expr<A>>) -> Self {
        Expr::ArrayLiteral(elements)
    }
}

impl<A> From<Expr<A>> for Argument<A> {
    fn from(value: Expr<A>) -> Self {
        Argument::new(value)
    }
}

impl<A> Stmt<A> {
    pub fn let_binding(name: impl Into<String>, ty: Option<String>, initializer: Expr<A>) -> Self {
        Stmt::Let {
            name: name.into(),
            ty,
            initializer,
        }
    }

    pub fn var_binding(name: impl Into<String>, ty: Option<String>, initializer: Expr<A>) -> Self {
        Stmt::Var {
            name: name.into(),
            ty,
            initializer,
        }
    }

    pub fn guard(condition: Expr<A>, else_body: Vec<Stmt<A>>) -> Self {
        Stmt::Guard {
            condition,
            else_body,
        }
    }

    pub fn if_then(condition: Expr<A>, then_body: Vec<Stmt<A>>) -> Self {
        Stmt::If {
            condition,
            then_body,
            else_body: None,
        }
    }

    pub fn if_else(condition: Expr<A>, then_body: Vec<Stmt<A>>, else_body: Vec<Stmt<A>>) -> Self {
        Stmt::If {
            condition,
            then_body,
            else_body: Some(else_body),
        }
    }

    pub fn return_value(value: Expr<A>) -> Self {
        Stmt::Return(Some(value))
    }
}

impl ParameterSignature {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            external_label: None,
            name: name.into(),
            ty: ty.into(),
            is_inout: false,
            default_value: None,
        }
    }

    /// Sets the argument label; pass `"_"` to suppress it at call sites.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.external_label = Some(label.into());
        self
    }

    pub fn inout(mut self) -> Self {
        self.is_inout = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }
}

impl<A> FunctionSignature<A> {
    /// An internal, synchronous, non-throwing function with no parameters,
    /// no return type and an empty body.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            access_level: AccessLevel::Internal,
            name: name.into(),
            parameters: Vec::new(),
            is_async: false,
            can_throw: false,
            return_type: None,
            body: Vec::new(),
        }
    }

    pub fn with_access(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterSignature) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_async(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn with_throws(mut self) -> Self {
        self.can_throw = true;
        self
    }

    pub fn with_return_type(mut self, ty: impl Into<String>) -> Self {
        self.return_type = Some(ty.into());
        self
    }

    pub fn with_body(mut self, body: Vec<Stmt<A>>) -> Self {
        self.body = body;
        self
    }
}

impl<A> PropertySignature<A> {
    /// An internal, non-static `let` with the given type and no initializer.
    pub fn constant(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            access_level: AccessLevel::Internal,
            name: name.into(),
            ty: Some(ty.into()),
            is_static: false,
            is_let: true,
            initializer: None,
        }
    }

    /// An internal, non-static `var` with the given type and no initializer.
    pub fn variable(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            is_let: false,
            ..Self::constant(name, ty)
        }
    }

    pub fn with_access(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_initializer(mut self, initializer: Expr<A>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Drops the type annotation, leaving Swift to infer it from the initializer.
    pub fn inferred(mut self) -> Self {
        self.ty = None;
        self
    }
}

impl<A> ComputedPropertySignature<A> {
    pub fn new(name: impl Into<String>, ty: impl Into<String>, getter: Vec<Stmt<A>>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_static: false,
            getter,
            setter: None,
        }
    }

    pub fn with_static(mut self) -> Self {
        self.is_static = true;
        self
    }

    pub fn with_setter(mut self, parameter_name: impl Into<String>, body: Vec<Stmt<A>>) -> Self {
        self.setter = Some(SetterSignature {
            parameter_name: parameter_name.into(),
            body,
        });
        self
    }
}

impl<A> StructSignature<A> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            access_level: AccessLevel::Internal,
            name: name.into(),
            conformances: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn with_access(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn conforming_to(mut self, conformance: impl Into<String>) -> Self {
        self.conformances.push(conformance.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<Decl<A>>) -> Self {
        self.members.push(member.into());
        self
    }
}

impl<A> ExtensionSignature<A> {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            conformances: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn conforming_to(mut self, conformance: impl Into<String>) -> Self {
        self.conformances.push(conformance.into());
        self
    }

    pub fn with_member(mut self, member: impl Into<Decl<A>>) -> Self {
        self.members.push(member.into());
        self
    }
}

impl<A> InitializerSignature<A> {
    pub fn new(body: Vec<Stmt<A>>) -> Self {
        Self {
            access_level: AccessLevel::Internal,
            parameters: Vec::new(),
            can_throw: false,
            body,
        }
    }

    pub fn with_access(mut self, access_level: AccessLevel) -> Self {
        self.access_level = access_level;
        self
    }

    pub fn with_parameter(mut self, parameter: ParameterSignature) -> Self {
        self.parameters.push(parameter);
        self
    }

    pub fn with_throws(mut self) -> Self {
        self.can_throw = true;
        self
    }
}

macro_rules! impl_into_decl {
    ($($signature:ident => $variant:ident),* $(,)?) => {
        $(
            impl<A> From<$signature<A>> for Decl<A> {
                fn from(signature: $signature<A>) -> Self {
                    Decl::$variant(signature)
                }
            }
        )*
    };
}

impl_into_decl!(
    FunctionSignature => Function,
    PropertySignature => Property,
    ComputedPropertySignature => ComputedProperty,
    ExtensionSignature => Extension,
    StructSignature => Struct,
    InitializerSignature => Initializer,
);
