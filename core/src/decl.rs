//! The declaration tier and its signature records.

use crate::expr::Expr;
use crate::stmt::{Stmt, map_block, map_block_ref};
use crate::visit::PayloadCollector;
use crate::{String, Vec};

/// Swift access level of a declaration.
///
/// `Internal` is Swift's implicit default and renders without a modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AccessLevel {
    Public,
    #[default]
    Internal,
    FilePrivate,
    Private,
}

/// A declaration tree carrying payload `A` inside its bodies.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decl<A> {
    Function(FunctionSignature<A>),
    Property(PropertySignature<A>),
    ComputedProperty(ComputedPropertySignature<A>),
    Extension(ExtensionSignature<A>),
    Struct(StructSignature<A>),
    Initializer(InitializerSignature<A>),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSignature<A> {
    pub access_level: AccessLevel,
    pub name: String,
    pub parameters: Vec<ParameterSignature>,
    pub is_async: bool,
    pub can_throw: bool,
    pub return_type: Option<String>,
    pub body: Vec<Stmt<A>>,
}

/// One function or initializer parameter.
///
/// `default_value` is Swift source text and is emitted verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParameterSignature {
    pub external_label: Option<String>,
    pub name: String,
    pub ty: String,
    pub is_inout: bool,
    pub default_value: Option<String>,
}

/// A stored property.
///
/// Nothing stops `ty` and `initializer` from both being `None`; such a
/// property renders as `var name`, which Swift rejects. See
/// [`crate::validate`] for an opt-in check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertySignature<A> {
    pub access_level: AccessLevel,
    pub name: String,
    pub ty: Option<String>,
    pub is_static: bool,
    pub is_let: bool,
    pub initializer: Option<Expr<A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComputedPropertySignature<A> {
    pub name: String,
    pub ty: String,
    pub is_static: bool,
    pub getter: Vec<Stmt<A>>,
    pub setter: Option<SetterSignature<A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SetterSignature<A> {
    pub parameter_name: String,
    pub body: Vec<Stmt<A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ExtensionSignature<A> {
    pub type_name: String,
    pub conformances: Vec<String>,
    pub members: Vec<Decl<A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructSignature<A> {
    pub access_level: AccessLevel,
    pub name: String,
    pub conformances: Vec<String>,
    pub members: Vec<Decl<A>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InitializerSignature<A> {
    pub access_level: AccessLevel,
    pub parameters: Vec<ParameterSignature>,
    pub can_throw: bool,
    pub body: Vec<Stmt<A>>,
}

fn map_members<A, B, F>(members: Vec<Decl<A>>, f: &mut F) -> Vec<Decl<B>>
where
    B: Send + Sync,
    F: FnMut(A) -> B,
{
    members.into_iter().map(|member| member.map_with(f)).collect()
}

fn map_members_ref<A, B, F>(members: &[Decl<A>], f: &mut F) -> Vec<Decl<B>>
where
    B: Send + Sync,
    F: FnMut(&A) -> B,
{
    members.iter().map(|member| member.map_ref_with(f)).collect()
}

impl<A> Decl<A> {
    /// Transforms every payload with `f`, keeping everything else as is.
    ///
    /// Declarations are the unit code-generation hosts hand across expansion
    /// contexts, so the resulting payload must be `Send + Sync`.
    pub fn map<B>(self, mut f: impl FnMut(A) -> B) -> Decl<B>
    where
        B: Send + Sync,
    {
        self.map_with(&mut f)
    }

    /// Like [`Decl::map`], but borrows the tree and hands `f` references.
    pub fn map_ref<B>(&self, mut f: impl FnMut(&A) -> B) -> Decl<B>
    where
        B: Send + Sync,
    {
        self.map_ref_with(&mut f)
    }

    /// Payloads of all variable references, in pre-order.
    pub fn payloads(&self) -> Vec<&A> {
        let mut collector = PayloadCollector::default();
        crate::visit::Visitor::visit_decl(&mut collector, self);
        collector.payloads
    }

    /// The declared name, or the extended type for extensions.
    /// Initializers have no name.
    pub fn name(&self) -> Option<&str> {
        match self {
            Decl::Function(signature) => Some(&signature.name),
            Decl::Property(signature) => Some(&signature.name),
            Decl::ComputedProperty(signature) => Some(&signature.name),
            Decl::Extension(signature) => Some(&signature.type_name),
            Decl::Struct(signature) => Some(&signature.name),
            Decl::Initializer(_) => None,
        }
    }

    pub(crate) fn map_with<B, F>(self, f: &mut F) -> Decl<B>
    where
        B: Send + Sync,
        F: FnMut(A) -> B,
    {
        match self {
            Decl::Function(signature) => Decl::Function(FunctionSignature {
                access_level: signature.access_level,
                name: signature.name,
                parameters: signature.parameters,
                is_async: signature.is_async,
                can_throw: signature.can_throw,
                return_type: signature.return_type,
                body: map_block(signature.body, f),
            }),
            Decl::Property(signature) => Decl::Property(PropertySignature {
                access_level: signature.access_level,
                name: signature.name,
                ty: signature.ty,
                is_static: signature.is_static,
                is_let: signature.is_let,
                initializer: signature.initializer.map(|e| e.map_with(f)),
            }),
            Decl::ComputedProperty(signature) => {
                let getter = map_block(signature.getter, f);
                let setter = signature.setter.map(|setter| SetterSignature {
                    parameter_name: setter.parameter_name,
                    body: map_block(setter.body, f),
                });
                Decl::ComputedProperty(ComputedPropertySignature {
                    name: signature.name,
                    ty: signature.ty,
                    is_static: signature.is_static,
                    getter,
                    setter,
                })
            }
            Decl::Extension(signature) => Decl::Extension(ExtensionSignature {
                type_name: signature.type_name,
                conformances: signature.conformances,
                members: map_members(signature.members, f),
            }),
            Decl::Struct(signature) => Decl::Struct(StructSignature {
                access_level: signature.access_level,
                name: signature.name,
                conformances: signature.conformances,
                members: map_members(signature.members, f),
            }),
            Decl::Initializer(signature) => Decl::Initializer(InitializerSignature {
                access_level: signature.access_level,
                parameters: signature.parameters,
                can_throw: signature.can_throw,
                body: map_block(signature.body, f),
            }),
        }
    }

    pub(crate) fn map_ref_with<B, F>(&self, f: &mut F) -> Decl<B>
    where
        B: Send + Sync,
        F: FnMut(&A) -> B,
    {
        match self {
            Decl::Function(signature) => Decl::Function(FunctionSignature {
                access_level: signature.access_level,
                name: signature.name.clone(),
                parameters: signature.parameters.clone(),
                is_async: signature.is_async,
                can_throw: signature.can_throw,
                return_type: signature.return_type.clone(),
                body: map_block_ref(&signature.body, f),
            }),
            Decl::Property(signature) => Decl::Property(PropertySignature {
                access_level: signature.access_level,
                name: signature.name.clone(),
                ty: signature.ty.clone(),
                is_static: signature.is_static,
                is_let: signature.is_let,
                initializer: signature.initializer.as_ref().map(|e| e.map_ref_with(f)),
            }),
            Decl::ComputedProperty(signature) => {
                let getter = map_block_ref(&signature.getter, f);
                let setter = signature.setter.as_ref().map(|setter| SetterSignature {
                    parameter_name: setter.parameter_name.clone(),
                    body: map_block_ref(&setter.body, f),
                });
                Decl::ComputedProperty(ComputedPropertySignature {
                    name: signature.name.clone(),
                    ty: signature.ty.clone(),
                    is_static: signature.is_static,
                    getter,
                    setter,
                })
            }
            Decl::Extension(signature) => Decl::Extension(ExtensionSignature {
                type_name: signature.type_name.clone(),
                conformances: signature.conformances.clone(),
                members: map_members_ref(&signature.members, f),
            }),
            Decl::Struct(signature) => Decl::Struct(StructSignature {
                access_level: signature.access_level,
                name: signature.name.clone(),
                conformances: signature.conformances.clone(),
                members: map_members_ref(&signature.members, f),
            }),
            Decl::Initializer(signature) => Decl::Initializer(InitializerSignature {
                access_level: signature.access_level,
                parameters: signature.parameters.clone(),
                can_throw: signature.can_throw,
                body: map_block_ref(&signature.body, f),
            }),
        }
    }
}
