use super::{Renderer, comma_separated};
use crate::decl::{
    AccessLevel, ComputedPropertySignature, Decl, ExtensionSignature, FunctionSignature,
    InitializerSignature, ParameterSignature, PropertySignature, StructSignature,
};
use crate::{String, Vec, vec};
use synthkit_syntax::{
    AccessorBlockSyntax, AccessorDeclSyntax, AccessorSpecifier, BindingSpecifier, DeclSyntax,
    EffectSpecifiers, ExtensionDeclSyntax, FunctionDeclSyntax, FunctionParameterSyntax,
    InheritanceClauseSyntax, InheritedTypeSyntax, InitializerDeclSyntax, MemberBlockSyntax,
    Modifiers, StructDeclSyntax, VariableDeclSyntax,
};

impl AccessLevel {
    /// The modifier this access level emits. `Internal` is implicit in Swift
    /// and emits nothing.
    pub fn modifiers(self) -> Modifiers {
        match self {
            AccessLevel::Public => Modifiers::PUBLIC,
            AccessLevel::Internal => Modifiers::empty(),
            AccessLevel::FilePrivate => Modifiers::FILEPRIVATE,
            AccessLevel::Private => Modifiers::PRIVATE,
        }
    }
}

fn static_modifier(is_static: bool) -> Modifiers {
    if is_static {
        Modifiers::STATIC
    } else {
        Modifiers::empty()
    }
}

fn effects(is_async: bool, can_throw: bool) -> EffectSpecifiers {
    let mut effects = EffectSpecifiers::empty();
    effects.set(EffectSpecifiers::ASYNC, is_async);
    effects.set(EffectSpecifiers::THROWS, can_throw);
    effects
}

fn parameters(parameters: &[ParameterSignature]) -> Vec<FunctionParameterSyntax> {
    comma_separated(parameters, |parameter, trailing_comma| {
        FunctionParameterSyntax {
            external_label: parameter.external_label.clone(),
            name: parameter.name.clone(),
            ty: parameter.ty.clone(),
            is_inout: parameter.is_inout,
            default_value: parameter.default_value.clone(),
            trailing_comma,
        }
    })
}

fn inheritance_clause(conformances: &[String]) -> Option<InheritanceClauseSyntax> {
    if conformances.is_empty() {
        return None;
    }
    Some(InheritanceClauseSyntax {
        inherited_types: comma_separated(conformances, |name, trailing_comma| {
            InheritedTypeSyntax {
                name: name.clone(),
                trailing_comma,
            }
        }),
    })
}

impl Renderer {
    pub fn decl<A>(&self, decl: &Decl<A>) -> DeclSyntax {
        tracing::debug!(name = ?decl.name(), "rendering declaration");
        match decl {
            Decl::Function(signature) => DeclSyntax::Function(self.function(signature)),
            Decl::Property(signature) => DeclSyntax::Variable(self.property(signature)),
            Decl::ComputedProperty(signature) => {
                DeclSyntax::Variable(self.computed_property(signature))
            }
            Decl::Extension(signature) => DeclSyntax::Extension(self.extension(signature)),
            Decl::Struct(signature) => DeclSyntax::Struct(self.structure(signature)),
            Decl::Initializer(signature) => DeclSyntax::Initializer(self.initializer(signature)),
        }
    }

    fn function<A>(&self, signature: &FunctionSignature<A>) -> FunctionDeclSyntax {
        FunctionDeclSyntax {
            modifiers: signature.access_level.modifiers(),
            name: signature.name.clone(),
            parameters: parameters(&signature.parameters),
            effects: effects(signature.is_async, signature.can_throw),
            return_type: signature.return_type.clone(),
            body: self.code_block(&signature.body),
        }
    }

    fn property<A>(&self, signature: &PropertySignature<A>) -> VariableDeclSyntax {
        VariableDeclSyntax {
            modifiers: signature.access_level.modifiers() | static_modifier(signature.is_static),
            binding_specifier: if signature.is_let {
                BindingSpecifier::Let
            } else {
                BindingSpecifier::Var
            },
            name: signature.name.clone(),
            type_annotation: signature.ty.clone(),
            initializer: signature.initializer.as_ref().map(|expr| self.expr(expr)),
            accessor_block: None,
        }
    }

    fn computed_property<A>(&self, signature: &ComputedPropertySignature<A>) -> VariableDeclSyntax {
        let mut accessors = vec![AccessorDeclSyntax {
            specifier: AccessorSpecifier::Get,
            parameter: None,
            body: self.code_block(&signature.getter),
        }];
        if let Some(setter) = &signature.setter {
            accessors.push(AccessorDeclSyntax {
                specifier: AccessorSpecifier::Set,
                parameter: Some(setter.parameter_name.clone()),
                body: self.code_block(&setter.body),
            });
        }
        VariableDeclSyntax {
            modifiers: static_modifier(signature.is_static),
            binding_specifier: BindingSpecifier::Var,
            name: signature.name.clone(),
            type_annotation: Some(signature.ty.clone()),
            initializer: None,
            accessor_block: Some(AccessorBlockSyntax { accessors }),
        }
    }

    fn extension<A>(&self, signature: &ExtensionSignature<A>) -> ExtensionDeclSyntax {
        ExtensionDeclSyntax {
            extended_type: signature.type_name.clone(),
            inheritance_clause: inheritance_clause(&signature.conformances),
            member_block: self.members(&signature.members),
        }
    }

    fn structure<A>(&self, signature: &StructSignature<A>) -> StructDeclSyntax {
        StructDeclSyntax {
            modifiers: signature.access_level.modifiers(),
            name: signature.name.clone(),
            inheritance_clause: inheritance_clause(&signature.conformances),
            member_block: self.members(&signature.members),
        }
    }

    fn initializer<A>(&self, signature: &InitializerSignature<A>) -> InitializerDeclSyntax {
        InitializerDeclSyntax {
            modifiers: signature.access_level.modifiers(),
            parameters: parameters(&signature.parameters),
            effects: effects(false, signature.can_throw),
            body: self.code_block(&signature.body),
        }
    }

    fn members<A>(&self, members: &[Decl<A>]) -> MemberBlockSyntax {
        MemberBlockSyntax {
            members: members.iter().map(|member| self.decl(member)).collect(),
        }
    }
}
