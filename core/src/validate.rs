//! Opt-in structural checks for declarations.
//!
//! Rendering never calls into this module: every tree renders, even the ones
//! Swift would reject. Hosts that want to catch those before emitting code
//! run [`validate_decl`] or [`validate_decls`] first.

use crate::decl::{Decl, PropertySignature};
use crate::visit::{Visitor, walk_decl};
use crate::{String, Vec};
use thiserror::Error;

/// A declaration that renders to Swift the compiler will not accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A stored property with neither a type annotation nor an initializer.
    #[error("property `{name}` needs a type annotation or an initializer")]
    UntypedProperty { name: String },
}

/// Checks `decl` and every nested member, returning the first problem found.
pub fn validate_decl<A>(decl: &Decl<A>) -> Result<(), ValidationError> {
    match collect_errors(core::slice::from_ref(decl)).into_iter().next() {
        Some(error) => Err(error),
        None => Ok(()),
    }
}

/// Checks all of `decls`, returning every problem found in source order.
pub fn validate_decls<A>(decls: &[Decl<A>]) -> Result<(), Vec<ValidationError>> {
    let errors = collect_errors(decls);
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

fn collect_errors<A>(decls: &[Decl<A>]) -> Vec<ValidationError> {
    let mut checker = DeclChecker { errors: Vec::new() };
    for decl in decls {
        checker.visit_decl(decl);
    }
    checker.errors
}

struct DeclChecker {
    errors: Vec<ValidationError>,
}

impl DeclChecker {
    fn check_property<A>(&mut self, signature: &PropertySignature<A>) {
        if signature.ty.is_none() && signature.initializer.is_none() {
            tracing::debug!(property = %signature.name, "property has no type and no initializer");
            self.errors.push(ValidationError::UntypedProperty {
                name: signature.name.clone(),
            });
        }
    }
}

impl<'t, A> Visitor<'t, A> for DeclChecker {
    fn visit_decl(&mut self, decl: &'t Decl<A>) {
        if let Decl::Property(signature) = decl {
            self.check_property(signature);
        }
        walk_decl(self, decl);
    }
}
