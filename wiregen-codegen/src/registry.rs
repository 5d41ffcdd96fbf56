//! Named-type registry.
//!
//! Append-only accumulator for every declaration produced during one run.
//! Owned by the generator and passed by `&mut` through the walk.

use crate::declaration::NamedDeclaration;
use crate::error::CodegenError;
use std::collections::BTreeMap;

/// Registry of named declarations, keyed and iterated by name.
#[derive(Debug, Default)]
pub struct Registry {
    declarations: BTreeMap<String, NamedDeclaration>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a declaration.
    ///
    /// Registering a name again with identical content is a no-op.
    ///
    /// # Errors
    /// Returns `CodegenError::NameCollision` if the name is already taken by a
    /// declaration with different content.
    pub fn register(&mut self, declaration: NamedDeclaration) -> Result<(), CodegenError> {
        match self.declarations.get(&declaration.name) {
            Some(existing) if *existing == declaration => {
                tracing::trace!(name = %declaration.name, "declaration already registered");
                Ok(())
            }
            Some(_) => Err(CodegenError::NameCollision {
                name: declaration.name,
            }),
            None => {
                tracing::debug!(
                    name = %declaration.name,
                    kind = declaration.kind_name(),
                    "registered declaration"
                );
                self.declarations
                    .insert(declaration.name.clone(), declaration);
                Ok(())
            }
        }
    }

    /// Looks up a declaration by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&NamedDeclaration> {
        self.declarations.get(name)
    }

    /// Returns every declaration in ascending name order.
    pub fn all(&self) -> impl Iterator<Item = &NamedDeclaration> {
        self.declarations.values()
    }

    /// Returns the number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns true if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
