//! Field dispatch: routes `(type, field)` pairs to resolver functions

use std::collections::HashMap;

use quill_core::Record;
use quill_storage::EntityStore;

use crate::context::Context;
use crate::error::{ResolveError, ResolveResult};
use crate::resolvers;
use crate::schema::Schema;
use crate::value::{Arguments, Resolved};

/// A resolver for one field: `(parent, arguments, context) -> value`
pub type ResolverFn<S> =
    Box<dyn Fn(Option<&Record>, &Arguments, &Context<S>) -> ResolveResult<Resolved> + Send + Sync>;

/// Registry of resolvers keyed by type name and field name
///
/// Scalar fields of a record need no registration: when no resolver is
/// registered the record's own property of that name is returned.
pub struct Dispatcher<S: EntityStore> {
    resolvers: HashMap<(String, String), ResolverFn<S>>,
}

impl<S: EntityStore + 'static> Dispatcher<S> {
    /// Empty dispatcher; only default scalar resolution works
    pub fn new() -> Self {
        Self {
            resolvers: HashMap::new(),
        }
    }

    /// Dispatcher with every root and relationship resolver registered
    pub fn standard() -> Self {
        let mut dispatcher = Self::new();
        resolvers::register_standard(&mut dispatcher);
        dispatcher
    }

    /// Register (or replace) the resolver for `type_name.field`
    pub fn register<F>(&mut self, type_name: &str, field: &str, resolver: F)
    where
        F: Fn(Option<&Record>, &Arguments, &Context<S>) -> ResolveResult<Resolved>
            + Send
            + Sync
            + 'static,
    {
        self.resolvers
            .insert((type_name.to_string(), field.to_string()), Box::new(resolver));
    }

    pub fn has_resolver(&self, type_name: &str, field: &str) -> bool {
        self.resolvers
            .contains_key(&(type_name.to_string(), field.to_string()))
    }

    /// Invoke the resolver for `type_name.field`
    pub fn resolve(
        &self,
        type_name: &str,
        field: &str,
        parent: Option<&Record>,
        args: &Arguments,
        ctx: &Context<S>,
    ) -> ResolveResult<Resolved> {
        tracing::debug!("Resolving {}.{}", type_name, field);

        if let Some(resolver) = self
            .resolvers
            .get(&(type_name.to_string(), field.to_string()))
        {
            return resolver(parent, args, ctx);
        }

        parent
            .and_then(|record| record.scalar(field))
            .map(Resolved::Scalar)
            .ok_or_else(|| ResolveError::unknown_field(type_name, field))
    }

    /// Schema fields that would fail to resolve: non-scalar fields with no
    /// registered resolver, rendered as `Type.field`
    pub fn missing_resolvers(&self, schema: &Schema) -> Vec<String> {
        schema
            .types()
            .iter()
            .flat_map(|ty| {
                ty.fields
                    .iter()
                    .filter(|f| !Schema::is_scalar(f.returns.name))
                    .filter(|f| !self.has_resolver(ty.name, f.name))
                    .map(move |f| format!("{}.{}", ty.name, f.name))
            })
            .collect()
    }
}

impl<S: EntityStore + 'static> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new()
    }
}
