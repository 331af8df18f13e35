//! Request execution
//!
//! Walks a selection tree: root fields go to the `Query` or `Mutation`
//! resolvers, and every record-valued result has its child selections
//! resolved with that record as parent. A failing field becomes `null` at
//! its path and the error is collected; sibling fields still resolve.

use std::sync::Arc;

use quill_core::{limits, Record};
use quill_storage::EntityStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::context::Context;
use crate::dispatch::Dispatcher;
use crate::error::{ResolveError, ResolveResult};
use crate::schema::{Schema, MUTATION, QUERY};
use crate::value::{Arguments, Resolved};

const TYPENAME_FIELD: &str = "__typename";

/// Which root type a request starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    #[default]
    Query,
    Mutation,
}

impl Operation {
    pub fn root_type(&self) -> &'static str {
        match self {
            Self::Query => QUERY,
            Self::Mutation => MUTATION,
        }
    }
}

/// One requested field with its arguments and nested selections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub field: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub arguments: Arguments,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selection: Vec<Selection>,
}

impl Selection {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            alias: None,
            arguments: Arguments::new(),
            selection: Vec::new(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(name.into(), value.into());
        self
    }

    pub fn select(mut self, child: Selection) -> Self {
        self.selection.push(child);
        self
    }

    /// Select several scalar fields by name
    pub fn fields(mut self, names: &[&str]) -> Self {
        self.selection.extend(names.iter().map(|n| Selection::new(*n)));
        self
    }

    /// Key under which this field appears in the response
    pub fn response_key(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.field)
    }
}

/// A query or mutation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub operation: Operation,
    pub selection: Vec<Selection>,
}

impl Request {
    pub fn query(selection: Vec<Selection>) -> Self {
        Self {
            operation: Operation::Query,
            selection,
        }
    }

    pub fn mutation(selection: Vec<Selection>) -> Self {
        Self {
            operation: Operation::Mutation,
            selection,
        }
    }
}

/// Element of a response path: an object key or a list index
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

/// Field-level error reported alongside partial data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub message: String,
    pub path: Vec<PathSegment>,
    pub kind: String,
}

impl FieldError {
    fn new(error: &ResolveError, path: &[PathSegment]) -> Self {
        Self {
            message: error.to_string(),
            path: path.to_vec(),
            kind: error.kind().to_string(),
        }
    }
}

/// Result of executing a request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub data: Map<String, Value>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldError>,
}

impl Response {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Executes requests against one store
pub struct Executor<S: EntityStore> {
    schema: Schema,
    dispatcher: Dispatcher<S>,
    context: Context<S>,
}

impl<S: EntityStore + 'static> Executor<S> {
    /// Executor over the standard schema and resolvers
    pub fn new(store: Arc<S>) -> Self {
        Self::with_dispatcher(store, Schema::standard(), Dispatcher::standard())
    }

    pub fn with_dispatcher(store: Arc<S>, schema: Schema, dispatcher: Dispatcher<S>) -> Self {
        let missing = dispatcher.missing_resolvers(&schema);
        if !missing.is_empty() {
            tracing::warn!("Fields without resolvers: {}", missing.join(", "));
        }
        Self {
            schema,
            dispatcher,
            context: Context::new(store),
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn context(&self) -> &Context<S> {
        &self.context
    }

    /// Resolve every root field of the request, in order
    pub fn execute(&self, request: &Request) -> Response {
        let root = request.operation.root_type();
        tracing::debug!(
            "Executing {} with {} root fields",
            root,
            request.selection.len()
        );

        let mut response = Response::default();
        let mut path = Vec::new();
        for selection in &request.selection {
            let value = self.execute_field(
                root,
                None,
                selection,
                &mut path,
                1,
                &mut response.errors,
            );
            response
                .data
                .insert(selection.response_key().to_string(), value);
        }

        if !response.errors.is_empty() {
            tracing::debug!("Request finished with {} field errors", response.errors.len());
        }
        response
    }

    fn execute_field(
        &self,
        type_name: &str,
        parent: Option<&Record>,
        selection: &Selection,
        path: &mut Vec<PathSegment>,
        depth: usize,
        errors: &mut Vec<FieldError>,
    ) -> Value {
        path.push(PathSegment::Key(selection.response_key().to_string()));

        let value = match self.resolve_field(type_name, parent, selection, depth) {
            Ok(resolved) => self.complete(resolved, selection, path, depth, errors),
            Err(e) => {
                tracing::debug!("Field {}.{} failed: {}", type_name, selection.field, e);
                errors.push(FieldError::new(&e, path));
                Value::Null
            }
        };

        path.pop();
        value
    }

    fn resolve_field(
        &self,
        type_name: &str,
        parent: Option<&Record>,
        selection: &Selection,
        depth: usize,
    ) -> ResolveResult<Resolved> {
        limits::validate_selection_depth(depth)?;

        if selection.field == TYPENAME_FIELD {
            return Ok(Resolved::Scalar(Value::from(type_name)));
        }
        if self.schema.field(type_name, &selection.field).is_none() {
            return Err(ResolveError::unknown_field(type_name, &selection.field));
        }

        self.dispatcher.resolve(
            type_name,
            &selection.field,
            parent,
            &selection.arguments,
            &self.context,
        )
    }

    fn complete(
        &self,
        resolved: Resolved,
        selection: &Selection,
        path: &mut Vec<PathSegment>,
        depth: usize,
        errors: &mut Vec<FieldError>,
    ) -> Value {
        match resolved {
            Resolved::Null => Value::Null,
            Resolved::Scalar(value) => value,
            Resolved::Record(record) => {
                self.complete_record(&record, selection, path, depth, errors)
            }
            Resolved::List(items) => Value::Array(
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, item)| {
                        path.push(PathSegment::Index(i));
                        let value = self.complete(item, selection, path, depth, errors);
                        path.pop();
                        value
                    })
                    .collect(),
            ),
        }
    }

    fn complete_record(
        &self,
        record: &Record,
        selection: &Selection,
        path: &mut Vec<PathSegment>,
        depth: usize,
        errors: &mut Vec<FieldError>,
    ) -> Value {
        let mut object = Map::new();

        // No sub-selection: every scalar field
        if selection.selection.is_empty() {
            for field in record.scalar_fields() {
                if let Some(value) = record.scalar(field) {
                    object.insert(field.to_string(), value);
                }
            }
            return Value::Object(object);
        }

        let type_name = record.kind().type_name();
        for child in &selection.selection {
            let value =
                self.execute_field(type_name, Some(record), child, path, depth + 1, errors);
            object.insert(child.response_key().to_string(), value);
        }
        Value::Object(object)
    }
}
