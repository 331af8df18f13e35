//! Resolver functions for every schema field
//!
//! All resolvers share the shape `(parent, arguments, context) -> Resolved`;
//! root resolvers receive no parent.

pub mod fields;
pub mod mutation;
pub mod query;

use quill_core::{Error, Record};
use quill_storage::EntityStore;

use crate::dispatch::Dispatcher;
use crate::error::ResolveResult;
use crate::schema::{MUTATION, QUERY};

/// Register the resolvers for every non-scalar field of the standard schema
pub fn register_standard<S: EntityStore + 'static>(dispatcher: &mut Dispatcher<S>) {
    dispatcher.register(QUERY, "authors", query::authors::<S>);
    dispatcher.register(QUERY, "contents", query::contents::<S>);
    dispatcher.register(QUERY, "annotations", query::annotations::<S>);
    dispatcher.register(QUERY, "me", query::me::<S>);
    dispatcher.register(QUERY, "singlePost", query::single_post::<S>);

    dispatcher.register(MUTATION, "createAuthor", mutation::create_author_field::<S>);
    dispatcher.register(MUTATION, "createContent", mutation::create_content_field::<S>);
    dispatcher.register(
        MUTATION,
        "createAnnotation",
        mutation::create_annotation_field::<S>,
    );

    dispatcher.register("Author", "posts", fields::author_posts::<S>);
    dispatcher.register("Author", "comments", fields::author_comments::<S>);
    dispatcher.register("Content", "author", fields::content_author::<S>);
    dispatcher.register("Content", "comments", fields::content_comments::<S>);
    dispatcher.register("Annotation", "author", fields::annotation_author::<S>);
    dispatcher.register("Annotation", "post", fields::annotation_post::<S>);
}

/// Narrow a parent record to the kind a type-field resolver expects
pub(crate) fn parent_as<'a, T>(
    parent: Option<&'a Record>,
    narrow: impl Fn(&'a Record) -> Option<&'a T>,
    field: &str,
) -> ResolveResult<&'a T> {
    parent
        .and_then(narrow)
        .ok_or_else(|| Error::Internal(format!("{} resolved without a matching parent", field)).into())
}
