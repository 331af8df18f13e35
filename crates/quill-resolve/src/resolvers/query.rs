//! Root query resolvers

use quill_core::{
    limits, Author, Content, EntityId, EntityKind, NewAuthor, NewContent, Record,
};
use quill_search::TextFilter;
use quill_storage::EntityStore;
use serde::Deserialize;

use crate::context::Context;
use crate::error::ResolveResult;
use crate::value::{parse_args, Arguments, Resolved};

#[derive(Debug, Default, Deserialize)]
struct FilterArgs {
    #[serde(default)]
    query: Option<String>,
}

fn filtered<S: EntityStore>(
    kind: EntityKind,
    field: &str,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let args: FilterArgs = parse_args(field, args)?;
    if let Some(ref query) = args.query {
        limits::validate_query(query)?;
    }

    let filter = TextFilter::new(args.query.as_deref());
    let records = filter.apply(ctx.store().all(kind)?);
    tracing::debug!("{} matched {} records", field, records.len());
    Ok(Resolved::records(records))
}

/// `authors(query)`: authors whose name contains the query
pub fn authors<S: EntityStore>(
    _parent: Option<&Record>,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    filtered(EntityKind::Author, "authors", args, ctx)
}

/// `contents(query)`: content whose title or body contains the query
pub fn contents<S: EntityStore>(
    _parent: Option<&Record>,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    filtered(EntityKind::Content, "contents", args, ctx)
}

/// `annotations(query)`: annotations whose text contains the query; all of
/// them when the query is absent
pub fn annotations<S: EntityStore>(
    _parent: Option<&Record>,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    filtered(EntityKind::Annotation, "annotations", args, ctx)
}

/// Fixed author returned by `me`; not store-backed
pub fn placeholder_author() -> Author {
    Author::new(
        EntityId::new("123098"),
        NewAuthor::new("Mike", "mike@example.com"),
    )
}

/// Fixed content returned by `singlePost`; not store-backed
pub fn placeholder_content() -> Content {
    Content::new(
        EntityId::new("092"),
        NewContent::new("GraphQL 101", placeholder_author().id),
    )
}

pub fn me<S: EntityStore>(
    _parent: Option<&Record>,
    _args: &Arguments,
    _ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    Ok(Resolved::Record(placeholder_author().into()))
}

pub fn single_post<S: EntityStore>(
    _parent: Option<&Record>,
    _args: &Arguments,
    _ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    Ok(Resolved::Record(placeholder_content().into()))
}
