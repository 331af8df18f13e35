//! Relationship field resolvers
//!
//! A dangling one-to-one reference resolves to null and is logged; it is a
//! data integrity anomaly, not a client error.

use quill_core::{EntityId, Record};
use quill_storage::EntityStore;

use super::parent_as;
use crate::context::Context;
use crate::error::ResolveResult;
use crate::relationship;
use crate::value::{Arguments, Resolved};

/// Wrap a one-to-one lookup, logging when the referenced record is missing
fn one_to_one(field: &str, owner: &EntityId, target: Option<Record>) -> Resolved {
    let resolved = Resolved::optional(target);
    if resolved.is_null() {
        tracing::warn!("{} of {} references a missing record", field, owner);
    }
    resolved
}

/// `Author.posts`
pub fn author_posts<S: EntityStore>(
    parent: Option<&Record>,
    _args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let author = parent_as(parent, Record::as_author, "Author.posts")?;
    let posts = ctx.store().read(|c| {
        relationship::contents_of_author(c, author)
            .into_iter()
            .cloned()
            .map(Record::from)
            .collect::<Vec<_>>()
    })?;
    Ok(Resolved::records(posts))
}

/// `Author.comments`
pub fn author_comments<S: EntityStore>(
    parent: Option<&Record>,
    _args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let author = parent_as(parent, Record::as_author, "Author.comments")?;
    let comments = ctx.store().read(|c| {
        relationship::annotations_of_author(c, author)
            .into_iter()
            .cloned()
            .map(Record::from)
            .collect::<Vec<_>>()
    })?;
    Ok(Resolved::records(comments))
}

/// `Content.author`
pub fn content_author<S: EntityStore>(
    parent: Option<&Record>,
    _args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let content = parent_as(parent, Record::as_content, "Content.author")?;
    let author = ctx.store().read(|c| {
        relationship::author_of_content(c, content)
            .cloned()
            .map(Record::from)
    })?;
    Ok(one_to_one("Content.author", &content.id, author))
}

/// `Content.comments`
pub fn content_comments<S: EntityStore>(
    parent: Option<&Record>,
    _args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let content = parent_as(parent, Record::as_content, "Content.comments")?;
    let comments = ctx.store().read(|c| {
        relationship::annotations_of_content(c, content)
            .into_iter()
            .cloned()
            .map(Record::from)
            .collect::<Vec<_>>()
    })?;
    Ok(Resolved::records(comments))
}

/// `Annotation.author`
pub fn annotation_author<S: EntityStore>(
    parent: Option<&Record>,
    _args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let annotation = parent_as(parent, Record::as_annotation, "Annotation.author")?;
    let author = ctx.store().read(|c| {
        relationship::author_of_annotation(c, annotation)
            .cloned()
            .map(Record::from)
    })?;
    Ok(one_to_one("Annotation.author", &annotation.id, author))
}

/// `Annotation.post`
pub fn annotation_post<S: EntityStore>(
    parent: Option<&Record>,
    _args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let annotation = parent_as(parent, Record::as_annotation, "Annotation.post")?;
    let content = ctx.store().read(|c| {
        relationship::content_of_annotation(c, annotation)
            .cloned()
            .map(Record::from)
    })?;
    Ok(one_to_one("Annotation.post", &annotation.id, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolvers::query::{placeholder_author, placeholder_content};
    use quill_core::{Annotation, EntityKind, NewAnnotation};
    use quill_storage::MemoryStore;
    use std::sync::Arc;

    fn ctx() -> Context<MemoryStore> {
        Context::new(Arc::new(MemoryStore::seeded()))
    }

    fn record(ctx: &Context<MemoryStore>, kind: EntityKind, id: &str) -> Record {
        ctx.store()
            .find_by_id(kind, &EntityId::new(id))
            .unwrap()
            .unwrap()
    }

    #[test]
    fn test_content_author_join() {
        let ctx = ctx();
        let music = record(&ctx, EntityKind::Content, "12");
        let author = content_author(Some(&music), &Arguments::new(), &ctx).unwrap();
        let author = author.as_record().unwrap().as_author().unwrap();
        assert_eq!(author.id, music.as_content().unwrap().author_id);
    }

    #[test]
    fn test_author_posts_empty_for_author_without_content() {
        let ctx = ctx();
        let mike = record(&ctx, EntityKind::Author, "3");
        let posts = author_posts(Some(&mike), &Arguments::new(), &ctx).unwrap();
        assert_eq!(posts, Resolved::List(vec![]));

        let comments = author_comments(Some(&mike), &Arguments::new(), &ctx).unwrap();
        assert_eq!(comments.as_list().unwrap().len(), 1);
    }

    #[test]
    fn test_annotation_post() {
        let ctx = ctx();
        let annotation = record(&ctx, EntityKind::Annotation, "102");
        let post = annotation_post(Some(&annotation), &Arguments::new(), &ctx).unwrap();
        assert_eq!(post.as_record().unwrap().id(), &EntityId::new("12"));
    }

    #[test]
    fn test_dangling_author_resolves_null() {
        let ctx = ctx();
        let placeholder = Record::from(placeholder_content());
        let author = content_author(Some(&placeholder), &Arguments::new(), &ctx).unwrap();
        assert!(author.is_null());

        let comments = content_comments(Some(&placeholder), &Arguments::new(), &ctx).unwrap();
        assert_eq!(comments.as_list().unwrap().len(), 0);
    }

    #[test]
    fn test_dangling_annotation_references_resolve_null() {
        let ctx = ctx();
        let orphan = Record::from(Annotation::new(
            EntityId::new("900"),
            NewAnnotation::new("Lost", "404", "405"),
        ));

        let post = annotation_post(Some(&orphan), &Arguments::new(), &ctx).unwrap();
        assert!(post.is_null());
        let author = annotation_author(Some(&orphan), &Arguments::new(), &ctx).unwrap();
        assert_eq!(author, Resolved::Null);
    }

    #[test]
    fn test_wrong_parent_kind_is_internal_error() {
        let ctx = ctx();
        let author = Record::from(placeholder_author());
        let err = content_comments(Some(&author), &Arguments::new(), &ctx).unwrap_err();
        assert_eq!(err.kind(), "INTERNAL");

        let err = author_posts(None, &Arguments::new(), &ctx).unwrap_err();
        assert_eq!(err.kind(), "INTERNAL");
    }
}
