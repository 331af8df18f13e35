//! Root mutation resolvers
//!
//! Each create validates and appends under a single store write, so the
//! check and the insert are atomic with respect to other writers. A rejected
//! create leaves the collections untouched.

use quill_core::{
    Annotation, Author, Content, NewAnnotation, NewAuthor, NewContent, Record,
};
use quill_storage::EntityStore;

use crate::context::Context;
use crate::error::ResolveResult;
use crate::validator;
use crate::value::{parse_args, Arguments, Resolved};

/// Create an author with a unique email
pub fn create_author<S: EntityStore>(store: &S, input: NewAuthor) -> ResolveResult<Author> {
    let id = store.generate_id();
    let author = store.write(|c| -> quill_core::Result<Author> {
        validator::validate_create_author(c, &input)?;
        let author = Author::new(id, input);
        c.add(author.clone().into())?;
        Ok(author)
    })??;

    tracing::info!("Created author {} <{}>", author.id, author.email);
    Ok(author)
}

/// Create a content item owned by an existing author
pub fn create_content<S: EntityStore>(store: &S, input: NewContent) -> ResolveResult<Content> {
    let id = store.generate_id();
    let content = store.write(|c| -> quill_core::Result<Content> {
        validator::validate_create_content(c, &input)?;
        let content = Content::new(id, input);
        c.add(content.clone().into())?;
        Ok(content)
    })??;

    tracing::info!("Created content {} by author {}", content.id, content.author_id);
    Ok(content)
}

/// Create an annotation on a published content item
pub fn create_annotation<S: EntityStore>(
    store: &S,
    input: NewAnnotation,
) -> ResolveResult<Annotation> {
    let id = store.generate_id();
    let annotation = store.write(|c| -> quill_core::Result<Annotation> {
        validator::validate_create_annotation(c, &input)?;
        let annotation = Annotation::new(id, input);
        c.add(annotation.clone().into())?;
        Ok(annotation)
    })??;

    tracing::info!(
        "Created annotation {} on content {}",
        annotation.id,
        annotation.content_id
    );
    Ok(annotation)
}

pub fn create_author_field<S: EntityStore>(
    _parent: Option<&Record>,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let input: NewAuthor = parse_args("createAuthor", args)?;
    Ok(Resolved::Record(create_author(ctx.store(), input)?.into()))
}

pub fn create_content_field<S: EntityStore>(
    _parent: Option<&Record>,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let input: NewContent = parse_args("createContent", args)?;
    Ok(Resolved::Record(create_content(ctx.store(), input)?.into()))
}

pub fn create_annotation_field<S: EntityStore>(
    _parent: Option<&Record>,
    args: &Arguments,
    ctx: &Context<S>,
) -> ResolveResult<Resolved> {
    let input: NewAnnotation = parse_args("createAnnotation", args)?;
    Ok(Resolved::Record(create_annotation(ctx.store(), input)?.into()))
}
