//! Quill Resolve - Query and mutation resolution
//!
//! Matches client selections against the entity store: root resolvers for
//! queries and mutations, relationship resolvers for nested fields, and the
//! dispatcher that routes each `(type, field)` pair to its resolver.

pub mod context;
pub mod dispatch;
pub mod error;
pub mod executor;
pub mod relationship;
pub mod resolvers;
pub mod schema;
pub mod server;
pub mod transport;
pub mod validator;
pub mod value;

pub use context::Context;
pub use dispatch::{Dispatcher, ResolverFn};
pub use error::{ResolveError, ResolveResult};
pub use executor::{Executor, FieldError, Operation, PathSegment, Request, Response, Selection};
pub use schema::{Arity, Schema};
pub use server::QuillServer;
pub use value::{Arguments, Resolved};
