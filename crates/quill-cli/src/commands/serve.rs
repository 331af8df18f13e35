//! Serve command

use quill_resolve::QuillServer;

use crate::AppContext;

pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let server = QuillServer::new(ctx.store.clone());
    server.run_stdio().await
}
