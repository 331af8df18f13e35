//! One-shot request execution

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use quill_resolve::{Executor, Request};

use crate::output::format_output;
use crate::AppContext;

#[derive(Args)]
pub struct ExecArgs {
    /// Request as JSON; `-` reads it from stdin
    pub request: Option<String>,

    /// Read the request from a file
    #[arg(long, conflicts_with = "request")]
    pub file: Option<PathBuf>,

    /// Exit with an error status when any field fails
    #[arg(long)]
    pub strict: bool,
}

fn read_request(args: &ExecArgs) -> anyhow::Result<Request> {
    let text = match (&args.request, &args.file) {
        (_, Some(path)) => std::fs::read_to_string(path)?,
        (Some(inline), None) if inline == "-" => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        (Some(inline), None) => inline.clone(),
        (None, None) => anyhow::bail!("Provide a request as an argument, `-` for stdin, or --file"),
    };

    serde_json::from_str(&text).map_err(|e| anyhow::anyhow!("Invalid request: {}", e))
}

pub fn run(args: &ExecArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let request = read_request(args)?;
    let executor = Executor::new(ctx.store.clone());
    let response = executor.execute(&request);

    for error in &response.errors {
        tracing::warn!("{} ({})", error.message, error.kind);
    }

    println!("{}", format_output(&response, ctx.format)?);

    if args.strict && !response.is_ok() {
        anyhow::bail!("{} field(s) failed", response.errors.len());
    }
    Ok(())
}
