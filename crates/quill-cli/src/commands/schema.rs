//! Schema command

use quill_resolve::Schema;

pub fn run() -> anyhow::Result<()> {
    print!("{}", Schema::standard().to_sdl());
    Ok(())
}
