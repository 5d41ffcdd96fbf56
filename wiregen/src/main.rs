//! Regenerates `generated/types.rs` from `schema/automation.json`.
//!
//! Run with: `cargo run -p wiregen`
//!
//! Log verbosity follows `RUST_LOG` and defaults to `info`.

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use wiregen::GeneratorConfig;

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = GeneratorConfig::default();
    let output = wiregen::run(&config).with_context(|| {
        format!(
            "failed to generate {} from {}",
            config.output().display(),
            config.input().display()
        )
    })?;

    for name in &output.skipped_messages {
        tracing::debug!(message = %name, "message produced no declaration");
    }
    Ok(())
}
