//! rope-progress — a sagging-rope progress indicator for Iced, with a demo host.
//!
//! Run with:  `RUST_LOG=info rope-demo`

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Structured logging — RUST_LOG controls verbosity (default: info).
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("rope-progress v{} starting", env!("CARGO_PKG_VERSION"));

    rope_demo::run().map_err(Into::into)
}
