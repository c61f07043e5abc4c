//! Tracing setup for the binary.
//!
//! The subscriber is installed before the configuration is read, at the
//! built-in default level, so warnings from config loading and CLI defaults
//! are not dropped. Once the command line is parsed the filter is swapped for
//! the configured level through a reload handle.

use std::io;

use anyhow::{anyhow, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

pub type LogHandle = reload::Handle<EnvFilter, Registry>;

/// `RUST_LOG` when set, otherwise `level`.
fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> (impl Subscriber + Send + Sync, LogHandle)
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let (filter, handle) = reload::Layer::new(filter);
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer));
    (subscriber, handle)
}

pub fn init_tracing(level: &str) -> Result<LogHandle> {
    // Logs go to stderr so they never interleave with the board on stdout
    let (subscriber, handle) = subscriber(env_filter(level), io::stderr);
    subscriber
        .try_init()
        .map_err(|e| anyhow!("failed to initialize tracing: {}", e))?;
    Ok(handle)
}

pub fn set_log_level(handle: &LogHandle, level: &str) -> Result<()> {
    handle
        .reload(env_filter(level))
        .map_err(|e| anyhow!("failed to set log level: {}", e))
}
