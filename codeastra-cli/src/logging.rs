//! Tracing setup for the CLI. Log lines go to stderr so stdout stays
//! reserved for command output.

use std::io::{self, IsTerminal};

use tracing::Subscriber;
use tracing_subscriber::{
    EnvFilter,
    filter::LevelFilter,
    fmt::{self, MakeWriter},
};

/// Installs the global subscriber. `RUST_LOG` wins over `default_level`.
///
/// Calling this more than once keeps the first subscriber.
pub fn init(default_level: &str) {
    let subscriber = subscriber_with_writer(default_level, io::stderr, io::stderr().is_terminal());
    let _ = tracing::subscriber::set_global_default(subscriber);
}

pub(crate) fn subscriber_with_writer<W>(
    default_level: &str,
    make_writer: W,
    ansi: bool,
) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    fmt::fmt()
        .with_env_filter(build_env_filter(default_level))
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(ansi)
        .with_writer(make_writer)
        .finish()
}

fn build_env_filter(default_level: &str) -> EnvFilter {
    let default_level = default_level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::INFO);

    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .with_default_directive(default_level.into())
            .from_env_lossy()
    })
}
