use crate::Verbosity;
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::fmt::writer::{MakeWriter, MakeWriterExt};

/// Plain-text subscriber for the given verbosity.
///
/// Error events go to `stderr`, all other events to `stdout`.
pub fn subscriber<E, O>(verbosity: Verbosity, stderr: E, stdout: O) -> impl tracing::Subscriber + Send + Sync + 'static
where
    E: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    O: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(verbosity))
        .with_writer(stderr.with_max_level(Level::ERROR).or_else(stdout))
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_level(false)
        .finish()
}
