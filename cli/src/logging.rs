use researcher_config::Settings;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, reload, EnvFilter, Registry};

/// Handle for switching the log filter once settings are known
///
/// Inactive when `RUST_LOG` is set, which always wins.
#[derive(Debug)]
pub struct LogHandle {
    reload: Option<reload::Handle<EnvFilter, Registry>>,
    forced_debug: bool,
}

/// Install the global subscriber before settings are loaded
pub fn init_logging(debug: bool) -> LogHandle {
    let from_env = EnvFilter::try_from_default_env().ok();
    let user_filter = from_env.is_some();

    let filter = from_env.unwrap_or_else(|| {
        let level = if debug { LevelFilter::DEBUG } else { LevelFilter::INFO };
        EnvFilter::default().add_directive(level.into())
    });
    let (filter, handle) = reload::Layer::new(filter);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init();

    LogHandle {
        reload: (!user_filter).then_some(handle),
        forced_debug: debug,
    }
}

impl LogHandle {
    /// Switch to the level configured in `settings`
    pub fn apply(&self, settings: &Settings) {
        let Some(handle) = &self.reload else {
            return;
        };

        let level = if self.forced_debug || settings.debug {
            LevelFilter::DEBUG
        } else {
            LevelFilter::from_level(settings.log_level.as_tracing())
        };

        if let Err(e) = handle.reload(EnvFilter::default().add_directive(level.into())) {
            tracing::warn!(error = %e, "failed to apply configured log level");
        }
    }
}
