use eyre::WrapErr;
use tracing::Level;

pub const LOG_LEVEL_VAR: &str = "ICONGEN_LOG";

fn log_level() -> eyre::Result<Level> {
    match std::env::var(LOG_LEVEL_VAR) {
        Ok(level) if !level.is_empty() => level
            .parse()
            .wrap_err_with(|| format!("invalid {} value '{}'", LOG_LEVEL_VAR, level)),
        _ => Ok(Level::WARN),
    }
}

pub fn setup_logger() -> eyre::Result<()> {
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    Registry::default()
        .with(LevelFilter::from(log_level()?))
        .with(
            layer()
                .with_ansi(true)
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .try_init()?;
    Ok(())
}
