use icongen_core::{IconGenerator, Layout};

pub mod logger;
pub mod output;

/// Generates the web icons for the project found through [`Layout::from_env`].
/// Conversion failures are printed, not returned.
pub fn run() -> eyre::Result<()> {
    logger::setup_logger()?;

    let layout = Layout::from_env()?;
    tracing::info!("icongen: {}", icongen_core::VERSION);
    tracing::info!("project root: {}", layout.root().display());

    let generator = IconGenerator::new(layout);
    let mut stdout_error = None;
    let result = generator.convert(|icon| {
        if stdout_error.is_none() {
            stdout_error = output::created(icon).err();
        }
    });
    if let Some(err) = stdout_error {
        return Err(err.into());
    }

    match result {
        Ok(_) => output::success()?,
        Err(err) => {
            tracing::debug!("conversion failed: {:?}", err);
            output::failure(generator.layout(), &err)?;
        }
    }

    Ok(())
}
