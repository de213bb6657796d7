use anyhow::Result;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

/// Installs a stderr logger for this crate at the level asked for on the
/// command line. Logging from other crates is dropped.
pub(crate) fn configure(verbosity: &Verbosity<WarnLevel>) -> Result<()> {
    let config = ConfigBuilder::new()
        .add_filter_allow_str("drawable")
        .build();
    TermLogger::init(
        verbosity.log_level_filter(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}
