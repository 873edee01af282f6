use crate::args::SourceArgs;
use crate::config::load_options;
use anyhow::{Context, Result};
use fcmkit::{FcmBuilder, FcmOptions, OptionsExt, SETTINGS};
use std::io::Write;
use tracing::warn;

/// Merges file, environment and flags into one snapshot; flags win.
///
/// # Errors
/// Fails if the options file or environment layer cannot be loaded.
pub fn assemble(source: SourceArgs) -> Result<FcmOptions> {
    let base = load_options(source.config.as_deref())?;
    Ok(source.settings.apply(FcmBuilder::from(base)).build())
}

/// `fcmkit build`: writes the options JSON followed by a newline.
///
/// # Errors
/// Fails on loading errors, rendering errors or a closed output stream.
pub fn build(source: SourceArgs, pretty: bool, out: &mut impl Write) -> Result<()> {
    let options = assemble(source)?;
    let json = if pretty { options.to_json_pretty()? } else { options.to_json()? };
    writeln!(out, "{json}").context("Writing options JSON")?;
    Ok(())
}

/// `fcmkit check`: one line per set key, then one `unrecognized` line per undocumented
/// enum value. Undocumented values are reported, never rejected.
///
/// # Errors
/// Fails on loading errors or a closed output stream.
pub fn check(source: SourceArgs, out: &mut impl Write) -> Result<()> {
    let options = assemble(source)?;

    if options.is_empty() {
        writeln!(out, "no settings")?;
    }
    for key in options.keys() {
        writeln!(out, "{key}")?;
    }
    for (key, value) in options.unrecognized() {
        warn!(key, value = %value, "Value is outside the documented set; it will be sent as-is");
        writeln!(out, "unrecognized {key}={value}")?;
    }
    Ok(())
}

/// `fcmkit settings`: every recognized key, one per line.
///
/// # Errors
/// Fails on a closed output stream.
pub fn settings(out: &mut impl Write) -> Result<()> {
    for key in SETTINGS {
        writeln!(out, "{key}")?;
    }
    Ok(())
}
