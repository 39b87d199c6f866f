//! Rendering of a resolution result for the terminal or for scripts.

use colored::Colorize;
use export_versioner::resolver::ResolutionResult;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    io::stdout().is_terminal()
}

/// Display a human-readable summary of the detected and next version
pub fn display_summary(
    result: &ResolutionResult,
    export_dir: &Path,
    colors_enabled: bool,
    writer: &mut impl Write,
) -> io::Result<()> {
    let notation = result.notation;

    writeln!(writer)?;
    writeln!(writer, "Export directory: {}", export_dir.display())?;

    match &result.prior_filename {
        Some(prior) => {
            writeln!(writer, "Previous file:    {}", prior)?;
            writeln!(
                writer,
                "Detected version: {}",
                notation.format_version(result.prior_version_number)
            )?;
        }
        None => {
            writeln!(writer, "Previous file:    none")?;
            writeln!(writer, "Detected version: none")?;
        }
    }

    let next_version = notation.format_version(result.next_version_number);
    writeln!(writer, "Base name:        {}", result.base_name)?;

    if colors_enabled {
        writeln!(writer, "New version:      {}", next_version.green().bold())?;
        writeln!(writer, "New filename:     {}", result.final_filename.cyan())?;
    } else {
        writeln!(writer, "New version:      {}", next_version)?;
        writeln!(writer, "New filename:     {}", result.final_filename)?;
    }

    Ok(())
}

/// Display the full result as pretty-printed JSON
pub fn display_json(result: &ResolutionResult, writer: &mut impl Write) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, result)?;
    writeln!(writer)
}

/// Display only the new filename, for scripting
pub fn display_name_only(result: &ResolutionResult, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "{}", result.final_filename)
}
