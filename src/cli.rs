use clap::Parser;
use std::convert::Infallible;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "export-versioner")]
#[command(author, version, about, long_about = None)]
#[command(about = "Derive the next versioned filename for a media export directory")]
pub struct Args {
    /// Export directory containing previous exports
    #[arg(value_parser = parse_export_dir)]
    pub export_dir: PathBuf,

    /// Encoding profile: 10mbps, 48mbps, prores422, prores444 or any other tag
    #[arg(short, long, value_name = "PROFILE")]
    pub profile: Option<String>,

    /// Base name for the first export when no previous version exists
    #[arg(short, long, value_name = "NAME")]
    pub name: Option<String>,

    /// Project name or project file path used as the fallback base name
    #[arg(long, value_name = "PROJECT")]
    pub project: Option<String>,

    /// Print the result as JSON
    #[arg(long, conflicts_with = "name_only")]
    pub json: bool,

    /// Print only the new filename
    #[arg(long)]
    pub name_only: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Accepts an empty path so the resolver can report it as such.
fn parse_export_dir(value: &str) -> Result<PathBuf, Infallible> {
    Ok(PathBuf::from(value))
}
