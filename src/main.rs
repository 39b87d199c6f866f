mod cli;
mod error;
mod logging;
mod output;

use clap::Parser;
use cli::Args;
use error::AppError;
use export_versioner::config::config_from_env;
use export_versioner::profile::EncodingProfile;
use export_versioner::project::clean_project_label;
use export_versioner::resolver::{resolve_next_filename, ResolveOptions};
use export_versioner::scanner::{DirectoryListing, FsListing};
use output::{display_json, display_name_only, display_summary, should_use_colors};
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    logging::init(args.verbose);

    if let Err(e) = run(args) {
        error!("{}", e);
        eprintln!("\nError: {}", e.detailed_message());
        std::process::exit(e.exit_code().into());
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = config_from_env();
    debug!(?config, "Configuration loaded");

    // An empty path is left to the resolver, which reports it as a failed resolution
    if !args.export_dir.as_os_str().is_empty() {
        FsListing.validate_root(&args.export_dir)?;
    }

    let profile_id = args.profile.unwrap_or(config.profile);
    let profile = EncodingProfile::new(profile_id.clone()).map_err(|source| {
        AppError::InvalidProfile {
            profile: profile_id,
            source,
        }
    })?;

    if !profile.is_known() {
        debug!(profile = %profile, "Unrecognized encoding profile, exporting as .mp4");
    }

    let project = args.project.or(config.project).unwrap_or_default();
    let options = ResolveOptions::new(profile, clean_project_label(&project)).with_override(args.name);

    info!("Resolving next version in {:?}", args.export_dir);
    let result = resolve_next_filename(&args.export_dir, &options);

    if !result.success {
        return Err(AppError::ResolutionFailed {
            message: result.error.unwrap_or_default(),
        });
    }

    let mut stdout = std::io::stdout();
    let written = if args.json {
        display_json(&result, &mut stdout)
    } else if args.name_only {
        display_name_only(&result, &mut stdout)
    } else {
        display_summary(&result, &args.export_dir, should_use_colors(), &mut stdout)
    };

    written.map_err(|e| AppError::Other(format!("Failed to display output: {}", e)))
}
