//! hdrmig's main application entry point.
//! Parses arguments, resolves settings and runs the migration over the root.

use hdrmig::{
    cli::{get_args, Args},
    config::Settings,
    error::{default_error_handler, MigrationResult},
    logger::init_logger,
    processor::Migrator,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    match run(args) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => default_error_handler(err),
    }
}

/// Main application logic execution.
///
/// # Returns
/// * `MigrationResult<bool>` - `false` when check mode found files that would change
///
/// # Flow
/// 1. Resolves settings from defaults, config file, ignore file and arguments
/// 2. Compiles markers and globs
/// 3. Rewrites every matching header under the root
fn run(args: Args) -> MigrationResult<bool> {
    let settings = Settings::from_args(&args)?;
    log::debug!("Resolved settings: {:?}", settings);

    let migrator = Migrator::new(&settings)?;
    let summary = migrator.run(&settings.root)?;

    if settings.check {
        for path in &summary.changed {
            println!("would rewrite: '{}'", path.display());
        }
        println!(
            "{} of {} header files would change in {}.",
            summary.changed.len(),
            summary.scanned,
            settings.root.display()
        );
        return Ok(summary.changed.is_empty());
    }

    println!(
        "Migrated {} header files ({} changed) in {}.",
        summary.scanned,
        summary.changed.len(),
        settings.root.display()
    );
    if !summary.unterminated.is_empty() {
        log::warn!(
            "{} file(s) end inside an open declaration comment",
            summary.unterminated.len()
        );
    }
    Ok(true)
}
