mod archive;
mod args;
mod cmd;
mod context;
mod error;
mod manifest;
mod result;
mod tpl;
mod utils;

use args::Args;
use context::Context;
use manifest::Manifest;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> result::Result<()> {
    // Parse command-line arguments
    let Args {
        verbose,
        path,
        output,
        id,
        filename,
    } = Args::parse();

    // Locate the plugin project directory
    let base_dir = utils::resolve_base_dir(path.as_deref())?;

    // Create context
    let ctx = Context::new(base_dir, output, id, verbose);

    // Use cliclack for nice UI
    cliclack::intro("plugin-pack")?;

    // Load manifest
    let manifest = {
        let spinner = cliclack::spinner();
        spinner.start("Loading manifest...");
        match Manifest::load(&ctx) {
            Ok(m) => {
                spinner.stop(format!(
                    "Loaded manifest for {} v{}",
                    m.display_name(),
                    m.version()
                ));
                m
            }
            Err(e) => {
                spinner.error("Failed to load manifest");
                return Err(e);
            }
        }
    };

    // Package the distributable files
    let archive_path = {
        let spinner = cliclack::spinner();
        spinner.start("Creating zip archive...");
        match archive::create_zip(&ctx, &manifest, filename.as_deref()) {
            Ok(path) => {
                spinner.stop(format!("Archive created: {}", path.display()));
                path
            }
            Err(e) => {
                spinner.error("Failed to create archive");
                return Err(e);
            }
        }
    };

    cliclack::outro(format!(
        "Successfully created zip file: {}",
        archive_path.display()
    ))?;
    Ok(())
}
