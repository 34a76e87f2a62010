use crate::cmd;
use crate::context::Context;
use crate::error::Error;
use crate::manifest::Manifest;
use crate::result::Result;
use crate::tpl::{DEFAULT_FILENAME_TPL, Tpl};
use crate::utils;
use std::path::PathBuf;

/// Files that must be present in the project root for a release.
pub const REQUIRED_FILES: &[&str] = &["main.js", "manifest.json"];

/// Files included only when present.
pub const OPTIONAL_FILES: &[&str] = &["styles.css"];

/// Compute the archive file name from the template variables.
pub fn archive_file_name(
    plugin_id: &str,
    version: &str,
    date: &str,
    template: Option<&str>,
) -> String {
    let tpl = Tpl::for_archive(plugin_id, version, date);
    tpl.parse(template.unwrap_or(DEFAULT_FILENAME_TPL))
}

/// Collect the distributable files, verifying every required file exists.
/// Paths are relative to the project root; the zip invocation junks them
/// anyway so entries land at the archive root.
pub fn collect_files(ctx: &Context) -> Result<Vec<&'static str>> {
    let mut files = Vec::new();

    for file in REQUIRED_FILES {
        if ctx.base_dir.join(file).is_file() {
            files.push(*file);
        } else {
            return Err(Error::MissingFile(file.to_string()));
        }
    }

    for file in OPTIONAL_FILES {
        if ctx.base_dir.join(file).is_file() {
            files.push(*file);
        } else {
            println!("Info: Optional file \"{}\" not found. Skipping.", file);
        }
    }

    if files.is_empty() {
        return Err(Error::NothingToPackage);
    }

    Ok(files)
}

/// Bundle the collected files into the dated release archive by invoking
/// the system zip utility. Returns the archive path.
pub fn create_zip(ctx: &Context, manifest: &Manifest, template: Option<&str>) -> Result<PathBuf> {
    // Validation happens before the subprocess is ever spawned
    let files = collect_files(ctx)?;

    let date = utils::date_stamp()?;
    let archive_filename = archive_file_name(&ctx.plugin_id, manifest.version(), &date, template);

    utils::ensure_dir(&ctx.output_dir)?;
    let archive_path = ctx.output_dir.join(&archive_filename);

    if ctx.verbose {
        for file in &files {
            println!("Adding {}", file);
        }
    }

    let archive_arg = archive_path.display().to_string();
    // -j junks directory paths, storing entries at the archive root
    let mut args = vec!["-j", archive_arg.as_str()];
    args.extend(files.iter().copied());

    cmd::execute_in(ctx, &ctx.base_dir, "zip", &args)?;

    Ok(archive_path)
}
