use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Command-line arguments for the plugin-pack tool
#[derive(Debug)]
pub struct Args {
    /// Enable verbose output
    pub verbose: bool,

    /// Path to the plugin project directory
    pub path: Option<PathBuf>,

    /// Output directory for the archive
    pub output: Option<PathBuf>,

    /// Override the plugin identifier used in the archive name
    pub id: Option<String>,

    /// Archive file-name template ($ID, $VERSION, $DATE)
    pub filename: Option<String>,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        let matches = Command::new("plugin-pack")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Packages an Obsidian plugin build into a dated release zip")
            .arg(
                Arg::new("path")
                    .short('p')
                    .long("path")
                    .value_name("PATH")
                    .help("Plugin project directory (defaults to the current directory)")
            )
            .arg(
                Arg::new("output")
                    .short('o')
                    .long("output")
                    .value_name("DIR")
                    .help("Output directory for the zip archive (default: releases)")
            )
            .arg(
                Arg::new("id")
                    .long("id")
                    .value_name("ID")
                    .help("Plugin identifier used in the archive name")
            )
            .arg(
                Arg::new("filename")
                    .short('f')
                    .long("filename")
                    .value_name("TEMPLATE")
                    .help("Archive file-name template, e.g. $ID-$VERSION-$DATE.zip")
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::SetTrue)
                    .help("Enable verbose output")
            )
            .get_matches();

        Self {
            verbose: matches.get_flag("verbose"),
            path: matches.get_one::<String>("path").map(PathBuf::from),
            output: matches.get_one::<String>("output").map(PathBuf::from),
            id: matches.get_one::<String>("id").cloned(),
            filename: matches.get_one::<String>("filename").cloned(),
        }
    }
}
