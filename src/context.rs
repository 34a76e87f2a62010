use std::path::PathBuf;

/// Default identifier used in the archive file name.
pub const DEFAULT_PLUGIN_ID: &str = "w-obsidian-webpage-export";

/// Context passed throughout the application containing global configuration
#[derive(Clone)]
pub struct Context {
    /// Enable verbose output (show command execution details)
    pub verbose: bool,

    /// Directory containing the plugin's distributable files
    pub base_dir: PathBuf,

    /// Directory the archive is written to
    pub output_dir: PathBuf,

    /// Identifier used in the archive file name
    pub plugin_id: String,
}

impl Context {
    pub fn new(
        base_dir: PathBuf,
        output_dir: Option<PathBuf>,
        plugin_id: Option<String>,
        verbose: bool,
    ) -> Self {
        let output_dir = match output_dir {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => base_dir.join(dir),
            None => base_dir.join("releases"),
        };

        Self {
            verbose,
            base_dir,
            output_dir,
            plugin_id: plugin_id.unwrap_or_else(|| DEFAULT_PLUGIN_ID.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_dir_defaults_to_releases() {
        let ctx = Context::new(PathBuf::from("/plugin"), None, None, false);
        assert_eq!(ctx.output_dir, PathBuf::from("/plugin/releases"));
        assert_eq!(ctx.plugin_id, DEFAULT_PLUGIN_ID);
    }

    #[test]
    fn test_relative_output_dir_resolved_against_base() {
        let ctx = Context::new(
            PathBuf::from("/plugin"),
            Some(PathBuf::from("dist")),
            Some("my-plugin".to_string()),
            true,
        );
        assert_eq!(ctx.output_dir, PathBuf::from("/plugin/dist"));
        assert_eq!(ctx.plugin_id, "my-plugin");
    }

    #[test]
    fn test_absolute_output_dir_kept() {
        let ctx = Context::new(
            PathBuf::from("/plugin"),
            Some(PathBuf::from("/tmp/out")),
            None,
            false,
        );
        assert_eq!(ctx.output_dir, PathBuf::from("/tmp/out"));
    }
}
