/// Resolves $VARIABLE references in archive file-name templates
pub struct Tpl {
    variables: Vec<(String, String)>,
}

/// Template producing the standard `<id>-<version>-<date>.zip` name.
pub const DEFAULT_FILENAME_TPL: &str = "$ID-$VERSION-$DATE.zip";

impl Tpl {
    /// Build the variable set available to archive name templates.
    pub fn for_archive(id: &str, version: &str, date: &str) -> Self {
        let mut tpl = Self { variables: Vec::new() };
        tpl.register("ID", id);
        tpl.register("VERSION", version);
        tpl.register("DATE", date);
        tpl
    }

    pub fn register<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.variables.push((key.into(), value.into()));
    }

    /// Resolve every $VARIABLE reference in the input.
    pub fn parse(&self, input: &str) -> String {
        let mut result = input.to_string();

        for (key, value) in &self.variables {
            result = result.replace(&format!("${}", key), value);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template() {
        let tpl = Tpl::for_archive("w-obsidian-webpage-export", "1.2.3", "20250506");
        assert_eq!(
            tpl.parse(DEFAULT_FILENAME_TPL),
            "w-obsidian-webpage-export-1.2.3-20250506.zip"
        );
    }

    #[test]
    fn test_custom_template_with_repeats() {
        let tpl = Tpl::for_archive("plugin", "0.1.0", "20260830");
        assert_eq!(
            tpl.parse("$ID/$ID-$VERSION.zip"),
            "plugin/plugin-0.1.0.zip"
        );
    }

    #[test]
    fn test_unknown_variables_left_alone() {
        let tpl = Tpl::for_archive("plugin", "0.1.0", "20260830");
        assert_eq!(tpl.parse("$ID-$PLATFORM.zip"), "plugin-$PLATFORM.zip");
    }
}
