use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use chipfield_logging::chip_info;
use chipfield_widget::Options;

/// Loads widget options from a `.ron` or `.json` file.
pub(crate) fn load_options(path: &Path) -> anyhow::Result<Options> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read options from {:?}", path))?;

    let options = match path.extension().and_then(|ext| ext.to_str()) {
        Some("ron") => ron::from_str(&content)
            .with_context(|| format!("failed to parse RON options in {:?}", path))?,
        Some("json") => serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON options in {:?}", path))?,
        other => bail!("unsupported options format {:?} for {:?}", other, path),
    };

    chip_info!("Loaded options from {:?}", path);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chipfield_widget::Toggle;
    use tempfile::TempDir;

    #[test]
    fn loads_json_with_camel_case_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("options.json");
        fs::write(
            &path,
            r#"{"maxItems": 5, "allowDuplicates": false, "delimiter": ";"}"#,
        )
        .unwrap();

        let options = load_options(&path).unwrap();
        assert_eq!(options.max_items, Toggle::Value(5));
        assert!(!options.allow_duplicates);
        assert_eq!(options.delimiter, ";");
        assert!(options.select_all);
    }

    #[test]
    fn loads_ron() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("options.ron");
        fs::write(
            &path,
            r#"(editItems: true, regexFilter: "^[a-z]+$", items: ["one", "two"])"#,
        )
        .unwrap();

        let options = load_options(&path).unwrap();
        assert!(options.edit_items);
        assert_eq!(options.regex_filter, Toggle::Value("^[a-z]+$".to_string()));
        assert_eq!(options.items, vec!["one", "two"]);
    }

    #[test]
    fn rejects_unknown_extension() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("options.yaml");
        fs::write(&path, "maxItems: 3").unwrap();

        assert!(load_options(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        assert!(load_options(&temp.path().join("absent.json")).is_err());
    }
}
