use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use shared::config::ClientConfig;

/// Writes the default client configuration to `config.<format>` in the
/// current directory.
///
/// # Errors
/// Returns an error if the format is unsupported or writing the file fails.
pub fn generate_config(format: &str) -> Result<()> {
    generate_config_in(Path::new("."), format).map(|path| {
        println!("Configuration file '{path}' generated successfully.");
    })
}

fn generate_config_in(dir: &Path, format: &str) -> Result<String> {
    let config = ClientConfig::with_defaults();
    let (file_name, serialized) = match format {
        "yaml" => ("config.yaml", serde_yml::to_string(&config)?),
        "json" => ("config.json", serde_json::to_string_pretty(&config)?),
        "toml" => ("config.toml", toml::to_string_pretty(&config)?),
        other => bail!("unsupported format '{other}'. Use 'yaml', 'json' or 'toml'."),
    };

    let path = dir.join(file_name);
    fs::write(&path, serialized).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_generated_files_load_back() {
        let dir = TempDir::new().unwrap();
        for format in ["yaml", "json", "toml"] {
            let path = generate_config_in(dir.path(), format).unwrap();
            let content = fs::read_to_string(&path).unwrap();
            assert!(content.contains("csrftoken"), "{format}: {content}");
        }
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let dir = TempDir::new().unwrap();
        let err = generate_config_in(dir.path(), "ini").unwrap_err();
        assert!(err.to_string().contains("unsupported format"));
    }
}
