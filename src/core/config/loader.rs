use std::{fs, path::Path};

use super::{Config, ConfigError, ConfigPaths};

pub struct ConfigLoader<'a> {
    paths: &'a ConfigPaths,
}

impl<'a> ConfigLoader<'a> {
    pub fn new(paths: &'a ConfigPaths) -> Self {
        Self { paths }
    }

    pub fn load_configs(&self, config: &mut Config) -> Result<(), ConfigError> {
        let path = &self.paths.rc_path;
        if self.paths.explicit && !path.exists() {
            return Err(ConfigError::ConfigFileNotFound(path.display().to_string()));
        }
        self.source_if_exists(path, config)
    }

    fn source_if_exists(&self, path: &Path, config: &mut Config) -> Result<(), ConfigError> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            for (number, line) in content.lines().enumerate() {
                self.process_line(number + 1, line, config);
            }
        }
        Ok(())
    }

    fn process_line(&self, number: usize, line: &str, config: &mut Config) {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return;
        }

        if let Some(definition) = line.strip_prefix("alias ") {
            self.process_alias(number, definition, config);
            return;
        }

        let Some((key, value)) = line.split_once('=') else {
            config.warn(format!("line {}: expected key=value, got {:?}", number, line));
            return;
        };
        let value = unquote(value.trim());
        match key.trim() {
            "color" => match value {
                "on" | "true" | "yes" => config.color = Some(true),
                "off" | "false" | "no" => config.color = Some(false),
                "auto" => config.color = None,
                other => config.warn(format!("line {}: invalid color value {:?}", number, other)),
            },
            "log" => config.log_filter = Some(value.to_string()),
            "prompt" => config.prompt = value.to_string(),
            other => config.warn(format!("line {}: unknown setting {:?}", number, other)),
        }
    }

    fn process_alias(&self, number: usize, definition: &str, config: &mut Config) {
        match definition.split_once('=') {
            Some((name, target)) => {
                config.aliases.add(name.trim(), unquote(target.trim()));
            }
            None => config.warn(format!("line {}: alias needs name=command", number)),
        }
    }
}

/// Strips one pair of matching single or double quotes.
fn unquote(value: &str) -> &str {
    if value.len() >= 2
        && ((value.starts_with('\'') && value.ends_with('\''))
            || (value.starts_with('"') && value.ends_with('"')))
    {
        &value[1..value.len() - 1]
    } else {
        value
    }
}
