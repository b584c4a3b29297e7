// Copyright @yucwang 2026

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct RenderSettings {
    pub width: usize,
    pub height: usize,
    pub samples_per_pixel: u32,
    pub max_depth: u32,
    pub seed: u64,
    pub block_size: usize,
    /// Worker count; 0 uses the available parallelism.
    pub threads: usize,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            samples_per_pixel: 64,
            max_depth: 8,
            seed: 0,
            block_size: 32,
            threads: 0,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    MissingValue(String),
    InvalidValue { flag: String, value: String },
    UnknownFlag(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingValue(flag) => write!(f, "missing value for {}", flag),
            ConfigError::InvalidValue { flag, value } => write!(f, "invalid value for {}: {}", flag, value),
            ConfigError::UnknownFlag(flag) => write!(f, "unknown flag: {}", flag),
        }
    }
}

impl std::error::Error for ConfigError {}

fn parse_value<T: std::str::FromStr>(flag: &str, value: Option<&String>) -> Result<T, ConfigError> {
    let value = value.ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?;
    value.parse::<T>().map_err(|_| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.clone(),
    })
}

fn parse_positive<T: std::str::FromStr + Default + PartialEq>(flag: &str, value: Option<&String>) -> Result<T, ConfigError> {
    let parsed: T = parse_value(flag, value)?;
    if parsed == T::default() {
        return Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value: value.cloned().unwrap_or_default(),
        });
    }
    Ok(parsed)
}

impl RenderSettings {
    /// Parses `--flag value` pairs on top of the defaults. Arguments that do
    /// not start with `--` are returned in order as positionals.
    pub fn from_args(args: &[String]) -> Result<(Self, Vec<String>), ConfigError> {
        let mut settings = Self::default();
        let mut positional = Vec::new();

        let mut i = 0;
        while i < args.len() {
            let arg = args[i].as_str();
            if !arg.starts_with("--") {
                positional.push(args[i].clone());
                i += 1;
                continue;
            }

            let value = args.get(i + 1);
            match arg {
                "--spp" => settings.samples_per_pixel = parse_positive(arg, value)?,
                "--max-depth" => settings.max_depth = parse_value(arg, value)?,
                "--seed" => settings.seed = parse_value(arg, value)?,
                "--width" => settings.width = parse_positive(arg, value)?,
                "--height" => settings.height = parse_positive(arg, value)?,
                "--block-size" => settings.block_size = parse_positive(arg, value)?,
                "--threads" => settings.threads = parse_value(arg, value)?,
                _ => return Err(ConfigError::UnknownFlag(arg.to_string())),
            }
            i += 2;
        }

        Ok((settings, positional))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_defaults_without_flags() {
        let (settings, positional) = RenderSettings::from_args(&args(&["out.exr"])).expect("valid args");
        assert_eq!(settings, RenderSettings::default());
        assert_eq!(positional, vec!["out.exr".to_string()]);
    }

    #[test]
    fn test_flags_override_defaults() {
        let (settings, positional) = RenderSettings::from_args(&args(&[
            "--spp", "16", "out.png", "--max-depth", "3", "--seed", "42",
            "--width", "320", "--height", "200", "--block-size", "8", "--threads", "2",
        ])).expect("valid args");

        assert_eq!(settings.samples_per_pixel, 16);
        assert_eq!(settings.max_depth, 3);
        assert_eq!(settings.seed, 42);
        assert_eq!(settings.width, 320);
        assert_eq!(settings.height, 200);
        assert_eq!(settings.block_size, 8);
        assert_eq!(settings.threads, 2);
        assert_eq!(positional, vec!["out.png".to_string()]);
    }

    #[test]
    fn test_bad_values() {
        assert_eq!(RenderSettings::from_args(&args(&["--spp"])),
                   Err(ConfigError::MissingValue("--spp".to_string())));
        assert_eq!(RenderSettings::from_args(&args(&["--seed", "abc"])),
                   Err(ConfigError::InvalidValue { flag: "--seed".to_string(), value: "abc".to_string() }));
        assert_eq!(RenderSettings::from_args(&args(&["--width", "0"])),
                   Err(ConfigError::InvalidValue { flag: "--width".to_string(), value: "0".to_string() }));
        assert_eq!(RenderSettings::from_args(&args(&["--camera", "1"])),
                   Err(ConfigError::UnknownFlag("--camera".to_string())));
    }
}
