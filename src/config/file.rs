use std::{path::Path, str::FromStr};

use ini::{Ini, Properties};
use log::info;

use crate::error::{PlannerError, Result};

use super::config::PlannerConfig;

pub const SECTION: &str = "MAIN";

/// Loads a [`PlannerConfig`] from the `[MAIN]` section of an INI file.
///
/// Keys: `BATCH_SIZE`, `INITIAL_DIMS`, `HIDDEN_DIMS`, `STRIDE`, `PADDING`,
/// `KERNEL_SIZE`, `OUT_PADDING` and `LAYERS`. Lists are comma separated.
/// Absent keys keep their defaults.
pub fn load(path: impl AsRef<Path>) -> Result<PlannerConfig> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(PlannerError::ConfigNotFound(path.to_path_buf()));
    }

    let ini = Ini::load_from_file(path)?;
    let config = from_ini(&ini)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

pub fn load_from_str(contents: &str) -> Result<PlannerConfig> {
    let ini = Ini::load_from_str(contents).map_err(|e| PlannerError::Ini(ini::Error::Parse(e)))?;
    from_ini(&ini)
}

fn from_ini(ini: &Ini) -> Result<PlannerConfig> {
    let main = ini
        .section(Some(SECTION))
        .ok_or_else(|| PlannerError::MissingSection(SECTION.to_string()))?;

    let mut config = PlannerConfig::default();
    if let Some(v) = scalar(main, "BATCH_SIZE")? {
        config.batch_size = v;
    }
    if let Some(v) = list(main, "INITIAL_DIMS")? {
        config.initial_dims = v;
    }
    if let Some(v) = list(main, "HIDDEN_DIMS")? {
        config.hidden_dims = v;
    }
    if let Some(v) = list(main, "STRIDE")? {
        config.stride = v;
    }
    if let Some(v) = list(main, "PADDING")? {
        config.padding = v;
    }
    if let Some(v) = list(main, "KERNEL_SIZE")? {
        config.kernel_size = v;
    }
    if let Some(v) = list(main, "OUT_PADDING")? {
        config.output_padding = v;
    }
    if let Some(v) = main.get("LAYERS") {
        config.layers = v.trim().to_string();
    }
    Ok(config)
}

fn parse_value<T: FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.trim().parse().map_err(|_| PlannerError::InvalidValue {
        key: key.to_string(),
        value: raw.to_string(),
    })
}

fn scalar(section: &Properties, key: &str) -> Result<Option<usize>> {
    section.get(key).map(|raw| parse_value(key, raw)).transpose()
}

fn list(section: &Properties, key: &str) -> Result<Option<Vec<usize>>> {
    section
        .get(key)
        .map(|raw| {
            raw.split(',')
                .map(|item| parse_value(key, item))
                .collect::<Result<Vec<_>>>()
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_every_key() {
        let config = load_from_str(
            "[MAIN]
BATCH_SIZE = 16
INITIAL_DIMS = 3, 64, 64
HIDDEN_DIMS = 32,64
STRIDE = 2
PADDING = 1
KERNEL_SIZE = 4
OUT_PADDING = 0, 1
LAYERS = ct
",
        )
        .unwrap();

        assert_eq!(
            config,
            PlannerConfig {
                batch_size: 16,
                initial_dims: vec![3, 64, 64],
                hidden_dims: vec![32, 64],
                stride: vec![2],
                padding: vec![1],
                kernel_size: vec![4],
                output_padding: vec![0, 1],
                layers: "ct".to_string(),
                strict_layers: false,
            }
        );
    }

    #[test]
    fn absent_keys_keep_defaults() {
        let config = load_from_str("[MAIN]\nBATCH_SIZE = 8\n").unwrap();
        assert_eq!(
            config,
            PlannerConfig {
                batch_size: 8,
                ..Default::default()
            }
        );
    }

    #[test]
    fn missing_section_is_an_error() {
        let err = load_from_str("[OTHER]\nBATCH_SIZE = 8\n").unwrap_err();
        assert!(matches!(err, PlannerError::MissingSection(s) if s == "MAIN"));
    }

    #[test]
    fn bad_numbers_name_the_key() {
        let err = load_from_str("[MAIN]\nSTRIDE = 2, two\n").unwrap_err();
        assert!(matches!(
            err,
            PlannerError::InvalidValue { ref key, .. } if key == "STRIDE"
        ));

        let err = load_from_str("[MAIN]\nBATCH_SIZE = -1\n").unwrap_err();
        assert!(matches!(err, PlannerError::InvalidValue { .. }));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load("/definitely/not/here.ini").unwrap_err();
        assert!(matches!(err, PlannerError::ConfigNotFound(_)));
    }
}
