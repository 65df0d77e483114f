//! Command implementations for RegionView CLI

pub mod locate;
pub mod regions;

use anyhow::{Context, Result};
use clap::ValueEnum;
use regionview_core::annotation::read_json_intervals_from_path;
use regionview_core::{Gff3Reader, Interval, RegionViewer};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{CliError, CliResult};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Gff3,
    Json,
}

/// Where the intervals of a command come from.
#[derive(Debug, Clone)]
pub struct InputSpec {
    pub path: PathBuf,
    pub format: Option<InputFormat>,
    pub transcript: Option<String>,
}

pub fn detect_format(path: &Path) -> CliResult<InputFormat> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("")
        .to_lowercase();

    if name.ends_with(".json") {
        Ok(InputFormat::Json)
    } else if name.ends_with(".gff3") || name.ends_with(".gff") || name.ends_with(".gtf") {
        Ok(InputFormat::Gff3)
    } else {
        Err(CliError::invalid_format(format!(
            "cannot detect the format of {}",
            path.display()
        )))
    }
}

pub fn load_intervals(input: &InputSpec) -> Result<Vec<Interval>> {
    if !input.path.exists() {
        return Err(CliError::file_not_found(input.path.clone()).into());
    }

    let format = match input.format {
        Some(format) => {
            log::info!("Using user-specified format: {:?}", format);
            format
        }
        None => {
            let format = detect_format(&input.path)?;
            log::info!("Auto-detected format: {:?} (use --format to override)", format);
            format
        }
    };

    let intervals = match format {
        InputFormat::Gff3 => Gff3Reader::from_path(&input.path)
            .and_then(|reader| reader.read_intervals(input.transcript.as_deref()))
            .map_err(CliError::from),
        InputFormat::Json => {
            if input.transcript.is_some() {
                log::warn!("--transcript is ignored for JSON input");
            }
            read_json_intervals_from_path(&input.path).map_err(CliError::from)
        }
    }
    .with_context(|| format!("Failed to read intervals from {}", input.path.display()))?;

    log::info!("Loaded {} intervals", intervals.len());
    Ok(intervals)
}

pub fn build_viewer(config: &Config, input: &InputSpec) -> Result<RegionViewer> {
    let intervals = load_intervals(input)?;
    let viewer = RegionViewer::new(&intervals, &config.viewer).map_err(CliError::from)?;
    Ok(viewer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::Builder;

    #[test]
    fn test_detect_format() {
        assert_eq!(detect_format(Path::new("a/genes.gff3")).unwrap(), InputFormat::Gff3);
        assert_eq!(detect_format(Path::new("exons.JSON")).unwrap(), InputFormat::Json);
        assert!(matches!(
            detect_format(Path::new("exons.bed")),
            Err(CliError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_build_viewer_from_json() -> Result<()> {
        let mut file = Builder::new().suffix(".json").tempfile()?;
        write!(
            file,
            r#"[{{"feature_type": "CDS", "start": 100, "stop": 199}},
                {{"feature_type": "CDS", "start": 900, "stop": 999}}]"#
        )?;

        let input = InputSpec {
            path: file.path().to_path_buf(),
            format: None,
            transcript: None,
        };
        let viewer = build_viewer(&Config::default(), &input)?;
        assert_eq!(viewer.offset_regions().len(), 6);
        Ok(())
    }

    #[test]
    fn test_missing_input_file() {
        let input = InputSpec {
            path: PathBuf::from("/nonexistent/regions.json"),
            format: None,
            transcript: None,
        };
        let err = load_intervals(&input).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::FileNotFound { .. })
        ));
    }
}
