//! Locate and invert commands - map bases to pixels and pixels to bases

use anyhow::{Context, Result};
use regionview_core::{Position, RegionViewer};
use serde::Serialize;
use std::io::Write;

use crate::config::{Config, OutputFormat};

#[derive(Debug, Serialize)]
struct LocateRow {
    position: Position,
    offset_position: Position,
    x: f64,
    defined: bool,
}

#[derive(Debug, Serialize)]
struct InvertRow {
    x: f64,
    position: Position,
}

pub fn locate<W: Write>(
    config: &Config,
    viewer: &RegionViewer,
    positions: &[Position],
    out: &mut W,
) -> Result<()> {
    let rows: Vec<LocateRow> = positions
        .iter()
        .map(|&position| LocateRow {
            position,
            offset_position: viewer.position_offset(position).offset_position,
            x: viewer.scale_position(position),
            defined: viewer.is_position_defined(position),
        })
        .collect();

    let undefined = rows.iter().filter(|row| !row.defined).count();
    if undefined > 0 {
        log::info!("{} positions fall outside the displayed regions and were clamped", undefined);
    }

    match config.output.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows).context("Failed to serialize positions")?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let precision = config.output.precision;
            writeln!(out, "position\toffset_position\tx\tdefined")?;
            for row in &rows {
                writeln!(
                    out,
                    "{}\t{}\t{:.*}\t{}",
                    row.position, row.offset_position, precision, row.x, row.defined
                )?;
            }
        }
    }

    Ok(())
}

pub fn invert<W: Write>(
    config: &Config,
    viewer: &RegionViewer,
    pixels: &[f64],
    out: &mut W,
) -> Result<()> {
    let rows: Vec<InvertRow> = pixels
        .iter()
        .map(|&x| InvertRow {
            x,
            position: viewer.invert_offset(x),
        })
        .collect();

    match config.output.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows).context("Failed to serialize pixels")?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            writeln!(out, "x\tposition")?;
            for row in &rows {
                writeln!(out, "{}\t{}", row.x, row.position)?;
            }
        }
    }

    Ok(())
}
