//! Regions command - print the padded, collapsed coordinate system

use anyhow::{Context, Result};
use regionview_core::{Position, RegionKind, RegionViewer};
use serde::Serialize;
use std::io::Write;

use crate::config::{Config, OutputFormat};

#[derive(Debug, Serialize)]
struct RegionRow {
    kind: RegionKind,
    start: Position,
    stop: Position,
    offset: Position,
    x_start: f64,
    x_stop: f64,
}

fn rows(viewer: &RegionViewer) -> Vec<RegionRow> {
    viewer
        .offset_regions()
        .iter()
        .zip(viewer.pixel_spans())
        .map(|(region, span)| RegionRow {
            kind: region.kind.clone(),
            start: region.start,
            stop: region.stop,
            offset: region.offset,
            x_start: span.x_start,
            x_stop: span.x_stop,
        })
        .collect()
}

pub fn execute<W: Write>(config: &Config, viewer: &RegionViewer, out: &mut W) -> Result<()> {
    let rows = rows(viewer);
    log::debug!("Writing {} regions", rows.len());

    match config.output.format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &rows)
                .context("Failed to serialize regions")?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            let precision = config.output.precision;
            writeln!(out, "kind\tstart\tstop\toffset\tx_start\tx_stop")?;
            for row in &rows {
                writeln!(
                    out,
                    "{}\t{}\t{}\t{}\t{:.*}\t{:.*}",
                    row.kind,
                    row.start,
                    row.stop,
                    row.offset,
                    precision,
                    row.x_start,
                    precision,
                    row.x_stop
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regionview_core::{Interval, ViewerParams};

    fn viewer() -> RegionViewer {
        let intervals = vec![Interval::new("CDS", 100, 199), Interval::new("CDS", 230, 299)];
        let params = ViewerParams::default().with_padding(20).with_width(100.0);
        RegionViewer::new(&intervals, &params).unwrap()
    }

    #[test]
    fn test_table_output() {
        let mut out = Vec::new();
        execute(&Config::default(), &viewer(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(lines[1], "start_pad\t80\t99\t0\t0.00\t8.05");
        assert!(lines[3].starts_with("intron\t199\t229\t"));
        assert!(lines[5].ends_with("\t100.00"));
    }

    #[test]
    fn test_json_output() {
        let mut config = Config::default();
        config.output.format = OutputFormat::Json;
        let mut out = Vec::new();
        execute(&config, &viewer(), &mut out).unwrap();

        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[2]["kind"], "intron");
        assert_eq!(rows[2]["offset"], 1);
    }
}
