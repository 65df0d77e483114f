//! Interval readers for GFF3 annotations and JSON interval lists

use crate::error::{RegionError, RegionResult};
use crate::types::{Interval, Position};
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// One GFF3 feature line reduced to what the coordinate engine needs.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotationRecord {
    pub seqname: String,
    pub feature_type: String,
    pub start: Position,
    pub stop: Position,
    pub attributes: HashMap<String, String>,
}

impl AnnotationRecord {
    pub fn get_attribute(&self, key: &str) -> Option<&String> {
        self.attributes.get(key)
    }

    /// Whether this feature belongs to `transcript_id`, through either a
    /// `transcript_id` attribute or one of its `Parent` ids.
    pub fn belongs_to(&self, transcript_id: &str) -> bool {
        if self.get_attribute("transcript_id").map(String::as_str) == Some(transcript_id) {
            return true;
        }
        self.get_attribute("Parent").map_or(false, |parents| {
            parents.split(',').any(|parent| {
                let parent = parent.trim();
                parent == transcript_id
                    || parent.strip_prefix("transcript:") == Some(transcript_id)
            })
        })
    }

    pub fn to_interval(&self) -> Interval {
        Interval::new(self.feature_type.clone(), self.start, self.stop)
    }
}

pub struct Gff3Reader<R: BufRead> {
    reader: R,
}

impl Gff3Reader<BufReader<File>> {
    pub fn from_path<P: AsRef<Path>>(path: P) -> RegionResult<Self> {
        let file = File::open(path)?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Gff3Reader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn read_records(self) -> RegionResult<Vec<AnnotationRecord>> {
        let mut records = Vec::new();

        for (index, line) in self.reader.lines().enumerate() {
            let line = line?;
            let line = line.trim_end();

            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            records.push(parse_gff3_line(line, index + 1)?);
        }

        log::debug!("Read {} GFF3 records", records.len());
        Ok(records)
    }

    /// Read the intervals of one transcript, or of the whole file when
    /// `transcript_id` is `None`.
    pub fn read_intervals(self, transcript_id: Option<&str>) -> RegionResult<Vec<Interval>> {
        let records = self.read_records()?;

        let selected: Vec<&AnnotationRecord> = records
            .iter()
            .filter(|record| transcript_id.map_or(true, |id| record.belongs_to(id)))
            .collect();

        if let Some(first) = selected.first() {
            if selected.iter().any(|record| record.seqname != first.seqname) {
                log::warn!(
                    "Selected features span several sequences (first: {}); positions are treated as one coordinate system",
                    first.seqname
                );
            }
        }

        Ok(selected.into_iter().map(AnnotationRecord::to_interval).collect())
    }
}

fn parse_gff3_line(line: &str, line_number: usize) -> RegionResult<AnnotationRecord> {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() != 9 {
        return Err(RegionError::parse(
            line_number,
            format!("GFF3 line must have 9 fields, found {}", fields.len()),
        ));
    }

    let start: Position = fields[3]
        .parse()
        .map_err(|_| RegionError::parse(line_number, format!("Invalid start: {}", fields[3])))?;
    let stop: Position = fields[4]
        .parse()
        .map_err(|_| RegionError::parse(line_number, format!("Invalid end: {}", fields[4])))?;

    Ok(AnnotationRecord {
        seqname: fields[0].to_string(),
        feature_type: fields[2].to_string(),
        start,
        stop,
        attributes: parse_attributes(fields[8]),
    })
}

/// Parse `key=value;` pairs, also accepting GTF-style `key "value";`.
fn parse_attributes(attr_string: &str) -> HashMap<String, String> {
    let mut attributes = HashMap::new();

    for pair in attr_string.split(';') {
        let pair = pair.trim();
        if pair.is_empty() {
            continue;
        }

        let split = pair.split_once('=').or_else(|| pair.split_once(' '));
        if let Some((key, value)) = split {
            attributes.insert(
                key.trim().to_string(),
                value.trim().trim_matches('"').to_string(),
            );
        }
    }

    attributes
}

/// Read a JSON array of `{"feature_type", "start", "stop"}` objects.
pub fn read_json_intervals<R: Read>(reader: R) -> RegionResult<Vec<Interval>> {
    let intervals: Vec<Interval> = serde_json::from_reader(reader)?;
    log::debug!("Read {} intervals from JSON", intervals.len());
    Ok(intervals)
}

pub fn read_json_intervals_from_path<P: AsRef<Path>>(path: P) -> RegionResult<Vec<Interval>> {
    let file = File::open(path)?;
    read_json_intervals(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use tempfile::NamedTempFile;

    const GFF: &str = "\
##gff-version 3
chr1\tensembl\tgene\t900\t3100\t.\t+\t.\tID=gene:G1
chr1\tensembl\tCDS\t1000\t1099\t.\t+\t0\tID=CDS:1;Parent=transcript:T1
chr1\tensembl\tCDS\t2000\t2099\t.\t+\t2\tID=CDS:2;Parent=transcript:T1
chr1\tensembl\tCDS\t2500\t2599\t.\t+\t0\tID=CDS:3;Parent=transcript:T2
";

    #[test]
    fn test_read_records() {
        let records = Gff3Reader::new(Cursor::new(GFF)).read_records().unwrap();
        assert_eq!(records.len(), 4);
        assert_eq!(records[1].feature_type, "CDS");
        assert_eq!((records[1].start, records[1].stop), (1000, 1099));
        assert_eq!(records[1].get_attribute("ID").unwrap(), "CDS:1");
    }

    #[test]
    fn test_read_intervals_for_transcript() {
        let intervals = Gff3Reader::new(Cursor::new(GFF))
            .read_intervals(Some("T1"))
            .unwrap();
        assert_eq!(
            intervals,
            vec![Interval::new("CDS", 1000, 1099), Interval::new("CDS", 2000, 2099)]
        );

        let all = Gff3Reader::new(Cursor::new(GFF)).read_intervals(None).unwrap();
        assert_eq!(all.len(), 4);
    }

    #[test]
    fn test_gtf_style_attributes() {
        let attributes = parse_attributes("gene_id \"G1\"; transcript_id \"T9\";");
        assert_eq!(attributes.get("transcript_id").unwrap(), "T9");
    }

    #[test]
    fn test_bad_line_reports_line_number() {
        let gff = "##gff-version 3\nchr1\tsrc\tCDS\tabc\t20\t.\t+\t.\tID=x\n";
        let err = Gff3Reader::new(Cursor::new(gff)).read_records().unwrap_err();
        assert!(matches!(err, RegionError::Parse { line: 2, .. }));

        let short = "chr1\tsrc\tCDS\t10\n";
        let err = Gff3Reader::new(Cursor::new(short)).read_records().unwrap_err();
        assert!(matches!(err, RegionError::Parse { line: 1, .. }));
    }

    #[test]
    fn test_read_json_intervals_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"feature_type": "CDS", "start": 10, "stop": 20}},
                {{"feature_type": "exon", "start": 40, "stop": 60}}]"#
        )
        .unwrap();

        let intervals = read_json_intervals_from_path(file.path()).unwrap();
        assert_eq!(intervals[1], Interval::new("exon", 40, 60));
    }

    #[test]
    fn test_read_json_rejects_garbage() {
        let err = read_json_intervals(Cursor::new("[{\"start\": 1}]")).unwrap_err();
        assert!(matches!(err, RegionError::Parse { .. }));
    }
}
