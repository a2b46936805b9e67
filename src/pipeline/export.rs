use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::types::EnrichedRecord;

/// `<prefix>_<unix_ts>.csv`
pub fn output_file_name(prefix: &str, unix_ts: i64) -> String {
    format!("{prefix}_{unix_ts}.csv")
}

/// Write all rows with a header, creating `output_dir` if needed.
pub fn write_csv(
    records: &[EnrichedRecord],
    output_dir: &Path,
    prefix: &str,
    unix_ts: i64,
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output_file_name(prefix, unix_ts));

    let mut writer = csv::Writer::from_path(&path)?;
    if records.is_empty() {
        writer.write_record(HEADER)?;
    }
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(path)
}

const HEADER: [&str; 9] = [
    "osm_id", "name", "lat", "lon", "tags", "city", "state", "zip", "site_type",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SiteType;

    fn row(id: &str, city: Option<&str>) -> EnrichedRecord {
        EnrichedRecord {
            osm_id: id.to_string(),
            name: "Pad, \"the\" best".to_string(),
            lat: 30.0,
            lon: -90.5,
            tags: r#"{"playground":"splash_pad"}"#.to_string(),
            city: city.map(str::to_string),
            state: None,
            zip: Some("70112".to_string()),
            site_type: SiteType::MunicipalPark,
        }
    }

    #[test]
    fn test_file_name_embeds_timestamp() {
        assert_eq!(
            output_file_name("clean_splashpads", 1_700_000_000),
            "clean_splashpads_1700000000.csv"
        );
    }

    #[test]
    fn test_writes_header_and_rows() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");
        let path = write_csv(
            &[row("N1", Some("New Orleans")), row("W2", None)],
            &nested,
            "clean_splashpads",
            42,
        )
        .unwrap();

        assert_eq!(path, nested.join("clean_splashpads_42.csv"));
        let mut reader = csv::Reader::from_path(&path).unwrap();
        let headers: Vec<_> = reader.headers().unwrap().iter().map(str::to_string).collect();
        assert_eq!(headers, HEADER);

        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "Pad, \"the\" best");
        assert_eq!(&rows[0][2], "30.0");
        assert_eq!(&rows[0][4], r#"{"playground":"splash_pad"}"#);
        assert_eq!(&rows[0][5], "New Orleans");
        assert_eq!(&rows[1][5], "");
        assert_eq!(&rows[1][6], "");
        assert_eq!(&rows[1][8], "municipal_park");
    }

    #[test]
    fn test_empty_set_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_csv(&[], dir.path(), "x", 1).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content.trim_end(), HEADER.join(","));
    }
}
