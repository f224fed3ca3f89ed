use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::core::errors::{PipesError, Result};
use crate::core::models::merged_config::MergedConfig;
use crate::core::models::variable_record::VariableRecord;
use crate::core::services::value_encoder::to_canonical_string;
use crate::core::traits::artifact_writer::ArtifactWriter;
use crate::core::traits::diagnostics::DiagnosticSink;

/// Writes the three pipeline artifacts next to `out_file`:
///
/// - `out_file`: `NAME=value` lines, appended to existing content
/// - `out_file.exports`: `export NAME=value` lines, overwritten
/// - `out_file.json`: the merged tree as one line of JSON, overwritten
///
/// Lines are joined with `\n` and no trailing newline is written. When
/// `out_file` already has content that does not end in a newline, the
/// first appended line continues it.
pub struct FileArtifactWriter<'a> {
    out_file: PathBuf,
    diagnostics: &'a dyn DiagnosticSink,
}

impl<'a> FileArtifactWriter<'a> {
    pub fn new(out_file: impl Into<PathBuf>, diagnostics: &'a dyn DiagnosticSink) -> Self {
        Self {
            out_file: out_file.into(),
            diagnostics,
        }
    }

    pub fn variables_path(&self) -> &Path {
        &self.out_file
    }

    pub fn exports_path(&self) -> PathBuf {
        with_suffix(&self.out_file, ".exports")
    }

    pub fn json_path(&self) -> PathBuf {
        with_suffix(&self.out_file, ".json")
    }

    fn append_variables(&self, lines: &str) -> Result<()> {
        let path = self.variables_path();
        self.diagnostics
            .info(&format!("Appending variables to {}", path.display()));

        let wrap = |source| PipesError::ArtifactWrite {
            path: path.to_path_buf(),
            source,
        };
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(wrap)?;
        file.write_all(lines.as_bytes()).map_err(wrap)
    }

    fn overwrite(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content).map_err(|source| PipesError::ArtifactWrite {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl ArtifactWriter for FileArtifactWriter<'_> {
    fn write(&self, records: &[VariableRecord], merged: &MergedConfig) -> Result<()> {
        let lines = records
            .iter()
            .map(VariableRecord::line)
            .collect::<Vec<_>>()
            .join("\n");
        let exports = records
            .iter()
            .map(VariableRecord::export_line)
            .collect::<Vec<_>>()
            .join("\n");
        let dump = to_canonical_string(merged)?;

        self.append_variables(&lines)?;

        let exports_path = self.exports_path();
        self.diagnostics.info(&format!(
            "Writing sourceable variables to {}",
            exports_path.display()
        ));
        self.overwrite(&exports_path, &exports)?;

        let json_path = self.json_path();
        self.diagnostics
            .debug(&format!("Merged configuration:\n{dump}"));
        self.overwrite(&json_path, &dump)?;

        Ok(())
    }

    fn artifact_paths(&self) -> Vec<PathBuf> {
        vec![
            self.variables_path().to_path_buf(),
            self.exports_path(),
            self.json_path(),
        ]
    }
}

/// `raw.properties` + `.json` → `raw.properties.json`
fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::diagnostics::memory_sink::MemorySink;
    use crate::core::models::merged_config::EnvironmentConfig;
    use serde_json::{Value, json};

    fn snapshot() -> (Vec<VariableRecord>, MergedConfig) {
        let records = vec![
            VariableRecord {
                name: "DEV_ASG_MIN_SIZE".into(),
                value: "1".into(),
            },
            VariableRecord {
                name: "DEV_ELB_SUBNET_PURPOSE".into(),
                value: r#""internal""#.into(),
            },
        ];
        let Value::Object(resources) = json!({
            "asg": {"min_size": 1},
            "elb": {"subnet_purpose": "internal"}
        }) else {
            unreachable!()
        };
        let merged = MergedConfig {
            environments: vec![EnvironmentConfig {
                name: "dev".into(),
                resources,
            }],
        };
        (records, merged)
    }

    #[test]
    fn writes_all_three_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("raw.properties");
        let sink = MemorySink::default();
        let writer = FileArtifactWriter::new(&out, &sink);
        let (records, merged) = snapshot();

        writer.write(&records, &merged).unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "DEV_ASG_MIN_SIZE=1\nDEV_ELB_SUBNET_PURPOSE=\"internal\""
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("raw.properties.exports")).unwrap(),
            "export DEV_ASG_MIN_SIZE=1\nexport DEV_ELB_SUBNET_PURPOSE=\"internal\""
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("raw.properties.json")).unwrap(),
            r#"{"dev": {"asg": {"min_size": 1}, "elb": {"subnet_purpose": "internal"}}}"#
        );
        assert!(sink.contains("info", "Appending variables to"));
    }

    #[test]
    fn append_keeps_existing_content_without_separator() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("raw.properties");
        fs::write(&out, "BUILD=42").unwrap();
        let sink = MemorySink::default();
        let (records, merged) = snapshot();

        FileArtifactWriter::new(&out, &sink)
            .write(&records, &merged)
            .unwrap();

        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "BUILD=42DEV_ASG_MIN_SIZE=1\nDEV_ELB_SUBNET_PURPOSE=\"internal\""
        );
    }

    #[test]
    fn second_run_appends_but_overwrites_exports_and_json() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("raw.properties");
        let sink = MemorySink::default();
        let writer = FileArtifactWriter::new(&out, &sink);
        let (records, merged) = snapshot();

        writer.write(&records, &merged).unwrap();
        let exports_first = fs::read_to_string(writer.exports_path()).unwrap();
        let json_first = fs::read_to_string(writer.json_path()).unwrap();

        writer.write(&records, &merged).unwrap();

        assert_eq!(fs::read_to_string(writer.exports_path()).unwrap(), exports_first);
        assert_eq!(fs::read_to_string(writer.json_path()).unwrap(), json_first);
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "DEV_ASG_MIN_SIZE=1\nDEV_ELB_SUBNET_PURPOSE=\"internal\"\
             DEV_ASG_MIN_SIZE=1\nDEV_ELB_SUBNET_PURPOSE=\"internal\""
        );
    }

    #[test]
    fn failure_stops_later_writes_and_keeps_earlier_ones() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("raw.properties");
        // A directory where the exports file should go makes that write fail.
        fs::create_dir(dir.path().join("raw.properties.exports")).unwrap();
        let sink = MemorySink::default();
        let writer = FileArtifactWriter::new(&out, &sink);
        let (records, merged) = snapshot();

        let err = writer.write(&records, &merged).unwrap_err();

        assert!(matches!(err, PipesError::ArtifactWrite { .. }));
        assert!(out.exists(), "append file written before the failure stays");
        assert!(!writer.json_path().exists(), "json dump is never attempted");
    }

    #[test]
    fn artifact_paths_are_derived_from_out_file() {
        let sink = MemorySink::default();
        let writer = FileArtifactWriter::new("build/raw.properties", &sink);
        assert_eq!(
            writer.artifact_paths(),
            vec![
                PathBuf::from("build/raw.properties"),
                PathBuf::from("build/raw.properties.exports"),
                PathBuf::from("build/raw.properties.json"),
            ]
        );
    }

    #[test]
    fn empty_records_still_create_files() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("raw.properties");
        let sink = MemorySink::default();
        let writer = FileArtifactWriter::new(&out, &sink);

        writer.write(&[], &MergedConfig::default()).unwrap();

        assert_eq!(fs::read_to_string(&out).unwrap(), "");
        assert_eq!(fs::read_to_string(writer.exports_path()).unwrap(), "");
        assert_eq!(fs::read_to_string(writer.json_path()).unwrap(), "{}");
    }
}
