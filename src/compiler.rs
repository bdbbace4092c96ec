//! Compilation driver: discovery, reading, rule building and artifact
//! emission for one entry kind.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::binary::RuleSetWriter;
use crate::rule::RuleError;
use crate::source::{self, Category};
use crate::{CategoryRule, EntryKind, Error, Result};

/// File extension of compiled artifacts.
pub const ARTIFACT_EXTENSION: &str = "srs";

/// Default extension of source list files.
pub const LIST_EXTENSION: &str = "lst";

/// Configuration for one compilation run.
///
/// A run processes exactly one entry kind; the two kinds share no state
/// beyond the filesystem.
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Entry kind every category in this run is compiled under
    pub kind: EntryKind,
    /// Directory holding the source list files
    pub source_root: PathBuf,
    /// Directory artifacts are written into (must already exist)
    pub output_root: PathBuf,
    /// Source list extension, without the leading dot
    pub list_extension: String,
}

impl CompileConfig {
    /// Create a config with the conventional `lst` list extension.
    pub fn new(
        kind: EntryKind,
        source_root: impl Into<PathBuf>,
        output_root: impl Into<PathBuf>,
    ) -> Self {
        Self {
            kind,
            source_root: source_root.into(),
            output_root: output_root.into(),
            list_extension: LIST_EXTENSION.to_string(),
        }
    }

    fn artifact_path(&self, category: &str) -> PathBuf {
        self.output_root
            .join(format!("{}.{}", category, ARTIFACT_EXTENSION))
    }
}

/// Observer the driver invokes as categories are processed.
///
/// Per-category progress flows through this trait, so callers decide how
/// it is reported. [`LogObserver`] is the default choice.
pub trait CompileObserver {
    /// A category was discovered and is about to be read.
    fn on_category_start(&mut self, _category: &Category) {}

    /// A category yielded no usable entries and produced no artifact.
    fn on_category_skipped(&mut self, _category: &Category) {}

    /// A category was compiled and its artifact written.
    fn on_category_compiled(&mut self, _report: &ArtifactReport) {}
}

/// Observer that reports progress through the `log` crate.
#[derive(Debug, Default)]
pub struct LogObserver;

impl CompileObserver for LogObserver {
    fn on_category_start(&mut self, category: &Category) {
        let file = category
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| category.name.clone());
        log::info!(
            "processing {} -> {}.{}",
            file,
            category.name,
            ARTIFACT_EXTENSION
        );
    }

    fn on_category_skipped(&mut self, category: &Category) {
        log::debug!("skipping {}: no usable entries", category.name);
    }

    fn on_category_compiled(&mut self, report: &ArtifactReport) {
        log::info!(
            "compiled {}: {} entries, {} bytes",
            report.category,
            report.entries,
            report.bytes
        );
    }
}

/// One written artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactReport {
    /// Category the artifact was compiled from
    pub category: String,
    /// Path of the written artifact
    pub path: PathBuf,
    /// Number of entries in the rule
    pub entries: usize,
    /// Artifact size in bytes
    pub bytes: u64,
}

/// Result of one successful compilation run.
#[derive(Debug, Clone, Serialize)]
pub struct KindSummary {
    /// Entry kind the run was compiled under
    pub kind: String,
    /// Artifacts written, in category order
    pub artifacts: Vec<ArtifactReport>,
    /// Categories skipped for lack of usable entries
    pub skipped: Vec<String>,
}

/// Create an output directory if it does not exist yet.
///
/// Callers run this before [`compile_kind`]; the driver itself never
/// creates directories.
pub fn ensure_output_dir(path: impl AsRef<Path>) -> Result<()> {
    fs::create_dir_all(path)?;
    Ok(())
}

/// Compile every category under the configured source root.
///
/// Categories are processed sequentially in discovery order. A category
/// with no usable entries is skipped silently. Any failure while writing
/// an artifact aborts the remaining categories and surfaces the failing
/// category together with the underlying cause; artifacts already written
/// in this run are left in place.
pub fn compile_kind(
    config: &CompileConfig,
    observer: &mut dyn CompileObserver,
) -> Result<KindSummary> {
    let categories = source::discover(&config.source_root, &config.list_extension)?;

    let mut summary = KindSummary {
        kind: config.kind.as_str().to_string(),
        artifacts: Vec::new(),
        skipped: Vec::new(),
    };

    for category in &categories {
        observer.on_category_start(category);

        // Unreadable and empty files look the same here: no entries.
        let entries = source::read_entries(&category.path);
        let rule = match CategoryRule::new(config.kind, entries) {
            Ok(rule) => rule,
            Err(RuleError::Empty) => {
                observer.on_category_skipped(category);
                summary.skipped.push(category.name.clone());
                continue;
            }
        };

        let artifact_path = config.artifact_path(&category.name);
        let bytes = emit(&artifact_path, &rule).map_err(|source| Error::Emit {
            category: category.name.clone(),
            source: Box::new(source),
        })?;

        let report = ArtifactReport {
            category: category.name.clone(),
            path: artifact_path,
            entries: rule.entry_count(),
            bytes,
        };
        observer.on_category_compiled(&report);
        summary.artifacts.push(report);
    }

    Ok(summary)
}

/// Write one artifact. The output handle lives only for this call and is
/// flushed and closed on both success and failure.
fn emit(path: &Path, rule: &CategoryRule) -> Result<u64> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    RuleSetWriter::write_to(&mut writer, rule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[derive(Default)]
    struct RecordingObserver {
        started: Vec<String>,
        skipped: Vec<String>,
        compiled: Vec<String>,
    }

    impl CompileObserver for RecordingObserver {
        fn on_category_start(&mut self, category: &Category) {
            self.started.push(category.name.clone());
        }
        fn on_category_skipped(&mut self, category: &Category) {
            self.skipped.push(category.name.clone());
        }
        fn on_category_compiled(&mut self, report: &ArtifactReport) {
            self.compiled.push(report.category.clone());
        }
    }

    #[test]
    fn test_compile_kind_skips_empty_categories() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        fs::write(src.path().join("full.lst"), "a.com\nb.com\n").unwrap();
        fs::write(src.path().join("hollow.lst"), "# nothing here\n\n").unwrap();

        let config = CompileConfig::new(EntryKind::DomainSuffix, src.path(), out.path());
        let mut observer = RecordingObserver::default();
        let summary = compile_kind(&config, &mut observer).unwrap();

        assert_eq!(summary.artifacts.len(), 1);
        assert_eq!(summary.artifacts[0].category, "full");
        assert_eq!(summary.artifacts[0].entries, 2);
        assert_eq!(summary.skipped, ["hollow"]);

        assert!(out.path().join("full.srs").is_file());
        assert!(!out.path().join("hollow.srs").exists());

        assert_eq!(observer.started, ["full", "hollow"]);
        assert_eq!(observer.compiled, ["full"]);
        assert_eq!(observer.skipped, ["hollow"]);
    }

    #[test]
    fn test_compile_kind_missing_source_root() {
        let out = tempdir().unwrap();
        let config = CompileConfig::new(
            EntryKind::DomainSuffix,
            out.path().join("does-not-exist"),
            out.path(),
        );
        let err = compile_kind(&config, &mut LogObserver).unwrap_err();
        assert!(matches!(err, Error::SourceRoot { .. }));
    }

    #[test]
    fn test_emission_failure_names_category_and_halts() {
        let src = tempdir().unwrap();
        let out = tempdir().unwrap();
        for name in ["a", "b", "c", "d"] {
            fs::write(src.path().join(format!("{name}.lst")), "x.com\n").unwrap();
        }
        // A directory squatting on c's artifact path makes File::create fail.
        fs::create_dir(out.path().join("c.srs")).unwrap();

        let config = CompileConfig::new(EntryKind::DomainSuffix, src.path(), out.path());
        let err = compile_kind(&config, &mut LogObserver).unwrap_err();

        match err {
            Error::Emit { ref category, .. } => assert_eq!(category, "c"),
            other => panic!("unexpected error: {other}"),
        }

        assert!(out.path().join("a.srs").is_file());
        assert!(out.path().join("b.srs").is_file());
        assert!(!out.path().join("d.srs").exists());
    }
}
