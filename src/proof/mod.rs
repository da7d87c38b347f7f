//! Proof collection and the proof file writer.
//!
//! [`generate`] runs every collector once, in order, and overwrites the
//! proof file in the target directory. Network collectors cannot fail the
//! run; filesystem and serialization errors can.

use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use thiserror::Error;

use crate::fingerprint;
use crate::models::ProofRecord;
use crate::network::{self, PublicIpSource};
use crate::system;

/// Fatal errors while producing a proof.
#[derive(Debug, Error)]
pub enum ProofError {
    #[error("cannot resolve target directory {path}: {source}")]
    ResolveDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("target {0} is not a directory")]
    NotADirectory(PathBuf),

    #[error("proof file name {0:?} must be a plain file name, not a path")]
    InvalidFilename(String),

    #[error("failed to serialize proof: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write proof file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Everything [`generate`] needs besides the public IP source.
#[derive(Debug, Clone)]
pub struct ProofOptions {
    /// Folder the proof describes and is written into.
    pub dir: PathBuf,
    /// File name of the proof inside `dir`.
    pub filename: String,
    /// `host:port` for the local interface probe.
    pub probe_addr: String,
}

/// A proof that has been written to disk.
#[derive(Debug, Clone)]
pub struct WrittenProof {
    pub path: PathBuf,
    pub record: ProofRecord,
}

/// Make `dir` absolute and check that it is a directory.
pub fn resolve_dir(dir: &Path) -> Result<PathBuf, ProofError> {
    let resolved = dir.canonicalize().map_err(|e| ProofError::ResolveDir {
        path: dir.to_path_buf(),
        source: e,
    })?;
    if !resolved.is_dir() {
        return Err(ProofError::NotADirectory(resolved));
    }
    Ok(resolved)
}

/// Check that `filename` names a file directly inside the target directory.
pub fn check_filename(filename: &str) -> Result<(), ProofError> {
    let mut components = Path::new(filename).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(()),
        _ => Err(ProofError::InvalidFilename(filename.to_string())),
    }
}

/// Gather every field of the record. Never fails.
pub async fn collect(dir: &Path, source: &dyn PublicIpSource, probe_addr: &str) -> ProofRecord {
    let timestamp = chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Micros, false);

    let record = ProofRecord {
        timestamp,
        project_folder: dir.display().to_string(),
        project_folder_hash: fingerprint::folder_hash(dir),
        executable: system::executable_path(),
        executable_version: system::executable_version(),
        public_ip: network::public_ip(source).await,
        local_ip: network::local_ip(probe_addr),
        unique_token: fingerprint::unique_token(),
        system_info: system::system_info(),
    };

    tracing::debug!(
        public_ip = %record.public_ip,
        local_ip = %record.local_ip,
        folder_hash = %record.project_folder_hash,
        "collected proof record"
    );
    record
}

/// Serialize `record` as JSON indented with four spaces.
///
/// Non-ASCII characters are written as-is, not escaped.
pub fn render(record: &ProofRecord) -> Result<Vec<u8>, ProofError> {
    let mut buf = Vec::new();
    let mut ser =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    record.serialize(&mut ser)?;
    Ok(buf)
}

/// Write `record` to `path`, replacing any existing file.
pub fn write(record: &ProofRecord, path: &Path) -> Result<(), ProofError> {
    let bytes = render(record)?;
    std::fs::write(path, bytes).map_err(|e| ProofError::Write {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Collect a record for `options.dir` and write it next to the folder's
/// contents.
pub async fn generate(
    options: &ProofOptions,
    source: &dyn PublicIpSource,
) -> Result<WrittenProof, ProofError> {
    check_filename(&options.filename)?;
    let dir = resolve_dir(&options.dir)?;
    let record = collect(&dir, source, &options.probe_addr).await;
    let path = dir.join(&options.filename);
    write(&record, &path)?;
    tracing::debug!("wrote {}", path.display());
    Ok(WrittenProof { path, record })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lookup, SystemInfo};
    use crate::network::OfflineSource;

    fn record() -> ProofRecord {
        ProofRecord {
            timestamp: "2026-10-19T10:00:00.000001+00:00".into(),
            project_folder: "/tmp/úkol".into(),
            project_folder_hash: "0".repeat(64),
            executable: "/usr/local/bin/execproof".into(),
            executable_version: "execproof 0.1.0 (x86_64-unknown-linux-gnu)".into(),
            public_ip: Lookup::Unknown,
            local_ip: Lookup::Found("10.0.0.5".into()),
            unique_token: "f".repeat(64),
            system_info: SystemInfo::default(),
        }
    }

    #[test]
    fn render_uses_four_space_indent() {
        let text = String::from_utf8(render(&record()).unwrap()).unwrap();
        assert!(text.starts_with("{\n    \"timestamp\""), "{text}");
        assert!(text.contains("\n        \"os\": \"\""), "{text}");
    }

    #[test]
    fn render_keeps_non_ascii_literal() {
        let text = String::from_utf8(render(&record()).unwrap()).unwrap();
        assert!(text.contains("/tmp/úkol"));
        assert!(!text.contains("\\u"));
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project_proof.json");
        std::fs::write(&path, "stale content that is definitely longer than nothing").unwrap();

        write(&record(), &path).unwrap();

        let parsed: ProofRecord =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("project_proof.json");
        let err = write(&record(), &path).unwrap_err();
        assert!(matches!(err, ProofError::Write { .. }), "{err}");
    }

    #[test]
    fn resolve_dir_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        std::fs::write(&file, "x").unwrap();
        assert!(matches!(resolve_dir(&file), Err(ProofError::NotADirectory(_))));
    }

    #[test]
    fn resolve_dir_rejects_missing_paths() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_dir(&dir.path().join("nope")).unwrap_err();
        assert!(matches!(err, ProofError::ResolveDir { .. }));
    }

    #[test]
    fn check_filename_accepts_plain_names() {
        assert!(check_filename("project_proof.json").is_ok());
        assert!(check_filename("evidence").is_ok());
    }

    #[test]
    fn check_filename_rejects_paths() {
        for name in ["", ".", "..", "../escape.json", "/tmp/proof.json", "sub/proof.json"] {
            assert!(
                matches!(check_filename(name), Err(ProofError::InvalidFilename(_))),
                "accepted {name:?}"
            );
        }
    }

    #[tokio::test]
    async fn generate_refuses_to_write_outside_target_dir() {
        let parent = tempfile::tempdir().unwrap();
        let dir = parent.path().join("project");
        std::fs::create_dir(&dir).unwrap();
        let options = ProofOptions {
            dir,
            filename: "../escaped.json".into(),
            probe_addr: "127.0.0.1:9".into(),
        };

        let err = generate(&options, &OfflineSource).await.unwrap_err();

        assert!(matches!(err, ProofError::InvalidFilename(_)), "{err}");
        assert!(!parent.path().join("escaped.json").exists());
    }

    #[tokio::test]
    async fn collect_offline_records_unknown_public_ip() {
        let dir = tempfile::tempdir().unwrap();
        let record = collect(dir.path(), &OfflineSource, "127.0.0.1:9").await;
        assert_eq!(record.public_ip, Lookup::Unknown);
        assert_eq!(record.local_ip, Lookup::Found("127.0.0.1".into()));
        assert_eq!(record.project_folder_hash, fingerprint::folder_hash(dir.path()));
    }

    #[tokio::test]
    async fn generate_writes_into_target_dir() {
        let dir = tempfile::tempdir().unwrap();
        let options = ProofOptions {
            dir: dir.path().to_path_buf(),
            filename: "proof.json".into(),
            probe_addr: "127.0.0.1:9".into(),
        };
        let written = generate(&options, &OfflineSource).await.unwrap();
        assert!(written.path.ends_with("proof.json"));
        assert!(written.path.exists());
        assert_eq!(
            written.record.project_folder,
            dir.path().canonicalize().unwrap().display().to_string()
        );
    }
}
