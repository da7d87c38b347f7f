//! The proof record written to disk.

use serde::{Deserialize, Serialize};

use super::Lookup;

/// Evidence that the program ran on a given machine at a given time.
///
/// Field order is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofRecord {
    /// ISO-8601 local time of generation.
    pub timestamp: String,
    /// Absolute path of the target directory.
    pub project_folder: String,
    /// SHA-256 over the folder name and its timestamps.
    pub project_folder_hash: String,
    /// Absolute path of the running binary.
    pub executable: String,
    /// Name, version, and target triple of the running binary.
    pub executable_version: String,
    pub public_ip: Lookup,
    pub local_ip: Lookup,
    /// Per-run nonce.
    pub unique_token: String,
    pub system_info: SystemInfo,
}

/// Operating system and hardware description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub os: String,
    pub os_version: String,
    pub machine: String,
    pub processor: String,
}

/// Top-level keys of a serialized [`ProofRecord`], in order.
pub const RECORD_KEYS: [&str; 9] = [
    "timestamp",
    "project_folder",
    "project_folder_hash",
    "executable",
    "executable_version",
    "public_ip",
    "local_ip",
    "unique_token",
    "system_info",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ProofRecord {
        ProofRecord {
            timestamp: "2026-10-19T09:30:00.000000+02:00".into(),
            project_folder: "/home/student/úkol".into(),
            project_folder_hash: "ab".repeat(32),
            executable: "/home/student/úkol/execproof".into(),
            executable_version: "execproof 0.1.0 (x86_64-unknown-linux-gnu)".into(),
            public_ip: Lookup::Unknown,
            local_ip: Lookup::Found("192.168.1.20".into()),
            unique_token: "cd".repeat(32),
            system_info: SystemInfo {
                os: "Linux".into(),
                os_version: "6.8.0".into(),
                machine: "x86_64".into(),
                processor: "Some CPU".into(),
            },
        }
    }

    #[test]
    fn serialized_keys_follow_field_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let positions: Vec<usize> = RECORD_KEYS
            .iter()
            .map(|k| json.find(&format!("\"{k}\"")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
    }

    #[test]
    fn system_info_has_four_string_keys() {
        let value = serde_json::to_value(sample()).unwrap();
        let info = value["system_info"].as_object().unwrap();
        assert_eq!(info.len(), 4);
        assert!(info.values().all(|v| v.is_string()));
    }

    #[test]
    fn record_reads_back() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let back: ProofRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
