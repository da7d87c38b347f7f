//! Platform facts: OS, hardware, host, and the running binary.
//!
//! Nothing here fails; values the platform cannot provide are recorded as
//! empty strings.

use std::path::PathBuf;

use sysinfo::System;

use crate::constants::{APP_NAME, TARGET, VERSION};
use crate::models::SystemInfo;

/// Describe the operating system and processor.
pub fn system_info() -> SystemInfo {
    let info = SystemInfo {
        os: os_family(std::env::consts::OS),
        os_version: System::kernel_version()
            .or_else(System::os_version)
            .unwrap_or_default(),
        machine: System::cpu_arch().unwrap_or_else(|| std::env::consts::ARCH.to_string()),
        processor: processor_brand(),
    };
    tracing::debug!(?info, "collected system info");
    info
}

/// Network name of this machine.
pub fn hostname() -> String {
    System::host_name().unwrap_or_default()
}

/// Absolute path of the running binary.
pub fn executable_path() -> String {
    match std::env::current_exe() {
        Ok(path) => path.display().to_string(),
        Err(e) => {
            tracing::debug!("current_exe unavailable: {e}; using argv[0]");
            std::env::args().next().unwrap_or_default()
        }
    }
}

/// `name version (target)` of the running binary.
pub fn executable_version() -> String {
    format!("{APP_NAME} {VERSION} ({TARGET})")
}

/// Directory that holds the running binary.
pub fn executable_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    exe.parent().map(PathBuf::from).ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        )
    })
}

/// Map a Rust OS identifier to the conventional kernel family name.
pub fn os_family(os: &str) -> String {
    match os {
        "linux" => "Linux".to_string(),
        "macos" | "ios" => "Darwin".to_string(),
        "windows" => "Windows".to_string(),
        "freebsd" => "FreeBSD".to_string(),
        "netbsd" => "NetBSD".to_string(),
        "openbsd" => "OpenBSD".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

fn processor_brand() -> String {
    let mut sys = System::new();
    sys.refresh_cpu();
    sys.cpus()
        .first()
        .map(|cpu| cpu.brand().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_family_names() {
        assert_eq!(os_family("linux"), "Linux");
        assert_eq!(os_family("macos"), "Darwin");
        assert_eq!(os_family("windows"), "Windows");
        assert_eq!(os_family("solaris"), "Solaris");
        assert_eq!(os_family(""), "");
    }

    #[test]
    fn system_info_is_stable_within_a_process() {
        assert_eq!(system_info(), system_info());
    }

    #[test]
    fn system_info_names_the_current_os() {
        let info = system_info();
        assert_eq!(info.os, os_family(std::env::consts::OS));
        assert!(!info.machine.is_empty());
    }

    #[test]
    fn executable_version_mentions_app_and_version() {
        let v = executable_version();
        assert!(v.starts_with("execproof "));
        assert!(v.contains(VERSION));
    }

    #[test]
    fn executable_dir_contains_executable() {
        let dir = executable_dir().unwrap();
        assert!(executable_path().starts_with(&dir.display().to_string()));
    }
}
