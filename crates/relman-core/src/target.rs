//! Logical target names derived from artifact file names.

/// Derive the platform/target identifier from an artifact file name.
///
/// Removes every `_<version>` occurrence and the `prefix` token, then cuts at the
/// first `.` so multi-part extensions such as `.tar.xz` disappear as a whole.
///
/// - `derive_target_name("zep_x86-windows_0.6.zip", "0.6", "zep_")` → `"x86-windows"`
/// - `derive_target_name("zep_aarch64-linux_0.6.tar.xz", "0.6", "zep_")` → `"aarch64-linux"`
pub fn derive_target_name(file_name: &str, version: &str, prefix: &str) -> String {
    let without_version = file_name.replace(&format!("_{version}"), "");
    let name = if prefix.is_empty() {
        without_version
    } else {
        without_version.replace(prefix, "")
    };
    match name.split_once('.') {
        Some((stem, _)) => stem.to_string(),
        None => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_artifact() {
        assert_eq!(
            derive_target_name("zep_x86-windows_0.6.zip", "0.6", "zep_"),
            "x86-windows"
        );
    }

    #[test]
    fn tar_xz_artifact() {
        assert_eq!(
            derive_target_name("zep_aarch64-linux_0.6.tar.xz", "0.6", "zep_"),
            "aarch64-linux"
        );
    }

    #[test]
    fn underscores_inside_target_survive() {
        assert_eq!(
            derive_target_name("zep_x86_64-macos_0.7.tar.xz", "0.7", "zep_"),
            "x86_64-macos"
        );
    }

    #[test]
    fn no_extension() {
        assert_eq!(derive_target_name("zep_riscv64-linux_1.2", "1.2", "zep_"), "riscv64-linux");
    }

    #[test]
    fn other_version_is_kept() {
        assert_eq!(
            derive_target_name("zep_x86-windows_0.5.zip", "0.6", "zep_"),
            "x86-windows_0"
        );
    }
}
