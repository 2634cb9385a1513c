//! `relman --version <V>`: scan, merge, sort, save.

use anyhow::{Context, Result};
use relman_core::config::ReleaseConfig;
use relman_core::formula::render_formula;
use relman_core::manifest::{save_manifest, to_json_string};
use relman_core::update::{build_manifest, today};
use std::path::Path;

pub fn run_update(
    cfg: &ReleaseConfig,
    version: &str,
    formula: Option<&Path>,
    dry_run: bool,
) -> Result<()> {
    let (manifest, summary) = build_manifest(cfg, version, &today())?;

    // Rendered up front so a missing target fails before anything is written.
    let formula = match formula {
        Some(path) => {
            let entry = manifest
                .get(version)
                .with_context(|| format!("version {version} missing after update"))?;
            Some((path, render_formula(entry, version, &cfg.formula)?))
        }
        None => None,
    };

    if dry_run {
        if let Some((path, _)) = &formula {
            tracing::info!("dry run: not writing formula {}", path.display());
        }
        print!("{}", to_json_string(&manifest)?);
        return Ok(());
    }

    save_manifest(&manifest, &cfg.manifest_path)?;
    if let Some((path, rb)) = formula {
        std::fs::write(path, rb).with_context(|| format!("write formula: {}", path.display()))?;
        tracing::info!("wrote formula {}", path.display());
    }
    let file_name = cfg
        .manifest_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cfg.manifest_path.display().to_string());
    println!(
        "Updated {} for version {} ({} artifact(s))",
        file_name,
        version,
        summary.targets.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use relman_core::manifest::load_manifest;

    fn config_in(root: &Path) -> ReleaseConfig {
        ReleaseConfig {
            release_root: root.join("releases"),
            manifest_path: root.join("download.json"),
            ..ReleaseConfig::default()
        }
    }

    #[test]
    fn writes_manifest_and_formula() {
        let root = tempfile::tempdir().unwrap();
        let cfg = config_in(root.path());
        let dir = cfg.release_dir("0.7");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("zep_x86_64-linux_0.7.tar.xz"), b"linux").unwrap();
        std::fs::write(dir.join("zep_x86_64-macos_0.7.tar.xz"), b"macos").unwrap();

        let formula = root.path().join("zep.rb");
        run_update(&cfg, "0.7", Some(&formula), false).unwrap();

        let m = load_manifest(&cfg.manifest_path).unwrap();
        assert_eq!(m.labels().collect::<Vec<_>>(), vec!["master", "0.7"]);
        let rb = std::fs::read_to_string(&formula).unwrap();
        assert!(rb.contains("https://zep.run/releases/0.7/zep_x86_64-macos_0.7.tar.xz"));
    }

    fn publish_07(cfg: &ReleaseConfig) {
        let dir = cfg.release_dir("0.7");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("zep_x86_64-linux_0.7.tar.xz"), b"linux").unwrap();
        std::fs::write(dir.join("zep_x86_64-macos_0.7.tar.xz"), b"macos").unwrap();
    }

    #[test]
    fn dry_run_with_formula_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let cfg = config_in(root.path());
        publish_07(&cfg);
        let formula = root.path().join("zep.rb");

        run_update(&cfg, "0.7", Some(&formula), true).unwrap();
        assert!(!formula.exists());
        assert!(!cfg.manifest_path.exists());
    }

    #[test]
    fn unwritable_manifest_leaves_no_formula() {
        let root = tempfile::tempdir().unwrap();
        let mut cfg = config_in(root.path());
        publish_07(&cfg);
        // A non-empty directory where the manifest should be.
        cfg.manifest_path = root.path().join("index");
        std::fs::create_dir_all(cfg.manifest_path.join("occupied")).unwrap();
        let formula = root.path().join("zep.rb");

        assert!(run_update(&cfg, "0.7", Some(&formula), false).is_err());
        assert!(!formula.exists());
    }

    #[test]
    fn missing_formula_target_writes_nothing() {
        let root = tempfile::tempdir().unwrap();
        let cfg = config_in(root.path());
        let dir = cfg.release_dir("0.7");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("zep_x86_64-linux_0.7.tar.xz"), b"linux").unwrap();
        let formula = root.path().join("zep.rb");

        assert!(run_update(&cfg, "0.7", Some(&formula), false).is_err());
        assert!(!formula.exists());
        assert!(!cfg.manifest_path.exists());
    }

    #[test]
    fn dry_run_does_not_write() {
        let root = tempfile::tempdir().unwrap();
        let cfg = config_in(root.path());
        std::fs::create_dir_all(cfg.release_dir("0.7")).unwrap();

        run_update(&cfg, "0.7", None, true).unwrap();
        assert!(!cfg.manifest_path.exists());
    }

    #[test]
    fn missing_release_dir_fails_without_writing() {
        let root = tempfile::tempdir().unwrap();
        let cfg = config_in(root.path());
        let err = run_update(&cfg, "0.7", None, false).unwrap_err();
        assert!(format!("{err:#}").contains("does not exist"));
        assert!(!cfg.manifest_path.exists());
    }
}
