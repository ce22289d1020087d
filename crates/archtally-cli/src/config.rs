use anyhow::{Context, Result, bail};
use archtally_collect::ExcludePolicy;
use archtally_types::Topology;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Format understood by this build. Bump when a field changes meaning.
pub const CONFIG_VERSION: u32 = 1;

/// Fallback layer name when no topology is configured.
pub const FALLBACK_LAYER: &str = "Projects";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default)]
    pub collect: CollectSection,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CollectSection {
    #[serde(default)]
    pub targets: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_dirs: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_exts: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not_match_d: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cloc_bin: Option<String>,
}

fn default_version() -> u32 {
    CONFIG_VERSION
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: CONFIG_VERSION,
            title: None,
            collect: CollectSection::default(),
            topology: None,
        }
    }
}

impl Config {
    /// Load from disk; a missing file means defaults, not an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        if config.version != CONFIG_VERSION {
            bail!(
                "config {} has version {} but this build understands version {}",
                path.display(),
                config.version,
                CONFIG_VERSION
            );
        }
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("failed to serialize config")?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// A starter config targeting the given paths, with a single-layer
    /// topology the user is expected to carve up by hand.
    pub fn starter(targets: Vec<String>) -> Self {
        Config {
            version: CONFIG_VERSION,
            title: None,
            collect: CollectSection {
                targets: targets.clone(),
                ..CollectSection::default()
            },
            topology: Some(Topology::single_layer(FALLBACK_LAYER, targets)),
        }
    }

    /// Configured targets as paths, in file order.
    pub fn targets(&self) -> Vec<PathBuf> {
        self.collect.targets.iter().map(PathBuf::from).collect()
    }

    /// The exclusion policy, with file-level overrides applied on top of
    /// the built-in defaults. An explicitly empty list disables that axis.
    pub fn policy(&self) -> ExcludePolicy {
        let mut policy = ExcludePolicy::default();
        if let Some(dirs) = &self.collect.exclude_dirs {
            policy.dirs = dirs.clone();
        }
        if let Some(exts) = &self.collect.exclude_exts {
            policy.exts = exts.clone();
        }
        if let Some(pattern) = &self.collect.not_match_d {
            policy.not_match_d = if pattern.is_empty() {
                None
            } else {
                Some(pattern.clone())
            };
        }
        policy
    }

    /// The configured topology, or a single-layer fallback built from the
    /// measured labels when the config has none.
    pub fn effective_topology(&self, measured: &[String]) -> Topology {
        match &self.topology {
            Some(topology) => topology.clone(),
            None => Topology::single_layer(FALLBACK_LAYER, measured.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = Config::load_from(&temp_dir.path().join("missing.toml"))?;
        assert_eq!(config.version, CONFIG_VERSION);
        assert!(config.collect.targets.is_empty());
        assert!(config.topology.is_none());
        Ok(())
    }

    #[test]
    fn test_save_and_load_round_trip() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("archtally.toml");

        let config = Config::starter(vec!["api".to_string(), "worker".to_string()]);
        config.save_to(&path)?;
        assert!(path.exists());

        let loaded = Config::load_from(&path)?;
        assert_eq!(loaded.collect.targets, vec!["api", "worker"]);
        let topology = loaded.topology.unwrap();
        assert_eq!(topology.layers.len(), 1);
        assert_eq!(topology.layers[0].name, FALLBACK_LAYER);
        Ok(())
    }

    #[test]
    fn test_kebab_case_keys_parse() -> Result<()> {
        let raw = r#"
            version = 1
            title = "Platform"

            [collect]
            targets = ["api"]
            exclude-dirs = ["vendor"]
            exclude-exts = ["md"]
            not-match-d = "(cache)"
            cloc-bin = "/opt/cloc"

            [[topology.layers]]
            name = "Services"
            members = ["api"]

            [[topology.edges]]
            from = "api"
            to = "api"
        "#;
        let config: Config = toml::from_str(raw)?;
        assert_eq!(config.title.as_deref(), Some("Platform"));
        assert_eq!(config.collect.cloc_bin.as_deref(), Some("/opt/cloc"));

        let policy = config.policy();
        assert_eq!(policy.dirs, vec!["vendor"]);
        assert_eq!(policy.exts, vec!["md"]);
        assert_eq!(policy.not_match_d.as_deref(), Some("(cache)"));
        Ok(())
    }

    #[test]
    fn test_unsupported_version_is_rejected() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let path = temp_dir.path().join("archtally.toml");
        std::fs::write(&path, "version = 99\n")?;

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("version 99"));
        Ok(())
    }

    #[test]
    fn test_policy_defaults_when_no_overrides() {
        let config = Config::default();
        let policy = config.policy();
        assert_eq!(policy, ExcludePolicy::default());
    }

    #[test]
    fn test_empty_pattern_disables_path_filter() {
        let config: Config = toml::from_str(
            "version = 1\n[collect]\nnot-match-d = \"\"\n",
        )
        .unwrap();
        assert!(config.policy().not_match_d.is_none());
    }

    #[test]
    fn test_effective_topology_falls_back_to_single_layer() {
        let config = Config::default();
        let topology =
            config.effective_topology(&["api".to_string(), "worker".to_string()]);
        assert_eq!(topology.layers.len(), 1);
        assert_eq!(topology.layers[0].members, vec!["api", "worker"]);
        assert!(topology.edges.is_empty());
    }
}
