//! Parser configurations
//!
//! A named configuration selects which legacy notations the parser accepts. The registry
//! holds the standard flavours and lets callers add their own.

use std::collections::HashMap;

use serde::Serialize;

use super::legacy::LegacyPass;

/// A named parser flavour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParserConfig {
    pub name: String,
    pub description: String,
    /// Legacy passes applied to every parse tree, in order
    pub legacy: Vec<LegacyPass>,
}

impl ParserConfig {
    /// Current notation only; legacy notation is a line error
    pub fn strict() -> Self {
        ParserConfig {
            name: "strict".into(),
            description: "Current ATF notation only".into(),
            legacy: Vec::new(),
        }
    }

    /// Every legacy notation is rewritten
    pub fn legacy() -> Self {
        ParserConfig {
            name: "legacy".into(),
            description: "Current notation plus all legacy conventions".into(),
            legacy: LegacyPass::ALL.to_vec(),
        }
    }

    /// Imports from Oracc: en-dash joiners and accented sub-indices
    pub fn oracc() -> Self {
        ParserConfig {
            name: "oracc".into(),
            description: "Oracc imports: en-dash joiners and accented indices".into(),
            legacy: vec![LegacyPass::AccentedIndex, LegacyPass::OraccJoiner],
        }
    }

    pub fn accepts_legacy(&self) -> bool {
        !self.legacy.is_empty()
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::strict()
    }
}

/// Registry of parser configurations
#[derive(Debug, Clone, Default)]
pub struct ConfigRegistry {
    configs: HashMap<String, ParserConfig>,
}

impl ConfigRegistry {
    pub fn new() -> Self {
        ConfigRegistry {
            configs: HashMap::new(),
        }
    }

    /// Register a configuration, replacing one with the same name
    pub fn register(&mut self, config: ParserConfig) {
        self.configs.insert(config.name.clone(), config);
    }

    pub fn get(&self, name: &str) -> Option<&ParserConfig> {
        self.configs.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.configs.contains_key(name)
    }

    /// All configurations, sorted by name
    pub fn list_all(&self) -> Vec<&ParserConfig> {
        let mut configs: Vec<_> = self.configs.values().collect();
        configs.sort_by(|a, b| a.name.cmp(&b.name));
        configs
    }

    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(ParserConfig::strict());
        registry.register(ParserConfig::legacy());
        registry.register(ParserConfig::oracc());
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry() {
        let registry = ConfigRegistry::with_defaults();
        let names: Vec<&str> = registry
            .list_all()
            .iter()
            .map(|config| config.name.as_str())
            .collect();
        assert_eq!(names, vec!["legacy", "oracc", "strict"]);
        assert!(registry.has("strict"));
        assert!(!registry.has("unknown"));
    }

    #[test]
    fn test_strict_accepts_no_legacy() {
        assert!(!ParserConfig::strict().accepts_legacy());
        assert_eq!(ParserConfig::legacy().legacy, LegacyPass::ALL.to_vec());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ConfigRegistry::new();
        registry.register(ParserConfig::strict());
        registry.register(ParserConfig {
            description: "custom".into(),
            ..ParserConfig::strict()
        });
        assert_eq!(registry.list_all().len(), 1);
        assert_eq!(registry.get("strict").map(|c| c.description.as_str()), Some("custom"));
    }
}
