// SPDX-FileCopyrightText: 2026 Tributary Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin catalog and identifier resolution.
//!
//! The `PluginCatalog` stores one `PluginEntry` per canonical class name.
//! Each entry carries the plugin's identity (canonical name, simple name,
//! aliases), the plugin itself, its configuration schema read once at
//! registration, and whether it appears in listings.
//!
//! Resolution is exact and case-sensitive. A canonical-name match always wins;
//! otherwise the identifier must match exactly one plugin's simple name or alias.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use tracing::{debug, info, warn};
use tributary_core::{ResolutionError, TributaryError};
use tributary_schema::ConfigDef;

use crate::connector::ConnectorPlugin;
use crate::manifest::CatalogManifest;

/// Minimum Jaro-Winkler similarity for a "did you mean" hint on NotFound.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Names a loaded plugin answers to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginIdentity {
    pub canonical_name: String,
    /// Last segment of the canonical name. Not unique across plugins.
    pub simple_name: String,
    pub aliases: BTreeSet<String>,
}

impl PluginIdentity {
    /// Identity with the simple name derived and, for every suffix, an alias
    /// made by stripping it from the simple name.
    pub fn new(canonical_name: impl Into<String>, alias_suffixes: &[String]) -> Self {
        let canonical_name = canonical_name.into();
        let simple_name = simple_name_of(&canonical_name).to_string();
        let aliases = alias_suffixes
            .iter()
            .filter(|suffix| !suffix.is_empty())
            .filter_map(|suffix| simple_name.strip_suffix(suffix.as_str()))
            .filter(|stripped| !stripped.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            canonical_name,
            simple_name,
            aliases,
        }
    }

    fn answers_to_short_name(&self, identifier: &str) -> bool {
        self.simple_name == identifier || self.aliases.contains(identifier)
    }
}

/// Text after the last `.` or `$` of a class name.
pub fn simple_name_of(canonical_name: &str) -> &str {
    canonical_name
        .rsplit(['.', '$'])
        .next()
        .unwrap_or(canonical_name)
}

/// A single entry in the plugin catalog.
pub struct PluginEntry {
    pub identity: PluginIdentity,
    pub plugin: Arc<dyn ConnectorPlugin>,
    /// Schema captured at registration; immutable afterwards.
    pub schema: Arc<ConfigDef>,
    /// Whether the plugin appears in catalog listings.
    pub listed: bool,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("identity", &self.identity)
            .field("schema_keys", &self.schema.len())
            .field("listed", &self.listed)
            .finish()
    }
}

/// How registration derives aliases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub derive_aliases: bool,
    pub alias_suffixes: Vec<String>,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self {
            derive_aliases: true,
            alias_suffixes: vec!["Connector".to_string()],
        }
    }
}

/// Outcome of looking an identifier up, inspected explicitly by callers.
#[derive(Debug)]
pub enum Resolution<'a> {
    Resolved(&'a PluginEntry),
    NotFound,
    /// Canonical names of every plugin matching by simple name or alias.
    Ambiguous(Vec<String>),
}

/// Catalog of loaded connector plugins, keyed by canonical name.
///
/// Built during startup or reload, then shared read-only.
#[derive(Debug, Default)]
pub struct PluginCatalog {
    entries: BTreeMap<String, PluginEntry>,
    options: CatalogOptions,
}

impl PluginCatalog {
    /// Create a new empty catalog with default alias derivation.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: CatalogOptions) -> Self {
        Self {
            entries: BTreeMap::new(),
            options,
        }
    }

    /// Register a listed plugin.
    pub fn register(&mut self, plugin: Arc<dyn ConnectorPlugin>) -> Result<(), TributaryError> {
        self.register_with_listing(plugin, true)
    }

    /// Register a plugin that resolves normally but never appears in listings,
    /// such as abstract roles and bundled test connectors.
    pub fn register_unlisted(
        &mut self,
        plugin: Arc<dyn ConnectorPlugin>,
    ) -> Result<(), TributaryError> {
        self.register_with_listing(plugin, false)
    }

    pub fn register_with_listing(
        &mut self,
        plugin: Arc<dyn ConnectorPlugin>,
        listed: bool,
    ) -> Result<(), TributaryError> {
        let canonical = plugin.class_name().to_string();
        if self.entries.contains_key(&canonical) {
            return Err(TributaryError::DuplicatePlugin { name: canonical });
        }

        let suffixes: &[String] = if self.options.derive_aliases {
            &self.options.alias_suffixes
        } else {
            &[]
        };
        let identity = PluginIdentity::new(canonical.clone(), suffixes);
        let schema = Arc::new(plugin.config_def());

        debug!(
            plugin = %canonical,
            simple_name = %identity.simple_name,
            aliases = identity.aliases.len(),
            schema_keys = schema.len(),
            listed,
            "registered connector plugin"
        );

        self.entries.insert(
            canonical,
            PluginEntry {
                identity,
                plugin,
                schema,
                listed,
            },
        );
        Ok(())
    }

    /// Add an operator-friendly alias to a registered plugin.
    pub fn add_alias(&mut self, canonical_name: &str, alias: &str) -> Result<(), TributaryError> {
        let entry = self.entry_mut(canonical_name)?;
        entry.identity.aliases.insert(alias.to_string());
        Ok(())
    }

    /// Toggle whether a registered plugin appears in listings.
    pub fn set_listed(&mut self, canonical_name: &str, listed: bool) -> Result<(), TributaryError> {
        let entry = self.entry_mut(canonical_name)?;
        entry.listed = listed;
        Ok(())
    }

    /// Apply aliases and listing flags from a catalog manifest.
    ///
    /// Entries naming classes that are not registered are skipped.
    pub fn apply_manifest(&mut self, manifest: &CatalogManifest) {
        let mut applied = 0usize;
        for plugin in &manifest.plugins {
            let Some(entry) = self.entries.get_mut(&plugin.class) else {
                warn!(plugin = %plugin.class, "catalog manifest names an unregistered plugin, skipping");
                continue;
            };
            entry.identity.aliases.extend(plugin.aliases.iter().cloned());
            if let Some(listed) = plugin.listed {
                entry.listed = listed;
            }
            applied += 1;
        }
        info!(applied, total = manifest.plugins.len(), "catalog manifest applied");
    }

    fn entry_mut(&mut self, canonical_name: &str) -> Result<&mut PluginEntry, TributaryError> {
        self.entries.get_mut(canonical_name).ok_or_else(|| {
            TributaryError::Config(format!("connector plugin `{canonical_name}` is not registered"))
        })
    }

    /// Get an entry by canonical name only.
    pub fn get(&self, canonical_name: &str) -> Option<&PluginEntry> {
        self.entries.get(canonical_name)
    }

    /// Look an identifier up without turning the outcome into an error.
    pub fn lookup(&self, identifier: &str) -> Resolution<'_> {
        if let Some(entry) = self.entries.get(identifier) {
            return Resolution::Resolved(entry);
        }

        let matches: Vec<&PluginEntry> = self
            .entries
            .values()
            .filter(|e| e.identity.answers_to_short_name(identifier))
            .collect();

        match matches.as_slice() {
            [] => Resolution::NotFound,
            [only] => Resolution::Resolved(*only),
            many => Resolution::Ambiguous(
                many.iter()
                    .map(|e| e.identity.canonical_name.clone())
                    .collect(),
            ),
        }
    }

    /// Resolve an identifier to exactly one plugin.
    pub fn resolve(&self, identifier: &str) -> Result<&PluginEntry, ResolutionError> {
        let outcome = match self.lookup(identifier) {
            Resolution::Resolved(entry) => Ok(entry),
            Resolution::NotFound => Err(ResolutionError::NotFound {
                identifier: identifier.to_string(),
                suggestion: self.suggest(identifier),
            }),
            Resolution::Ambiguous(candidates) => Err(ResolutionError::Ambiguous {
                identifier: identifier.to_string(),
                candidates,
            }),
        };
        match &outcome {
            Ok(entry) => debug!(
                identifier,
                plugin = %entry.identity.canonical_name,
                "resolved connector identifier"
            ),
            Err(err) => debug!(identifier, error = %err, "connector identifier did not resolve"),
        }
        outcome
    }

    /// Closest known name to an unresolvable identifier, if close enough.
    fn suggest(&self, identifier: &str) -> Option<String> {
        let mut best_score = SUGGESTION_THRESHOLD;
        let mut best_match = None;

        for name in self.known_names() {
            let score = strsim::jaro_winkler(identifier, name);
            if score > best_score {
                best_score = score;
                best_match = Some(name.to_string());
            }
        }

        best_match
    }

    /// Every name any plugin answers to, canonical names first.
    pub fn known_names(&self) -> impl Iterator<Item = &str> {
        let canonical = self.entries.keys().map(String::as_str);
        let short = self.entries.values().flat_map(|e| {
            std::iter::once(e.identity.simple_name.as_str())
                .chain(e.identity.aliases.iter().map(String::as_str))
        });
        canonical.chain(short)
    }

    /// All entries, sorted by canonical name.
    pub fn iter(&self) -> impl Iterator<Item = &PluginEntry> {
        self.entries.values()
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use tributary_core::{ConnectorRole, PluginFault};

    use super::*;

    struct NamedPlugin(String);

    impl ConnectorPlugin for NamedPlugin {
        fn class_name(&self) -> &str {
            &self.0
        }
        fn role(&self) -> Option<ConnectorRole> {
            None
        }
        fn version(&self) -> Result<String, PluginFault> {
            Ok("1.0".to_string())
        }
        fn config_def(&self) -> ConfigDef {
            ConfigDef::new()
        }
    }

    fn plugin(name: &str) -> Arc<dyn ConnectorPlugin> {
        Arc::new(NamedPlugin(name.to_string()))
    }

    fn catalog(names: &[&str]) -> PluginCatalog {
        let mut catalog = PluginCatalog::new();
        for name in names {
            catalog.register(plugin(name)).unwrap();
        }
        catalog
    }

    #[test]
    fn simple_name_strips_package_and_outer_class() {
        assert_eq!(simple_name_of("a.b.FileStreamSourceConnector"), "FileStreamSourceConnector");
        assert_eq!(simple_name_of("a.b.Outer$InnerConnector"), "InnerConnector");
        assert_eq!(simple_name_of("Bare"), "Bare");
    }

    #[test]
    fn derived_alias_strips_suffix() {
        let identity = PluginIdentity::new("x.y.FileStreamSinkConnector", &["Connector".to_string()]);
        assert!(identity.aliases.contains("FileStreamSink"));

        let identity = PluginIdentity::new("x.y.Connector", &["Connector".to_string()]);
        assert!(identity.aliases.is_empty());
    }

    #[test]
    fn resolves_canonical_simple_and_alias() {
        let catalog = catalog(&["org.acme.FileStreamSourceConnector"]);
        for id in [
            "org.acme.FileStreamSourceConnector",
            "FileStreamSourceConnector",
            "FileStreamSource",
        ] {
            let entry = catalog.resolve(id).unwrap();
            assert_eq!(entry.identity.canonical_name, "org.acme.FileStreamSourceConnector");
        }
    }

    #[test]
    fn resolution_is_case_sensitive_and_exact() {
        let catalog = catalog(&["org.acme.FileStreamSourceConnector"]);
        assert!(matches!(catalog.lookup("filestreamsource"), Resolution::NotFound));
        assert!(matches!(catalog.lookup("FileStream"), Resolution::NotFound));
        assert!(matches!(
            catalog.lookup("com.custom.FileStreamSourceConnector"),
            Resolution::NotFound
        ));
    }

    #[test]
    fn shared_simple_name_is_ambiguous() {
        let catalog = catalog(&["a.DupConnector", "b.DupConnector"]);
        match catalog.resolve("DupConnector") {
            Err(ResolutionError::Ambiguous { candidates, .. }) => {
                assert_eq!(candidates, vec!["a.DupConnector", "b.DupConnector"]);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
        assert!(matches!(catalog.lookup("Dup"), Resolution::Ambiguous(_)));
        assert!(catalog.resolve("a.DupConnector").is_ok());
    }

    #[test]
    fn canonical_match_beats_other_plugins_alias() {
        let mut catalog = catalog(&["Thing", "x.ThingConnector"]);
        catalog.add_alias("x.ThingConnector", "Thing").unwrap();
        let entry = catalog.resolve("Thing").unwrap();
        assert_eq!(entry.identity.canonical_name, "Thing");
    }

    #[test]
    fn not_found_suggests_close_name() {
        let catalog = catalog(&["org.acme.FileStreamSourceConnector"]);
        match catalog.resolve("FileStreamSourc") {
            Err(ResolutionError::NotFound { suggestion, .. }) => {
                assert_eq!(suggestion.as_deref(), Some("FileStreamSource"));
            }
            other => panic!("expected not found, got {other:?}"),
        }
        match catalog.resolve("zzzz") {
            Err(ResolutionError::NotFound { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_canonical_name_is_rejected() {
        let mut catalog = catalog(&["a.One"]);
        let err = catalog.register(plugin("a.One")).unwrap_err();
        assert!(matches!(err, TributaryError::DuplicatePlugin { .. }));
    }

    #[test]
    fn alias_derivation_can_be_disabled() {
        let mut catalog = PluginCatalog::with_options(CatalogOptions {
            derive_aliases: false,
            alias_suffixes: vec!["Connector".to_string()],
        });
        catalog.register(plugin("a.FooConnector")).unwrap();
        assert!(matches!(catalog.lookup("Foo"), Resolution::NotFound));
        assert!(matches!(catalog.lookup("FooConnector"), Resolution::Resolved(_)));
    }

    #[test]
    fn unknown_plugin_alias_and_listing_updates_fail() {
        let mut catalog = PluginCatalog::new();
        assert!(catalog.add_alias("nope", "n").is_err());
        assert!(catalog.set_listed("nope", false).is_err());
    }

    #[test]
    fn len_and_is_empty() {
        let mut catalog = PluginCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);

        catalog.register(plugin("a.Test")).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 1);
    }

    proptest! {
        #[test]
        fn every_canonical_name_resolves_to_itself(
            simple in proptest::collection::vec("[A-C][a-c]{0,2}", 1..6),
        ) {
            let names: BTreeSet<String> = simple
                .iter()
                .enumerate()
                .map(|(i, s)| format!("pkg{i}.{s}"))
                .collect();
            let mut catalog = PluginCatalog::new();
            for name in &names {
                catalog.register(plugin(name)).unwrap();
            }
            for name in &names {
                let entry = catalog.resolve(name).unwrap();
                prop_assert_eq!(&entry.identity.canonical_name, name);
            }
        }

        #[test]
        fn unmatched_identifiers_are_not_found(identifier in "[x-z]{3,6}") {
            let catalog = catalog(&["org.acme.FileStreamSourceConnector", "a.B"]);
            prop_assert!(matches!(catalog.lookup(&identifier), Resolution::NotFound));
        }
    }
}
