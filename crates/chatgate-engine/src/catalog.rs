use anyhow::Result;
use std::collections::BTreeSet;

use crate::client::CompletionEngine;

/// A model name that has been resolved against the catalog.
///
/// Holds the canonical underscore identifier; handlers only obtain one
/// through [`ModelCatalog::resolve`], so an instance is proof the model
/// is known to the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedModel {
    name: String,
}

impl ResolvedModel {
    /// Canonical catalog identifier, e.g. "gpt_4o_mini"
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client-facing model name, e.g. "gpt-4o-mini"
    pub fn display_name(&self) -> String {
        self.name.replace('_', "-")
    }
}

/// Explicit model lookup table built at startup from the engine's
/// registered model list. Replaces per-request introspection of the
/// engine with a plain map.
#[derive(Debug, Clone)]
pub struct ModelCatalog {
    names: BTreeSet<String>,
}

impl ModelCatalog {
    pub fn from_engine(engine: &dyn CompletionEngine) -> Result<Self> {
        Ok(Self {
            names: engine.models()?.into_iter().collect(),
        })
    }

    /// Look up a client-supplied model name. Hyphens are normalized to
    /// underscores before the lookup, so "gpt-4o-mini" and
    /// "gpt_4o_mini" both resolve to the same entry.
    pub fn resolve(&self, requested: &str) -> Option<ResolvedModel> {
        let name = requested.replace('-', "_");
        self.names.contains(&name).then_some(ResolvedModel { name })
    }

    /// All known identifiers, sorted
    pub fn models(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
