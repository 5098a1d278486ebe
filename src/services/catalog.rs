use std::collections::HashSet;
use std::path::Path;

use thiserror::Error;

use crate::core::predicate::IdeaPredicate;
use crate::models::{Category, Idea};

/// Errors raised by catalog access and loading
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid idea {id:?}: {reason}")]
    InvalidIdea { id: String, reason: String },
}

/// Read boundary the match pipeline consumes
///
/// The pipeline issues at most two sequential reads per request (primary
/// filter, then the widened expansion query) and holds nothing across them.
#[allow(async_fn_in_trait)]
pub trait IdeaCatalog {
    /// Return up to `limit` ideas satisfying the predicate, in catalog order
    async fn find_matching(
        &self,
        predicate: &IdeaPredicate,
        limit: usize,
    ) -> Result<Vec<Idea>, CatalogError>;
}

/// Built-in sample catalog, embedded at compile time
const SEED_IDEAS: &str = include_str!("../../data/seed_ideas.json");

/// Catalog snapshot held in memory
///
/// Every record is validated once at load time; match-time code can assume
/// vocabulary membership and non-empty enumerated sets.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
    ideas: Vec<Idea>,
}

impl InMemoryCatalog {
    /// Build a catalog from already-deserialized ideas, validating each
    pub fn from_ideas(ideas: Vec<Idea>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for idea in &ideas {
            validate_idea(idea)?;
            if !seen.insert(idea.id.clone()) {
                return Err(CatalogError::InvalidIdea {
                    id: idea.id.clone(),
                    reason: "duplicate id".to_string(),
                });
            }
        }
        Ok(Self { ideas })
    }

    /// Parse and validate a JSON catalog document
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let ideas: Vec<Idea> = serde_json::from_str(json)?;
        Self::from_ideas(ideas)
    }

    /// Load and validate a catalog file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json(&json)?;
        tracing::info!(
            "Loaded catalog from {} ({} ideas)",
            path.display(),
            catalog.len()
        );
        Ok(catalog)
    }

    /// The embedded sample catalog
    pub fn with_seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_IDEAS)
    }

    pub fn len(&self) -> usize {
        self.ideas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ideas.is_empty()
    }

    pub fn all(&self) -> &[Idea] {
        &self.ideas
    }

    pub fn get(&self, id: &str) -> Option<&Idea> {
        self.ideas.iter().find(|idea| idea.id == id)
    }

    pub fn by_category(&self, category: Category) -> Vec<Idea> {
        self.ideas
            .iter()
            .filter(|idea| idea.category == category)
            .cloned()
            .collect()
    }
}

impl IdeaCatalog for InMemoryCatalog {
    async fn find_matching(
        &self,
        predicate: &IdeaPredicate,
        limit: usize,
    ) -> Result<Vec<Idea>, CatalogError> {
        Ok(self
            .ideas
            .iter()
            .filter(|idea| predicate.matches(idea))
            .take(limit)
            .cloned()
            .collect())
    }
}

fn validate_idea(idea: &Idea) -> Result<(), CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidIdea {
        id: idea.id.clone(),
        reason: reason.to_string(),
    };

    if idea.id.trim().is_empty() {
        return Err(invalid("id must not be empty"));
    }
    if idea.title.trim().is_empty() {
        return Err(invalid("title must not be empty"));
    }
    if idea.description.trim().is_empty() {
        return Err(invalid("description must not be empty"));
    }
    if idea.organization_types.is_empty() {
        return Err(invalid("organizationTypes must not be empty"));
    }
    if idea.required_resources.is_empty() {
        return Err(invalid("requiredResources must not be empty"));
    }
    if idea.success_metrics.is_empty() {
        return Err(invalid("successMetrics must not be empty"));
    }
    Ok(())
}
