use crate::shared::search::Searchable;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Numeric identifier of a species, derived from its locator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u32);

impl SpeciesId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Extract the id from a locator such as `https://host/api/v2/pokemon/25/`.
    ///
    /// The id is the second-to-last `/`-delimited segment, so the trailing
    /// slash the API always emits is required.
    pub fn from_locator(url: &str) -> Option<Self> {
        let mut segments = url.rsplit('/');
        let _last = segments.next()?;
        let candidate = segments.next()?;
        candidate.parse::<u32>().ok().map(SpeciesId)
    }
}

// ============================================================================
// Catalog entry
// ============================================================================

/// One named record of the remote list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    /// Opaque locator; the numeric id and the detail key are derived from it
    pub url: String,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }

    pub fn species_id(&self) -> Option<SpeciesId> {
        SpeciesId::from_locator(&self.url)
    }

    /// Id rendered for display, `"?"` when the locator carries none
    pub fn display_id(&self) -> String {
        self.species_id()
            .map(|id| id.value().to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

impl Searchable for CatalogEntry {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}

// ============================================================================
// List endpoint
// ============================================================================

/// Payload of `GET <endpoint>?limit=N`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogListResponse {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<CatalogEntry>,
}

/// Query string of the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogListQuery {
    pub limit: u32,
}

impl CatalogListQuery {
    pub fn with_limit(limit: u32) -> Self {
        Self { limit }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_id_from_locator() {
        assert_eq!(
            SpeciesId::from_locator("https://pokeapi.co/api/v2/pokemon/25/"),
            Some(SpeciesId(25))
        );
        assert_eq!(SpeciesId::from_locator(".../1/"), Some(SpeciesId(1)));
    }

    #[test]
    fn test_species_id_missing() {
        assert_eq!(SpeciesId::from_locator(""), None);
        assert_eq!(SpeciesId::from_locator("https://host/pokemon/pikachu/"), None);
        // Without the trailing slash the last segment is the number, not the second-to-last.
        assert_eq!(SpeciesId::from_locator("https://host/pokemon/25"), None);
    }

    #[test]
    fn test_display_id() {
        assert_eq!(CatalogEntry::new("ivysaur", ".../2/").display_id(), "2");
        assert_eq!(CatalogEntry::new("missingno", "").display_id(), "?");
    }

    #[test]
    fn test_matches_filter_case_insensitive() {
        let entry = CatalogEntry::new("bulbasaur", ".../1/");
        assert!(entry.matches_filter("SAUR"));
        assert!(entry.matches_filter("bulb"));
        assert!(!entry.matches_filter("chu"));
    }

    #[test]
    fn test_list_response_ignores_unknown_fields() {
        let json = r#"{
            "count": 2,
            "next": null,
            "previous": null,
            "extra": true,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
            ]
        }"#;
        let response: CatalogListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.count, Some(2));
        assert_eq!(response.results.len(), 2);
        assert_eq!(response.results[1].name, "ivysaur");
    }

    #[test]
    fn test_list_response_without_count() {
        let json = r#"{"results": []}"#;
        let response: CatalogListResponse = serde_json::from_str(json).unwrap();
        assert!(response.results.is_empty());
        assert_eq!(response.count, None);
    }
}
