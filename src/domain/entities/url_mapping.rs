//! URL mapping entity.

/// A stored association between an original URL and its short URL.
///
/// `id` is assigned by the store on insert. Mappings are never updated or
/// deleted once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, original_url: String, short_url: String) -> Self {
        Self {
            id,
            original_url,
            short_url,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub original_url: String,
    pub short_url: String,
}

impl NewUrlMapping {
    pub fn new(original_url: impl Into<String>, short_url: impl Into<String>) -> Self {
        Self {
            original_url: original_url.into(),
            short_url: short_url.into(),
        }
    }

    /// Attaches a store-assigned id, producing the persisted entity.
    pub fn into_mapping(self, id: i64) -> UrlMapping {
        UrlMapping::new(id, self.original_url, self.short_url)
    }
}
