use serde::{Deserialize, Serialize};

use shopfront_core::{DomainError, DomainResult, Entity, OpaqueId};

/// Product identifier (opaque string, compared exactly).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub OpaqueId);

impl ProductId {
    pub fn new(id: OpaqueId) -> Self {
        Self(id)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// A sellable item. Immutable once constructed: there are no setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    id: ProductId,
    title: String,
    description: String,
    retail_price: u64, // Price in smallest currency unit (cents)
}

impl Product {
    /// Build a product, rejecting a blank title.
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        description: impl Into<String>,
        retail_price: u64,
    ) -> DomainResult<Self> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("title must not be empty"));
        }

        Ok(Self {
            id,
            title,
            description: description.into(),
            retail_price,
        })
    }

    pub fn id_typed(&self) -> &ProductId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn retail_price(&self) -> u64 {
        self.retail_price
    }

    /// Case-insensitive containment test against title or description.
    ///
    /// `needle_folded` must already be passed through [`fold_case`].
    pub(crate) fn matches_folded(&self, needle_folded: &str) -> bool {
        fold_case(&self.title).contains(needle_folded)
            || fold_case(&self.description).contains(needle_folded)
    }
}

/// Unicode default case folding (ß/SS/ss and Σ/σ/ς fold to one form).
pub fn fold_case(text: &str) -> String {
    caseless::default_case_fold_str(text)
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
