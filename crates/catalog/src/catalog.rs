//! The immutable, ordered product catalog and its two queries.

use shopfront_core::{DomainResult, Entity, IdGenerator};

use crate::fixtures;
use crate::product::{fold_case, Product};

/// Fixed, ordered sequence of products.
///
/// Populated once and never mutated, so a shared reference (or an `Arc`) is all
/// concurrent readers need.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Catalog populated with the built-in seed products.
    pub fn seeded(ids: &dyn IdGenerator) -> DomainResult<Self> {
        Ok(Self::new(fixtures::seed_products(ids)?))
    }

    /// Products whose title or description contains `term`, ignoring case.
    ///
    /// `None` returns the whole catalog. Catalog order is always preserved, and
    /// `Some("")` matches every product.
    pub fn search(&self, term: Option<&str>) -> Vec<&Product> {
        let Some(term) = term else {
            return self.products.iter().collect();
        };

        let needle = fold_case(term);
        self.products
            .iter()
            .filter(|p| p.matches_folded(&needle))
            .collect()
    }

    /// Exact (case-sensitive) lookup by identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id().as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::ProductId;
    use shopfront_core::{OpaqueId, SequentialIdGenerator};

    fn seeded() -> Catalog {
        Catalog::seeded(&SequentialIdGenerator::new("product")).unwrap()
    }

    fn titles(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.title().to_string()).collect()
    }

    #[test]
    fn search_without_term_returns_everything_in_order() {
        let catalog = seeded();
        let all = catalog.search(None);

        assert_eq!(all.len(), 6);
        assert!(all.iter().copied().eq(catalog.iter()));
    }

    #[test]
    fn search_hypermedia_finds_only_restful_web_apis() {
        let catalog = seeded();
        let hits = catalog.search(Some("hypermedia"));

        assert_eq!(titles(&hits), vec!["RESTful Web APIs".to_string()]);
    }

    #[test]
    fn search_rest_matches_all_six() {
        let catalog = seeded();
        assert_eq!(catalog.search(Some("REST")).len(), 6);
        assert_eq!(catalog.search(Some("rest")).len(), 6);
    }

    #[test]
    fn search_with_no_match_is_empty_not_error() {
        let catalog = seeded();
        assert!(catalog.search(Some("nonexistent-term-xyz")).is_empty());
    }

    #[test]
    fn empty_term_matches_everything() {
        let catalog = seeded();
        assert_eq!(catalog.search(Some("")), catalog.search(None));
    }

    #[test]
    fn search_matches_description_only() {
        let catalog = seeded();
        let hits = catalog.search(Some("MICROSERVICES"));
        assert_eq!(titles(&hits), vec!["Building Microservices".to_string()]);

        let hits = catalog.search(Some("media types"));
        assert_eq!(titles(&hits), vec!["REST API Design Rulebook".to_string()]);
    }

    fn single(title: &str) -> Catalog {
        Catalog::new(vec![
            Product::new(ProductId::new(OpaqueId::parse("p-1").unwrap()), title, "", 100).unwrap(),
        ])
    }

    #[test]
    fn final_sigma_matches_in_every_case() {
        let catalog = single("ΟΔΟΣ");
        for term in ["ς", "Σ", "σ", "οδος", "ΟΔΟΣ"] {
            assert_eq!(catalog.search(Some(term)).len(), 1, "term {term:?}");
        }
        assert_eq!(catalog.search(Some("ς".to_uppercase().as_str())).len(), 1);
    }

    #[test]
    fn sharp_s_matches_its_uppercase_form() {
        let catalog = single("Straße");
        assert_eq!(catalog.search(Some("ß")).len(), 1);
        assert_eq!(catalog.search(Some("ß".to_uppercase().as_str())).len(), 1);
        assert_eq!(catalog.search(Some("ß".to_lowercase().as_str())).len(), 1);
        assert_eq!(catalog.search(Some("STRASSE")).len(), 1);
    }

    #[test]
    fn search_preserves_catalog_order() {
        let catalog = seeded();
        let hits = catalog.search(Some("restful"));

        assert_eq!(
            titles(&hits),
            vec![
                "RESTful Web APIs".to_string(),
                "RESTful Java with JAX-RS 2.0".to_string(),
                "Building Microservices".to_string(),
            ]
        );
    }

    #[test]
    fn find_by_id_returns_second_product() {
        let catalog = seeded();
        let found = catalog.find_by_id("product-2").unwrap();
        assert_eq!(found.title(), "REST in Practice");
    }

    #[test]
    fn find_by_id_unknown_is_none() {
        let catalog = seeded();
        assert!(catalog.find_by_id("not-a-real-id").is_none());
    }

    #[test]
    fn find_by_id_is_case_sensitive() {
        let catalog = seeded();
        assert!(catalog.find_by_id("PRODUCT-2").is_none());
    }

    #[test]
    fn empty_catalog_queries() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.search(None).is_empty());
        assert!(catalog.search(Some("")).is_empty());
        assert!(catalog.find_by_id("anything").is_none());
    }

    #[test]
    fn find_by_id_returns_first_on_duplicate_ids() {
        let id = || ProductId::new(OpaqueId::parse("dup").unwrap());
        let catalog = Catalog::new(vec![
            Product::new(id(), "First", "", 1).unwrap(),
            Product::new(id(), "Second", "", 2).unwrap(),
        ]);

        assert_eq!(catalog.find_by_id("dup").unwrap().title(), "First");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn catalog_from(rows: &[(String, String)]) -> Catalog {
            let ids = SequentialIdGenerator::new("p");
            Catalog::new(
                rows.iter()
                    .map(|(t, d)| Product::new(ProductId::new(ids.next_id()), t.as_str(), d.as_str(), 100).unwrap())
                    .collect(),
            )
        }

        fn rows() -> impl Strategy<Value = Vec<(String, String)>> {
            prop::collection::vec(
                (
                    "[A-Za-zßΣσςΟΔΑäÄöÖ][A-Za-zßΣσςΟΔΑäÄöÖ ]{0,15}",
                    "[A-Za-zßΣσςΟΔΑäÄöÖ ]{0,30}",
                ),
                0..12,
            )
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: no term returns the full catalog, in order.
            #[test]
            fn absent_term_is_identity(rows in rows()) {
                let catalog = catalog_from(&rows);
                prop_assert!(catalog.search(None).into_iter().eq(catalog.iter()));
            }

            /// Property: the result is exactly the matching products, in catalog order.
            #[test]
            fn result_is_ordered_filter(rows in rows(), term in "[A-Za-zßΣσςΟΔΑäÄöÖ]{0,3}") {
                let catalog = catalog_from(&rows);
                let needle = fold_case(&term);

                let expected: Vec<&Product> = catalog
                    .iter()
                    .filter(|p| {
                        fold_case(p.title()).contains(&needle)
                            || fold_case(p.description()).contains(&needle)
                    })
                    .collect();

                prop_assert_eq!(catalog.search(Some(term.as_str())), expected);
            }

            /// Property: empty term is a universal substring.
            #[test]
            fn empty_term_returns_everything(rows in rows()) {
                let catalog = catalog_from(&rows);
                prop_assert_eq!(catalog.search(Some("")), catalog.search(None));
            }

            /// Property: case of the term does not change the result.
            #[test]
            fn search_ignores_term_case(rows in rows(), term in "[A-Za-zßΣσςΟΔΑäÄöÖ]{1,3}") {
                let catalog = catalog_from(&rows);
                let as_given = catalog.search(Some(term.as_str()));

                prop_assert_eq!(&as_given, &catalog.search(Some(term.to_uppercase().as_str())));
                prop_assert_eq!(&as_given, &catalog.search(Some(term.to_lowercase().as_str())));
            }

            /// Property: every present id resolves to its product; unknown ids do not.
            #[test]
            fn find_by_id_resolves_present_ids(rows in rows()) {
                let catalog = catalog_from(&rows);

                for product in catalog.iter() {
                    prop_assert_eq!(catalog.find_by_id(product.id_typed().as_str()), Some(product));
                }
                prop_assert!(catalog.find_by_id("not-a-real-id").is_none());
            }
        }
    }
}
