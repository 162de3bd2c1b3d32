//! Property tests: classification is total and exclusions always win.

use proptest::prelude::*;

use atelier_catalog::{classify, is_clothing};
use atelier_core::models::CatalogItem;
use atelier_core::rules::ClassifierRules;

proptest! {
    #[test]
    fn prop_excluded_records_are_never_classified(
        prefix in "[a-z ]{0,20}",
        suffix in "[a-z ]{0,20}",
        pick in 0usize..5,
    ) {
        let rules = ClassifierRules::default();
        let excluded = ["bag", "necklace", "perfume", "phone", "umbrella"][pick];
        let item = CatalogItem::new("x", format!("{prefix} {excluded} {suffix}"));
        prop_assert_eq!(classify(&item, &rules), None);
        prop_assert!(!is_clothing(&item, &rules));
    }

    #[test]
    fn prop_clothing_always_gets_a_category(name in "[A-Za-z ]{1,40}") {
        let rules = ClassifierRules::default();
        let item = CatalogItem::new("x", name);
        prop_assert_eq!(classify(&item, &rules).is_some(), is_clothing(&item, &rules));
    }
}
