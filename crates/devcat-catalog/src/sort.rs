//! Result ordering.
//!
//! Ties are never broken with a secondary key. Sorting relies on the
//! stability of [`slice::sort_by`] so equal keys keep catalog order.

use std::cmp::Ordering;

use crate::filter::SortOrder;
use crate::model::Development;

/// Three-way comparison of two developments under a sort order.
pub fn compare(a: &Development, b: &Development, sort: SortOrder) -> Ordering {
    match sort {
        SortOrder::PriceAsc => a.price_range.min.cmp(&b.price_range.min),
        SortOrder::PriceDesc => b.price_range.min.cmp(&a.price_range.min),
        SortOrder::Newest => b.created_at.cmp(&a.created_at),
        SortOrder::Relevant => a.order.cmp(&b.order),
    }
}

/// Sorts developments in place (stable).
pub fn sort_developments(developments: &mut [&Development], sort: SortOrder) {
    developments.sort_by(|a, b| compare(a, b, sort));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{day, ids, make_development};

    fn catalog() -> Vec<Development> {
        let mut a = make_development("a", 3);
        a.price_range.min = 900_000;
        a.created_at = day(5);

        let mut b = make_development("b", 1);
        b.price_range.min = 500_000;
        b.created_at = day(9);

        let mut c = make_development("c", 2);
        c.price_range.min = 1_500_000;
        c.created_at = day(1);

        vec![a, b, c]
    }

    fn sorted(catalog: &[Development], sort: SortOrder) -> Vec<String> {
        let mut refs: Vec<&Development> = catalog.iter().collect();
        sort_developments(&mut refs, sort);
        ids(&refs)
    }

    #[test]
    fn test_price_asc() {
        assert_eq!(sorted(&catalog(), SortOrder::PriceAsc), ["b", "a", "c"]);
    }

    #[test]
    fn test_price_desc() {
        assert_eq!(sorted(&catalog(), SortOrder::PriceDesc), ["c", "a", "b"]);
    }

    #[test]
    fn test_newest() {
        assert_eq!(sorted(&catalog(), SortOrder::Newest), ["b", "a", "c"]);
    }

    #[test]
    fn test_relevant_uses_order() {
        assert_eq!(sorted(&catalog(), SortOrder::Relevant), ["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_catalog_order() {
        let catalog: Vec<Development> = ["p", "q", "r", "s", "t"]
            .iter()
            .map(|id| make_development(id, 7))
            .collect();

        for sort in SortOrder::ALL {
            assert_eq!(sorted(&catalog, sort), ["p", "q", "r", "s", "t"], "{sort}");
        }
    }

    #[test]
    fn test_ties_keep_order_among_distinct_keys() {
        let mut catalog: Vec<Development> = ["x1", "y", "x2", "x3"]
            .iter()
            .map(|id| make_development(id, 0))
            .collect();
        catalog[1].price_range.min = 1;

        assert_eq!(
            sorted(&catalog, SortOrder::PriceDesc),
            ["x1", "x2", "x3", "y"]
        );
        assert_eq!(sorted(&catalog, SortOrder::PriceAsc), ["y", "x1", "x2", "x3"]);
    }

    #[test]
    fn test_compare_is_antisymmetric() {
        let catalog = catalog();
        for sort in SortOrder::ALL {
            for a in &catalog {
                for b in &catalog {
                    assert_eq!(compare(a, b, sort), compare(b, a, sort).reverse());
                }
            }
        }
    }
}
