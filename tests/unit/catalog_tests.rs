//! Catalog filtering against the seeded project list.

use folio::catalog::{ALL_CATEGORY, Category, filter_by_category};
use folio::content::PROJECTS;

#[test]
fn all_returns_the_six_seeded_records_in_order() {
    let filtered = filter_by_category(PROJECTS, ALL_CATEGORY);
    let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn branding_returns_exactly_the_branding_subset() {
    let filtered = filter_by_category(PROJECTS, "Branding");
    assert!(filtered.iter().all(|p| p.category == Category::Branding));
    let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![4]);
}

#[test]
fn unknown_category_returns_empty() {
    assert!(filter_by_category(PROJECTS, "Nonexistent").is_empty());
}

#[test]
fn every_category_filter_is_stable() {
    for category in Category::ALL {
        let filtered = filter_by_category(PROJECTS, category.label());
        let ids: Vec<u32> = filtered.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "{category} filter reordered the catalog");
        assert!(filtered.iter().all(|p| p.category == category));
    }
}

#[test]
fn category_subsets_partition_the_catalog() {
    let total: usize = Category::ALL
        .iter()
        .map(|c| filter_by_category(PROJECTS, c.label()).len())
        .sum();
    assert_eq!(total, PROJECTS.len());
}

#[test]
fn filter_does_not_mutate_the_catalog() {
    let before: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
    let _ = filter_by_category(PROJECTS, "UI/UX");
    let after: Vec<u32> = PROJECTS.iter().map(|p| p.id).collect();
    assert_eq!(before, after);
}
