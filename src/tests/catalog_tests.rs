use super::*;

use std::cmp::Ordering;

#[test]
fn default_catalog_is_sorted_by_display_name() {
    let names: Vec<String> = default_catalog()
        .into_iter()
        .map(|e| e.display_name)
        .collect();
    assert_eq!(
        names,
        vec!["NeoPDV 1", "NeoPDV 2", "NeoPDV 3", "NeoPDV 4", "NeoPDV 5"]
    );
}

#[test]
fn default_entries_carry_ids_and_urls() {
    let cat = default_catalog();
    let first = &cat[0];
    assert_eq!(first.id, "neopdv1");
    assert_eq!(first.url, "https://neopdv1.vercel.app/");
    assert_eq!(first.description.as_deref(), Some("Primeiro estabelecimento"));
}

#[test]
fn names_compare_ignoring_case_and_accents() {
    assert_eq!(compare_names("Loja b", "LOJA A"), Ordering::Greater);
    assert_eq!(compare_names("loja a", "LOJA B"), Ordering::Less);
    assert_eq!(compare_names("Ágata", "agua"), Ordering::Less);
    assert_eq!(compare_names("pão", "Pato"), Ordering::Less);
    assert_eq!(compare_names("Zeca", "ábaco"), Ordering::Greater);
    assert_eq!(compare_names("same", "same"), Ordering::Equal);
}

#[test]
fn replace_swaps_the_whole_list() {
    let mut cat = Catalog::default();
    assert!(cat.is_fallback());

    cat.replace(vec![Establishment::new(
        "x",
        "Loja X",
        None,
        "https://x.example/",
    )]);
    assert_eq!(cat.len(), 1);
    assert!(cat.find("neopdv1").is_none());
    assert!(cat.synced_at().is_some());
}

#[test]
fn reset_restores_exact_default_catalog() {
    let mut cat = Catalog::default();
    cat.replace(Vec::new());
    assert!(cat.is_empty());

    cat.reset();
    assert_eq!(cat.entries(), default_catalog().as_slice());
    assert!(cat.is_fallback());
}
