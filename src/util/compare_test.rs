use super::*;
use serde_json::json;

fn text(s: &str) -> SortValue {
    SortValue::from(s)
}

// =============================================================
// collate / locale_sort
// =============================================================

#[test]
fn collate_ignores_case_for_primary_order() {
    assert_eq!(collate("apple", "Banana"), Ordering::Less);
    assert_eq!(collate("Zebra", "apple"), Ordering::Greater);
}

#[test]
fn collate_breaks_case_ties_lower_first() {
    assert_eq!(collate("apple", "Apple"), Ordering::Less);
    assert_eq!(collate("Apple", "apple"), Ordering::Greater);
    assert_eq!(collate("apple", "apple"), Ordering::Equal);
}

#[test]
fn collate_orders_prefix_first() {
    assert_eq!(collate("app", "apple"), Ordering::Less);
}

#[test]
fn locale_sort_str_orders_names() {
    let mut names = vec!["delta", "Alpha", "charlie", "alpha", "Bravo"];
    names.sort_by(|a, b| locale_sort_str(a, b));
    assert_eq!(names, vec!["alpha", "Alpha", "Bravo", "charlie", "delta"]);
}

#[test]
fn locale_sort_uses_typed_order_for_numbers() {
    assert_eq!(locale_sort(&SortValue::from(2.0), &SortValue::from(10.0)), Ordering::Less);
    assert_eq!(locale_sort(&SortValue::from(10_i64), &SortValue::from(10.0)), Ordering::Equal);
    assert_eq!(locale_sort(&SortValue::from(true), &SortValue::from(false)), Ordering::Greater);
}

#[test]
fn locale_sort_orders_mixed_types_by_rank() {
    assert_eq!(locale_sort(&SortValue::from(99.0), &text("1")), Ordering::Less);
    assert_eq!(locale_sort(&text("a"), &SortValue::from(false)), Ordering::Greater);
}

#[test]
fn locale_sort_is_transitive_and_idempotent() {
    let mut values = vec![
        text("b"),
        SortValue::from(3.0),
        text("A"),
        SortValue::from(f64::NAN),
        SortValue::from(true),
        text("a"),
        SortValue::from(-1.0),
    ];
    values.sort_by(locale_sort);
    let once = values.clone();
    values.sort_by(locale_sort);
    assert_eq!(format!("{values:?}"), format!("{once:?}"));

    for (i, a) in once.iter().enumerate() {
        for b in &once[i..] {
            assert_ne!(locale_sort(a, b), Ordering::Greater);
        }
    }
}

#[test]
fn compare_optional_sorts_missing_first() {
    let present = text("x");
    assert_eq!(compare_optional(None, Some(&present)), Ordering::Less);
    assert_eq!(compare_optional(Some(&present), None), Ordering::Greater);
    assert_eq!(compare_optional(None, None), Ordering::Equal);
}

// =============================================================
// SortDir
// =============================================================

#[test]
fn sort_dir_from_sign_and_apply() {
    assert_eq!(SortDir::from_sign(1), SortDir::Asc);
    assert_eq!(SortDir::from_sign(-1), SortDir::Desc);
    assert_eq!(SortDir::Desc.apply(Ordering::Less), Ordering::Greater);
    assert_eq!(SortDir::Asc.apply(Ordering::Less), Ordering::Less);
    assert_eq!(SortDir::Asc.toggled(), SortDir::Desc);
}

// =============================================================
// CollectionSort
// =============================================================

#[test]
fn collection_sort_compares_primary_field() {
    let sort = CollectionSort::new("name");
    let a = json!({"name": "alice"});
    let b = json!({"name": "Bob"});
    assert_eq!(sort.compare(&a, &b), Ordering::Less);
    assert_eq!(sort.clone().with_dir(SortDir::Desc).compare(&a, &b), Ordering::Greater);
}

#[test]
fn collection_sort_returns_tie_without_secondary() {
    let sort = CollectionSort::new("name");
    let a = json!({"name": "same", "size": 1});
    let b = json!({"name": "same", "size": 2});
    assert_eq!(sort.compare(&a, &b), Ordering::Equal);
}

#[test]
fn collection_sort_uses_secondary_only_on_tie() {
    let sort = CollectionSort::new("name").with_secondary("size").with_dir(SortDir::Desc);
    let a = json!({"name": "same", "size": 1});
    let b = json!({"name": "same", "size": 2});
    assert_eq!(sort.compare(&a, &b), Ordering::Greater);

    let c = json!({"name": "alpha", "size": 9});
    assert_eq!(sort.compare(&c, &a), Ordering::Greater);
}

#[test]
fn collection_sort_orders_numeric_fields() {
    let sort = CollectionSort::new("size");
    let mut records = vec![json!({"size": 10}), json!({"size": 2}), json!({"size": 33})];
    sort.sort(&mut records);
    assert_eq!(records, vec![json!({"size": 2}), json!({"size": 10}), json!({"size": 33})]);
}

#[test]
fn collection_sort_tolerates_missing_fields() {
    let sort = CollectionSort::new("name").with_secondary("missing");
    let mut records = vec![json!({"name": "b"}), json!({}), json!({"name": null}), json!({"name": "a"}), json!(42)];
    sort.sort(&mut records);
    assert_eq!(records[3], json!({"name": "a"}));
    assert_eq!(records[4], json!({"name": "b"}));
}

#[test]
fn collection_sort_works_on_json_maps() {
    let sort = CollectionSort::new("created").with_dir(SortDir::from_sign(-1));
    let mut records: Vec<Map<String, Value>> = vec![
        json!({"created": "2014-01-01"}).as_object().cloned().unwrap_or_default(),
        json!({"created": "2015-01-01"}).as_object().cloned().unwrap_or_default(),
    ];
    sort.sort(&mut records);
    assert_eq!(records[0].get("created"), Some(&json!("2015-01-01")));
}

#[test]
fn locale_compare_matches_collection_sort() {
    let a = json!({"name": "Same", "login": "b"});
    let b = json!({"name": "same", "login": "a"});
    assert_eq!(locale_compare(&a, &b, "name", None, SortDir::Asc), Ordering::Greater);
    assert_eq!(locale_compare(&a, &b, "login", Some("name"), SortDir::Desc), Ordering::Less);
    assert_eq!(
        locale_compare(&a, &b, "missing", Some("login"), SortDir::Asc),
        CollectionSort::new("missing").with_secondary("login").compare(&a, &b)
    );
}

// =============================================================
// Accents and timestamps
// =============================================================

#[test]
fn collate_groups_accented_letters_with_base_letter() {
    assert_eq!(collate("éclair", "fig"), Ordering::Less);
    assert_eq!(collate("eclair", "éclair"), Ordering::Less);
    assert_eq!(collate("Émile", "zebra"), Ordering::Less);

    let mut words = vec!["zebra", "éclair", "Émile", "eagle", "fig"];
    words.sort_by(|a, b| locale_sort_str(a, b));
    assert_eq!(words, vec!["eagle", "éclair", "Émile", "fig", "zebra"]);
}

#[test]
fn from_json_lifts_timestamps_to_datetime() {
    assert!(matches!(SortValue::from_json(&json!("2014-01-02T03:04:05Z")), Some(SortValue::DateTime(_))));
    assert!(matches!(SortValue::from_json(&json!("2014-01-02")), Some(SortValue::DateTime(_))));
    assert!(matches!(SortValue::from_json(&json!("2014")), Some(SortValue::Text(_))));
    assert!(matches!(SortValue::from_json(&json!("alice")), Some(SortValue::Text(_))));
}

#[test]
fn datetime_values_order_chronologically_across_offsets() {
    let earlier = SortValue::from_json(&json!("2014-01-02T03:00:00+05:00"));
    let later = SortValue::from_json(&json!("2014-01-02T00:00:00Z"));
    assert_eq!(compare_optional(earlier.as_ref(), later.as_ref()), Ordering::Less);

    let sort = CollectionSort::new("updated");
    let mut records = vec![
        json!({"updated": "2014-01-02T00:00:00Z"}),
        json!({"updated": "2014-01-02T03:00:00+05:00"}),
        json!({"updated": "2013-12-31 23:59:59"}),
    ];
    sort.sort(&mut records);
    assert_eq!(records[0]["updated"], json!("2013-12-31 23:59:59"));
    assert_eq!(records[1]["updated"], json!("2014-01-02T03:00:00+05:00"));
}

#[test]
fn datetime_ranks_between_numbers_and_text() {
    let ts = SortValue::from_json(&json!("2014-01-02")).unwrap();
    assert_eq!(locale_sort(&ts, &SortValue::from(1e12)), Ordering::Greater);
    assert_eq!(locale_sort(&ts, &text("0")), Ordering::Less);
    assert_eq!(locale_sort(&ts, &SortValue::from(true)), Ordering::Greater);
}
