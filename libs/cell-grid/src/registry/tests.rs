use super::*;

fn by_index(registry: &Registry, value: IndexValue) -> Resolution {
    registry.resolve(&PatternSelector::Index(value)).unwrap()
}

fn by_name(registry: &Registry, name: Option<&str>) -> Resolution {
    registry
        .resolve(&PatternSelector::Name(name.map(str::to_string)))
        .unwrap()
}

#[test]
fn test_standard_order() {
    assert_eq!(
        Registry::standard().names(),
        ["square", "tri", "hex", "weave", "cairo"]
    );
}

#[test]
fn test_index_is_clamped() {
    let registry = Registry::standard();
    assert_eq!(by_index(&registry, IndexValue::from(-5)).index, 0);
    assert_eq!(by_index(&registry, IndexValue::from(999)).index, 4);
    assert_eq!(by_index(&registry, IndexValue::from(3)).name(), "weave");
}

#[test]
fn test_unparsable_index_selects_first() {
    let registry = Registry::standard();
    assert_eq!(by_index(&registry, IndexValue::from("abc")).index, 0);
    assert_eq!(by_index(&registry, IndexValue::Real(f64::NAN)).index, 0);
    assert_eq!(by_index(&registry, IndexValue::Real(2.7)).index, 2);
}

#[test]
fn test_wrap_policy() {
    let registry = Registry::standard().with_policy(IndexPolicy::Wrap);
    assert_eq!(by_index(&registry, IndexValue::from(-1)).name(), "cairo");
    assert_eq!(by_index(&registry, IndexValue::from(7)).name(), "hex");
}

#[test]
fn test_name_lookup() {
    let registry = Registry::standard();
    assert_eq!(by_name(&registry, Some(" HEX ")).name(), "hex");
    assert_eq!(by_name(&registry, Some("Cairo")).index, 4);
    assert_eq!(by_name(&registry, Some("blob")).name(), "square");
    assert_eq!(by_name(&registry, None).name(), "square");
}

#[test]
fn test_index_wins_over_name() {
    let selector = PatternSelector::new(Some("hex"), Some(&IndexValue::from(1)));
    let resolution = Registry::standard().resolve(&selector).unwrap();
    assert_eq!(resolution.name(), "tri");
}

#[test]
fn test_empty_registry_is_an_error() {
    let registry = Registry::with_entries(Vec::new());
    assert!(registry.is_empty());
    let err = registry
        .resolve(&PatternSelector::Name(None))
        .unwrap_err();
    assert_eq!(err, TilingError::EmptyRegistry);
}

#[test]
fn test_custom_registry_without_square_falls_back_to_first() {
    let registry = Registry::with_entries(vec![
        RegistryEntry::new("hex", generators::hex),
        RegistryEntry::new("tri", generators::tri),
    ]);
    assert_eq!(by_name(&registry, Some("square")).name(), "hex");
    assert_eq!(by_name(&registry, None).index, 0);
}

#[test]
fn test_resolution_runs_generator() {
    let resolution = by_name(&Registry::standard(), Some("tri"));
    let cells = resolution.generate(&GridParams::new(2, 2, 1.0, crate::Point::ZERO));
    assert_eq!(cells.len(), 4);
    assert!(cells.iter().all(|c| c.vertex_count() == 3));
}
