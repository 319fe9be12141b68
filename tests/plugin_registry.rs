//! Builtin plugin registry integration tests

use speedb_build_info::plugin::api::{
    builtin_registry, register_speedb_plugins, BuiltinRegistry, ObjectLibrary, RegistryError,
    SPEEDB_FACTORIES, SPEEDB_FAMILY,
};

#[test]
fn test_speedb_family_is_builtin() {
    let registry = builtin_registry();
    assert!(registry.has_family(SPEEDB_FAMILY));
    assert!(registry.families().contains(&"speedb".to_string()));
}

#[test]
fn test_loading_speedb_family() {
    let mut library = ObjectLibrary::new("default");
    let added = builtin_registry()
        .load_family(SPEEDB_FAMILY, &mut library)
        .unwrap();

    assert_eq!(added, SPEEDB_FACTORIES.len());
    for (kind, name) in SPEEDB_FACTORIES {
        assert!(library.has_factory(kind, name), "{} {}", kind, name);
    }
}

#[test]
fn test_register_all_includes_speedb() {
    let mut library = ObjectLibrary::new("all");
    let counts = builtin_registry().register_all(&mut library);
    assert_eq!(counts.get(SPEEDB_FAMILY), Some(&SPEEDB_FACTORIES.len()));
}

#[test]
fn test_independent_registry_rejects_duplicates() {
    let mut registry = BuiltinRegistry::new();
    registry
        .insert_if_absent(SPEEDB_FAMILY, register_speedb_plugins)
        .unwrap();

    assert_eq!(
        registry.insert_if_absent(SPEEDB_FAMILY, register_speedb_plugins),
        Err(RegistryError::DuplicateFamily {
            family: SPEEDB_FAMILY.to_string()
        })
    );
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_unknown_family() {
    let mut library = ObjectLibrary::new("default");
    let result = builtin_registry().load_family("rocksdb-missing", &mut library);
    assert!(matches!(result, Err(RegistryError::FamilyNotFound { .. })));
    assert_eq!(library.factory_count(), 0);
}
