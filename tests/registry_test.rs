// Self-consistency of the standard element table

use bladestyle_core::{registry, serialize, Category, Registry};

#[test]
fn test_registry_is_populated() {
    let reg = registry();
    assert!(reg.len() > 90);
    for key in ["Int", "Sum", "Layers", "AudioFlicker", "StylePtr", "style_pov"] {
        assert!(reg.contains(key), "missing {key}");
    }
}

#[test]
fn test_standard_registry_is_deterministic() {
    let fresh = Registry::standard();
    let keys: Vec<_> = fresh.iter().map(|sig| sig.key).collect();
    let shared: Vec<_> = registry().iter().map(|sig| sig.key).collect();
    assert_eq!(keys, shared);
}

#[test]
fn test_variadic_only_last() {
    for sig in registry().iter() {
        let count = sig.args.iter().filter(|arg| arg.tag.variadic).count();
        assert!(count <= 1, "{} has {count} variadic arguments", sig.key);
        if count == 1 {
            assert!(sig.is_variadic(), "{} has a variadic argument before the end", sig.key);
        }
    }
}

#[test]
fn test_defaults_fit_their_arguments() {
    for sig in registry().iter() {
        for arg in &sig.args {
            if let Some(default) = &arg.default {
                assert!(
                    arg.tag.admits(default).is_ok(),
                    "default of {}::{} does not fit {}",
                    sig.key,
                    arg.name,
                    arg.tag
                );
            }
        }
    }
}

#[test]
fn test_top_level_elements() {
    for sig in registry().iter_returning(Category::Builtin) {
        assert!(sig.args.is_empty(), "{} takes arguments", sig.key);
        let node = registry().instantiate(sig.key).unwrap();
        assert_eq!(serialize(&node).unwrap(), format!("&{}", sig.key));
    }
    assert!(registry().iter_returning(Category::Wrapper).count() >= 7);
}

#[test]
fn test_layers_are_transparent_colors() {
    for sig in registry().iter_returning(Category::Color) {
        if sig.key.ends_with('L') {
            assert!(sig.returns.transparent, "{} should be a layer", sig.key);
        }
    }
}

#[test]
fn test_catalog() {
    let catalog = registry().catalog();
    assert_eq!(catalog.len(), registry().len());
    let normal = catalog
        .iter()
        .find(|info| info.key == "StyleNormalPtr")
        .unwrap();
    assert_eq!(normal.returns, Category::Wrapper);
    assert_eq!(normal.args.len(), 6);
    assert_eq!(normal.args[4].default.as_deref(), Some("White"));
    assert_eq!(normal.args[2].type_name, "Raw Int");

    let json = serde_json::to_string(&catalog).unwrap();
    assert!(json.contains("\"key\":\"SmoothStep\""));
}
