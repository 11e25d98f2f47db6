use std::sync::{Arc, Barrier};

use nova_reflect::{ReflectError, TypeKind};
use nova_reflect_host::RawType;
use pretty_assertions::assert_eq;

use super::fixtures::{self, node};

#[test]
fn classes_are_interned_once_per_reflector() {
    let reflector = fixtures::reflector();
    assert!(reflector.is_empty());

    let first = node(&reflector, "SimpleClass");
    let interned = reflector.len();
    let second = node(&reflector, "SimpleClass");

    assert_eq!(first, second);
    assert_eq!(reflector.len(), interned);
    assert_eq!(first.id(), "Class:com.example.types.SimpleClass");

    // A second reflector over the same classes keeps its own registry.
    let other = fixtures::reflector();
    assert!(other.is_empty());
    assert_eq!(node(&other, "SimpleClass"), first);
}

#[test]
fn concurrent_lookups_share_one_interned_class() {
    let reflector = fixtures::reflector();
    let threads = 16;
    let barrier = Arc::new(Barrier::new(threads));

    let mut handles = Vec::with_capacity(threads);
    for _ in 0..threads {
        let reflector = reflector.clone();
        let barrier = barrier.clone();
        handles.push(std::thread::spawn(move || {
            barrier.wait();
            let circle = node(&reflector, "Circle");
            let methods = circle.public_methods().unwrap().len();
            (circle, methods)
        }));
    }
    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    let interned = reflector.len();
    let circle = node(&reflector, "Circle");
    assert_eq!(reflector.len(), interned);
    for (node, methods) in &results {
        assert_eq!(node.id(), "Class:com.example.types.Circle");
        assert!(node.as_class().unwrap().ptr_eq(circle.as_class().unwrap()));
        assert_eq!(*methods, 11);
    }
}

#[test]
fn unknown_names_are_not_found() {
    let reflector = fixtures::reflector();
    let err = reflector
        .resolve_name("com.example.types.Missing")
        .unwrap_err();
    assert_eq!(
        err,
        ReflectError::NotFound {
            name: "com.example.types.Missing".to_string()
        }
    );
    assert_eq!(err.to_string(), "`com.example.types.Missing` is not found");
}

#[test]
fn raw_shapes_map_to_node_kinds() {
    let reflector = fixtures::reflector();
    let object = RawType::Class(reflector.host().object_class());

    let cases = [
        (object.clone(), TypeKind::Class, "Class:java.lang.Object"),
        (
            RawType::wildcard(),
            TypeKind::Wildcard,
            "WildcardType:?",
        ),
        (
            RawType::generic_array(object.clone()),
            TypeKind::GenericArray,
            "Class:java.lang.Object[]",
        ),
    ];
    for (raw, kind, id) in cases {
        let resolved = reflector.resolve(&raw).unwrap();
        assert_eq!(resolved.kind(), kind, "{raw:?}");
        assert_eq!(resolved.id(), id, "{raw:?}");
    }
}

#[test]
fn unsupported_shapes_fail_every_time() {
    let reflector = fixtures::reflector();
    let err = reflector
        .resolve(&RawType::Other("AnnotatedType".to_string()))
        .unwrap_err();
    assert_eq!(
        err,
        ReflectError::UnsupportedKind {
            shape: "AnnotatedType".to_string()
        }
    );

    // A failed member listing is not cached; unrelated queries still work.
    let broken = node(&reflector, "Broken");
    for _ in 0..2 {
        let err = broken.declared_fields().unwrap_err();
        assert_eq!(
            err,
            ReflectError::UnsupportedKind {
                shape: "IntersectionType".to_string()
            }
        );
    }
    assert!(broken
        .declared_methods()
        .unwrap()
        .iter()
        .any(|method| method.name() == "ok"));
}

#[test]
fn erasure_follows_bounds() {
    let reflector = fixtures::reflector();
    let bounded = node(&reflector, "GenericInterfaceWithBounds");
    let t = bounded.declared_type_variables()[0].to_node();
    assert_eq!(
        t.erasure().unwrap().map(|class| class.binary_name().to_string()),
        Some("com.example.types.SimpleClass".to_string())
    );

    let generic = node(&reflector, "GenericClass");
    let free = generic.declared_type_variables()[0].to_node();
    assert_eq!(free.erasure().unwrap(), Some(reflector.object_class()));

    let method = generic
        .declared_methods()
        .unwrap()
        .iter()
        .find(|method| method.name() == "testOverloading" && method.is_static())
        .cloned()
        .unwrap();
    let array = method.parameters()[0].ty();
    assert_eq!(array.kind(), TypeKind::GenericArray);
    assert_eq!(array.erasure().unwrap(), None);

    let list = node(&reflector, "java.util.List");
    let parameterized = list.substitute(&[list.declared_type_variables()[0]
        .with_value(node(&reflector, "java.lang.String"))]);
    assert_eq!(parameterized.kind(), TypeKind::Parameterized);
    assert_eq!(
        parameterized.erasure().unwrap().map(|class| class.id().to_string()),
        Some("Class:java.util.List".to_string())
    );
}
