use nova_reflect::{
    ConstructorNode, Element, FieldNode, HasTypeVariables, MethodNode, ReflectConfig, Reflector,
    TypeKind, TypeNode,
};
use nova_reflect_host::{Annotated, ConstValue, ElementValue};
use pretty_assertions::assert_eq;

use super::fixtures::{self, node};

fn method(ty: &TypeNode, name: &str) -> MethodNode {
    ty.public_methods()
        .unwrap()
        .iter()
        .find(|method| method.name() == name)
        .cloned()
        .unwrap_or_else(|| panic!("no public method {name} on {}", ty.id()))
}

fn parameterize(reflector: &Reflector, name: &str, args: &[&str]) -> TypeNode {
    let raw = node(reflector, name);
    let bindings: Vec<_> = raw
        .declared_type_variables()
        .iter()
        .zip(args)
        .map(|(var, arg)| var.with_value(node(reflector, arg)))
        .collect();
    raw.substitute(&bindings)
}

#[test]
fn fields_resolve_through_the_declaring_type() {
    let reflector = fixtures::reflector();
    let boxed = parameterize(&reflector, "Box", &["java.lang.String"]);

    let value = boxed.public_field("value").unwrap().unwrap();
    assert_eq!(value.ty().id(), "Class:java.lang.String");
    assert_eq!(value.display_string().unwrap(), "public java.lang.String value");
    assert_eq!(
        value.id(),
        "ParameterizedType:com.example.types.Box<Class:java.lang.String>|Field:value"
    );

    // Static members do not see the declaring type's variables.
    let instances = boxed.public_field("INSTANCES").unwrap().unwrap();
    assert!(instances.is_static());
    assert!(instances.type_variables().is_empty());
    assert_eq!(value.type_variables().len(), 1);

    let get = method(&boxed, "get");
    assert_eq!(get.display_string().unwrap(), "public java.lang.String get()");
    let of = method(&boxed, "of");
    assert_eq!(
        of.display_string().unwrap(),
        "public static <U> com.example.types.Box<U> of(U value)"
    );

    let constructors = boxed.public_constructors().unwrap();
    assert_eq!(constructors.len(), 1);
    assert_eq!(
        constructors[0].display_string().unwrap(),
        "public Box(java.lang.String value)"
    );
}

#[test]
fn methods_resolve_every_parameter() {
    let reflector = fixtures::reflector();
    let pair = parameterize(
        &reflector,
        "Pair",
        &["java.lang.Integer", "java.lang.String"],
    );

    let swap = method(&pair, "swap");
    assert_eq!(
        swap.display_string().unwrap(),
        "public java.lang.String swap(java.lang.Integer a)"
    );
    assert_eq!(swap.signature(), "java.lang.String swap(java.lang.Integer)");
    assert_eq!(swap.override_key(), "swap(java.lang.Integer)");
    assert_eq!(swap.to_string(), "public java.lang.String swap(java.lang.Integer a)");

    // On the raw class the variables print by name; the class already defined them.
    let raw = node(&reflector, "Pair");
    assert_eq!(
        method(&raw, "swap").display_string().unwrap(),
        "public B swap(A a)"
    );
}

#[test]
fn overriding_methods_replace_inherited_ones() {
    let reflector = fixtures::reflector();
    let circle = node(&reflector, "Circle");
    let methods = circle.public_methods().unwrap();

    let names: Vec<&str> = methods.iter().map(MethodNode::name).collect();
    assert_eq!(names.iter().filter(|name| **name == "area").count(), 1);
    assert_eq!(names.iter().filter(|name| **name == "toString").count(), 1);
    // Static interface methods and protected methods are not public members.
    assert!(!names.contains(&"unit"));
    assert!(!names.contains(&"scale"));
    assert_eq!(methods.len(), 11);

    let declaring = |name: &str| {
        method(&circle, name)
            .declaring()
            .map(|ty| ty.id().to_string())
    };
    assert_eq!(declaring("area").as_deref(), Some("Class:com.example.types.Circle"));
    assert_eq!(declaring("toString").as_deref(), Some("Class:com.example.types.Circle"));
    assert_eq!(declaring("name").as_deref(), Some("Class:com.example.types.Shape"));
    assert_eq!(declaring("hashCode").as_deref(), Some("Class:java.lang.Object"));
    assert_eq!(
        method(&circle, "name").display_string().unwrap(),
        "public abstract java.lang.String name()"
    );

    let mut signatures: Vec<&str> = methods.iter().map(MethodNode::signature).collect();
    let listed = signatures.clone();
    signatures.sort();
    assert_eq!(listed, signatures);
}

#[test]
fn overrides_may_rename_their_type_parameters() {
    let reflector = fixtures::reflector();
    let walker = node(&reflector, "Walker");
    let visits: Vec<&MethodNode> = walker
        .public_methods()
        .unwrap()
        .iter()
        .filter(|method| method.name() == "visit")
        .collect();

    assert_eq!(visits.len(), 1);
    assert_eq!(
        visits[0].declaring().map(|ty| ty.id().to_string()).as_deref(),
        Some("Class:com.example.types.Walker")
    );
    assert_eq!(visits[0].signature(), "<U> void visit(java.util.List<U>)");
    assert_eq!(visits[0].override_key(), "visit(java.util.List<#0>)");

    let visitor = node(&reflector, "Visitor");
    assert_eq!(
        method(&visitor, "visit").override_key(),
        visits[0].override_key()
    );
}

#[test]
fn overloads_own_distinct_type_variables() {
    let reflector = fixtures::reflector();
    let converter = node(&reflector, "Converter");
    let declared = converter.declared_methods().unwrap();

    let ids: Vec<&str> = declared
        .iter()
        .map(|method| method.declared_type_variables()[0].id())
        .collect();
    assert_eq!(
        ids,
        [
            "Class:com.example.types.Converter|Method:convert#0|TypeVariable:T",
            "Class:com.example.types.Converter|Method:convert#1|TypeVariable:T",
        ]
    );

    // Binding the first overload's `T` leaves the second one free.
    let string = node(&reflector, "java.lang.String");
    let first = declared[0].declared_type_variables()[0].with_value(string.clone());
    assert_eq!(declared[0].return_type().substitute(&[first.clone()]), string);
    let second = declared[1].return_type();
    assert_eq!(second.substitute(&[first]).id(), second.id());
    let overloads = converter
        .public_methods()
        .unwrap()
        .iter()
        .filter(|method| method.name() == "convert")
        .count();
    assert_eq!(overloads, 2);
}

#[test]
fn constructors_are_not_inherited() {
    let reflector = fixtures::reflector();
    let circle = node(&reflector, "Circle");

    let declared = circle.declared_constructors().unwrap();
    assert_eq!(declared.len(), 2);
    let public: Vec<&str> = circle
        .public_constructors()
        .unwrap()
        .iter()
        .map(|constructor| constructor.display_string().unwrap())
        .collect();
    assert_eq!(public, ["public Circle(double radius)"]);
    assert_eq!(declared[0].id(), "Class:com.example.types.Circle|Constructor");
    assert_eq!(declared[0].name(), "Circle");

    let sub_class = node(&reflector, "SubClass");
    assert_eq!(sub_class.public_constructors().unwrap().len(), 1);
    assert!(node(&reflector, "Shape")
        .public_constructors()
        .unwrap()
        .is_empty());
}

#[test]
fn fields_sort_statics_first_then_by_name() {
    let reflector = fixtures::reflector();
    let constants = node(&reflector, "Constants");

    let mut declared = constants.declared_fields().unwrap().to_vec();
    declared.sort_by(FieldNode::display_order);
    let names: Vec<&str> = declared.iter().map(FieldNode::name).collect();
    assert_eq!(names, ["ALPHA", "BETA", "alpha", "hidden", "zeta"]);

    let public: Vec<&str> = constants
        .public_fields()
        .unwrap()
        .iter()
        .map(FieldNode::name)
        .collect();
    assert_eq!(public, ["ALPHA", "BETA", "alpha", "zeta"]);
    assert_eq!(
        constants
            .public_field("ALPHA")
            .unwrap()
            .unwrap()
            .display_string()
            .unwrap(),
        "public static final java.lang.String ALPHA"
    );
    assert_eq!(
        declared[0].id(),
        "Class:com.example.types.Constants|Field:ALPHA"
    );
}

#[test]
fn methods_sort_statics_first_then_by_name() {
    let reflector = fixtures::reflector();
    let boxed = node(&reflector, "Box");

    let mut declared = boxed.declared_methods().unwrap().to_vec();
    declared.sort_by(MethodNode::display_order);
    let names: Vec<&str> = declared.iter().map(MethodNode::name).collect();
    assert_eq!(names, ["of", "get", "wrap"]);
}

#[test]
fn bridge_methods_are_skipped_by_default() {
    let reflector = fixtures::reflector();
    let name = node(&reflector, "Name");
    let declared = name.declared_methods().unwrap();
    assert_eq!(declared.len(), 1);
    assert!(!declared[0].is_bridge());

    let compare_to: Vec<&MethodNode> = name
        .public_methods()
        .unwrap()
        .iter()
        .filter(|method| method.name() == "compareTo")
        .collect();
    assert_eq!(compare_to.len(), 1);
    assert_eq!(
        compare_to[0].override_key(),
        "compareTo(com.example.types.Name)"
    );
    assert_eq!(compare_to[0].declaring(), Some(name.clone()));

    let reflector = fixtures::reflector_with(ReflectConfig {
        skip_bridge_methods: false,
        ..ReflectConfig::default()
    });
    let name = node(&reflector, "Name");
    let declared = name.declared_methods().unwrap();
    assert_eq!(declared.len(), 2);
    assert!(declared.iter().any(MethodNode::is_bridge));
    let overloads = name
        .public_methods()
        .unwrap()
        .iter()
        .filter(|method| method.name() == "compareTo")
        .count();
    assert_eq!(overloads, 2);
}

#[test]
fn annotations_are_read_from_the_raw_elements() {
    let reflector = fixtures::reflector();
    let service = node(&reflector, "Service");
    assert!(service.has_annotation("java.lang.Deprecated"));
    assert!(!service.has_annotation("com.example.Audit"));

    let handle = method(&service, "handle");
    let audit = handle.annotation("com.example.Audit").unwrap();
    assert_eq!(
        audit.element("level"),
        Some(&ElementValue::Const(ConstValue::String("high".to_string())))
    );

    let request = &handle.parameters()[0];
    assert_eq!(request.name(), "request");
    assert!(request.has_annotation("javax.annotation.Nonnull"));
    assert_eq!(request.annotations().len(), 1);
}

#[test]
fn constructors_may_declare_type_variables() {
    let reflector = fixtures::reflector();
    let factory = node(&reflector, "Factory");
    let constructor: &ConstructorNode = &factory.public_constructors().unwrap()[0];

    let vars = constructor.declared_type_variables();
    assert_eq!(vars.len(), 1);
    assert_eq!(
        vars[0].id(),
        "Class:com.example.types.Factory|Constructor|TypeVariable:T"
    );
    assert_eq!(
        constructor.display_string().unwrap(),
        "public <T extends java.lang.Comparable<T>> Factory(T seed)"
    );
    assert_eq!(
        constructor.signature(),
        "<T extends java.lang.Comparable<T>> Factory(T)"
    );
    assert_eq!(constructor.parameters()[0].ty().kind(), TypeKind::TypeVariable);
}

#[test]
fn thrown_types_are_reported_as_declared() {
    let reflector = fixtures::reflector();
    let failure = node(&reflector, "Failure");
    let bound = parameterize(&reflector, "Failure", &["Failure"]);

    let rethrow = method(&bound, "rethrow");
    let thrown = &rethrow.exception_types()[0];
    assert_eq!(thrown.kind(), TypeKind::TypeVariable);
    assert_eq!(thrown.id(), "Class:com.example.types.Failure|TypeVariable:X");
    assert!(thrown.type_variable_value().is_none());

    let fail = method(&failure, "fail");
    assert_eq!(fail.exception_types(), [failure.clone()]);
    // The class rendering defined `X`, so it prints bare here.
    assert_eq!(
        fail.display_string().unwrap(),
        "public void fail(java.lang.String message) throws com.example.types.Failure<X>"
    );
}

#[test]
fn members_hold_their_declaring_type_weakly() {
    let reflector = fixtures::reflector();
    let field = {
        let boxed = parameterize(&reflector, "Box", &["java.lang.String"]);
        let field = boxed.public_field("value").unwrap().unwrap().clone();
        assert_eq!(field.declaring(), Some(boxed.clone()));
        field
    };
    // The parameterized type is gone; the interned class is not.
    assert!(field.declaring().is_none());
    assert_eq!(field.ty().id(), "Class:java.lang.String");
    assert_eq!(
        field.scope().declaring_id(),
        "ParameterizedType:com.example.types.Box<Class:java.lang.String>"
    );

    let circle = node(&reflector, "Circle");
    let radius = circle.public_field("radius").unwrap().unwrap().clone();
    drop(circle);
    assert_eq!(
        radius.declaring().map(|ty| ty.id().to_string()).as_deref(),
        Some("Class:com.example.types.Circle")
    );
}

#[test]
fn type_variables_and_wildcards_expose_object_methods() {
    let reflector = fixtures::reflector();
    let generic = node(&reflector, "GenericClass");
    let t = generic.declared_type_variables()[0].to_node();

    let names: Vec<&str> = t.public_methods().unwrap().iter().map(MethodNode::name).collect();
    assert_eq!(names.len(), 9);
    assert!(names.contains(&"hashCode"));
    assert!(t.public_fields().unwrap().is_empty());
    assert!(t.public_constructors().unwrap().is_empty());
    assert_eq!(t.super_type().unwrap(), None);
}
