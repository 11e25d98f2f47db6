//! Test classes shared by the suite, declared on top of the minimal JDK.

use std::sync::Arc;

use nova_reflect::{ReflectConfig, Reflector, TypeNode};
use nova_reflect_host::{
    Annotation, ClassBuilder, ClassKind, ClassUniverse, ConstValue, ElementValue, Modifiers,
    Nesting, RawClassId, RawType,
};

pub const PKG: &str = "com.example.types";

const PUBLIC: Modifiers = Modifiers::PUBLIC;
const PUBLIC_STATIC: Modifiers = Modifiers::PUBLIC.union(Modifiers::STATIC);
const PUBLIC_ABSTRACT: Modifiers = Modifiers::PUBLIC.union(Modifiers::ABSTRACT);

pub fn reflector() -> Reflector {
    Reflector::new(Arc::new(universe()))
}

pub fn reflector_with(config: ReflectConfig) -> Reflector {
    Reflector::with_config(Arc::new(universe()), config)
}

/// Look up a fixture or JDK class; bare names are taken from the fixture package.
pub fn node(reflector: &Reflector, name: &str) -> TypeNode {
    let binary = if name.contains('.') {
        name.to_string()
    } else {
        format!("{PKG}.{name}")
    };
    reflector
        .resolve_name(&binary)
        .unwrap_or_else(|err| panic!("{binary}: {err}"))
}

struct Std {
    object: RawType,
    string: RawType,
    int: RawType,
    double: RawType,
    short: RawType,
    string_id: RawClassId,
    int_id: RawClassId,
    list: RawClassId,
    set: RawClassId,
    map: RawClassId,
    comparable: RawClassId,
}

impl Std {
    fn new(universe: &ClassUniverse) -> Self {
        let id = |name: &str| universe.class_id(name).unwrap();
        Self {
            object: RawType::Class(universe.object()),
            string: RawType::Class(id("java.lang.String")),
            int: RawType::Class(id("int")),
            double: RawType::Class(id("double")),
            short: RawType::Class(id("java.lang.Short")),
            string_id: id("java.lang.String"),
            int_id: id("int"),
            list: id("java.util.List"),
            set: id("java.util.Set"),
            map: id("java.util.Map"),
            comparable: id("java.lang.Comparable"),
        }
    }

    fn list(&self, arg: RawType) -> RawType {
        RawType::parameterized(self.list, vec![arg])
    }

    fn set(&self, arg: RawType) -> RawType {
        RawType::parameterized(self.set, vec![arg])
    }

    fn map(&self, key: RawType, value: RawType) -> RawType {
        RawType::parameterized(self.map, vec![key, value])
    }
}

fn array(element: RawType) -> RawType {
    RawType::generic_array(element)
}

/// The five getters shared by `GenericClass`, `GenericInterface` and friends, over `t`.
fn define_getters(c: &mut ClassBuilder<'_>, std: &Std, t: &RawType, modifiers: Modifiers) {
    c.method("getT", modifiers, |m| {
        m.returns(t.clone());
    });
    c.method("getListOfT", modifiers, |m| {
        m.returns(std.list(t.clone()));
    });
    c.method("getListOfListOfT", modifiers, |m| {
        m.returns(std.list(std.list(t.clone())));
    });
    c.method("getListOfSetOfWildcardSuperT", modifiers, |m| {
        m.returns(std.list(std.set(RawType::wildcard_super(t.clone()))));
    });
    c.method("getListOfSetOfWildcardExtendsT", modifiers, |m| {
        m.returns(std.list(std.set(RawType::wildcard_extends(t.clone()))));
    });
}

pub fn universe() -> ClassUniverse {
    let mut u = ClassUniverse::with_minimal_jdk();
    let std = Std::new(&u);

    let simple = u.declare(&format!("{PKG}.SimpleClass"));
    let sub_class = u.declare(&format!("{PKG}.SubClass"));
    let generic_class = u.declare(&format!("{PKG}.GenericClass"));
    let generic_interface = u.declare(&format!("{PKG}.GenericInterface"));
    let bounded_interface = u.declare(&format!("{PKG}.GenericInterfaceWithBounds"));
    let complex_class = u.declare(&format!("{PKG}.ComplexGenericClass"));
    let complex_interface = u.declare(&format!("{PKG}.ComplexGenericInterface"));
    let wildcard_sub = u.declare(&format!("{PKG}.GenericSubClassWithWildcardTypeParameter"));
    let outer = u.declare(&format!("{PKG}.Outer"));

    u.define(simple, |c| {
        let int_array = c.array_of(std.int_id);
        let string_array = c.array_of(std.string_id);
        c.constructor(PUBLIC, |_| {});
        c.field("simpleClassPublicPrimitiveIntField", PUBLIC, std.int.clone());
        c.field("simpleClassPublicPrimitiveIntArrayField", PUBLIC, int_array);
        c.field("simpleClassPublicStringField", PUBLIC, std.string.clone());
        c.field("simpleClassPublicStringArrayField", PUBLIC, string_array);
        c.field("simpleClassPrivatePrimitiveIntField", Modifiers::PRIVATE, std.int.clone());
        c.field("simpleClassPrivateStringField", Modifiers::PRIVATE, std.string.clone());
        c.method("getSimpleClassPrivatePrimitiveIntField", PUBLIC, |m| {
            m.returns(std.int.clone());
        });
        c.method("getSimpleClassPrivateStringField", PUBLIC, |m| {
            m.returns(std.string.clone());
        });
        c.method("setSimpleClassPrivatePrimitiveIntField", PUBLIC, |m| {
            m.param("arg0", std.int.clone());
        });
        c.method("setSimpleClassPrivateStringField", PUBLIC, |m| {
            m.param("arg0", std.string.clone());
        });
    });

    u.define(sub_class, |c| {
        c.extends(RawType::Class(simple));
        c.constructor(PUBLIC, |_| {});
    });

    u.define(generic_class, |c| {
        let t = c.type_param("T");
        let t_array = array(t.clone());
        c.constructor(PUBLIC, |_| {});
        c.field("publicGenericField", PUBLIC, t.clone());
        c.field("protectedGenericField", Modifiers::PROTECTED, t.clone());
        c.field("privateGenericField", Modifiers::PRIVATE, t.clone());
        c.method("testOverloading", PUBLIC_STATIC, |m| {
            let own = m.type_param("T");
            m.param("arg0", array(array(own)));
        });
        define_getters(c, &std, &t, PUBLIC);
        c.method("doSomethingWithT", PUBLIC, |m| {
            let t1 = array(t.clone());
            let t2 = array(t1.clone());
            m.param("arg0", t.clone())
                .param("arg1", t1.clone())
                .param("arg2", t2.clone())
                .param("arg3", array(t2))
                .param("arg4", std.list(t.clone()))
                .param("arg5", std.list(t1.clone()))
                .param("arg6", std.list(std.list(t.clone())))
                .param("arg7", std.list(array(std.list(t.clone()))))
                .param("arg8", std.list(std.list(t1.clone())))
                .param("arg9", std.list(array(std.list(t1.clone()))))
                .param(
                    "arg10",
                    std.list(std.list(RawType::wildcard_extends(t.clone()))),
                )
                .param(
                    "arg11",
                    std.list(std.list(RawType::wildcard_extends(t1.clone()))),
                )
                .param(
                    "arg12",
                    array(std.list(std.list(RawType::wildcard_extends(t.clone())))),
                )
                .param(
                    "arg13",
                    std.list(std.list(RawType::wildcard_super(t.clone()))),
                );
        });
        c.method("testTypeVariableHiding", PUBLIC, |m| {
            let own = m.type_param("T");
            m.returns(own.clone()).param("arg0", std.list(own));
        });
        c.method("testOverloading", PUBLIC, |m| {
            m.returns(t_array.clone());
        });
        c.method("testOverloading", PUBLIC, |m| {
            m.returns(std.list(t.clone())).param("arg0", t.clone());
        });
        c.method("testOverloading", PUBLIC, |m| {
            m.returns(t.clone()).param("arg0", t_array.clone());
        });
        c.method("testOverloading", PUBLIC, |m| {
            m.returns(t.clone()).param("arg0", std.list(t.clone()));
        });
    });

    u.define(generic_interface, |c| {
        c.kind(ClassKind::Interface);
        let t = c.type_param("T");
        define_getters(c, &std, &t, PUBLIC_ABSTRACT);
    });

    u.define(bounded_interface, |c| {
        c.kind(ClassKind::Interface);
        let t = c.type_param_with("T", |_| vec![RawType::Class(simple)]);
        define_getters(c, &std, &t, PUBLIC_ABSTRACT);
    });

    u.define(complex_interface, |c| {
        c.kind(ClassKind::Interface);
        let a = c.type_param("A");
        let b = c.type_param("B");
        let z = c.type_param_with("C", |z| {
            vec![RawType::parameterized(
                complex_class,
                vec![b.clone(), a.clone(), z.clone()],
            )]
        });
        define_complex_methods(c, &std, &a, &b, &z, PUBLIC_ABSTRACT);
    });

    u.define(complex_class, |c| {
        let a = c.type_param("A");
        let b = c.type_param("B");
        let z = c.type_param_with("C", |z| {
            vec![RawType::parameterized(
                complex_class,
                vec![b.clone(), a.clone(), z.clone()],
            )]
        });
        c.implements(RawType::parameterized(
            complex_interface,
            vec![a.clone(), b.clone(), z.clone()],
        ));
        c.constructor(PUBLIC, |_| {});
        define_complex_methods(c, &std, &a, &b, &z, PUBLIC);
    });

    u.define(wildcard_sub, |c| {
        let t = c.type_param("T");
        c.extends(RawType::parameterized(
            generic_class,
            vec![std.set(RawType::wildcard_extends(t))],
        ));
        c.constructor(PUBLIC, |_| {});
    });

    u.define(outer, |c| {
        c.constructor(PUBLIC, |_| {});
    });

    u.define_class(&format!("{PKG}.Outer$MemberClass"), |c| {
        c.nesting(Nesting::Member { enclosing: outer })
            .extends(RawType::Class(simple));
        c.constructor(PUBLIC, |k| {
            k.param("arg0", RawType::Class(outer))
                .param("arg1", std.int.clone());
        });
    });

    u.define_class(&format!("{PKG}.Outer$1"), |c| {
        c.nesting(Nesting::Anonymous { enclosing: outer })
            .modifiers(Modifiers::NONE)
            .implements(RawType::parameterized(
                generic_interface,
                vec![std.short.clone()],
            ));
        c.constructor(Modifiers::NONE, |k| {
            k.param("arg0", RawType::Class(outer));
        });
        define_getters(c, &std, &std.short, PUBLIC);
    });

    u.define_class(&format!("{PKG}.Outer$1Local"), |c| {
        c.nesting(Nesting::Local { enclosing: outer })
            .modifiers(Modifiers::NONE);
    });

    define_small_fixtures(&mut u, &std);
    u
}

fn define_complex_methods(
    c: &mut ClassBuilder<'_>,
    std: &Std,
    a: &RawType,
    b: &RawType,
    z: &RawType,
    modifiers: Modifiers,
) {
    c.method("getMapOfXY", modifiers, |m| {
        m.returns(std.map(a.clone(), b.clone()));
    });
    c.method("getMapOfYX", modifiers, |m| {
        m.returns(std.map(b.clone(), a.clone()));
    });
    c.method("getZ", modifiers, |m| {
        m.returns(z.clone());
    });
    c.method("getListOfZ", modifiers, |m| {
        m.returns(std.list(z.clone()));
    });
    c.method("getListOfListOfZ", modifiers, |m| {
        m.returns(std.list(std.list(z.clone())));
    });
    c.method("getListOfSetOfWildcardSuperZ", modifiers, |m| {
        m.returns(std.list(std.set(RawType::wildcard_super(z.clone()))));
    });
    c.method("getListOfSetOfWildcardExtendsZ", modifiers, |m| {
        m.returns(std.list(std.set(RawType::wildcard_extends(z.clone()))));
    });
}

/// One-purpose classes for member resolution, ordering and error handling.
fn define_small_fixtures(u: &mut ClassUniverse, std: &Std) {
    let boxed = u.declare(&format!("{PKG}.Box"));
    u.define(boxed, |c| {
        let t = c.type_param("T");
        c.constructor(PUBLIC, |k| {
            k.param("value", t.clone());
        });
        c.field("value", PUBLIC, t.clone());
        c.field("rawSelf", PUBLIC, RawType::Class(boxed));
        c.field("INSTANCES", PUBLIC_STATIC, std.int.clone());
        c.method("get", PUBLIC, |m| {
            m.returns(t.clone());
        });
        c.method("wrap", PUBLIC, |m| {
            m.returns(RawType::parameterized(boxed, vec![std.list(t.clone())]));
        });
        c.method("of", PUBLIC_STATIC, |m| {
            let u = m.type_param("U");
            m.returns(RawType::parameterized(boxed, vec![u.clone()]))
                .param("value", u);
        });
    });

    u.define_class(&format!("{PKG}.Pair"), |c| {
        let a = c.type_param("A");
        let b = c.type_param("B");
        c.field("first", PUBLIC, a.clone());
        c.field("second", PUBLIC, b.clone());
        c.method("swap", PUBLIC, |m| {
            m.returns(b.clone()).param("a", a.clone());
        });
    });

    let shape = u.define_class(&format!("{PKG}.Shape"), |c| {
        c.kind(ClassKind::Interface);
        c.method("area", PUBLIC_ABSTRACT, |m| {
            m.returns(std.double.clone());
        });
        c.method("name", PUBLIC_ABSTRACT, |m| {
            m.returns(std.string.clone());
        });
        c.method("unit", PUBLIC_STATIC, |m| {
            m.returns(std.double.clone());
        });
    });

    u.define_class(&format!("{PKG}.Circle"), |c| {
        c.implements(RawType::Class(shape));
        c.constructor(PUBLIC, |k| {
            k.param("radius", std.double.clone());
        });
        c.constructor(Modifiers::PRIVATE, |_| {});
        c.field("radius", PUBLIC, std.double.clone());
        c.method("area", PUBLIC, |m| {
            m.returns(std.double.clone());
        });
        c.method("toString", PUBLIC, |m| {
            m.returns(std.string.clone());
        });
        c.method("scale", Modifiers::PROTECTED, |m| {
            m.param("factor", std.double.clone());
        });
    });

    u.define_class(&format!("{PKG}.Constants"), |c| {
        c.field("zeta", PUBLIC, std.int.clone());
        c.field("BETA", PUBLIC_STATIC, std.int.clone());
        c.field("alpha", PUBLIC, std.int.clone());
        c.field(
            "ALPHA",
            PUBLIC_STATIC.union(Modifiers::FINAL),
            std.string.clone(),
        );
        c.field("hidden", Modifiers::PRIVATE, std.int.clone());
    });

    u.define_class(&format!("{PKG}.Name"), |c| {
        let this = c.this_type();
        c.implements(RawType::parameterized(std.comparable, vec![this.clone()]));
        c.method("compareTo", PUBLIC, |m| {
            m.returns(std.int.clone()).param("arg0", this.clone());
        });
        c.method("compareTo", PUBLIC | Modifiers::VOLATILE, |m| {
            m.returns(std.int.clone())
                .param("arg0", std.object.clone())
                .bridge();
        });
    });

    u.define_class(&format!("{PKG}.Factory"), |c| {
        c.constructor(PUBLIC, |k| {
            let t = k.type_param_with("T", |t| {
                vec![RawType::parameterized(std.comparable, vec![t.clone()])]
            });
            k.param("seed", t);
        });
    });

    let failure = u.declare(&format!("{PKG}.Failure"));
    u.define(failure, |c| {
        let x = c.type_param_with("X", |_| vec![RawType::Class(failure)]);
        c.method("rethrow", PUBLIC, |m| {
            m.throws(x.clone());
        });
        c.method("fail", PUBLIC, |m| {
            m.param("message", std.string.clone())
                .throws(RawType::Class(failure));
        });
    });

    u.define_class(&format!("{PKG}.Service"), |c| {
        c.annotate(Annotation::new("java.lang.Deprecated"));
        c.method("handle", PUBLIC, |m| {
            m.annotate(
                Annotation::new("com.example.Audit").with_element(
                    "level",
                    ElementValue::Const(ConstValue::String("high".to_string())),
                ),
            )
            .annotated_param(
                "request",
                std.string.clone(),
                Annotation::new("javax.annotation.Nonnull"),
            );
        });
    });

    u.define_class(&format!("{PKG}.Color"), |c| {
        c.kind(ClassKind::Enum)
            .modifiers(Modifiers::PUBLIC | Modifiers::FINAL)
            .enum_constant("RED")
            .enum_constant("GREEN");
    });

    u.define_class(&format!("{PKG}.Broken"), |c| {
        c.field(
            "intersection",
            PUBLIC,
            RawType::Other("IntersectionType".to_string()),
        );
        c.method("ok", PUBLIC, |m| {
            m.returns(std.string.clone());
        });
    });

    let visitor = u.define_class(&format!("{PKG}.Visitor"), |c| {
        c.kind(ClassKind::Interface);
        c.method("visit", PUBLIC_ABSTRACT, |m| {
            let t = m.type_param("T");
            m.param("items", std.list(t));
        });
    });

    u.define_class(&format!("{PKG}.Walker"), |c| {
        c.implements(RawType::Class(visitor));
        c.method("visit", PUBLIC, |m| {
            let renamed = m.type_param("U");
            m.param("items", std.list(renamed));
        });
    });

    u.define_class(&format!("{PKG}.Converter"), |c| {
        c.method("convert", PUBLIC, |m| {
            let t = m.type_param("T");
            m.returns(t.clone()).param("value", t);
        });
        c.method("convert", PUBLIC, |m| {
            let t = m.type_param("T");
            m.returns(t.clone()).param("values", std.list(t));
        });
    });
}
