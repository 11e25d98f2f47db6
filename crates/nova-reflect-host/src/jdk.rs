//! A deliberately small slice of the JDK, enough for `Object`'s members, boxed numerics and the
//! common generic collection interfaces.

use crate::raw::{ClassKind, Nesting, RawClassId, RawType};
use crate::{ClassUniverse, Modifiers};

const PUBLIC: Modifiers = Modifiers::PUBLIC;
const PUBLIC_ABSTRACT: Modifiers = Modifiers::PUBLIC.union(Modifiers::ABSTRACT);
const PUBLIC_FINAL: Modifiers = Modifiers::PUBLIC.union(Modifiers::FINAL);
const PUBLIC_STATIC: Modifiers = Modifiers::PUBLIC.union(Modifiers::STATIC);
const PUBLIC_STATIC_FINAL: Modifiers = PUBLIC_STATIC.union(Modifiers::FINAL);

struct Jdk {
    object: RawClassId,
    string: RawClassId,
    class: RawClassId,
    int: RawType,
    long: RawType,
    boolean: RawType,
    double: RawType,
    short: RawType,
}

impl Jdk {
    fn object(&self) -> RawType {
        RawType::Class(self.object)
    }

    fn string(&self) -> RawType {
        RawType::Class(self.string)
    }
}

fn primitive(universe: &ClassUniverse, keyword: &str) -> RawType {
    universe
        .primitive(keyword)
        .map(RawType::Class)
        .unwrap_or_else(|| RawType::Other(keyword.to_string()))
}

pub(crate) fn populate(universe: &mut ClassUniverse) {
    // Declare everything first so definitions can refer to each other freely.
    let object = universe.object();
    let string = universe.declare("java.lang.String");
    let class = universe.declare("java.lang.Class");
    let comparable = universe.declare("java.lang.Comparable");
    let cloneable = universe.declare("java.lang.Cloneable");
    let serializable = universe.declare("java.io.Serializable");
    let number = universe.declare("java.lang.Number");
    let throwable = universe.declare("java.lang.Throwable");
    let exception = universe.declare("java.lang.Exception");
    let interrupted = universe.declare("java.lang.InterruptedException");
    let clone_not_supported = universe.declare("java.lang.CloneNotSupportedException");
    let enum_class = universe.declare("java.lang.Enum");
    let iterable = universe.declare("java.lang.Iterable");
    let iterator = universe.declare("java.util.Iterator");
    let collection = universe.declare("java.util.Collection");
    let list = universe.declare("java.util.List");
    let set = universe.declare("java.util.Set");
    let map = universe.declare("java.util.Map");
    let map_entry = universe.declare("java.util.Map$Entry");

    let jdk = Jdk {
        object,
        string,
        class,
        int: primitive(universe, "int"),
        long: primitive(universe, "long"),
        boolean: primitive(universe, "boolean"),
        double: primitive(universe, "double"),
        short: primitive(universe, "short"),
    };

    define_object(universe, &jdk, interrupted, clone_not_supported, throwable);

    for iface in [cloneable, serializable] {
        universe.define(iface, |c| {
            c.kind(ClassKind::Interface);
        });
    }

    universe.define(comparable, |c| {
        c.kind(ClassKind::Interface);
        let t = c.type_param("T");
        c.method("compareTo", PUBLIC_ABSTRACT, |m| {
            m.returns(jdk.int.clone()).param("arg0", t);
        });
    });

    universe.define(string, |c| {
        c.modifiers(PUBLIC_FINAL)
            .implements(RawType::Class(serializable))
            .implements(RawType::parameterized(comparable, vec![jdk.string()]));
        c.constructor(PUBLIC, |_| {});
        c.constructor(PUBLIC, |k| {
            k.param("arg0", jdk.string());
        });
        c.method("length", PUBLIC, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("isEmpty", PUBLIC, |m| {
            m.returns(jdk.boolean.clone());
        });
        c.method("compareTo", PUBLIC, |m| {
            m.returns(jdk.int.clone()).param("arg0", jdk.string());
        });
        c.method("equals", PUBLIC, |m| {
            m.returns(jdk.boolean.clone()).param("arg0", jdk.object());
        });
        c.method("hashCode", PUBLIC, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("toString", PUBLIC, |m| {
            m.returns(jdk.string());
        });
        c.method("valueOf", PUBLIC_STATIC, |m| {
            m.returns(jdk.string()).param("arg0", jdk.object());
        });
    });

    universe.define(class, |c| {
        c.modifiers(PUBLIC_FINAL);
        c.type_param("T");
        c.method("getName", PUBLIC, |m| {
            m.returns(jdk.string());
        });
        c.method("getSimpleName", PUBLIC, |m| {
            m.returns(jdk.string());
        });
    });

    universe.define(number, |c| {
        c.modifiers(PUBLIC_ABSTRACT)
            .implements(RawType::Class(serializable));
        c.constructor(PUBLIC, |_| {});
        c.method("intValue", PUBLIC_ABSTRACT, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("longValue", PUBLIC_ABSTRACT, |m| {
            m.returns(jdk.long.clone());
        });
        c.method("doubleValue", PUBLIC_ABSTRACT, |m| {
            m.returns(jdk.double.clone());
        });
    });

    for (name, primitive) in [
        ("java.lang.Integer", jdk.int.clone()),
        ("java.lang.Long", jdk.long.clone()),
        ("java.lang.Short", jdk.short.clone()),
        ("java.lang.Double", jdk.double.clone()),
    ] {
        define_boxed_number(universe, &jdk, name, primitive, number, comparable);
    }

    universe.define_class("java.lang.Boolean", |c| {
        let this = c.this_type();
        c.modifiers(PUBLIC_FINAL)
            .implements(RawType::Class(serializable))
            .implements(RawType::parameterized(comparable, vec![this.clone()]));
        c.field("TRUE", PUBLIC_STATIC_FINAL, this.clone());
        c.field("FALSE", PUBLIC_STATIC_FINAL, this);
        c.method("booleanValue", PUBLIC, |m| {
            m.returns(jdk.boolean.clone());
        });
    });

    universe.define(throwable, |c| {
        c.implements(RawType::Class(serializable));
        c.constructor(PUBLIC, |_| {});
        c.constructor(PUBLIC, |k| {
            k.param("arg0", jdk.string());
        });
        c.method("getMessage", PUBLIC, |m| {
            m.returns(jdk.string());
        });
    });
    for (id, parent) in [
        (exception, throwable),
        (interrupted, exception),
        (clone_not_supported, exception),
    ] {
        universe.define(id, |c| {
            c.extends(RawType::Class(parent));
            c.constructor(PUBLIC, |_| {});
            c.constructor(PUBLIC, |k| {
                k.param("arg0", jdk.string());
            });
        });
    }

    universe.define(enum_class, |c| {
        c.modifiers(PUBLIC_ABSTRACT);
        let e = c.type_param_with("E", |e| {
            vec![RawType::parameterized(enum_class, vec![e.clone()])]
        });
        c.implements(RawType::parameterized(comparable, vec![e.clone()]))
            .implements(RawType::Class(serializable));
        c.constructor(Modifiers::PROTECTED, |k| {
            k.param("arg0", jdk.string()).param("arg1", jdk.int.clone());
        });
        c.method("name", PUBLIC_FINAL, |m| {
            m.returns(jdk.string());
        });
        c.method("ordinal", PUBLIC_FINAL, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("compareTo", PUBLIC_FINAL, |m| {
            m.returns(jdk.int.clone()).param("arg0", e);
        });
    });

    universe.define(iterator, |c| {
        c.kind(ClassKind::Interface);
        let e = c.type_param("E");
        c.method("hasNext", PUBLIC_ABSTRACT, |m| {
            m.returns(jdk.boolean.clone());
        });
        c.method("next", PUBLIC_ABSTRACT, |m| {
            m.returns(e);
        });
    });

    universe.define(iterable, |c| {
        c.kind(ClassKind::Interface);
        let t = c.type_param("T");
        c.method("iterator", PUBLIC_ABSTRACT, |m| {
            m.returns(RawType::parameterized(iterator, vec![t]));
        });
    });

    universe.define(collection, |c| {
        c.kind(ClassKind::Interface);
        let e = c.type_param("E");
        c.implements(RawType::parameterized(iterable, vec![e.clone()]));
        define_collection_methods(c, &jdk, iterator, &e);
    });

    universe.define(list, |c| {
        c.kind(ClassKind::Interface);
        let e = c.type_param("E");
        c.implements(RawType::parameterized(collection, vec![e.clone()]));
        define_collection_methods(c, &jdk, iterator, &e);
        c.method("get", PUBLIC_ABSTRACT, |m| {
            m.returns(e.clone()).param("arg0", jdk.int.clone());
        });
        c.method("set", PUBLIC_ABSTRACT, |m| {
            m.returns(e.clone())
                .param("arg0", jdk.int.clone())
                .param("arg1", e.clone());
        });
    });

    universe.define(set, |c| {
        c.kind(ClassKind::Interface);
        let e = c.type_param("E");
        c.implements(RawType::parameterized(collection, vec![e.clone()]));
        define_collection_methods(c, &jdk, iterator, &e);
    });

    universe.define(map_entry, |c| {
        c.kind(ClassKind::Interface)
            .nesting(Nesting::Member { enclosing: map })
            .modifiers(PUBLIC_STATIC);
        let k = c.type_param("K");
        let v = c.type_param("V");
        c.method("getKey", PUBLIC_ABSTRACT, |m| {
            m.returns(k);
        });
        c.method("getValue", PUBLIC_ABSTRACT, |m| {
            m.returns(v.clone());
        });
        c.method("setValue", PUBLIC_ABSTRACT, |m| {
            m.returns(v.clone()).param("arg0", v.clone());
        });
    });

    universe.define(map, |c| {
        c.kind(ClassKind::Interface);
        let k = c.type_param("K");
        let v = c.type_param("V");
        c.method("size", PUBLIC_ABSTRACT, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("get", PUBLIC_ABSTRACT, |m| {
            m.returns(v.clone()).param("arg0", jdk.object());
        });
        c.method("put", PUBLIC_ABSTRACT, |m| {
            m.returns(v.clone())
                .param("arg0", k.clone())
                .param("arg1", v.clone());
        });
        c.method("keySet", PUBLIC_ABSTRACT, |m| {
            m.returns(RawType::parameterized(set, vec![k.clone()]));
        });
        c.method("entrySet", PUBLIC_ABSTRACT, |m| {
            m.returns(RawType::parameterized(
                set,
                vec![RawType::parameterized(map_entry, vec![k.clone(), v.clone()])],
            ));
        });
    });
}

fn define_object(
    universe: &mut ClassUniverse,
    jdk: &Jdk,
    interrupted: RawClassId,
    clone_not_supported: RawClassId,
    throwable: RawClassId,
) {
    let public_final_native = PUBLIC_FINAL | Modifiers::NATIVE;
    let interrupted = RawType::Class(interrupted);

    universe.define(jdk.object, |c| {
        c.constructor(PUBLIC, |_| {});
        c.method("equals", PUBLIC, |m| {
            m.returns(jdk.boolean.clone()).param("arg0", jdk.object());
        });
        c.method("getClass", public_final_native, |m| {
            m.returns(RawType::parameterized(jdk.class, vec![RawType::wildcard()]));
        });
        c.method("hashCode", PUBLIC | Modifiers::NATIVE, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("notify", public_final_native, |_| {});
        c.method("notifyAll", public_final_native, |_| {});
        c.method("toString", PUBLIC, |m| {
            m.returns(jdk.string());
        });
        c.method("wait", PUBLIC_FINAL, |m| {
            m.throws(interrupted.clone());
        });
        c.method("wait", public_final_native, |m| {
            m.param("arg0", jdk.long.clone())
                .throws(interrupted.clone());
        });
        c.method("wait", PUBLIC_FINAL, |m| {
            m.param("arg0", jdk.long.clone())
                .param("arg1", jdk.int.clone())
                .throws(interrupted.clone());
        });
        c.method("clone", Modifiers::PROTECTED | Modifiers::NATIVE, |m| {
            m.returns(jdk.object())
                .throws(RawType::Class(clone_not_supported));
        });
        c.method("finalize", Modifiers::PROTECTED, |m| {
            m.throws(RawType::Class(throwable));
        });
    });
}

fn define_boxed_number(
    universe: &mut ClassUniverse,
    jdk: &Jdk,
    name: &str,
    primitive: RawType,
    number: RawClassId,
    comparable: RawClassId,
) {
    universe.define_class(name, |c| {
        let this = c.this_type();
        c.modifiers(PUBLIC_FINAL)
            .extends(RawType::Class(number))
            .implements(RawType::parameterized(comparable, vec![this.clone()]));
        c.field("MAX_VALUE", PUBLIC_STATIC_FINAL, primitive.clone());
        c.field("MIN_VALUE", PUBLIC_STATIC_FINAL, primitive.clone());
        c.constructor(PUBLIC, |k| {
            k.param("arg0", primitive.clone());
        });
        c.method("compareTo", PUBLIC, |m| {
            m.returns(jdk.int.clone()).param("arg0", this.clone());
        });
        c.method("valueOf", PUBLIC_STATIC, |m| {
            m.returns(this.clone()).param("arg0", primitive.clone());
        });
        c.method("intValue", PUBLIC, |m| {
            m.returns(jdk.int.clone());
        });
        c.method("longValue", PUBLIC, |m| {
            m.returns(jdk.long.clone());
        });
        c.method("doubleValue", PUBLIC, |m| {
            m.returns(jdk.double.clone());
        });
        c.method("toString", PUBLIC, |m| {
            m.returns(jdk.string());
        });
    });
}

fn define_collection_methods(
    c: &mut crate::ClassBuilder<'_>,
    jdk: &Jdk,
    iterator: RawClassId,
    e: &RawType,
) {
    c.method("size", PUBLIC_ABSTRACT, |m| {
        m.returns(jdk.int.clone());
    });
    c.method("isEmpty", PUBLIC_ABSTRACT, |m| {
        m.returns(jdk.boolean.clone());
    });
    c.method("contains", PUBLIC_ABSTRACT, |m| {
        m.returns(jdk.boolean.clone()).param("arg0", jdk.object());
    });
    c.method("add", PUBLIC_ABSTRACT, |m| {
        m.returns(jdk.boolean.clone()).param("arg0", e.clone());
    });
    c.method("iterator", PUBLIC_ABSTRACT, |m| {
        m.returns(RawType::parameterized(iterator, vec![e.clone()]));
    });
}
