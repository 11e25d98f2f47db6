//! Rendering type nodes as Java source-like strings.
//!
//! A render pass threads one [`RenderContext`] through the whole type expression. The context
//! decides which names are imported and remembers which type variables have already been printed
//! with their bounds, so `C extends Container<C>` prints its bound clause exactly once.

use std::collections::{HashMap, HashSet};

use crate::{ClassNode, Result, TypeNode, TypeVariableNode};

pub trait RenderContext {
    /// Whether `canonical_name` (`java.util.Map`, `java.util.Map.Entry`) is imported.
    fn is_imported(&self, canonical_name: &str) -> bool;

    fn is_type_variable_defined(&self, id: &str) -> bool;

    fn define_type_variable(&mut self, id: &str);

    /// Replacement text for a free type variable, printed instead of its name.
    fn type_variable_alias(&self, _id: &str) -> Option<&str> {
        None
    }
}

/// Nothing imported; every class name is printed fully qualified.
#[derive(Debug, Clone, Default)]
pub struct DefaultContext {
    defined: HashSet<String>,
}

impl DefaultContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// A context in which the given type variable ids are already defined.
    pub fn primed<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            defined: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Ids of the type variables printed so far, sorted.
    pub fn defined(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.defined.iter().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl RenderContext for DefaultContext {
    fn is_imported(&self, _canonical_name: &str) -> bool {
        false
    }

    fn is_type_variable_defined(&self, id: &str) -> bool {
        self.defined.contains(id)
    }

    fn define_type_variable(&mut self, id: &str) {
        self.defined.insert(id.to_string());
    }
}

/// Prints imported classes by their shortest unambiguous suffix.
///
/// Imports are canonical class names (`java.util.Map`) or whole packages (`java.util.*`).
#[derive(Debug, Clone, Default)]
pub struct ImportContext {
    classes: HashSet<String>,
    packages: HashSet<String>,
    defined: HashSet<String>,
}

impl ImportContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(&mut self, name: &str) -> &mut Self {
        match name.strip_suffix(".*") {
            Some(package) => self.packages.insert(package.to_string()),
            None => self.classes.insert(name.to_string()),
        };
        self
    }

    pub fn with_import(mut self, name: &str) -> Self {
        self.import(name);
        self
    }
}

impl RenderContext for ImportContext {
    fn is_imported(&self, canonical_name: &str) -> bool {
        if self.classes.contains(canonical_name) {
            return true;
        }
        canonical_name
            .rsplit_once('.')
            .is_some_and(|(package, _)| self.packages.contains(package))
    }

    fn is_type_variable_defined(&self, id: &str) -> bool {
        self.defined.contains(id)
    }

    fn define_type_variable(&mut self, id: &str) {
        self.defined.insert(id.to_string());
    }
}

/// Treats every type variable as already defined, so bounds are never printed, and prints the
/// aliased variables by position. Used for override keys, which must not depend on render order
/// or on the names an override picks for its own type parameters.
#[derive(Debug, Clone, Default)]
pub(crate) struct KeyContext {
    positions: HashMap<String, String>,
}

impl KeyContext {
    /// Prints each of `vars` as `#{index}`.
    pub(crate) fn positional(vars: &[TypeVariableNode]) -> Self {
        Self {
            positions: vars
                .iter()
                .enumerate()
                .map(|(idx, var)| (var.id().to_string(), format!("#{idx}")))
                .collect(),
        }
    }
}

impl RenderContext for KeyContext {
    fn is_imported(&self, _canonical_name: &str) -> bool {
        false
    }

    fn is_type_variable_defined(&self, _id: &str) -> bool {
        true
    }

    fn define_type_variable(&mut self, _id: &str) {}

    fn type_variable_alias(&self, id: &str) -> Option<&str> {
        self.positions.get(id).map(String::as_str)
    }
}

pub fn render(
    node: &TypeNode,
    ctx: &mut dyn RenderContext,
    include_type_variables: bool,
) -> Result<String> {
    let mut out = String::new();
    write_node(&mut out, node, ctx, include_type_variables)?;
    Ok(out)
}

pub(crate) fn write_node(
    out: &mut String,
    node: &TypeNode,
    ctx: &mut dyn RenderContext,
    include: bool,
) -> Result<()> {
    match node {
        TypeNode::Class(class) => write_class(out, class, ctx, include),
        TypeNode::Parameterized(param) => {
            write_class_name(out, param.class(), ctx);
            if include && !param.bindings().is_empty() {
                write_type_variable_list(out, "<", param.bindings(), ">", ctx, include)?;
            }
            Ok(())
        }
        TypeNode::TypeVariable(var) => write_type_variable(out, var, ctx, include),
        TypeNode::Wildcard(wildcard) => {
            out.push('?');
            write_bounds(
                out,
                wildcard.super_bounds(),
                wildcard.extends_bounds(),
                ctx,
                include,
            )
        }
        TypeNode::GenericArray(array) => {
            write_node(out, array.element_type(), ctx, include)?;
            out.push_str("[]");
            Ok(())
        }
    }
}

fn write_class(
    out: &mut String,
    class: &ClassNode,
    ctx: &mut dyn RenderContext,
    include: bool,
) -> Result<()> {
    if let Some(element) = class.element_type() {
        write_node(out, element, ctx, include)?;
        out.push_str("[]");
        return Ok(());
    }

    write_class_name(out, class, ctx);
    let vars = class.declared_type_variables();
    if include && !vars.is_empty() {
        write_type_variable_list(out, "<", vars, ">", ctx, include)?;
    }
    Ok(())
}

/// Tries `pkg.A.B.C`, then `pkg.A.B`, then `pkg.A`; the first imported prefix lets the name be
/// printed from its last segment onwards.
fn write_class_name(out: &mut String, class: &ClassNode, ctx: &dyn RenderContext) {
    let Some(canonical) = class.canonical_name() else {
        out.push_str(class.binary_name());
        return;
    };

    let package = class.package_name();
    let local = if package.is_empty() {
        Some(canonical)
    } else {
        canonical
            .strip_prefix(package)
            .and_then(|rest| rest.strip_prefix('.'))
    };

    if let Some(local) = local {
        let parts: Vec<&str> = local.split('.').collect();
        for len in (1..=parts.len()).rev() {
            let joined = parts[..len].join(".");
            let candidate = if package.is_empty() {
                joined
            } else {
                format!("{package}.{joined}")
            };
            if ctx.is_imported(&candidate) {
                out.push_str(&parts[len - 1..].join("."));
                return;
            }
        }
    }

    out.push_str(canonical);
}

fn write_type_variable(
    out: &mut String,
    var: &TypeVariableNode,
    ctx: &mut dyn RenderContext,
    include: bool,
) -> Result<()> {
    if let Some(value) = var.value() {
        return write_node(out, value, ctx, include);
    }

    out.push_str(ctx.type_variable_alias(var.id()).unwrap_or(var.name()));
    if !ctx.is_type_variable_defined(var.id()) {
        ctx.define_type_variable(var.id());
        write_bounds(out, &[], var.extends_bounds()?, ctx, include)?;
    }
    Ok(())
}

fn write_bounds(
    out: &mut String,
    super_bounds: &[TypeNode],
    extends_bounds: &[TypeNode],
    ctx: &mut dyn RenderContext,
    include: bool,
) -> Result<()> {
    for (keyword, bounds) in [(" super ", super_bounds), (" extends ", extends_bounds)] {
        if bounds.is_empty() {
            continue;
        }
        out.push_str(keyword);
        for (idx, bound) in bounds.iter().enumerate() {
            if idx != 0 {
                out.push_str(" & ");
            }
            write_node(out, bound, ctx, include)?;
        }
    }
    Ok(())
}

/// `{open}A, B extends C{close}`.
pub(crate) fn write_type_variable_list(
    out: &mut String,
    open: &str,
    vars: &[TypeVariableNode],
    close: &str,
    ctx: &mut dyn RenderContext,
    include: bool,
) -> Result<()> {
    out.push_str(open);
    for (idx, var) in vars.iter().enumerate() {
        if idx != 0 {
            out.push_str(", ");
        }
        write_type_variable(out, var, ctx, include)?;
    }
    out.push_str(close);
    Ok(())
}
