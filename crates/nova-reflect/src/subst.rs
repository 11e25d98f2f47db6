//! Replacing type variables with bound values.
//!
//! Substitution never mutates its input; it rebuilds the parts of the type expression that can
//! contain variables and shares everything else. Only variables whose id matches a binding are
//! replaced, and a match yields the binding's value as-is, so every step consumes one level of the
//! expression and the recursion ends at the leaves.

use crate::{GenericArrayNode, ParameterizedNode, TypeNode, TypeVariableNode, WildcardNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// A raw class with declared variables becomes parameterized over their substituted values.
    Full,
    /// Raw classes are leaves.
    Scoped,
}

/// Replace every variable in `node` whose id matches a bound entry of `bindings`.
///
/// A class with declared type variables is treated as parameterized over those variables: if any
/// of them picks up a value the result is a [`ParameterizedNode`], otherwise the class itself.
pub fn substitute(node: &TypeNode, bindings: &[TypeVariableNode]) -> TypeNode {
    apply(node, bindings, Mode::Full)
}

/// Resolve a member's declared type against the variables in scope at the member, i.e. the
/// declaring type's variables (unless the member is static) followed by the member's own.
///
/// Unlike [`substitute`], a raw class reference stays raw: a field declared as `Box` inside
/// `Box<T>` keeps type `Box` when seen through `Box<String>`.
pub fn resolve_in_scope(node: &TypeNode, scope: &[TypeVariableNode]) -> TypeNode {
    apply(node, scope, Mode::Scoped)
}

fn apply(node: &TypeNode, bindings: &[TypeVariableNode], mode: Mode) -> TypeNode {
    match node {
        TypeNode::TypeVariable(var) => {
            let bound = bindings
                .iter()
                .find(|binding| binding.id() == var.id())
                .and_then(TypeVariableNode::value);
            if let Some(value) = bound {
                return value.clone();
            }
            match var.value() {
                Some(value) => apply(value, bindings, mode),
                None => node.clone(),
            }
        }
        TypeNode::GenericArray(array) => TypeNode::GenericArray(GenericArrayNode::new(
            apply(array.element_type(), bindings, mode),
            array.object().clone(),
        )),
        TypeNode::Wildcard(wildcard) => TypeNode::Wildcard(WildcardNode::new(
            apply_all(wildcard.extends_bounds(), bindings, mode),
            apply_all(wildcard.super_bounds(), bindings, mode),
            wildcard.object().clone(),
        )),
        TypeNode::Parameterized(param) => {
            let rebound = rebind(param.bindings(), bindings, mode);
            TypeNode::Parameterized(ParameterizedNode::new(param.class().clone(), rebound))
        }
        TypeNode::Class(class) => {
            let vars = class.declared_type_variables();
            if mode == Mode::Scoped || vars.is_empty() {
                return node.clone();
            }
            let rebound = rebind(vars, bindings, mode);
            if rebound.iter().any(TypeVariableNode::is_bound) {
                TypeNode::Parameterized(ParameterizedNode::new(class.clone(), rebound))
            } else {
                node.clone()
            }
        }
    }
}

fn apply_all(nodes: &[TypeNode], bindings: &[TypeVariableNode], mode: Mode) -> Vec<TypeNode> {
    nodes
        .iter()
        .map(|node| apply(node, bindings, mode))
        .collect()
}

/// Substitute the value of each variable (or the variable itself when unbound) and bind the
/// result back to the same variable.
fn rebind(
    vars: &[TypeVariableNode],
    bindings: &[TypeVariableNode],
    mode: Mode,
) -> Vec<TypeVariableNode> {
    vars.iter()
        .map(|var| {
            let resolved = match var.value() {
                Some(value) => apply(value, bindings, mode),
                None => apply(&var.to_node(), bindings, mode),
            };
            var.with_value(resolved)
        })
        .collect()
}
