use std::sync::Arc;

use nova_reflect_host::{Annotated, Annotation, GenericOwner, Modifiers, RawType, RawTypeVarRef};

use super::MemberScope;
use crate::render::{self, DefaultContext, KeyContext, RenderContext};
use crate::subst::resolve_in_scope;
use crate::{Result, TypeNode, TypeVariableNode};

/// A method or constructor parameter with its resolved type.
#[derive(Debug, Clone)]
pub struct ParameterNode {
    name: String,
    ty: TypeNode,
    annotations: Vec<Annotation>,
}

impl ParameterNode {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeNode {
        &self.ty
    }
}

impl Annotated for ParameterNode {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Clone, Copy)]
pub(crate) enum ExecutableKind {
    Method,
    Constructor,
}

/// The parts methods and constructors have in common.
pub(crate) struct Executable {
    pub(crate) scope: Arc<MemberScope>,
    pub(crate) index: usize,
    pub(crate) modifiers: Modifiers,
    pub(crate) declared_type_variables: Vec<TypeVariableNode>,
    pub(crate) type_variables: Vec<TypeVariableNode>,
    pub(crate) parameters: Vec<ParameterNode>,
    pub(crate) exceptions: Vec<TypeNode>,
}

impl Executable {
    pub(crate) fn new(scope: Arc<MemberScope>, index: usize, kind: ExecutableKind) -> Result<Self> {
        let reflector = scope.reflector();
        let class = scope.raw_class();
        let (owner, modifiers, type_params, params, exceptions) = match kind {
            ExecutableKind::Method => {
                let method = &class.methods[index];
                (
                    GenericOwner::Method {
                        class: scope.raw(),
                        index,
                    },
                    method.modifiers,
                    method.type_params.len(),
                    &method.params,
                    &method.exceptions,
                )
            }
            ExecutableKind::Constructor => {
                let constructor = &class.constructors[index];
                (
                    GenericOwner::Constructor {
                        class: scope.raw(),
                        index,
                    },
                    constructor.modifiers,
                    constructor.type_params.len(),
                    &constructor.params,
                    &constructor.exceptions,
                )
            }
        };

        let declared_type_variables: Vec<TypeVariableNode> = (0..type_params)
            .map(|index| reflector.type_variable(RawTypeVarRef { owner, index }))
            .collect();
        let type_variables = scope.effective(modifiers, &declared_type_variables);
        let parameters = params
            .iter()
            .map(|param| -> Result<ParameterNode> {
                Ok(ParameterNode {
                    name: param.name.clone(),
                    ty: resolve_in_scope(&reflector.resolve(&param.ty)?, &type_variables),
                    annotations: param.annotations.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        // Thrown types are reported as declared.
        let exceptions = reflector.resolve_all(exceptions)?;

        Ok(Self {
            scope,
            index,
            modifiers,
            declared_type_variables,
            type_variables,
            parameters,
            exceptions,
        })
    }

    pub(crate) fn resolve(&self, ty: &RawType) -> Result<TypeNode> {
        let resolved = self.scope.reflector().resolve(ty)?;
        Ok(resolve_in_scope(&resolved, &self.type_variables))
    }

    /// `<T> R name(A, B)`, rendered in one fresh context.
    pub(crate) fn signature(&self, return_type: Option<&TypeNode>, name: &str) -> Result<String> {
        let mut ctx = DefaultContext::new();
        let mut out = String::new();
        write_declared_type_variables(&mut out, &self.declared_type_variables, &mut ctx)?;
        if let Some(return_type) = return_type {
            render::write_node(&mut out, return_type, &mut ctx, true)?;
            out.push(' ');
        }
        out.push_str(name);
        write_parameter_types(&mut out, &self.parameters, &mut ctx)?;
        Ok(out)
    }

    /// `name(A, B)` with variables printed bare and the executable's own variables printed by
    /// position; equal for a method and its overrides.
    pub(crate) fn override_key(&self, name: &str) -> Result<String> {
        let mut out = String::from(name);
        let mut ctx = KeyContext::positional(&self.declared_type_variables);
        write_parameter_types(&mut out, &self.parameters, &mut ctx)?;
        Ok(out)
    }

    /// `public <T> R name(A a, B b) throws E`.
    pub(crate) fn default_string(
        &self,
        return_type: Option<&TypeNode>,
        name: &str,
    ) -> Result<String> {
        let mut ctx = self.scope.context();
        let mut out = String::new();
        write_modifiers(&mut out, self.modifiers);
        write_declared_type_variables(&mut out, &self.declared_type_variables, &mut ctx)?;
        if let Some(return_type) = return_type {
            render::write_node(&mut out, return_type, &mut ctx, true)?;
            out.push(' ');
        }
        out.push_str(name);

        out.push('(');
        for (idx, param) in self.parameters.iter().enumerate() {
            if idx != 0 {
                out.push_str(", ");
            }
            render::write_node(&mut out, &param.ty, &mut ctx, true)?;
            out.push(' ');
            out.push_str(&param.name);
        }
        out.push(')');

        if !self.exceptions.is_empty() {
            out.push_str(" throws ");
            for (idx, exception) in self.exceptions.iter().enumerate() {
                if idx != 0 {
                    out.push_str(", ");
                }
                render::write_node(&mut out, exception, &mut ctx, true)?;
            }
        }
        Ok(out)
    }
}

pub(crate) fn write_modifiers(out: &mut String, modifiers: Modifiers) {
    let keywords = modifiers.keywords();
    if !keywords.is_empty() {
        out.push_str(&keywords);
        out.push(' ');
    }
}

fn write_declared_type_variables(
    out: &mut String,
    vars: &[TypeVariableNode],
    ctx: &mut dyn RenderContext,
) -> Result<()> {
    if vars.is_empty() {
        return Ok(());
    }
    render::write_type_variable_list(out, "<", vars, "> ", ctx, true)
}

fn write_parameter_types(
    out: &mut String,
    params: &[ParameterNode],
    ctx: &mut dyn RenderContext,
) -> Result<()> {
    out.push('(');
    for (idx, param) in params.iter().enumerate() {
        if idx != 0 {
            out.push_str(", ");
        }
        render::write_node(out, &param.ty, ctx, true)?;
    }
    out.push(')');
    Ok(())
}
