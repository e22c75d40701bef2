//! Member-level emission: method declarations, instance-variable blocks, doc comments and attributes.

use headergen_ast::{FieldDeclaration, MethodDeclaration, MethodKind, TypeBinding};
use headergen_core::lang::{method_family, runtime};

use super::{EmitContext, EmitError};

/// Write a pre-rendered doc comment, if present.
pub fn write_doc(ctx: &mut EmitContext<'_>, doc: Option<&str>) {
    if let Some(doc) = doc {
        ctx.out.writeln(doc.trim_end_matches('\n'));
    }
}

/// Write the deprecation attribute on its own line when the declaration is deprecated and attributes are on.
pub fn write_deprecated_line(ctx: &mut EmitContext<'_>, deprecated: bool) {
    if ctx.needs_deprecated_attribute(deprecated) {
        ctx.out.writeln(runtime::DEPRECATED_ATTRIBUTE);
    }
}

/// Fail on field declarations without fragments before anything of the declaration is written.
pub fn check_fields(
    ctx: &EmitContext<'_>,
    declaring: &TypeBinding,
    fields: &[FieldDeclaration],
) -> Result<(), EmitError> {
    if fields.iter().any(|f| f.fragments.is_empty()) {
        return Err(EmitError::EmptyFieldDeclaration {
            declaration: ctx.naming.full_name(declaring),
        });
    }
    Ok(())
}

/// Write every method of a declaration, in order.
pub fn write_methods(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, methods: &[MethodDeclaration]) {
    for method in methods {
        write_method(ctx, declaring, method);
    }
}

/// Write one method declaration. Each written declaration is preceded by a blank line.
pub fn write_method(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, method: &MethodDeclaration) {
    let binding = &method.binding;
    if binding.function {
        return;
    }

    if let Some(selector) = &binding.mapped_selector {
        ctx.out.newline();
        write_doc(ctx, method.doc.as_deref());
        let decl = ctx.naming.mapped_method_declaration(declaring, binding, selector);
        ctx.out.writeln(&format!("{};", decl));
        return;
    }

    match binding.kind {
        MethodKind::Constructor => {
            ctx.out.newline();
            write_doc(ctx, method.doc.as_deref());
            let decl = ctx.naming.constructor_declaration(declaring, binding);
            ctx.out.writeln(&format!("{};", decl));
        }
        MethodKind::StaticInitializer => {}
        MethodKind::Method => write_normal_method(ctx, declaring, method),
    }
}

fn write_normal_method(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, method: &MethodDeclaration) {
    let binding = &method.binding;
    if binding.synthetic || method.is_external_native() {
        return;
    }
    ctx.out.newline();
    write_doc(ctx, method.doc.as_deref());
    ctx.out.write(&ctx.naming.method_declaration(declaring, binding));
    if method_family::needs_family_override(&ctx.naming.method_name(binding)) {
        ctx.out.write(" ");
        ctx.out.write(runtime::METHOD_FAMILY_NONE);
    }
    if ctx.needs_deprecated_attribute(method.is_deprecated()) {
        ctx.out.write(" ");
        ctx.out.write(runtime::DEPRECATED_ATTRIBUTE);
    }
    ctx.out.writeln(";");
}

/// Object types that are already pointers or pointer-free: `id`, `id<...>`, `Class`.
fn is_id_like(objc_type: &str) -> bool {
    objc_type == "id" || objc_type == "Class" || (objc_type.starts_with("id<") && objc_type.ends_with('>'))
}

/// Write the instance variables of every non-static field, each fragment of a declaration sharing one line.
///
/// Variables are public: hoisted nested types still access their outer type's fields directly.
pub fn write_instance_variables(
    ctx: &mut EmitContext<'_>,
    declaring: &TypeBinding,
    fields: &[FieldDeclaration],
) -> Result<(), EmitError> {
    let mut first = true;
    for field in fields.iter().filter(|f| !f.is_static()) {
        let Some(lead) = field.fragments.first() else {
            return Err(EmitError::EmptyFieldDeclaration {
                declaration: ctx.naming.full_name(declaring),
            });
        };
        if first {
            ctx.out.writeln(runtime::PUBLIC_IVARS);
            first = false;
        }

        ctx.out.indent();
        write_doc(ctx, field.doc.as_deref());
        if lead.binding.is_weak() {
            // Needed even without ARC: the header may be imported by a unit compiled with it.
            ctx.out.write(runtime::WEAK_QUALIFIER);
            ctx.out.write(" ");
        }

        let ty = &lead.binding.ty;
        let mut objc_type = ctx.naming.specific_objc_type(ty);
        let needs_asterisk = !ty.is_primitive() && !is_id_like(&objc_type);
        if needs_asterisk && objc_type.ends_with(" *") {
            objc_type.truncate(objc_type.len() - 2);
        }
        ctx.out.write(&objc_type);
        ctx.out.write(" ");

        let marker = if needs_asterisk { "*" } else { "" };
        let names: Vec<String> = field
            .fragments
            .iter()
            .map(|f| format!("{}{}", marker, ctx.naming.field_name(&f.binding)))
            .collect();
        ctx.out.writeln(&format!("{};", names.join(", ")));
        ctx.out.dedent();
    }
    Ok(())
}
