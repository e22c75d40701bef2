//! Enum declarations.
//!
//! An enum becomes a C `typedef enum` of ordinals plus a `JavaLangEnum` subclass whose instances live
//! in `<Name>_values`. Per-constant macros index that array with the C enumerator rather than the
//! ordinal literal, so a reordered constant set fails to compile instead of silently shifting.

use headergen_ast::EnumDeclaration;
use headergen_core::lang::runtime;

use super::constants::write_constant_defines;
use super::members::{check_fields, write_deprecated_line, write_doc, write_instance_variables, write_methods};
use super::statics::{write_field_setters, write_static_fields, write_static_init};
use super::types::write_prefixed_alias;
use super::{EmitContext, EmitError};

/// Write an enum declaration and its static sections.
pub fn write_enum_declaration(ctx: &mut EmitContext<'_>, decl: &EnumDeclaration) -> Result<(), EmitError> {
    let binding = &decl.binding;
    check_fields(ctx, binding, &decl.fields)?;
    write_constant_defines(ctx, binding, &decl.fields)?;

    let type_name = ctx.naming.full_name(binding);
    let bare_name = type_name
        .strip_suffix(runtime::ENUM_SUFFIX)
        .unwrap_or(&type_name)
        .to_string();

    // C has no empty enums.
    if !decl.constants.is_empty() {
        ctx.out.writeln("typedef enum {");
        ctx.out.indent();
        for (ordinal, constant) in decl.constants.iter().enumerate() {
            ctx.out.writeln(&format!("{}_{} = {},", bare_name, constant.name, ordinal));
        }
        ctx.out.dedent();
        ctx.out.writeln(&format!("}} {};", bare_name));
        ctx.out.newline();
    }

    write_doc(ctx, decl.doc.as_deref());
    write_deprecated_line(ctx, decl.is_deprecated());

    // Cloneable is covered by NSCopying.
    let interfaces: String = decl
        .interfaces
        .iter()
        .filter(|i| i.simple_name() != runtime::CLONE_MARKER)
        .map(|i| format!(", {}", ctx.naming.full_name(i)))
        .collect();
    ctx.out.writeln(&format!(
        "@interface {} : {} < {}{} > {{",
        type_name,
        runtime::ENUM_BASE,
        runtime::COPYING_PROTOCOL,
        interfaces
    ));
    write_instance_variables(ctx, binding, &decl.fields)?;
    ctx.out.writeln("}");
    ctx.out.writeln(runtime::ENUM_VALUES_DECLARATION);
    ctx.out.writeln(&runtime::enum_value_of_declaration(&type_name));
    ctx.out.writeln(runtime::ENUM_COPY_DECLARATION);
    write_methods(ctx, binding, &decl.methods);
    ctx.out.writeln("@end");

    write_static_init(ctx, binding, &decl.methods);
    let size = match decl.constants.len() {
        0 => String::new(),
        n => n.to_string(),
    };
    ctx.out.writeln(&format!(
        "\n{} {} *{}_values[{}];",
        runtime::FOUNDATION_EXPORT,
        type_name,
        type_name,
        size
    ));
    for constant in &decl.constants {
        let var_name = ctx.naming.static_var_name(&constant.binding);
        ctx.out.writeln(&format!(
            "\n#define {}_{} {}_values[{}_{}]",
            type_name, var_name, type_name, bare_name, constant.name
        ));
        ctx.out.writeln(&format!(
            "{}({}, {}, {} *)",
            runtime::STATIC_FIELD_GETTER,
            type_name,
            var_name,
            type_name
        ));
    }

    write_static_fields(ctx, binding, &decl.fields);
    write_field_setters(ctx, binding, &decl.fields);
    write_prefixed_alias(ctx, binding, decl.top_level);
    Ok(())
}
