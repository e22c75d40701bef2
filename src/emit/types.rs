//! Class and interface declarations.
//!
//! Classes become `@interface Name : Super { ivars }`; interfaces become `@protocol Name` conforming to
//! the root protocols. The declarations after `@end` give the type its static storage, accessors and
//! optional aliases.

use headergen_ast::{MethodDeclaration, TypeBinding, TypeDeclaration};
use headergen_core::lang::{primitives, runtime};

use super::constants::write_constant_defines;
use super::members::{check_fields, write_deprecated_line, write_doc, write_instance_variables, write_methods};
use super::statics::{has_initialize_method, write_field_setters, write_static_fields, write_static_init};
use super::{EmitContext, EmitError};

/// Write a class or interface declaration and everything that follows its `@end`.
pub fn write_type_declaration(ctx: &mut EmitContext<'_>, decl: &TypeDeclaration) -> Result<(), EmitError> {
    let binding = &decl.binding;
    let type_name = ctx.naming.full_name(binding);
    let is_interface = decl.is_interface();
    check_fields(ctx, binding, &decl.fields)?;

    write_constant_defines(ctx, binding, &decl.fields)?;
    write_doc(ctx, decl.doc.as_deref());
    write_deprecated_line(ctx, decl.is_deprecated());

    if is_interface {
        ctx.out.write(&format!("@protocol {}", type_name));
    } else {
        let super_name = match &decl.superclass {
            Some(superclass) => ctx.naming.full_name(superclass),
            None => runtime::ROOT_OBJECT.to_string(),
        };
        ctx.out.write(&format!("@interface {} : {}", type_name, super_name));
    }

    if !decl.superinterfaces.is_empty() {
        let names: Vec<String> = decl
            .superinterfaces
            .iter()
            .map(|i| ctx.naming.full_name(i))
            .collect();
        ctx.out.write(&format!(" < {}", names.join(", ")));
        if is_interface {
            ctx.out.write(&format!(
                ", {}, {} >",
                runtime::ROOT_PROTOCOL,
                runtime::JAVA_OBJECT_PROTOCOL
            ));
        } else {
            ctx.out.write(" >");
        }
    } else if is_interface {
        ctx.out.writeln(&format!(
            " < {}, {} >",
            runtime::ROOT_PROTOCOL,
            runtime::JAVA_OBJECT_PROTOCOL
        ));
    }

    if !is_interface {
        ctx.out.writeln(" {");
        write_instance_variables(ctx, binding, &decl.fields)?;
        ctx.out.writeln("}");
    }
    write_methods(ctx, binding, &decl.methods);
    ctx.out.writeln("\n@end");

    if is_interface {
        write_static_interface(ctx, decl);
    } else {
        write_static_init(ctx, binding, &decl.methods);
        write_field_setters(ctx, binding, &decl.fields);
        write_static_fields(ctx, binding, &decl.fields);
    }

    write_inc_and_dec_helpers(ctx, binding);
    write_prefixed_alias(ctx, binding, decl.top_level);
    write_native_methods_category(ctx, decl);
    Ok(())
}

/// Interfaces cannot hold class methods, so an initializer gets an empty companion class to live on.
fn write_static_interface(ctx: &mut EmitContext<'_>, decl: &TypeDeclaration) {
    if has_initialize_method(&decl.methods) {
        let type_name = ctx.naming.full_name(&decl.binding);
        ctx.out.writeln(&format!("\n@interface {} : {}", type_name, runtime::ROOT_OBJECT));
        ctx.out.writeln("\n@end");
    }
    write_static_init(ctx, &decl.binding, &decl.methods);
    write_static_fields(ctx, &decl.binding, &decl.fields);
}

/// Write `BOXED_INC_AND_DEC` when the type is the boxed wrapper of a numeric primitive.
pub fn write_inc_and_dec_helpers(ctx: &mut EmitContext<'_>, binding: &TypeBinding) {
    let Some(kind) = primitives::unboxed(&binding.qualified_name()) else {
        return;
    };
    let info = primitives::info_for(kind);
    if !info.has_inc_and_dec {
        return;
    }
    let type_name = ctx.naming.full_name(binding);
    ctx.out.newline();
    ctx.out.writeln(&format!(
        "{}({}, {}, {})",
        runtime::BOXED_INC_AND_DEC,
        primitives::capitalized(kind),
        info.value_accessor,
        type_name
    ));
}

/// Write the unprefixed alias of a top-level type in a prefixed package. Protocols cannot be
/// `typedef`ed, so they get a `#define`.
pub fn write_prefixed_alias(ctx: &mut EmitContext<'_>, binding: &TypeBinding, top_level: bool) {
    if !top_level || !ctx.naming.has_prefix(&binding.package) {
        return;
    }
    let type_name = ctx.naming.full_name(binding);
    let unprefixed = ctx.naming.unprefixed_name(binding);
    if binding.is_interface() {
        ctx.out.writeln(&format!("\n#define {} {}", unprefixed, type_name));
    } else {
        ctx.out.writeln(&format!("\ntypedef {} {};", type_name, unprefixed));
    }
}

/// Native methods whose body is supplied outside the generated unit, in declaration order.
pub fn external_native_methods(decl: &TypeDeclaration) -> Vec<&MethodDeclaration> {
    decl.methods.iter().filter(|m| m.is_external_native()).collect()
}

fn write_native_methods_category(ctx: &mut EmitContext<'_>, decl: &TypeDeclaration) {
    let external = external_native_methods(decl);
    if external.is_empty() {
        return;
    }
    let type_name = ctx.naming.full_name(&decl.binding);
    ctx.out.writeln(&format!("\n@interface {} ({})", type_name, runtime::NATIVE_METHODS_CATEGORY));
    for method in external {
        let signature = ctx.naming.method_declaration(&decl.binding, &method.binding);
        ctx.out.writeln(&format!("{};", signature));
    }
    ctx.out.writeln("@end");
}
