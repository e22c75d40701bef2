//! Static member emission: the static-initialization guard, static field accessors and instance
//! field setters.
//!
//! Static storage lives outside the class as `<Type>_<name>` symbols. Callers reach it through the
//! accessor macros, which also trigger the type's initializer first.

use headergen_ast::{FieldDeclaration, MethodDeclaration, TypeBinding, VariableBinding};
use headergen_core::lang::runtime;

use super::EmitContext;

/// Static fields that need named external storage: every static fragment except primitive constants,
/// which are fully substituted by their `#define`.
pub fn static_fields_needing_accessors(fields: &[FieldDeclaration]) -> Vec<&VariableBinding> {
    fields
        .iter()
        .filter(|f| f.is_static())
        .flat_map(|f| &f.fragments)
        .map(|fragment| &fragment.binding)
        .filter(|var| !var.is_primitive_constant())
        .collect()
}

/// Whether any method makes the type need a real initialization guard.
pub fn has_initialize_method(methods: &[MethodDeclaration]) -> bool {
    methods.iter().any(MethodDeclaration::is_initialize_method)
}

/// Write the guard flag and `J2OBJC_STATIC_INIT` when the type has an initializer, or an inlined no-op
/// `<Type>_init()` otherwise so callers never branch on it.
pub fn write_static_init(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, methods: &[MethodDeclaration]) {
    let type_name = ctx.naming.full_name(declaring);
    ctx.out.newline();
    if has_initialize_method(methods) {
        ctx.out.writeln(&format!(
            "{} BOOL {}{};",
            runtime::FOUNDATION_EXPORT,
            type_name,
            runtime::INITIALIZED_SUFFIX
        ));
        ctx.out.writeln(&format!("{}({})", runtime::STATIC_INIT, type_name));
    } else {
        ctx.out.writeln(&format!("{} {}_init() {{}}", runtime::INIT_STUB_PREFIX, type_name));
    }
}

/// Write storage declaration and accessor macros for one static field.
pub fn write_static_field(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, var: &VariableBinding) {
    let objc_type = ctx.naming.objc_type(&var.ty);
    let separator = if objc_type.ends_with('*') { "" } else { " " };
    let name = ctx.naming.static_var_name(var);
    let class_name = ctx.naming.full_name(declaring);

    ctx.out.newline();
    ctx.out.writeln(&format!(
        "{} {}{}{}_{};",
        runtime::FOUNDATION_EXPORT,
        objc_type,
        separator,
        class_name,
        name
    ));
    ctx.out.writeln(&format!(
        "{}({}, {}, {})",
        runtime::STATIC_FIELD_GETTER,
        class_name,
        name,
        objc_type
    ));
    if !var.is_final() {
        let mutator = if var.ty.is_primitive() {
            runtime::STATIC_FIELD_REF_GETTER
        } else {
            runtime::STATIC_FIELD_SETTER
        };
        ctx.out.writeln(&format!("{}({}, {}, {})", mutator, class_name, name, objc_type));
    }
}

/// Write accessors for every static field that needs them.
pub fn write_static_fields(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, fields: &[FieldDeclaration]) {
    for var in static_fields_needing_accessors(fields) {
        write_static_field(ctx, declaring, var);
    }
}

/// Write `J2OBJC_FIELD_SETTER` for every non-static, non-primitive, non-weak fragment, after one blank line.
pub fn write_field_setters(ctx: &mut EmitContext<'_>, declaring: &TypeBinding, fields: &[FieldDeclaration]) {
    let declaring_name = ctx.naming.full_name(declaring);
    let mut newline_written = false;
    for field in fields {
        if field.is_static() || field.ty.is_primitive() {
            continue;
        }
        let type_str = ctx.naming.objc_type(&field.ty);
        for fragment in field.fragments.iter().filter(|f| !f.binding.is_weak()) {
            if !newline_written {
                ctx.out.newline();
                newline_written = true;
            }
            let field_name = ctx.naming.field_name(&fragment.binding);
            ctx.out.writeln(&format!(
                "{}({}, {}, {})",
                runtime::FIELD_SETTER,
                declaring_name,
                field_name,
                type_str
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::tests::{class, constant_field, field, int, interface, string, void, with_context};
    use headergen_ast::{ConstantValue, MethodBinding, MethodKind, Modifiers};

    fn foo() -> TypeBinding {
        class("Foo")
    }

    // ========================================
    // Static init guard
    // ========================================

    #[test]
    fn test_no_initializer_writes_stub() {
        let out = with_context(|ctx| {
            write_static_init(ctx, &foo(), &[]);
            Ok(())
        });
        assert_eq!(out, "\n__attribute__((always_inline)) inline void ComExampleFoo_init() {}\n");
    }

    #[test]
    fn test_initializer_writes_guard() {
        let clinit = MethodDeclaration::new(MethodBinding::new("initialize", void()).with_kind(MethodKind::StaticInitializer));
        let out = with_context(|ctx| {
            write_static_init(ctx, &foo(), &[clinit]);
            Ok(())
        });
        assert_eq!(
            out,
            "\nFOUNDATION_EXPORT BOOL ComExampleFoo_initialized;\nJ2OBJC_STATIC_INIT(ComExampleFoo)\n"
        );
    }

    // ========================================
    // Static fields
    // ========================================

    #[test]
    fn test_final_object_static_has_getter_only() {
        let fields = [field(string(), Modifiers::constant(), &["NAME"])];
        let out = with_context(|ctx| {
            write_static_fields(ctx, &foo(), &fields);
            Ok(())
        });
        assert_eq!(
            out,
            "\nFOUNDATION_EXPORT NSString *ComExampleFoo_NAME_;\nJ2OBJC_STATIC_FIELD_GETTER(ComExampleFoo, NAME_, NSString *)\n"
        );
    }

    #[test]
    fn test_mutable_primitive_static_has_ref_getter() {
        let fields = [field(int(), Modifiers::none().with_static(), &["count"])];
        let out = with_context(|ctx| {
            write_static_fields(ctx, &foo(), &fields);
            Ok(())
        });
        assert_eq!(
            out,
            "\nFOUNDATION_EXPORT int ComExampleFoo_count_;\n\
             J2OBJC_STATIC_FIELD_GETTER(ComExampleFoo, count_, int)\n\
             J2OBJC_STATIC_FIELD_REF_GETTER(ComExampleFoo, count_, int)\n"
        );
    }

    #[test]
    fn test_mutable_object_static_has_setter() {
        let fields = [field(interface("Listener"), Modifiers::none().with_static(), &["listener"])];
        let out = with_context(|ctx| {
            write_static_fields(ctx, &foo(), &fields);
            Ok(())
        });
        assert_eq!(
            out,
            "\nFOUNDATION_EXPORT id<ComExampleListener> ComExampleFoo_listener_;\n\
             J2OBJC_STATIC_FIELD_GETTER(ComExampleFoo, listener_, id<ComExampleListener>)\n\
             J2OBJC_STATIC_FIELD_SETTER(ComExampleFoo, listener_, id<ComExampleListener>)\n"
        );
    }

    #[test]
    fn test_primitive_constants_need_no_accessors() {
        let fields = [
            constant_field("MAX", ConstantValue::Int(3)),
            field(int(), Modifiers::none(), &["instance"]),
        ];
        assert!(static_fields_needing_accessors(&fields).is_empty());
    }

    // ========================================
    // Field setters
    // ========================================

    #[test]
    fn test_field_setters_only_for_owned_object_ivars() {
        let node = class("Node");
        let weak = FieldDeclaration::new(node.clone(), Modifiers::none())
            .with_binding(VariableBinding::new("parent", node.clone(), Modifiers::none()).with_weak());
        let fields = [
            field(int(), Modifiers::none(), &["count"]),
            field(string(), Modifiers::none().with_static(), &["shared"]),
            field(string(), Modifiers::none(), &["first", "last"]),
            weak,
            field(node, Modifiers::none(), &["next"]),
        ];
        let out = with_context(|ctx| {
            write_field_setters(ctx, &foo(), &fields);
            Ok(())
        });
        assert_eq!(
            out,
            "\nJ2OBJC_FIELD_SETTER(ComExampleFoo, first_, NSString *)\n\
             J2OBJC_FIELD_SETTER(ComExampleFoo, last_, NSString *)\n\
             J2OBJC_FIELD_SETTER(ComExampleFoo, next_, ComExampleNode *)\n"
        );
    }

    #[test]
    fn test_no_field_setters_no_blank_line() {
        let fields = [field(int(), Modifiers::none(), &["count"])];
        let out = with_context(|ctx| {
            write_field_setters(ctx, &foo(), &fields);
            Ok(())
        });
        assert_eq!(out, "");
    }
}
