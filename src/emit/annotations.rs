//! Annotation type declarations.
//!
//! Every annotation type becomes a protocol refining `JavaLangAnnotationAnnotation`. Runtime-retained
//! annotations also get a concrete `NSObject` class conforming to it, holding one private ivar per
//! member and a member-wise initializer, so instances can be built for reflection.

use headergen_ast::AnnotationTypeDeclaration;
use headergen_core::lang::{method_family, runtime};

use super::constants::write_constant_defines;
use super::members::{check_fields, write_doc};
use super::statics::{static_fields_needing_accessors, write_static_field, write_static_init};
use super::types::write_prefixed_alias;
use super::{EmitContext, EmitError};

fn pointer_separator(objc_type: &str) -> &'static str {
    if objc_type.ends_with('*') { "" } else { " " }
}

/// Write an annotation type declaration.
pub fn write_annotation_declaration(
    ctx: &mut EmitContext<'_>,
    decl: &AnnotationTypeDeclaration,
) -> Result<(), EmitError> {
    let binding = &decl.binding;
    check_fields(ctx, binding, &decl.fields)?;
    write_constant_defines(ctx, binding, &decl.fields)?;

    let type_name = ctx.naming.full_name(binding);
    let runtime_retained = decl.is_runtime_retained();

    write_doc(ctx, decl.doc.as_deref());
    ctx.out
        .writeln(&format!("@protocol {} < {} >", type_name, runtime::ANNOTATION_PROTOCOL));
    if runtime_retained && !decl.members.is_empty() {
        ctx.out.newline();
        write_properties(ctx, decl);
    }
    ctx.out.writeln("\n@end");

    let statics = static_fields_needing_accessors(&decl.fields);
    if !runtime_retained && statics.is_empty() {
        write_prefixed_alias(ctx, binding, decl.top_level);
        return Ok(());
    }

    ctx.out.write(&format!(
        "\n@interface {} : {} < {} >",
        type_name,
        runtime::ROOT_OBJECT,
        type_name
    ));
    if runtime_retained {
        if decl.members.is_empty() {
            ctx.out.newline();
        } else {
            ctx.out.writeln(&format!(" {{\n{}", runtime::PRIVATE_IVARS));
            write_member_variables(ctx, decl);
            ctx.out.writeln("}");
            ctx.out.newline();
            let ctor = ctx.naming.annotation_constructor_declaration(decl);
            ctx.out.writeln(&format!("{};", ctor));
        }
        write_default_accessors(ctx, decl);
    } else {
        ctx.out.newline();
    }
    ctx.out.writeln("\n@end");

    write_static_init(ctx, binding, &decl.methods);
    for var in statics {
        write_static_field(ctx, binding, var);
    }
    write_prefixed_alias(ctx, binding, decl.top_level);
    Ok(())
}

fn write_properties(ctx: &mut EmitContext<'_>, decl: &AnnotationTypeDeclaration) {
    for member in &decl.members {
        let objc_type = ctx.naming.specific_objc_type(&member.ty);
        let name = ctx.naming.annotation_property_name(member);
        ctx.out.writeln(&format!(
            "@property (readonly) {}{}{};",
            objc_type,
            pointer_separator(&objc_type),
            name
        ));
        if method_family::needs_family_override(&name) {
            ctx.out
                .writeln(&format!("- ({}){} {};", objc_type, name, runtime::METHOD_FAMILY_NONE));
        }
    }
    if !decl.members.is_empty() {
        ctx.out.newline();
    }
}

fn write_member_variables(ctx: &mut EmitContext<'_>, decl: &AnnotationTypeDeclaration) {
    ctx.out.indent();
    for member in &decl.members {
        let objc_type = ctx.naming.objc_type(&member.ty);
        ctx.out.writeln(&format!(
            "{}{}{};",
            objc_type,
            pointer_separator(&objc_type),
            member.name
        ));
    }
    ctx.out.dedent();
}

fn write_default_accessors(ctx: &mut EmitContext<'_>, decl: &AnnotationTypeDeclaration) {
    let mut newline_written = false;
    for member in decl.members.iter().filter(|m| m.has_default()) {
        if !newline_written {
            ctx.out.newline();
            newline_written = true;
        }
        let objc_type = ctx.naming.specific_objc_type(&member.ty);
        let name = ctx.naming.annotation_property_name(member);
        ctx.out.writeln(&format!("+ ({}){}Default;", objc_type, name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::tests::{PACKAGE, constant_field, field, int, string, with_context};
    use headergen_ast::{
        AnnotationTypeMemberDeclaration, ConstantValue, Modifiers, RetentionPolicy, TypeBinding,
    };

    fn annotation(name: &str) -> AnnotationTypeDeclaration {
        AnnotationTypeDeclaration::new(TypeBinding::annotation(PACKAGE, name))
    }

    fn emit(decl: &AnnotationTypeDeclaration) -> String {
        with_context(|ctx| write_annotation_declaration(ctx, decl))
    }

    // ========================================
    // Source and class retention
    // ========================================

    #[test]
    fn test_source_annotation_is_protocol_only() {
        let decl = annotation("Marker")
            .with_retention(RetentionPolicy::Source)
            .with_member(AnnotationTypeMemberDeclaration::new("value", string()));
        assert_eq!(
            emit(&decl),
            "@protocol ComExampleMarker < JavaLangAnnotationAnnotation >\n\n@end\n"
        );
    }

    #[test]
    fn test_class_annotation_with_statics_gets_class() {
        let decl = annotation("Config")
            .with_field(constant_field("LIMIT", ConstantValue::Int(10)))
            .with_field(field(string(), Modifiers::constant(), &["NAME"]));
        assert_eq!(
            emit(&decl),
            "#define ComExampleConfig_LIMIT 10\n\
             \n\
             @protocol ComExampleConfig < JavaLangAnnotationAnnotation >\n\
             \n\
             @end\n\
             \n\
             @interface ComExampleConfig : NSObject < ComExampleConfig >\n\
             \n\
             @end\n\
             \n\
             __attribute__((always_inline)) inline void ComExampleConfig_init() {}\n\
             \n\
             FOUNDATION_EXPORT NSString *ComExampleConfig_NAME_;\n\
             J2OBJC_STATIC_FIELD_GETTER(ComExampleConfig, NAME_, NSString *)\n"
        );
    }

    // ========================================
    // Runtime retention
    // ========================================

    #[test]
    fn test_runtime_annotation_full_layout() {
        let decl = annotation("Named")
            .with_retention(RetentionPolicy::Runtime)
            .with_member(AnnotationTypeMemberDeclaration::new("value", string()))
            .with_member(AnnotationTypeMemberDeclaration::new("count", int()).with_default("1"));
        assert_eq!(
            emit(&decl),
            "@protocol ComExampleNamed < JavaLangAnnotationAnnotation >\n\
             \n\
             @property (readonly) NSString *value;\n\
             @property (readonly) int count;\n\
             \n\
             \n\
             @end\n\
             \n\
             @interface ComExampleNamed : NSObject < ComExampleNamed > {\n\
             \x20@private\n\
             \x20\x20NSString *value;\n\
             \x20\x20int count;\n\
             }\n\
             \n\
             - (instancetype)initWithCount:(int)count_ value:(NSString *)value_;\n\
             \n\
             + (int)countDefault;\n\
             \n\
             @end\n\
             \n\
             __attribute__((always_inline)) inline void ComExampleNamed_init() {}\n"
        );
    }

    #[test]
    fn test_runtime_annotation_without_members() {
        let decl = annotation("Flag").with_retention(RetentionPolicy::Runtime);
        assert_eq!(
            emit(&decl),
            "@protocol ComExampleFlag < JavaLangAnnotationAnnotation >\n\
             \n\
             @end\n\
             \n\
             @interface ComExampleFlag : NSObject < ComExampleFlag >\n\
             \n\
             @end\n\
             \n\
             __attribute__((always_inline)) inline void ComExampleFlag_init() {}\n"
        );
    }

    #[test]
    fn test_reserved_property_name_gets_family_override() {
        let decl = annotation("Factory")
            .with_retention(RetentionPolicy::Runtime)
            .with_member(AnnotationTypeMemberDeclaration::new("newName", string()));
        let out = emit(&decl);
        assert!(out.contains(
            "@property (readonly) NSString *newName;\n- (NSString *)newName OBJC_METHOD_FAMILY_NONE;\n"
        ));
    }

    #[test]
    fn test_prefixed_annotation_gets_define_alias() {
        let naming = crate::naming::JavaNamingPolicy::new().with_prefix(PACKAGE, "CE");
        let config = crate::config::HeaderConfig::default();
        let mut ctx = EmitContext::new(&naming, &config);
        write_annotation_declaration(&mut ctx, &annotation("Marker")).unwrap();
        assert!(ctx.finish().ends_with("@end\n\n#define ComExampleMarker CEMarker\n"));
    }
}
