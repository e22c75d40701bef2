//! File-level framing: include guard, deprecation pragmas, forward declarations and includes.

use std::collections::BTreeSet;

use headergen_ast::{HeaderDependencies, Import};
use headergen_core::lang::runtime;

use super::EmitContext;

/// `@class Foo;` or `@protocol Foo;`.
pub fn forward_declaration(import: &Import) -> String {
    let keyword = if import.is_interface { "protocol" } else { "class" };
    format!("@{} {};", keyword, import.type_name)
}

/// `#include "com/example/Foo.h"`.
pub fn include_statement(import: &Import) -> String {
    format!("#include \"{}.h\"", import.import_file_name)
}

/// Write the include guard, optional pragmas, forward declarations, the runtime import and the
/// supertype includes. `main_type_name` names the guard macro.
///
/// Forward declarations and includes are each sorted by their rendered statement.
pub fn write_file_prologue(ctx: &mut EmitContext<'_>, main_type_name: &str, deps: &HeaderDependencies) {
    ctx.out.writeln(&format!("#ifndef _{}_H_", main_type_name));
    ctx.out.writeln(&format!("#define _{}_H_", main_type_name));
    if ctx.config.generate_deprecated_declarations {
        ctx.out.writeln(runtime::PRAGMA_PUSH);
        ctx.out.writeln(runtime::PRAGMA_IGNORE_DEPRECATED);
    }
    ctx.out.newline();

    let forward: BTreeSet<String> = deps.forward_declarations.iter().map(forward_declaration).collect();
    if !forward.is_empty() {
        for stmt in &forward {
            ctx.out.writeln(stmt);
        }
        ctx.out.newline();
    }

    ctx.out.writeln(&runtime::runtime_import());

    let includes: BTreeSet<String> = deps.super_types.iter().map(include_statement).collect();
    for stmt in &includes {
        ctx.out.writeln(stmt);
    }
}

/// Close the pragmas and the include guard.
pub fn write_file_epilogue(ctx: &mut EmitContext<'_>, main_type_name: &str) {
    ctx.out.newline();
    if ctx.config.generate_deprecated_declarations {
        ctx.out.writeln(runtime::PRAGMA_POP);
    }
    ctx.out.writeln(&format!("#endif // _{}_H_", main_type_name));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeaderConfig;
    use crate::emit::tests::{with_config, with_context};

    fn deps() -> HeaderDependencies {
        let mut deps = HeaderDependencies::default();
        deps.forward_declarations
            .insert(Import::new("JavaUtilList", "java/util/List", true));
        deps.forward_declarations
            .insert(Import::new("ComExampleNode", "com/example/Node", false));
        deps.forward_declarations
            .insert(Import::new("IOSIntArray", "IOSIntArray", false));
        deps.super_types
            .insert(Import::new("JavaLangRunnable", "java/lang/Runnable", true));
        deps.super_types
            .insert(Import::new("ComExampleBase", "com/example/Base", false));
        deps
    }

    #[test]
    fn test_forward_declaration_forms() {
        assert_eq!(
            forward_declaration(&Import::new("ComExampleFoo", "com/example/Foo", false)),
            "@class ComExampleFoo;"
        );
        assert_eq!(
            forward_declaration(&Import::new("JavaUtilList", "java/util/List", true)),
            "@protocol JavaUtilList;"
        );
    }

    #[test]
    fn test_prologue_sorts_statements() {
        let out = with_context(|ctx| {
            write_file_prologue(ctx, "ComExampleFoo", &deps());
            Ok(())
        });
        assert_eq!(
            out,
            "#ifndef _ComExampleFoo_H_\n\
             #define _ComExampleFoo_H_\n\
             #pragma clang diagnostic push\n\
             #pragma GCC diagnostic ignored \"-Wdeprecated-declarations\"\n\
             \n\
             @class ComExampleNode;\n\
             @class IOSIntArray;\n\
             @protocol JavaUtilList;\n\
             \n\
             #import \"JreEmulation.h\"\n\
             #include \"com/example/Base.h\"\n\
             #include \"java/lang/Runnable.h\"\n"
        );
    }

    #[test]
    fn test_prologue_without_dependencies_or_pragmas() {
        let config = HeaderConfig::new().with_deprecated_declarations(false);
        let out = with_config(config, |ctx| {
            write_file_prologue(ctx, "Foo", &HeaderDependencies::default());
            Ok(())
        });
        assert_eq!(out, "#ifndef _Foo_H_\n#define _Foo_H_\n\n#import \"JreEmulation.h\"\n");
    }

    #[test]
    fn test_epilogue_pops_pragma_when_pushed() {
        let out = with_context(|ctx| {
            write_file_epilogue(ctx, "Foo");
            Ok(())
        });
        assert_eq!(out, "\n#pragma clang diagnostic pop\n#endif // _Foo_H_\n");

        let config = HeaderConfig::new().with_deprecated_declarations(false);
        let out = with_config(config, |ctx| {
            write_file_epilogue(ctx, "Foo");
            Ok(())
        });
        assert_eq!(out, "\n#endif // _Foo_H_\n");
    }
}
