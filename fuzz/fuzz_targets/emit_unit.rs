#![no_main]

use headergen::{HeaderGenerator, HeaderImportCollector, JavaNamingPolicy};
use headergen_ast::CompilationUnit;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Any unit that deserializes must either emit or fail with an EmitError, never panic.
    if let Ok(unit) = serde_json::from_slice::<CompilationUnit>(data) {
        let naming = JavaNamingPolicy::new().with_prefix("com.example", "CE");
        let collector = HeaderImportCollector::new(&naming);
        let _ = HeaderGenerator::new(&naming, &collector).generate(&unit);
    }
});
