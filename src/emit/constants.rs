//! Literal rendering for primitive constants.
//!
//! Primitive `static final` constants are substituted at every use site through `#define`, so the
//! literal text here is what the native compiler sees. Minimum integer values are written as masked
//! hexadecimal casts, because `-2147483648` parses as the negation of an out-of-range literal.
//! Floating-point special values use the `math.h` macros or the compiler's built-in limits.

use headergen_ast::{ConstantValue, FieldDeclaration, PrimitiveKind, TypeBinding, VariableBinding};
use headergen_core::lang::primitives;

use super::{EmitContext, EmitError};

/// Render a constant as target literal text.
///
/// ## Examples
/// ```rust
/// use headergen::emit::constants::format_constant;
/// use headergen_ast::ConstantValue;
///
/// assert_eq!(format_constant(&ConstantValue::Int(i32::MIN)), "((int) 0x80000000)");
/// assert_eq!(format_constant(&ConstantValue::Long(42)), "42LL");
/// assert_eq!(format_constant(&ConstantValue::Float(0.5)), "0.5f");
/// assert_eq!(format_constant(&ConstantValue::Double(f64::NEG_INFINITY)), "-INFINITY");
/// ```
pub fn format_constant(value: &ConstantValue) -> String {
    match value {
        ConstantValue::Boolean(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        ConstantValue::Char(c) => format_char(*c),
        ConstantValue::Long(l) => {
            if *l == i64::MIN {
                "((long long) 0x8000000000000000LL)".to_string()
            } else {
                format!("{}LL", l)
            }
        }
        ConstantValue::Int(i) => {
            if *i == i32::MIN {
                "((int) 0x80000000)".to_string()
            } else {
                i.to_string()
            }
        }
        ConstantValue::Float(f) => format_float(*f),
        ConstantValue::Double(d) => format_double(*d),
        ConstantValue::Byte(b) => b.to_string(),
        ConstantValue::Short(s) => s.to_string(),
        ConstantValue::String(s) => s.clone(),
    }
}

/// Printable ASCII is quoted (escaping `'` and `\`); everything else is a 4-digit hex code unit.
fn format_char(c: u16) -> String {
    match c {
        0x27 => "'\\''".to_string(),
        0x5C => "'\\\\'".to_string(),
        0x20..=0x7E => format!("'{}'", char::from(c as u8)),
        _ => format!("0x{:04x}", c),
    }
}

fn format_float(f: f32) -> String {
    if f.is_nan() {
        "NAN".to_string()
    } else if f == f32::INFINITY {
        "INFINITY".to_string()
    } else if f == f32::NEG_INFINITY {
        "-INFINITY".to_string()
    } else if f == f32::MAX {
        "__FLT_MAX__".to_string()
    } else if f == f32::MIN_POSITIVE {
        "__FLT_MIN__".to_string()
    } else {
        format!("{}f", java_float_string(f))
    }
}

fn format_double(d: f64) -> String {
    if d.is_nan() {
        "NAN".to_string()
    } else if d == f64::INFINITY {
        "INFINITY".to_string()
    } else if d == f64::NEG_INFINITY {
        "-INFINITY".to_string()
    } else if d == f64::MAX {
        "__DBL_MAX__".to_string()
    } else if d == f64::MIN_POSITIVE {
        "__DBL_MIN__".to_string()
    } else {
        java_double_string(d)
    }
}

/// Source-language decimal rendering of a finite `float` (`1.0`, `1.0E10`).
pub fn java_float_string(f: f32) -> String {
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    canonical_decimal(&format!("{:e}", f.abs()), f.is_sign_negative())
}

/// Source-language decimal rendering of a finite `double` (`0.001`, `1.0E-4`).
pub fn java_double_string(d: f64) -> String {
    if d == 0.0 {
        return if d.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }
    canonical_decimal(&format!("{:e}", d.abs()), d.is_sign_negative())
}

/// Re-lay shortest round-trip digits (`1.2345e6`) in the source language's layout: plain notation with
/// at least one fractional digit for exponents -3..=6, `d.dddE<exp>` otherwise.
fn canonical_decimal(scientific: &str, negative: bool) -> String {
    let Some((mantissa, exp)) = scientific.split_once('e') else {
        return scientific.to_string();
    };
    let Ok(exp) = exp.parse::<i32>() else {
        return scientific.to_string();
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let body = if (-3..7).contains(&exp) {
        if exp >= 0 {
            let point = exp as usize + 1;
            if digits.len() <= point {
                format!("{}{}.0", digits, "0".repeat(point - digits.len()))
            } else {
                format!("{}.{}", &digits[..point], &digits[point..])
            }
        } else {
            format!("0.{}{}", "0".repeat((-exp - 1) as usize), digits)
        }
    } else {
        let (first, rest) = digits.split_at(1);
        let rest = if rest.is_empty() { "0" } else { rest };
        format!("{}.{}E{}", first, rest, exp)
    };

    if negative { format!("-{}", body) } else { body }
}

fn value_matches(kind: PrimitiveKind, value: &ConstantValue) -> bool {
    matches!(
        (kind, value),
        (PrimitiveKind::Boolean, ConstantValue::Boolean(_))
            | (PrimitiveKind::Char, ConstantValue::Char(_))
            | (PrimitiveKind::Byte, ConstantValue::Byte(_))
            | (PrimitiveKind::Short, ConstantValue::Short(_))
            | (PrimitiveKind::Int, ConstantValue::Int(_))
            | (PrimitiveKind::Long, ConstantValue::Long(_))
            | (PrimitiveKind::Float, ConstantValue::Float(_))
            | (PrimitiveKind::Double, ConstantValue::Double(_))
    )
}

/// Return the value of a primitive constant, checking it against the declared type.
fn checked_value<'v>(
    ctx: &EmitContext<'_>,
    declaring: &TypeBinding,
    var: &'v VariableBinding,
) -> Result<Option<&'v ConstantValue>, EmitError> {
    let (Some(kind), Some(value)) = (var.ty.primitive_kind(), var.constant_value.as_ref()) else {
        return Ok(None);
    };
    if !value_matches(kind, value) {
        return Err(EmitError::ConstantKindMismatch {
            declaration: ctx.naming.full_name(declaring),
            field: var.name.clone(),
            expected: primitives::java_name(kind).to_string(),
            found: value.kind_name().to_string(),
        });
    }
    Ok(Some(value))
}

/// Write `#define <Name> <literal>` for every primitive constant, then a blank line if any were written.
pub fn write_constant_defines(
    ctx: &mut EmitContext<'_>,
    declaring: &TypeBinding,
    fields: &[FieldDeclaration],
) -> Result<(), EmitError> {
    let mut had_constant = false;
    for fragment in fields.iter().flat_map(|f| &f.fragments) {
        let var = &fragment.binding;
        if !var.is_primitive_constant() {
            continue;
        }
        let Some(value) = checked_value(ctx, declaring, var)? else {
            continue;
        };
        let name = ctx.naming.primitive_constant_name(declaring, var);
        ctx.out.writeln(&format!("#define {} {}", name, format_constant(value)));
        had_constant = true;
    }
    if had_constant {
        ctx.out.newline();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emit::tests::{class, constant_field, with_context};
    use headergen_ast::Modifiers;

    // ========================================
    // Integer forms
    // ========================================

    #[test]
    fn test_integer_minimums_use_masked_casts() {
        assert_eq!(format_constant(&ConstantValue::Int(i32::MIN)), "((int) 0x80000000)");
        assert_eq!(
            format_constant(&ConstantValue::Long(i64::MIN)),
            "((long long) 0x8000000000000000LL)"
        );
    }

    #[test]
    fn test_integer_plain_forms() {
        assert_eq!(format_constant(&ConstantValue::Int(-7)), "-7");
        assert_eq!(format_constant(&ConstantValue::Int(i32::MAX)), "2147483647");
        assert_eq!(format_constant(&ConstantValue::Long(-1)), "-1LL");
        assert_eq!(format_constant(&ConstantValue::Long(i64::MAX)), "9223372036854775807LL");
        assert_eq!(format_constant(&ConstantValue::Byte(-128)), "-128");
        assert_eq!(format_constant(&ConstantValue::Short(300)), "300");
    }

    #[test]
    fn test_booleans() {
        assert_eq!(format_constant(&ConstantValue::Boolean(true)), "TRUE");
        assert_eq!(format_constant(&ConstantValue::Boolean(false)), "FALSE");
    }

    // ========================================
    // Characters
    // ========================================

    #[test]
    fn test_printable_chars_are_quoted() {
        assert_eq!(format_constant(&ConstantValue::Char(u16::from(b'a'))), "'a'");
        assert_eq!(format_constant(&ConstantValue::Char(u16::from(b' '))), "' '");
        assert_eq!(format_constant(&ConstantValue::Char(u16::from(b'~'))), "'~'");
    }

    #[test]
    fn test_quote_and_backslash_are_escaped() {
        assert_eq!(format_constant(&ConstantValue::Char(u16::from(b'\''))), "'\\''");
        assert_eq!(format_constant(&ConstantValue::Char(u16::from(b'\\'))), "'\\\\'");
    }

    #[test]
    fn test_other_chars_use_hex() {
        assert_eq!(format_constant(&ConstantValue::Char(0x0A)), "0x000a");
        assert_eq!(format_constant(&ConstantValue::Char(0x7F)), "0x007f");
        assert_eq!(format_constant(&ConstantValue::Char(0x20AC)), "0x20ac");
        assert_eq!(format_constant(&ConstantValue::Char(0xFFFF)), "0xffff");
    }

    // ========================================
    // Floating point
    // ========================================

    #[test]
    fn test_float_special_values() {
        assert_eq!(format_constant(&ConstantValue::Float(f32::NAN)), "NAN");
        assert_eq!(format_constant(&ConstantValue::Float(f32::INFINITY)), "INFINITY");
        assert_eq!(format_constant(&ConstantValue::Float(f32::NEG_INFINITY)), "-INFINITY");
        assert_eq!(format_constant(&ConstantValue::Float(f32::MAX)), "__FLT_MAX__");
        assert_eq!(format_constant(&ConstantValue::Float(f32::MIN_POSITIVE)), "__FLT_MIN__");
    }

    #[test]
    fn test_double_special_values() {
        assert_eq!(format_constant(&ConstantValue::Double(f64::NAN)), "NAN");
        assert_eq!(format_constant(&ConstantValue::Double(f64::INFINITY)), "INFINITY");
        assert_eq!(format_constant(&ConstantValue::Double(f64::NEG_INFINITY)), "-INFINITY");
        assert_eq!(format_constant(&ConstantValue::Double(f64::MAX)), "__DBL_MAX__");
        assert_eq!(format_constant(&ConstantValue::Double(f64::MIN_POSITIVE)), "__DBL_MIN__");
    }

    #[test]
    fn test_float_decimal_forms() {
        assert_eq!(format_constant(&ConstantValue::Float(1.0)), "1.0f");
        assert_eq!(format_constant(&ConstantValue::Float(0.1)), "0.1f");
        assert_eq!(format_constant(&ConstantValue::Float(-2.5)), "-2.5f");
        assert_eq!(format_constant(&ConstantValue::Float(1.0e10)), "1.0E10f");
        assert_eq!(format_constant(&ConstantValue::Float(-0.0)), "-0.0f");
        // Lowest finite is not special-cased.
        assert_eq!(format_constant(&ConstantValue::Float(f32::MIN)), "-3.4028235E38f");
    }

    #[test]
    fn test_double_decimal_forms() {
        assert_eq!(format_constant(&ConstantValue::Double(0.0)), "0.0");
        assert_eq!(format_constant(&ConstantValue::Double(100.0)), "100.0");
        assert_eq!(format_constant(&ConstantValue::Double(1234567.0)), "1234567.0");
        assert_eq!(format_constant(&ConstantValue::Double(1.0e7)), "1.0E7");
        assert_eq!(format_constant(&ConstantValue::Double(0.001)), "0.001");
        assert_eq!(format_constant(&ConstantValue::Double(0.0001)), "1.0E-4");
        assert_eq!(format_constant(&ConstantValue::Double(3.141592653589793)), "3.141592653589793");
        assert_eq!(format_constant(&ConstantValue::Double(1.5e-10)), "1.5E-10");
        assert_eq!(format_constant(&ConstantValue::Double(0.1 + 0.2)), "0.30000000000000004");
    }

    // ========================================
    // Define block
    // ========================================

    #[test]
    fn test_defines_followed_by_blank_line() {
        let fields = vec![
            constant_field("MAX", ConstantValue::Int(10)),
            constant_field("RATE", ConstantValue::Double(0.5)),
        ];
        let out = with_context(|ctx| write_constant_defines(ctx, &class("Foo"), &fields));
        assert_eq!(out, "#define ComExampleFoo_MAX 10\n#define ComExampleFoo_RATE 0.5\n\n");
    }

    #[test]
    fn test_no_defines_no_blank_line() {
        let field = FieldDeclaration::new(TypeBinding::primitive(PrimitiveKind::Int), Modifiers::none().with_static())
            .with_binding(
                VariableBinding::new("counter", TypeBinding::primitive(PrimitiveKind::Int), Modifiers::none().with_static())
                    .with_constant(ConstantValue::Int(1)),
            );
        let out = with_context(|ctx| write_constant_defines(ctx, &class("Foo"), &[field]));
        assert_eq!(out, "");
    }

    #[test]
    fn test_kind_mismatch_is_an_error() {
        let mut field = constant_field("MAX", ConstantValue::Int(10));
        field.fragments[0].binding.constant_value = Some(ConstantValue::Long(10));

        let naming = crate::naming::JavaNamingPolicy::new();
        let config = crate::config::HeaderConfig::default();
        let mut ctx = EmitContext::new(&naming, &config);
        let err = write_constant_defines(&mut ctx, &class("Foo"), &[field]).unwrap_err();
        assert_eq!(
            err,
            EmitError::ConstantKindMismatch {
                declaration: "ComExampleFoo".to_string(),
                field: "MAX".to_string(),
                expected: "int".to_string(),
                found: "long".to_string(),
            }
        );
    }
}
