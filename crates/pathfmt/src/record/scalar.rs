// File: src/record/scalar.rs
// Purpose: Closed set of field types a path segment can be coerced into

use std::fmt;

use crate::CoercionError;

/// Supported field kinds, with bit width where it matters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Signed(u32),
    Unsigned(u32),
    Float(u32),
    Str,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Signed(bits) => write!(f, "i{}", bits),
            FieldKind::Unsigned(bits) => write!(f, "u{}", bits),
            FieldKind::Float(bits) => write!(f, "f{}", bits),
            FieldKind::Str => f.write_str("String"),
        }
    }
}

/// A field value that can be assigned from, and rendered to, a path segment
///
/// Implemented for `bool`, every signed and unsigned integer up to 64 bits
/// (plus `isize`/`usize`), `f32`, `f64` and `String`.
pub trait PathScalar {
    fn kind(&self) -> FieldKind;

    /// Rust type name, used in error messages
    fn type_name(&self) -> &'static str;

    /// Parses `raw` and overwrites `self`; `self` is untouched on error
    fn assign_path_str(&mut self, raw: &str) -> Result<(), CoercionError>;

    fn to_path_string(&self) -> String;
}

impl PathScalar for bool {
    fn kind(&self) -> FieldKind {
        FieldKind::Bool
    }

    fn type_name(&self) -> &'static str {
        "bool"
    }

    fn assign_path_str(&mut self, raw: &str) -> Result<(), CoercionError> {
        *self = raw.parse()?;
        Ok(())
    }

    fn to_path_string(&self) -> String {
        self.to_string()
    }
}

impl PathScalar for String {
    fn kind(&self) -> FieldKind {
        FieldKind::Str
    }

    fn type_name(&self) -> &'static str {
        "String"
    }

    fn assign_path_str(&mut self, raw: &str) -> Result<(), CoercionError> {
        raw.clone_into(self);
        Ok(())
    }

    fn to_path_string(&self) -> String {
        self.clone()
    }
}

macro_rules! impl_float_scalar {
    ($($ty:ident),*) => {$(
        impl PathScalar for $ty {
            fn kind(&self) -> FieldKind {
                FieldKind::Float((std::mem::size_of::<$ty>() * 8) as u32)
            }

            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn assign_path_str(&mut self, raw: &str) -> Result<(), CoercionError> {
                *self = raw.parse::<$ty>()?;
                Ok(())
            }

            fn to_path_string(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

macro_rules! impl_int_scalar {
    ($kind:ident: $($ty:ident),*) => {$(
        impl PathScalar for $ty {
            fn kind(&self) -> FieldKind {
                FieldKind::$kind($ty::BITS)
            }

            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn assign_path_str(&mut self, raw: &str) -> Result<(), CoercionError> {
                let (digits, radix) = split_radix(raw);
                *self = $ty::from_str_radix(&digits, radix)?;
                Ok(())
            }

            fn to_path_string(&self) -> String {
                self.to_string()
            }
        }
    )*};
}

impl_float_scalar!(f32, f64);
impl_int_scalar!(Signed: i8, i16, i32, i64, isize);
impl_int_scalar!(Unsigned: u8, u16, u32, u64, usize);

/// Detects a `0x`, `0o` or `0b` prefix after an optional sign
///
/// Returns the sign-prefixed digits and the radix to parse them with.
/// Without a prefix the input is returned unchanged with radix 10.
fn split_radix(raw: &str) -> (std::borrow::Cow<'_, str>, u32) {
    use std::borrow::Cow;

    let (sign, unsigned) = match raw.as_bytes().first() {
        Some(b'+') | Some(b'-') => raw.split_at(1),
        _ => ("", raw),
    };

    let radix = match unsigned.get(..2) {
        Some("0x") | Some("0X") => 16,
        Some("0o") | Some("0O") => 8,
        Some("0b") | Some("0B") => 2,
        _ => return (Cow::Borrowed(raw), 10),
    };

    let digits = &unsigned[2..];
    // A second sign after the prefix is never valid
    if digits.starts_with(['+', '-']) {
        return (Cow::Borrowed(raw), 10);
    }

    if sign.is_empty() {
        (Cow::Borrowed(digits), radix)
    } else {
        (Cow::Owned(format!("{}{}", sign, digits)), radix)
    }
}
