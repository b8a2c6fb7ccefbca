//! Source name to C symbol mangling used by the code generator.
//!
//! ASCII alphanumerics and `_` pass through, `-` becomes `_`, and any other character
//! becomes `_` followed by its decimal code point: `set*` is `set_42`, `<` is `_60`.

use std::fmt::Write as _;

pub fn mangle(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' => out.push(c),
            '-' => out.push('_'),
            other => {
                out.push('_');
                let _ = write!(out, "{}", u32::from(other));
            }
        }
    }
    out
}

/// Inverse of [`mangle`] for symbols that name a catalog primitive.
///
/// Mangling is not injective (`-` and `_` collide, and `_4` followed by `2` reads the
/// same as `_42`), so this consults the catalog instead of parsing the symbol.
pub fn demangle(symbol: &str) -> Option<Vec<(crate::Surface, &'static str)>> {
    crate::lookup_symbol(symbol).map(|p| p.names.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Surface;

    #[test]
    fn operator_names() {
        assert_eq!(mangle("<"), "_60");
        assert_eq!(mangle("="), "_61");
        assert_eq!(mangle(">"), "_62");
        assert_eq!(mangle("+"), "_43");
        assert_eq!(mangle("-"), "_");
        assert_eq!(mangle("*"), "_42");
        assert_eq!(mangle("/"), "_47");
    }

    #[test]
    fn mixed_names() {
        assert_eq!(mangle("char=?"), "char_61_63");
        assert_eq!(mangle("set*"), "set_42");
        assert_eq!(mangle("display-line"), "display_line");
        assert_eq!(mangle("display_line"), "display_line");
        assert_eq!(mangle("add"), "add");
        assert_eq!(mangle(""), "");
    }

    #[test]
    fn non_ascii_uses_the_code_point() {
        assert_eq!(mangle("λ"), "_955");
        assert_eq!(mangle("a b"), "a_32b");
    }

    #[test]
    fn demangle_lists_every_surface_name() {
        assert_eq!(
            demangle("display_line"),
            Some(vec![
                (Surface::Spelled, "display_line"),
                (Surface::Symbolic, "display-line"),
            ])
        );
        assert_eq!(demangle("_"), Some(vec![(Surface::Symbolic, "-")]));
        assert_eq!(demangle("entry"), None);
    }
}
