use std::fmt::Write as _;

use crate::manifest::{AbiManifest, PrimitiveEntry};

const GUARD: &str = "DOIT_RT_H";

/// Renders a C header declaring the manifest's primitives and imports.
pub fn render_header(manifest: &AbiManifest) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "/* {} runtime ABI ({}, abi_major {}, surface {}). Generated by doit-abi. */",
        manifest.runtime, manifest.schema_version, manifest.abi_major, manifest.surface
    );
    let _ = writeln!(out, "#ifndef {GUARD}");
    let _ = writeln!(out, "#define {GUARD}");
    out.push('\n');
    out.push_str("#include <stdint.h>\n\n");
    out.push_str("#ifdef __cplusplus\nextern \"C\" {\n#endif\n\n");

    out.push_str("/* Defined by the generated program. */\n");
    for import in &manifest.imports {
        let _ = writeln!(out, "void {import}(void);");
    }

    for p in &manifest.primitives {
        out.push('\n');
        let _ = writeln!(out, "/* {} */", describe(p));
        let _ = writeln!(out, "{};", declaration(p));
    }

    out.push_str("\n#ifdef __cplusplus\n}\n#endif\n\n");
    let _ = writeln!(out, "#endif /* {GUARD} */");
    out
}

fn describe(p: &PrimitiveEntry) -> String {
    let names: Vec<String> = p
        .names
        .iter()
        .map(|n| format!("{} `{}`", n.surface, n.name))
        .collect();
    let mut s = names.join(", ");
    if p.unchecked {
        s.push_str("; unchecked address");
    }
    s
}

fn declaration(p: &PrimitiveEntry) -> String {
    let params = if p.params.is_empty() {
        "void".to_string()
    } else {
        p.params
            .iter()
            .map(|param| declarator(&param.c_type, &param.name))
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("{}({params})", declarator(&p.ret, &p.symbol))
}

fn declarator(c_type: &str, name: &str) -> String {
    if c_type.ends_with('*') {
        format!("{c_type}{name}")
    } else {
        format!("{c_type} {name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::build_manifest;
    use crate::surface::SurfaceFilter;

    #[test]
    fn declares_primitives_with_c_types() {
        let h = render_header(&build_manifest(SurfaceFilter::All));
        assert!(h.contains("int32_t add(int32_t a, int32_t b);\n"), "{h}");
        assert!(h.contains("uint32_t _43(uint32_t x, uint32_t y);\n"), "{h}");
        assert!(h.contains("intptr_t peek(const intptr_t *addr);\n"), "{h}");
        assert!(h.contains("void set_42(uintptr_t *x, uintptr_t y);\n"), "{h}");
        assert!(h.contains("void newline(void);\n"), "{h}");
        assert!(h.contains("void display(const char *s);\n"), "{h}");
        assert!(h.contains("int32_t char_61_63(char x, char y);\n"), "{h}");
        assert!(h.contains("void entry(void);\n"), "{h}");
    }

    #[test]
    fn comments_name_both_surfaces() {
        let h = render_header(&build_manifest(SurfaceFilter::All));
        assert!(
            h.contains("/* spelled `display_line`, symbolic `display-line` */"),
            "{h}"
        );
        assert!(h.contains("/* spelled `peek`; unchecked address */"), "{h}");
    }

    #[test]
    fn header_is_guarded() {
        let h = render_header(&build_manifest(SurfaceFilter::Spelled));
        assert!(h.starts_with("/* doit.rt runtime ABI"));
        assert!(h.contains("#ifndef DOIT_RT_H\n#define DOIT_RT_H\n"));
        assert!(h.ends_with("#endif /* DOIT_RT_H */\n"));
        assert!(!h.contains(" _43("));
    }
}
