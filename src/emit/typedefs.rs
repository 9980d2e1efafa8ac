//! Generate `typedefs.hxx`: the aliases binding each kind's public C++ name
//! to its underlying storage type, plus the headers those types need.

use crate::registry::Registry;

use super::{banner, close_namespace, open_namespace, SourceWriter};

pub fn generate(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    banner(&mut w, year);
    w.line("#pragma once");
    for header in registry.includes() {
        w.line(&format!("#include {header}"));
    }

    w.blank();
    w.line("// Typedefs mapping the kind names to their underlying C++ types");

    open_namespace(&mut w);
    for kind in registry.kinds() {
        w.line(&format!("typedef {} {};", kind.native(), kind.alias()));
    }
    close_namespace(&mut w);
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_typedef_per_kind_in_registry_order() {
        let text = generate(&Registry::default_set(), 2024);
        let typedefs: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("typedef"))
            .collect();
        assert_eq!(
            typedefs,
            [
                "typedef std::complex<double> Complex;",
                "typedef int64_t Integer;",
                "typedef double Float;",
                "typedef std::string String;",
            ]
        );
    }

    #[test]
    fn includes_cover_every_native_type() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("#include <complex>"));
        assert!(text.contains("#include <cstdint>"));
        assert!(text.contains("#include <string>"));
    }
}
