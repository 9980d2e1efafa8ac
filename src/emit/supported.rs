//! Generate `IsSupportedType.hxx`: the compile-time trait the wrapper's
//! static_asserts dispatch on.
//!
//! `IsSupportedType<T>` defaults to `std::false_type` and is specialised to
//! `std::true_type` for every registered kind and its ArrayKind, so only the
//! registry's closed type set passes the wrapper's catch-all constructor.

use crate::registry::Registry;

use super::{banner, close_namespace, open_namespace, supported_cpp_types, SourceWriter};

pub fn generate(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    banner(&mut w, year);
    w.line("#pragma once");
    w.line("#include <type_traits>");
    w.line("#include \"ArraySpan.hpp\"");
    w.line("#include \"typedefs.hxx\"");

    open_namespace(&mut w);
    w.verbatim(
        r#"
/** Is the type T supported by optmap for storage. */
template <typename T>
struct IsSupportedType : public std::false_type {};
"#,
    );
    w.blank();

    for cpp_type in supported_cpp_types(registry) {
        w.line(&format!("/** Specialisation of IsSupportedType<T> for {cpp_type}. */"));
        w.line("template <>");
        w.line(&format!(
            "struct IsSupportedType<{cpp_type}> : public std::true_type {{}};"
        ));
        w.blank();
    }

    close_namespace(&mut w);
    w.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specialises_every_kind_and_its_span() {
        let registry = Registry::default_set();
        let text = generate(&registry, 2024);
        for kind in registry.kinds() {
            assert!(text.contains(&format!("IsSupportedType<{}>", kind.alias())));
            assert!(text.contains(&format!("IsSupportedType<{}>", kind.span_alias())));
        }
        // One default plus one specialisation per supported type.
        let count = text.matches("struct IsSupportedType<").count();
        assert_eq!(count, registry.kinds().len() * 2);
    }

    #[test]
    fn defaults_to_false_type() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("struct IsSupportedType : public std::false_type {};"));
    }
}
