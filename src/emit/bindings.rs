//! Generate the SWIG interface files exposing `OptMap` and `ArraySpan` to
//! the Python runtime.
//!
//! `ArraySpan.i` pairs every numeric-capable ArrayKind with its numpy buffer
//! type so spans alias numpy memory without copying. `OptMap.i` extends the
//! map with per-kind scalar accessors and, for numeric kinds, the three
//! array operations:
//!
//! - `update_<kind>_view` stores the span as passed: no allocation, the
//!   caller's buffer stays authoritative and must outlive the entry;
//! - `update_<kind>_copy` duplicates the viewed memory into an owned buffer
//!   first, severing the aliasing relationship;
//! - `get_<kind>_copy` returns the stored span by value, which the typemap
//!   materialises as a fresh numpy array.

use crate::registry::{Kind, Registry};

use super::{banner, SourceWriter};

/// Fixed `%arrayspan_typemaps` machinery prepended to `ArraySpan.i`.
const ARRAY_SPAN_PREAMBLE: &str = include_str!("templates/arrayspan_preamble.i");

/// `ArraySpan.i`: the typemap preamble plus one pairing rule per numeric kind.
pub fn generate_array_span_i(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    w.line("// vi: syntax=c");
    banner(&mut w, year);
    w.blank();
    w.verbatim(ARRAY_SPAN_PREAMBLE);
    w.blank();

    for kind in registry.numeric_kinds() {
        if let Some(typecode) = kind.numpy_typecode() {
            w.line(&format!(
                "%arrayspan_typemaps({}, {typecode})",
                kind.qualified_span()
            ));
        }
    }
    w.finish()
}

/// `OptMap.i`: scalar and array accessors on the map type.
pub fn generate_opt_map_i(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    w.line("// vi: syntax=c");
    banner(&mut w, year);
    w.blank();
    w.verbatim(
        r#"
%module optmap

%{
#include "OptMap.hpp"
%}

%include "optmap_exceptions.i"
%include "ArraySpan.i"
%include "std_string.i"
%include "stdint.i"
%include "typedefs.hxx"
"#,
    );
    w.blank();

    for kind in registry.numeric_kinds() {
        let span = kind.qualified_span();
        w.line(&format!("%apply ({span} ARRAYSPAN) {{({span} view)}}"));
    }

    w.blank();
    w.line("%include \"OptMap.hpp\"");
    w.line("%extend optmap::OptMap {");
    w.indent();

    for kind in registry.kinds() {
        scalar_accessors(&mut w, kind);
    }
    for kind in registry.numeric_kinds() {
        array_accessors(&mut w, kind);
    }

    w.dedent();
    w.line("}");
    w.finish()
}

/// `update_<kind>` / `get_<kind>`: the scalar accessor pair.
fn scalar_accessors(w: &mut SourceWriter, kind: &Kind) {
    let name = kind.name();
    let cpp_type = kind.qualified_alias();
    w.line(&format!("void update_{name}(std::string key, {cpp_type} value) {{"));
    w.indent();
    w.line("$self->update(key, std::move(value));");
    w.dedent();
    w.line("}");
    w.line(&format!("{cpp_type} get_{name}(std::string key) {{"));
    w.indent();
    w.line(&format!("return $self->at<{cpp_type}>(key);"));
    w.dedent();
    w.line("}");
    w.blank();
}

/// The view / copy / retrieve-by-copy triple for one numeric kind.
fn array_accessors(w: &mut SourceWriter, kind: &Kind) {
    let name = kind.name();
    let span = kind.qualified_span();

    // Store the viewing span as-is: the caller's buffer stays authoritative.
    w.line(&format!("void update_{name}_view(std::string key, {span} view) {{"));
    w.indent();
    w.line("$self->update(key, std::move(view));");
    w.dedent();
    w.line("}");
    w.blank();

    // Duplicate the viewed memory before storing.
    w.line(&format!("void update_{name}_copy(std::string key, {span} view) {{"));
    w.indent();
    w.line("// Make a copy of the view including the memory");
    w.line(&format!("{span} copy(view, optmap::Ownership::Copy);"));
    w.line("$self->update(key, std::move(copy));");
    w.dedent();
    w.line("}");
    w.blank();

    // Returned by value; the OUT typemap materialises a fresh numpy array.
    w.line(&format!("{span} get_{name}_copy(std::string key) {{"));
    w.indent();
    w.line(&format!("return $self->at<{span}>(key);"));
    w.dedent();
    w.line("}");
    w.blank();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typemap_rule_per_numeric_kind_in_order() {
        let text = generate_array_span_i(&Registry::default_set(), 2024);
        let rules: Vec<&str> = text
            .lines()
            .filter(|l| l.starts_with("%arrayspan_typemaps("))
            .collect();
        assert_eq!(
            rules,
            [
                "%arrayspan_typemaps(optmap::ArraySpan<optmap::Complex>, NPY_COMPLEX128)",
                "%arrayspan_typemaps(optmap::ArraySpan<optmap::Integer>, NPY_INT64)",
                "%arrayspan_typemaps(optmap::ArraySpan<optmap::Float>, NPY_FLOAT64)",
            ]
        );
    }

    #[test]
    fn interface_files_depend_on_the_typedefs() {
        let registry = Registry::default_set();
        assert!(generate_array_span_i(&registry, 2024).contains("%include \"typedefs.hxx\""));
        assert!(generate_opt_map_i(&registry, 2024).contains("%include \"typedefs.hxx\""));
    }

    #[test]
    fn scalar_accessor_pair_per_kind() {
        let registry = Registry::default_set();
        let text = generate_opt_map_i(&registry, 2024);
        for kind in registry.kinds() {
            assert!(text.contains(&format!("void update_{}(std::string key", kind.name())));
            assert!(text.contains(&format!("get_{}(std::string key)", kind.name())));
        }
    }

    #[test]
    fn array_triple_only_for_numeric_kinds() {
        let text = generate_opt_map_i(&Registry::default_set(), 2024);
        for name in ["complex", "integer", "float"] {
            assert!(text.contains(&format!("update_{name}_view")));
            assert!(text.contains(&format!("update_{name}_copy")));
            assert!(text.contains(&format!("get_{name}_copy")));
        }
        assert!(!text.contains("update_string_view"));
        assert!(!text.contains("update_string_copy"));
        assert!(!text.contains("get_string_copy"));
    }

    #[test]
    fn view_update_stores_the_span_without_copying() {
        let text = generate_opt_map_i(&Registry::default_set(), 2024);
        let view_body = body_of(&text, "void update_integer_view");
        assert!(view_body.contains("$self->update(key, std::move(view));"));
        assert!(!view_body.contains("Ownership::Copy"));
    }

    #[test]
    fn copy_update_duplicates_the_buffer_first() {
        let text = generate_opt_map_i(&Registry::default_set(), 2024);
        let copy_body = body_of(&text, "void update_integer_copy");
        assert!(copy_body.contains(
            "optmap::ArraySpan<optmap::Integer> copy(view, optmap::Ownership::Copy);"
        ));
        assert!(copy_body.contains("$self->update(key, std::move(copy));"));
    }

    /// Extract the brace-delimited body following the first line that
    /// starts with `signature`.
    fn body_of<'a>(text: &'a str, signature: &str) -> &'a str {
        let start = text
            .find(signature)
            .unwrap_or_else(|| panic!("no accessor starting with `{signature}`"));
        let end = text[start..].find("\n  }").expect("unterminated body");
        &text[start..start + end]
    }
}
