//! Generate `OptMapValue.hxx`: the closed tagged-value wrapper.
//!
//! The wrapper holds exactly one value of exactly one supported kind. Its
//! construction rules form a ladder, resolved by C++ overload ranking:
//!
//! 1. exact match - a value already typed as a kind or ArrayKind binds to
//!    its own converting constructor and is never re-coerced;
//! 2. literal lists - `std::initializer_list<T>` converts to `ArraySpan<T>`;
//! 3. default coercions - plain `int` becomes the registry's integer kind,
//!    `const char*` its string kind;
//! 4. everything else lands in the template catch-all, whose static_asserts
//!    reject unsigned integers with a pointed message and any other type
//!    with a generic one.

use crate::registry::Registry;

use super::{banner, close_namespace, open_namespace, supported_cpp_types, SourceWriter};

pub fn generate(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    banner(&mut w, year);
    w.line("#pragma once");
    w.line("#include \"ArraySpan.hpp\"");
    w.line("#include \"IsSupportedType.hxx\"");
    w.line("#include \"any.hpp\"");
    w.line("#include \"typedefs.hxx\"");

    open_namespace(&mut w);

    w.verbatim(
        r#"
/** \brief Class to contain an entry value in an OptMap.
    Essentially a slightly specialised optmap::any */
class OptMapValue : public any {
 public:
"#,
    );

    catch_all_constructors(&mut w);
    w.blank();
    exact_match_constructors(&mut w, registry);
    list_constructor(&mut w);
    default_coercions(&mut w, registry);
    w.blank();

    w.verbatim(
        r#"
  /** Return the demangled typename of the type of the internal object. */
  std::string type_name() const;
};
"#,
    );

    close_namespace(&mut w);
    w.finish()
}

/// Rule 4: the rejection tier. Unsigned integers get steered toward a signed
/// representation; anything else unrecognised gets the generic message.
fn catch_all_constructors(w: &mut SourceWriter) {
    w.verbatim(
        r#"
  OptMapValue() = default;

  /** Catch-all constructor, which defaults to an error */
  template <typename ValueType>
  OptMapValue(ValueType) : OptMapValue() {
    static_assert(!std::is_unsigned<ValueType>::value,
                  "Unsigned integer types are not supported with OptMap. "
                  "Use a signed type instead.");

    static_assert(IsSupportedType<ValueType>::value,
                  "This value type is not supported by OptMap.");
  }

  /** Catch-all constructor for std::vector */
  template <typename ValueType>
  OptMapValue(std::vector<ValueType>) : OptMapValue() {
    static_assert(IsSupportedType<ArraySpan<ValueType>>::value,
                  "Cannot assign a list/array of values as a std::vector "
                  "with OptMap. Use the low-level ArraySpan<T> for this purpose.");
  }
"#,
    );
}

/// Rule 1: one converting constructor per supported type, so an already
/// typed value always outranks the coercions below.
fn exact_match_constructors(w: &mut SourceWriter, registry: &Registry) {
    for cpp_type in supported_cpp_types(registry) {
        w.line(&format!("  /** Construction from {cpp_type} */"));
        w.line(&format!(
            "  OptMapValue({cpp_type} val) : any(std::move(val)) {{}}"
        ));
        w.blank();
    }
}

/// Rule 2: a homogeneous initialiser list converts to the element kind's
/// ArrayKind, outranking the element-wise catch-all.
fn list_constructor(w: &mut SourceWriter) {
    w.verbatim(
        r#"
  /** \brief Make an OptMapValue out of an initialiser list by conversion to
             an ArraySpan of the appropriate type. */
  template <typename T>
  OptMapValue(const std::initializer_list<T> il) : OptMapValue(ArraySpan(il)) {
    static_assert(IsSupportedType<ArraySpan<T>>::value,
                  "The chosen type is not supported for list elements with OptMap.");
  }
"#,
    );
}

/// Rule 3: the ambiguous-literal coercions. Only emitted when the registry
/// actually designates an integer / string kind to coerce to.
fn default_coercions(w: &mut SourceWriter, registry: &Registry) {
    if let Some(integer) = registry.designated_integer() {
        let alias = integer.alias();
        w.blank();
        w.line("  //");
        w.line("  // The int type gets special treatment because it is the default for raw");
        w.line("  // numbers, such that simple things like OptMapValue{1, 2, 3} just work.");
        w.line("  //");
        w.line("  /** \\brief Make an OptMapValue out of an int. Behaves like an OptMapValue");
        w.line(&format!("    *        containing the {alias} kind */"));
        w.line(&format!(
            "  OptMapValue(int i) : OptMapValue(static_cast<{alias}>(i)) {{}}"
        ));
        w.blank();
        w.line("  /** \\brief Make an OptMapValue out of an initialiser list of int */");
        w.line("  OptMapValue(std::initializer_list<int> il)");
        w.line(&format!(
            "        : OptMapValue(ArraySpan<{alias}>(il.begin(), il.end())) {{}}"
        ));
    }

    if let Some(string) = registry.designated_string() {
        let alias = string.alias();
        w.blank();
        w.line("  //");
        w.line("  // Same for const char*");
        w.line("  //");
        w.line("  /** \\brief Make an OptMapValue out of a const char*.");
        w.line(&format!(
            "    * This behaves like the equivalent OptMapValue of a {alias} */"
        ));
        w.line(&format!(
            "  OptMapValue(const char* s) : OptMapValue({alias}(s)) {{}}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::KindSpec;

    #[test]
    fn exact_match_constructor_per_kind_and_span() {
        let registry = Registry::default_set();
        let text = generate(&registry, 2024);
        for kind in registry.kinds() {
            assert!(text.contains(&format!(
                "OptMapValue({} val) : any(std::move(val)) {{}}",
                kind.alias()
            )));
            assert!(text.contains(&format!(
                "OptMapValue({} val) : any(std::move(val)) {{}}",
                kind.span_alias()
            )));
        }
    }

    #[test]
    fn unsigned_rejection_steers_toward_signed() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("!std::is_unsigned<ValueType>::value"));
        assert!(text.contains("Unsigned integer types are not supported with OptMap."));
        assert!(text.contains("Use a signed type instead."));
    }

    #[test]
    fn unrecognised_types_get_the_generic_message() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("This value type is not supported by OptMap."));
    }

    #[test]
    fn int_literals_coerce_to_the_integer_kind() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("OptMapValue(int i) : OptMapValue(static_cast<Integer>(i)) {}"));
        assert!(text.contains(": OptMapValue(ArraySpan<Integer>(il.begin(), il.end())) {}"));
    }

    #[test]
    fn text_literals_coerce_to_the_string_kind() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("OptMapValue(const char* s) : OptMapValue(String(s)) {}"));
    }

    #[test]
    fn initialiser_lists_convert_to_spans() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains(": OptMapValue(ArraySpan(il))"));
        assert!(text.contains("The chosen type is not supported for list elements with OptMap."));
    }

    #[test]
    fn coercions_are_skipped_without_a_designated_kind() {
        let registry = Registry::new(vec![KindSpec::new("float").native("double")])
            .expect("valid registry");
        let text = generate(&registry, 2024);
        assert!(!text.contains("OptMapValue(int i)"));
        assert!(!text.contains("const char* s"));
    }

    #[test]
    fn declares_the_diagnostic_type_name() {
        let text = generate(&Registry::default_set(), 2024);
        assert!(text.contains("std::string type_name() const;"));
    }
}
