//! The kind registry: the canonical ordered list of conceptual data kinds.
//!
//! Every generator is a pure function of a [`Registry`] snapshot, so this
//! module is the single place where supported kinds, their C++ storage types
//! and their numpy buffer correspondences are declared. Adding a kind means
//! adding one [`KindSpec`] to [`Registry::default_set`]; no generator code
//! changes.

use thiserror::Error;

/// Errors raised while validating a registry definition.
///
/// All of these are fatal and reported before any generator runs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("kind `{kind}` has no native C++ representation")]
    MissingNative { kind: String },

    #[error("kind `{name}` is declared more than once")]
    DuplicateKind { name: String },

    #[error("kinds `{first}` and `{second}` both alias to `{alias}`")]
    DuplicateAlias {
        first: String,
        second: String,
        alias: String,
    },
}

/// Declaration of one conceptual kind, before validation.
///
/// The native C++ representation is optional here so that an incomplete
/// declaration is caught by [`Registry::new`] instead of surfacing as a
/// broken artifact at the consumer's build time.
#[derive(Debug, Clone, Default)]
pub struct KindSpec {
    name: String,
    native: Option<String>,
    includes: Vec<String>,
    numeric: Option<String>,
}

impl KindSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// The underlying C++ storage type, e.g. `int64_t`.
    pub fn native(mut self, ty: impl Into<String>) -> Self {
        self.native = Some(ty.into());
        self
    }

    /// A header required by the native representation, e.g. `<cstdint>`.
    pub fn include(mut self, header: impl Into<String>) -> Self {
        self.includes.push(header.into());
        self
    }

    /// The numpy element type this kind maps to, e.g. `int64`.
    ///
    /// Only kinds with a fixed-width numeric representation carry this; it
    /// marks the kind's array counterpart as eligible for zero-copy buffer
    /// exposure in the SWIG layer.
    pub fn numeric(mut self, dtype: impl Into<String>) -> Self {
        self.numeric = Some(dtype.into());
        self
    }
}

/// A validated conceptual kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kind {
    name: String,
    native: String,
    includes: Vec<String>,
    numeric: Option<String>,
}

impl Kind {
    /// Lower-case registry name, e.g. `integer`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The underlying C++ storage type, e.g. `int64_t`.
    pub fn native(&self) -> &str {
        &self.native
    }

    /// Headers required by the native representation.
    pub fn includes(&self) -> &[String] {
        &self.includes
    }

    /// The numpy element type, if this kind is numeric-capable.
    pub fn numeric(&self) -> Option<&str> {
        self.numeric.as_deref()
    }

    /// The numpy C typecode for the numeric correspondence, e.g. `NPY_INT64`.
    pub fn numpy_typecode(&self) -> Option<String> {
        self.numeric
            .as_ref()
            .map(|n| format!("NPY_{}", n.to_uppercase()))
    }

    /// Public C++ alias for this kind, e.g. `Integer`.
    pub fn alias(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
            None => String::new(),
        }
    }

    /// The ArrayKind counterpart, e.g. `ArraySpan<Integer>`.
    pub fn span_alias(&self) -> String {
        format!("ArraySpan<{}>", self.alias())
    }

    /// Namespace-qualified alias, e.g. `optmap::Integer`.
    pub fn qualified_alias(&self) -> String {
        format!("optmap::{}", self.alias())
    }

    /// Namespace-qualified ArrayKind, e.g. `optmap::ArraySpan<optmap::Integer>`.
    pub fn qualified_span(&self) -> String {
        format!("optmap::ArraySpan<{}>", self.qualified_alias())
    }
}

/// The ordered, validated kind registry.
#[derive(Debug, Clone)]
pub struct Registry {
    kinds: Vec<Kind>,
}

impl Registry {
    /// Validate the kind declarations and build a registry.
    ///
    /// Fails fast on a kind without a native representation, a duplicate
    /// kind name, or two kinds resolving to the same public alias.
    pub fn new(specs: Vec<KindSpec>) -> Result<Self, RegistryError> {
        let mut kinds: Vec<Kind> = Vec::with_capacity(specs.len());
        for spec in specs {
            let native = spec.native.ok_or_else(|| RegistryError::MissingNative {
                kind: spec.name.clone(),
            })?;
            let kind = Kind {
                name: spec.name,
                native,
                includes: spec.includes,
                numeric: spec.numeric,
            };
            if let Some(existing) = kinds.iter().find(|k| k.name == kind.name) {
                return Err(RegistryError::DuplicateKind {
                    name: existing.name.clone(),
                });
            }
            if let Some(existing) = kinds.iter().find(|k| k.alias() == kind.alias()) {
                return Err(RegistryError::DuplicateAlias {
                    first: existing.name.clone(),
                    second: kind.name.clone(),
                    alias: kind.alias(),
                });
            }
            kinds.push(kind);
        }
        Ok(Self { kinds })
    }

    /// The registry shipped with optmap.
    pub fn default_set() -> Self {
        Self::new(vec![
            KindSpec::new("complex")
                .native("std::complex<double>")
                .include("<complex>")
                .numeric("complex128"),
            KindSpec::new("integer")
                .native("int64_t")
                .include("<cstdint>")
                .numeric("int64"),
            KindSpec::new("float").native("double").numeric("float64"),
            KindSpec::new("string").native("std::string").include("<string>"),
        ])
        .expect("INVARIANT: the shipped registry is a valid kind set")
    }

    /// All kinds, in declaration order.
    pub fn kinds(&self) -> &[Kind] {
        &self.kinds
    }

    /// Kinds carrying a numpy correspondence, in declaration order.
    pub fn numeric_kinds(&self) -> impl Iterator<Item = &Kind> {
        self.kinds.iter().filter(|k| k.numeric.is_some())
    }

    /// Union of all required headers, first occurrence wins.
    pub fn includes(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for kind in &self.kinds {
            for header in &kind.includes {
                if !seen.contains(&header.as_str()) {
                    seen.push(header);
                }
            }
        }
        seen
    }

    /// The kind plain C++ `int` literals coerce to, if registered.
    pub fn designated_integer(&self) -> Option<&Kind> {
        self.kinds.iter().find(|k| k.name == "integer")
    }

    /// The kind `const char*` literals coerce to, if registered.
    pub fn designated_string(&self) -> Option<&Kind> {
        self.kinds.iter().find(|k| k.name == "string")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_set_is_valid_and_ordered() {
        let registry = Registry::default_set();
        let names: Vec<&str> = registry.kinds().iter().map(|k| k.name()).collect();
        assert_eq!(names, ["complex", "integer", "float", "string"]);
    }

    #[test]
    fn alias_capitalises_first_letter() {
        let registry = Registry::default_set();
        let aliases: Vec<String> = registry.kinds().iter().map(|k| k.alias()).collect();
        assert_eq!(aliases, ["Complex", "Integer", "Float", "String"]);
        assert_eq!(registry.kinds()[1].span_alias(), "ArraySpan<Integer>");
        assert_eq!(
            registry.kinds()[1].qualified_span(),
            "optmap::ArraySpan<optmap::Integer>"
        );
    }

    #[test]
    fn missing_native_is_rejected() {
        let err = Registry::new(vec![KindSpec::new("integer")]).unwrap_err();
        assert_eq!(
            err,
            RegistryError::MissingNative {
                kind: "integer".into()
            }
        );
    }

    #[test]
    fn duplicate_kind_is_rejected() {
        let err = Registry::new(vec![
            KindSpec::new("float").native("double"),
            KindSpec::new("float").native("float"),
        ])
        .unwrap_err();
        assert_eq!(err, RegistryError::DuplicateKind { name: "float".into() });
    }

    #[test]
    fn duplicate_alias_is_rejected() {
        // Distinct names that capitalise to the same public alias.
        let err = Registry::new(vec![
            KindSpec::new("float").native("double"),
            KindSpec::new("Float").native("float"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateAlias {
                first: "float".into(),
                second: "Float".into(),
                alias: "Float".into(),
            }
        );
    }

    #[test]
    fn includes_are_unioned_in_first_occurrence_order() {
        let registry = Registry::default_set();
        assert_eq!(registry.includes(), ["<complex>", "<cstdint>", "<string>"]);
    }

    #[test]
    fn numeric_kinds_skip_string() {
        let registry = Registry::default_set();
        let names: Vec<&str> = registry.numeric_kinds().map(|k| k.name()).collect();
        assert_eq!(names, ["complex", "integer", "float"]);
    }
}
