//! Generate the explicit instantiation lists.
//!
//! The array container and the map accessor are templates; these lists force
//! the toolchain to materialise exactly the registry's specialisations, so a
//! use of an unregistered kind fails to link instead of silently compiling.

use crate::registry::Registry;

use super::{banner, close_namespace, open_namespace, SourceWriter};

/// `ArraySpan.instantiation.hxx`: one `template class` line per kind.
pub fn generate_array_span(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    banner(&mut w, year);
    w.line("#include \"ArraySpan.hpp\"");
    w.line("#include \"typedefs.hxx\"");

    open_namespace(&mut w);
    for kind in registry.kinds() {
        w.line(&format!("template class ArraySpan<{}>;", kind.alias()));
    }
    close_namespace(&mut w);
    w.finish()
}

/// `OptMap.instantiation.hxx`: two `OptMap::at` instantiations per kind,
/// the const lookup-with-default and the mutable get-reference-with-default.
pub fn generate_opt_map(registry: &Registry, year: i32) -> String {
    let mut w = SourceWriter::new();
    banner(&mut w, year);
    w.line("#include \"OptMap.hpp\"");
    w.line("#include \"typedefs.hxx\"");

    open_namespace(&mut w);
    for kind in registry.kinds() {
        let alias = kind.alias();
        w.line(&format!(
            "template const {alias}& OptMap::at<{alias}>(const std::string& key, const {alias}& default_value) const;"
        ));
        w.line(&format!(
            "template {alias}& OptMap::at<{alias}>(const std::string& key, {alias}& default_value);"
        ));
    }
    close_namespace(&mut w);
    w.finish()
}
