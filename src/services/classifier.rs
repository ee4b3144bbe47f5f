/// Ecosystem packages whose names carry neither the organization scope
/// nor the `circuit` marker.
pub const KNOWN_INTERNAL_PACKAGES: &[&str] = &[
    "jscad-electronics",
    "jscad-fiber",
    "schematic-symbols",
    "kicad-converter",
    "graphics-debug",
    "bpc-graph",
];

const ORG_SCOPE_PREFIX: &str = "@tscircuit/";
const NAME_MARKER: &str = "circuit";

/// True when `name` belongs to the tscircuit ecosystem: a known package,
/// an `@tscircuit/`-scoped package, any name containing `circuit`
/// (case-insensitive), or a caller-supplied extra module (exact match).
pub fn is_internal(name: &str, extra: &[String]) -> bool {
    KNOWN_INTERNAL_PACKAGES.contains(&name)
        || name.starts_with(ORG_SCOPE_PREFIX)
        || name.to_ascii_lowercase().contains(NAME_MARKER)
        || extra.iter().any(|m| m == name)
}
