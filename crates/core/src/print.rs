//! TypeScript union printing.

use crate::extract::ComponentTypeMap;

/// Open fallback member: accepts any string without hiding the literal
/// suggestions from autocomplete the way a bare `string` would.
pub const AUTOCOMPLETE_STRING_TYPE: &str = "(string & {})";

/// Render `members` as a string-literal union.
///
/// An empty list renders as `never` when `strict` is set, and as the open
/// fallback otherwise. Non-strict unions always end with the fallback.
pub fn print_union_type<S: AsRef<str>>(members: &[S], strict: bool) -> String {
    if members.is_empty() {
        return if strict {
            "never".to_string()
        } else {
            AUTOCOMPLETE_STRING_TYPE.to_string()
        };
    }

    let mut parts: Vec<String> = members
        .iter()
        .map(|member| string_literal(member.as_ref()))
        .collect();
    if !strict {
        parts.push(AUTOCOMPLETE_STRING_TYPE.to_string());
    }
    parts.join(" | ")
}

/// Render one `name: union;` line per entry, sorted by name.
///
/// The sort makes output independent of the order entries were collected in.
pub fn print_union_map<'a, I, S>(unions: I, strict: bool) -> String
where
    I: IntoIterator<Item = (&'a str, &'a [S])>,
    S: AsRef<str> + 'a,
{
    let mut entries: Vec<(&str, &[S])> = unions.into_iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    entries
        .into_iter()
        .map(|(name, members)| format!("{name}: {};", print_union_type(members, strict)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the nested `components: { ... }` block.
pub fn print_component_types(component_types: &ComponentTypeMap, strict: bool) -> String {
    let mut out = String::from("components: {\n");
    for (name, types) in component_types.iter() {
        let unions = [
            ("sizes", types.sizes.as_slice()),
            ("variants", types.variants.as_slice()),
        ];
        out.push_str(&format!("  {}: {{\n", property_name(name)));
        for line in print_union_map(unions, strict).lines() {
            out.push_str("    ");
            out.push_str(line);
            out.push('\n');
        }
        out.push_str("  }\n");
    }
    out.push('}');
    out
}

/// Double-quoted, escaped TypeScript string literal.
fn string_literal(value: &str) -> String {
    // JSON string escaping is valid TypeScript string escaping.
    serde_json::Value::from(value).to_string()
}

/// Quote `name` unless it is a plain ASCII JavaScript identifier.
fn property_name(name: &str) -> String {
    let mut chars = name.chars();
    let bare = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$');
    if bare {
        name.to_string()
    } else {
        string_literal(name)
    }
}
