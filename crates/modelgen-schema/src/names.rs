//! Identifier-casing transforms.
//!
//! Generated type names are PascalCase renderings of table names and
//! generated field names are camelCase renderings of column names. Both
//! transforms split on `_` only (database identifiers do not carry case
//! transitions worth preserving) and tolerate leading, trailing, and
//! consecutive underscores by skipping empty fragments. Pure, total, and
//! ASCII-oriented.

/// Convert an identifier to PascalCase.
///
/// Each `_`-separated fragment has its first character uppercased and the
/// remainder lowercased.
pub fn to_pascal_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    for fragment in identifier.split('_').filter(|f| !f.is_empty()) {
        push_capitalized(&mut out, fragment);
    }
    out
}

/// Convert an identifier to camelCase.
///
/// The first non-empty fragment is lowercased in full; subsequent
/// fragments are capitalized as in [`to_pascal_case`].
pub fn to_camel_case(identifier: &str) -> String {
    let mut out = String::with_capacity(identifier.len());
    let mut first = true;
    for fragment in identifier.split('_').filter(|f| !f.is_empty()) {
        if first {
            out.extend(fragment.chars().map(|c| c.to_ascii_lowercase()));
            first = false;
        } else {
            push_capitalized(&mut out, fragment);
        }
    }
    out
}

fn push_capitalized(out: &mut String, fragment: &str) {
    let mut chars = fragment.chars();
    if let Some(head) = chars.next() {
        out.push(head.to_ascii_uppercase());
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    }
}
