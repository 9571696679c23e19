//! Discovery of `@NS.MAJOR.MINOR[...]` cross-reference tokens in running
//! text, and their decomposition into section or full references.

use crate::language::{BlockType, Namespace, Reference};

/// Find every reference token belonging to `namespace` anywhere in the
/// text, in order of appearance. Tokens are returned as written; whether
/// they decompose cleanly is a separate question, see [`decompose`].
pub fn discover<'i>(text: &'i str, namespace: &Namespace) -> Vec<&'i str> {
    let re = crate::pattern!(r"@([A-Z][A-Z0-9_]*)\.[0-9]{3}\.[0-9]{3}(?:\.[A-Za-z0-9_]+)*");

    re.captures_iter(text)
        .filter(|cap| &cap[1] == namespace.as_str())
        .filter_map(|cap| cap.get(0))
        .map(|m| m.as_str())
        .collect()
}

/// Break a token into its components. A full reference has six
/// dot-separated parts, a section reference three. Any other shape, or
/// a component that fails its own rule, returns `None`: the token is
/// malformed.
pub fn decompose(token: &str) -> Option<Reference<'_>> {
    let parts: Vec<&str> = token
        .split('.')
        .collect();

    match parts.as_slice() {
        [_, major, minor, block, kind, name] => Some(Reference::Full {
            token,
            major: number(major)?,
            minor: number(minor)?,
            block: number(block)?,
            kind: BlockType::parse(kind)?,
            name: lowercase_name(*name)?,
        }),
        [_, major, minor] => Some(Reference::Section {
            token,
            major: number(major)?,
            minor: number(minor)?,
        }),
        _ => None,
    }
}

// Identity is textual, so numbers must be written with exactly three
// digits; `1` and `001` are not the same section.
fn number(part: &str) -> Option<u16> {
    if part.len() != 3
        || !part
            .bytes()
            .all(|b| b.is_ascii_digit())
    {
        return None;
    }

    part.parse()
        .ok()
}

fn lowercase_name(part: &str) -> Option<&str> {
    if !part.is_empty()
        && part
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
    {
        Some(part)
    } else {
        None
    }
}
