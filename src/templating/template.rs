//! `$NAME` placeholder templates

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece<'i> {
    Text(&'i str),
    Dollar,
    Placeholder { name: &'i str, written: &'i str },
}

/// A template whose placeholders are written `$name` or `${name}`, with
/// `$$` standing for a literal dollar sign. Anything after a `$` that isn't
/// one of those forms is plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'i> {
    pieces: Vec<Piece<'i>>,
}

impl<'i> Template<'i> {
    pub fn parse(source: &'i str) -> Template<'i> {
        let re = crate::pattern!(r"\$(?:(\$)|([_A-Za-z][_A-Za-z0-9]*)|\{([_A-Za-z][_A-Za-z0-9]*)\})");

        let mut pieces = Vec::new();
        let mut last = 0;

        for cap in re.captures_iter(source) {
            let Some(whole) = cap.get(0) else {
                continue;
            };

            if whole.start() > last {
                pieces.push(Piece::Text(&source[last..whole.start()]));
            }

            if cap
                .get(1)
                .is_some()
            {
                pieces.push(Piece::Dollar);
            } else if let Some(name) = cap
                .get(2)
                .or_else(|| cap.get(3))
            {
                pieces.push(Piece::Placeholder {
                    name: name.as_str(),
                    written: whole.as_str(),
                });
            }

            last = whole.end();
        }

        if last < source.len() {
            pieces.push(Piece::Text(&source[last..]));
        }

        Template { pieces }
    }

    /// Names of the placeholders, in order of first appearance.
    pub fn placeholders(&self) -> Vec<&'i str> {
        let mut names: Vec<&'i str> = Vec::new();
        for piece in &self.pieces {
            if let Piece::Placeholder { name, .. } = piece {
                if !names.contains(name) {
                    names.push(*name);
                }
            }
        }
        names
    }

    /// Placeholders which `values` has nothing for, and which `fill` will
    /// therefore leave as written.
    pub fn unfilled(&self, values: &BTreeMap<String, String>) -> Vec<&'i str> {
        self.placeholders()
            .into_iter()
            .filter(|name| !values.contains_key(*name))
            .collect()
    }

    /// Substitute values for placeholders. Placeholders with no value are
    /// left exactly as written.
    pub fn fill(&self, values: &BTreeMap<String, String>) -> String {
        let mut result = String::new();

        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => result.push_str(text),
                Piece::Dollar => result.push('$'),
                Piece::Placeholder { name, written } => match values.get(*name) {
                    Some(value) => result.push_str(value),
                    None => result.push_str(written),
                },
            }
        }

        result
    }
}
