//! Types representing the identifiers and references found in annotated
//! specification documents.

use std::fmt;

use super::NamespaceError;

/// The document-family tag which leads every block identifier and every
/// cross-reference, for example `ECON`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Namespace(String);

impl Namespace {
    pub fn new(tag: &str) -> Result<Namespace, NamespaceError> {
        let mut chars = tag.chars();

        let valid = match chars.next() {
            Some(first) => {
                first.is_ascii_uppercase()
                    && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            }
            None => false,
        };

        if valid {
            Ok(Namespace(tag.to_string()))
        } else {
            Err(NamespaceError {
                tag: tag.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Namespace {
    fn default() -> Self {
        Namespace("ECON".to_string())
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of block kinds. The short upper-case token is what
/// appears in identifiers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    Definition,
    Requirement,
    Table,
    Flow,
    Alert,
    Architecture,
    Control,
    Example,
    Acceptance,
}

impl BlockType {
    pub fn parse(token: &str) -> Option<BlockType> {
        match token {
            "DEF" => Some(BlockType::Definition),
            "REQ" => Some(BlockType::Requirement),
            "TABLE" => Some(BlockType::Table),
            "FLOW" => Some(BlockType::Flow),
            "ALERT" => Some(BlockType::Alert),
            "ARCH" => Some(BlockType::Architecture),
            "CTRL" => Some(BlockType::Control),
            "EXAMPLE" => Some(BlockType::Example),
            "ACCEPTANCE" => Some(BlockType::Acceptance),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            BlockType::Definition => "DEF",
            BlockType::Requirement => "REQ",
            BlockType::Table => "TABLE",
            BlockType::Flow => "FLOW",
            BlockType::Alert => "ALERT",
            BlockType::Architecture => "ARCH",
            BlockType::Control => "CTRL",
            BlockType::Example => "EXAMPLE",
            BlockType::Acceptance => "ACCEPTANCE",
        }
    }
}

/// A block identifier as written in a BEGIN or END marker, such as
/// `ECON.001.002.003.DEF.sample`. Identity is the literal text; the
/// components are kept alongside for convenience.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockId<'i> {
    pub text: &'i str,
    pub major: u16,
    pub minor: u16,
    pub block: u16,
    pub kind: BlockType,
    pub name: &'i str,
}

impl<'i> fmt::Display for BlockId<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// A cross-reference token that decomposed cleanly. What it points at is
/// rebuilt from the components, which are always written with three digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reference<'i> {
    Section {
        token: &'i str,
        major: u16,
        minor: u16,
    },
    Full {
        token: &'i str,
        major: u16,
        minor: u16,
        block: u16,
        kind: BlockType,
        name: &'i str,
    },
}

impl<'i> Reference<'i> {
    pub fn token(&self) -> &'i str {
        match self {
            Reference::Section { token, .. } => token,
            Reference::Full { token, .. } => token,
        }
    }

    /// For a full reference, the exact block identifier it names. For a
    /// section reference, the `NS.MAJOR.MINOR.` prefix that any block in
    /// the section starts with.
    pub fn target(&self, namespace: &Namespace) -> String {
        match self {
            Reference::Section { major, minor, .. } => {
                format!("{}.{:03}.{:03}.", namespace, major, minor)
            }
            Reference::Full {
                major,
                minor,
                block,
                kind,
                name,
                ..
            } => format!(
                "{}.{:03}.{:03}.{:03}.{}.{}",
                namespace,
                major,
                minor,
                block,
                kind.token(),
                name
            ),
        }
    }
}
