//! Recognition of the BEGIN and END marker lines which delimit blocks.

use tracing::debug;

use crate::language::{BlockId, BlockType, Namespace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker<'i> {
    Begin(BlockId<'i>),
    End(BlockId<'i>),
}

/// Test a single line against the marker grammar. The whole line, once
/// surrounding whitespace is trimmed, must be the marker; anything else
/// (including markers whose identifier is malformed or belongs to another
/// namespace) is inert and gives `None`.
pub fn recognize<'i>(line: &'i str, namespace: &Namespace) -> Option<Marker<'i>> {
    let re = crate::pattern!(
        r"^<!-- (BEGIN|END):(([A-Z][A-Z0-9_]*)\.([0-9]{3})\.([0-9]{3})\.([0-9]{3})\.(DEF|REQ|TABLE|FLOW|ALERT|ARCH|CTRL|EXAMPLE|ACCEPTANCE)\.([a-z0-9_]+)) -->$"
    );

    let cap = re.captures(line.trim())?;

    if &cap[3] != namespace.as_str() {
        debug!("Ignoring marker in foreign namespace: {}", &cap[2]);
        return None;
    }

    let id = BlockId {
        text: cap
            .get(2)?
            .as_str(),
        major: cap[4]
            .parse()
            .ok()?,
        minor: cap[5]
            .parse()
            .ok()?,
        block: cap[6]
            .parse()
            .ok()?,
        kind: BlockType::parse(&cap[7])?,
        name: cap
            .get(8)?
            .as_str(),
    };

    match &cap[1] {
        "BEGIN" => Some(Marker::Begin(id)),
        _ => Some(Marker::End(id)),
    }
}
