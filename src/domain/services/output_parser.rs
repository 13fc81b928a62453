//! Transfer output parsing
//!
//! The transfer process runs with `--out-format=%o %n`, so each item it
//! handles is logged as `<operation> <path>`. Everything else it prints is
//! passed through as an advisory message.

use serde::Serialize;

/// What happened to an item on the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferOp {
    /// Item was sent to the destination
    Sent,
    /// Item was deleted on the destination
    Deleted,
}

impl TransferOp {
    /// Match an rsync `%o` token
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "send" | "recv" => Some(Self::Sent),
            "del." => Some(Self::Deleted),
            _ => None,
        }
    }

    /// Human label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent => "sent",
            Self::Deleted => "deleted",
        }
    }
}

/// One classified line of transfer output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferLine {
    /// A file operation record; counts toward `items_synced`
    Item { op: TransferOp, path: String },
    /// Unrecognized output, surfaced as a warning
    Advisory(String),
}

impl TransferLine {
    /// Whether this line counts as a synced item
    pub fn is_item(&self) -> bool {
        matches!(self, Self::Item { .. })
    }
}

/// Classify one line of transfer stdout
pub fn parse_line(line: &str) -> TransferLine {
    let line = line.trim_end_matches(['\r', '\n']);

    let Some((token, rest)) = line.trim_start().split_once(char::is_whitespace) else {
        return TransferLine::Advisory(line.to_string());
    };

    let path = rest.trim_start();
    match TransferOp::from_token(token) {
        Some(op) if !path.is_empty() => TransferLine::Item {
            op,
            path: path.to_string(),
        },
        _ => TransferLine::Advisory(line.to_string()),
    }
}
