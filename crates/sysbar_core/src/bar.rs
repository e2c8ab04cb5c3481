//! System bar identities

use serde::{Deserialize, Serialize};

/// Which system bar a value refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarKind {
    /// The status bar along the top edge.
    Status,
    /// The navigation bar along the bottom edge.
    Navigation,
}

impl BarKind {
    /// Both bars, status first.
    pub const ALL: [BarKind; 2] = [BarKind::Status, BarKind::Navigation];
}
