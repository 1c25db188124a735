use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;
use thiserror::Error;

/// The identifier kinds the engine can mint.
///
/// The kind selects the printable shape and the seed namespace. Each kind
/// has its own seed row in the store; the advance recurrence is shared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PidKind {
    /// Digital Object Identifier, shaped `<prefix>/<namespace>-xxx-yyyy`.
    Doi,
    /// Uniform Resource Name, shaped `urn:nbn:nl:ui:<namespace>-xxxx-yy`.
    Urn,
}

impl PidKind {
    /// Stable tag, also used as the `type` column in the persistence schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            PidKind::Doi => "doi",
            PidKind::Urn => "urn",
        }
    }
}

impl Display for PidKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown pid kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for PidKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "doi" => Ok(PidKind::Doi),
            "urn" => Ok(PidKind::Urn),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}
