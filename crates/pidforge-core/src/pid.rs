use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A minted persistent identifier in its printable form.
///
/// The engine only ever produces these through the encoder, so no
/// validation happens here; the newtype exists to keep identifier strings
/// from being confused with other strings at API boundaries.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Pid(SmolStr);

impl Pid {
    /// Wraps a printable identifier.
    pub fn new(value: impl AsRef<str>) -> Self {
        Self(SmolStr::new(value))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pid").field(&self.0).finish()
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Pid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Pid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_the_raw_identifier() {
        let pid = Pid::new("10.5072/dans-x6f-kf66");
        assert_eq!(pid.to_string(), "10.5072/dans-x6f-kf66");
        assert_eq!(pid.as_str(), "10.5072/dans-x6f-kf66");
    }

    #[test]
    fn serializes_as_a_plain_string() {
        let pid = Pid::new("urn:nbn:nl:ui:13-zz29-r6");
        let json = serde_json::to_string(&pid).unwrap();
        assert_eq!(json, "\"urn:nbn:nl:ui:13-zz29-r6\"");

        let back: Pid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pid);
    }
}
