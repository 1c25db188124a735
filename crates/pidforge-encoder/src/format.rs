use crate::radix::to_radix31;

/// Printable shape of one identifier kind.
///
/// `leader` is everything before the encoded characters; a single dash is
/// inserted `dash_position` characters into the encoded run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PidFormat {
    leader: String,
    length: usize,
    dash_position: usize,
}

impl PidFormat {
    /// DOI shape: `<prefix>/<namespace>-xxx-yyyy`.
    pub fn doi(prefix: &str, namespace: &str) -> Self {
        Self {
            leader: format!("{prefix}/{namespace}-"),
            length: 7,
            dash_position: 3,
        }
    }

    /// URN shape: `urn:nbn:nl:ui:<namespace>-xxxx-yy`.
    pub fn urn(namespace: &str) -> Self {
        Self {
            leader: format!("urn:nbn:nl:ui:{namespace}-"),
            length: 6,
            dash_position: 4,
        }
    }

    /// Renders a seed value into the full identifier string.
    pub fn render(&self, value: u64) -> String {
        let chars = to_radix31(value, self.length);
        let mut out = String::with_capacity(self.leader.len() + chars.len() + 1);
        out.push_str(&self.leader);
        if self.dash_position > 0 && self.dash_position < chars.len() {
            out.push_str(&chars[..self.dash_position]);
            out.push('-');
            out.push_str(&chars[self.dash_position..]);
        } else {
            out.push_str(&chars);
        }
        out
    }
}
