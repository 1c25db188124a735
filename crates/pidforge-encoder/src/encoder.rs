use crate::format::PidFormat;
use crate::seed::next_seed;
use pidforge_core::{Pid, PidKind};
use typed_builder::TypedBuilder;

/// Configures the per-kind output shapes.
#[derive(Debug, Clone, TypedBuilder)]
pub struct EncoderSettings {
    /// DOI registrant prefix.
    #[builder(default = "10.5072".to_string(), setter(into))]
    pub doi_prefix: String,
    /// Namespace segment between the DOI prefix and the encoded characters.
    #[builder(default = "dans".to_string(), setter(into))]
    pub doi_namespace: String,
    /// Namespace segment of the URN leader.
    #[builder(default = "13".to_string(), setter(into))]
    pub urn_namespace: String,
}

/// Pure mapping from (kind, seed) to the next identifier.
///
/// `encode` and `advance` observe the same recurrence step two ways: the
/// minted string is the rendering of exactly the seed value that `advance`
/// returns. A store that persists `advance(kind, seed)` after each mint can
/// therefore re-derive every identifier it ever issued.
#[derive(Debug, Clone)]
pub struct Encoder {
    doi: PidFormat,
    urn: PidFormat,
}

impl Encoder {
    pub fn new(settings: EncoderSettings) -> Self {
        Self {
            doi: PidFormat::doi(&settings.doi_prefix, &settings.doi_namespace),
            urn: PidFormat::urn(&settings.urn_namespace),
        }
    }

    /// Identifier minted when the stored seed for `kind` is `seed`.
    pub fn encode(&self, kind: PidKind, seed: u64) -> Pid {
        let format = match kind {
            PidKind::Doi => &self.doi,
            PidKind::Urn => &self.urn,
        };
        Pid::new(format.render(next_seed(seed)))
    }

    /// Seed stored after a successful mint from `seed`.
    ///
    /// Both kinds currently share one recurrence; the kind tag is part of
    /// the contract so callers never need to know that.
    pub fn advance(&self, _kind: PidKind, seed: u64) -> u64 {
        next_seed(seed)
    }
}

impl Default for Encoder {
    fn default() -> Self {
        Self::new(EncoderSettings::builder().build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_doi_from_the_register_anchor() {
        let encoder = Encoder::default();
        let pid = encoder.encode(PidKind::Doi, 1_073_741_824);
        assert_eq!(pid.as_str(), "10.5072/dans-x6f-kf66");
        assert_eq!(encoder.advance(PidKind::Doi, 1_073_741_824), 1_073_741_829);
    }

    #[test]
    fn second_doi_continues_the_sequence() {
        let encoder = Encoder::default();
        let pid = encoder.encode(PidKind::Doi, 1_073_741_829);
        assert_eq!(pid.as_str(), "10.5072/dans-x6g-x2hb");
    }

    #[test]
    fn ten_dois_from_seed_123456() {
        let expected = [
            "10.5072/dans-2ap-4qfd",
            "10.5072/dans-zve-22y5",
            "10.5072/dans-x5f-3p9r",
            "10.5072/dans-xnr-c7jf",
            "10.5072/dans-x75-qa68",
            "10.5072/dans-229-ftfq",
            "10.5072/dans-zyq-5znp",
            "10.5072/dans-z8c-gnm3",
            "10.5072/dans-2zt-warx",
            "10.5072/dans-z7p-ebra",
        ];

        let encoder = Encoder::default();
        let mut seed = 123_456;
        for want in expected {
            assert_eq!(encoder.encode(PidKind::Doi, seed).as_str(), want);
            seed = encoder.advance(PidKind::Doi, seed);
        }
        assert_eq!(seed, 223_920_574);
    }

    #[test]
    fn urn_uses_its_own_shape() {
        let encoder = Encoder::default();
        let pid = encoder.encode(PidKind::Urn, 1);
        assert_eq!(pid.as_str(), "urn:nbn:nl:ui:13-zz29-r6");
    }

    #[test]
    fn encode_is_deterministic() {
        let encoder = Encoder::default();
        for seed in [0, 1, 123_456, 1_073_741_824, u64::MAX] {
            assert_eq!(
                encoder.encode(PidKind::Doi, seed),
                encoder.encode(PidKind::Doi, seed)
            );
            assert_eq!(
                encoder.advance(PidKind::Urn, seed),
                encoder.advance(PidKind::Urn, seed)
            );
        }
    }

    #[test]
    fn settings_override_the_leaders() {
        let encoder = Encoder::new(
            EncoderSettings::builder()
                .doi_prefix("10.17026")
                .doi_namespace("easy")
                .urn_namespace("27")
                .build(),
        );
        assert_eq!(
            encoder.encode(PidKind::Doi, 1_073_741_824).as_str(),
            "10.17026/easy-x6f-kf66"
        );
        assert_eq!(
            encoder.encode(PidKind::Urn, 1).as_str(),
            "urn:nbn:nl:ui:27-zz29-r6"
        );
    }
}
