use crate::arg_parse_err::ArgParseErr;
use std::{ffi::OsStr, fmt::Display, str::FromStr};

use strum::{EnumString, IntoStaticStr, VariantArray};

/// Formula used to collapse the three color channels into one.
#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Approach {
    /// ITU-R BT.709 weights applied directly to the stored values
    #[strum(to_string = "linear", serialize = "l")]
    Linear,
    /// Legacy NTSC weights applied directly to the stored values
    #[strum(to_string = "linear_approx", serialize = "la")]
    LinearApprox,
    /// BT.709 weights applied in linear light, then re-encoded as sRGB
    #[strum(to_string = "gamma_decomp", serialize = "gd")]
    GammaDecomp,
}

impl Approach {
    /// Long name accepted on the command line
    pub fn name(&self) -> &'static str {
        self.into()
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            Approach::Linear => "l",
            Approach::LinearApprox => "la",
            Approach::GammaDecomp => "gd",
        }
    }

    /// Appended to the input file stem to name the output
    pub fn file_suffix(&self) -> &'static str {
        match self {
            Approach::Linear => "_linear",
            Approach::LinearApprox => "_linearApprox",
            Approach::GammaDecomp => "_gammaDecompressed",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Approach::Linear => "Y = 0.2126 R + 0.7152 G + 0.0722 B",
            Approach::LinearApprox => "Y = 0.299 R + 0.587 G + 0.114 B",
            Approach::GammaDecomp => "BT.709 weights in linear light, sRGB re-encoded",
        }
    }
}

impl Display for Approach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<&OsStr> for Approach {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        let string: &str = s
            .to_str()
            .ok_or_else(|| ArgParseErr::with_msg("non-utf8 greyscale approach"))?;
        <Self as FromStr>::from_str(string)
            .map_err(|_| ArgParseErr::with_msg("unknown greyscale approach"))
    }
}

#[cfg(test)]
mod tests {
    use super::Approach;
    use std::ffi::OsStr;
    use strum::VariantArray;

    fn parse(s: &str) -> Result<Approach, crate::arg_parse_err::ArgParseErr> {
        Approach::try_from(OsStr::new(s))
    }

    #[test]
    fn test_long_and_short_aliases() {
        assert_eq!(parse("linear"), Ok(Approach::Linear));
        assert_eq!(parse("l"), Ok(Approach::Linear));
        assert_eq!(parse("linear_approx"), Ok(Approach::LinearApprox));
        assert_eq!(parse("la"), Ok(Approach::LinearApprox));
        assert_eq!(parse("gamma_decomp"), Ok(Approach::GammaDecomp));
        assert_eq!(parse("gd"), Ok(Approach::GammaDecomp));
    }

    #[test]
    fn test_case_sensitive() {
        assert!(parse("Linear").is_err());
        assert!(parse("GD").is_err());
    }

    #[test]
    fn test_invalid() {
        assert!(parse("💥 non-asccii").is_err());
        assert!(parse("").is_err());
        assert!(parse("bogus").is_err());
        assert!(parse("linear ").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8() {
        use std::os::unix::ffi::OsStrExt;
        let err = Approach::try_from(OsStr::from_bytes(&[b'l', 0xff])).unwrap_err();
        assert_eq!(err.message.as_deref(), Some("non-utf8 greyscale approach"));
    }

    #[test]
    fn test_names_roundtrip() {
        for approach in Approach::VARIANTS {
            assert_eq!(parse(approach.name()), Ok(*approach));
            assert_eq!(parse(approach.short_name()), Ok(*approach));
        }
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(Approach::Linear.file_suffix(), "_linear");
        assert_eq!(Approach::LinearApprox.file_suffix(), "_linearApprox");
        assert_eq!(Approach::GammaDecomp.file_suffix(), "_gammaDecompressed");
    }
}
