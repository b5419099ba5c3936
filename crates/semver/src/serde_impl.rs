//! Text (de)serialization: a `Version` is written as its canonical string
//! and read back through the parser.

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};

use crate::parser;
use crate::version::Version;

impl Serialize for Version {
    #[inline]
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Version {
    #[inline]
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        parser::parse(&value).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_as_string() {
        let v = Version::from_parts(1, 2, 3, "preRelease", "build");
        assert_eq!(
            serde_json::to_string(&v).unwrap(),
            "\"1.2.3-preRelease+build\""
        );
        assert_eq!(serde_json::to_string(&Version::default()).unwrap(), "\"0.0.0\"");
    }

    #[test]
    fn test_deserialize_parses() {
        let v: Version = serde_json::from_str("\"1.2.3-alpha+-\"").unwrap();
        assert_eq!(v, Version::from_parts(1, 2, 3, "alpha", "-"));
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        for text in [
            r#""""#,
            r#"" ""#,
            r#"".""#,
            r#""..""#,
            r#""1..3""#,
            r#""1.2.3-""#,
            r#""1.2.3+""#,
            r#""1.2.3-+""#,
        ] {
            let err = serde_json::from_str::<Version>(text).unwrap_err();
            assert!(err.to_string().contains("malformed semver"), "{text}: {err}");
        }
        assert!(serde_json::from_str::<Version>("123").is_err());
        assert!(serde_json::from_str::<Version>("null").is_err());
    }
}
