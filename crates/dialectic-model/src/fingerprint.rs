//! Content fingerprints for frameworks
//!
//! A [`Fingerprint`] is a BLAKE3 digest over the arguments and attacks of a
//! framework, in input order. Identical content gives identical fingerprints,
//! so derived results can be keyed by it.

use crate::argument::Argument;
use crate::attack::Attack;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// A 32-byte content digest (Blake3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fingerprint([u8; 32]);

impl Fingerprint {
    /// Wrap raw bytes
    #[inline]
    #[must_use]
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Digest the content of a framework
    #[must_use]
    pub fn of(arguments: &[Argument], attacks: &[Attack]) -> Self {
        let mut hasher = blake3::Hasher::new();

        hasher.update(b"arguments");
        write_len(&mut hasher, arguments.len());
        for arg in arguments {
            write_str(&mut hasher, arg.id.as_str());
            write_str(&mut hasher, arg.agent_id.as_str());
            write_str(&mut hasher, &arg.claim);
            write_len(&mut hasher, arg.premises.len());
            for premise in &arg.premises {
                write_str(&mut hasher, premise);
            }
            write_str(&mut hasher, &arg.conclusion);
            write_str(&mut hasher, arg.strength.as_str());
        }

        hasher.update(b"attacks");
        write_len(&mut hasher, attacks.len());
        for attack in attacks {
            write_str(&mut hasher, attack.id.as_str());
            write_str(&mut hasher, attack.attacker_id.as_str());
            write_str(&mut hasher, attack.target_id.as_str());
            write_str(&mut hasher, attack.attack_type.as_str());
            write_str(&mut hasher, &attack.reason);
            match attack.target_premise {
                Some(index) => {
                    hasher.update(&[1]);
                    write_len(&mut hasher, index);
                }
                None => {
                    hasher.update(&[0]);
                }
            }
        }

        Self(*hasher.finalize().as_bytes())
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

fn write_len(hasher: &mut blake3::Hasher, len: usize) {
    hasher.update(&(len as u64).to_le_bytes());
}

fn write_str(hasher: &mut blake3::Hasher, value: &str) {
    write_len(hasher, value.len());
    hasher.update(value.as_bytes());
}

impl Display for Fingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let arr: [u8; 32] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| FingerprintError::InvalidLength {
                expected: 32,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }
}

impl serde::Serialize for Fingerprint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Fingerprint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors parsing a fingerprint
#[derive(Debug, thiserror::Error)]
pub enum FingerprintError {
    /// Wrong number of bytes
    #[error("invalid fingerprint length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required byte count
        expected: usize,
        /// Decoded byte count
        actual: usize,
    },

    /// Not hex
    #[error("hex decode error: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::AttackType;

    fn sample() -> (Vec<Argument>, Vec<Attack>) {
        (
            vec![Argument::new("A", "x", "a"), Argument::new("B", "y", "b")],
            vec![Attack::new("k", "A", "B", AttackType::Rebut)],
        )
    }

    #[test]
    fn deterministic() {
        let (args, attacks) = sample();
        assert_eq!(Fingerprint::of(&args, &attacks), Fingerprint::of(&args, &attacks));
    }

    #[test]
    fn sensitive_to_attack_content() {
        let (args, attacks) = sample();
        let mut retyped = attacks.clone();
        retyped[0].attack_type = AttackType::Undercut;
        assert_ne!(Fingerprint::of(&args, &attacks), Fingerprint::of(&args, &retyped));
    }

    #[test]
    fn field_boundaries_are_unambiguous() {
        let a = vec![Argument::new("AB", "x", "c")];
        let b = vec![Argument::new("A", "Bx", "c")];
        assert_ne!(Fingerprint::of(&a, &[]), Fingerprint::of(&b, &[]));
    }

    #[test]
    fn display_parse_and_short() {
        let (args, attacks) = sample();
        let fp = Fingerprint::of(&args, &attacks);
        let parsed: Fingerprint = fp.to_string().parse().unwrap();
        assert_eq!(parsed, fp);
        assert_eq!(fp.short().len(), 16);
        assert!(fp.to_string().starts_with(&fp.short()));
    }

    #[test]
    fn parse_rejects_wrong_length() {
        let err = "abcd".parse::<Fingerprint>().unwrap_err();
        assert!(matches!(err, FingerprintError::InvalidLength { expected: 32, actual: 2 }));
    }

    #[test]
    fn serde_as_hex_string() {
        let fp = Fingerprint::new([7u8; 32]);
        let json = serde_json::to_string(&fp).unwrap();
        assert_eq!(json.len(), 66);
        let back: Fingerprint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fp);
    }
}
