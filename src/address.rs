//! Bech32 address re-encoding
//!
//! Cosmos SDK chains share key material but differ in their bech32
//! human-readable prefix, so one account maps to a different address string
//! on every chain. Conversion decodes the source address (validating its
//! checksum), unpacks the 5-bit payload to bytes, and repacks those bytes
//! under the destination prefix with a fresh checksum.

use bech32::{self, FromBase32, ToBase32, Variant};

/// Failures while re-encoding an address for a target chain
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("invalid bech32 encoding: {0}")]
    InvalidEncoding(#[from] bech32::Error),
    #[error("bech32m addresses are not valid Cosmos account addresses")]
    UnsupportedVariant,
}

/// Re-encode `address` under `target_prefix`
///
/// Lossless: converting to a prefix and back reproduces the original
/// address exactly.
pub fn convert_address(address: &str, target_prefix: &str) -> Result<String, ConvertError> {
    let (_hrp, data, variant) = bech32::decode(address)?;
    if variant != Variant::Bech32 {
        return Err(ConvertError::UnsupportedVariant);
    }
    let bytes = Vec::<u8>::from_base32(&data)?;
    let converted = bech32::encode(target_prefix, bytes.to_base32(), Variant::Bech32)?;
    Ok(converted)
}

#[cfg(test)]
mod tests {
    use super::*;

    const COSMOS_ADDR: &str = "cosmos1hsk6jryyqjfhp5dhc55tc9jtckygx0eph6dd02";

    #[test]
    fn test_convert_to_osmosis_prefix() {
        let converted = convert_address(COSMOS_ADDR, "osmo").unwrap();
        assert!(converted.starts_with("osmo1"));
        assert_ne!(converted, COSMOS_ADDR);
    }

    #[test]
    fn test_round_trip_reproduces_original() {
        let osmo = convert_address(COSMOS_ADDR, "osmo").unwrap();
        let back = convert_address(&osmo, "cosmos").unwrap();
        assert_eq!(back, COSMOS_ADDR);
    }

    #[test]
    fn test_corrupted_checksum_is_rejected() {
        // Flip the final character so the checksum no longer matches
        let mut corrupted = COSMOS_ADDR.to_string();
        corrupted.pop();
        corrupted.push('3');
        assert!(matches!(
            convert_address(&corrupted, "osmo"),
            Err(ConvertError::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_non_bech32_input_is_rejected() {
        assert!(convert_address("0x28c6c06298d514db089934071355e5743bf21d60", "osmo").is_err());
        assert!(convert_address("", "osmo").is_err());
    }

    #[test]
    fn test_same_prefix_is_identity() {
        let same = convert_address(COSMOS_ADDR, "cosmos").unwrap();
        assert_eq!(same, COSMOS_ADDR);
    }
}
