//! EIP-55 checksum addresses.
//!
//! Input is accepted in any letter case (with or without the `0x` prefix);
//! output is always the canonical mixed-case form.

use alloy_primitives::Address;
use std::str::FromStr;

use crate::error::AbiError;

/// Parse a 20-byte hex address.
pub fn checksum(input: &str) -> Result<Address, AbiError> {
    let trimmed = input.trim();
    let hex = trimmed.strip_prefix("0x").unwrap_or(trimmed);
    if hex.len() != 40 {
        return Err(AbiError::InvalidAddress {
            input: input.to_string(),
        });
    }
    Address::from_str(hex).map_err(|_| AbiError::InvalidAddress {
        input: input.to_string(),
    })
}

/// Render an address in EIP-55 mixed-case form.
pub fn to_checksum(addr: &Address) -> String {
    addr.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_input_renders_checksummed() {
        let addr = checksum("0xd8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap();
        assert_eq!(
            to_checksum(&addr),
            "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
        );
    }

    #[test]
    fn case_does_not_change_identity() {
        let a = checksum("0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045").unwrap();
        let b = checksum("d8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_wrong_length_and_non_hex() {
        assert!(checksum("0xabc").is_err());
        assert!(checksum("0xzz8da6bf26964af9d7eed9e03e53415d37aa9604").is_err());
        assert!(checksum("").is_err());
    }
}
