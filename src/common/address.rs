//! TON account address handling.
//!
//! Addresses circulate in two renderings: the raw form `workchain:hex64`
//! used by indexer APIs, and the 48-character user-friendly form
//! (tag + workchain + hash + crc16, base64 or base64url). Both parse into
//! the same value type, so a raw address coming back from the indexer
//! compares equal to a friendly address supplied by a caller.

use std::fmt;
use std::str::FromStr;

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};

use crate::error::TradeError;

/// Friendly-form tag for a bounceable address.
const TAG_BOUNCEABLE: u8 = 0x11;
/// Friendly-form tag for a non-bounceable address.
const TAG_NON_BOUNCEABLE: u8 = 0x51;
/// Testnet-only flag, OR-ed into the tag byte.
const FLAG_TESTNET: u8 = 0x80;

/// A TON account address: workchain id plus 32-byte account hash.
///
/// Equality and hashing ignore the rendering the address was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TonAddress {
    pub workchain: i8,
    pub hash: [u8; 32],
}

impl TonAddress {
    pub fn new(workchain: i8, hash: [u8; 32]) -> Self {
        Self { workchain, hash }
    }

    /// Parses either rendering. Raw form is detected by the `:` separator.
    pub fn parse(s: &str) -> Result<Self, TradeError> {
        if s.contains(':') { Self::parse_raw(s) } else { Self::parse_friendly(s) }
    }

    /// Parses the raw form, e.g. `0:3f5c...` (64 hex digits).
    pub fn parse_raw(s: &str) -> Result<Self, TradeError> {
        let (wc, hash_hex) = s
            .split_once(':')
            .ok_or_else(|| TradeError::InvalidAddress(format!("missing workchain separator: {s}")))?;
        let workchain = wc
            .parse::<i8>()
            .map_err(|_| TradeError::InvalidAddress(format!("bad workchain id: {s}")))?;
        let bytes = hex::decode(hash_hex)
            .map_err(|_| TradeError::InvalidAddress(format!("bad account hash hex: {s}")))?;
        let hash: [u8; 32] = bytes
            .try_into()
            .map_err(|_| TradeError::InvalidAddress(format!("account hash must be 32 bytes: {s}")))?;
        Ok(Self { workchain, hash })
    }

    /// Parses the user-friendly form (base64 or base64url, 48 characters).
    pub fn parse_friendly(s: &str) -> Result<Self, TradeError> {
        if s.len() != 48 {
            return Err(TradeError::InvalidAddress(format!(
                "friendly address must be 48 characters: {s}"
            )));
        }
        let bytes = if s.contains('-') || s.contains('_') {
            URL_SAFE_NO_PAD.decode(s)
        } else {
            STANDARD_NO_PAD.decode(s)
        }
        .map_err(|_| TradeError::InvalidAddress(format!("bad base64: {s}")))?;
        if bytes.len() != 36 {
            return Err(TradeError::InvalidAddress(format!("friendly address must decode to 36 bytes: {s}")));
        }

        let tag = bytes[0] & !FLAG_TESTNET;
        if tag != TAG_BOUNCEABLE && tag != TAG_NON_BOUNCEABLE {
            return Err(TradeError::InvalidAddress(format!("unknown address tag {:#04x}: {s}", bytes[0])));
        }

        let expected = crc16_xmodem(&bytes[..34]);
        let actual = u16::from_be_bytes([bytes[34], bytes[35]]);
        if expected != actual {
            return Err(TradeError::InvalidAddress(format!("checksum mismatch: {s}")));
        }

        let workchain = bytes[1] as i8;
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&bytes[2..34]);
        Ok(Self { workchain, hash })
    }

    /// Raw rendering, `workchain:hex64`.
    pub fn to_raw(&self) -> String {
        format!("{}:{}", self.workchain, hex::encode(self.hash))
    }

    /// User-friendly base64url rendering.
    pub fn to_friendly(&self, bounceable: bool, testnet: bool) -> String {
        let mut tag = if bounceable { TAG_BOUNCEABLE } else { TAG_NON_BOUNCEABLE };
        if testnet {
            tag |= FLAG_TESTNET;
        }
        let mut bytes = [0u8; 36];
        bytes[0] = tag;
        bytes[1] = self.workchain as u8;
        bytes[2..34].copy_from_slice(&self.hash);
        let crc = crc16_xmodem(&bytes[..34]);
        bytes[34..36].copy_from_slice(&crc.to_be_bytes());
        URL_SAFE_NO_PAD.encode(bytes)
    }
}

impl fmt::Display for TonAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_raw())
    }
}

impl FromStr for TonAddress {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// CRC-16/XMODEM, the checksum used by friendly addresses.
fn crc16_xmodem(data: &[u8]) -> u16 {
    let mut crc: u16 = 0;
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            crc = if crc & 0x8000 != 0 { (crc << 1) ^ 0x1021 } else { crc << 1 };
        }
    }
    crc
}
