//! # Row Formats
//!
//! The same [`Row`] can be written in several self-describing formats. The
//! FlexBuffers map is the primary one; the others exist so callers can pick
//! a wire format and compare sizes.
//!
//! | Format | Key order | Field access without full parse |
//! |--------|-----------|---------------------------------|
//! | `flex` | sorted | yes, binary search on keys |
//! | `msgpack` | declaration | no |
//! | `cbor` | declaration | no |
//! | `json` | declaration | no |
//!
//! Every format rejects duplicate field names before writing. CBOR and JSON
//! go through serde via a borrowed map view of the row (`serde_row`).

mod cbor;
mod json;
mod msgpack;
mod serde_row;

pub use cbor::Cbor;
pub use json::{compare_with_json, encode_json_string, Json, SizeComparison};
pub use msgpack::MessagePack;

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::error::Result;
use crate::types::Row;

pub trait RowFormat {
    fn name(&self) -> &'static str;

    fn encode(&self, row: &Row) -> Result<Vec<u8>>;
}

pub struct FlexBuffers;

impl RowFormat for FlexBuffers {
    fn name(&self) -> &'static str {
        "flex"
    }

    fn encode(&self, row: &Row) -> Result<Vec<u8>> {
        crate::flex::encode_row(row)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Flex,
    MessagePack,
    Cbor,
    Json,
}

impl Format {
    pub const ALL: [Format; 4] = [Format::Flex, Format::MessagePack, Format::Cbor, Format::Json];

    pub fn encoder(self) -> &'static dyn RowFormat {
        match self {
            Format::Flex => &FlexBuffers,
            Format::MessagePack => &MessagePack,
            Format::Cbor => &Cbor,
            Format::Json => &Json,
        }
    }

    pub fn name(self) -> &'static str {
        self.encoder().name()
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown format {0:?}, expected one of: flex, msgpack, cbor, json")]
pub struct UnknownFormat(pub String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flex" | "flexbuffers" => Ok(Format::Flex),
            "msgpack" | "messagepack" => Ok(Format::MessagePack),
            "cbor" => Ok(Format::Cbor),
            "json" => Ok(Format::Json),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}
