//! MessagePack map encoding, fields in declaration order.
//!
//! Integers take the smallest form that holds them; floats are always
//! `float64`. Multi-byte headers and payloads are big-endian.

use crate::encoding::ensure_unique;
use crate::error::{EncodingError, Result};
use crate::types::{Row, Scalar};

use super::RowFormat;

const NIL: u8 = 0xc0;
const FALSE: u8 = 0xc2;
const TRUE: u8 = 0xc3;
const FLOAT64: u8 = 0xcb;
const UINT8: u8 = 0xcc;
const UINT16: u8 = 0xcd;
const UINT32: u8 = 0xce;
const UINT64: u8 = 0xcf;
const INT8: u8 = 0xd0;
const INT16: u8 = 0xd1;
const INT32: u8 = 0xd2;
const INT64: u8 = 0xd3;
const STR8: u8 = 0xd9;
const STR16: u8 = 0xda;
const STR32: u8 = 0xdb;
const MAP16: u8 = 0xde;
const MAP32: u8 = 0xdf;
const FIXSTR: u8 = 0xa0;
const FIXMAP: u8 = 0x80;

pub struct MessagePack;

impl RowFormat for MessagePack {
    fn name(&self) -> &'static str {
        "msgpack"
    }

    fn encode(&self, row: &Row) -> Result<Vec<u8>> {
        ensure_unique(row.names())?;

        let mut out = Vec::with_capacity(row.len() * 12 + 5);
        write_map_header(&mut out, row.len())?;
        for field in row.fields() {
            write_str(&mut out, field.name())?;
            write_scalar(&mut out, field.value())?;
        }
        Ok(out)
    }
}

fn write_scalar(out: &mut Vec<u8>, value: &Scalar) -> Result<()> {
    match value {
        Scalar::Null => out.push(NIL),
        Scalar::Bool(false) => out.push(FALSE),
        Scalar::Bool(true) => out.push(TRUE),
        Scalar::Int(v) => write_int(out, *v),
        Scalar::Float(v) => {
            out.push(FLOAT64);
            out.extend_from_slice(&v.to_be_bytes());
        }
        Scalar::Text(s) => write_str(out, s)?,
    }
    Ok(())
}

fn write_int(out: &mut Vec<u8>, v: i64) {
    if v >= 0 {
        let u = v as u64;
        if u <= 0x7f {
            out.push(u as u8);
        } else if u <= u8::MAX as u64 {
            out.extend_from_slice(&[UINT8, u as u8]);
        } else if u <= u16::MAX as u64 {
            out.push(UINT16);
            out.extend_from_slice(&(u as u16).to_be_bytes());
        } else if u <= u32::MAX as u64 {
            out.push(UINT32);
            out.extend_from_slice(&(u as u32).to_be_bytes());
        } else {
            out.push(UINT64);
            out.extend_from_slice(&u.to_be_bytes());
        }
    } else if v >= -32 {
        out.push(v as i8 as u8);
    } else if v >= i8::MIN as i64 {
        out.extend_from_slice(&[INT8, v as i8 as u8]);
    } else if v >= i16::MIN as i64 {
        out.push(INT16);
        out.extend_from_slice(&(v as i16).to_be_bytes());
    } else if v >= i32::MIN as i64 {
        out.push(INT32);
        out.extend_from_slice(&(v as i32).to_be_bytes());
    } else {
        out.push(INT64);
        out.extend_from_slice(&v.to_be_bytes());
    }
}

fn write_str(out: &mut Vec<u8>, s: &str) -> Result<()> {
    let len = s.len();
    if len < 32 {
        out.push(FIXSTR | len as u8);
    } else if len <= u8::MAX as usize {
        out.extend_from_slice(&[STR8, len as u8]);
    } else if len <= u16::MAX as usize {
        out.push(STR16);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(STR32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodingError::ValueTooLarge { what: "string", len });
    }
    out.extend_from_slice(s.as_bytes());
    Ok(())
}

fn write_map_header(out: &mut Vec<u8>, len: usize) -> Result<()> {
    if len < 16 {
        out.push(FIXMAP | len as u8);
    } else if len <= u16::MAX as usize {
        out.push(MAP16);
        out.extend_from_slice(&(len as u16).to_be_bytes());
    } else if let Ok(len) = u32::try_from(len) {
        out.push(MAP32);
        out.extend_from_slice(&len.to_be_bytes());
    } else {
        return Err(EncodingError::ValueTooLarge { what: "map", len });
    }
    Ok(())
}
