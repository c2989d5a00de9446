//! Structure NBT inspection.
//!
//! Reads a (usually gzip-compressed) structure `.nbt` file, parses the
//! big-endian tag tree and renders it as JSON. The primitive array tags
//! are summarized by length instead of dumped; lists and compounds stay
//! real JSON so palette and entity counts remain visible.

use crate::error::{PackError, Result};
use flate2::read::GzDecoder;
use serde_json::{json, Map, Value};
use std::fs;
use std::io::Read;
use std::path::Path;

const TAG_END: u8 = 0;
const TAG_BYTE: u8 = 1;
const TAG_SHORT: u8 = 2;
const TAG_INT: u8 = 3;
const TAG_LONG: u8 = 4;
const TAG_FLOAT: u8 = 5;
const TAG_DOUBLE: u8 = 6;
const TAG_BYTE_ARRAY: u8 = 7;
const TAG_STRING: u8 = 8;
const TAG_LIST: u8 = 9;
const TAG_COMPOUND: u8 = 10;
const TAG_INT_ARRAY: u8 = 11;
const TAG_LONG_ARRAY: u8 = 12;

const MAX_DEPTH: u32 = 512;

/// Parsed structure file with the fields worth a one-line summary.
#[derive(Debug)]
pub struct StructureInfo {
    /// Name of the root tag, usually empty.
    pub root_name: String,
    pub data_version: Option<i64>,
    /// `size` triple when the root carries one.
    pub size: Option<Vec<i64>>,
    pub palette_count: Option<usize>,
    pub entity_count: Option<usize>,
    /// Whole tree as JSON.
    pub data: Value,
}

/// Read and parse a structure NBT file. Plain (uncompressed) NBT is
/// accepted when the gzip magic is absent.
pub fn read_structure(path: &Path) -> Result<StructureInfo> {
    if !path.exists() {
        return Err(PackError::NotFound {
            path: path.display().to_string(),
        });
    }
    let raw = fs::read(path)?;
    let bytes = if raw.starts_with(&[0x1f, 0x8b]) {
        let mut out = Vec::new();
        GzDecoder::new(raw.as_slice())
            .read_to_end(&mut out)
            .map_err(|e| PackError::parse(path, format!("gzip: {}", e)))?;
        out
    } else {
        raw
    };

    let (root_name, data) = parse_root(&bytes).map_err(|msg| PackError::parse(path, msg))?;
    tracing::debug!(path = %path.display(), root = %root_name, "parsed structure nbt");

    let data_version = data.get("DataVersion").and_then(Value::as_i64);
    let size = data.get("size").and_then(Value::as_array).map(|list| {
        list.iter()
            .filter_map(Value::as_i64)
            .collect::<Vec<i64>>()
    });
    let palette_count = data
        .get("palette")
        .and_then(Value::as_array)
        .map(Vec::len);
    let entity_count = data
        .get("entities")
        .and_then(Value::as_array)
        .map(Vec::len);

    Ok(StructureInfo {
        root_name,
        data_version,
        size,
        palette_count,
        entity_count,
        data,
    })
}

/// Header lines the CLI prints above the JSON dump.
pub fn summary_lines(info: &StructureInfo) -> Vec<String> {
    let mut lines = Vec::new();
    let root = if info.root_name.is_empty() {
        "(unnamed)"
    } else {
        &info.root_name
    };
    lines.push(format!("root: {}", root));
    if let Some(v) = info.data_version {
        lines.push(format!("DataVersion: {}", v));
    }
    if let Some(size) = &info.size {
        let dims = size
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" x ");
        lines.push(format!("size: {}", dims));
    }
    if let Some(n) = info.palette_count {
        lines.push(format!("palette: {} block state(s)", n));
    }
    if let Some(n) = info.entity_count {
        lines.push(format!("entities: {}", n));
    }
    lines
}

struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

type ParseResult<T> = std::result::Result<T, String>;

impl<'a> Reader<'a> {
    fn take(&mut self, n: usize) -> ParseResult<&'a [u8]> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| "unexpected end of data".to_string())?;
        let slice = &self.buf[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn u8(&mut self) -> ParseResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn i16(&mut self) -> ParseResult<i16> {
        let mut b = [0u8; 2];
        b.copy_from_slice(self.take(2)?);
        Ok(i16::from_be_bytes(b))
    }

    fn i32(&mut self) -> ParseResult<i32> {
        let mut b = [0u8; 4];
        b.copy_from_slice(self.take(4)?);
        Ok(i32::from_be_bytes(b))
    }

    fn i64(&mut self) -> ParseResult<i64> {
        let mut b = [0u8; 8];
        b.copy_from_slice(self.take(8)?);
        Ok(i64::from_be_bytes(b))
    }

    fn f32(&mut self) -> ParseResult<f32> {
        let mut b = [0u8; 4];
        b.copy_from_slice(self.take(4)?);
        Ok(f32::from_be_bytes(b))
    }

    fn f64(&mut self) -> ParseResult<f64> {
        let mut b = [0u8; 8];
        b.copy_from_slice(self.take(8)?);
        Ok(f64::from_be_bytes(b))
    }

    fn string(&mut self) -> ParseResult<String> {
        let mut b = [0u8; 2];
        b.copy_from_slice(self.take(2)?);
        let len = u16::from_be_bytes(b) as usize;
        Ok(String::from_utf8_lossy(self.take(len)?).into_owned())
    }

    fn length(&mut self) -> ParseResult<usize> {
        let n = self.i32()?;
        usize::try_from(n).map_err(|_| format!("negative length: {}", n))
    }
}

fn parse_root(bytes: &[u8]) -> ParseResult<(String, Value)> {
    let mut r = Reader { buf: bytes, pos: 0 };
    let tag = r.u8()?;
    if tag != TAG_COMPOUND {
        return Err(format!("root tag must be a compound, got type {}", tag));
    }
    let name = r.string()?;
    let value = payload(&mut r, TAG_COMPOUND, 0)?;
    Ok((name, value))
}

fn float_value(v: f64) -> Value {
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

fn payload(r: &mut Reader, tag: u8, depth: u32) -> ParseResult<Value> {
    if depth > MAX_DEPTH {
        return Err("tag nesting too deep".to_string());
    }
    match tag {
        TAG_BYTE => Ok(json!(r.u8()? as i8)),
        TAG_SHORT => Ok(json!(r.i16()?)),
        TAG_INT => Ok(json!(r.i32()?)),
        TAG_LONG => Ok(json!(r.i64()?)),
        TAG_FLOAT => Ok(float_value(r.f32()? as f64)),
        TAG_DOUBLE => Ok(float_value(r.f64()?)),
        TAG_BYTE_ARRAY => {
            let n = r.length()?;
            r.take(n)?;
            Ok(json!(format!("<{} bytes>", n)))
        }
        TAG_STRING => Ok(json!(r.string()?)),
        TAG_LIST => {
            let elem = r.u8()?;
            let n = r.length()?;
            if elem == TAG_END && n > 0 {
                return Err("non-empty list of end tags".to_string());
            }
            let mut list = Vec::with_capacity(n.min(1024));
            for _ in 0..n {
                list.push(payload(r, elem, depth + 1)?);
            }
            Ok(Value::Array(list))
        }
        TAG_COMPOUND => {
            let mut map = Map::new();
            loop {
                let tag = r.u8()?;
                if tag == TAG_END {
                    break;
                }
                let name = r.string()?;
                let value = payload(r, tag, depth + 1)?;
                map.insert(name, value);
            }
            Ok(Value::Object(map))
        }
        TAG_INT_ARRAY => {
            let n = r.length()?;
            r.take(n.checked_mul(4).ok_or("length overflow")?)?;
            Ok(json!(format!("<{} ints>", n)))
        }
        TAG_LONG_ARRAY => {
            let n = r.length()?;
            r.take(n.checked_mul(8).ok_or("length overflow")?)?;
            Ok(json!(format!("<{} longs>", n)))
        }
        TAG_END => Err("unexpected end tag".to_string()),
        other => Err(format!("unknown tag type {}", other)),
    }
}
