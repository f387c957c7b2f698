use super::error::BencodeError;
use super::value::Value;
use std::io::Write;

/// Encodes a value into a freshly allocated buffer.
///
/// Dictionary keys come out in ascending byte order because [`Value::Dict`]
/// is backed by a `BTreeMap`.
///
/// # Examples
///
/// ```
/// use mktorrent::bencode::{encode, Value};
///
/// let tier = Value::List(vec![Value::string("http://t1")]);
/// assert_eq!(encode(&tier).unwrap(), b"l9:http://t1e");
/// ```
pub fn encode(value: &Value) -> Result<Vec<u8>, BencodeError> {
    let mut buf = Vec::new();
    encode_to(value, &mut buf)?;
    Ok(buf)
}

/// Streams the canonical encoding of `value` into `writer`.
///
/// Used to write metainfo straight into the output file without building
/// the whole encoding in memory first.
pub fn encode_to<W: Write>(value: &Value, writer: &mut W) -> Result<(), BencodeError> {
    match value {
        Value::Integer(i) => {
            write!(writer, "i{}e", i)?;
        }
        Value::Bytes(b) => write_bytes(b, writer)?,
        Value::List(items) => {
            writer.write_all(b"l")?;
            for item in items {
                encode_to(item, writer)?;
            }
            writer.write_all(b"e")?;
        }
        Value::Dict(entries) => {
            writer.write_all(b"d")?;
            for (key, val) in entries {
                write_bytes(key, writer)?;
                encode_to(val, writer)?;
            }
            writer.write_all(b"e")?;
        }
    }
    Ok(())
}

fn write_bytes<W: Write>(bytes: &[u8], writer: &mut W) -> Result<(), BencodeError> {
    write!(writer, "{}:", bytes.len())?;
    writer.write_all(bytes)?;
    Ok(())
}
