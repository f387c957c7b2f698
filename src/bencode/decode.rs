use super::error::BencodeError;
use super::value::Value;
use bytes::Bytes;
use std::collections::BTreeMap;

const MAX_DEPTH: usize = 64;

/// Decodes a single canonical bencode value spanning all of `data`.
///
/// # Examples
///
/// ```
/// use mktorrent::bencode::{decode, Value};
///
/// let value = decode(b"d8:announce9:http://t1e").unwrap();
/// assert_eq!(value.get(b"announce").and_then(Value::as_str), Some("http://t1"));
///
/// assert!(decode(b"i03e").is_err());
/// assert!(decode(b"d1:bi1e1:ai2ee").is_err());
/// ```
pub fn decode(data: &[u8]) -> Result<Value, BencodeError> {
    let mut decoder = Decoder { data, pos: 0 };
    let value = decoder.value(0)?;

    if decoder.pos != data.len() {
        return Err(BencodeError::TrailingData);
    }

    Ok(value)
}

struct Decoder<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Decoder<'_> {
    fn peek(&self) -> Result<u8, BencodeError> {
        self.data
            .get(self.pos)
            .copied()
            .ok_or(BencodeError::UnexpectedEof(self.pos))
    }

    fn value(&mut self, depth: usize) -> Result<Value, BencodeError> {
        if depth > MAX_DEPTH {
            return Err(BencodeError::NestingTooDeep);
        }

        match self.peek()? {
            b'i' => self.integer(),
            b'l' => self.list(depth),
            b'd' => self.dict(depth),
            b'0'..=b'9' => self.bytes().map(Value::Bytes),
            c => Err(BencodeError::UnexpectedChar {
                ch: c as char,
                pos: self.pos,
            }),
        }
    }

    /// Advances past the next occurrence of `delim` and returns the bytes before it.
    fn until(&mut self, delim: u8) -> Result<&[u8], BencodeError> {
        let start = self.pos;
        let offset = self.data[start..]
            .iter()
            .position(|&b| b == delim)
            .ok_or(BencodeError::UnexpectedEof(self.data.len()))?;
        self.pos = start + offset + 1;
        Ok(&self.data[start..start + offset])
    }

    fn integer(&mut self) -> Result<Value, BencodeError> {
        self.pos += 1;
        let digits = self.until(b'e')?;

        let text = std::str::from_utf8(digits)
            .map_err(|_| BencodeError::InvalidInteger("invalid utf8".into()))?;

        if text.is_empty() {
            return Err(BencodeError::InvalidInteger("empty".into()));
        }

        let unsigned = text.strip_prefix('-').unwrap_or(text);
        if unsigned.is_empty() || !unsigned.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BencodeError::InvalidInteger(text.into()));
        }
        if text == "-0" || (unsigned.starts_with('0') && unsigned.len() > 1) {
            return Err(BencodeError::InvalidInteger(format!("leading zeros: {text}")));
        }

        text.parse()
            .map(Value::Integer)
            .map_err(|_| BencodeError::InvalidInteger(text.into()))
    }

    fn bytes(&mut self) -> Result<Bytes, BencodeError> {
        let start = self.pos;
        let len_digits = self.until(b':')?;

        if len_digits.is_empty()
            || !len_digits.iter().all(u8::is_ascii_digit)
            || (len_digits[0] == b'0' && len_digits.len() > 1)
        {
            return Err(BencodeError::InvalidStringLength(start));
        }

        let len: usize = std::str::from_utf8(len_digits)
            .ok()
            .and_then(|s| s.parse().ok())
            .ok_or(BencodeError::InvalidStringLength(start))?;

        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.data.len())
            .ok_or(BencodeError::UnexpectedEof(self.data.len()))?;

        let bytes = Bytes::copy_from_slice(&self.data[self.pos..end]);
        self.pos = end;
        Ok(bytes)
    }

    fn list(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut items = Vec::new();

        while self.peek()? != b'e' {
            items.push(self.value(depth + 1)?);
        }

        self.pos += 1;
        Ok(Value::List(items))
    }

    fn dict(&mut self, depth: usize) -> Result<Value, BencodeError> {
        self.pos += 1;
        let mut entries: BTreeMap<Bytes, Value> = BTreeMap::new();

        while self.peek()? != b'e' {
            let key_pos = self.pos;
            if !self.peek()?.is_ascii_digit() {
                return Err(BencodeError::UnexpectedChar {
                    ch: self.data[key_pos] as char,
                    pos: key_pos,
                });
            }
            let key = self.bytes()?;

            // Canonical dictionaries are strictly ascending.
            if entries.last_key_value().is_some_and(|(last, _)| *last >= key) {
                return Err(BencodeError::UnsortedKeys(key_pos));
            }

            let value = self.value(depth + 1)?;
            entries.insert(key, value);
        }

        self.pos += 1;
        Ok(Value::Dict(entries))
    }
}
