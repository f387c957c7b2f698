//! Canonical bencode encoding and decoding ([BEP-3]).
//!
//! Metainfo files are stored in bencode, a length-prefixed format whose
//! dictionaries are sorted by key. Encoding a [`Value`] always produces the
//! canonical form, so two equal values always encode to the same bytes.
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! The decoder is strict: it rejects leading zeros, `-0`, unsorted or
//! duplicate dictionary keys and trailing bytes, so anything it accepts
//! re-encodes to exactly the input.
//!
//! # Examples
//!
//! ```
//! use mktorrent::bencode::{decode, encode, Value};
//! use bytes::Bytes;
//! use std::collections::BTreeMap;
//!
//! let mut dict = BTreeMap::new();
//! dict.insert(Bytes::from_static(b"piece length"), Value::Integer(262144));
//! dict.insert(Bytes::from_static(b"name"), Value::string("a.txt"));
//!
//! let encoded = encode(&Value::Dict(dict)).unwrap();
//! assert_eq!(encoded, b"d4:name5:a.txt12:piece lengthi262144ee");
//!
//! let decoded = decode(&encoded).unwrap();
//! assert_eq!(decoded.get(b"name").and_then(Value::as_str), Some("a.txt"));
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::decode;
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use value::Value;
