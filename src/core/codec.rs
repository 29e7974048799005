//! One boat per line: `name,length,category,location,balance`.
//!
//! No header, no quoting, no escaping. Decoding never fails on field
//! content: it reads fields left to right and stops at the first one it
//! cannot match, leaving the rest at their defaults. Data files in use
//! depend on this.

use crate::core::registry::Registry;
use crate::domain::model::{Boat, Category, Location, MAX_NAME_CHARS};
use crate::utils::error::Result;
use csv::{QuoteStyle, ReaderBuilder, Terminator, WriterBuilder};
use std::io::{Read, Write};

/// Widest category or location field read before the scan gives up.
const MAX_TOKEN_CHARS: usize = 19;

/// The five fields of a boat in file order.
pub fn encode_fields(boat: &Boat) -> [String; 5] {
    let location = match boat.location() {
        Location::Slip(n) | Location::Storage(n) => n.to_string(),
        Location::Land(bay) => bay.to_string(),
        Location::Trailer(tag) => tag.clone(),
    };
    [
        boat.name().to_string(),
        format!("{:.0}", boat.length()),
        boat.category().token().to_string(),
        location,
        format!("{:.2}", boat.balance()),
    ]
}

/// A single line without terminator.
pub fn encode_line(boat: &Boat) -> String {
    encode_fields(boat).join(",")
}

/// Parses one typed or stored line. Trailing line terminators are ignored.
pub fn decode_line(line: &str) -> Boat {
    let line = line.trim_end_matches(&['\r', '\n'][..]);
    let fields: Vec<&str> = line.split(',').collect();
    decode_fields(&fields)
}

/// Builds a boat from already split fields. Extra fields are ignored.
pub fn decode_fields<S: AsRef<str>>(fields: &[S]) -> Boat {
    let mut fields = fields.iter().map(|f| AsRef::<str>::as_ref(f));
    let mut name = "";
    let mut length = 0.0;
    let mut category = Category::Storage;
    let mut location = None;
    let mut balance = 0.0;

    'scan: {
        let Some(raw) = fields.next().filter(|f| !f.is_empty()) else {
            break 'scan;
        };
        let (head, overflowed) = split_at_chars(raw, MAX_NAME_CHARS);
        name = head;
        if overflowed {
            break 'scan;
        }

        let Some((value, consumed_all)) = fields.next().and_then(float_prefix) else {
            break 'scan;
        };
        length = value;
        if !consumed_all {
            break 'scan;
        }

        let Some(raw) = fields.next().filter(|f| !f.is_empty()) else {
            break 'scan;
        };
        let (head, overflowed) = split_at_chars(raw, MAX_TOKEN_CHARS);
        category = Category::from_token(head);
        if overflowed {
            break 'scan;
        }

        let Some(raw) = fields.next().filter(|f| !f.is_empty()) else {
            break 'scan;
        };
        let (head, overflowed) = split_at_chars(raw, MAX_TOKEN_CHARS);
        location = Some(parse_location(category, head));
        if overflowed {
            break 'scan;
        }

        if let Some((value, _)) = fields.next().and_then(float_prefix) {
            balance = value;
        }
    }

    let location = location.unwrap_or_else(|| Location::default_for(category));
    Boat::new(name, length, location, balance)
}

/// Reads every non-blank line of a data file.
pub fn read_boats<R: Read>(reader: R) -> Result<Vec<Boat>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(reader);

    let mut boats = Vec::new();
    for row in csv_reader.byte_records() {
        let row = row?;
        let fields: Vec<String> = row
            .iter()
            .map(|field| String::from_utf8_lossy(field).into_owned())
            .collect();
        if fields.iter().all(|f| f.is_empty()) {
            continue;
        }
        let boat = decode_fields(&fields);
        tracing::debug!("Decoded row {:?} as {:?}", fields, boat);
        boats.push(boat);
    }
    Ok(boats)
}

/// Writes the registry in list order, one line per boat.
pub fn write_boats<W: Write>(registry: &Registry, writer: W) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    for boat in registry {
        csv_writer.write_record(encode_fields(boat))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Reads a typed money amount the same way balances are read.
pub fn parse_amount(raw: &str) -> Option<f64> {
    float_prefix(raw).map(|(value, _)| value)
}

/// First `max_chars` characters of `raw`, and whether anything was left over.
fn split_at_chars(raw: &str, max_chars: usize) -> (&str, bool) {
    match raw.char_indices().nth(max_chars) {
        Some((idx, _)) => (&raw[..idx], true),
        None => (raw, false),
    }
}

fn parse_location(category: Category, raw: &str) -> Location {
    match category {
        Category::Slip => Location::Slip(lenient_int(raw)),
        Category::Land => Location::Land(raw.chars().next().unwrap_or(' ')),
        Category::Trailer => Location::trailer(raw),
        Category::Storage => Location::Storage(lenient_int(raw)),
    }
}

/// Leading-digits integer; text without digits is 0.
fn lenient_int(raw: &str) -> i32 {
    let text = raw.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let limit = i64::from(i32::MAX) + 1;
    let mut value: i64 = 0;
    for digit in digits.bytes().take_while(u8::is_ascii_digit) {
        value = (value * 10 + i64::from(digit - b'0')).min(limit);
    }
    let value = if negative { -value } else { value };
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Longest float at the start of `raw` (after leading whitespace), and
/// whether it used up the whole field.
fn float_prefix(raw: &str) -> Option<(f64, bool)> {
    let bytes = raw.as_bytes();
    let start = bytes.iter().take_while(|b| b.is_ascii_whitespace()).count();
    let mut end = start;

    if matches!(bytes.get(end), Some(b'+') | Some(b'-')) {
        end += 1;
    }
    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    let value = raw[start..end].parse::<f64>().ok()?;
    Some((value, end == raw.len()))
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}
