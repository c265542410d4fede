//! Character reference decoding.
//!
//! The markup the simulator hosts is hand-written HTML, so it leans on the
//! usual named references. Decoding is lenient the way browsers are: a
//! reference that does not resolve stays in the text verbatim.

use phf::phf_map;

/// Named references the hosted pages actually use, plus the XML builtins.
static NAMED: phf::Map<&'static str, char> = phf_map! {
    "amp" => '&',
    "lt" => '<',
    "gt" => '>',
    "quot" => '"',
    "apos" => '\'',
    "nbsp" => '\u{a0}',
    "copy" => '\u{a9}',
    "reg" => '\u{ae}',
    "deg" => '\u{b0}',
    "middot" => '\u{b7}',
    "laquo" => '\u{ab}',
    "raquo" => '\u{bb}',
    "auml" => '\u{e4}',
    "ouml" => '\u{f6}',
    "uuml" => '\u{fc}',
    "Auml" => '\u{c4}',
    "Ouml" => '\u{d6}',
    "Uuml" => '\u{dc}',
    "szlig" => '\u{df}',
    "agrave" => '\u{e0}',
    "eacute" => '\u{e9}',
    "egrave" => '\u{e8}',
    "ecirc" => '\u{ea}',
    "ccedil" => '\u{e7}',
    "ndash" => '\u{2013}',
    "mdash" => '\u{2014}',
    "lsquo" => '\u{2018}',
    "rsquo" => '\u{2019}',
    "ldquo" => '\u{201c}',
    "rdquo" => '\u{201d}',
    "bull" => '\u{2022}',
    "hellip" => '\u{2026}',
    "times" => '\u{d7}',
    "sect" => '\u{a7}',
    "para" => '\u{b6}',
    "trade" => '\u{2122}',
    "euro" => '\u{20ac}',
    "larr" => '\u{2190}',
    "rarr" => '\u{2192}',
};

/// Look up a named reference without the `&`/`;` framing.
pub fn named(name: &str) -> Option<char> {
    NAMED.get(name).copied()
}

/// Resolve one reference. Accepts `name`, `#123` and `#x1F4` forms, with or
/// without the `&`/`;` framing.
pub fn decode_reference(reference: &str) -> Option<char> {
    let name = reference.trim_start_matches('&').trim_end_matches(';');
    if let Some(num) = name.strip_prefix('#') {
        let code = if let Some(hex) = num.strip_prefix(['x', 'X']) {
            u32::from_str_radix(hex, 16).ok()?
        } else {
            num.parse::<u32>().ok()?
        };
        return char::from_u32(code);
    }
    named(name)
}

/// Decode every resolvable reference in a run of text, leaving everything
/// else untouched.
pub fn decode_text(input: &str) -> String {
    if !input.contains('&') {
        return input.to_owned();
    }
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        // references are short; a far-away semicolon is not a reference
        match rest[1..].find(';') {
            Some(end) if end > 0 && end <= 32 => {
                let name = &rest[1..1 + end];
                if let Some(ch) = decode_reference(name) {
                    out.push(ch);
                    rest = &rest[end + 2..];
                } else {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
            _ => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
