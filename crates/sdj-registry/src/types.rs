//! # Builtin Type Predicates
//!
//! One predicate per supported type name, each a pure function
//! `fn(&Value) -> bool`. The builtin table at the bottom of this file is the
//! single source of truth mapping type names to predicates — there is no
//! constructed-name dispatch anywhere.
//!
//! String-format predicates keep the lexical forms of the self-describing
//! schema convention, including its non-obvious ones: `gMonth` accepts the
//! trailing-dash form `"05--"`, and `time` accepts `24` as an hour. These
//! forms are load-bearing for documents written against the convention and
//! are not "fixed" here.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine as _;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// ─── Numeric helpers ────────────────────────────────────────────────

/// True when the value is a JSON number with no fractional part.
fn is_integer_value(value: &Value) -> bool {
    match value {
        Value::Number(n) => {
            n.is_i64() || n.is_u64() || n.as_f64().map_or(false, |f| f.fract() == 0.0)
        }
        _ => false,
    }
}

/// True when the value is a JSON number with a nonzero fractional part.
fn is_float_value(value: &Value) -> bool {
    matches!(value, Value::Number(_)) && !is_integer_value(value)
}

fn as_f64(value: &Value) -> Option<f64> {
    value.as_f64()
}

// ─── Numbers ────────────────────────────────────────────────────────

pub(crate) fn number(v: &Value) -> bool {
    v.is_number()
}

pub(crate) fn integer(v: &Value) -> bool {
    is_integer_value(v)
}

pub(crate) fn float(v: &Value) -> bool {
    is_float_value(v)
}

/// A number whose shortest decimal rendering uses exponent notation.
pub(crate) fn exponent(v: &Value) -> bool {
    match v {
        Value::Number(n) => {
            let rendered = n.to_string();
            rendered.contains('e') || rendered.contains('E')
        }
        _ => false,
    }
}

pub(crate) fn zero(v: &Value) -> bool {
    is_integer_value(v) && as_f64(v) == Some(0.0)
}

pub(crate) fn positive_integer(v: &Value) -> bool {
    is_integer_value(v) && as_f64(v).map_or(false, |f| f > 0.0)
}

pub(crate) fn non_negative_integer(v: &Value) -> bool {
    is_integer_value(v) && as_f64(v).map_or(false, |f| f >= 0.0)
}

pub(crate) fn negative_integer(v: &Value) -> bool {
    is_integer_value(v) && as_f64(v).map_or(false, |f| f < 0.0)
}

pub(crate) fn non_positive_integer(v: &Value) -> bool {
    is_integer_value(v) && as_f64(v).map_or(false, |f| f <= 0.0)
}

pub(crate) fn positive_float(v: &Value) -> bool {
    is_float_value(v) && as_f64(v).map_or(false, |f| f > 0.0)
}

pub(crate) fn non_negative_float(v: &Value) -> bool {
    is_float_value(v) && as_f64(v).map_or(false, |f| f >= 0.0)
}

pub(crate) fn negative_float(v: &Value) -> bool {
    is_float_value(v) && as_f64(v).map_or(false, |f| f < 0.0)
}

pub(crate) fn non_positive_float(v: &Value) -> bool {
    is_float_value(v) && as_f64(v).map_or(false, |f| f <= 0.0)
}

/// JSON numbers cannot encode NaN or infinities, so every number is finite.
pub(crate) fn finite_number(v: &Value) -> bool {
    v.is_number()
}

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0; // 2^53 - 1

pub(crate) fn safe_integer(v: &Value) -> bool {
    is_integer_value(v) && as_f64(v).map_or(false, |f| f.abs() <= MAX_SAFE_INTEGER)
}

// ─── Booleans and null ──────────────────────────────────────────────

pub(crate) fn boolean(v: &Value) -> bool {
    v.is_boolean()
}

pub(crate) fn is_true(v: &Value) -> bool {
    v.as_bool() == Some(true)
}

pub(crate) fn is_false(v: &Value) -> bool {
    v.as_bool() == Some(false)
}

pub(crate) fn null(v: &Value) -> bool {
    v.is_null()
}

// ─── Plain strings ──────────────────────────────────────────────────

pub(crate) fn string(v: &Value) -> bool {
    v.is_string()
}

pub(crate) fn empty_string(v: &Value) -> bool {
    v.as_str() == Some("")
}

/// A string that parses as a finite decimal number.
pub(crate) fn number_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        let trimmed = s.trim();
        !trimmed.is_empty() && trimmed.parse::<f64>().map_or(false, |f| f.is_finite())
    })
}

/// A string containing no tab, carriage-return, or line-feed characters.
pub(crate) fn normalized_string(v: &Value) -> bool {
    v.as_str()
        .map_or(false, |s| !s.contains(['\t', '\r', '\n']))
}

pub(crate) fn integer_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        s.trim()
            .parse::<f64>()
            .map_or(false, |f| f.is_finite() && f.fract() == 0.0)
    })
}

pub(crate) fn float_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        s.trim()
            .parse::<f64>()
            .map_or(false, |f| f.is_finite() && f.fract() != 0.0)
    })
}

static FRACTION_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]*/[1-9][0-9]*$").expect("fraction pattern"));

pub(crate) fn fraction_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| FRACTION_RE.is_match(s))
}

pub(crate) fn exponent_string(v: &Value) -> bool {
    number_string(v) && v.as_str().map_or(false, |s| s.contains(['e', 'E']))
}

static HEX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^-?0x[0-9a-f]+$").expect("hex pattern"));

pub(crate) fn hex_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| HEX_RE.is_match(s))
}

static OCTAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?0[0-7]+ ?)+$").expect("octal pattern"));

pub(crate) fn octal_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| OCTAL_RE.is_match(s))
}

/// A string that parses as a calendar date or date-time in any of the
/// accepted lexical forms (RFC 3339, `YYYY-MM-DD HH:MM:SS[.fff]`,
/// `YYYY-MM-DD`).
pub(crate) fn date_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        DateTime::parse_from_rfc3339(s).is_ok()
            || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f").is_ok()
            || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
    })
}

/// A non-empty string of characters in the Latin-1 range.
pub(crate) fn ascii_string(v: &Value) -> bool {
    v.as_str()
        .map_or(false, |s| !s.is_empty() && s.chars().all(|c| (c as u32) <= 0xFF))
}

pub(crate) fn unicode_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| !s.is_empty())
}

// ─── Internet formats ───────────────────────────────────────────────

static EMAIL_LOCAL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[-!#$%&'*+/0-9=?A-Z^_`a-z{|}~]+(\.[-!#$%&'*+/0-9=?A-Z^_`a-z{|}~]+)*$")
        .expect("email local pattern")
});

static EMAIL_DOMAIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("email domain pattern")
});

/// RFC-5321-shaped address check: dot-atom local part of at most 64
/// characters, hostname-shaped domain, 254 characters overall. The length
/// bounds are explicit checks because the pattern engine has no lookahead.
pub(crate) fn email(v: &Value) -> bool {
    let Some(s) = v.as_str() else { return false };
    if s.is_empty() || s.len() > 254 {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    local.len() <= 64
        && EMAIL_LOCAL_RE.is_match(local)
        && EMAIL_DOMAIN_RE.is_match(domain)
}

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(ftp:|ftps:|ws:|wss:|http:|https:)?(//)((([a-z\d]([a-z\d-]*[a-z\d])*)\.)+[a-z]{2,}|((\d{1,3}\.){3}\d{1,3}))(:\d+)?(/[-a-z\d%_.~+=]*)*(\?[;&a-z\d%_.~+=-]*)?(#[-a-z\d_]*)?$",
    )
    .expect("url pattern")
});

pub(crate) fn url(v: &Value) -> bool {
    v.as_str().map_or(false, |s| URL_RE.is_match(s))
}

static IPV4_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^((25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.){3}(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)$")
        .expect("ipv4 pattern")
});

pub(crate) fn ipv4(v: &Value) -> bool {
    v.as_str().map_or(false, |s| IPV4_RE.is_match(s))
}

static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89aAbB][a-f0-9]{3}-[a-f0-9]{12}$")
        .expect("uuid pattern")
});

/// Version-4 UUID in the convention's lexical form (lowercase hex, upper-
/// or lowercase variant nibble).
pub(crate) fn uuid(v: &Value) -> bool {
    v.as_str().map_or(false, |s| UUID_RE.is_match(s))
}

/// ISO 3166-1 alpha-2 country codes.
const COUNTRY_CODES: &[&str] = &[
    "AF", "AX", "AL", "DZ", "AS", "AD", "AO", "AI", "AQ", "AG", "AR", "AM", "AW", "AU", "AT",
    "AZ", "BS", "BH", "BD", "BB", "BY", "BE", "BZ", "BJ", "BM", "BT", "BO", "BQ", "BA", "BW",
    "BV", "BR", "IO", "BN", "BG", "BF", "BI", "KH", "CM", "CA", "CV", "KY", "CF", "TD", "CL",
    "CN", "CX", "CC", "CO", "KM", "CG", "CD", "CK", "CR", "CI", "HR", "CU", "CW", "CY", "CZ",
    "DK", "DJ", "DM", "DO", "EC", "EG", "SV", "GQ", "ER", "EE", "ET", "FK", "FO", "FJ", "FI",
    "FR", "GF", "PF", "TF", "GA", "GM", "GE", "DE", "GH", "GI", "GR", "GL", "GD", "GP", "GU",
    "GT", "GG", "GN", "GW", "GY", "HT", "HM", "VA", "HN", "HK", "HU", "IS", "IN", "ID", "IR",
    "IQ", "IE", "IM", "IL", "IT", "JM", "JP", "JE", "JO", "KZ", "KE", "KI", "KP", "KR", "KW",
    "KG", "LA", "LV", "LB", "LS", "LR", "LY", "LI", "LT", "LU", "MO", "MK", "MG", "MW", "MY",
    "MV", "ML", "MT", "MH", "MQ", "MR", "MU", "YT", "MX", "FM", "MD", "MC", "MN", "ME", "MS",
    "MA", "MZ", "MM", "NA", "NR", "NP", "NL", "NC", "NZ", "NI", "NE", "NG", "NU", "NF", "MP",
    "NO", "OM", "PK", "PW", "PS", "PA", "PG", "PY", "PE", "PH", "PN", "PL", "PT", "PR", "QA",
    "RE", "RO", "RU", "RW", "BL", "SH", "KN", "LC", "MF", "PM", "VC", "WS", "SM", "ST", "SA",
    "SN", "RS", "SC", "SL", "SG", "SX", "SK", "SI", "SB", "SO", "ZA", "GS", "SS", "ES", "LK",
    "SD", "SR", "SJ", "SZ", "SE", "CH", "SY", "TW", "TJ", "TZ", "TH", "TL", "TG", "TK", "TO",
    "TT", "TN", "TR", "TM", "TC", "TV", "UG", "UA", "AE", "GB", "US", "UM", "UY", "UZ", "VU",
    "VE", "VN", "VG", "VI", "WF", "EH", "YE", "ZM", "ZW",
];

pub(crate) fn country(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        let code = s.trim().to_uppercase();
        COUNTRY_CODES.contains(&code.as_str())
    })
}

static LANGUAGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z]{2,3}(?:-[A-Z]{2,3}(?:-[a-zA-Z]{4})?)?$").expect("language pattern")
});

pub(crate) fn language(v: &Value) -> bool {
    v.as_str().map_or(false, |s| LANGUAGE_RE.is_match(s))
}

pub(crate) fn json_string(v: &Value) -> bool {
    v.as_str()
        .map_or(false, |s| serde_json::from_str::<Value>(s).is_ok())
}

pub(crate) fn reg_exp_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| Regex::new(s).is_ok())
}

/// Characters that a percent-encoder leaves unescaped.
fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

/// A string that round-trips through percent-decoding and re-encoding
/// unchanged: literal characters must be unreserved, escapes must be
/// uppercase hex and must not cover a byte the encoder would leave bare.
pub(crate) fn url_encoded(v: &Value) -> bool {
    let Some(s) = v.as_str() else { return false };
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                if i + 2 >= bytes.len() {
                    return false;
                }
                let (hi, lo) = (bytes[i + 1], bytes[i + 2]);
                let is_upper_hex =
                    |b: u8| b.is_ascii_digit() || (b'A'..=b'F').contains(&b);
                if !is_upper_hex(hi) || !is_upper_hex(lo) {
                    return false;
                }
                let decoded = (hex_nibble(hi) << 4) | hex_nibble(lo);
                if is_unreserved(decoded) {
                    return false;
                }
                i += 3;
            }
            b if is_unreserved(b) => i += 1,
            _ => return false,
        }
    }
    true
}

fn hex_nibble(b: u8) -> u8 {
    if b.is_ascii_digit() {
        b - b'0'
    } else {
        b - b'A' + 10
    }
}

pub(crate) fn base64(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        BASE64_STANDARD
            .decode(s)
            .map_or(false, |decoded| BASE64_STANDARD.encode(decoded) == s)
    })
}

// ─── CSS formats ────────────────────────────────────────────────────

static CSS_BLOCK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\s*[\S ]+\s*\{[^}]*\})+").expect("css block pattern"));

pub(crate) fn css_string(v: &Value) -> bool {
    v.as_str().map_or(false, |s| CSS_BLOCK_RE.is_match(s))
}

const CSS_LENGTH_UNITS: &[&str] = &[
    "vmin", "vmax", "rem", "ch", "em", "ex", "vh", "vw", "px", "mm", "cm", "in", "pt", "pc",
];

pub(crate) fn css_length(v: &Value) -> bool {
    has_suffix_in(v, CSS_LENGTH_UNITS)
}

pub(crate) fn css_angle(v: &Value) -> bool {
    has_suffix_in(v, &["grad", "turn", "deg", "rad"])
}

pub(crate) fn css_resolution(v: &Value) -> bool {
    has_suffix_in(v, &["dpcm", "dppx", "dpi"])
}

pub(crate) fn css_frequency(v: &Value) -> bool {
    has_suffix_in(v, &["khz", "hz"])
}

pub(crate) fn css_time(v: &Value) -> bool {
    has_suffix_in(v, &["ms", "s"])
}

pub(crate) fn css_percentage(v: &Value) -> bool {
    has_suffix_in(v, &["%"])
}

pub(crate) fn css_position(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        let keyword = s.trim().to_lowercase();
        ["static", "relative", "absolute", "sticky", "fixed"].contains(&keyword.as_str())
    })
}

fn has_suffix_in(v: &Value, suffixes: &[&str]) -> bool {
    v.as_str().map_or(false, |s| {
        let lowered = s.trim().to_lowercase();
        suffixes.iter().any(|suffix| lowered.ends_with(suffix))
    })
}

static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^#([a-f0-9]{3}){1,2}$").expect("hex color pattern"));

pub(crate) fn hex_color(v: &Value) -> bool {
    v.as_str().map_or(false, |s| HEX_COLOR_RE.is_match(s))
}

static RGB_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^rgb(a)?\(\d{1,3},\s?\d{1,3},\s?\d{1,3}\)$").expect("rgb color pattern")
});

pub(crate) fn rgb_color(v: &Value) -> bool {
    v.as_str().map_or(false, |s| RGB_COLOR_RE.is_match(s))
}

pub(crate) fn css_ratio(v: &Value) -> bool {
    fraction_string(v)
}

// ─── Date and time formats ──────────────────────────────────────────

static DATE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\d{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$").expect("date pattern")
});

/// Zero-padded `YYYY-MM-DD` that is also a real calendar date, so
/// `"2020-02-30"` fails even though the pattern admits it.
pub(crate) fn date(v: &Value) -> bool {
    v.as_str().map_or(false, |s| {
        DATE_RE.is_match(s) && NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
    })
}

static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-1][0-9]|2[0-4]):([0-5][0-9]):[0-5][0-9](.\d{3})?$").expect("time pattern")
});

pub(crate) fn time(v: &Value) -> bool {
    v.as_str().map_or(false, |s| TIME_RE.is_match(s))
}

static DATE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\d{4}-(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01]) ([0-1][0-9]|2[0-4]):([0-5][0-9]):[0-5][0-9](.\d{3})?$",
    )
    .expect("date-time pattern")
});

pub(crate) fn date_time(v: &Value) -> bool {
    v.as_str().map_or(false, |s| DATE_TIME_RE.is_match(s))
}

static G_YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}$").expect("gYear pattern"));

pub(crate) fn g_year(v: &Value) -> bool {
    v.as_str().map_or(false, |s| G_YEAR_RE.is_match(s))
}

// Trailing-dash form ("05--"), as the convention has always written it.
static G_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(0[1-9]|1[012])--$").expect("gMonth pattern"));

pub(crate) fn g_month(v: &Value) -> bool {
    v.as_str().map_or(false, |s| G_MONTH_RE.is_match(s))
}

static G_DAY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^---(0[1-9]|[12][0-9]|3[01])$").expect("gDay pattern"));

pub(crate) fn g_day(v: &Value) -> bool {
    v.as_str().map_or(false, |s| G_DAY_RE.is_match(s))
}

static G_YEAR_MONTH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-(0[1-9]|1[012])$").expect("gYearMonth pattern"));

pub(crate) fn g_year_month(v: &Value) -> bool {
    v.as_str().map_or(false, |s| G_YEAR_MONTH_RE.is_match(s))
}

static G_MONTH_DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^--(0[1-9]|1[012])-(0[1-9]|[12][0-9]|3[01])$").expect("gMonthDay pattern")
});

pub(crate) fn g_month_day(v: &Value) -> bool {
    v.as_str().map_or(false, |s| G_MONTH_DAY_RE.is_match(s))
}

// ─── Containers ─────────────────────────────────────────────────────

pub(crate) fn json_object(v: &Value) -> bool {
    v.is_object()
}

pub(crate) fn empty_object(v: &Value) -> bool {
    v.as_object().map_or(false, |m| m.is_empty())
}

pub(crate) fn array(v: &Value) -> bool {
    v.is_array()
}

pub(crate) fn empty_array(v: &Value) -> bool {
    v.as_array().map_or(false, |a| a.is_empty())
}

pub(crate) fn string_array(v: &Value) -> bool {
    every_element(v, Value::is_string)
}

pub(crate) fn number_array(v: &Value) -> bool {
    every_element(v, Value::is_number)
}

pub(crate) fn integer_array(v: &Value) -> bool {
    every_element(v, is_integer_value)
}

pub(crate) fn positive_integer_array(v: &Value) -> bool {
    every_element(v, |e| positive_integer(e))
}

pub(crate) fn non_negative_integer_array(v: &Value) -> bool {
    every_element(v, |e| non_negative_integer(e))
}

pub(crate) fn negative_integer_array(v: &Value) -> bool {
    every_element(v, |e| negative_integer(e))
}

fn every_element(v: &Value, predicate: impl Fn(&Value) -> bool) -> bool {
    v.as_array().map_or(false, |a| a.iter().all(predicate))
}

// ─── Builtin table ──────────────────────────────────────────────────

/// The builtin type vocabulary: `(registered name, predicate)`.
pub(crate) const TYPE_BUILTINS: &[(&str, fn(&Value) -> bool)] = &[
    ("number", number),
    ("integer", integer),
    ("float", float),
    ("exponent", exponent),
    ("zero", zero),
    ("positiveInteger", positive_integer),
    ("nonNegativeInteger", non_negative_integer),
    ("negativeInteger", negative_integer),
    ("nonPositiveInteger", non_positive_integer),
    ("positiveFloat", positive_float),
    ("nonNegativeFloat", non_negative_float),
    ("negativeFloat", negative_float),
    ("nonPositiveFloat", non_positive_float),
    ("finiteNumber", finite_number),
    ("safeInteger", safe_integer),
    ("boolean", boolean),
    ("true", is_true),
    ("false", is_false),
    ("null", null),
    ("string", string),
    ("emptyString", empty_string),
    ("numberString", number_string),
    ("normalizedString", normalized_string),
    ("integerString", integer_string),
    ("floatString", float_string),
    ("fractionString", fraction_string),
    ("exponentString", exponent_string),
    ("hexString", hex_string),
    ("octalString", octal_string),
    ("dateString", date_string),
    ("asciiString", ascii_string),
    ("unicodeString", unicode_string),
    ("email", email),
    ("url", url),
    ("ipv4", ipv4),
    ("uuid", uuid),
    ("country", country),
    ("language", language),
    ("jsonString", json_string),
    ("regExpString", reg_exp_string),
    ("urlEncoded", url_encoded),
    ("base64", base64),
    ("cssString", css_string),
    ("cssLength", css_length),
    ("cssAngle", css_angle),
    ("cssResolution", css_resolution),
    ("cssFrequency", css_frequency),
    ("cssTime", css_time),
    ("cssPercentage", css_percentage),
    ("cssPosition", css_position),
    ("hexColor", hex_color),
    ("rgbColor", rgb_color),
    ("cssRatio", css_ratio),
    ("date", date),
    ("time", time),
    ("dateTime", date_time),
    ("gYear", g_year),
    ("gMonth", g_month),
    ("gDay", g_day),
    ("gYearMonth", g_year_month),
    ("gMonthDay", g_month_day),
    ("jsonObject", json_object),
    ("emptyObject", empty_object),
    ("array", array),
    ("emptyArray", empty_array),
    ("stringArray", string_array),
    ("numberArray", number_array),
    ("integerArray", integer_array),
    ("positiveIntegerArray", positive_integer_array),
    ("nonNegativeIntegerArray", non_negative_integer_array),
    ("negativeIntegerArray", negative_integer_array),
];
