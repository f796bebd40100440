//! # Format Rules
//!
//! One predicate per recognized textual format. Every predicate is independent
//! of the others, expects already-trimmed input, and never allocates on the
//! rejection path.
//!
//! Numeric bounds (octets, prefix lengths, ports) are enforced with integer
//! parsing. Only the shape of a domain label is described with a regex.

use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of decimal digits in a dotted IPv4 group.
const MAX_OCTET_DIGITS: usize = 3;
/// Maximum number of hex digits in an IPv6 group.
const MAX_HEXTET_DIGITS: usize = 4;
const IPV6_GROUPS: usize = 8;
const MAX_PREFIX_LEN: u8 = 32;

static DOMAIN_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$")
        .expect("domain label pattern must compile")
});

/// Parses a dotted-quad IPv4 address.
///
/// Each group is 1 to 3 decimal digits with a value of at most 255. Leading
/// zeros are accepted (`010.001.000.001`), unlike [`Ipv4Addr::from_str`].
pub fn parse_ipv4(input: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; 4];
    let mut groups = input.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(groups.next()?)?;
    }

    if groups.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

fn parse_octet(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > MAX_OCTET_DIGITS || !is_ascii_digits(group) {
        return None;
    }
    group.parse::<u16>().ok().and_then(|v| u8::try_from(v).ok())
}

/// Private, loopback and link-local IPv4 space.
///
/// Covers `10.0.0.0/8`, `172.16.0.0/12`, `192.168.0.0/16`, `127.0.0.0/8`
/// and `169.254.0.0/16`.
pub fn is_private_ipv4(addr: &Ipv4Addr) -> bool {
    addr.is_private() || addr.is_loopback() || addr.is_link_local()
}

/// Parses the fully expanded eight-group form, plus the literals `::` and `::1`.
///
/// Any other `::` compression is rejected on purpose.
pub fn parse_ipv6(input: &str) -> Option<Ipv6Addr> {
    match input {
        "::" => return Some(Ipv6Addr::UNSPECIFIED),
        "::1" => return Some(Ipv6Addr::LOCALHOST),
        _ => {}
    }

    let mut segments = [0u16; IPV6_GROUPS];
    let mut groups = input.split(':');

    for segment in segments.iter_mut() {
        *segment = parse_hextet(groups.next()?)?;
    }

    if groups.next().is_some() {
        return None;
    }

    Some(Ipv6Addr::from(segments))
}

fn parse_hextet(group: &str) -> Option<u16> {
    if group.is_empty()
        || group.len() > MAX_HEXTET_DIGITS
        || !group.bytes().all(|b| b.is_ascii_hexdigit())
    {
        return None;
    }
    u16::from_str_radix(group, 16).ok()
}

/// Parses `a.b.c.d/prefix` with a prefix length in `0..=32`, written without
/// leading zeros.
pub fn parse_cidr(input: &str) -> Option<(Ipv4Addr, u8)> {
    let (addr, prefix) = input.split_once('/')?;
    let addr = parse_ipv4(addr)?;

    if prefix.is_empty() || prefix.len() > 2 || !is_ascii_digits(prefix) {
        return None;
    }
    if prefix.len() == 2 && prefix.starts_with('0') {
        return None;
    }

    let prefix: u8 = prefix.parse().ok()?;
    (prefix <= MAX_PREFIX_LEN).then_some((addr, prefix))
}

/// First and last address of the block covered by `addr/prefix`.
pub fn cidr_bounds(addr: Ipv4Addr, prefix: u8) -> (Ipv4Addr, Ipv4Addr) {
    let mask: u32 = match prefix {
        0 => 0,
        p => u32::MAX << (32 - u32::from(p.min(MAX_PREFIX_LEN))),
    };
    let network: u32 = u32::from(addr) & mask;
    let broadcast: u32 = network | !mask;
    (Ipv4Addr::from(network), Ipv4Addr::from(broadcast))
}

/// Dot-separated labels of 1 to 63 alphanumerics with internal hyphens.
///
/// The last label must contain a letter, which keeps bare numbers and dotted
/// quads out of this category.
pub fn is_domain(input: &str) -> bool {
    let mut labels = input.split('.').peekable();

    while let Some(label) = labels.next() {
        if !DOMAIN_LABEL.is_match(label) {
            return false;
        }
        if labels.peek().is_none() && !label.bytes().any(|b| b.is_ascii_alphabetic()) {
            return false;
        }
    }

    true
}

/// Absolute URL as defined by the WHATWG URL standard. A scheme is required.
pub fn is_url(input: &str) -> bool {
    url::Url::parse(input).is_ok()
}

/// Decimal port number in `1..=65535`.
pub fn parse_port(input: &str) -> Option<u16> {
    if input.is_empty() || !is_ascii_digits(input) {
        return None;
    }
    // u32 so that 65536..=u32::MAX fall through to the bounds check
    let value: u32 = input.parse().ok()?;
    u16::try_from(value).ok().filter(|port| *port != 0)
}

fn is_ascii_digits(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_digit())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
