//! # Format Classifier
//!
//! Reports which textual formats a free-text input satisfies.
//!
//! Supported formats:
//! * **IPv4**: dotted quad (e.g., `192.168.1.1`), with a follow-up private/public note.
//! * **IPv6**: eight full groups, or the literals `::` and `::1`.
//! * **CIDR**: IPv4 block with a prefix length (e.g., `10.0.0.0/8`).
//! * **Domain**: hostname labels (e.g., `example.com`).
//! * **URL**: absolute URL with a scheme (e.g., `https://example.com`).
//! * **Port**: `1` to `65535`.
//!
//! Every rule is evaluated, so one input can produce several results.
//! [`get_format`] instead picks a single label for display.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub mod history;
pub mod rules;

pub const EMPTY_INPUT_MESSAGE: &str = "Input cannot be empty";
pub const NO_MATCH_MESSAGE: &str = "Invalid IP address, domain, URL, or port";
pub const PRIVATE_IP_MESSAGE: &str = "Private IP address detected";
pub const PUBLIC_IP_MESSAGE: &str = "Public IP address detected";

/// Severity of a single [`ValidationResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Success,
    Error,
    Warning,
    Info,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
        };
        f.write_str(name)
    }
}

/// One line of feedback produced by [`classify`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub message: String,
    #[serde(rename = "type")]
    pub category: Category,
}

impl ValidationResult {
    fn success(message: &str) -> Self {
        Self { is_valid: true, message: message.to_string(), category: Category::Success }
    }

    fn info(message: &str) -> Self {
        Self { is_valid: true, message: message.to_string(), category: Category::Info }
    }

    fn error(message: &str) -> Self {
        Self { is_valid: false, message: message.to_string(), category: Category::Error }
    }
}

/// Display label for an input, as chosen by [`get_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Format {
    #[serde(rename = "IPv4")]
    Ipv4,
    #[serde(rename = "IPv6")]
    Ipv6,
    #[serde(rename = "CIDR")]
    Cidr,
    Domain,
    #[serde(rename = "URL")]
    Url,
    Port,
    Unknown,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Format::Ipv4 => "IPv4",
            Format::Ipv6 => "IPv6",
            Format::Cidr => "CIDR",
            Format::Domain => "Domain",
            Format::Url => "URL",
            Format::Port => "Port",
            Format::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// A single format check. [`Rule::ALL`] is both the evaluation order of
/// [`classify`] and the priority order of [`get_format`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    Ipv4,
    Ipv6,
    Cidr,
    Domain,
    Url,
    Port,
}

impl Rule {
    pub const ALL: [Rule; 6] = [Rule::Ipv4, Rule::Ipv6, Rule::Cidr, Rule::Domain, Rule::Url, Rule::Port];

    /// Expects trimmed input.
    pub fn matches(self, input: &str) -> bool {
        match self {
            Rule::Ipv4 => rules::parse_ipv4(input).is_some(),
            Rule::Ipv6 => rules::parse_ipv6(input).is_some(),
            Rule::Cidr => rules::parse_cidr(input).is_some(),
            Rule::Domain => rules::is_domain(input),
            Rule::Url => rules::is_url(input),
            Rule::Port => rules::parse_port(input).is_some(),
        }
    }

    pub fn format(self) -> Format {
        match self {
            Rule::Ipv4 => Format::Ipv4,
            Rule::Ipv6 => Format::Ipv6,
            Rule::Cidr => Format::Cidr,
            Rule::Domain => Format::Domain,
            Rule::Url => Format::Url,
            Rule::Port => Format::Port,
        }
    }

    fn success_message(self) -> &'static str {
        match self {
            Rule::Ipv4 => "Valid IPv4 address",
            Rule::Ipv6 => "Valid IPv6 address",
            Rule::Cidr => "Valid CIDR notation",
            Rule::Domain => "Valid domain name",
            Rule::Url => "Valid URL",
            Rule::Port => "Valid port number",
        }
    }
}

/// Runs every rule against the trimmed input.
///
/// Returns a single error result for empty input or when nothing matched,
/// otherwise one success result per matching rule. A matching IPv4 address is
/// followed by an info result saying whether it is private or public.
pub fn classify(input: &str) -> Vec<ValidationResult> {
    let input = input.trim();

    if input.is_empty() {
        return vec![ValidationResult::error(EMPTY_INPUT_MESSAGE)];
    }

    let mut results: Vec<ValidationResult> = Vec::new();

    for rule in Rule::ALL {
        if !rule.matches(input) {
            continue;
        }
        results.push(ValidationResult::success(rule.success_message()));

        if rule == Rule::Ipv4 {
            if let Some(addr) = rules::parse_ipv4(input) {
                let note = if rules::is_private_ipv4(&addr) {
                    PRIVATE_IP_MESSAGE
                } else {
                    PUBLIC_IP_MESSAGE
                };
                results.push(ValidationResult::info(note));
            }
        }
    }

    if results.is_empty() {
        results.push(ValidationResult::error(NO_MATCH_MESSAGE));
    }

    results
}

/// Highest-priority format label for the trimmed input.
pub fn get_format(input: &str) -> Format {
    let input = input.trim();
    Rule::ALL
        .into_iter()
        .find(|rule| rule.matches(input))
        .map_or(Format::Unknown, Rule::format)
}

/// Which results to keep when displaying a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn accepts(self, result: &ValidationResult) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => result.category == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(CategoryFilter::All),
            "success" => Ok(CategoryFilter::Only(Category::Success)),
            "error" | "errors" => Ok(CategoryFilter::Only(Category::Error)),
            "warning" | "warnings" => Ok(CategoryFilter::Only(Category::Warning)),
            "info" => Ok(CategoryFilter::Only(Category::Info)),
            other => Err(format!("unknown result filter: {other}")),
        }
    }
}

pub fn filter_results(
    results: &[ValidationResult],
    filter: CategoryFilter,
) -> impl Iterator<Item = &ValidationResult> {
    results.iter().filter(move |result| filter.accepts(result))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
