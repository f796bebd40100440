use colored::*;
use testbed_core::classify::history::HistoryEntry;
use testbed_core::classify::{Category, Format, ValidationResult, rules};

use crate::terminal::colors;

type Detail = (String, ColoredString);

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Success => colors::SUCCESS,
        Category::Error => colors::ERROR,
        Category::Warning => colors::WARNING,
        Category::Info => colors::INFO,
    }
}

pub fn format_to_detail(format: Format) -> Detail {
    ("Format".to_string(), format.to_string().color(colors::FORMAT_LABEL).bold())
}

pub fn result_to_detail(result: &ValidationResult) -> Detail {
    let value: ColoredString = result.message.color(category_color(result.category));
    (result.category.to_string(), value)
}

pub fn history_to_detail(entry: &HistoryEntry) -> Detail {
    let value: ColoredString = format!(
        "{} {}",
        entry.input.color(colors::PRIMARY),
        format!("({})", entry.details).color(colors::SEPARATOR)
    )
    .normal();
    (entry.format.to_string(), value)
}

/// Address span of a CIDR input, e.g. `10.0.0.0 - 10.0.0.255`.
pub fn cidr_to_detail(input: &str) -> Option<Detail> {
    let (addr, prefix) = rules::parse_cidr(input.trim())?;
    let (first, last) = rules::cidr_bounds(addr, prefix);
    let value: ColoredString = format!("{first} - {last}").color(colors::ACCENT);
    Some(("Range".to_string(), value))
}
