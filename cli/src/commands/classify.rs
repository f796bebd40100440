use colored::*;
use testbed_common::{config::Config, success, warn};
use testbed_core::classify::history::ValidationHistory;
use testbed_core::classify::{CategoryFilter, ValidationResult, filter_results, get_format};

use crate::terminal::{colors, format, print};
use crate::tprint;

type Detail = (String, ColoredString);

pub fn classify(inputs: &[String], filter: CategoryFilter, cfg: &Config) -> anyhow::Result<()> {
    let mut history = ValidationHistory::new();

    for (idx, input) in inputs.iter().enumerate() {
        let results: Vec<ValidationResult> = history.validate(input);
        print_classification(idx, input, &results, filter, cfg);
        if idx + 1 != inputs.len() && cfg.quiet < 2 {
            tprint!();
        }
    }

    print_history(&history, cfg);
    print_summary(inputs.len(), history.len(), cfg);
    Ok(())
}

fn print_classification(
    idx: usize,
    input: &str,
    results: &[ValidationResult],
    filter: CategoryFilter,
    cfg: &Config,
) {
    let shown: Vec<&ValidationResult> = filter_results(results, filter).collect();

    if cfg.quiet >= 2 {
        let messages: Vec<&str> = shown.iter().map(|r| r.message.as_str()).collect();
        tprint!(&format!("{}: {}", input.trim(), messages.join(", ")));
        return;
    }

    let label = if input.trim().is_empty() { "<empty>" } else { input.trim() };
    print::tree_head(idx, label);

    let mut details: Vec<Detail> = vec![format::format_to_detail(get_format(input))];
    if let Some(range_detail) = format::cidr_to_detail(input) {
        details.push(range_detail);
    }
    details.extend(shown.into_iter().map(format::result_to_detail));
    print::as_tree_one_level(details);
}

fn print_history(history: &ValidationHistory, cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    tprint!();
    print::header("validation history", cfg.quiet);

    if history.is_empty() {
        warn!("Nothing was recognized, history is empty");
        return;
    }

    let details: Vec<Detail> = history.iter().map(format::history_to_detail).collect();
    print::as_tree_one_level(details);
}

fn print_summary(total: usize, recognized: usize, cfg: &Config) {
    let recognized: ColoredString = format!("{recognized}/{total}").bold().green();
    let output: &ColoredString =
        &format!("Classification Complete: {recognized} inputs recognized").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(output);
        }
        1 => success!("{}", output),
        _ => {}
    }
}
