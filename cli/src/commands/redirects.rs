use colored::*;
use testbed_common::config::Config;
use testbed_core::api::redirect::REDIRECTS;

use crate::terminal::{colors, print};

pub fn redirects(cfg: &Config) -> anyhow::Result<()> {
    let key_width: usize = REDIRECTS.iter().map(|(alias, _)| alias.len()).max().unwrap_or(0);

    for (alias, target) in REDIRECTS {
        print::aligned_line(alias, target.color(colors::ACCENT), key_width);
    }

    print::end_of_program(cfg.quiet);
    Ok(())
}
