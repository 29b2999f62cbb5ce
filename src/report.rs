//! Console rendering of a finished result document.

use crate::domain::model::{RecommendationSet, ResultDocument};
use crossterm::style::Stylize;
use std::fmt::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// `--cardprint`: one framed box per card
    CardPrint,
    /// `--print`: one line per card
    Names,
}

impl PrintMode {
    pub fn flag(&self) -> &'static str {
        match self {
            PrintMode::CardPrint => "cardprint",
            PrintMode::Names => "print",
        }
    }

    fn render_set(&self, out: &mut String, set: &RecommendationSet) {
        match self {
            PrintMode::CardPrint => {
                for (card, synergy) in set.iter() {
                    let width = card.chars().count() + 2;
                    let border = format!("+{}+", "-".repeat(width));
                    let _ = writeln!(out, "{}", border);
                    let _ = writeln!(out, "| {} |", card);
                    let _ = writeln!(out, "{}", border);
                    let _ = writeln!(out, "== Synergy: {} ==", synergy);
                }
            }
            PrintMode::Names => {
                for (card, synergy) in set.iter() {
                    let sign = if synergy > 0 { "+" } else { "" };
                    let _ = writeln!(out, "\t{} -- {}{}", card, sign, synergy);
                }
            }
        }
        out.push('\n');
    }
}

/// Body of one report section, without the header line.
pub fn render_section(document: &ResultDocument, mode: PrintMode) -> String {
    let mut out = String::new();
    for (commander, set) in document.iter() {
        let _ = writeln!(out, "Recommendations for {}:", commander);
        mode.render_set(&mut out, set);
    }
    out
}

pub fn print_report(document: &ResultDocument, modes: &[PrintMode]) {
    for mode in modes {
        println!("{}", format!("{}:", mode.flag()).red().on_black());
        print!("{}", render_section(document, *mode));
    }
}
