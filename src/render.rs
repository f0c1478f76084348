//! Plain-text presentation of [`Statistics`].

use comfy_table::presets::UTF8_NO_BORDERS;
use comfy_table::{Cell, ContentArrangement, Table};
use itertools::Itertools;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::{Key, Map, Report, Statistics};

pub const OVERLOADED: &str = "That's way too many dice for me to handle. Try using less dice.";
pub const EMPTY: &str = "I can't find any dice in your command. Try again.";
pub const NO_TITLE: &str = "I'm out of witty lines!";

pub const ROLL_HEADER: &str = "Chance to roll a";
pub const MEET_HEADER: &str = "Chance to meet";
pub const DOOM_HEADER: &str = "Chance to generate doom";

const OUTCOME_PLACES: usize = 5;
const DIFFICULTY_PLACES: usize = 2;

/// Title lines picked at random for a computed report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Titles {
    lines: Vec<String>,
}

pub trait RenderExt {
    fn render(&self, title: &str) -> String;

    fn print(&self, title: &str) {
        print!("{}", self.render(title));
    }
}

impl Titles {
    /// One title per non-blank line of `text`.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self {
            lines: text
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    #[must_use]
    pub fn pick<R>(&self, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        self.lines.choose(rng).map_or(NO_TITLE, String::as_str)
    }
}

impl RenderExt for Statistics {
    fn render(&self, title: &str) -> String {
        match self {
            Statistics::Empty => format!("{EMPTY}\n"),
            Statistics::Overloaded { .. } => format!("{OVERLOADED}\n"),
            Statistics::TooComplex { combinations, .. } => {
                let n = combinations.map_or_else(|| "more".to_string(), |n| n.to_string());
                format!("Those dice can land {n} ways, that's more than I can count. Try using less dice.\n")
            }
            Statistics::Computed(report) => report.render(title),
        }
    }
}

impl RenderExt for Report {
    fn render(&self, title: &str) -> String {
        let difficulties = self
            .difficulties
            .iter()
            .map(|c| format!("{}: {}%", c.difficulty, trim_decimal(c.percent, DIFFICULTY_PLACES)))
            .join("\n");

        let mut table = Table::new();
        table
            .load_preset(UTF8_NO_BORDERS)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(vec![
                Cell::new(ROLL_HEADER),
                Cell::new(MEET_HEADER),
                Cell::new(DOOM_HEADER),
            ]);
        table.add_row(vec![
            Cell::new(chances(&self.totals)),
            Cell::new(difficulties),
            Cell::new(chances(&self.doom)),
        ]);

        format!(
            "{title}\nMean: {:.3}±{:.3} | Outcomes: {}\n\n{table}\n",
            self.mean, self.stddev, self.combinations
        )
    }
}

fn chances(map: &Map<f64>) -> String {
    map.iter()
        .map(|(k, p): (&Key, &f64)| format!("{k}: {}%", trim_decimal(*p, OUTCOME_PLACES)))
        .join("\n")
}

/// Rounds to at most `places` decimals and drops trailing zeros.
#[must_use]
pub fn trim_decimal(value: f64, places: usize) -> String {
    let s = format!("{value:.places$}");
    let trimmed = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        t => t.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::statistics;

    #[test]
    fn trims_decimals() {
        assert_eq!(trim_decimal(25.0, 2), "25");
        assert_eq!(trim_decimal(99.166666, 2), "99.17");
        assert_eq!(trim_decimal(8.333333333, 5), "8.33333");
        assert_eq!(trim_decimal(12.5, 5), "12.5");
        assert_eq!(trim_decimal(0.0, 2), "0");
        assert_eq!(trim_decimal(0.001, 2), "0");
        assert_eq!(trim_decimal(100.0, 0), "100");
    }

    #[test]
    fn terminal_messages() {
        assert_eq!(Statistics::Empty.render("x"), format!("{EMPTY}\n"));
        assert_eq!(
            Statistics::Overloaded { dice: 7, limit: 6 }.render("x"),
            format!("{OVERLOADED}\n")
        );
        let text = Statistics::TooComplex {
            combinations: Some(64_000_000),
            budget: 5_000_000,
        }
        .render("x");
        assert!(text.contains("64000000"));
    }

    #[test]
    fn renders_sections() {
        let text = statistics(["pd6"]).unwrap().render("Rolling!");
        assert!(text.starts_with("Rolling!\n"));
        assert!(text.contains(ROLL_HEADER));
        assert!(text.contains(MEET_HEADER));
        assert!(text.contains(DOOM_HEADER));
        assert!(text.contains("3: 25%"));
        assert!(text.contains("Easy: 100%"));
        assert!(text.contains("Average: 0%"));
        assert!(text.contains("Outcomes: 4"));
    }

    #[test]
    fn titles() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(Titles::default().pick(&mut rng), NO_TITLE);

        let titles = Titles::parse("Let's roll!\n\n  Fortune favours the bold  \n");
        for _ in 0..10 {
            let t = titles.pick(&mut rng);
            assert!(t == "Let's roll!" || t == "Fortune favours the bold");
        }
        assert_eq!(Titles::parse(" \n"), Titles::default());
    }
}
