//! Report sections and their rendering.
//!
//! Every analysis yields an `Outcome`; the suite wraps it in a numbered
//! `Section` together with the analysis header and its `Limit`.

use std::fmt;

const SEPARATOR: &str = "=====================================";

/// How many result lines a section shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    /// Show every line
    Unbounded,
    /// Show only the first `n` lines
    Top(usize),
}

impl Limit {
    /// View of `items` restricted to this limit
    pub fn slice<T>(self, items: &[T]) -> &[T] {
        match self {
            Limit::Unbounded => items,
            Limit::Top(n) => &items[..n.min(items.len())],
        }
    }

    /// Owned variant of `slice`
    pub fn apply<T>(self, mut items: Vec<T>) -> Vec<T> {
        if let Limit::Top(n) = self {
            items.truncate(n);
        }
        items
    }
}

/// Result of one analysis
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Zero or more result lines, already ordered
    Lines(Vec<String>),
    /// A single value printed on the header line
    Scalar(String),
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        match self {
            Outcome::Lines(lines) => lines.is_empty(),
            Outcome::Scalar(_) => false,
        }
    }
}

/// One numbered block of the report
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub number: usize,
    pub header: String,
    pub limit: Limit,
    pub outcome: Outcome,
}

impl Section {
    /// Header line, e.g. `4. Most credited actors (first 10):`
    pub fn heading(&self) -> String {
        match (&self.outcome, self.limit) {
            (Outcome::Scalar(value), _) => format!("{}. {}: {}", self.number, self.header, value),
            (Outcome::Lines(_), Limit::Top(n)) => {
                format!("{}. {} (first {}):", self.number, self.header, n)
            }
            (Outcome::Lines(_), Limit::Unbounded) => format!("{}. {}:", self.number, self.header),
        }
    }

    /// Result lines after the limit is applied
    pub fn visible_lines(&self) -> &[String] {
        match &self.outcome {
            Outcome::Lines(lines) => self.limit.slice(lines),
            Outcome::Scalar(_) => &[],
        }
    }

    pub fn separator() -> &'static str {
        SEPARATOR
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "{}", SEPARATOR)?;
        writeln!(f)?;
        writeln!(f, "{}", self.heading())?;
        if let Outcome::Lines(_) = self.outcome {
            writeln!(f)?;
            for line in self.visible_lines() {
                writeln!(f, "{}", line)?;
            }
        }
        Ok(())
    }
}

/// All sections of one run, in execution order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn section(&self, number: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.number == number)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{}", section)?;
        }
        Ok(())
    }
}
