//! Goal ordering by a user-selected criterion

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// How goal lists are ordered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortCriterion {
    /// Most recently created first
    #[default]
    Newest,
    /// Highest priority score first
    Priority,
    /// Fewest working hours first, unknown hours last
    Hours,
    /// Cheapest first
    Price,
    /// Largest share of monthly income first
    Percent,
}

impl SortCriterion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Priority => "priority",
            Self::Hours => "hours",
            Self::Price => "price",
            Self::Percent => "percent",
        }
    }

    pub fn all() -> [Self; 5] {
        [
            Self::Newest,
            Self::Priority,
            Self::Hours,
            Self::Price,
            Self::Percent,
        ]
    }
}

impl std::str::FromStr for SortCriterion {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "priority" => Ok(Self::Priority),
            "hours" => Ok(Self::Hours),
            "price" => Ok(Self::Price),
            "percent" => Ok(Self::Percent),
            _ => Err(format!("Unknown sort criterion: {}", s)),
        }
    }
}

impl std::fmt::Display for SortCriterion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The sort keys a rankable item exposes
pub trait Rankable {
    /// Monotonic creation order (the row id)
    fn creation_order(&self) -> i64;
    fn price(&self) -> f64;
    fn hours_needed(&self) -> Option<f64>;
    fn priority_score(&self) -> f64;
    fn percent_of_month(&self) -> Option<f64>;
}

/// Compare two items under `criterion`, breaking ties newest first
pub fn compare<T: Rankable>(a: &T, b: &T, criterion: SortCriterion) -> Ordering {
    let newest_first = b.creation_order().cmp(&a.creation_order());

    let primary = match criterion {
        SortCriterion::Newest => Ordering::Equal,
        SortCriterion::Priority => b.priority_score().total_cmp(&a.priority_score()),
        SortCriterion::Hours => match (a.hours_needed(), b.hours_needed()) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortCriterion::Price => a.price().total_cmp(&b.price()),
        SortCriterion::Percent => {
            let x = a.percent_of_month().unwrap_or(0.0);
            let y = b.percent_of_month().unwrap_or(0.0);
            y.total_cmp(&x)
        }
    };

    primary.then(newest_first)
}

/// Sort `items` in place
pub fn rank<T: Rankable>(items: &mut [T], criterion: SortCriterion) {
    items.sort_by(|a, b| compare(a, b, criterion));
}
