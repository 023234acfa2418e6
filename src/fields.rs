//! Column vocabulary for a yearly row: months, quarters, and the derived cells.
//!
//! A row renders as
//! `Year Jan Feb Mar Q1 Apr May Jun Q2 Jul Aug Sep Q3 Oct Nov Dec Q4 YTD`.
//! Only the twelve month cells accept input; `Year` is filled from the row
//! number and `Q1`..`Q4`/`YTD` are written by the aggregator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TableError;

/// Calendar month, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Month {
    Jan,
    Feb,
    Mar,
    Apr,
    May,
    Jun,
    Jul,
    Aug,
    Sep,
    Oct,
    Nov,
    Dec,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::Jan,
        Month::Feb,
        Month::Mar,
        Month::Apr,
        Month::May,
        Month::Jun,
        Month::Jul,
        Month::Aug,
        Month::Sep,
        Month::Oct,
        Month::Nov,
        Month::Dec,
    ];

    /// Zero-based position within the year (Jan = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Short lowercase name, as used in workbook documents.
    pub fn key(self) -> &'static str {
        match self {
            Month::Jan => "jan",
            Month::Feb => "feb",
            Month::Mar => "mar",
            Month::Apr => "apr",
            Month::May => "may",
            Month::Jun => "jun",
            Month::Jul => "jul",
            Month::Aug => "aug",
            Month::Sep => "sep",
            Month::Oct => "oct",
            Month::Nov => "nov",
            Month::Dec => "dec",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Month::Jan => "Jan",
            Month::Feb => "Feb",
            Month::Mar => "Mar",
            Month::Apr => "Apr",
            Month::May => "May",
            Month::Jun => "Jun",
            Month::Jul => "Jul",
            Month::Aug => "Aug",
            Month::Sep => "Sep",
            Month::Oct => "Oct",
            Month::Nov => "Nov",
            Month::Dec => "Dec",
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Calendar quarter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    pub fn index(self) -> usize {
        self as usize
    }

    /// The three months that make up this quarter, in calendar order.
    pub fn months(self) -> [Month; 3] {
        let start = self.index() * 3;
        [Month::ALL[start], Month::ALL[start + 1], Month::ALL[start + 2]]
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{}", self.index() + 1)
    }
}

/// Any column of a yearly row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Year,
    Month(Month),
    Quarter(Quarter),
    Ytd,
}

impl Field {
    /// Header order as displayed.
    pub fn header() -> Vec<Field> {
        let mut fields = vec![Field::Year];
        for quarter in Quarter::ALL {
            fields.extend(quarter.months().into_iter().map(Field::Month));
            fields.push(Field::Quarter(quarter));
        }
        fields.push(Field::Ytd);
        fields
    }

    /// Only month cells take user input.
    pub fn is_editable(self) -> bool {
        matches!(self, Field::Month(_))
    }

    /// Quarter and YTD cells, written by the aggregator.
    pub fn is_derived(self) -> bool {
        matches!(self, Field::Quarter(_) | Field::Ytd)
    }

    pub fn as_month(self) -> Option<Month> {
        match self {
            Field::Month(month) => Some(month),
            _ => None,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Year => write!(f, "Year"),
            Field::Month(month) => write!(f, "{}", month),
            Field::Quarter(quarter) => write!(f, "{}", quarter),
            Field::Ytd => write!(f, "YTD"),
        }
    }
}

impl FromStr for Field {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        match name.as_str() {
            "year" => return Ok(Field::Year),
            "ytd" => return Ok(Field::Ytd),
            _ => {}
        }
        if let Some(month) = Month::ALL.iter().find(|m| m.key() == name) {
            return Ok(Field::Month(*month));
        }
        if let Some(quarter) = Quarter::ALL
            .iter()
            .find(|q| q.to_string().to_lowercase() == name)
        {
            return Ok(Field::Quarter(*quarter));
        }
        Err(TableError::UnknownField(s.trim().to_string()))
    }
}

impl FromStr for Month {
    type Err = TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let field: Field = s.parse()?;
        field.as_month().ok_or(TableError::NotEditable(field))
    }
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string().to_lowercase())
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
