use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize, Serializer};

use crate::error::ParseAccommodationError;

/// Age-based cohort a segment describes.
///
/// Tags outside the known set are kept verbatim in `Other` so that form
/// state survives a save/load cycle untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Branch {
    /// Lupetti / Coccinelle
    Lc,
    /// Esploratori / Guide
    Eg,
    /// Rover / Scolte
    Rs,
    /// Whole group, no single cohort
    All,
    Other(String),
}

impl Branch {
    pub fn parse(tag: &str) -> Self {
        let trimmed = tag.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "LC" => Branch::Lc,
            "EG" => Branch::Eg,
            "RS" => Branch::Rs,
            "ALL" => Branch::All,
            _ => Branch::Other(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Branch::Lc => "LC",
            Branch::Eg => "EG",
            Branch::Rs => "RS",
            Branch::All => "ALL",
            Branch::Other(tag) => tag,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Branch::Other(_))
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Branch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Branch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Ok(Branch::parse(&tag))
    }
}

/// Lodging mode of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "lowercase")]
pub enum Accommodation {
    #[default]
    Indoor,
    Tents,
}

impl fmt::Display for Accommodation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Accommodation::Indoor => write!(f, "indoor"),
            Accommodation::Tents => write!(f, "tents"),
        }
    }
}

impl FromStr for Accommodation {
    type Err = ParseAccommodationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "indoor" => Ok(Accommodation::Indoor),
            "tents" | "tent" => Ok(Accommodation::Tents),
            _ => Err(ParseAccommodationError(s.to_string())),
        }
    }
}

/// One branch's block of participation: who is on site, when, and how they
/// sleep.
///
/// Dates are kept as the raw strings the form produced. Use [`start`] and
/// [`end`] to get parsed values; a `None` there means the segment cannot take
/// part in occupancy calculations.
///
/// [`start`]: BranchSegment::start
/// [`end`]: BranchSegment::end
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct BranchSegment {
    #[cfg_attr(feature = "ts", ts(type = "string"))]
    pub branch: Branch,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default, deserialize_with = "deserialize_count")]
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub youth_count: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub leaders_count: i64,
    #[serde(default, deserialize_with = "deserialize_count")]
    #[cfg_attr(feature = "ts", ts(type = "number"))]
    pub kambusieri_count: i64,
    #[serde(default)]
    pub accommodation: Accommodation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl BranchSegment {
    pub fn new(branch: Branch, start_date: &str, end_date: &str, accommodation: Accommodation) -> Self {
        Self {
            branch,
            start_date: start_date.to_string(),
            end_date: end_date.to_string(),
            youth_count: 0,
            leaders_count: 0,
            kambusieri_count: 0,
            accommodation,
            notes: None,
        }
    }

    /// Builder-style setter for the three headcounts.
    pub fn with_counts(mut self, youth: i64, leaders: i64, kambusieri: i64) -> Self {
        self.youth_count = youth;
        self.leaders_count = leaders;
        self.kambusieri_count = kambusieri;
        self
    }

    pub fn with_notes(mut self, notes: &str) -> Self {
        self.notes = Some(notes.to_string());
        self
    }

    /// Everyone on site for this segment. Saturates instead of overflowing.
    pub fn headcount(&self) -> i64 {
        self.youth_count
            .saturating_add(self.leaders_count)
            .saturating_add(self.kambusieri_count)
    }

    pub fn start(&self) -> Option<NaiveDate> {
        parse_segment_date(&self.start_date)
    }

    pub fn end(&self) -> Option<NaiveDate> {
        parse_segment_date(&self.end_date)
    }
}

/// Parse a form date: `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its
/// calendar date. Empty or malformed input yields `None`.
pub fn parse_segment_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.date_naive()))
}

/// Deserialize a headcount that may arrive as a number, a numeric string,
/// an empty string or null. Empty and null become zero.
pub(crate) fn deserialize_count<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CountVisitor;

    impl<'de> Visitor<'de> for CountVisitor {
        type Value = i64;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("an integer count, a numeric string, or null")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::custom(format!("count {} out of range", v)))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // i64::MAX is not exactly representable; 2^63 is the first value past it
            if !v.is_finite() || v < i64::MIN as f64 || v >= i64::MAX as f64 {
                return Err(E::custom(format!("count {} out of range", v)));
            }
            Ok(v.trunc() as i64)
        }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            let trimmed = v.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            if let Ok(n) = trimmed.parse::<i64>() {
                return self.visit_i64(n);
            }
            match trimmed.parse::<f64>() {
                Ok(f) => self.visit_f64(f),
                Err(_) => Err(E::invalid_value(de::Unexpected::Str(v), &self)),
            }
        }

        fn visit_none<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_unit<E: de::Error>(self) -> Result<i64, E> {
            Ok(0)
        }

        fn visit_some<D2: Deserializer<'de>>(self, deserializer: D2) -> Result<i64, D2::Error> {
            deserializer.deserialize_any(CountVisitor)
        }
    }

    deserializer.deserialize_any(CountVisitor)
}

// ============================================================================
// Tests
// ============================================================================
