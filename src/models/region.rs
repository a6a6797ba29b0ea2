use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// School year key the app starts with before any settings are saved.
pub const DEFAULT_SCHOOL_YEAR: &str = "2025-2026";

/// Coarse geographic partition used by the upstream dataset to decide which
/// holiday windows apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Noord,
    Midden,
    Zuid,
}

impl Region {
    /// Lowercase wire/storage form, matching the upstream region strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Noord => "noord",
            Region::Midden => "midden",
            Region::Zuid => "zuid",
        }
    }

    /// Capitalized form for display headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Noord => "Noord",
            Region::Midden => "Midden",
            Region::Zuid => "Zuid",
        }
    }

    /// Map a GPS latitude to the region it falls in.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude > 52.5 {
            Region::Noord
        } else if latitude > 51.5 {
            Region::Midden
        } else {
            Region::Zuid
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Region {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "noord" => Ok(Region::Noord),
            "midden" => Ok(Region::Midden),
            "zuid" => Ok(Region::Zuid),
            other => Err(format!("unknown region: {}", other)),
        }
    }
}

/// Inputs that scope one retrieval: which region and which annual dataset.
///
/// Loaded once by the presentation layer and passed into every engine call;
/// the engine itself never reads settings ambiently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext {
    pub region: Region,
    pub school_year: String,
}

impl QueryContext {
    pub fn new(region: Region, school_year: impl Into<String>) -> Self {
        Self {
            region,
            school_year: school_year.into(),
        }
    }
}

impl Default for QueryContext {
    fn default() -> Self {
        Self {
            region: Region::Midden,
            school_year: DEFAULT_SCHOOL_YEAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_latitude_boundaries() {
        assert_eq!(Region::from_latitude(53.2), Region::Noord);
        assert_eq!(Region::from_latitude(52.1), Region::Midden);
        assert_eq!(Region::from_latitude(51.5), Region::Zuid);
        assert_eq!(Region::from_latitude(50.8), Region::Zuid);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Noord".parse::<Region>().unwrap(), Region::Noord);
        assert_eq!(" zuid ".parse::<Region>().unwrap(), Region::Zuid);
        assert!("oost".parse::<Region>().is_err());
    }

    #[test]
    fn test_default_context() {
        let context = QueryContext::default();
        assert_eq!(context.region, Region::Midden);
        assert_eq!(context.school_year, "2025-2026");
    }
}
