use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    Dog,
    Cat,
    Bird,
    Fish,
    Rabbit,
}

/// Languages a veterinarian can consult in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Language {
    English,
    Mandarin,
    Cantonese,
    Spanish,
    French,
    Hindi,
    Arabic,
    Japanese,
    Korean,
    Vietnamese,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Mandarin => "Mandarin",
            Self::Cantonese => "Cantonese",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::Hindi => "Hindi",
            Self::Arabic => "Arabic",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Vietnamese => "Vietnamese",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "English" => Ok(Self::English),
            "Mandarin" => Ok(Self::Mandarin),
            "Cantonese" => Ok(Self::Cantonese),
            "Spanish" => Ok(Self::Spanish),
            "French" => Ok(Self::French),
            "Hindi" => Ok(Self::Hindi),
            "Arabic" => Ok(Self::Arabic),
            "Japanese" => Ok(Self::Japanese),
            "Korean" => Ok(Self::Korean),
            "Vietnamese" => Ok(Self::Vietnamese),
            other => Err(format!("Unknown language '{}'", other)),
        }
    }
}
