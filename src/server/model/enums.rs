//! Conversions between the API enums and their SeaORM active enum columns.

use entity::sea_orm_active_enums as db;

use crate::model::enums::{Language, Sex, Species};

impl From<db::Sex> for Sex {
    fn from(value: db::Sex) -> Self {
        match value {
            db::Sex::Male => Self::Male,
            db::Sex::Female => Self::Female,
        }
    }
}

impl From<Sex> for db::Sex {
    fn from(value: Sex) -> Self {
        match value {
            Sex::Male => Self::Male,
            Sex::Female => Self::Female,
        }
    }
}

impl From<db::Species> for Species {
    fn from(value: db::Species) -> Self {
        match value {
            db::Species::Dog => Self::Dog,
            db::Species::Cat => Self::Cat,
            db::Species::Bird => Self::Bird,
            db::Species::Fish => Self::Fish,
            db::Species::Rabbit => Self::Rabbit,
        }
    }
}

impl From<Species> for db::Species {
    fn from(value: Species) -> Self {
        match value {
            Species::Dog => Self::Dog,
            Species::Cat => Self::Cat,
            Species::Bird => Self::Bird,
            Species::Fish => Self::Fish,
            Species::Rabbit => Self::Rabbit,
        }
    }
}

/// Encodes languages for the `veterinarians.languages` column, NULL when empty.
pub fn languages_to_column(languages: &[Language]) -> Option<String> {
    if languages.is_empty() {
        return None;
    }

    let mut names: Vec<&str> = Vec::with_capacity(languages.len());
    for language in languages {
        if !names.contains(&language.as_str()) {
            names.push(language.as_str());
        }
    }

    Some(names.join(","))
}

/// Decodes the `veterinarians.languages` column.
///
/// Unknown names can only come from manual edits to the table; they are skipped.
pub fn languages_from_column(column: Option<&str>) -> Vec<Language> {
    let Some(column) = column else {
        return Vec::new();
    };

    column
        .split(',')
        .filter(|name| !name.trim().is_empty())
        .filter_map(|name| match name.parse::<Language>() {
            Ok(language) => Some(language),
            Err(e) => {
                tracing::warn!("Skipping stored veterinarian language: {}", e);
                None
            }
        })
        .collect()
}
