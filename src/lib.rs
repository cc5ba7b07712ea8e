pub mod attributes;
pub mod career;
pub mod cipher;
pub mod compat;
pub mod config;
pub mod date;
pub mod error;
pub mod prompt;
pub mod reading;
pub mod reduce;
pub mod templates;
pub mod variant;

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::attributes::Calculation;
use crate::cipher::letter_values;
use crate::config::EngineConfig;
use crate::date::DateParts;

pub use crate::career::{calculate_career_reading, CareerReading};
pub use crate::compat::love::{calculate_love_compatibility, LoveCompatibilityResult};
pub use crate::compat::wealth::{calculate_wealth_analysis, WealthAnalysisResult};
pub use crate::error::{NumerologyError, Result};
pub use crate::reading::{calculate_numerology, NumerologyReport};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    /// `day/month/year`, separated by `.`, `/` or `-`.
    pub birth_date: String,
}

impl Person {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: birth_date.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }

    pub(crate) fn validate(&self) -> Result<DateParts> {
        let full_name = self.full_name();
        if letter_values(&full_name).is_empty() {
            return Err(NumerologyError::EmptyName(full_name));
        }
        DateParts::parse(&self.birth_date)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub founder_first_name: String,
    pub founder_last_name: String,
    pub company_name: String,
    /// Same format as [`Person::birth_date`].
    pub registration_date: String,
}

impl Business {
    pub fn founder_name(&self) -> String {
        format!(
            "{} {}",
            self.founder_first_name.trim(),
            self.founder_last_name.trim()
        )
        .trim()
        .to_string()
    }

    pub(crate) fn validate(&self) -> Result<DateParts> {
        let founder = self.founder_name();
        if letter_values(&founder).is_empty() {
            return Err(NumerologyError::EmptyName(founder));
        }
        let company = self.company_name.trim();
        if letter_values(company).is_empty() {
            return Err(NumerologyError::EmptyName(company.to_string()));
        }
        DateParts::parse(&self.registration_date)
    }
}

/// Inputs that would otherwise come from the wall clock or an ambient RNG.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingOptions {
    pub target_year: u32,
    /// 1..=12
    pub current_month: u32,
    pub variant_seed: Option<u64>,
}

impl ReadingOptions {
    pub fn for_date(today: NaiveDate) -> Self {
        Self {
            target_year: u32::try_from(today.year()).unwrap_or(1),
            current_month: today.month(),
            variant_seed: None,
        }
    }

    pub fn from_config(config: &EngineConfig, today: NaiveDate) -> Self {
        let mut options = Self::for_date(today);
        if let Some(year) = config.reading.target_year {
            options.target_year = year;
        }
        options.variant_seed = config.reading.variant_seed;
        options
    }

    pub fn now(config: &EngineConfig) -> Self {
        Self::from_config(config, Local::now().date_naive())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.variant_seed = Some(seed);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    pub expression: Calculation,
    pub soul_urge: Calculation,
    pub personality: Calculation,
    pub life_path: Calculation,
    pub personal_year: Calculation,
}

impl NumerologyProfile {
    pub fn from_person(person: &Person, target_year: u32) -> Result<Self> {
        let date = person.validate()?;
        Self::from_parts(person, &date, target_year)
    }

    /// Builds the profile from a birth date already parsed out of `person`.
    pub(crate) fn from_parts(person: &Person, date: &DateParts, target_year: u32) -> Result<Self> {
        let first = person.first_name.trim();
        let last = person.last_name.trim();
        let profile = Self {
            expression: attributes::expression(first, last),
            soul_urge: attributes::soul_urge(first, last),
            personality: attributes::personality(first, last),
            life_path: attributes::life_path(date),
            personal_year: attributes::personal_year(date, target_year)?,
        };
        tracing::debug!(
            person = %person.full_name(),
            expression = profile.expression.number,
            soul_urge = profile.soul_urge.number,
            personality = profile.personality.number,
            life_path = profile.life_path.number,
            personal_year = profile.personal_year.number,
            "computed numerology profile"
        );
        Ok(profile)
    }
}
