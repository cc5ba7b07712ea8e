use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{NumerologyError, Result};

/// Largest year accepted for birth, registration and target dates.
pub const MAX_YEAR: u32 = 9999;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day, month and year of a `day/month/year` date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateParts {
    pub day: u32,
    pub month: u32,
    pub year: u32,
}

impl DateParts {
    /// Parses `15.03.1990`, `15/03/1990` or `15-03-1990`.
    ///
    /// The three components must form a real calendar date.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split(['.', '/', '-']).collect();
        if parts.len() != 3 {
            return Err(invalid(input, "expected day, month and year"));
        }

        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(parts.iter()) {
            *slot = part
                .trim()
                .parse::<u32>()
                .map_err(|_| invalid(input, &format!("`{}` is not a number", part.trim())))?;
        }
        let [day, month, year] = numbers;

        if year == 0 || year > MAX_YEAR {
            return Err(invalid(input, "year must be within 1..=9999"));
        }
        let calendar_year =
            i32::try_from(year).map_err(|_| invalid(input, "year is out of range"))?;
        if NaiveDate::from_ymd_opt(calendar_year, month, day).is_none() {
            return Err(invalid(input, "not a calendar date"));
        }

        Ok(Self { day, month, year })
    }

    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

pub fn check_target_year(year: u32) -> Result<u32> {
    if (1..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(NumerologyError::TargetYearOutOfRange(year))
    }
}

/// English month name for 1..=12; other values wrap around the year.
pub fn month_name(month: u32) -> &'static str {
    let index = (month.max(1) - 1) % 12;
    MONTH_NAMES[index as usize]
}

fn invalid(input: &str, reason: &str) -> NumerologyError {
    NumerologyError::InvalidDate {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
