use serde::{Deserialize, Serialize};

use crate::cipher::{is_vowel, letter_values, sum_values, LetterValue};
use crate::date::{check_target_year, DateParts};
use crate::error::Result;
use crate::reduce::{reduce_keeping_masters, reduce_to_single_digit};

/// Result of one attribute calculation along with the arithmetic that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calculation {
    pub number: u32,
    /// Unreduced total the number was derived from.
    pub total: u32,
    pub trail: String,
}

pub fn expression(first_name: &str, last_name: &str) -> Calculation {
    let values = letter_values(&full_name(first_name, last_name));
    letter_calculation(&values)
}

pub fn soul_urge(first_name: &str, last_name: &str) -> Calculation {
    let values: Vec<LetterValue> = letter_values(&full_name(first_name, last_name))
        .into_iter()
        .filter(|lv| is_vowel(lv.letter))
        .collect();
    letter_calculation(&values)
}

pub fn personality(first_name: &str, last_name: &str) -> Calculation {
    let values: Vec<LetterValue> = letter_values(&full_name(first_name, last_name))
        .into_iter()
        .filter(|lv| !is_vowel(lv.letter))
        .collect();
    letter_calculation(&values)
}

/// Same arithmetic as [`expression`], applied to a brand or company name.
pub fn company_number(company_name: &str) -> Calculation {
    letter_calculation(&letter_values(company_name))
}

/// Day, month and year are reduced on their own, then their sum is reduced again.
pub fn life_path(date: &DateParts) -> Calculation {
    let day = reduce_keeping_masters(date.day);
    let month = reduce_keeping_masters(date.month);
    let year = reduce_keeping_masters(date.year);
    let total = day + month + year;
    let number = reduce_keeping_masters(total);
    let trail = format!(
        "{}→{} + {}→{} + {}→{} = {} → {}",
        date.day, day, date.month, month, date.year, year, total, number
    );
    Calculation {
        number,
        total,
        trail,
    }
}

/// Same arithmetic as [`life_path`], applied to a registration date.
pub fn registration_energy(date: &DateParts) -> Calculation {
    life_path(date)
}

/// Never yields a master number. Fails when `target_year` is outside 1..=9999.
pub fn personal_year(date: &DateParts, target_year: u32) -> Result<Calculation> {
    let target_year = check_target_year(target_year)?;
    let total = date.day + date.month + target_year;
    let number = reduce_to_single_digit(total);
    let trail = format!(
        "{} (day) + {} (month) + {} (year) = {} → {}",
        date.day, date.month, target_year, total, number
    );
    Ok(Calculation {
        number,
        total,
        trail,
    })
}

fn letter_calculation(values: &[LetterValue]) -> Calculation {
    let total = sum_values(values);
    let number = reduce_keeping_masters(total);
    let letters = values
        .iter()
        .map(|lv| format!("{}={}", lv.letter, lv.value))
        .collect::<Vec<_>>()
        .join(", ");
    let trail = if letters.is_empty() {
        format!("Total: {} → {}", total, number)
    } else {
        format!("{} → Total: {} → {}", letters, total, number)
    };
    Calculation {
        number,
        total,
        trail,
    }
}

fn full_name(first_name: &str, last_name: &str) -> String {
    format!("{}{}", first_name, last_name)
}
