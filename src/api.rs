use serde::Deserialize;

use kader_matrisi::date::check_target_year;
use kader_matrisi::{Business, Person, ReadingOptions};

#[derive(Debug, Default, Deserialize)]
pub struct ApiPerson {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
}

impl ApiPerson {
    pub fn into_person(self, label: &str) -> Result<Person, String> {
        let first_name = required(self.first_name, &format!("{}.first_name", label))?;
        let last_name = self.last_name.unwrap_or_default().trim().to_string();
        let birth_date = required(self.birth_date, &format!("{}.birth_date", label))?;
        Ok(Person::new(first_name, last_name, birth_date))
    }
}

/// Per-request overrides of the server's reading options.
#[derive(Debug, Default, Deserialize)]
pub struct ApiOptions {
    pub target_year: Option<u32>,
    pub current_month: Option<u32>,
    pub variant_seed: Option<u64>,
}

impl ApiOptions {
    pub fn apply(&self, mut options: ReadingOptions) -> Result<ReadingOptions, String> {
        if let Some(year) = self.target_year {
            options.target_year = check_target_year(year).map_err(|err| err.to_string())?;
        }
        if let Some(month) = self.current_month {
            if !(1..=12).contains(&month) {
                return Err(format!("invalid current_month (1-12): {}", month));
            }
            options.current_month = month;
        }
        if let Some(seed) = self.variant_seed {
            options.variant_seed = Some(seed);
        }
        Ok(options)
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiPersonalRequest {
    #[serde(flatten)]
    pub person: ApiPerson,
    #[serde(flatten)]
    pub options: ApiOptions,
}

#[derive(Debug, Deserialize)]
pub struct ApiLoveRequest {
    pub user: Option<ApiPerson>,
    pub partner: Option<ApiPerson>,
    #[serde(flatten)]
    pub options: ApiOptions,
}

impl ApiLoveRequest {
    pub fn into_people(self) -> Result<(Person, Person, ApiOptions), String> {
        let user = self
            .user
            .ok_or_else(|| "user is required".to_string())?
            .into_person("user")?;
        let partner = self
            .partner
            .ok_or_else(|| "partner is required".to_string())?
            .into_person("partner")?;
        Ok((user, partner, self.options))
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiWealthRequest {
    pub founder_first_name: Option<String>,
    pub founder_last_name: Option<String>,
    pub company_name: Option<String>,
    pub registration_date: Option<String>,
    #[serde(flatten)]
    pub options: ApiOptions,
}

impl ApiWealthRequest {
    pub fn into_business(self) -> Result<(Business, ApiOptions), String> {
        let business = Business {
            founder_first_name: required(self.founder_first_name, "founder_first_name")?,
            founder_last_name: self.founder_last_name.unwrap_or_default().trim().to_string(),
            company_name: required(self.company_name, "company_name")?,
            registration_date: required(self.registration_date, "registration_date")?,
        };
        Ok((business, self.options))
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiCareerRequest {
    #[serde(flatten)]
    pub person: ApiPerson,
    pub company_name: Option<String>,
    #[serde(flatten)]
    pub options: ApiOptions,
}

fn required(value: Option<String>, field: &str) -> Result<String, String> {
    let value = value.unwrap_or_default().trim().to_string();
    if value.is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(value)
}
