use serde::{Deserialize, Serialize};

use crate::attributes;
use crate::date::month_name;
use crate::templates::{interpret, Domain, TemplateContext, Topic};
use crate::{NumerologyProfile, Person, ReadingOptions, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyVibration {
    pub number: u32,
    pub vibration: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerTiming {
    pub favourable_months: Vec<u32>,
    pub current_month_favourable: bool,
    pub critical_dates: Vec<String>,
    pub narrative: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerReading {
    pub expression: u32,
    pub life_path: u32,
    pub personal_year: u32,
    pub company: Option<CompanyVibration>,
    pub wealth_potential: String,
    pub career_path: String,
    pub challenges: String,
    pub opportunities: String,
    pub timing: CareerTiming,
    pub future_shadow: String,
}

pub fn company_vibration(number: u32) -> &'static str {
    match number {
        1 => "Leadership and pioneering",
        2 => "Cooperation and harmony",
        3 => "Creativity and communication",
        4 => "Discipline and stability",
        5 => "Change and adaptation",
        6 => "Responsibility and service",
        7 => "Analysis and strategy",
        8 => "Power and success",
        9 => "Humanity and vision",
        11 => "Inspiration and vision",
        22 => "Master builder",
        33 => "Master healer",
        _ => "Unknown",
    }
}

pub fn favourable_months(life_path: u32) -> [u32; 4] {
    match life_path {
        2 | 5 | 8 | 11 => [2, 5, 8, 11],
        3 | 6 | 9 | 33 => [3, 6, 9, 12],
        _ => [1, 4, 7, 10],
    }
}

fn wealth_potential(person: &Person, expression: u32, life_path: u32) -> String {
    let focus = if expression == 8 || life_path == 8 {
        "Eight is the number of money and power. You are wired for material success, and that success charges a price: balance is the key of eight."
    } else if expression == 4 || life_path == 4 {
        "Four is the number of stability. You build wealth slowly and surely through patience and discipline, though sometimes you must learn to take a risk."
    } else if expression == 6 || life_path == 6 {
        "Six is the number of responsibility and service. You earn by serving others; make sure some of that wealth stays with you."
    } else {
        "Your numbers describe a personal relationship with money. Money works like a mirror, and it will show you yourself."
    };
    format!(
        "**Wealth potential**\n\n{}, the key to your wealth is already yours; first find where the lock is. Expression **{}** shapes what money means to you, and life path **{}** sets the lessons of your wealth journey.\n\n{}",
        person.full_name(),
        expression,
        life_path,
        focus
    )
}

fn challenges(first_name: &str, expression: u32) -> String {
    let money_and_feelings = match expression {
        2 | 6 | 9 => "You are emotional, and money can pull you into emotional decisions. Money is logic, not feeling; find that balance.",
        1 | 5 | 8 => "You are independent, and money can become the symbol of that independence. Connections matter as much as capital.",
        _ => "You are balanced, and money can shake that balance. Money is power, and power brings responsibility.",
    };
    format!(
        "**Challenges**\n\n{}, these obstacles are here to strengthen you, not to stop you.\n\n1. Money and emotion: {}\n2. Success and loneliness: there are few people at the top, and that solitude is optional.\n3. Risk and security: great risk brings great reward and great loss alike.",
        first_name, money_and_feelings
    )
}

fn opportunities(first_name: &str, personal_year: u32, options: &ReadingOptions) -> String {
    let context = TemplateContext::new()
        .with("first_name", first_name)
        .with("current_year", options.target_year);
    let outlook = interpret(Domain::Wealth, Topic::PersonalYear, personal_year, &context);
    let window = |offset: u32| month_name((options.current_month.max(1) - 1 + offset) % 12 + 1);
    format!(
        "**Opportunities**\n\nPersonal year {}: {}\n\nWindows:\n- {}: a new offer may arrive.\n- {}: a connection may open a door.\n- {}: a financial opening may appear.",
        personal_year,
        outlook,
        window(1),
        window(3),
        window(6)
    )
}

fn timing(first_name: &str, life_path: u32, current_month: u32) -> CareerTiming {
    let months = favourable_months(life_path);
    let current_month_favourable = months.contains(&current_month);
    let critical_dates = vec![
        format!("{} 15", month_name(months[0])),
        format!("{} 8", month_name(months[1])),
        format!("{} 22", month_name(months[2])),
    ];
    let now = if current_month_favourable {
        format!(
            "We are in {}, a favourable time to start something and take a step.",
            month_name(current_month)
        )
    } else {
        format!(
            "We are in {}, a time to wait, plan and prepare. The right moment will come.",
            month_name(current_month)
        )
    };
    let narrative = format!(
        "**Timing**\n\n{}, life path **{}** favours {}.\n\n{}\n\nCritical dates: {} (decision), {} (finance), {} (career).",
        first_name,
        life_path,
        months
            .iter()
            .map(|m| month_name(*m))
            .collect::<Vec<_>>()
            .join(", "),
        now,
        critical_dates[0],
        critical_dates[1],
        critical_dates[2]
    );
    CareerTiming {
        favourable_months: months.to_vec(),
        current_month_favourable,
        critical_dates,
        narrative,
    }
}

fn future_shadow(first_name: &str) -> String {
    format!(
        "**Future shadow**\n\n{}, the coming period is critical for your wealth. Three scenarios, three roads.\n\n1. Growth: a promotion, an investment or a new venture lifts you a level, and it frightens you as much as it excites you.\n2. Transformation: a change of job, sector or mindset. Demanding and freeing.\n3. Patience: a pause to gather strength. It pays off later.\n\nWhich scenario scares you most? That one probably holds the most growth.",
        first_name
    )
}

pub fn calculate_career_reading(
    person: &Person,
    company_name: Option<&str>,
    options: &ReadingOptions,
) -> Result<CareerReading> {
    let profile = NumerologyProfile::from_person(person, options.target_year)?;
    let first_name = person.first_name.trim();
    let expression = profile.expression.number;
    let life_path = profile.life_path.number;
    let personal_year = profile.personal_year.number;

    let company = company_name
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(|name| {
            let number = attributes::company_number(name).number;
            CompanyVibration {
                number,
                vibration: company_vibration(number).to_string(),
            }
        });

    let context = TemplateContext::new().with("first_name", first_name);
    let career_path = format!(
        "**Career path**\n\n{}\n\nLife path **{}** is the road these talents travel.",
        interpret(Domain::Wealth, Topic::Expression, expression, &context),
        life_path
    );

    let reading = CareerReading {
        expression,
        life_path,
        personal_year,
        company,
        wealth_potential: wealth_potential(person, expression, life_path),
        career_path,
        challenges: challenges(first_name, expression),
        opportunities: opportunities(first_name, personal_year, options),
        timing: timing(first_name, life_path, options.current_month),
        future_shadow: future_shadow(first_name),
    };
    tracing::debug!(person = %person.full_name(), expression, life_path, "computed career reading");
    Ok(reading)
}
