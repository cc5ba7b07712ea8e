use serde::{Deserialize, Serialize};

use crate::attributes::{self, Calculation};
use crate::compat::{pair_matches, Severity};
use crate::date::check_target_year;
use crate::templates::{interpret, Domain, TemplateContext, Topic};
use crate::{Business, ReadingOptions, Result};

const COMPLEMENTARY: [(u32, u32); 5] = [(1, 8), (3, 6), (2, 4), (5, 9), (7, 11)];
const DANGEROUS: [(u32, u32); 4] = [(4, 5), (1, 9), (2, 8), (3, 7)];

/// Preferred company numbers for a rename, best first.
const TARGET_NUMBERS: [u32; 4] = [8, 6, 1, 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityStatus {
    Harmony,
    Neutral,
    Conflict,
    Danger,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskKind {
    Bankruptcy,
    CashLeak,
    PartnershipConflict,
    Timing,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FounderCompatibility {
    pub status: CompatibilityStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WealthScores {
    pub prosperity: u32,
    pub money_attraction: u32,
    pub stability: u32,
    pub growth: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub kind: RiskKind,
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl RiskFactor {
    fn new(kind: RiskKind, title: &str, description: &str, severity: Severity) -> Self {
        Self {
            kind,
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlternativeName {
    pub name: String,
    pub number: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NameChangeSuggestion {
    pub recommended: bool,
    pub reason: String,
    pub target_number: Option<u32>,
    pub alternative_names: Vec<AlternativeName>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthActivation {
    pub office_direction: String,
    pub logo_colors: String,
    pub meeting_days: String,
    pub mantra: String,
    pub launch_dates: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthLockedContent {
    pub critical_investment_dates: Vec<String>,
    pub bankruptcy_warning: String,
    pub wealth_activation: WealthActivation,
    pub did_you_mean: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthCalculations {
    pub company_name: Calculation,
    pub founder_expression: String,
    pub registration_date: Calculation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WealthAnalysisResult {
    pub company_number: u32,
    pub company_interpretation: String,
    pub founder_expression: u32,
    pub compatibility_status: CompatibilityStatus,
    pub compatibility_message: String,
    pub registration_energy: u32,
    pub registration_interpretation: String,
    pub scores: WealthScores,
    pub risk_factors: Vec<RiskFactor>,
    pub name_change_suggestion: NameChangeSuggestion,
    pub locked_content: WealthLockedContent,
    pub calculations: WealthCalculations,
}

/// Equality and complementary pairs are checked before the distance band,
/// and the distance band before the dangerous pairs.
pub fn founder_compatibility(founder_expression: u32, company_number: u32) -> FounderCompatibility {
    let (status, message) = if founder_expression == company_number {
        (
            CompatibilityStatus::Harmony,
            "Perfect harmony. The founder's energy runs on the same frequency as the company name, which means natural flow and success.".to_string(),
        )
    } else if pair_matches(&COMPLEMENTARY, founder_expression, company_number) {
        (
            CompatibilityStatus::Harmony,
            "Strong harmony. Founder and company carry complementary energies with high potential to grow together.".to_string(),
        )
    } else if founder_expression.abs_diff(company_number) <= 2 {
        (
            CompatibilityStatus::Neutral,
            "Neutral. There is no significant conflict and no special synergy either. Success comes through work.".to_string(),
        )
    } else if pair_matches(&DANGEROUS, founder_expression, company_number) {
        (
            CompatibilityStatus::Danger,
            format!(
                "CASH LEAK RISK! The founder's energy ({}) clashes with the company name ({}). Money earned may disappear in unexpected ways, and persisting risks financial loss.",
                founder_expression, company_number
            ),
        )
    } else {
        (
            CompatibilityStatus::Conflict,
            format!(
                "Conflict. The founder ({}) and the company ({}) are on different frequencies, which means inner resistance and slow growth.",
                founder_expression, company_number
            ),
        )
    };
    FounderCompatibility { status, message }
}

fn base_scores(company_number: u32) -> (i32, i32, i32, i32) {
    match company_number {
        2 => (65, 60, 70, 60),
        3 => (70, 65, 50, 80),
        4 => (70, 65, 90, 55),
        5 => (65, 60, 45, 85),
        6 => (75, 70, 75, 65),
        7 => (60, 55, 70, 60),
        8 => (95, 95, 80, 90),
        9 => (70, 60, 65, 70),
        11 => (80, 70, 60, 85),
        22 => (95, 90, 85, 95),
        33 => (85, 70, 70, 80),
        _ => (75, 70, 60, 85),
    }
}

pub fn wealth_scores(
    company_number: u32,
    registration_energy: u32,
    status: CompatibilityStatus,
) -> WealthScores {
    let (mut prosperity, mut money, mut stability, mut growth) = base_scores(company_number);

    let (dp, dm, ds, dg) = match status {
        CompatibilityStatus::Harmony => (10, 10, 5, 10),
        CompatibilityStatus::Conflict => (-15, -15, -10, -10),
        CompatibilityStatus::Danger => (-25, -30, -15, -20),
        CompatibilityStatus::Neutral => (0, 0, 0, 0),
    };
    prosperity += dp;
    money += dm;
    stability += ds;
    growth += dg;

    match registration_energy {
        8 => {
            prosperity += 5;
            money += 10;
        }
        4 => stability += 10,
        3 => growth += 10,
        _ => {}
    }

    WealthScores {
        prosperity: clamp_score(prosperity),
        money_attraction: clamp_score(money),
        stability: clamp_score(stability),
        growth: clamp_score(growth),
    }
}

fn clamp_score(value: i32) -> u32 {
    value.clamp(0, 100) as u32
}

pub fn risk_factors(
    company_number: u32,
    founder_expression: u32,
    registration_energy: u32,
    status: CompatibilityStatus,
) -> Vec<RiskFactor> {
    let mut risks = Vec::new();

    if status == CompatibilityStatus::Danger {
        risks.push(RiskFactor::new(
            RiskKind::CashLeak,
            "Cash leak risk",
            "The founder's energy clashes with the company name. Expect unexpected expenses, losses and unproductive investments; 'where did the money go?' will be a frequent question.",
            Severity::Critical,
        ));
    }
    if company_number == 4 && registration_energy == 5 {
        risks.push(RiskFactor::new(
            RiskKind::Bankruptcy,
            "Bankruptcy risk",
            "The company name (4) wants stability while the registration date (5) brings change. This conflict can cause financial instability. Watch years 5 and 9 closely.",
            Severity::High,
        ));
    }
    if company_number == 8 && registration_energy == 9 {
        risks.push(RiskFactor::new(
            RiskKind::Bankruptcy,
            "Over-expansion risk",
            "The company (8) wants fast growth while the registration date (9) carries completion. Uncontrolled expansion can lead to collapse within 3-5 years.",
            Severity::High,
        ));
    }
    if company_number == 1 && founder_expression == 2 {
        risks.push(RiskFactor::new(
            RiskKind::PartnershipConflict,
            "Partnership conflict",
            "The company wants leadership (1) while the founder seeks harmony (2). Power struggles are likely in any partnership; decide carefully between going solo and partnering.",
            Severity::Medium,
        ));
    }
    if registration_energy == 7 && company_number == 3 {
        risks.push(RiskFactor::new(
            RiskKind::Timing,
            "Timing risk",
            "The registration date carries analysis (7) while the company name (3) wants creativity. Too long a research phase can mean entering the market late: analysis paralysis.",
            Severity::Medium,
        ));
    }
    if company_number == 5 {
        risks.push(RiskFactor::new(
            RiskKind::CashLeak,
            "Scatter risk",
            "Five brings flexibility and also focus problems. Too many projects, divided attention and money slipping away. Discipline is essential.",
            Severity::Medium,
        ));
    }

    if risks.is_empty() {
        risks.push(RiskFactor::new(
            RiskKind::Timing,
            "Low risk",
            "Your numbers show no significant risk. No risk is not a guarantee of success; work, strategy and luck are still required.",
            Severity::Low,
        ));
    }
    risks
}

pub fn name_change_suggestion(
    company_name: &str,
    company_number: u32,
    founder_expression: u32,
    status: CompatibilityStatus,
) -> NameChangeSuggestion {
    if !matches!(
        status,
        CompatibilityStatus::Danger | CompatibilityStatus::Conflict
    ) {
        return NameChangeSuggestion {
            recommended: false,
            reason: "The current name is compatible with the founder's energy. A rename is not necessary; focus on strengthening the name you have.".to_string(),
            target_number: None,
            alternative_names: Vec::new(),
        };
    }

    let target_number = TARGET_NUMBERS
        .iter()
        .copied()
        .find(|n| *n != company_number && *n != founder_expression)
        .unwrap_or(8);
    let alternative_names = [
        format!("{} Group", company_name),
        format!("{} International", company_name),
        format!("{} Plus", company_name),
        format!("New {}", company_name),
    ]
    .into_iter()
    .map(|name| {
        let number = attributes::company_number(&name).number;
        AlternativeName { name, number }
    })
    .collect();

    NameChangeSuggestion {
        recommended: true,
        reason: format!(
            "The current name ({}) clashes with the founder's energy ({}). That conflict shows up as financial losses, inner resistance and slow growth. A name vibrating at {} would align the company.",
            company_number, founder_expression, target_number
        ),
        target_number: Some(target_number),
        alternative_names,
    }
}

pub fn critical_investment_dates(target_year: u32) -> Vec<String> {
    vec![
        format!("{}-03-15", target_year),
        format!("{}-06-21", target_year),
        format!("{}-09-08", target_year),
        format!("{}-01-11", target_year.saturating_add(1)),
    ]
}

fn bankruptcy_warning(
    company_number: u32,
    founder_expression: u32,
    registration_energy: u32,
    status: CompatibilityStatus,
    target_year: u32,
) -> String {
    if status == CompatibilityStatus::Danger {
        format!(
            "High bankruptcy risk: the clash between founder energy ({}) and company name ({}) can become a financial black hole, especially in {}.",
            founder_expression,
            company_number,
            target_year.saturating_add(1)
        )
    } else if company_number == 5 && registration_energy == 4 {
        "Medium bankruptcy risk: the company name (5) wants change while the registration date (4) wants stability. That tension breeds indecision and swings, most visibly in economic downturns.".to_string()
    } else if company_number == 8 {
        "Low bankruptcy risk: 8 stands for financial success and abundance. It is also the number of karmic balance, and money made unethically is returned with interest.".to_string()
    } else {
        "Controlled risk: your numbers show no significant bankruptcy risk. Market conditions, competition and management mistakes still matter.".to_string()
    }
}

fn wealth_activation(company_number: u32, founder_expression: u32, dates: &[String]) -> WealthActivation {
    let office_direction = match company_number {
        8 | 6 => "Southeast (abundance) or north (career)",
        4 | 7 => "West (creativity) or northeast (wisdom)",
        _ => "East (new beginnings) or south (recognition)",
    };
    let logo_colors = match company_number {
        8 | 1 => "Gold, yellow and orange (abundance and power)",
        4 | 7 => "Blue and purple (wisdom and depth)",
        3 | 5 => "Green and turquoise (growth and freshness)",
        _ => "Red and pink (passion and energy)",
    };
    let mantra = match company_number {
        8 => "Abundance flows to me",
        1 => "I lead, and success follows",
        6 => "Everyone I serve brings abundance back",
        _ => "We grow together",
    };
    let launch_dates = [dates.first(), dates.get(2)]
        .into_iter()
        .flatten()
        .cloned()
        .collect();

    WealthActivation {
        office_direction: office_direction.to_string(),
        logo_colors: logo_colors.to_string(),
        meeting_days: format!(
            "Day {} of each month (company number) or day {} (founder energy) suits important decisions.",
            company_number, founder_expression
        ),
        mantra: mantra.to_string(),
        launch_dates,
    }
}

fn did_you_mean(company_name: &str, company_number: u32) -> String {
    let context = TemplateContext::new().with("company_name", company_name);
    let shadow = interpret(Domain::Wealth, Topic::Shadow, company_number, &context);
    format!(
        "Did you mean?\n\nThe number of {} is {}. The shadow of that number, its unconscious energy, may be what blocks the company's real potential.\n\n{}",
        company_name, company_number, shadow
    )
}

pub fn calculate_wealth_analysis(
    business: &Business,
    options: &ReadingOptions,
) -> Result<WealthAnalysisResult> {
    let registration = business.validate()?;
    check_target_year(options.target_year)?;
    let company_name = business.company_name.trim();

    let company = attributes::company_number(company_name);
    let founder_expression = attributes::expression(
        business.founder_first_name.trim(),
        business.founder_last_name.trim(),
    )
    .number;
    let registration_calc = attributes::registration_energy(&registration);

    let compatibility = founder_compatibility(founder_expression, company.number);
    let status = compatibility.status;

    let context = TemplateContext::new().with("company_name", company_name);
    let company_interpretation = interpret(
        Domain::Wealth,
        Topic::CompanyNumber,
        company.number,
        &context,
    );
    let registration_interpretation = interpret(
        Domain::Wealth,
        Topic::RegistrationEnergy,
        registration_calc.number,
        &context,
    );

    let dates = critical_investment_dates(options.target_year);
    let locked_content = WealthLockedContent {
        bankruptcy_warning: bankruptcy_warning(
            company.number,
            founder_expression,
            registration_calc.number,
            status,
            options.target_year,
        ),
        wealth_activation: wealth_activation(company.number, founder_expression, &dates),
        did_you_mean: did_you_mean(company_name, company.number),
        critical_investment_dates: dates,
    };

    let result = WealthAnalysisResult {
        company_number: company.number,
        company_interpretation,
        founder_expression,
        compatibility_status: status,
        compatibility_message: compatibility.message,
        registration_energy: registration_calc.number,
        registration_interpretation,
        scores: wealth_scores(company.number, registration_calc.number, status),
        risk_factors: risk_factors(
            company.number,
            founder_expression,
            registration_calc.number,
            status,
        ),
        name_change_suggestion: name_change_suggestion(
            company_name,
            company.number,
            founder_expression,
            status,
        ),
        locked_content,
        calculations: WealthCalculations {
            founder_expression: format!("{} = {}", business.founder_name(), founder_expression),
            company_name: company,
            registration_date: registration_calc,
        },
    };
    tracing::debug!(
        company = %company_name,
        company_number = result.company_number,
        founder_expression = result.founder_expression,
        status = ?result.compatibility_status,
        "computed wealth analysis"
    );
    Ok(result)
}
