use serde::{Deserialize, Serialize};

use crate::attributes::Calculation;
use crate::cipher::{letter_values, LetterValue};
use crate::date::{month_name, DateParts};
use crate::templates::{interpret, Domain, TemplateContext, Topic};
use crate::variant::VariantSelector;
use crate::{NumerologyProfile, Person, ReadingOptions, Result};

pub const KARMIC_DEBT_TOTALS: [u32; 4] = [13, 14, 16, 19];

const DID_YOU_MEAN: [&str; 5] = [
    "How much longer will your inner {soul_urge} keep fighting the {personality} mask you show the world? The day that fight ends is a turning point, and it is close: late {current_year} or early {next_year}. Do you want to know when?",
    "Personal year {personal_year} and life path {life_path} share a hidden link that points to an opening within the next 90 days. To take it you first have to balance your {expression} energy. Do you want to know how?",
    "If you never learn the shadow of your {expression} (its fears and defences), you will miss the change personal year {personal_year} is handing you. Are you ready to look at it?",
    "{first_name}, the surname {last_name} carries a vibration that hides something from your past. It may be a gift from an ancestor or a burden. Do you want to find out which?",
    "Being born on {day} {month_name} {year} was no accident. The date carries a message written in numbers. Do you want to learn to read it?",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Interpretations {
    pub expression: String,
    pub soul_urge: String,
    pub personality: String,
    pub life_path: String,
    pub personal_year: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumerologyReport {
    pub full_name: String,
    pub birth_date: DateParts,
    pub target_year: u32,
    pub profile: NumerologyProfile,
    pub first_name_letters: Vec<LetterValue>,
    pub last_name_letters: Vec<LetterValue>,
    pub interpretations: Interpretations,
    pub synthesis: String,
    pub karmic_cycle: String,
    pub future_shadow: String,
    pub did_you_mean: String,
}

pub fn calculate_numerology(person: &Person, options: &ReadingOptions) -> Result<NumerologyReport> {
    let date = person.validate()?;
    let profile = NumerologyProfile::from_parts(person, &date, options.target_year)?;
    let context = personal_context(person, &date, options.target_year);

    let interpretations = Interpretations {
        expression: interpret(
            Domain::Personal,
            Topic::Expression,
            profile.expression.number,
            &context,
        ),
        soul_urge: interpret(
            Domain::Personal,
            Topic::SoulUrge,
            profile.soul_urge.number,
            &context,
        ),
        personality: interpret(
            Domain::Personal,
            Topic::Personality,
            profile.personality.number,
            &context,
        ),
        life_path: interpret(
            Domain::Personal,
            Topic::LifePath,
            profile.life_path.number,
            &context,
        ),
        personal_year: interpret(
            Domain::Personal,
            Topic::PersonalYear,
            profile.personal_year.number,
            &context,
        ),
    };

    let mut selector = VariantSelector::for_subject(
        options.variant_seed,
        &format!("{}|{}", person.full_name(), person.birth_date.trim()),
    );
    let question = selector
        .pick(&DID_YOU_MEAN[..])
        .copied()
        .unwrap_or(DID_YOU_MEAN[0]);

    let report = NumerologyReport {
        full_name: person.full_name(),
        birth_date: date,
        target_year: options.target_year,
        first_name_letters: letter_values(person.first_name.trim()),
        last_name_letters: letter_values(person.last_name.trim()),
        interpretations,
        synthesis: synthesis(&profile, person.first_name.trim()),
        karmic_cycle: karmic_cycle(&profile),
        future_shadow: future_shadow(&profile, options.current_month),
        did_you_mean: question_context(&context, &profile, options.target_year).render(question),
        profile,
    };
    tracing::debug!(person = %report.full_name, "assembled personal reading");
    Ok(report)
}

fn personal_context(person: &Person, date: &DateParts, target_year: u32) -> TemplateContext {
    let first_name = person.first_name.trim();
    let first_initial = first_name
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect::<String>())
        .unwrap_or_default();
    TemplateContext::new()
        .with("first_name", first_name)
        .with("last_name", person.last_name.trim())
        .with("first_initial", first_initial)
        .with("day", date.day)
        .with("month_name", date.month_name())
        .with("year", date.year)
        .with("current_year", target_year)
}

fn question_context(
    context: &TemplateContext,
    profile: &NumerologyProfile,
    target_year: u32,
) -> TemplateContext {
    context
        .clone()
        .with("expression", profile.expression.number)
        .with("soul_urge", profile.soul_urge.number)
        .with("personality", profile.personality.number)
        .with("life_path", profile.life_path.number)
        .with("personal_year", profile.personal_year.number)
        .with("next_year", target_year.saturating_add(1))
}

/// Tensions between attributes that pull in opposite directions.
pub fn synthesis(profile: &NumerologyProfile, first_name: &str) -> String {
    let expression = profile.expression.number;
    let soul = profile.soul_urge.number;
    let personality = profile.personality.number;
    let year = profile.personal_year.number;

    let mut conflicts = Vec::new();
    if expression == 1 && soul == 2 {
        conflicts.push("You lead in public, yet you are afraid of not being loved. Every decision you make alone costs you a little warmth.");
    }
    if expression == 5 && soul == 4 {
        conflicts.push("Your talents crave freedom while your heart craves security. You open doors and then look for the lock.");
    }
    if expression == 7 && personality == 1 {
        conflicts.push("Inside you is a quiet sage; outside, people see a commander. Few are allowed to meet the first one.");
    }
    if expression == 8 && soul == 6 {
        conflicts.push("You chase material success while your soul wants an emotional bond. The office wins too often.");
    }
    if year == 3 && expression == 4 {
        conflicts.push("This is a creative year, and your nature insists on discipline. Let the plan breathe a little.");
    }
    if expression == 5 && soul == 2 {
        conflicts.push("You run from ties and still long to belong to someone. Closeness frightens exactly the part of you that wants it.");
    }
    if personality == 8 && soul == 9 {
        conflicts.push("You project a strong image while your soul keeps sacrificing itself for others. Nobody sees the cost.");
    }

    if conflicts.is_empty() {
        format!(
            "{}, your numbers are unusually aligned. What you show, what you want and what you can do point in the same direction. Your challenge is not inner conflict but complacency.",
            first_name
        )
    } else {
        conflicts.join("\n\n")
    }
}

/// Karmic debt is read from the unreduced totals, before 13 becomes 4 and so on.
pub fn karmic_cycle(profile: &NumerologyProfile) -> String {
    let totals = [
        ("expression", &profile.expression),
        ("soul urge", &profile.soul_urge),
        ("personality", &profile.personality),
        ("life path", &profile.life_path),
    ];
    let debts: Vec<String> = totals
        .iter()
        .filter(|(_, calculation)| KARMIC_DEBT_TOTALS.contains(&calculation.total))
        .map(|(label, calculation)| karmic_debt_line(label, calculation))
        .collect();

    if debts.is_empty() {
        "No karmic debt numbers appear in your chart. You start this cycle with a clean slate; what you build now is fully yours.".to_string()
    } else {
        debts.join("\n\n")
    }
}

fn karmic_debt_line(label: &str, calculation: &Calculation) -> String {
    let lesson = match calculation.total {
        13 => "shortcuts taken in the past. Steady, patient work is the only way through",
        14 => "freedom that was abused. Moderation turns restlessness into progress",
        16 => "pride that came before a fall. Humility rebuilds what ego broke",
        19 => "power used only for yourself. Independence must now learn to accept help",
        _ => "an unfinished lesson",
    };
    format!(
        "Karmic debt {} in your {}: this number carries {}.",
        calculation.total, label, lesson
    )
}

pub fn future_shadow(profile: &NumerologyProfile, current_month: u32) -> String {
    let next = month_name(wrap_month(current_month + 1));
    let later = month_name(wrap_month(current_month + 3));
    let theme = match profile.personal_year.number {
        1 | 5 => "an impulsive decision you will want to take back",
        2 | 6 => "a relationship that asks more than it gives",
        3 => "a promise made in excitement and left unfinished",
        4 | 8 => "pressure around money or work",
        _ => "an old story that returns for its ending",
    };
    format!(
        "In {} the shadow of your year shows itself as {}. By {} you will know whether you faced it or postponed it.",
        next, theme, later
    )
}

fn wrap_month(month: u32) -> u32 {
    (month.max(1) - 1) % 12 + 1
}
