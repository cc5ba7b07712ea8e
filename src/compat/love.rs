use serde::{Deserialize, Serialize};

use crate::compat::{pair_lookup, pair_matches, Severity};
use crate::config::LoveWeights;
use crate::templates::{interpret, Domain, TemplateContext, Topic};
use crate::variant::VariantSelector;
use crate::{NumerologyProfile, Person, ReadingOptions, Result};

const SOUL_COMPLEMENTARY: [(u32, u32); 4] = [(1, 2), (3, 6), (4, 8), (5, 9)];
const SOUL_CHALLENGING: [(u32, u32); 3] = [(1, 8), (4, 5), (2, 7)];

const DESTINY_POWER: [(u32, u32); 4] = [(1, 8), (3, 5), (2, 6), (4, 9)];
const DESTINY_CHALLENGING: [(u32, u32); 3] = [(1, 4), (5, 7), (3, 8)];

const CHEMISTRY_MAGNETIC: [(u32, u32); 4] = [(1, 5), (2, 6), (3, 9), (4, 7)];
const CHEMISTRY_PASSIONATE: [(u32, u32); 3] = [(1, 9), (5, 8), (3, 7)];

/// Life paths that carry a karmic lesson into a relationship.
const KARMIC_NUMBERS: [u32; 7] = [11, 22, 33, 13, 14, 16, 19];

const CRITICAL_MONTHS: [u32; 3] = [3, 6, 9];

const YEAR_WARNINGS: [((u32, u32), &str); 4] = [
    (
        (9, 1),
        "Critical warning: one of you is in an ending cycle (9) while the other is beginning (1). One wants to close the book while the other opens a new page, and the risk of separation rises sharply.",
    ),
    (
        (4, 5),
        "High conflict risk: one wants stability (4), the other change (5). Routine against adventure.",
    ),
    (
        (2, 7),
        "Emotional distance risk: one seeks closeness (2), the other solitude (7). One keeps giving while the other pulls away.",
    ),
    (
        (3, 8),
        "Priority clash: one is after levity and fun (3), the other after career and ambition (8). Lifestyle differences may grow.",
    ),
];

const SEXUAL_RESONANCE: [((u32, u32), &str); 10] = [
    ((1, 1), "Passionate but competitive. Both of you want to lead, even in the bedroom. Fiery and exhausting."),
    ((1, 2), "Strong attraction. The dominant energy of 1 meets the receptive side of 2. Balanced and satisfying."),
    ((1, 5), "Magnetic. Physically this pairing is gold: passion, adventure and spontaneity. Long-term commitment needs questioning."),
    ((2, 6), "Emotional depth and tenderness. Physical closeness grows with emotional safety. Slow but deep."),
    ((3, 5), "Playful and experimental. Routine kills it and novelty revives it. It may feel thin to someone looking for depth."),
    ((4, 8), "Strong and steady. Physical commitment is high while romance may run low. Do not let it feel like business."),
    ((5, 9), "Universal attraction. The adventure of 5 meets the depth of 9, in body and in spirit."),
    ((6, 9), "Tenderness and devotion. Emotional loyalty is very high, though passion can settle into habit."),
    ((7, 7), "Deep yet distant. Both of you turn inward, so physical closeness follows the spiritual bond. Patience is required."),
    ((8, 8), "Strong and intense. Two authoritative energies: either perfect harmony or a constant power struggle."),
];

const EMOTIONAL_RESONANCE: [((u32, u32), &str); 8] = [
    ((1, 1), "Both of you prize independence and may not look emotionally needy. That is not a lack of love, only a different love language."),
    ((1, 2), "A perfect fit. The steadiness of 1 gives 2 the safety it needs, and the tenderness of 2 softens 1."),
    ((2, 2), "A deep emotional bond. Both of you want to love and be loved, and you can also amplify each other's mood swings."),
    ((2, 6), "Emotional paradise. Two caring souls who sense each other's needs naturally. Remember your boundaries."),
    ((3, 6), "Joy and care. The cheer of 3 meets the nurturing of 6 in an emotionally nourishing bond."),
    ((4, 8), "Practical yet deep. You show feelings through actions more than words. Reliability is your greatest gift to each other."),
    ((5, 9), "Free spirits. You do not depend on each other emotionally, which keeps things alive but leaves depth in question."),
    ((7, 7), "Spiritual twins. Beyond words there is silent understanding, and your bond grows in long talks and shared silence."),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conflict {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Conflict {
    fn new(title: &str, description: &str, severity: Severity) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            severity,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakupRisk {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoveLockedContent {
    pub breakup_risk: BreakupRisk,
    pub karmic_debt: String,
    pub future_prediction: String,
    pub did_you_mean: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoveCalculations {
    pub user_soul_urge: u32,
    pub partner_soul_urge: u32,
    pub user_expression: u32,
    pub partner_expression: u32,
    pub user_life_path: u32,
    pub partner_life_path: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoveCompatibilityResult {
    pub overall_score: u32,
    pub soul_connection: u32,
    pub destiny_alignment: u32,
    pub physical_chemistry: u32,
    pub user_personal_year: u32,
    pub partner_personal_year: u32,
    pub year_cycle_warning: Option<String>,
    pub conflict_analysis: Vec<Conflict>,
    pub sexual_resonance: String,
    pub emotional_resonance: String,
    pub locked_content: LoveLockedContent,
    pub karmic_connection: String,
    pub love_forecast: String,
    pub challenges: String,
    pub calculations: LoveCalculations,
}

/// Soul urge against soul urge.
pub fn soul_compatibility(a: u32, b: u32) -> u32 {
    if a == b {
        return 95;
    }
    if pair_matches(&SOUL_COMPLEMENTARY, a, b) {
        return 90;
    }
    if pair_matches(&SOUL_CHALLENGING, a, b) {
        return 45;
    }
    match a.abs_diff(b) {
        1 => 85,
        2 => 75,
        3 => 65,
        d if d >= 4 => 55,
        _ => 70,
    }
}

/// Expression against expression.
pub fn destiny_compatibility(a: u32, b: u32) -> u32 {
    if a == b {
        return 92;
    }
    if pair_matches(&DESTINY_POWER, a, b) {
        return 88;
    }
    if pair_matches(&DESTINY_CHALLENGING, a, b) {
        return 50;
    }
    match a.abs_diff(b) {
        1 => 82,
        2 => 72,
        3 => 62,
        d if d >= 4 => 52,
        _ => 68,
    }
}

/// Life path against life path.
pub fn physical_chemistry(a: u32, b: u32) -> u32 {
    if a == b {
        return 90;
    }
    if pair_matches(&CHEMISTRY_MAGNETIC, a, b) {
        return 95;
    }
    if pair_matches(&CHEMISTRY_PASSIONATE, a, b) {
        return 75;
    }
    match a.abs_diff(b) {
        1 => 88,
        2 => 78,
        3 => 68,
        d if d >= 4 => 58,
        _ => 70,
    }
}

pub fn overall_score(soul: u32, destiny: u32, chemistry: u32, weights: &LoveWeights) -> u32 {
    let weighted = f64::from(soul) * weights.soul
        + f64::from(destiny) * weights.destiny
        + f64::from(chemistry) * weights.chemistry;
    weighted.round().clamp(0.0, 100.0) as u32
}

pub fn year_cycle_warning(user_year: u32, partner_year: u32) -> Option<String> {
    pair_lookup(&YEAR_WARNINGS, user_year, partner_year).map(str::to_string)
}

pub fn conflict_analysis(user: &NumerologyProfile, partner: &NumerologyProfile) -> Vec<Conflict> {
    let soul = (user.soul_urge.number, partner.soul_urge.number);
    let expression = (user.expression.number, partner.expression.number);
    let life_path = (user.life_path.number, partner.life_path.number);

    let mut conflicts = Vec::new();
    if pair_matches(&[(1, 8)], soul.0, soul.1) || pair_matches(&[(1, 8)], expression.0, expression.1) {
        conflicts.push(Conflict::new(
            "Power Struggle",
            "Both of you want to lead and keep control. This relationship has to move from 'who is right' to 'how do we grow together', or the tug of war never ends.",
            Severity::High,
        ));
    }
    if pair_matches(&[(4, 5)], soul.0, soul.1) || pair_matches(&[(4, 5)], expression.0, expression.1) {
        conflicts.push(Conflict::new(
            "Routine vs Adventure",
            "One of you wants security, stability and a plan. The other wants freedom, spontaneity and change. Without a middle ground one of you gets bored and the other feels unsafe.",
            Severity::Medium,
        ));
    }
    if pair_matches(&[(2, 7)], soul.0, soul.1) {
        conflicts.push(Conflict::new(
            "Emotional Hunger vs Withdrawal",
            "One wants constant contact and to hear 'I love you'. The other lives in a private world of deep thought. The hungry side may eventually look for warmth elsewhere.",
            Severity::High,
        ));
    }
    if pair_matches(&[(3, 8)], expression.0, expression.1) {
        conflicts.push(Conflict::new(
            "Lifestyle Clash",
            "One is cheerful, social and light. The other is serious, ambitious and focused. Over time one feels weighed down and the other feels unsupported.",
            Severity::Medium,
        ));
    }
    if pair_matches(&[(6, 5)], life_path.0, life_path.1) {
        conflicts.push(Conflict::new(
            "Attachment vs Escape",
            "One wants a family, commitment and a home. The other keeps moving toward new experiences and independence. If you are thinking of marriage, this difference can hurt.",
            Severity::Critical,
        ));
    }
    if pair_matches(&[(9, 1)], life_path.0, life_path.1) {
        conflicts.push(Conflict::new(
            "Karmic Cycle Gap",
            "One of you is in the autumn of a cycle (9), the other in its spring (1). One is finishing the past while the other explores, and the gap can widen.",
            Severity::High,
        ));
    }

    if conflicts.is_empty() {
        conflicts.push(Conflict::new(
            "Hidden Conflict",
            "Your numbers look compatible, but harmony can hide conflict. Do not overlook quiet problems; 'we get along so well' sometimes means real needs go unspoken.",
            Severity::Low,
        ));
    }
    conflicts
}

pub fn sexual_resonance(user_life_path: u32, partner_life_path: u32) -> String {
    pair_lookup(&SEXUAL_RESONANCE, user_life_path, partner_life_path)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "Your life paths ({} and {}) create a unique resonance. Physical attraction grows in step with your emotional bond. Numbers show potential; the rest is up to you.",
                user_life_path, partner_life_path
            )
        })
}

pub fn emotional_resonance(user_soul: u32, partner_soul: u32) -> String {
    pair_lookup(&EMOTIONAL_RESONANCE, user_soul, partner_soul)
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "Your soul urges ({} and {}) create their own emotional dance. You may speak different emotional languages; what matters is learning each other's.",
                user_soul, partner_soul
            )
        })
}

pub fn breakup_risk(overall_score: u32) -> BreakupRisk {
    if overall_score < 50 {
        BreakupRisk {
            severity: Severity::Critical,
            message: format!(
                "Critical breakup risk: your numbers show {}% compatibility. This relationship is naturally demanding, and demanding relationships offer the biggest growth if both of you stay.",
                overall_score
            ),
        }
    } else if overall_score < 70 {
        BreakupRisk {
            severity: Severity::Medium,
            message: format!(
                "Medium risk: {}% compatibility shows real potential that needs work. The core issue may be that one of you feels like the giver and the other the taker.",
                overall_score
            ),
        }
    } else {
        BreakupRisk {
            severity: Severity::Low,
            message: format!(
                "Low risk: {}% compatibility shows a strong foundation. Good relationships still break when 'we get along so well' becomes a reason not to talk.",
                overall_score
            ),
        }
    }
}

pub fn karmic_debt(user: &Person, user_life_path: u32, partner: &Person, partner_life_path: u32) -> String {
    let user_karmic = KARMIC_NUMBERS.contains(&user_life_path);
    let partner_karmic = KARMIC_NUMBERS.contains(&partner_life_path);

    match (user_karmic, partner_karmic) {
        (true, true) => "Karmic twins: both of your life paths carry master numbers. This bond comes from before this life, and you owe each other something. The debt is paid in this life or carried to the next.".to_string(),
        (true, false) | (false, true) => {
            let karmic_person = if user_karmic {
                user.first_name.trim()
            } else {
                partner.first_name.trim()
            };
            format!(
                "Karmic lesson: {} comes into this relationship with a lesson from the past. Something here must be learned or taught; if it is not, the same patterns will repeat.",
                karmic_person
            )
        }
        (false, false) => "New soul bond: neither life path carries a karmic number. This relationship starts fresh, without past-life weight, and the patterns you create now are the legacy you leave.".to_string(),
    }
}

pub fn future_prediction(
    user: &Person,
    user_year: u32,
    partner: &Person,
    partner_year: u32,
    target_year: u32,
) -> String {
    let context = TemplateContext::new();
    let user_theme = interpret(Domain::Love, Topic::PersonalYear, user_year, &context);
    let partner_theme = interpret(Domain::Love, Topic::PersonalYear, partner_year, &context);
    let cycle = if user_year == partner_year {
        "You are in the same cycle. That is a rare synchronisation: you feel the same energy at the same time."
    } else {
        "You are in different cycles, which means you may struggle to understand each other's needs this year."
    };
    let months = CRITICAL_MONTHS
        .iter()
        .map(|month| crate::date::month_name(*month))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Forecast for {}-{}:\n\nYou ({}): personal year {}, a time of {}.\n\nPartner ({}): personal year {}, a time of {}.\n\n{}\n\nCritical months in {}: {}.",
        target_year,
        target_year.saturating_add(1),
        user.first_name.trim(),
        user_year,
        user_theme,
        partner.first_name.trim(),
        partner_year,
        partner_theme,
        cycle,
        target_year,
        months
    )
}

fn did_you_mean(user: &Person, partner: &Person, partner_soul: u32) -> String {
    let context = TemplateContext::new().with("partner_name", partner.first_name.trim());
    let shadow = interpret(Domain::Love, Topic::Shadow, partner_soul, &context);
    format!(
        "Did you mean?\n\n{}, you know that {}'s soul urge is {}. But the shadow of that number, its fears and defences, is where the real trouble in your relationship lives.\n\n{}",
        user.first_name.trim(),
        partner.first_name.trim(),
        partner_soul,
        shadow
    )
}

fn karmic_connection(
    selector: &mut VariantSelector,
    user_name: &str,
    partner_name: &str,
    user_life_path: u32,
    partner_life_path: u32,
) -> String {
    let path_note = if user_life_path == partner_life_path {
        "You walk the same life path. That means deep understanding, and it also means sharing the same obstacles."
    } else {
        "You walk different life paths. Where one of you is strong the other is weak, and that completion can turn into friction when differences go unexplained."
    };
    let variants = [
        format!(
            "**Karmic bond: two souls meeting**\n\n{} and {}: together these names wake a vibration from before this life. Your life paths, **{}** and **{}**, fit like two halves.\n\n{}",
            user_name, partner_name, user_life_path, partner_life_path, path_note
        ),
        format!(
            "**Karmic bond: mirror and reflection**\n\n{}, {} is your mirror. What you love in them is in you, and so is what you cannot stand. Life paths **{}** and **{}** show you the faces you do not see yourself.",
            user_name, partner_name, user_life_path, partner_life_path
        ),
        format!(
            "**Karmic bond: two flames, one soul**\n\n{} and {}: this may be a twin flame connection. Deep, intense and transforming. When life paths **{}** and **{}** meet they start a fire that burns away the old.",
            user_name, partner_name, user_life_path, partner_life_path
        ),
    ];
    selector
        .pick(&variants[..])
        .cloned()
        .unwrap_or_default()
}

fn love_forecast(user_name: &str, partner_name: &str, score: u32) -> String {
    let (title, body) = if score >= 90 {
        (
            "A legendary bond",
            "This is rare harmony. The gift is real, and high harmony can turn into complacency if you stop tending it.",
        )
    } else if score >= 75 {
        (
            "A strong bond",
            "You share a solid rhythm with enough difference to keep things interesting. Keep talking when it gets easy.",
        )
    } else if score >= 60 {
        (
            "A bond that needs work",
            "The potential is there, and so is friction. Every difference you name together becomes a strength.",
        )
    } else {
        (
            "A demanding bond",
            "Your numbers pull in different directions. This relationship will teach you a great deal, if both of you choose to learn.",
        )
    };
    format!(
        "**Love forecast: {}**\n\n{} and {}, your compatibility score is **{}%**. {}",
        title, user_name, partner_name, score, body
    )
}

fn challenges(user_life_path: u32, partner_life_path: u32) -> String {
    match (user_life_path, partner_life_path) {
        (1, 1) => "**Challenge: two leaders, one throne**\n\nBoth of you want to lead and stay independent. A relationship sometimes asks for surrender. Your area of conflict is control.".to_string(),
        (1, 2) => "**Challenge: speed and slowness**\n\nYou decide fast and act fast; your partner thinks and feels first. Your area of conflict is tempo.".to_string(),
        (2, 2) => "**Challenge: two sensitive souls**\n\nBoth of you feel deeply, and two sensitive people can exhaust each other. Your area of conflict is emotional overload.".to_string(),
        _ => format!(
            "**Challenge: different rhythms**\n\nLife paths {} and {} move at different speeds. Your area of conflict is understanding what the other needs without being told.",
            user_life_path, partner_life_path
        ),
    }
}

pub fn calculate_love_compatibility(
    user: &Person,
    partner: &Person,
    options: &ReadingOptions,
    weights: &LoveWeights,
) -> Result<LoveCompatibilityResult> {
    let user_profile = NumerologyProfile::from_person(user, options.target_year)?;
    let partner_profile = NumerologyProfile::from_person(partner, options.target_year)?;

    let user_soul = user_profile.soul_urge.number;
    let partner_soul = partner_profile.soul_urge.number;
    let user_expression = user_profile.expression.number;
    let partner_expression = partner_profile.expression.number;
    let user_life_path = user_profile.life_path.number;
    let partner_life_path = partner_profile.life_path.number;
    let user_year = user_profile.personal_year.number;
    let partner_year = partner_profile.personal_year.number;

    let soul_connection = soul_compatibility(user_soul, partner_soul);
    let destiny_alignment = destiny_compatibility(user_expression, partner_expression);
    let chemistry = physical_chemistry(user_life_path, partner_life_path);
    let overall = overall_score(soul_connection, destiny_alignment, chemistry, weights);

    let user_name = user.first_name.trim();
    let partner_name = partner.first_name.trim();
    let mut selector = VariantSelector::for_subject(
        options.variant_seed,
        &format!(
            "{}|{}|{}|{}",
            user.full_name(),
            user.birth_date.trim(),
            partner.full_name(),
            partner.birth_date.trim()
        ),
    );

    let result = LoveCompatibilityResult {
        overall_score: overall,
        soul_connection,
        destiny_alignment,
        physical_chemistry: chemistry,
        user_personal_year: user_year,
        partner_personal_year: partner_year,
        year_cycle_warning: year_cycle_warning(user_year, partner_year),
        conflict_analysis: conflict_analysis(&user_profile, &partner_profile),
        sexual_resonance: sexual_resonance(user_life_path, partner_life_path),
        emotional_resonance: emotional_resonance(user_soul, partner_soul),
        locked_content: LoveLockedContent {
            breakup_risk: breakup_risk(overall),
            karmic_debt: karmic_debt(user, user_life_path, partner, partner_life_path),
            future_prediction: future_prediction(
                user,
                user_year,
                partner,
                partner_year,
                options.target_year,
            ),
            did_you_mean: did_you_mean(user, partner, partner_soul),
        },
        karmic_connection: karmic_connection(
            &mut selector,
            user_name,
            partner_name,
            user_life_path,
            partner_life_path,
        ),
        love_forecast: love_forecast(user_name, partner_name, overall),
        challenges: challenges(user_life_path, partner_life_path),
        calculations: LoveCalculations {
            user_soul_urge: user_soul,
            partner_soul_urge: partner_soul,
            user_expression,
            partner_expression,
            user_life_path,
            partner_life_path,
        },
    };
    tracing::debug!(
        user = %user.full_name(),
        partner = %partner.full_name(),
        overall = result.overall_score,
        conflicts = result.conflict_analysis.len(),
        "computed love compatibility"
    );
    Ok(result)
}
