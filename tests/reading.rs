use kader_matrisi::attributes::Calculation;
use kader_matrisi::reading::{future_shadow, karmic_cycle, synthesis};
use kader_matrisi::templates::{catalog, catalogs, interpret, Domain, TemplateContext, Topic};
use kader_matrisi::variant::VariantSelector;
use kader_matrisi::{
    calculate_career_reading, calculate_numerology, NumerologyProfile, Person, ReadingOptions,
};

fn options(seed: Option<u64>) -> ReadingOptions {
    ReadingOptions {
        target_year: 2026,
        current_month: 4,
        variant_seed: seed,
    }
}

fn calc(number: u32, total: u32) -> Calculation {
    Calculation {
        number,
        total,
        trail: String::new(),
    }
}

#[test]
fn every_catalog_covers_single_digits() {
    for catalog in catalogs() {
        for value in 1..=9 {
            assert!(
                !catalog.template(value).is_empty(),
                "{:?}/{:?} missing {}",
                catalog.domain,
                catalog.topic,
                value
            );
        }
    }
}

#[test]
fn missing_values_fall_back_to_one() {
    let soul = catalog(Domain::Personal, Topic::SoulUrge).expect("registered");
    assert_eq!(soul.template(0), soul.template(1));

    let context = TemplateContext::new();
    assert_eq!(
        interpret(Domain::Love, Topic::PersonalYear, 11, &context),
        interpret(Domain::Love, Topic::PersonalYear, 1, &context)
    );
    assert!(interpret(Domain::Love, Topic::CompanyNumber, 1, &context).is_empty());
}

#[test]
fn unknown_placeholders_stay_verbatim() {
    let context = TemplateContext::new().with("first_name", "Ayşe");
    assert_eq!(
        context.render("{first_name} meets {partner_name} {"),
        "Ayşe meets {partner_name} {"
    );
}

#[test]
fn same_seed_same_reading() {
    let person = Person::new("Ayşe", "Yılmaz", "29.11.1990");
    let first = calculate_numerology(&person, &options(Some(9))).expect("valid");
    let second = calculate_numerology(&person, &options(Some(9))).expect("valid");
    assert_eq!(first.did_you_mean, second.did_you_mean);
    assert!(!first.did_you_mean.contains('{'));

    let unpinned_a = calculate_numerology(&person, &options(None)).expect("valid");
    let unpinned_b = calculate_numerology(&person, &options(None)).expect("valid");
    assert_eq!(unpinned_a.did_you_mean, unpinned_b.did_you_mean);
}

#[test]
fn did_you_mean_carries_the_reading_numbers() {
    let person = Person::new("Ayşe", "Yılmaz", "29.11.1990");
    let mut seen = std::collections::HashSet::new();
    for seed in 0..64 {
        let report = calculate_numerology(&person, &options(Some(seed))).expect("valid");
        let question = report.did_you_mean.to_lowercase();
        assert!(!question.contains('{'), "unbound placeholder: {}", question);
        if question.contains("personal year") {
            let year = format!("personal year {}", report.profile.personal_year.number);
            assert!(question.contains(&year), "{}", question);
        }
        if question.contains("life path") {
            let path = format!("life path {}", report.profile.life_path.number);
            assert!(question.contains(&path), "{}", question);
        }
        if question.contains("born on") {
            assert!(question.contains("29 november 1990"), "{}", question);
        }
        seen.insert(report.did_you_mean);
    }
    assert!(seen.len() > 1);
}

#[test]
fn variant_selector_is_reproducible() {
    let variants = ["a", "b", "c"];
    let mut left = VariantSelector::new(5);
    let mut right = VariantSelector::new(5);
    for _ in 0..10 {
        assert_eq!(left.pick(&variants[..]), right.pick(&variants[..]));
    }
    let empty: [&str; 0] = [];
    assert!(VariantSelector::new(1).pick(&empty[..]).is_none());
}

#[test]
fn reading_renders_personal_details() {
    let person = Person::new("Ayşe", "Yılmaz", "29.11.1990");
    let report = calculate_numerology(&person, &options(Some(1))).expect("valid");

    assert_eq!(report.profile.life_path.number, 5);
    assert_eq!(report.first_name_letters.len(), 4);
    assert!(report.interpretations.life_path.contains("**5**"));
    assert!(report.interpretations.personal_year.contains("Ayşe"));
    assert!(!report.interpretations.expression.contains('{'));
    assert!(!report.synthesis.is_empty());
}

#[test]
fn synthesis_reports_inner_conflicts() {
    let profile = NumerologyProfile {
        expression: calc(5, 23),
        soul_urge: calc(2, 11),
        personality: calc(3, 12),
        life_path: calc(1, 10),
        personal_year: calc(4, 2044),
    };
    let text = synthesis(&profile, "Deniz");
    assert!(text.contains("run from ties"));

    let calm = NumerologyProfile {
        expression: calc(3, 12),
        soul_urge: calc(3, 12),
        personality: calc(3, 12),
        life_path: calc(3, 12),
        personal_year: calc(1, 2044),
    };
    assert!(synthesis(&calm, "Deniz").starts_with("Deniz, your numbers are unusually aligned"));
}

#[test]
fn karmic_debt_reads_unreduced_totals() {
    let person = Person::new("DDE", "", "01.01.2000");
    let report = calculate_numerology(&person, &options(Some(3))).expect("valid");
    assert_eq!(report.profile.expression.total, 13);
    assert_eq!(report.profile.expression.number, 4);
    assert!(report.karmic_cycle.contains("Karmic debt 13 in your expression"));

    let clean = NumerologyProfile {
        expression: calc(3, 12),
        soul_urge: calc(3, 21),
        personality: calc(9, 18),
        life_path: calc(3, 12),
        personal_year: calc(1, 2044),
    };
    assert!(karmic_cycle(&clean).contains("clean slate"));
}

#[test]
fn future_shadow_wraps_the_year() {
    let profile = NumerologyProfile {
        expression: calc(3, 12),
        soul_urge: calc(3, 12),
        personality: calc(3, 12),
        life_path: calc(3, 12),
        personal_year: calc(9, 2043),
    };
    let text = future_shadow(&profile, 12);
    assert!(text.starts_with("In January"));
    assert!(text.contains("By March"));
}

#[test]
fn career_timing_follows_life_path() {
    // 01.01.2000 -> 1 + 1 + 2 = life path 4
    let person = Person::new("Deniz", "Ak", "01.01.2000");
    let reading = calculate_career_reading(&person, Some("Nova"), &options(None)).expect("valid");
    assert_eq!(reading.life_path, 4);
    assert_eq!(reading.timing.favourable_months, vec![1, 4, 7, 10]);
    assert!(reading.timing.current_month_favourable);
    assert_eq!(reading.timing.critical_dates[0], "January 15");
    let company = reading.company.expect("company requested");
    assert_eq!(company.number, 7);
    assert_eq!(company.vibration, "Analysis and strategy");

    let no_company = calculate_career_reading(&person, Some("  "), &options(None)).expect("valid");
    assert!(no_company.company.is_none());
}
