use kader_matrisi::attributes::company_number;
use kader_matrisi::compat::wealth::{
    critical_investment_dates, founder_compatibility, name_change_suggestion, risk_factors,
    wealth_scores, CompatibilityStatus, RiskKind,
};
use kader_matrisi::compat::Severity;
use kader_matrisi::{calculate_wealth_analysis, Business, NumerologyError, ReadingOptions};

fn options() -> ReadingOptions {
    ReadingOptions {
        target_year: 2026,
        current_month: 4,
        variant_seed: None,
    }
}

#[test]
fn dangerous_pair_beats_conflict() {
    assert_eq!(founder_compatibility(1, 9).status, CompatibilityStatus::Danger);
    assert_eq!(founder_compatibility(9, 1).status, CompatibilityStatus::Danger);
    assert!(founder_compatibility(1, 9).message.contains("founder's energy (1)"));
}

#[test]
fn small_distance_is_neutral() {
    assert_eq!(founder_compatibility(1, 3).status, CompatibilityStatus::Neutral);
    // The distance band is checked before the dangerous pairs.
    assert_eq!(founder_compatibility(4, 5).status, CompatibilityStatus::Neutral);
}

#[test]
fn harmony_and_conflict() {
    assert_eq!(founder_compatibility(6, 6).status, CompatibilityStatus::Harmony);
    assert_eq!(founder_compatibility(8, 1).status, CompatibilityStatus::Harmony);
    assert_eq!(founder_compatibility(11, 7).status, CompatibilityStatus::Harmony);
    assert_eq!(founder_compatibility(2, 9).status, CompatibilityStatus::Conflict);
    assert_eq!(founder_compatibility(1, 33).status, CompatibilityStatus::Conflict);
}

#[test]
fn scores_are_adjusted_and_clamped() {
    let scores = wealth_scores(8, 8, CompatibilityStatus::Harmony);
    assert_eq!(scores.prosperity, 100);
    assert_eq!(scores.money_attraction, 100);
    assert_eq!(scores.stability, 85);
    assert_eq!(scores.growth, 100);

    let scores = wealth_scores(7, 1, CompatibilityStatus::Danger);
    assert_eq!(scores.prosperity, 35);
    assert_eq!(scores.money_attraction, 25);
    assert_eq!(scores.stability, 55);
    assert_eq!(scores.growth, 40);

    let unknown = wealth_scores(0, 4, CompatibilityStatus::Neutral);
    let one = wealth_scores(1, 4, CompatibilityStatus::Neutral);
    assert_eq!(unknown, one);
    assert_eq!(one.stability, 70);
}

#[test]
fn risk_list_is_never_empty() {
    let risks = risk_factors(9, 1, 1, CompatibilityStatus::Neutral);
    assert_eq!(risks.len(), 1);
    assert_eq!(risks[0].kind, RiskKind::Timing);
    assert_eq!(risks[0].severity, Severity::Low);
}

#[test]
fn risks_accumulate() {
    let risks = risk_factors(4, 9, 5, CompatibilityStatus::Danger);
    let kinds: Vec<RiskKind> = risks.iter().map(|risk| risk.kind).collect();
    assert_eq!(kinds, vec![RiskKind::CashLeak, RiskKind::Bankruptcy]);
    assert_eq!(risks[0].severity, Severity::Critical);

    let risks = risk_factors(1, 2, 3, CompatibilityStatus::Neutral);
    assert_eq!(risks[0].kind, RiskKind::PartnershipConflict);
}

#[test]
fn name_change_targets_first_free_number() {
    let suggestion = name_change_suggestion("Nova", 8, 6, CompatibilityStatus::Conflict);
    assert!(suggestion.recommended);
    assert_eq!(suggestion.target_number, Some(1));
    assert_eq!(suggestion.alternative_names.len(), 4);
    assert_eq!(suggestion.alternative_names[0].name, "Nova Group");
    assert_eq!(
        suggestion.alternative_names[3].number,
        company_number("New Nova").number
    );

    let kept = name_change_suggestion("Nova", 8, 8, CompatibilityStatus::Harmony);
    assert!(!kept.recommended);
    assert!(kept.alternative_names.is_empty());
}

#[test]
fn investment_dates_follow_target_year() {
    assert_eq!(
        critical_investment_dates(2026),
        vec!["2026-03-15", "2026-06-21", "2026-09-08", "2027-01-11"]
    );
}

#[test]
fn full_analysis() {
    let business = Business {
        founder_first_name: "Ahmet".to_string(),
        founder_last_name: "Kaya".to_string(),
        company_name: "Nova".to_string(),
        registration_date: "15.03.2020".to_string(),
    };
    let result = calculate_wealth_analysis(&business, &options()).expect("valid business");

    assert_eq!(result.company_number, 7);
    assert_eq!(result.calculations.company_name.total, 16);
    assert!(result.calculations.founder_expression.starts_with("Ahmet Kaya = "));
    assert!(!result.risk_factors.is_empty());
    assert!(result.scores.prosperity <= 100);
    assert_eq!(result.locked_content.critical_investment_dates.len(), 4);
    assert_eq!(
        result.locked_content.wealth_activation.launch_dates,
        vec!["2026-03-15", "2026-09-08"]
    );
    assert!(result.company_interpretation.contains("Nova"));
    assert!(result.locked_content.did_you_mean.contains("secrecy"));
}

#[test]
fn company_without_letters_is_rejected() {
    let business = Business {
        founder_first_name: "Ahmet".to_string(),
        founder_last_name: "Kaya".to_string(),
        company_name: "123".to_string(),
        registration_date: "15.03.2020".to_string(),
    };
    assert!(matches!(
        calculate_wealth_analysis(&business, &options()),
        Err(NumerologyError::EmptyName(_))
    ));
}
