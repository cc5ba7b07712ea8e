use kader_matrisi::attributes::Calculation;
use kader_matrisi::compat::love::{
    breakup_risk, conflict_analysis, destiny_compatibility, emotional_resonance, overall_score,
    physical_chemistry, sexual_resonance, soul_compatibility, year_cycle_warning,
};
use kader_matrisi::compat::Severity;
use kader_matrisi::config::LoveWeights;
use kader_matrisi::{calculate_love_compatibility, NumerologyProfile, Person, ReadingOptions};

const VALUES: [u32; 12] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];

fn calc(number: u32) -> Calculation {
    Calculation {
        number,
        total: number,
        trail: String::new(),
    }
}

fn profile(expression: u32, soul_urge: u32, life_path: u32) -> NumerologyProfile {
    NumerologyProfile {
        expression: calc(expression),
        soul_urge: calc(soul_urge),
        personality: calc(1),
        life_path: calc(life_path),
        personal_year: calc(1),
    }
}

fn options() -> ReadingOptions {
    ReadingOptions {
        target_year: 2026,
        current_month: 4,
        variant_seed: Some(42),
    }
}

#[test]
fn pair_scores_are_symmetric() {
    for a in VALUES {
        for b in VALUES {
            assert_eq!(soul_compatibility(a, b), soul_compatibility(b, a));
            assert_eq!(destiny_compatibility(a, b), destiny_compatibility(b, a));
            assert_eq!(physical_chemistry(a, b), physical_chemistry(b, a));
        }
    }
}

#[test]
fn pair_tables_override_distance() {
    assert_eq!(soul_compatibility(3, 3), 95);
    assert_eq!(soul_compatibility(6, 3), 90);
    assert_eq!(soul_compatibility(8, 1), 45);
    assert_eq!(soul_compatibility(2, 3), 85);
    assert_eq!(soul_compatibility(1, 9), 55);

    assert_eq!(destiny_compatibility(8, 1), 88);
    assert_eq!(destiny_compatibility(7, 5), 50);
    assert_eq!(destiny_compatibility(6, 9), 62);

    assert_eq!(physical_chemistry(5, 1), 95);
    assert_eq!(physical_chemistry(9, 1), 75);
    assert_eq!(physical_chemistry(11, 2), 58);
}

#[test]
fn overall_score_matches_weighted_formula() {
    let weights = LoveWeights::default();
    for soul in [45, 55, 90, 95] {
        for destiny in [50, 68, 88, 92] {
            for chemistry in [58, 75, 90, 95] {
                let score = overall_score(soul, destiny, chemistry, &weights);
                let expected = (0.35 * soul as f64 + 0.30 * destiny as f64 + 0.35 * chemistry as f64)
                    .round() as u32;
                assert_eq!(score, expected);
                assert!(score <= 100);
            }
        }
    }
    assert_eq!(overall_score(95, 92, 90, &weights), 92);
}

#[test]
fn year_warnings_are_unordered() {
    assert!(year_cycle_warning(9, 1).is_some());
    assert!(year_cycle_warning(1, 9).is_some());
    assert!(year_cycle_warning(5, 4).is_some());
    assert!(year_cycle_warning(7, 2).is_some());
    assert!(year_cycle_warning(8, 3).is_some());
    assert!(year_cycle_warning(6, 6).is_none());
    assert!(year_cycle_warning(1, 2).is_none());
}

#[test]
fn conflicts_fall_back_to_hidden_conflict() {
    let conflicts = conflict_analysis(&profile(2, 3, 4), &profile(2, 3, 4));
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].title, "Hidden Conflict");
    assert_eq!(conflicts[0].severity, Severity::Low);
}

#[test]
fn conflicts_are_detected_in_either_order() {
    let conflicts = conflict_analysis(&profile(8, 2, 5), &profile(1, 7, 6));
    let titles: Vec<&str> = conflicts.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Power Struggle", "Emotional Hunger vs Withdrawal", "Attachment vs Escape"]
    );
    assert_eq!(conflicts[2].severity, Severity::Critical);

    let swapped = conflict_analysis(&profile(1, 7, 6), &profile(8, 2, 5));
    assert_eq!(swapped.len(), conflicts.len());
}

#[test]
fn resonance_tables_have_fallbacks() {
    assert_eq!(sexual_resonance(5, 1), sexual_resonance(1, 5));
    assert!(sexual_resonance(2, 9).contains("(2 and 9)"));
    assert_eq!(emotional_resonance(6, 2), emotional_resonance(2, 6));
    assert!(emotional_resonance(3, 4).contains("(3 and 4)"));
}

#[test]
fn breakup_risk_bands() {
    assert_eq!(breakup_risk(49).severity, Severity::Critical);
    assert_eq!(breakup_risk(50).severity, Severity::Medium);
    assert_eq!(breakup_risk(69).severity, Severity::Medium);
    assert_eq!(breakup_risk(70).severity, Severity::Low);
}

#[test]
fn full_result_is_consistent_and_symmetric() {
    let ayse = Person::new("Ayşe", "Yılmaz", "29.11.1990");
    let can = Person::new("Can", "Demir", "15.03.1988");
    let weights = LoveWeights::default();

    let forward = calculate_love_compatibility(&ayse, &can, &options(), &weights).expect("valid");
    let backward = calculate_love_compatibility(&can, &ayse, &options(), &weights).expect("valid");

    assert_eq!(forward.overall_score, backward.overall_score);
    assert_eq!(forward.year_cycle_warning, backward.year_cycle_warning);
    assert!(!forward.conflict_analysis.is_empty());
    assert!(forward.overall_score <= 100);
    assert_eq!(
        forward.overall_score,
        overall_score(
            forward.soul_connection,
            forward.destiny_alignment,
            forward.physical_chemistry,
            &weights
        )
    );
    assert!(forward
        .locked_content
        .future_prediction
        .contains("Critical months in 2026: March, June, September"));
    assert!(forward.locked_content.did_you_mean.contains("Can"));
    assert!(forward.love_forecast.contains(&format!("{}%", forward.overall_score)));
}

#[test]
fn pinned_seed_fixes_karmic_connection() {
    let ayse = Person::new("Ayşe", "Yılmaz", "29.11.1990");
    let can = Person::new("Can", "Demir", "15.03.1988");
    let weights = LoveWeights::default();

    let first = calculate_love_compatibility(&ayse, &can, &options(), &weights).expect("valid");
    let second = calculate_love_compatibility(&ayse, &can, &options(), &weights).expect("valid");
    assert_eq!(first.karmic_connection, second.karmic_connection);
    assert!(first.karmic_connection.contains("Ayşe"));
}

#[test]
fn invalid_partner_date_is_an_error() {
    let ayse = Person::new("Ayşe", "Yılmaz", "29.11.1990");
    let broken = Person::new("Can", "Demir", "15.03");
    assert!(calculate_love_compatibility(&ayse, &broken, &options(), &LoveWeights::default()).is_err());
}
