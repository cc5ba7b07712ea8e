use kader_matrisi::attributes::{
    company_number, expression, life_path, personal_year, personality, soul_urge,
};
use kader_matrisi::cipher::{is_vowel, letter_value, letter_values};
use kader_matrisi::date::DateParts;
use kader_matrisi::reduce::is_master;
use kader_matrisi::{
    calculate_love_compatibility, calculate_numerology, calculate_wealth_analysis, Business,
    NumerologyError, NumerologyProfile, Person, ReadingOptions,
};
use kader_matrisi::config::LoveWeights;

#[test]
fn letter_values_ignore_case() {
    for upper in 'A'..='Z' {
        let lower = upper.to_ascii_lowercase();
        assert_eq!(letter_value(upper), letter_value(lower), "letter {}", upper);
        assert!(letter_value(upper) > 0);
    }
}

#[test]
fn turkish_letters_have_values() {
    assert_eq!(letter_value('Ş'), 1);
    assert_eq!(letter_value('ç'), 3);
    assert_eq!(letter_value('Ü'), 3);
    assert_eq!(letter_value('Ö'), 6);
    assert_eq!(letter_value('ğ'), 7);
    assert_eq!(letter_value('İ'), 9);
    assert_eq!(letter_value('ı'), 9);
    assert!(is_vowel('ı'));
    assert!(is_vowel('Ö'));
    assert!(!is_vowel('Ş'));
}

#[test]
fn unmapped_characters_are_dropped() {
    assert_eq!(letter_value('7'), 0);
    assert_eq!(letter_value(' '), 0);
    assert_eq!(letter_value('-'), 0);
    let values = letter_values("A 1-b");
    assert_eq!(values.len(), 2);
    assert_eq!(values[0].value, 1);
    assert_eq!(values[1].value, 2);
}

#[test]
fn expression_of_abc_is_six() {
    let calc = expression("ABC", "");
    assert_eq!(calc.total, 6);
    assert_eq!(calc.number, 6);
    assert_eq!(calc.trail, "A=1, B=2, C=3 → Total: 6 → 6");
}

#[test]
fn letter_sum_of_29_keeps_master_eleven() {
    let calc = expression("RRR", "B");
    assert_eq!(calc.total, 29);
    assert_eq!(calc.number, 11);
}

#[test]
fn vowels_and_consonants_split_the_name() {
    let soul = soul_urge("Ali", "Can");
    let persona = personality("Ali", "Can");
    let whole = expression("Ali", "Can");
    // A=1 i=9 a=1 ; l=3 C=3 n=5
    assert_eq!(soul.total, 11);
    assert_eq!(soul.number, 11);
    assert_eq!(persona.total, 11);
    assert_eq!(whole.total, soul.total + persona.total);
    assert_eq!(whole.number, 22);
}

#[test]
fn name_without_vowels_yields_zero_soul_urge() {
    let soul = soul_urge("RRR", "B");
    assert_eq!(soul.total, 0);
    assert_eq!(soul.number, 0);
    assert_eq!(soul.trail, "Total: 0 → 0");
}

#[test]
fn life_path_reduces_components_then_sum() {
    let date = DateParts::parse("29.11.1990").expect("valid date");
    let calc = life_path(&date);
    assert_eq!(calc.number, 5);
    assert_eq!(calc.total, 23);
    assert_eq!(calc.trail, "29→11 + 11→11 + 1990→1 = 23 → 5");
}

#[test]
fn personal_year_never_keeps_master() {
    let date = DateParts::parse("01.01.1980").expect("valid date");
    let calc = personal_year(&date, 2007).expect("year in range");
    assert_eq!(calc.total, 2009);
    assert_eq!(calc.number, 2);

    let date = DateParts::parse("15.03.1990").expect("valid date");
    let calc = personal_year(&date, 2026).expect("year in range");
    assert_eq!(calc.number, 1);
    assert_eq!(calc.trail, "15 (day) + 3 (month) + 2026 (year) = 2044 → 1");
}

#[test]
fn company_number_ignores_spaces_and_digits() {
    assert_eq!(company_number("Nova 2").number, company_number("nova").number);
    assert_eq!(company_number("Nova").total, 16);
    assert_eq!(company_number("Nova").number, 7);
}

#[test]
fn date_separators_are_interchangeable() {
    let dotted = DateParts::parse("15.03.1990").expect("dotted");
    let slashed = DateParts::parse("15/03/1990").expect("slashed");
    let dashed = DateParts::parse(" 15-03-1990 ").expect("dashed");
    assert_eq!(dotted, slashed);
    assert_eq!(dotted, dashed);
    assert_eq!(dotted.month_name(), "March");
}

#[test]
fn target_year_outside_calendar_range_is_rejected() {
    let date = DateParts::parse("29.11.1990").expect("valid date");
    for year in [0, 10_000, u32::MAX] {
        assert!(matches!(
            personal_year(&date, year),
            Err(NumerologyError::TargetYearOutOfRange(y)) if y == year
        ));
    }
    let last = personal_year(&date, 9999).expect("largest year");
    assert_eq!(last.total, 29 + 11 + 9999);

    let options = ReadingOptions {
        target_year: u32::MAX,
        current_month: 4,
        variant_seed: Some(1),
    };
    let person = Person::new("Ayse", "Yilmaz", "29.11.1990");
    assert!(matches!(
        calculate_numerology(&person, &options),
        Err(NumerologyError::TargetYearOutOfRange(_))
    ));

    let partner = Person::new("Can", "Demir", "01.01.1988");
    assert!(matches!(
        calculate_love_compatibility(&person, &partner, &options, &LoveWeights::default()),
        Err(NumerologyError::TargetYearOutOfRange(_))
    ));

    let business = Business {
        founder_first_name: "Ahmet".to_string(),
        founder_last_name: "Kaya".to_string(),
        company_name: "Nova".to_string(),
        registration_date: "15.03.2020".to_string(),
    };
    assert!(matches!(
        calculate_wealth_analysis(&business, &options),
        Err(NumerologyError::TargetYearOutOfRange(_))
    ));
}

#[test]
fn malformed_dates_are_rejected() {
    for input in ["1990", "15.03", "aa.bb.cccc", "31.04.1990", "29.02.2023", "15.13.1990", "15.03.0", "01.01.10000"] {
        assert!(
            matches!(DateParts::parse(input), Err(NumerologyError::InvalidDate { .. })),
            "{} should be rejected",
            input
        );
    }
    assert!(DateParts::parse("29.02.2024").is_ok());
}

#[test]
fn profile_requires_valued_letters() {
    let person = Person::new("123", "", "01.01.2000");
    assert!(matches!(
        NumerologyProfile::from_person(&person, 2026),
        Err(NumerologyError::EmptyName(_))
    ));
}

#[test]
fn profile_values_stay_in_range() {
    let people = [
        Person::new("Ayşe", "Yılmaz", "29.11.1990"),
        Person::new("Mehmet", "Öztürk", "01.01.2000"),
        Person::new("Jane", "Doe", "31/12/1985"),
        Person::new("Çağrı", "Güneş", "7-7-1977"),
    ];
    for person in &people {
        for year in 2020..2035 {
            let profile = NumerologyProfile::from_person(person, year).expect("valid person");
            for value in [
                profile.expression.number,
                profile.soul_urge.number,
                profile.personality.number,
                profile.life_path.number,
            ] {
                assert!((1..=9).contains(&value) || is_master(value), "{:?}", person);
            }
            assert!((1..=9).contains(&profile.personal_year.number));
        }
    }
}
