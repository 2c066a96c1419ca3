//! 운전원 입력 해석 테스트.
use line_rating_toolbox::reference::{self, SourceFormat};
use line_rating_toolbox::session::{
    build_input, cap_power_factor, format_deviation, is_confirmation, parse_conductor_count, parse_deviation,
    parse_power_factor, parse_selection, resolve_override, select_conductor,
    select_cross_section, OperatorChoices, SelectionError,
};

const CATALOG: &str = r#"<CONFIG COS="0.9" dU="5">
    <TK><X T="25" K="1.0"/></TK>
    <VL M="AC"><X S="70/11" I="265"/><X S="95/16" I="330"/></VL>
    <VL M="Reserved"/>
</CONFIG>"#;

fn catalog() -> reference::ReferenceData {
    reference::parse(CATALOG, SourceFormat::Xml).expect("catalog")
}

#[test]
fn override_only_when_not_confirmed() {
    assert_eq!(resolve_override(1, true, Some(3)), 1);
    assert_eq!(resolve_override(1, false, Some(3)), 3);
    assert_eq!(resolve_override(1, false, None), 1);
}

#[test]
fn confirmation_answers() {
    for yes in ["", "\n", "y", "Y", "yes", "YES\n"] {
        assert!(is_confirmation(yes), "{yes:?}");
    }
    for no in ["n", "no", "nope", "2"] {
        assert!(!is_confirmation(no), "{no:?}");
    }
}

#[test]
fn selection_bounds() {
    assert_eq!(parse_selection("", 3), Ok(0));
    assert_eq!(parse_selection(" 2\n", 3), Ok(2));
    assert_eq!(parse_selection("3", 3), Err(SelectionError::OutOfRange { max: 2 }));
    assert_eq!(parse_selection("-1", 3), Err(SelectionError::Negative));
    assert_eq!(
        parse_selection("abc", 3),
        Err(SelectionError::NotANumber("abc".into()))
    );
    assert_eq!(parse_selection("0", 0), Err(SelectionError::EmptyList));
}

#[test]
fn numeric_prompts() {
    assert_eq!(parse_conductor_count("2"), Some(2));
    assert_eq!(parse_conductor_count("0"), None);
    assert_eq!(parse_conductor_count("two"), None);

    assert_eq!(parse_deviation("-5"), Some(-5));
    assert_eq!(parse_deviation(""), Some(0));
    assert_eq!(parse_deviation("5.5"), None);
}

#[test]
fn power_factor_prompt_keeps_typed_value() {
    assert_eq!(parse_power_factor("0.8"), Some(0.8));
    assert_eq!(parse_power_factor("0,85"), Some(0.85));
    assert_eq!(parse_power_factor("-0.9"), Some(0.9));
    // 상한은 cap_power_factor 한 곳에서만 적용한다.
    assert_eq!(parse_power_factor("1.5"), Some(1.5));
    assert_eq!(parse_power_factor("0"), None);
    assert_eq!(parse_power_factor("cos"), None);
}

#[test]
fn typed_power_factor_is_capped_before_engine() {
    let data = catalog();
    let typed = resolve_override(data.power_factor, false, parse_power_factor("1.5"));
    let cos = cap_power_factor(typed);
    assert_eq!(cos, 0.99);
    assert_eq!(cap_power_factor(0.8), 0.8);
}

#[test]
fn confirmed_unit_default_is_capped_before_engine() {
    let data = reference::parse(
        r#"<CONFIG COS="1" dU="0"><TK><X T="25" K="1.0"/></TK><VL M="AC"><X S="70/11" I="265"/></VL></CONFIG>"#,
        SourceFormat::Xml,
    )
    .expect("unit cos is a valid default");
    assert_eq!(data.power_factor, 1.0);

    // 기록(transcript)과 계산이 같은 값을 쓴다.
    let recorded = cap_power_factor(resolve_override(data.power_factor, true, None));
    assert_eq!(recorded, 0.99);
    let input = build_input(
        &data,
        &OperatorChoices {
            conductor: 0,
            cross_section: 0,
            conductors_per_phase: 1,
            voltage_deviation_pct: 0,
            power_factor: recorded,
        },
    )
    .unwrap();
    assert_eq!(input.power_factor, recorded);
}

#[test]
fn deviation_is_shown_with_sign() {
    assert_eq!(format_deviation(5), "+5");
    assert_eq!(format_deviation(0), "+0");
    assert_eq!(format_deviation(-3), "-3");
}

#[test]
fn conductor_without_sections_is_rejected_before_engine() {
    let data = catalog();
    assert!(select_conductor(&data, 0).is_ok());
    assert_eq!(
        select_conductor(&data, 1),
        Err(SelectionError::NoCrossSections("Reserved".into()))
    );
    assert!(matches!(
        select_cross_section(&data, 1, 0),
        Err(SelectionError::NoCrossSections(_))
    ));
    assert_eq!(
        select_cross_section(&data, 0, 5),
        Err(SelectionError::OutOfRange { max: 1 })
    );
}

#[test]
fn choices_resolve_rated_current() {
    let data = catalog();
    let input = build_input(
        &data,
        &OperatorChoices {
            conductor: 0,
            cross_section: 1,
            conductors_per_phase: 2,
            voltage_deviation_pct: -2,
            power_factor: 0.85,
        },
    )
    .unwrap();
    assert_eq!(input.rated_current_a, 330);
    assert_eq!(input.conductors_per_phase, 2);
    assert_eq!(input.voltage_deviation_pct, -2);
    assert_eq!(input.power_factor, 0.85);
}
