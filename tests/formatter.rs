//! 결과표 재배열/텍스트 출력 테스트.
use std::collections::HashMap;

use line_rating_toolbox::i18n::{keys, Translator};
use line_rating_toolbox::rating::{
    compute_ratings, format_table, season_annotations, RatingInput, Season,
};
use line_rating_toolbox::reference::TemperatureTable;
use line_rating_toolbox::ui_cli::render_table;

fn sample() -> line_rating_toolbox::rating::RatingTable {
    let tk: TemperatureTable = [("-5", 1.29), ("+5", 1.24), ("+25", 1.0), ("+35", 0.88)]
        .into_iter()
        .collect();
    let input = RatingInput {
        rated_current_a: 265,
        conductors_per_phase: 1,
        power_factor: 0.8,
        voltage_deviation_pct: 5,
    };
    compute_ratings(&tk, &input).unwrap()
}

#[test]
fn season_convention_is_fixed() {
    let ann = season_annotations();
    assert_eq!(ann.len(), 3);
    assert_eq!(ann.get("+5"), Some(&Season::Winter));
    assert_eq!(ann.get("+25"), Some(&Season::Nominal));
    assert_eq!(ann.get("+35"), Some(&Season::Summer));
}

#[test]
fn rows_keep_order_values_and_annotations() {
    let table = sample();
    let before = table.clone();
    let view = format_table(&table, &season_annotations());

    assert_eq!(table, before);
    assert_eq!(view.header.voltages_kv, [37, 116, 231, 347, 525]);
    let labels: Vec<_> = view.rows.iter().map(|r| r.label.as_str()).collect();
    assert_eq!(labels, ["-5", "+5", "+25", "+35"]);
    assert_eq!(view.rows[0].annotation, None);
    assert_eq!(view.rows[1].annotation, Some(Season::Winter));
    assert_eq!(view.rows[1].values, [329, 394, 17, 53, 105, 158, 239]);
}

#[test]
fn caller_chooses_annotation_type() {
    let table = sample();
    let mut marks = HashMap::new();
    marks.insert("-5".to_string(), "coldest");
    let view = format_table(&table, &marks);
    assert_eq!(view.rows[0].annotation, Some("coldest"));
    assert!(view.rows[1..].iter().all(|r| r.annotation.is_none()));
}

#[test]
fn plain_text_table_has_fixed_columns() {
    let tr = Translator::new("ru");
    let view = format_table(&sample(), &season_annotations());
    let text = render_table(&tr, &view, false);
    let lines: Vec<_> = text.lines().collect();

    assert_eq!(lines[0], "+------+------+------+----------------------------------+");
    assert!(lines[1].contains("Мощность P, МВт при U, кВ"));
    assert!(lines[2].starts_with("| T,°C | ДДТН | АДТН +"));
    assert_eq!(lines[3], "|      |      |      |  37  | 116  | 231  | 347  | 525  |");
    assert_eq!(lines[6], "|  +5  | 329  | 394  |  17  |  53  | 105  | 158  | 239  |");
    // 머리글 4줄 + 구분선 + 4행 + 마지막 구분선
    assert_eq!(lines.len(), 10);
    assert!(!text.contains('\u{1b}'));
}

#[test]
fn header_carries_fixed_captions() {
    let view = format_table(&sample(), &season_annotations());
    assert_eq!(
        view.header.captions,
        [keys::TABLE_TEMPERATURE, keys::TABLE_LONG_DURATION, keys::TABLE_EMERGENCY]
    );
    assert_eq!(view.header.power_caption, keys::TABLE_POWER_CAPTION);

    let tr = Translator::new("en");
    let text = render_table(&tr, &view, false);
    let caption_line = text.lines().nth(2).unwrap();
    assert!(caption_line.contains("T,°C"));
    assert!(caption_line.contains("Cont"));
    assert!(caption_line.contains("Emerg"));
}
