use log::info;
use thiserror::Error;

use crate::i18n::keys;
use crate::rating::{self, RatingError};
use crate::reference::{ConfigError, ReferenceData};
use crate::session::{self, OperatorChoices, SelectionError};
use crate::ui_cli::Console;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 터미널 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 참조 데이터 로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 목록 선택 오류
    #[error("선택 오류: {0}")]
    Selection(#[from] SelectionError),
    /// 계산 입력 오류
    #[error("계산 오류: {0}")]
    Rating(#[from] RatingError),
}

/// 도체/단면 선택부터 결과표 출력까지 한 번의 계산을 진행한다.
pub fn run(data: &ReferenceData, console: &mut Console) -> Result<(), AppError> {
    let descriptions = data.descriptions();
    let (conductor_idx, conductor) = loop {
        let idx = console.select(&descriptions, keys::SELECT_CONDUCTOR_HEADER)?;
        match session::select_conductor(data, idx) {
            Ok(c) => break (idx, c),
            Err(err) => console.print_selection_error(&err),
        }
    };
    console.memo(keys::MEMO_CONDUCTOR, &conductor.description)?;

    let labels: Vec<&str> = conductor
        .cross_sections
        .iter()
        .map(|s| s.label.as_str())
        .collect();
    let section_idx = console.select(&labels, keys::SELECT_SECTION_HEADER)?;
    let section = session::select_cross_section(data, conductor_idx, section_idx)?;
    console.memo(keys::MEMO_SECTION, &section.label)?;
    let ampere = console.tr().t(keys::UNIT_AMPERE);
    console.memo(
        keys::MEMO_RATED_CURRENT,
        format!("{} {ampere}", section.rated_current_a),
    )?;

    let conductors_per_phase = console.confirm_or_override(
        keys::CONFIRM_COUNT,
        1,
        keys::PROMPT_COUNT,
        1,
        session::parse_conductor_count,
    )?;
    console.memo(keys::MEMO_COUNT, conductors_per_phase)?;

    let default_du = data.voltage_deviation_pct;
    let voltage_deviation_pct = console.confirm_or_override(
        keys::CONFIRM_DEVIATION,
        format!("{} %", session::format_deviation(default_du)),
        keys::PROMPT_DEVIATION,
        default_du,
        session::parse_deviation,
    )?;
    console.memo(
        keys::MEMO_DEVIATION,
        format!("{} %", session::format_deviation(voltage_deviation_pct)),
    )?;

    let power_factor = session::cap_power_factor(console.confirm_or_override(
        keys::CONFIRM_COS,
        data.power_factor,
        keys::PROMPT_COS,
        data.power_factor,
        session::parse_power_factor,
    )?);
    console.memo(keys::MEMO_COS, power_factor)?;

    let choices = OperatorChoices {
        conductor: conductor_idx,
        cross_section: section_idx,
        conductors_per_phase,
        voltage_deviation_pct,
        power_factor,
    };
    info!("calculating for {choices:?}");
    let input = session::build_input(data, &choices)?;
    let table = rating::compute_ratings(&data.temperatures, &input)?;
    let view = rating::format_table(&table, &rating::season_annotations());
    console.print_table(&view);
    console.print_legend();
    Ok(())
}
