//! 운전원 입력을 계산 입력으로 바꾸는 순수 함수 모음.
//! 터미널 입출력 없이 테스트할 수 있도록 화면 코드와 분리한다.

use log::warn;
use thiserror::Error;

use crate::rating::{clamp_power_factor, RatingInput};
use crate::reference::{Conductor, CrossSection, ReferenceData};

/// 목록 선택 단계의 오류.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' 은(는) 올바른 번호가 아닙니다")]
    NotANumber(String),
    #[error("번호는 음수일 수 없습니다")]
    Negative,
    #[error("번호는 {max} 보다 클 수 없습니다")]
    OutOfRange { max: usize },
    #[error("선택할 항목이 없습니다")]
    EmptyList,
    #[error("'{0}' 에는 선택 가능한 단면이 없습니다")]
    NoCrossSections(String),
}

/// 기본값 확인/변경 패턴. 확인했거나 새 값이 없으면 기본값을 쓴다.
pub fn resolve_override<T>(default: T, confirmed: bool, value: Option<T>) -> T {
    if confirmed {
        default
    } else {
        value.unwrap_or(default)
    }
}

/// 빈 입력, `Y`, `YES`(대소문자 무관)는 확인으로 본다.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim().to_uppercase().as_str(), "" | "Y" | "YES")
}

/// 목록 번호를 해석한다. 빈 입력은 0번이다.
pub fn parse_selection(input: &str, len: usize) -> Result<usize, SelectionError> {
    if len == 0 {
        return Err(SelectionError::EmptyList);
    }
    let s = input.trim();
    if s.is_empty() {
        return Ok(0);
    }
    let n: i64 = s
        .parse()
        .map_err(|_| SelectionError::NotANumber(s.to_string()))?;
    if n < 0 {
        return Err(SelectionError::Negative);
    }
    match usize::try_from(n) {
        Ok(idx) if idx < len => Ok(idx),
        _ => Err(SelectionError::OutOfRange { max: len - 1 }),
    }
}

/// 상당 도체 수. 1 이상의 정수만 받는다.
pub fn parse_conductor_count(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

/// 전압 편차(%). 부호 있는 정수, 빈 입력은 0.
pub fn parse_deviation(input: &str) -> Option<i32> {
    let s = input.trim();
    if s.is_empty() {
        return Some(0);
    }
    s.parse().ok()
}

/// 역률 입력. 소수점 쉼표를 허용하고 절댓값을 취한다. 상한 적용은 `cap_power_factor`가 한다.
/// 0이나 숫자가 아닌 값은 다시 묻도록 `None`을 돌려준다.
pub fn parse_power_factor(input: &str) -> Option<f64> {
    let v: f64 = input.trim().replace(',', ".").parse().ok()?;
    let v = v.abs();
    if !v.is_finite() || v == 0.0 {
        return None;
    }
    Some(v)
}

/// 확인된 기본값이든 새로 입력한 값이든 기록하기 전에 한 번만 거친다.
/// 1 이상이면 0.99로 바꾸고 그 사실을 경고 로그로 남긴다.
pub fn cap_power_factor(cos: f64) -> f64 {
    let capped = clamp_power_factor(cos);
    if capped != cos {
        warn!("power factor {cos} replaced with {capped}");
    }
    capped
}

/// 편차를 부호와 함께 표시한다 (`+5`, `-3`, `+0`).
pub fn format_deviation(deviation_pct: i32) -> String {
    if deviation_pct >= 0 {
        format!("+{deviation_pct}")
    } else {
        deviation_pct.to_string()
    }
}

/// 도체를 고른다. 단면이 없는 도체는 계산으로 넘어가지 않도록 거부한다.
pub fn select_conductor(data: &ReferenceData, index: usize) -> Result<&Conductor, SelectionError> {
    let len = data.conductors.len();
    let conductor = data
        .conductor(index)
        .ok_or(SelectionError::OutOfRange {
            max: len.saturating_sub(1),
        })?;
    if conductor.cross_sections.is_empty() {
        return Err(SelectionError::NoCrossSections(conductor.description.clone()));
    }
    Ok(conductor)
}

/// 도체와 단면 번호로 정격 전류를 가진 단면을 찾는다.
pub fn select_cross_section(
    data: &ReferenceData,
    conductor: usize,
    section: usize,
) -> Result<&CrossSection, SelectionError> {
    let c = select_conductor(data, conductor)?;
    c.cross_sections
        .get(section)
        .ok_or(SelectionError::OutOfRange {
            max: c.cross_sections.len() - 1,
        })
}

/// 한 번의 실행에서 운전원이 정한 값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OperatorChoices {
    pub conductor: usize,
    pub cross_section: usize,
    pub conductors_per_phase: u32,
    pub voltage_deviation_pct: i32,
    pub power_factor: f64,
}

/// 선택값을 계산 입력으로 바꾼다. 역률은 `cap_power_factor`를 거친 값이어야 한다.
pub fn build_input(
    data: &ReferenceData,
    choices: &OperatorChoices,
) -> Result<RatingInput, SelectionError> {
    let section = select_cross_section(data, choices.conductor, choices.cross_section)?;
    Ok(RatingInput {
        rated_current_a: section.rated_current_a,
        conductors_per_phase: choices.conductors_per_phase,
        power_factor: choices.power_factor,
        voltage_deviation_pct: choices.voltage_deviation_pct,
    })
}
