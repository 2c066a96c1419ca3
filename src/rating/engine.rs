/// ДДТН/АДТН 및 전압 단계별 송전 가능 전력 계산 모듈.
use log::{debug, warn};
use thiserror::Error;

use crate::reference::TemperatureTable;

/// 표준 공칭 전압(kV). 표의 열 순서이기도 하다.
pub const NOMINAL_VOLTAGES_KV: [u32; 5] = [35, 110, 220, 330, 500];

/// АДТН = 1.2 × ДДТН
pub const EMERGENCY_FACTOR: f64 = 1.2;

/// 3상 전력식의 √3 근사값. 기존 계산표와 같은 값을 쓴다.
pub const SQRT3: f64 = 1.73;

/// 역률 입력이 1 이상일 때 대신 쓰는 값.
pub const POWER_FACTOR_CAP: f64 = 0.99;

#[derive(Debug, Error, PartialEq)]
pub enum RatingError {
    /// 입력값 오류
    #[error("입력 오류: {0}")]
    InvalidInput(&'static str),
}

/// 계산 한 번에 필요한 운전 조건.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingInput {
    /// 도체 정격 전류(A)
    pub rated_current_a: u32,
    /// 상당 도체 수
    pub conductors_per_phase: u32,
    /// 역률 cos φ, (0, 1]
    pub power_factor: f64,
    /// 공칭 전압 대비 편차(%)
    pub voltage_deviation_pct: i32,
}

/// 온도 라벨 하나에 대한 결과 행.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingRow {
    pub label: String,
    /// ДДТН(A)
    pub long_duration_a: i64,
    /// АДТН(A)
    pub emergency_a: i64,
    /// `RatingTable::voltages_kv` 순서의 전력(MW)
    pub power_mw: [i64; 5],
}

impl RatingRow {
    /// [ДДТН, АДТН, P1..P5] 순서의 값.
    pub fn values(&self) -> [i64; 7] {
        let mut out = [0; 7];
        out[0] = self.long_duration_a;
        out[1] = self.emergency_a;
        out[2..].copy_from_slice(&self.power_mw);
        out
    }
}

/// 계산 결과. 호출마다 새로 만들어지며 이후 변경하지 않는다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RatingTable {
    /// 편차를 반영한 전압(kV)
    pub voltages_kv: [i64; 5],
    pub rows: Vec<RatingRow>,
}

impl RatingTable {
    pub fn row(&self, label: &str) -> Option<&RatingRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

/// 반올림은 모두 0에서 먼 쪽(half away from zero)으로 한다.
fn round(value: f64) -> i64 {
    value.round() as i64
}

/// 공칭 전압에 편차(%)를 반영해 정수 kV로 반올림한다.
pub fn adjusted_voltage(nominal_kv: u32, deviation_pct: i32) -> i64 {
    let v = f64::from(nominal_kv);
    round(v + (v / 100.0) * f64::from(deviation_pct))
}

/// 다섯 공칭 전압 모두에 편차를 반영한다.
pub fn adjusted_voltages(deviation_pct: i32) -> [i64; 5] {
    NOMINAL_VOLTAGES_KV.map(|v| adjusted_voltage(v, deviation_pct))
}

/// 1 이상의 역률은 0.99로 본다. 의도된 운영 규칙이며 경고 없이 값을 바꾼다.
pub fn clamp_power_factor(cos: f64) -> f64 {
    if cos >= 1.0 {
        POWER_FACTOR_CAP
    } else {
        cos
    }
}

/// 온도 계수표와 운전 조건으로 결과표를 계산한다.
///
/// - ДДТН = round(I · K · n)
/// - АДТН = round(I · 1.2 · K · n)
/// - P = round(I · K · U · 1.73 · cos φ / 1000), 도체 수 n은 곱하지 않는다.
pub fn compute_ratings(
    tk: &TemperatureTable,
    input: &RatingInput,
) -> Result<RatingTable, RatingError> {
    if let Err(err) = check_input(tk, input) {
        warn!("rating input rejected: {err} ({input:?})");
        return Err(err);
    }

    let voltages_kv = adjusted_voltages(input.voltage_deviation_pct);
    let i = f64::from(input.rated_current_a);
    let pr = f64::from(input.conductors_per_phase);
    let cos = input.power_factor;

    let rows = tk
        .iter()
        .map(|(label, k)| RatingRow {
            label: label.to_string(),
            long_duration_a: round(i * k * pr),
            emergency_a: round(i * EMERGENCY_FACTOR * k * pr),
            power_mw: voltages_kv.map(|u| round((i * k * u as f64 * SQRT3 * cos) / 1000.0)),
        })
        .collect::<Vec<_>>();

    debug!(
        "computed {} rows for I={} A, n={}, cos={}, dU={}%",
        rows.len(),
        input.rated_current_a,
        input.conductors_per_phase,
        cos,
        input.voltage_deviation_pct
    );
    Ok(RatingTable { voltages_kv, rows })
}

fn check_input(tk: &TemperatureTable, input: &RatingInput) -> Result<(), RatingError> {
    if tk.is_empty() {
        return Err(RatingError::InvalidInput("온도 계수표가 비어 있습니다."));
    }
    if tk.iter().any(|(_, k)| !(k.is_finite() && k > 0.0)) {
        return Err(RatingError::InvalidInput(
            "온도 계수는 0보다 큰 유한한 값이어야 합니다.",
        ));
    }
    if input.rated_current_a == 0 {
        return Err(RatingError::InvalidInput("정격 전류는 0보다 커야 합니다."));
    }
    if input.conductors_per_phase == 0 {
        return Err(RatingError::InvalidInput("상당 도체 수는 0보다 커야 합니다."));
    }
    if !(input.power_factor > 0.0 && input.power_factor <= 1.0) {
        return Err(RatingError::InvalidInput("역률은 (0, 1] 범위여야 합니다."));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_kilovolt_rounds_away_from_zero() {
        // 330 · 1.05 = 346.5
        assert_eq!(adjusted_voltage(330, 5), 347);
        // 110 · 0.95 = 104.5
        assert_eq!(adjusted_voltage(110, -5), 105);
    }

    #[test]
    fn row_values_order() {
        let row = RatingRow {
            label: "+25".into(),
            long_duration_a: 1,
            emergency_a: 2,
            power_mw: [3, 4, 5, 6, 7],
        };
        assert_eq!(row.values(), [1, 2, 3, 4, 5, 6, 7]);
    }
}
