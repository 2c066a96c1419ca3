/// 온도 라벨("+5", "-5" 등)과 온도 계수 K를 선언 순서대로 보관한다.
///
/// 같은 라벨을 다시 넣으면 값만 바뀌고 처음 선언된 위치는 유지된다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemperatureTable {
    entries: Vec<(String, f64)>,
}

impl TemperatureTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 라벨에 계수를 기록한다. 기존 라벨이면 이전 값을 돌려준다.
    pub fn insert(&mut self, label: impl Into<String>, coefficient: f64) -> Option<f64> {
        let label = label.into();
        if let Some(slot) = self.entries.iter_mut().find(|(l, _)| *l == label) {
            return Some(std::mem::replace(&mut slot.1, coefficient));
        }
        self.entries.push((label, coefficient));
        None
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, k)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(l, k)| (l.as_str(), *k))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, f64)> for TemperatureTable {
    fn from_iter<I: IntoIterator<Item = (L, f64)>>(iter: I) -> Self {
        let mut table = TemperatureTable::new();
        for (label, k) in iter {
            table.insert(label, k);
        }
        table
    }
}

/// 도체 단면 하나. 라벨은 보통 "70/11" 같은 mm² 표기다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossSection {
    pub label: String,
    /// 정격 전류(A), 항상 0보다 크다.
    pub rated_current_a: u32,
}

/// 도체 마크(브랜드/형식)와 선택 가능한 단면 목록.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conductor {
    pub description: String,
    /// 운전원이 선택하는 순서. 비어 있을 수 있으며 선택 단계에서 걸러낸다.
    pub cross_sections: Vec<CrossSection>,
}

/// 검증을 마친 참조 데이터. 시작 시 한 번 로드하고 이후에는 읽기만 한다.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    /// 역률 기본값 (0, 1]
    pub power_factor: f64,
    /// 전압 편차 기본값(%)
    pub voltage_deviation_pct: i32,
    pub temperatures: TemperatureTable,
    pub conductors: Vec<Conductor>,
}

impl ReferenceData {
    pub fn conductor(&self, index: usize) -> Option<&Conductor> {
        self.conductors.get(index)
    }

    pub fn descriptions(&self) -> Vec<&str> {
        self.conductors
            .iter()
            .map(|c| c.description.as_str())
            .collect()
    }
}

/// 온도 속성 T를 표의 키로 바꾼다. 부호가 없으면 "+"를 붙인다.
///
/// `"5"` → `"+5"`, `"-5"` → `"-5"`, `"+5"` → `"+5"`.
pub fn normalize_temperature_label(raw: &str) -> String {
    let t = raw.trim();
    if t.starts_with('-') || t.starts_with('+') {
        t.to_string()
    } else {
        format!("+{t}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reinsert_keeps_first_position() {
        let mut table = TemperatureTable::new();
        table.insert("+5", 1.2);
        table.insert("+25", 1.0);
        assert_eq!(table.insert("+5", 1.24), Some(1.2));
        let labels: Vec<_> = table.labels().collect();
        assert_eq!(labels, ["+5", "+25"]);
        assert_eq!(table.get("+5"), Some(1.24));
    }

    #[test]
    fn label_keeps_explicit_sign() {
        assert_eq!(normalize_temperature_label(" 5 "), "+5");
        assert_eq!(normalize_temperature_label("+5"), "+5");
        assert_eq!(normalize_temperature_label("-10"), "-10");
    }
}
