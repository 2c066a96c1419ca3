use std::collections::HashMap;

use super::engine::RatingTable;
use crate::i18n::keys;

/// 계절 표시. 화면에서는 배경색과 범례로 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Season {
    Winter,
    Nominal,
    Summer,
}

impl Season {
    pub const ALL: [Season; 3] = [Season::Winter, Season::Nominal, Season::Summer];

    /// 이 계절에 해당하는 고정 온도 라벨.
    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "+5",
            Season::Nominal => "+25",
            Season::Summer => "+35",
        }
    }
}

/// `+5` 겨울, `+25` 공칭, `+35` 여름. 다른 라벨은 표시하지 않는다.
pub fn season_annotations() -> HashMap<String, Season> {
    Season::ALL
        .into_iter()
        .map(|s| (s.label().to_string(), s))
        .collect()
}

/// 열 머리글. 머리글 문구는 번역 키로 들고 있고 렌더러가 언어에 맞게 바꾼다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableHeader {
    /// 앞의 세 고정 열: 온도, ДДТН, АДТН.
    pub captions: [&'static str; 3],
    /// 전압 열 다섯 개 위에 걸치는 머리글.
    pub power_caption: &'static str,
    pub voltages_kv: [i64; 5],
}

impl TableHeader {
    pub fn new(voltages_kv: [i64; 5]) -> Self {
        Self {
            captions: [
                keys::TABLE_TEMPERATURE,
                keys::TABLE_LONG_DURATION,
                keys::TABLE_EMERGENCY,
            ],
            power_caption: keys::TABLE_POWER_CAPTION,
            voltages_kv,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableRow<A> {
    pub label: String,
    /// [ДДТН, АДТН, P1..P5]
    pub values: [i64; 7],
    pub annotation: Option<A>,
}

/// 표시 직전의 표. 값은 계산 결과를 그대로 옮긴 것이다.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderableTable<A> {
    pub header: TableHeader,
    pub rows: Vec<RenderableRow<A>>,
}

/// 결과표를 머리글 + 행 목록으로 재배열하고 라벨별 주석을 붙인다.
pub fn format_table<A: Clone>(
    table: &RatingTable,
    annotations: &HashMap<String, A>,
) -> RenderableTable<A> {
    RenderableTable {
        header: TableHeader::new(table.voltages_kv),
        rows: table
            .rows
            .iter()
            .map(|row| RenderableRow {
                label: row.label.clone(),
                values: row.values(),
                annotation: annotations.get(&row.label).cloned(),
            })
            .collect(),
    }
}
