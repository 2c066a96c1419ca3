//! 형식(XML/TOML)과 무관한 원시 계층. 값은 아직 문자열 또는 숫자 그대로이며,
//! `validate`가 강타입 `ReferenceData`로 바꾼다.

use serde::Deserialize;

use super::error::MalformedReason;
use super::model::{
    normalize_temperature_label, Conductor, CrossSection, ReferenceData, TemperatureTable,
};

/// TOML에서는 숫자/문자열 어느 쪽으로도 적을 수 있다. XML은 항상 `Text`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawScalar {
    Int(i64),
    Float(f64),
    Text(String),
}

impl RawScalar {
    fn to_text(&self) -> String {
        match self {
            RawScalar::Int(v) => v.to_string(),
            RawScalar::Float(v) => v.to_string(),
            RawScalar::Text(s) => s.trim().to_string(),
        }
    }

    fn as_f64(&self, attribute: &'static str) -> Result<f64, MalformedReason> {
        match self {
            RawScalar::Int(v) => Ok(*v as f64),
            RawScalar::Float(v) => Ok(*v),
            RawScalar::Text(s) => s.trim().parse::<f64>().map_err(|_| invalid(attribute, s)),
        }
    }

    fn as_i64(&self, attribute: &'static str) -> Result<i64, MalformedReason> {
        match self {
            RawScalar::Int(v) => Ok(*v),
            RawScalar::Float(v) => Err(invalid(attribute, &v.to_string())),
            RawScalar::Text(s) => s.trim().parse::<i64>().map_err(|_| invalid(attribute, s)),
        }
    }
}

fn invalid(attribute: &'static str, value: &str) -> MalformedReason {
    MalformedReason::InvalidNumber {
        attribute,
        value: value.to_string(),
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawReference {
    pub cos: Option<RawScalar>,
    #[serde(alias = "dU")]
    pub du: Option<RawScalar>,
    #[serde(default)]
    pub tk: Vec<RawCoefficient>,
    #[serde(default)]
    pub vl: Vec<RawConductor>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawCoefficient {
    pub t: Option<RawScalar>,
    pub k: Option<RawScalar>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawConductor {
    pub m: Option<String>,
    #[serde(default)]
    pub s: Vec<RawSection>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawSection {
    pub s: Option<RawScalar>,
    pub i: Option<RawScalar>,
}

/// 원시 계층을 검증해 불변 참조 데이터로 만든다.
pub(crate) fn validate(raw: RawReference) -> Result<ReferenceData, MalformedReason> {
    let cos = raw
        .cos
        .as_ref()
        .ok_or(MalformedReason::MissingAttribute {
            element: "root",
            attribute: "COS",
        })?
        .as_f64("COS")?;
    if !(cos > 0.0 && cos <= 1.0) {
        return Err(MalformedReason::PowerFactorOutOfRange(cos));
    }

    let du_raw = raw.du.as_ref().ok_or(MalformedReason::MissingAttribute {
        element: "root",
        attribute: "dU",
    })?;
    let du = du_raw.as_i64("dU")?;
    let voltage_deviation_pct =
        i32::try_from(du).map_err(|_| invalid("dU", &du_raw.to_text()))?;

    let mut temperatures = TemperatureTable::new();
    for entry in &raw.tk {
        let t = entry.t.as_ref().ok_or(MalformedReason::MissingAttribute {
            element: "TK",
            attribute: "T",
        })?;
        let text = t.to_text();
        if text.is_empty() {
            return Err(MalformedReason::EmptyTemperatureLabel);
        }
        let label = normalize_temperature_label(&text);
        let k = entry
            .k
            .as_ref()
            .ok_or(MalformedReason::MissingAttribute {
                element: "TK",
                attribute: "K",
            })?
            .as_f64("K")?;
        if !(k.is_finite() && k > 0.0) {
            return Err(MalformedReason::NonPositiveCoefficient { label, value: k });
        }
        temperatures.insert(label, k);
    }
    if temperatures.is_empty() {
        return Err(MalformedReason::NoTemperatureEntries);
    }

    let mut conductors = Vec::with_capacity(raw.vl.len());
    for group in raw.vl {
        let description = group.m.ok_or(MalformedReason::MissingAttribute {
            element: "VL",
            attribute: "M",
        })?;
        let mut cross_sections = Vec::with_capacity(group.s.len());
        for section in &group.s {
            let label = section
                .s
                .as_ref()
                .ok_or(MalformedReason::MissingAttribute {
                    element: "VL",
                    attribute: "S",
                })?
                .to_text();
            let current_raw = section.i.as_ref().ok_or(MalformedReason::MissingAttribute {
                element: "VL",
                attribute: "I",
            })?;
            let current = current_raw.as_i64("I")?;
            if current <= 0 {
                return Err(MalformedReason::NonPositiveCurrent {
                    conductor: description,
                    section: label,
                    value: current,
                });
            }
            let rated_current_a =
                u32::try_from(current).map_err(|_| invalid("I", &current_raw.to_text()))?;
            cross_sections.push(CrossSection {
                label,
                rated_current_a,
            });
        }
        conductors.push(Conductor {
            description,
            cross_sections,
        });
    }
    if conductors.is_empty() {
        return Err(MalformedReason::NoConductors);
    }

    Ok(ReferenceData {
        power_factor: cos,
        voltage_deviation_pct,
        temperatures,
        conductors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Option<RawScalar> {
        Some(RawScalar::Text(s.to_string()))
    }

    #[test]
    fn float_deviation_is_rejected() {
        let raw = RawReference {
            cos: text("0.9"),
            du: Some(RawScalar::Float(5.5)),
            ..Default::default()
        };
        assert!(matches!(
            validate(raw),
            Err(MalformedReason::InvalidNumber { attribute: "dU", .. })
        ));
    }

    #[test]
    fn negative_current_is_not_a_parse_error() {
        let raw = RawReference {
            cos: text("0.9"),
            du: text("0"),
            tk: vec![RawCoefficient {
                t: text("25"),
                k: text("1.0"),
            }],
            vl: vec![RawConductor {
                m: Some("AC".into()),
                s: vec![RawSection {
                    s: text("70/11"),
                    i: text("-265"),
                }],
            }],
        };
        assert!(matches!(
            validate(raw),
            Err(MalformedReason::NonPositiveCurrent { value: -265, .. })
        ));
    }
}
