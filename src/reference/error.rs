use std::path::PathBuf;

use thiserror::Error;

/// 참조 데이터 로드 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 명시한 경로에 파일이 없음
    #[error("설정 파일을 찾을 수 없습니다: {}", .0.display())]
    NotFound(PathBuf),
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 필수 속성 누락, 숫자 형식 오류 등
    #[error("설정 형식 오류: {0}")]
    Malformed(#[from] MalformedReason),
}

/// 설정 문서가 잘못된 구체적인 이유.
#[derive(Debug, Error)]
pub enum MalformedReason {
    #[error("XML 구문 오류: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("TOML 구문 오류: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("루트 요소가 없습니다")]
    MissingRoot,
    #[error("{element} 요소에 {attribute} 속성이 없습니다")]
    MissingAttribute {
        element: &'static str,
        attribute: &'static str,
    },
    #[error("{attribute} 값 '{value}' 은(는) 올바른 숫자가 아닙니다")]
    InvalidNumber {
        attribute: &'static str,
        value: String,
    },
    #[error("역률 COS={0} 은(는) (0, 1] 범위를 벗어났습니다")]
    PowerFactorOutOfRange(f64),
    #[error("온도 라벨(T)이 비어 있습니다")]
    EmptyTemperatureLabel,
    #[error("온도 {label} 의 계수 K={value} 는 0보다 커야 합니다")]
    NonPositiveCoefficient { label: String, value: f64 },
    #[error("'{conductor}' {section} 의 정격 전류 I={value} 는 0보다 커야 합니다")]
    NonPositiveCurrent {
        conductor: String,
        section: String,
        value: i64,
    },
    #[error("온도 계수(TK) 항목이 하나도 없습니다")]
    NoTemperatureEntries,
    #[error("도체(VL) 항목이 하나도 없습니다")]
    NoConductors,
}
