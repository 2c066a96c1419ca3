//! 가공선 도체 카탈로그와 온도 계수표(참조 데이터)를 로드·검증한다.
//!
//! XML/TOML 문서는 먼저 원시 계층으로 읽은 뒤 한 곳에서 검증해
//! 불변 `ReferenceData`를 만든다.

mod error;
mod model;
mod raw;
mod xml;

use std::fs;
use std::path::Path;

use log::{debug, info};

pub use error::{ConfigError, MalformedReason};
pub use model::{
    normalize_temperature_label, Conductor, CrossSection, ReferenceData, TemperatureTable,
};

/// 빌드 시 포함되는 기본 참조 데이터.
const DEFAULT_CONFIG: &str = include_str!("../../res/config.xml");

/// 설정 문서 형식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Xml,
    Toml,
}

impl SourceFormat {
    /// 확장자가 `.toml`이면 TOML, 그 외에는 XML로 본다.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Xml,
        }
    }
}

/// 참조 데이터를 로드한다. 경로가 없으면 내장 기본 데이터를 사용한다.
pub fn load(path: Option<&Path>) -> Result<ReferenceData, ConfigError> {
    let Some(path) = path else {
        let data = parse(DEFAULT_CONFIG, SourceFormat::Xml)?;
        debug!(
            "built-in reference data: {} temperature entries, {} conductors",
            data.temperatures.len(),
            data.conductors.len()
        );
        return Ok(data);
    };
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let format = SourceFormat::from_path(path);
    let data = parse(&content, format)?;
    info!(
        "loaded {:?} reference data from {}: {} temperature entries, {} conductors",
        format,
        path.display(),
        data.temperatures.len(),
        data.conductors.len()
    );
    Ok(data)
}

/// 내장 기본 참조 데이터를 로드한다.
pub fn load_default() -> Result<ReferenceData, ConfigError> {
    load(None)
}

/// 문자열로 주어진 문서를 파싱·검증한다.
pub fn parse(src: &str, format: SourceFormat) -> Result<ReferenceData, MalformedReason> {
    let doc = match format {
        SourceFormat::Xml => xml::read_xml(src)?,
        SourceFormat::Toml => toml::from_str(src)?,
    };
    raw::validate(doc)
}
