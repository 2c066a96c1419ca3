use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const MSG_OK: &str = "general.ok";
    pub const MSG_FAIL: &str = "general.error";
    pub const CONFIG_ERROR: &str = "general.config_error";
    pub const CALC_ERROR: &str = "general.calc_error";
    pub const LOG_FILE_ERROR: &str = "general.log_file_error";

    pub const SELECT_CONDUCTOR_HEADER: &str = "select.conductor_header";
    pub const SELECT_SECTION_HEADER: &str = "select.section_header";
    pub const PROMPT_SELECT_NUMBER: &str = "select.prompt_number";
    pub const INVALID_VALUE: &str = "error.invalid_value";
    pub const NUMBER_TOO_LARGE: &str = "error.number_too_large";
    pub const NUMBER_NEGATIVE: &str = "error.number_negative";
    pub const NO_CROSS_SECTIONS: &str = "error.no_cross_sections";
    pub const EMPTY_LIST: &str = "error.empty_list";

    pub const MEMO_CONDUCTOR: &str = "memo.conductor";
    pub const MEMO_SECTION: &str = "memo.section";
    pub const MEMO_RATED_CURRENT: &str = "memo.rated_current";
    pub const MEMO_COUNT: &str = "memo.conductor_count";
    pub const MEMO_DEVIATION: &str = "memo.deviation";
    pub const MEMO_COS: &str = "memo.cos";

    pub const CONFIRM_COUNT: &str = "confirm.conductor_count";
    pub const CONFIRM_DEVIATION: &str = "confirm.deviation";
    pub const CONFIRM_COS: &str = "confirm.cos";
    pub const CONFIRM_SUFFIX: &str = "confirm.suffix";

    pub const PROMPT_COUNT: &str = "prompt.conductor_count";
    pub const PROMPT_DEVIATION: &str = "prompt.deviation";
    pub const PROMPT_COS: &str = "prompt.cos";

    pub const TABLE_TEMPERATURE: &str = "table.temperature";
    pub const TABLE_LONG_DURATION: &str = "table.long_duration";
    pub const TABLE_EMERGENCY: &str = "table.emergency";
    pub const TABLE_POWER_CAPTION: &str = "table.power_caption";

    pub const LEGEND_WINTER: &str = "legend.winter";
    pub const LEGEND_NOMINAL: &str = "legend.nominal";
    pub const LEGEND_SUMMER: &str = "legend.summer";

    pub const UNIT_AMPERE: &str = "unit.ampere";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ru,
    En,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::Ru
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ru/en/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 ru로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩/문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 언어별 내장 문자열 → 러시아어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ru(key)),
            Language::Ru | Language::Ko => ru(key),
        }
    }
}

/// CLI 플래그/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str) -> String {
    normalize_lang(cli_arg)
        .or_else(detect_system_language)
        .unwrap_or_else(|| "ru".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other => normalize_locale_string(other),
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ru" | "en" | "ko" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(code) = get_locale().and_then(|loc| normalize_locale_string(&loc)) {
        return Some(code);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match Language::from_code(lang) {
        Language::Ko => parse_toml_to_map(include_str!("../locales/ko.toml")),
        Language::Ru | Language::En => None,
    }
}

fn ru(key: &str) -> &'static str {
    use keys::*;
    match key {
        MSG_OK => "[+] OK:",
        MSG_FAIL => "[-] ОШИБКА:",
        CONFIG_ERROR => "Ошибка конфигурации:",
        CALC_ERROR => "Ошибка расчёта:",
        LOG_FILE_ERROR => "Не удалось открыть файл журнала",
        SELECT_CONDUCTOR_HEADER => "Доступные марки провода",
        SELECT_SECTION_HEADER => "Доступные сечения провода",
        PROMPT_SELECT_NUMBER => "Выберите номер: ",
        INVALID_VALUE => "- не является допустимым значением.",
        NUMBER_TOO_LARGE => "Число не может быть больше",
        NUMBER_NEGATIVE => "Число не может быть отрицательным.",
        NO_CROSS_SECTIONS => "Для этой марки не задано ни одного сечения:",
        EMPTY_LIST => "Список пуст.",
        MEMO_CONDUCTOR => "Марка провода:",
        MEMO_SECTION => "Сечение провода:",
        MEMO_RATED_CURRENT => "Номинальный ток:",
        MEMO_COUNT => "Проводов в фазе:",
        MEMO_DEVIATION => "Отклонение от Uном:",
        MEMO_COS => "cos φ:",
        CONFIRM_COUNT => "Проводов в фазе:",
        CONFIRM_DEVIATION => "Отклонение U от Uном:",
        CONFIRM_COS => "Коэффициент мощности:",
        CONFIRM_SUFFIX => "Это утверждение верно (Y/n): ",
        PROMPT_COUNT => "Введите число проводов в фазе: ",
        PROMPT_DEVIATION => "Введите отклонение U (%): ",
        PROMPT_COS => "Введите коэффициент мощности: ",
        TABLE_TEMPERATURE => "T,°C",
        TABLE_LONG_DURATION => "ДДТН",
        TABLE_EMERGENCY => "АДТН",
        TABLE_POWER_CAPTION => "Мощность P, МВт при U, кВ",
        LEGEND_WINTER => " - Зима",
        LEGEND_NOMINAL => " - Номинал",
        LEGEND_SUMMER => " - Лето",
        UNIT_AMPERE => "А",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        MSG_FAIL => "[-] ERROR:",
        CONFIG_ERROR => "Configuration error:",
        CALC_ERROR => "Calculation error:",
        LOG_FILE_ERROR => "Cannot open log file",
        SELECT_CONDUCTOR_HEADER => "Available conductor types",
        SELECT_SECTION_HEADER => "Available cross-sections",
        PROMPT_SELECT_NUMBER => "Select number: ",
        INVALID_VALUE => "- is not a valid value.",
        NUMBER_TOO_LARGE => "Number cannot be greater than",
        NUMBER_NEGATIVE => "Number cannot be negative.",
        NO_CROSS_SECTIONS => "No cross-sections are defined for:",
        EMPTY_LIST => "The list is empty.",
        MEMO_CONDUCTOR => "Conductor type:",
        MEMO_SECTION => "Cross-section:",
        MEMO_RATED_CURRENT => "Rated current:",
        MEMO_COUNT => "Conductors per phase:",
        MEMO_DEVIATION => "Deviation from Unom:",
        CONFIRM_COUNT => "Conductors per phase:",
        CONFIRM_DEVIATION => "Voltage deviation from Unom:",
        CONFIRM_COS => "Power factor:",
        CONFIRM_SUFFIX => "Is this correct (Y/n): ",
        PROMPT_COUNT => "Enter conductors per phase: ",
        PROMPT_DEVIATION => "Enter voltage deviation (%): ",
        PROMPT_COS => "Enter power factor: ",
        TABLE_LONG_DURATION => "Cont",
        TABLE_EMERGENCY => "Emerg",
        TABLE_POWER_CAPTION => "Power P, MW at U, kV",
        LEGEND_WINTER => " - Winter",
        LEGEND_NOMINAL => " - Nominal",
        LEGEND_SUMMER => " - Summer",
        UNIT_AMPERE => "A",
        _ => return None,
    })
}
