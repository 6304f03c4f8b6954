use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_PRESSURE_STUDY: &str = "main_menu.pressure_study";
    pub const MAIN_MENU_TEMPERATURE_STUDY: &str = "main_menu.temperature_study";
    pub const MAIN_MENU_GAS_PROPERTIES: &str = "main_menu.gas_properties";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PRESSURE_STUDY_HEADING: &str = "pressure_study.heading";
    pub const PROMPT_STATIC_PRESSURE: &str = "prompt.static_pressure";
    pub const PROMPT_GAS_TEMPERATURE: &str = "prompt.gas_temperature";
    pub const RESULT_GAS_DENSITY: &str = "result.gas_density";
    pub const RESULT_MAX_RELATIVE_DIFF: &str = "result.max_relative_diff";
    pub const RESULT_CHART_SAVED: &str = "result.chart_saved";

    pub const TEMPERATURE_STUDY_HEADING: &str = "temperature_study.heading";
    pub const PROMPT_TOTAL_TEMPERATURE: &str = "prompt.total_temperature";
    pub const PROMPT_CP: &str = "prompt.cp";
    pub const PROMPT_RECOVERY_FACTOR: &str = "prompt.recovery_factor";
    pub const RESULT_MAX_TEMPERATURE_ERROR: &str = "result.max_temperature_error";

    pub const GAS_PROPERTIES_HEADING: &str = "gas_properties.heading";
    pub const COMPOSITION_TOTAL: &str = "gas_properties.composition_total";
    pub const RESULT_MOLAR_MASS: &str = "result.molar_mass";
    pub const RESULT_Z_FACTOR: &str = "result.z_factor";
    pub const RESULT_CP: &str = "result.cp";
    pub const RESULT_SOUND_SPEED: &str = "result.sound_speed";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_NOTE_MMHG: &str = "unit_conversion.note_mmhg";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_LANGUAGE: &str = "settings.current_language";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_SAMPLES: &str = "settings.prompt_samples";
    pub const SETTINGS_PROMPT_RECOVERY: &str = "settings.prompt_recovery";
    pub const SETTINGS_PROMPT_CHART_DIR: &str = "settings.prompt_chart_dir";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const HELP_PRESSURE_STUDY: &str = "help.pressure_study";
    pub const HELP_TEMPERATURE_STUDY: &str = "help.temperature_study";
    pub const HELP_GAS_PROPERTIES: &str = "help.gas_properties";
    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
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
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
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

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 영어 번역이 없으면 한국어 문자열을 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(ref map) = self.overrides {
            if let Some(v) = map.get(key) {
                return Box::leak(v.clone().into_boxed_str());
            }
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    if let Ok(lang) = std::env::var("LANG") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    if let Ok(lang) = std::env::var("LC_ALL") {
        if let Some(code) = normalize_locale_string(&lang) {
            return Some(code);
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 플랫 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) full code (e.g., en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
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
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Gas Measurement Toolbox ===",
        MAIN_MENU_PRESSURE_STUDY => "1) 압력 민감도 (전압-정압)",
        MAIN_MENU_TEMPERATURE_STUDY => "2) 온도 민감도 (측정-정온)",
        MAIN_MENU_GAS_PROPERTIES => "3) 가스 물성 (GERG-2008)",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PRESSURE_STUDY_HEADING => "\n-- 압력 민감도 (PTC 10 동압 보정) --",
        PROMPT_STATIC_PRESSURE => "정압 [bara] (엔터 시 설정값): ",
        PROMPT_GAS_TEMPERATURE => "가스 온도 [°C] (엔터 시 설정값): ",
        RESULT_GAS_DENSITY => "GERG-2008 밀도:",
        RESULT_MAX_RELATIVE_DIFF => "최대 상대차:",
        RESULT_CHART_SAVED => "차트 저장:",
        TEMPERATURE_STUDY_HEADING => "\n-- 온도 민감도 (PTC 10 운동 온도 상승) --",
        PROMPT_TOTAL_TEMPERATURE => "전온 [K] (엔터 시 설정값): ",
        PROMPT_CP => "정압비열 Cp [J/(kg·K)] (엔터 시 설정값): ",
        PROMPT_RECOVERY_FACTOR => "회복계수 [-] (엔터 시 설정값): ",
        RESULT_MAX_TEMPERATURE_ERROR => "최대 측정-정온 편차:",
        GAS_PROPERTIES_HEADING => "\n-- 가스 물성 (GERG-2008) --",
        COMPOSITION_TOTAL => "조성 몰 퍼센트 합계:",
        RESULT_MOLAR_MASS => "몰질량:",
        RESULT_Z_FACTOR => "압축계수 Z:",
        RESULT_CP => "정압비열 Cp:",
        RESULT_SOUND_SPEED => "음속:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 온도차  3) 압력  4) 속도  5) 밀도  6) 비열",
        UNIT_CONVERSION_NOTE_MMHG => {
            "참고: mmHg는 게이지 기준(0=대기, -760mmHg=완전진공)으로 처리됩니다."
        }
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: C, bara, m/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: K, psi, ft/s): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_LANGUAGE => "현재 언어:",
        SETTINGS_OPTIONS => "1) 언어  2) 스윕 샘플 수  3) 회복계수  4) 차트 출력 디렉터리",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_SAMPLES => "스윕 샘플 수 (기본 100): ",
        SETTINGS_PROMPT_RECOVERY => "회복계수 (기본 0.65): ",
        SETTINGS_PROMPT_CHART_DIR => "차트 출력 디렉터리 (기본 .): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        HELP_PRESSURE_STUDY => {
            "도움말: 정압[bara]과 온도[°C]를 입력하면 0~300 m/s 스윕으로 전압-정압 상대차를 계산하고 PNG 차트를 저장합니다."
        }
        HELP_TEMPERATURE_STUDY => {
            "도움말: 전온[K], Cp, 회복계수를 입력하면 측정-정온 편차 곡선을 계산하고 PNG 차트를 저장합니다."
        }
        HELP_GAS_PROPERTIES => "도움말: config.toml의 조성으로 GERG-2008 물성을 조회합니다.",
        HELP_UNIT_CONVERSION => {
            "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: bara/kPa/psi, C/K/F, m/s, kg/m3, J/kgK)."
        }
        HELP_SETTINGS => "도움말: 언어와 스터디 기본값을 바꾸면 config.toml에 저장됩니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Gas Measurement Toolbox ===",
        MAIN_MENU_PRESSURE_STUDY => "1) Pressure sensitivity (total vs static)",
        MAIN_MENU_TEMPERATURE_STUDY => "2) Temperature sensitivity (measured vs static)",
        MAIN_MENU_GAS_PROPERTIES => "3) Gas properties (GERG-2008)",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit Converter",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PRESSURE_STUDY_HEADING => "\n-- Pressure sensitivity (PTC 10 dynamic pressure) --",
        PROMPT_STATIC_PRESSURE => "Static pressure [bara] (enter = configured): ",
        PROMPT_GAS_TEMPERATURE => "Gas temperature [°C] (enter = configured): ",
        RESULT_GAS_DENSITY => "GERG-2008 density:",
        RESULT_MAX_RELATIVE_DIFF => "Max relative difference:",
        RESULT_CHART_SAVED => "Chart saved:",
        TEMPERATURE_STUDY_HEADING => "\n-- Temperature sensitivity (PTC 10 kinetic rise) --",
        PROMPT_TOTAL_TEMPERATURE => "Total temperature [K] (enter = configured): ",
        PROMPT_CP => "Specific heat Cp [J/(kg·K)] (enter = configured): ",
        PROMPT_RECOVERY_FACTOR => "Recovery factor [-] (enter = configured): ",
        RESULT_MAX_TEMPERATURE_ERROR => "Max measured-static deviation:",
        GAS_PROPERTIES_HEADING => "\n-- Gas properties (GERG-2008) --",
        COMPOSITION_TOTAL => "Composition mole-percent total:",
        RESULT_MOLAR_MASS => "Molar mass:",
        RESULT_Z_FACTOR => "Compressibility Z:",
        RESULT_CP => "Specific heat Cp:",
        RESULT_SOUND_SPEED => "Speed of sound:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Temperature  2) ΔTemperature  3) Pressure  4) Velocity  5) Density  6) Specific heat"
        }
        UNIT_CONVERSION_NOTE_MMHG => "Note: mmHg is treated as gauge (0=atm, -760mmHg=vacuum).",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: C, bara, m/s): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: K, psi, ft/s): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_LANGUAGE => "Current language:",
        SETTINGS_OPTIONS => "1) Language  2) Sweep samples  3) Recovery factor  4) Chart directory",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_SAMPLES => "Sweep sample count (default 100): ",
        SETTINGS_PROMPT_RECOVERY => "Recovery factor (default 0.65): ",
        SETTINGS_PROMPT_CHART_DIR => "Chart output directory (default .): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        HELP_PRESSURE_STUDY => {
            "Help: enter static pressure [bara] and temperature [°C]; the 0-300 m/s sweep computes the total/static relative difference and saves a PNG chart."
        }
        HELP_TEMPERATURE_STUDY => {
            "Help: enter total temperature [K], Cp and recovery factor; computes the measured-static deviation curve and saves a PNG chart."
        }
        HELP_GAS_PROPERTIES => "Help: looks up GERG-2008 properties for the composition in config.toml.",
        HELP_UNIT_CONVERSION => {
            "Help: choose quantity → enter value → from/to units (bara/kPa/psi, C/K/F, m/s, kg/m3, J/kgK, ...)."
        }
        HELP_SETTINGS => "Help: language and study defaults are persisted to config.toml.",
        _ => return None,
    })
}
