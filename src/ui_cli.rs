use std::io::{self, Write};
use std::path::Path;

use crate::app::AppError;
use crate::chart;
use crate::config::Config;
use crate::conversion;
use crate::gas::{Gerg2008Source, PropertySource};
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::sensitivity::{pressure_study, temperature_study, run_temperature_study};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    PressureStudy,
    TemperatureStudy,
    GasProperties,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_PRESSURE_STUDY));
    println!("{}", tr.t(keys::MAIN_MENU_TEMPERATURE_STUDY));
    println!("{}", tr.t(keys::MAIN_MENU_GAS_PROPERTIES));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::PressureStudy),
            "2" => return Ok(MenuChoice::TemperatureStudy),
            "3" => return Ok(MenuChoice::GasProperties),
            "4" => return Ok(MenuChoice::UnitConversion),
            "5" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 압력 민감도 메뉴를 처리한다.
pub fn handle_pressure_study(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRESSURE_STUDY_HEADING));
    println!("{}", tr.t(keys::HELP_PRESSURE_STUDY));

    let mut input = cfg.study.pressure_input();
    input.static_pressure_bara = read_f64_or(
        tr,
        tr.t(keys::PROMPT_STATIC_PRESSURE),
        input.static_pressure_bara,
    )?;
    input.temperature_c =
        read_f64_or(tr, tr.t(keys::PROMPT_GAS_TEMPERATURE), input.temperature_c)?;

    let result = pressure_study::run_pressure_study(&cfg.composition, &input, &Gerg2008Source)?;
    println!(
        "{} {:.6} kg/m3 (Z={:.5})",
        tr.t(keys::RESULT_GAS_DENSITY),
        result.gas.density_kg_per_m3,
        result.gas.z
    );
    let max_diff = series_max(&result.relative_diff_percent);
    println!("{} {:.4} %", tr.t(keys::RESULT_MAX_RELATIVE_DIFF), max_diff);

    let path = Path::new(&cfg.study.chart_dir).join(pressure_study::CHART_FILE_NAME);
    chart::render_line_chart(
        &path,
        &pressure_study::chart_spec(input.static_pressure_bara),
        &result.velocities_m_per_s,
        &result.relative_diff_percent,
    )?;
    println!("{} {}", tr.t(keys::RESULT_CHART_SAVED), path.display());
    Ok(())
}

/// 온도 민감도 메뉴를 처리한다.
pub fn handle_temperature_study(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::TEMPERATURE_STUDY_HEADING));
    println!("{}", tr.t(keys::HELP_TEMPERATURE_STUDY));

    let mut input = cfg.study.temperature_input();
    input.total_temperature_k = read_f64_or(
        tr,
        tr.t(keys::PROMPT_TOTAL_TEMPERATURE),
        input.total_temperature_k,
    )?;
    input.cp_j_per_kg_k = read_f64_or(tr, tr.t(keys::PROMPT_CP), input.cp_j_per_kg_k)?;
    input.recovery_factor = read_f64_or(
        tr,
        tr.t(keys::PROMPT_RECOVERY_FACTOR),
        input.recovery_factor,
    )?;

    let result = run_temperature_study(&input);
    let max_error = series_max(&result.error_k);
    println!(
        "{} {:.4} K",
        tr.t(keys::RESULT_MAX_TEMPERATURE_ERROR),
        max_error
    );

    let path = Path::new(&cfg.study.chart_dir).join(temperature_study::CHART_FILE_NAME);
    chart::render_line_chart(
        &path,
        &temperature_study::chart_spec(input.recovery_factor),
        &result.velocities_m_per_s,
        &result.error_k,
    )?;
    println!("{} {}", tr.t(keys::RESULT_CHART_SAVED), path.display());
    Ok(())
}

/// 가스 물성 조회 메뉴를 처리한다.
pub fn handle_gas_properties(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::GAS_PROPERTIES_HEADING));
    println!("{}", tr.t(keys::HELP_GAS_PROPERTIES));
    println!(
        "{} {:.2} %",
        tr.t(keys::COMPOSITION_TOTAL),
        cfg.composition.mole_percent_total()
    );

    let pressure_bara = read_f64_or(
        tr,
        tr.t(keys::PROMPT_STATIC_PRESSURE),
        cfg.study.static_pressure_bara,
    )?;
    let temperature_c =
        read_f64_or(tr, tr.t(keys::PROMPT_GAS_TEMPERATURE), cfg.study.temperature_c)?;

    let state = Gerg2008Source.evaluate(&cfg.composition, pressure_bara, temperature_c)?;
    println!(
        "{} {:.6} kg/m3",
        tr.t(keys::RESULT_GAS_DENSITY),
        state.density_kg_per_m3
    );
    println!(
        "{} {:.4} g/mol",
        tr.t(keys::RESULT_MOLAR_MASS),
        state.molar_mass_g_per_mol
    );
    println!("{} {:.6}", tr.t(keys::RESULT_Z_FACTOR), state.z);
    println!("{} {:.2} J/(kg*K)", tr.t(keys::RESULT_CP), state.cp_j_per_kg_k);
    println!(
        "{} {:.2} m/s",
        tr.t(keys::RESULT_SOUND_SPEED),
        state.speed_of_sound_m_per_s
    );
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    println!("{}", tr.t(keys::UNIT_CONVERSION_NOTE_MMHG));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Ok(n) = sel.trim().parse::<u32>() {
            if let Some(kind) = map_quantity(n) {
                break kind;
            }
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Pressure),
        4 => Some(QuantityKind::Velocity),
        5 => Some(QuantityKind::Density),
        6 => Some(QuantityKind::SpecificHeat),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} {}",
        tr.t(keys::SETTINGS_CURRENT_LANGUAGE),
        cfg.language
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let lang = read_line("ko / en-us: ")?;
            match lang.trim() {
                "ko" | "ko-kr" | "en" | "en-us" => cfg.language = lang.trim().to_string(),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            let samples = read_line(tr.t(keys::SETTINGS_PROMPT_SAMPLES))?;
            match samples.trim().parse::<usize>() {
                Ok(n) if n >= 2 => cfg.study.velocity_samples = n,
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "3" => {
            let rf = read_line(tr.t(keys::SETTINGS_PROMPT_RECOVERY))?;
            match rf.trim().parse::<f64>() {
                Ok(v) => cfg.study.recovery_factor = v,
                Err(_) => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "4" => {
            let dir = read_line(tr.t(keys::SETTINGS_PROMPT_CHART_DIR))?;
            if dir.trim().is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.study.chart_dir = dir.trim().to_string();
        }
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn series_max(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

/// 빈 입력이면 기본값을 쓰는 숫자 프롬프트.
fn read_f64_or(tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(default);
        }
        match trimmed.parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
