#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use eframe::{egui, App, Frame};
use egui_plot::{Legend, Line, Plot, PlotPoints};
use image::GenericImageView;
use rfd::FileDialog;
use std::{env, fs, path::Path};

use gas_measurement_toolbox::{
    chart, config, conversion,
    gas::Gerg2008Source,
    i18n::{self, keys},
    quantity::QuantityKind,
    sensitivity::{pressure_study, temperature_study},
};

fn main() -> Result<(), eframe::Error> {
    // CLI 언어 옵션 처리: --lang xx 또는 --lang=xx (xx: auto/en-us/ko-kr/ko)
    let mut cli_lang: Option<String> = None;
    let args: Vec<String> = env::args().collect();
    let mut i = 1;
    while i < args.len() {
        let a = &args[i];
        if let Some(val) = a.strip_prefix("--lang=") {
            cli_lang = Some(val.to_string());
        } else if a == "--lang" || a == "-L" {
            if i + 1 < args.len() {
                cli_lang = Some(args[i + 1].clone());
                i += 1;
            }
        }
        i += 1;
    }

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default().with_inner_size([1180.0, 780.0]);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let native = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let mut app_cfg = config::load_or_default().unwrap_or_default();
    if let Some(lang_cli) = cli_lang {
        app_cfg.language = i18n::resolve_language(&lang_cli, Some(app_cfg.language.as_str()));
    }
    eframe::run_native(
        "Gas Measurement Toolbox",
        native,
        Box::new(move |cc| {
            if let Err(e) = setup_fonts(&cc.egui_ctx) {
                eprintln!("Font error: {e}");
            }
            Box::new(GuiApp::new(app_cfg.clone()))
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["icon.png", "assets/icon.png", "../icon.png"];
    let path = search
        .iter()
        .find(|p| Path::new(*p).exists())
        .map(|s| s.to_string())?;
    let bytes = fs::read(&path).ok()?;
    let img = image::load_from_memory(&bytes).ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: rgba.into_raw(),
        width: w,
        height: h,
    })
}

/// 한글 UI용 시스템 폰트를 찾아서 등록한다. 못 찾으면 기본 폰트로 동작한다.
fn setup_fonts(ctx: &egui::Context) -> Result<(), String> {
    // 1) 프로젝트 내 폰트
    let asset_path = Path::new("assets/fonts/malgun.ttf");
    if asset_path.exists() {
        let bytes = fs::read(asset_path).map_err(|e| format!("Failed to read font file: {e}"))?;
        apply_font_bytes(ctx, bytes, "korean_font");
        return Ok(());
    }

    // 2) 시스템 폰트 탐색 (Windows)
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        let candidates = ["malgun.ttf", "malgunsl.ttf", "malgunbd.ttf", "gulim.ttc"];
        for cand in candidates {
            let p = fonts.join(cand);
            if p.exists() {
                let bytes = fs::read(&p)
                    .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
                apply_font_bytes(ctx, bytes, "korean_font");
                return Ok(());
            }
        }
    }

    // 3) 시스템 폰트 탐색 (Linux/macOS)
    let unix_candidates = [
        "/usr/share/fonts/truetype/nanum/NanumGothic.ttf",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/System/Library/Fonts/AppleSDGothicNeo.ttc",
    ];
    for cand in unix_candidates {
        let p = Path::new(cand);
        if p.exists() {
            let bytes = fs::read(p)
                .map_err(|e| format!("Failed to read system font ({}): {e}", p.display()))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }

    Err("Korean font not found; keeping default fonts.".into())
}

fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    fonts
        .font_data
        .insert(name.to_owned(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, name.to_owned());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(name.to_owned());
    ctx.set_fonts(fonts);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    PressureStudy,
    TemperatureStudy,
    UnitConversion,
    Settings,
}

struct GuiApp {
    config: config::Config,
    tr: i18n::Translator,
    tab: Tab,
    // 압력 민감도
    pressure_bara: f64,
    temperature_c: f64,
    pressure_result: Option<pressure_study::PressureStudyResult>,
    pressure_status: Option<String>,
    // 온도 민감도
    total_temperature_k: f64,
    cp_j_per_kg_k: f64,
    recovery_factor: f64,
    temperature_result: Option<temperature_study::TemperatureStudyResult>,
    temperature_status: Option<String>,
    // 단위 변환
    conv_value: f64,
    conv_from: String,
    conv_to: String,
    conv_kind: QuantityKind,
    conv_result: Option<String>,
    // 설정
    lang_input: String,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(cfg: config::Config) -> Self {
        let lang = i18n::resolve_language("auto", Some(cfg.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang, None);
        let study = cfg.study.clone();
        Self {
            lang_input: cfg.language.clone(),
            config: cfg,
            tr,
            tab: Tab::PressureStudy,
            pressure_bara: study.static_pressure_bara,
            temperature_c: study.temperature_c,
            pressure_result: None,
            pressure_status: None,
            total_temperature_k: study.total_temperature_k,
            cp_j_per_kg_k: study.cp_j_per_kg_k,
            recovery_factor: study.recovery_factor,
            temperature_result: None,
            temperature_status: None,
            conv_value: 1.0,
            conv_from: "bara".to_string(),
            conv_to: "kPa".to_string(),
            conv_kind: QuantityKind::Pressure,
            conv_result: None,
            settings_status: None,
        }
    }

    fn compute_pressure(&mut self) {
        let mut input = self.config.study.pressure_input();
        input.static_pressure_bara = self.pressure_bara;
        input.temperature_c = self.temperature_c;
        match pressure_study::run_pressure_study(&self.config.composition, &input, &Gerg2008Source)
        {
            Ok(result) => {
                self.pressure_status = Some(format!(
                    "rho = {:.6} kg/m3, Z = {:.5}",
                    result.gas.density_kg_per_m3, result.gas.z
                ));
                self.pressure_result = Some(result);
            }
            Err(e) => {
                self.pressure_result = None;
                self.pressure_status = Some(format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)));
            }
        }
    }

    fn compute_temperature(&mut self) {
        let mut input = self.config.study.temperature_input();
        input.total_temperature_k = self.total_temperature_k;
        input.cp_j_per_kg_k = self.cp_j_per_kg_k;
        input.recovery_factor = self.recovery_factor;
        let result = temperature_study::run_temperature_study(&input);
        self.temperature_status = Some(format!(
            "max dT = {:.4} K",
            result.error_k.iter().copied().fold(f64::NEG_INFINITY, f64::max)
        ));
        self.temperature_result = Some(result);
    }

    fn save_pressure_chart(&mut self) {
        let Some(ref result) = self.pressure_result else {
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name(pressure_study::CHART_FILE_NAME)
            .save_file()
        else {
            return;
        };
        let spec = pressure_study::chart_spec(self.pressure_bara);
        let status = match chart::render_line_chart(
            &path,
            &spec,
            &result.velocities_m_per_s,
            &result.relative_diff_percent,
        ) {
            Ok(()) => format!("{} {}", self.tr.t(keys::RESULT_CHART_SAVED), path.display()),
            Err(e) => format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)),
        };
        self.pressure_status = Some(status);
    }

    fn save_temperature_chart(&mut self) {
        let Some(ref result) = self.temperature_result else {
            return;
        };
        let Some(path) = FileDialog::new()
            .set_file_name(temperature_study::CHART_FILE_NAME)
            .save_file()
        else {
            return;
        };
        let spec = temperature_study::chart_spec(self.recovery_factor);
        let status = match chart::render_line_chart(
            &path,
            &spec,
            &result.velocities_m_per_s,
            &result.error_k,
        ) {
            Ok(()) => format!("{} {}", self.tr.t(keys::RESULT_CHART_SAVED), path.display()),
            Err(e) => format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)),
        };
        self.temperature_status = Some(status);
    }

    fn pressure_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::PRESSURE_STUDY_HEADING).trim());
        ui.label(self.tr.t(keys::HELP_PRESSURE_STUDY));
        ui.horizontal(|ui| {
            ui.label("P_static [bara]");
            ui.add(egui::DragValue::new(&mut self.pressure_bara).speed(0.05));
            ui.label("T [°C]");
            ui.add(egui::DragValue::new(&mut self.temperature_c).speed(0.5));
        });
        ui.horizontal(|ui| {
            if ui.button("Run").clicked() {
                self.compute_pressure();
            }
            if self.pressure_result.is_some() && ui.button("Save PNG").clicked() {
                self.save_pressure_chart();
            }
        });
        if let Some(ref status) = self.pressure_status {
            ui.label(status.clone());
        }
        if let Some(ref result) = self.pressure_result {
            let points: PlotPoints = result
                .velocities_m_per_s
                .iter()
                .zip(result.relative_diff_percent.iter())
                .map(|(x, y)| [*x, *y])
                .collect();
            Plot::new("pressure_sensitivity")
                .legend(Legend::default())
                .height(430.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).name("Relative Difference (%)"));
                });
        }
    }

    fn temperature_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::TEMPERATURE_STUDY_HEADING).trim());
        ui.label(self.tr.t(keys::HELP_TEMPERATURE_STUDY));
        ui.horizontal(|ui| {
            ui.label("T_total [K]");
            ui.add(egui::DragValue::new(&mut self.total_temperature_k).speed(0.5));
            ui.label("Cp [J/(kg·K)]");
            ui.add(egui::DragValue::new(&mut self.cp_j_per_kg_k).speed(5.0));
            ui.label("rf [-]");
            ui.add(
                egui::Slider::new(&mut self.recovery_factor, 0.0..=1.0).fixed_decimals(2),
            );
        });
        ui.horizontal(|ui| {
            if ui.button("Run").clicked() {
                self.compute_temperature();
            }
            if self.temperature_result.is_some() && ui.button("Save PNG").clicked() {
                self.save_temperature_chart();
            }
        });
        if let Some(ref status) = self.temperature_status {
            ui.label(status.clone());
        }
        if let Some(ref result) = self.temperature_result {
            let points: PlotPoints = result
                .velocities_m_per_s
                .iter()
                .zip(result.error_k.iter())
                .map(|(x, y)| [*x, *y])
                .collect();
            Plot::new("temperature_sensitivity")
                .legend(Legend::default())
                .height(430.0)
                .show(ui, |plot_ui| {
                    plot_ui.line(Line::new(points).name("T_measured - T_static"));
                });
        }
    }

    fn conversion_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::UNIT_CONVERSION_HEADING).trim());
        ui.label(self.tr.t(keys::UNIT_CONVERSION_NOTE_MMHG));
        ui.horizontal(|ui| {
            egui::ComboBox::from_label("")
                .selected_text(format!("{:?}", self.conv_kind))
                .show_ui(ui, |ui| {
                    for kind in [
                        QuantityKind::Temperature,
                        QuantityKind::TemperatureDifference,
                        QuantityKind::Pressure,
                        QuantityKind::Velocity,
                        QuantityKind::Density,
                        QuantityKind::SpecificHeat,
                    ] {
                        ui.selectable_value(&mut self.conv_kind, kind, format!("{kind:?}"));
                    }
                });
            ui.add(egui::DragValue::new(&mut self.conv_value).speed(0.1));
            ui.text_edit_singleline(&mut self.conv_from);
            ui.label("→");
            ui.text_edit_singleline(&mut self.conv_to);
            if ui.button("=").clicked() {
                self.conv_result = Some(
                    match conversion::convert(
                        self.conv_kind,
                        self.conv_value,
                        self.conv_from.trim(),
                        self.conv_to.trim(),
                    ) {
                        Ok(v) => format!(
                            "{} {v} {}",
                            self.tr.t(keys::UNIT_CONVERSION_RESULT),
                            self.conv_to.trim()
                        ),
                        Err(e) => format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)),
                    },
                );
            }
        });
        if let Some(ref result) = self.conv_result {
            ui.label(result.clone());
        }
    }

    fn settings_tab(&mut self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::SETTINGS_HEADING).trim());
        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::SETTINGS_CURRENT_LANGUAGE));
            ui.text_edit_singleline(&mut self.lang_input);
        });
        ui.horizontal(|ui| {
            ui.label(self.tr.t(keys::SETTINGS_PROMPT_RECOVERY));
            ui.add(
                egui::Slider::new(&mut self.config.study.recovery_factor, 0.0..=1.0)
                    .fixed_decimals(2),
            );
        });
        if ui.button("Save").clicked() {
            self.config.language = self.lang_input.trim().to_string();
            let lang =
                i18n::resolve_language("auto", Some(self.config.language.as_str()));
            self.tr = i18n::Translator::new_with_pack(&lang, None);
            self.settings_status = Some(match self.config.save() {
                Ok(()) => self.tr.t(keys::SETTINGS_SAVED).to_string(),
                Err(e) => format!("{} {e}", self.tr.t(keys::ERROR_PREFIX)),
            });
        }
        if let Some(ref status) = self.settings_status {
            ui.label(status.clone());
        }
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("tabs").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.selectable_value(
                    &mut self.tab,
                    Tab::PressureStudy,
                    self.tr.t(keys::MAIN_MENU_PRESSURE_STUDY),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::TemperatureStudy,
                    self.tr.t(keys::MAIN_MENU_TEMPERATURE_STUDY),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::UnitConversion,
                    self.tr.t(keys::MAIN_MENU_UNIT_CONVERSION),
                );
                ui.selectable_value(
                    &mut self.tab,
                    Tab::Settings,
                    self.tr.t(keys::MAIN_MENU_SETTINGS),
                );
            });
        });
        egui::CentralPanel::default().show(ctx, |ui| match self.tab {
            Tab::PressureStudy => self.pressure_tab(ui),
            Tab::TemperatureStudy => self.temperature_tab(ui),
            Tab::UnitConversion => self.conversion_tab(ui),
            Tab::Settings => self.settings_tab(ui),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_app_picks_up_study_defaults() {
        let app = GuiApp::new(config::Config::default());
        assert_eq!(app.pressure_bara, 1.0);
        assert_eq!(app.temperature_c, 20.0);
        assert_eq!(app.total_temperature_k, 293.15);
        assert_eq!(app.cp_j_per_kg_k, 2080.0);
        assert_eq!(app.recovery_factor, 0.65);
    }

    #[test]
    fn temperature_compute_fills_series() {
        let mut app = GuiApp::new(config::Config::default());
        app.compute_temperature();
        let result = app.temperature_result.expect("temperature result");
        assert_eq!(result.velocities_m_per_s.len(), 100);
        assert_eq!(result.error_k.len(), 100);
        assert!(result.error_k[0].abs() < 1e-12);
    }
}
