use std::path::{Path, PathBuf};

use clap::Parser;

use gas_measurement_toolbox::{
    app, chart, config,
    gas::Gerg2008Source,
    i18n::{self, keys},
    sensitivity::{pressure_study, temperature_study},
};

/// 명령행 옵션.
#[derive(Debug, Parser)]
#[command(name = "gas_measurement_toolbox_cli")]
struct Cli {
    /// UI 언어 (auto/ko/ko-kr/en/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    lang: String,
    /// 두 민감도 스터디를 비대화식으로 실행하고 PNG 차트를 저장한다
    #[arg(long)]
    sweep: bool,
    /// 차트 출력 디렉터리 (설정값 대신 사용)
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, None);
    if let Some(dir) = cli.out_dir {
        cfg.study.chart_dir = dir.display().to_string();
    }
    if cli.sweep {
        run_sweep(&cfg, &tr)?;
        return Ok(());
    }
    app::run(&mut cfg, &tr)?;
    Ok(())
}

/// 설정값 그대로 두 스터디를 실행하고 고정 파일명으로 차트를 저장한다.
fn run_sweep(cfg: &config::Config, tr: &i18n::Translator) -> Result<(), Box<dyn std::error::Error>> {
    let pressure = pressure_study::run_pressure_study(
        &cfg.composition,
        &cfg.study.pressure_input(),
        &Gerg2008Source,
    )?;
    println!(
        "{} {:.6} kg/m3",
        tr.t(keys::RESULT_GAS_DENSITY),
        pressure.gas.density_kg_per_m3
    );
    let pressure_path =
        Path::new(&cfg.study.chart_dir).join(pressure_study::CHART_FILE_NAME);
    chart::render_line_chart(
        &pressure_path,
        &pressure_study::chart_spec(cfg.study.static_pressure_bara),
        &pressure.velocities_m_per_s,
        &pressure.relative_diff_percent,
    )?;
    println!("{} {}", tr.t(keys::RESULT_CHART_SAVED), pressure_path.display());

    let temperature = temperature_study::run_temperature_study(&cfg.study.temperature_input());
    let temperature_path =
        Path::new(&cfg.study.chart_dir).join(temperature_study::CHART_FILE_NAME);
    chart::render_line_chart(
        &temperature_path,
        &temperature_study::chart_spec(cfg.study.recovery_factor),
        &temperature.velocities_m_per_s,
        &temperature.error_k,
    )?;
    println!(
        "{} {}",
        tr.t(keys::RESULT_CHART_SAVED),
        temperature_path.display()
    );
    Ok(())
}
