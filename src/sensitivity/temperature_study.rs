use crate::chart::LineChartSpec;
use crate::ptc10;
use crate::sensitivity::sweep::linspace;

/// 온도 민감도 차트의 고정 출력 파일명.
pub const CHART_FILE_NAME: &str = "temperature_error_vs_velocity.png";

/// 온도 민감도 스터디 입력.
#[derive(Debug, Clone)]
pub struct TemperatureStudyInput {
    /// 전온 [K]
    pub total_temperature_k: f64,
    /// 정압비열 [J/(kg·K)]
    pub cp_j_per_kg_k: f64,
    /// 회복계수 [-]
    pub recovery_factor: f64,
    /// 스윕 시작 속도 [m/s]
    pub velocity_start_m_per_s: f64,
    /// 스윕 끝 속도 [m/s]
    pub velocity_end_m_per_s: f64,
    /// 스윕 샘플 수
    pub samples: usize,
}

/// 온도 민감도 스터디 결과. 모든 수열은 속도 수열과 인덱스가 정렬되어 있다.
#[derive(Debug, Clone)]
pub struct TemperatureStudyResult {
    pub velocities_m_per_s: Vec<f64>,
    pub static_temperature_k: Vec<f64>,
    pub measured_temperature_k: Vec<f64>,
    /// 측정 − 정온 [K]
    pub error_k: Vec<f64>,
}

/// 고정 전온·비열·회복계수에서 속도 스윕을 돌려 측정-정온 편차 수열을 만든다.
pub fn run_temperature_study(input: &TemperatureStudyInput) -> TemperatureStudyResult {
    let velocities = linspace(
        input.velocity_start_m_per_s,
        input.velocity_end_m_per_s,
        input.samples,
    );

    let n = velocities.len();
    let mut static_k = Vec::with_capacity(n);
    let mut measured_k = Vec::with_capacity(n);
    let mut error_k = Vec::with_capacity(n);

    for &velocity in &velocities {
        let t_static = ptc10::total_to_static_temperature(
            input.total_temperature_k,
            velocity,
            input.cp_j_per_kg_k,
        );
        let t_measured = ptc10::static_to_measured_temperature(
            t_static,
            velocity,
            input.cp_j_per_kg_k,
            input.recovery_factor,
        );
        static_k.push(t_static);
        measured_k.push(t_measured);
        error_k.push(t_measured - t_static);
    }

    TemperatureStudyResult {
        velocities_m_per_s: velocities,
        static_temperature_k: static_k,
        measured_temperature_k: measured_k,
        error_k,
    }
}

/// 온도 민감도 차트 정의. 제목에 회복계수 값을 넣는다.
pub fn chart_spec(recovery_factor: f64) -> LineChartSpec {
    LineChartSpec {
        title: format!(
            "Measured - Static Temperature vs Velocity, recovery factor = {recovery_factor}"
        ),
        x_label: "Velocity (m/s)".to_string(),
        y_label: "Measured - static temperature (K)".to_string(),
        series_label: "T_measured - T_static".to_string(),
        color: plotters::style::GREEN,
    }
}
