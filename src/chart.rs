//! plotters 기반 라인 차트 PNG 렌더링.
//! 기본 크기 3000×1800 px (10×6 in, 300 DPI 상당).

use std::path::Path;

use plotters::prelude::*;

/// 기본 차트 폭 [px].
pub const CHART_WIDTH_PX: u32 = 3000;
/// 기본 차트 높이 [px].
pub const CHART_HEIGHT_PX: u32 = 1800;

/// 라인 차트 한 장의 내용 정의.
#[derive(Debug, Clone)]
pub struct LineChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series_label: String,
    pub color: RGBColor,
}

/// 차트 렌더링 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ChartError {
    /// 그릴 점이 없음
    EmptySeries,
    /// 백엔드/레이아웃 오류 (파일 쓰기 실패 포함)
    Render(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::EmptySeries => write!(f, "차트에 그릴 데이터가 없습니다"),
            ChartError::Render(msg) => write!(f, "차트 렌더링 오류: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {}

fn series_bounds(values: &[f64]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if (max - min).abs() < f64::EPSILON {
        // 평평한 수열도 축 범위가 0이 되지 않게 한다
        (min - 1.0, max + 1.0)
    } else {
        let pad = (max - min) * 0.05;
        (min - pad, max + pad)
    }
}

/// 단일 시리즈 라인 차트를 PNG 파일로 그린다.
pub fn render_line_chart(
    path: &Path,
    spec: &LineChartSpec,
    xs: &[f64],
    ys: &[f64],
) -> Result<(), ChartError> {
    if xs.is_empty() || ys.is_empty() {
        return Err(ChartError::EmptySeries);
    }

    let (x_min, x_max) = series_bounds(xs);
    let (y_min, y_max) = series_bounds(ys);

    let root = BitMapBackend::new(path, (CHART_WIDTH_PX, CHART_HEIGHT_PX)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", 56))
        .margin(40)
        .x_label_area_size(110)
        .y_label_area_size(150)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| ChartError::Render(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(&spec.x_label)
        .y_desc(&spec.y_label)
        .axis_desc_style(("sans-serif", 40))
        .label_style(("sans-serif", 30))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    let color = spec.color;
    chart
        .draw_series(LineSeries::new(
            xs.iter().zip(ys.iter()).map(|(x, y)| (*x, *y)),
            color.stroke_width(4),
        ))
        .map_err(|e| ChartError::Render(e.to_string()))?
        .label(spec.series_label.clone())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 40, y)], color.stroke_width(4)));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", 34))
        .draw()
        .map_err(|e| ChartError::Render(e.to_string()))?;

    root.present().map_err(|e| ChartError::Render(e.to_string()))
}
