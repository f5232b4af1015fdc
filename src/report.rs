//! 계산 결과를 사람이 읽는 표 또는 JSON 문자열로 만든다.

use crate::config::OutputFormat;
use crate::pipeline::CalculationResult;

/// 설정된 형식으로 결과를 문자열로 만든다.
pub fn render(result: &CalculationResult, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(result)),
        OutputFormat::Json => render_json(result),
    }
}

pub fn render_json(result: &CalculationResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(result)
}

/// 연도별 한 줄씩 출력한다. 실측 연도는 `*`로 표시한다.
pub fn render_table(result: &CalculationResult) -> String {
    let mut out = String::new();
    if let Some(first) = result.results.first() {
        out.push_str(&format!(
            "선종: {}  용량: {:.0} {}  톤수 구간: {}\n",
            first.boundaries.ship_type,
            first.capacity,
            first.boundaries.capacity_unit,
            first.boundaries.weight_classification,
        ));
        out.push_str(&format!(
            "CO2 배출량: {:.3} t  운송 작업량: {:.4e}\n",
            first.mass_of_co2 / 1.0e6,
            first.transport_work,
        ));
    }

    out.push_str(&format!(
        "{:<5} {:>10} {:>10} {:>7} {:>4} {:>10} {:>10} {:>10} {:>10}\n",
        "연도", "달성", "요구", "비율", "등급", "superior", "lower", "upper", "inferior"
    ));
    for r in result {
        let marker = if r.is_measured { "*" } else { " " };
        let b = &r.boundaries.boundaries;
        out.push_str(&format!(
            "{}{:<4} {:>10.5} {:>10.5} {:>7.3} {:>4} {:>10.5} {:>10.5} {:>10.5} {:>10.5}\n",
            marker,
            r.year,
            r.attained_cii,
            r.required_cii,
            r.attained_required_ratio,
            r.rating,
            b.superior,
            b.lower,
            b.upper,
            b.inferior,
        ));
    }
    if result.measured_year().is_none() {
        out.push_str("(실측 연도 없음: 모든 연도가 추정값)\n");
    } else {
        out.push_str("* 실측 연도\n");
    }
    out
}
