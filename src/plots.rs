use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::config::{ChartConfig, TrialConfig};
use crate::sim::EffectRun;

const DASH_SIZE: i32 = 8;
const DASH_SPACING: i32 = 6;

/// Legend label for a variant scenario, derived from its scale factor.
pub fn factor_label(factor: f64) -> String {
    format!("{:+.0}%", (factor - 1.0) * 100.0)
}

/// Renders the three-series effect-size line chart.
///
/// Baseline is a solid line, variants are dashed; the increased variant is
/// drawn semi-transparent. Axis titles are shown, tick labels are not.
pub fn render_effect_size(
    out_path: &Path,
    run: &EffectRun,
    trial: &TrialConfig,
    chart_cfg: &ChartConfig,
) -> Result<(), Box<dyn Error>> {
    let x_max = trial.days.saturating_sub(1) as f64;
    let root =
        BitMapBackend::new(out_path, (chart_cfg.width, chart_cfg.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Effect size", ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0f64..x_max.max(1.0), chart_cfg.y_min..chart_cfg.y_max)?;

    chart
        .configure_mesh()
        .x_desc("Days")
        .y_desc("Metric")
        .x_label_formatter(&|_| String::new())
        .y_label_formatter(&|_| String::new())
        .draw()?;

    let baseline = run.baseline.iter().map(|&(day, rate)| (day as f64, rate));
    chart
        .draw_series(LineSeries::new(
            baseline,
            ShapeStyle::from(&BLACK).stroke_width(2),
        ))?
        .label("Baseline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    let decreased = run.decreased.iter().map(|&(day, rate)| (day as f64, rate));
    chart
        .draw_series(DashedLineSeries::new(
            decreased,
            DASH_SIZE,
            DASH_SPACING,
            ShapeStyle::from(&BLACK).stroke_width(2),
        ))?
        .label(factor_label(trial.drop_factor))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    let increased = run.increased.iter().map(|&(day, rate)| (day as f64, rate));
    chart
        .draw_series(DashedLineSeries::new(
            increased,
            DASH_SIZE,
            DASH_SPACING,
            ShapeStyle::from(&BLACK.mix(0.4)).stroke_width(2),
        ))?
        .label(factor_label(trial.lift_factor))
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK.mix(0.4)));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}

pub fn effect_csv(run: &EffectRun) -> String {
    let mut csv = String::from("day,scenario,rate_pct\n");
    for &(day, rate) in &run.baseline {
        csv.push_str(&format!("{day},baseline,{rate:.4}\n"));
    }
    for &(day, rate) in &run.decreased {
        csv.push_str(&format!("{day},decreased,{rate:.4}\n"));
    }
    for &(day, rate) in &run.increased {
        csv.push_str(&format!("{day},increased,{rate:.4}\n"));
    }
    csv
}

pub fn run_meta_text(cfg: &TrialConfig) -> String {
    let mut out = String::new();
    out.push_str(&format!("seed={}\n", cfg.seed));
    out.push_str(&format!("days={}\n", cfg.days));
    out.push_str(&format!("trials={}\n", cfg.trials));
    out.push_str(&format!("p_baseline={}\n", cfg.p_baseline));
    out.push_str(&format!("p_decreased={}\n", cfg.p_baseline * cfg.drop_factor));
    out.push_str(&format!("p_increased={}\n", cfg.p_baseline * cfg.lift_factor));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::simulate_effect;

    #[test]
    fn factor_labels_are_signed_percentages() {
        assert_eq!(factor_label(2.0 / 3.0), "-33%");
        assert_eq!(factor_label(1.03), "+3%");
        assert_eq!(factor_label(1.0), "+0%");
    }

    #[test]
    fn effect_csv_covers_every_point() {
        let trial = TrialConfig::default();
        let run = simulate_effect(&trial).expect("simulate");
        let csv = effect_csv(&run);
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("day,scenario,rate_pct"));
        let data_rows = lines.count();
        let expected = run.baseline.len() + run.decreased.len() + run.increased.len();
        assert_eq!(data_rows, expected);
    }

    #[test]
    fn meta_text_records_all_three_probabilities() {
        let trial = TrialConfig::default();
        let text = run_meta_text(&trial);
        assert!(text.contains("seed=7"));
        assert!(text.contains("trials=5000"));
        assert!(text.contains("p_baseline=0.05"));
        assert!(text.contains("p_decreased="));
        assert!(text.contains("p_increased="));
    }
}
