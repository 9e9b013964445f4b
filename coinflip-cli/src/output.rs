/// Output formatting: plain-text report and JSON.
use coinflip_core::BatchSummary;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: &'a BatchSummary,
    coin_probabilities: &'a [f64],
    seed: Option<u64>,
}

/// Render the summary as the human-readable report.
pub fn format_report(summary: &BatchSummary) -> String {
    format!(
        "Executed {runs} runs of {flips} coin flips. Statistics for the runs were as follows:\n\
         The mean number of heads results per run was {mean:.2}.\n\
         The maximum number of heads results in a run was {max}.\n\
         The minimum number of heads results in a run was {min}.\n\
         {above} of {runs} runs produced greater than {high} heads results.\n\
         {below} of {runs} runs produced less than {low} heads results.",
        runs = summary.run_count,
        flips = summary.flip_budget,
        mean = summary.mean_heads,
        max = summary.max_heads,
        min = summary.min_heads,
        above = summary.count_above,
        high = summary.high_threshold,
        below = summary.count_below,
        low = summary.low_threshold,
    )
}

/// Print the report to stdout.
pub fn print_report(summary: &BatchSummary) {
    println!("{}", format_report(summary));
}

/// Print results as JSON.
pub fn print_json(summary: &BatchSummary, coin_probabilities: &[f64], seed: Option<u64>) {
    let output = JsonOutput { summary, coin_probabilities, seed };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => crate::bail(format!("Failed to serialize summary: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> BatchSummary {
        BatchSummary {
            run_count: 100,
            flip_budget: 20,
            mean_heads: 11.62,
            max_heads: 17,
            min_heads: 5,
            high_threshold: 10,
            count_above: 57,
            low_threshold: 10,
            count_below: 29,
        }
    }

    #[test]
    fn test_report_wording() {
        let report = format_report(&sample_summary());
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "Executed 100 runs of 20 coin flips. Statistics for the runs were as follows:");
        assert_eq!(lines[1], "The mean number of heads results per run was 11.62.");
        assert_eq!(lines[2], "The maximum number of heads results in a run was 17.");
        assert_eq!(lines[3], "The minimum number of heads results in a run was 5.");
        assert_eq!(lines[4], "57 of 100 runs produced greater than 10 heads results.");
        assert_eq!(lines[5], "29 of 100 runs produced less than 10 heads results.");
    }

    #[test]
    fn test_report_uses_configured_thresholds() {
        let summary = BatchSummary { high_threshold: 14, low_threshold: 6, ..sample_summary() };
        let report = format_report(&summary);
        assert!(report.contains("greater than 14 heads"));
        assert!(report.contains("less than 6 heads"));
    }

    #[test]
    fn test_json_shape() {
        let summary = sample_summary();
        let probs = [0.2, 0.8];
        let value = serde_json::to_value(JsonOutput { summary: &summary, coin_probabilities: &probs, seed: Some(3) }).unwrap();
        assert_eq!(value["summary"]["max_heads"], 17);
        assert_eq!(value["summary"]["count_below"], 29);
        assert_eq!(value["seed"], 3);
        assert_eq!(value["coin_probabilities"][1], 0.8);
    }
}
