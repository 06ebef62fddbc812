use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use sampler_core::calculations::SampleSizeEstimator;
use sampler_core::models::{ConfidenceLevel, SampleSizeRequest, SampleSizeResult};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Minimum sample size calculator for estimating a population proportion.
///
/// Applies the finite-population-corrected normal-approximation formula and
/// prints the smallest sample that meets the requested margin of error at
/// the chosen confidence level.
#[derive(Debug, Parser)]
struct Cli {
    /// Rows of data in the population (N).
    #[arg(long, short = 'n', default_value_t = 1000)]
    population: u64,

    /// Confidence level: 90%, 95%, 97%, 99% or 99.9%.
    #[arg(long, short = 'c', default_value = "95%", value_parser = parse_confidence)]
    confidence: ConfidenceLevel,

    /// Estimated population proportion (p). Leave at 0.5 if unsure.
    #[arg(long, short = 'p', default_value_t = 0.5)]
    proportion: f64,

    /// Margin of error (E), as a fraction in (0, 1].
    #[arg(long, short = 'e', default_value_t = 0.05)]
    margin: f64,

    /// Emit the result as JSON instead of a sentence.
    #[arg(long)]
    json: bool,
}

fn parse_confidence(s: &str) -> Result<ConfidenceLevel, String> {
    ConfidenceLevel::parse(s).ok_or_else(|| {
        let labels: Vec<&str> = ConfidenceLevel::ALL.iter().map(|l| l.as_str()).collect();
        format!(
            "unknown confidence level '{s}'; expected one of {}",
            labels.join(", ")
        )
    })
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── rendering ───────────────────────────────────────────────────────────────

fn summary(request: &SampleSizeRequest, result: &SampleSizeResult) -> String {
    format!(
        "For a {} confidence level with a {:.0}% margin of error, \
         the minimum sample size needed is {} rows, \
         a {}% reduction from the total population size.",
        request.confidence_level.as_str(),
        request.margin_of_error * 100.0,
        result.sample_size,
        result.reduction_percent,
    )
}

fn json_payload(request: &SampleSizeRequest, result: &SampleSizeResult) -> serde_json::Value {
    serde_json::json!({
        "population_size": request.population_size,
        "confidence_level": request.confidence_level.as_str(),
        "proportion": request.proportion,
        "margin_of_error": request.margin_of_error,
        "sample_size": result.sample_size,
        "reduction_percent": result.reduction_percent,
    })
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let request = SampleSizeRequest {
        population_size: cli.population,
        confidence_level: cli.confidence,
        proportion: cli.proportion,
        margin_of_error: cli.margin,
    };

    debug!(?request, "estimating sample size");
    let result = SampleSizeEstimator::estimate(&request)?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&json_payload(&request, &result))?);
    } else {
        println!("{}", summary(&request, &result));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn default_request() -> SampleSizeRequest {
        SampleSizeRequest {
            population_size: 1000,
            confidence_level: ConfidenceLevel::NinetyFive,
            proportion: 0.5,
            margin_of_error: 0.05,
        }
    }

    #[test]
    fn summary_matches_expected_sentence() {
        let result = SampleSizeEstimator::estimate(&default_request()).unwrap();

        let text = summary(&default_request(), &result);

        assert_eq!(
            text,
            "For a 95% confidence level with a 5% margin of error, \
             the minimum sample size needed is 278 rows, \
             a 72% reduction from the total population size."
        );
    }

    #[test]
    fn json_payload_carries_inputs_and_outputs() {
        let request = default_request();
        let result = SampleSizeEstimator::estimate(&request).unwrap();

        let payload = json_payload(&request, &result);

        assert_eq!(payload["confidence_level"], "95%");
        assert_eq!(payload["sample_size"], 278);
        assert_eq!(payload["reduction_percent"], 72);
    }

    #[test]
    fn parse_confidence_lists_valid_labels_on_error() {
        let error = parse_confidence("42%").unwrap_err();

        assert_eq!(
            error,
            "unknown confidence level '42%'; expected one of 90%, 95%, 97%, 99%, 99.9%"
        );
    }

    #[test]
    fn cli_defaults_mirror_the_original_form() {
        let cli = Cli::try_parse_from(["sampler"]).unwrap();

        assert_eq!(cli.population, 1000);
        assert_eq!(cli.confidence, ConfidenceLevel::NinetyFive);
        assert_eq!(cli.proportion, 0.5);
        assert_eq!(cli.margin, 0.05);
        assert!(!cli.json);
    }

    #[test]
    fn cli_accepts_explicit_arguments() {
        let cli = Cli::try_parse_from([
            "sampler", "-n", "10000", "-c", "99%", "-p", "0.3", "-e", "0.02",
        ])
        .unwrap();

        assert_eq!(cli.population, 10_000);
        assert_eq!(cli.confidence, ConfidenceLevel::NinetyNine);
        assert_eq!(cli.proportion, 0.3);
        assert_eq!(cli.margin, 0.02);
    }
}
