use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use glam::DVec2;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use curvelab::{
    config::{SessionConfig, load_session_from_file},
    curve_error::CurveResult,
    curves::algorithm::Algorithm,
    projects::Project,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One `u,y` pair per line
    #[default]
    Csv,
    /// A YAML list of `[u, y]` pairs
    Yaml,
}

/// Sample a polynomial function given by its control ordinates
#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
struct Args {
    /// YAML session file; flags given on the command line override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Control ordinates, comma separated, e.g. `0,2,0`
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    points: Option<Vec<f64>>,

    /// Number of evenly spaced samples on [0, 1]
    #[arg(long)]
    samples: Option<usize>,

    /// Evaluation algorithm: nli (de Casteljau) or bb (Bernstein basis)
    #[arg(long)]
    algorithm: Option<Algorithm>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    format: OutputFormat,

    /// Print the project catalog and exit
    #[arg(long)]
    list_projects: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn session_from_args(args: &Args) -> CurveResult<SessionConfig> {
    let mut session = match &args.config {
        Some(path) => load_session_from_file(path)?,
        None => SessionConfig::default(),
    };
    if let Some(points) = &args.points {
        session.control_points = points.clone();
    }
    if let Some(samples) = args.samples {
        session.sample_count = samples;
    }
    if let Some(algorithm) = args.algorithm {
        session.algorithm = algorithm;
    }
    Ok(session)
}

fn format_samples(samples: &[DVec2], format: OutputFormat) -> CurveResult<String> {
    match format {
        OutputFormat::Csv => Ok(samples
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(samples)?),
    }
}

fn list_projects() {
    for project in Project::ALL {
        let status = if project.is_implemented() {
            "implemented"
        } else {
            "not implemented yet"
        };
        println!("{} [{}]", project, status);
    }
}

fn run(args: &Args) -> CurveResult<()> {
    if args.list_projects {
        list_projects();
        return Ok(());
    }

    let session = session_from_args(args)?;
    session.warn_outside_editor_limits();
    info!(
        degree = session.control_points.len().saturating_sub(1),
        samples = session.sample_count,
        algorithm = %session.algorithm,
        "sampling curve"
    );
    let samples = session.sample()?;
    println!("{}", format_samples(&samples, args.format)?.trim_end());
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() -> CurveResult<()> {
        let args = Args::parse_from([
            "curvelab",
            "--points=-1.5,2,0",
            "--samples",
            "3",
            "--algorithm",
            "bb",
        ]);
        let session = session_from_args(&args)?;
        assert_eq!(session.control_points, vec![-1.5, 2.0, 0.0]);
        assert_eq!(session.sample_count, 3);
        assert_eq!(session.algorithm, Algorithm::Bb);
        Ok(())
    }

    #[test]
    fn test_no_flags_gives_default_session() -> CurveResult<()> {
        let args = Args::parse_from(["curvelab"]);
        assert_eq!(session_from_args(&args)?, SessionConfig::default());
        Ok(())
    }

    #[test]
    fn test_csv_output() -> CurveResult<()> {
        let samples = [DVec2::new(0.0, 0.0), DVec2::new(0.5, 1.0), DVec2::new(1.0, 0.0)];
        assert_eq!(
            format_samples(&samples, OutputFormat::Csv)?,
            "0,0\n0.5,1\n1,0"
        );
        Ok(())
    }

    #[test]
    fn test_yaml_output_parses_back() -> CurveResult<()> {
        let samples = vec![DVec2::new(0.0, 0.0), DVec2::new(1.0, 2.0)];
        let text = format_samples(&samples, OutputFormat::Yaml)?;
        let parsed: Vec<DVec2> = serde_yaml::from_str(&text)?;
        assert_eq!(parsed, samples);
        Ok(())
    }

    #[test]
    fn test_bad_sample_count_is_reported() {
        let args = Args::parse_from(["curvelab", "--samples", "1"]);
        assert!(run(&args).is_err());
    }
}
