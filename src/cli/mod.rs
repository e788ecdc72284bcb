//! Terminal front end: load an aggregate, build the view, print it.

pub mod output;
pub mod render;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigManager, DashboardConfig};
use crate::core::services::{DashboardOptions, DashboardService};
use crate::domain::{ChartType, DashboardAggregate, Period, ThemeMode, ValidationMode};
use crate::errors::DashboardResult;

use output::OutputPreferences;

#[derive(Parser, Debug, Default)]
#[command(
    name = "dashboard_cli",
    about = "Render a personal-finance dashboard from an aggregate JSON file."
)]
pub struct CliArgs {
    /// Aggregate JSON file; the built-in sample is used when omitted
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Start from an all-zero dashboard instead of the sample
    #[arg(long, conflicts_with = "input")]
    pub empty: bool,

    /// Config file; defaults to the per-user config location
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reporting window: month or week
    #[arg(long)]
    pub period: Option<Period>,

    /// Category chart: pie or doughnut
    #[arg(long)]
    pub chart: Option<ChartType>,

    /// Use the dark colour scheme
    #[arg(long, conflicts_with = "light")]
    pub dark: bool,

    /// Use the light colour scheme
    #[arg(long)]
    pub light: bool,

    /// Clamp negative totals to zero instead of rejecting the input
    #[arg(long)]
    pub clamp: bool,

    /// Print the view as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colours
    #[arg(long)]
    pub plain: bool,

    /// Bold text instead of colours
    #[arg(long)]
    pub high_contrast: bool,

    /// Persist the resolved period, chart and theme into the config file once
    /// the dashboard renders
    #[arg(long)]
    pub save_config: bool,
}

impl CliArgs {
    fn apply_overrides(&self, config: &mut DashboardConfig) {
        if let Some(period) = self.period {
            config.period = period;
        }
        if let Some(chart) = self.chart {
            config.chart_type = chart;
        }
        if self.dark {
            config.theme = ThemeMode::Dark;
        } else if self.light {
            config.theme = ThemeMode::Light;
        }
        if self.clamp {
            config.validation = ValidationMode::Clamp;
        }
    }
}

pub fn run_cli() -> DashboardResult<()> {
    let args = CliArgs::parse();
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run(&args, &mut handle)
}

pub fn run(args: &CliArgs, out: &mut impl Write) -> DashboardResult<()> {
    let manager = match &args.config {
        Some(path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let stored = manager.load()?;
    let mut config = stored.clone();
    args.apply_overrides(&mut config);

    let aggregate = match &args.input {
        Some(path) => DashboardAggregate::load_from_path(path, config.validation)?,
        None if args.empty => DashboardAggregate::empty(),
        None => DashboardAggregate::sample(),
    };

    let options = DashboardOptions::from(&config);
    let view = DashboardService::build_view(&aggregate, &options);

    if args.save_config {
        let persisted = DashboardConfig {
            validation: stored.validation,
            ..config
        };
        manager.save(&persisted)?;
    }

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
    } else {
        let prefs = OutputPreferences {
            plain_mode: args.plain,
            high_contrast_mode: args.high_contrast,
        };
        out.write_all(render::render_text(&view, &prefs).as_bytes())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args_with_config(dir: &std::path::Path) -> CliArgs {
        CliArgs {
            config: Some(dir.join("config.json")),
            plain: true,
            ..CliArgs::default()
        }
    }

    #[test]
    fn flags_override_config() {
        let mut config = DashboardConfig::default();
        let args = CliArgs {
            period: Some(Period::Week),
            chart: Some(ChartType::Pie),
            dark: true,
            clamp: true,
            ..CliArgs::default()
        };
        args.apply_overrides(&mut config);
        assert_eq!(config.period, Period::Week);
        assert_eq!(config.chart_type, ChartType::Pie);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert_eq!(config.validation, ValidationMode::Clamp);
    }

    #[test]
    fn renders_sample_without_input() {
        let dir = tempdir().expect("temp dir");
        let mut buffer = Vec::new();
        run(&args_with_config(dir.path()), &mut buffer).expect("run");
        let text = String::from_utf8(buffer).expect("utf8");
        assert!(text.contains("$3,200"));
        assert!(text.contains("Peak Day        SAT"));
    }

    #[test]
    fn json_output_parses() {
        let dir = tempdir().expect("temp dir");
        let args = CliArgs {
            json: true,
            period: Some(Period::Week),
            ..args_with_config(dir.path())
        };
        let mut buffer = Vec::new();
        run(&args, &mut buffer).expect("run");
        let value: serde_json::Value = serde_json::from_slice(&buffer).expect("json");
        assert_eq!(value["period"], "week");
        assert_eq!(value["cards"]["income"], "$800");
    }

    #[test]
    fn save_config_persists_flags() {
        let dir = tempdir().expect("temp dir");
        let args = CliArgs {
            dark: true,
            save_config: true,
            ..args_with_config(dir.path())
        };
        run(&args, &mut Vec::new()).expect("run");
        let saved = ConfigManager::with_path(dir.path().join("config.json"))
            .load()
            .expect("load");
        assert_eq!(saved.theme, ThemeMode::Dark);
    }

    #[test]
    fn save_config_skips_validation_mode() {
        let dir = tempdir().expect("temp dir");
        let args = CliArgs {
            clamp: true,
            period: Some(Period::Week),
            save_config: true,
            ..args_with_config(dir.path())
        };
        run(&args, &mut Vec::new()).expect("run");
        let saved = ConfigManager::with_path(dir.path().join("config.json"))
            .load()
            .expect("load");
        assert_eq!(saved.period, Period::Week);
        assert_eq!(saved.validation, ValidationMode::Strict);
    }

    #[test]
    fn failed_run_leaves_config_untouched() {
        let dir = tempdir().expect("temp dir");
        let input = dir.path().join("aggregate.json");
        let mut aggregate = DashboardAggregate::sample();
        aggregate.weekly_spending.pop();
        std::fs::write(&input, serde_json::to_string(&aggregate).expect("json"))
            .expect("write input");
        let args = CliArgs {
            input: Some(input),
            dark: true,
            save_config: true,
            ..args_with_config(dir.path())
        };
        assert!(run(&args, &mut Vec::new()).is_err());
        assert!(!dir.path().join("config.json").exists());
    }
}
