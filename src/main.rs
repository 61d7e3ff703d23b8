use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;

use style_guard::checker::{CancelFlag, FileChecker};
use style_guard::cli::{Cli, ColorChoice};
use style_guard::config::{Config, ConfigLoader, FileConfigLoader};
use style_guard::output::{
    ColorMode, ErrorOutput, JsonFormatter, OutputFormat, OutputFormatter, ScanProgress,
    TextFormatter,
};
use style_guard::report::Report;
use style_guard::rules::{INVALID_ENCODING, RuleSet, UNREADABLE};
use style_guard::scanner::{FileScanner, PathCollector, ScanOptions, SourceFilter};
use style_guard::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VIOLATIONS};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let errors = ErrorOutput::new(color_choice_to_mode(cli.color));
            errors.print_error(
                e.error_type(),
                &e.message(),
                e.detail().as_deref(),
                e.suggestion(),
            );
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> style_guard::Result<i32> {
    // 1. Load configuration
    let mut config = load_config(cli.config.as_deref(), cli.no_config)?;

    // 2. Apply CLI argument overrides and validate the result
    apply_cli_overrides(&mut config, cli);
    config.validate()?;

    // 3. Build the rule catalog
    let rules = RuleSet::from_config(&config.rules)?;

    if cli.list_rules {
        write_output(cli.output.as_deref(), &format_rule_listing(&rules), cli.quiet)?;
        return Ok(EXIT_SUCCESS);
    }

    // 4. Collect the files to check
    let base = std::env::current_dir()?;
    let filter = SourceFilter::new(config.scan.extensions.clone(), &config.scan.exclude_patterns)?;
    let options = match &cli.path {
        Some(target) => ScanOptions::single_file(base.clone(), target.clone()),
        None => {
            let roots = config.scan.roots.iter().map(PathBuf::from).collect();
            let prefixes: Vec<PathBuf> = config.scan.exclude.iter().map(PathBuf::from).collect();
            ScanOptions::tree(base.clone(), roots, &prefixes, config.scan.gitignore)
        }
    };
    let files = PathCollector::new(filter, options).collect()?;

    // 5. Check each file (parallel with rayon)
    let checker = FileChecker::new(&rules, base);
    let progress = ScanProgress::new(files.len() as u64, cli.quiet);
    let reports = checker.check_files(&files, &progress, &CancelFlag::new());
    progress.finish();

    // 6. Assemble the deterministic report
    let report = Report::from_file_reports(reports);

    // 7. Format output
    let color_mode = color_choice_to_mode(cli.color);
    let output = format_output(cli.format, &report, color_mode, cli.verbose)?;

    // 8. Write output
    write_output(cli.output.as_deref(), &output, cli.quiet)?;

    // 9. Determine exit code
    if report.is_clean() {
        Ok(EXIT_SUCCESS)
    } else {
        Ok(EXIT_VIOLATIONS)
    }
}

fn load_config(config_path: Option<&Path>, no_config: bool) -> style_guard::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if !cli.root.is_empty() {
        config.scan.roots = cli
            .root
            .iter()
            .map(|p| p.to_string_lossy().into_owned())
            .collect();
    }

    config
        .scan
        .exclude
        .extend(cli.exclude.iter().map(|p| p.to_string_lossy().into_owned()));

    if let Some(ref ext) = cli.ext {
        config.scan.extensions.clone_from(ext);
    }

    if let Some(max_line_length) = cli.max_line_length {
        config.rules.max_line_length = max_line_length;
    }
}

fn format_rule_listing(rules: &RuleSet) -> String {
    let mut output = String::new();

    output.push_str("Rules:\n");
    for info in rules.infos() {
        let state = if info.enabled { "" } else { " (disabled)" };
        let _ = writeln!(output, "  {:<24} {}{state}", info.id, info.description);
    }

    output.push_str("\nAlways-on findings:\n");
    let _ = writeln!(output, "  {INVALID_ENCODING:<24} File is not valid UTF-8");
    let _ = writeln!(output, "  {UNREADABLE:<24} File could not be read");

    output
}

fn format_output(
    format: OutputFormat,
    report: &Report,
    color_mode: ColorMode,
    verbose: u8,
) -> style_guard::Result<String> {
    match format {
        OutputFormat::Text => TextFormatter::with_verbose(color_mode, verbose).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

fn write_output(output_path: Option<&Path>, content: &str, quiet: bool) -> style_guard::Result<()> {
    if let Some(path) = output_path {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
    } else if !quiet {
        print!("{content}");
    }
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
