use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use clap::Parser;
use simpkg::{Config, Registry, defaults, render_packaging, write_packaging};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "simh-pkggen")]
#[command(about = "Generate the SIMH CPack component descriptor")]
#[command(version)]
struct Args {
    /// Top-level source directory; the descriptor goes to cmake/simh-packaging.cmake below it
    #[arg(value_name = "TOPLEVEL", required_unless_present_any = ["stdout", "list_families"])]
    toplevel: Option<Utf8PathBuf>,

    /// Simulator that is part of the build (repeatable)
    #[arg(long = "sim", value_name = "NAME")]
    sims: Vec<String>,

    /// File listing simulators in the build, one per line
    #[arg(long)]
    targets: Option<Utf8PathBuf>,

    /// YAML family/simulator table to use instead of the built-in one
    #[arg(long)]
    config: Option<Utf8PathBuf>,

    /// Print the descriptor instead of writing it
    #[arg(long)]
    stdout: bool,

    /// List families and their simulators, then exit
    #[arg(long)]
    list_families: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_targets(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}

fn load_registry(config: Option<&Utf8PathBuf>) -> Result<Registry> {
    match config {
        Some(path) => {
            let config = Config::load(path.as_std_path())?;
            config
                .into_registry()
                .context(format!("Invalid packaging config: {path}"))
        }
        None => Ok(defaults::registry()),
    }
}

fn list_families(registry: &Registry) -> Result<()> {
    let mut out = std::io::stdout().lock();
    for family in registry.families() {
        writeln!(out, "{} ({})", family.token(), family.display_name())?;
        for sim in registry.simulators(family.token()) {
            writeln!(out, "  - {sim}")?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut registry = load_registry(args.config.as_ref())?;

    if args.list_families {
        return list_families(&registry);
    }

    registry
        .mark_all(&args.sims)
        .context("Failed to mark simulator from --sim")?;

    if let Some(targets) = &args.targets {
        let text = std::fs::read_to_string(targets)
            .context(format!("Failed to read targets file: {targets}"))?;
        registry
            .mark_all(parse_targets(&text))
            .context(format!("Failed to mark simulator from {targets}"))?;
    }

    if args.stdout {
        let mut out = std::io::stdout().lock();
        render_packaging(&registry, &mut out)?;
        out.flush()?;
        return Ok(());
    }

    let toplevel = args
        .toplevel
        .ok_or_else(|| anyhow::anyhow!("TOPLEVEL argument is required"))?;
    let path = write_packaging(&registry, toplevel.as_std_path())?;
    println!("==== wrote {}", path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_targets() {
        let text = "b5500\n\n# comment\n  i704  \npdp6\n";
        let names: Vec<&str> = parse_targets(text).collect();
        assert_eq!(names, vec!["b5500", "i704", "pdp6"]);
    }

    #[test]
    fn test_args_require_toplevel() {
        assert!(Args::try_parse_from(["simh-pkggen"]).is_err());
        assert!(Args::try_parse_from(["simh-pkggen", "--stdout"]).is_ok());

        let args =
            Args::try_parse_from(["simh-pkggen", "/src", "--sim", "b5500", "--sim", "i704"])
                .unwrap();
        assert_eq!(args.toplevel.unwrap(), "/src");
        assert_eq!(args.sims, vec!["b5500", "i704"]);
    }
}
