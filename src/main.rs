mod config;
mod emitter;
mod glyphs;
mod report;
mod term;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use config::ConfigFile;

#[derive(Parser, Debug)]
#[command(
    name = "glyphcheck",
    version,
    about = "Print a sheet of Unicode symbols and emoji to check terminal rendering",
    long_about = None,
)]
struct Args {
    /// Don't clear the screen before printing
    #[arg(long, env = "GLYPHCHECK_NO_CLEAR")]
    no_clear: bool,

    /// Print code points and expected display widths instead of the glyph sheet
    #[arg(long)]
    report: bool,

    /// With --report, print the inventory as JSON
    #[arg(long, requires = "report")]
    json: bool,

    /// Write a default config file to ~/.config/glyphcheck/config.toml and exit
    #[arg(long)]
    init: bool,

    /// Generate shell completions and print to stdout (bash, zsh, fish, elvish)
    #[arg(long, value_name = "SHELL")]
    completions: Option<String>,

    /// Log debug detail to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // ── --init ────────────────────────────────────────────────────────────────
    if args.init {
        let (path, written) = ConfigFile::write_default_if_missing()?;
        if written {
            println!("Config written to: {}", path.display());
        } else {
            println!("Config already exists at: {}", path.display());
        }
        return Ok(());
    }

    // ── --completions ─────────────────────────────────────────────────────────
    if let Some(shell_name) = &args.completions {
        return generate_completions(shell_name);
    }

    let file = ConfigFile::load()?;
    log::debug!("config: {file:?}");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // ── --report ──────────────────────────────────────────────────────────────
    if args.report {
        return if args.json {
            report::write_json(&mut out)
        } else {
            report::write_text(&mut out, &file.report)
        };
    }

    // ── Glyph sheet ───────────────────────────────────────────────────────────
    let opts = emitter::EmitOptions::resolve(&file, args.no_clear);
    emitter::run(&mut term::AnsiTerminal::new(out), opts)
}

// ── Shell completions ─────────────────────────────────────────────────────────

fn generate_completions(shell_name: &str) -> Result<()> {
    use clap_complete::{Shell, generate};

    let shell: Shell = match shell_name.to_lowercase().as_str() {
        "bash"    => Shell::Bash,
        "zsh"     => Shell::Zsh,
        "fish"    => Shell::Fish,
        "elvish"  => Shell::Elvish,
        _ => {
            eprintln!("Unknown shell: {shell_name}");
            eprintln!("Supported: bash, zsh, fish, elvish");
            std::process::exit(1);
        }
    };

    let mut cmd = Args::command();
    generate(shell, &mut cmd, "glyphcheck", &mut std::io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_plain_run() {
        let args = Args::try_parse_from(["glyphcheck"]).unwrap();
        assert!(!args.no_clear);
        assert!(!args.report);
        assert!(args.completions.is_none());
    }

    #[test]
    fn test_no_clear_flag() {
        let args = Args::try_parse_from(["glyphcheck", "--no-clear"]).unwrap();
        assert!(args.no_clear);
        let opts = emitter::EmitOptions::resolve(&ConfigFile::default(), args.no_clear);
        assert!(!opts.clear);
    }

    #[test]
    fn test_json_requires_report() {
        assert!(Args::try_parse_from(["glyphcheck", "--json"]).is_err());
        let args = Args::try_parse_from(["glyphcheck", "--report", "--json"]).unwrap();
        assert!(args.report && args.json);
    }
}
