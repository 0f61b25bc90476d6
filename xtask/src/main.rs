use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::process::{Command, Stdio};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "x")]
#[command(about = "Development automation for polyspin")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run all CI checks (fmt, clippy, build, test)
    Ci {
        #[arg(long)]
        verbose: bool,
    },
    /// Format code
    Fmt {
        #[arg(long)]
        check: bool,
    },
    /// Run clippy on every target
    Clippy {
        #[arg(long)]
        fix: bool,
    },
    /// Run tests, optionally limited to one module
    Test {
        /// Module under `core` to test (display, polygon, render, config)
        #[arg(short = 'm', long)]
        module: Option<String>,
        /// Run doc tests only
        #[arg(long)]
        doc: bool,
    },
    /// Run criterion benchmarks
    Bench,
    /// Render a frame with the host binary and write it as PBM
    Render {
        /// Crank angle in degrees
        #[arg(short = 'a', long, default_value = "0", allow_negative_numbers = true)]
        angle: f32,
        /// Output PBM path
        #[arg(short = 'o', long, default_value = "frame.pbm")]
        output: String,
        /// Build in release mode
        #[arg(long)]
        release: bool,
    },
    /// Install a git pre-commit hook running the CI checks
    InstallHooks,
}

const MODULES: [&str; 4] = ["display", "polygon", "render", "config"];

/// Pre-commit hook body; does not rely on the `cargo x` alias being available
const PRE_COMMIT_HOOK: &str = "#!/bin/sh\nset -e\ncargo run --quiet --package xtask -- ci\n";

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Ci { verbose } => run_ci(verbose),
        Commands::Fmt { check } => run_fmt(check),
        Commands::Clippy { fix } => run_clippy(fix),
        Commands::Test { module, doc } => run_test(module.as_deref(), doc),
        Commands::Bench => cargo(&["bench"]),
        Commands::Render {
            angle,
            output,
            release,
        } => run_render(angle, &output, release),
        Commands::InstallHooks => install_hooks(),
    }
}

fn run_ci(verbose: bool) -> Result<()> {
    println!("{}", "=== Running CI Pipeline ===".bold().blue());

    let start = Instant::now();

    run_task("Format Check", || run_fmt(true), verbose)?;
    run_task("Clippy", || run_clippy(false), verbose)?;
    run_task("Build", || cargo(&["build", "--workspace"]), verbose)?;
    run_task("Test", || run_test(None, false), verbose)?;

    println!(
        "\n{} {}",
        "✓ CI passed in".green().bold(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );

    Ok(())
}

fn run_fmt(check: bool) -> Result<()> {
    if check {
        cargo(&["fmt", "--all", "--", "--check"])
    } else {
        cargo(&["fmt", "--all"])
    }
}

fn run_clippy(fix: bool) -> Result<()> {
    if fix {
        cargo(&["clippy", "--all-targets", "--fix"])
    } else {
        cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])
    }
}

fn run_test(module: Option<&str>, doc: bool) -> Result<()> {
    if doc {
        return cargo(&["test", "--doc"]);
    }

    let Some(module) = module else {
        return cargo(&["test", "--workspace"]);
    };

    if !MODULES.contains(&module) {
        anyhow::bail!(
            "Unknown module '{}' (expected one of: {})",
            module,
            MODULES.join(", ")
        );
    }

    let filter = format!("core::{}", module);
    println!("{} Running {} tests...", "→".blue(), module.bold());
    cargo(&["test", "--lib", &filter])?;
    println!("{} {} tests passed", "✓".green(), module);

    Ok(())
}

fn run_render(angle: f32, output: &str, release: bool) -> Result<()> {
    println!("{}", "=== Render Frame ===".bold().blue());
    println!("{} Crank: {}°", "→".blue(), angle.to_string().bold());
    println!("{} Output: {}", "→".blue(), output.cyan());

    let angle = angle.to_string();
    let mut args = vec!["run", "--bin", "polyspin"];
    if release {
        args.push("--release");
    }
    args.extend(["--", "--frames", "1", "--angle", &angle, "--output", output]);

    let start = Instant::now();
    cargo(&args)?;

    println!(
        "\n{} Frame written to {} in {}",
        "✓".green().bold(),
        output.cyan(),
        format!("{:.2}s", start.elapsed().as_secs_f64()).bold()
    );

    Ok(())
}

fn install_hooks() -> Result<()> {
    use std::fs;

    let hook_path = ".git/hooks/pre-commit";
    fs::write(hook_path, PRE_COMMIT_HOOK)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(hook_path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(hook_path, perms)?;
    }

    println!("{}", "✓ Git hooks installed".green());
    Ok(())
}

fn run_task<F>(name: &str, task: F, verbose: bool) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    print!("{} {} ... ", "→".blue(), name);

    let start = Instant::now();
    let result = task();

    match &result {
        Ok(_) if verbose => println!(
            "{} ({:.2}s)",
            "✓".green().bold(),
            start.elapsed().as_secs_f64()
        ),
        Ok(_) => println!("{}", "✓".green().bold()),
        Err(_) => println!("{}", "✗".red().bold()),
    }

    result
}

fn cargo(args: &[&str]) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;

    if !status.success() {
        anyhow::bail!("cargo {} failed with exit code: {}", args.join(" "), status);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pre_commit_hook_runs_ci_package() {
        assert!(PRE_COMMIT_HOOK.starts_with("#!/bin/sh\n"));
        assert!(PRE_COMMIT_HOOK.contains("cargo run --quiet --package xtask -- ci"));
        assert!(!PRE_COMMIT_HOOK.contains("cargo x "));
    }

    #[test]
    fn test_cargo_alias_targets_xtask() {
        let config = include_str!("../../.cargo/config.toml");
        assert!(config.contains("[alias]"));
        assert!(config.contains(r#"x = "run --quiet --package xtask --""#));
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from(["x", "render", "--angle", "-45", "--release"]).unwrap();
        match cli.command {
            Commands::Render {
                angle,
                output,
                release,
            } => {
                assert_eq!(angle, -45.0);
                assert_eq!(output, "frame.pbm");
                assert!(release);
            }
            _ => panic!("expected render command"),
        }
    }
}
