use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Parser)]
#[command(author, version, about = "Workspace automation tasks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// fmt + clippy -D warnings + tests (workspace)
    Ci,
    /// Validate data/config TOMLs and data/scenarios against serde models
    SchemaCheck,
    /// Run every scenario under data/scenarios through the sim harness
    Scenarios,
}

fn run(cmd: &mut Command) -> Result<()> {
    let status = cmd.status().context("spawn")?;
    if !status.success() {
        bail!("command failed: {:?}", cmd);
    }
    Ok(())
}

fn cargo(args: &[&str]) -> Result<()> {
    let mut c = Command::new("cargo");
    c.args(args)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit());
    run(&mut c)
}

fn root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..")
}

fn ci() -> Result<()> {
    cargo(&["fmt", "--all"])?;
    cargo(&["clippy", "--all-targets", "--", "-D", "warnings"])?;
    cargo(&["test"])?;
    schema_check()?;
    Ok(())
}

fn files_with_ext(dir: &Path, ext: &str) -> Vec<PathBuf> {
    let mut out: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some(ext))
        .collect();
    out.sort();
    out
}

fn schema_check() -> Result<()> {
    use data_runtime::configs::{controls, parallax, spineboy_animations, telemetry};

    controls::load_default().context("validate controls.toml")?;
    let anims =
        spineboy_animations::load_default().context("validate spineboy_animations.toml")?;
    parallax::load_default().context("validate parallax.toml")?;
    telemetry::load_default().context("validate telemetry.toml")?;

    // every configured clip name needs a duration for the built-in player
    for action in ["idle", "walk", "run", "jump", "hover", "spawn"] {
        if let Some(name) = anims.clip(action).and_then(|c| c.name.as_deref()) {
            if !anims.clips.is_empty() && !anims.clips.contains_key(name) {
                bail!("spineboy_animations.toml: clip `{name}` ({action}) has no duration");
            }
        }
    }

    let scenarios = files_with_ext(&root().join("data/scenarios"), "json");
    for path in &scenarios {
        data_runtime::scenario::load_scenario(path)
            .with_context(|| format!("validate scenario: {}", path.display()))?;
    }
    println!("xtask: configs ok, {} scenarios ok", scenarios.len());
    Ok(())
}

fn scenarios() -> Result<()> {
    for path in files_with_ext(&root().join("data/scenarios"), "json") {
        let p = path.to_string_lossy();
        cargo(&["run", "-q", "-p", "sim-harness", "--", &*p])?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Ci => ci(),
        Cmd::SchemaCheck => schema_check(),
        Cmd::Scenarios => scenarios(),
    }
}
