use anyhow::{Context, Result};
use client_runtime::{SceneConfig, replay};
use data_runtime::scenario;
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: sim-harness <scenario.json>");
        std::process::exit(2);
    }
    let scen = scenario::load_scenario(Path::new(&args[1]))?;
    let cfg = SceneConfig::load().context("scene config")?;
    let report = replay(&scen, &cfg).with_context(|| format!("replay {}", scen.name))?;
    println!(
        "scenario {} ({} frames, {:.0} ms)",
        scen.name,
        report.frames,
        scen.duration_ms()
    );
    for c in &report.changes {
        let name = c.action.map_or_else(|| "-".to_string(), |a| a.to_string());
        println!("  {:>6.0} ms  frame {:>5}  {name}", c.at_ms, c.frame);
    }
    println!(
        "final: {:?} facing {:?}, scroll_x={:.2}, viewport={}x{}",
        report.final_action,
        report.final_direction,
        report.scroll_x,
        report.viewport.x,
        report.viewport.y
    );
    println!("ok");
    Ok(())
}
