use anyhow::bail;
use arena_engine::api::{builtin_encounter, load_encounter, run_encounter, EncounterResult};
use arena_engine::content::builtin_encounters;
use arena_engine::{Item, Player};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;

#[derive(Subcommand)]
enum Cmd {
    /// Play an encounter script step by step
    Run {
        /// Path to a YAML or JSON encounter script
        #[arg(long, conflicts_with = "builtin")]
        file: Option<PathBuf>,
        /// Name of a bundled encounter (see `builtins`)
        #[arg(long)]
        builtin: Option<String>,
        /// Print the full result as JSON instead of the log
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Abort on the first rejected action
        #[arg(long, default_value_t = false)]
        stop_on_error: bool,
    },
    /// List the bundled encounter scripts
    Builtins,
    /// Demo: Alice takes a sword to Bob
    Demo,
}

#[derive(Parser)]
#[command(name = "arena-cli")]
#[command(about = "Arena encounter harness")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    cmd: Cmd,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Cmd::Run {
            file,
            builtin,
            json,
            stop_on_error,
        } => {
            let mut cfg = match (file, builtin) {
                (Some(path), _) => load_encounter(&path)?,
                (None, Some(name)) => builtin_encounter(&name)?,
                (None, None) => bail!("pass --file <path> or --builtin <name>"),
            };
            cfg.stop_on_error |= stop_on_error;
            let res = run_encounter(&cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&res)?);
            } else {
                print_result(&res);
            }
        }
        Cmd::Builtins => {
            let mut names: Vec<_> = builtin_encounters().into_keys().collect();
            names.sort_unstable();
            for name in names {
                println!("{}", name);
            }
        }
        Cmd::Demo => demo()?,
    }
    Ok(())
}

fn print_result(res: &EncounterResult) {
    if !res.name.is_empty() {
        println!("== {} ==", res.name);
    }
    for line in &res.log {
        println!("{}", line);
    }
}

fn demo() -> anyhow::Result<()> {
    let mut alice = Player::fighter("Alice");
    let mut bob = Player::fighter("Bob");
    alice.pickup(Item::weapon("Sword", 15)?)?;
    alice.use_item("Sword")?;
    let hit = alice.attack(&mut bob)?;
    println!("Alice attacks Bob: {}", if hit { "HIT" } else { "MISS" });
    println!();
    println!("{}", alice);
    println!();
    println!("{}", bob);
    Ok(())
}
