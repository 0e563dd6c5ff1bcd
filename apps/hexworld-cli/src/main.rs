mod config;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use hexworld_agent::{AgentController, MoveOutcome};
use hexworld_common::AxialCoord;
use hexworld_input::parse_path;
use hexworld_kernel::WorldModel;
use hexworld_render::{AsciiMapRenderer, RenderView, Renderer};
use hexworld_tools::WorldInspector;

use crate::config::CliConfig;

#[derive(Parser)]
#[command(name = "hexworld-cli", about = "Explore a procedurally generated hex world")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// YAML config file with seed, world, agent and key settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Generate the starting grid and print it as a map
    Generate {
        /// World seed
        #[arg(short, long)]
        seed: Option<String>,
        /// Grid radius around the origin
        #[arg(short, long)]
        radius: Option<i32>,
        /// Print the summary as JSON instead of a map
        #[arg(long)]
        json: bool,
    },
    /// Walk the agent along a path of keys or direction names
    Walk {
        /// World seed
        #[arg(short, long)]
        seed: Option<String>,
        /// Moves, e.g. "eeddw" or "right,right,down-left"
        #[arg(short, long)]
        path: String,
        /// Radius of the map printed around the agent
        #[arg(long, default_value = "6")]
        view: i32,
    },
    /// Show the details of one tile
    Inspect {
        /// World seed
        #[arg(short, long)]
        seed: Option<String>,
        #[arg(short, long, allow_hyphen_values = true)]
        q: i32,
        #[arg(short, long, allow_hyphen_values = true)]
        r: i32,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = CliConfig::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Info => {
            println!("hexworld-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", hexworld_common::crate_info());
            println!("kernel: {}", hexworld_kernel::crate_info());
            println!("input: {}", hexworld_input::crate_info());
            println!("agent: {}", hexworld_agent::crate_info());
            println!("render: {}", hexworld_render::crate_info());
            println!("tools: {}", hexworld_tools::crate_info());
        }
        Commands::Generate { seed, radius, json } => {
            let seed = config.seed(seed);
            let radius = radius.unwrap_or(config.world.initial_radius);
            let mut world = WorldModel::with_config(&seed, &config.world);
            let created = world.initialize(radius);
            tracing::info!(seed = %seed, radius, tiles = created.len(), "world generated");

            let summary = WorldInspector::summary(&world);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                let view = RenderView {
                    center: AxialCoord::ORIGIN,
                    radius,
                    agent: None,
                };
                print!("{}", AsciiMapRenderer::new().render(&world, &view));
                println!("{summary}");
            }
        }
        Commands::Walk { seed, path, view } => {
            let seed = config.seed(seed);
            let mut world = WorldModel::with_config(&seed, &config.world);
            world.initialize(config.world.initial_radius);
            let mut agent = AgentController::with_config(config.agent.clone());
            let bindings = config.key_bindings();

            let (mut accepted, mut blocked) = (0usize, 0usize);
            for action in parse_path(&path, &bindings) {
                let action = match action {
                    Ok(action) => action,
                    Err(e) => {
                        tracing::warn!("skipping input: {e}");
                        continue;
                    }
                };
                match agent.apply(&mut world, action) {
                    Some(MoveOutcome::Started { pending, new_tiles }) => {
                        println!(
                            "move {} {} -> {} (+{} tiles)",
                            pending.direction(),
                            pending.from(),
                            pending.to(),
                            new_tiles.len()
                        );
                        // No animation to wait for: finish every move at once.
                        agent.complete(pending)?;
                        accepted += 1;
                    }
                    Some(MoveOutcome::Blocked { target, reason }) => {
                        println!("blocked at {target}: {reason:?}");
                        blocked += 1;
                    }
                    Some(MoveOutcome::Ignored) | None => {}
                }
            }

            let view = RenderView {
                center: agent.position(),
                radius: view,
                agent: Some(agent.position()),
            };
            print!("{}", AsciiMapRenderer::new().render(&world, &view));
            println!(
                "Walk: accepted={accepted} blocked={blocked} position={}",
                agent.position()
            );
            println!("{}", WorldInspector::summary(&world));
        }
        Commands::Inspect { seed, q, r, json } => {
            let seed = config.seed(seed);
            let mut world = WorldModel::with_config(&seed, &config.world);
            let coord = AxialCoord::new(q, r);
            // Generate just this tile; it is a pure function of the seed.
            world.expand(coord, 0);

            let Some(info) = WorldInspector::inspect_tile(&world, coord) else {
                anyhow::bail!("tile {coord} was not generated");
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{info}");
            }
        }
    }

    Ok(())
}
