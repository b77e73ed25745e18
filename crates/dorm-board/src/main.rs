use anyhow::{anyhow, Context};
use clap::{value_parser, Arg, Command};
use dorm_board::{render_board, render_summary, suggested_transition, Dashboard, EditRequest};
use dorm_engine::{FloorSelector, Transition};
use dorm_store::{SheetsStore, StoreConfig};
use std::path::PathBuf;

fn floor_arg() -> Arg {
    Arg::new("floor")
        .required(true)
        .help("Floor-sheet title, e.g. A3 (building letter + floor)")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Command::new("dorm-board")
        .version(dorm_board::VERSION)
        .about("Dormitory room-occupancy board over a spreadsheet backing store")
        .arg(
            Arg::new("config")
                .long("config")
                .env("DORM_BOARD_CONFIG")
                .value_parser(value_parser!(PathBuf))
                .help("Path to the store config JSON"),
        )
        .subcommand(Command::new("floors").about("List available floor-sheets"))
        .subcommand(
            Command::new("show")
                .about("Render one floor's board and summary")
                .arg(floor_arg()),
        )
        .subcommand(
            Command::new("rooms")
                .about("List selectable rooms with their default action")
                .arg(floor_arg()),
        )
        .subcommand(
            Command::new("apply")
                .about("Apply one status change and write the sheet back")
                .arg(floor_arg())
                .arg(
                    Arg::new("room")
                        .long("room")
                        .required(true)
                        .help("Selected room number"),
                )
                .arg(
                    Arg::new("action")
                        .long("action")
                        .required(true)
                        .value_parser(value_parser!(Transition))
                        .help("checkout | leave | move | new | reset (or the sheet token)"),
                )
                .arg(
                    Arg::new("name")
                        .long("name")
                        .default_value("")
                        .help("Student name + number (new check-in, leave, move)"),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target room; required for --action move"),
                ),
        );

    let matches = cli.get_matches();

    let config_path = matches
        .get_one::<PathBuf>("config")
        .cloned()
        .ok_or_else(|| anyhow!("no config given: pass --config or set DORM_BOARD_CONFIG"))?;
    let config = StoreConfig::from_path(&config_path)
        .with_context(|| format!("loading store config from {}", config_path.display()))?;
    let dashboard = Dashboard::new(SheetsStore::new(config));

    match matches.subcommand() {
        Some(("floors", _)) => {
            for floor in dashboard.floors().await? {
                println!("{floor}");
            }
        }
        Some(("show", args)) => {
            let selector = FloorSelector::new(args.get_one::<String>("floor").unwrap().clone());
            let view = dashboard.view(&selector).await?;
            println!("{}", render_board(&view));
            println!("{}", render_summary(&view.summary));
        }
        Some(("rooms", args)) => {
            let selector = FloorSelector::new(args.get_one::<String>("floor").unwrap().clone());
            let view = dashboard.view(&selector).await?;
            for row in &view.rows {
                println!("{}  (default: {})", row.room, suggested_transition(row).alias());
            }
        }
        Some(("apply", args)) => {
            let selector = FloorSelector::new(args.get_one::<String>("floor").unwrap().clone());
            let request = EditRequest {
                room: args.get_one::<String>("room").unwrap().clone(),
                transition: *args.get_one::<Transition>("action").unwrap(),
                new_name: args.get_one::<String>("name").unwrap().clone(),
                target_room: args.get_one::<String>("to").cloned(),
            };
            let view = dashboard.apply(&selector, &request).await?;
            println!("{}", render_board(&view));
            println!("{}", render_summary(&view.summary));
        }
        _ => {
            return Err(anyhow!("no subcommand given; try 'dorm-board --help'"));
        }
    }

    Ok(())
}
