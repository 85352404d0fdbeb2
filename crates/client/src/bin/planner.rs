use chrono::Utc;
use clap::{Parser, Subcommand};
use client::{
    GatewayResult, HttpGateway, LayoutGateway,
    http::DEFAULT_API_BASE,
    report::render_summary,
    session::{boot, load_layout, save_layout},
    util::{DEFAULT_OUTPUT_DIR, write_export},
};
use log::error;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Work with curriculum planning boards stored on a planner server
#[derive(Parser)]
#[command(name = "planner")]
#[command(version, about, long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = "PLANNER_API_BASE", default_value = DEFAULT_API_BASE, global = true)]
    api: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the board to ctisplanner-<millis>.json
    Export {
        /// Saved layout to export instead of the latest autosave
        #[arg(long, value_name = "ID")]
        layout: Option<Uuid>,

        /// Output directory
        #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
        out: PathBuf,
    },

    /// Save the current board under a name
    Save {
        #[arg(long)]
        name: String,

        /// Who is saving; blank means "Anonymous"
        #[arg(long = "by", default_value = "")]
        saved_by: String,
    },

    /// Print credit totals, course counts, slot fill and professor loads
    Summary {
        /// Saved layout to summarize instead of the latest autosave
        #[arg(long, value_name = "ID")]
        layout: Option<Uuid>,
    },

    /// List saved layouts, newest first
    List,

    /// Delete a saved layout
    Delete { id: Uuid },
}

async fn run(cli: Cli) -> GatewayResult<()> {
    let gateway = HttpGateway::new(cli.api);

    match cli.command {
        Commands::Export { layout, out } => {
            let mut state = boot(&gateway).await?;
            if let Some(id) = layout {
                load_layout(&gateway, &mut state, id).await?;
            }

            let path = write_export(&out, &state, Utc::now().timestamp_millis())?;
            println!("{}", path.display());
        }
        Commands::Summary { layout } => {
            let mut state = boot(&gateway).await?;
            if let Some(id) = layout {
                load_layout(&gateway, &mut state, id).await?;
            }
            print!("{}", render_summary(&state));
        }
        Commands::Save { name, saved_by } => {
            let state = Arc::new(Mutex::new(boot(&gateway).await?));
            let summary = save_layout(&gateway, &state, &name, &saved_by).await?;
            println!("{}", summary.id);
        }
        Commands::List => {
            for layout in gateway.list_layouts().await? {
                println!(
                    "{}  {}  {} - {}",
                    layout.id,
                    layout.saved_at.format("%Y-%m-%d %H:%M"),
                    layout.saved_by,
                    layout.name
                );
            }
        }
        Commands::Delete { id } => {
            gateway.delete_layout(id).await?;
            println!("Deleted {id}");
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run(Cli::parse()).await {
        error!("{e}");
        std::process::exit(1);
    }
}
