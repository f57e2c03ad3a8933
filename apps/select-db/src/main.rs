use clap::Parser;
use db_select::{ConnectionFactory, DbSelectError, MongoConnector, TargetSettings};
use mongodb::bson::doc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "select-db")]
#[command(about = "Connect to a local MongoDB database, defaulting to localhost:27017/test_1")]
struct Args {
    /// Server port; 0 or unset falls back to SELECT_DB_PORT, then 27017
    #[arg(short, long)]
    port: Option<u16>,

    /// Database name; empty or unset falls back to SELECT_DB_NAME, then test_1
    #[arg(short = 'd', long)]
    db_name: Option<String>,

    /// Print the resolved target without connecting
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    fn settings(&self) -> TargetSettings {
        TargetSettings {
            port: self.port.filter(|p| *p != 0),
            db_name: self.db_name.clone().filter(|name| !name.is_empty()),
        }
    }
}

fn resolve_settings(args: &Args) -> Result<TargetSettings, DbSelectError> {
    Ok(TargetSettings::from_env()?.merge(args.settings()))
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("select_db=info,db_select=info")),
        )
        .init();

    let args = Args::parse();

    let settings = match resolve_settings(&args) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let target = settings.target();

    if args.dry_run {
        println!("{target}");
        return;
    }

    let factory = ConnectionFactory::new(MongoConnector);
    let db = match factory
        .connect(settings.port, settings.db_name.as_deref())
        .await
    {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Connection failed: {target}: {e}");
            std::process::exit(1);
        }
    };

    // The driver is lazy; ping so an unreachable server is reported here.
    if let Err(e) = db.run_command(doc! { "ping": 1 }).await {
        eprintln!("Connection failed: {target}: {e}");
        std::process::exit(1);
    }

    info!(connection = %target, "connected");
    println!("connected to {target}");
}
