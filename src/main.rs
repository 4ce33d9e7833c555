use anyhow::Result;
use zonemap::cli::Commands;
use zonemap::commands::{self, NewConfig, ScoreConfig};
use zonemap::config::load_config;

fn main() -> Result<()> {
    let cli = zonemap::cli::parse_args();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Init { force } => commands::init_config(force),
        Commands::Templates => commands::list_templates(&mut std::io::stdout()),
        Commands::New {
            path,
            template,
            force,
        } => commands::create_session(NewConfig {
            path,
            template,
            force,
        }),
        Commands::Score {
            session,
            format,
            output,
            config,
            normalize,
            compare,
            zone,
            plain,
        } => commands::score_session(ScoreConfig {
            session,
            format,
            output,
            config,
            normalize,
            compare,
            zone,
            plain,
        }),
        Commands::Classify { hot, crazy } => {
            commands::classify_point(hot, crazy, &mut std::io::stdout()).map(|_| ())
        }
        Commands::Normalize { session, output } => {
            commands::normalize_document(&session, output.as_deref(), &load_config())
        }
    }
}

/// `-v` raises the default level from warn; `RUST_LOG` takes precedence
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

