use clap::Parser;
use action_icons::cli::commands::{cmd_expand, cmd_key, cmd_resolve};
use action_icons::cli::config::{
    Cli, Commands, build_data_source, load_config, resolve_lang_prefix, resolve_source,
};
use action_icons::resolve::resolver::ActionResolver;
use action_icons::trace::logger::TraceLogger;
use tracing_subscriber::EnvFilter;

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref());

    if let Commands::Key { id } = &cli.command {
        println!("{}", cmd_key(id)?);
        return Ok(());
    }

    let source = resolve_source(&cli, &config);
    let resolver = ActionResolver::new(build_data_source(&source)?);

    match cli.command {
        Commands::Resolve { ids, viewer, lang } => {
            let tracer = match cli.trace.as_deref() {
                Some(path) => TraceLogger::new(path),
                None => TraceLogger::disabled(),
            };
            let viewer = viewer.or(config.display.viewer_index);
            let lang_prefix = resolve_lang_prefix(lang.as_deref(), &config);

            let all_resolved =
                cmd_resolve(&ids, viewer, &lang_prefix, resolver, &tracer).await?;
            if !all_resolved {
                std::process::exit(1);
            }
        }
        Commands::Expand { input } => {
            cmd_expand(input.as_deref(), resolver).await?;
        }
        Commands::Key { .. } => {}
    }

    Ok(())
}
