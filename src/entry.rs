use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{ArgMatches, CommandFactory, FromArgMatches};

use botsim::args::{DEFAULT_CONFIG_FILES, SimulatorArgs};
use botsim::config::{apply_config, load_config};
use botsim::dispatch::{
    DispatchPlan, Dispatcher, ReqwestTransport, SelectionSource, TransportOptions,
};
use botsim::error::{AppError, AppResult, ValidationError};
use botsim::profiles::{BotCategory, BotProfile, ProfilePool};
use botsim::report::{RunSummary, print_outcomes, print_summary, write_json};
use botsim::shutdown::shutdown_channel;

use crate::shutdown_handlers::setup_signal_shutdown_handler;

/// Upper bound on establishing a connection; the request timeout still caps it.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
/// User-Agents shown per category by `--list-categories`.
const LISTED_SAMPLES: usize = 2;

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = match parse_args()? {
        Some(parsed) => parsed,
        None => return Ok(()),
    };

    let applied = apply_file_config(&mut args, &matches)?;

    crate::logger::init_logging(args.verbose);
    if let Some(path) = applied.path.as_deref() {
        tracing::debug!("Using config file {}", path.display());
    }

    if args.list_categories {
        print_categories();
        return Ok(());
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args, applied.extra_profiles))
}

fn parse_args() -> AppResult<Option<(SimulatorArgs, ArgMatches)>> {
    let mut cmd = SimulatorArgs::command();
    let raw_args: Vec<OsString> = std::env::args_os().collect();

    if should_show_help(&raw_args) {
        cmd.print_help()?;
        println!();
        return Ok(None);
    }

    let matches = cmd.get_matches_from(raw_args);
    let args = SimulatorArgs::from_arg_matches(&matches)?;

    Ok(Some((args, matches)))
}

fn should_show_help(raw_args: &[OsString]) -> bool {
    let treat_as_empty =
        matches!(raw_args, [] | [_]) || matches!(raw_args, [_, second] if second == "--");
    if !treat_as_empty {
        return false;
    }

    !has_default_config()
}

fn has_default_config() -> bool {
    DEFAULT_CONFIG_FILES
        .iter()
        .any(|path| Path::new(path).exists())
}

/// What the config file contributed beyond CLI defaults.
#[derive(Default)]
struct AppliedConfig {
    path: Option<PathBuf>,
    extra_profiles: Vec<BotProfile>,
}

/// Merges the config file (if any) under the CLI flags.
fn apply_file_config(args: &mut SimulatorArgs, matches: &ArgMatches) -> AppResult<AppliedConfig> {
    let Some(config) = load_config(args.config.as_deref())? else {
        return Ok(AppliedConfig::default());
    };
    apply_config(args, matches, &config)?;
    Ok(AppliedConfig {
        extra_profiles: config.extra_profiles(),
        path: config.source,
    })
}

async fn run_async(args: &SimulatorArgs, extra_profiles: Vec<BotProfile>) -> AppResult<()> {
    let Some(target_url) = args.url.clone() else {
        tracing::error!("Missing URL (set --url or provide in config).");
        return Err(AppError::validation(ValidationError::MissingUrl));
    };

    let pool = ProfilePool::from_categories(&args.categories)
        .with_extra(extra_profiles, &args.categories);
    let plan = DispatchPlan {
        target_url,
        count: args.count,
        concurrency: args.concurrency.get(),
        delay: args.delay,
        request_timeout: args.request_timeout,
    };

    print_banner(&plan, &args.categories);

    let transport = ReqwestTransport::new(&TransportOptions {
        concurrency: plan.concurrency,
        request_timeout: plan.request_timeout,
        connect_timeout: CONNECT_TIMEOUT,
        insecure: args.insecure,
    })?;
    let dispatcher = Dispatcher::new(transport);

    let (shutdown_tx, shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);
    let result = dispatcher
        .run_until_shutdown(
            &plan,
            &pool,
            SelectionSource::from_seed(args.seed),
            shutdown_rx,
        )
        .await;
    signal_handle.abort();
    let outcomes = result?;

    if args.verbose {
        print_outcomes(&outcomes);
    }
    print_summary(&RunSummary::from_outcomes(&outcomes));

    if let Some(path) = args.output.as_deref() {
        write_json(Path::new(path), &outcomes).await?;
        println!("Results saved to {}", path);
    }

    Ok(())
}

fn print_banner(plan: &DispatchPlan, categories: &[BotCategory]) {
    let names: Vec<&str> = categories.iter().map(|category| category.as_str()).collect();
    println!("Starting bot simulation against {}", plan.target_url);
    println!("Requests: {}", plan.count);
    println!("Categories: {}", names.join(", "));
    println!("Concurrency: {}", plan.concurrency);
    println!("Delay: {:.2}s", plan.delay.as_secs_f32());
    println!();
}

fn print_categories() {
    println!("Available bot categories:");
    for category in BotCategory::ALL {
        let user_agents = category.user_agents();
        println!("  {} ({} User-Agents)", category, user_agents.len());
        for user_agent in user_agents.iter().take(LISTED_SAMPLES) {
            let shown = if user_agent.is_empty() {
                "(no User-Agent header)".to_owned()
            } else {
                botsim::profiles::display_user_agent(user_agent)
            };
            println!("    - {}", shown);
        }
    }
}
