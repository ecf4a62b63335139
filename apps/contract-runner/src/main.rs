mod constants;

use std::net::{Ipv4Addr, SocketAddr};
use std::process;

use anyhow::{bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use reqres_contract::{ContractConfig, ContractSuite, Scenario};

use crate::constants::{DEFAULT_STUB_PORT, ENV, LOCAL_ENV, SERVICE};

fn cli() -> Command {
    Command::new(SERVICE)
        .about("Contract checks for the reqres.in user API")
        .subcommand_required(true)
        .subcommand(
            Command::new("run")
                .about("Run scenarios sequentially and exit non-zero on any failure")
                .arg(
                    Arg::new("base-url")
                        .long("base-url")
                        .value_name("URL")
                        .conflicts_with("stub")
                        .help("Target service (defaults to REQRES_BASE_URL or https://reqres.in)"),
                )
                .arg(
                    Arg::new("stub")
                        .long("stub")
                        .action(ArgAction::SetTrue)
                        .help("Run against an embedded stub instead of a remote service"),
                )
                .arg(
                    Arg::new("scenario")
                        .long("scenario")
                        .value_name("NAME")
                        .action(ArgAction::Append)
                        .help("Scenario to run, repeatable (default: all)"),
                ),
        )
        .subcommand(Command::new("list").about("List scenario names"))
        .subcommand(
            Command::new("serve-stub")
                .about("Serve the stub until interrupted")
                .arg(
                    Arg::new("port")
                        .long("port")
                        .value_parser(clap::value_parser!(u16))
                        .help(format!("Port to listen on (default: {DEFAULT_STUB_PORT})")),
                ),
        )
}

#[tokio::main]
async fn main() {
    match run().await {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Fatal error: {:#}", e);
            process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true);

    if std::env::var(ENV).map(|v| v == LOCAL_ENV).unwrap_or(false) {
        let pretty_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .pretty();
        registry.with(json_layer).with(pretty_layer).init();
    } else {
        registry.with(json_layer).init();
    }
}

/// `Ok(false)` when at least one scenario failed.
async fn run() -> anyhow::Result<bool> {
    let matches = cli().get_matches();

    init_tracing();
    tracing::info!(service = SERVICE, "tracing initialized");

    match matches.subcommand() {
        Some(("run", args)) => run_scenarios(args).await,
        Some(("list", _)) => {
            for scenario in Scenario::ALL {
                let kind = if scenario.is_negative() { "negative" } else { "positive" };
                println!("{:<36} {}", scenario.name(), kind);
            }
            Ok(true)
        }
        Some(("serve-stub", args)) => {
            let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, stub_port(args)));
            reqres_stub::serve(addr)
                .await
                .with_context(|| format!("failed to serve stub on {}", addr))?;
            Ok(true)
        }
        Some((other, _)) => bail!("unknown subcommand `{}`", other),
        None => bail!("a subcommand is required"),
    }
}

fn stub_port(args: &ArgMatches) -> u16 {
    args.get_one::<u16>("port")
        .copied()
        .unwrap_or(DEFAULT_STUB_PORT)
}

fn selected_scenarios(args: &ArgMatches) -> anyhow::Result<Vec<Scenario>> {
    match args.get_many::<String>("scenario") {
        Some(names) => names
            .map(|name| name.parse::<Scenario>().map_err(anyhow::Error::from))
            .collect(),
        None => Ok(Scenario::ALL.to_vec()),
    }
}

async fn run_scenarios(args: &ArgMatches) -> anyhow::Result<bool> {
    let scenarios = selected_scenarios(args)?;
    let mut config = ContractConfig::from_env();

    let stub = if args.get_flag("stub") {
        let stub = reqres_stub::spawn_local()
            .await
            .context("failed to start embedded stub")?;
        config = config.with_base_url(stub.base_url());
        Some(stub)
    } else {
        if let Some(base_url) = args.get_one::<String>("base-url") {
            config = config.with_base_url(base_url.clone());
        }
        None
    };

    tracing::info!(
        base_url = %config.base_url,
        scenarios = scenarios.len(),
        log_detail = %config.log_detail,
        "running contract scenarios"
    );

    let mut suite = ContractSuite::new(config).context("failed to build contract suite")?;
    let mut failed = 0usize;

    for scenario in &scenarios {
        let report = suite.run(*scenario).await;
        let elapsed_ms = report.elapsed.as_millis() as u64;
        match &report.outcome {
            Ok(()) => {
                tracing::info!(scenario = %scenario, elapsed_ms, "scenario passed");
            }
            Err(e) => {
                failed += 1;
                tracing::error!(scenario = %scenario, elapsed_ms, error = %e, "scenario failed");
            }
        }
    }

    if let Some(stub) = stub {
        stub.stop().await;
    }

    tracing::info!(
        passed = scenarios.len() - failed,
        failed,
        "contract run finished"
    );

    Ok(failed == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        cli().debug_assert();
    }

    #[test]
    fn scenarios_default_to_full_catalogue() {
        let matches = cli().get_matches_from(["contract-runner", "run", "--stub"]);
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(selected_scenarios(args).unwrap(), Scenario::ALL.to_vec());
    }

    #[test]
    fn repeated_scenario_flags_select_in_order() {
        let matches = cli().get_matches_from([
            "contract-runner",
            "run",
            "--scenario",
            "register",
            "--scenario",
            "delete-missing-user",
        ]);
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(
            selected_scenarios(args).unwrap(),
            vec![Scenario::Register, Scenario::DeleteMissingUser]
        );
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let matches = cli().get_matches_from(["contract-runner", "run", "--scenario", "nope"]);
        let (_, args) = matches.subcommand().unwrap();
        assert!(selected_scenarios(args).is_err());
    }

    #[test]
    fn stub_port_defaults_and_overrides() {
        let matches = cli().get_matches_from(["contract-runner", "serve-stub"]);
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(stub_port(args), DEFAULT_STUB_PORT);

        let matches = cli().get_matches_from(["contract-runner", "serve-stub", "--port", "4010"]);
        let (_, args) = matches.subcommand().unwrap();
        assert_eq!(stub_port(args), 4010);
    }

    #[test]
    fn base_url_conflicts_with_stub() {
        let result = cli().try_get_matches_from([
            "contract-runner",
            "run",
            "--stub",
            "--base-url",
            "http://localhost:1",
        ]);
        assert!(result.is_err());
    }
}
