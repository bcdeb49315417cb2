//! Purpose: `casper-client-ffi` CLI entry point over the typed node client.
//! Role: Binary crate root; parses args, runs one query, emits JSON on stdout.
//! Invariants: Successful responses are printed as pretty JSON on stdout.
//! Invariants: Non-interactive errors are emitted as JSON on stderr.
//! Invariants: Process exit code is derived from `api::to_exit_code`.
use std::io::{self, IsTerminal};
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand, error::ErrorKind as ClapErrorKind};
use serde::Serialize;
use serde_json::{Value, json};

use casper_client::api::{
    ClientConfig, Error, ErrorKind, GlobalStateQuery, NodeClient, to_exit_code,
};
use casper_client::logging::init_tracing;

#[derive(Parser)]
#[command(
    name = "casper-client-ffi",
    version,
    about = "Query a Casper node over JSON-RPC",
    after_help = r#"EXAMPLES
  $ casper-client-ffi get-auction-info -n http://localhost:7777
  $ casper-client-ffi get-block -n http://localhost:7777 -b 1024 --id 7 -v
  $ casper-client-ffi query-global-state -b 1024 -k account-hash-<HEX> -q counter/count

ENVIRONMENT
  CASPER_CLIENT_TIMEOUT_MS   request timeout in milliseconds (default 30000)
  RUST_LOG                   log filter for stderr diagnostics (default info)"#,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Retrieve the bids and validators as of the most recently added block
    GetAuctionInfo(CommonArgs),
    /// Retrieve a block by hash or height (latest block when omitted)
    GetBlock {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(
            short = 'b',
            long,
            value_name = "HEX STRING OR INTEGER",
            default_value = "",
            help = "Hex-encoded block hash or height of the block"
        )]
        block_identifier: String,
    },
    /// Retrieve the chainspec of the network (hex-encoded files)
    GetChainspec(CommonArgs),
    /// Retrieve a stored value from the network's global state
    QueryGlobalState {
        #[command(flatten)]
        common: CommonArgs,
        #[arg(
            short = 'b',
            long,
            value_name = "HEX STRING OR INTEGER",
            default_value = "",
            conflicts_with = "state_root_hash",
            help = "Hex-encoded block hash or height to query at"
        )]
        block_identifier: String,
        #[arg(
            short = 's',
            long,
            value_name = "HEX STRING",
            default_value = "",
            help = "Hex-encoded state root hash to query at"
        )]
        state_root_hash: String,
        #[arg(
            short = 'k',
            long,
            value_name = "FORMATTED STRING",
            help = "Key to start from, e.g. account-hash-<HEX>, hash-<HEX> or uref-<HEX>-007"
        )]
        key: String,
        #[arg(
            short = 'q',
            long,
            value_name = "PATH/TO/VALUE",
            default_value = "",
            help = "Named keys to follow from the key, separated by '/'"
        )]
        query_path: String,
    },
}

#[derive(Args)]
struct CommonArgs {
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Print the RPC request; repeat (-vv) to show long strings in full"
    )]
    verbose: u8,
    #[arg(
        short = 'n',
        long,
        value_name = "URL",
        default_value = "http://localhost:7777",
        help = "Address of the node's HTTP service"
    )]
    node_address: String,
    #[arg(
        long = "id",
        value_name = "STRING OR INTEGER",
        default_value = "",
        help = "JSON-RPC identifier; a random integer is used when omitted"
    )]
    rpc_id: String,
    #[arg(long, value_name = "MS", help = "Request timeout in milliseconds")]
    timeout_ms: Option<u64>,
}

impl CommonArgs {
    fn client(&self) -> Result<NodeClient, Error> {
        let mut config = ClientConfig::from_env()?;
        if let Some(millis) = self.timeout_ms {
            if millis == 0 {
                return Err(Error::new(ErrorKind::Usage).with_message("--timeout-ms must be > 0"));
            }
            config = config.with_timeout(Duration::from_millis(millis));
        }
        Ok(NodeClient::new(&config))
    }
}

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            emit_error(&err);
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<i32, Error> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp
            | ClapErrorKind::DisplayVersion
            | ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                err.print().map_err(|io_err| {
                    Error::new(ErrorKind::Internal)
                        .with_message("failed to write help")
                        .with_source(io_err)
                })?;
                let code = if matches!(
                    err.kind(),
                    ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                ) {
                    2
                } else {
                    0
                };
                return Ok(code);
            }
            _ => {
                return Err(Error::new(ErrorKind::Usage).with_message(clap_error_summary(&err)));
            }
        },
    };

    match cli.command {
        Command::GetAuctionInfo(args) => {
            let response = args.client()?.get_auction_info(
                &args.rpc_id,
                &args.node_address,
                u64::from(args.verbose),
            )?;
            emit_json(&response)?;
        }
        Command::GetBlock {
            common,
            block_identifier,
        } => {
            let response = common.client()?.get_block(
                &common.rpc_id,
                &common.node_address,
                u64::from(common.verbose),
                &block_identifier,
            )?;
            emit_json(&response)?;
        }
        Command::GetChainspec(args) => {
            let response = args.client()?.get_chainspec(
                &args.rpc_id,
                &args.node_address,
                u64::from(args.verbose),
            )?;
            emit_json(&response)?;
        }
        Command::QueryGlobalState {
            common,
            block_identifier,
            state_root_hash,
            key,
            query_path,
        } => {
            let query =
                GlobalStateQuery::parse(&block_identifier, &state_root_hash, &key, &query_path)?;
            let response = common.client()?.query_global_state(
                &common.rpc_id,
                &common.node_address,
                u64::from(common.verbose),
                &query,
            )?;
            emit_json(&response)?;
        }
    }
    Ok(0)
}

fn emit_json<T: Serialize>(value: &T) -> Result<(), Error> {
    let text = serde_json::to_string_pretty(value).map_err(|err| {
        Error::new(ErrorKind::Internal)
            .with_message("failed to encode output json")
            .with_source(err)
    })?;
    println!("{text}");
    Ok(())
}

fn emit_error(err: &Error) {
    if io::stderr().is_terminal() {
        eprintln!("error: {}", err.detail());
        return;
    }
    let json = serde_json::to_string(&error_json(err)).unwrap_or_else(|_| {
        "{\"error\":{\"kind\":\"Internal\",\"message\":\"json encode failed\"}}".to_string()
    });
    eprintln!("{json}");
}

fn error_json(err: &Error) -> Value {
    let mut inner = json!({
        "kind": format!("{:?}", err.kind()),
        "message": err.detail(),
    });
    if let Some(code) = err.rpc_code() {
        inner["rpc_code"] = json!(code);
    }
    json!({ "error": inner })
}

fn clap_error_summary(err: &clap::Error) -> String {
    for line in err.to_string().lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("error:") {
            return rest.trim().to_string();
        }
        return trimmed.to_string();
    }
    "invalid arguments".to_string()
}
