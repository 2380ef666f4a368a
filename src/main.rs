//! CDP node RPC URL resolver
//!
//! Prints the authenticated node RPC URL for the configured network, or for
//! the network given as the first argument (e.g. `cdp-rpc-url base-sepolia`).

use std::process::ExitCode;

use cdp_sdk::{
	init_tracing, load_config, log_service_info, log_service_shutdown, CdpClientBuilder, NetworkId,
};
use tracing::error;

const SERVICE_NAME: &str = "cdp-rpc-url";

#[tokio::main]
async fn main() -> ExitCode {
	let settings = match load_config() {
		Ok(settings) => settings,
		Err(e) => {
			eprintln!("Failed to load configuration: {}", e);
			return ExitCode::FAILURE;
		},
	};

	if let Err(e) = init_tracing(&settings) {
		eprintln!("{}", e);
	}
	log_service_info(SERVICE_NAME, &settings);

	let network = match std::env::args().nth(1) {
		Some(arg) => match arg.parse::<NetworkId>() {
			Ok(network) => network,
			Err(e) => {
				error!("{}", e);
				return ExitCode::FAILURE;
			},
		},
		None => settings.rpc.network,
	};

	let client = match CdpClientBuilder::new().with_settings(settings).build() {
		Ok(client) => client,
		Err(e) => {
			error!("Failed to build client: {}", e);
			return ExitCode::FAILURE;
		},
	};

	let code = match client.try_get_base_node_rpc_url(network).await {
		Ok(url) => {
			println!("{}", url);
			ExitCode::SUCCESS
		},
		Err(e) => {
			error!(network = %network, "Failed to resolve node RPC URL: {}", e);
			ExitCode::FAILURE
		},
	};

	log_service_shutdown(SERVICE_NAME);
	code
}
