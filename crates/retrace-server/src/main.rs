// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights
// reserved. SPDX-License-Identifier: Proprietary

//! retrace server binary.

use std::io::Read;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use retrace_server::{create_router, AppState};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod version;

/// retrace server - symbolicates minified JavaScript stack traces.
#[derive(Parser, Debug)]
#[command(
	name = "retrace-server",
	about = "JavaScript stack trace symbolication server",
	version
)]
struct Args {
	/// Optional config file; defaults to /etc/retrace/server.toml
	#[arg(long, env = "RETRACE_SERVER_CONFIG")]
	config: Option<PathBuf>,

	#[command(subcommand)]
	command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Show version and build information
	Version,
	/// Symbolicate one trace and print the JSON result
	Resolve {
		/// Read the trace from this file instead of stdin
		#[arg(long)]
		file: Option<PathBuf>,
	},
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	if let Some(Command::Version) = args.command {
		println!("{}", version::format_version_info());
		return Ok(());
	}

	dotenvy::dotenv().ok();

	let config = match &args.config {
		Some(path) => retrace_server_config::load_config_with_file(path)?,
		None => retrace_server_config::load_config()?,
	};

	// stdout is reserved for `resolve` output.
	tracing_subscriber::registry()
		.with(
			tracing_subscriber::EnvFilter::try_from_default_env()
				.unwrap_or_else(|_| config.logging.level.clone().into()),
		)
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let state = AppState::from_config(&config)?;

	if let Some(Command::Resolve { file }) = args.command {
		let raw = match file {
			Some(path) => std::fs::read_to_string(path)?,
			None => {
				let mut raw = String::new();
				std::io::stdin().read_to_string(&mut raw)?;
				raw
			}
		};
		let trace = state.symbolicate(&raw).await?;
		println!("{}", serde_json::to_string_pretty(&trace)?);
		return Ok(());
	}

	tracing::info!(
		host = %config.http.host,
		port = config.http.port,
		fetch_timeout_secs = config.fetch.timeout_secs,
		"starting retrace-server"
	);

	let app = create_router(state).layer(TraceLayer::new_for_http());

	let addr = config.socket_addr();
	tracing::info!("listening on {}", addr);

	let listener = tokio::net::TcpListener::bind(&addr).await?;

	tokio::select! {
		result = axum::serve(listener, app) => {
			if let Err(e) = result {
				tracing::error!(error = %e, "Server error");
			}
		}
		_ = tokio::signal::ctrl_c() => {
			tracing::info!("Received shutdown signal");
		}
	}

	tracing::info!("Server shutdown complete");
	Ok(())
}
