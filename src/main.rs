use crate::config::{Cli, Command, ServeArgs};
use crate::db::{init_db, Database};
use crate::router::handle;
use astra::Server;
use clap::Parser;
use std::net::SocketAddr;
use std::process::ExitCode;

mod cli;
mod config;
mod dashboard;
mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn init_logging() {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Debug)
    } else {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    };

    env_logger::Builder::new()
        .filter(None, global_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), my_code_level)
        .parse_default_env()
        .init();
}

fn main() -> ExitCode {
    init_logging();

    match Cli::parse().command {
        Command::Serve(args) => serve(args),
        client_command => cli::run(client_command),
    }
}

fn serve(args: ServeArgs) -> ExitCode {
    let db = Database::new(args.db.as_str());

    if let Err(e) = init_db(&db, &args.schema) {
        log::error!("Database initialization failed: {e}");
        return ExitCode::FAILURE;
    }

    let addr: SocketAddr = match args.addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            log::error!("Invalid listen address {:?}: {e}", args.addr);
            return ExitCode::FAILURE;
        }
    };
    log::info!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(args.workers);

    let result = server.serve(move |req: astra::Request, _info| {
        let method = req.method().clone();
        let path = req.uri().path().to_owned();

        match handle(req, &db) {
            Ok(resp) => {
                log::info!("{method} {path} -> {}", resp.status());
                resp
            }
            Err(err) => {
                log::warn!("{method} {path} -> {err}");
                templates::html_error_response(err)
            }
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
        return ExitCode::FAILURE;
    }

    log::info!("Server shut down cleanly.");
    ExitCode::SUCCESS
}
