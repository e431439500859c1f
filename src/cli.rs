// src/cli.rs

//! Terminal host for the dashboard client.

use crate::config::{ClientArgs, Command};
use crate::dashboard::terminal::render_event;
use crate::dashboard::{
    ClientError, Dashboard, DashboardEvent, HttpPropertyApi, SubmitOutcome,
};
use crate::domain::NewProperty;
use std::cell::RefCell;
use std::path::Path;
use std::process::ExitCode;
use std::rc::Rc;

/// Runs one client command against the backend and prints what the dashboard emits.
pub fn run(command: Command) -> ExitCode {
    match run_command(command) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn connect(
    client: &ClientArgs,
) -> Result<(Dashboard<HttpPropertyApi>, Rc<RefCell<Option<String>>>), ClientError> {
    let api = HttpPropertyApi::new(&client.server)?;
    let navigation = Rc::new(RefCell::new(None));
    let nav_sink = Rc::clone(&navigation);

    let dashboard = Dashboard::builder(api)
        .on_event(|event| {
            if let Some(text) = render_event(event) {
                println!("{text}");
            }
        })
        .on_event(move |event| {
            if let DashboardEvent::Navigate(url) = event {
                *nav_sink.borrow_mut() = Some(url.clone());
            }
        })
        .build();

    Ok((dashboard, navigation))
}

fn run_command(command: Command) -> Result<bool, ClientError> {
    match command {
        Command::Serve(_) => {
            log::error!("serve is not a client command");
            Ok(false)
        }
        Command::List(client) => {
            let (mut dashboard, _) = connect(&client)?;
            Ok(dashboard.load_properties())
        }
        Command::Add {
            client,
            zpid,
            address,
            price,
            bedrooms,
            bathrooms,
            sqft,
        } => {
            let (mut dashboard, _) = connect(&client)?;
            dashboard.open_add_form();
            let outcome = dashboard.submit_new_property(NewProperty {
                zpid,
                address,
                price,
                bedrooms,
                bathrooms,
                sqft,
            });
            Ok(outcome == SubmitOutcome::Accepted)
        }
        Command::Update {
            client,
            zpid,
            price,
        } => {
            let (mut dashboard, _) = connect(&client)?;
            Ok(dashboard.submit_price_update(&zpid, &price) == SubmitOutcome::Accepted)
        }
        Command::History { client, zpid } => {
            let (mut dashboard, _) = connect(&client)?;
            if !dashboard.load_properties() {
                return Ok(false);
            }
            if !dashboard.show_price_history(&zpid) {
                println!("No price history for {zpid}");
            }
            Ok(true)
        }
        Command::Export { client, out } => {
            let (mut dashboard, navigation) = connect(&client)?;
            dashboard.export_data();

            let Some(url) = navigation.borrow_mut().take() else {
                return Ok(false);
            };
            let bytes = dashboard.api().download(&url)?;
            save(&out, &bytes)?;
            println!("Exported {} bytes to {}", bytes.len(), out.display());
            Ok(true)
        }
    }
}

fn save(path: &Path, bytes: &[u8]) -> Result<(), ClientError> {
    std::fs::write(path, bytes)
        .map_err(|e| ClientError::Io(format!("Failed to write {}: {e}", path.display())))
}
