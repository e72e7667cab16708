//! Cordial replay entry point.

use std::error::Error;
use std::fs::File;
use std::io::{self, BufReader};
use std::sync::Arc;

use cordial_core::clock::SystemClock;
use cordial_core::session::SessionContext;
use cordial_hooks::EventManager;
use cordial_replay::{Config, Input, LogFormat, Replayer, TallyListener, TracingListener};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    // Read configuration from environment.
    let config = Config::from_env()?;

    // Initialize tracing subscriber.
    let subscriber = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    );
    match config.log_format {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }

    tracing::info!(
        input = ?config.input,
        strict = config.strict,
        shard = %config.shard,
        "Starting Cordial event replay"
    );

    let manager = EventManager::new();
    let tally = Arc::new(TallyListener::new());
    manager.register(Arc::new(TracingListener));
    manager.register(tally.clone());

    let session = Arc::new(SessionContext::new(config.shard));
    let replayer = Replayer::new(&manager, session, &SystemClock).strict(config.strict);
    let summary = match &config.input {
        Input::Stdin => replayer.run(io::stdin().lock())?,
        Input::File(path) => replayer.run(BufReader::new(File::open(path)?))?,
    };

    for (tag, count) in tally.snapshot() {
        tracing::info!(tag = %tag, count, "tally");
    }
    tracing::info!(
        lines = summary.lines,
        events = summary.events,
        decode_failures = summary.decode_failures,
        listener_failures = summary.listener_failures,
        out_of_order = summary.out_of_order,
        "Replay finished"
    );

    Ok(())
}
