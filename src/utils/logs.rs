use std::str::FromStr;
use tracing::Level;

pub const DEFAULT_LEVEL: Level = Level::WARN;

// parses a level name, falling back to the default for anything unrecognized
pub fn parse_level(name: &str) -> Level {
    Level::from_str(name.trim()).unwrap_or(DEFAULT_LEVEL)
}

pub fn setup_tracing(level: Level, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // stdout belongs to the menu.
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
