//! Keyboard mapping for marker movement.

use kiepert_geometry::MarkerCommand;

/// Map a key to a marker command: `d`/`a` move along `u`, `w`/`s` along `v`.
/// Case-insensitive; anything else is not a marker key.
pub fn command_for_key(key: char) -> Option<MarkerCommand> {
    match key.to_ascii_lowercase() {
        'd' => Some(MarkerCommand::IncreaseU),
        'a' => Some(MarkerCommand::DecreaseU),
        'w' => Some(MarkerCommand::IncreaseV),
        's' => Some(MarkerCommand::DecreaseV),
        _ => None,
    }
}

/// Commands for a key sequence, skipping (and logging) non-marker keys.
pub fn parse_keys(keys: &str) -> Vec<MarkerCommand> {
    keys.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| {
            let command = command_for_key(c);
            if command.is_none() {
                log::debug!("ignoring key {:?}", c);
            }
            command
        })
        .collect()
}
