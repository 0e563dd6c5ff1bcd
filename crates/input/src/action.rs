use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use hexworld_common::HexDirection;

/// A high-level action produced by the input layer.
///
/// The agent controller consumes actions, never raw key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Step the agent one hex in the given direction.
    Move(HexDirection),
    /// No-op (used for input that is not bound to anything).
    Noop,
}

/// Errors from mapping textual input to actions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown direction {0:?}")]
    UnknownDirection(String),
}

/// Mapping from keyboard characters to hex directions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyBindings {
    keys: BTreeMap<char, HexDirection>,
}

impl Default for KeyBindings {
    /// `q w e` on the top row, `a s d` below, arranged around the hex.
    fn default() -> Self {
        let keys = [
            ('q', HexDirection::UpLeft),
            ('w', HexDirection::UpRight),
            ('e', HexDirection::Right),
            ('d', HexDirection::DownRight),
            ('s', HexDirection::DownLeft),
            ('a', HexDirection::Left),
        ]
        .into_iter()
        .collect();
        Self { keys }
    }
}

impl KeyBindings {
    pub fn direction_for_key(&self, key: char) -> Option<HexDirection> {
        self.keys.get(&key.to_ascii_lowercase()).copied()
    }

    /// Translate a key press. Unbound keys map to [`Action::Noop`].
    pub fn action_for_key(&self, key: char) -> Action {
        match self.direction_for_key(key) {
            Some(direction) => Action::Move(direction),
            None => {
                tracing::trace!(%key, "unbound key");
                Action::Noop
            }
        }
    }

    /// Rebind `key`, returning the direction it was bound to before.
    pub fn bind(&mut self, key: char, direction: HexDirection) -> Option<HexDirection> {
        self.keys.insert(key.to_ascii_lowercase(), direction)
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, HexDirection)> + '_ {
        self.keys.iter().map(|(k, d)| (*k, *d))
    }
}

/// Parse a direction name such as `"down-left"` (also `down_left`, `downleft`).
pub fn parse_direction(token: &str) -> Result<HexDirection, InputError> {
    let normalized: String = token
        .trim()
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .map(|c| c.to_ascii_lowercase())
        .collect();
    HexDirection::ALL
        .into_iter()
        .find(|d| d.name().replace('-', "") == normalized)
        .ok_or_else(|| InputError::UnknownDirection(token.to_owned()))
}

/// Parse a scripted path into actions.
///
/// The path is split on whitespace and commas. A token that names a direction
/// is one move; any other token is read as a run of bound keys, one move per
/// character. Every unrecognized key yields its own error so the caller can
/// report it and carry on with the rest of the path.
pub fn parse_path(path: &str, bindings: &KeyBindings) -> Vec<Result<Action, InputError>> {
    let mut actions = Vec::new();
    for token in path
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
    {
        if let Ok(direction) = parse_direction(token) {
            actions.push(Ok(Action::Move(direction)));
            continue;
        }
        for key in token.chars() {
            actions.push(
                bindings
                    .direction_for_key(key)
                    .map(Action::Move)
                    .ok_or_else(|| InputError::UnknownDirection(key.to_string())),
            );
        }
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_bindings_cover_all_directions() {
        let bindings = KeyBindings::default();
        let bound: Vec<HexDirection> = bindings.iter().map(|(_, d)| d).collect();
        assert_eq!(bound.len(), 6);
        for d in HexDirection::ALL {
            assert!(bound.contains(&d));
        }
    }

    #[test]
    fn keys_are_case_insensitive() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for_key('E'), Action::Move(HexDirection::Right));
        assert_eq!(bindings.action_for_key('e'), Action::Move(HexDirection::Right));
    }

    #[test]
    fn unbound_key_is_noop() {
        let bindings = KeyBindings::default();
        assert_eq!(bindings.action_for_key('z'), Action::Noop);
    }

    #[test]
    fn rebinding_replaces_direction() {
        let mut bindings = KeyBindings::default();
        let old = bindings.bind('q', HexDirection::Left);
        assert_eq!(old, Some(HexDirection::UpLeft));
        assert_eq!(bindings.direction_for_key('q'), Some(HexDirection::Left));
    }

    #[test]
    fn parse_direction_accepts_spellings() {
        assert_eq!(parse_direction("down-left"), Ok(HexDirection::DownLeft));
        assert_eq!(parse_direction("Down_Left"), Ok(HexDirection::DownLeft));
        assert_eq!(parse_direction("upright"), Ok(HexDirection::UpRight));
        assert_eq!(
            parse_direction("north"),
            Err(InputError::UnknownDirection("north".into()))
        );
    }

    #[test]
    fn parse_path_mixes_keys_and_names() {
        let bindings = KeyBindings::default();
        let actions = parse_path("ed, left  q", &bindings);
        assert_eq!(
            actions,
            vec![
                Ok(Action::Move(HexDirection::Right)),
                Ok(Action::Move(HexDirection::DownRight)),
                Ok(Action::Move(HexDirection::Left)),
                Ok(Action::Move(HexDirection::UpLeft)),
            ]
        );
    }

    #[test]
    fn parse_path_reports_each_unknown_key() {
        let bindings = KeyBindings::default();
        let actions = parse_path("exw", &bindings);
        assert_eq!(actions.len(), 3);
        assert_eq!(actions[0], Ok(Action::Move(HexDirection::Right)));
        assert_eq!(actions[1], Err(InputError::UnknownDirection("x".into())));
        assert_eq!(actions[2], Ok(Action::Move(HexDirection::UpRight)));
    }

    #[test]
    fn parse_empty_path() {
        assert!(parse_path("  , ", &KeyBindings::default()).is_empty());
    }
}
