use std::fmt::Write as _;

use savepatcher_core::Character;
use serde_json::{Map as JsonMap, Value as JsonValue};

/// One line per active slot, in slot index order. Inactive slots are
/// omitted, matching the in-game slot picker.
pub fn render_slot_lines(characters: &[Character]) -> String {
    let mut out = String::new();
    for character in characters {
        if !character.active {
            continue;
        }
        writeln!(
            &mut out,
            "  slot {}: {}, level {}, played for {}",
            character.slot_index,
            character.name,
            character.level,
            format_play_time(character.seconds_played)
        )
        .expect("writing to String cannot fail");
    }
    if out.is_empty() {
        out.push_str("  no active slots\n");
    }
    out
}

pub fn render_slots_json(characters: &[Character]) -> JsonValue {
    JsonValue::Array(characters.iter().map(character_to_json).collect())
}

fn character_to_json(character: &Character) -> JsonValue {
    let mut m = JsonMap::new();
    m.insert("slot".to_string(), JsonValue::from(character.slot_index));
    m.insert(
        "name".to_string(),
        JsonValue::String(character.name.clone()),
    );
    m.insert("level".to_string(), JsonValue::from(character.level));
    m.insert(
        "seconds_played".to_string(),
        JsonValue::from(character.seconds_played),
    );
    m.insert(
        "play_time".to_string(),
        JsonValue::String(format_play_time(character.seconds_played)),
    );
    m.insert("active".to_string(), JsonValue::Bool(character.active));
    JsonValue::Object(m)
}

pub fn format_play_time(seconds: u32) -> String {
    let hours = seconds / 3_600;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;
    if hours > 0 {
        format!("{hours}h {minutes:02}m")
    } else if minutes > 0 {
        format!("{minutes}m {secs:02}s")
    } else {
        format!("{secs}s")
    }
}
