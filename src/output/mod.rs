// Output formatting: terminal display and JSON emission.

pub mod terminal;

use std::fmt::Display;

use anyhow::Result;
use serde::Serialize;

/// Clip a rendered clique or node id to `max_chars` characters, marking the
/// cut with "...".
///
/// Counts characters rather than bytes so string ids such as `"wörld"` are
/// never split mid-character.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render a member list as `(a, b, c)`.
pub fn format_members<E: Display>(members: &[E]) -> String {
    let joined: Vec<String> = members.iter().map(ToString::to_string).collect();
    format!("({})", joined.join(", "))
}

/// Print any serializable result as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 5), "héllo...");
        assert_eq!(truncate_chars("short", 10), "short");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn long_clique_rendering_is_clipped() {
        let rendered = format_members(&[100, 200, 300, 400]);
        assert_eq!(truncate_chars(&rendered, 9), "(100, 200...");
    }

    #[test]
    fn members_are_parenthesized() {
        assert_eq!(format_members(&[1, 2, 3]), "(1, 2, 3)");
        assert_eq!(format_members::<i32>(&[]), "()");
    }
}
