//! Helpers for log output.

/// Leading slice of `text` holding at most `max_chars` characters.
///
/// Used for log previews of user messages, search queries and agent replies,
/// which are mostly Spanish and carry multi-byte letters (`ñ`, `é`, `ó`).
/// Counting characters keeps every cut on a valid boundary.
pub fn log_preview(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_keeps_short_text() {
        assert_eq!(log_preview("Renovación de Cédula", 100), "Renovación de Cédula");
        assert_eq!(log_preview("", 10), "");
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        // "Renovación" is 10 characters but 11 bytes
        assert_eq!(log_preview("Renovación de Cédula", 10), "Renovación");
        assert_eq!(log_preview("Renovación de Cédula", 8), "Renovac");
    }

    #[test]
    fn preview_never_splits_enie() {
        assert_eq!(log_preview("año", 2), "añ");
        assert_eq!(log_preview("ñ", 1), "ñ");
        assert_eq!(log_preview("ñandú", 0), "");
    }
}
