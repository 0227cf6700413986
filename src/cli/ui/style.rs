use colored::Colorize;

use crate::domain::RecordKind;

/// Colours money-in green and money-out red unless `plain`.
pub fn paint_kind(text: String, kind: RecordKind, plain: bool) -> String {
    if plain {
        return text;
    }
    match kind {
        RecordKind::Credit => text.green().to_string(),
        RecordKind::Debit => text.red().to_string(),
    }
}

/// Colours a signed value by its sign; zero stays uncoloured.
pub fn paint_signed(text: String, value: i128, plain: bool) -> String {
    match value.signum() {
        1 => paint_kind(text, RecordKind::Credit, plain),
        -1 => paint_kind(text, RecordKind::Debit, plain),
        _ => text,
    }
}
