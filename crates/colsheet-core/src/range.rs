/// Convert a 1-based column number to its label (1 -> A, 26 -> Z, 27 -> AA)
///
/// Returns an empty string for 0.
pub fn col_to_label(number: u32) -> String {
    let mut label = String::new();
    let mut n = number;

    while n > 0 {
        n -= 1;
        label.insert(0, char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }

    label
}

/// Convert a column label (A, B, ..., Z, AA, AB, ...) to its 1-based number
pub fn col_from_label(label: &str) -> Option<u32> {
    let label = label.trim();
    if label.is_empty() {
        return None;
    }

    let mut col: u32 = 0;
    for c in label.chars() {
        if !c.is_ascii_alphabetic() {
            return None;
        }
        col = col
            .checked_mul(26)?
            .checked_add(c.to_ascii_uppercase() as u32 - 'A' as u32 + 1)?;
    }

    Some(col)
}
