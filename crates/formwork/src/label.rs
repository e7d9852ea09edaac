//! Field name to label formatting.

/// Derives a human-readable label from a field name.
///
/// Splits on `_`, `-`, and camelCase boundaries, then sentence-cases the
/// result: `"firstName"` becomes `"First name"`, `"password_confirm"`
/// becomes `"Password confirm"`.
pub fn create_label(name: &str) -> String {
    let words = split_words(name);
    let mut label = String::with_capacity(name.len() + words.len());

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            label.push(' ');
        }
        if i == 0 {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                label.extend(first.to_uppercase());
                label.push_str(chars.as_str());
            }
        } else {
            label.push_str(word);
        }
    }

    label
}

/// Splits a field name into lowercase words.
fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' || c == ' ' || c == '.' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            continue;
        }

        // Boundary before an uppercase run start ("userName") and before the
        // last capital of a run followed by lowercase ("HTTPPort" -> http, port).
        let prev_lower = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_numeric());
        let run_end = i > 0
            && chars[i - 1].is_uppercase()
            && chars.get(i + 1).is_some_and(|n| n.is_lowercase());
        if c.is_uppercase() && (prev_lower || run_end) && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }

        current.extend(c.to_lowercase());
    }

    if !current.is_empty() {
        words.push(current);
    }

    words
}
