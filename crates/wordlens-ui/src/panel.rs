use wordlens_types::{DictionaryEntry, PanelView};

/// Box lines for the translation panel, empty when hidden
pub fn panel_lines(view: &PanelView, width: usize) -> Vec<String> {
    let inner = width.saturating_sub(4).max(8);

    let body = match view {
        PanelView::Hidden => return Vec::new(),
        PanelView::NoResults => vec!["No Results".to_string()],
        PanelView::Entry {
            entry,
            meaning_index,
        } => entry_lines(entry, *meaning_index, inner),
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(format!("┌{}┐", "─".repeat(inner + 2)));
    for line in body {
        let pad = inner.saturating_sub(line.chars().count());
        lines.push(format!("│ {}{} │", line, " ".repeat(pad)));
    }
    lines.push(format!("└{}┘", "─".repeat(inner + 2)));
    lines
}

fn entry_lines(entry: &DictionaryEntry, meaning_index: usize, width: usize) -> Vec<String> {
    let mut lines = vec![capitalize(&entry.word)];

    let phonetics: Vec<String> = entry
        .phonetics
        .iter()
        .enumerate()
        .map(|(i, p)| match p.audio_url() {
            Some(_) => format!("{} ♪{}", p.text, i + 1).trim().to_string(),
            None => p.text.clone(),
        })
        .filter(|p| !p.is_empty())
        .collect();
    lines.extend(wrap(&phonetics.join("  "), width));

    lines.push(String::new());
    let total = entry.meanings.len();
    if total > 1 {
        let nav = format!("‹ {}/{} ›", meaning_index + 1, total);
        let gap = width.saturating_sub("meanings".len() + nav.chars().count());
        lines.push(format!("meanings{}{}", " ".repeat(gap), nav));
    } else {
        lines.push("meanings".to_string());
    }

    // Out-of-range or empty meanings draw nothing below the header
    let Some(meaning) = entry.meanings.get(meaning_index) else {
        return lines;
    };

    lines.push(meaning.part_of_speech.clone());
    for definition in &meaning.definitions {
        lines.extend(wrap(&definition.definition, width));
        if let Some(example) = definition.example.as_deref().filter(|e| !e.is_empty()) {
            lines.extend(wrap(&format!("  \"{example}\""), width));
        }
        if !definition.synonyms.is_empty() {
            lines.extend(wrap(&format!("  ≈ {}", definition.synonyms.join(", ")), width));
        }
    }

    lines
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Greedy word wrap, words longer than `width` are split
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let indent: String = text.chars().take_while(|c| *c == ' ').collect();
    let mut lines = Vec::new();
    let mut line = indent.clone();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        loop {
            let used = line.chars().count();
            let sep = usize::from(used > indent.len());

            if used + sep + word.len() <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.extend(word.iter());
                break;
            }

            if used > indent.len() {
                lines.push(std::mem::replace(&mut line, indent.clone()));
                continue;
            }

            // Word alone does not fit on an empty line
            let room = width.saturating_sub(used).max(1);
            let rest = word.split_off(room.min(word.len()));
            line.extend(word.iter());
            lines.push(std::mem::replace(&mut line, indent.clone()));
            if rest.is_empty() {
                break;
            }
            word = rest;
        }
    }

    if line.chars().count() > indent.len() || lines.is_empty() {
        lines.push(line);
    }
    lines
}
