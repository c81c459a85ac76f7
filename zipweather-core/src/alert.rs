//! Classification of provider alert events into display labels.

/// Keyword table checked in order; the first key contained in the event
/// text wins, so broader phrases ("extreme temperature") must stay ahead of
/// the single words they contain.
const ALERT_TYPE_MAPPING: &[(&str, &str)] = &[
    ("extreme temperature", "熱波/寒波"),
    ("heat", "熱波"),
    ("cold", "寒波"),
    ("wind", "強風"),
    ("snow", "雪"),
    ("fog", "濃霧"),
    ("rain", "大雨"),
    ("thunderstorm", "雷"),
];

/// Map a lower-cased alert event to its display label.
///
/// Unmatched events are returned with each word capitalized instead of
/// failing, so unrecognized provider labels still render readably.
pub fn classify_alert_type(event: &str) -> String {
    for (key, label) in ALERT_TYPE_MAPPING {
        if event.contains(key) {
            return (*label).to_string();
        }
    }

    title_case(event)
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
