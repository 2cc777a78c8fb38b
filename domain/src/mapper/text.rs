//! Small text helpers used while mapping

/// Uppercase the first character, leave the rest untouched
/// ("mr-mime" -> "Mr-mime")
pub fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Flavor text ships with hard line and page breaks from the games;
/// collapse every whitespace run into a single space.
pub fn clean_flavor_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
