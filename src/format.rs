//! Display formatting for card fields

/// Uppercase the first character, leave the rest as the API sent it
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Dex number as "#" + decimal, zero-padded to at least three digits
pub fn dex_number(id: u16) -> String {
    format!("#{:03}", id)
}

/// Height in decimeters -> meters with one decimal
pub fn height_m(decimeters: u16) -> String {
    format!("{:.1} m", f32::from(decimeters) / 10.0)
}

/// Weight in hectograms -> kilograms with one decimal
pub fn weight_kg(hectograms: u16) -> String {
    format!("{:.1} kg", f32::from(hectograms) / 10.0)
}

/// Type names capitalized and joined with a comma, slot order preserved
pub fn type_list(types: &[String]) -> String {
    types
        .iter()
        .map(|name| capitalize(name))
        .collect::<Vec<_>>()
        .join(", ")
}
