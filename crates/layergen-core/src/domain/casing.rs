//! First-letter case transforms.
//!
//! Component and layer names are normalised into class names
//! (`heroes` + `repository` -> `HeroesRepository`) and file stems
//! (`HeroesRepository` -> `heroesRepository`) with these two helpers.
//!
//! Both are total: an empty input yields an empty output.

/// Uppercase the first character of `s`, leaving the rest untouched.
///
/// | Input     | Output    |
/// |-----------|-----------|
/// | "hello"   | "Hello"   |
/// | "Hello"   | "Hello"   |
/// | "heroesRepository" | "HeroesRepository" |
/// | ""        | ""        |
pub fn upper_case_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            // to_uppercase handles Unicode correctly (e.g., "ß" -> "SS")
            out.extend(first.to_uppercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}

/// Lowercase the first character of `s`, leaving the rest untouched.
pub fn lower_case_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(s.len());
            out.extend(first.to_lowercase());
            out.push_str(chars.as_str());
            out
        }
        None => String::new(),
    }
}
