pub mod en;

pub use en as current;

pub fn fill_one(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

/// Fill the first two `{}` slots of `template`. Placeholders inside the
/// substituted values are left alone.
pub fn fill_two(
    template: &str,
    first: impl std::fmt::Display,
    second: impl std::fmt::Display,
) -> String {
    let mut parts = template.splitn(3, "{}");
    let head = parts.next().unwrap_or_default();
    match (parts.next(), parts.next()) {
        (Some(middle), Some(tail)) => format!("{head}{first}{middle}{second}{tail}"),
        (Some(tail), None) => format!("{head}{first}{tail}"),
        _ => head.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_two_keeps_braces_inside_values() {
        assert_eq!(fill_two("By {} | {}", "A {} Writer", "May 1"), "By A {} Writer | May 1");
        assert_eq!(fill_two("By {}", "Ann", "May 1"), "By Ann");
        assert_eq!(fill_two("Plain", "Ann", "May 1"), "Plain");
    }
}
