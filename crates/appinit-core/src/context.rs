use std::collections::BTreeMap;

/// Variable mapping for one generation run. Immutable once built.
pub type Variables = BTreeMap<String, String>;

/// Build the variable mapping for an app name.
///
/// `app_name` is the display form (each word title-cased), `app_name_slug`
/// the identifier form (lowercase words joined by underscores).
pub fn app_variables(name: &str) -> Variables {
    let mut variables = Variables::new();
    variables.insert("app_name".to_string(), title_case(name));
    variables.insert("app_name_slug".to_string(), slugify(name));
    variables
}

fn title_case(name: &str) -> String {
    name.split_whitespace()
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

fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.to_lowercase())
        .collect::<Vec<_>>()
        .join("_")
}
