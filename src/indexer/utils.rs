use std::path::{Component, Path};

/// Relative path with the document extension removed, always `/`-separated.
pub(super) fn slug(relative_path: &Path, extension: &str) -> String {
    let joined = relative_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/");
    match joined.strip_suffix(extension) {
        // a file named just `.md` keeps its name
        Some(stripped) if !stripped.is_empty() && !stripped.ends_with('/') => stripped.to_string(),
        _ => joined,
    }
}

/// `guides/my-post` -> `Guides/My Post`
pub(super) fn title_from_slug(slug: &str) -> String {
    let mut title = String::with_capacity(slug.len());
    let mut in_word = false;
    for c in slug.replace('-', " ").chars() {
        if c.is_alphabetic() {
            if in_word {
                title.extend(c.to_lowercase());
            } else {
                title.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            title.push(c);
            in_word = false;
        }
    }
    title
}

pub(super) fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}
