//! Page registry: the single source of truth for page keys, labels and views.

mod labels;
mod registry;

pub use labels::page_label;
pub use registry::render_page_content;

pub const DEFAULT_PAGE: &str = "d400_alertas";

/// (key, icon) in sidebar order
pub const PAGES: [(&str, &str); 5] = [
    ("d400_alertas", "home"),
    ("a001_departamento", "building"),
    ("a002_inquilino", "users"),
    ("a003_contrato", "file-text"),
    ("a004_pago", "cash"),
];

pub fn is_known_page(key: &str) -> bool {
    PAGES.iter().any(|(k, _)| *k == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_has_a_label() {
        for (key, _) in PAGES {
            assert_ne!(page_label(key), key, "missing label for {}", key);
        }
        assert!(is_known_page(DEFAULT_PAGE));
        assert!(!is_known_page("a999_unknown"));
    }
}
