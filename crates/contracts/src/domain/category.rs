//! Category taxonomy and name-based classification.
//!
//! Products carry no category attribute; the category is derived from the
//! product name on demand. The rule table below is ordered and the first
//! matching rule wins.

use serde::{Deserialize, Serialize};

/// Closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Santos,
    Entidades,
    Ciganos,
    Orixas,
    Outros,
}

impl Category {
    /// Human-readable label shown on the storefront tabs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Santos => "Santos",
            Category::Entidades => "Entidades",
            Category::Ciganos => "Ciganos",
            Category::Orixas => "Orixás",
            Category::Outros => "Outros",
        }
    }
}

/// Keyword rules, evaluated in order against the lowercased product name.
/// "Outros" is the fallback and has no rule of its own.
const RULES: &[(Category, &[&str])] = &[
    (Category::Santos, &["são", "santa", "santo", "n.s."]),
    (Category::Ciganos, &["cigan"]),
    (
        Category::Orixas,
        &["oxum", "yemanjá", "iemanjá", "ogum", "xangô", "oxalá", "iansã"],
    ),
    (
        Category::Entidades,
        &[
            "exú",
            "pomba gira",
            "zé ",
            "preto velho",
            "cabocla",
            "marinheiro",
            "légua",
        ],
    ),
];

/// Derive the category of a product from its name.
///
/// Total and case-insensitive: every name maps to exactly one category,
/// falling back to [`Category::Outros`] when no keyword matches.
pub fn classify(name: &str) -> Category {
    let lower = name.to_lowercase();
    for (category, keywords) in RULES {
        if keywords.iter().any(|k| lower.contains(k)) {
            return *category;
        }
    }
    Category::Outros
}

/// Category selection on the storefront: either everything or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    Todos,
    Selected(Category),
}

impl CategoryFilter {
    /// All tabs in storefront display order.
    pub fn all() -> [CategoryFilter; 6] {
        [
            CategoryFilter::Todos,
            CategoryFilter::Selected(Category::Santos),
            CategoryFilter::Selected(Category::Entidades),
            CategoryFilter::Selected(Category::Ciganos),
            CategoryFilter::Selected(Category::Orixas),
            CategoryFilter::Selected(Category::Outros),
        ]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryFilter::Todos => "Todos",
            CategoryFilter::Selected(category) => category.display_name(),
        }
    }

    /// Whether a product with the given name falls under this selection.
    pub fn matches(&self, product_name: &str) -> bool {
        match self {
            CategoryFilter::Todos => true,
            CategoryFilter::Selected(category) => classify(product_name) == *category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::Todos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_santos() {
        assert_eq!(classify("São Jorge"), Category::Santos);
        assert_eq!(classify("Santa Bárbara"), Category::Santos);
        assert_eq!(classify("Santo Expedito"), Category::Santos);
        assert_eq!(classify("N.S. Aparecida"), Category::Santos);
    }

    #[test]
    fn test_classify_ciganos() {
        assert_eq!(classify("Cigana Esmeralda"), Category::Ciganos);
        assert_eq!(classify("Cigano do Oriente"), Category::Ciganos);
        assert_eq!(classify("Ciganinha Sofia"), Category::Ciganos);
    }

    #[test]
    fn test_classify_orixas() {
        for name in [
            "Oxum Dourada",
            "Yemanjá",
            "Iemanjá das Ondas",
            "Ogum Guerreiro",
            "Xangô",
            "Oxalá",
            "Iansã dos Ventos",
        ] {
            assert_eq!(classify(name), Category::Orixas, "name: {name}");
        }
    }

    #[test]
    fn test_classify_entidades() {
        for name in [
            "Exú Caveira",
            "Pomba Gira Rainha",
            "Zé Pilintra",
            "Preto Velho",
            "Cabocla Jurema",
            "Marinheiro",
            "Légua Boji",
        ] {
            assert_eq!(classify(name), Category::Entidades, "name: {name}");
        }
    }

    #[test]
    fn test_classify_fallback() {
        assert_eq!(classify("Buda Tibetano"), Category::Outros);
        assert_eq!(classify(""), Category::Outros);
    }

    #[test]
    fn test_classify_is_case_insensitive() {
        assert_eq!(classify("SÃO JORGE"), Category::Santos);
        assert_eq!(classify("oxum"), Category::Orixas);
        assert_eq!(classify("POMBA GIRA"), Category::Entidades);
    }

    #[test]
    fn test_first_listed_rule_wins() {
        // Matches both the Santos and Ciganos rule sets; Santos is listed
        // first and must win.
        assert_eq!(classify("Santa Cigana"), Category::Santos);
        // Ciganos before Orixás.
        assert_eq!(classify("Cigana de Oxum"), Category::Ciganos);
    }

    #[test]
    fn test_ze_keyword_requires_trailing_space() {
        assert_eq!(classify("Zé Pilintra"), Category::Entidades);
        // "zé" only counts followed by a space, so a bare "Zé" stays out.
        assert_eq!(classify("Zé"), Category::Outros);
    }

    #[test]
    fn test_filter_todos_matches_everything() {
        assert!(CategoryFilter::Todos.matches("São Jorge"));
        assert!(CategoryFilter::Todos.matches("Buda Tibetano"));
    }

    #[test]
    fn test_filter_selected_matches_by_classification() {
        let saints = CategoryFilter::Selected(Category::Santos);
        assert!(saints.matches("São Jorge"));
        assert!(!saints.matches("Cigana Esmeralda"));

        let others = CategoryFilter::Selected(Category::Outros);
        assert!(others.matches("Buda Tibetano"));
        assert!(!others.matches("São Jorge"));
    }

    #[test]
    fn test_tab_order() {
        let labels: Vec<&str> = CategoryFilter::all()
            .iter()
            .map(|f| f.display_name())
            .collect();
        assert_eq!(
            labels,
            vec!["Todos", "Santos", "Entidades", "Ciganos", "Orixás", "Outros"]
        );
    }
}
