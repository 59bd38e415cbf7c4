//! Live substring filter over pre-rendered product cards.
//!
//! Every keystroke in the search box recomputes which cards are visible.
//! A card matches when the lowercased, trimmed needle is a substring of its
//! title, description or category. An empty needle shows everything. When a
//! non-empty needle hides every card, a single "no results" placeholder is
//! shown instead; it goes away as soon as anything matches again.
//!
//! The admin panel does not render product cards. This filter is for the
//! public listing page: its host builds one [`ProductCard`] per rendered card
//! and feeds every search box change to [`LiveFilter::on_input`].
//!
//! ```
//! use flohmarkt_core::search::{LiveFilter, ProductCard};
//!
//! let mut filter = LiveFilter::new(vec![
//!     ProductCard::new("هاتف ذكي", "", "إلكترونيات"),
//!     ProductCard::new("لابتوب", "", "إلكترونيات"),
//! ]);
//!
//! filter.on_input("هاتف");
//! assert_eq!(filter.visible_indices(), vec![0]);
//! assert!(filter.no_results().is_none());
//! ```

/// The searchable text of one product card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub title: String,
    pub description: String,
    pub category: String,
}

impl ProductCard {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category: category.into(),
        }
    }
}

/// Placeholder shown when a non-empty search hides every card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoResults {
    needle: String,
}

impl NoResults {
    /// The needle that produced no matches.
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Heading of the placeholder.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        "لم يتم العثور على نتائج"
    }

    /// Body text of the placeholder.
    #[must_use]
    pub fn message(&self) -> String {
        format!("لم نجد منتجات تطابق البحث عن \"{}\"", self.needle)
    }
}

/// Lowercase and trim raw search box input.
#[must_use]
pub fn normalize_needle(raw: &str) -> String {
    raw.to_lowercase().trim().to_owned()
}

#[derive(Debug, Clone)]
struct IndexedCard {
    title: String,
    description: String,
    category: String,
}

impl IndexedCard {
    fn from_card(card: &ProductCard) -> Self {
        Self {
            title: card.title.to_lowercase(),
            description: card.description.to_lowercase(),
            category: card.category.to_lowercase(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.contains(needle)
            || self.description.contains(needle)
            || self.category.contains(needle)
    }
}

/// Visibility state of a fixed set of cards under the current search input.
#[derive(Debug, Clone)]
pub struct LiveFilter {
    cards: Vec<ProductCard>,
    index: Vec<IndexedCard>,
    visible: Vec<bool>,
    needle: String,
    no_results: Option<NoResults>,
}

impl LiveFilter {
    /// Start with every card visible and an empty search box.
    #[must_use]
    pub fn new(cards: Vec<ProductCard>) -> Self {
        let index = cards.iter().map(IndexedCard::from_card).collect();
        let visible = vec![true; cards.len()];
        Self {
            cards,
            index,
            visible,
            needle: String::new(),
            no_results: None,
        }
    }

    /// Apply the search box contents after a keystroke.
    pub fn on_input(&mut self, raw: &str) {
        self.needle = normalize_needle(raw);
        for (slot, card) in self.visible.iter_mut().zip(&self.index) {
            *slot = card.matches(&self.needle);
        }

        let any_visible = self.visible.iter().any(|v| *v);
        self.no_results = if any_visible || self.needle.is_empty() {
            None
        } else {
            Some(NoResults {
                needle: self.needle.clone(),
            })
        };
    }

    /// Empty the search box, as the placeholder's "clear search" button does.
    pub fn clear(&mut self) {
        self.on_input("");
    }

    /// The normalized needle currently applied.
    #[must_use]
    pub fn needle(&self) -> &str {
        &self.needle
    }

    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        &self.cards
    }

    /// Whether the card at `index` is shown. Out-of-range indices are hidden.
    #[must_use]
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn visible_indices(&self) -> Vec<usize> {
        self.visible
            .iter()
            .enumerate()
            .filter_map(|(i, v)| v.then_some(i))
            .collect()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|v| **v).count()
    }

    /// The "no results" placeholder, if it is currently shown.
    #[must_use]
    pub const fn no_results(&self) -> Option<&NoResults> {
        self.no_results.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample() -> LiveFilter {
        LiveFilter::new(vec![
            ProductCard::new("هاتف ذكي", "بحالة ممتازة", "إلكترونيات"),
            ProductCard::new("لابتوب", "Dell Latitude", "حواسيب"),
            ProductCard::new("Sofa", "Grey fabric", "Furniture"),
        ])
    }

    #[test]
    fn test_arabic_title_match() {
        let mut filter = LiveFilter::new(vec![
            ProductCard::new("هاتف ذكي", "", ""),
            ProductCard::new("لابتوب", "", ""),
        ]);
        filter.on_input("هاتف");
        assert!(filter.is_visible(0));
        assert!(!filter.is_visible(1));
    }

    #[test]
    fn test_case_insensitive_and_trimmed() {
        let mut filter = sample();
        filter.on_input("  DELL ");
        assert_eq!(filter.needle(), "dell");
        assert_eq!(filter.visible_indices(), vec![1]);
    }

    #[test]
    fn test_matches_category_or_description() {
        let mut filter = sample();
        filter.on_input("furniture");
        assert_eq!(filter.visible_indices(), vec![2]);

        filter.on_input("ممتازة");
        assert_eq!(filter.visible_indices(), vec![0]);
    }

    #[test]
    fn test_empty_needle_shows_all() {
        let mut filter = sample();
        filter.on_input("sofa");
        filter.on_input("   ");
        assert_eq!(filter.visible_count(), 3);
        assert!(filter.no_results().is_none());
    }

    #[test]
    fn test_no_results_placeholder_toggles() {
        let mut filter = sample();
        filter.on_input("bicycle");
        assert_eq!(filter.visible_count(), 0);
        let placeholder = filter.no_results().cloned();
        assert_eq!(placeholder.as_ref().map(NoResults::needle), Some("bicycle"));
        assert!(placeholder.is_some_and(|p| p.message().contains("bicycle")));

        filter.on_input("sofa");
        assert!(filter.no_results().is_none());

        filter.on_input("bicycle");
        filter.clear();
        assert!(filter.no_results().is_none());
        assert_eq!(filter.visible_count(), 3);
    }

    #[test]
    fn test_no_cards_never_shows_placeholder_for_empty_needle() {
        let mut filter = LiveFilter::new(Vec::new());
        filter.on_input("");
        assert!(filter.no_results().is_none());
        filter.on_input("x");
        assert!(filter.no_results().is_some());
    }

    #[test]
    fn test_out_of_range_is_hidden() {
        let filter = sample();
        assert!(!filter.is_visible(10));
    }

    fn card_strategy() -> impl Strategy<Value = ProductCard> {
        ("[a-zA-Zء-ي ]{0,12}", "[a-zA-Zء-ي ]{0,12}", "[a-zA-Zء-ي ]{0,8}")
            .prop_map(|(t, d, c)| ProductCard::new(t, d, c))
    }

    proptest! {
        #[test]
        fn prop_visible_iff_substring(
            cards in prop::collection::vec(card_strategy(), 0..8),
            raw in "[a-zA-Zء-ي ]{0,4}",
        ) {
            let mut filter = LiveFilter::new(cards.clone());
            filter.on_input(&raw);
            let needle = raw.to_lowercase().trim().to_owned();

            for (i, card) in cards.iter().enumerate() {
                let expected = needle.is_empty()
                    || card.title.to_lowercase().contains(&needle)
                    || card.description.to_lowercase().contains(&needle)
                    || card.category.to_lowercase().contains(&needle);
                prop_assert_eq!(filter.is_visible(i), expected);
            }

            let placeholder_expected = !needle.is_empty() && filter.visible_count() == 0;
            prop_assert_eq!(filter.no_results().is_some(), placeholder_expected);
        }
    }
}
