use crate::error::ModelError;

/// Normalize a label or query for matching: trimmed and lowercased.
pub fn normalize_label(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// One memory card as laid out on the page.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    /// Heading text shown on the card; also the search key.
    pub label: String,
    /// Rendered width in pixels, excluding the inter-item gap.
    pub width: f32,
}

impl Item {
    pub fn new(label: impl Into<String>, width: f32) -> Self {
        Self {
            label: label.into(),
            width,
        }
    }
}

/// The ordered, non-empty list of original items. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSequence {
    items: Vec<Item>,
    normalized: Vec<String>,
}

impl ItemSequence {
    /// Validate and freeze a list of items.
    pub fn new(items: Vec<Item>) -> Result<Self, ModelError> {
        if items.is_empty() {
            return Err(ModelError::EmptySequence);
        }
        if let Some((index, item)) = items
            .iter()
            .enumerate()
            .find(|(_, item)| !item.width.is_finite() || item.width < 0.0)
        {
            return Err(ModelError::InvalidItemWidth {
                index,
                width: item.width,
            });
        }
        let normalized =
            items.iter().map(|item| normalize_label(&item.label)).collect();
        Ok(Self { items, normalized })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with slices.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Width of the first item, which sets the pitch for the whole track.
    pub fn leading_width(&self) -> f32 {
        self.items.first().map(|item| item.width).unwrap_or(0.0)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Item] {
        &self.items
    }

    /// Index of the first item whose normalized label equals the normalized
    /// query.
    pub fn position_of_label(&self, query: &str) -> Option<usize> {
        let needle = normalize_label(query);
        self.normalized.iter().position(|label| *label == needle)
    }
}

impl<'a> IntoIterator for &'a ItemSequence {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
