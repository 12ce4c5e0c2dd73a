use url::form_urlencoded;

use crate::storage::{increment_counter, KeyValueStore, StorageResult};

pub const PLACEHOLDER: &str = "—";

const PRODUCTS: &[(&str, &str)] = &[
    ("p-001", "New Musk"),
    ("p-002", "Smart Collection"),
    ("p-003", "Valentinho"),
    ("p-004", "Hugs"),
    ("p-005", "Red Cherry"),
    ("p-006", "Burberry Weekend"),
];

/// `(value, label)` pairs for the product dropdown.
pub fn product_options() -> impl Iterator<Item = (&'static str, &'static str)> {
    PRODUCTS.iter().copied()
}

pub fn product_name(id: &str) -> Option<&'static str> {
    PRODUCTS
        .iter()
        .find(|(product_id, _)| *product_id == id)
        .map(|(_, name)| *name)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewParams {
    pub product_id: Option<String>,
    pub rating: Option<String>,
    pub install_date: Option<String>,
    pub review_text: Option<String>,
    pub user_name: Option<String>,
    pub features: Vec<String>,
}

impl ReviewParams {
    /// Parses a query string, with or without the leading `?`.
    /// Single-valued keys keep their first occurrence; empty values count as missing.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params = ReviewParams::default();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                "productId" => &mut params.product_id,
                "rating" => &mut params.rating,
                "installDate" => &mut params.install_date,
                "reviewText" => &mut params.review_text,
                "userName" => &mut params.user_name,
                "features" => {
                    params.features.push(value.into_owned());
                    continue;
                }
                _ => continue,
            };
            if slot.is_none() && !value.is_empty() {
                *slot = Some(value.into_owned());
            }
        }

        params
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: &'static str,
    pub value: String,
}

fn row(label: &'static str, value: impl Into<String>) -> SummaryRow {
    SummaryRow {
        label,
        value: value.into(),
    }
}

/// Rows of the review summary; missing values render as explicit placeholders.
pub fn summary_rows(params: &ReviewParams) -> Vec<SummaryRow> {
    let product = match params.product_id.as_deref() {
        Some(id) => product_name(id).unwrap_or(id).to_string(),
        None => PLACEHOLDER.to_string(),
    };
    let features = if params.features.is_empty() {
        "None selected".to_string()
    } else {
        params.features.join(", ")
    };

    vec![
        row("Product", product),
        row("Rating", params.rating.as_deref().unwrap_or(PLACEHOLDER)),
        row("Install Date", params.install_date.as_deref().unwrap_or(PLACEHOLDER)),
        row("Features", features),
        row("Review", params.review_text.as_deref().unwrap_or(PLACEHOLDER)),
        row("Reviewer", params.user_name.as_deref().unwrap_or("Anonymous")),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewSummary {
    pub rows: Vec<SummaryRow>,
    pub review_count: u64,
}

/// Builds the summary page model and bumps the stored review counter.
pub fn load_summary(
    store: &mut dyn KeyValueStore,
    counter_key: &str,
    query: &str,
) -> StorageResult<ReviewSummary> {
    let params = ReviewParams::from_query(query);
    let review_count = increment_counter(store, counter_key)?;
    tracing::debug!(review_count, product = ?params.product_id, "review summary loaded");
    Ok(ReviewSummary {
        rows: summary_rows(&params),
        review_count,
    })
}
