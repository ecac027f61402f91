//! Dashboard metric cards.
//!
//! Each card is bound to a category and a filter set; activating it opens
//! the matching drill-down.

use crate::filter::FilterMap;
use crate::model::{Category, Record};
use crate::source::RecordSource;

/// What a card's headline number measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMetric {
    /// Records matching the card's filters
    Count,
    /// Mean of a numeric field over matching records, shown as a percentage
    AveragePercent(&'static str),
}

/// One dashboard card.
#[derive(Debug, Clone)]
pub struct MetricCard {
    pub title: &'static str,
    pub category: Category,
    pub filters: &'static [(&'static str, &'static str)],
    pub metric: CardMetric,
}

impl MetricCard {
    fn new(
        title: &'static str,
        category: Category,
        filters: &'static [(&'static str, &'static str)],
    ) -> Self {
        Self {
            title,
            category,
            filters,
            metric: CardMetric::Count,
        }
    }

    fn measuring(mut self, metric: CardMetric) -> Self {
        self.metric = metric;
        self
    }

    /// The card's filters, or `None` when it shows the whole category.
    #[must_use]
    pub fn filter_map(&self) -> Option<FilterMap> {
        if self.filters.is_empty() {
            return None;
        }
        Some(
            self.filters
                .iter()
                .fold(FilterMap::new(), |map, (key, value)| map.with(*key, *value)),
        )
    }

    /// Headline text for the card, computed from `source`.
    ///
    /// Source failures show as `!`.
    #[must_use]
    pub fn headline(&self, source: &dyn RecordSource) -> String {
        match source.query(&self.category, self.filter_map().as_ref()) {
            Ok(records) => self.measure(&records),
            Err(err) => {
                tracing::warn!(card = self.title, error = %err, "card metric unavailable");
                "!".to_string()
            }
        }
    }

    fn measure(&self, records: &[Record]) -> String {
        match self.metric {
            CardMetric::Count => records.len().to_string(),
            CardMetric::AveragePercent(field) => {
                let values: Vec<f64> = records
                    .iter()
                    .filter_map(|r| r.get(field).and_then(|v| v.as_f64()))
                    .collect();
                if values.is_empty() {
                    return "-".to_string();
                }
                let mean = values.iter().sum::<f64>() / values.len() as f64;
                format!("{}%", mean.round())
            }
        }
    }
}

/// The dashboard's cards, in display order.
#[must_use]
pub fn default_cards() -> Vec<MetricCard> {
    vec![
        MetricCard::new("Active Contracts", Category::Contracts, &[("status", "approved")]),
        MetricCard::new("Active Matters", Category::Matters, &[("status", "active")]),
        MetricCard::new("High Risks", Category::Risks, &[("severity", "high")]),
        MetricCard::new("Compliance Score", Category::Compliance, &[])
            .measuring(CardMetric::AveragePercent("score")),
        MetricCard::new("Executed Contracts", Category::Contracts, &[("status", "executed")]),
        MetricCard::new("Completed Tasks", Category::Tasks, &[("status", "completed")]),
        MetricCard::new("Critical Risks", Category::Risks, &[("severity", "critical")]),
        MetricCard::new("All Matters", Category::Matters, &[]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{FixtureSource, SyntheticSource};

    #[test]
    fn test_default_cards() {
        let cards = default_cards();
        assert_eq!(cards.len(), 8);
        assert!(cards[7].filter_map().is_none());
        let filters = cards[0].filter_map().unwrap();
        assert_eq!(filters.chips(), vec!["status: approved".to_string()]);
    }

    #[test]
    fn test_count_headline() {
        let source = SyntheticSource::seeded(3);
        let cards = default_cards();
        // severity cycles with period 4 over 20 risks
        assert_eq!(cards[6].headline(&source), "5");
        assert_eq!(cards[7].headline(&source), "30");
    }

    #[test]
    fn test_average_headline() {
        let source = FixtureSource::from_json(
            r#"{ "compliance": [ { "id": "c-1", "score": 80 }, { "id": "c-2", "score": 91 } ] }"#,
        )
        .unwrap();
        let card = &default_cards()[3];
        assert_eq!(card.headline(&source), "86%");
        assert_eq!(card.headline(&FixtureSource::new()), "-");
    }
}
