//! Seeded synthetic order datasets for demos and exploration. Never used by
//! the analytics core.

use crate::schema::OrderRecord;
use chrono::{Duration, NaiveDate};
use rand::distributions::WeightedIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, LogNormal};

/// Deterministic order generator. The same seed and settings always produce
/// the same records.
#[derive(Debug, Clone)]
pub struct OrderGenerator {
    seed: u64,
    start_date: NaiveDate,
    span_days: u32,
    order_count: usize,
    categories: Vec<(String, f64)>,
    multi_line_chance: f64,
    missing_customer_chance: f64,
    customer_pool: usize,
    amount_mu: f64,
    amount_sigma: f64,
}

impl OrderGenerator {
    pub fn new(seed: u64) -> Self {
        let categories = [
            ("bed_bath_table", 10.0),
            ("health_beauty", 9.0),
            ("sports_leisure", 8.0),
            ("computers_accessories", 7.0),
            ("furniture_decor", 7.0),
            ("housewares", 6.0),
            ("watches_gifts", 5.0),
            ("telephony", 4.0),
            ("toys", 3.0),
            ("auto", 3.0),
        ];
        Self {
            seed,
            start_date: NaiveDate::from_ymd_opt(2017, 1, 1).unwrap(),
            span_days: 365,
            order_count: 500,
            categories: categories
                .into_iter()
                .map(|(name, weight)| (name.to_string(), weight))
                .collect(),
            multi_line_chance: 0.15,
            missing_customer_chance: 0.05,
            customer_pool: 200,
            amount_mu: 4.4,
            amount_sigma: 0.7,
        }
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }

    pub fn with_span_days(mut self, span_days: u32) -> Self {
        self.span_days = span_days.max(1);
        self
    }

    pub fn with_order_count(mut self, order_count: usize) -> Self {
        self.order_count = order_count;
        self
    }

    /// Replaces the category pool. Weights are relative draw frequencies;
    /// non-positive weights are bumped to a small floor. An empty pool is
    /// ignored.
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let pool: Vec<(String, f64)> = categories
            .into_iter()
            .map(|(name, weight)| (name.into(), weight.max(0.01)))
            .collect();
        if !pool.is_empty() {
            self.categories = pool;
        }
        self
    }

    pub fn with_multi_line_chance(mut self, chance: f64) -> Self {
        self.multi_line_chance = chance.clamp(0.0, 0.9);
        self
    }

    pub fn with_missing_customer_chance(mut self, chance: f64) -> Self {
        self.missing_customer_chance = chance.clamp(0.0, 1.0);
        self
    }

    /// Generates the dataset. Multi-line orders repeat an order id with
    /// fresh line amounts and categories under one timestamp.
    pub fn generate(&self) -> Vec<OrderRecord> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        // The pool is never empty and weights are positive, per construction.
        let category_weights = WeightedIndex::new(self.categories.iter().map(|(_, w)| *w)).unwrap();
        let amounts = LogNormal::new(self.amount_mu, self.amount_sigma.max(0.01)).unwrap();

        let mut records = Vec::with_capacity(self.order_count);
        for order_index in 0..self.order_count {
            let order_id = format!("SYN-{:05}", order_index);
            let customer_id = if rng.gen_bool(self.missing_customer_chance) {
                None
            } else {
                Some(format!("CUST-{:04}", rng.gen_range(0..self.customer_pool)))
            };
            let date = self.start_date + Duration::days(rng.gen_range(0..self.span_days) as i64);
            let timestamp = date
                .and_hms_opt(rng.gen_range(0..24), rng.gen_range(0..60), rng.gen_range(0..60))
                .unwrap();

            let mut lines = 1;
            while lines < 4 && rng.gen_bool(self.multi_line_chance) {
                lines += 1;
            }
            for _ in 0..lines {
                let (category, _) = &self.categories[category_weights.sample(&mut rng)];
                let amount = (amounts.sample(&mut rng) * 100.0).round() / 100.0;
                records.push(OrderRecord::new(
                    order_id.clone(),
                    customer_id.clone(),
                    timestamp,
                    Some(category.clone()),
                    amount,
                ));
            }
        }
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generation_is_deterministic_for_a_seed() {
        let generator = OrderGenerator::new(7).with_order_count(50);
        assert_eq!(generator.generate(), generator.generate());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = OrderGenerator::new(1).with_order_count(50).generate();
        let b = OrderGenerator::new(2).with_order_count(50).generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_order_count_is_distinct_ids() {
        let records = OrderGenerator::new(3).with_order_count(80).generate();
        let distinct: HashSet<&str> = records.iter().map(|r| r.order_id.as_str()).collect();
        assert_eq!(distinct.len(), 80);
        assert!(records.len() >= 80);
    }

    #[test]
    fn test_records_stay_within_span() {
        let start = NaiveDate::from_ymd_opt(2018, 1, 1).unwrap();
        let records = OrderGenerator::new(4)
            .with_start_date(start)
            .with_span_days(30)
            .with_order_count(40)
            .generate();
        let end = start + Duration::days(30);
        assert!(records
            .iter()
            .all(|r| r.order_date >= start && r.order_date < end));
    }

    #[test]
    fn test_custom_categories_used() {
        let records = OrderGenerator::new(5)
            .with_categories([("garden", 1.0), ("pets", 1.0)])
            .with_order_count(30)
            .generate();
        assert!(records
            .iter()
            .all(|r| r.category == "garden" || r.category == "pets"));
    }

    #[test]
    fn test_amounts_are_positive_cents() {
        let records = OrderGenerator::new(6).with_order_count(30).generate();
        for record in &records {
            assert!(record.order_total > 0.0);
            let cents = record.order_total * 100.0;
            assert!((cents - cents.round()).abs() < 1e-6);
        }
    }
}
