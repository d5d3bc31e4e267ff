use crate::dataset::Dataset;
use crate::models::{Metric, Row};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Max,
    Min,
}

impl Dataset {
    // ties go to the first row in load order
    pub fn extremum(&self, metric: Metric, direction: Direction) -> &Row {
        let rows = self.rows();
        // non-empty by construction
        let mut best = &rows[0];
        for row in &rows[1..] {
            let better = match direction {
                Direction::Max => row.value(metric) > best.value(metric),
                Direction::Min => row.value(metric) < best.value(metric),
            };
            if better {
                best = row;
            }
        }
        best
    }

    pub fn top_n(&self, metric: Metric, n: usize) -> Vec<&Row> {
        let rows = self.rows();
        let mut order: Vec<usize> = (0..rows.len()).collect();
        order.sort_by(|&a, &b| {
            rows[b]
                .value(metric)
                .total_cmp(&rows[a].value(metric))
                .then(a.cmp(&b))
        });
        order.truncate(n);
        order.into_iter().map(|index| &rows[index]).collect()
    }

    pub fn mean(&self, metric: Metric) -> f64 {
        let sum: f64 = self.rows().iter().map(|row| row.value(metric)).sum();
        sum / self.len() as f64
    }

    pub fn by_country(&self, name: &str) -> Option<&Row> {
        self.position(name).map(|index| &self.rows()[index])
    }

    // ascending, ties ordered by rank
    pub fn sorted_by(&self, metric: Metric) -> Vec<&Row> {
        let mut rows: Vec<&Row> = self.rows().iter().collect();
        rows.sort_by(|a, b| match a.value(metric).total_cmp(&b.value(metric)) {
            Ordering::Equal => a.rank.cmp(&b.rank),
            other => other,
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rank: u32, country: &str, score: f64, generosity: f64) -> Row {
        Row {
            rank,
            country: country.to_string(),
            score,
            gdp_per_capita: 1.0,
            social_support: 1.0,
            healthy_life_expectancy: 0.9,
            freedom: 0.5,
            generosity,
            corruption: 0.1,
        }
    }

    fn sample() -> Dataset {
        Dataset::from_rows(vec![
            row(3, "Norway", 7.554, 0.271),
            row(1, "Finland", 7.769, 0.153),
            row(2, "Denmark", 7.600, 0.271),
            row(4, "Iceland", 7.494, 0.354),
            row(5, "Netherlands", 7.488, 0.153),
        ])
        .unwrap()
    }

    #[test]
    fn extremum_bounds_every_row() {
        let dataset = sample();
        for metric in Metric::ALL {
            let max = dataset.extremum(metric, Direction::Max).value(metric);
            let min = dataset.extremum(metric, Direction::Min).value(metric);
            for row in dataset.rows() {
                assert!(max >= row.value(metric));
                assert!(min <= row.value(metric));
            }
        }
    }

    #[test]
    fn extremum_ties_pick_first_loaded() {
        let dataset = sample();
        assert_eq!(
            dataset.extremum(Metric::GdpPerCapita, Direction::Max).country,
            "Norway"
        );
        assert_eq!(
            dataset.extremum(Metric::Generosity, Direction::Min).country,
            "Finland"
        );
        assert_eq!(
            dataset.extremum(Metric::Score, Direction::Max).country,
            "Finland"
        );
    }

    #[test]
    fn top_n_is_descending_with_load_order_ties() {
        let dataset = sample();
        let top: Vec<&str> = dataset
            .top_n(Metric::Generosity, 3)
            .into_iter()
            .map(|row| row.country.as_str())
            .collect();
        assert_eq!(top, ["Iceland", "Norway", "Denmark"]);
    }

    #[test]
    fn top_n_returns_fewer_when_table_is_small() {
        let dataset = sample();
        assert_eq!(dataset.top_n(Metric::Score, 10).len(), 5);
        assert!(dataset.top_n(Metric::Score, 0).is_empty());
    }

    #[test]
    fn mean_is_sum_over_count() {
        let dataset = sample();
        let expected = (7.554 + 7.769 + 7.600 + 7.494 + 7.488) / 5.0;
        assert!((dataset.mean(Metric::Score) - expected).abs() < 1e-12);
    }

    #[test]
    fn by_country_is_exact() {
        let dataset = sample();
        assert_eq!(dataset.by_country("Finland").unwrap().rank, 1);
        assert!(dataset.by_country("finland").is_none());
        assert!(dataset.by_country("Atlantis").is_none());
    }

    #[test]
    fn sorted_by_breaks_ties_by_rank() {
        let dataset = sample();
        let order: Vec<u32> = dataset
            .sorted_by(Metric::Generosity)
            .into_iter()
            .map(|row| row.rank)
            .collect();
        assert_eq!(order, [1, 5, 2, 3, 4]);
    }
}
