//! Grouped aggregation over calendar-derived keys.
//!
//! Groups are reported in the natural order of the key domain (hour 0..23,
//! month 1..12, weekday before weekend, labels alphabetically), not in
//! insertion order; empty groups are omitted rather than reported as NAN.

use crate::core::Series;
use chrono::{Datelike, Timelike, Weekday};
use std::collections::BTreeMap;

/// Weekday-versus-weekend partition key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Classify a chrono weekday.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }
}

fn grouped_means<K: Ord>(series: &Series, key: impl Fn(usize) -> K) -> Vec<(K, f64)> {
    let mut sums: BTreeMap<K, (f64, usize)> = BTreeMap::new();
    for (i, value) in series.values().iter().enumerate() {
        let entry = sums.entry(key(i)).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(k, (sum, count))| (k, sum / count as f64))
        .collect()
}

/// Mean value for weekdays versus weekend days.
pub fn day_type_means(series: &Series) -> Vec<(DayType, f64)> {
    grouped_means(series, |i| {
        DayType::from_weekday(series.timestamps()[i].weekday())
    })
}

/// Mean value per hour of day (0..=23), ascending.
pub fn hourly_means(series: &Series) -> Vec<(u32, f64)> {
    grouped_means(series, |i| series.timestamps()[i].hour())
}

/// Mean value per calendar month (1..=12), ascending.
pub fn monthly_means(series: &Series) -> Vec<(u32, f64)> {
    grouped_means(series, |i| series.timestamps()[i].month())
}

/// Mean value per energy-source label, alphabetically.
pub fn source_means(series: &Series) -> Vec<(String, f64)> {
    grouped_means(series, |i| series.sources()[i].clone())
}

/// Total value per energy-source label, largest producer first.
pub fn source_totals(series: &Series) -> Vec<(String, f64)> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for (i, value) in series.values().iter().enumerate() {
        *totals.entry(series.sources()[i].clone()).or_insert(0.0) += value;
    }
    let mut totals: Vec<(String, f64)> = totals.into_iter().collect();
    totals.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    totals
}

/// Mean value per (weekday, hour) cell: 7 rows Monday..Sunday, 24 columns.
#[derive(Debug, Clone)]
pub struct HourWeekdayMatrix {
    means: [[f64; 24]; 7],
}

impl HourWeekdayMatrix {
    /// Mean for a cell; `NAN` when no observation fell into it.
    pub fn mean(&self, weekday: Weekday, hour: u32) -> f64 {
        self.means[weekday.num_days_from_monday() as usize][hour as usize]
    }

    /// Row for one weekday, indexed by hour.
    pub fn row(&self, weekday: Weekday) -> &[f64; 24] {
        &self.means[weekday.num_days_from_monday() as usize]
    }
}

/// Compute the hour-of-day by day-of-week mean matrix.
pub fn hour_weekday_matrix(series: &Series) -> HourWeekdayMatrix {
    let mut sums = [[0.0f64; 24]; 7];
    let mut counts = [[0usize; 24]; 7];

    for (i, value) in series.values().iter().enumerate() {
        let ts = series.timestamps()[i];
        let row = ts.weekday().num_days_from_monday() as usize;
        let col = ts.hour() as usize;
        sums[row][col] += value;
        counts[row][col] += 1;
    }

    let mut means = [[f64::NAN; 24]; 7];
    for row in 0..7 {
        for col in 0..24 {
            if counts[row][col] > 0 {
                means[row][col] = sums[row][col] / counts[row][col] as f64;
            }
        }
    }
    HourWeekdayMatrix { means }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SeriesBuilder;
    use approx::assert_relative_eq;
    use chrono::{TimeZone, Utc};

    // 2024-01-01 is a Monday.
    fn hourly_series(hours: usize, value: impl Fn(usize) -> f64) -> Series {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut builder = SeriesBuilder::with_capacity(hours);
        for i in 0..hours {
            builder.push(base + chrono::Duration::hours(i as i64), value(i), "unknown");
        }
        builder.build().unwrap()
    }

    #[test]
    fn hourly_means_cover_natural_order() {
        // Two full days where the value equals the hour of day.
        let series = hourly_series(48, |i| (i % 24) as f64);
        let means = hourly_means(&series);

        assert_eq!(means.len(), 24);
        for (hour, mean) in &means {
            assert_relative_eq!(*mean, *hour as f64, epsilon = 1e-10);
        }
        let hours: Vec<u32> = means.iter().map(|(h, _)| *h).collect();
        assert_eq!(hours, (0..24).collect::<Vec<u32>>());
    }

    #[test]
    fn day_type_means_split_weekend() {
        // One full week starting Monday: weekdays 10.0, weekend 50.0.
        let series = hourly_series(7 * 24, |i| if i / 24 < 5 { 10.0 } else { 50.0 });
        let means = day_type_means(&series);

        assert_eq!(means.len(), 2);
        assert_eq!(means[0].0, DayType::Weekday);
        assert_relative_eq!(means[0].1, 10.0, epsilon = 1e-10);
        assert_eq!(means[1].0, DayType::Weekend);
        assert_relative_eq!(means[1].1, 50.0, epsilon = 1e-10);
    }

    #[test]
    fn monthly_means_use_calendar_months() {
        // January and February observations, one month boundary crossed.
        let base = Utc.with_ymd_and_hms(2024, 1, 31, 22, 0, 0).unwrap();
        let mut builder = SeriesBuilder::new();
        for i in 0..4 {
            let v = if i < 2 { 10.0 } else { 30.0 };
            builder.push(base + chrono::Duration::hours(i), v, "unknown");
        }
        let series = builder.build().unwrap();

        let means = monthly_means(&series);
        assert_eq!(means, vec![(1, 10.0), (2, 30.0)]);
    }

    #[test]
    fn source_groups_are_ordered() {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut builder = SeriesBuilder::new();
        builder.push(base, 10.0, "wind");
        builder.push(base + chrono::Duration::hours(1), 20.0, "solar");
        builder.push(base + chrono::Duration::hours(2), 30.0, "wind");
        let series = builder.build().unwrap();

        let means = source_means(&series);
        assert_eq!(means[0].0, "solar");
        assert_eq!(means[1].0, "wind");
        assert_relative_eq!(means[1].1, 20.0, epsilon = 1e-10);

        // Totals come largest-first instead.
        let totals = source_totals(&series);
        assert_eq!(totals[0], ("wind".to_string(), 40.0));
        assert_eq!(totals[1], ("solar".to_string(), 20.0));
    }

    #[test]
    fn matrix_has_nan_for_empty_cells() {
        // A single Monday hour leaves the rest of the matrix empty.
        let series = hourly_series(1, |_| 5.0);
        let matrix = hour_weekday_matrix(&series);

        assert_relative_eq!(matrix.mean(Weekday::Mon, 0), 5.0, epsilon = 1e-10);
        assert!(matrix.mean(Weekday::Mon, 1).is_nan());
        assert!(matrix.mean(Weekday::Sun, 0).is_nan());
        assert_eq!(matrix.row(Weekday::Tue).len(), 24);
    }
}
