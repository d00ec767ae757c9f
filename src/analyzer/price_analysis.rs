use crate::analyzer::date_format::{format_date, DateFormatOptions, DEFAULT_LOCALE};
use crate::model::{
    DailyRow, DailyStat, FormatError, PriceRow, PriceSeries, Region, RegionReport, VolatilityRow,
    HOURS_PER_DAY,
};
use tracing::debug;

/// Relative change between consecutive prices: `|p[i] - p[i-1]| / p[i-1]`.
///
/// A zero previous price is not special-cased, so the result carries
/// `inf` (or `NaN` for `0 -> 0`) in that slot.
pub fn calculate_volatility(prices: &[f64]) -> Vec<f64> {
    prices
        .windows(2)
        .map(|w| (w[1] - w[0]).abs() / w[0])
        .collect()
}

/// Low, high and mean per block of 24 consecutive samples. The last block may
/// be shorter and is still reported.
pub fn calculate_daily_stats(prices: &[f64]) -> Vec<DailyStat> {
    prices.chunks(HOURS_PER_DAY).map(window_stat).collect()
}

fn window_stat(window: &[f64]) -> DailyStat {
    let low = window.iter().copied().fold(f64::INFINITY, f64::min);
    let high = window.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let average = window.iter().sum::<f64>() / window.len() as f64;
    DailyStat { low, high, average }
}

/// Price of the latest sample not after `now`.
pub fn current_price(series: &PriceSeries, now: i64) -> Option<f64> {
    series
        .timestamps()
        .iter()
        .zip(series.prices())
        .take_while(|(ts, _)| **ts <= now)
        .last()
        .map(|(_, price)| *price)
}

/// Trait defining the interface for a price series analyzer.
pub trait Analyzer {
    fn analyze(
        &self,
        region: &Region,
        series: &PriceSeries,
        now: i64,
    ) -> Result<RegionReport, FormatError>;
}

pub struct AnalyzerImpl {
    locale: String,
    date_options: DateFormatOptions,
}

impl AnalyzerImpl {
    pub fn new(locale: impl Into<String>, date_options: DateFormatOptions) -> Self {
        Self {
            locale: locale.into(),
            date_options,
        }
    }

    fn label(&self, timestamp: i64) -> Result<String, FormatError> {
        format_date(timestamp, Some(&self.locale), Some(&self.date_options))
    }
}

impl Default for AnalyzerImpl {
    fn default() -> Self {
        Self::new(DEFAULT_LOCALE, DateFormatOptions::default())
    }
}

impl Analyzer for AnalyzerImpl {
    /// Builds the hourly, daily and volatility tables for one region.
    /// Daily rows are labelled by the first timestamp of each 24-sample block,
    /// volatility rows by the later sample of each pair.
    fn analyze(
        &self,
        region: &Region,
        series: &PriceSeries,
        now: i64,
    ) -> Result<RegionReport, FormatError> {
        let timestamps = series.timestamps();
        let prices = series.prices();

        let hourly = timestamps
            .iter()
            .zip(prices)
            .map(|(&timestamp, &price)| {
                Ok(PriceRow {
                    label: self.label(timestamp)?,
                    timestamp,
                    price,
                })
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        let daily = series
            .daily_timestamps()
            .into_iter()
            .zip(calculate_daily_stats(prices))
            .map(|(timestamp, stat)| {
                Ok(DailyRow {
                    label: self.label(timestamp)?,
                    timestamp,
                    stat,
                })
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        let volatility = timestamps
            .iter()
            .skip(1)
            .zip(calculate_volatility(prices))
            .map(|(&timestamp, change)| {
                Ok(VolatilityRow {
                    label: self.label(timestamp)?,
                    timestamp,
                    change,
                })
            })
            .collect::<Result<Vec<_>, FormatError>>()?;

        debug!(
            "Analyzed {}: {} samples, {} days",
            region.code,
            series.len(),
            daily.len()
        );

        Ok(RegionReport {
            region: *region,
            unit: series.unit().map(str::to_string),
            current_price: current_price(series, now),
            hourly,
            daily,
            volatility,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::date_format::DateStyle;

    /// 2021-10-01T00:00:00Z
    const OCT_1_2021: i64 = 1_633_046_400;

    fn hourly_series(prices: Vec<f64>) -> PriceSeries {
        let timestamps = (0..prices.len() as i64)
            .map(|h| OCT_1_2021 + h * 3600)
            .collect();
        PriceSeries::new(timestamps, prices).unwrap()
    }

    #[test]
    fn test_volatility_short_inputs() {
        assert!(calculate_volatility(&[]).is_empty());
        assert!(calculate_volatility(&[100.0]).is_empty());
    }

    #[test]
    fn test_volatility_zero_base_is_infinite() {
        let v = calculate_volatility(&[0.0, 100.0, 200.0]);
        assert_eq!(v, vec![f64::INFINITY, 1.0]);
    }

    #[test]
    fn test_volatility_zero_to_zero_is_nan() {
        let v = calculate_volatility(&[0.0, 0.0, 5.0]);
        assert_eq!(v.len(), 2);
        assert!(v[0].is_nan());
        assert_eq!(v[1], f64::INFINITY);
    }

    #[test]
    fn test_volatility_negative_base_keeps_sign() {
        // |diff| over a negative previous price stays negative.
        assert_eq!(calculate_volatility(&[-10.0, -5.0, 5.0]), vec![-0.5, -2.0]);
    }

    #[test]
    fn test_volatility_length_and_values() {
        let prices = [50.0, 75.0, 60.0, 60.0, 30.0];
        let v = calculate_volatility(&prices);
        assert_eq!(v.len(), prices.len() - 1);
        assert_eq!(v, vec![0.5, 0.2, 0.0, 0.5]);
    }

    #[test]
    fn test_daily_stats_empty() {
        assert!(calculate_daily_stats(&[]).is_empty());
    }

    #[test]
    fn test_daily_stats_partial_window() {
        assert_eq!(
            calculate_daily_stats(&[100.0, 110.0, 120.0, 130.0]),
            vec![DailyStat { low: 100.0, high: 130.0, average: 115.0 }]
        );
    }

    #[test]
    fn test_daily_stats_identical_values() {
        assert_eq!(
            calculate_daily_stats(&[100.0; 24]),
            vec![DailyStat { low: 100.0, high: 100.0, average: 100.0 }]
        );
    }

    #[test]
    fn test_daily_stats_ascending_day() {
        let prices: Vec<f64> = (1..=24).map(|i| (i * 10) as f64).collect();
        assert_eq!(
            calculate_daily_stats(&prices),
            vec![DailyStat { low: 10.0, high: 240.0, average: 125.0 }]
        );
    }

    #[test]
    fn test_daily_stats_count_is_ceil() {
        for n in [1usize, 23, 24, 25, 48, 49, 100] {
            let prices = vec![1.0; n];
            assert_eq!(calculate_daily_stats(&prices).len(), n.div_ceil(24), "n = {n}");
        }
    }

    #[test]
    fn test_daily_stats_negative_prices() {
        let mut prices = vec![5.0; 24];
        prices[3] = -12.0;
        prices.extend([-1.0, -3.0]);
        let stats = calculate_daily_stats(&prices);
        assert_eq!(stats[0].low, -12.0);
        assert_eq!(stats[0].high, 5.0);
        assert_eq!(stats[1], DailyStat { low: -3.0, high: -1.0, average: -2.0 });
    }

    #[test]
    fn test_functions_do_not_touch_input() {
        let prices = vec![10.0, 20.0, 5.0];
        let first = (calculate_volatility(&prices), calculate_daily_stats(&prices));
        let second = (calculate_volatility(&prices), calculate_daily_stats(&prices));
        assert_eq!(first, second);
        assert_eq!(prices, vec![10.0, 20.0, 5.0]);
    }

    #[test]
    fn test_current_price() {
        let series = hourly_series(vec![10.0, 20.0, 30.0]);
        assert_eq!(current_price(&series, OCT_1_2021 - 1), None);
        assert_eq!(current_price(&series, OCT_1_2021), Some(10.0));
        assert_eq!(current_price(&series, OCT_1_2021 + 3600 + 59), Some(20.0));
        assert_eq!(current_price(&series, OCT_1_2021 + 100_000), Some(30.0));
        assert_eq!(current_price(&hourly_series(vec![]), OCT_1_2021), None);
    }

    #[test]
    fn test_analyze_builds_labelled_rows() {
        let region = Region { name: "France", code: "FR" };
        let prices: Vec<f64> = (0..30).map(|h| 50.0 + h as f64).collect();
        let series = hourly_series(prices).with_unit(Some("EUR / MWh".into()));
        let analyzer = AnalyzerImpl::new(
            "en-US",
            DateFormatOptions {
                style: DateStyle::Custom("%m-%d %H:%M".into()),
                utc_offset_minutes: 0,
            },
        );

        let report = analyzer.analyze(&region, &series, OCT_1_2021 + 2 * 3600).unwrap();

        assert_eq!(report.region, region);
        assert_eq!(report.unit.as_deref(), Some("EUR / MWh"));
        assert_eq!(report.current_price, Some(52.0));
        assert_eq!(report.hourly.len(), 30);
        assert_eq!(report.hourly[0].label, "10-01 00:00");

        assert_eq!(report.daily.len(), 2);
        assert_eq!(report.daily[1].label, "10-02 00:00");
        assert_eq!(report.daily[1].stat.low, 74.0);
        assert_eq!(report.daily[1].stat.high, 79.0);

        assert_eq!(report.volatility.len(), 29);
        assert_eq!(report.volatility[0].label, "10-01 01:00");
        assert_eq!(report.volatility[0].change, 1.0 / 50.0);
    }

    #[test]
    fn test_analyze_propagates_format_errors() {
        let region = Region { name: "France", code: "FR" };
        let analyzer = AnalyzerImpl::new("zz-ZZ", DateFormatOptions::default());
        let err = analyzer
            .analyze(&region, &hourly_series(vec![1.0]), OCT_1_2021)
            .unwrap_err();
        assert_eq!(err, FormatError::UnknownLocale("zz-ZZ".into()));
    }
}
