//! Forecast normalizer
//!
//! Reshapes a [`RawForecastPayload`] into a [`DisplayWeather`]: zips the daily
//! parallel arrays into day records, classifies every weather code and scales
//! the week chart. Temperatures and wind speed pass through unrounded.

use crate::chart::WeekChart;
use crate::classifier::{classify, icon_for};
use crate::entities::{
    CurrentReadings, DayForecast, DisplayWeather, RawForecastPayload, ResolvedPlace,
};
use crate::errors::DomainError;
use crate::value_objects::{Humidity, WindSpeed};

/// Number of days in a weekly forecast
pub const WEEK_LENGTH: usize = 7;

/// Normalize a raw forecast for `place`
///
/// # Errors
///
/// Returns [`DomainError::MalformedPayload`] when the daily arrays differ in
/// length, do not hold exactly [`WEEK_LENGTH`] days, have dates that are not
/// strictly increasing, or when the humidity is out of range.
pub fn normalize(
    place: ResolvedPlace,
    raw: RawForecastPayload,
) -> Result<DisplayWeather, DomainError> {
    let RawForecastPayload { current, daily } = raw;

    let [dates, max_temps, min_temps, codes] = daily.lengths();
    if dates != max_temps || dates != min_temps || dates != codes {
        return Err(DomainError::malformed(format!(
            "daily arrays disagree: {dates} dates, {max_temps} max temps, \
             {min_temps} min temps, {codes} weather codes"
        )));
    }
    if dates != WEEK_LENGTH {
        return Err(DomainError::malformed(format!(
            "expected {WEEK_LENGTH} daily entries, got {dates}"
        )));
    }
    if !daily.dates.windows(2).all(|pair| pair[0] < pair[1]) {
        return Err(DomainError::malformed(
            "daily dates are not strictly increasing",
        ));
    }

    let humidity =
        Humidity::new(current.humidity).map_err(|e| DomainError::malformed(e.to_string()))?;

    let week = daily
        .dates
        .iter()
        .zip(&daily.max_temps)
        .zip(&daily.min_temps)
        .zip(&daily.weather_codes)
        .map(|(((&date, &max_temp_c), &min_temp_c), &code)| DayForecast {
            date,
            max_temp_c,
            min_temp_c,
            icon: icon_for(code),
        })
        .collect();

    let chart = WeekChart::scale(&daily.max_temps, &daily.min_temps);

    Ok(DisplayWeather {
        place,
        current: CurrentReadings {
            temp_c: current.temperature,
            feels_like_c: current.apparent_temperature.unwrap_or(current.temperature),
            humidity,
            wind_speed: WindSpeed::from_kmh(current.wind_speed_kmh),
        },
        condition: classify(current.weather_code),
        week,
        chart,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{Days, NaiveDate};

    use super::*;
    use crate::IconCategory;
    use crate::chart::{FALLBACK_RANGE, MIN_BAR_HEIGHT};
    use crate::entities::{RawCurrent, RawDailySeries};
    use crate::value_objects::GeoLocation;

    fn place() -> ResolvedPlace {
        ResolvedPlace::new(
            "Lisboa",
            Some("PT".to_string()),
            GeoLocation::new(38.7, -9.1).unwrap(),
        )
    }

    fn week_from(start: NaiveDate) -> Vec<NaiveDate> {
        (0..7).map(|i| start + Days::new(i)).collect()
    }

    fn sample_payload() -> RawForecastPayload {
        RawForecastPayload {
            current: RawCurrent {
                temperature: 18.0,
                apparent_temperature: Some(17.4),
                humidity: 72,
                weather_code: 61,
                wind_speed_kmh: 10.8,
            },
            daily: RawDailySeries {
                dates: week_from(NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()),
                max_temps: vec![21.0, 22.5, 19.0, 18.2, 20.0, 23.1, 24.0],
                min_temps: vec![14.0, 15.2, 13.0, 12.5, 13.8, 15.0, 16.1],
                weather_codes: vec![61, 3, 0, 45, 80, 95, 71],
            },
        }
    }

    #[test]
    fn normalizes_seven_aligned_days() {
        let weather = normalize(place(), sample_payload()).unwrap();

        assert_eq!(weather.week.len(), WEEK_LENGTH);
        assert!(weather.week.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(weather.chart.bars.len(), WEEK_LENGTH);

        let icons: Vec<_> = weather.week.iter().map(|d| d.icon).collect();
        assert_eq!(
            icons,
            vec![
                IconCategory::HeavyRain,
                IconCategory::Cloudy,
                IconCategory::Clear,
                IconCategory::Fog,
                IconCategory::HeavyRain,
                IconCategory::Thunderstorm,
                IconCategory::Snow,
            ]
        );
        assert!((weather.week[1].max_temp_c - 22.5).abs() < f64::EPSILON);
        assert!((weather.week[3].min_temp_c - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn keeps_current_values_unrounded() {
        let weather = normalize(place(), sample_payload()).unwrap();

        assert!((weather.current.temp_c - 18.0).abs() < f64::EPSILON);
        assert!((weather.current.feels_like_c - 17.4).abs() < f64::EPSILON);
        assert!((weather.current.wind_speed.kmh() - 10.8).abs() < f64::EPSILON);
        assert_eq!(weather.current.wind_speed.rounded_kmh(), 11);
        assert_eq!(weather.current.humidity.value(), 72);
    }

    #[test]
    fn classifies_current_code() {
        let weather = normalize(place(), sample_payload()).unwrap();
        assert_eq!(weather.condition.code, 61);
        assert_eq!(weather.condition.description, "chuva leve");
        assert_eq!(weather.condition.icon, IconCategory::HeavyRain);
    }

    #[test]
    fn feels_like_falls_back_to_air_temperature() {
        let mut raw = sample_payload();
        raw.current.apparent_temperature = None;
        let weather = normalize(place(), raw).unwrap();
        assert!((weather.current.feels_like_c - 18.0).abs() < f64::EPSILON);
    }

    #[test]
    fn flat_week_does_not_divide_by_zero() {
        let mut raw = sample_payload();
        raw.daily.max_temps = vec![20.0; 7];
        raw.daily.min_temps = vec![20.0; 7];

        let weather = normalize(place(), raw).unwrap();
        assert!((weather.chart.range_c - FALLBACK_RANGE).abs() < f64::EPSILON);
        for bar in &weather.chart.bars {
            assert!(bar.max.is_finite() && bar.max >= MIN_BAR_HEIGHT);
            assert!(bar.min.is_finite() && bar.min >= 0.0);
        }
    }

    #[test]
    fn mismatched_lengths_are_malformed() {
        let mut raw = sample_payload();
        raw.daily.weather_codes.pop();

        let err = normalize(place(), raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPayload(_)));
        assert!(err.to_string().contains("6 weather codes"));
    }

    #[test]
    fn short_week_is_malformed() {
        let mut raw = sample_payload();
        raw.daily.dates.pop();
        raw.daily.max_temps.pop();
        raw.daily.min_temps.pop();
        raw.daily.weather_codes.pop();

        let err = normalize(place(), raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPayload(_)));
    }

    #[test]
    fn unordered_dates_are_malformed() {
        let mut raw = sample_payload();
        raw.daily.dates.swap(2, 3);

        let err = normalize(place(), raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPayload(_)));
    }

    #[test]
    fn out_of_range_humidity_is_malformed() {
        let mut raw = sample_payload();
        raw.current.humidity = 140;

        let err = normalize(place(), raw).unwrap_err();
        assert!(matches!(err, DomainError::MalformedPayload(_)));
    }
}
