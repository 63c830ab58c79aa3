//! Daily podcast charts (`/chart_daily`).
//!
//! Every field of [`ChartsRequest`] is optional. Unset (or zero/empty) values fall back to
//! a limit of 10, country `us`, and a start date one week before today. "Today" is the local
//! date when the process can determine its UTC offset, the UTC date otherwise, and can be
//! pinned with [`ChartsRequest::today`]. Dates are rendered as `YYYY-M-D` without zero padding.

// crates.io
use time::{Date, Duration, OffsetDateTime};
// self
use crate::{_prelude::*, client::Client, query::Query};

/// Rank cutoff used when the caller does not set one.
pub const DEFAULT_CHART_LIMIT: u32 = 10;
/// Country used when the caller does not set one.
pub const DEFAULT_CHART_COUNTRY: &str = "us";
/// How far back the default start date lies.
pub const DEFAULT_CHART_LOOKBACK: Duration = Duration::days(7);

/// Parameters for [`Client::get_charts`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChartsRequest {
	/// First chart day; defaults to a week ago.
	pub start: Option<Date>,
	/// Highest rank to return (API maximum is 100); defaults to 10.
	pub limit: Option<u32>,
	/// Country code such as `us`, `gb`, `ie`, `nz`, or `za`; defaults to `us`.
	pub country: Option<String>,
	/// Reference day the default start date is computed from; defaults to the current date.
	pub today: Option<Date>,
}
impl ChartsRequest {
	/// Sets the first chart day.
	pub fn start(mut self, start: Date) -> Self {
		self.start = Some(start);

		self
	}

	/// Sets the rank cutoff.
	pub fn limit(mut self, limit: u32) -> Self {
		self.limit = Some(limit);

		self
	}

	/// Sets the country code.
	pub fn country(mut self, country: impl Into<String>) -> Self {
		self.country = Some(country.into());

		self
	}

	/// Pins the reference day used for the default start date.
	pub fn today(mut self, today: Date) -> Self {
		self.today = Some(today);

		self
	}

	/// Resolves defaults against `today` and renders the query in `limit, country, start_date`
	/// order.
	pub fn to_query(&self, today: Date) -> Query {
		let limit = self.limit.filter(|limit| *limit != 0).unwrap_or(DEFAULT_CHART_LIMIT);
		let country = self
			.country
			.as_deref()
			.filter(|country| !country.is_empty())
			.unwrap_or(DEFAULT_CHART_COUNTRY);
		let start = self.start.unwrap_or_else(|| default_start(today));

		Query::new()
			.with("limit", limit)
			.with("country", country)
			.with("start_date", format_chart_date(start))
	}
}

impl Client {
	/// Daily charts: `/chart_daily?limit={limit}&country={country}&start_date={start}`.
	pub async fn get_charts(&self, request: &ChartsRequest) -> Result<JsonValue> {
		let query = request.to_query(request.today.unwrap_or_else(current_date));

		self.dispatch("get_charts", "/chart_daily", Some(&query)).await
	}
}

/// Renders `date` as `YYYY-M-D` (no zero padding).
pub fn format_chart_date(date: Date) -> String {
	format!("{}-{}-{}", date.year(), u8::from(date.month()), date.day())
}

fn current_date() -> Date {
	OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()).date()
}

fn default_start(today: Date) -> Date {
	today.checked_sub(DEFAULT_CHART_LOOKBACK).unwrap_or(today)
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::date;
	// self
	use super::*;

	#[test]
	fn dates_render_without_padding() {
		assert_eq!(format_chart_date(date!(2024 - 03 - 08)), "2024-3-8");
		assert_eq!(format_chart_date(date!(2023 - 11 - 25)), "2023-11-25");
	}

	#[test]
	fn defaults_apply_when_nothing_is_set() {
		let query = ChartsRequest::default().to_query(date!(2024 - 03 - 05));

		assert_eq!(
			query.iter().collect::<Vec<_>>(),
			[("limit", "10"), ("country", "us"), ("start_date", "2024-2-27")]
		);
	}

	#[test]
	fn pinned_today_drives_default_start() {
		let request = ChartsRequest::default().today(date!(2024 - 03 - 05));

		assert_eq!(request.today, Some(date!(2024 - 03 - 05)));
		assert_eq!(
			request.to_query(request.today.unwrap_or_else(current_date)).get("start_date"),
			Some("2024-2-27")
		);
	}

	#[test]
	fn current_date_is_within_a_day_of_utc() {
		let utc = OffsetDateTime::now_utc().date();
		let today = current_date();

		assert!((today - utc).whole_days().abs() <= 1);
	}

	#[test]
	fn default_start_crosses_year_boundary() {
		let query = ChartsRequest::default().to_query(date!(2025 - 01 - 03));

		assert_eq!(query.get("start_date"), Some("2024-12-27"));
	}

	#[test]
	fn zero_limit_and_empty_country_fall_back_to_defaults() {
		let query = ChartsRequest::default().limit(0).country("").to_query(date!(2024 - 06 - 30));

		assert_eq!(query.get("limit"), Some("10"));
		assert_eq!(query.get("country"), Some("us"));
	}

	#[test]
	fn explicit_values_are_kept() {
		let query = ChartsRequest::default()
			.start(date!(2013 - 06 - 01))
			.limit(100)
			.country("gb")
			.to_query(date!(2024 - 06 - 30));

		assert_eq!(
			query.iter().collect::<Vec<_>>(),
			[("limit", "100"), ("country", "gb"), ("start_date", "2013-6-1")]
		);
	}
}
