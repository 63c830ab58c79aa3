//! Ordered query parameters forwarded to resource calls.

// self
use crate::_prelude::*;

/// Query parameters in insertion order. Duplicate keys are kept and sent as repeated pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Query(Vec<(String, String)>);
impl Query {
	/// Creates an empty parameter list.
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a parameter, rendering `value` with [`Display`].
	pub fn with(mut self, key: impl Into<String>, value: impl Display) -> Self {
		self.push(key, value);

		self
	}

	/// Appends a parameter in place.
	pub fn push(&mut self, key: impl Into<String>, value: impl Display) {
		self.0.push((key.into(), value.to_string()));
	}

	/// Returns the first value stored under `key`.
	pub fn get(&self, key: &str) -> Option<&str> {
		self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
	}

	/// Iterates over the pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
	}

	/// Number of pairs.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no pairs are present.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl<K, V> FromIterator<(K, V)> for Query
where
	K: Into<String>,
	V: Display,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
	{
		let mut query = Self::new();

		for (key, value) in iter {
			query.push(key, value);
		}

		query
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn preserves_insertion_order_and_renders_values() {
		let query = Query::new().with("limit", 10).with("country", "us").with("limit", 20);

		assert_eq!(query.len(), 3);
		assert_eq!(query.get("limit"), Some("10"));
		assert_eq!(
			query.iter().collect::<Vec<_>>(),
			[("limit", "10"), ("country", "us"), ("limit", "20")]
		);
	}

	#[test]
	fn collects_from_pairs() {
		let query = [("page", 2), ("size", 5)].into_iter().collect::<Query>();

		assert_eq!(query.get("size"), Some("5"));
		assert!(!query.is_empty());
		assert!(Query::new().is_empty());
	}
}
