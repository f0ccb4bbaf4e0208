//! The country query service abstraction.

use crate::error::Result;
use async_trait::async_trait;
use futures::stream::BoxStream;
use rxkata_core::Country;
use std::collections::HashMap;
use std::future::Future;

/// Queries over an ordered, caller-owned list of countries.
///
/// Single-valued queries are `async`; multi-valued queries return a
/// stream that preserves the input order. No method mutates its input.
#[async_trait]
pub trait CountriesService: Send + Sync {
    /// Upper-cased country name, or the configured fallback if the name
    /// cannot be transformed. Never fails.
    async fn name_in_capitals(&self, country: &Country) -> String;

    /// Number of countries.
    async fn count(&self, countries: &[Country]) -> usize;

    /// Population of each country.
    fn populations<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, u64>;

    /// Name of each country.
    fn names<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, String>;

    /// The countries at zero-based indices 3 and 4.
    ///
    /// Fails with [`KataError::IndexOutOfRange`](crate::KataError::IndexOutOfRange)
    /// before building the stream when fewer than five countries are given.
    fn third_and_fourth<'a>(&self, countries: &'a [Country]) -> Result<BoxStream<'a, Country>>;

    /// True if every country is above the population threshold (true for none).
    async fn all_above_threshold(&self, countries: &[Country]) -> bool;

    /// Only the countries above the population threshold.
    fn filter_above_threshold<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, Country>;

    /// Waits for `pending` and then filters its countries like
    /// [`filter_above_threshold`](Self::filter_above_threshold).
    ///
    /// A failed computation is emitted as a single `Err` and ends the stream.
    fn filter_above_threshold_pending<'a, F, E>(&self, pending: F) -> BoxStream<'a, Result<Country>>
    where
        F: Future<Output = std::result::Result<Vec<Country>, E>> + Send + 'a,
        E: std::error::Error + Send + Sync + 'static;

    /// Currencies of every country called `name`, or the default currency
    /// once if there is no such country.
    fn currency_or_default<'a>(&self, name: &str, countries: &'a [Country]) -> BoxStream<'a, String>;

    /// Sum of all populations. Empty input yields an empty stream, not zero.
    fn sum_populations<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, u64>;

    /// Name to population; the last duplicate name wins.
    async fn name_to_population_map(&self, countries: &[Country]) -> HashMap<String, u64>;
}
