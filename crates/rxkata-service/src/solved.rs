//! Reference implementation of [`CountriesService`] built from stream operators.

use crate::config::ServiceConfig;
use crate::error::{KataError, Result};
use crate::operators::{default_if_empty, reduce};
use crate::service::CountriesService;
use async_stream::stream;
use async_trait::async_trait;
use futures::future::{self, FutureExt};
use futures::stream::{self, BoxStream, StreamExt};
use rxkata_core::{is_above, Country};
use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use tracing::{debug, warn};

/// Stateless query service; only carries its configuration.
#[derive(Clone, Debug, Default)]
pub struct CountriesServiceSolved {
    config: ServiceConfig,
}

impl CountriesServiceSolved {
    /// Create a service with the default threshold and fallbacks.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Any transformation error becomes the configured fallback.
    fn or_not_available(&self, transformed: Result<String>) -> String {
        transformed.unwrap_or_else(|err| {
            warn!(%err, "name transformation failed, using fallback");
            self.config.not_available.clone()
        })
    }
}

/// Runs `transform` on `name`, turning a panic inside it into [`KataError::Transform`].
async fn transform_name<F>(name: &str, transform: F) -> Result<String>
where
    F: FnOnce(&str) -> String,
{
    AssertUnwindSafe(async move { transform(name) })
        .catch_unwind()
        .await
        .map_err(|payload| KataError::Transform(panic_message(payload.as_ref())))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[async_trait]
impl CountriesService for CountriesServiceSolved {
    async fn name_in_capitals(&self, country: &Country) -> String {
        self.or_not_available(transform_name(&country.name, str::to_uppercase).await)
    }

    async fn count(&self, countries: &[Country]) -> usize {
        debug!(len = countries.len(), "count");
        stream::iter(countries)
            .fold(0usize, |n, _| future::ready(n + 1))
            .await
    }

    fn populations<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, u64> {
        debug!(len = countries.len(), "populations");
        stream::iter(countries).map(|c| c.population).boxed()
    }

    fn names<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, String> {
        debug!(len = countries.len(), "names");
        stream::iter(countries).map(|c| c.name.clone()).boxed()
    }

    fn third_and_fourth<'a>(&self, countries: &'a [Country]) -> Result<BoxStream<'a, Country>> {
        debug!(len = countries.len(), "third_and_fourth");
        // Indices 3 and 4 are zero-based; kept as-is.
        let pair = countries
            .get(3..5)
            .ok_or(KataError::IndexOutOfRange {
                index: countries.len().max(3),
                len: countries.len(),
            })?;
        Ok(stream::iter(pair.to_vec()).boxed())
    }

    async fn all_above_threshold(&self, countries: &[Country]) -> bool {
        debug!(len = countries.len(), "all_above_threshold");
        let threshold = self.config.population_threshold;
        stream::iter(countries)
            .all(|c| future::ready(is_above(c, threshold)))
            .await
    }

    fn filter_above_threshold<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, Country> {
        debug!(len = countries.len(), "filter_above_threshold");
        let threshold = self.config.population_threshold;
        stream::iter(countries)
            .filter(move |c| future::ready(is_above(c, threshold)))
            .map(Country::clone)
            .boxed()
    }

    fn filter_above_threshold_pending<'a, F, E>(&self, pending: F) -> BoxStream<'a, Result<Country>>
    where
        F: Future<Output = std::result::Result<Vec<Country>, E>> + Send + 'a,
        E: std::error::Error + Send + Sync + 'static,
    {
        let threshold = self.config.population_threshold;
        stream! {
            match pending.await {
                Ok(countries) => {
                    debug!(len = countries.len(), "filter_above_threshold_pending resolved");
                    for country in countries {
                        if is_above(&country, threshold) {
                            yield Ok(country);
                        }
                    }
                }
                Err(err) => {
                    debug!(%err, "filter_above_threshold_pending failed");
                    yield Err(KataError::Upstream(Box::new(err)));
                }
            }
        }
        .boxed()
    }

    fn currency_or_default<'a>(&self, name: &str, countries: &'a [Country]) -> BoxStream<'a, String> {
        debug!(len = countries.len(), country = name, "currency_or_default");
        let target = name.to_owned();
        let matches = stream::iter(countries)
            .filter(move |c| future::ready(c.name == target))
            .map(|c| c.currency.clone());
        default_if_empty(matches, self.config.default_currency.clone()).boxed()
    }

    fn sum_populations<'a>(&self, countries: &'a [Country]) -> BoxStream<'a, u64> {
        debug!(len = countries.len(), "sum_populations");
        reduce(self.populations(countries), u64::wrapping_add).boxed()
    }

    async fn name_to_population_map(&self, countries: &[Country]) -> HashMap<String, u64> {
        debug!(len = countries.len(), "name_to_population_map");
        self.names(countries)
            .zip(self.populations(countries))
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServiceConfigBuilder;
    use rxkata_core::fixtures::sample_countries;

    fn five() -> Vec<Country> {
        ["A", "B", "C", "D", "E"]
            .iter()
            .enumerate()
            .map(|(i, n)| Country::new(*n, i as u64, "XXX"))
            .collect()
    }

    #[tokio::test]
    async fn test_name_in_capitals() {
        let service = CountriesServiceSolved::new();
        let c = Country::new("Côte d'Ivoire", 1, "XOF");
        assert_eq!(service.name_in_capitals(&c).await, "CÔTE D'IVOIRE");
    }

    #[tokio::test]
    async fn test_name_in_capitals_blank_names() {
        let service = CountriesServiceSolved::new();
        assert_eq!(service.name_in_capitals(&Country::new("", 1, "XXX")).await, "");
        assert_eq!(service.name_in_capitals(&Country::new("   ", 1, "XXX")).await, "   ");
    }

    #[tokio::test]
    async fn test_transform_panic_becomes_error() {
        let result = transform_name("France", |_| panic!("no capitals today")).await;
        match result {
            Err(KataError::Transform(msg)) => assert_eq!(msg, "no capitals today"),
            other => panic!("expected Transform error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_failed_transform_uses_fallback() {
        let service = CountriesServiceSolved::new();
        let failed = transform_name("France", |name| panic!("cannot transform {}", name)).await;
        assert_eq!(service.or_not_available(failed), "[NOT AVAILABLE]");

        let ok = transform_name("France", str::to_uppercase).await;
        assert_eq!(service.or_not_available(ok), "FRANCE");
    }

    #[tokio::test]
    async fn test_count() {
        let service = CountriesServiceSolved::new();
        assert_eq!(service.count(&[]).await, 0);
        assert_eq!(service.count(&sample_countries()).await, sample_countries().len());
    }

    #[tokio::test]
    async fn test_third_and_fourth_is_zero_based() {
        let service = CountriesServiceSolved::new();
        let countries = five();
        let out: Vec<Country> = service
            .third_and_fourth(&countries)
            .unwrap()
            .collect()
            .await;
        assert_eq!(out, vec![countries[3].clone(), countries[4].clone()]);
    }

    #[test]
    fn test_third_and_fourth_short_input() {
        let service = CountriesServiceSolved::new();
        let countries = five();

        match service.third_and_fourth(&countries[..4]) {
            Err(KataError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 4);
                assert_eq!(len, 4);
            }
            _ => panic!("expected IndexOutOfRange"),
        }
        match service.third_and_fourth(&countries[..1]) {
            Err(KataError::IndexOutOfRange { index, len }) => {
                assert_eq!(index, 3);
                assert_eq!(len, 1);
            }
            _ => panic!("expected IndexOutOfRange"),
        };
    }

    #[tokio::test]
    async fn test_all_above_threshold() {
        let service = CountriesServiceSolved::new();
        assert!(service.all_above_threshold(&[]).await);
        assert!(
            service
                .all_above_threshold(&[Country::new("Big", 2_000_000, "B")])
                .await
        );
        assert!(
            !service
                .all_above_threshold(&[
                    Country::new("Big", 2_000_000, "B"),
                    Country::new("Edge", 1_000_000, "E"),
                ])
                .await
        );
    }

    #[tokio::test]
    async fn test_sum_wraps_on_overflow() {
        let service = CountriesServiceSolved::new();
        let countries = vec![
            Country::new("A", u64::MAX, "X"),
            Country::new("B", 2, "X"),
        ];
        let out: Vec<u64> = service.sum_populations(&countries).collect().await;
        assert_eq!(out, vec![1]);
    }

    #[tokio::test]
    async fn test_custom_config() {
        let config = ServiceConfigBuilder::new()
            .population_threshold(10)
            .not_available("n/a")
            .default_currency("EUR (default)")
            .build();
        let service = CountriesServiceSolved::with_config(config);
        let countries = vec![Country::new("Tiny", 11, "T"), Country::new("Tinier", 10, "T")];

        let kept: Vec<Country> = service.filter_above_threshold(&countries).collect().await;
        assert_eq!(kept, vec![countries[0].clone()]);
        assert_eq!(service.name_in_capitals(&Country::new("", 0, "T")).await, "");
        let failed = transform_name("Tiny", |_| panic!("broken")).await;
        assert_eq!(service.or_not_available(failed), "n/a");

        let currency: Vec<String> = service
            .currency_or_default("Atlantis", &countries)
            .collect()
            .await;
        assert_eq!(currency, vec!["EUR (default)".to_string()]);
    }

    #[test]
    fn test_names_block_on() {
        let service = CountriesServiceSolved::new();
        let countries = sample_countries();
        let names: Vec<String> = tokio_test::block_on(service.names(&countries).collect());
        assert_eq!(names.len(), countries.len());
        assert_eq!(names[0], "Germany");
    }
}
