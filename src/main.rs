use futures::StreamExt;
use rxkata_core::fixtures::sample_countries;
use rxkata_service::{CountriesService, CountriesServiceSolved};
use stress_test::{stress_test_aggregates, stress_test_pending, stress_test_scaling};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async_main())?;
    Ok(())
}

async fn async_main() -> rxkata_service::Result<()> {
    let service = CountriesServiceSolved::new();
    let countries = sample_countries();

    println!("\n╔════════════════════════════════════════════════════════════╗");
    println!("║            COUNTRY QUERIES                                  ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    for country in &countries {
        println!("  {}", country);
    }

    println!("\nName in capitals:   {}", service.name_in_capitals(&countries[0]).await);
    println!("Count:              {}", service.count(&countries).await);

    let populations: Vec<u64> = service.populations(&countries).collect().await;
    println!("Populations:        {:?}", populations);

    let names: Vec<String> = service.names(&countries).collect().await;
    println!("Names:              {:?}", names);

    let pair: Vec<String> = service
        .third_and_fourth(&countries)?
        .map(|c| c.name)
        .collect()
        .await;
    println!("Indices 3 and 4:    {:?}", pair);

    println!("All above 1M:       {}", service.all_above_threshold(&countries).await);

    let large: Vec<String> = service
        .filter_above_threshold(&countries)
        .map(|c| c.name)
        .collect()
        .await;
    println!("Above 1M:           {:?}", large);

    let remote = tokio::spawn(async { sample_countries() });
    let mut pending = service.filter_above_threshold_pending(remote);
    let mut from_task = vec![];
    while let Some(country) = pending.next().await {
        from_task.push(country?.name);
    }
    println!("Above 1M (task):    {:?}", from_task);

    let euro: Vec<String> = service.currency_or_default("Malta", &countries).collect().await;
    let atlantis: Vec<String> = service.currency_or_default("Atlantis", &countries).collect().await;
    println!("Currency of Malta:  {:?}", euro);
    println!("Currency Atlantis:  {:?}", atlantis);

    let sum: Vec<u64> = service.sum_populations(&countries).collect().await;
    println!("Total population:   {:?}", sum);

    let map = service.name_to_population_map(&countries).await;
    println!("Name → population:  {} entries", map.len());

    info!("country queries completed");

    // Run async stress tests
    println!("\n\n╔════════════════════════════════════════════════════════════╗");
    println!("║            ASYNC STRESS TESTS                               ║");
    println!("╚════════════════════════════════════════════════════════════╝");

    let stats = stress_test_pending(4, 1_000).await;
    stats.print();

    let stats = stress_test_aggregates(10, 1_000).await;
    stats.print();

    stress_test_scaling(16, 4).await;

    println!("\n✓ All stress tests completed successfully!");
    Ok(())
}
