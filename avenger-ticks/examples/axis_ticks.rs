use avenger_ticks::{NumberDomain, TickConfig, TickStrategy};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Axis Tick Examples ===\n");

    let domains = [
        NumberDomain::new(0.0, 100.0),
        NumberDomain::new(-10.0, 100.0),
        NumberDomain::new(1.33, 7.9),
        NumberDomain::new(100.0, 0.0),
        NumberDomain::new(5.0, 5.0),
        NumberDomain::new(f64::NEG_INFINITY, 5.0),
    ];

    let strategies = [
        TickStrategy::Nice,
        TickStrategy::FixedDomain,
        TickStrategy::Interval,
    ];

    for strategy in strategies {
        println!("{strategy}:");
        let config = TickConfig::new().with_strategy(strategy);
        for domain in &domains {
            let ticks = config.ticks(*domain)?;
            println!("  [{}, {}] → {:?}", domain.min, domain.max, ticks);
        }
        println!();
    }

    // Integer-only ticks for a narrow domain
    let config = TickConfig::new().with_tick_count(5).with_allow_decimals(false);
    println!("Integer ticks for [0, 1]: {:?}", config.ticks((0.0, 1.0))?);

    Ok(())
}
