use dropchance_shared::result::AggregateResult;

/// Prints the empirical rate, with the elapsed time in the coarsest unit
/// that keeps the displayed value at or above one.
pub fn print_results(result: &AggregateResult) {
    let micros = result.elapsed.as_micros();
    let rate = result.success_rate();
    if micros > 10_000_000 {
        println!(
            "Average drop chance: {:.4}% found in {} seconds",
            rate,
            micros / 1_000_000
        );
    } else if micros > 10_000 {
        println!(
            "Average drop chance: {:.4}% found in {} milliseconds",
            rate,
            micros / 1_000
        );
    } else {
        println!(
            "Average drop chance: {:.4}% found in {} microseconds",
            rate, micros
        );
    }
}
