use anyhow::Context;

/// Seed resolution order: `CAUSEWAY_SEED` env var, first CLI argument, then
/// a random seed. The chosen seed is logged so any board can be replayed.
fn resolve_seed() -> anyhow::Result<u64> {
    if let Ok(value) = std::env::var("CAUSEWAY_SEED") {
        return value
            .parse()
            .with_context(|| format!("CAUSEWAY_SEED is not a number: {value:?}"));
    }
    if let Some(value) = std::env::args().nth(1) {
        return value
            .parse()
            .with_context(|| format!("seed argument is not a number: {value:?}"));
    }
    Ok(rand::random())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let seed = resolve_seed()?;
    causeway::app(seed)?.run()
}
