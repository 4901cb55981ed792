use double::report::analyse;
use double::utils::{init_logging, Config};

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let config = Config::from_env()?;
    if let Some(threads) = config.threads {
        maybe_rayon::configure_threads(threads)?;
    }
    tracing::info!(
        threads = maybe_rayon::current_num_threads(),
        "checking {} groups",
        config.groups.len()
    );

    let mut failures = 0;
    for &spec in &config.groups {
        match analyse(spec) {
            Ok(report) => {
                println!("{report}");
                println!();
                if config.json {
                    println!("{}", serde_json::to_string(&report)?);
                }
            }
            Err(e) => {
                tracing::error!(group = %spec, "{e}");
                failures += 1;
            }
        }
    }

    if failures > 0 {
        anyhow::bail!("{failures} of {} groups failed", config.groups.len());
    }
    Ok(())
}
