use anyhow::{anyhow, Result};
use log::warn;

/// Size the global Rayon thread pool to a validated worker count.
///
/// A pool that was already built (e.g. by an earlier command in the same
/// process) is left as-is.
pub fn set_rayon_global_pools_size(size: usize) -> Result<()> {
    let cpus = determine_allowed_cpus(size)?;
    if let Err(err) = rayon::ThreadPoolBuilder::new()
        .num_threads(cpus)
        .build_global()
    {
        warn!("Global thread pool already initialised: {}", err);
    }
    Ok(())
}

/// Validate a requested worker count against the host.
pub fn determine_allowed_cpus(desired: usize) -> Result<usize> {
    if desired == 0 {
        return Err(anyhow!("Thread count must be greater than zero"));
    }
    if desired > num_cpus::get() {
        warn!(
            "Requested {} threads but only {} CPUs are available",
            desired,
            num_cpus::get()
        );
    }
    Ok(desired)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_threads_rejected() {
        assert!(determine_allowed_cpus(0).is_err());
    }

    #[test]
    fn test_reasonable_thread_count_passes_through() {
        assert_eq!(determine_allowed_cpus(1).unwrap(), 1);
    }
}
