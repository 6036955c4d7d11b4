//! Destinations command: list the built-in registry entries.

use std::io::Write;

use roteiro_planner::DestinationRegistry;

use crate::CliError;

pub(super) fn run_destinations() -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    write_destinations(&DestinationRegistry::default(), &mut stdout)
}

/// Write one tab-separated line per registry entry, curated itineraries first.
pub(super) fn write_destinations(
    registry: &DestinationRegistry,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    for curated in registry.curated() {
        writeln!(
            writer,
            "curated\t{}\t{} days",
            curated.name(),
            curated.days().len()
        )
        .map_err(CliError::WriteOutput)?;
    }
    for pool_override in registry.overrides() {
        writeln!(
            writer,
            "pool-override\t{}\t{} sights, {} restaurants",
            pool_override.name(),
            pool_override.pois().len(),
            pool_override.restaurants().len()
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
