use super::{prelude::*, LocationResolver};
use std::collections::{HashMap, HashSet};

/// Counts the talks per location and resolves every distinct
/// location exactly once.
///
/// The result is ordered by first occurrence. Excluded and empty
/// locations are neither counted nor resolved. Locations without
/// coordinates are counted but omitted from the result.
pub fn aggregate_locations<G, P>(
    records: &[Record],
    excluded: &HashSet<String>,
    resolver: &LocationResolver<G, P>,
) -> Result<Vec<ResolvedLocation>>
where
    G: GeoCodingGateway,
    P: Pause,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut resolved = vec![];

    for location in records.iter().filter_map(|r| r.location.as_deref()) {
        if location.is_empty() || excluded.contains(location) {
            continue;
        }
        let count = counts.entry(location).or_default();
        *count += 1;
        if *count > 1 {
            continue;
        }
        log::info!("Processing: {location}");
        if let Some(pos) = resolver.resolve(location)? {
            resolved.push(ResolvedLocation::new(location, pos));
        }
    }

    for loc in &mut resolved {
        if let Some(count) = counts.get(loc.name.as_str()) {
            loc.count = *count;
        }
    }
    Ok(resolved)
}
