use crate::{
    engine::resolver::Resolver,
    entities::{ComposedRoute, PlaceCandidate, SearchCenter},
    error::{insufficient_places_error, route_not_found_error, Error},
};

/// Chains the resolver across consecutive hops (center -> place1 -> place2)
/// and aggregates totals. Hops are resolved one after another; the segment
/// list order is structural, not a product of completion order.
pub async fn compose(
    resolver: &Resolver,
    search_center: &SearchCenter,
    places: &[PlaceCandidate],
    priority: Option<&str>,
) -> Result<ComposedRoute, Error> {
    if places.len() != 2 {
        return Err(insufficient_places_error());
    }

    let mut segments = Vec::with_capacity(places.len());
    let mut from_name = search_center.name.as_str();
    let mut from = search_center.coordinates;

    for place in places {
        let segment = resolver
            .resolve(from_name, &place.name, from, place.coordinates, priority)
            .await
            // A hop that cannot be resolved at all sinks the whole
            // composition; no partial route is returned.
            .map_err(|_| route_not_found_error())?;

        segments.push(segment);
        from_name = place.name.as_str();
        from = place.coordinates;
    }

    let total_distance_meters = segments.iter().map(|s| s.distance_meters).sum();
    let total_duration_seconds = segments.iter().map(|s| s.duration_seconds).sum();
    let total_toll_cost = segments.iter().map(|s| s.toll_cost).sum();
    let is_estimated = segments.iter().any(|s| s.is_estimated);

    Ok(ComposedRoute {
        search_center: search_center.clone(),
        places: places.to_vec(),
        segments,
        total_distance_meters,
        total_duration_seconds,
        total_toll_cost,
        is_estimated,
    })
}
