//! Client-side route-building workflow: the slot sequencer plus the map
//! capability it drives. The map widget is reached only through `MapSession`,
//! never through ambient global state.

mod slots;

pub use slots::{RoutePlanner, RouteSlot};

use async_trait::async_trait;

use crate::api::ResolverAPI;
use crate::entities::{ComposedRoute, PlaceCandidate, SearchCenter};
use crate::error::{insufficient_places_error, Error};

/// Capability handle over whatever renders the map: keyword search, the
/// current search center, and route display. Decoupled from any rendering
/// technology.
#[async_trait]
pub trait MapSession {
    async fn search(&self, keyword: &str) -> Result<Vec<PlaceCandidate>, Error>;

    fn center(&self) -> SearchCenter;

    fn show_route(&self, route: &ComposedRoute);

    fn clear(&self);
}

/// Runs a keyword search for one slot and records the transition. Returns
/// the candidates for the user to pick from. The slot is validated before
/// the map provider is called.
pub async fn search_slot<S>(
    planner: &mut RoutePlanner,
    session: &S,
    slot_id: u8,
    keyword: &str,
) -> Result<Vec<PlaceCandidate>, Error>
where
    S: MapSession + Sync + ?Sized,
{
    planner.ensure_searchable(slot_id)?;

    let candidates = session.search(keyword).await?;
    planner.record_search(slot_id, keyword)?;

    Ok(candidates)
}

/// Composes a route from the planner's first two saved slots and shows it on
/// the map. Requires two saved slots; the composition itself happens in the
/// resolver capability.
pub async fn build_route<A, S>(
    api: &A,
    session: &S,
    planner: &RoutePlanner,
    priority: Option<String>,
) -> Result<ComposedRoute, Error>
where
    A: ResolverAPI + Sync + ?Sized,
    S: MapSession + Sync + ?Sized,
{
    let (first, second) = planner.saved_pair().ok_or_else(insufficient_places_error)?;

    let route = api
        .compose_route(session.center(), vec![first, second], priority)
        .await?;

    session.show_route(&route);

    Ok(route)
}
