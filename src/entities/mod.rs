mod coordinates;
mod place;
mod route;
mod segment;

pub use coordinates::Coordinates;
pub use place::{PlaceCandidate, SearchCenter};
pub use route::{ComposedRoute, RouteDraft, RouteMetrics, SavedRoute, SavedRouteView};
pub use segment::RouteSegment;
