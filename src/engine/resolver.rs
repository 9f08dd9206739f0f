use std::sync::Arc;

use crate::{
    entities::{Coordinates, RouteSegment},
    error::{self, Error},
    external::directions::DirectionsProvider,
};

pub const DEFAULT_PRIORITY: &str = "RECOMMEND";

/// Resolves one hop through the directions provider. Provider failure is the
/// one self-healing path in the system: it degrades to a straight-line
/// estimate instead of erroring, so the caller always gets a renderable
/// segment while the provider is down.
pub struct Resolver {
    provider: Arc<dyn DirectionsProvider + Send + Sync>,
}

impl Resolver {
    pub fn new(provider: Arc<dyn DirectionsProvider + Send + Sync>) -> Self {
        Self { provider }
    }

    #[tracing::instrument(skip(self))]
    pub async fn resolve(
        &self,
        from: &str,
        to: &str,
        origin: Coordinates,
        destination: Coordinates,
        priority: Option<&str>,
    ) -> Result<RouteSegment, Error> {
        origin.validate()?;
        destination.validate()?;

        let priority = priority.unwrap_or(DEFAULT_PRIORITY);

        match self.provider.fetch_route(origin, destination, priority).await {
            Ok(route) => {
                let path = if route.path.is_empty() {
                    vec![origin, destination]
                } else {
                    route.path
                };

                Ok(RouteSegment {
                    from: from.into(),
                    to: to.into(),
                    distance_meters: route.distance_meters,
                    duration_seconds: route.duration_seconds,
                    toll_cost: route.toll_cost,
                    path,
                    is_estimated: false,
                })
            }
            // The provider answered and had nothing: no fallback, the caller
            // decides what an empty result means.
            Err(err) if err.code == error::ROUTE_NOT_FOUND => Err(err),
            Err(err) => {
                tracing::warn!(code = err.code, "directions provider failed, estimating");
                Ok(RouteSegment::estimate(from, to, origin, destination))
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::error::{route_not_found_error, upstream_error};
    use crate::external::directions::ProviderRoute;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub enum StubBehavior {
        Route(ProviderRoute),
        NoRoute,
        Failure,
    }

    pub struct StubProvider {
        pub behavior: StubBehavior,
        pub calls: AtomicUsize,
    }

    impl StubProvider {
        pub fn new(behavior: StubBehavior) -> Self {
            Self {
                behavior,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl DirectionsProvider for StubProvider {
        async fn fetch_route(
            &self,
            _origin: Coordinates,
            _destination: Coordinates,
            _priority: &str,
        ) -> Result<ProviderRoute, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);

            match &self.behavior {
                StubBehavior::Route(route) => Ok(route.clone()),
                StubBehavior::NoRoute => Err(route_not_found_error()),
                StubBehavior::Failure => Err(upstream_error()),
            }
        }
    }

    const ORIGIN: Coordinates = Coordinates {
        lat: 37.5665,
        lng: 126.9780,
    };
    const DESTINATION: Coordinates = Coordinates {
        lat: 37.6665,
        lng: 126.9780,
    };

    #[test]
    fn provider_route_is_passed_through() {
        tokio_test::block_on(async {
            let provider = Arc::new(StubProvider::new(StubBehavior::Route(ProviderRoute {
                distance_meters: 12000.0,
                duration_seconds: 1500,
                toll_cost: 2000,
                path: vec![ORIGIN, DESTINATION],
            })));
            let resolver = Resolver::new(provider.clone());

            let segment = resolver
                .resolve("a", "b", ORIGIN, DESTINATION, None)
                .await
                .unwrap();

            assert!(!segment.is_estimated);
            assert_eq!(segment.distance_meters, 12000.0);
            assert_eq!(segment.duration_seconds, 1500);
            assert_eq!(segment.toll_cost, 2000);
            assert_eq!(provider.call_count(), 1);
        });
    }

    #[test]
    fn empty_provider_polyline_falls_back_to_endpoints() {
        tokio_test::block_on(async {
            let provider = Arc::new(StubProvider::new(StubBehavior::Route(ProviderRoute {
                distance_meters: 12000.0,
                duration_seconds: 1500,
                toll_cost: 0,
                path: vec![],
            })));
            let resolver = Resolver::new(provider);

            let segment = resolver
                .resolve("a", "b", ORIGIN, DESTINATION, None)
                .await
                .unwrap();

            assert_eq!(segment.path, vec![ORIGIN, DESTINATION]);
            assert!(!segment.is_estimated);
        });
    }

    #[test]
    fn provider_failure_yields_estimate_never_error() {
        tokio_test::block_on(async {
            let provider = Arc::new(StubProvider::new(StubBehavior::Failure));
            let resolver = Resolver::new(provider);

            let segment = resolver
                .resolve("a", "b", ORIGIN, DESTINATION, None)
                .await
                .unwrap();

            assert!(segment.is_estimated);
            assert_eq!(segment.duration_seconds, 2082);
            assert_eq!(segment.toll_cost, 1000);
        });
    }

    #[test]
    fn zero_candidate_routes_propagate_route_not_found() {
        tokio_test::block_on(async {
            let provider = Arc::new(StubProvider::new(StubBehavior::NoRoute));
            let resolver = Resolver::new(provider);

            let err = resolver
                .resolve("a", "b", ORIGIN, DESTINATION, None)
                .await
                .unwrap_err();

            assert_eq!(err.code, error::ROUTE_NOT_FOUND);
        });
    }

    #[test]
    fn invalid_coordinates_make_no_outbound_call() {
        tokio_test::block_on(async {
            let provider = Arc::new(StubProvider::new(StubBehavior::Failure));
            let resolver = Resolver::new(provider.clone());

            let err = resolver
                .resolve(
                    "a",
                    "b",
                    Coordinates {
                        lat: f64::NAN,
                        lng: 126.9780,
                    },
                    DESTINATION,
                    None,
                )
                .await
                .unwrap_err();

            assert_eq!(err.code, error::INVALID_INPUT);
            assert_eq!(provider.call_count(), 0);
        });
    }
}
