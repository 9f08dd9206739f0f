use super::Engine;

use async_trait::async_trait;

use crate::{
    api::PlaceSearchAPI,
    entities::{Coordinates, PlaceCandidate},
    error::{invalid_input_error, Error},
    external::kakao_local,
};

#[async_trait]
impl PlaceSearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn search_places(
        &self,
        keyword: String,
        center: Coordinates,
        radius: Option<f64>,
    ) -> Result<Vec<PlaceCandidate>, Error> {
        if keyword.trim().is_empty() {
            return Err(invalid_input_error());
        }
        center.validate()?;

        kakao_local::search_keyword(keyword.trim(), center, radius).await
    }
}
