use serde::{Deserialize, Serialize};

use crate::entities::PlaceCandidate;
use crate::error::{invalid_input_error, invalid_state_error, Error};

const MAX_SLOTS: usize = 3;

/// One ordered position in the route being built. A slot moves through
/// empty -> searched -> selected -> saved; once saved it is immutable for the
/// rest of the session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RouteSlot {
    pub id: u8,
    pub search_keyword: String,
    pub has_searched: bool,
    pub is_saved: bool,
    pub selected_place: Option<PlaceCandidate>,
}

impl RouteSlot {
    fn new(id: u8) -> Self {
        Self {
            id,
            search_keyword: String::new(),
            has_searched: false,
            is_saved: false,
            selected_place: None,
        }
    }
}

/// Sequencer for the route-building workflow: tracks up to three slots and
/// decides when enough of them are saved for composition.
#[derive(Clone, Debug)]
pub struct RoutePlanner {
    slots: Vec<RouteSlot>,
}

impl Default for RoutePlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl RoutePlanner {
    /// Starts with one empty slot, the way a fresh route form does.
    pub fn new() -> Self {
        Self {
            slots: vec![RouteSlot::new(1)],
        }
    }

    pub fn slots(&self) -> &[RouteSlot] {
        &self.slots
    }

    /// Adds the next slot, up to three total.
    pub fn add_slot(&mut self) -> Result<u8, Error> {
        if self.slots.len() >= MAX_SLOTS {
            return Err(invalid_state_error());
        }

        let id = self.slots.len() as u8 + 1;
        self.slots.push(RouteSlot::new(id));

        Ok(id)
    }

    fn slot_mut(&mut self, id: u8) -> Result<&mut RouteSlot, Error> {
        self.slots
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or_else(invalid_input_error)
    }

    /// Non-mutating check that a slot exists and can still take a search,
    /// so callers can validate before going out to the map provider.
    pub fn ensure_searchable(&self, id: u8) -> Result<(), Error> {
        let slot = self
            .slots
            .iter()
            .find(|slot| slot.id == id)
            .ok_or_else(invalid_input_error)?;

        if slot.is_saved {
            return Err(invalid_state_error());
        }

        Ok(())
    }

    /// Records a keyword search against a slot. Any pending selection is
    /// discarded; a saved slot cannot be searched again.
    pub fn record_search(&mut self, id: u8, keyword: &str) -> Result<(), Error> {
        self.ensure_searchable(id)?;

        let slot = self.slot_mut(id)?;

        slot.search_keyword = keyword.into();
        slot.has_searched = true;
        slot.selected_place = None;

        Ok(())
    }

    /// Picks a candidate for a slot. Re-selection overwrites the pending
    /// choice without limit until the slot is saved.
    pub fn select_place(&mut self, id: u8, place: PlaceCandidate) -> Result<(), Error> {
        let slot = self.slot_mut(id)?;

        if slot.is_saved {
            return Err(invalid_state_error());
        }
        if !slot.has_searched {
            return Err(invalid_state_error());
        }

        slot.selected_place = Some(place);

        Ok(())
    }

    /// Confirms a slot's selection. Irreversible within the session.
    pub fn save_slot(&mut self, id: u8) -> Result<(), Error> {
        let slot = self.slot_mut(id)?;

        if slot.is_saved || slot.selected_place.is_none() {
            return Err(invalid_state_error());
        }

        slot.is_saved = true;

        Ok(())
    }

    /// The two places a route is composed from: the first two saved slots by
    /// ascending id, regardless of how many slots exist.
    pub fn saved_pair(&self) -> Option<(PlaceCandidate, PlaceCandidate)> {
        let mut saved = self
            .slots
            .iter()
            .filter(|slot| slot.is_saved)
            .filter_map(|slot| slot.selected_place.clone());

        match (saved.next(), saved.next()) {
            (Some(first), Some(second)) => Some((first, second)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Coordinates;

    fn place(name: &str) -> PlaceCandidate {
        PlaceCandidate {
            name: name.into(),
            address: "".into(),
            coordinates: Coordinates {
                lat: 37.5665,
                lng: 126.9780,
            },
            phone: None,
            category: None,
        }
    }

    #[test]
    fn fourth_slot_is_rejected_without_mutation() {
        let mut planner = RoutePlanner::new();
        planner.add_slot().unwrap();
        planner.add_slot().unwrap();

        assert_eq!(planner.slots().len(), 3);
        assert!(planner.add_slot().is_err());
        assert_eq!(planner.slots().len(), 3);
    }

    #[test]
    fn saved_slot_is_immutable() {
        let mut planner = RoutePlanner::new();
        planner.record_search(1, "국밥").unwrap();
        planner.select_place(1, place("국밥집")).unwrap();
        planner.save_slot(1).unwrap();

        assert!(planner.record_search(1, "치킨").is_err());
        assert!(planner.select_place(1, place("치킨집")).is_err());
        assert!(planner.save_slot(1).is_err());

        let slot = &planner.slots()[0];
        assert_eq!(slot.selected_place.as_ref().unwrap().name, "국밥집");
        assert_eq!(slot.search_keyword, "국밥");
    }

    #[test]
    fn selection_requires_a_search_and_may_be_overwritten() {
        let mut planner = RoutePlanner::new();

        assert!(planner.select_place(1, place("a")).is_err());

        planner.record_search(1, "밥").unwrap();
        planner.select_place(1, place("a")).unwrap();
        planner.select_place(1, place("b")).unwrap();

        assert_eq!(
            planner.slots()[0].selected_place.as_ref().unwrap().name,
            "b"
        );
    }

    #[test]
    fn research_clears_pending_selection() {
        let mut planner = RoutePlanner::new();
        planner.record_search(1, "밥").unwrap();
        planner.select_place(1, place("a")).unwrap();
        planner.record_search(1, "면").unwrap();

        assert!(planner.slots()[0].selected_place.is_none());
        assert!(planner.save_slot(1).is_err());
    }

    #[test]
    fn saved_pair_takes_first_two_saved_by_id() {
        let mut planner = RoutePlanner::new();
        planner.add_slot().unwrap();
        planner.add_slot().unwrap();

        for (id, name) in [(1, "첫째"), (2, "둘째"), (3, "셋째")] {
            planner.record_search(id, name).unwrap();
            planner.select_place(id, place(name)).unwrap();
            planner.save_slot(id).unwrap();
        }

        let (first, second) = planner.saved_pair().unwrap();
        assert_eq!(first.name, "첫째");
        assert_eq!(second.name, "둘째");
    }

    #[test]
    fn saved_pair_requires_two_saved_slots() {
        let mut planner = RoutePlanner::new();
        assert!(planner.saved_pair().is_none());

        planner.record_search(1, "밥").unwrap();
        planner.select_place(1, place("a")).unwrap();
        planner.save_slot(1).unwrap();

        assert!(planner.saved_pair().is_none());
    }
}
