//! Screen controllers.
//!
//! Each controller owns the accumulated [`WizardState`] while its screen is shown.
//! `next` consumes the controller and yields the following one only when the
//! screen's gate holds; otherwise the unchanged controller is handed back.
//! `prev` never validates and carries every edit backwards.

use shared::{
    domain::{AgeBand, Gender, GroupId, Region, Relation, Theme},
    protocol::RecommendRequest,
};
use tracing::debug;

use crate::state::{TravelerProfile, WizardState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileStep {
    state: WizardState,
}

impl ProfileStep {
    pub fn enter(state: WizardState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn select_gender(&mut self, gender: Gender) {
        self.state.profile.gender = Some(gender);
    }

    pub fn select_age_band(&mut self, age_band: AgeBand) {
        self.state.profile.age_band = Some(age_band);
    }

    pub fn select_destination(&mut self, destination: Region) {
        self.state.profile.destination = Some(destination);
    }

    pub fn next_allowed(&self) -> bool {
        self.state.check_profile().is_ok()
    }

    pub fn next(self) -> Result<CompanionsStep, Self> {
        match self.state.check_profile() {
            Ok(profile) => {
                debug!(?profile, "profile step complete");
                Ok(CompanionsStep {
                    profile,
                    state: self.state,
                })
            }
            Err(reason) => {
                debug!(%reason, "profile step gate unmet");
                Err(self)
            }
        }
    }

    pub fn prev(self) -> WizardState {
        self.state
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanionsStep {
    profile: TravelerProfile,
    state: WizardState,
}

impl CompanionsStep {
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn profile(&self) -> TravelerProfile {
        self.profile
    }

    pub fn add_group(&mut self) -> GroupId {
        self.state.companions.add_group()
    }

    pub fn remove_group(&mut self, id: GroupId) -> bool {
        self.state.companions.remove_group(id)
    }

    pub fn set_age_band(&mut self, id: GroupId, age_band: AgeBand) -> bool {
        self.state.companions.set_age_band(id, age_band)
    }

    pub fn increment(&mut self, id: GroupId) -> Option<u32> {
        self.state.companions.increment(id)
    }

    pub fn decrement(&mut self, id: GroupId) -> Option<u32> {
        self.state.companions.decrement(id)
    }

    pub fn toggle_relation(&mut self, relation: Relation) -> bool {
        self.state.relations.toggle(relation)
    }

    pub fn next_allowed(&self) -> bool {
        self.state.check_companions().is_ok()
    }

    pub fn next(self) -> Result<TripStep, Self> {
        if let Err(reason) = self.state.check_companions() {
            debug!(%reason, "companions step gate unmet");
            return Err(self);
        }
        debug!(
            headcount = self.state.companions.total_headcount(),
            relations = self.state.relations.len(),
            "companions step complete"
        );
        Ok(TripStep {
            profile: self.profile,
            state: self.state,
        })
    }

    pub fn prev(self) -> ProfileStep {
        ProfileStep::enter(self.state)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripStep {
    profile: TravelerProfile,
    state: WizardState,
}

impl TripStep {
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn profile(&self) -> TravelerProfile {
        self.profile
    }

    pub fn toggle_theme(&mut self, theme: Theme) -> bool {
        self.state.themes.toggle(theme)
    }

    pub fn increase_days(&mut self) -> u32 {
        self.state.duration.increase()
    }

    pub fn decrease_days(&mut self) -> u32 {
        self.state.duration.decrease()
    }

    pub fn next_allowed(&self) -> bool {
        self.state.check_trip().is_ok()
    }

    pub fn next(self) -> Result<ReviewStep, Self> {
        match self.state.assemble() {
            Ok(request) => {
                debug!(
                    days = request.days,
                    themes = request.categories.len(),
                    "trip step complete"
                );
                Ok(ReviewStep {
                    profile: self.profile,
                    state: self.state,
                    request,
                })
            }
            Err(reason) => {
                debug!(%reason, "trip step gate unmet");
                Err(self)
            }
        }
    }

    pub fn prev(self) -> CompanionsStep {
        CompanionsStep {
            profile: self.profile,
            state: self.state,
        }
    }
}

/// The assembled request, ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewStep {
    profile: TravelerProfile,
    state: WizardState,
    request: RecommendRequest,
}

impl ReviewStep {
    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn request(&self) -> &RecommendRequest {
        &self.request
    }

    pub fn into_request(self) -> RecommendRequest {
        self.request
    }

    pub fn prev(self) -> TripStep {
        TripStep {
            profile: self.profile,
            state: self.state,
        }
    }
}

#[cfg(test)]
#[path = "tests/steps_tests.rs"]
mod tests;
