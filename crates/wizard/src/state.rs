use shared::{
    domain::{AgeBand, Gender, Region},
    protocol::RecommendRequest,
};
use thiserror::Error;

use crate::{
    companions::CompanionGroup,
    selection::{RelationSelection, ThemeSelection},
    trip::TripDuration,
};

/// Which step gates are enforced beyond the fixed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WizardRules {
    pub require_relation: bool,
}

/// The unmet requirement that keeps a step from advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IncompleteWizard {
    #[error("gender, age band and destination must all be chosen")]
    Profile,
    #[error("at least one companion must be counted")]
    NoCompanions,
    #[error("at least one companion relation must be chosen")]
    NoRelation,
    #[error("trip must last at least one day")]
    NoDays,
    #[error("at least one theme must be chosen")]
    NoTheme,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProfileDraft {
    pub gender: Option<Gender>,
    pub age_band: Option<AgeBand>,
    pub destination: Option<Region>,
}

impl ProfileDraft {
    pub fn complete(&self) -> Option<TravelerProfile> {
        Some(TravelerProfile {
            gender: self.gender?,
            age_band: self.age_band?,
            destination: self.destination?,
        })
    }
}

/// A fully chosen screen-one profile. Revisiting the screen produces a new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelerProfile {
    pub gender: Gender,
    pub age_band: AgeBand,
    pub destination: Region,
}

/// Everything collected so far, threaded by value between steps.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WizardState {
    pub rules: WizardRules,
    pub profile: ProfileDraft,
    pub companions: CompanionGroup,
    pub relations: RelationSelection,
    pub themes: ThemeSelection,
    pub duration: TripDuration,
}

impl WizardState {
    pub fn with_rules(rules: WizardRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn check_profile(&self) -> Result<TravelerProfile, IncompleteWizard> {
        self.profile.complete().ok_or(IncompleteWizard::Profile)
    }

    pub fn check_companions(&self) -> Result<(), IncompleteWizard> {
        if self.companions.total_headcount() == 0 {
            return Err(IncompleteWizard::NoCompanions);
        }
        if self.rules.require_relation && self.relations.is_empty() {
            return Err(IncompleteWizard::NoRelation);
        }
        Ok(())
    }

    pub fn check_trip(&self) -> Result<(), IncompleteWizard> {
        if self.duration.days() < TripDuration::MIN {
            return Err(IncompleteWizard::NoDays);
        }
        if self.themes.is_empty() {
            return Err(IncompleteWizard::NoTheme);
        }
        Ok(())
    }

    /// Builds the wire request, checking every gate in screen order.
    pub fn assemble(&self) -> Result<RecommendRequest, IncompleteWizard> {
        let profile = self.check_profile()?;
        self.check_companions()?;
        self.check_trip()?;

        Ok(RecommendRequest {
            region: profile.destination.as_wire().to_string(),
            categories: self
                .themes
                .iter()
                .map(|theme| theme.as_wire().to_string())
                .collect(),
            gender: profile.gender.as_wire().to_string(),
            age: profile.age_band.as_wire().to_string(),
            days: self.duration.days(),
            companion_relations: self
                .relations
                .iter()
                .map(|relation| relation.as_wire().to_string())
                .collect(),
            companion_age_groups: self
                .companions
                .flatten()
                .into_iter()
                .map(|band| band.as_wire().to_string())
                .collect(),
        })
    }
}
