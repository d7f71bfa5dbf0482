//! Incremental traveler/trip intake.
//!
//! State moves by value from one step controller to the next. A step can only be
//! turned into its successor when its completeness gate holds, so an incomplete
//! request cannot be assembled.

pub mod companions;
pub mod flow;
pub mod selection;
pub mod state;
pub mod steps;
pub mod trip;

pub use companions::{CompanionEntry, CompanionGroup};
pub use flow::{Screen, WizardFlow};
pub use selection::{RelationSelection, TagSet, ThemeSelection};
pub use state::{IncompleteWizard, ProfileDraft, TravelerProfile, WizardRules, WizardState};
pub use steps::{CompanionsStep, ProfileStep, ReviewStep, TripStep};
pub use trip::TripDuration;
