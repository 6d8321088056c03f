#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod alternative;
mod calm;
mod catalog;
mod engine;
pub mod equipment;
mod error;
mod feedback;
mod goal;
mod matcher;
mod plan;
mod prescription;
mod service;

pub use alternative::{
    AlternativeContext, AlternativeDetails, AlternativeSuggestion, ConfidenceAlternative,
    RowSelector, apply_alternative, resolve_alternative,
};
pub use calm::{EquipmentAccess, MovementCategory, Requirement, calm_exercises, calm_row_count};
pub use catalog::{
    BODYWEIGHT, Catalog, CatalogEntry, ExerciseRecord, Intimidation, MovementPattern,
};
pub use engine::{PlanEngine, PlanRequest};
pub use equipment::{NormalizedSelection, normalize};
pub use error::{CatalogError, ReadError, RequestError, StorageError, WriteError};
pub use feedback::{
    Adjustment, AdjustmentRepository, AdjustmentState, Feedback, FeedbackRepository,
    FeedbackSession, PERCENT_LIMIT, PERCENT_STEP, REP_LIMIT, REP_STEP, Selection,
};
pub use goal::{Experience, Goal};
pub use matcher::{CandidateFilter, find_candidates};
pub use plan::{
    ConfidenceTag, ErrorReason, FallbackTier, ModeLabel, PlanMetadata, PlanPayload, PlanRepository,
    PlanRow, PlanSummary, RowID, summarize,
};
pub use prescription::{
    GENERIC_LOAD, LiftFamily, OneRepMax, OneRepMaxError, OneRepMaxes, PrescriptionContext,
    STEADY_LOAD, WeightUnit, build_row, duration, is_time_based, shift_rep_range,
};
pub use service::Service;
