#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod editor;
mod entry;
mod error;
mod exercise;
pub mod normalize;
mod resolve;
mod service;
mod template;
mod validation;
mod variant;

pub use editor::*;
pub use entry::*;
pub use error::*;
pub use exercise::*;
pub use normalize::{
    AmrapForm, CircuitForm, ClusterSetForm, CommonForm, DropSetForm, EmomForm, ExerciseForm,
    ForTimeForm, GiantSetForm, MemberForm, PreExhaustionForm, Raw, RestPauseForm, SetForm,
    StepForm, SupersetForm, TabataForm, VariantForm,
};
pub use resolve::*;
pub use service::*;
pub use template::*;
pub use validation::*;
pub use variant::*;
