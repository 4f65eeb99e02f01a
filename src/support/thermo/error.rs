use thiserror::Error;

/// Why a property model could not produce a propellant state.
///
/// Every variant carries the model's own description of the failure, which
/// the sizing error chain reports verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The model has no value for the requested property at this state,
    /// such as a single-phase density inside the saturation dome.
    #[error("property not defined here: {context}")]
    Undefined { context: String },

    /// Temperature or pressure lies outside the range the model covers.
    ///
    /// A constant-density liquid model reports inlet temperatures outside
    /// the liquid range this way.
    #[error("outside the model's range: {context}")]
    OutOfDomain { context: String },

    #[error("inconsistent state: {context}")]
    InvalidState { context: String },

    /// The backend failed for a reason it did not classify.
    #[error("property evaluation failed: {context}")]
    Calculation { context: String },
}
