pub mod model;
pub mod operations;

pub use model::{CompositionForm, Enumerator, Model, ModelKind, UNKNOWN};
pub use operations::{
    HttpMethod, ModelIr, Operation, OperationError, OperationParameter, OperationResponse,
    ParameterLocation, Service,
};
