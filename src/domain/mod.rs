//! Domain primitives and services for account registration.
//!
//! Purpose: Define strongly typed domain entities used by the HTTP and
//! persistence layers. Keep types immutable and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `SignupDetails`: validated signup input with its validation error.
//! - `User`: the persisted user record returned to clients.
//! - `RegistrationService`: the insert-and-classify core service.
//! - `ports`: collaborator interfaces (user store, metrics sink).

pub mod error;
pub mod ports;
pub mod registration;
pub mod signup;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::registration::RegistrationService;
pub use self::signup::{NAME_MAX_CHARS, SignupDetails, SignupValidationError};
pub use self::user::User;
