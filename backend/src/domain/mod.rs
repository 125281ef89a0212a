//! Domain primitives, ports and services.
//!
//! Purpose: keep the user model and its use-cases free of transport and
//! storage concerns. Inbound adapters call the driving ports; outbound
//! adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - TraceId: request-scoped correlation identifier.
//! - User, UserId, UserDraft, UserChanges: the user entity and field sets.
//! - UserService: implementation of the driving ports.

pub mod error;
pub mod ports;
mod trace_id;
pub mod user;
mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{USER_ID_LEN, User, UserChanges, UserDraft, UserId, UserValidationError};
pub use self::user_service::UserService;
