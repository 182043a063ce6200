//! # Voyagent Core
//!
//! Domain types, traits, and error definitions for the Voyagent trip-planning
//! tool layer. This crate has **zero framework dependencies** — it defines the
//! domain model that all other crates implement against.
//!
//! ## Design Philosophy
//!
//! The LLM reasoning loop is an external collaborator: it sees the tool
//! definitions exposed here and invokes tools through the registry's dispatch
//! contract. Everything deterministic (catalog types, the payment gate, the
//! tool trait) lives inward of that boundary. Implementations live in their
//! respective crates; all crates depend inward on core.

pub mod catalog;
pub mod error;
pub mod message;
pub mod profile;
pub mod session;
pub mod tool;

// Re-export key types at crate root for ergonomics
pub use catalog::{Activity, Flight, Hotel, TravelClass};
pub use error::{DataError, Error, Result, ToolError};
pub use message::{Conversation, ConversationId, Message, Role};
pub use profile::{BlockedEvent, BudgetProfile, CalendarStatus, UserCalendar, UserPreferences};
pub use session::{BookingConfirmation, PaymentAuthorization, SessionContext};
pub use tool::{Tool, ToolCall, ToolDefinition, ToolRegistry, ToolResult};
