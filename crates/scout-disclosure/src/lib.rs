//! Information-disclosure requests (정보공개 청구) for awarded projects.
//!
//! Two pieces: building a ticket with the rendered request text and the
//! statutory due date, and parsing the chat-style command that asks for one
//! against a previously ranked result set.

pub mod command;
pub mod ticket;

pub use command::{CommandReply, handle_command, is_disclosure_command, select_target};
pub use ticket::open_ticket;
