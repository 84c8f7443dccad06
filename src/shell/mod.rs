// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in memory event store and wire it into the use case handlers.
// - Expose the HTTP router to the binary in main.rs.

pub mod config;
pub mod http;
pub mod logging;
pub mod state;
