//! Typed ARI operation definitions
//!
//! One module per ARI resource; one file per endpoint (or per small group of
//! closely related endpoints). Each operation couples a request type, a
//! response type, and the path/query construction for the call.

pub mod bridges;
pub mod playbacks;
pub mod recordings;
