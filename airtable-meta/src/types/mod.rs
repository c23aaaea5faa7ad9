//! Typed model of the Airtable schema surface.
//!
//! [`wire`] holds the serde transcriptions of upstream JSON; the public
//! types here are the validated in-memory model built from them.

mod create;
pub use create::{NewField, NewTable};

mod info;
pub use info::{
    BaseCollaborators, CollaboratorInfo, EmailDomain, EnterpriseInfo, ShareInfo, WorkspaceInfo,
};

mod schema;
pub use schema::{BaseSchema, FieldSchema, TableSchema, ViewSchema};

pub(crate) mod wire;
