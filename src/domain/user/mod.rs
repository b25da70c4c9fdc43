//! User module - Directory accounts and the record projected from them.

mod directory_user;
mod record;

pub use directory_user::DirectoryUser;
pub use record::UserRecord;
