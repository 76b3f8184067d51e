pub mod client;
pub mod error;
pub mod model;

pub use client::AccountsApi;
pub use error::{AccountsError, ErrorKind};
pub use model::{NewUser, Phone, User, UserPatch};
