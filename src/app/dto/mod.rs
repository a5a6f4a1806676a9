mod alert;
mod draft;
mod field;
mod form;
mod submission;

pub use self::alert::*;
pub use self::draft::*;
pub use self::field::*;
pub use self::form::*;
pub use self::submission::*;
