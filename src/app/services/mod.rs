mod draft;
mod form;
mod key_value;
mod random;
mod scheduler;
mod translator;
mod transport;

pub use self::draft::*;
pub use self::form::*;
pub use self::key_value::*;
pub use self::random::*;
pub use self::scheduler::*;
pub use self::translator::*;
pub use self::transport::*;
