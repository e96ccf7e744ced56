#[macro_use]
pub mod if_dbg_else;
pub use self::if_dbg_else::*;
#[macro_use]
pub mod verify;
pub use self::verify::*;
#[macro_use]
pub mod if_then;
pub use self::if_then::*;
#[macro_use]
pub mod staticvalue;
pub use self::staticvalue::*;
pub mod logging;
pub use self::logging::{debug, error, info, trace, warn};
