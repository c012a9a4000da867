/* 

This is intended to quickly import commonly used modules across
the crate.

@date: 19 Oct, 2026
*/

// Almost every module logs through tracing, so I'm adding it here
pub use tracing::{info, error, warn, debug};
pub use serde::{Deserialize};

pub use crate::json_parser::{*};
pub use crate::numeric::{*};
