mod optimus_error;
pub use self::optimus_error::*;
mod domain;
pub use self::domain::*;
mod primality;
pub use self::primality::*;
mod mod_inverse;
pub use self::mod_inverse::*;
mod optimus;
pub use self::optimus::*;
