mod id_encoder;
pub use self::id_encoder::*;
mod optimus_id_encoder;
pub use self::optimus_id_encoder::*;
mod prefixed_id_encoder;
pub use self::prefixed_id_encoder::*;
