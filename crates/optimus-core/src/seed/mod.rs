mod prime_source;
pub use self::prime_source::*;
mod prime_search;
pub use self::prime_search::*;
mod prime_list;
pub use self::prime_list::*;
mod seed_generator;
pub use self::seed_generator::*;
