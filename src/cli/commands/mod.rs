pub mod lookup;
pub mod net;
pub mod scan;
