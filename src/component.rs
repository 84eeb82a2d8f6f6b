pub mod jumpgate;
pub mod transform3d;
