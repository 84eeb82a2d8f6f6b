pub mod jumpgate_system;
