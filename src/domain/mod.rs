pub mod branch;
pub mod change_type;
pub mod record;
