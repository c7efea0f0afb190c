


/// Load-use stalls.
pub mod load_use;
