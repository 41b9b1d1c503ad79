pub mod filter;
pub mod plural;
pub mod search;
