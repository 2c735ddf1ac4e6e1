pub mod check;
pub mod clipboard;
pub mod error;
pub mod fetch;
pub mod links;
pub mod normalize;
pub mod page;
pub mod reconcile;
pub mod token;
