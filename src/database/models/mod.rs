pub mod billboard;
pub mod category;
pub mod store;

pub use billboard::Billboard;
pub use category::Category;
pub use store::Store;
