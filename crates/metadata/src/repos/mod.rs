//! Repository traits for catalog metadata operations.

pub mod files;
pub mod inventories;
pub mod objects;
pub mod shelves;
pub mod trash;

pub use files::FileRepo;
pub use inventories::InventoryRepo;
pub use objects::ObjectRepo;
pub use shelves::ShelfRepo;
pub use trash::TrashRepo;
