mod scaffold_store;

pub use scaffold_store::ScaffoldStore;
