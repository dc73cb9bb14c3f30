pub mod ext;

pub use ext::ExtensionFilter;
