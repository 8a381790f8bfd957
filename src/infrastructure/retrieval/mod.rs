pub mod chroma;

pub use chroma::ChromaSearchStore;
