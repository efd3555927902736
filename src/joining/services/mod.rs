mod text_composer;

pub use text_composer::TextComposer;
