/// Factories for creating adapter instances
mod formatter_factory;

pub use formatter_factory::FormatterFactory;
