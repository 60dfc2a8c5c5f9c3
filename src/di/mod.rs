mod builder;
mod container;
mod injectable;
mod lifetime;

pub use builder::ContainerBuilder;
pub use container::Container;
pub use injectable::Injectable;
pub use lifetime::Lifetime;
