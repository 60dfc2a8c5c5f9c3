use crate::di::container::{AnyArc, CasterFn, FactoryFn, Provider, ServiceEntry, TraitMapping};
use crate::di::{Container, Injectable, Lifetime};
use crate::error::{ReportError, Result};
use crate::module::Module;
use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};

/// Builder for constructing a dependency injection container
///
/// Registrations are only accepted here; [`build`](Self::build) freezes them into
/// a [`Container`], which only resolves. Registering a type twice keeps the last
/// registration.
///
/// # Example
/// ```ignore
/// let container = ContainerBuilder::new()
///     .register(database_config)
///     .singleton::<LoggingEmailSender>()
///     .bind::<dyn EmailSender, LoggingEmailSender, _>(|i| i as Arc<dyn EmailSender>)
///     .build();
/// ```
pub struct ContainerBuilder {
    container: Container,
}

impl ContainerBuilder {
    pub fn new() -> Self {
        Self {
            container: Container::empty(),
        }
    }

    /// Register a ready-made instance. It is shared by every resolution.
    pub fn register<T: 'static + Send + Sync>(mut self, instance: T) -> Self {
        self.container.insert_service(
            TypeId::of::<T>(),
            ServiceEntry {
                type_name: std::any::type_name::<T>(),
                provider: Provider::Instance(Arc::new(instance)),
            },
        );
        self
    }

    /// Register `T` to be built from the container once, on first resolution.
    pub fn singleton<T: Injectable>(self) -> Self {
        self.factory(Lifetime::Singleton, T::inject)
    }

    /// Register `T` to be built from the container on every resolution.
    pub fn transient<T: Injectable>(self) -> Self {
        self.factory(Lifetime::Transient, T::inject)
    }

    /// Register a constructor closure under the given lifetime.
    pub fn factory<T, F>(mut self, lifetime: Lifetime, factory: F) -> Self
    where
        T: 'static + Send + Sync,
        F: Fn(&Container) -> Result<T> + 'static + Send + Sync,
    {
        tracing::debug!(
            service = std::any::type_name::<T>(),
            lifetime = %lifetime,
            "Registering factory"
        );
        let factory: FactoryFn =
            Arc::new(move |container: &Container| Ok(Arc::new(factory(container)?) as AnyArc));
        self.container.insert_service(
            TypeId::of::<T>(),
            ServiceEntry {
                type_name: std::any::type_name::<T>(),
                provider: Provider::Factory {
                    lifetime,
                    factory,
                    cached: OnceLock::new(),
                },
            },
        );
        self
    }

    /// Bind a trait to a concrete implementation
    ///
    /// Resolving `Arc<dyn Trait>` resolves `Impl` under its own lifetime and casts
    /// it. `Impl` may be registered before or after the binding.
    pub fn bind<Trait, Impl, F>(mut self, caster_fn: F) -> Self
    where
        Trait: ?Sized + 'static + Send + Sync,
        Impl: 'static + Send + Sync,
        F: Fn(Arc<Impl>) -> Arc<Trait> + 'static + Send + Sync,
    {
        let caster: CasterFn = Arc::new(move |instance: Arc<dyn Any + Send + Sync>| {
            let concrete = instance
                .downcast::<Impl>()
                .map_err(|_| ReportError::DowncastFailed {
                    type_name: std::any::type_name::<Impl>().to_string(),
                })?;
            let trait_obj: Arc<Trait> = caster_fn(concrete);
            Ok(Arc::new(trait_obj) as AnyArc)
        });

        self.container.insert_trait(
            TypeId::of::<Trait>(),
            TraitMapping {
                impl_id: TypeId::of::<Impl>(),
                impl_name: std::any::type_name::<Impl>(),
            },
            caster,
        );
        self
    }

    /// Apply a module's registrations
    pub fn install<M: Module>(self) -> Self {
        M::register(self)
    }

    /// Freeze the registrations into a resolvable container
    pub fn build(self) -> Container {
        tracing::debug!(
            services = self.container.len(),
            bindings = self.container.binding_count(),
            "Container built"
        );
        self.container
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
