use crate::di::Lifetime;
use crate::error::{ReportError, Result};
use dashmap::DashMap;
use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock};
use std::thread::{self, ThreadId};

pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

/// Builds a service on demand. The inner value is an `Arc<Impl>` erased to `Arc<dyn Any>`.
pub(crate) type FactoryFn = Arc<dyn Fn(&Container) -> Result<AnyArc> + Send + Sync>;

/// Turns an erased `Arc<Impl>` into an erased `Arc<Arc<dyn Trait>>`.
pub(crate) type CasterFn = Arc<dyn Fn(AnyArc) -> Result<AnyArc> + Send + Sync>;

pub(crate) enum Provider {
    Instance(AnyArc),
    Factory {
        lifetime: Lifetime,
        factory: FactoryFn,
        cached: OnceLock<AnyArc>,
    },
}

pub(crate) struct ServiceEntry {
    pub(crate) type_name: &'static str,
    pub(crate) provider: Provider,
}

#[derive(Clone, Copy)]
pub(crate) struct TraitMapping {
    pub(crate) impl_id: TypeId,
    pub(crate) impl_name: &'static str,
}

/// Built, read-only dependency injection container.
///
/// A `Container` is only obtained from [`ContainerBuilder::build`](crate::ContainerBuilder::build),
/// so every registration happens before the first resolution.
pub struct Container {
    services: DashMap<TypeId, Arc<ServiceEntry>>,
    trait_mappings: DashMap<TypeId, TraitMapping>,
    casters: DashMap<TypeId, CasterFn>,
    // Factories under construction, per thread, in resolution order.
    in_flight: DashMap<ThreadId, Vec<(TypeId, &'static str)>>,
}

impl Container {
    pub(crate) fn empty() -> Self {
        Self {
            services: DashMap::new(),
            trait_mappings: DashMap::new(),
            casters: DashMap::new(),
            in_flight: DashMap::new(),
        }
    }

    pub(crate) fn insert_service(&mut self, type_id: TypeId, entry: ServiceEntry) {
        self.services.insert(type_id, Arc::new(entry));
    }

    pub(crate) fn insert_trait(&mut self, trait_id: TypeId, mapping: TraitMapping, caster: CasterFn) {
        self.trait_mappings.insert(trait_id, mapping);
        self.casters.insert(trait_id, caster);
    }

    /// Resolve a concrete service registered under its own type.
    pub fn resolve<T: 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let instance = self.resolve_erased(TypeId::of::<T>(), std::any::type_name::<T>())?;
        instance
            .downcast::<T>()
            .map_err(|_| ReportError::DowncastFailed {
                type_name: std::any::type_name::<T>().to_string(),
            })
    }

    /// Resolve a capability bound with [`ContainerBuilder::bind`](crate::ContainerBuilder::bind).
    pub fn resolve_trait<T: ?Sized + 'static + Send + Sync>(&self) -> Result<Arc<T>> {
        let trait_id = TypeId::of::<T>();

        let caster = self
            .casters
            .get(&trait_id)
            .map(|c| Arc::clone(c.value()))
            .ok_or_else(|| {
                tracing::debug!(capability = std::any::type_name::<T>(), "No binding registered");
                ReportError::not_registered::<T>()
            })?;

        let mapping = *self
            .trait_mappings
            .get(&trait_id)
            .ok_or_else(ReportError::not_registered::<T>)?;

        let instance = self.resolve_erased(mapping.impl_id, mapping.impl_name)?;

        // The caster hands back an Arc<dyn Any> holding an Arc<T>
        let wrapper = caster(instance)?
            .downcast::<Arc<T>>()
            .map_err(|_| ReportError::DowncastFailed {
                type_name: format!("Arc<{}>", std::any::type_name::<T>()),
            })?;
        Ok(wrapper.as_ref().clone())
    }

    pub fn contains<T: ?Sized + 'static>(&self) -> bool {
        let type_id = TypeId::of::<T>();
        self.services.contains_key(&type_id) || self.trait_mappings.contains_key(&type_id)
    }

    /// Number of registered concrete services (trait bindings excluded).
    pub fn len(&self) -> usize {
        self.services.len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    pub(crate) fn binding_count(&self) -> usize {
        self.trait_mappings.len()
    }

    fn resolve_erased(&self, type_id: TypeId, type_name: &'static str) -> Result<AnyArc> {
        // Clone the entry out so no map guard is held while a factory runs
        let entry = self
            .services
            .get(&type_id)
            .map(|e| Arc::clone(e.value()))
            .ok_or_else(|| {
                tracing::debug!(capability = type_name, "No service registered");
                ReportError::CapabilityNotRegistered {
                    type_name: type_name.to_string(),
                }
            })?;

        match &entry.provider {
            Provider::Instance(instance) => Ok(Arc::clone(instance)),
            Provider::Factory {
                lifetime: Lifetime::Transient,
                factory,
                ..
            } => self.construct(type_id, entry.type_name, factory),
            Provider::Factory {
                lifetime: Lifetime::Singleton,
                factory,
                cached,
            } => {
                if let Some(instance) = cached.get() {
                    return Ok(Arc::clone(instance));
                }
                let instance = self.construct(type_id, entry.type_name, factory)?;
                Ok(Arc::clone(cached.get_or_init(|| instance)))
            }
        }
    }

    fn construct(
        &self,
        type_id: TypeId,
        type_name: &'static str,
        factory: &FactoryFn,
    ) -> Result<AnyArc> {
        let _guard = ConstructionGuard::enter(self, type_id, type_name)?;
        factory(self)
    }
}

/// Marks a type as under construction on the current thread until dropped.
struct ConstructionGuard<'a> {
    container: &'a Container,
    thread: ThreadId,
}

impl<'a> ConstructionGuard<'a> {
    fn enter(container: &'a Container, type_id: TypeId, type_name: &'static str) -> Result<Self> {
        let thread = thread::current().id();
        let mut stack = container.in_flight.entry(thread).or_default();

        if let Some(pos) = stack.iter().position(|(id, _)| *id == type_id) {
            let cycle = stack[pos..]
                .iter()
                .map(|(_, name)| *name)
                .chain(std::iter::once(type_name))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(ReportError::CircularDependency { cycle });
        }

        stack.push((type_id, type_name));
        Ok(Self { container, thread })
    }
}

impl Drop for ConstructionGuard<'_> {
    fn drop(&mut self) {
        if let Some(mut stack) = self.container.in_flight.get_mut(&self.thread) {
            stack.pop();
        }
    }
}
