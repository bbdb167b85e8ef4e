//! Binding entry point.

use tracing::{debug, info};

use crate::binder::{self, BindContext};
use crate::descriptor::DescriptorKind;
use crate::error::BindErrors;
use crate::field::Bindable;
use crate::filesystem::FileSystem;
use crate::source::{ArgumentStore, EnvironmentStore, SourceResolver};

/// Populates [`Bindable`] types from command-line arguments and environment
/// variables.
///
/// Fields are bound one kind at a time, in [`DescriptorKind::BIND_ORDER`],
/// and in declaration order within a kind. A failing field does not stop the
/// others; every failure is collected and returned together.
#[derive(Clone, Copy)]
pub struct ArgumentBinder<'a> {
    resolver: SourceResolver<'a>,
    filesystem: &'a dyn FileSystem,
}

impl<'a> ArgumentBinder<'a> {
    pub fn new(
        arguments: &'a dyn ArgumentStore,
        environment: &'a dyn EnvironmentStore,
        filesystem: &'a dyn FileSystem,
    ) -> Self {
        Self {
            resolver: SourceResolver::new(arguments, environment),
            filesystem,
        }
    }

    /// Binds a new default instance of `T`.
    ///
    /// # Errors
    ///
    /// Returns every error encountered, in binding order.
    pub fn bind<T: Bindable + Default>(&self) -> Result<T, BindErrors> {
        self.bind_into(T::default())
    }

    /// Binds the fields of an existing instance.
    ///
    /// Fields that fail to bind keep their previous value, but the instance
    /// is only returned if every field succeeded.
    ///
    /// # Errors
    ///
    /// Returns every error encountered, in binding order.
    #[tracing::instrument(skip_all, fields(target = T::type_name()))]
    pub fn bind_into<T: Bindable>(&self, mut instance: T) -> Result<T, BindErrors> {
        let context = BindContext {
            resolver: self.resolver,
            filesystem: self.filesystem,
        };
        let fields = T::fields();
        let mut errors = BindErrors::new();

        for kind in DescriptorKind::BIND_ORDER {
            for field in fields.iter().filter(|f| f.descriptor().kind() == kind) {
                debug!(field = field.name(), kind = %kind, "binding field");
                if let Err(e) = binder::bind_field(field, &mut instance, &context) {
                    debug!(field = field.name(), "failed to bind field: {}", e);
                    errors.push(e);
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        info!("bound {} field(s)", fields.len());
        Ok(instance)
    }

    /// Renders help text for `T`; see [`crate::describe::describe`].
    pub fn describe<T: Bindable>(task_description: &str) -> String {
        crate::describe::describe::<T>(task_description)
    }
}
