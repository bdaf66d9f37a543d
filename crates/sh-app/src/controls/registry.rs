use anyhow::Result;
use std::sync::Arc;
use tracing::debug;

use sh_core::control::{ControlFactory, ControlModel};
use sh_core::data::DataPackage;

use super::{FileControlFactory, ImageControlFactory, TextControlFactory};

/// Fixed set of control factories, ordered by ascending priority.
///
/// The order is computed once at construction. Factories with equal priority
/// keep their registration order.
pub struct ControlFactoryRegistry {
    factories: Vec<Arc<dyn ControlFactory>>,
}

impl ControlFactoryRegistry {
    pub fn new(mut factories: Vec<Arc<dyn ControlFactory>>) -> Self {
        // stable: ties keep registration order
        factories.sort_by_key(|factory| factory.priority());
        Self { factories }
    }

    /// Registry with the file, image and text factories.
    pub fn with_default_factories() -> Self {
        let factories: Vec<Arc<dyn ControlFactory>> = vec![
            Arc::new(FileControlFactory),
            Arc::new(ImageControlFactory),
            Arc::new(TextControlFactory::default()),
        ];
        Self::new(factories)
    }

    pub fn factories(&self) -> &[Arc<dyn ControlFactory>] {
        &self.factories
    }

    /// First factory, in priority order, able to build a control for `package`.
    pub fn select(&self, package: &DataPackage) -> Option<&Arc<dyn ControlFactory>> {
        self.factories
            .iter()
            .find(|factory| factory.can_build_control(package))
    }

    /// Builds the control for `package`, or `None` when no factory matches.
    pub fn build_control(&self, package: &DataPackage) -> Result<Option<Box<dyn ControlModel>>> {
        let Some(factory) = self.select(package) else {
            debug!(items = package.len(), "No control factory matched package");
            return Ok(None);
        };

        let control = factory.build_control(package)?;
        debug!(
            priority = factory.priority(),
            control = control.name(),
            "Built control for package"
        );
        Ok(Some(control))
    }
}
