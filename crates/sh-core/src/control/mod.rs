//! Control abstractions.
//!
//! A control is the renderable representation of a whole [`DataPackage`].
//! The core never looks inside a [`ControlModel`]; it only decides which
//! [`ControlFactory`] builds it.
use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::data::DataPackage;

/// Opaque, renderable model produced from a package.
///
/// Implementors are built on the main thread and handed back to the
/// requesting task, hence `Send`.
pub trait ControlModel: Any + Send + fmt::Debug {
    /// Stable identifier used by the rendering layer to pick a widget.
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;
}

/// Knows how to build a control for packages of a particular shape.
pub trait ControlFactory: Send + Sync {
    /// Lower values are consulted first.
    fn priority(&self) -> i32;

    fn can_build_control(&self, package: &DataPackage) -> bool;

    /// Builds the control.
    ///
    /// Callers must only invoke this when [`can_build_control`] returned
    /// `true` for the same package.
    ///
    /// [`can_build_control`]: ControlFactory::can_build_control
    fn build_control(&self, package: &DataPackage) -> anyhow::Result<Box<dyn ControlModel>>;
}

/// A package paired with its control.
///
/// `control` is `None` when no factory recognised the package; the package
/// itself is still usable by actions.
#[derive(Debug)]
pub struct DataControlPackage {
    package: Arc<DataPackage>,
    control: Option<Box<dyn ControlModel>>,
}

impl DataControlPackage {
    pub fn new(package: Arc<DataPackage>, control: Option<Box<dyn ControlModel>>) -> Self {
        Self { package, control }
    }

    pub fn package(&self) -> &Arc<DataPackage> {
        &self.package
    }

    pub fn control(&self) -> Option<&dyn ControlModel> {
        self.control.as_deref()
    }

    pub fn has_control(&self) -> bool {
        self.control.is_some()
    }

    pub fn into_parts(self) -> (Arc<DataPackage>, Option<Box<dyn ControlModel>>) {
        (self.package, self.control)
    }
}
